use clap::{Parser, Subcommand};
use stepform::export::write_export;
use stepform::format::{self, ReviewFormatter};
use stepform::prelude::*;
use stepform::schema::RawForm;
use stepform::transport::{DEFAULT_WEBHOOK_URL, WebhookTransport};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Fill, review and submit a multi-step form from the terminal
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory holding the saved draft
    #[arg(long, env = "STEPFORM_STORAGE_DIR", default_value = ".stepform")]
    storage_dir: PathBuf,

    /// Path to a JSON form definition (defaults to the built-in briefing form)
    #[arg(long)]
    form: Option<PathBuf>,

    /// Webhook the finished form is posted to
    #[arg(long, env = "STEPFORM_WEBHOOK_URL", default_value = DEFAULT_WEBHOOK_URL)]
    webhook: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fill the form interactively (default)
    Fill,
    /// List the steps and their fields
    Steps,
    /// Print the review screen for the saved draft
    Review,
    /// Validate every step of the saved draft
    Check,
    /// Write the saved draft as indented JSON
    Export {
        /// Directory to write the export file into
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },
    /// Submit the saved draft to the webhook
    Submit,
    /// Delete the saved draft
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let definition = load_definition(cli.form.as_ref());
    let store = DraftStore::new(FileStorage::new(cli.storage_dir.clone()));
    let mut engine = FormEngine::builder(definition).with_store(store).build();

    match cli.command.unwrap_or(Command::Fill) {
        Command::Fill => run_interactive(&mut engine, &cli.webhook).await,
        Command::Steps => print_steps(&engine),
        Command::Review => println!(
            "{}",
            ReviewFormatter::render_text(engine.definition(), engine.draft())
        ),
        Command::Check => run_check(&engine),
        Command::Export { dir } => run_export(&engine, dir),
        Command::Submit => run_submit(&mut engine, &cli.webhook).await,
        Command::Reset { yes } => {
            if yes || confirm("Clear all saved answers? This cannot be undone.") {
                engine.reset();
                println!("Draft cleared.");
            }
        }
    }
}

fn load_definition(path: Option<&PathBuf>) -> FormDefinition {
    let Some(path) = path else {
        return briefing_form()
            .unwrap_or_else(|e| exit_with_error(&format!("Built-in form is invalid: {}", e)));
    };
    let json = fs::read_to_string(path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read form file '{}': {}",
            path.display(),
            e
        ))
    });
    RawForm::from_json(&json)
        .and_then(IntoForm::into_form)
        .unwrap_or_else(|e| exit_with_error(&format!("Invalid form definition: {}", e)))
}

fn print_steps(engine: &FormEngine) {
    for (i, step) in engine.definition().steps().iter().enumerate() {
        println!("{:>2}. {} ({})", i + 1, step.title, step.id);
        for field in &step.fields {
            let marker = if field.required { " *" } else { "" };
            println!("      - {} [{}]{}", field.name, field.kind, marker);
        }
    }
}

fn run_check(engine: &FormEngine) {
    let failing = stepform::validation::validate_all(engine.definition(), engine.draft());
    if failing.is_empty() {
        println!("All steps are complete.");
        return;
    }
    for (step, errors) in &failing {
        let title = &engine.definition().steps()[*step].title;
        println!("[{}] {}", step + 1, title);
        for error in errors.iter() {
            println!("  {}: {}", error.field, error.message);
        }
    }
    std::process::exit(1);
}

fn run_export(engine: &FormEngine, dir: PathBuf) {
    let snapshot = engine.export_snapshot();
    match write_export(&dir, &snapshot) {
        Ok(path) => println!("Exported {} answers to '{}'", snapshot.len(), path.display()),
        Err(e) => exit_with_error(&format!("Export failed: {}", e)),
    }
}

/// Walks the saved draft up to the review step and submits it.
async fn run_submit(engine: &mut FormEngine, webhook: &str) {
    while !engine.is_review_step() {
        if let Advance::Blocked { errors, .. } = engine.advance() {
            let title = &engine.current_step_descriptor().title;
            eprintln!("Step '{}' is incomplete:", title);
            for error in errors.iter() {
                eprintln!("  {}: {}", error.field, error.message);
            }
            std::process::exit(1);
        }
    }
    submit(engine, webhook).await;
}

async fn submit(engine: &mut FormEngine, webhook: &str) {
    let transport = WebhookTransport::new(webhook)
        .unwrap_or_else(|e| exit_with_error(&format!("Could not create HTTP client: {}", e)));
    println!("Sending...");
    match engine.submit(&transport).await {
        Ok(record) => println!("Form sent with {} answers. Thank you!", record.len()),
        Err(e) => eprintln!("{}", e),
    }
}

/// Runs the terminal renderer: one screen per step, answers saved as they are typed.
async fn run_interactive(engine: &mut FormEngine, webhook: &str) {
    println!("--- Stepform Interactive Mode ---");
    println!("Press Enter to keep an answer, type '-' to clear it.");

    while !engine.is_submitted() {
        print_sidebar(engine);

        if engine.is_review_step() {
            println!(
                "\n{}",
                ReviewFormatter::render_text(engine.definition(), engine.draft())
            );
        } else {
            fill_current_step(engine);
        }

        let action = prompt_for_input(
            "[n]ext, [b]ack, [g]oto <step>, [e]xport, [r]eset, [s]ubmit, [q]uit",
            Some("n"),
        );
        let mut parts = action.split_whitespace();
        match parts.next().unwrap_or("n") {
            "n" => {
                if let Advance::Blocked { focus, errors } = engine.advance() {
                    println!("\n{} field(s) need attention, starting at '{}'.", errors.len(), focus);
                }
            }
            "b" => {
                engine.retreat();
            }
            "g" => {
                let target = parts.next().and_then(|s| s.parse::<usize>().ok());
                match target {
                    Some(n) if n >= 1 && engine.jump_to(n - 1) => {}
                    _ => println!("Only steps up to the current one can be opened."),
                }
            }
            "e" => run_export(engine, PathBuf::from(".")),
            "r" => {
                if confirm("Clear all answers? This cannot be undone.") {
                    engine.reset();
                }
            }
            "s" => {
                if engine.is_review_step() {
                    submit(engine, webhook).await;
                } else {
                    println!("Finish the remaining steps first.");
                }
            }
            "q" => return,
            other => println!("Unknown action '{}'.", other),
        }
    }
}

fn print_sidebar(engine: &FormEngine) {
    println!(
        "\nStep {} of {} ({:.0}%)",
        engine.current_step() + 1,
        engine.step_count(),
        engine.progress()
    );
    for (i, (step, status)) in engine.step_statuses().into_iter().enumerate() {
        let marker = match status {
            StepStatus::Completed => "✓",
            StepStatus::Current => ">",
            StepStatus::Locked => " ",
        };
        println!("  {} {:>2}. {}", marker, i + 1, step.title);
    }
}

fn fill_current_step(engine: &mut FormEngine) {
    let step = engine.current_step_descriptor().clone();
    println!("\n== {} ==", step.title);
    if let Some(description) = &step.description {
        println!("{}", description);
    }

    for field in &step.fields {
        let current = ReviewFormatter::display_value(field, engine.value(&field.name));
        let marker = if field.required { " *" } else { "" };
        println!("\n{}{}", field.label, marker);
        if let Some(error) = engine.errors().get(&field.name) {
            println!("  ! {}", error);
        }
        for (i, option) in field.options.iter().enumerate() {
            println!("  {}) {}", i + 1, option);
        }

        let raw = prompt_for_input(field.placeholder.as_deref().unwrap_or("answer"), Some(&current));
        if raw == current {
            continue;
        }
        if raw == "-" {
            report(engine.clear_field(&field.name));
            continue;
        }
        match parse_answer(field, &raw, engine.value(&field.name)) {
            Some(value) => report(engine.update(&field.name, value)),
            None => println!("  Could not understand '{}', answer kept.", raw),
        }
    }
}

/// Converts typed text into a value of the field's kind.
fn parse_answer(
    field: &FieldDescriptor,
    raw: &str,
    current: Option<&FieldValue>,
) -> Option<FieldValue> {
    match field.kind {
        FieldKind::Text | FieldKind::TextArea => Some(FieldValue::text(raw)),
        FieldKind::Number => raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .map(FieldValue::Number),
        FieldKind::Currency | FieldKind::Percentage => {
            let (value, display) = format::normalize(field.kind, raw)?;
            println!("  -> {}", display);
            Some(FieldValue::Number(value))
        }
        FieldKind::Select => pick_option(field, raw.trim()).map(FieldValue::text),
        FieldKind::Checkboxes => {
            let mut selection = Selection::default();
            for token in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
                selection.select(pick_option(field, token)?);
            }
            if field.allows_free_other {
                let previous = current
                    .and_then(FieldValue::as_selection)
                    .and_then(|s| s.other.clone())
                    .unwrap_or_default();
                selection.set_other(&prompt_for_input("Other (blank for none)", Some(&previous)));
            }
            Some(FieldValue::Selection(selection))
        }
    }
}

/// Accepts either a 1-based option number or the option text.
fn pick_option<'a>(field: &'a FieldDescriptor, token: &str) -> Option<&'a str> {
    if let Ok(n) = token.parse::<usize>() {
        return field.options.get(n.checked_sub(1)?).map(String::as_str);
    }
    field
        .options
        .iter()
        .find(|o| o.eq_ignore_ascii_case(token))
        .map(String::as_str)
}

fn report(result: Result<(), UpdateError>) {
    if let Err(e) = result {
        println!("  {}", e);
    }
}

fn confirm(question: &str) -> bool {
    prompt_for_input(&format!("{} [y/N]", question), None).eq_ignore_ascii_case("y")
}

/// A helper function to prompt the user and read a line of input.
/// Closed input ends the program; answers already given are saved.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let default_prompt = default
        .filter(|d| !d.is_empty())
        .map_or(String::new(), |d| format!(" [{}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    if let Err(e) = io::stdout().flush() {
        exit_with_error(&format!("Failed to write prompt: {}", e));
    }
    let line = match read_answer(&mut io::stdin().lock()) {
        Ok(Some(line)) => line,
        Ok(None) => {
            println!("\nInput closed, draft saved.");
            std::process::exit(0);
        }
        Err(e) => exit_with_error(&format!("Failed to read line: {}", e)),
    };

    if line.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        line
    }
}

/// Reads one trimmed line, or `None` once the input is exhausted.
fn read_answer(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_answer_stops_at_end_of_input() {
        let mut input = io::Cursor::new("  n \n\n");
        assert_eq!(read_answer(&mut input).unwrap(), Some("n".to_string()));
        assert_eq!(read_answer(&mut input).unwrap(), Some(String::new()));
        assert_eq!(read_answer(&mut input).unwrap(), None);
    }

    #[test]
    fn test_number_answers_must_be_finite() {
        let field = FieldDescriptor::new("employeeCount", "Employees", FieldKind::Number);
        assert_eq!(parse_answer(&field, "12", None), Some(FieldValue::Number(12.0)));
        assert_eq!(parse_answer(&field, "nan", None), None);
        assert_eq!(parse_answer(&field, "inf", None), None);
    }
}
