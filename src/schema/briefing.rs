//! The built-in marketing briefing form.
//!
//! Nine input steps followed by the review step. Labels and options are form data and
//! are kept in the language the form is filled in.

use super::definition::FormDefinition;
use super::field::{FieldDescriptor, FieldKind};
use super::step::StepDescriptor;
use crate::error::DefinitionError;

use FieldKind::*;

/// Notes field appended to every briefing step.
fn notes(name: &str) -> FieldDescriptor {
    FieldDescriptor::new(name, "Informações relevantes", TextArea)
}

/// Builds the step table of the briefing form.
pub fn briefing_steps() -> Vec<StepDescriptor> {
    vec![
        StepDescriptor::new(
            "company-info",
            "Informações da Empresa",
            vec![
                FieldDescriptor::new("companyName", "Nome da empresa", Text).required(),
                FieldDescriptor::new("segment", "Segmento de atuação", Text).required(),
                FieldDescriptor::new("marketTime", "Tempo de mercado", Text).required(),
                FieldDescriptor::new("location", "Localização e abrangência", Select)
                    .required()
                    .with_options(&["Local", "Regional", "Nacional", "Internacional"]),
                FieldDescriptor::new("responsible", "Responsável pelo marketing / decisor", Text)
                    .required(),
                FieldDescriptor::new("employeeCount", "Quantidade de funcionários", Number),
                FieldDescriptor::new("seasonality", "Sazonalidades (meses de alta/baixa)", TextArea),
                FieldDescriptor::new("lowSeasonRevenue", "Faturamento baixa temporada", Currency),
                FieldDescriptor::new("highSeasonRevenue", "Faturamento alta temporada", Currency),
                FieldDescriptor::new("whyCustomersBuy", "Por que o cliente compra de você?", TextArea),
                notes("relevantInfoCompany"),
            ],
        ),
        StepDescriptor::new(
            "agency-objectives",
            "Objetivos com a Agência",
            vec![
                FieldDescriptor::new("expectations", "O que espera com nosso trabalho?", TextArea)
                    .required(),
                FieldDescriptor::new("problemsToSolve", "Problemas a resolver", TextArea),
                FieldDescriptor::new("expectedResults", "Metas/resultados esperados", TextArea),
                FieldDescriptor::new("idealDeadline", "Prazo ideal", Text),
                FieldDescriptor::new("priorities", "Prioridades", Checkboxes)
                    .with_options(&[
                        "Conhecer clientes",
                        "Aumentar vendas",
                        "Reconhecimento de marca",
                        "Melhorar presença digital",
                        "Lançar novo produto/serviço",
                    ])
                    .with_other(),
                notes("relevantInfoObjectives"),
            ],
        ),
        StepDescriptor::new(
            "history",
            "Histórico",
            vec![
                FieldDescriptor::new("previousResultsPeriod", "Resultados anteriores (Histórico)", Select)
                    .with_options(&["1 a 3 meses", "3 a 6 meses", "1 ano ou mais"]),
                FieldDescriptor::new("resultSatisfaction", "Satisfação com o resultado", Select)
                    .with_options(&["Sim", "Não"]),
                FieldDescriptor::new(
                    "paidTrafficInvestment",
                    "Já investe em tráfego pago? Quanto?",
                    Currency,
                ),
                FieldDescriptor::new("knowsCPA", "Sabe o que é CPA?", Select)
                    .with_options(&["Sim", "Não", "Mais ou menos"]),
                FieldDescriptor::new("adPlatformsUsed", "Plataformas de anúncio já usadas", Text),
                FieldDescriptor::new(
                    "existingSalesStrategies",
                    "Estratégias de vendas existentes",
                    TextArea,
                ),
                notes("relevantInfoHistory"),
            ],
        ),
        StepDescriptor::new(
            "current-channels",
            "Canais Atuais",
            vec![
                FieldDescriptor::new("channelsUsed", "Canais utilizados", Checkboxes)
                    .with_options(&["Instagram", "Site", "LP", "TikTok", "LinkedIn"])
                    .with_other(),
                FieldDescriptor::new("contentFrequencyType", "Frequência e tipo de conteúdo", TextArea),
                notes("relevantInfoChannels"),
            ],
        ),
        StepDescriptor::new(
            "desired-services",
            "Serviços Desejados",
            vec![
                FieldDescriptor::new("desiredServices", "Serviços desejados", Checkboxes)
                    .with_options(&[
                        "Social Media",
                        "Tráfego Pago",
                        "Branding/Identidade Visual",
                        "Estratégia e Consultoria",
                        "Automação personalizada",
                        "Site",
                        "LP",
                    ])
                    .with_other(),
                FieldDescriptor::new("desiredInvestment", "Investimento desejável", Currency)
                    .required(),
                notes("relevantInfoServices"),
            ],
        ),
        StepDescriptor::new(
            "urgency-expectations",
            "Urgência",
            vec![
                FieldDescriptor::new("idealStartDate", "Prazo ideal para começar", Text),
                FieldDescriptor::new("expectedROI", "Expectativa de ROI", Text),
                FieldDescriptor::new("plannedCampaign", "Campanha/lançamento previsto", TextArea),
                notes("relevantInfoUrgency"),
            ],
        ),
        StepDescriptor::new(
            "competition",
            "Concorrência",
            vec![
                FieldDescriptor::new("referenceCompany", "Empresa de referência", Text),
                FieldDescriptor::new("competitorOne", "Concorrente 1", Text),
                FieldDescriptor::new("competitorTwo", "Concorrente 2", Text),
                notes("relevantInfoCompetition"),
            ],
        ),
        StepDescriptor::new(
            "commercial-info",
            "Informações Comerciais",
            vec![
                FieldDescriptor::new("salespeople", "Quantos vendedores", Number),
                FieldDescriptor::new(
                    "averageTicketPerSalesperson",
                    "Ticket médio por vendedor",
                    Currency,
                ),
                FieldDescriptor::new("averageProfitMargin", "Margem média de lucro", Percentage),
                FieldDescriptor::new("averageMonthlySales", "Vendas médias/mês", Currency),
                FieldDescriptor::new(
                    "unfinishedNegotiations",
                    "Negociações não finalizadas/mês",
                    Number,
                ),
                FieldDescriptor::new("averageClosingCycle", "Ciclo médio de fechamento", Select)
                    .with_options(&["Dias", "Semanas", "Meses"]),
                notes("relevantInfoCommercial"),
            ],
        ),
        StepDescriptor::new(
            "models-projections",
            "Modelos em Alta & Projeções",
            vec![
                FieldDescriptor::new("championModel", "Modelo campeão", Text),
                FieldDescriptor::new("currentRevenue", "Faturamento atual", Currency),
                FieldDescriptor::new(
                    "expected6MonthRevenue",
                    "Faturamento esperado 6 meses",
                    Currency,
                ),
                FieldDescriptor::new(
                    "expected12MonthRevenue",
                    "Faturamento esperado 12 meses",
                    Currency,
                ),
                notes("relevantInfoModels"),
            ],
        ),
        StepDescriptor::review("review", "Revisão & Envio")
            .with_description("Revise todas as informações antes de enviar o briefing."),
    ]
}

/// The briefing form as a validated definition.
pub fn briefing_form() -> Result<FormDefinition, DefinitionError> {
    FormDefinition::new(briefing_steps())
}
