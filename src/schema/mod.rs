pub mod briefing;
pub mod conversion;
pub mod definition;
pub mod field;
pub mod step;

pub use conversion::*;
pub use definition::*;
pub use field::*;
pub use step::*;
