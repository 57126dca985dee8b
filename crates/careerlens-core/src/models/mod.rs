mod degradation_event;
mod document;
mod ranked_result;
mod records;
mod tables;

pub use degradation_event::DegradationEvent;
pub use document::{Corpus, Document};
pub use ranked_result::RankedResult;
pub use records::{OutcomeRecord, SalaryRecord, SupportRecord};
pub use tables::Tables;
