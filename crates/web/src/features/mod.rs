pub mod assessments;
pub mod stats;
