pub mod assessment;
pub mod stats;
