pub mod dto;
pub mod error;
pub mod models;
pub mod services;
pub mod store;

pub use models::Assessment;
pub use store::AssessmentStore;
