pub mod analysis;
pub mod analyzer;
pub mod error;
pub mod gemini;
pub mod image;
pub mod prompt;

pub use analysis::SafetyAnalysis;
pub use analyzer::SafetyAnalyzer;
pub use error::VisionError;
pub use gemini::GeminiClient;
