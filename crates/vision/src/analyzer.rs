use async_trait::async_trait;

use crate::analysis::SafetyAnalysis;
use crate::error::Result;

/// Maps raw image bytes to a structured fitness-for-duty judgement.
///
/// The web layer holds this behind a trait object so tests can substitute a
/// stub for the real Gemini client.
#[async_trait]
pub trait SafetyAnalyzer: Send + Sync {
    async fn analyze(&self, image: &[u8]) -> Result<SafetyAnalysis>;
}
