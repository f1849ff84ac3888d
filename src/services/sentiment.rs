/// Comparative polarity analyzer
///
/// Thin wrapper around the AFINN-165 based `sentiment` crate. The analyzer
/// reports the comparative score (word polarity sum normalized by token
/// count, roughly -1..+1); the moderation gate thresholds on that value.
#[derive(Debug, Clone, Copy, Default)]
pub struct SentimentAnalyzer;

impl SentimentAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Comparative polarity of the text; more negative means more hostile
    pub fn comparative(&self, text: &str) -> f64 {
        sentiment::analyze(text.to_string()).comparative as f64
    }
}
