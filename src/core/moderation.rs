/// Default comparative polarity threshold below which content is blocked
pub const DEFAULT_BLOCK_THRESHOLD: f64 = -0.1;

/// Moderation gate over a comparative sentiment score
///
/// The gate holds a single scalar threshold. Content whose comparative
/// polarity falls strictly below the threshold is blocked; the boundary
/// value itself passes. Text analysis happens upstream in
/// `services::sentiment`; the gate only decides.
#[derive(Debug, Clone, Copy)]
pub struct ModerationGate {
    threshold: f64,
}

impl ModerationGate {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn with_default_threshold() -> Self {
        Self {
            threshold: DEFAULT_BLOCK_THRESHOLD,
        }
    }

    /// Whether content with the given comparative score must be blocked
    #[inline]
    pub fn is_blocked(&self, comparative: f64) -> bool {
        comparative < self.threshold
    }

    /// User-visible reason attached to a rejected submission
    pub fn rejection_message() -> &'static str {
        "Your submission was rejected because it appears to contain negative or hostile language. Please revise it and try again."
    }
}

impl Default for ModerationGate {
    fn default() -> Self {
        Self::with_default_threshold()
    }
}
