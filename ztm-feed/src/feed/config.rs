//! Parser configuration.

/// Options controlling how tolerant parsing reports what it finds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedConfig {
    /// Compare each section's declared count with the records parsed from it
    /// and report disagreements as warnings.
    pub verify_record_counts: bool,

    /// Attach each route block to the variant declared at the same position.
    /// When disabled, sequences are identified by ordinal only.
    pub join_sequences: bool,
}

impl FeedConfig {
    /// Create a new configuration with the given options.
    pub fn new(verify_record_counts: bool, join_sequences: bool) -> Self {
        Self {
            verify_record_counts,
            join_sequences,
        }
    }

    /// Enable or disable declared-count checks.
    pub fn with_record_count_checks(mut self, enabled: bool) -> Self {
        self.verify_record_counts = enabled;
        self
    }

    /// Enable or disable attaching route blocks to variants.
    pub fn with_sequence_join(mut self, enabled: bool) -> Self {
        self.join_sequences = enabled;
        self
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            verify_record_counts: true,
            join_sequences: true,
        }
    }
}
