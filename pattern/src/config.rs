//! Configuration for shape matching

/// How a template variable that appears more than once in a single
/// constraint is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RepeatPolicy {
    /// The size at the highest position wins; earlier sizes are overwritten.
    #[default]
    LastWins,
    /// Every occurrence must resolve to the same size.
    Consistent,
}

/// Configuration for shape matching
#[derive(Debug, Clone, Default)]
pub struct MatchConfig {
    /// Treatment of repeated variables within one constraint
    pub repeat_policy: RepeatPolicy,
}

impl MatchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_repeat_policy(mut self, policy: RepeatPolicy) -> Self {
        self.repeat_policy = policy;
        self
    }

    /// Cross-check repeated variables inside a single constraint as well.
    pub fn strict() -> Self {
        Self {
            repeat_policy: RepeatPolicy::Consistent,
        }
    }
}
