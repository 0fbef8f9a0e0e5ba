//! Engine configuration.

use meshgram_pattern::TemplateStrategy;

use crate::MAX_MERGE_PASSES;

/// Configuration for [`crate::Engine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Upper bound on merge passes before conform gives up
    pub max_merge_passes: usize,
    /// Repeat merge productions until neither matches
    pub merge_to_fixpoint: bool,
    /// Search strategy for template productions
    pub template_strategy: TemplateStrategy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_merge_passes: MAX_MERGE_PASSES,
            merge_to_fixpoint: true,
            template_strategy: TemplateStrategy::Seeded,
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_merge_passes(mut self, passes: usize) -> Self {
        self.max_merge_passes = passes;
        self
    }

    pub fn with_merge_to_fixpoint(mut self, enabled: bool) -> Self {
        self.merge_to_fixpoint = enabled;
        self
    }

    pub fn with_template_strategy(mut self, strategy: TemplateStrategy) -> Self {
        self.template_strategy = strategy;
        self
    }

    /// Apply each merge production at most once per conform call.
    pub fn single_pass() -> Self {
        Self {
            merge_to_fixpoint: false,
            ..Self::default()
        }
    }

    /// Brute-force subset enumeration for template productions.
    pub fn exhaustive() -> Self {
        Self {
            template_strategy: TemplateStrategy::Exhaustive,
            ..Self::default()
        }
    }
}
