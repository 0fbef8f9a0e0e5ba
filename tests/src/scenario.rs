//! Scenario definitions.

use meshgram_graph::MeshGraph;
use meshgram_production::{EngineConfig, Production};

use crate::assertion::{Assertion, AssertionBuilder};
use crate::error::ScenarioResult;
use crate::runner::Runner;

/// What a step does to the current graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Find and apply one production.
    Apply(Production),
    /// Run the merge productions through the engine's conform loop.
    Conform,
}

/// A single step in a scenario.
#[derive(Debug)]
pub struct Step {
    pub name: String,
    pub action: Action,
    pub assertion: Assertion,
}

/// A named sequence of productions applied to a start graph.
#[derive(Debug)]
pub struct Scenario {
    name: String,
    start: Option<MeshGraph>,
    config: EngineConfig,
    steps: Vec<Step>,
}

impl Scenario {
    /// Create a new scenario with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            start: None,
            config: EngineConfig::default(),
            steps: Vec::new(),
        }
    }

    pub fn start(mut self, graph: MeshGraph) -> Self {
        self.start = Some(graph);
        self
    }

    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Apply `production` and check the result.
    pub fn step<F>(self, production: Production, f: F) -> Self
    where
        F: FnOnce(AssertionBuilder) -> AssertionBuilder,
    {
        self.push(Action::Apply(production), f)
    }

    /// Conform the current graph and check the result.
    pub fn conform<F>(self, f: F) -> Self
    where
        F: FnOnce(AssertionBuilder) -> AssertionBuilder,
    {
        self.push(Action::Conform, f)
    }

    fn push<F>(mut self, action: Action, f: F) -> Self
    where
        F: FnOnce(AssertionBuilder) -> AssertionBuilder,
    {
        let label = match action {
            Action::Apply(production) => production.to_string(),
            Action::Conform => "conform".to_string(),
        };
        let name = format!("{}#{}:{}", self.name, self.steps.len() + 1, label);
        self.steps.push(Step {
            name,
            action,
            assertion: f(AssertionBuilder::new()).build(),
        });
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn start_graph(&self) -> Option<&MeshGraph> {
        self.start.as_ref()
    }

    pub fn engine_config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Run every step, returning the final graph.
    pub fn run(&self) -> ScenarioResult<MeshGraph> {
        Runner::new(self)?.run()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_names() {
        let scenario = Scenario::new("refine")
            .step(Production::P1, |a| a.vertices(7))
            .conform(|a| a.duplicates(0));

        let names: Vec<&str> = scenario.steps().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["refine#1:P1", "refine#2:conform"]);
        assert_eq!(scenario.steps()[1].action, Action::Conform);
    }
}
