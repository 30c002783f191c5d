//! Prompt Improver - ties classification and brief assembly together.

use tracing::info;

use super::brief::{Brief, BriefAssembler};
use super::classifier::CategoryClassifier;

/// Turns a rough website idea into a structured brief
#[derive(Default)]
pub struct PromptImprover {
    classifier: CategoryClassifier,
    assembler: BriefAssembler,
}

impl PromptImprover {
    pub fn new() -> Self {
        Self {
            classifier: CategoryClassifier::new(),
            assembler: BriefAssembler::new(),
        }
    }

    /// Trim, classify and render an idea
    pub fn improve(&self, idea: &str) -> Brief {
        let idea = idea.trim();
        let analysis = self.classifier.classify(idea);

        info!(
            category = analysis.category.label(),
            matched_keyword = analysis.matched_keyword.as_deref().unwrap_or("-"),
            "classified website idea"
        );

        self.assembler.assemble(idea, &analysis)
    }
}
