//! Category classification using regex keyword patterns.
//!
//! Each rule of the category table is compiled once into a case-insensitive,
//! word-boundary anchored alternation. Rules are tested in priority order and
//! the first one that matches decides the category.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use super::category::{Category, CategoryDescriptor, BASE_TECHNOLOGIES, CATEGORY_RULES};

/// Result of category classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Detected category
    pub category: Category,
    /// Features to put in the brief, in order
    pub features: Vec<String>,
    /// Base technologies followed by the category's extras
    pub technologies: Vec<String>,
    /// Keyword that selected the category (lowercased), if any
    pub matched_keyword: Option<String>,
}

impl AnalysisResult {
    /// Builds the result for a category from its static descriptor.
    pub fn for_category(category: Category, matched_keyword: Option<String>) -> Self {
        let descriptor = category.descriptor();
        Self {
            category,
            features: descriptor.features.iter().map(|f| f.to_string()).collect(),
            technologies: BASE_TECHNOLOGIES
                .iter()
                .chain(descriptor.technologies.iter())
                .map(|t| t.to_string())
                .collect(),
            matched_keyword,
        }
    }

    /// Display name of the detected category
    pub fn display_name(&self) -> &'static str {
        self.category.descriptor().display_name
    }
}

/// A category rule with its compiled keyword pattern
struct CompiledRule {
    category: Category,
    pattern: Regex,
}

// NOTE: expect() is fine here: the patterns are built from static, escaped keywords
static COMPILED_RULES: LazyLock<Vec<CompiledRule>> = LazyLock::new(|| {
    CATEGORY_RULES
        .iter()
        .map(|rule| CompiledRule {
            category: rule.category,
            pattern: keyword_pattern(rule),
        })
        .collect()
});

fn keyword_pattern(rule: &CategoryDescriptor) -> Regex {
    let alternation = rule
        .keywords
        .iter()
        .map(|keyword| regex::escape(keyword))
        .collect::<Vec<_>>()
        .join("|");

    // Unicode word boundaries: a keyword followed by a letter such as "é" is not a whole word
    Regex::new(&format!(r"(?i)\b(?:{})\b", alternation))
        .expect("Invalid regex: category keyword alternation")
}

/// Category classifier using the static rule table
pub struct CategoryClassifier {
    rules: &'static [CompiledRule],
}

impl Default for CategoryClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryClassifier {
    /// Create a classifier over the shared, compiled rule table
    pub fn new() -> Self {
        Self {
            rules: COMPILED_RULES.as_slice(),
        }
    }

    /// Classify a website idea. Never fails; unmatched text falls back to
    /// [`Category::General`].
    pub fn classify(&self, text: &str) -> AnalysisResult {
        for rule in self.rules {
            if let Some(m) = rule.pattern.find(text) {
                return AnalysisResult::for_category(rule.category, Some(m.as_str().to_lowercase()));
            }
        }

        AnalysisResult::for_category(Category::General, None)
    }
}
