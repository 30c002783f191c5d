//! Brief assembly.
//!
//! Renders the structured project brief from a classification result and
//! computes its metadata. Everything except the category name, the original
//! idea, the feature list and the technology list is fixed boilerplate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::classifier::AnalysisResult;

const DESCRIPTION_TAIL: &str = "that provides an exceptional user experience. \
The application should be scalable, maintainable, and follow industry best practices.";

const TECHNICAL_REQUIREMENTS: &str = "## Technical Requirements

### Frontend
- **Framework**: Vue.js 3 with Composition API
- **Styling**: Modern CSS with Tailwind CSS or custom design system
- **State Management**: Pinia or Vuex for complex state
- **Routing**: Vue Router for SPA navigation
- **UI Components**: Reusable, accessible components

### Backend
- **Framework**: Laravel 10+ with RESTful API architecture
- **Database**: MySQL/PostgreSQL with proper indexing
- **Authentication**: Laravel Sanctum or Passport
- **Validation**: Form Request validation for all inputs
- **Testing**: PHPUnit tests for critical functionality

";

const GUIDELINES: &str = "## Design Guidelines
- **Aesthetic**: Modern, clean, and professional design
- **Color Scheme**: Choose a harmonious palette that reflects the brand
- **Typography**: Use readable fonts like Inter, Roboto, or similar
- **Animations**: Smooth, purposeful micro-interactions
- **Responsive**: Mobile-first approach, perfect on all devices
- **Accessibility**: WCAG 2.1 AA compliance

## User Experience
- Intuitive navigation with clear information architecture
- Fast loading times (aim for <2s initial load)
- Clear feedback for all user actions
- Error handling with helpful, user-friendly messages
- Seamless flow from landing to conversion

## Development Priorities
1. Core functionality and user flows
2. Responsive design implementation
3. Performance optimization
4. Security best practices
5. Testing and quality assurance

## Success Metrics
- User engagement and retention rates
- Page load performance scores
- Conversion rate (if applicable)
- Code quality and maintainability
- User satisfaction feedback";

/// Metadata stored alongside every brief
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BriefMetadata {
    /// Whitespace-delimited words in the original idea
    pub original_word_count: usize,
    /// Whitespace-delimited words in the rendered brief
    pub improved_word_count: usize,
    /// Display name of the detected category
    pub category: String,
    pub suggested_technologies: Vec<String>,
    pub processed_at: DateTime<Utc>,
}

/// A rendered brief and its metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brief {
    pub original: String,
    pub document: String,
    pub metadata: BriefMetadata,
}

/// Counts whitespace-delimited tokens.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Upper-cases the first character, leaving the rest untouched.
fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Renders briefs from classification results
#[derive(Debug, Default, Clone, Copy)]
pub struct BriefAssembler;

impl BriefAssembler {
    pub fn new() -> Self {
        Self
    }

    /// Assemble a brief stamped with the current time
    pub fn assemble(&self, original: &str, analysis: &AnalysisResult) -> Brief {
        self.assemble_at(original, analysis, Utc::now())
    }

    /// Assemble a brief stamped with `processed_at`
    pub fn assemble_at(
        &self,
        original: &str,
        analysis: &AnalysisResult,
        processed_at: DateTime<Utc>,
    ) -> Brief {
        let document = self.render(original, analysis);

        let metadata = BriefMetadata {
            original_word_count: word_count(original),
            improved_word_count: word_count(&document),
            category: analysis.display_name().to_string(),
            suggested_technologies: analysis.technologies.clone(),
            processed_at,
        };

        Brief {
            original: original.to_string(),
            document,
            metadata,
        }
    }

    /// Render the brief document
    pub fn render(&self, original: &str, analysis: &AnalysisResult) -> String {
        let display_name = analysis.display_name();
        let mut doc = String::with_capacity(2048 + original.len());

        doc.push_str(&format!("# Project Brief: {}\n\n", capitalize_first(display_name)));

        doc.push_str("## Original Idea\n");
        doc.push_str(original);
        doc.push_str("\n\n");

        doc.push_str("## Enhanced Project Description\n");
        doc.push_str(&format!(
            "Build a modern, full-featured {} {}\n\n",
            display_name, DESCRIPTION_TAIL
        ));

        doc.push_str("## Key Features\n");
        for (index, feature) in analysis.features.iter().enumerate() {
            doc.push_str(&format!(
                "{}. **{}**: Implement a robust and user-friendly {} system\n",
                index + 1,
                feature,
                feature
            ));
        }
        doc.push('\n');

        doc.push_str(TECHNICAL_REQUIREMENTS);

        if !analysis.technologies.is_empty() {
            doc.push_str("### Additional Technologies\n");
            for technology in &analysis.technologies {
                doc.push_str(&format!("- {}\n", technology));
            }
            doc.push('\n');
        }

        doc.push_str(GUIDELINES);
        doc
    }
}
