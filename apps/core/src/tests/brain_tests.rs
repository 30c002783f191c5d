//! Brain Module Tests
//!
//! Classification priority, brief structure and determinism across the
//! classifier, assembler and improver.

use crate::brain::{
    word_count, AnalysisResult, BriefAssembler, Category, CategoryClassifier, PromptImprover,
    CATEGORY_RULES,
};
use chrono::{TimeZone, Utc};

#[cfg(test)]
mod classifier_tests {
    use super::*;

    #[test]
    fn test_every_keyword_selects_its_category() {
        let classifier = CategoryClassifier::new();

        for rule in CATEGORY_RULES.iter() {
            for keyword in rule.keywords {
                let text = format!("I need a {} for my team", keyword);
                let result = classifier.classify(&text);
                assert_eq!(
                    result.category, rule.category,
                    "Expected {:?} for '{}'",
                    rule.category, text
                );
                assert_eq!(result.matched_keyword.as_deref(), Some(*keyword));
            }
        }
    }

    #[test]
    fn test_priority_order_breaks_ties() {
        let classifier = CategoryClassifier::new();

        let cases = vec![
            ("shop and blog", Category::Ecommerce),
            ("a blog with a shop", Category::Ecommerce),
            ("A simple personal blog about cooking", Category::Content),
            ("cooking recipes with a booking calendar", Category::Recipe),
            ("a marketing dashboard", Category::Analytics),
            ("a forum to schedule meetups", Category::Social),
            ("showcase my photography project on a landing page", Category::Portfolio),
        ];

        for (text, expected) in cases {
            assert_eq!(
                classifier.classify(text).category,
                expected,
                "Expected {:?} for '{}'",
                expected,
                text
            );
        }
    }

    #[test]
    fn test_keywords_inside_words_do_not_match() {
        let classifier = CategoryClassifier::new();

        for text in ["a bookstore locator", "shopping tips", "networking tips", "workshop notes"] {
            assert_eq!(
                classifier.classify(text).category,
                Category::General,
                "Expected General for '{}'",
                text
            );
        }
    }

    #[test]
    fn test_punctuation_is_a_boundary() {
        let classifier = CategoryClassifier::new();

        assert_eq!(classifier.classify("(shop) online!").category, Category::Ecommerce);
        assert_eq!(classifier.classify("news, weather, sports").category, Category::Content);
        assert_eq!(classifier.classify("hero-banner site").category, Category::Landing);
    }

    #[test]
    fn test_default_category() {
        let classifier = CategoryClassifier::new();

        let result = classifier.classify("helloworld");
        assert_eq!(result, AnalysisResult::for_category(Category::General, None));
        assert_eq!(result.display_name(), "general website");
        assert_eq!(result.features.len(), 5);
        assert_eq!(result.features[0], "Responsive design");
    }
}

#[cfg(test)]
mod brief_tests {
    use super::*;

    fn section<'a>(document: &'a str, heading: &str) -> Vec<&'a str> {
        document
            .lines()
            .skip_while(|line| *line != heading)
            .skip(1)
            .take_while(|line| !line.is_empty())
            .collect()
    }

    #[test]
    fn test_online_shop_example() {
        let improver = PromptImprover::new();

        let brief = improver.improve("I want to build an online shop for selling shoes");
        assert_eq!(brief.metadata.category, "e-commerce platform");
        assert!(brief.document.starts_with("# Project Brief: E-commerce platform\n"));
        assert!(brief.document.contains("**Product catalog**"));
        assert!(brief.document.contains("**Shopping cart**"));
        assert!(brief
            .metadata
            .suggested_technologies
            .contains(&"Stripe/PayPal".to_string()));
    }

    #[test]
    fn test_blog_about_cooking_example() {
        let improver = PromptImprover::new();

        let brief = improver.improve("A simple personal blog about cooking");
        assert_eq!(brief.metadata.category, "content management system");
        assert!(brief.document.contains("**Rich text editor**"));
        assert!(!brief.document.contains("**Recipe database**"));
    }

    #[test]
    fn test_original_appears_once() {
        let improver = PromptImprover::new();

        for idea in [
            "I want to build an online shop for selling shoes",
            "A neighbourhood tool library with reservation slots",
            "helloworld",
        ] {
            let brief = improver.improve(idea);
            assert_eq!(brief.document.matches(idea).count(), 1, "'{}'", idea);
        }
    }

    #[test]
    fn test_feature_numbering_matches_list() {
        let classifier = CategoryClassifier::new();
        let assembler = BriefAssembler::new();

        for text in ["a dashboard of sales", "helloworld", "a chat app for gamers"] {
            let analysis = classifier.classify(text);
            let document = assembler.render(text, &analysis);
            let lines = section(&document, "## Key Features");

            assert_eq!(lines.len(), analysis.features.len());
            for (index, (line, feature)) in lines.iter().zip(&analysis.features).enumerate() {
                assert!(
                    line.starts_with(&format!("{}. **{}**:", index + 1, feature)),
                    "unexpected feature line '{}'",
                    line
                );
            }
        }
    }

    #[test]
    fn test_custom_feature_list_is_rendered_in_order() {
        let mut analysis = AnalysisResult::for_category(Category::Landing, None);
        analysis.features = vec!["Zeta".to_string(), "Alpha".to_string()];

        let document = BriefAssembler::new().render("an idea worth sharing", &analysis);
        let lines = section(&document, "## Key Features");
        assert_eq!(
            lines,
            vec![
                "1. **Zeta**: Implement a robust and user-friendly Zeta system",
                "2. **Alpha**: Implement a robust and user-friendly Alpha system",
            ]
        );
    }

    #[test]
    fn test_sections_in_order() {
        let brief = PromptImprover::new().improve("a portfolio for my illustrations");
        let headings: Vec<&str> = brief
            .document
            .lines()
            .filter(|line| line.starts_with('#'))
            .collect();

        assert_eq!(
            headings,
            vec![
                "# Project Brief: Portfolio website",
                "## Original Idea",
                "## Enhanced Project Description",
                "## Key Features",
                "## Technical Requirements",
                "### Frontend",
                "### Backend",
                "### Additional Technologies",
                "## Design Guidelines",
                "## User Experience",
                "## Development Priorities",
                "## Success Metrics",
            ]
        );
    }

    #[test]
    fn test_technology_bullets() {
        let brief = PromptImprover::new().improve("a social network for climbers");
        assert_eq!(
            section(&brief.document, "### Additional Technologies"),
            vec!["- Vue.js", "- Laravel", "- Laravel WebSockets"]
        );
    }

    #[test]
    fn test_word_counts() {
        let brief = PromptImprover::new().improve("  a  meal   planner\tfor families ");
        assert_eq!(brief.metadata.original_word_count, 5);
        assert_eq!(brief.metadata.improved_word_count, word_count(&brief.document));
        assert_eq!(
            brief.metadata.improved_word_count,
            brief.document.split_whitespace().count()
        );
    }

    #[test]
    fn test_determinism_ignoring_timestamp() {
        let improver = PromptImprover::new();
        let idea = "An appointment scheduler for a small dental clinic";

        let first = improver.improve(idea);
        let second = improver.improve(idea);
        assert_eq!(first.original, second.original);
        assert_eq!(first.document, second.document);
        assert_eq!(first.metadata.original_word_count, second.metadata.original_word_count);
        assert_eq!(first.metadata.improved_word_count, second.metadata.improved_word_count);
        assert_eq!(first.metadata.category, second.metadata.category);
        assert_eq!(
            first.metadata.suggested_technologies,
            second.metadata.suggested_technologies
        );
    }

    #[test]
    fn test_fixed_timestamp_gives_identical_briefs() {
        let classifier = CategoryClassifier::new();
        let assembler = BriefAssembler::new();
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

        let analysis = classifier.classify("a campaign microsite");
        let first = assembler.assemble_at("a campaign microsite", &analysis, at);
        let second = assembler.assemble_at("a campaign microsite", &analysis, at);
        assert_eq!(first, second);
        assert_eq!(first.metadata.processed_at, at);
    }

    #[test]
    fn test_processed_at_serializes_as_rfc3339() {
        let analysis = CategoryClassifier::new().classify("helloworld");
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let brief = BriefAssembler::new().assemble_at("helloworld", &analysis, at);

        let json = serde_json::to_value(&brief.metadata).unwrap();
        assert_eq!(json["processed_at"], "2024-05-01T12:00:00Z");
        assert_eq!(json["category"], "general website");
        assert_eq!(json["original_word_count"], 1);
        assert_eq!(json["suggested_technologies"], serde_json::json!(["Vue.js", "Laravel"]));
    }
}
