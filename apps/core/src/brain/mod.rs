//! # Brain Module
//!
//! Keyword-driven analysis of website ideas. No NLP, no I/O.
//!
//! ## Components
//! - `category`: static category table, in priority order
//! - `classifier`: regex keyword classification (first match wins)
//! - `brief`: brief rendering and word-count metadata
//! - `improver`: pipeline used by the HTTP layer

pub mod brief;
pub mod category;
pub mod classifier;
pub mod improver;

pub use brief::{word_count, Brief, BriefAssembler, BriefMetadata};
pub use category::{Category, CategoryDescriptor, BASE_TECHNOLOGIES, CATEGORY_RULES};
pub use classifier::{AnalysisResult, CategoryClassifier};
pub use improver::PromptImprover;
