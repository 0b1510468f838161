//! The substitution engine for trac2md.
//!
//! This module holds:
//! - The fixed, ordered rule table (Trac wiki pattern -> Markdown template)
//! - The engine that compiles the table once and applies it per document

pub mod engine;
pub mod table;

pub use engine::{CompiledRule, RuleSet};
pub use table::RULES;
