//! Trac2md - CLI tool for converting Trac wiki markup to GitHub Flavored
//! Markdown.
//!
//! This library provides the core functionality for trac2md, including:
//! - The fixed, ordered substitution rule table
//! - The engine that applies it over a whole document in one pass
//! - Output-path derivation and per-file conversion
//!
//! # Example
//!
//! ```
//! use trac2md_cli::rules::RuleSet;
//!
//! let rules = RuleSet::compile().unwrap();
//! assert_eq!(rules.convert("== Section Title ==\n"), "## Section Title\n");
//! assert_eq!(rules.convert("{{{code here}}}"), "`code here`");
//! ```

pub mod error;
pub mod files;
pub mod rules;

pub use error::{Result, Trac2mdError};
