//! CSS subsystem: value normalization, rule storage, selector matching,
//! and cascade resolution.
//!
//! This is a deliberately scoped reimplementation of the pieces of CSS a
//! slide compiler needs, not a general engine. The supported selector
//! grammar is documented on [`selector::matches`], and unsupported value
//! syntax always degrades to "property left unset" rather than an error.

mod cascade;
mod rules;
pub mod selector;
pub mod value;

pub use cascade::StyleResolver;
pub use rules::{parse_declarations, CssDeclarationMap, CssRule, RuleStore, Specificity};
