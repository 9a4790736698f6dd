//! Compilation: slide boundary detection, block extraction, and inline
//! run building.

mod extract;
mod options;
mod runs;
mod text;

pub use extract::BlockExtractor;
pub use options::CompileOptions;
pub use runs::collect_runs;
pub use text::normalize_text;
