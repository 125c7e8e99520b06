//! CSS language intelligence: scanning, parsing and editor analyses.
//!
//! Every query is a pure function of the source text, its parsed [`ast::Stylesheet`]
//! and, where custom properties cross files, a caller-supplied
//! [`vars::VariableResolver`].

pub mod analysis;
pub mod ast;
pub mod color;
pub mod data;
pub mod format;
pub mod outline;
pub mod token;
pub mod util;
pub mod vars;
