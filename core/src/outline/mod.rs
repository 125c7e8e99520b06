//! Document structure queries: symbols, folding, selection ranges and links.

mod folding;
mod links;
mod selection;
mod symbols;

#[cfg(test)]
mod outline_test;

pub use folding::*;
pub use links::*;
pub use selection::*;
pub use symbols::*;
