//! Editor analyses over a parsed stylesheet: diagnostics and fixes, completion, hover.

mod completion;
mod diagnostics;
mod fixes;
mod hover;
mod specificity;

#[cfg(test)]
mod completion_test;
#[cfg(test)]
mod diagnostics_test;

pub use completion::*;
pub use diagnostics::*;
pub use fixes::*;
pub use hover::*;
pub use specificity::*;
