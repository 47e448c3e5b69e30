//! 2D millimeter vectors for plotter motion code.

pub mod logging;
pub mod vector;

#[cfg(test)]
mod test_util;

pub use vector::{Labeled, Vector, add, length, scale, subtract};

/// Print a [`Vector`] on the debug stream, labeled with the source text of
/// the expression, e.g. `Vector pen = { x=1.50, y=-2.00 }`.
///
/// An explicit label can be given as a second argument.
#[macro_export]
macro_rules! vector_print {
    ($vec:expr $(,)?) => {
        $crate::Vector::print_labeled(&$vec, stringify!($vec))
    };
    ($vec:expr, $label:expr $(,)?) => {
        $crate::Vector::print_labeled(&$vec, $label)
    };
}
