//! Search Navigation
//!
//! Case-insensitive name search over the document sequence with a cyclic
//! cursor for the previous/next controls.

mod navigator;

pub use navigator::SearchNavigator;
