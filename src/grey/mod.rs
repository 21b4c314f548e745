//! Grey-system uncertainty whitening.
//!
//! Converts possibly-incomplete or uncertain criterion inputs into crisp
//! numbers. Raw shapes are classified exactly once at the boundary into a
//! closed [`GreyValue`] variant set; each variant then maps through a
//! fixed whitening curve (linear, exponential, logarithmic, or a tuned
//! fusion of the three).
//!
//! # References
//!
//! - Deng, J. (1982), "Control problems of grey systems"
//! - Liu & Lin (2006), "Grey Information: Theory and Practical Applications"

mod config;
mod types;
mod whitening;

pub use config::WhiteningConfig;
pub use types::{GreyValue, RawValue};
pub use whitening::Whitener;
