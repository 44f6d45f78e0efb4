//! Individual polydivisibility algorithms.
//!
//! Most users should go through [`CheckPlanner`](crate::CheckPlanner), which picks the cheapest
//! algorithm that is correct for a given string length and rule.

mod big;
mod cyclic;
mod native;
mod reparse;

pub use self::big::Big;
pub use self::cyclic::{Cyclic, CYCLE_MODULUS};
pub use self::native::Native;
pub use self::reparse::Reparse;
