//! Optimal transport abstractions.
//!
//! These traits describe a transport problem independently of how it is
//! solved: a [`Density`] on each side, a [`Measure`] giving the ground cost
//! between their [`Support`]s, and a [`Coupling`] that moves mass between
//! them at minimal total cost.
mod coupling;
mod density;
mod measure;
mod support;

pub use coupling::*;
pub use density::*;
pub use measure::*;
pub use support::*;
