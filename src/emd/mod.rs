//! Earth Mover's Distance through the transportation linear program.
//!
//! ## Stages
//!
//! - [`Samples`] → [`Distribution`] — count-normalized empirical distribution
//! - [`Distribution`] × [`Distribution`] → [`CostMatrix`] — `|x - y|` over supports
//! - [`Program`] — balanced transportation LP
//! - [`Solver`] — [`Simplex`] (external LP engine) or [`NorthWest`] (monotone coupling)
//! - [`Transportation`] — the solved [`Coupling`](crate::Coupling)
//! - [`Emd`] — distance, rescaled [`Plan`], raw values, [`Discrepancy`]s
//!
//! [`Pipeline`] wires the stages together; [`compute_emd`] runs it with the
//! default solver and configuration.
mod config;
mod cost;
mod discrepancy;
mod distribution;
mod northwest;
mod pipeline;
mod plan;
mod program;
mod reference;
mod result;
mod samples;
mod simplex;
mod solver;
mod transportation;

pub use config::*;
pub use cost::*;
pub use discrepancy::*;
pub use distribution::*;
pub use northwest::*;
pub use pipeline::*;
pub use plan::*;
pub use program::*;
pub use reference::*;
pub use result::*;
pub use samples::*;
pub use simplex::*;
pub use solver::*;
pub use transportation::*;
