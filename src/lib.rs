//! Earth Mover's Distance between scalar sample sets.
//!
//! Samples are reduced to empirical distributions, paired through an
//! absolute-difference ground cost, and handed to a linear program solver as
//! a balanced transportation problem. The optimal objective is the
//! 1-Wasserstein distance; the optimal primal solution is the transport plan.
//!
//! ## Pipeline
//!
//! 1. [`Distribution`] — unique ascending support + count-normalized masses
//! 2. [`CostMatrix`] — `|x - y|` between every pair of support points
//! 3. [`Program`] — the transportation LP, dense and row-major
//! 4. [`Solver`] — external LP capability, classified by [`Solver::optimize`]
//! 5. [`Emd`] — distance, rescaled plan, and raw solver values
//!
//! ```no_run
//! let emd = emd_lp::compute_emd(&[1., 1., 2., 3.], &[6., 7., 8., 8.]).unwrap();
//! println!("{}", emd.distance());
//! ```

pub mod emd;
pub mod error;
pub mod transport;

pub use emd::*;
pub use error::*;
pub use transport::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Ground costs, objective values, and tolerances.
pub type Energy = f64;
/// Masses of empirical distributions and transport plans.
pub type Probability = f64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// NUMERICAL TOLERANCES
// Deviations beyond these are reported as discrepancies, never as errors.
// ============================================================================
/// Allowed drift of probability sums and raw plan marginals from their targets.
pub const TRANSPORT_TOLERANCE: Energy = 1e-6;
/// Allowed drift of rescaled (rounded) plan marginals from the sample counts.
/// Rounding every cell can move a marginal by up to half a unit per cell.
pub const RESCALE_TOLERANCE: Energy = 0.5;

// ============================================================================
// ARBITRARY SAMPLE GENERATION
// ============================================================================
/// Largest sample set produced by `Samples::random()`.
pub const SAMPLES_MAX_LEN: usize = 24;
/// Samples are drawn from integers in `[-SAMPLES_RANGE, SAMPLES_RANGE]`
/// so that repeated values are common.
pub const SAMPLES_RANGE: i32 = 8;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "demo")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
