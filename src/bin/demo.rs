//! EMD Demo Binary
//!
//! Solves the transportation LP for two fixed sample sets and prints the
//! distance, the rescaled plan, and the closed-form distance beside it.

use emd_lp::*;

fn main() -> anyhow::Result<()> {
    log();
    let a = [1., 1., 2., 2., 2., 3., 3., 3.];
    let b = [6., 6., 7., 8., 8., 8., 9., 9.];
    let emd = Pipeline::<Simplex>::default()
        .with_config(Config::from_env())
        .compute(&a, &b)?;
    let reference = wasserstein_samples(&a, &b)?;
    log::info!("a: {}", Samples::from(&a[..]));
    log::info!("b: {}", Samples::from(&b[..]));
    println!("{}", emd);
    println!("reference {:.6}", reference);
    println!("{}", emd.plan());
    println!("{}", serde_json::to_string_pretty(&emd)?);
    Ok(())
}
