mod config;
use akima_spline::AkimaInterpolator;
use config::{DEMO_CONFIG, DEMO_CONFIG_FILE};
use anyhow::{Context, Result};
use tracing_subscriber::{fmt, prelude::*};
use mimalloc::MiMalloc;
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;
fn init_logging() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing::level_filters::LevelFilter::INFO)
        .with(fmt::layer()
            .without_time()
            .with_target(false)
            .with_thread_names(false))
        .init();
    Ok(())
}
fn main() -> Result<()> {
    init_logging()?;
    let cfg = &*DEMO_CONFIG;
    tracing::info!(
        "Fitting {} samples ({} lookup, settings from {} or defaults)",
        cfg.x.len(), cfg.lookup, DEMO_CONFIG_FILE
    );
    let mut interp = AkimaInterpolator::with_options(cfg.options());
    interp.fit(&cfg.x, &cfg.y).context("Akima fit failed")?;
    let values = interp.evaluate(&cfg.queries).context("Akima evaluation failed")?;
    for (q, v) in cfg.queries.iter().zip(&values) {
        tracing::info!("{} -> {}", q, v);
        println!("{} {}", q, v);
    }
    Ok(())
}
