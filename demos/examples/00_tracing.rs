use kurssi::Kurssi;
use kurssi_demos::common::get_bundle;
use tracing_subscriber::fmt::format::FmtSpan;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize a human-friendly tracing subscriber with env-based filtering.
    // Suggested: RUST_LOG=info,kurssi=debug,kurssi_core=trace
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let kurssi = Kurssi::builder().build()?;

    // Each granularity exercises a different path through the aligner
    for name in ["five_minute_1d", "hourly_3d", "daily_long"] {
        let bundle = get_bundle(name)?;
        let report = kurssi.analyze(&bundle)?;
        tracing::info!(
            fixture = name,
            granularity = %report.granularity,
            days = report.days.len(),
            "analyzed"
        );
    }

    Ok(())
}
