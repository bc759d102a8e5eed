use kurssi::{KurssiError, TimeSeriesBundle};
use kurssi_mock::MockFeed;

/// Return a bundle for demos.
///
/// Reads the provider JSON payload at `KURSSI_DEMO_INPUT` when set, otherwise
/// serves the named mock fixture.
///
/// # Errors
/// Returns `Data` if the file cannot be read or decoded, or `InvalidArg` if
/// `fixture` is not a known mock name.
pub fn get_bundle(fixture: &str) -> Result<TimeSeriesBundle, KurssiError> {
    if let Ok(path) = std::env::var("KURSSI_DEMO_INPUT") {
        println!("--- (Reading bundle from {path}) ---");
        let payload = std::fs::read_to_string(&path)
            .map_err(|e| KurssiError::data(format!("reading {path}: {e}")))?;
        return TimeSeriesBundle::from_json(&payload);
    }
    MockFeed::new().by_name(fixture).ok_or_else(|| {
        KurssiError::invalid_arg(format!(
            "unknown fixture '{fixture}'; expected one of {:?}",
            MockFeed::names()
        ))
    })
}

/// Format epoch milliseconds as a UTC timestamp.
#[must_use]
pub fn fmt_ts(ms: i64) -> String {
    chrono::DateTime::from_timestamp_millis(ms)
        .map_or_else(|| ms.to_string(), |dt| dt.format("%Y-%m-%d %H:%M UTC").to_string())
}
