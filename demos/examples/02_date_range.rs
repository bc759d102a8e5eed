use kurssi::{DateRange, Kurssi};
use kurssi_demos::common::{fmt_ts, get_bundle};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let bundle = get_bundle("daily_long")?;
    let kurssi = Kurssi::builder().build()?;

    // One quarter of the daily fixture
    let range = DateRange::parse("2020-04-01", "2020-06-30")?;
    let report = kurssi.analyze_range(&bundle, &range)?;

    println!(
        "{} -> {}: {} days",
        fmt_ts(range.start_ms()),
        fmt_ts(range.end_ms()),
        report.days.len()
    );
    if let (Some(hi), Some(lo)) = (
        report.highest_price.pair(),
        report.lowest_price.pair(),
    ) {
        println!("High {:.2} on {}", hi.value, fmt_ts(hi.timestamp));
        println!("Low  {:.2} on {}", lo.value, fmt_ts(lo.timestamp));
    }

    // A single-day window degrades gracefully
    let one_day = DateRange::parse("2020-05-05", "2020-05-05")?;
    let report = kurssi.analyze_range(&bundle, &one_day)?;
    for w in &report.warnings {
        println!("warning: {w}");
    }
    Ok(())
}
