use kurssi::{Extremum, Kurssi};
use kurssi_demos::common::{fmt_ts, get_bundle};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let bundle = get_bundle("hourly_sparse_day")?;
    let kurssi = Kurssi::builder().build()?;
    let report = kurssi.analyze(&bundle)?;

    println!(
        "{} samples classified as {} -> {} days",
        bundle.len(),
        report.granularity,
        report.days.len()
    );

    let trend = report.downward_trend;
    match (trend.start, trend.end) {
        (Some(start), Some(end)) => println!(
            "Longest downward trend: {} days ({} -> {})",
            trend.length,
            fmt_ts(start.timestamp),
            fmt_ts(end.timestamp)
        ),
        _ => println!("No downward trend"),
    }

    if let Extremum::At(vol) = report.highest_volume {
        println!(
            "Highest trading volume: {:.0} on {}",
            vol.value,
            fmt_ts(vol.timestamp)
        );
    }

    if let Some(pair) = report.buy_sell {
        if pair.is_profitable() {
            println!(
                "Buy {} at {:.2}, sell {} at {:.2} (+{:.2}, {:.2}%)",
                fmt_ts(pair.buy.timestamp),
                pair.buy.value,
                fmt_ts(pair.sell.timestamp),
                pair.sell.value,
                pair.max_profit,
                pair.percent
            );
        } else {
            println!("Price only decreased; do not buy");
        }
    }

    for w in &report.warnings {
        println!("warning: {w}");
    }
    Ok(())
}
