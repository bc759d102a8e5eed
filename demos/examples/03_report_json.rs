use kurssi::{AlignConfig, Kurssi};
use kurssi_demos::common::get_bundle;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let bundle = get_bundle("five_minute_1d")?;

    // Skipping is a speed knob only; the report is identical either way
    let eager = Kurssi::builder()
        .align_config(AlignConfig {
            skip_ahead_divisor: 0,
            ..AlignConfig::default()
        })
        .build()?;
    let lazy = Kurssi::builder().build()?;
    let a = eager.analyze(&bundle)?;
    let b = lazy.analyze(&bundle)?;
    assert_eq!(a, b);

    println!("{}", serde_json::to_string_pretty(&b)?);
    Ok(())
}
