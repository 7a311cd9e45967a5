use et0::{CsvHourlySource, CsvSink, Et0Error, Et0Pipeline, SeriesSink, SiteConfig};
use chrono::NaiveDate;
use std::path::Path;

#[tokio::main]
async fn main() -> Result<(), Et0Error> {
    let demo_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos");
    let config = SiteConfig::from_json_file(demo_dir.join("site.json")).await?;

    let pipeline = Et0Pipeline::from_config(&config);
    let source = CsvHourlySource::local(demo_dir.join("data"));

    let start = NaiveDate::from_ymd_opt(2022, 7, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2022, 7, 3).unwrap();
    let run = pipeline
        .run()
        .source(&source)
        .period((start, end))
        .call()
        .await?;

    for entry in &run.series {
        println!("{} {:.3} mm", entry.formatted_date(), entry.et0);
    }
    for skipped in &run.skipped {
        println!("{} skipped: {}", skipped.date, skipped.reason);
    }

    let output = std::env::temp_dir().join(format!("et0-{}.csv", config.site_id));
    CsvSink::new(&output).write(&run.series)?;
    println!("Wrote {:?}", output);

    Ok(())
}
