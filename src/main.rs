use std::path::Path;
use std::time::Instant;

use anyhow::{Context, bail};
use log::info;

use scan_revenue::{InMemoryStore, ReportConfig, ReportGenerator, ReportMode, parse_report_date};

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let (Some(dataset), Some(date_arg)) = (args.next(), args.next()) else {
        bail!("Usage: scan-revenue <dataset.json> <DD-MM-YYYY> [detail|summary]");
    };

    let mode = match args.next().as_deref() {
        None | Some("detail") => ReportMode::Detail,
        Some("summary") => ReportMode::Summary,
        Some(other) => bail!("Unknown report mode '{other}', expected 'detail' or 'summary'"),
    };

    let date = parse_report_date(&date_arg)?;

    info!("Loading dataset from: {dataset}");
    let store = InMemoryStore::from_json_file(Path::new(&dataset))
        .with_context(|| format!("Failed to load dataset {dataset}"))?;

    let start = Instant::now();
    let generator = ReportGenerator::with_config(&store, ReportConfig::for_mode(mode));
    let report = generator.generate(date)?;
    info!("Generated report in {:?}", start.elapsed());

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
