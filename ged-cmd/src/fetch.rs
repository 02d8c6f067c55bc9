//! Download the constituency dataset to a local CSV.

use anyhow::Context;
use ged_core::constituency::write_constituency_csv;
use ged_core::fetch::{fetch_constituencies, DATA_URL};
use ged_data::table::project;
use log::info;
use std::fs::File;
use std::io::BufWriter;

/// Fetch the dataset from `url` (or the default URL), project it to the
/// dashboard columns, sort it and write it to `output`.
pub async fn run_fetch(output: &str, url: Option<&str>) -> anyhow::Result<()> {
    let url = url.unwrap_or(DATA_URL);
    let client = reqwest::Client::new();
    let records = fetch_constituencies(&client, url)
        .await
        .with_context(|| format!("failed to load constituencies from {}", url))?;
    let records = project(records);

    let file = File::create(output).with_context(|| format!("failed to create {}", output))?;
    write_constituency_csv(&records, BufWriter::new(file))?;
    info!("Wrote {} constituencies to {}", records.len(), output);
    Ok(())
}
