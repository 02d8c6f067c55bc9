//! Text and JSON views of the dashboard data.

use crate::FigureName;
use anyhow::Context;
use ged_core::constituency::{parse_constituency_csv, sample_constituencies, ConstituencyRecord};
use ged_core::elector_range::{ElectorRange, ELECTOR_RANGES};
use ged_core::fetch::{fetch_csv, DATA_URL};
use ged_data::dashboard::AppData;
use ged_data::figure::Figure;
use ged_data::options::elector_range_options;
use ged_data::table::{filter_by_range, project};
use std::fmt::Write;

/// One line per configured range: display label, then value string.
pub fn ranges_table() -> String {
    let mut out = String::new();
    for option in elector_range_options(&ELECTOR_RANGES) {
        let _ = writeln!(out, "{:<12}{}", option.label, option.value);
    }
    out
}

/// Name and elector count of each record, one per line, plus a count footer.
pub fn records_table(records: &[ConstituencyRecord]) -> String {
    let mut out = String::new();
    for r in records {
        let _ = writeln!(out, "{:<24}{:>10}", r.name, r.total_electors);
    }
    let _ = writeln!(out, "{} constituencies", records.len());
    out
}

fn read_table(path: &str) -> anyhow::Result<Vec<ConstituencyRecord>> {
    let data = std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path))?;
    let records = parse_constituency_csv(&data).with_context(|| format!("failed to parse {}", path))?;
    Ok(project(records))
}

/// Filter the sample, or the projected table in `csv`, by a range value.
pub fn run_filter(range: &str, csv: Option<&str>) -> anyhow::Result<()> {
    let range: ElectorRange = range.parse()?;
    let records = match csv {
        Some(path) => read_table(path)?,
        None => sample_constituencies()?,
    };
    print!("{}", records_table(&filter_by_range(&records, &range)));
    Ok(())
}

/// The static figure called `name`.
pub fn select_figure(data: &AppData, name: FigureName) -> &Figure {
    match name {
        FigureName::Bar => &data.bar,
        FigureName::Box => &data.box_plot,
        FigureName::Malay => &data.malay_pie,
        FigureName::Chinese => &data.chinese_pie,
    }
}

/// Print one of the dashboard's static figures as pretty JSON.
pub async fn run_figure(name: FigureName, csv: Option<&str>) -> anyhow::Result<()> {
    let body = match csv {
        Some(path) => std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path))?,
        None => fetch_csv(&reqwest::Client::new(), DATA_URL).await?,
    };
    let data = AppData::from_csv(&body)?;
    println!("{}", serde_json::to_string_pretty(select_figure(&data, name))?);
    Ok(())
}
