//! Chart figures built from constituency tables.
//!
//! A [`Figure`] is a plain description of a chart (kind, title, axis labels
//! and labelled data points) serialized to JSON for the D3.js renderers.
//! Builders do no aggregation: box plot quartiles and pie slice shares are
//! computed by the renderer from the raw values.

use ged_core::constituency::{
    ConstituencyRecord, CHINESE_COLUMN, MALAY_COLUMN, NAME_COLUMN, TOTAL_ELECTORS_COLUMN,
};
use serde::Serialize;

pub const BAR_TITLE: &str = "Total Electors by Constituency";
pub const BOX_TITLE: &str = "Box Plot of Total Electors by Constituency";
pub const MALAY_PIE_TITLE: &str = "Malay Population (%) by Constituency";
pub const CHINESE_PIE_TITLE: &str = "Chinese Population (%) by Constituency";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    Box,
    Pie,
}

/// Numeric columns a figure can be driven by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
    TotalElectors,
    MalayPct,
    ChinesePct,
}

impl NumericField {
    pub fn column(&self) -> &'static str {
        match self {
            NumericField::TotalElectors => TOTAL_ELECTORS_COLUMN,
            NumericField::MalayPct => MALAY_COLUMN,
            NumericField::ChinesePct => CHINESE_COLUMN,
        }
    }

    pub fn value_of(&self, record: &ConstituencyRecord) -> f64 {
        match self {
            NumericField::TotalElectors => record.total_electors as f64,
            NumericField::MalayPct => record.malay_pct,
            NumericField::ChinesePct => record.chinese_pct,
        }
    }
}

/// A labelled value: one bar, one box plot observation or one pie slice.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Datum {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub kind: ChartKind,
    pub title: String,
    #[serde(rename = "xAxisLabel", skip_serializing_if = "Option::is_none")]
    pub x_label: Option<String>,
    #[serde(rename = "yAxisLabel", skip_serializing_if = "Option::is_none")]
    pub y_label: Option<String>,
    pub points: Vec<Datum>,
}

impl Figure {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// JSON array of the data points, as the renderers expect it.
    pub fn data_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.points)
    }

    /// JSON object with everything but the data points.
    pub fn config_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&serde_json::json!({
            "kind": self.kind,
            "title": self.title,
            "xAxisLabel": self.x_label,
            "yAxisLabel": self.y_label,
        }))
    }
}

fn points(records: &[ConstituencyRecord], field: NumericField) -> Vec<Datum> {
    records
        .iter()
        .map(|r| Datum {
            label: r.name.clone(),
            value: field.value_of(r),
        })
        .collect()
}

/// One bar per record, categories on x in table order.
pub fn bar(records: &[ConstituencyRecord], field: NumericField, title: &str) -> Figure {
    Figure {
        kind: ChartKind::Bar,
        title: title.to_string(),
        x_label: Some(NAME_COLUMN.to_string()),
        y_label: Some(field.column().to_string()),
        points: points(records, field),
    }
}

/// Horizontal box plot of one numeric field.
pub fn box_plot(records: &[ConstituencyRecord], field: NumericField, title: &str) -> Figure {
    Figure {
        kind: ChartKind::Box,
        title: title.to_string(),
        x_label: Some(field.column().to_string()),
        y_label: None,
        points: points(records, field),
    }
}

/// Pie with one slice per record, sized by the raw field value.
pub fn pie(records: &[ConstituencyRecord], field: NumericField, title: &str) -> Figure {
    Figure {
        kind: ChartKind::Pie,
        title: title.to_string(),
        x_label: None,
        y_label: None,
        points: points(records, field),
    }
}
