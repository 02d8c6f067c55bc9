//! Application data and the reactive callbacks behind the dashboard widgets.
//!
//! `AppData` is built once at startup and never changes. Widget changes are
//! delivered to [`Dashboard::dispatch`] as [`WidgetEvent`]s; each event is
//! routed to a pure callback that computes the new figure for one chart.

use crate::figure::{
    self, Figure, NumericField, BAR_TITLE, BOX_TITLE, CHINESE_PIE_TITLE, MALAY_PIE_TITLE,
};
use crate::options::Population;
use crate::table;
use ged_core::constituency::{parse_constituency_csv, sample_constituencies, ConstituencyRecord};
use ged_core::elector_range::{ElectorRange, ELECTOR_RANGES};
use ged_core::error::Result;
use std::rc::Rc;

/// Value the population radio group starts on.
pub const DEFAULT_POPULATION: &str = "malay";

/// Value the elector range dropdown starts on: the first configured range.
pub fn default_range_value() -> String {
    ELECTOR_RANGES[0].value()
}

/// Immutable tables and precomputed figures.
#[derive(Debug, Clone, PartialEq)]
pub struct AppData {
    /// Full dataset, sorted by total electors descending
    pub electorate: Vec<ConstituencyRecord>,
    /// Ten-row sample behind the pie charts and the range filter
    pub sample: Vec<ConstituencyRecord>,
    pub bar: Figure,
    pub box_plot: Figure,
    pub malay_pie: Figure,
    pub chinese_pie: Figure,
}

impl AppData {
    pub fn new(electorate: Vec<ConstituencyRecord>, sample: Vec<ConstituencyRecord>) -> Self {
        let electorate = table::project(electorate);
        let bar = figure::bar(&electorate, NumericField::TotalElectors, BAR_TITLE);
        let box_plot = figure::box_plot(&electorate, NumericField::TotalElectors, BOX_TITLE);
        let malay_pie = figure::pie(&sample, NumericField::MalayPct, MALAY_PIE_TITLE);
        let chinese_pie = figure::pie(&sample, NumericField::ChinesePct, CHINESE_PIE_TITLE);
        log::debug!(
            "[GED] app data: {} constituencies, {} sample rows",
            electorate.len(),
            sample.len()
        );
        Self {
            electorate,
            sample,
            bar,
            box_plot,
            malay_pie,
            chinese_pie,
        }
    }

    /// Build app data from the downloaded CSV body plus the embedded sample.
    pub fn from_csv(electorate_csv: &str) -> Result<Self> {
        let electorate = parse_constituency_csv(electorate_csv)?;
        let sample = sample_constituencies()?;
        Ok(Self::new(electorate, sample))
    }
}

/// Bar chart of the sample rows inside the selected range, in table order.
///
/// A value that is not `"MIN-MAX"` is an error for this chart only.
pub fn update_bar_chart(data: &AppData, selected_range: &str) -> Result<Figure> {
    let range: ElectorRange = selected_range.parse()?;
    let filtered = table::filter_by_range(&data.sample, &range);
    log::debug!("[GED] range {} matched {} rows", range, filtered.len());
    Ok(figure::bar(&filtered, NumericField::TotalElectors, BAR_TITLE))
}

/// The precomputed pie for `"malay"` or `"chinese"`; `None` for anything else.
pub fn update_population_chart<'a>(data: &'a AppData, selected: &str) -> Option<&'a Figure> {
    match Population::from_token(selected)? {
        Population::Malay => Some(&data.malay_pie),
        Population::Chinese => Some(&data.chinese_pie),
    }
}

/// A widget value change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetEvent {
    ElectorRangeSelected(String),
    PopulationSelected(String),
}

/// The chart a callback writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartTarget {
    BarChart,
    PopulationChart,
}

impl ChartTarget {
    /// DOM id of the chart container.
    pub fn element_id(&self) -> &'static str {
        match self {
            ChartTarget::BarChart => "bar-chart",
            ChartTarget::PopulationChart => "population-chart",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FigureUpdate {
    pub target: ChartTarget,
    pub figure: Figure,
}

/// Routes widget events to their callbacks.
///
/// Cheap to clone; every clone shares the same `AppData`.
#[derive(Debug, Clone)]
pub struct Dashboard {
    data: Rc<AppData>,
}

impl Dashboard {
    pub fn new(data: AppData) -> Self {
        Self {
            data: Rc::new(data),
        }
    }

    pub fn data(&self) -> &AppData {
        &self.data
    }

    /// Run the callback bound to `event`.
    ///
    /// `Ok(None)` means the callback produced nothing and the chart should be
    /// left as it is.
    pub fn dispatch(&self, event: &WidgetEvent) -> Result<Option<FigureUpdate>> {
        match event {
            WidgetEvent::ElectorRangeSelected(value) => {
                let figure = update_bar_chart(&self.data, value)?;
                Ok(Some(FigureUpdate {
                    target: ChartTarget::BarChart,
                    figure,
                }))
            }
            WidgetEvent::PopulationSelected(token) => {
                let update = update_population_chart(&self.data, token).map(|figure| FigureUpdate {
                    target: ChartTarget::PopulationChart,
                    figure: figure.clone(),
                });
                if update.is_none() {
                    log::warn!("[GED] unrecognized population token '{}'", token);
                }
                Ok(update)
            }
        }
    }
}
