//! Option lists for the dashboard's dropdown and radio widgets.

use ged_core::elector_range::{range_labels, range_values, ElectorRange};
use serde::Serialize;

/// A widget choice: what the user sees and the value the widget reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WidgetOption {
    pub label: String,
    pub value: String,
}

impl WidgetOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Population groups selectable in the population tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Population {
    Malay,
    Chinese,
}

impl Population {
    pub const ALL: [Population; 2] = [Population::Malay, Population::Chinese];

    pub fn token(&self) -> &'static str {
        match self {
            Population::Malay => "malay",
            Population::Chinese => "chinese",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Population::Malay => "Malay Population",
            Population::Chinese => "Chinese Population",
        }
    }

    /// Exact token match; anything else is not a population.
    pub fn from_token(token: &str) -> Option<Self> {
        Population::ALL.into_iter().find(|p| p.token() == token)
    }
}

/// Dropdown options for the elector ranges, label `"200k-250k"`, value `"200001-250000"`.
///
/// Pairs the parallel label and value lists position by position.
pub fn elector_range_options(ranges: &[ElectorRange]) -> Vec<WidgetOption> {
    range_labels(ranges)
        .into_iter()
        .zip(range_values(ranges))
        .map(|(label, value)| WidgetOption::new(label, value))
        .collect()
}

pub fn population_options() -> Vec<WidgetOption> {
    Population::ALL
        .iter()
        .map(|p| WidgetOption::new(p.label(), p.token()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ged_core::elector_range::ELECTOR_RANGES;

    #[test]
    fn range_options_pair_labels_with_values() {
        let options = elector_range_options(&ELECTOR_RANGES);
        assert_eq!(options.len(), ELECTOR_RANGES.len());
        assert_eq!(options[3], WidgetOption::new("300k-350k", "300001-350000"));
    }

    #[test]
    fn range_options_follow_label_and_value_order() {
        let options = elector_range_options(&ELECTOR_RANGES);
        let labels: Vec<_> = options.iter().map(|o| o.label.clone()).collect();
        let values: Vec<_> = options.iter().map(|o| o.value.clone()).collect();
        assert_eq!(labels, range_labels(&ELECTOR_RANGES));
        assert_eq!(values, range_values(&ELECTOR_RANGES));
        assert_eq!(options[0], WidgetOption::new("150k-200k", "150001-200000"));
        assert_eq!(options[6], WidgetOption::new("450k-500k", "450001-500000"));
    }

    #[test]
    fn population_options_use_tokens() {
        assert_eq!(
            population_options(),
            vec![
                WidgetOption::new("Malay Population", "malay"),
                WidgetOption::new("Chinese Population", "chinese"),
            ]
        );
    }

    #[test]
    fn from_token_is_exact() {
        assert_eq!(Population::from_token("malay"), Some(Population::Malay));
        assert_eq!(Population::from_token("chinese"), Some(Population::Chinese));
        assert_eq!(Population::from_token("Malay"), None);
        assert_eq!(Population::from_token("indian"), None);
        assert_eq!(Population::from_token(""), None);
    }
}
