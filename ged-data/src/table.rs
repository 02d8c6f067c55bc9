//! Sorting and filtering of constituency tables.
//!
//! All functions return new vectors; input slices are never reordered.

use ged_core::constituency::ConstituencyRecord;
use ged_core::elector_range::ElectorRange;

/// Records ordered by total electors, largest first.
///
/// The sort is stable, so ties keep their input order and sorting an
/// already sorted table is a no-op.
pub fn sort_by_electors_desc(records: &[ConstituencyRecord]) -> Vec<ConstituencyRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.total_electors.cmp(&a.total_electors));
    sorted
}

/// The working table: projected records sorted by total electors descending.
///
/// Column projection itself happens at parse time in
/// [`ged_core::constituency::parse_constituency_csv`].
pub fn project(records: Vec<ConstituencyRecord>) -> Vec<ConstituencyRecord> {
    sort_by_electors_desc(&records)
}

/// Records whose elector count lies within `range` (inclusive), in table order.
pub fn filter_by_range(records: &[ConstituencyRecord], range: &ElectorRange) -> Vec<ConstituencyRecord> {
    records
        .iter()
        .filter(|r| range.contains(r.total_electors))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ged_core::constituency::sample_constituencies;

    fn names(records: &[ConstituencyRecord]) -> Vec<&str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn filter_200k_bin_on_sample() {
        let sample = sample_constituencies().unwrap();
        let range: ElectorRange = "200001-250000".parse().unwrap();
        let filtered = filter_by_range(&sample, &range);
        assert_eq!(
            names(&filtered),
            vec![
                "KOTA RAJA",
                "DAMANSARA",
                "SUBANG",
                "TEBRAU",
                "ISKANDAR PUTERI",
                "KLANG",
                "GOMBAK"
            ]
        );
        let electors: Vec<u64> = filtered.iter().map(|r| r.total_electors).collect();
        assert_eq!(
            electors,
            vec![244712, 239103, 230940, 223301, 222437, 208913, 206744]
        );
    }

    #[test]
    fn filter_keeps_exactly_the_records_in_bounds() {
        let sample = sample_constituencies().unwrap();
        for (min, max) in [(0, 0), (195_148, 195_148), (198_000, 210_000), (0, u64::MAX)] {
            let range = ElectorRange::new(min, max);
            let filtered = filter_by_range(&sample, &range);
            let expected: Vec<_> = sample
                .iter()
                .filter(|r| min <= r.total_electors && r.total_electors <= max)
                .cloned()
                .collect();
            assert_eq!(filtered, expected);
        }
    }

    #[test]
    fn filter_preserves_table_order() {
        let shuffled = vec![
            ConstituencyRecord::new("KLANG", 208913, 26.65, 52.77),
            ConstituencyRecord::new("TEBRAU", 223301, 44.96, 38.77),
            ConstituencyRecord::new("GOMBAK", 206744, 69.94, 10.86),
        ];
        let filtered = filter_by_range(&shuffled, &ElectorRange::new(200_001, 250_000));
        assert_eq!(names(&filtered), vec!["KLANG", "TEBRAU", "GOMBAK"]);
    }

    #[test]
    fn records_outside_every_bin_are_dropped() {
        let records = vec![ConstituencyRecord::new("TINY", 40_000, 90.0, 5.0)];
        for range in ged_core::elector_range::ELECTOR_RANGES {
            assert!(filter_by_range(&records, &range).is_empty());
        }
    }

    #[test]
    fn sort_is_descending_and_idempotent() {
        let mut sample = sample_constituencies().unwrap();
        sample.reverse();
        let once = sort_by_electors_desc(&sample);
        let twice = sort_by_electors_desc(&once);
        assert_eq!(once, twice);
        assert_eq!(once[0].name, "BANGI");
        assert!(once
            .windows(2)
            .all(|w| w[0].total_electors >= w[1].total_electors));
    }

    #[test]
    fn sort_keeps_ties_in_input_order() {
        let records = vec![
            ConstituencyRecord::new("A", 100, 0.0, 0.0),
            ConstituencyRecord::new("B", 200, 0.0, 0.0),
            ConstituencyRecord::new("C", 100, 0.0, 0.0),
        ];
        assert_eq!(names(&sort_by_electors_desc(&records)), vec!["B", "A", "C"]);
    }

    #[test]
    fn sort_does_not_touch_input() {
        let records = vec![
            ConstituencyRecord::new("SMALL", 1, 0.0, 0.0),
            ConstituencyRecord::new("BIG", 2, 0.0, 0.0),
        ];
        let _ = sort_by_electors_desc(&records);
        assert_eq!(names(&records), vec!["SMALL", "BIG"]);
    }
}
