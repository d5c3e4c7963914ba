use super::model::{CaseDataset, Metric, MetricValue, Record};

// ---------------------------------------------------------------------------
// Pure aggregation helpers
// ---------------------------------------------------------------------------

/// Total of one numeric field across all records.
pub fn sum_by(records: &[&Record], metric: Metric) -> u64 {
    records.iter().map(|r| metric.of(r)).sum()
}

/// Group-by-sum of one numeric field per WHO region.
///
/// Returns one entry per distinct region present in `records`, in the order
/// regions first appear, each holding the sum of `metric` over that region's
/// rows.
pub fn group_sum_by_region(records: &[&Record], metric: Metric) -> Vec<(String, u64)> {
    let mut groups: Vec<(String, u64)> = Vec::new();
    for rec in records {
        match groups.iter_mut().find(|(region, _)| *region == rec.region) {
            Some((_, total)) => *total += metric.of(rec),
            None => groups.push((rec.region.clone(), metric.of(rec))),
        }
    }
    groups
}

// ---------------------------------------------------------------------------
// DerivedView – everything shown on screen, recomputed atomically
// ---------------------------------------------------------------------------

/// The complete set of displayed values for one filter selection.
/// Recomputed in full by [`derive_view`] on every selection change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedView {
    pub total_confirmed: MetricValue,
    pub total_deaths: MetricValue,
    pub total_recovered: MetricValue,
    /// WHO region of the selected country; empty when nothing is selected,
    /// "N/A" when the selection matched no rows.
    pub region: String,
    /// Recovered cases per region, for the bar chart.
    pub bar_data: Vec<(String, u64)>,
    /// Confirmed cases per region, for the first pie chart.
    pub pie_confirmed: Vec<(String, u64)>,
    /// Deaths per region, for the second pie chart.
    pub pie_deaths: Vec<(String, u64)>,
}

/// Derive the full view for the given country selection.
///
/// With no selection the cards read "N/A" while the charts aggregate the
/// entire dataset; with a selection both cards and charts cover only that
/// country's rows. A selection matching no rows (possible only if the option
/// list and the records disagree) degrades to "N/A" cards and empty charts.
pub fn derive_view(dataset: &CaseDataset, selected_country: Option<&str>) -> DerivedView {
    let filtered: Vec<&Record> = match selected_country {
        Some(country) => dataset
            .records
            .iter()
            .filter(|r| r.country == country)
            .collect(),
        None => dataset.records.iter().collect(),
    };

    let (total_confirmed, total_deaths, total_recovered, region) = match selected_country {
        Some(_) if !filtered.is_empty() => (
            MetricValue::Count(sum_by(&filtered, Metric::Confirmed)),
            MetricValue::Count(sum_by(&filtered, Metric::Deaths)),
            MetricValue::Count(sum_by(&filtered, Metric::Recovered)),
            filtered[0].region.clone(),
        ),
        Some(_) => (
            MetricValue::NotAvailable,
            MetricValue::NotAvailable,
            MetricValue::NotAvailable,
            "N/A".to_string(),
        ),
        None => (
            MetricValue::NotAvailable,
            MetricValue::NotAvailable,
            MetricValue::NotAvailable,
            String::new(),
        ),
    };

    DerivedView {
        total_confirmed,
        total_deaths,
        total_recovered,
        region,
        bar_data: group_sum_by_region(&filtered, Metric::Recovered),
        pie_confirmed: group_sum_by_region(&filtered, Metric::Confirmed),
        pie_deaths: group_sum_by_region(&filtered, Metric::Deaths),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> CaseDataset {
        CaseDataset::from_records(vec![
            Record {
                country: "Afghanistan".to_string(),
                region: "Eastern Mediterranean".to_string(),
                confirmed: 36263,
                deaths: 1269,
                recovered: 25198,
            },
            Record {
                country: "Albania".to_string(),
                region: "Europe".to_string(),
                confirmed: 4880,
                deaths: 144,
                recovered: 2745,
            },
            Record {
                country: "Algeria".to_string(),
                region: "Africa".to_string(),
                confirmed: 27973,
                deaths: 1163,
                recovered: 18837,
            },
            Record {
                country: "Andorra".to_string(),
                region: "Europe".to_string(),
                confirmed: 907,
                deaths: 52,
                recovered: 803,
            },
        ])
    }

    #[test]
    fn sum_by_totals_each_metric() {
        let ds = dataset();
        let all: Vec<&Record> = ds.records.iter().collect();
        assert_eq!(sum_by(&all, Metric::Confirmed), 36263 + 4880 + 27973 + 907);
        assert_eq!(sum_by(&all, Metric::Deaths), 1269 + 144 + 1163 + 52);
        assert_eq!(sum_by(&all, Metric::Recovered), 25198 + 2745 + 18837 + 803);
        assert_eq!(sum_by(&[], Metric::Confirmed), 0);
    }

    #[test]
    fn group_sum_keeps_first_appearance_order() {
        let ds = dataset();
        let all: Vec<&Record> = ds.records.iter().collect();
        let groups = group_sum_by_region(&all, Metric::Recovered);
        assert_eq!(
            groups,
            vec![
                ("Eastern Mediterranean".to_string(), 25198),
                ("Europe".to_string(), 2745 + 803),
                ("Africa".to_string(), 18837),
            ]
        );
    }

    #[test]
    fn group_sum_conserves_the_grand_total() {
        let ds = dataset();
        let all: Vec<&Record> = ds.records.iter().collect();
        for metric in [Metric::Confirmed, Metric::Deaths, Metric::Recovered] {
            let grouped: u64 = group_sum_by_region(&all, metric)
                .iter()
                .map(|(_, n)| n)
                .sum();
            assert_eq!(grouped, sum_by(&all, metric));
        }
    }

    #[test]
    fn group_sum_totals_invariant_to_row_order() {
        let ds = dataset();
        let forward: Vec<&Record> = ds.records.iter().collect();
        let backward: Vec<&Record> = ds.records.iter().rev().collect();

        let mut a = group_sum_by_region(&forward, Metric::Deaths);
        let mut b = group_sum_by_region(&backward, Metric::Deaths);
        a.sort();
        b.sort();
        assert_eq!(a, b);
    }

    #[test]
    fn selecting_a_country_fills_cards_and_narrows_charts() {
        let ds = dataset();
        let view = derive_view(&ds, Some("Afghanistan"));
        assert_eq!(view.total_confirmed, MetricValue::Count(36263));
        assert_eq!(view.total_deaths, MetricValue::Count(1269));
        assert_eq!(view.total_recovered, MetricValue::Count(25198));
        assert_eq!(view.region, "Eastern Mediterranean");
        assert_eq!(
            view.bar_data,
            vec![("Eastern Mediterranean".to_string(), 25198)]
        );
        assert_eq!(
            view.pie_confirmed,
            vec![("Eastern Mediterranean".to_string(), 36263)]
        );
        assert_eq!(
            view.pie_deaths,
            vec![("Eastern Mediterranean".to_string(), 1269)]
        );
    }

    #[test]
    fn every_country_maps_to_its_own_row_and_region() {
        let ds = dataset();
        for rec in &ds.records {
            let view = derive_view(&ds, Some(&rec.country));
            assert_eq!(view.region, rec.region);
            assert_eq!(view.total_confirmed, MetricValue::Count(rec.confirmed));
            assert_eq!(view.total_deaths, MetricValue::Count(rec.deaths));
            assert_eq!(view.total_recovered, MetricValue::Count(rec.recovered));
        }
    }

    #[test]
    fn no_selection_shows_na_cards_but_full_charts() {
        let ds = dataset();
        let view = derive_view(&ds, None);
        assert_eq!(view.total_confirmed, MetricValue::NotAvailable);
        assert_eq!(view.total_deaths, MetricValue::NotAvailable);
        assert_eq!(view.total_recovered, MetricValue::NotAvailable);
        assert_eq!(view.region, "");
        // Charts still aggregate the whole dataset.
        assert_eq!(view.bar_data.len(), 3);
        assert_eq!(view.pie_confirmed.len(), 3);
        assert_eq!(view.pie_deaths.len(), 3);
    }

    #[test]
    fn unknown_country_degrades_to_na() {
        let ds = dataset();
        let view = derive_view(&ds, Some("Atlantis"));
        assert_eq!(view.total_confirmed, MetricValue::NotAvailable);
        assert_eq!(view.total_deaths, MetricValue::NotAvailable);
        assert_eq!(view.total_recovered, MetricValue::NotAvailable);
        assert_eq!(view.region, "N/A");
        assert!(view.bar_data.is_empty());
        assert!(view.pie_confirmed.is_empty());
        assert!(view.pie_deaths.is_empty());
    }

    #[test]
    fn country_match_is_exact_and_case_sensitive() {
        let ds = dataset();
        let view = derive_view(&ds, Some("albania"));
        assert_eq!(view.total_confirmed, MetricValue::NotAvailable);
        assert_eq!(view.region, "N/A");
    }

    #[test]
    fn derive_view_is_idempotent() {
        let ds = dataset();
        assert_eq!(derive_view(&ds, Some("Albania")), derive_view(&ds, Some("Albania")));
        assert_eq!(derive_view(&ds, None), derive_view(&ds, None));
    }

    #[test]
    fn two_country_walkthrough_select_then_clear() {
        let ds = CaseDataset::from_records(vec![
            Record {
                country: "Afghanistan".to_string(),
                region: "Eastern Mediterranean".to_string(),
                confirmed: 36263,
                deaths: 1269,
                recovered: 25198,
            },
            Record {
                country: "Albania".to_string(),
                region: "Europe".to_string(),
                confirmed: 4880,
                deaths: 144,
                recovered: 2745,
            },
        ]);

        let selected = derive_view(&ds, Some("Afghanistan"));
        assert_eq!(selected.total_confirmed, MetricValue::Count(36263));
        assert_eq!(selected.total_deaths, MetricValue::Count(1269));
        assert_eq!(selected.total_recovered, MetricValue::Count(25198));
        assert_eq!(selected.region, "Eastern Mediterranean");
        assert_eq!(
            selected.bar_data,
            vec![("Eastern Mediterranean".to_string(), 25198)]
        );

        let cleared = derive_view(&ds, None);
        assert_eq!(cleared.total_confirmed, MetricValue::NotAvailable);
        assert_eq!(cleared.total_deaths, MetricValue::NotAvailable);
        assert_eq!(cleared.total_recovered, MetricValue::NotAvailable);
        assert_eq!(
            cleared.bar_data,
            vec![
                ("Eastern Mediterranean".to_string(), 25198),
                ("Europe".to_string(), 2745),
            ]
        );
    }
}
