//! EarFix AutoEq Converter - per-device source selection and filtering
//!
//! Copyright (C) 2025 Pierre Aubert pierre(at)spinorama(dot)org
//!
//! This program is free software: you can redistribute it and/or modify
//! it under the terms of the GNU General Public License as published by
//! the Free Software Foundation, either version 3 of the License, or
//! (at your option) any later version.
//!
//! This program is distributed in the hope that it will be useful,
//! but WITHOUT ANY WARRANTY; without even the implied warranty of
//! MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//! GNU General Public License for more details.
//!
//! You should have received a copy of the GNU General Public License
//! along with this program.  If not, see <https://www.gnu.org/licenses/>.

use std::collections::BTreeMap;

use crate::catalog::Catalog;
use crate::discover::Measurement;

/// Group measurements by device name, preserving input order inside
/// each group.
pub fn group_by_name(measurements: Vec<Measurement>) -> BTreeMap<String, Vec<Measurement>> {
    let mut groups: BTreeMap<String, Vec<Measurement>> = BTreeMap::new();
    for measurement in measurements {
        groups
            .entry(measurement.name.clone())
            .or_default()
            .push(measurement);
    }
    groups
}

/// Pick one measurement per device by source preference.
///
/// The candidate whose source label contains the earliest entry of the
/// preference ranking wins. When no candidate matches any preferred
/// source, the first candidate of the group stands.
pub fn select_best_source(
    groups: BTreeMap<String, Vec<Measurement>>,
    catalog: &Catalog,
) -> BTreeMap<String, Measurement> {
    let mut selected = BTreeMap::new();

    for (name, candidates) in groups {
        let mut best: Option<Measurement> = None;
        let mut best_priority = catalog.preferred_sources.len() + 1;

        for candidate in candidates {
            let priority = catalog
                .preferred_sources
                .iter()
                .position(|pref| candidate.source.contains(pref.as_str()));
            match priority {
                Some(i) if i < best_priority => {
                    best_priority = i;
                    best = Some(candidate);
                }
                Some(_) => {}
                None => {
                    if best.is_none() {
                        best = Some(candidate);
                    }
                }
            }
        }

        if let Some(measurement) = best {
            selected.insert(name, measurement);
        }
    }

    selected
}

/// Keep only devices on the curated list. Names match exactly, including
/// case and whitespace.
pub fn filter_popular(
    selected: BTreeMap<String, Measurement>,
    catalog: &Catalog,
) -> BTreeMap<String, Measurement> {
    selected
        .into_iter()
        .filter(|(name, _)| catalog.popularity_rank(name).is_some())
        .collect()
}

/// Keep the first `n` devices: curated entries first, in curated-list
/// order, then the rest alphabetically.
pub fn filter_top(
    mut selected: BTreeMap<String, Measurement>,
    catalog: &Catalog,
    n: usize,
) -> BTreeMap<String, Measurement> {
    let mut names: Vec<String> = selected.keys().cloned().collect();
    names.sort_by_key(|name| match catalog.popularity_rank(name) {
        Some(rank) => (0u8, rank, String::new()),
        None => (1u8, 0, name.clone()),
    });
    names.truncate(n);

    names
        .into_iter()
        .filter_map(|name| selected.remove(&name).map(|m| (name, m)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discover::DeviceClass;
    use std::path::PathBuf;

    fn measurement(name: &str, source: &str) -> Measurement {
        Measurement {
            name: name.to_string(),
            source: source.to_string(),
            class: DeviceClass::OverEar,
            path: PathBuf::from(format!("results/{source}/over-ear/{name} ParametricEQ.txt")),
        }
    }

    fn catalog() -> Catalog {
        Catalog::default()
    }

    #[test]
    fn preferred_source_wins_regardless_of_order() {
        let groups = group_by_name(vec![
            measurement("HD 650", "Rtings"),
            measurement("HD 650", "oratory1990"),
            measurement("HD 650", "kuulokkeet"),
        ]);
        let selected = select_best_source(groups, &catalog());
        assert_eq!(selected["HD 650"].source, "oratory1990");
    }

    #[test]
    fn sub_source_labels_match_by_substring() {
        let groups = group_by_name(vec![
            measurement("Aria", "crinacle/711 in-ear"),
            measurement("Aria", "crinacle/GRAS 43AG-7"),
        ]);
        let selected = select_best_source(groups, &catalog());
        assert_eq!(selected["Aria"].source, "crinacle/GRAS 43AG-7");
    }

    #[test]
    fn first_candidate_stands_when_nothing_matches() {
        let groups = group_by_name(vec![
            measurement("Obscure", "labA"),
            measurement("Obscure", "labB"),
        ]);
        let selected = select_best_source(groups, &catalog());
        assert_eq!(selected["Obscure"].source, "labA");
    }

    #[test]
    fn later_preferred_candidate_replaces_unmatched_first() {
        let groups = group_by_name(vec![
            measurement("HD 600", "labA"),
            measurement("HD 600", "Innerfidelity"),
        ]);
        let selected = select_best_source(groups, &catalog());
        assert_eq!(selected["HD 600"].source, "Innerfidelity");
    }

    #[test]
    fn popular_filter_is_case_sensitive() {
        let selected = select_best_source(
            group_by_name(vec![
                measurement("Sennheiser HD 650", "oratory1990"),
                measurement("Sennheiser hd 650", "oratory1990"),
                measurement("NoName X", "labA"),
            ]),
            &catalog(),
        );
        let filtered = filter_popular(selected, &catalog());
        assert_eq!(filtered.len(), 1);
        assert!(filtered.contains_key("Sennheiser HD 650"));
    }

    #[test]
    fn top_n_puts_curated_entries_first_in_list_order() {
        let names = [
            "Aardvark",
            "Zebra",
            "Sennheiser HD 600",
            "Sennheiser HD 650",
            "AKG K702",
            "Banana",
        ];
        let selected = select_best_source(
            group_by_name(
                names
                    .iter()
                    .map(|name| measurement(name, "oratory1990"))
                    .collect(),
            ),
            &catalog(),
        );

        let top = filter_top(selected, &catalog(), 5);
        assert_eq!(top.len(), 5);
        // Curated entries survive in curated-list order; the remaining
        // slots go to the alphabetically first of the rest.
        assert!(top.contains_key("Sennheiser HD 650"));
        assert!(top.contains_key("Sennheiser HD 600"));
        assert!(top.contains_key("AKG K702"));
        assert!(top.contains_key("Aardvark"));
        assert!(top.contains_key("Banana"));
        assert!(!top.contains_key("Zebra"));
    }

    #[test]
    fn top_n_larger_than_set_keeps_everything() {
        let selected = select_best_source(
            group_by_name(vec![measurement("Solo", "labA")]),
            &catalog(),
        );
        let top = filter_top(selected, &catalog(), 100);
        assert_eq!(top.len(), 1);
    }
}
