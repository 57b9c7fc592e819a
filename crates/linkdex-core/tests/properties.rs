use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use linkdex_core::catalog::{EntityTable, aggregate, author_ids, natural_cmp, natural_sort_by_key};
use linkdex_core::models::{LinkRecord, PersonId, PersonRecord};
use linkdex_core::state::{Location, Route, decode_filter, encode_filter};
use proptest::prelude::*;

fn arb_name() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ._-]{0,12}"
}

fn arb_author_lists() -> impl Strategy<Value = Vec<Vec<u8>>> {
    prop::collection::vec(prop::collection::vec(0u8..8, 0..5), 0..8)
}

fn person_id(n: u8) -> PersonId {
    PersonId::new(format!("p{n}"))
}

fn links_from(authors: &[Vec<u8>]) -> Vec<LinkRecord> {
    authors
        .iter()
        .enumerate()
        .map(|(i, ids)| LinkRecord {
            name: format!("link {i}"),
            url: String::new(),
            description: String::new(),
            author_ids: ids.iter().copied().map(person_id).collect(),
            keyword_ids: Vec::new(),
        })
        .collect()
}

fn people_table(known: &[u8]) -> EntityTable<PersonRecord> {
    let records = known
        .iter()
        .copied()
        .collect::<HashSet<_>>()
        .into_iter()
        .map(|n| PersonRecord {
            id: person_id(n),
            name: format!("Person {n}"),
            github: None,
            twitter: None,
            url: None,
        })
        .collect();
    EntityTable::from_records(records).expect("unique ids")
}

proptest! {
    #[test]
    fn filter_encoding_round_trips(filter in any::<String>()) {
        let encoded = encode_filter(&filter);
        prop_assert_eq!(decode_filter(&encoded).expect("decode"), filter.clone());

        let location = Route::People.location(&filter);
        prop_assert_eq!(Location::parse(&location.to_url()).filter(), filter);
    }

    #[test]
    fn natural_sort_is_idempotent_and_ordered(mut names in prop::collection::vec(arb_name(), 0..24)) {
        natural_sort_by_key(&mut names, String::as_str);
        let once = names.clone();
        natural_sort_by_key(&mut names, String::as_str);
        prop_assert_eq!(&names, &once);
        for pair in names.windows(2) {
            prop_assert_ne!(natural_cmp(&pair[0], &pair[1]), Ordering::Greater);
        }
    }

    #[test]
    fn natural_order_is_antisymmetric_and_total(a in arb_name(), b in arb_name()) {
        prop_assert_eq!(natural_cmp(&a, &b), natural_cmp(&b, &a).reverse());
        prop_assert_eq!(natural_cmp(&a, &b) == Ordering::Equal, a == b);
    }

    #[test]
    fn natural_sort_ignores_input_order(names in prop::collection::vec(arb_name(), 0..16)) {
        let mut forward = names.clone();
        let mut backward = names.into_iter().rev().collect::<Vec<_>>();
        natural_sort_by_key(&mut forward, String::as_str);
        natural_sort_by_key(&mut backward, String::as_str);
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn aggregation_partitions_references_and_counts_occurrences(
        authors in arb_author_lists(),
        known in prop::collection::vec(0u8..8, 0..8),
    ) {
        let links = links_from(&authors);
        let table = people_table(&known);
        let result = aggregate(&links, author_ids, &table);

        let mut occurrences = HashMap::<PersonId, usize>::new();
        for id in links.iter().flat_map(|link| link.author_ids.iter()) {
            *occurrences.entry(id.clone()).or_insert(0) += 1;
        }

        let resolved = result
            .resolved
            .iter()
            .map(|entry| entry.lookup.id.clone())
            .collect::<HashSet<_>>();
        let missing = result.missing.iter().cloned().collect::<HashSet<_>>();
        prop_assert_eq!(resolved.len(), result.resolved.len());
        prop_assert_eq!(missing.len(), result.missing.len());
        prop_assert!(resolved.is_disjoint(&missing));
        prop_assert_eq!(
            resolved.union(&missing).cloned().collect::<HashSet<_>>(),
            occurrences.keys().cloned().collect::<HashSet<_>>()
        );

        for entry in &result.resolved {
            prop_assert!(entry.quantity >= 1);
            prop_assert_eq!(Some(&entry.quantity), occurrences.get(&entry.lookup.id));
        }
        for id in &result.missing {
            prop_assert!(table.get(id).is_none());
        }
    }
}
