use std::collections::HashMap;

use crate::models::{Aggregate, CatalogEntity, LinkRecord, WithQuantity};

use super::natural::natural_sort_by_key;
use super::tables::EntityTable;

/// Counts every reference `references` yields across `links` and joins the
/// distinct ids against `table`.
///
/// Quantity is the raw occurrence count, so an id listed twice by one link
/// counts twice. Resolved entries come back natural-sorted by display name;
/// missing ids keep their first-appearance order.
pub fn aggregate<T, F>(links: &[LinkRecord], references: F, table: &EntityTable<T>) -> Aggregate<T>
where
    T: CatalogEntity + Clone,
    F: Fn(&LinkRecord) -> &[T::Id],
{
    let mut counts = HashMap::<&T::Id, usize>::new();
    let mut first_seen = Vec::<&T::Id>::new();
    for id in links.iter().flat_map(|link| references(link).iter()) {
        let count = counts.entry(id).or_insert(0);
        if *count == 0 {
            first_seen.push(id);
        }
        *count += 1;
    }

    let mut out = Aggregate::default();
    for id in first_seen {
        let quantity = counts.get(id).copied().unwrap_or_default();
        match table.get(id) {
            Some(lookup) => out.resolved.push(WithQuantity {
                lookup: lookup.clone(),
                quantity,
            }),
            None => out.missing.push(id.clone()),
        }
    }
    natural_sort_by_key(&mut out.resolved, WithQuantity::display_name);
    out
}

pub fn author_ids(link: &LinkRecord) -> &[crate::models::PersonId] {
    &link.author_ids
}

pub fn keyword_ids(link: &LinkRecord) -> &[crate::models::KeywordId] {
    &link.keyword_ids
}
