mod aggregate;
mod natural;
mod tables;

pub use aggregate::{aggregate, author_ids, keyword_ids};
pub use natural::{natural_cmp, natural_sort_by_key};
pub use tables::{CatalogFormat, EntityTable, EntityTables};
