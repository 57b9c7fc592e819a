mod entity;
mod search;
mod trace;

pub use entity::{
    Aggregate, CatalogEntity, KeywordId, KeywordRecord, LinkRecord, MissingReferences, PersonId,
    PersonRecord, WithQuantity,
};
pub use search::{CollectionKind, SearchHit, SkipReason, SkippedDocument};
pub use trace::RequestLogEntry;
