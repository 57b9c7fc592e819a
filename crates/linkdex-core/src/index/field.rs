use crate::models::{CollectionKind, KeywordRecord, LinkRecord, PersonRecord, WithQuantity};

pub const NAME_WEIGHT: f32 = 5.0;
pub const DETAIL_WEIGHT: f32 = 1.0;

/// One weighted text field of an indexed document.
pub struct FieldSpec<D> {
    pub name: &'static str,
    pub extract: fn(&D) -> &str,
    pub weight: f32,
}

/// Which fields of `D` are indexed, and the key that identifies a document.
/// `reference_key` must be unique across the collection.
pub struct IndexSpec<D> {
    pub collection: CollectionKind,
    pub fields: Vec<FieldSpec<D>>,
    pub reference_key: fn(&D) -> &str,
}

fn link_name(link: &LinkRecord) -> &str {
    &link.name
}

fn link_description(link: &LinkRecord) -> &str {
    &link.description
}

fn person_name(person: &WithQuantity<PersonRecord>) -> &str {
    &person.lookup.name
}

fn person_github(person: &WithQuantity<PersonRecord>) -> &str {
    person.lookup.github.as_deref().unwrap_or_default()
}

fn person_twitter(person: &WithQuantity<PersonRecord>) -> &str {
    person.lookup.twitter.as_deref().unwrap_or_default()
}

fn keyword_name(keyword: &WithQuantity<KeywordRecord>) -> &str {
    &keyword.lookup.name
}

pub fn links_spec() -> IndexSpec<LinkRecord> {
    IndexSpec {
        collection: CollectionKind::Links,
        fields: vec![
            FieldSpec {
                name: "name",
                extract: link_name,
                weight: NAME_WEIGHT,
            },
            FieldSpec {
                name: "description",
                extract: link_description,
                weight: DETAIL_WEIGHT,
            },
        ],
        reference_key: link_name,
    }
}

pub fn people_spec() -> IndexSpec<WithQuantity<PersonRecord>> {
    IndexSpec {
        collection: CollectionKind::People,
        fields: vec![
            FieldSpec {
                name: "name",
                extract: person_name,
                weight: NAME_WEIGHT,
            },
            FieldSpec {
                name: "github",
                extract: person_github,
                weight: DETAIL_WEIGHT,
            },
            FieldSpec {
                name: "twitter",
                extract: person_twitter,
                weight: DETAIL_WEIGHT,
            },
        ],
        reference_key: person_name,
    }
}

pub fn keywords_spec() -> IndexSpec<WithQuantity<KeywordRecord>> {
    IndexSpec {
        collection: CollectionKind::Keywords,
        fields: vec![FieldSpec {
            name: "name",
            extract: keyword_name,
            weight: NAME_WEIGHT,
        }],
        reference_key: keyword_name,
    }
}
