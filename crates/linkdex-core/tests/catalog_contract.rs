use std::collections::HashSet;
use std::path::PathBuf;

use linkdex_core::catalog::EntityTables;
use linkdex_core::models::{KeywordId, PersonId};
use linkdex_core::state::{Event, Location, Model, Route, Viewport, decode_filter, encode_filter};
use linkdex_core::{AppConfig, Catalog};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("catalog.json")
}

fn load_tables() -> EntityTables {
    EntityTables::load(&fixture_path()).expect("load catalog fixture")
}

fn build_catalog() -> Catalog {
    Catalog::build(load_tables(), &AppConfig::default()).expect("build catalog")
}

#[test]
fn resolved_and_missing_ids_cover_every_reference_exactly_once() {
    let tables = load_tables();
    let catalog = build_catalog();

    let referenced = tables
        .links
        .iter()
        .flat_map(|link| link.author_ids.iter().cloned())
        .collect::<HashSet<_>>();
    let resolved = catalog
        .people()
        .iter()
        .map(|p| p.lookup.id.clone())
        .collect::<HashSet<_>>();
    let missing = catalog.missing().people.iter().cloned().collect::<HashSet<_>>();

    assert!(resolved.is_disjoint(&missing));
    assert_eq!(&resolved | &missing, referenced);
    assert!(!resolved.contains(&PersonId::new("nobody")));
    assert_eq!(catalog.missing().people, vec![PersonId::new("ghost-author")]);
    assert_eq!(
        catalog.missing().keywords,
        vec![KeywordId::new("ghost-keyword")]
    );
}

#[test]
fn quantity_matches_number_of_referencing_links() {
    let tables = load_tables();
    let catalog = build_catalog();
    for person in catalog.people() {
        let expected = tables
            .links
            .iter()
            .filter(|link| link.author_ids.contains(&person.lookup.id))
            .count();
        assert_eq!(person.quantity, expected, "{}", person.lookup.name);
        assert!(person.quantity >= 1);
    }
    for keyword in catalog.keywords() {
        let expected = tables
            .links
            .iter()
            .filter(|link| link.keyword_ids.contains(&keyword.lookup.id))
            .count();
        assert_eq!(keyword.quantity, expected, "{}", keyword.lookup.name);
    }
}

#[test]
fn collections_are_in_natural_order() {
    let catalog = build_catalog();
    let links = catalog
        .links()
        .iter()
        .map(|link| link.name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(
        links,
        vec![
            "Life of a File",
            "Making Impossible States Impossible",
            "Parsing 2",
            "Parsing 10",
            "Scaling Elm Apps",
            "The Hard Parts of Open Source",
        ]
    );
    let keywords = catalog
        .keywords()
        .iter()
        .map(|k| k.lookup.name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(
        keywords,
        vec!["architecture", "data modelling", "parsing", "scaling", "types"]
    );
}

#[test]
fn link_search_prefers_name_matches_over_description_matches() {
    let catalog = build_catalog();
    let hits = catalog.search_links("architecture scaling");
    assert_eq!(hits[0].key, "Scaling Elm Apps");
    assert!(hits.iter().all(|hit| hit.score > 0.0));

    let names = catalog
        .visible(Route::Links, "parsers")
        .names()
        .into_iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["Parsing 2", "Parsing 10"]);
}

#[test]
fn people_are_found_by_social_handles() {
    let catalog = build_catalog();
    let hits = catalog.search_people("evancz");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].key, "Evan Czaplicki");

    let hits = catalog.search_people("rtfeldman");
    assert_eq!(hits[0].key, "Richard Feldman");
}

#[test]
fn stop_word_queries_match_the_empty_query() {
    let catalog = build_catalog();
    assert_eq!(catalog.search_links("the"), catalog.search_links(""));
    assert!(catalog.search_links("the").is_empty());
}

#[test]
fn url_driven_session_filters_people_page() {
    let catalog = build_catalog();
    let url = format!("/people?q={}", encode_filter("tereza"));
    let model = Model::init(
        &Location::parse(&url),
        Viewport {
            width: 1024,
            height: 768,
        },
        AppConfig::default().view,
    );
    assert_eq!(catalog.snapshot(&model).visible.names(), vec!["Tereza Sokol"]);

    let (model, commands) = model.update(Event::SetFilter(String::new()));
    assert_eq!(commands.len(), 1);
    assert_eq!(catalog.snapshot(&model).visible.len(), 3);
}

#[test]
fn filter_encoding_round_trips_reserved_and_unicode_input() {
    for filter in ["", "data modelling", "c# & f#", "Čapek 東京", "50%/100%"] {
        assert_eq!(decode_filter(&encode_filter(filter)).expect("decode"), filter);
    }
}
