use guesswork::{
    evaluate, Catalog, CatalogError, GameConfig, Guess, GuessworkError, Item, SessionError,
    SessionState, Status, TemplateRegistry,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn start(catalog: &Catalog) -> SessionState {
    let mut rng = StdRng::seed_from_u64(1);
    SessionState::start(catalog, &GameConfig::default(), &mut rng).unwrap()
}

fn ask(item: &Item, template: &str, value: &str) -> bool {
    let registry = TemplateRegistry::default();
    evaluate(item, registry.find(template).unwrap(), value)
}

#[test]
fn unset_item_answers_no() {
    let item = Item::new(1, "Blank");
    let registry = TemplateRegistry::default();
    // Year 0 is earlier than any threshold.
    for template in registry.all().iter().filter(|t| t.id != "year_at_most") {
        let value = template.values.first().map_or("", String::as_str);
        assert!(!evaluate(&item, template, value), "{} = {value}", template.id);
    }
}

#[test]
fn year_boundaries_are_inclusive() {
    let item = Item {
        year: 2015,
        ..Item::new(1, "Mid")
    };
    assert!(ask(&item, "year_at_least", "2015"));
    assert!(ask(&item, "year_at_most", "2015"));
    assert!(!ask(&item, "year_at_least", "2016"));
    assert!(!ask(&item, "year_at_most", "2014"));
}

#[test]
fn year_rejects_padded_and_fractional_values() {
    let item = Item {
        year: 2015,
        ..Item::new(1, "Mid")
    };
    assert!(!ask(&item, "year_at_least", " 2015"));
    assert!(!ask(&item, "year_at_least", "2015.0"));
    assert!(!ask(&item, "year_at_least", ""));
    assert!(ask(&item, "year_at_least", "-5"));
}

#[test]
fn label_matching_ignores_case() {
    let item = Item {
        main_genre: "Platformer".into(),
        platforms: vec!["Nintendo Switch".into()],
        ..Item::new(1, "Jumper")
    };
    assert!(ask(&item, "main_genre", "PLATFORMER"));
    assert!(ask(&item, "platform_includes", "nintendo switch"));
    assert!(!ask(&item, "platform_includes", "Switch"));
}

#[test]
fn empty_value_never_matches_labels() {
    let item = Item {
        main_genre: "RPG".into(),
        genres: vec!["RPG".into()],
        ..Item::new(1, "Quest")
    };
    assert!(!ask(&item, "main_genre", ""));
    assert!(!ask(&item, "genre_includes", ""));
}

#[test]
fn values_outside_the_legal_list_still_evaluate() {
    let item = Item {
        main_genre: "Roguelike".into(),
        ..Item::new(1, "Crawler")
    };
    assert!(ask(&item, "main_genre", "Roguelike"));
}

#[test]
fn unranked_score_buckets_answer_no() {
    let ranked = Item {
        score_bucket: "70-79".into(),
        ..Item::new(1, "Decent")
    };
    let unranked = Item {
        score_bucket: "<60".into(),
        ..Item::new(2, "Rough")
    };

    assert!(ask(&ranked, "score_bucket_at_least", "60-69"));
    assert!(ask(&ranked, "score_bucket_at_least", "70-79"));
    assert!(!ask(&ranked, "score_bucket_at_least", "80-89"));
    assert!(!ask(&ranked, "score_bucket_at_least", "Unknown"));
    assert!(!ask(&unranked, "score_bucket_at_least", "60-69"));
}

#[test]
fn unknown_age_answers_no_in_both_directions() {
    let unknown = Item {
        age_rating: "Unknown".into(),
        ..Item::new(1, "Mystery")
    };
    let teen = Item {
        age_rating: "12+".into(),
        ..Item::new(2, "Teen")
    };

    for value in ["3+", "18+"] {
        assert!(!ask(&unknown, "age_at_least", value));
        assert!(!ask(&unknown, "age_at_most", value));
    }
    assert!(!ask(&teen, "age_at_least", "PG"));
    assert!(!ask(&teen, "age_at_most", "PG"));
    assert!(ask(&teen, "age_at_least", "12+"));
    assert!(ask(&teen, "age_at_most", "12+"));
}

#[test]
fn sequel_needs_a_franchise_and_a_later_entry() {
    let cases = [
        ("Halo", "3", true),
        ("Halo", "1", false),
        ("Halo", "Unknown", false),
        ("Halo", "", false),
        ("Standalone / Other", "2", false),
    ];
    for (franchise, entry, expected) in cases {
        let item = Item {
            franchise: franchise.into(),
            franchise_entry: entry.into(),
            ..Item::new(1, "Entry")
        };
        assert_eq!(ask(&item, "is_sequel", ""), expected, "{franchise} #{entry}");
    }
}

#[test]
fn has_franchise_is_derived() {
    let standalone = Item {
        franchise: "Standalone / Other".into(),
        ..Item::new(1, "Solo")
    };
    let series = Item {
        franchise: "Zelda".into(),
        ..Item::new(2, "Link")
    };
    assert!(!ask(&standalone, "has_franchise", ""));
    assert!(ask(&series, "has_franchise", ""));
}

#[test]
fn flag_templates_ignore_the_value() {
    let item = Item {
        co_op: true,
        ..Item::new(1, "Pair")
    };
    assert!(ask(&item, "has_coop", ""));
    assert!(ask(&item, "has_coop", "no"));
}

#[test]
fn duplicate_catalog_ids_are_rejected() {
    let result = Catalog::load(vec![Item::new(7, "A"), Item::new(7, "B")]);
    assert!(matches!(result, Err(CatalogError::DuplicateId { id: 7 })));
}

#[test]
fn malformed_catalog_json_is_a_json_error() {
    let result = Catalog::from_json_str("[{\"id\": \"one\"}]");
    assert!(matches!(result, Err(GuessworkError::Json(_))));
}

#[test]
fn catalog_json_fills_missing_fields() {
    let catalog = Catalog::from_json_str(r#"[{"id": 3, "name": "Sparse"}]"#).unwrap();
    let item = catalog.get(3).unwrap();
    assert_eq!(item.year, 0);
    assert!(item.genres.is_empty());
    assert!(!item.co_op);
}

#[test]
fn catalog_json_requires_id_and_name() {
    let missing_id = Catalog::from_json_str(r#"[{"name": "Anon", "year": 2010}]"#);
    assert!(matches!(missing_id, Err(GuessworkError::Json(_))));

    let missing_name = Catalog::from_json_str(r#"[{"id": 4, "year": 2010}]"#);
    assert!(matches!(missing_name, Err(GuessworkError::Json(_))));

    // Two id-less records used to collapse into a duplicate id 0.
    let both = Catalog::from_json_str(r#"[{"year": 2010}, {"year": 2011}]"#);
    assert!(matches!(both, Err(GuessworkError::Json(_))));
}

#[test]
fn name_lookup_ignores_case_and_whitespace() {
    let catalog = Catalog::load(vec![Item::new(1, "Hades"), Item::new(2, "Hades II")]).unwrap();
    assert_eq!(catalog.find_by_name("  hades ii ").map(|i| i.id), Some(2));
    assert_eq!(catalog.find_by_name("HADES").map(|i| i.id), Some(1));
    assert!(catalog.find_by_name("   ").is_none());
}

#[test]
fn blank_guess_costs_nothing() {
    let catalog = Catalog::load(vec![Item::new(1, "Alpha"), Item::new(2, "Beta")]).unwrap();
    let mut state = start(&catalog);
    let before = state.clone();

    assert_eq!(
        state.apply_guess(&catalog, &Guess::from("   ")),
        Err(SessionError::EmptyGuess)
    );
    assert_eq!(state, before);
}

#[test]
fn unknown_name_and_id_are_wrong_guesses() {
    let catalog = Catalog::load(vec![Item::new(1, "Alpha"), Item::new(2, "Beta")]).unwrap();
    let mut state = start(&catalog);
    let budget = state.guesses_remaining();

    assert_eq!(state.apply_guess(&catalog, &Guess::from("Gamma")), Ok(false));
    assert_eq!(state.apply_guess(&catalog, &Guess::Id(99)), Ok(false));
    assert_eq!(state.guesses_remaining(), budget - 2);
    assert_eq!(state.status(), Status::Playing);
}

#[test]
fn unknown_template_leaves_state_untouched() {
    let catalog = Catalog::load(vec![Item::new(1, "Alpha"), Item::new(2, "Beta")]).unwrap();
    let registry = TemplateRegistry::default();
    let mut state = start(&catalog);
    let before = state.clone();

    assert_eq!(
        state.apply_question(&catalog, &registry, "publisher", "EA"),
        Err(SessionError::UnknownTemplate {
            id: "publisher".into()
        })
    );
    assert_eq!(state, before);
}
