#![allow(dead_code)]

use guesswork::{Catalog, Item, TemplateRegistry};
use proptest::prelude::*;

// --- Fixed vocabularies ---
// Drawn from the built-in templates, plus the labels the dataset uses for
// "don't know" so the unknown-handling paths get exercised.

const GENRES: &[&str] = &["Action", "RPG", "Shooter", "Indie", "Platformer", "Unknown"];
const PLATFORMS: &[&str] = &["PC", "PlayStation", "Xbox", "Nintendo Switch", "Mobile"];
const TONES: &[&str] = &["Dark", "Wholesome", "Comedic", "Neutral"];
const THEMES: &[&str] = &["Fantasy", "Sci-Fi", "Horror", "Modern / Other", ""];
const AGES: &[&str] = &["3+", "7+", "12+", "16+", "18+", "Unknown", ""];
const SCORES: &[&str] = &["<60", "60-69", "70-79", "80-89", "90+", "Unknown"];
const FRANCHISES: &[&str] = &["Standalone / Other", "Dark Souls", "Halo", ""];
const ENTRIES: &[&str] = &["1", "2", "3", "III", "Unknown", ""];

fn arb_subset(pool: &'static [&'static str]) -> impl Strategy<Value = Vec<String>> {
    prop::sample::subsequence(pool, 0..=pool.len())
        .prop_map(|v| v.into_iter().map(str::to_owned).collect())
}

fn arb_label(pool: &'static [&'static str]) -> impl Strategy<Value = String> {
    prop::sample::select(pool).prop_map(str::to_owned)
}

/// Generate an item (with a placeholder id) across the fixed vocabularies.
pub fn arb_item() -> impl Strategy<Value = Item> {
    (
        (1995_i64..=2025, arb_subset(GENRES), arb_label(GENRES), arb_subset(PLATFORMS)),
        (arb_subset(TONES), arb_label(THEMES), arb_label(AGES), arb_label(SCORES)),
        (arb_label(FRANCHISES), arb_label(ENTRIES)),
        (any::<bool>(), any::<bool>(), any::<bool>()),
    )
        .prop_map(
            |(
                (year, genres, main_genre, platforms),
                (tone, theme, age_rating, score_bucket),
                (franchise, franchise_entry),
                (multiplayer, co_op, online_only),
            )| Item {
                year,
                genres,
                main_genre,
                platforms,
                tone,
                theme,
                age_rating,
                score_bucket,
                franchise,
                franchise_entry,
                multiplayer,
                co_op,
                online_only,
                ..Item::new(0, "")
            },
        )
}

/// Generate a non-empty catalog with ids `1..=n` and names `Game {id}`.
pub fn arb_catalog() -> impl Strategy<Value = Catalog> {
    prop::collection::vec(arb_item(), 1..24).prop_map(|items| {
        let items = items
            .into_iter()
            .zip(1_u32..)
            .map(|(item, id)| Item {
                id,
                name: format!("Game {id}"),
                ..item
            })
            .collect();
        Catalog::load(items).expect("generated ids are unique")
    })
}

/// A (template id, value) pair against the default registry. Values are
/// usually legal but sometimes arbitrary text, to cover parse failures and
/// unranked labels.
pub fn arb_question() -> impl Strategy<Value = (String, String)> {
    let templates = TemplateRegistry::default().all().to_vec();
    (prop::sample::select(templates), any::<prop::sample::Index>(), "[a-z0-9+ -]{0,6}", 0_u8..4)
        .prop_map(|(template, idx, noise, roll)| {
            let value = if template.values.is_empty() || roll == 0 {
                noise
            } else {
                idx.get(&template.values).clone()
            };
            (template.id, value)
        })
}

/// A short sequence of questions.
pub fn arb_questions() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(arb_question(), 0..12)
}
