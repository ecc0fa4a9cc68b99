use crate::evaluate::AGE_LABELS;
use crate::{Attribute, EvalKind, QuestionTemplate};

const GENRES: &[&str] = &[
    "Action", "RPG", "Shooter", "Indie", "Platformer", "Adventure", "Strategy", "Racing", "Casual",
    "Simulation",
];

const VIEWPOINTS: &[&str] = &[
    "First Person",
    "Third Person",
    "Isometric",
    "Side",
    "Top-down",
    "Unknown",
];

/// The built-in video game question templates, in display order.
///
/// Every entry passes registry validation; the transport layer decides which
/// ones to offer and how to render them.
#[must_use]
pub fn default_templates() -> Vec<QuestionTemplate> {
    use Attribute as A;
    use EvalKind as K;

    vec![
        // Release year
        QuestionTemplate::new(
            "year_at_least",
            "Release Year",
            "Was it released in {value} or later?",
            K::NumericGreaterThan { inclusive: true },
            A::Year,
            &["2010", "2012", "2015", "2018", "2020"],
        ),
        QuestionTemplate::new(
            "year_at_most",
            "Release Year",
            "Was it released in {value} or earlier?",
            K::NumericLessThan { inclusive: true },
            A::Year,
            &["2012", "2015", "2018", "2020"],
        ),
        // Genre
        QuestionTemplate::new(
            "main_genre",
            "Main Genre",
            "Is its main genre {value}?",
            K::Equals,
            A::MainGenre,
            GENRES,
        ),
        QuestionTemplate::new(
            "genre_includes",
            "Genres",
            "Is it tagged as {value}?",
            K::SetContains,
            A::Genres,
            GENRES,
        ),
        QuestionTemplate::new(
            "platform_includes",
            "Platforms",
            "Is it available on {value}?",
            K::SetContains,
            A::Platforms,
            &["PC", "PlayStation", "Xbox", "Nintendo Switch", "Mobile"],
        ),
        // Perspective, camera, world
        QuestionTemplate::new(
            "perspective",
            "Perspective",
            "Is it played from a {value} perspective?",
            K::Equals,
            A::Perspective,
            VIEWPOINTS,
        ),
        QuestionTemplate::new(
            "world_type",
            "World Type",
            "Is its world {value}?",
            K::Equals,
            A::WorldType,
            &["Open World", "Metroidvania", "Level-based", "Hub-based", "Linear / Mixed"],
        ),
        QuestionTemplate::new(
            "camera",
            "Camera",
            "Is the camera {value}?",
            K::Equals,
            A::Camera,
            VIEWPOINTS,
        ),
        // Theme, tone, mood, setting
        QuestionTemplate::new(
            "theme",
            "Theme",
            "Is its theme {value}?",
            K::Equals,
            A::Theme,
            &["Fantasy", "Sci-Fi", "Horror", "Historical", "Post-Apocalyptic", "Modern / Other"],
        ),
        QuestionTemplate::new(
            "tone",
            "Tone",
            "Is its tone {value}?",
            K::SetContains,
            A::Tone,
            &["Dark", "Wholesome", "Comedic", "Emotional", "Cute", "Neutral"],
        ),
        QuestionTemplate::new(
            "mood",
            "Mood",
            "Is it {value}?",
            K::SetContains,
            A::Mood,
            &["Atmospheric", "Story-Driven", "Psychological", "Relaxing", "Mysterious", "Neutral"],
        ),
        QuestionTemplate::new(
            "setting",
            "Setting",
            "Is it set somewhere {value}?",
            K::SetContains,
            A::Setting,
            &["Urban", "Medieval", "Space / Sci-Fi", "Wilderness", "Island", "Unspecified / Mixed"],
        ),
        // Visual, combat, structure
        QuestionTemplate::new(
            "visual_style",
            "Visual Style",
            "Is its visual style {value}?",
            K::SetContains,
            A::VisualStyle,
            &[
                "Pixel Art", "Retro", "Anime", "Realistic", "Cartoon", "Stylized", "Low Poly",
                "Minimalist", "Unspecified",
            ],
        ),
        QuestionTemplate::new(
            "combat_style",
            "Combat Style",
            "Does combat involve {value}?",
            K::SetContains,
            A::CombatStyle,
            &["Melee", "Guns", "Magic", "Stealth", "Tactical", "Unspecified"],
        ),
        QuestionTemplate::new(
            "structure_feature",
            "Structure Features",
            "Does it feature {value}?",
            K::SetContains,
            A::StructureFeatures,
            &[
                "Crafting",
                "Survival",
                "Skill Tree",
                "Loot",
                "Procedural Generation",
                "Base Building",
                "Branching Story",
                "None / Standard",
            ],
        ),
        // Difficulty, replayability
        QuestionTemplate::new(
            "difficulty",
            "Difficulty",
            "Is its difficulty {value}?",
            K::Equals,
            A::Difficulty,
            &["Easy", "Normal / Unknown", "Hard", "Souls-like"],
        ),
        QuestionTemplate::new(
            "replayability",
            "Replayability",
            "Is its replayability {value}?",
            K::Equals,
            A::Replayability,
            &["Roguelike", "High", "Medium / Low / Unknown"],
        ),
        // Multiplayer
        QuestionTemplate::new(
            "is_multiplayer",
            "Multiplayer",
            "Does it have multiplayer?",
            K::BooleanField,
            A::Multiplayer,
            &[],
        ),
        QuestionTemplate::new(
            "has_coop",
            "Co-op",
            "Does it have co-op?",
            K::BooleanField,
            A::CoOp,
            &[],
        ),
        QuestionTemplate::new(
            "is_online_only",
            "Online-only",
            "Is it online-only?",
            K::BooleanField,
            A::OnlineOnly,
            &[],
        ),
        // Age rating, ESRB, violence
        QuestionTemplate::new(
            "age_at_least",
            "Age Rating",
            "Is it rated {value} or higher?",
            K::AgeAtLeast,
            A::AgeRating,
            &AGE_LABELS,
        ),
        QuestionTemplate::new(
            "age_at_most",
            "Age Rating",
            "Is it rated {value} or lower?",
            K::AgeAtMost,
            A::AgeRating,
            &AGE_LABELS,
        ),
        QuestionTemplate::new(
            "esrb_category",
            "ESRB",
            "Is its ESRB rating {value}?",
            K::Equals,
            A::Esrb,
            &["E", "E10+", "T", "M", "Unknown"],
        ),
        QuestionTemplate::new(
            "violence_level",
            "Violence",
            "Is its violence level {value}?",
            K::Equals,
            A::ViolenceLevel,
            &["Low", "Medium", "High", "Unknown / Varies"],
        ),
        // Score
        QuestionTemplate::new(
            "score_bucket_at_least",
            "Score",
            "Did it score {value} or better?",
            K::OrderedBucketAtLeast,
            A::ScoreBucket,
            &["60-69", "70-79", "80-89", "90+"],
        ),
        // Monetization
        QuestionTemplate::new(
            "monetization",
            "Monetization",
            "Is it {value}?",
            K::SetContains,
            A::Monetization,
            &["Paid / Standard", "Free to Play", "Microtransactions", "DLC-heavy", "Seasonal"],
        ),
        // Franchise
        QuestionTemplate::new(
            "is_sequel",
            "Franchise",
            "Is it a sequel?",
            K::SequelRule,
            A::FranchiseEntry,
            &[],
        ),
        QuestionTemplate::new(
            "has_franchise",
            "Franchise",
            "Is it part of a franchise?",
            K::BooleanField,
            A::HasFranchise,
            &[],
        ),
    ]
}
