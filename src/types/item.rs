use serde::{Deserialize, Serialize};

use super::attribute::{AttrValue, Attribute};

/// Stable identifier of an item within a [`Catalog`](super::Catalog).
pub type ItemId = u32;

/// Franchise label used by the dataset for games outside any series.
pub const STANDALONE_FRANCHISE: &str = "Standalone / Other";

/// One guessable item (a video game) and its typed attributes.
///
/// Every field except `id` and `name` may be missing from a record; missing
/// fields take their empty default ("", [], false, 0), which the evaluator
/// treats the same as an "Unknown" label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub year: i64,
    #[serde(default)]
    pub platforms: Vec<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub main_genre: String,
    #[serde(default)]
    pub perspective: String,
    #[serde(default)]
    pub world_type: String,
    #[serde(default)]
    pub camera: String,
    #[serde(default)]
    pub theme: String,
    #[serde(default)]
    pub tone: Vec<String>,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub replayability: String,
    #[serde(default)]
    pub developer_bucket: String,
    #[serde(default)]
    pub developer_region: String,
    #[serde(default)]
    pub franchise: String,
    #[serde(default)]
    pub franchise_entry: String,
    #[serde(default)]
    pub esrb: String,
    #[serde(default)]
    pub age_rating: String,
    #[serde(default)]
    pub violence_level: String,
    #[serde(default)]
    pub visual_style: Vec<String>,
    #[serde(default)]
    pub combat_style: Vec<String>,
    #[serde(default)]
    pub structure_features: Vec<String>,
    #[serde(default)]
    pub mood: Vec<String>,
    #[serde(default)]
    pub setting: Vec<String>,
    #[serde(default)]
    pub monetization: Vec<String>,
    #[serde(default)]
    pub multiplayer: bool,
    #[serde(default)]
    pub co_op: bool,
    #[serde(default)]
    pub online_only: bool,
    #[serde(default)]
    pub multiplayer_mode: String,
    #[serde(default)]
    pub score_bucket: String,
}

impl Item {
    /// Create an item with the given id and name and every other attribute unset.
    #[must_use]
    pub fn new(id: ItemId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ..Self::default()
        }
    }

    /// Whether the item belongs to a named franchise.
    #[must_use]
    pub fn has_franchise(&self) -> bool {
        !self.franchise.is_empty() && self.franchise != STANDALONE_FRANCHISE
    }

    /// Read one attribute.
    #[must_use]
    pub fn attribute(&self, attr: Attribute) -> AttrValue<'_> {
        match attr {
            Attribute::Year => AttrValue::Number(self.year),
            Attribute::Platforms => AttrValue::TextSet(&self.platforms),
            Attribute::Genres => AttrValue::TextSet(&self.genres),
            Attribute::MainGenre => AttrValue::Text(&self.main_genre),
            Attribute::Perspective => AttrValue::Text(&self.perspective),
            Attribute::WorldType => AttrValue::Text(&self.world_type),
            Attribute::Camera => AttrValue::Text(&self.camera),
            Attribute::Theme => AttrValue::Text(&self.theme),
            Attribute::Tone => AttrValue::TextSet(&self.tone),
            Attribute::Difficulty => AttrValue::Text(&self.difficulty),
            Attribute::Replayability => AttrValue::Text(&self.replayability),
            Attribute::DeveloperBucket => AttrValue::Text(&self.developer_bucket),
            Attribute::DeveloperRegion => AttrValue::Text(&self.developer_region),
            Attribute::Franchise => AttrValue::Text(&self.franchise),
            Attribute::FranchiseEntry => AttrValue::Text(&self.franchise_entry),
            Attribute::Esrb => AttrValue::Text(&self.esrb),
            Attribute::AgeRating => AttrValue::Text(&self.age_rating),
            Attribute::ViolenceLevel => AttrValue::Text(&self.violence_level),
            Attribute::VisualStyle => AttrValue::TextSet(&self.visual_style),
            Attribute::CombatStyle => AttrValue::TextSet(&self.combat_style),
            Attribute::StructureFeatures => AttrValue::TextSet(&self.structure_features),
            Attribute::Mood => AttrValue::TextSet(&self.mood),
            Attribute::Setting => AttrValue::TextSet(&self.setting),
            Attribute::Monetization => AttrValue::TextSet(&self.monetization),
            Attribute::Multiplayer => AttrValue::Flag(self.multiplayer),
            Attribute::CoOp => AttrValue::Flag(self.co_op),
            Attribute::OnlineOnly => AttrValue::Flag(self.online_only),
            Attribute::MultiplayerMode => AttrValue::Text(&self.multiplayer_mode),
            Attribute::ScoreBucket => AttrValue::Text(&self.score_bucket),
            Attribute::HasFranchise => AttrValue::Flag(self.has_franchise()),
        }
    }
}
