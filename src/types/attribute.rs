use std::fmt;
use std::str::FromStr;

/// The storage shape of an item attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttrType {
    /// A single label from a closed vocabulary (also used for ordered buckets).
    Text,
    /// A set of labels, e.g. platforms or genres.
    TextSet,
    /// A yes/no attribute.
    Flag,
    /// An integer attribute.
    Number,
}

impl fmt::Display for AttrType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrType::Text => write!(f, "text"),
            AttrType::TextSet => write!(f, "text set"),
            AttrType::Flag => write!(f, "flag"),
            AttrType::Number => write!(f, "number"),
        }
    }
}

/// Every attribute a question template may read from an [`Item`](super::Item).
///
/// Names match the snake_case keys of the dataset records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Year,
    Platforms,
    Genres,
    MainGenre,
    Perspective,
    WorldType,
    Camera,
    Theme,
    Tone,
    Difficulty,
    Replayability,
    DeveloperBucket,
    DeveloperRegion,
    Franchise,
    FranchiseEntry,
    Esrb,
    AgeRating,
    ViolenceLevel,
    VisualStyle,
    CombatStyle,
    StructureFeatures,
    Mood,
    Setting,
    Monetization,
    Multiplayer,
    CoOp,
    OnlineOnly,
    MultiplayerMode,
    ScoreBucket,
    /// Derived: the item belongs to a named franchise.
    HasFranchise,
}

impl Attribute {
    pub const ALL: [Attribute; 30] = [
        Attribute::Year,
        Attribute::Platforms,
        Attribute::Genres,
        Attribute::MainGenre,
        Attribute::Perspective,
        Attribute::WorldType,
        Attribute::Camera,
        Attribute::Theme,
        Attribute::Tone,
        Attribute::Difficulty,
        Attribute::Replayability,
        Attribute::DeveloperBucket,
        Attribute::DeveloperRegion,
        Attribute::Franchise,
        Attribute::FranchiseEntry,
        Attribute::Esrb,
        Attribute::AgeRating,
        Attribute::ViolenceLevel,
        Attribute::VisualStyle,
        Attribute::CombatStyle,
        Attribute::StructureFeatures,
        Attribute::Mood,
        Attribute::Setting,
        Attribute::Monetization,
        Attribute::Multiplayer,
        Attribute::CoOp,
        Attribute::OnlineOnly,
        Attribute::MultiplayerMode,
        Attribute::ScoreBucket,
        Attribute::HasFranchise,
    ];

    /// The record key for this attribute.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Attribute::Year => "year",
            Attribute::Platforms => "platforms",
            Attribute::Genres => "genres",
            Attribute::MainGenre => "main_genre",
            Attribute::Perspective => "perspective",
            Attribute::WorldType => "world_type",
            Attribute::Camera => "camera",
            Attribute::Theme => "theme",
            Attribute::Tone => "tone",
            Attribute::Difficulty => "difficulty",
            Attribute::Replayability => "replayability",
            Attribute::DeveloperBucket => "developer_bucket",
            Attribute::DeveloperRegion => "developer_region",
            Attribute::Franchise => "franchise",
            Attribute::FranchiseEntry => "franchise_entry",
            Attribute::Esrb => "esrb",
            Attribute::AgeRating => "age_rating",
            Attribute::ViolenceLevel => "violence_level",
            Attribute::VisualStyle => "visual_style",
            Attribute::CombatStyle => "combat_style",
            Attribute::StructureFeatures => "structure_features",
            Attribute::Mood => "mood",
            Attribute::Setting => "setting",
            Attribute::Monetization => "monetization",
            Attribute::Multiplayer => "multiplayer",
            Attribute::CoOp => "co_op",
            Attribute::OnlineOnly => "online_only",
            Attribute::MultiplayerMode => "multiplayer_mode",
            Attribute::ScoreBucket => "score_bucket",
            Attribute::HasFranchise => "has_franchise",
        }
    }

    #[must_use]
    pub fn attr_type(self) -> AttrType {
        match self {
            Attribute::Year => AttrType::Number,
            Attribute::Platforms
            | Attribute::Genres
            | Attribute::Tone
            | Attribute::VisualStyle
            | Attribute::CombatStyle
            | Attribute::StructureFeatures
            | Attribute::Mood
            | Attribute::Setting
            | Attribute::Monetization => AttrType::TextSet,
            Attribute::Multiplayer
            | Attribute::CoOp
            | Attribute::OnlineOnly
            | Attribute::HasFranchise => AttrType::Flag,
            Attribute::MainGenre
            | Attribute::Perspective
            | Attribute::WorldType
            | Attribute::Camera
            | Attribute::Theme
            | Attribute::Difficulty
            | Attribute::Replayability
            | Attribute::DeveloperBucket
            | Attribute::DeveloperRegion
            | Attribute::Franchise
            | Attribute::FranchiseEntry
            | Attribute::Esrb
            | Attribute::AgeRating
            | Attribute::ViolenceLevel
            | Attribute::MultiplayerMode
            | Attribute::ScoreBucket => AttrType::Text,
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string does not name a known [`Attribute`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAttribute(pub String);

impl fmt::Display for UnknownAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown attribute '{}'", self.0)
    }
}

impl std::error::Error for UnknownAttribute {}

impl FromStr for Attribute {
    type Err = UnknownAttribute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Attribute::ALL
            .iter()
            .copied()
            .find(|attr| attr.name() == s)
            .ok_or_else(|| UnknownAttribute(s.to_owned()))
    }
}

/// A borrowed view of one attribute value on an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrValue<'a> {
    Text(&'a str),
    TextSet(&'a [String]),
    Flag(bool),
    Number(i64),
}

impl AttrValue<'_> {
    #[must_use]
    pub fn attr_type(&self) -> AttrType {
        match self {
            AttrValue::Text(_) => AttrType::Text,
            AttrValue::TextSet(_) => AttrType::TextSet,
            AttrValue::Flag(_) => AttrType::Flag,
            AttrValue::Number(_) => AttrType::Number,
        }
    }
}

impl fmt::Display for AttrValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Text(v) => write!(f, "\"{v}\""),
            AttrValue::TextSet(v) => write!(f, "[{}]", v.join(", ")),
            AttrValue::Flag(v) => write!(f, "{v}"),
            AttrValue::Number(v) => write!(f, "{v}"),
        }
    }
}
