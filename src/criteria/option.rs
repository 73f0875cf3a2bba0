//! Static metadata for every filter field.
//!
//! Options are built once into a process-wide registry and handed out as
//! `&'static` references, so every criterion of a given type shares one.

use lazy_static::lazy_static;
use serde::Serialize;
use std::hash::{Hash, Hasher};

use super::modifier::{sets, CriterionModifier};
use super::types::CriterionType;

/// Variant family a criterion belongs to; decides the value shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CriterionKind {
    None,
    String,
    MandatoryString,
    Number,
    MandatoryNumber,
    Duration,
    Flag,
    Relation,
    Enumerated,
    Existence,
}

impl CriterionKind {
    /// Mandatory kinds never offer the null-check modifiers
    pub fn is_mandatory(&self) -> bool {
        matches!(
            self,
            CriterionKind::MandatoryString | CriterionKind::MandatoryNumber
        )
    }
}

/// One entry of an enumerated value domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EnumChoice {
    /// What the user picks and what the URL stores
    pub label: &'static str,
    /// What the backend expects
    pub value: &'static str,
}

const fn choice(label: &'static str, value: &'static str) -> EnumChoice {
    EnumChoice { label, value }
}

pub const RESOLUTION_CHOICES: &[EnumChoice] = &[
    choice("144p", "VERY_LOW"),
    choice("240p", "LOW"),
    choice("360p", "R360P"),
    choice("480p", "STANDARD"),
    choice("540p", "WEB_HD"),
    choice("720p", "STANDARD_HD"),
    choice("1080p", "FULL_HD"),
    choice("1440p", "QUAD_HD"),
    choice("1920p", "VR_HD"),
    choice("4k", "FOUR_K"),
    choice("5k", "FIVE_K"),
    choice("6k", "SIX_K"),
    choice("8k", "EIGHT_K"),
];

pub const GENDER_CHOICES: &[EnumChoice] = &[
    choice("Male", "MALE"),
    choice("Female", "FEMALE"),
    choice("Transgender Male", "TRANSGENDER_MALE"),
    choice("Transgender Female", "TRANSGENDER_FEMALE"),
    choice("Intersex", "INTERSEX"),
    choice("Non-Binary", "NON_BINARY"),
];

pub const RATING_CHOICES: &[EnumChoice] = &[
    choice("1", "1"),
    choice("2", "2"),
    choice("3", "3"),
    choice("4", "4"),
    choice("5", "5"),
];

/// Metadata describing one filter field
#[derive(Debug, Clone, Serialize)]
pub struct CriterionOption {
    #[serde(rename = "type")]
    pub criterion_type: CriterionType,
    pub label: &'static str,
    pub kind: CriterionKind,
    #[serde(rename = "modifiers")]
    pub modifier_options: &'static [CriterionModifier],
    pub default_modifier: CriterionModifier,
    /// Field name in the backend filter input
    pub input_field: &'static str,
    #[serde(skip_serializing_if = "<[EnumChoice]>::is_empty")]
    pub choices: &'static [EnumChoice],
    /// Relation over a tree (tags, studios); supports a `depth`
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub hierarchical: bool,
}

// `type` is the identity key
impl PartialEq for CriterionOption {
    fn eq(&self, other: &Self) -> bool {
        self.criterion_type == other.criterion_type
    }
}

impl Eq for CriterionOption {}

impl Hash for CriterionOption {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.criterion_type.hash(state);
    }
}

lazy_static! {
    static ref REGISTRY: Vec<CriterionOption> = CriterionType::ALL
        .iter()
        .map(|criterion_type| build_option(*criterion_type))
        .collect();
}

impl CriterionOption {
    /// Shared option for the given filter type
    pub fn get(criterion_type: CriterionType) -> &'static CriterionOption {
        // Registry is built from `CriterionType::ALL`, which follows declaration order.
        &REGISTRY[criterion_type as usize]
    }

    /// Every option, in declaration order
    pub fn all() -> &'static [CriterionOption] {
        &REGISTRY
    }

    pub fn supports(&self, modifier: CriterionModifier) -> bool {
        self.modifier_options.contains(&modifier)
    }

    /// Choice by label (case-insensitive) or by backend value
    pub fn find_choice(&self, raw: &str) -> Option<&'static EnumChoice> {
        let raw = raw.trim();
        self.choices
            .iter()
            .find(|c| c.label.eq_ignore_ascii_case(raw))
            .or_else(|| self.choices.iter().find(|c| c.value == raw))
    }

    fn new(
        criterion_type: CriterionType,
        label: &'static str,
        kind: CriterionKind,
        modifier_options: &'static [CriterionModifier],
        input_field: &'static str,
    ) -> Self {
        CriterionOption {
            criterion_type,
            label,
            kind,
            modifier_options,
            default_modifier: modifier_options[0],
            input_field,
            choices: &[],
            hierarchical: false,
        }
    }

    /// Option whose identifier doubles as label and backend field
    fn plain(criterion_type: CriterionType, kind: CriterionKind) -> Self {
        let id = criterion_type.as_str();
        let modifiers = match kind {
            CriterionKind::String => sets::STRING,
            CriterionKind::MandatoryString => sets::MANDATORY_STRING,
            CriterionKind::Number => sets::NUMBER,
            CriterionKind::MandatoryNumber | CriterionKind::Duration => sets::MANDATORY_NUMBER,
            CriterionKind::Relation => sets::RELATION,
            CriterionKind::None
            | CriterionKind::Flag
            | CriterionKind::Enumerated
            | CriterionKind::Existence => sets::SINGLE,
        };
        CriterionOption::new(criterion_type, id, kind, modifiers, id)
    }

    fn with_choices(mut self, choices: &'static [EnumChoice]) -> Self {
        self.choices = choices;
        self
    }

    fn hierarchical(mut self) -> Self {
        self.hierarchical = true;
        self
    }
}

fn build_option(criterion_type: CriterionType) -> CriterionOption {
    use CriterionKind as K;
    use CriterionType as T;

    match criterion_type {
        T::None => CriterionOption::new(T::None, "None", K::None, sets::SINGLE, ""),
        T::Path => CriterionOption::plain(T::Path, K::MandatoryString),
        T::Rating => CriterionOption::new(T::Rating, "Rating", K::Number, sets::NUMBER, "rating")
            .with_choices(RATING_CHOICES),
        T::Organized => CriterionOption::new(T::Organized, "Organized", K::Flag, sets::SINGLE, "organized"),
        T::Favorite => {
            CriterionOption::new(T::Favorite, "Favourite", K::Flag, sets::SINGLE, "filter_favorites")
        }
        T::HasMarkers => {
            CriterionOption::new(T::HasMarkers, "Has Markers", K::Flag, sets::SINGLE, "has_markers")
        }
        T::Interactive => {
            CriterionOption::new(T::Interactive, "Interactive", K::Flag, sets::SINGLE, "interactive")
        }
        T::OCounter
        | T::SceneCount
        | T::MarkerCount
        | T::ImageCount
        | T::GalleryCount
        | T::PerformerCount
        | T::TagCount
        | T::Age => CriterionOption::plain(criterion_type, K::MandatoryNumber),
        T::BirthYear | T::DeathYear | T::Weight => CriterionOption::plain(criterion_type, K::Number),
        T::Duration => CriterionOption::plain(T::Duration, K::Duration),
        T::Resolution => {
            CriterionOption::new(T::Resolution, "Resolution", K::Enumerated, sets::RESOLUTION, "resolution")
                .with_choices(RESOLUTION_CHOICES)
        }
        T::AverageResolution => CriterionOption::new(
            T::AverageResolution,
            "Average Resolution",
            K::Enumerated,
            sets::RESOLUTION,
            "average_resolution",
        )
        .with_choices(RESOLUTION_CHOICES),
        T::Gender => CriterionOption::new(T::Gender, "Gender", K::Enumerated, sets::GENDER, "gender")
            .with_choices(GENDER_CHOICES),
        T::SceneIsMissing => existence(T::SceneIsMissing, "Scene Is Missing", "scene_is_missing"),
        T::ImageIsMissing => existence(T::ImageIsMissing, "Image Is Missing", "image_is_missing"),
        T::PerformerIsMissing => existence(T::PerformerIsMissing, "Performer Is Missing", "performer_is_missing"),
        T::GalleryIsMissing => existence(T::GalleryIsMissing, "Gallery Is Missing", "gallery_is_missing"),
        T::TagIsMissing => existence(T::TagIsMissing, "Tag Is Missing", "tag_is_missing"),
        T::StudioIsMissing => existence(T::StudioIsMissing, "Studio Is Missing", "studio_is_missing"),
        T::MovieIsMissing => existence(T::MovieIsMissing, "Movie Is Missing", "movie_is_missing"),
        T::Tags => relation(T::Tags, "Tags", "tags").hierarchical(),
        T::SceneTags => relation(T::SceneTags, "Scene Tags", "scene_tags").hierarchical(),
        T::PerformerTags => relation(T::PerformerTags, "Performer Tags", "performer_tags").hierarchical(),
        T::Studios => relation(T::Studios, "Studios", "studios").hierarchical(),
        T::ParentStudios => relation(T::ParentStudios, "Parent Studios", "parents"),
        T::Performers => relation(T::Performers, "Performers", "performers"),
        T::Movies => relation(T::Movies, "Movies", "movies"),
        T::Galleries => relation(T::Galleries, "Galleries", "galleries"),
        T::Ethnicity
        | T::Country
        | T::HairColor
        | T::EyeColor
        | T::Height
        | T::Measurements
        | T::FakeTits
        | T::CareerLength
        | T::Tattoos
        | T::Piercings
        | T::Aliases
        | T::Url
        | T::StashId => CriterionOption::plain(criterion_type, K::String),
    }
}

fn existence(
    criterion_type: CriterionType,
    label: &'static str,
    input_field: &'static str,
) -> CriterionOption {
    CriterionOption::new(
        criterion_type,
        label,
        CriterionKind::Existence,
        sets::SINGLE,
        input_field,
    )
}

fn relation(
    criterion_type: CriterionType,
    label: &'static str,
    input_field: &'static str,
) -> CriterionOption {
    CriterionOption::new(
        criterion_type,
        label,
        CriterionKind::Relation,
        sets::RELATION,
        input_field,
    )
}
