use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::criteria::CriterionType;
use crate::error::AppError;

/// Which list page a filter belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    Scenes,
    Performers,
    Studios,
    Galleries,
    #[serde(rename = "markers")]
    SceneMarkers,
    Movies,
    Tags,
    Images,
}

impl FilterMode {
    pub const ALL: [FilterMode; 8] = [
        FilterMode::Scenes,
        FilterMode::Performers,
        FilterMode::Studios,
        FilterMode::Galleries,
        FilterMode::SceneMarkers,
        FilterMode::Movies,
        FilterMode::Tags,
        FilterMode::Images,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterMode::Scenes => "scenes",
            FilterMode::Performers => "performers",
            FilterMode::Studios => "studios",
            FilterMode::Galleries => "galleries",
            FilterMode::SceneMarkers => "markers",
            FilterMode::Movies => "movies",
            FilterMode::Tags => "tags",
            FilterMode::Images => "images",
        }
    }

    pub fn default_sort(&self) -> &'static str {
        match self {
            FilterMode::Scenes => "date",
            FilterMode::Images | FilterMode::Galleries => "path",
            FilterMode::SceneMarkers => "title",
            FilterMode::Performers | FilterMode::Studios | FilterMode::Movies | FilterMode::Tags => {
                "name"
            }
        }
    }

    /// Criteria offered on this list page, `none` first
    pub fn criterion_types(&self) -> &'static [CriterionType] {
        use CriterionType as T;

        match self {
            FilterMode::Scenes => &[
                T::None,
                T::Path,
                T::Rating,
                T::Organized,
                T::OCounter,
                T::Resolution,
                T::Duration,
                T::HasMarkers,
                T::SceneIsMissing,
                T::Tags,
                T::PerformerTags,
                T::Performers,
                T::Studios,
                T::Movies,
                T::Galleries,
                T::PerformerCount,
                T::TagCount,
                T::Url,
                T::StashId,
                T::Interactive,
            ],
            FilterMode::Images => &[
                T::None,
                T::Path,
                T::Rating,
                T::Organized,
                T::OCounter,
                T::Resolution,
                T::ImageIsMissing,
                T::Tags,
                T::PerformerTags,
                T::Performers,
                T::Studios,
                T::Galleries,
                T::PerformerCount,
                T::TagCount,
            ],
            FilterMode::Performers => &[
                T::None,
                T::Favorite,
                T::Rating,
                T::Tags,
                T::Studios,
                T::PerformerIsMissing,
                T::BirthYear,
                T::DeathYear,
                T::Age,
                T::Gender,
                T::Ethnicity,
                T::Country,
                T::HairColor,
                T::EyeColor,
                T::Height,
                T::Weight,
                T::Measurements,
                T::FakeTits,
                T::CareerLength,
                T::Tattoos,
                T::Piercings,
                T::Aliases,
                T::Url,
                T::StashId,
                T::SceneCount,
                T::ImageCount,
                T::GalleryCount,
                T::TagCount,
            ],
            FilterMode::Studios => &[
                T::None,
                T::ParentStudios,
                T::StudioIsMissing,
                T::Rating,
                T::SceneCount,
                T::ImageCount,
                T::GalleryCount,
                T::Url,
                T::StashId,
                T::Aliases,
            ],
            FilterMode::Galleries => &[
                T::None,
                T::Path,
                T::Rating,
                T::Organized,
                T::AverageResolution,
                T::GalleryIsMissing,
                T::Tags,
                T::PerformerTags,
                T::Performers,
                T::Studios,
                T::ImageCount,
                T::PerformerCount,
                T::TagCount,
                T::Url,
            ],
            FilterMode::SceneMarkers => &[T::None, T::Tags, T::SceneTags, T::Performers],
            FilterMode::Movies => &[
                T::None,
                T::Studios,
                T::MovieIsMissing,
                T::Duration,
                T::Rating,
                T::Url,
            ],
            FilterMode::Tags => &[
                T::None,
                T::TagIsMissing,
                T::SceneCount,
                T::ImageCount,
                T::GalleryCount,
                T::PerformerCount,
                T::MarkerCount,
            ],
        }
    }

    pub fn offers(&self, criterion_type: CriterionType) -> bool {
        self.criterion_types().contains(&criterion_type)
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterMode::ALL
            .iter()
            .copied()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AppError::UnknownFilterMode(s.to_string()))
    }
}
