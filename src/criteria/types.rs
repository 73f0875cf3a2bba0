use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

macro_rules! criterion_types {
    ($($variant:ident => $id:literal,)+) => {
        /// Closed set of filter-type identifiers a user can pick.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        pub enum CriterionType {
            #[default]
            $($variant,)+
        }

        impl CriterionType {
            pub const ALL: &'static [CriterionType] = &[$(CriterionType::$variant,)+];

            /// Identifier used in URLs and by the field picker
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(CriterionType::$variant => $id,)+
                }
            }
        }

        impl FromStr for CriterionType {
            type Err = AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($id => Ok(CriterionType::$variant),)+
                    _ => Err(AppError::UnknownCriterionType(s.to_string())),
                }
            }
        }
    };
}

// `None` must stay first: it is the default identifier.
criterion_types! {
    None => "none",
    Path => "path",
    Rating => "rating",
    Organized => "organized",
    OCounter => "o_counter",
    SceneCount => "scene_count",
    MarkerCount => "marker_count",
    ImageCount => "image_count",
    GalleryCount => "gallery_count",
    PerformerCount => "performer_count",
    TagCount => "tag_count",
    Resolution => "resolution",
    AverageResolution => "average_resolution",
    Duration => "duration",
    Favorite => "favorite",
    HasMarkers => "hasMarkers",
    SceneIsMissing => "sceneIsMissing",
    ImageIsMissing => "imageIsMissing",
    PerformerIsMissing => "performerIsMissing",
    GalleryIsMissing => "galleryIsMissing",
    TagIsMissing => "tagIsMissing",
    StudioIsMissing => "studioIsMissing",
    MovieIsMissing => "movieIsMissing",
    Tags => "tags",
    SceneTags => "sceneTags",
    PerformerTags => "performerTags",
    Performers => "performers",
    Studios => "studios",
    ParentStudios => "parent_studios",
    Movies => "movies",
    Galleries => "galleries",
    BirthYear => "birth_year",
    DeathYear => "death_year",
    Weight => "weight",
    Age => "age",
    Gender => "gender",
    Ethnicity => "ethnicity",
    Country => "country",
    HairColor => "hair_color",
    EyeColor => "eye_color",
    Height => "height",
    Measurements => "measurements",
    FakeTits => "fake_tits",
    CareerLength => "career_length",
    Tattoos => "tattoos",
    Piercings => "piercings",
    Aliases => "aliases",
    Url => "url",
    StashId => "stash_id",
    Interactive => "interactive",
}

impl fmt::Display for CriterionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CriterionType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CriterionType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
