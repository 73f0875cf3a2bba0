use super::criterion::Criterion;
use super::option::CriterionOption;
use super::types::CriterionType;

/// Build a default-initialized criterion for a filter type.
///
/// The mapping is total: every identifier has an arm and there is no
/// wildcard, so adding a `CriterionType` without a case fails to compile.
/// Identifiers that share a variant differ only by the option they carry.
pub fn make_criteria(criterion_type: CriterionType) -> Criterion {
    use CriterionType as T;

    let option = CriterionOption::get(criterion_type);
    match criterion_type {
        T::None => Criterion::new(option),
        T::Path => Criterion::new(option),
        T::Rating => Criterion::new(option),
        T::Organized | T::Favorite | T::HasMarkers | T::Interactive => Criterion::new(option),
        T::OCounter
        | T::SceneCount
        | T::MarkerCount
        | T::ImageCount
        | T::GalleryCount
        | T::PerformerCount
        | T::TagCount => Criterion::new(option),
        T::Resolution | T::AverageResolution => Criterion::new(option),
        T::Duration => Criterion::new(option),
        T::SceneIsMissing
        | T::ImageIsMissing
        | T::PerformerIsMissing
        | T::GalleryIsMissing
        | T::TagIsMissing
        | T::StudioIsMissing
        | T::MovieIsMissing => Criterion::new(option),
        T::Tags | T::SceneTags | T::PerformerTags => Criterion::new(option),
        T::Performers | T::Studios | T::ParentStudios | T::Movies | T::Galleries => {
            Criterion::new(option)
        }
        T::BirthYear | T::DeathYear | T::Weight => Criterion::new(option),
        T::Age => Criterion::new(option),
        T::Gender => Criterion::new(option),
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
        | T::StashId => Criterion::new(option),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::{CriterionKind, CriterionModifier, CriterionValue};

    #[test]
    fn test_every_type_builds_its_own_option() {
        for criterion_type in CriterionType::ALL {
            let criterion = make_criteria(*criterion_type);
            assert_eq!(criterion.option().criterion_type, *criterion_type);
            assert!(criterion.value().fits(criterion.kind()));
            assert_eq!(criterion.modifier(), criterion.option().default_modifier);
        }
    }

    #[test]
    fn test_default_identifier_is_none() {
        let criterion = make_criteria(CriterionType::default());
        assert_eq!(criterion.kind(), CriterionKind::None);
        assert_eq!(criterion.value(), &CriterionValue::None);
    }

    #[test]
    fn test_counters_share_a_variant() {
        let o_counter = make_criteria(CriterionType::OCounter);
        let scene_count = make_criteria(CriterionType::SceneCount);
        assert_ne!(o_counter.criterion_type(), scene_count.criterion_type());
        assert_eq!(o_counter.kind(), CriterionKind::MandatoryNumber);
        assert_eq!(o_counter.kind(), scene_count.kind());
        assert_eq!(
            o_counter.option().modifier_options,
            scene_count.option().modifier_options
        );
        assert_eq!(o_counter.option().label, "o_counter");
        assert_eq!(o_counter.option().input_field, "o_counter");
    }

    #[test]
    fn test_variant_groups() {
        let expect = |criterion_type: CriterionType, kind: CriterionKind| {
            assert_eq!(make_criteria(criterion_type).kind(), kind, "{}", criterion_type);
        };
        expect(CriterionType::Path, CriterionKind::MandatoryString);
        expect(CriterionType::Age, CriterionKind::MandatoryNumber);
        expect(CriterionType::BirthYear, CriterionKind::Number);
        expect(CriterionType::Weight, CriterionKind::Number);
        expect(CriterionType::Duration, CriterionKind::Duration);
        expect(CriterionType::StashId, CriterionKind::String);
        expect(CriterionType::FakeTits, CriterionKind::String);
        expect(CriterionType::Gender, CriterionKind::Enumerated);
        expect(CriterionType::AverageResolution, CriterionKind::Enumerated);
        expect(CriterionType::Interactive, CriterionKind::Flag);
        expect(CriterionType::MovieIsMissing, CriterionKind::Existence);
        expect(CriterionType::ParentStudios, CriterionKind::Relation);
    }

    #[test]
    fn test_tag_relations_differ_only_by_option() {
        let tags = make_criteria(CriterionType::Tags);
        let scene_tags = make_criteria(CriterionType::SceneTags);
        let performer_tags = make_criteria(CriterionType::PerformerTags);

        assert_eq!(tags.kind(), scene_tags.kind());
        assert_eq!(tags.kind(), performer_tags.kind());
        assert_eq!(tags.value(), scene_tags.value());
        assert_eq!(tags.option().input_field, "tags");
        assert_eq!(scene_tags.option().input_field, "scene_tags");
        assert_eq!(performer_tags.option().input_field, "performer_tags");
    }

    #[test]
    fn test_rating_defaults() {
        let rating = make_criteria(CriterionType::Rating);
        assert_eq!(rating.modifier(), CriterionModifier::Equals);
        assert_eq!(rating.option().choices.len(), 5);
        assert!(!rating.is_valid());
    }
}
