use serde_json::{json, Value};

use list_filter::criteria::{CriterionValue, LabeledId, MatchMode, NumberRange};
use list_filter::{make_criteria, CriteriaSet, CriterionModifier, CriterionType};

fn payload(set: &CriteriaSet) -> Value {
    Value::Object(set.to_filter_input())
}

#[test]
fn test_rating_equals_four() {
    let mut rating = make_criteria(CriterionType::Rating);
    assert_eq!(rating.modifier(), CriterionModifier::Equals);
    assert!(rating.to_criterion_input().is_none());

    rating.set_number(4).unwrap();
    let input = rating.to_criterion_input().unwrap();
    assert_eq!(input.to_json(), json!({"value": 4, "modifier": "EQUALS"}));
    assert_eq!(rating.label(), "Rating is 4");
}

#[test]
fn test_tag_is_missing_is_a_bare_marker() {
    let missing = make_criteria(CriterionType::TagIsMissing);
    let input = missing.to_criterion_input().unwrap().to_json();
    assert_eq!(input, json!({}));
    assert!(input.get("value").is_none());

    let set: CriteriaSet = std::iter::once(missing).collect();
    assert_eq!(payload(&set), json!({"tag_is_missing": {}}));
}

#[test]
fn test_every_existence_criterion_emits_the_same_marker() {
    let existence = [
        CriterionType::SceneIsMissing,
        CriterionType::ImageIsMissing,
        CriterionType::PerformerIsMissing,
        CriterionType::GalleryIsMissing,
        CriterionType::TagIsMissing,
        CriterionType::StudioIsMissing,
        CriterionType::MovieIsMissing,
    ];
    for criterion_type in existence {
        let mut criterion = make_criteria(criterion_type);
        // Nothing to set: a value of any other shape is rejected
        assert!(criterion.set_value(CriterionValue::Text("x".into())).is_err());
        assert!(criterion.set_raw("anything").is_err());
        assert_eq!(criterion.to_criterion_input().unwrap().to_json(), json!({}));
    }
}

#[test]
fn test_count_criteria_share_a_variant() {
    let o_counter = make_criteria(CriterionType::OCounter);
    let scene_count = make_criteria(CriterionType::SceneCount);

    assert_ne!(o_counter.criterion_type(), scene_count.criterion_type());
    assert_eq!(o_counter.kind(), scene_count.kind());
    assert_eq!(
        o_counter.option().modifier_options,
        scene_count.option().modifier_options
    );
}

#[test]
fn test_empty_mandatory_number_is_omitted() {
    let mut rating = make_criteria(CriterionType::Rating);
    rating.set_number(2).unwrap();

    let set: CriteriaSet = vec![make_criteria(CriterionType::Age), rating].into_iter().collect();
    assert_eq!(set.len(), 2);
    assert_eq!(
        payload(&set),
        json!({"rating": {"value": 2, "modifier": "EQUALS"}})
    );
}

#[test]
fn test_none_criterion_is_omitted() {
    let none = make_criteria(CriterionType::default());
    assert_eq!(none.criterion_type(), CriterionType::None);
    assert!(none.to_criterion_input().is_none());
    assert_eq!(none.label(), "");

    let set: CriteriaSet = std::iter::once(none).collect();
    assert!(set.is_empty());
    assert_eq!(payload(&set), json!({}));
}

#[test]
fn test_between_coercion() {
    let mut duration = make_criteria(CriterionType::Duration);
    duration.set_raw("5").unwrap();
    assert_eq!(duration.value(), &CriterionValue::Number(NumberRange::scalar(5)));

    duration.set_modifier(CriterionModifier::Between).unwrap();
    assert_eq!(
        duration.value(),
        &CriterionValue::Number(NumberRange {
            value: Some(5),
            value2: None
        })
    );

    let set: CriteriaSet = std::iter::once(duration.clone()).collect();
    assert_eq!(payload(&set), json!({}));

    duration.set_modifier(CriterionModifier::Equals).unwrap();
    assert_eq!(duration.value(), &CriterionValue::Number(NumberRange::scalar(5)));

    duration.set_modifier(CriterionModifier::Between).unwrap();
    duration.set_bounds(Some(60), Some(5400)).unwrap();
    assert_eq!(
        duration.to_criterion_input().unwrap().to_json(),
        json!({"value": 60, "value2": 5400, "modifier": "BETWEEN"})
    );
    assert_eq!(duration.label(), "duration between 1:00 and 1:30:00");
}

#[test]
fn test_null_check_modifiers() {
    let mut weight = make_criteria(CriterionType::Weight);
    weight.set_modifier(CriterionModifier::IsNull).unwrap();
    assert_eq!(
        weight.to_criterion_input().unwrap().to_json(),
        json!({"value": 0, "modifier": "IS_NULL"})
    );
    assert_eq!(weight.label(), "weight is null");

    let mut country = make_criteria(CriterionType::Country);
    country.set_raw("NZ").unwrap();
    country.set_modifier(CriterionModifier::NotNull).unwrap();
    assert_eq!(
        country.to_criterion_input().unwrap().to_json(),
        json!({"value": "", "modifier": "NOT_NULL"})
    );
}

#[test]
fn test_flag_payloads() {
    let mut organized = make_criteria(CriterionType::Organized);
    organized.set_raw("false").unwrap();
    let mut has_markers = make_criteria(CriterionType::HasMarkers);
    has_markers.set_raw("true").unwrap();

    let set: CriteriaSet = vec![organized, has_markers, make_criteria(CriterionType::Favorite)]
        .into_iter()
        .collect();
    assert_eq!(
        payload(&set),
        json!({
            "organized": false,
            "has_markers": "true",
            "filter_favorites": true
        })
    );
}

#[test]
fn test_enumerated_payloads_use_wire_values() {
    let mut resolution = make_criteria(CriterionType::Resolution);
    resolution.set_modifier(CriterionModifier::GreaterThan).unwrap();
    resolution.set_raw("1080p").unwrap();

    let mut gender = make_criteria(CriterionType::Gender);
    gender.set_raw("non-binary").unwrap();

    let set: CriteriaSet = vec![resolution, gender].into_iter().collect();
    assert_eq!(
        payload(&set),
        json!({
            "resolution": {"value": "FULL_HD", "modifier": "GREATER_THAN"},
            "gender": {"value": "NON_BINARY", "modifier": "EQUALS"}
        })
    );
}

#[test]
fn test_relation_payloads() {
    let mut tags = make_criteria(CriterionType::Tags);
    tags.add_item(LabeledId::new("3", "Outdoor")).unwrap();
    tags.add_item(LabeledId::new("9", "Sunset")).unwrap();
    tags.add_item(LabeledId::new("3", "Outdoor")).unwrap();
    tags.set_match_mode(MatchMode::All).unwrap();
    tags.set_depth(-1).unwrap();
    assert_eq!(tags.label(), "Tags includes all Outdoor, Sunset");

    let mut performers = make_criteria(CriterionType::Performers);
    performers.set_raw("12, 40").unwrap();
    performers.set_modifier(CriterionModifier::Excludes).unwrap();
    assert!(performers.set_depth(1).is_err());

    let mut parents = make_criteria(CriterionType::ParentStudios);
    parents.add_item(LabeledId::new("2", "Network")).unwrap();

    let set: CriteriaSet = vec![tags, performers, parents].into_iter().collect();
    assert_eq!(
        payload(&set),
        json!({
            "tags": {"value": ["3", "9"], "modifier": "INCLUDES_ALL", "depth": -1},
            "performers": {"value": ["12", "40"], "modifier": "EXCLUDES"},
            "parents": {"value": ["2"], "modifier": "INCLUDES"}
        })
    );
}

#[test]
fn test_regex_modifier_requires_valid_pattern() {
    let mut path = make_criteria(CriterionType::Path);
    path.set_modifier(CriterionModifier::MatchesRegex).unwrap();
    path.set_raw("(unclosed").unwrap();
    assert!(!path.is_valid());
    assert!(path.to_criterion_input().is_none());

    path.set_raw(r"^/media/\d{4}/").unwrap();
    assert!(path.is_valid());
}

#[test]
fn test_same_type_replaces_previous_entry() {
    let mut first = make_criteria(CriterionType::Rating);
    first.set_number(1).unwrap();
    let mut second = make_criteria(CriterionType::Rating);
    second.set_number(5).unwrap();

    let set: CriteriaSet = vec![first, second].into_iter().collect();
    assert_eq!(set.len(), 1);
    assert_eq!(
        payload(&set),
        json!({"rating": {"value": 5, "modifier": "EQUALS"}})
    );
}
