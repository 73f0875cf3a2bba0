use serde_json::{json, Value};

use list_filter::config::FilterConfig;
use list_filter::criteria::{LabeledId, MatchMode};
use list_filter::filter::{DisplayMode, SortDirection};
use list_filter::{make_criteria, CriterionModifier, CriterionType, FilterMode, ListFilter};

mod common;

fn filter_config() -> FilterConfig {
    FilterConfig::default()
}

#[test]
fn test_default_sort_per_mode() {
    let expected = [
        (FilterMode::Scenes, "date"),
        (FilterMode::Images, "path"),
        (FilterMode::Galleries, "path"),
        (FilterMode::SceneMarkers, "title"),
        (FilterMode::Performers, "name"),
        (FilterMode::Tags, "name"),
    ];
    for (mode, sort) in expected {
        let filter = ListFilter::new(mode, &filter_config());
        assert_eq!(filter.make_find_filter().sort, sort, "{}", mode);
    }
}

#[test]
fn test_parse_full_query() {
    let mut studios = make_criteria(CriterionType::Studios);
    studios.add_item(LabeledId::new("6", "Harbour Films")).unwrap();
    studios.set_depth(-1).unwrap();

    let mut performer_count = make_criteria(CriterionType::PerformerCount);
    performer_count.set_modifier(CriterionModifier::GreaterThan).unwrap();
    performer_count.set_number(2).unwrap();

    let query = format!(
        "q=harbour&sortby=rating&sortdir=desc&disp=1&p=4&perPage=20&{}&{}",
        common::criterion_param(&studios),
        common::criterion_param(&performer_count)
    );
    let filter = ListFilter::from_query_string(FilterMode::Scenes, &filter_config(), &query);

    assert_eq!(filter.search_term.as_deref(), Some("harbour"));
    assert_eq!(filter.sort_by, "rating");
    assert_eq!(filter.sort_direction, SortDirection::Desc);
    assert_eq!(filter.display_mode, DisplayMode::List);
    assert_eq!(filter.current_page, 4);
    assert_eq!(filter.items_per_page, 20);
    assert_eq!(filter.criteria.len(), 2);
    assert_eq!(filter.criteria.get(CriterionType::Studios), Some(&studios));

    assert_eq!(
        Value::Object(filter.make_filter_input()),
        json!({
            "studios": {"value": ["6"], "modifier": "INCLUDES", "depth": -1},
            "performer_count": {"value": 2, "modifier": "GREATER_THAN"}
        })
    );
}

#[test]
fn test_round_trip_through_query_string() {
    let mut filter = ListFilter::new(FilterMode::Performers, &filter_config());
    filter.search_term = Some("a & b = c".to_string());
    filter.sort_direction = SortDirection::Desc;
    filter.display_mode = DisplayMode::Tagger;

    let mut gender = make_criteria(CriterionType::Gender);
    gender.set_raw("FEMALE").unwrap();
    filter.criteria.insert(gender);

    let mut tags = make_criteria(CriterionType::Tags);
    tags.set_raw("1,2,3").unwrap();
    tags.set_match_mode(MatchMode::All).unwrap();
    filter.criteria.insert(tags);

    filter.criteria.insert(make_criteria(CriterionType::PerformerIsMissing));

    let parsed = ListFilter::from_query_string(
        FilterMode::Performers,
        &filter_config(),
        &filter.make_query_parameters(),
    );
    assert_eq!(parsed, filter);
}

#[test]
fn test_query_without_criteria_keeps_existing_ones() {
    let mut filter = ListFilter::new(FilterMode::Tags, &filter_config());
    filter.criteria.insert(make_criteria(CriterionType::TagIsMissing));

    filter.configure_from_query_parameters("sortby=scene_count");
    assert_eq!(filter.sort_by, "scene_count");
    assert_eq!(filter.criteria.len(), 1);

    let mut marker_count = make_criteria(CriterionType::MarkerCount);
    marker_count.set_number(0).unwrap();
    filter.configure_from_query_parameters(&common::criterion_param(&marker_count));
    assert_eq!(filter.criteria.len(), 1);
    assert!(filter.criteria.get(CriterionType::TagIsMissing).is_none());
}

#[test]
fn test_configured_page_size_limits() {
    let config = common::create_test_app_config_with_limits(25, 100);
    let filter = ListFilter::from_query_string(FilterMode::Images, &config.filter, "perPage=500");
    assert_eq!(filter.items_per_page, 100);

    let filter = ListFilter::new(FilterMode::Images, &config.filter);
    assert_eq!(filter.items_per_page, 25);
    assert_eq!(filter.make_query_parameters(), "sortby=path");
}
