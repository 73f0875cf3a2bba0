use axum::{
    extract::{Path, State},
    http::{StatusCode, Uri},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::debug;

use super::criteria::criterion_to_json;
use crate::config::AppConfig;
use crate::criteria::{make_criteria, Criterion, CriterionModifier, CriterionType, LabeledId, MatchMode};
use crate::error::{AppError, AppResult};
use crate::filter::{FilterMode, ListFilter};

type AppState = Arc<AppConfig>;

/// Body for building a single criterion from form input
#[derive(Debug, Deserialize)]
pub struct CriterionRequest {
    #[serde(rename = "type")]
    pub criterion_type: String,
    pub modifier: Option<String>,
    /// Raw form-control value
    pub value: Option<String>,
    /// `[min, max]` for range modifiers
    pub bounds: Option<(Option<i64>, Option<i64>)>,
    #[serde(default)]
    pub items: Vec<LabeledId>,
    #[serde(rename = "match")]
    pub match_mode: Option<MatchMode>,
    pub depth: Option<i32>,
}

/// Translate a list query string into the backend's find filter and filter input
pub async fn get_filter(
    State(app_config): State<AppState>,
    Path(mode): Path<String>,
    uri: Uri,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let mode: FilterMode = mode.parse().map_err(|e: AppError| e.to_response())?;
    let query = uri.query().unwrap_or_default();

    let filter = ListFilter::from_query_string(mode, &app_config.filter, query);
    debug!(
        mode = %mode,
        criteria = filter.criteria.len(),
        "Translated list filter"
    );

    let criteria: Vec<Value> = filter
        .criteria
        .iter()
        .map(|criterion| {
            json!({
                "type": criterion.criterion_type(),
                "label": criterion.label(),
                "valid": criterion.is_valid(),
            })
        })
        .collect();

    Ok(Json(json!({
        "mode": mode,
        "find_filter": filter.make_find_filter(),
        "filter": filter.make_filter_input(),
        "criteria": criteria,
        "query": filter.make_query_parameters(),
    })))
}

pub async fn build_criterion(
    Path(mode): Path<String>,
    Json(request): Json<CriterionRequest>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let mode: FilterMode = mode.parse().map_err(|e: AppError| e.to_response())?;
    let criterion = criterion_from_request(mode, &request).map_err(|e| e.to_response())?;
    Ok(Json(criterion_to_json(&criterion)))
}

fn criterion_from_request(mode: FilterMode, request: &CriterionRequest) -> AppResult<Criterion> {
    let criterion_type: CriterionType = request
        .criterion_type
        .parse()
        .map_err(|e: AppError| AppError::BadRequest(e.to_string()))?;
    if !mode.offers(criterion_type) {
        return Err(AppError::BadRequest(format!(
            "{} is not offered for {}",
            criterion_type, mode
        )));
    }

    let mut criterion = make_criteria(criterion_type);

    if let Some(raw_modifier) = &request.modifier {
        let modifier: CriterionModifier = raw_modifier.parse().map_err(AppError::BadRequest)?;
        criterion.set_modifier(modifier)?;
    }
    if let Some(raw_value) = &request.value {
        criterion.set_raw(raw_value)?;
    }
    if let Some((min, max)) = request.bounds {
        criterion.set_bounds(min, max)?;
    }
    for item in &request.items {
        criterion.add_item(item.clone())?;
    }
    if let Some(match_mode) = request.match_mode {
        criterion.set_match_mode(match_mode)?;
    }
    if let Some(depth) = request.depth {
        criterion.set_depth(depth)?;
    }

    Ok(criterion)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(criterion_type: &str) -> CriterionRequest {
        CriterionRequest {
            criterion_type: criterion_type.to_string(),
            modifier: None,
            value: None,
            bounds: None,
            items: Vec::new(),
            match_mode: None,
            depth: None,
        }
    }

    #[test]
    fn test_criterion_from_request() {
        let mut req = request("duration");
        req.modifier = Some("BETWEEN".to_string());
        req.bounds = Some((Some(60), Some(120)));

        let criterion = criterion_from_request(FilterMode::Scenes, &req).unwrap();
        assert_eq!(criterion.modifier(), CriterionModifier::Between);
        assert!(criterion.is_valid());
    }

    #[test]
    fn test_criterion_not_offered_by_mode() {
        let err = criterion_from_request(FilterMode::Tags, &request("gender")).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn test_bad_modifier() {
        let mut req = request("rating");
        req.modifier = Some("SIDEWAYS".to_string());
        let err = criterion_from_request(FilterMode::Scenes, &req).unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        req.modifier = Some("INCLUDES".to_string());
        let err = criterion_from_request(FilterMode::Scenes, &req).unwrap_err();
        assert!(matches!(err, AppError::Criterion(_)));
    }
}
