use axum::{extract::Path, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::criteria::{make_criteria, Criterion, CriterionOption, CriterionType};
use crate::error::AppError;

/// JSON view of a criterion as the UI and query executor consume it
pub fn criterion_to_json(criterion: &Criterion) -> Value {
    json!({
        "type": criterion.criterion_type(),
        "kind": criterion.kind(),
        "modifier": criterion.modifier(),
        "value": criterion.value(),
        "label": criterion.label(),
        "valid": criterion.is_valid(),
        "field": criterion.option().input_field,
        "input": criterion.to_criterion_input(),
        "url": criterion.encode_url(),
    })
}

pub async fn list_criteria() -> Json<Value> {
    let options = CriterionOption::all();
    Json(json!({
        "totalResults": options.len(),
        "criteria": options,
    }))
}

pub async fn get_criterion(
    Path(criterion_type): Path<String>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let criterion_type: CriterionType = criterion_type
        .parse()
        .map_err(|e: AppError| e.to_response())?;

    let criterion = make_criteria(criterion_type);
    Ok(Json(criterion_to_json(&criterion)))
}
