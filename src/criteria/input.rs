//! Backend filter-input fragments produced by criteria.

use serde::Serialize;

use super::modifier::CriterionModifier;

/// `{value, modifier}` for text and enumerated fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StringCriterionInput {
    pub value: String,
    pub modifier: CriterionModifier,
}

/// `{value, value2?, modifier}` for numeric and duration fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntCriterionInput {
    pub value: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value2: Option<i64>,
    pub modifier: CriterionModifier,
}

/// `{value: [ids], modifier, depth?}` for relations
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MultiCriterionInput {
    pub value: Vec<String>,
    pub modifier: CriterionModifier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<i32>,
}

/// Serializes as `{}`; existence checks carry nothing else
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PresenceMarker {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CriterionInput {
    String(StringCriterionInput),
    Int(IntCriterionInput),
    Multi(MultiCriterionInput),
    Bool(bool),
    Text(String),
    Presence(PresenceMarker),
}

impl CriterionInput {
    pub fn to_json(&self) -> serde_json::Value {
        // Every variant is plain data; serialization cannot fail.
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}
