use serde::{Deserialize, Serialize};

use super::option::CriterionKind;

/// Scalar or `[value, value2]` range; `value2` is only read by range modifiers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value2: Option<i64>,
}

impl NumberRange {
    pub fn scalar(value: i64) -> Self {
        NumberRange {
            value: Some(value),
            value2: None,
        }
    }

    pub fn between(min: i64, max: i64) -> Self {
        NumberRange {
            value: Some(min),
            value2: Some(max),
        }
    }
}

/// A referenced entity as shown in a relation picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledId {
    pub id: String,
    #[serde(default)]
    pub label: String,
}

impl LabeledId {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        LabeledId {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Whether an INCLUDES relation must match every item or any of them
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    #[default]
    Any,
    All,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RelationValue {
    pub items: Vec<LabeledId>,
    pub match_mode: MatchMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<i32>,
}

impl RelationValue {
    pub fn ids(&self) -> Vec<String> {
        self.items.iter().map(|item| item.id.clone()).collect()
    }

    /// Append unless the id is already present
    pub fn push(&mut self, item: LabeledId) -> bool {
        if self.items.iter().any(|existing| existing.id == item.id) {
            return false;
        }
        self.items.push(item);
        true
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Keep first occurrence of every id
    pub(crate) fn dedup(&mut self) {
        let mut seen = std::collections::HashSet::new();
        self.items.retain(|item| seen.insert(item.id.clone()));
    }
}

/// Payload of a criterion; its shape is fixed by the option's kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CriterionValue {
    None,
    Text(String),
    Number(NumberRange),
    Flag(Option<bool>),
    Choice(Option<String>),
    Relation(RelationValue),
    Presence,
}

impl CriterionValue {
    /// Empty value for a kind
    pub fn default_for(kind: CriterionKind, hierarchical: bool) -> Self {
        match kind {
            CriterionKind::None => CriterionValue::None,
            CriterionKind::String | CriterionKind::MandatoryString => {
                CriterionValue::Text(String::new())
            }
            CriterionKind::Number | CriterionKind::MandatoryNumber | CriterionKind::Duration => {
                CriterionValue::Number(NumberRange::default())
            }
            CriterionKind::Flag => CriterionValue::Flag(Some(true)),
            CriterionKind::Enumerated => CriterionValue::Choice(None),
            CriterionKind::Relation => CriterionValue::Relation(RelationValue {
                depth: hierarchical.then_some(0),
                ..RelationValue::default()
            }),
            CriterionKind::Existence => CriterionValue::Presence,
        }
    }

    /// Does this value have the shape the kind requires
    pub fn fits(&self, kind: CriterionKind) -> bool {
        matches!(
            (kind, self),
            (CriterionKind::None, CriterionValue::None)
                | (CriterionKind::String, CriterionValue::Text(_))
                | (CriterionKind::MandatoryString, CriterionValue::Text(_))
                | (CriterionKind::Number, CriterionValue::Number(_))
                | (CriterionKind::MandatoryNumber, CriterionValue::Number(_))
                | (CriterionKind::Duration, CriterionValue::Number(_))
                | (CriterionKind::Flag, CriterionValue::Flag(_))
                | (CriterionKind::Enumerated, CriterionValue::Choice(_))
                | (CriterionKind::Relation, CriterionValue::Relation(_))
                | (CriterionKind::Existence, CriterionValue::Presence)
        )
    }
}
