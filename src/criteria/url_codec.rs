//! Compact text encoding of a criterion for query strings.
//!
//! A criterion is written as a JSON object `{"type", "modifier", "value"}`
//! with the structural braces swapped for parentheses, e.g.
//! `("type":"rating","modifier":"EQUALS","value":("value":4))`.
//! Decoding accepts both forms and a few legacy value shapes, and never
//! fails: anything it cannot read falls back to the criterion's default.

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use super::criterion::Criterion;
use super::factory::make_criteria;
use super::modifier::CriterionModifier;
use super::option::CriterionKind;
use super::types::CriterionType;
use super::value::{CriterionValue, LabeledId, MatchMode, NumberRange, RelationValue};

#[derive(Serialize)]
struct EncodedCriterion {
    #[serde(rename = "type")]
    criterion_type: CriterionType,
    modifier: CriterionModifier,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<Value>,
}

#[derive(Serialize)]
struct EncodedRelation<'a> {
    items: &'a [LabeledId],
    #[serde(skip_serializing_if = "Option::is_none")]
    depth: Option<i32>,
    #[serde(rename = "match", skip_serializing_if = "Option::is_none")]
    match_mode: Option<MatchMode>,
}

impl Criterion {
    /// Encode modifier and value for embedding in a URL
    pub fn encode_url(&self) -> String {
        let encoded = EncodedCriterion {
            criterion_type: self.criterion_type(),
            modifier: self.wire_modifier(),
            value: self.encoded_value(),
        };
        let json = serde_json::to_string(&encoded).unwrap_or_default();
        swap_structural(&json, ('{', '}'), ('(', ')'))
    }

    /// Replace modifier and value with those found in `raw`.
    ///
    /// The `type` recorded in the fragment is not checked; use
    /// [`Criterion::from_url`] to build the right criterion first.
    pub fn decode_url(&mut self, raw: &str) {
        self.reset();
        match parse_fragment(raw) {
            Some(fragment) => self.apply_fragment(&fragment),
            None => debug!(fragment = raw, "Unreadable criterion fragment, using defaults"),
        }
    }

    /// Build the criterion a fragment describes; `None` when its type is unknown
    pub fn from_url(raw: &str) -> Option<Criterion> {
        let Some(fragment) = parse_fragment(raw) else {
            debug!(fragment = raw, "Skipping unreadable criterion fragment");
            return None;
        };

        let criterion_type = match fragment.get("type").and_then(Value::as_str) {
            Some(id) => match id.parse::<CriterionType>() {
                Ok(criterion_type) => criterion_type,
                Err(err) => {
                    debug!(fragment = raw, "Skipping criterion fragment: {}", err);
                    return None;
                }
            },
            None => {
                debug!(fragment = raw, "Skipping criterion fragment without a type");
                return None;
            }
        };

        let mut criterion = make_criteria(criterion_type);
        criterion.apply_fragment(&fragment);
        Some(criterion)
    }

    fn encoded_value(&self) -> Option<Value> {
        match self.value() {
            CriterionValue::None | CriterionValue::Presence => None,
            CriterionValue::Text(text) => Some(Value::String(text.clone())),
            CriterionValue::Number(range) => serde_json::to_value(range).ok(),
            CriterionValue::Flag(flag) => Some(
                flag.map(|f| Value::String(f.to_string()))
                    .unwrap_or(Value::Null),
            ),
            CriterionValue::Choice(choice) => Some(
                choice
                    .as_ref()
                    .map(|label| Value::String(label.clone()))
                    .unwrap_or(Value::Null),
            ),
            CriterionValue::Relation(relation) => {
                // INCLUDES_ALL already carries the match mode
                let explicit_mode = relation.match_mode == MatchMode::All
                    && self.wire_modifier() != CriterionModifier::IncludesAll;
                serde_json::to_value(EncodedRelation {
                    items: &relation.items,
                    depth: relation.depth,
                    match_mode: explicit_mode.then_some(MatchMode::All),
                })
                .ok()
            }
        }
    }

    fn apply_fragment(&mut self, fragment: &Map<String, Value>) {
        let mut includes_all = false;

        if let Some(raw_modifier) = fragment.get("modifier").and_then(Value::as_str) {
            match raw_modifier.parse::<CriterionModifier>() {
                Ok(CriterionModifier::IncludesAll) if self.kind() == CriterionKind::Relation => {
                    includes_all = true;
                    let _ = self.set_modifier(CriterionModifier::Includes);
                }
                Ok(modifier) => {
                    if self.set_modifier(modifier).is_err() {
                        debug!(
                            criterion = %self.criterion_type(),
                            modifier = %modifier,
                            "Ignoring modifier not offered for this criterion"
                        );
                    }
                }
                Err(err) => debug!(criterion = %self.criterion_type(), "{}", err),
            }
        }

        let Some(raw_value) = fragment.get("value") else {
            return;
        };
        match self.decode_value(raw_value, includes_all) {
            Some(value) => {
                if let Err(err) = self.set_value(value) {
                    debug!(criterion = %self.criterion_type(), "{}", err);
                }
            }
            None => debug!(
                criterion = %self.criterion_type(),
                value = %raw_value,
                "Unreadable criterion value, using default"
            ),
        }
    }

    fn decode_value(&self, raw: &Value, includes_all: bool) -> Option<CriterionValue> {
        match self.kind() {
            CriterionKind::None | CriterionKind::Existence => None,
            CriterionKind::String | CriterionKind::MandatoryString => {
                raw.as_str().map(|text| CriterionValue::Text(text.to_string()))
            }
            CriterionKind::Number | CriterionKind::MandatoryNumber | CriterionKind::Duration => {
                decode_number(raw).map(CriterionValue::Number)
            }
            CriterionKind::Flag => match raw {
                Value::Null => Some(CriterionValue::Flag(None)),
                Value::Bool(flag) => Some(CriterionValue::Flag(Some(*flag))),
                Value::String(text) => match text.as_str() {
                    "true" => Some(CriterionValue::Flag(Some(true))),
                    "false" => Some(CriterionValue::Flag(Some(false))),
                    _ => None,
                },
                _ => None,
            },
            CriterionKind::Enumerated => match raw {
                Value::Null => Some(CriterionValue::Choice(None)),
                Value::String(text) => self
                    .option()
                    .find_choice(text)
                    .map(|choice| CriterionValue::Choice(Some(choice.label.to_string()))),
                _ => None,
            },
            CriterionKind::Relation => {
                let mut relation = decode_relation(raw, self.option().hierarchical)?;
                if includes_all {
                    relation.match_mode = MatchMode::All;
                }
                Some(CriterionValue::Relation(relation))
            }
        }
    }
}

fn decode_number(raw: &Value) -> Option<NumberRange> {
    match raw {
        // legacy: bare scalar
        Value::Number(number) => number.as_i64().map(NumberRange::scalar),
        Value::String(text) => text.trim().parse().ok().map(NumberRange::scalar),
        Value::Object(fields) => Some(NumberRange {
            value: fields.get("value").and_then(as_i64_lenient),
            value2: fields.get("value2").and_then(as_i64_lenient),
        }),
        _ => None,
    }
}

fn as_i64_lenient(raw: &Value) -> Option<i64> {
    match raw {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

fn decode_relation(raw: &Value, hierarchical: bool) -> Option<RelationValue> {
    match raw {
        // legacy: bare list of {id, label}
        Value::Array(items) => Some(RelationValue {
            items: decode_items(items),
            match_mode: MatchMode::Any,
            depth: hierarchical.then_some(0),
        }),
        Value::Object(fields) => {
            let items = fields
                .get("items")
                .and_then(Value::as_array)
                .map(|items| decode_items(items))
                .unwrap_or_default();
            let depth = fields
                .get("depth")
                .and_then(Value::as_i64)
                .and_then(|depth| i32::try_from(depth).ok());
            let match_mode = match fields.get("match").and_then(Value::as_str) {
                Some("all") => MatchMode::All,
                _ => MatchMode::Any,
            };
            Some(RelationValue {
                items,
                match_mode,
                depth,
            })
        }
        _ => None,
    }
}

fn decode_items(items: &[Value]) -> Vec<LabeledId> {
    items
        .iter()
        .filter_map(|item| match item {
            Value::String(id) => Some(LabeledId::new(id.clone(), id.clone())),
            Value::Number(id) => Some(LabeledId::new(id.to_string(), id.to_string())),
            Value::Object(fields) => {
                let id = match fields.get("id")? {
                    Value::String(id) => id.clone(),
                    Value::Number(id) => id.to_string(),
                    _ => return None,
                };
                let label = fields
                    .get("label")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string();
                Some(LabeledId { id, label })
            }
            _ => None,
        })
        .collect()
}

fn parse_fragment(raw: &str) -> Option<Map<String, Value>> {
    let json = swap_structural(raw.trim(), ('(', ')'), ('{', '}'));
    match serde_json::from_str::<Value>(&json) {
        Ok(Value::Object(fields)) => Some(fields),
        _ => None,
    }
}

/// Swap a bracket pair for another, leaving JSON string contents untouched
fn swap_structural(input: &str, from: (char, char), to: (char, char)) -> String {
    let mut output = String::with_capacity(input.len());
    let mut in_quotes = false;
    let mut escape_next = false;

    for ch in input.chars() {
        if escape_next {
            escape_next = false;
            output.push(ch);
            continue;
        }

        if in_quotes && ch == '\\' {
            escape_next = true;
            output.push(ch);
            continue;
        }

        if ch == '"' {
            in_quotes = !in_quotes;
            output.push(ch);
            continue;
        }

        if !in_quotes && ch == from.0 {
            output.push(to.0);
        } else if !in_quotes && ch == from.1 {
            output.push(to.1);
        } else {
            output.push(ch);
        }
    }

    output
}
