use regex::Regex;

use super::duration::{seconds_to_string, string_to_seconds};
use super::input::{
    CriterionInput, IntCriterionInput, MultiCriterionInput, PresenceMarker, StringCriterionInput,
};
use super::modifier::CriterionModifier;
use super::option::{CriterionKind, CriterionOption};
use super::types::CriterionType;
use super::value::{CriterionValue, LabeledId, MatchMode, NumberRange, RelationValue};
use crate::error::CriterionError;

/// A single filter predicate bound to one backend field.
///
/// Created by [`make_criteria`](super::make_criteria) and edited in place.
/// The value always has the shape the option's kind requires.
#[derive(Debug, Clone, PartialEq)]
pub struct Criterion {
    option: &'static CriterionOption,
    modifier: CriterionModifier,
    value: CriterionValue,
}

impl Criterion {
    pub(crate) fn new(option: &'static CriterionOption) -> Self {
        Criterion {
            option,
            modifier: option.default_modifier,
            value: CriterionValue::default_for(option.kind, option.hierarchical),
        }
    }

    pub fn option(&self) -> &'static CriterionOption {
        self.option
    }

    pub fn criterion_type(&self) -> CriterionType {
        self.option.criterion_type
    }

    pub fn kind(&self) -> CriterionKind {
        self.option.kind
    }

    pub fn modifier(&self) -> CriterionModifier {
        self.modifier
    }

    pub fn value(&self) -> &CriterionValue {
        &self.value
    }

    /// Restore the factory state
    pub fn reset(&mut self) {
        *self = Criterion::new(self.option);
    }

    /// Change the modifier, coercing a number value between scalar and range form.
    pub fn set_modifier(&mut self, modifier: CriterionModifier) -> Result<(), CriterionError> {
        if !self.option.supports(modifier) {
            return Err(CriterionError::UnsupportedModifier {
                criterion_type: self.criterion_type(),
                modifier,
            });
        }

        if let CriterionValue::Number(range) = &mut self.value {
            if !modifier.is_range() {
                range.value2 = None;
            }
        }

        self.modifier = modifier;
        Ok(())
    }

    pub fn set_value(&mut self, value: CriterionValue) -> Result<(), CriterionError> {
        if !value.fits(self.kind()) {
            return Err(self.shape_error());
        }

        self.value = value;
        match &mut self.value {
            CriterionValue::Relation(relation) => {
                relation.dedup();
                if !self.option.hierarchical {
                    relation.depth = None;
                }
            }
            CriterionValue::Number(range) if !self.modifier.is_range() => range.value2 = None,
            _ => {}
        }
        Ok(())
    }

    /// Set the scalar (or lower bound), keeping any upper bound
    pub fn set_number(&mut self, number: i64) -> Result<(), CriterionError> {
        match &mut self.value {
            CriterionValue::Number(range) => {
                range.value = Some(number);
                Ok(())
            }
            _ => Err(self.shape_error()),
        }
    }

    /// Set both bounds; only meaningful under a range modifier
    pub fn set_bounds(&mut self, min: Option<i64>, max: Option<i64>) -> Result<(), CriterionError> {
        if !self.modifier.is_range() {
            return Err(CriterionError::InvalidInput {
                criterion_type: self.criterion_type(),
                input: format!("{:?}..{:?}", min, max),
                reason: "bounds require a BETWEEN modifier",
            });
        }
        match &mut self.value {
            CriterionValue::Number(range) => {
                *range = NumberRange {
                    value: min,
                    value2: max,
                };
                Ok(())
            }
            _ => Err(self.shape_error()),
        }
    }

    /// Apply a raw string coming from a form control
    pub fn set_raw(&mut self, raw: &str) -> Result<(), CriterionError> {
        let criterion_type = self.criterion_type();
        let invalid = |reason: &'static str| CriterionError::InvalidInput {
            criterion_type,
            input: raw.to_string(),
            reason,
        };

        match self.kind() {
            CriterionKind::String | CriterionKind::MandatoryString => {
                self.value = CriterionValue::Text(raw.to_string());
                Ok(())
            }
            CriterionKind::Number | CriterionKind::MandatoryNumber => {
                let number = raw.trim().parse().map_err(|_| invalid("expected an integer"))?;
                self.set_number(number)
            }
            CriterionKind::Duration => {
                let seconds = string_to_seconds(raw).ok_or_else(|| invalid("expected [[H:]M:]S"))?;
                self.set_number(seconds)
            }
            CriterionKind::Flag => {
                let flag = match raw.trim().to_ascii_lowercase().as_str() {
                    "true" => true,
                    "false" => false,
                    _ => return Err(invalid("expected true or false")),
                };
                self.value = CriterionValue::Flag(Some(flag));
                Ok(())
            }
            CriterionKind::Enumerated => {
                let choice = self
                    .option
                    .find_choice(raw)
                    .ok_or_else(|| invalid("not one of the offered choices"))?;
                self.value = CriterionValue::Choice(Some(choice.label.to_string()));
                Ok(())
            }
            CriterionKind::Relation => {
                for id in raw.split(',').map(str::trim).filter(|id| !id.is_empty()) {
                    self.add_item(LabeledId::new(id, id))?;
                }
                Ok(())
            }
            CriterionKind::Existence | CriterionKind::None => Err(invalid("criterion takes no value")),
        }
    }

    pub fn add_item(&mut self, item: LabeledId) -> Result<bool, CriterionError> {
        Ok(self.relation_mut()?.push(item))
    }

    pub fn remove_item(&mut self, id: &str) -> Result<bool, CriterionError> {
        Ok(self.relation_mut()?.remove(id))
    }

    pub fn set_match_mode(&mut self, match_mode: MatchMode) -> Result<(), CriterionError> {
        self.relation_mut()?.match_mode = match_mode;
        Ok(())
    }

    /// Child levels to include; -1 for all. Only hierarchical relations accept one.
    pub fn set_depth(&mut self, depth: i32) -> Result<(), CriterionError> {
        if !self.option.hierarchical {
            return Err(CriterionError::InvalidInput {
                criterion_type: self.criterion_type(),
                input: depth.to_string(),
                reason: "relation is not hierarchical",
            });
        }
        self.relation_mut()?.depth = Some(depth);
        Ok(())
    }

    fn relation_mut(&mut self) -> Result<&mut RelationValue, CriterionError> {
        let error = self.shape_error();
        match &mut self.value {
            CriterionValue::Relation(relation) => Ok(relation),
            _ => Err(error),
        }
    }

    fn shape_error(&self) -> CriterionError {
        CriterionError::ValueShape {
            criterion_type: self.criterion_type(),
            kind: self.kind(),
        }
    }

    /// Modifier as the backend sees it; folds the relation match mode in
    pub fn wire_modifier(&self) -> CriterionModifier {
        match (&self.value, self.modifier) {
            (CriterionValue::Relation(relation), CriterionModifier::Includes)
                if relation.match_mode == MatchMode::All =>
            {
                CriterionModifier::IncludesAll
            }
            _ => self.modifier,
        }
    }

    /// Whether the criterion has everything its modifier needs
    pub fn is_valid(&self) -> bool {
        if matches!(self.value, CriterionValue::None) {
            return false;
        }
        if self.modifier.is_null_check() {
            return true;
        }

        match &self.value {
            CriterionValue::None => false,
            CriterionValue::Text(text) => {
                !text.is_empty() && (!self.modifier.is_regex() || Regex::new(text).is_ok())
            }
            CriterionValue::Number(range) => {
                range.value.is_some() && (!self.modifier.is_range() || range.value2.is_some())
            }
            CriterionValue::Flag(flag) => flag.is_some(),
            CriterionValue::Choice(choice) => choice
                .as_deref()
                .and_then(|label| self.option.find_choice(label))
                .is_some(),
            CriterionValue::Relation(relation) => !relation.items.is_empty(),
            CriterionValue::Presence => true,
        }
    }

    /// Human readable description for a filter chip, e.g. "Rating greater than 3"
    pub fn label(&self) -> String {
        match self.kind() {
            CriterionKind::None => return String::new(),
            CriterionKind::Existence => return self.option.label.to_string(),
            _ => {}
        }

        let mut parts = vec![
            self.option.label.to_string(),
            self.wire_modifier().label().to_string(),
        ];
        if !self.modifier.is_null_check() {
            let value = self.value_label();
            if !value.is_empty() {
                parts.push(value);
            }
        }
        parts.join(" ")
    }

    fn value_label(&self) -> String {
        let format_number = |n: i64| match self.kind() {
            CriterionKind::Duration => seconds_to_string(n),
            _ => n.to_string(),
        };

        match &self.value {
            CriterionValue::None | CriterionValue::Presence => String::new(),
            CriterionValue::Text(text) => text.clone(),
            CriterionValue::Number(range) => {
                let value = range.value.map(format_number).unwrap_or_default();
                if self.modifier.is_range() {
                    let value2 = range.value2.map(format_number).unwrap_or_default();
                    format!("{} and {}", value, value2)
                } else {
                    value
                }
            }
            CriterionValue::Flag(flag) => flag.map(|f| f.to_string()).unwrap_or_default(),
            CriterionValue::Choice(choice) => choice.clone().unwrap_or_default(),
            CriterionValue::Relation(relation) => relation
                .items
                .iter()
                .map(|item| {
                    if item.label.is_empty() {
                        item.id.as_str()
                    } else {
                        item.label.as_str()
                    }
                })
                .collect::<Vec<_>>()
                .join(", "),
        }
    }

    /// Backend filter fragment, or `None` when this criterion must be left out
    /// of the aggregate (the None sentinel or an incomplete criterion).
    pub fn to_criterion_input(&self) -> Option<CriterionInput> {
        if !self.is_valid() {
            return None;
        }

        let modifier = self.modifier;
        let input = match &self.value {
            CriterionValue::None => return None,
            CriterionValue::Presence => CriterionInput::Presence(PresenceMarker::default()),
            CriterionValue::Text(text) => CriterionInput::String(StringCriterionInput {
                value: if modifier.is_null_check() {
                    String::new()
                } else {
                    text.clone()
                },
                modifier,
            }),
            CriterionValue::Number(range) => {
                let null_check = modifier.is_null_check();
                CriterionInput::Int(IntCriterionInput {
                    value: if null_check { 0 } else { range.value.unwrap_or_default() },
                    value2: if modifier.is_range() { range.value2 } else { None },
                    modifier,
                })
            }
            CriterionValue::Flag(flag) => {
                let flag = flag.unwrap_or(true);
                if self.criterion_type() == CriterionType::HasMarkers {
                    CriterionInput::Text(flag.to_string())
                } else {
                    CriterionInput::Bool(flag)
                }
            }
            CriterionValue::Choice(choice) => {
                let choice = choice.as_deref().and_then(|label| self.option.find_choice(label))?;
                CriterionInput::String(StringCriterionInput {
                    value: choice.value.to_string(),
                    modifier,
                })
            }
            CriterionValue::Relation(relation) => CriterionInput::Multi(MultiCriterionInput {
                value: if modifier.is_null_check() {
                    Vec::new()
                } else {
                    relation.ids()
                },
                modifier: self.wire_modifier(),
                depth: relation.depth.filter(|_| self.option.hierarchical),
            }),
        };
        Some(input)
    }
}
