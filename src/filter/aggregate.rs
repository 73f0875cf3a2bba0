use indexmap::IndexMap;
use serde_json::{Map, Value};
use tracing::debug;

use crate::criteria::{Criterion, CriterionKind, CriterionType};

/// Active criteria of one list filter, keyed by filter type in insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CriteriaSet {
    criteria: IndexMap<CriterionType, Criterion>,
}

impl CriteriaSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a criterion, replacing one of the same type in place.
    /// The None sentinel is never stored.
    pub fn insert(&mut self, criterion: Criterion) -> Option<Criterion> {
        if criterion.kind() == CriterionKind::None {
            return None;
        }
        self.criteria.insert(criterion.criterion_type(), criterion)
    }

    pub fn remove(&mut self, criterion_type: CriterionType) -> Option<Criterion> {
        self.criteria.shift_remove(&criterion_type)
    }

    pub fn get(&self, criterion_type: CriterionType) -> Option<&Criterion> {
        self.criteria.get(&criterion_type)
    }

    pub fn get_mut(&mut self, criterion_type: CriterionType) -> Option<&mut Criterion> {
        self.criteria.get_mut(&criterion_type)
    }

    pub fn clear(&mut self) {
        self.criteria.clear();
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Criterion> {
        self.criteria.values()
    }

    /// Backend filter payload: `input_field -> fragment` for every complete criterion
    pub fn to_filter_input(&self) -> Map<String, Value> {
        let mut filter = Map::new();
        for criterion in self.iter() {
            match criterion.to_criterion_input() {
                Some(input) => {
                    filter.insert(criterion.option().input_field.to_string(), input.to_json());
                }
                None => debug!(
                    criterion = %criterion.criterion_type(),
                    "Leaving incomplete criterion out of the filter"
                ),
            }
        }
        filter
    }

    /// One URL fragment per criterion, in display order
    pub fn encode_url(&self) -> Vec<String> {
        self.iter().map(Criterion::encode_url).collect()
    }

    pub fn labels(&self) -> Vec<String> {
        self.iter().map(Criterion::label).collect()
    }
}

impl FromIterator<Criterion> for CriteriaSet {
    fn from_iter<I: IntoIterator<Item = Criterion>>(iter: I) -> Self {
        let mut set = CriteriaSet::new();
        for criterion in iter {
            set.insert(criterion);
        }
        set
    }
}
