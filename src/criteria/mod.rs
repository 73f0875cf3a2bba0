//! Typed list-filter criteria: options, variants, factory and serializers.

pub mod criterion;
pub mod duration;
pub mod factory;
pub mod input;
pub mod modifier;
pub mod option;
pub mod types;
pub mod url_codec;
pub mod value;

pub use criterion::Criterion;
pub use factory::make_criteria;
pub use input::{
    CriterionInput, IntCriterionInput, MultiCriterionInput, PresenceMarker, StringCriterionInput,
};
pub use modifier::CriterionModifier;
pub use option::{CriterionKind, CriterionOption, EnumChoice};
pub use types::CriterionType;
pub use value::{CriterionValue, LabeledId, MatchMode, NumberRange, RelationValue};
