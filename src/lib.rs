pub mod config;
pub mod criteria;
pub mod error;
pub mod filter;
pub mod logging;
pub mod resource;
pub mod startup;

// Re-export commonly used types for easier access
pub use criteria::{make_criteria, Criterion, CriterionModifier, CriterionOption, CriterionType};
pub use error::{AppError, AppResult, CriterionError};
pub use filter::{CriteriaSet, FilterMode, ListFilter};
