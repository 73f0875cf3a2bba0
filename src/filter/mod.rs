pub mod aggregate;
pub mod list_filter;
pub mod mode;

pub use aggregate::CriteriaSet;
pub use list_filter::{DisplayMode, FindFilter, ListFilter, SortDirection};
pub use mode::FilterMode;
