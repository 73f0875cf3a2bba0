//! Full state of a list page filter and its query-string form.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;
use url::form_urlencoded;

use super::aggregate::CriteriaSet;
use super::mode::FilterMode;
use crate::config::FilterConfig;
use crate::criteria::Criterion;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Lenient parse; anything unrecognised sorts ascending
    pub fn from_param(s: &str) -> SortDirection {
        match s.to_lowercase().as_str() {
            "desc" | "descending" => SortDirection::Desc,
            _ => SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Grid,
    List,
    Wall,
    Tagger,
}

impl DisplayMode {
    fn as_param(&self) -> u8 {
        match self {
            DisplayMode::Grid => 0,
            DisplayMode::List => 1,
            DisplayMode::Wall => 2,
            DisplayMode::Tagger => 3,
        }
    }

    fn from_param(raw: &str) -> Option<DisplayMode> {
        match raw.trim() {
            "0" => Some(DisplayMode::Grid),
            "1" => Some(DisplayMode::List),
            "2" => Some(DisplayMode::Wall),
            "3" => Some(DisplayMode::Tagger),
            _ => None,
        }
    }
}

/// Paging and sorting half of a query, as the backend takes it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FindFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    pub page: u32,
    pub per_page: u32,
    pub sort: String,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListFilter {
    pub mode: FilterMode,
    pub search_term: Option<String>,
    pub current_page: u32,
    pub items_per_page: u32,
    pub sort_by: String,
    pub sort_direction: SortDirection,
    pub display_mode: DisplayMode,
    pub criteria: CriteriaSet,
    default_items_per_page: u32,
    max_items_per_page: u32,
}

impl ListFilter {
    pub fn new(mode: FilterMode, config: &FilterConfig) -> Self {
        ListFilter {
            mode,
            search_term: None,
            current_page: 1,
            items_per_page: config.default_items_per_page,
            sort_by: mode.default_sort().to_string(),
            sort_direction: SortDirection::Asc,
            display_mode: DisplayMode::Grid,
            criteria: CriteriaSet::new(),
            default_items_per_page: config.default_items_per_page,
            max_items_per_page: config.max_items_per_page,
        }
    }

    pub fn from_query_string(mode: FilterMode, config: &FilterConfig, query: &str) -> Self {
        let mut filter = ListFilter::new(mode, config);
        filter.configure_from_query_parameters(query);
        filter
    }

    /// Apply the parameters present in `query`; absent or unreadable ones keep
    /// their current value. Criteria are replaced when at least one `c` is given.
    pub fn configure_from_query_parameters(&mut self, query: &str) {
        let query = query.trim_start_matches('?');
        let mut fragments = Vec::new();

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "q" => {
                    let term = value.trim();
                    self.search_term = (!term.is_empty()).then(|| term.to_string());
                }
                "sortby" => {
                    if !value.trim().is_empty() {
                        self.sort_by = value.trim().to_string();
                    }
                }
                "sortdir" => self.sort_direction = SortDirection::from_param(&value),
                "disp" => {
                    if let Some(display_mode) = DisplayMode::from_param(&value) {
                        self.display_mode = display_mode;
                    }
                }
                "p" => match value.trim().parse::<u32>() {
                    Ok(page) if page >= 1 => self.current_page = page,
                    _ => debug!(page = %value, "Ignoring invalid page"),
                },
                "perPage" => match value.trim().parse::<u32>() {
                    Ok(per_page) if per_page >= 1 => {
                        self.items_per_page = per_page.min(self.max_items_per_page)
                    }
                    _ => debug!(per_page = %value, "Ignoring invalid page size"),
                },
                "c" => fragments.push(value.into_owned()),
                _ => debug!(param = %key, "Ignoring unknown query parameter"),
            }
        }

        if fragments.is_empty() {
            return;
        }

        self.criteria.clear();
        for fragment in fragments {
            let Some(criterion) = Criterion::from_url(&fragment) else {
                continue;
            };
            if !self.mode.offers(criterion.criterion_type()) {
                debug!(
                    criterion = %criterion.criterion_type(),
                    mode = %self.mode,
                    "Skipping criterion not offered on this list"
                );
                continue;
            }
            self.criteria.insert(criterion);
        }
    }

    /// Form-urlencoded query string describing this filter
    pub fn make_query_parameters(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());

        if let Some(term) = &self.search_term {
            query.append_pair("q", term);
        }
        query.append_pair("sortby", &self.sort_by);
        if self.sort_direction == SortDirection::Desc {
            query.append_pair("sortdir", "desc");
        }
        if self.display_mode != DisplayMode::Grid {
            query.append_pair("disp", &self.display_mode.as_param().to_string());
        }
        if self.current_page > 1 {
            query.append_pair("p", &self.current_page.to_string());
        }
        if self.items_per_page != self.default_items_per_page {
            query.append_pair("perPage", &self.items_per_page.to_string());
        }
        for fragment in self.criteria.encode_url() {
            query.append_pair("c", &fragment);
        }

        query.finish()
    }

    pub fn make_find_filter(&self) -> FindFilter {
        FindFilter {
            q: self.search_term.clone(),
            page: self.current_page,
            per_page: self.items_per_page,
            sort: self.sort_by.clone(),
            direction: self.sort_direction,
        }
    }

    pub fn make_filter_input(&self) -> Map<String, Value> {
        self.criteria.to_filter_input()
    }
}
