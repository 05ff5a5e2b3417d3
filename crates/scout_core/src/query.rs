use crate::{FilterState, SearchConfig, SortOrder};

/// A fully formed repository search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Search qualifiers, ANDed by the remote side.
    pub clauses: Vec<String>,
    pub order: SortOrder,
    pub per_page: u32,
    /// 1-indexed, as the remote API expects.
    pub page: u32,
}

impl SearchRequest {
    /// The `q` parameter. Form encoding puts the separating spaces on the wire as `+`.
    pub fn q(&self) -> String {
        self.clauses.join(" ")
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("q", self.q()),
            ("sort", "stars".to_string()),
            ("order", self.order.as_str().to_string()),
            ("per_page", self.per_page.to_string()),
            ("page", self.page.to_string()),
        ]
    }
}

/// Builds the request for `page` (0-indexed) of the given filters.
pub fn build_request(filter: &FilterState, page: u32, config: &SearchConfig) -> SearchRequest {
    let mut clauses = vec![format!("stars:>{}", config.star_floor)];

    let query = filter.query().trim();
    if !query.is_empty() {
        clauses.push(format!("{query} in:name"));
    }
    if let Some(language) = filter.language() {
        clauses.push(format!("language:{language}"));
    }
    clauses.extend(filter.topics().iter().map(|topic| format!("topic:{topic}")));

    SearchRequest {
        clauses,
        order: filter.sort(),
        per_page: config.page_size,
        page: page + 1,
    }
}
