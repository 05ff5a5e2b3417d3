use crate::SearchConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Asc => "Stars: Low to High",
            SortOrder::Desc => "Stars: High to Low",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }
}

/// What should be fetched. Every setter that changes a filter resets `page` to 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    query: String,
    language: Option<String>,
    sort: SortOrder,
    topics: Vec<String>,
    page: u32,
}

impl FilterState {
    pub fn from_config(config: &SearchConfig) -> Self {
        Self {
            query: config.default_query.clone(),
            language: config.default_language.clone(),
            sort: config.default_sort,
            topics: Vec::new(),
            page: 0,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn sort(&self) -> SortOrder {
        self.sort
    }

    /// Selected topics in selection order, without duplicates.
    pub fn topics(&self) -> &[String] {
        &self.topics
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub(crate) fn set_query(&mut self, query: String) -> bool {
        if self.query == query {
            return false;
        }
        self.query = query;
        self.page = 0;
        true
    }

    pub(crate) fn set_language(&mut self, language: Option<String>) -> bool {
        let language = language
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty());
        if self.language == language {
            return false;
        }
        self.language = language;
        self.page = 0;
        true
    }

    pub(crate) fn set_sort(&mut self, sort: SortOrder) -> bool {
        if self.sort == sort {
            return false;
        }
        self.sort = sort;
        self.page = 0;
        true
    }

    pub(crate) fn set_topics(&mut self, topics: Vec<String>) -> bool {
        let mut unique: Vec<String> = Vec::with_capacity(topics.len());
        for topic in topics {
            let topic = topic.trim();
            if !topic.is_empty() && !unique.iter().any(|t| t == topic) {
                unique.push(topic.to_string());
            }
        }
        if self.topics == unique {
            return false;
        }
        self.topics = unique;
        self.page = 0;
        true
    }

    pub(crate) fn toggle_topic(&mut self, topic: &str) -> bool {
        let topic = topic.trim();
        if topic.is_empty() {
            return false;
        }
        let mut topics = self.topics.clone();
        match topics.iter().position(|t| t == topic) {
            Some(index) => {
                topics.remove(index);
            }
            None => topics.push(topic.to_string()),
        }
        self.set_topics(topics)
    }

    /// Moves to `page` without touching any filter. Only the coordinator's
    /// load-more and failure-rollback paths call this.
    pub(crate) fn set_page(&mut self, page: u32) {
        self.page = page;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter() -> FilterState {
        FilterState::from_config(&SearchConfig::default())
    }

    #[test]
    fn defaults_come_from_config() {
        let filter = filter();
        assert_eq!(filter.query(), "React UI Component");
        assert_eq!(filter.language(), Some("TypeScript"));
        assert_eq!(filter.sort(), SortOrder::Desc);
        assert!(filter.topics().is_empty());
        assert_eq!(filter.page(), 0);
    }

    #[test]
    fn every_filter_edit_resets_page() {
        let mut filter = filter();
        filter.set_page(3);
        assert!(filter.set_query("svelte".into()));
        assert_eq!(filter.page(), 0);

        filter.set_page(3);
        assert!(filter.set_language(None));
        assert_eq!(filter.page(), 0);

        filter.set_page(3);
        assert!(filter.set_sort(SortOrder::Asc));
        assert_eq!(filter.page(), 0);

        filter.set_page(3);
        assert!(filter.toggle_topic("hooks"));
        assert_eq!(filter.page(), 0);
    }

    #[test]
    fn unchanged_values_are_not_edits() {
        let mut filter = filter();
        filter.set_page(2);
        assert!(!filter.set_query("React UI Component".into()));
        assert!(!filter.set_language(Some(" TypeScript ".into())));
        assert!(!filter.set_sort(SortOrder::Desc));
        assert!(!filter.set_topics(Vec::new()));
        assert_eq!(filter.page(), 2);
    }

    #[test]
    fn blank_language_clears_selection() {
        let mut filter = filter();
        assert!(filter.set_language(Some("   ".into())));
        assert_eq!(filter.language(), None);
    }

    #[test]
    fn topics_are_deduplicated_in_selection_order() {
        let mut filter = filter();
        filter.set_topics(vec!["vue".into(), "react".into(), "vue".into(), " ".into()]);
        assert_eq!(filter.topics(), ["vue".to_string(), "react".to_string()]);

        assert!(filter.toggle_topic("vue"));
        assert_eq!(filter.topics(), ["react".to_string()]);
    }

    #[test]
    fn sort_order_parses_case_insensitively() {
        assert_eq!(SortOrder::parse("ASC"), Some(SortOrder::Asc));
        assert_eq!(SortOrder::parse(" desc"), Some(SortOrder::Desc));
        assert_eq!(SortOrder::parse("stars"), None);
    }
}
