use std::collections::HashSet;

use crate::Repository;

/// Topic strings offered as filter options: the defaults first, then every
/// distinct topic seen in the results, in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TopicVocabulary {
    topics: Vec<String>,
}

impl TopicVocabulary {
    pub fn from_defaults(defaults: &[String]) -> Self {
        Self::derive(defaults, &[])
    }

    /// Recomputes the vocabulary from scratch. Matching is exact and case-sensitive.
    pub fn derive(defaults: &[String], repositories: &[Repository]) -> Self {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut topics = Vec::with_capacity(defaults.len());
        let observed = repositories.iter().flat_map(|repo| repo.topics.iter());
        for topic in defaults.iter().chain(observed) {
            if seen.insert(topic.as_str()) {
                topics.push(topic.clone());
            }
        }
        Self { topics }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.topics
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    pub fn contains(&self, topic: &str) -> bool {
        self.topics.iter().any(|t| t == topic)
    }
}
