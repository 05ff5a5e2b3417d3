use std::collections::HashSet;

use crate::{Repository, RepositoryId};

/// Repositories gathered across pages for the current filters, unique by id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResultAccumulator {
    items: Vec<Repository>,
    seen: HashSet<RepositoryId>,
}

impl ResultAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Repository] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Discards the current contents and starts over with `items`.
    pub fn replace(&mut self, items: Vec<Repository>) -> usize {
        self.items.clear();
        self.seen.clear();
        self.append(items)
    }

    /// Appends `items` after the existing ones, dropping any id already present.
    /// Returns how many were actually added.
    pub fn append(&mut self, items: Vec<Repository>) -> usize {
        let before = self.items.len();
        for repo in items {
            if self.seen.insert(repo.id) {
                self.items.push(repo);
            }
        }
        self.items.len() - before
    }
}
