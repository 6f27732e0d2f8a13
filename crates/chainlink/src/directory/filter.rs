//! Directory filtering.
//!
//! All four criteria are AND-combined and the result keeps catalog order; there is no
//! relevance ranking.

use serde::Serialize;

use super::domain::{
    is_unset, DirectoryEntry, FilterCriteria, ALL_CATEGORIES, ALL_LOCATIONS, ALL_SIZES,
};

/// Entries matching `criteria`, in source order.
pub fn filter<'a>(
    entries: &'a [DirectoryEntry],
    criteria: &FilterCriteria,
) -> Vec<&'a DirectoryEntry> {
    let needle = criteria.search.to_lowercase();
    entries
        .iter()
        .filter(|entry| matches(entry, criteria, &needle))
        .collect()
}

fn matches(entry: &DirectoryEntry, criteria: &FilterCriteria, needle: &str) -> bool {
    let search = needle.is_empty()
        || entry.name.to_lowercase().contains(needle)
        || entry
            .specialties
            .iter()
            .any(|specialty| specialty.to_lowercase().contains(needle));

    let location = is_unset(&criteria.location, ALL_LOCATIONS)
        || entry.location.contains(criteria.location.as_str());

    let category =
        is_unset(&criteria.category, ALL_CATEGORIES) || entry.category == criteria.category;

    let size = is_unset(&criteria.size, ALL_SIZES) || entry.size == criteria.size;

    search && location && category && size
}

/// Search state owned by the directory page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DirectoryFilter {
    criteria: FilterCriteria,
}

impl DirectoryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_criteria(criteria: FilterCriteria) -> Self {
        Self { criteria }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn set_search(&mut self, value: impl Into<String>) {
        self.criteria.search = value.into();
    }

    pub fn set_location(&mut self, value: impl Into<String>) {
        self.criteria.location = value.into();
    }

    pub fn set_category(&mut self, value: impl Into<String>) {
        self.criteria.category = value.into();
    }

    pub fn set_size(&mut self, value: impl Into<String>) {
        self.criteria.size = value.into();
    }

    /// Whether any criterion narrows the list, which is when the clear action is offered.
    pub fn is_active(&self) -> bool {
        !self.criteria.is_empty()
    }

    pub fn clear(&mut self) {
        self.criteria = FilterCriteria::default();
    }

    pub fn results<'a>(&self, entries: &'a [DirectoryEntry]) -> Vec<&'a DirectoryEntry> {
        filter(entries, &self.criteria)
    }
}
