use serde::{Deserialize, Serialize};

/// Identifier of a listed manufacturer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub u32);

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A manufacturer listed in the supplier directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    pub id: EntryId,
    pub name: String,
    /// Free text, usually "City, Country".
    pub location: String,
    pub category: String,
    pub size: String,
    pub capacity: String,
    pub rating: f32,
    pub reviews: u32,
    pub certifications: Vec<String>,
    pub specialties: Vec<String>,
    pub established: String,
    pub employees: String,
}

/// User-chosen search inputs. Empty fields and the "All ..." sentinels match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub search: String,
    pub location: String,
    pub category: String,
    pub size: String,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.search.is_empty()
            && is_unset(&self.location, ALL_LOCATIONS)
            && is_unset(&self.category, ALL_CATEGORIES)
            && is_unset(&self.size, ALL_SIZES)
    }
}

pub const ALL_LOCATIONS: &str = "All Locations";
pub const ALL_CATEGORIES: &str = "All Categories";
pub const ALL_SIZES: &str = "All Sizes";

pub(crate) fn is_unset(value: &str, sentinel: &str) -> bool {
    value.is_empty() || value == sentinel
}
