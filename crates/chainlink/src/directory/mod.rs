//! Manufacturer directory: static listings, search filters, and connection requests.

pub mod catalog;
pub mod domain;
pub mod filter;
pub mod router;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

pub use domain::{DirectoryEntry, EntryId, FilterCriteria};
pub use filter::{filter, DirectoryFilter};
pub use router::directory_router;

/// Read-only view over the listed manufacturers.
#[derive(Debug, Clone)]
pub struct Directory {
    entries: Vec<DirectoryEntry>,
}

impl Directory {
    /// The directory as shipped with the site.
    pub fn seeded() -> Self {
        Self::from_entries(catalog::manufacturers())
    }

    pub fn from_entries(entries: Vec<DirectoryEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[DirectoryEntry] {
        &self.entries
    }

    pub fn search(&self, criteria: &FilterCriteria) -> Vec<&DirectoryEntry> {
        filter(&self.entries, criteria)
    }

    pub fn find(&self, id: EntryId) -> Option<&DirectoryEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions {
            locations: catalog::LOCATIONS,
            categories: catalog::CATEGORIES,
            sizes: catalog::SIZES,
        }
    }

    /// Records interest in a manufacturer. Nothing is sent anywhere; the request is logged
    /// and acknowledged.
    pub fn request_connection(&self, id: EntryId) -> Result<ConnectionRequest, DirectoryError> {
        let entry = self.find(id).ok_or(DirectoryError::UnknownEntry(id))?;
        info!(entry = %id, manufacturer = %entry.name, "connection request");
        Ok(ConnectionRequest {
            entry_id: id,
            manufacturer: entry.name.clone(),
            message: format!("Connection request sent to {}!", entry.name),
            requested_at: Utc::now(),
        })
    }
}

impl Default for Directory {
    fn default() -> Self {
        Self::seeded()
    }
}

/// Option lists for the location, category, and size selectors.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FilterOptions {
    pub locations: &'static [&'static str],
    pub categories: &'static [&'static str],
    pub sizes: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct ConnectionRequest {
    pub entry_id: EntryId,
    pub manufacturer: String,
    pub message: String,
    pub requested_at: DateTime<Utc>,
}

#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("directory entry {0} not found")]
    UnknownEntry(EntryId),
}
