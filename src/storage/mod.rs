//! Scheduled pickup persistence.
//!
//! # Responsibilities
//! - Keep every confirmed pickup addressable by gateway-issued id
//! - Optionally persist the store to a JSON file across restarts
//!
//! # Design Decisions
//! - DashMap for lock-free concurrent access from handlers
//! - Persistence is best-effort; the carrier remains the source of truth

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::PickupDetails;

/// A confirmed pickup tracked by the gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredPickup {
    pub id: Uuid,
    pub carrier_id: String,
    pub details: PickupDetails,
    /// Seconds since epoch when the pickup was confirmed.
    pub created_at: u64,
}

/// A thread-safe store of confirmed pickups.
#[derive(Clone, Default)]
pub struct PickupStore {
    inner: Arc<DashMap<Uuid, StoredPickup>>,
    persistence_path: Option<String>,
}

impl PickupStore {
    pub fn new(persistence_path: Option<String>) -> Self {
        Self {
            inner: Arc::new(DashMap::new()),
            persistence_path,
        }
    }

    /// Load from file if it exists; otherwise start empty.
    pub fn load_from_file(path: &str) -> std::io::Result<Self> {
        let store = Self::new(Some(path.to_string()));
        if Path::new(path).exists() {
            let file = File::open(path)?;
            let reader = BufReader::new(file);
            let map: HashMap<Uuid, StoredPickup> = serde_json::from_reader(reader)?;
            for (id, pickup) in map {
                store.inner.insert(id, pickup);
            }
            tracing::info!(count = store.inner.len(), path, "Pickup store loaded");
        }
        Ok(store)
    }

    /// Record a confirmed pickup, returning its gateway id.
    pub fn insert(&self, carrier_id: &str, details: PickupDetails) -> StoredPickup {
        let pickup = StoredPickup {
            id: Uuid::new_v4(),
            carrier_id: carrier_id.to_string(),
            details,
            created_at: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs(),
        };
        self.inner.insert(pickup.id, pickup.clone());
        self.persist();
        pickup
    }

    /// Replace the details of an existing pickup after a carrier update.
    pub fn update(&self, id: Uuid, details: PickupDetails) -> Option<StoredPickup> {
        let updated = self.inner.get_mut(&id).map(|mut entry| {
            entry.details = details;
            entry.clone()
        });
        if updated.is_some() {
            self.persist();
        }
        updated
    }

    pub fn get(&self, id: Uuid) -> Option<StoredPickup> {
        self.inner.get(&id).map(|entry| entry.clone())
    }

    /// Find a pickup by its carrier confirmation number.
    pub fn find_by_confirmation(&self, confirmation_number: &str) -> Option<StoredPickup> {
        self.inner
            .iter()
            .find(|entry| entry.details.confirmation_number == confirmation_number)
            .map(|entry| entry.clone())
    }

    pub fn remove(&self, id: Uuid) -> Option<StoredPickup> {
        let removed = self.inner.remove(&id).map(|(_, pickup)| pickup);
        if removed.is_some() {
            self.persist();
        }
        removed
    }

    /// All stored pickups, most recent first.
    pub fn list(&self) -> Vec<StoredPickup> {
        let mut pickups: Vec<StoredPickup> =
            self.inner.iter().map(|entry| entry.clone()).collect();
        pickups.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        pickups
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    fn persist(&self) {
        let Some(path) = &self.persistence_path else {
            return;
        };
        let map: HashMap<Uuid, StoredPickup> = self
            .inner
            .iter()
            .map(|entry| (*entry.key(), entry.clone()))
            .collect();
        match File::create(path) {
            Ok(file) => {
                let writer = BufWriter::new(file);
                if let Err(e) = serde_json::to_writer(writer, &map) {
                    tracing::error!(error = %e, path, "Failed to persist pickup store");
                }
            }
            Err(e) => tracing::error!(error = %e, path, "Failed to open pickup store file"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(confirmation: &str) -> PickupDetails {
        PickupDetails {
            carrier_id: "canadapost".to_string(),
            carrier_name: "canadapost".to_string(),
            confirmation_number: confirmation.to_string(),
            pickup_date: None,
            pickup_charge: None,
        }
    }

    #[test]
    fn test_insert_get_remove() {
        let store = PickupStore::new(None);
        let stored = store.insert("canadapost", details("0074698052"));
        assert_eq!(store.get(stored.id).unwrap().carrier_id, "canadapost");
        assert_eq!(store.len(), 1);
        assert!(store.remove(stored.id).is_some());
        assert!(store.is_empty());
    }

    #[test]
    fn test_find_by_confirmation() {
        let store = PickupStore::new(None);
        store.insert("canadapost", details("A"));
        let b = store.insert("canadapost", details("B"));
        let found = store.find_by_confirmation("B").unwrap();
        assert_eq!(found.id, b.id);
        assert!(store.find_by_confirmation("C").is_none());
    }
}
