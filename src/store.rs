//! Persistent store for the last known location
//!
//! Holds at most one [`LocationRecord`]. Every save overwrites it; there is no
//! merging and no history.

use crate::models::LocationRecord;
use crate::{AirScanError, Result};
use fjall::Keyspace;
use std::path::Path;
use tokio::task;

const CURRENT_LOCATION_KEY: &str = "current_location";

fn store_err(err: impl std::fmt::Display) -> AirScanError {
    AirScanError::store(err.to_string())
}

fn get_from_store(store: Keyspace, key: Vec<u8>) -> Result<Option<Vec<u8>>> {
    Ok(store.get(key).map_err(store_err)?.map(|v| v.to_vec()))
}

#[derive(Clone)]
pub struct LocationStore {
    store: Keyspace,
}

impl LocationStore {
    /// Open (or create) the store in `path`
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        std::fs::create_dir_all(path)?;
        let db = fjall::Database::builder(path).open().map_err(store_err)?;
        let items = db
            .keyspace("location", fjall::KeyspaceCreateOptions::default)
            .map_err(store_err)?;
        Ok(LocationStore { store: items })
    }

    /// Read the persisted record, if any
    #[tracing::instrument(name = "load_location", level = "debug", skip(self))]
    pub async fn load(&self) -> Result<Option<LocationRecord>> {
        let store = self.store.clone();
        let key = CURRENT_LOCATION_KEY.as_bytes().to_vec();
        let maybe_bytes = task::spawn_blocking(move || get_from_store(store, key))
            .await
            .map_err(store_err)??;

        match maybe_bytes {
            Some(bytes) => {
                let record: LocationRecord = postcard::from_bytes(&bytes).map_err(store_err)?;
                tracing::debug!("Loaded saved location: {}", record.label());
                Ok(Some(record))
            }
            None => {
                tracing::debug!("No saved location");
                Ok(None)
            }
        }
    }

    /// Replace the persisted record
    #[tracing::instrument(name = "save_location", level = "debug", skip(self, record), fields(city = %record.city))]
    pub async fn save(&self, record: &LocationRecord) -> Result<()> {
        let store = self.store.clone();
        let key = CURRENT_LOCATION_KEY.as_bytes().to_vec();
        let bytes = postcard::to_stdvec(record).map_err(store_err)?;

        task::spawn_blocking(move || store.insert(key, bytes))
            .await
            .map_err(store_err)?
            .map_err(store_err)?;
        Ok(())
    }

    /// Forget the persisted record
    pub async fn clear(&self) -> Result<()> {
        let store = self.store.clone();
        let key = CURRENT_LOCATION_KEY.as_bytes().to_vec();
        task::spawn_blocking(move || store.remove(key))
            .await
            .map_err(store_err)?
            .map_err(store_err)?;
        Ok(())
    }
}
