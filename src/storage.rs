use log::warn;
use serde::Deserialize;
use web_sys::{window, Storage};

use crate::error::StorageError;
use crate::state::form::Draft;

/// Single-key home of the booking draft.
pub trait DraftStore {
    fn read_raw(&self) -> Result<Option<String>, StorageError>;
    fn write_raw(&self, raw: &str) -> Result<(), StorageError>;
    fn remove(&self) -> Result<(), StorageError>;

    fn save(&self, draft: &Draft) -> Result<(), StorageError> {
        let raw = serde_json::to_string(draft)?;
        self.write_raw(&raw)
    }

    fn load(&self) -> Result<Option<Draft>, StorageError> {
        match self.read_raw()? {
            Some(raw) => Ok(Some(parse_draft(&raw)?)),
            None => Ok(None),
        }
    }
}

// `null` and missing fields both read back as empty.
#[derive(Deserialize)]
struct StoredDraft {
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    message: Option<String>,
}

fn parse_draft(raw: &str) -> Result<Draft, StorageError> {
    let stored: StoredDraft = serde_json::from_str(raw)?;
    Ok(Draft {
        name: stored.name.unwrap_or_default(),
        email: stored.email.unwrap_or_default(),
        phone: stored.phone.unwrap_or_default(),
        message: stored.message.unwrap_or_default(),
    })
}

/// Draft to show at page load. Unreadable or malformed drafts count as absent.
pub fn restore_draft(store: &impl DraftStore) -> Draft {
    match store.load() {
        Ok(draft) => draft.unwrap_or_default(),
        Err(e) => {
            warn!("Ignoring saved booking draft: {}", e);
            Draft::default()
        }
    }
}

pub struct LocalDraftStore {
    key: &'static str,
}

impl LocalDraftStore {
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }

    fn storage(&self) -> Result<Storage, StorageError> {
        window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

impl DraftStore for LocalDraftStore {
    fn read_raw(&self) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(self.key)
            .map_err(|_| StorageError::Unavailable)
    }

    fn write_raw(&self, raw: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(self.key, raw)
            .map_err(|_| StorageError::Write)
    }

    fn remove(&self) -> Result<(), StorageError> {
        self.storage()?
            .remove_item(self.key)
            .map_err(|_| StorageError::Write)
    }
}

#[cfg(test)]
pub mod memory {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    pub struct MemoryDraftStore {
        pub value: RefCell<Option<String>>,
    }

    impl DraftStore for MemoryDraftStore {
        fn read_raw(&self) -> Result<Option<String>, StorageError> {
            Ok(self.value.borrow().clone())
        }

        fn write_raw(&self, raw: &str) -> Result<(), StorageError> {
            *self.value.borrow_mut() = Some(raw.to_string());
            Ok(())
        }

        fn remove(&self) -> Result<(), StorageError> {
            self.value.borrow_mut().take();
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::memory::MemoryDraftStore;
    use super::*;

    fn sample() -> Draft {
        Draft {
            name: "A".into(),
            email: "a@b.com".into(),
            phone: "1".into(),
            message: "hi".into(),
        }
    }

    #[test]
    fn saved_draft_restores_all_four_fields() {
        let store = MemoryDraftStore::default();
        store.save(&sample()).unwrap();
        assert_eq!(restore_draft(&store), sample());
    }

    #[test]
    fn save_overwrites_instead_of_merging() {
        let store = MemoryDraftStore::default();
        store.save(&sample()).unwrap();
        store
            .save(&Draft {
                name: "B".into(),
                ..Draft::default()
            })
            .unwrap();
        let restored = restore_draft(&store);
        assert_eq!(restored.name, "B");
        assert_eq!(restored.email, "");
    }

    #[test]
    fn no_draft_restores_empty_fields() {
        let store = MemoryDraftStore::default();
        assert_eq!(restore_draft(&store), Draft::default());
    }

    #[test]
    fn malformed_draft_counts_as_absent() {
        let store = MemoryDraftStore::default();
        store.write_raw("{not json").unwrap();
        assert!(matches!(store.load(), Err(StorageError::Malformed(_))));
        assert_eq!(restore_draft(&store), Draft::default());

        store.write_raw(r#"{"name": 5}"#).unwrap();
        assert_eq!(restore_draft(&store), Draft::default());
    }

    #[test]
    fn null_and_missing_fields_read_as_empty() {
        let store = MemoryDraftStore::default();
        store
            .write_raw(r#"{"name":"A","email":null,"message":"hi"}"#)
            .unwrap();
        let restored = restore_draft(&store);
        assert_eq!(restored.name, "A");
        assert_eq!(restored.email, "");
        assert_eq!(restored.phone, "");
        assert_eq!(restored.message, "hi");
    }

    #[test]
    fn remove_clears_the_key() {
        let store = MemoryDraftStore::default();
        store.save(&sample()).unwrap();
        store.remove().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }
}
