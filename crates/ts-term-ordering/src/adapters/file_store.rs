use crate::domain::errors::StoreError;
use crate::domain::value_objects::TermId;
use crate::ports::outbound::OrderStore;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// On-disk layout: values grouped by meta key, so one file can hold
/// other metadata next to ours.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
struct StoreDocument {
    #[serde(default)]
    meta: BTreeMap<String, BTreeMap<TermId, i64>>,
}

/// File-backed order store.
///
/// Persists a JSON document, rewritten through a temp file on every
/// mutation. Only entries under the configured meta key are read, written
/// or purged.
pub struct FileOrderStore {
    path: PathBuf,
    meta_key: String,
    document: RwLock<StoreDocument>,
}

impl FileOrderStore {
    /// Open the store at `path`, creating an empty one if the file is absent.
    pub fn open<P: AsRef<Path>>(path: P, meta_key: impl Into<String>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let meta_key = meta_key.into();

        let document = match std::fs::read(&path) {
            Ok(bytes) if bytes.is_empty() => StoreDocument::default(),
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| StoreError::Corrupt {
                message: format!("{}: {}", path.display(), e),
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("[ts-core] No existing order store at {}", path.display());
                StoreDocument::default()
            }
            Err(e) => {
                return Err(StoreError::Io {
                    message: format!("{}: {}", path.display(), e),
                })
            }
        };

        let loaded = document.meta.get(&meta_key).map_or(0, BTreeMap::len);
        info!(
            path = %path.display(),
            meta_key = %meta_key,
            loaded,
            "[ts-core] Opened order store"
        );

        Ok(Self {
            path,
            meta_key,
            document: RwLock::new(document),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self, document: &StoreDocument) -> Result<(), StoreError> {
        let io_err = |e: std::io::Error| StoreError::Io {
            message: format!("{}: {}", self.path.display(), e),
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(io_err)?;
            }
        }

        let bytes = serde_json::to_vec_pretty(document).map_err(|e| StoreError::Corrupt {
            message: e.to_string(),
        })?;

        // Write atomically via temp file
        let temp_path = self.path.with_extension("tmp");
        std::fs::write(&temp_path, &bytes).map_err(io_err)?;
        std::fs::rename(&temp_path, &self.path).map_err(io_err)?;

        debug!(bytes = bytes.len(), "[ts-core] Order store flushed");
        Ok(())
    }
}

impl OrderStore for FileOrderStore {
    fn get_rank(&self, term_id: TermId) -> Result<Option<i64>, StoreError> {
        Ok(self
            .document
            .read()
            .meta
            .get(&self.meta_key)
            .and_then(|ranks| ranks.get(&term_id))
            .copied())
    }

    fn set_rank(&self, term_id: TermId, rank: i64) -> Result<(), StoreError> {
        let mut document = self.document.write();
        let mut next = document.clone();
        next.meta
            .entry(self.meta_key.clone())
            .or_default()
            .insert(term_id, rank);

        self.save(&next).map_err(|e| StoreError::WriteFailed {
            term_id,
            message: e.to_string(),
        })?;
        *document = next;
        Ok(())
    }

    fn set_ranks(&self, ranks: &[(TermId, i64)]) -> Result<(), StoreError> {
        if ranks.is_empty() {
            return Ok(());
        }

        let mut document = self.document.write();
        let mut next = document.clone();
        next.meta
            .entry(self.meta_key.clone())
            .or_default()
            .extend(ranks.iter().copied());

        // One flush for the whole batch
        self.save(&next)?;
        *document = next;
        Ok(())
    }

    fn delete_all_ranks(&self) -> Result<usize, StoreError> {
        let mut document = self.document.write();
        let mut next = document.clone();
        let removed = next.meta.remove(&self.meta_key).map_or(0, |r| r.len());

        if removed > 0 {
            self.save(&next)?;
        }
        *document = next;
        Ok(removed)
    }
}
