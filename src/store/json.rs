use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::models::LawyerRecord;
use crate::store::repository::{validate_records, DirectoryStore, StoreError};

/// Directory persisted as a single pretty-printed JSON array.
///
/// Saves go through a temp file in the same directory followed by a
/// rename, so a crash mid-write leaves the previous directory intact.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DirectoryStore for JsonFileStore {
    fn load(&self) -> Result<Vec<LawyerRecord>, StoreError> {
        if !self.path.exists() {
            return Err(StoreError::NotFound(self.path.display().to_string()));
        }

        let contents = fs::read_to_string(&self.path)?;
        let records: Vec<LawyerRecord> = serde_json::from_str(&contents)?;

        let total = records.len();
        let valid = validate_records(records);
        if valid.len() < total {
            warn!(
                dropped = total - valid.len(),
                kept = valid.len(),
                path = %self.path.display(),
                "Dropped invalid records while loading directory"
            );
        }
        info!(records = valid.len(), path = %self.path.display(), "Loaded directory");

        Ok(valid)
    }

    fn save(&self, records: &[LawyerRecord]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(records)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;

        info!(records = records.len(), path = %self.path.display(), "Saved directory");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{City, Domain};

    fn record(id: &str) -> LawyerRecord {
        LawyerRecord {
            id: id.to_string(),
            first_name: "Rohan".to_string(),
            last_name: "Mehta".to_string(),
            domain: Domain::RealEstate,
            city: City::Ahmedabad,
            gender: "male".to_string(),
            experience: 15,
            rating: 4.6,
            fees_per_hearing: 5500.0,
            total_cases: 120,
            cases_won: 95,
            law_school: Some("Gujarat National Law University".to_string()),
            bar_association: None,
            bio: None,
            avatar: None,
            enrolled_at: None,
        }
    }

    #[test]
    fn test_load_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("absent.json"));

        match store.load() {
            Err(StoreError::NotFound(path)) => assert!(path.contains("absent.json")),
            other => panic!("expected NotFound, got {:?}", other.map(|r| r.len())),
        }
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("lawyers.json"));

        let records = vec![record("lw_1"), record("lw_2")];
        store.save(&records).unwrap();

        assert_eq!(store.load().unwrap(), records);
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested/deeper/lawyers.json"));

        store.save(&[record("lw_1")]).unwrap();

        assert!(store.path().exists());
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn test_load_skips_invalid_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lawyers.json");

        let mut bad = record("lw_bad");
        bad.rating = 11.0;
        let json = serde_json::to_string_pretty(&vec![record("lw_good"), bad]).unwrap();
        fs::write(&path, json).unwrap();

        let store = JsonFileStore::new(&path);
        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "lw_good");
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lawyers.json");
        fs::write(&path, "{ not json").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(matches!(store.load(), Err(StoreError::Serde(_))));
    }
}
