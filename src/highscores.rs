//! High score persistence
//!
//! A single binary file holding one little-endian u64: read once at
//! startup, overwritten at shutdown. Missing or corrupt data means a
//! fresh zero, never an error.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File-backed store for the all-time best score
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
    best: u64,
}

impl HighScoreStore {
    /// Open the store, reading any previously persisted best score
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let best = match read_best(&path) {
            Ok(Some(best)) => {
                log::info!("Loaded high score {} from {}", best, path.display());
                best
            }
            Ok(None) => {
                log::info!("No high score file at {}, starting at 0", path.display());
                0
            }
            Err(err) => {
                log::warn!("Unreadable high score file {}: {}", path.display(), err);
                0
            }
        };
        Self { path, best }
    }

    /// All-time best score
    pub fn best(&self) -> u64 {
        self.best
    }

    /// Raise the stored best; lower scores are ignored
    pub fn record(&mut self, score: u64) {
        self.best = self.best.max(score);
    }

    /// Overwrite the backing file with the current best
    pub fn save(&self) {
        if let Err(err) = fs::write(&self.path, self.best.to_le_bytes()) {
            log::warn!(
                "Failed to save high score to {}: {}",
                self.path.display(),
                err
            );
        }
    }
}

fn read_best(path: &Path) -> io::Result<Option<u64>> {
    match fs::read(path) {
        Ok(bytes) => {
            let bytes: [u8; 8] = bytes
                .try_into()
                .map_err(|_| io::Error::new(io::ErrorKind::InvalidData, "expected 8 bytes"))?;
            Ok(Some(u64::from_le_bytes(bytes)))
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("tapioca_highscore_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_missing_file_starts_at_zero() {
        let store = HighScoreStore::open(temp_path("missing.dat"));
        assert_eq!(store.best(), 0);
    }

    #[test]
    fn test_save_load_round_trip() {
        let path = temp_path("roundtrip.dat");
        let mut store = HighScoreStore::open(&path);
        store.record(1234);
        store.save();

        let reopened = HighScoreStore::open(&path);
        assert_eq!(reopened.best(), 1234);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_corrupt_file_starts_at_zero() {
        let path = temp_path("corrupt.dat");
        fs::write(&path, b"not eight bytes at all").unwrap();
        let store = HighScoreStore::open(&path);
        assert_eq!(store.best(), 0);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_record_is_monotonic() {
        let mut store = HighScoreStore::open(temp_path("monotonic.dat"));
        store.record(100);
        store.record(50);
        assert_eq!(store.best(), 100);
        store.record(150);
        assert_eq!(store.best(), 150);
    }
}
