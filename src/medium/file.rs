//! FileMedium - directory-backed medium that survives process restarts.
//!
//! Each key lives in its own file named after the hex encoding of the key.
//! Entries are loaded once on [`FileMedium::open`] and written through on
//! every `set`, via a temp file and rename so a crash never leaves a torn entry.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use tracing::{debug, warn};

use super::{check_quota, entry_size, Medium, MediumError};

const ENTRY_EXT: &str = "entry";
const TEMP_EXT: &str = "tmp";

struct State {
    entries: HashMap<String, String>,
    usage: usize,
}

/// Medium persisted as one file per key inside a directory.
pub struct FileMedium {
    dir: PathBuf,
    capacity: usize,
    state: RwLock<State>,
}

impl FileMedium {
    /// Open (creating if needed) the medium rooted at `dir`.
    pub fn open(dir: impl Into<PathBuf>, capacity: usize) -> Result<Self, MediumError> {
        let dir = dir.into();
        let io_err = |source: io::Error| MediumError::Io {
            key: dir.display().to_string(),
            source,
        };

        fs::create_dir_all(&dir).map_err(io_err)?;

        let mut entries = HashMap::new();
        let mut usage = 0;
        for dirent in fs::read_dir(&dir).map_err(io_err)? {
            let path = dirent.map_err(io_err)?.path();
            match path.extension().and_then(|e| e.to_str()) {
                Some(ENTRY_EXT) => {}
                Some(TEMP_EXT) => {
                    // Left behind by an interrupted `set`; the entry file is intact.
                    match fs::remove_file(&path) {
                        Ok(()) => debug!(path = %path.display(), "removed stale temp file"),
                        Err(err) => {
                            warn!(path = %path.display(), error = %err, "cannot remove temp file")
                        }
                    }
                    continue;
                }
                _ => continue,
            }
            let Some(key) = key_from_path(&path) else {
                warn!(path = %path.display(), "skipping entry with undecodable file name");
                continue;
            };
            match fs::read_to_string(&path) {
                Ok(value) => {
                    usage += entry_size(&key, &value);
                    entries.insert(key, value);
                }
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "skipping unreadable entry")
                }
            }
        }

        debug!(dir = %dir.display(), entries = entries.len(), usage, "opened file medium");

        Ok(Self {
            dir,
            capacity,
            state: RwLock::new(State { entries, usage }),
        })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", hex_encode(key), ENTRY_EXT))
    }
}

impl Medium for FileMedium {
    fn get(&self, key: &str) -> Option<String> {
        self.state.read().entries.get(key).cloned()
    }

    fn set(&self, key: &str, value: String) -> Result<(), MediumError> {
        let mut state = self.state.write();
        let previous = state.entries.get(key).map(|v| entry_size(key, v));
        let usage = check_quota(state.usage, self.capacity, previous, key, &value)?;

        let path = self.path_for(key);
        let temp = path.with_extension(TEMP_EXT);
        let io_err = |source| MediumError::Io {
            key: key.to_string(),
            source,
        };
        fs::write(&temp, value.as_bytes()).map_err(io_err)?;
        fs::rename(&temp, &path).map_err(io_err)?;

        state.usage = usage;
        state.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool, MediumError> {
        let mut state = self.state.write();
        let Some(value) = state.entries.get(key) else {
            return Ok(false);
        };
        let size = entry_size(key, value);

        match fs::remove_file(self.path_for(key)) {
            Ok(()) => {}
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(source) => {
                return Err(MediumError::Io {
                    key: key.to_string(),
                    source,
                })
            }
        }

        state.entries.remove(key);
        state.usage -= size;
        Ok(true)
    }

    fn keys(&self) -> Vec<String> {
        self.state.read().entries.keys().cloned().collect()
    }

    fn usage(&self) -> usize {
        self.state.read().usage
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}

fn hex_encode(key: &str) -> String {
    key.bytes().map(|b| format!("{:02x}", b)).collect()
}

fn hex_decode(name: &str) -> Option<String> {
    if name.len() % 2 != 0 {
        return None;
    }
    let bytes = (0..name.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(name.get(i..i + 2)?, 16).ok())
        .collect::<Option<Vec<u8>>>()?;
    String::from_utf8(bytes).ok()
}

fn key_from_path(path: &Path) -> Option<String> {
    hex_decode(path.file_stem()?.to_str()?)
}
