use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

/// Narrow key/value persistence seam, the browser-localStorage analogue.
///
/// The likes model is the only writer; it overwrites its key wholesale on
/// every mutation and treats an absent or unreadable key as empty.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn read(&self, key: &str) -> Option<Vec<u8>>;

    /// Write `value` under `key`, replacing any previous value.
    fn write(&self, key: &str, value: &[u8]) -> io::Result<()>;
}

/// In-memory store for tests and sessions without a data directory.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn write(&self, key: &str, value: &[u8]) -> io::Result<()> {
        self.entries
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "store lock poisoned"))?
            .insert(key.to_string(), value.to_vec());
        Ok(())
    }
}

/// Disk-backed store keeping one file per key under a directory.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(FileStore { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: &str) -> Option<Vec<u8>> {
        fs::read(self.path_for(key)).ok()
    }

    fn write(&self, key: &str, value: &[u8]) -> io::Result<()> {
        fs::write(self.path_for(key), value)
    }
}
