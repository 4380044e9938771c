use super::{DataStore, Snapshot};
use crate::error::{AssistantError, Result};
use log::{debug, info};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_FILE: &str = "assistant.json";

pub struct FileStore {
    root: PathBuf,
    data_file: String,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            data_file: DEFAULT_DATA_FILE.to_string(),
        }
    }

    pub fn with_data_file(mut self, name: &str) -> Self {
        self.data_file = name.to_string();
        self
    }

    pub fn path(&self) -> PathBuf {
        self.root.join(&self.data_file)
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(AssistantError::Io)?;
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Snapshot> {
        let path = self.path();
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("no state at {}, starting empty", path.display());
                return Ok(Snapshot::default());
            }
            Err(e) => return Err(AssistantError::Io(e)),
        };
        let snapshot: Snapshot =
            serde_json::from_str(&content).map_err(AssistantError::Serialization)?;
        debug!(
            "loaded {} contacts and {} notes from {}",
            snapshot.contacts.len(),
            snapshot.notes.len(),
            path.display()
        );
        Ok(snapshot)
    }

    fn save(&mut self, snapshot: &Snapshot) -> Result<()> {
        self.ensure_dir(&self.root)?;
        let path = self.path();
        let content =
            serde_json::to_string_pretty(snapshot).map_err(AssistantError::Serialization)?;
        fs::write(&path, content).map_err(AssistantError::Io)?;
        debug!("saved state to {}", path.display());
        Ok(())
    }
}
