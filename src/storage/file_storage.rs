use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::debug;

use crate::storage::{Storage, StorageError};

/// A store kept in a single JSON document mapping each key to its list.
///
/// A missing file is an empty store. Every write replaces the document
/// atomically, so a failed write leaves the previous contents in place.
pub struct FileStorage {
    path: PathBuf
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into()
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Result<Map<String, Value>, StorageError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                debug!("Store [{}] does not exist yet", self.path.display());
                return Ok(Map::new())
            },
            Err(error) => return Err(error.into())
        };

        match serde_json::from_reader(BufReader::new(file))? {
            Value::Object(document) => Ok(document),
            _ => Err(StorageError::InvalidDocument { path: self.path.clone() })
        }
    }

    fn write_document(&self, document: &Map<String, Value>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let temp_path = self.path.with_extension("json.tmp");
        let mut writer = BufWriter::new(File::create(&temp_path)?);

        serde_json::to_writer_pretty(&mut writer, document)?;
        writer.flush()?;
        writer.get_ref().sync_all()?;

        fs::rename(&temp_path, &self.path).map_err(|error| {
            let _ = fs::remove_file(&temp_path);
            StorageError::from(error)
        })
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<Vec<Value>>, StorageError> {
        let mut document = self.read_document()?;

        match document.remove(key) {
            None => Ok(None),
            Some(Value::Array(values)) => Ok(Some(values)),
            Some(_) => Err(StorageError::Corrupt { key: key.to_string() })
        }
    }

    fn set(&self, key: &str, values: Vec<Value>) -> Result<(), StorageError> {
        let mut document = self.read_document()?;
        document.insert(key.to_string(), Value::Array(values));
        self.write_document(&document)
    }
}
