use super::{FileExt, FileStore, HandleId};
use log::warn;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug)]
struct StoredFile {
    name: String,
    ext: FileExt,
    buffer: String,
}

/// File store backed by in-memory buffers that persist into one root
/// directory as `<name><extension>`.
///
/// Reads prefer the on-disk file when it exists, so a file-input node can
/// pick up data placed in the directory before the run; otherwise the
/// buffered content is returned.
#[derive(Debug)]
pub struct DirStore {
    root: PathBuf,
    files: Vec<StoredFile>,
}

impl DirStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            files: Vec::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_of(&self, file: &StoredFile) -> PathBuf {
        self.root.join(format!("{}{}", file.name, file.ext.suffix()))
    }
}

impl FileStore for DirStore {
    fn handle(&mut self, name: &str, ext: FileExt) -> Option<HandleId> {
        if let Some(pos) = self
            .files
            .iter()
            .position(|file| file.name == name && file.ext == ext)
        {
            return Some(pos);
        }

        self.files.push(StoredFile {
            name: name.to_string(),
            ext,
            buffer: String::new(),
        });
        Some(self.files.len() - 1)
    }

    fn read_all(&self, handle: HandleId) -> String {
        let Some(file) = self.files.get(handle) else {
            return String::new();
        };
        fs::read_to_string(self.path_of(file)).unwrap_or_else(|_| file.buffer.clone())
    }

    fn write(&mut self, handle: HandleId, text: &str) -> bool {
        match self.files.get_mut(handle) {
            Some(file) => {
                file.buffer.clear();
                file.buffer.push_str(text);
                true
            }
            None => false,
        }
    }

    fn persist(&mut self, handle: HandleId) -> bool {
        let Some(file) = self.files.get(handle) else {
            return false;
        };
        let path = self.path_of(file);
        if let Err(err) = fs::create_dir_all(&self.root) {
            warn!("could not create store directory {:?}: {}", self.root, err);
            return false;
        }
        match fs::write(&path, &file.buffer) {
            Ok(()) => true,
            Err(err) => {
                warn!("could not persist {:?}: {}", path, err);
                false
            }
        }
    }
}
