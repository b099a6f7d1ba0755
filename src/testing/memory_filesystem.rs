use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::ProjectFilesystem;

/// In-memory project filesystem for testing.
#[derive(Debug)]
#[allow(dead_code)]
pub struct MemoryFilesystem {
    root: PathBuf,
    pub files: RefCell<BTreeMap<String, String>>,
    pub dirs: RefCell<BTreeSet<String>>,
    pub removed: RefCell<Vec<String>>,
    pub root_created: RefCell<bool>,
    fail_on_write: RefCell<Option<String>>,
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self {
            root: PathBuf::from("/work/project"),
            files: RefCell::new(BTreeMap::new()),
            dirs: RefCell::new(BTreeSet::new()),
            removed: RefCell::new(Vec::new()),
            root_created: RefCell::new(false),
            fail_on_write: RefCell::new(None),
        }
    }
}

#[allow(dead_code)]
impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.files.borrow_mut().insert(path.to_string(), content.to_string());
        self
    }

    pub fn with_dir(self, path: &str) -> Self {
        self.dirs.borrow_mut().insert(path.to_string());
        self
    }

    /// Make writes to `path` fail with an I/O error.
    pub fn failing_write(self, path: &str) -> Self {
        *self.fail_on_write.borrow_mut() = Some(path.to_string());
        self
    }

    pub fn file(&self, path: &str) -> Option<String> {
        self.files.borrow().get(path).cloned()
    }

    pub fn paths(&self) -> Vec<String> {
        self.files.borrow().keys().cloned().collect()
    }
}

impl ProjectFilesystem for MemoryFilesystem {
    fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_root(&self) -> Result<(), AppError> {
        *self.root_created.borrow_mut() = true;
        Ok(())
    }

    fn list_entries(&self) -> Result<Vec<String>, AppError> {
        let files = self.files.borrow();
        let dirs = self.dirs.borrow();
        let names: BTreeSet<String> = files
            .keys()
            .chain(dirs.iter())
            .filter_map(|path| path.split('/').next())
            .map(str::to_string)
            .collect();
        Ok(names.into_iter().collect())
    }

    fn read_file(&self, path: &str) -> Result<String, AppError> {
        self.file(path).ok_or_else(|| {
            AppError::Io(io::Error::new(io::ErrorKind::NotFound, format!("{} not found", path)))
        })
    }

    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        if self.fail_on_write.borrow().as_deref() == Some(path) {
            return Err(AppError::Io(io::Error::other(format!("cannot write {}", path))));
        }
        self.files.borrow_mut().insert(path.to_string(), content.to_string());
        Ok(())
    }

    fn remove_file(&self, path: &str) -> Result<(), AppError> {
        self.files.borrow_mut().remove(path);
        self.removed.borrow_mut().push(path.to_string());
        Ok(())
    }

    fn remove_dir_all(&self, path: &str) -> Result<(), AppError> {
        let prefix = format!("{}/", path);
        self.files.borrow_mut().retain(|p, _| !p.starts_with(&prefix));
        self.dirs.borrow_mut().retain(|d| d != path && !d.starts_with(&prefix));
        self.removed.borrow_mut().push(path.to_string());
        Ok(())
    }

    fn file_exists(&self, path: &str) -> bool {
        self.files.borrow().contains_key(path)
    }

    fn is_dir(&self, path: &str) -> bool {
        let prefix = format!("{}/", path);
        self.dirs.borrow().contains(path) || self.files.borrow().keys().any(|p| p.starts_with(&prefix))
    }
}
