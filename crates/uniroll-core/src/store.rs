//! JSON-file-backed student record store.
//!
//! The whole collection is loaded when the store is opened and written back
//! after every mutation. Lookups are linear scans; the file is expected to
//! hold a handful of records, not thousands.

use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::model::Student;

/// Result alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Default backing file name.
pub const DEFAULT_DATA_FILE: &str = "students.data";

/// The student record store.
#[derive(Debug)]
pub struct StudentStore {
    path: PathBuf,
    students: Vec<Student>,
}

impl StudentStore {
    /// Open the store at `path`, creating an empty one if the file is absent.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if !path.exists() {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
            let store = Self {
                path,
                students: Vec::new(),
            };
            store.persist()?;
            tracing::info!("created empty student store at {}", store.path.display());
            return Ok(store);
        }

        let students = load_file(&path)?;
        tracing::debug!("loaded {} student(s) from {}", students.len(), path.display());
        Ok(Self { path, students })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Add a new student. Returns `Ok(false)` without touching the store if a
    /// student with the same email or id already exists.
    pub fn add_student(&mut self, student: Student) -> Result<bool> {
        if self.students.iter().any(|s| s.email == student.email) {
            tracing::warn!("rejected duplicate email {}", student.email);
            return Ok(false);
        }
        if self.students.iter().any(|s| s.id == student.id) {
            tracing::warn!("rejected duplicate student id {}", student.id);
            return Ok(false);
        }

        tracing::info!("adding student {} <{}>", student.id, student.email);
        self.students.push(student);
        if let Err(e) = self.persist() {
            self.students.pop();
            return Err(e);
        }
        Ok(true)
    }

    pub fn get_student_by_email(&self, email: &str) -> Option<Student> {
        self.students.iter().find(|s| s.email == email).cloned()
    }

    pub fn get_student_by_id(&self, id: &str) -> Option<Student> {
        self.students.iter().find(|s| s.id == id).cloned()
    }

    /// Replace the record with the same id as `student`. Returns `Ok(false)`
    /// if no such record exists.
    pub fn update_student(&mut self, student: &Student) -> Result<bool> {
        let Some(idx) = self.students.iter().position(|s| s.id == student.id) else {
            return Ok(false);
        };

        let previous = std::mem::replace(&mut self.students[idx], student.clone());
        if let Err(e) = self.persist() {
            self.students[idx] = previous;
            return Err(e);
        }
        tracing::debug!("updated student {}", student.id);
        Ok(true)
    }

    /// Remove the record with `id`. Returns `Ok(false)` if absent.
    pub fn remove_student(&mut self, id: &str) -> Result<bool> {
        let Some(idx) = self.students.iter().position(|s| s.id == id) else {
            return Ok(false);
        };

        let removed = self.students.remove(idx);
        if let Err(e) = self.persist() {
            self.students.insert(idx, removed);
            return Err(e);
        }
        tracing::info!("removed student {id}");
        Ok(true)
    }

    /// Remove every record.
    pub fn clear_all(&mut self) -> Result<()> {
        let previous = std::mem::take(&mut self.students);
        if let Err(e) = self.persist() {
            self.students = previous;
            return Err(e);
        }
        tracing::info!("cleared {} student(s) from {}", previous.len(), self.path.display());
        Ok(())
    }

    pub fn load_all_students(&self) -> Vec<Student> {
        self.students.clone()
    }

    /// Write the full collection back to the backing file.
    fn persist(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.students)?;
        std::fs::write(&self.path, json).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!("wrote {} student(s) to {}", self.students.len(), self.path.display());
        Ok(())
    }
}

fn load_file(path: &Path) -> Result<Vec<Student>> {
    let content = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(&content).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
