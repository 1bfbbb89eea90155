//! Core data model types for uniroll.
//!
//! A [`Student`] owns a bounded list of [`Subject`]s; each subject's
//! [`Grade`] is derived from its mark and never stored independently.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Maximum number of subjects a student may be enrolled in.
pub const MAX_SUBJECTS: usize = 4;

/// Average mark at or above which a student is passing.
pub const PASS_MARK: f64 = 50.0;

/// Letter classification derived from a numeric mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    HD,
    D,
    C,
    P,
    Z,
}

impl Grade {
    /// Classify a mark: 85+ HD, 70+ D, 60+ C, 50+ P, otherwise Z.
    pub fn from_mark(mark: f64) -> Self {
        if mark >= 85.0 {
            Grade::HD
        } else if mark >= 70.0 {
            Grade::D
        } else if mark >= 60.0 {
            Grade::C
        } else if mark >= PASS_MARK {
            Grade::P
        } else {
            Grade::Z
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::HD => "HD",
            Grade::D => "D",
            Grade::C => "C",
            Grade::P => "P",
            Grade::Z => "Z",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "HD" => Ok(Grade::HD),
            "D" => Ok(Grade::D),
            "C" => Ok(Grade::C),
            "P" => Ok(Grade::P),
            "Z" => Ok(Grade::Z),
            other => Err(format!("unknown grade: {other}")),
        }
    }
}

/// One enrolled subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SubjectRecord", into = "SubjectRecord")]
pub struct Subject {
    id: String,
    mark: f64,
}

/// On-disk shape of a subject. `grade` is written for readers of the file
/// and ignored on load.
#[derive(Debug, Serialize, Deserialize)]
struct SubjectRecord {
    id: String,
    mark: f64,
    #[serde(default)]
    grade: Option<Grade>,
}

impl TryFrom<SubjectRecord> for Subject {
    type Error = ModelError;

    fn try_from(record: SubjectRecord) -> Result<Self, Self::Error> {
        Subject::new(record.id, record.mark)
    }
}

impl From<Subject> for SubjectRecord {
    fn from(subject: Subject) -> Self {
        let grade = Some(subject.grade());
        SubjectRecord {
            id: subject.id,
            mark: subject.mark,
            grade,
        }
    }
}

fn check_mark(mark: f64) -> Result<f64, ModelError> {
    if (0.0..=100.0).contains(&mark) {
        Ok(mark)
    } else {
        Err(ModelError::MarkOutOfRange(mark))
    }
}

fn random_subject_id<R: Rng>(rng: &mut R) -> String {
    format!("{:03}", rng.random_range(1..=999u32))
}

impl Subject {
    /// Create a subject with a caller-supplied id and mark.
    pub fn new(id: impl Into<String>, mark: f64) -> Result<Self, ModelError> {
        Ok(Self {
            id: id.into(),
            mark: check_mark(mark)?,
        })
    }

    /// Random 3-digit id and a random whole mark in `25..=100`.
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let mark = f64::from(rng.random_range(25..=100u32));
        Self {
            id: random_subject_id(rng),
            mark,
        }
    }

    /// Like [`Subject::generate`], but the id is guaranteed not to clash with
    /// any subject in `taken`.
    pub fn generate_excluding<R: Rng>(rng: &mut R, taken: &[Subject]) -> Self {
        let mut subject = Self::generate(rng);
        while taken.iter().any(|s| s.id == subject.id) {
            subject.id = random_subject_id(rng);
        }
        subject
    }

    /// Random id with a fixed mark.
    pub fn with_mark<R: Rng>(rng: &mut R, mark: f64) -> Result<Self, ModelError> {
        Self::new(random_subject_id(rng), mark)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn mark(&self) -> f64 {
        self.mark
    }

    /// Grade derived from the current mark.
    pub fn grade(&self) -> Grade {
        Grade::from_mark(self.mark)
    }

    /// Replace the mark; the grade follows.
    pub fn set_mark(&mut self, mark: f64) -> Result<(), ModelError> {
        self.mark = check_mark(mark)?;
        Ok(())
    }
}

/// A registered student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StudentRecord")]
pub struct Student {
    /// 6-digit numeric identifier.
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    subjects: Vec<Subject>,
}

#[derive(Debug, Deserialize)]
struct StudentRecord {
    id: String,
    name: String,
    email: String,
    password: String,
    #[serde(default)]
    subjects: Vec<Subject>,
}

impl TryFrom<StudentRecord> for Student {
    type Error = ModelError;

    fn try_from(record: StudentRecord) -> Result<Self, Self::Error> {
        if record.subjects.len() > MAX_SUBJECTS {
            return Err(ModelError::TooManySubjects {
                count: record.subjects.len(),
                max: MAX_SUBJECTS,
            });
        }
        let mut seen = HashSet::new();
        for subject in &record.subjects {
            if !seen.insert(subject.id()) {
                return Err(ModelError::DuplicateSubject(subject.id().to_string()));
            }
        }
        Ok(Student {
            id: record.id,
            name: record.name,
            email: record.email,
            password: record.password,
            subjects: record.subjects,
        })
    }
}

fn random_student_id<R: Rng>(rng: &mut R) -> String {
    format!("{:06}", rng.random_range(1..=999_999u32))
}

impl Student {
    /// Create a student with a random id and no subjects.
    ///
    /// Name, email and password are stored as given; format checks belong
    /// to the caller (see [`crate::validation`]).
    pub fn new<R: Rng>(
        rng: &mut R,
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id: random_student_id(rng),
            name: name.into(),
            email: email.into(),
            password: password.into(),
            subjects: Vec::new(),
        }
    }

    /// Draw a new random id, e.g. after a collision in the store.
    pub fn regenerate_id<R: Rng>(&mut self, rng: &mut R) {
        self.id = random_student_id(rng);
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    pub fn is_full(&self) -> bool {
        self.subjects.len() >= MAX_SUBJECTS
    }

    /// Enrol in `subject`. Returns `false`, leaving the student unchanged,
    /// when already at [`MAX_SUBJECTS`] or when the subject id is taken.
    pub fn enrol_subject(&mut self, subject: Subject) -> bool {
        if self.is_full() || self.subjects.iter().any(|s| s.id == subject.id) {
            return false;
        }
        self.subjects.push(subject);
        true
    }

    /// Drop the first subject with `subject_id`. Returns `false` if none.
    pub fn remove_subject(&mut self, subject_id: &str) -> bool {
        match self.subjects.iter().position(|s| s.id == subject_id) {
            Some(idx) => {
                self.subjects.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Mean mark across enrolled subjects, `0.0` when there are none.
    pub fn average_mark(&self) -> f64 {
        if self.subjects.is_empty() {
            return 0.0;
        }
        let total: f64 = self.subjects.iter().map(|s| s.mark).sum();
        total / self.subjects.len() as f64
    }

    pub fn is_passing(&self) -> bool {
        self.average_mark() >= PASS_MARK
    }

    /// Grade for the student's average mark.
    pub fn overall_grade(&self) -> Grade {
        Grade::from_mark(self.average_mark())
    }
}
