//! Subject enrolment menu for a logged-in student.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::controller::{Menu, INVALID_OPTION};
use crate::model::{Student, Subject, MAX_SUBJECTS};
use crate::store::StudentStore;
use crate::validation::check_password;
use crate::view::SubjectView;

pub const SUBJECT_MENU_PROMPT: &str = "Student Course Menu (c/e/r/s/x)";

/// Choices on the subject menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubjectMenuOption {
    ChangePassword,
    Enrol,
    Remove,
    Show,
    Exit,
}

impl fmt::Display for SubjectMenuOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = match self {
            SubjectMenuOption::ChangePassword => "C",
            SubjectMenuOption::Enrol => "E",
            SubjectMenuOption::Remove => "R",
            SubjectMenuOption::Show => "S",
            SubjectMenuOption::Exit => "X",
        };
        f.write_str(key)
    }
}

impl FromStr for SubjectMenuOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "C" => Ok(SubjectMenuOption::ChangePassword),
            "E" => Ok(SubjectMenuOption::Enrol),
            "R" => Ok(SubjectMenuOption::Remove),
            "S" => Ok(SubjectMenuOption::Show),
            "X" => Ok(SubjectMenuOption::Exit),
            other => Err(format!("unknown subject menu option: {other}")),
        }
    }
}

/// Enrol, drop and list subjects, and change the password, for one student.
///
/// Works on its own copy of the student and writes every change back to the
/// store. If the write fails, the copy is rolled back.
pub struct SubjectController<'a, V, R> {
    store: &'a mut StudentStore,
    view: &'a mut V,
    rng: &'a mut R,
    student: Student,
}

impl<'a, V, R> SubjectController<'a, V, R>
where
    V: SubjectView,
    R: Rng,
{
    pub fn new(
        store: &'a mut StudentStore,
        view: &'a mut V,
        rng: &'a mut R,
        student: Student,
    ) -> Self {
        Self {
            store,
            view,
            rng,
            student,
        }
    }

    pub fn student(&self) -> &Student {
        &self.student
    }

    /// Enrol in a freshly generated subject.
    pub fn enrol(&mut self) -> bool {
        if self.student.is_full() {
            self.view.display_error(&format!(
                "Students are allowed to enrol in {MAX_SUBJECTS} subjects only"
            ));
            return false;
        }

        let previous = self.student.clone();
        let subject = Subject::generate_excluding(self.rng, self.student.subjects());
        if !self.student.enrol_subject(subject.clone()) {
            return false;
        }
        if !self.save(previous) {
            return false;
        }

        self.view
            .display_enrolment(&subject, self.student.subjects().len(), MAX_SUBJECTS);
        true
    }

    /// Drop the subject with `subject_id`.
    pub fn remove_subject(&mut self, subject_id: &str) -> bool {
        let subject_id = subject_id.trim();
        let previous = self.student.clone();
        if !self.student.remove_subject(subject_id) {
            self.view
                .display_error(&format!("Subject {subject_id} not found!"));
            return false;
        }
        if !self.save(previous) {
            return false;
        }

        self.view
            .display_success(&format!("Dropping Subject-{subject_id}"));
        self.view.display_info(&format!(
            "You are now enrolled in {} out of {MAX_SUBJECTS} subjects",
            self.student.subjects().len()
        ));
        true
    }

    /// Ask for a new password twice and store it if both entries match and
    /// the format is valid.
    pub fn change_password(&mut self) -> bool {
        let password = self.view.get_input("New Password");
        let confirm = self.view.get_input("Confirm Password");

        if password != confirm {
            self.view
                .display_error("Password does not match - try again");
            return false;
        }
        if let Err(e) = check_password(&password) {
            self.view.display_error(&e.to_string());
            return false;
        }

        let previous = self.student.clone();
        self.student.password = password;
        if !self.save(previous) {
            return false;
        }
        self.view.display_success("Password updated successfully!");
        true
    }

    pub fn show(&mut self) {
        self.view.display_subjects(self.student.subjects());
    }

    /// Write the student back, restoring `previous` if that fails.
    fn save(&mut self, previous: Student) -> bool {
        match self.store.update_student(&self.student) {
            Ok(true) => true,
            Ok(false) => {
                tracing::warn!("student {} vanished from the store", self.student.id);
                self.student = previous;
                self.view.display_error("Student record no longer exists!");
                false
            }
            Err(e) => {
                tracing::error!("failed to save student {}: {e}", self.student.id);
                self.student = previous;
                self.view.display_error("Failed to save changes!");
                false
            }
        }
    }
}

impl<V, R> Menu for SubjectController<'_, V, R>
where
    V: SubjectView,
    R: Rng,
{
    fn read_choice(&mut self) -> String {
        self.view.get_input(SUBJECT_MENU_PROMPT)
    }

    fn handle_choice(&mut self, choice: &str) -> bool {
        match choice.parse::<SubjectMenuOption>() {
            Ok(SubjectMenuOption::ChangePassword) => {
                self.change_password();
            }
            Ok(SubjectMenuOption::Enrol) => {
                self.enrol();
            }
            Ok(SubjectMenuOption::Remove) => {
                let id = self.view.get_input("Remove Subject by ID");
                self.remove_subject(&id);
            }
            Ok(SubjectMenuOption::Show) => self.show(),
            Ok(SubjectMenuOption::Exit) => return false,
            Err(_) => self.view.display_error(INVALID_OPTION),
        }
        true
    }
}
