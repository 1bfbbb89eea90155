//! View contracts used by the controllers.
//!
//! Controllers never print or read directly. Everything the user sees or
//! types goes through these traits, so a console front end and a scripted
//! test double are interchangeable.

use std::collections::BTreeMap;

use crate::model::{Grade, Student, Subject};

/// Data collected by the registration form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Data collected by the login form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Messaging and free-form input shared by every menu.
pub trait View {
    fn display_error(&mut self, message: &str);

    fn display_success(&mut self, message: &str);

    fn display_info(&mut self, message: &str);

    /// Read one line of input after showing `prompt`.
    ///
    /// Implementations whose input is exhausted return `"X"` so that menu
    /// loops terminate.
    fn get_input(&mut self, prompt: &str) -> String;
}

/// Forms for the student login/registration menu.
pub trait StudentView: View {
    fn display_registration_form(&mut self) -> RegistrationForm;

    fn display_login_form(&mut self) -> Credentials;
}

/// Output for a logged-in student's subject menu.
pub trait SubjectView: View {
    fn display_subjects(&mut self, subjects: &[Subject]);

    /// Announce a new enrolment; `enrolled` counts the new subject.
    fn display_enrolment(&mut self, subject: &Subject, enrolled: usize, max: usize);
}

/// Output and confirmation for the administrator menu.
pub trait AdminView: View {
    fn display_grade_groups(&mut self, groups: &BTreeMap<Grade, Vec<Student>>);

    fn display_partitioned_students(&mut self, passing: &[Student], failing: &[Student]);

    fn display_all_students(&mut self, students: &[Student]);

    fn confirm_action(&mut self, message: &str) -> bool;
}
