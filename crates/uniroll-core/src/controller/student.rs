//! Student login and registration menu.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::controller::subject::SubjectController;
use crate::controller::{Menu, INVALID_OPTION};
use crate::model::Student;
use crate::store::StudentStore;
use crate::validation::{check_email, check_password};
use crate::view::{StudentView, SubjectView};

pub const STUDENT_MENU_PROMPT: &str = "Student System (l/r/x)";

/// Choices on the student menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentMenuOption {
    Login,
    Register,
    Exit,
}

impl fmt::Display for StudentMenuOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StudentMenuOption::Login => write!(f, "L"),
            StudentMenuOption::Register => write!(f, "R"),
            StudentMenuOption::Exit => write!(f, "X"),
        }
    }
}

impl FromStr for StudentMenuOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "L" => Ok(StudentMenuOption::Login),
            "R" => Ok(StudentMenuOption::Register),
            "X" => Ok(StudentMenuOption::Exit),
            other => Err(format!("unknown student menu option: {other}")),
        }
    }
}

/// Handles registration and login, then hands a logged-in student to the
/// subject menu.
pub struct StudentController<'a, V, R> {
    store: &'a mut StudentStore,
    view: &'a mut V,
    rng: &'a mut R,
}

impl<'a, V, R> StudentController<'a, V, R>
where
    V: StudentView + SubjectView,
    R: Rng,
{
    pub fn new(store: &'a mut StudentStore, view: &'a mut V, rng: &'a mut R) -> Self {
        Self { store, view, rng }
    }

    /// Register a new student from the view's registration form.
    ///
    /// Returns `true` only if a record was added to the store.
    pub fn register(&mut self) -> bool {
        let form = self.view.display_registration_form();

        if form.name.trim().is_empty() || form.email.is_empty() || form.password.is_empty() {
            self.view.display_error("All fields are required!");
            return false;
        }
        if let Err(e) = check_email(&form.email) {
            self.view.display_error(&e.to_string());
            return false;
        }
        if let Err(e) = check_password(&form.password) {
            self.view.display_error(&e.to_string());
            return false;
        }
        if self.store.get_student_by_email(&form.email).is_some() {
            self.view.display_error("Student already exists!");
            return false;
        }

        let mut student = Student::new(self.rng, form.name.trim(), form.email, form.password);
        while self.store.get_student_by_id(&student.id).is_some() {
            student.regenerate_id(self.rng);
        }

        match self.store.add_student(student) {
            Ok(true) => {
                self.view.display_success("Registration successful!");
                true
            }
            Ok(false) => {
                self.view.display_error("Student already exists!");
                false
            }
            Err(e) => {
                tracing::error!("registration failed: {e}");
                self.view.display_error("Registration failed!");
                false
            }
        }
    }

    /// Log in with the view's credentials. On success the subject menu runs
    /// for that student before this returns `true`.
    pub fn login(&mut self) -> bool {
        let credentials = self.view.display_login_form();

        if credentials.email.is_empty() || credentials.password.is_empty() {
            self.view.display_error("All fields are required!");
            return false;
        }

        let student = match self.store.get_student_by_email(&credentials.email) {
            Some(s) if s.password == credentials.password => s,
            _ => {
                tracing::warn!("failed login for {}", credentials.email);
                self.view.display_error("Invalid credentials!");
                return false;
            }
        };

        self.view.display_success("Login successful!");
        tracing::debug!("student {} logged in", student.id);
        SubjectController::new(self.store, self.view, self.rng, student).run();
        true
    }
}

impl<V, R> Menu for StudentController<'_, V, R>
where
    V: StudentView + SubjectView,
    R: Rng,
{
    fn read_choice(&mut self) -> String {
        self.view.get_input(STUDENT_MENU_PROMPT)
    }

    fn handle_choice(&mut self, choice: &str) -> bool {
        match choice.parse::<StudentMenuOption>() {
            Ok(StudentMenuOption::Login) => {
                self.login();
            }
            Ok(StudentMenuOption::Register) => {
                self.register();
            }
            Ok(StudentMenuOption::Exit) => return false,
            Err(_) => self.view.display_error(INVALID_OPTION),
        }
        true
    }
}
