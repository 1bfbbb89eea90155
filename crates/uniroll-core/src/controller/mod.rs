//! Menu controllers.
//!
//! Each controller borrows the record store and a view for as long as its
//! menu runs, and reports every outcome through the view. Failures surface
//! as `false` plus a message; nothing propagates past a controller.

mod admin;
mod student;
mod subject;
mod university;

pub use admin::{
    group_by_grade, partition_by_pass, AdminController, AdminMenuOption, ADMIN_MENU_PROMPT,
};
pub use student::{StudentController, StudentMenuOption, STUDENT_MENU_PROMPT};
pub use subject::{SubjectController, SubjectMenuOption, SUBJECT_MENU_PROMPT};
pub use university::{UniversityController, UniversityMenuOption, UNIVERSITY_MENU_PROMPT};

use crate::view::{AdminView, StudentView, SubjectView};

/// Message shown for any unrecognised menu choice.
pub const INVALID_OPTION: &str = "Invalid option";

/// A view able to drive every menu.
pub trait UniversityView: StudentView + SubjectView + AdminView {}

impl<T: StudentView + SubjectView + AdminView> UniversityView for T {}

/// An interactive menu: read a choice, act on it, repeat.
pub trait Menu {
    /// Read the next menu choice from the view.
    fn read_choice(&mut self) -> String;

    /// Act on `choice`. Returns `false` when the menu should close.
    fn handle_choice(&mut self, choice: &str) -> bool;

    /// Run until [`Menu::handle_choice`] asks to stop.
    fn run(&mut self) {
        loop {
            let choice = self.read_choice();
            if !self.handle_choice(&choice) {
                break;
            }
        }
    }
}
