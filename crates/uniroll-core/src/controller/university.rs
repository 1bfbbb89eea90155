//! Top-level menu choosing between the admin and student systems.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::controller::{AdminController, Menu, StudentController, UniversityView, INVALID_OPTION};
use crate::store::StudentStore;

pub const UNIVERSITY_MENU_PROMPT: &str = "University System: (A)dmin, (S)tudent, or X";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniversityMenuOption {
    Admin,
    Student,
    Exit,
}

impl fmt::Display for UniversityMenuOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UniversityMenuOption::Admin => write!(f, "A"),
            UniversityMenuOption::Student => write!(f, "S"),
            UniversityMenuOption::Exit => write!(f, "X"),
        }
    }
}

impl FromStr for UniversityMenuOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "A" => Ok(UniversityMenuOption::Admin),
            "S" => Ok(UniversityMenuOption::Student),
            "X" => Ok(UniversityMenuOption::Exit),
            other => Err(format!("unknown university menu option: {other}")),
        }
    }
}

pub struct UniversityController<'a, V, R> {
    store: &'a mut StudentStore,
    view: &'a mut V,
    rng: &'a mut R,
}

impl<'a, V: UniversityView, R: Rng> UniversityController<'a, V, R> {
    pub fn new(store: &'a mut StudentStore, view: &'a mut V, rng: &'a mut R) -> Self {
        Self { store, view, rng }
    }
}

impl<V: UniversityView, R: Rng> Menu for UniversityController<'_, V, R> {
    fn read_choice(&mut self) -> String {
        self.view.get_input(UNIVERSITY_MENU_PROMPT)
    }

    fn handle_choice(&mut self, choice: &str) -> bool {
        match choice.parse::<UniversityMenuOption>() {
            Ok(UniversityMenuOption::Admin) => {
                AdminController::new(self.store, self.view).run();
            }
            Ok(UniversityMenuOption::Student) => {
                StudentController::new(self.store, self.view, self.rng).run();
            }
            Ok(UniversityMenuOption::Exit) => {
                self.view.display_info("Thank You");
                return false;
            }
            Err(_) => self.view.display_error(INVALID_OPTION),
        }
        true
    }
}
