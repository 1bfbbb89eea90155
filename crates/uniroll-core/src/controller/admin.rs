//! Administrator menu: list, group, partition, remove and clear records.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::controller::{Menu, INVALID_OPTION};
use crate::model::{Grade, Student};
use crate::store::StudentStore;
use crate::view::AdminView;

pub const ADMIN_MENU_PROMPT: &str = "Admin System (c/g/p/r/s/x)";

const NO_STUDENTS: &str = "No students found";

/// Choices on the admin menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminMenuOption {
    Clear,
    Group,
    Partition,
    Remove,
    Show,
    Exit,
}

impl fmt::Display for AdminMenuOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = match self {
            AdminMenuOption::Clear => "C",
            AdminMenuOption::Group => "G",
            AdminMenuOption::Partition => "P",
            AdminMenuOption::Remove => "R",
            AdminMenuOption::Show => "S",
            AdminMenuOption::Exit => "X",
        };
        f.write_str(key)
    }
}

impl FromStr for AdminMenuOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "C" => Ok(AdminMenuOption::Clear),
            "G" => Ok(AdminMenuOption::Group),
            "P" => Ok(AdminMenuOption::Partition),
            "R" => Ok(AdminMenuOption::Remove),
            "S" => Ok(AdminMenuOption::Show),
            "X" => Ok(AdminMenuOption::Exit),
            other => Err(format!("unknown admin menu option: {other}")),
        }
    }
}

/// Bucket students by the grade of their average mark.
pub fn group_by_grade(students: Vec<Student>) -> BTreeMap<Grade, Vec<Student>> {
    let mut groups: BTreeMap<Grade, Vec<Student>> = BTreeMap::new();
    for student in students {
        groups
            .entry(student.overall_grade())
            .or_default()
            .push(student);
    }
    groups
}

/// Split students into `(passing, failing)`.
pub fn partition_by_pass(students: Vec<Student>) -> (Vec<Student>, Vec<Student>) {
    students.into_iter().partition(Student::is_passing)
}

pub struct AdminController<'a, V> {
    store: &'a mut StudentStore,
    view: &'a mut V,
}

impl<'a, V: AdminView> AdminController<'a, V> {
    pub fn new(store: &'a mut StudentStore, view: &'a mut V) -> Self {
        Self { store, view }
    }

    pub fn group_students(&mut self) {
        let students = self.store.load_all_students();
        if students.is_empty() {
            self.view.display_error(NO_STUDENTS);
            return;
        }
        self.view.display_grade_groups(&group_by_grade(students));
    }

    pub fn partition_students(&mut self) {
        let students = self.store.load_all_students();
        if students.is_empty() {
            self.view.display_error(NO_STUDENTS);
            return;
        }
        let (passing, failing) = partition_by_pass(students);
        self.view.display_partitioned_students(&passing, &failing);
    }

    pub fn show_students(&mut self) {
        let students = self.store.load_all_students();
        self.view.display_all_students(&students);
    }

    /// Remove the student with `student_id`, returning whether one existed.
    pub fn remove_student(&mut self, student_id: &str) -> bool {
        let student_id = student_id.trim();
        match self.store.remove_student(student_id) {
            Ok(true) => {
                self.view
                    .display_success(&format!("Student {student_id} removed successfully!"));
                true
            }
            Ok(false) => {
                self.view
                    .display_error(&format!("Student {student_id} not found!"));
                false
            }
            Err(e) => {
                tracing::error!("failed to remove student {student_id}: {e}");
                self.view
                    .display_error(&format!("Failed to remove student {student_id}!"));
                false
            }
        }
    }

    /// Clear every record after confirmation. Always returns `true` so the
    /// menu keeps running.
    pub fn clear_database(&mut self) -> bool {
        if !self
            .view
            .confirm_action("Are you sure you want to clear all data?")
        {
            self.view.display_success("Operation cancelled");
            return true;
        }

        match self.store.clear_all() {
            Ok(()) => self.view.display_success("Database cleared successfully!"),
            Err(e) => {
                tracing::error!("failed to clear student store: {e}");
                self.view.display_error("Failed to clear database!");
            }
        }
        true
    }
}

impl<V: AdminView> Menu for AdminController<'_, V> {
    fn read_choice(&mut self) -> String {
        self.view.get_input(ADMIN_MENU_PROMPT)
    }

    fn handle_choice(&mut self, choice: &str) -> bool {
        match choice.parse::<AdminMenuOption>() {
            Ok(AdminMenuOption::Clear) => {
                self.clear_database();
            }
            Ok(AdminMenuOption::Group) => self.group_students(),
            Ok(AdminMenuOption::Partition) => self.partition_students(),
            Ok(AdminMenuOption::Remove) => {
                let id = self.view.get_input("Remove by ID");
                self.remove_student(&id);
            }
            Ok(AdminMenuOption::Show) => self.show_students(),
            Ok(AdminMenuOption::Exit) => return false,
            Err(_) => self.view.display_error(INVALID_OPTION),
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{ScriptedView, ViewEvent};
    use crate::model::Subject;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::TempDir;

    struct Fixture {
        dir: TempDir,
        store: StudentStore,
        view: ScriptedView,
    }

    impl Fixture {
        fn new() -> Self {
            let dir = TempDir::new().unwrap();
            let store = StudentStore::open(dir.path().join("students.data")).unwrap();
            Self {
                dir,
                store,
                view: ScriptedView::new(),
            }
        }

        /// Two students: one on 85 (HD, passing), one on 45 (Z, failing).
        fn with_students() -> (Self, Student, Student) {
            let mut fx = Self::new();
            let mut rng = StdRng::seed_from_u64(9);
            let mut high = Student::new(&mut rng, "Test1", "test1@university.com", "Password123");
            high.enrol_subject(Subject::new("001", 85.0).unwrap());
            let mut low = Student::new(&mut rng, "Test2", "test2@university.com", "Password123");
            low.enrol_subject(Subject::new("002", 45.0).unwrap());
            fx.store.add_student(high.clone()).unwrap();
            fx.store.add_student(low.clone()).unwrap();
            (fx, high, low)
        }

        fn controller(&mut self) -> AdminController<'_, ScriptedView> {
            AdminController::new(&mut self.store, &mut self.view)
        }

        /// Delete the backing directory so every later write fails.
        fn break_storage(&self) {
            std::fs::remove_dir_all(self.dir.path()).unwrap();
        }
    }

    #[test]
    fn group_students_by_overall_grade() {
        let (mut fx, high, low) = Fixture::with_students();
        fx.controller().group_students();

        let expected: BTreeMap<Grade, Vec<String>> = [
            (Grade::HD, vec![high.id.clone()]),
            (Grade::Z, vec![low.id.clone()]),
        ]
        .into_iter()
        .collect();
        assert_eq!(fx.view.events(), &[ViewEvent::GradeGroups(expected)]);
    }

    #[test]
    fn grouping_uses_average_not_individual_subjects() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut s = Student::new(&mut rng, "Mixed", "mixed@university.com", "Password123");
        s.enrol_subject(Subject::new("001", 90.0).unwrap());
        s.enrol_subject(Subject::new("002", 40.0).unwrap());

        let groups = group_by_grade(vec![s]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[&Grade::C].len(), 1);
    }

    #[test]
    fn partition_students_by_pass() {
        let (mut fx, high, low) = Fixture::with_students();
        fx.controller().partition_students();

        assert_eq!(
            fx.view.events(),
            &[ViewEvent::Partition {
                passing: vec![high.id],
                failing: vec![low.id],
            }]
        );
    }

    #[test]
    fn empty_store_reports_no_students() {
        let mut fx = Fixture::new();
        fx.controller().group_students();
        fx.controller().partition_students();
        assert_eq!(fx.view.errors(), vec![NO_STUDENTS, NO_STUDENTS]);
    }

    #[test]
    fn show_lists_everyone() {
        let (mut fx, high, low) = Fixture::with_students();
        fx.controller().show_students();
        assert_eq!(
            fx.view.events(),
            &[ViewEvent::AllStudents(vec![high.id, low.id])]
        );
    }

    #[test]
    fn remove_student() {
        let (mut fx, high, _) = Fixture::with_students();
        assert!(fx.controller().remove_student(&high.id));
        assert_eq!(
            fx.view.successes(),
            vec![format!("Student {} removed successfully!", high.id)]
        );
        assert_eq!(fx.store.len(), 1);
    }

    #[test]
    fn remove_student_not_found() {
        let mut fx = Fixture::new();
        assert!(!fx.controller().remove_student("999999"));
        assert_eq!(fx.view.errors(), vec!["Student 999999 not found!"]);
        assert!(fx.store.is_empty());
    }

    #[test]
    fn clear_database_confirmed() {
        let (mut fx, _, _) = Fixture::with_students();
        fx.view.push_confirmation(true);
        assert!(fx.controller().clear_database());
        assert_eq!(fx.view.successes(), vec!["Database cleared successfully!"]);
        assert!(fx.store.is_empty());
    }

    #[test]
    fn clear_database_cancelled() {
        let (mut fx, _, _) = Fixture::with_students();
        fx.view.push_confirmation(false);
        assert!(fx.controller().clear_database());
        assert_eq!(fx.view.successes(), vec!["Operation cancelled"]);
        assert_eq!(fx.store.len(), 2);
    }

    #[test]
    fn menu_reads_id_for_removal() {
        let (mut fx, _, low) = Fixture::with_students();
        fx.view.push_input("r").push_input(low.id.clone()).push_input("bogus");
        fx.controller().run();

        assert_eq!(fx.store.len(), 1);
        assert!(fx.store.get_student_by_id(&low.id).is_none());
        assert_eq!(fx.view.errors(), vec![INVALID_OPTION]);
    }

    #[test]
    fn remove_reports_store_failure() {
        let (mut fx, high, _) = Fixture::with_students();
        fx.break_storage();

        assert!(!fx.controller().remove_student(&high.id));
        assert_eq!(
            fx.view.errors(),
            vec![format!("Failed to remove student {}!", high.id)]
        );
        assert_eq!(fx.store.len(), 2);
        assert!(fx.store.get_student_by_id(&high.id).is_some());
    }

    #[test]
    fn clear_reports_store_failure() {
        let (mut fx, _, _) = Fixture::with_students();
        fx.break_storage();
        fx.view.push_confirmation(true);

        assert!(fx.controller().clear_database());
        assert_eq!(fx.view.errors(), vec!["Failed to clear database!"]);
        assert!(fx.view.successes().is_empty());
        assert_eq!(fx.store.len(), 2);
    }
}
