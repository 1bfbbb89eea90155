//! Terminal implementation of the view traits.

use std::collections::BTreeMap;
use std::fmt::Display;
use std::io::{BufRead, ErrorKind, Write};

use comfy_table::{Cell, Table};

use uniroll_core::model::{Grade, Student, Subject};
use uniroll_core::view::{
    AdminView, Credentials, RegistrationForm, StudentView, SubjectView, View,
};

/// Shown when a line of input is not valid UTF-8.
pub const INVALID_INPUT: &str = "Input must be valid UTF-8 text - try again";

/// Line-oriented console view over any reader/writer pair.
///
/// End of input is answered with `"X"`, which backs out of every menu.
/// Lines that are not valid UTF-8 are rejected and the prompt repeats.
pub struct ConsoleView<I, O> {
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> ConsoleView<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    fn line(&mut self, text: impl Display) {
        // Console output is best effort; a closed stdout must not abort the session.
        let _ = writeln!(self.output, "{text}");
    }
}

/// Table of students with their aggregate results.
pub fn students_table(students: &[Student]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["ID", "Name", "Email", "Subjects", "Average", "Grade"]);
    for s in students {
        table.add_row(vec![
            Cell::new(&s.id),
            Cell::new(&s.name),
            Cell::new(&s.email),
            Cell::new(s.subjects().len()),
            Cell::new(format!("{:.2}", s.average_mark())),
            Cell::new(s.overall_grade()),
        ]);
    }
    table
}

fn subjects_table(subjects: &[Subject]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Subject", "Mark", "Grade"]);
    for subject in subjects {
        table.add_row(vec![
            Cell::new(format!("Subject-{}", subject.id())),
            Cell::new(format!("{:.0}", subject.mark())),
            Cell::new(subject.grade()),
        ]);
    }
    table
}

impl<I: BufRead, O: Write> View for ConsoleView<I, O> {
    fn display_error(&mut self, message: &str) {
        self.line(format_args!("ERROR: {message}"));
    }

    fn display_success(&mut self, message: &str) {
        self.line(message);
    }

    fn display_info(&mut self, message: &str) {
        self.line(message);
    }

    fn get_input(&mut self, prompt: &str) -> String {
        loop {
            let _ = write!(self.output, "{prompt}: ");
            let _ = self.output.flush();

            let mut buf = String::new();
            match self.input.read_line(&mut buf) {
                Ok(0) => {
                    self.line("");
                    return "X".to_string();
                }
                Ok(_) => return buf.trim_end_matches(['\r', '\n']).to_string(),
                // The offending line has been consumed, so asking again is safe.
                Err(e) if e.kind() == ErrorKind::InvalidData => {
                    self.line("");
                    self.display_error(INVALID_INPUT);
                }
                Err(e) => {
                    tracing::warn!("failed to read input: {e}");
                    self.line("");
                    return "X".to_string();
                }
            }
        }
    }
}

impl<I: BufRead, O: Write> StudentView for ConsoleView<I, O> {
    fn display_registration_form(&mut self) -> RegistrationForm {
        self.line("Student Sign Up");
        RegistrationForm {
            name: self.get_input("Name"),
            email: self.get_input("Email"),
            password: self.get_input("Password"),
        }
    }

    fn display_login_form(&mut self) -> Credentials {
        self.line("Student Sign In");
        Credentials {
            email: self.get_input("Email"),
            password: self.get_input("Password"),
        }
    }
}

impl<I: BufRead, O: Write> SubjectView for ConsoleView<I, O> {
    fn display_subjects(&mut self, subjects: &[Subject]) {
        self.line(format_args!("Showing {} subjects", subjects.len()));
        if !subjects.is_empty() {
            self.line(subjects_table(subjects));
        }
    }

    fn display_enrolment(&mut self, subject: &Subject, enrolled: usize, max: usize) {
        self.line(format_args!("Enrolling in Subject-{}", subject.id()));
        self.line(format_args!(
            "You are now enrolled in {enrolled} out of {max} subjects"
        ));
    }
}

impl<I: BufRead, O: Write> AdminView for ConsoleView<I, O> {
    fn display_grade_groups(&mut self, groups: &BTreeMap<Grade, Vec<Student>>) {
        self.line("Grade Grouping");
        let mut table = Table::new();
        table.set_header(vec!["Grade", "ID", "Name", "Average"]);
        for (grade, students) in groups {
            for s in students {
                table.add_row(vec![
                    Cell::new(grade),
                    Cell::new(&s.id),
                    Cell::new(&s.name),
                    Cell::new(format!("{:.2}", s.average_mark())),
                ]);
            }
        }
        self.line(table);
    }

    fn display_partitioned_students(&mut self, passing: &[Student], failing: &[Student]) {
        self.line("PASS/FAIL Partition");
        let mut table = Table::new();
        table.set_header(vec!["Status", "ID", "Name", "Average"]);
        let rows = passing
            .iter()
            .map(|s| ("PASS", s))
            .chain(failing.iter().map(|s| ("FAIL", s)));
        for (status, s) in rows {
            table.add_row(vec![
                Cell::new(status),
                Cell::new(&s.id),
                Cell::new(&s.name),
                Cell::new(format!("{:.2}", s.average_mark())),
            ]);
        }
        self.line(table);
        self.line(format_args!(
            "{} passing, {} failing",
            passing.len(),
            failing.len()
        ));
    }

    fn display_all_students(&mut self, students: &[Student]) {
        self.line("Student List");
        if students.is_empty() {
            self.line("< Nothing to Display >");
        } else {
            self.line(students_table(students));
        }
    }

    fn confirm_action(&mut self, message: &str) -> bool {
        let answer = self.get_input(&format!("{message} (Y)ES/(N)O"));
        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
    }
}
