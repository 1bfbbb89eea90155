//! Scripted view for testing controllers without a terminal.

use std::collections::{BTreeMap, VecDeque};

use crate::model::{Grade, Student, Subject};
use crate::view::{AdminView, Credentials, RegistrationForm, StudentView, SubjectView, View};

/// Something the scripted view was asked to show.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    Error(String),
    Success(String),
    Info(String),
    Prompt(String),
    Subjects(Vec<Subject>),
    Enrolment {
        subject_id: String,
        enrolled: usize,
        max: usize,
    },
    /// Student ids per grade.
    GradeGroups(BTreeMap<Grade, Vec<String>>),
    /// Student ids split into passing and failing.
    Partition {
        passing: Vec<String>,
        failing: Vec<String>,
    },
    AllStudents(Vec<String>),
    Confirm(String),
}

/// A view that replays queued input and records everything it is shown.
///
/// Once its queues run dry it answers `"X"` to prompts, empty forms, and
/// `false` to confirmations, so any menu loop driven by it terminates.
#[derive(Debug, Default)]
pub struct ScriptedView {
    inputs: VecDeque<String>,
    registrations: VecDeque<RegistrationForm>,
    logins: VecDeque<Credentials>,
    confirmations: VecDeque<bool>,
    events: Vec<ViewEvent>,
}

impl ScriptedView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a view that will answer prompts with `inputs`, in order.
    pub fn with_inputs<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn push_input(&mut self, input: impl Into<String>) -> &mut Self {
        self.inputs.push_back(input.into());
        self
    }

    pub fn push_registration(&mut self, name: &str, email: &str, password: &str) -> &mut Self {
        self.registrations.push_back(RegistrationForm {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        });
        self
    }

    pub fn push_login(&mut self, email: &str, password: &str) -> &mut Self {
        self.logins.push_back(Credentials {
            email: email.into(),
            password: password.into(),
        });
        self
    }

    pub fn push_confirmation(&mut self, answer: bool) -> &mut Self {
        self.confirmations.push_back(answer);
        self
    }

    pub fn events(&self) -> &[ViewEvent] {
        &self.events
    }

    pub fn errors(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                ViewEvent::Error(m) => Some(m.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn successes(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                ViewEvent::Success(m) => Some(m.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn infos(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                ViewEvent::Info(m) => Some(m.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.errors().last().copied()
    }

    pub fn last_success(&self) -> Option<&str> {
        self.successes().last().copied()
    }
}

fn ids(students: &[Student]) -> Vec<String> {
    students.iter().map(|s| s.id.clone()).collect()
}

impl View for ScriptedView {
    fn display_error(&mut self, message: &str) {
        self.events.push(ViewEvent::Error(message.to_string()));
    }

    fn display_success(&mut self, message: &str) {
        self.events.push(ViewEvent::Success(message.to_string()));
    }

    fn display_info(&mut self, message: &str) {
        self.events.push(ViewEvent::Info(message.to_string()));
    }

    fn get_input(&mut self, prompt: &str) -> String {
        self.events.push(ViewEvent::Prompt(prompt.to_string()));
        self.inputs.pop_front().unwrap_or_else(|| "X".to_string())
    }
}

impl StudentView for ScriptedView {
    fn display_registration_form(&mut self) -> RegistrationForm {
        self.registrations.pop_front().unwrap_or_default()
    }

    fn display_login_form(&mut self) -> Credentials {
        self.logins.pop_front().unwrap_or_default()
    }
}

impl SubjectView for ScriptedView {
    fn display_subjects(&mut self, subjects: &[Subject]) {
        self.events.push(ViewEvent::Subjects(subjects.to_vec()));
    }

    fn display_enrolment(&mut self, subject: &Subject, enrolled: usize, max: usize) {
        self.events.push(ViewEvent::Enrolment {
            subject_id: subject.id().to_string(),
            enrolled,
            max,
        });
    }
}

impl AdminView for ScriptedView {
    fn display_grade_groups(&mut self, groups: &BTreeMap<Grade, Vec<Student>>) {
        let groups = groups
            .iter()
            .map(|(grade, students)| (*grade, ids(students)))
            .collect();
        self.events.push(ViewEvent::GradeGroups(groups));
    }

    fn display_partitioned_students(&mut self, passing: &[Student], failing: &[Student]) {
        self.events.push(ViewEvent::Partition {
            passing: ids(passing),
            failing: ids(failing),
        });
    }

    fn display_all_students(&mut self, students: &[Student]) {
        self.events.push(ViewEvent::AllStudents(ids(students)));
    }

    fn confirm_action(&mut self, message: &str) -> bool {
        self.events.push(ViewEvent::Confirm(message.to_string()));
        self.confirmations.pop_front().unwrap_or(false)
    }
}
