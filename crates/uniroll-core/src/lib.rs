//! uniroll-core: data model, record store and controllers.
//!
//! This crate holds everything except the terminal front end: email and
//! password validation, students and their subjects, the JSON-file record
//! store, and the menu controllers that tie them to a view.

pub mod config;
pub mod controller;
pub mod error;
pub mod mock;
pub mod model;
pub mod store;
pub mod validation;
pub mod view;

pub use error::{ModelError, StoreError, ValidationError};
pub use model::{Grade, Student, Subject, MAX_SUBJECTS};
pub use store::StudentStore;
