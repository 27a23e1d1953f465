pub mod behaviors;
pub mod grading;
pub mod potty;
