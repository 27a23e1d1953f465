pub mod behavior;
pub mod clock;
pub mod grade;
pub mod potty;
