use serde::{Deserialize, Serialize};

/// One tier of the training-progress ladder.
///
/// `color`, `bg` and `bar` are presentation hints passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grade {
    pub name: String,
    pub min_score: f64,
    pub color: String,
    pub bg: String,
    pub bar: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeProgress {
    pub score: f64,
    pub current: Grade,
    pub next: Option<Grade>,
    /// Points still needed to reach `next`, zero at the top of the ladder
    pub points_to_next: f64,
    /// Position inside the current grade band, 0..=100
    pub percent: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeListResponse {
    pub grades: Vec<Grade>,
}
