use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BehaviorCategory {
    Foundation,
    Manners,
    Leash,
    Recall,
    Impulse,
    Tricks,
}

impl fmt::Display for BehaviorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BehaviorCategory::Foundation => "foundation",
            BehaviorCategory::Manners => "manners",
            BehaviorCategory::Leash => "leash",
            BehaviorCategory::Recall => "recall",
            BehaviorCategory::Impulse => "impulse",
            BehaviorCategory::Tricks => "tricks",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeExpectation {
    pub grade: String,
    /// `None` while the grade precedes the behavior's introduction
    pub phase: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BehaviorDefinition {
    pub id: String,
    pub clean_name: String,
    pub category: BehaviorCategory,
    pub intro_grade_name: String,
    /// One entry per grade, in ladder order
    pub expectations: Vec<GradeExpectation>,
}

impl BehaviorDefinition {
    pub fn expectation_for(&self, grade_name: &str) -> Option<u8> {
        self.expectations
            .iter()
            .find(|e| e.grade == grade_name)
            .and_then(|e| e.phase)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehaviorListResponse {
    pub behaviors: Vec<BehaviorDefinition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpectedPhaseResponse {
    pub behavior_id: String,
    pub grade: String,
    pub phase: Option<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehaviorNameResponse {
    pub behavior_id: String,
    pub name: String,
}
