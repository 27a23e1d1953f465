//! # Behavior Catalog
//!
//! The curated list of trainable behaviors together with the phase each one is
//! expected to reach in every grade.
//!
//! A raw behavior id may end in a grade suffix (`quant_Heel_K`) naming the grade
//! where the behavior is introduced. Ids without a recognised suffix are treated as
//! introduced in Pre-School. From the introduction grade onwards the expected
//! phase starts at 2 and climbs by one per grade until it plateaus at 5.
//!
//! The catalog is built once on first access and is read-only afterwards.

use std::collections::HashMap;
use std::sync::LazyLock;

use tracing::debug;

use crate::grading::grades;
use crate::models::behavior::{BehaviorCategory, BehaviorDefinition, GradeExpectation};

/// Phase assigned in the grade a behavior is introduced.
pub const INTRO_PHASE: u8 = 2;
/// Mastery plateau.
pub const MAX_PHASE: u8 = 5;

/// Grade used when an id carries no recognised suffix.
pub const DEFAULT_INTRO_GRADE: &str = "Pre-School";

const GRADE_SUFFIXES: [(&str, &str); 8] = [
    ("PS", "Pre-School"),
    ("K", "Kindergarten"),
    ("E", "Elementary"),
    ("MS", "Middle School"),
    ("HS", "High School"),
    ("C", "College"),
    ("M", "Masters"),
    ("D", "Dogtorate"),
];

const BEHAVIORS: &[(&str, &str, BehaviorCategory)] = &[
    ("quant_Name_Recognition", "Name Recognition", BehaviorCategory::Foundation),
    ("quant_Sit_PS", "Sit", BehaviorCategory::Foundation),
    ("quant_Down_PS", "Down", BehaviorCategory::Foundation),
    ("quant_Touch_PS", "Hand Target", BehaviorCategory::Foundation),
    ("quant_Crate_Entry_PS", "Crate Entry", BehaviorCategory::Manners),
    ("quant_Come_PS", "Come", BehaviorCategory::Recall),
    ("quant_Leave_It_PS", "Leave It", BehaviorCategory::Impulse),
    ("quant_Heel_K", "Heel", BehaviorCategory::Leash),
    ("quant_Loose_Leash_K", "Loose Leash Walking", BehaviorCategory::Leash),
    ("quant_Stay_K", "Stay", BehaviorCategory::Impulse),
    ("quant_Wait_At_Door_K", "Wait at Door", BehaviorCategory::Manners),
    ("quant_Place_E", "Place", BehaviorCategory::Manners),
    ("quant_Drop_It_E", "Drop It", BehaviorCategory::Impulse),
    ("quant_Polite_Greeting_E", "Polite Greeting", BehaviorCategory::Manners),
    ("quant_Stand_MS", "Stand", BehaviorCategory::Foundation),
    ("quant_Recall_Distraction_MS", "Recall Under Distraction", BehaviorCategory::Recall),
    ("quant_Spin_MS", "Spin", BehaviorCategory::Tricks),
    ("quant_Finish_HS", "Finish to Heel", BehaviorCategory::Leash),
    ("quant_Distance_Down_HS", "Distance Down", BehaviorCategory::Impulse),
    ("quant_Roll_Over_HS", "Roll Over", BehaviorCategory::Tricks),
    ("quant_Emergency_Stop_C", "Emergency Stop", BehaviorCategory::Recall),
    ("quant_Off_Leash_Heel_C", "Off-Leash Heel", BehaviorCategory::Leash),
    ("quant_Back_Up_C", "Back Up", BehaviorCategory::Tricks),
    ("quant_Long_Down_Stay_M", "Long Down Stay", BehaviorCategory::Impulse),
    ("quant_Directed_Retrieve_M", "Directed Retrieve", BehaviorCategory::Tricks),
    ("quant_Send_Away_D", "Send Away", BehaviorCategory::Recall),
    ("quant_Scent_Discrimination_D", "Scent Discrimination", BehaviorCategory::Tricks),
];

static CATALOG: LazyLock<BehaviorCatalog> = LazyLock::new(BehaviorCatalog::build);

/// Read-only access to the global catalog.
pub fn catalog() -> &'static BehaviorCatalog {
    &CATALOG
}

/// Grade name for a suffix code such as `MS`.
pub fn grade_for_suffix(suffix: &str) -> Option<&'static str> {
    GRADE_SUFFIXES
        .iter()
        .find(|(code, _)| *code == suffix)
        .map(|(_, grade)| *grade)
}

/// Introduction grade encoded in a raw id's trailing `_XX` token.
pub fn intro_grade_for_id(raw_id: &str) -> &'static str {
    raw_id
        .rsplit_once('_')
        .and_then(|(_, suffix)| grade_for_suffix(suffix))
        .unwrap_or(DEFAULT_INTRO_GRADE)
}

/// Expected phase per grade for a behavior introduced at `intro_grade_name`.
pub fn generate_expectations(intro_grade_name: &str) -> Vec<GradeExpectation> {
    let mut phase: Option<u8> = None;

    grades()
        .iter()
        .map(|grade| {
            if phase.is_none() && grade.name == intro_grade_name {
                phase = Some(INTRO_PHASE);
            }
            let expected = phase.map(|p| p.min(MAX_PHASE));
            phase = phase.map(|p| p.saturating_add(1));

            GradeExpectation {
                grade: grade.name.clone(),
                phase: expected,
            }
        })
        .collect()
}

#[derive(Debug)]
pub struct BehaviorCatalog {
    entries: Vec<BehaviorDefinition>,
    index: HashMap<String, usize>,
}

impl BehaviorCatalog {
    fn build() -> Self {
        let entries: Vec<BehaviorDefinition> = BEHAVIORS
            .iter()
            .map(|(id, clean_name, category)| {
                let intro = intro_grade_for_id(id);
                BehaviorDefinition {
                    id: (*id).to_string(),
                    clean_name: (*clean_name).to_string(),
                    category: *category,
                    intro_grade_name: intro.to_string(),
                    expectations: generate_expectations(intro),
                }
            })
            .collect();

        let index = entries
            .iter()
            .enumerate()
            .map(|(i, def)| (def.id.clone(), i))
            .collect();

        debug!("Built behavior catalog with {} entries", entries.len());

        Self { entries, index }
    }

    pub fn get(&self, id: &str) -> Option<&BehaviorDefinition> {
        self.index.get(id).map(|&i| &self.entries[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &BehaviorDefinition> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn by_category(
        &self,
        category: BehaviorCategory,
    ) -> impl Iterator<Item = &BehaviorDefinition> {
        self.entries.iter().filter(move |def| def.category == category)
    }

    /// Behaviors whose training begins in `grade_name`.
    pub fn introduced_at<'a>(
        &'a self,
        grade_name: &'a str,
    ) -> impl Iterator<Item = &'a BehaviorDefinition> {
        self.entries
            .iter()
            .filter(move |def| def.intro_grade_name == grade_name)
    }
}
