use std::sync::LazyLock;

use crate::catalog::{catalog, grade_for_suffix};
use crate::models::grade::{Grade, GradeProgress};

const LADDER: [(&str, f64, &str); 8] = [
    ("Pre-School", 0.0, "slate"),
    ("Kindergarten", 147.0, "sky"),
    ("Elementary", 225.0, "teal"),
    ("Middle School", 300.0, "lime"),
    ("High School", 375.0, "amber"),
    ("College", 450.0, "orange"),
    ("Masters", 525.0, "rose"),
    ("Dogtorate", 602.0, "violet"),
];

static GRADES: LazyLock<Vec<Grade>> = LazyLock::new(|| {
    LADDER
        .iter()
        .map(|(name, min_score, hue)| Grade {
            name: (*name).to_string(),
            min_score: *min_score,
            color: format!("text-{}-700", hue),
            bg: format!("bg-{}-100", hue),
            bar: format!("bg-{}-500", hue),
        })
        .collect()
});

/// The grade ladder, ascending by `min_score`.
pub fn grades() -> &'static [Grade] {
    &GRADES
}

pub fn grade_by_name(name: &str) -> Option<&'static Grade> {
    grades().iter().find(|g| g.name == name)
}

/// Highest grade whose threshold `score` has reached, `None` below the first one.
pub fn reached_grade(score: f64) -> Option<&'static Grade> {
    grades().iter().take_while(|g| g.min_score <= score).last()
}

/// Grade for a cumulative score.
///
/// Scores below the lowest threshold (including NaN) still map to the lowest grade;
/// use [`reached_grade`] to tell that case apart.
pub fn grade_for_score(score: f64) -> &'static Grade {
    reached_grade(score).unwrap_or(&grades()[0])
}

pub fn grade_progress(score: f64) -> GradeProgress {
    let ladder = grades();
    let current = grade_for_score(score);
    let position = ladder
        .iter()
        .position(|g| g.name == current.name)
        .unwrap_or(0);
    let next = ladder.get(position + 1);

    let (points_to_next, percent) = match next {
        Some(next) => {
            let band = next.min_score - current.min_score;
            let into_band = (score - current.min_score).max(0.0);
            let percent = if band > 0.0 {
                (into_band / band * 100.0).clamp(0.0, 100.0)
            } else {
                0.0
            };
            ((next.min_score - score).max(0.0), percent)
        }
        None => (0.0, 100.0),
    };

    GradeProgress {
        score,
        current: current.clone(),
        next: next.cloned(),
        points_to_next,
        percent,
    }
}

/// Phase a behavior is expected to have reached by `grade_name`.
///
/// `None` for unknown behaviors, unknown grades, and grades before the behavior
/// is introduced.
pub fn expected_phase(behavior_id: &str, grade_name: &str) -> Option<u8> {
    catalog()
        .get(behavior_id)
        .and_then(|def| def.expectation_for(grade_name))
}

/// Display name for a behavior id.
///
/// Catalog entries use their curated name. Anything else is cleaned up as far as
/// possible: the `quant_` prefix and a trailing grade suffix are dropped and the
/// remaining underscores become spaces.
pub fn normalize_behavior_name(raw_id: &str) -> String {
    if let Some(def) = catalog().get(raw_id) {
        return def.clean_name.clone();
    }

    let stem = raw_id.strip_prefix("quant_").unwrap_or(raw_id);
    let is_grade_code = |suffix: &str| suffix.len() <= 4 && grade_for_suffix(suffix).is_some();
    let stem = match stem.rsplit_once('_') {
        Some((head, suffix)) if is_grade_code(suffix) => head,
        _ => stem,
    };

    stem.replace('_', " ")
}
