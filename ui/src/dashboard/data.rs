//! Fixed sample datasets and the record types behind each dashboard view.
//!
//! Everything here is session data: records are rebuilt fresh on each render
//! pass and nothing is persisted. The goal board's `with_goal` is a pure
//! append so the ephemeral "add goal" action never mutates shared state.

use serde::{Deserialize, Serialize};

/// Per-subject pairing of marks and attendance. Keeping both figures on one
/// record makes the equal-length invariant between the marks and attendance
/// series hold by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectRecord {
    pub subject: String,
    pub marks: f64,
    pub attendance_pct: f64,
}

impl SubjectRecord {
    /// Zip parallel slices into records. Length mismatch is a programmer
    /// error in the fixture data, so it fails loudly.
    pub fn from_columns(subjects: &[&str], marks: &[f64], attendance: &[f64]) -> Vec<Self> {
        assert!(
            subjects.len() == marks.len() && marks.len() == attendance.len(),
            "subject/marks/attendance columns must be the same length \
             ({} / {} / {})",
            subjects.len(),
            marks.len(),
            attendance.len(),
        );

        subjects
            .iter()
            .zip(marks)
            .zip(attendance)
            .map(|((subject, marks), attendance)| Self {
                subject: (*subject).to_string(),
                marks: *marks,
                attendance_pct: *attendance,
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRecord {
    pub skill: String,
    pub level_pct: f64,
}

impl SkillRecord {
    pub fn from_columns(skills: &[&str], levels: &[f64]) -> Vec<Self> {
        assert!(
            skills.len() == levels.len(),
            "skill/level columns must be the same length ({} / {})",
            skills.len(),
            levels.len(),
        );

        skills
            .iter()
            .zip(levels)
            .map(|(skill, level)| Self {
                skill: (*skill).to_string(),
                level_pct: *level,
            })
            .collect()
    }
}

/// Completion state of a personal goal. Closed set: anything else fails
/// parsing instead of falling through to a default branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoalStatus {
    Completed,
    InProgress,
    NotStarted,
}

impl GoalStatus {
    pub fn label(self) -> &'static str {
        match self {
            GoalStatus::Completed => "Completed",
            GoalStatus::InProgress => "In Progress",
            GoalStatus::NotStarted => "Not Started",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "Completed" => Some(GoalStatus::Completed),
            "In Progress" => Some(GoalStatus::InProgress),
            "Not Started" => Some(GoalStatus::NotStarted),
            _ => None,
        }
    }

    /// Display urgency for a status. Total over the enum.
    pub fn severity(self) -> Severity {
        match self {
            GoalStatus::Completed => Severity::Success,
            GoalStatus::InProgress => Severity::Warning,
            GoalStatus::NotStarted => Severity::Error,
        }
    }
}

/// Styling class for a goal row, traffic-light style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn css_class(self) -> &'static str {
        match self {
            Severity::Success => "goal-card--success",
            Severity::Warning => "goal-card--warning",
            Severity::Error => "goal-card--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalEntry {
    pub description: String,
    pub status: GoalStatus,
}

/// Ordered goal collection with unique descriptions. Insertion order is
/// display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalBoard {
    entries: Vec<GoalEntry>,
}

impl GoalBoard {
    pub fn new(entries: Vec<GoalEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[GoalEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, description: &str) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.description == description)
    }

    /// Pure append: returns a new board with the goal added at the end with
    /// the default `NotStarted` status. The receiver is untouched; keeping
    /// (or dropping) the returned board is the caller's business.
    #[must_use]
    pub fn with_goal(&self, description: &str) -> Self {
        let mut entries = self.entries.clone();
        entries.push(GoalEntry {
            description: description.to_string(),
            status: GoalStatus::NotStarted,
        });
        Self { entries }
    }
}

/// The five sample subjects with their marks and attendance percentages.
pub fn sample_subjects() -> Vec<SubjectRecord> {
    SubjectRecord::from_columns(
        &["Maths", "Physics", "Chemistry", "Programming", "English"],
        &[78.0, 65.0, 70.0, 85.0, 90.0],
        &[85.0, 75.0, 80.0, 92.0, 88.0],
    )
}

/// The five sample skills with proficiency levels.
pub fn sample_skills() -> Vec<SkillRecord> {
    SkillRecord::from_columns(
        &["Python", "Java", "Data Structures", "ML", "Communication"],
        &[70.0, 60.0, 65.0, 50.0, 80.0],
    )
}

/// The starting goal board for a session.
pub fn sample_goals() -> GoalBoard {
    GoalBoard::new(vec![
        GoalEntry {
            description: "Learn Python".to_string(),
            status: GoalStatus::InProgress,
        },
        GoalEntry {
            description: "Build ML Project".to_string(),
            status: GoalStatus::NotStarted,
        },
        GoalEntry {
            description: "Improve Communication".to_string(),
            status: GoalStatus::Completed,
        },
        GoalEntry {
            description: "Internship Preparation".to_string(),
            status: GoalStatus::InProgress,
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_columns_stay_parallel() {
        let subjects = sample_subjects();
        assert_eq!(subjects.len(), 5);
        let skills = sample_skills();
        assert_eq!(skills.len(), 5);
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn mismatched_columns_fail_loudly() {
        let _ = SubjectRecord::from_columns(&["Maths"], &[78.0, 65.0], &[85.0]);
    }

    #[test]
    fn severity_mapping_is_total_and_deterministic() {
        assert_eq!(GoalStatus::Completed.severity(), Severity::Success);
        assert_eq!(GoalStatus::InProgress.severity(), Severity::Warning);
        assert_eq!(GoalStatus::NotStarted.severity(), Severity::Error);
    }

    #[test]
    fn unknown_status_is_rejected_not_defaulted() {
        assert_eq!(GoalStatus::parse("Abandoned"), None);
        assert_eq!(GoalStatus::parse("In Progress"), Some(GoalStatus::InProgress));
    }

    #[test]
    fn sample_goals_render_in_insertion_order() {
        let board = sample_goals();
        let severities: Vec<Severity> = board
            .entries()
            .iter()
            .map(|entry| entry.status.severity())
            .collect();
        assert_eq!(
            severities,
            vec![
                Severity::Warning,
                Severity::Error,
                Severity::Success,
                Severity::Warning,
            ]
        );
    }

    #[test]
    fn with_goal_is_pure_and_appends_with_default_status() {
        let board = sample_goals();
        let before = board.clone();

        let updated = board.with_goal("Pass Exams");

        assert_eq!(board, before, "the input board must not be mutated");
        assert_eq!(updated.len(), 5);
        let last = updated.entries().last().unwrap();
        assert_eq!(last.description, "Pass Exams");
        assert_eq!(last.status, GoalStatus::NotStarted);
        assert_eq!(&updated.entries()[..4], board.entries());
    }
}
