//! The metrics presenter: fixed sample datasets, derived summaries, and the
//! chart descriptors each view renders from.

mod data;
pub use data::{
    sample_goals, sample_skills, sample_subjects, GoalBoard, GoalEntry, GoalStatus, Severity,
    SkillRecord, SubjectRecord,
};

mod summary;
pub use summary::DashboardSummary;

pub mod charts;
pub use charts::{attendance_chart, marks_chart, skills_chart, AxisRange, ChartKind, ChartSpec};
