//! Derived scalar summaries shown in metric highlights and the footer.

use crate::core::{format, stats};
use crate::dashboard::SubjectRecord;

/// Session summary recomputed on every render pass from the subject records.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DashboardSummary {
    pub avg_marks: f64,
    pub avg_attendance: f64,
}

impl DashboardSummary {
    pub fn from_subjects(subjects: &[SubjectRecord]) -> Self {
        let marks: Vec<f64> = subjects.iter().map(|record| record.marks).collect();
        let attendance: Vec<f64> = subjects
            .iter()
            .map(|record| record.attendance_pct)
            .collect();

        Self {
            avg_marks: stats::round2(stats::mean(&marks)),
            avg_attendance: stats::round2(stats::mean(&attendance)),
        }
    }

    /// "77.6" style display, trailing zeros trimmed.
    pub fn marks_display(&self) -> String {
        format::format_marks(self.avg_marks)
    }

    /// "84.00%" style display.
    pub fn attendance_display(&self) -> String {
        format::format_percent(self.avg_attendance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::sample_subjects;

    #[test]
    fn sample_summary_matches_known_averages() {
        let summary = DashboardSummary::from_subjects(&sample_subjects());
        assert!((summary.avg_marks - 77.6).abs() < 1e-9);
        assert!((summary.avg_attendance - 84.0).abs() < 1e-9);
        assert_eq!(summary.marks_display(), "77.6");
        assert_eq!(summary.attendance_display(), "84.00%");
    }

    #[test]
    fn empty_roster_falls_back_to_zero_sentinel() {
        let summary = DashboardSummary::from_subjects(&[]);
        assert_eq!(summary.avg_marks, 0.0);
        assert_eq!(summary.avg_attendance, 0.0);
        assert_eq!(summary.marks_display(), "0");
        assert_eq!(summary.attendance_display(), "0.00%");
    }
}
