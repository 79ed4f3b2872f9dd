//! Declarative chart descriptors. Views hand these to the shared
//! `MetricsChart` component, which turns them into inline SVG.

use serde::{Deserialize, Serialize};

use crate::dashboard::{SkillRecord, SubjectRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartKind {
    /// Vertical bars, one per labeled point.
    Bar,
    /// Polyline through the points with circular markers.
    Line,
    /// Horizontal bars, labels down the left edge.
    HorizontalBar,
}

/// Value-axis policy: fit the data or pin to an explicit window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AxisRange {
    Auto,
    Fixed { min: f64, max: f64 },
}

impl AxisRange {
    /// Resolve the range against the plotted values. Auto always spans from
    /// zero so bar heights stay proportional to their values.
    pub fn resolve(self, values: &[f64]) -> (f64, f64) {
        match self {
            AxisRange::Fixed { min, max } => (min, max),
            AxisRange::Auto => {
                let max = values.iter().copied().fold(0.0_f64, f64::max);
                if max > 0.0 {
                    (0.0, max)
                } else {
                    (0.0, 1.0)
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub y_range: AxisRange,
    /// Clockwise rotation applied to category tick labels, in degrees.
    pub tick_rotation_deg: f32,
    pub points: Vec<ChartPoint>,
}

impl ChartSpec {
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|point| point.value).collect()
    }
}

/// Subject-wise marks as a vertical bar chart.
pub fn marks_chart(subjects: &[SubjectRecord]) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Bar,
        title: "Academic Performance".to_string(),
        x_label: "Subjects".to_string(),
        y_label: "Marks".to_string(),
        y_range: AxisRange::Auto,
        tick_rotation_deg: 30.0,
        points: subjects
            .iter()
            .map(|record| ChartPoint {
                label: record.subject.clone(),
                value: record.marks,
            })
            .collect(),
    }
}

/// Attendance as a marker line chart pinned to the 0–100 window.
pub fn attendance_chart(subjects: &[SubjectRecord]) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Line,
        title: "Attendance Overview".to_string(),
        x_label: "Subjects".to_string(),
        y_label: "Attendance %".to_string(),
        y_range: AxisRange::Fixed {
            min: 0.0,
            max: 100.0,
        },
        tick_rotation_deg: 30.0,
        points: subjects
            .iter()
            .map(|record| ChartPoint {
                label: record.subject.clone(),
                value: record.attendance_pct,
            })
            .collect(),
    }
}

/// Skill proficiency as a horizontal bar chart.
pub fn skills_chart(skills: &[SkillRecord]) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::HorizontalBar,
        title: "Skills Progress".to_string(),
        x_label: "Proficiency Level".to_string(),
        y_label: String::new(),
        y_range: AxisRange::Auto,
        tick_rotation_deg: 0.0,
        points: skills
            .iter()
            .map(|record| ChartPoint {
                label: record.skill.clone(),
                value: record.level_pct,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::{sample_skills, sample_subjects};

    #[test]
    fn marks_chart_follows_display_contract() {
        let spec = marks_chart(&sample_subjects());
        assert_eq!(spec.kind, ChartKind::Bar);
        assert_eq!(spec.title, "Academic Performance");
        assert_eq!(spec.x_label, "Subjects");
        assert_eq!(spec.y_label, "Marks");
        assert_eq!(spec.y_range, AxisRange::Auto);
        assert_eq!(spec.tick_rotation_deg, 30.0);
        assert_eq!(spec.points.len(), 5);
        assert_eq!(spec.points[0].label, "Maths");
        assert_eq!(spec.points[0].value, 78.0);
    }

    #[test]
    fn attendance_chart_pins_the_percent_window() {
        let spec = attendance_chart(&sample_subjects());
        assert_eq!(spec.kind, ChartKind::Line);
        assert_eq!(spec.title, "Attendance Overview");
        assert_eq!(
            spec.y_range,
            AxisRange::Fixed {
                min: 0.0,
                max: 100.0
            }
        );
        assert_eq!(spec.y_range.resolve(&spec.values()), (0.0, 100.0));
    }

    #[test]
    fn skills_chart_is_horizontal_with_proficiency_axis() {
        let spec = skills_chart(&sample_skills());
        assert_eq!(spec.kind, ChartKind::HorizontalBar);
        assert_eq!(spec.title, "Skills Progress");
        assert_eq!(spec.x_label, "Proficiency Level");
        assert_eq!(spec.points.last().unwrap().label, "Communication");
    }

    #[test]
    fn auto_range_spans_from_zero_to_peak() {
        let spec = marks_chart(&sample_subjects());
        assert_eq!(spec.y_range.resolve(&spec.values()), (0.0, 90.0));
        assert_eq!(AxisRange::Auto.resolve(&[]), (0.0, 1.0));
    }
}
