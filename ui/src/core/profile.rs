//! Student profile types captured from the sidebar inputs.

use serde::{Deserialize, Serialize};

pub const AGE_MIN: u8 = 18;
pub const AGE_MAX: u8 = 30;

/// Identity snapshot captured from the profile sidebar. Read-only for the
/// rest of a render pass once captured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub age: u8,
    pub course: Course,
    pub year: Year,
}

impl Profile {
    /// The age widget bounds input to [18, 30]; clamping here keeps the
    /// invariant even for programmatic construction.
    pub fn new(name: impl Into<String>, age: u8, course: Course, year: Year) -> Self {
        Self {
            name: name.into(),
            age: age.clamp(AGE_MIN, AGE_MAX),
            course,
            year,
        }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::new("John Doe", 20, Course::Cse, Year::First)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Course {
    Cse,
    Ece,
    Eee,
    It,
    Mech,
}

impl Course {
    pub const ALL: [Course; 5] = [
        Course::Cse,
        Course::Ece,
        Course::Eee,
        Course::It,
        Course::Mech,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Course::Cse => "CSE",
            Course::Ece => "ECE",
            Course::Eee => "EEE",
            Course::It => "IT",
            Course::Mech => "MECH",
        }
    }

    /// Parse a widget option string back into the closed enum.
    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|course| course.label() == label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Year {
    First,
    Second,
    Third,
    Fourth,
}

impl Year {
    pub const ALL: [Year; 4] = [Year::First, Year::Second, Year::Third, Year::Fourth];

    pub fn label(self) -> &'static str {
        match self {
            Year::First => "1st",
            Year::Second => "2nd",
            Year::Third => "3rd",
            Year::Fourth => "4th",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|year| year.label() == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_is_clamped_to_widget_bounds() {
        assert_eq!(Profile::new("A", 17, Course::It, Year::Second).age, 18);
        assert_eq!(Profile::new("A", 45, Course::It, Year::Second).age, 30);
        assert_eq!(Profile::new("A", 22, Course::It, Year::Second).age, 22);
    }

    #[test]
    fn course_labels_round_trip() {
        for course in Course::ALL {
            assert_eq!(Course::parse(course.label()), Some(course));
        }
        assert_eq!(Course::parse("BBA"), None);
    }

    #[test]
    fn year_labels_round_trip() {
        for year in Year::ALL {
            assert_eq!(Year::parse(year.label()), Some(year));
        }
        assert_eq!(Year::parse("5th"), None);
    }

    #[test]
    fn default_profile_matches_sidebar_defaults() {
        let profile = Profile::default();
        assert_eq!(profile.name, "John Doe");
        assert_eq!(profile.age, 20);
        assert_eq!(profile.course, Course::Cse);
        assert_eq!(profile.year, Year::First);
    }
}
