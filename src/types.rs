//! Shared domain types used across GRADECALC.
//! Includes `Mark`, `Subject`, `Student`, `Tutor`, and the `Grade` letter scale.
use serde::{Deserialize, Serialize};

/// A single obtained/actual mark pair as parsed from the marks string,
/// before any GPA computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mark {
    pub obtained: f64,
    pub actual: f64,
}

/// A fully computed subject result. `id` is the 1-based position of the mark
/// token in the input order; `percentage` and `gpa` are stored untruncated
/// and only cut to integers at render time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    pub id: usize,
    pub obtained: f64,
    pub actual: f64,
    pub percentage: f64,
    pub gpa: f64,
}

impl Subject {
    /// Compute a subject result from its mark pair. Pure arithmetic:
    /// `percentage = obtained * 100 / actual`, `gpa = percentage * 5 / 100`.
    /// The mark pattern admits only values in 1..=100, so `actual` is never zero.
    pub fn from_mark(id: usize, mark: &Mark) -> Self {
        let percentage = mark.obtained * 100.0 / mark.actual;
        let gpa = percentage * 5.0 / 100.0;
        Subject {
            id,
            obtained: mark.obtained,
            actual: mark.actual,
            percentage,
            gpa,
        }
    }
}

/// Letter grade on the five-step scale derived from CGPA.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Threshold classification, first match wins:
    /// `>= 4` A, `[3, 4)` B, `[2, 3)` C, `[1, 2)` D, `< 1` F.
    pub fn from_cgpa(cgpa: f64) -> Self {
        if cgpa >= 4.0 {
            Grade::A
        } else if cgpa >= 3.0 {
            Grade::B
        } else if cgpa >= 2.0 {
            Grade::C
        } else if cgpa >= 1.0 {
            Grade::D
        } else {
            Grade::F
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        };
        write!(f, "{}", s)
    }
}

/// The evaluated student: name, per-subject results in input order, the
/// ceiling-rounded CGPA, and the classified grade. Built once per run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub name: String,
    pub subjects: Vec<Subject>,
    pub cgpa: f64,
    pub grade: Grade,
}

/// The tutor named on the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tutor {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_arithmetic_is_exact() {
        let sub = Subject::from_mark(
            1,
            &Mark {
                obtained: 7.0,
                actual: 10.0,
            },
        );
        assert_eq!(sub.percentage, 70.0);
        assert_eq!(sub.gpa, 3.5);
        assert_eq!(sub.percentage as i64, 70);
        assert_eq!(sub.gpa as i64, 3);
    }

    #[test]
    fn grade_boundaries() {
        assert_eq!(Grade::from_cgpa(4.0), Grade::A);
        assert_eq!(Grade::from_cgpa(5.0), Grade::A);
        assert_eq!(Grade::from_cgpa(3.999), Grade::B);
        assert_eq!(Grade::from_cgpa(3.0), Grade::B);
        assert_eq!(Grade::from_cgpa(2.5), Grade::C);
        assert_eq!(Grade::from_cgpa(1.0), Grade::D);
        assert_eq!(Grade::from_cgpa(0.999), Grade::F);
        assert_eq!(Grade::from_cgpa(0.0), Grade::F);
    }

    #[test]
    fn grade_displays_as_letter() {
        assert_eq!(Grade::A.to_string(), "A");
        assert_eq!(Grade::F.to_string(), "F");
    }
}
