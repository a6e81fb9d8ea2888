//! High-level, ergonomic library API: evaluate a marks string to an in-memory
//! report or straight to a file on disk. Prefer these entrypoints over the
//! low-level `core` modules when embedding GRADECALC.
use std::path::Path;

use crate::core::gpa::{compute_subjects, cumulative_gpa};
use crate::core::marks::parse_marks;
use crate::core::params::EvaluationParams;
use crate::core::report::{render_report, write_report};
use crate::error::{Error, Result};
use crate::types::{Grade, Student, Tutor};

/// Result of a full evaluation: the populated entities plus the rendered
/// report text, ready to print or persist.
#[derive(Debug, Clone)]
pub struct GradeReport {
    pub student: Student,
    pub tutor: Tutor,
    pub text: String,
}

/// Evaluate a marks string to an in-memory `GradeReport` (no disk I/O).
///
/// Parses and validates every mark token, rejects a parsed subject count that
/// disagrees with `params.subjects`, computes per-subject results in parallel,
/// aggregates the CGPA, classifies the grade, and renders the report once.
pub fn evaluate_to_buffer(marks: &str, params: &EvaluationParams) -> Result<GradeReport> {
    let parsed = parse_marks(marks)?;

    if parsed.len() != params.subjects {
        return Err(Error::SubjectCountMismatch {
            expected: params.subjects,
            parsed: parsed.len(),
        });
    }

    let subjects = compute_subjects(&parsed);
    let cgpa = cumulative_gpa(&subjects)?;
    let grade = Grade::from_cgpa(cgpa);

    let student = Student {
        name: params.student_name.clone(),
        subjects,
        cgpa,
        grade,
    };
    let tutor = Tutor {
        name: params.tutor_name.clone(),
    };

    let text = render_report(&student, &tutor);

    Ok(GradeReport {
        student,
        tutor,
        text,
    })
}

/// Evaluate a marks string and write the rendered report to `output`,
/// overwriting any prior content.
pub fn evaluate_to_path(
    marks: &str,
    params: &EvaluationParams,
    output: &Path,
) -> Result<GradeReport> {
    let report = evaluate_to_buffer(marks, params)?;
    write_report(&report.text, output)?;
    Ok(report)
}
