//! Per-subject GPA computation and CGPA aggregation.
//!
//! Each subject is computed independently, so the computation runs as an
//! explicit parallel map: one task per mark, joined and assembled by the
//! original input index, never by completion order.
use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::types::{Mark, Subject};

/// Compute all subject results from the parsed marks.
///
/// Ids are assigned from the 1-based input position. Rayon's indexed collect
/// preserves input order regardless of which task finishes first.
pub fn compute_subjects(marks: &[Mark]) -> Vec<Subject> {
    marks
        .par_iter()
        .enumerate()
        .map(|(i, mark)| Subject::from_mark(i + 1, mark))
        .collect()
}

/// Arithmetic mean of the untruncated GPA values, rounded upward to the
/// nearest whole number (ceiling, not round-to-nearest).
///
/// An empty collection is rejected rather than dividing by zero.
pub fn cumulative_gpa(subjects: &[Subject]) -> Result<f64> {
    if subjects.is_empty() {
        return Err(Error::EmptySubjects);
    }

    let total: f64 = subjects.iter().map(|sub| sub.gpa).sum();
    Ok((total / subjects.len() as f64).ceil())
}
