//! Core evaluation building blocks: mark parsing, per-subject GPA computation,
//! CGPA aggregation, and report rendering. These are internal primitives
//! consumed by the high-level `api` module.
pub mod gpa;
pub mod marks;
pub mod params;
pub mod report;
