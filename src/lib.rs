#![doc = r#"
GRADECALC — a GPA/CGPA calculator and grade-report generator.

This crate turns a string of `<obtained>/<actual>` semester marks into per-subject
percentages and GPAs on a 0-5 scale, a ceiling-rounded cumulative CGPA, and a letter
grade, rendered as a fixed-format text report. It powers the GRADECALC CLI and can be
embedded in your own Rust applications.

Quick start: evaluate marks to a report file
--------------------------------------------
```rust,no_run
use std::path::Path;
use gradecalc::{EvaluationParams, evaluate_to_path};

fn main() -> gradecalc::Result<()> {
    let params = EvaluationParams {
        student_name: "Ada".to_string(),
        tutor_name: "Grace".to_string(),
        subjects: 2,
    };

    let report = evaluate_to_path("90/100 75/100", &params, Path::new("output.txt"))?;
    print!("{}", report.text);
    Ok(())
}
```

Evaluate in-memory to `GradeReport`
-----------------------------------
```rust
use gradecalc::{EvaluationParams, Grade, evaluate_to_buffer};

fn main() -> gradecalc::Result<()> {
    let params = EvaluationParams {
        student_name: "Ada".to_string(),
        tutor_name: "Grace".to_string(),
        subjects: 3,
    };

    let report = evaluate_to_buffer("7/10 8/10 8/10", &params)?;
    assert_eq!(report.student.cgpa, 4.0);
    assert_eq!(report.student.grade, Grade::A);
    Ok(())
}
```

Error handling
--------------
All public functions return `gradecalc::Result<T>`; match on `gradecalc::Error` to
handle specific cases, e.g. a malformed mark token or a subject-count mismatch.

```rust
use gradecalc::{Error, EvaluationParams, evaluate_to_buffer};

fn main() {
    match evaluate_to_buffer("abc/10", &EvaluationParams::default()) {
        Ok(_) => {}
        Err(Error::MarkFormat { token, position }) => {
            eprintln!("bad mark token {token:?} at position {position}")
        }
        Err(other) => eprintln!("Other error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`types`] — domain types (`Subject`, `Student`, `Tutor`, `Grade`).
- [`core`] — mark parsing, GPA/CGPA computation, report rendering.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod types;

// Curated public API surface
// Types
pub use core::params::EvaluationParams;
pub use error::{Error, Result};
pub use types::{Grade, Mark, Student, Subject, Tutor};

// High-level API re-exports
pub use api::{GradeReport, evaluate_to_buffer, evaluate_to_path};
