//! Fixed-format report rendering and output writing.
//!
//! The report is rendered once into a single buffer; callers print that
//! buffer to the console and write the same bytes verbatim to the output
//! file, so both destinations always agree.
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::types::{Student, Tutor};

/// Render the grade report. Percentages, GPAs, and the CGPA are truncated to
/// integers here and only here; subjects are listed in ascending id order.
pub fn render_report(student: &Student, tutor: &Tutor) -> String {
    let mut out = String::new();

    out.push_str(&format!("\nStudent Name  {}\n", student.name));
    out.push_str(&format!("Tutor Name  {}\n", tutor.name));
    out.push_str(&format!("No of Subjects  {}\n", student.subjects.len()));

    let mut subjects = student.subjects.clone();
    subjects.sort_by_key(|sub| sub.id);

    for (i, sub) in subjects.iter().enumerate() {
        out.push_str(&format!("\nSubject {}\n", i + 1));
        out.push_str(&format!("Percentage {}\n", sub.percentage as i64));
        out.push_str(&format!("GPA {}\n", sub.gpa as i64));
    }

    out.push_str(&format!("\nThe CGPA {}!", student.cgpa as i64));
    out.push_str(&format!(
        "\n\nThe student {} has scored {} grade!",
        student.name, student.grade
    ));

    out
}

/// Write the rendered report to `path`, overwriting any prior content.
/// Failure to create or write the file is fatal for the run.
pub fn write_report(text: &str, path: &Path) -> Result<()> {
    fs::write(path, text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Grade, Mark, Subject};

    fn single_subject_student() -> Student {
        Student {
            name: "ABC".to_string(),
            subjects: vec![Subject::from_mark(
                1,
                &Mark {
                    obtained: 7.0,
                    actual: 10.0,
                },
            )],
            cgpa: 4.0,
            grade: Grade::A,
        }
    }

    #[test]
    fn renders_exact_format() {
        let student = single_subject_student();
        let tutor = Tutor {
            name: "XYZ".to_string(),
        };

        let text = render_report(&student, &tutor);
        assert_eq!(
            text,
            "\nStudent Name  ABC\nTutor Name  XYZ\nNo of Subjects  1\n\
             \nSubject 1\nPercentage 70\nGPA 3\n\
             \nThe CGPA 4!\n\nThe student ABC has scored A grade!"
        );
    }

    #[test]
    fn subjects_render_in_id_order() {
        let mut student = single_subject_student();
        student.subjects = vec![
            Subject::from_mark(2, &Mark { obtained: 8.0, actual: 10.0 }),
            Subject::from_mark(1, &Mark { obtained: 7.0, actual: 10.0 }),
        ];

        let tutor = Tutor {
            name: "XYZ".to_string(),
        };
        let text = render_report(&student, &tutor);

        let first = text.find("Percentage 70").unwrap();
        let second = text.find("Percentage 80").unwrap();
        assert!(first < second);
    }

    #[test]
    fn writes_report_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output.txt");

        write_report("report body", &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "report body");
    }
}
