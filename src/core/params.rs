use serde::{Deserialize, Serialize};

/// Evaluation parameters suitable for config files and presets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationParams {
    pub student_name: String,
    pub tutor_name: String,
    /// Expected number of subjects; a parsed count that disagrees is fatal
    pub subjects: usize,
}

impl Default for EvaluationParams {
    fn default() -> Self {
        Self {
            student_name: "abc".to_string(),
            tutor_name: "xyz".to_string(),
            subjects: 3,
        }
    }
}
