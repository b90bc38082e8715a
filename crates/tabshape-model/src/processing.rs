//! Export outcome reporting.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Outcome of one export request.
///
/// Created once per export, returned to the caller and broadcast to
/// observers. `error_message` is set exactly when `success` is false;
/// `warnings` carries the non-fatal coercion notes gathered during
/// projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingResult {
    pub success: bool,
    pub output_path: Option<PathBuf>,
    pub processed_rows: usize,
    pub error_message: Option<String>,
    pub warnings: Vec<String>,
}

impl ProcessingResult {
    pub fn completed(output_path: PathBuf, processed_rows: usize, warnings: Vec<String>) -> Self {
        Self {
            success: true,
            output_path: Some(output_path),
            processed_rows,
            error_message: None,
            warnings,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            output_path: None,
            processed_rows: 0,
            error_message: Some(message.into()),
            warnings: Vec::new(),
        }
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn completed_result() {
        let result =
            ProcessingResult::completed(PathBuf::from("out.csv"), 3, vec!["note".to_string()]);
        assert!(result.success);
        assert_eq!(result.processed_rows, 3);
        assert_eq!(result.output_path.as_deref(), Some(Path::new("out.csv")));
        assert!(result.error_message.is_none());
        assert!(result.has_warnings());
    }

    #[test]
    fn failed_result() {
        let result = ProcessingResult::failed("disk full");
        assert!(!result.success);
        assert_eq!(result.error_message.as_deref(), Some("disk full"));
        assert!(result.output_path.is_none());
        assert!(!result.has_warnings());
    }

    #[test]
    fn result_round_trips_through_json() {
        let result = ProcessingResult::completed(PathBuf::from("out.xlsx"), 10, vec![]);
        let json = serde_json::to_string(&result).expect("serialize result");
        let back: ProcessingResult = serde_json::from_str(&json).expect("deserialize result");
        assert_eq!(back, result);
    }
}
