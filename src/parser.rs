use std::fs;
use std::path::Path;

use crate::error::PlannerError;
use crate::request::{validate_request, TimetableRequest};

/// Loads a timetable request from a JSON file
///
/// The file uses the same shape as the `/generate-timetable` request body.
/// The request is validated before it is returned.
pub fn load_request<P: AsRef<Path>>(path: P) -> Result<TimetableRequest, PlannerError> {
    let contents = fs::read_to_string(path)?;
    parse_request(&contents)
}

/// Parses and validates a timetable request from a JSON string
pub fn parse_request(contents: &str) -> Result<TimetableRequest, PlannerError> {
    let request: TimetableRequest = serde_json::from_str(contents)?;
    validate_request(&request)?;
    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_request_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"subjects": [{{"name": "Math", "chapters": ["Algebra"], "examDate": "2024-05-01"}}], "studyHoursPerDay": 3}}"#
        )
        .unwrap();

        let req = load_request(file.path()).unwrap();
        assert_eq!(req.subjects[0].name, "Math");
        assert_eq!(req.study_hours_per_day, 3);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_request(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, PlannerError::Io(_)));
    }

    #[test]
    fn bad_json_is_json_error() {
        let err = parse_request("{ not json").unwrap_err();
        assert!(matches!(err, PlannerError::Json(_)));
    }

    #[test]
    fn negative_hours_fail_validation() {
        let err = parse_request(r#"{"subjects": [], "studyHoursPerDay": -1}"#).unwrap_err();
        assert!(matches!(err, PlannerError::Validation(_)));
    }
}
