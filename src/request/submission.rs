use serde::{Deserialize, Serialize};
use crate::error::PlannerError;
use crate::schedule::Subject;

/// Timetable request as sent by the planner front end
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableRequest {
    pub subjects: Vec<Subject>,
    pub study_hours_per_day: i64,
}

/// Validates a timetable request before it reaches the generator
pub fn validate_request(req: &TimetableRequest) -> Result<(), PlannerError> {
    if req.study_hours_per_day < 0 {
        return Err(PlannerError::Validation(format!(
            "studyHoursPerDay must not be negative (got {})",
            req.study_hours_per_day
        )));
    }

    Ok(())
}
