use chrono::NaiveDate;
use serde::{Serialize, Deserialize};

/// A subject with its unlearned chapters and exam date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub name: String,
    pub chapters: Vec<String>,
    pub exam_date: NaiveDate,
}

impl Subject {
    /// A subject is schedulable when it has chapters left and its exam is still ahead
    pub fn is_eligible(&self, today: NaiveDate) -> bool {
        !self.chapters.is_empty() && self.exam_date > today
    }
}

/// One chapter waiting to be placed on a day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterWorkItem {
    pub subject: String,
    pub chapter: String,
    pub days_left: i64,
}

/// A single study assignment in the generated timetable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimetableEntry {
    pub date: NaiveDate,
    pub subject: String,
    pub chapter: String,
    pub hours: f64,
}

/// Entries in chronological order, and by priority within a day
pub type Timetable = Vec<TimetableEntry>;
