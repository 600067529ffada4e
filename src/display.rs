use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::PlannerError;
use crate::schedule::{Timetable, TimetableEntry};

/// Formats one entry as `YYYY-MM-DD: Subject - Chapter (H hrs)`
pub fn format_entry(entry: &TimetableEntry) -> String {
    format!(
        "{}: {} - {} ({} hrs)",
        entry.date.format("%Y-%m-%d"),
        entry.subject,
        entry.chapter,
        entry.hours
    )
}

/// Writes a timetable to a text file, one entry per line
pub fn write_timetable_to_file<P: AsRef<Path>>(
    timetable: &Timetable,
    filename: P,
) -> Result<(), PlannerError> {
    let mut file = File::create(filename)?;

    writeln!(file, "** Study Timetable **")?;
    for entry in timetable {
        writeln!(file, "{}", format_entry(entry))?;
    }

    Ok(())
}

/// Prints a timetable in a readable format
pub fn print_timetable(timetable: &Timetable) {
    println!("\n=== Study Timetable ===");
    println!("Total sessions scheduled: {}", timetable.len());

    if timetable.is_empty() {
        println!("Nothing to schedule: no subject has chapters left and an upcoming exam.");
        return;
    }

    let mut current_day = None;
    for entry in timetable {
        if current_day != Some(entry.date) {
            println!("\n{}", entry.date.format("%A, %Y-%m-%d"));
            current_day = Some(entry.date);
        }
        println!("  {} - {} ({} hrs)", entry.subject, entry.chapter, entry.hours);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry(date: &str, subject: &str, chapter: &str, hours: f64) -> TimetableEntry {
        TimetableEntry {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            subject: subject.to_string(),
            chapter: chapter.to_string(),
            hours,
        }
    }

    #[test]
    fn formats_entry_like_front_end() {
        assert_eq!(
            format_entry(&entry("2024-01-02", "Math", "Geometry", 2.5)),
            "2024-01-02: Math - Geometry (2.5 hrs)"
        );
        assert_eq!(
            format_entry(&entry("2024-01-02", "Math", "Geometry", 4.0)),
            "2024-01-02: Math - Geometry (4 hrs)"
        );
    }

    #[test]
    fn writes_header_and_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("timetable.txt");
        let timetable = vec![
            entry("2024-01-01", "Math", "Algebra", 4.0),
            entry("2024-01-02", "Math", "Geometry", 4.0),
        ];

        write_timetable_to_file(&timetable, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines, vec![
            "** Study Timetable **",
            "2024-01-01: Math - Algebra (4 hrs)",
            "2024-01-02: Math - Geometry (4 hrs)",
        ]);
    }
}
