use std::path::Path;
use csv::WriterBuilder;

use crate::error::PlannerError;
use crate::schedule::Timetable;

/// Exports a timetable to CSV with columns `date,subject,chapter,hours`
///
/// An existing file at `csv_path` is overwritten.
pub fn export_timetable_to_csv<P: AsRef<Path>>(
    timetable: &Timetable,
    csv_path: P,
) -> Result<(), PlannerError> {
    let mut wtr = WriterBuilder::new()
        .has_headers(true)
        .from_path(csv_path)?;

    // TimetableEntry serializes in column order
    for entry in timetable {
        wtr.serialize(entry)?;
    }

    wtr.flush()?;
    Ok(())
}
