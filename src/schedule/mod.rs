pub mod types;
pub mod quota;
pub mod timetable;

pub use types::{Subject, Timetable, TimetableEntry};
pub use timetable::generate_timetable;
