pub mod submission;

pub use submission::{TimetableRequest, validate_request};
