pub mod store;
pub mod validation;

pub use store::{ListingBoard, SubmitOutcome};
