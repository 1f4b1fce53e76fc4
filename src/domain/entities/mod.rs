pub mod alert;
pub mod location;
pub mod report;
pub mod sample;
