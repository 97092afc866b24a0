//! Domain types and the exam-session state machine for AP exam practice.

pub mod error;
pub mod exam;
pub mod model;
pub mod time;

pub use error::Error;
pub use time::Clock;
