mod filter;
mod service;

pub use filter::DifficultyFilter;
pub use service::PracticeService;
