pub mod summary;

pub use summary::{ProcessStats, ScheduleSummary};
