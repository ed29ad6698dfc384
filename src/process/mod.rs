pub mod entry;
pub mod generator;
pub mod process;

pub use entry::ScheduleEntry;
pub use generator::WorkloadGenerator;
pub use process::{workload_from_json, Process, ProcessId, Time};
