pub mod config;
pub mod metrics;
pub mod process;
pub mod scheduler;
pub mod simulation;

#[cfg(feature = "cli")]
pub mod visualization;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

// Re-export key types
pub use config::Config;
pub use metrics::ScheduleSummary;
pub use process::{Process, ScheduleEntry, WorkloadGenerator};
pub use scheduler::{simulate, ScheduleError, SchedulingPolicy};
pub use simulation::{SimulationReport, Simulator};

#[cfg(feature = "cli")]
pub use visualization::ScheduleCharts;
