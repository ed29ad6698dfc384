pub mod simulator;

pub use simulator::{OutcomeRecord, PolicyOutcome, PolicyRun, ReportRecord, SimulationReport, Simulator};
