use super::{fifo, mlfq_with_mode, round_robin, sjf, stcf, MlfqMode, ScheduleError};
use crate::config::SchedulerConfig;
use crate::process::{Process, ScheduleEntry, Time};

/// A scheduling policy together with its parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchedulingPolicy {
    /// First-In-First-Out: input order, run to completion
    Fifo,
    /// Shortest Job First: burst-time order, run to completion
    Sjf,
    /// Shortest Time-to-Completion First: greedy shortest remaining, run to completion
    Stcf,
    /// Round Robin over a single queue
    RoundRobin { quantum: Time },
    /// Multi-Level Feedback Queue with one quantum per level
    Mlfq { quanta: Vec<Time>, mode: MlfqMode },
}

impl SchedulingPolicy {
    /// Resolve a policy name, taking quantum parameters from `config`
    pub fn from_name(name: &str, config: &SchedulerConfig) -> Result<Self, String> {
        match name.to_lowercase().as_str() {
            "fifo" | "fcfs" => Ok(SchedulingPolicy::Fifo),
            "sjf" => Ok(SchedulingPolicy::Sjf),
            "stcf" => Ok(SchedulingPolicy::Stcf),
            "rr" | "round_robin" => Ok(SchedulingPolicy::RoundRobin {
                quantum: config.quantum,
            }),
            "mlfq" => Ok(SchedulingPolicy::Mlfq {
                quanta: config.mlfq_quanta.clone(),
                mode: config.mlfq_mode,
            }),
            _ => Err(format!("Unknown scheduling policy: {}", name)),
        }
    }

    /// Short label used in tables and charts
    pub fn name(&self) -> &'static str {
        match self {
            SchedulingPolicy::Fifo => "FIFO",
            SchedulingPolicy::Sjf => "SJF",
            SchedulingPolicy::Stcf => "STCF",
            SchedulingPolicy::RoundRobin { .. } => "RR",
            SchedulingPolicy::Mlfq { .. } => "MLFQ",
        }
    }

    /// Whether a process may be split over several entries
    pub fn is_preemptive(&self) -> bool {
        matches!(
            self,
            SchedulingPolicy::RoundRobin { .. } | SchedulingPolicy::Mlfq { .. }
        )
    }

    pub fn simulate(&self, processes: &[Process]) -> Result<Vec<ScheduleEntry>, ScheduleError> {
        simulate(self, processes)
    }
}

impl std::fmt::Display for SchedulingPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchedulingPolicy::RoundRobin { quantum } => write!(f, "RR (q={})", quantum),
            SchedulingPolicy::Mlfq { quanta, mode } => {
                write!(f, "MLFQ {:?} ({})", quanta, mode)
            }
            other => write!(f, "{}", other.name()),
        }
    }
}

/// Run one policy over a workload.
///
/// The workload is only borrowed; preemptive policies work on a private copy,
/// so the same slice can be handed to any number of policies.
pub fn simulate(
    policy: &SchedulingPolicy,
    processes: &[Process],
) -> Result<Vec<ScheduleEntry>, ScheduleError> {
    match policy {
        SchedulingPolicy::Fifo => fifo(processes),
        SchedulingPolicy::Sjf => sjf(processes),
        SchedulingPolicy::Stcf => stcf(processes),
        SchedulingPolicy::RoundRobin { quantum } => round_robin(processes, *quantum),
        SchedulingPolicy::Mlfq { quanta, mode } => mlfq_with_mode(processes, quanta, *mode),
    }
}
