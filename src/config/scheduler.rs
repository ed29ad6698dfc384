use crate::process::Time;
use crate::scheduler::{MlfqMode, SchedulingPolicy};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Policies to run, in order: "fifo", "sjf", "stcf", "rr", "mlfq"
    #[serde(default = "default_policies")]
    pub policies: Vec<String>,

    /// Round-robin time quantum
    #[serde(default = "default_quantum")]
    pub quantum: Time,

    /// MLFQ quantum per level, highest priority first
    #[serde(default = "default_mlfq_quanta")]
    pub mlfq_quanta: Vec<Time>,

    /// How MLFQ picks the level for each slice
    #[serde(default)]
    pub mlfq_mode: MlfqMode,
}

fn default_policies() -> Vec<String> {
    ["fifo", "sjf", "stcf", "rr", "mlfq"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_quantum() -> Time {
    2
}

fn default_mlfq_quanta() -> Vec<Time> {
    vec![2, 4, 8]
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            policies: default_policies(),
            quantum: default_quantum(),
            mlfq_quanta: default_mlfq_quanta(),
            mlfq_mode: MlfqMode::default(),
        }
    }
}

impl SchedulerConfig {
    /// Resolve the configured policy names
    ///
    /// Quantum values are not checked here; the engine reports them per policy.
    pub fn policies(&self) -> Result<Vec<SchedulingPolicy>, String> {
        if self.policies.is_empty() {
            return Err("no scheduling policies configured".to_string());
        }
        self.policies
            .iter()
            .map(|name| SchedulingPolicy::from_name(name, self))
            .collect()
    }
}
