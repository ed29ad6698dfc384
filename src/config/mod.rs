pub mod scheduler;
pub mod simulation;
pub mod workload;

pub use scheduler::SchedulerConfig;
pub use simulation::SimulationConfig;
pub use workload::{BurstDistribution, WorkloadConfig};

use crate::process::Time;
use crate::scheduler::{MlfqMode, ScheduleError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Top-level configuration that aggregates all sub-configs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub workload: WorkloadConfig,
    #[serde(default)]
    pub scheduler: SchedulerConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
}

impl Config {
    /// Load configuration from a TOML file. Not validated; call
    /// [`Config::validate`] once any overrides have been applied.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self, Box<dyn std::error::Error>> {
        Ok(toml::from_str(contents)?)
    }

    /// Parse configuration from JSON text.
    ///
    /// An explicit `"processes": null` is an invalid workload rather than a
    /// request to generate one; leave the key out for that.
    pub fn from_json_str(contents: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let value: serde_json::Value = serde_json::from_str(contents)?;
        let null_processes = value
            .get("workload")
            .and_then(|workload| workload.get("processes"))
            .is_some_and(serde_json::Value::is_null);
        if null_processes {
            return Err(ScheduleError::InvalidWorkload("processes must be an array".to_string()).into());
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Overlay values given outside the config file
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(policies) = &overrides.policies {
            self.scheduler.policies = policies.clone();
        }
        if let Some(quantum) = overrides.quantum {
            self.scheduler.quantum = quantum;
        }
        if let Some(quanta) = &overrides.mlfq_quanta {
            self.scheduler.mlfq_quanta = quanta.clone();
        }
        if let Some(mode) = overrides.mlfq_mode {
            self.scheduler.mlfq_mode = mode;
        }
        if let Some(n) = overrides.num_processes {
            self.workload.num_processes = n;
        }
        if overrides.seed.is_some() {
            self.workload.seed = overrides.seed;
        }
        if overrides.output.is_some() {
            self.simulation.output = overrides.output.clone();
        }
        if overrides.plot_dir.is_some() {
            self.simulation.plot_dir = overrides.plot_dir.clone();
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        self.workload.validate()?;
        self.scheduler.policies()?;
        Ok(())
    }
}

/// Values that take precedence over the config file (`None` keeps the file's value)
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub policies: Option<Vec<String>>,
    pub quantum: Option<Time>,
    pub mlfq_quanta: Option<Vec<Time>>,
    pub mlfq_mode: Option<MlfqMode>,
    pub num_processes: Option<usize>,
    pub seed: Option<u64>,
    pub output: Option<PathBuf>,
    pub plot_dir: Option<PathBuf>,
}
