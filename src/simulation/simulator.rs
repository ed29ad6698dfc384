use crate::config::Config;
use crate::metrics::ScheduleSummary;
use crate::process::{Process, ScheduleEntry, WorkloadGenerator};
use crate::scheduler::{ScheduleError, SchedulingPolicy};
use log::{info, warn};
use ordered_float::OrderedFloat;
use serde::Serialize;

/// A successful policy run
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyRun {
    pub entries: Vec<ScheduleEntry>,
    pub summary: ScheduleSummary,
}

/// Result of running one policy over the simulation workload
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyOutcome {
    pub policy: SchedulingPolicy,
    pub result: Result<PolicyRun, ScheduleError>,
}

/// Everything one simulation produced
#[derive(Debug, Clone)]
pub struct SimulationReport {
    pub workload: Vec<Process>,
    /// One outcome per policy, in configuration order
    pub outcomes: Vec<PolicyOutcome>,
}

impl SimulationReport {
    /// Successful outcome with the lowest mean turnaround; the earliest wins ties
    pub fn best_by_turnaround(&self) -> Option<&PolicyOutcome> {
        self.outcomes
            .iter()
            .filter_map(|outcome| {
                let run = outcome.result.as_ref().ok()?;
                Some((outcome, OrderedFloat(run.summary.mean_turnaround)))
            })
            .min_by_key(|(_, turnaround)| *turnaround)
            .map(|(outcome, _)| outcome)
    }

    pub fn num_failed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_err()).count()
    }

    /// Serializable view for JSON export and the wasm front end
    pub fn to_record(&self) -> ReportRecord {
        ReportRecord {
            workload: self.workload.clone(),
            policies: self
                .outcomes
                .iter()
                .map(|outcome| {
                    let (entries, summary, error) = match &outcome.result {
                        Ok(run) => (Some(run.entries.clone()), Some(run.summary.clone()), None),
                        Err(e) => (None, None, Some(e.to_string())),
                    };
                    OutcomeRecord {
                        policy: outcome.policy.to_string(),
                        preemptive: outcome.policy.is_preemptive(),
                        entries,
                        summary,
                        error,
                    }
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportRecord {
    pub workload: Vec<Process>,
    pub policies: Vec<OutcomeRecord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OutcomeRecord {
    pub policy: String,
    pub preemptive: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entries: Option<Vec<ScheduleEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<ScheduleSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Runs a set of policies over one workload
pub struct Simulator {
    workload: Vec<Process>,
    policies: Vec<SchedulingPolicy>,
}

impl Simulator {
    pub fn new(config: Config) -> Result<Self, String> {
        let policies = config.scheduler.policies()?;
        let workload = WorkloadGenerator::new(config.workload).generate()?;
        Ok(Self::with_workload(workload, policies))
    }

    pub fn with_workload(workload: Vec<Process>, policies: Vec<SchedulingPolicy>) -> Self {
        Self { workload, policies }
    }

    pub fn workload(&self) -> &[Process] {
        &self.workload
    }

    pub fn policies(&self) -> &[SchedulingPolicy] {
        &self.policies
    }

    /// Run every policy
    pub fn run(&self) -> SimulationReport {
        self.run_with_callback(|_outcome| {})
    }

    /// Run every policy, reporting each outcome as soon as it is available.
    /// A failing policy is recorded and the remaining policies still run.
    pub fn run_with_callback<F>(&self, mut callback: F) -> SimulationReport
    where
        F: FnMut(&PolicyOutcome),
    {
        info!(
            "running {} policies over {} processes",
            self.policies.len(),
            self.workload.len()
        );

        let mut outcomes = Vec::with_capacity(self.policies.len());
        for policy in &self.policies {
            let result = policy.simulate(&self.workload).map(|entries| PolicyRun {
                summary: ScheduleSummary::from_schedule(&self.workload, &entries),
                entries,
            });

            if let Err(e) = &result {
                warn!("{} failed: {}", policy, e);
            }

            let outcome = PolicyOutcome {
                policy: policy.clone(),
                result,
            };
            callback(&outcome);
            outcomes.push(outcome);
        }

        SimulationReport {
            workload: self.workload.clone(),
            outcomes,
        }
    }
}
