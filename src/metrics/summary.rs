use crate::process::{Process, ProcessId, ScheduleEntry, Time};
use serde::Serialize;
use std::collections::HashMap;

/// Timing of one process within a schedule.
///
/// Every process is treated as available at time 0, since no policy looks at
/// arrival times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessStats {
    pub id: ProcessId,
    pub burst_time: Time,
    /// Start of the first slice (response time)
    pub first_start: Time,
    /// End of the last slice (turnaround time)
    pub completion_time: Time,
    /// Time spent ready but not running
    pub waiting_time: Time,
    /// Number of entries the process was split into
    pub slices: usize,
}

/// Aggregate metrics for one policy's schedule
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleSummary {
    pub makespan: Time,
    pub mean_turnaround: f64,
    pub mean_response: f64,
    pub mean_waiting: f64,
    /// Adjacent entries that belong to different processes
    pub context_switches: usize,
    /// Per-process stats, in workload order
    pub processes: Vec<ProcessStats>,
}

impl ScheduleSummary {
    pub fn from_schedule(workload: &[Process], entries: &[ScheduleEntry]) -> Self {
        // id -> (first start, last finish, slices)
        let mut spans: HashMap<ProcessId, (Time, Time, usize)> = HashMap::new();
        for entry in entries {
            spans
                .entry(entry.id)
                .and_modify(|(first, last, slices)| {
                    *first = (*first).min(entry.start_time);
                    *last = (*last).max(entry.finish_time);
                    *slices += 1;
                })
                .or_insert((entry.start_time, entry.finish_time, 1));
        }

        let processes: Vec<ProcessStats> = workload
            .iter()
            .filter_map(|process| {
                let &(first_start, completion_time, slices) = spans.get(&process.id)?;
                Some(ProcessStats {
                    id: process.id,
                    burst_time: process.burst_time,
                    first_start,
                    completion_time,
                    waiting_time: completion_time.saturating_sub(process.burst_time),
                    slices,
                })
            })
            .collect();

        let mean = |f: fn(&ProcessStats) -> Time| {
            if processes.is_empty() {
                0.0
            } else {
                processes.iter().map(|p| f(p) as f64).sum::<f64>() / processes.len() as f64
            }
        };

        Self {
            makespan: entries.iter().map(|e| e.finish_time).max().unwrap_or(0),
            mean_turnaround: mean(|p| p.completion_time),
            mean_response: mean(|p| p.first_start),
            mean_waiting: mean(|p| p.waiting_time),
            context_switches: entries.windows(2).filter(|w| w[0].id != w[1].id).count(),
            processes,
        }
    }
}
