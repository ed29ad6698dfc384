use super::timeline::Timeline;
use super::validate::{ensure_non_empty, validate_quanta, validate_workload};
use super::ScheduleError;
use crate::process::{Process, ScheduleEntry, Time};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// How a Multi-Level Feedback Queue assigns levels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MlfqMode {
    /// One shared queue and one level index for the whole run. The index moves
    /// to the next quantum (wrapping around) every time a process is preempted,
    /// so the quantum a process gets depends on the rotation, not its history.
    #[default]
    GlobalRotation,
    /// Textbook MLFQ: one queue per level, every process starts on level 0 and
    /// drops one level each time it uses up its quantum. The highest non-empty
    /// level is always served first.
    PerProcess,
}

impl std::fmt::Display for MlfqMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MlfqMode::GlobalRotation => write!(f, "global rotation"),
            MlfqMode::PerProcess => write!(f, "per-process"),
        }
    }
}

/// Multi-Level Feedback Queue in [`MlfqMode::GlobalRotation`] mode.
///
/// `quanta` holds one quantum per level, highest priority first.
pub fn mlfq(processes: &[Process], quanta: &[Time]) -> Result<Vec<ScheduleEntry>, ScheduleError> {
    mlfq_with_mode(processes, quanta, MlfqMode::GlobalRotation)
}

/// Multi-Level Feedback Queue with the level assignment chosen by `mode`.
pub fn mlfq_with_mode(
    processes: &[Process],
    quanta: &[Time],
    mode: MlfqMode,
) -> Result<Vec<ScheduleEntry>, ScheduleError> {
    ensure_non_empty(processes)?;
    validate_quanta(quanta)?;
    validate_workload(processes)?;

    let entries = match mode {
        MlfqMode::GlobalRotation => global_rotation(processes, quanta),
        MlfqMode::PerProcess => per_process(processes, quanta),
    };

    debug!(
        "mlfq ({}): {} processes in {} slices over {} levels",
        mode,
        processes.len(),
        entries.len(),
        quanta.len()
    );
    Ok(entries)
}

fn global_rotation(processes: &[Process], quanta: &[Time]) -> Vec<ScheduleEntry> {
    let mut queue: VecDeque<Process> = processes.iter().cloned().collect();
    let mut timeline = Timeline::with_capacity(processes.len());
    let mut level = 0;

    while let Some(mut process) = queue.pop_front() {
        if timeline.run_slice(&mut process, quanta[level]) > 0 {
            level = (level + 1) % quanta.len();
            queue.push_back(process);
        }
    }

    timeline.into_entries()
}

fn per_process(processes: &[Process], quanta: &[Time]) -> Vec<ScheduleEntry> {
    let lowest = quanta.len() - 1;
    let mut levels: Vec<VecDeque<Process>> = vec![VecDeque::new(); quanta.len()];
    levels[0].extend(processes.iter().cloned());
    let mut timeline = Timeline::with_capacity(processes.len());

    while let Some(level) = levels.iter().position(|queue| !queue.is_empty()) {
        let Some(mut process) = levels[level].pop_front() else {
            break;
        };
        if timeline.run_slice(&mut process, quanta[level]) > 0 {
            levels[(level + 1).min(lowest)].push_back(process);
        }
    }

    timeline.into_entries()
}
