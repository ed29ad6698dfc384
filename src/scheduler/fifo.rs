use super::timeline::Timeline;
use super::validate::validate_workload;
use super::ScheduleError;
use crate::process::{Process, ScheduleEntry};
use log::debug;

/// First-In-First-Out: run every process to completion in input order.
///
/// Arrival times are not consulted; the order of `processes` is the order of
/// execution.
pub fn fifo(processes: &[Process]) -> Result<Vec<ScheduleEntry>, ScheduleError> {
    validate_workload(processes)?;

    let entries = run_to_completion(processes.iter());
    debug!("fifo: scheduled {} processes", entries.len());
    Ok(entries)
}

/// Shortest-Job-First: FIFO over the workload sorted by burst time.
///
/// The sort is stable, so equal burst times keep their input order.
pub fn sjf(processes: &[Process]) -> Result<Vec<ScheduleEntry>, ScheduleError> {
    validate_workload(processes)?;

    let mut order: Vec<&Process> = processes.iter().collect();
    order.sort_by_key(|p| p.burst_time);

    let entries = run_to_completion(order.into_iter());
    debug!("sjf: scheduled {} processes", entries.len());
    Ok(entries)
}

/// Run processes back to back, one entry each
fn run_to_completion<'a>(order: impl ExactSizeIterator<Item = &'a Process>) -> Vec<ScheduleEntry> {
    let mut timeline = Timeline::with_capacity(order.len());
    for process in order {
        timeline.run(process.id, process.burst_time);
    }
    timeline.into_entries()
}
