use super::timeline::Timeline;
use super::validate::validate_workload;
use super::ScheduleError;
use crate::process::{Process, ScheduleEntry};
use log::debug;

/// Shortest-Time-to-Completion-First.
///
/// Repeatedly picks the not-yet-run process with the least remaining time and
/// runs it to completion. Nothing is sliced, so with static burst times the
/// result matches [`super::sjf`].
pub fn stcf(processes: &[Process]) -> Result<Vec<ScheduleEntry>, ScheduleError> {
    validate_workload(processes)?;

    let mut remaining: Vec<Process> = processes.to_vec();
    let mut timeline = Timeline::with_capacity(remaining.len());

    while let Some(idx) = shortest_remaining(&remaining) {
        let process = remaining.remove(idx);
        timeline.run(process.id, process.burst_time);
    }

    let entries = timeline.into_entries();
    debug!("stcf: scheduled {} processes", entries.len());
    Ok(entries)
}

/// Index of the process with the least remaining time; ties go to the earliest
fn shortest_remaining(remaining: &[Process]) -> Option<usize> {
    remaining
        .iter()
        .enumerate()
        .min_by_key(|(_, p)| p.burst_time)
        .map(|(idx, _)| idx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::sjf;

    #[test]
    fn test_stcf_order() {
        let processes = vec![
            Process::new(1, 0, 3),
            Process::new(2, 0, 1),
            Process::new(3, 0, 2),
        ];
        let entries = stcf(&processes).unwrap();

        assert_eq!(
            entries,
            vec![
                ScheduleEntry::new(2, 0, 1),
                ScheduleEntry::new(3, 1, 3),
                ScheduleEntry::new(1, 3, 6),
            ]
        );
    }

    #[test]
    fn test_shortest_remaining_tie() {
        let remaining = vec![
            Process::new(1, 0, 4),
            Process::new(2, 0, 2),
            Process::new(3, 0, 2),
        ];
        assert_eq!(shortest_remaining(&remaining), Some(1));
        assert_eq!(shortest_remaining(&[]), None);
    }

    #[test]
    fn test_stcf_matches_sjf() {
        let processes: Vec<Process> = [7, 3, 3, 9, 1, 4, 1]
            .iter()
            .enumerate()
            .map(|(i, &burst)| Process::new(i as u32 + 1, 0, burst))
            .collect();

        assert_eq!(stcf(&processes).unwrap(), sjf(&processes).unwrap());
    }

    #[test]
    fn test_stcf_rejects_zero_burst() {
        let processes = vec![Process::new(1, 0, 3), Process::new(2, 0, 0)];
        assert_eq!(
            stcf(&processes),
            Err(ScheduleError::InvalidBurstTime { id: 2 })
        );
    }
}
