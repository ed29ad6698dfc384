use super::timeline::Timeline;
use super::validate::{ensure_non_empty, validate_quantum, validate_workload};
use super::ScheduleError;
use crate::process::{Process, ScheduleEntry, Time};
use log::debug;
use std::collections::VecDeque;

/// Round Robin with a fixed quantum.
///
/// One ready queue in input order. Each turn the head runs for up to
/// `quantum` ticks and, if unfinished, goes back to the tail. A process that
/// needs several turns gets one entry per turn.
pub fn round_robin(
    processes: &[Process],
    quantum: Time,
) -> Result<Vec<ScheduleEntry>, ScheduleError> {
    ensure_non_empty(processes)?;
    validate_quantum(quantum)?;
    validate_workload(processes)?;

    let mut queue: VecDeque<Process> = processes.iter().cloned().collect();
    let mut timeline = Timeline::with_capacity(processes.len());

    while let Some(mut process) = queue.pop_front() {
        if timeline.run_slice(&mut process, quantum) > 0 {
            queue.push_back(process);
        }
    }

    debug!(
        "rr: {} processes finished at t={} (quantum {})",
        processes.len(),
        timeline.now(),
        quantum
    );
    Ok(timeline.into_entries())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use std::collections::HashMap;

    fn busy_time_per_process(entries: &[ScheduleEntry]) -> HashMap<u32, u64> {
        let mut busy = HashMap::new();
        for entry in entries {
            *busy.entry(entry.id).or_insert(0) += entry.duration();
        }
        busy
    }

    #[test]
    fn test_round_robin_slices() {
        let processes = vec![Process::new(1, 0, 5), Process::new(2, 0, 3)];
        let entries = round_robin(&processes, 2).unwrap();

        assert_eq!(
            entries,
            vec![
                ScheduleEntry::new(1, 0, 2),
                ScheduleEntry::new(2, 2, 4),
                ScheduleEntry::new(1, 4, 6),
                ScheduleEntry::new(2, 6, 7),
                ScheduleEntry::new(1, 7, 8),
            ]
        );
    }

    #[test]
    fn test_large_quantum_is_fifo() {
        let processes = vec![Process::new(3, 0, 4), Process::new(1, 0, 2)];
        let entries = round_robin(&processes, 100).unwrap();

        assert_eq!(
            entries,
            vec![ScheduleEntry::new(3, 0, 4), ScheduleEntry::new(1, 4, 6)]
        );
    }

    #[test]
    fn test_conservation_on_random_workloads() {
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..50 {
            let n = rng.gen_range(1..=12);
            let processes: Vec<Process> = (1..=n)
                .map(|id| Process::new(id, rng.gen_range(0..10), rng.gen_range(1..=20)))
                .collect();
            let quantum = rng.gen_range(1..=6);

            let entries = round_robin(&processes, quantum).unwrap();
            let busy = busy_time_per_process(&entries);

            for process in &processes {
                assert_eq!(busy[&process.id], process.burst_time);
            }
            let total: u64 = processes.iter().map(|p| p.burst_time).sum();
            assert_eq!(entries.last().unwrap().finish_time, total);
            assert!(entries.iter().all(|e| e.duration() <= quantum));
        }
    }

    #[test]
    fn test_caller_workload_untouched() {
        let processes = vec![Process::new(1, 0, 5), Process::new(2, 0, 3)];
        let before = processes.clone();

        round_robin(&processes, 2).unwrap();
        assert_eq!(processes, before);
    }

    #[test]
    fn test_zero_quantum() {
        let processes = vec![Process::new(1, 0, 5)];
        assert!(matches!(
            round_robin(&processes, 0),
            Err(ScheduleError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_empty_workload_reported_before_quantum() {
        assert!(matches!(
            round_robin(&[], 0),
            Err(ScheduleError::InvalidWorkload(_))
        ));
    }

    #[test]
    fn test_zero_burst() {
        let processes = vec![Process::new(1, 0, 5), Process::new(2, 0, 0)];
        assert_eq!(
            round_robin(&processes, 2),
            Err(ScheduleError::InvalidBurstTime { id: 2 })
        );
    }
}
