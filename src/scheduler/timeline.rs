use crate::process::{Process, ProcessId, ScheduleEntry, Time};
use log::trace;

/// Simulation clock and the entries emitted against it
pub(crate) struct Timeline {
    now: Time,
    entries: Vec<ScheduleEntry>,
}

impl Timeline {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            now: 0,
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Run `id` for `duration` ticks starting now
    pub fn run(&mut self, id: ProcessId, duration: Time) {
        let entry = ScheduleEntry::new(id, self.now, self.now + duration);
        trace!("run {}", entry);
        self.now = entry.finish_time;
        self.entries.push(entry);
    }

    /// Run a working copy for at most `quantum` ticks and consume that much of
    /// its burst. Returns the burst left over.
    pub fn run_slice(&mut self, process: &mut Process, quantum: Time) -> Time {
        let slice = process.burst_time.min(quantum);
        self.run(process.id, slice);
        process.burst_time -= slice;
        process.burst_time
    }

    pub fn now(&self) -> Time {
        self.now
    }

    pub fn into_entries(self) -> Vec<ScheduleEntry> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_are_contiguous() {
        let mut timeline = Timeline::with_capacity(2);
        timeline.run(1, 3);
        timeline.run(2, 5);

        assert_eq!(timeline.now(), 8);
        assert_eq!(
            timeline.into_entries(),
            vec![ScheduleEntry::new(1, 0, 3), ScheduleEntry::new(2, 3, 8)]
        );
    }

    #[test]
    fn test_run_slice() {
        let mut timeline = Timeline::with_capacity(2);
        let mut process = Process::new(7, 0, 5);

        assert_eq!(timeline.run_slice(&mut process, 3), 2);
        assert_eq!(timeline.run_slice(&mut process, 3), 0);
        assert_eq!(timeline.now(), 5);
        assert_eq!(process.burst_time, 0);
    }
}
