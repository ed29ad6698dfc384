use super::process::{ProcessId, Time};
use serde::{Deserialize, Serialize};

/// One contiguous execution interval assigned to a process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub id: ProcessId,
    pub start_time: Time,
    pub finish_time: Time,
}

impl ScheduleEntry {
    pub fn new(id: ProcessId, start_time: Time, finish_time: Time) -> Self {
        debug_assert!(finish_time >= start_time, "entry for {id} ends before it starts");
        Self {
            id,
            start_time,
            finish_time,
        }
    }

    /// Length of the interval
    pub fn duration(&self) -> Time {
        self.finish_time - self.start_time
    }
}

impl std::fmt::Display for ScheduleEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P{} [{}, {})", self.id, self.start_time, self.finish_time)
    }
}
