use crate::process::ProcessId;

/// Reasons a policy refuses to produce a schedule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// Empty or absent process list, or malformed process identities
    InvalidWorkload(String),
    /// A process with no CPU time to run
    InvalidBurstTime { id: ProcessId },
    /// Non-positive quantum or empty quanta list
    InvalidParameter(String),
}

impl std::fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScheduleError::InvalidWorkload(reason) => write!(f, "invalid workload: {}", reason),
            ScheduleError::InvalidBurstTime { id } => {
                write!(f, "invalid burst time for process {}: must be positive", id)
            }
            ScheduleError::InvalidParameter(reason) => write!(f, "invalid parameter: {}", reason),
        }
    }
}

impl std::error::Error for ScheduleError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ScheduleError::InvalidWorkload("no processes".to_string()).to_string(),
            "invalid workload: no processes"
        );
        assert_eq!(
            ScheduleError::InvalidBurstTime { id: 4 }.to_string(),
            "invalid burst time for process 4: must be positive"
        );
        assert_eq!(
            ScheduleError::InvalidParameter("quantum must be positive".to_string()).to_string(),
            "invalid parameter: quantum must be positive"
        );
    }
}
