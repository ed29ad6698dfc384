use crate::scheduler::ScheduleError;
use serde::{Deserialize, Serialize};

pub type ProcessId = u32;

/// Simulated time, in abstract ticks
pub type Time = u64;

/// A unit of work in a simulated workload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique identifier within one workload
    pub id: ProcessId,

    /// Time the process becomes known to the scheduler.
    /// Carried through the simulation but not used for ordering.
    #[serde(default, alias = "arrivalTime")]
    pub arrival_time: Time,

    /// CPU time required to run to completion
    #[serde(alias = "burstTime")]
    pub burst_time: Time,
}

impl Process {
    pub fn new(id: ProcessId, arrival_time: Time, burst_time: Time) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
        }
    }
}

/// Wire form of a process. Burst time is signed so that negative values coming
/// from a front end are reported as a burst-time error instead of a parse error.
#[derive(Debug, Deserialize)]
struct RawProcess {
    id: ProcessId,
    #[serde(default, alias = "arrivalTime")]
    arrival_time: Time,
    #[serde(alias = "burstTime")]
    burst_time: i64,
}

/// Parse a JSON array of processes.
///
/// A missing document, `null`, or anything other than an array is an
/// `InvalidWorkload`. An empty array parses fine; the engine rejects it when a
/// policy runs.
pub fn workload_from_json(json: &str) -> Result<Vec<Process>, ScheduleError> {
    let value: serde_json::Value = serde_json::from_str(json)
        .map_err(|e| ScheduleError::InvalidWorkload(format!("malformed workload: {}", e)))?;

    if !value.is_array() {
        return Err(ScheduleError::InvalidWorkload(
            "processes must be an array".to_string(),
        ));
    }

    let raw: Vec<RawProcess> = serde_json::from_value(value)
        .map_err(|e| ScheduleError::InvalidWorkload(format!("malformed process: {}", e)))?;

    raw.into_iter()
        .map(|p| {
            let burst_time =
                Time::try_from(p.burst_time).map_err(|_| ScheduleError::InvalidBurstTime { id: p.id })?;
            Ok(Process::new(p.id, p.arrival_time, burst_time))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_creation() {
        let p = Process::new(3, 7, 4);

        assert_eq!(p.id, 3);
        assert_eq!(p.arrival_time, 7);
        assert_eq!(p.burst_time, 4);
    }

    #[test]
    fn test_workload_from_json() {
        let json = r#"[
            {"id": 1, "arrival_time": 3, "burst_time": 4},
            {"id": 2, "arrivalTime": 0, "burstTime": 2}
        ]"#;
        let workload = workload_from_json(json).unwrap();

        assert_eq!(workload, vec![Process::new(1, 3, 4), Process::new(2, 0, 2)]);
    }

    #[test]
    fn test_arrival_time_defaults_to_zero() {
        let workload = workload_from_json(r#"[{"id": 1, "burst_time": 5}]"#).unwrap();
        assert_eq!(workload[0].arrival_time, 0);
    }

    #[test]
    fn test_null_workload_rejected() {
        assert!(matches!(
            workload_from_json("null"),
            Err(ScheduleError::InvalidWorkload(_))
        ));
        assert!(matches!(
            workload_from_json(""),
            Err(ScheduleError::InvalidWorkload(_))
        ));
        assert!(matches!(
            workload_from_json(r#"{"id": 1, "burst_time": 5}"#),
            Err(ScheduleError::InvalidWorkload(_))
        ));
    }

    #[test]
    fn test_empty_array_parses() {
        assert!(workload_from_json("[]").unwrap().is_empty());
    }

    #[test]
    fn test_negative_burst_time_rejected() {
        let result = workload_from_json(r#"[{"id": 1, "burst_time": 2}, {"id": 9, "burst_time": -3}]"#);
        assert_eq!(result, Err(ScheduleError::InvalidBurstTime { id: 9 }));
    }

    #[test]
    fn test_zero_burst_time_survives_parsing() {
        let workload = workload_from_json(r#"[{"id": 1, "burst_time": 0}]"#).unwrap();
        assert_eq!(workload[0].burst_time, 0);
    }
}
