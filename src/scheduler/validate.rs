use super::ScheduleError;
use crate::process::{Process, Time};
use std::collections::HashSet;

/// Checks shared by every policy. Problems are reported for the first offending
/// process in input order.
pub(crate) fn validate_workload(processes: &[Process]) -> Result<(), ScheduleError> {
    ensure_non_empty(processes)?;

    let mut seen = HashSet::with_capacity(processes.len());
    let mut total: Time = 0;

    for process in processes {
        if process.id == 0 {
            return Err(ScheduleError::InvalidWorkload(
                "process ids must be positive".to_string(),
            ));
        }
        if !seen.insert(process.id) {
            return Err(ScheduleError::InvalidWorkload(format!(
                "duplicate process id {}",
                process.id
            )));
        }
        if process.burst_time == 0 {
            return Err(ScheduleError::InvalidBurstTime { id: process.id });
        }
        // The clock never exceeds the total, so this bounds every later addition
        total = total.checked_add(process.burst_time).ok_or_else(|| {
            ScheduleError::InvalidWorkload("total burst time overflows the clock".to_string())
        })?;
    }

    Ok(())
}

pub(crate) fn ensure_non_empty(processes: &[Process]) -> Result<(), ScheduleError> {
    if processes.is_empty() {
        return Err(ScheduleError::InvalidWorkload(
            "workload contains no processes".to_string(),
        ));
    }
    Ok(())
}

pub(crate) fn validate_quantum(quantum: Time) -> Result<(), ScheduleError> {
    if quantum == 0 {
        return Err(ScheduleError::InvalidParameter(
            "quantum must be positive".to_string(),
        ));
    }
    Ok(())
}

pub(crate) fn validate_quanta(quanta: &[Time]) -> Result<(), ScheduleError> {
    if quanta.is_empty() {
        return Err(ScheduleError::InvalidParameter(
            "quanta list must not be empty".to_string(),
        ));
    }
    if let Some(level) = quanta.iter().position(|&q| q == 0) {
        return Err(ScheduleError::InvalidParameter(format!(
            "quantum for level {} must be positive",
            level
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_workload() {
        let workload = vec![Process::new(1, 0, 3), Process::new(5, 2, 1)];
        assert!(validate_workload(&workload).is_ok());
    }

    #[test]
    fn test_empty_workload() {
        assert!(matches!(
            validate_workload(&[]),
            Err(ScheduleError::InvalidWorkload(_))
        ));
    }

    #[test]
    fn test_first_zero_burst_reported() {
        let workload = vec![
            Process::new(1, 0, 3),
            Process::new(2, 0, 0),
            Process::new(3, 0, 0),
        ];
        assert_eq!(
            validate_workload(&workload),
            Err(ScheduleError::InvalidBurstTime { id: 2 })
        );
    }

    #[test]
    fn test_duplicate_and_zero_ids() {
        let duplicate = vec![Process::new(1, 0, 3), Process::new(1, 0, 2)];
        assert!(matches!(
            validate_workload(&duplicate),
            Err(ScheduleError::InvalidWorkload(_))
        ));

        let zero = vec![Process::new(0, 0, 3)];
        assert!(matches!(
            validate_workload(&zero),
            Err(ScheduleError::InvalidWorkload(_))
        ));
    }

    #[test]
    fn test_clock_overflow() {
        let workload = vec![Process::new(1, 0, Time::MAX), Process::new(2, 0, 1)];
        assert!(matches!(
            validate_workload(&workload),
            Err(ScheduleError::InvalidWorkload(_))
        ));
    }

    #[test]
    fn test_quantum_checks() {
        assert!(validate_quantum(1).is_ok());
        assert!(matches!(
            validate_quantum(0),
            Err(ScheduleError::InvalidParameter(_))
        ));

        assert!(validate_quanta(&[2, 4, 8]).is_ok());
        assert!(matches!(
            validate_quanta(&[]),
            Err(ScheduleError::InvalidParameter(_))
        ));
        assert!(matches!(
            validate_quanta(&[2, 0]),
            Err(ScheduleError::InvalidParameter(_))
        ));
    }
}
