use super::{Process, ProcessId};
use crate::config::WorkloadConfig;
use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Generates synthetic workloads from a workload configuration
pub struct WorkloadGenerator {
    workload: WorkloadConfig,
    rng: StdRng,
}

impl WorkloadGenerator {
    pub fn new(workload: WorkloadConfig) -> Self {
        let rng = match workload.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { workload, rng }
    }

    /// Produce the workload: the explicit process list when one is configured,
    /// otherwise `num_processes` random processes with ids 1..=n
    pub fn generate(&mut self) -> Result<Vec<Process>, String> {
        if let Some(processes) = &self.workload.processes {
            debug!("using explicit workload of {} processes", processes.len());
            return Ok(processes.clone());
        }

        self.workload.validate()?;

        let mut processes = Vec::with_capacity(self.workload.num_processes);
        for i in 0..self.workload.num_processes {
            let id = ProcessId::try_from(i + 1)
                .map_err(|_| format!("too many processes: {}", self.workload.num_processes))?;
            let arrival_time = self.rng.gen_range(0..self.workload.max_arrival_time);
            let burst_time = self.workload.burst_dist.sample(&mut self.rng)?;
            processes.push(Process::new(id, arrival_time, burst_time));
        }

        debug!(
            "generated {} processes (seed {:?})",
            processes.len(),
            self.workload.seed
        );
        Ok(processes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BurstDistribution;

    fn create_test_workload(num_processes: usize, seed: u64) -> WorkloadConfig {
        WorkloadConfig {
            num_processes,
            seed: Some(seed),
            ..WorkloadConfig::default()
        }
    }

    #[test]
    fn test_generate_workload() {
        let mut generator = WorkloadGenerator::new(create_test_workload(20, 42));
        let processes = generator.generate().unwrap();

        assert_eq!(processes.len(), 20);
        for (i, process) in processes.iter().enumerate() {
            assert_eq!(process.id, i as u32 + 1);
            assert!(process.arrival_time < 10);
            assert!((1..=10).contains(&process.burst_time));
        }
    }

    #[test]
    fn test_same_seed_same_workload() {
        let first = WorkloadGenerator::new(create_test_workload(15, 7))
            .generate()
            .unwrap();
        let second = WorkloadGenerator::new(create_test_workload(15, 7))
            .generate()
            .unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_fixed_distribution() {
        let workload = WorkloadConfig {
            burst_dist: BurstDistribution::Fixed { value: 4 },
            ..create_test_workload(5, 1)
        };
        let processes = WorkloadGenerator::new(workload).generate().unwrap();

        assert!(processes.iter().all(|p| p.burst_time == 4));
    }

    #[test]
    fn test_explicit_processes_win() {
        let explicit = vec![Process::new(10, 0, 3), Process::new(20, 1, 1)];
        let workload = WorkloadConfig {
            processes: Some(explicit.clone()),
            ..create_test_workload(50, 1)
        };

        assert_eq!(WorkloadGenerator::new(workload).generate().unwrap(), explicit);
    }

    #[test]
    fn test_invalid_generator_config() {
        let mut generator = WorkloadGenerator::new(create_test_workload(0, 1));
        assert!(generator.generate().is_err());
    }
}
