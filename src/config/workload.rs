use crate::process::{Process, Time};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkloadConfig {
    /// Number of processes to generate
    #[serde(default = "default_num_processes")]
    pub num_processes: usize,

    /// Arrival times are drawn from [0, max_arrival_time)
    #[serde(default = "default_max_arrival_time")]
    pub max_arrival_time: Time,

    /// Burst time distribution
    #[serde(default)]
    pub burst_dist: BurstDistribution,

    /// Random seed for reproducibility (None = seed from the OS)
    #[serde(default)]
    pub seed: Option<u64>,

    /// Explicit workload; when set, nothing is generated
    #[serde(default)]
    pub processes: Option<Vec<Process>>,
}

fn default_num_processes() -> usize {
    5
}

fn default_max_arrival_time() -> Time {
    10
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            num_processes: default_num_processes(),
            max_arrival_time: default_max_arrival_time(),
            burst_dist: BurstDistribution::default(),
            seed: None,
            processes: None,
        }
    }
}

impl WorkloadConfig {
    /// Check generator parameters. Explicit workloads are left to the engine.
    pub fn validate(&self) -> Result<(), String> {
        if self.processes.is_some() {
            return Ok(());
        }
        if self.num_processes == 0 {
            return Err("num_processes must be at least 1".to_string());
        }
        if self.max_arrival_time == 0 {
            return Err("max_arrival_time must be at least 1".to_string());
        }
        self.burst_dist.validate()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BurstDistribution {
    #[serde(rename = "fixed")]
    Fixed { value: Time },

    #[serde(rename = "uniform")]
    Uniform { min: Time, max: Time },

    #[serde(rename = "normal")]
    Normal { mean: f64, std_dev: f64 },

    #[serde(rename = "lognormal")]
    LogNormal { mean: f64, std_dev: f64 },
}

impl Default for BurstDistribution {
    fn default() -> Self {
        BurstDistribution::Uniform { min: 1, max: 10 }
    }
}

impl BurstDistribution {
    pub fn validate(&self) -> Result<(), String> {
        match self {
            BurstDistribution::Fixed { value } if *value == 0 => {
                Err("fixed burst time must be positive".to_string())
            }
            BurstDistribution::Uniform { min, max } if min > max => Err(format!(
                "uniform burst range is empty: min {} > max {}",
                min, max
            )),
            BurstDistribution::Uniform { max, .. } if *max == 0 => {
                Err("uniform burst range must include a positive value".to_string())
            }
            BurstDistribution::Normal { std_dev, .. }
            | BurstDistribution::LogNormal { std_dev, .. }
                if !(std_dev.is_finite() && *std_dev >= 0.0) =>
            {
                Err(format!("invalid burst std_dev: {}", std_dev))
            }
            _ => Ok(()),
        }
    }

    /// Sample a burst time, never below 1
    pub fn sample<R: rand::Rng>(&self, rng: &mut R) -> Result<Time, String> {
        use rand_distr::Distribution;

        let value = match self {
            BurstDistribution::Fixed { value } => *value,
            BurstDistribution::Uniform { min, max } => rng.gen_range(*min..=*max),
            BurstDistribution::Normal { mean, std_dev } => {
                let normal = rand_distr::Normal::new(*mean, *std_dev)
                    .map_err(|e| format!("invalid normal distribution: {}", e))?;
                normal.sample(rng).round().max(1.0) as Time
            }
            BurstDistribution::LogNormal { mean, std_dev } => {
                let lognormal = rand_distr::LogNormal::new(*mean, *std_dev)
                    .map_err(|e| format!("invalid lognormal distribution: {}", e))?;
                lognormal.sample(rng).round().max(1.0) as Time
            }
        };

        Ok(value.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_default_distribution_range() {
        let dist = BurstDistribution::default();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let burst = dist.sample(&mut rng).unwrap();
            assert!((1..=10).contains(&burst));
        }
    }

    #[test]
    fn test_normal_samples_are_positive() {
        let dist = BurstDistribution::Normal {
            mean: 1.0,
            std_dev: 5.0,
        };
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            assert!(dist.sample(&mut rng).unwrap() >= 1);
        }
    }

    #[test]
    fn test_distribution_validation() {
        assert!(BurstDistribution::Fixed { value: 0 }.validate().is_err());
        assert!(BurstDistribution::Fixed { value: 3 }.validate().is_ok());
        assert!(BurstDistribution::Uniform { min: 5, max: 2 }.validate().is_err());
        assert!(BurstDistribution::Uniform { min: 0, max: 0 }.validate().is_err());
        assert!(BurstDistribution::Normal {
            mean: 4.0,
            std_dev: -1.0
        }
        .validate()
        .is_err());
    }

    #[test]
    fn test_workload_validation() {
        let mut workload = WorkloadConfig::default();
        assert!(workload.validate().is_ok());

        workload.num_processes = 0;
        assert!(workload.validate().is_err());

        // An explicit workload skips generator checks
        workload.processes = Some(Vec::new());
        assert!(workload.validate().is_ok());
    }
}
