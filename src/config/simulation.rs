use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where simulation results go besides the terminal
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Directory for rendered charts
    #[serde(default)]
    pub plot_dir: Option<PathBuf>,

    /// JSON report path
    #[serde(default)]
    pub output: Option<PathBuf>,
}
