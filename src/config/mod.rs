pub mod file;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "portfolio-form")]
#[command(about = "Interactive form client for the remote portfolio optimizer")]
pub struct CliConfig {
    #[arg(long, default_value = "http://127.0.0.1:8000/optimizar")]
    pub solver_endpoint: String,

    #[arg(long, help = "TOML config file; its [solver] endpoint takes precedence")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Folds an optional config file into the flag values.
    pub fn resolve(mut self) -> Result<Self> {
        if let Some(path) = &self.config {
            let file = file::FileConfig::from_file(path)?;
            self.solver_endpoint = file.solver.endpoint;
        }
        Ok(self)
    }
}

impl ConfigProvider for CliConfig {
    fn solver_endpoint(&self) -> &str {
        &self.solver_endpoint
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("solver_endpoint", &self.solver_endpoint)
    }
}
