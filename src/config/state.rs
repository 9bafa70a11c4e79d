// Application state shared across handlers

use std::sync::Arc;

use crate::config::environment::EnvironmentVariables;

#[derive(Debug, Clone)]
pub struct AppState {
    pub environment: Arc<EnvironmentVariables>,
}

impl AppState {
    /// Loads the environment and wraps it for cheap cloning into the router.
    pub fn from_env() -> anyhow::Result<Self> {
        let environment: EnvironmentVariables = EnvironmentVariables::load()?;

        Ok(Self {
            environment: Arc::new(environment),
        })
    }
}
