use async_trait::async_trait;

use super::traits::{OracleError, SoilOracle};

/// Oracle stand-in used when the deployment has no credential.
///
/// Every call fails with `OracleError::NotConfigured`, so classifications run
/// on the heuristic path and report the oracle as unavailable.
#[derive(Debug, Clone)]
pub struct DisabledOracle {
    reason: String,
}

impl DisabledOracle {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl SoilOracle for DisabledOracle {
    async fn generate(&self, _prompt: String) -> Result<String, OracleError> {
        Err(OracleError::NotConfigured(self.reason.clone()))
    }
}
