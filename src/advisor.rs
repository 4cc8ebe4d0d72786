use crate::config::Config;
use crate::evaluator::RuleBasedEvaluator;
use crate::hardware::{HardwareSpec, ValidationError};
use crate::remote::RemoteEvaluator;
use crate::verdict::Verdict;

/// Front door for compatibility checks.
///
/// Validates the spec, consults the remote evaluator when one is
/// configured, and substitutes the local rule-based result on any remote
/// failure. Callers see a [`Verdict`] either way; which evaluator produced
/// it is not observable from the result.
pub struct CompatibilityAdvisor {
    local: RuleBasedEvaluator,
    remote: Option<RemoteEvaluator>,
}

impl CompatibilityAdvisor {
    pub fn new(config: &Config) -> Self {
        let remote = config.remote.as_ref().and_then(|remote_config| {
            match RemoteEvaluator::new(remote_config) {
                Ok(remote) => {
                    log::info!("remote evaluator configured: {}", remote_config.endpoint);
                    Some(remote)
                }
                Err(e) => {
                    log::warn!("failed to build remote client, running locally: {e}");
                    None
                }
            }
        });

        Self {
            local: RuleBasedEvaluator::new(),
            remote,
        }
    }

    /// Advisor with no remote path, regardless of configuration.
    pub fn local_only() -> Self {
        Self {
            local: RuleBasedEvaluator::new(),
            remote: None,
        }
    }

    pub fn has_remote(&self) -> bool {
        self.remote.is_some()
    }

    /// Run one compatibility check.
    ///
    /// The only error is validation: empty fields are rejected before
    /// either evaluator is consulted. Remote failures are recovered here
    /// and never surfaced.
    pub async fn check(&self, spec: &HardwareSpec) -> Result<Verdict, ValidationError> {
        spec.validate()?;

        if let Some(remote) = &self.remote {
            match remote.evaluate(spec).await {
                Ok(verdict) => return Ok(verdict),
                Err(e) => {
                    log::warn!("remote evaluation failed, falling back to local rules: {e}");
                }
            }
        }

        Ok(self.local.evaluate(spec))
    }
}
