use crate::config::RemoteConfig;
use crate::hardware::HardwareSpec;
use crate::verdict::Verdict;

use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

/// Request body posted to the remote inference endpoint: the structured
/// fields plus a flat natural-language description of the hardware.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CompatibilityRequest<'a> {
    cpu_brand: &'a str,
    cpu_model: &'a str,
    motherboard: &'a str,
    graphics_card: &'a str,
    description: String,
}

/// Client for the remote inference service.
///
/// One POST per check, no retries. The configured timeout bounds the whole
/// request, so a stalled service degrades into the caller's local fallback
/// rather than an indefinite wait.
pub struct RemoteEvaluator {
    client: Client,
    endpoint: String,
}

impl RemoteEvaluator {
    pub fn new(config: &RemoteConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .user_agent("hackcheck/0.1.0")
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submit the hardware for remote analysis. Any transport error,
    /// non-success status, or body that does not deserialize to a
    /// [`Verdict`] is reported as an error; the caller decides whether to
    /// fall back.
    pub async fn evaluate(&self, spec: &HardwareSpec) -> anyhow::Result<Verdict> {
        let request = CompatibilityRequest {
            cpu_brand: &spec.cpu_brand,
            cpu_model: &spec.cpu_model,
            motherboard: &spec.motherboard,
            graphics_card: &spec.graphics_card,
            description: spec.description(),
        };

        log::debug!("posting compatibility request to {}", self.endpoint);
        let response = self.client.post(&self.endpoint).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("remote evaluator returned {status}");
        }

        let verdict = response.json::<Verdict>().await?;
        Ok(verdict)
    }
}
