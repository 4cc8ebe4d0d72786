use serde::{Deserialize, Serialize};
use thiserror::Error;

/// User-submitted hardware description for one compatibility check.
///
/// The brand is carried as the raw string because the CPU rule tables key
/// on it with an exact-case comparison; the other three fields are matched
/// case-insensitively after normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HardwareSpec {
    pub cpu_brand: String,
    pub cpu_model: String,
    pub motherboard: String,
    pub graphics_card: String,
}

/// One or more required fields were empty. Raised before any evaluation;
/// the evaluators never see an invalid spec.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing required fields: {}", .fields.join(", "))]
pub struct ValidationError {
    pub fields: Vec<String>,
}

impl HardwareSpec {
    pub fn new(
        cpu_brand: impl Into<String>,
        cpu_model: impl Into<String>,
        motherboard: impl Into<String>,
        graphics_card: impl Into<String>,
    ) -> Self {
        HardwareSpec {
            cpu_brand: cpu_brand.into(),
            cpu_model: cpu_model.into(),
            motherboard: motherboard.into(),
            graphics_card: graphics_card.into(),
        }
    }

    /// Check that all four fields are present.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut fields = Vec::new();
        if self.cpu_brand.is_empty() {
            fields.push("CPU brand".to_string());
        }
        if self.cpu_model.is_empty() {
            fields.push("CPU model".to_string());
        }
        if self.motherboard.is_empty() {
            fields.push("motherboard".to_string());
        }
        if self.graphics_card.is_empty() {
            fields.push("graphics card".to_string());
        }

        if fields.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { fields })
        }
    }

    /// Natural-language description of the hardware, sent alongside the
    /// structured fields in remote evaluation requests.
    pub fn description(&self) -> String {
        format!(
            "CPU Brand: {}\nCPU Model: {}\nMotherboard: {}\nGraphics Card: {}",
            self.cpu_brand, self.cpu_model, self.motherboard, self.graphics_card
        )
    }
}
