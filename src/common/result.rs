use serde::Serialize;

/// Outcome of a guarded service operation. Expected business violations
/// (duplicate name, missing id) travel here as values; only unexpected
/// store faults are returned as errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationResult {
    pub success: bool,
    pub message: String,
}

impl OperationResult {
    pub fn success(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
        }
    }

    pub fn error(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
        }
    }

    pub fn is_successful(&self) -> bool {
        self.success
    }
}
