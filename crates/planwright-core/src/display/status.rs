//! One-line confirmations for operations without a richer result.

use std::fmt;

/// Success or failure message, e.g. after toggling a plan.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = if self.success { "Success:" } else { "Error:" };
        writeln!(f, "{label} {}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_display() {
        let success = OperationStatus::success("Plan plan-1 is now enabled");
        assert_eq!(success.to_string(), "Success: Plan plan-1 is now enabled\n");

        let failure = OperationStatus::failure(String::from("Plan not found"));
        assert!(failure.to_string().starts_with("Error:"));
    }
}
