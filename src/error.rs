use thiserror::Error;

/// Errors raised by the photon walk and its experiment driver.
#[derive(Error, Debug)]
pub enum WalkError {
    /// Undo requested on a trajectory that only holds its initial position.
    #[error("cannot undo step: trajectory holds {len} position(s), at least 2 required")]
    TrajectoryUnderflow { len: usize },

    /// A trajectory was built from an empty position list.
    #[error("trajectory must hold at least one position")]
    EmptyTrajectory,

    /// Sweep configuration rejected by validation
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl WalkError {
    pub fn config(message: impl Into<String>) -> Self {
        WalkError::InvalidConfig(message.into())
    }
}

pub type Result<T> = std::result::Result<T, WalkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underflow_message_reports_length() {
        let err = WalkError::TrajectoryUnderflow { len: 1 };
        assert_eq!(
            err.to_string(),
            "cannot undo step: trajectory holds 1 position(s), at least 2 required"
        );
    }

    #[test]
    fn test_config_helper() {
        let err = WalkError::config("photons must be positive");
        assert!(matches!(err, WalkError::InvalidConfig(ref m) if m == "photons must be positive"));
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: WalkError = io.into();
        assert!(err.to_string().starts_with("I/O error"));
    }
}
