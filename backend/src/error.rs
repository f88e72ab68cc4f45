use thiserror::Error;

/// Result type for burnout prediction operations
pub type Result<T> = std::result::Result<T, BurnoutError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum BurnoutError {
    /// Model file missing, unreadable or not a usable classifier. Fatal at startup.
    #[error("impossible de charger le modèle '{path}': {reason}")]
    ArtifactLoad { path: String, reason: String },

    /// The classifier failed or answered with something that is not a known class.
    #[error("erreur de prédiction: {0}")]
    Prediction(String),
}

impl BurnoutError {
    pub fn artifact_load(path: impl Into<String>, reason: impl ToString) -> Self {
        BurnoutError::ArtifactLoad {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn prediction(reason: impl ToString) -> Self {
        BurnoutError::Prediction(reason.to_string())
    }
}
