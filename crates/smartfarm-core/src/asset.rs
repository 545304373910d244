//! Load state of the bundled 3D model

use thiserror::Error;

/// The model could not be found or parsed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Failed to load model asset {path}: {reason}")]
pub struct AssetLoadError {
    pub path: String,
    pub reason: String,
}

impl AssetLoadError {
    pub fn new(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Loading progress of the model, as shown to the user.
///
/// `Ready` and `Failed` are terminal: later reports are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AssetState {
    #[default]
    Loading,
    Ready,
    Failed(AssetLoadError),
}

impl AssetState {
    pub fn is_loading(&self) -> bool {
        matches!(self, AssetState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, AssetState::Ready)
    }

    pub fn error(&self) -> Option<&AssetLoadError> {
        match self {
            AssetState::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Record a successful load. Returns `true` if the state changed.
    pub fn mark_ready(&mut self) -> bool {
        if self.is_loading() {
            *self = AssetState::Ready;
            true
        } else {
            false
        }
    }

    /// Record a failed load. Returns `true` if the state changed.
    pub fn mark_failed(&mut self, err: AssetLoadError) -> bool {
        if self.is_loading() {
            *self = AssetState::Failed(err);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_to_ready() {
        let mut state = AssetState::default();
        assert!(state.is_loading());
        assert!(state.mark_ready());
        assert!(state.is_ready());
        assert!(!state.mark_ready());
    }

    #[test]
    fn test_failure_is_terminal() {
        let mut state = AssetState::default();
        let err = AssetLoadError::new("scene.gltf", "not found");
        assert!(state.mark_failed(err.clone()));
        assert_eq!(state.error(), Some(&err));
        assert!(!state.mark_ready());
        assert_eq!(state.error(), Some(&err));
    }

    #[test]
    fn test_ready_ignores_late_failure() {
        let mut state = AssetState::default();
        state.mark_ready();
        assert!(!state.mark_failed(AssetLoadError::new("scene.gltf", "late")));
        assert!(state.is_ready());
    }

    #[test]
    fn test_error_message_names_asset() {
        let err = AssetLoadError::new("models/pot.glb", "invalid glTF");
        assert_eq!(err.to_string(), "Failed to load model asset models/pot.glb: invalid glTF");
    }
}
