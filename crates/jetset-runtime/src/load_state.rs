use crate::fetch::FetchError;

/// Lifecycle of the one-shot feed load.
///
/// Starts in `Loading` and makes exactly one forward transition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded,
    Failed(FetchError),
}

impl LoadState {
    /// Apply the load result. Returns `false` (and changes nothing) if the
    /// state has already left `Loading`.
    pub fn resolve(&mut self, result: Result<(), FetchError>) -> bool {
        if !self.is_loading() {
            return false;
        }
        *self = match result {
            Ok(()) => LoadState::Loaded,
            Err(err) => LoadState::Failed(err),
        };
        true
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadState::Loaded)
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            LoadState::Failed(err) => Some(err),
            _ => None,
        }
    }
}
