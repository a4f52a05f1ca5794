/// Lifecycle of a remote resource.
///
/// Loading and failure are mutually exclusive, and the last good value is
/// carried through both so the view can keep showing it.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Idle,
    Loading {
        previous: Option<T>,
    },
    Ready(T),
    Failed {
        message: String,
        previous: Option<T>,
    },
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Idle
    }
}

impl<T> FetchState<T> {
    /// Most recent successfully loaded value, if any
    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Idle => None,
            FetchState::Ready(value) => Some(value),
            FetchState::Loading { previous } | FetchState::Failed { previous, .. } => {
                previous.as_ref()
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading { .. })
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Move into `Loading`, keeping whatever data was shown
    pub fn start_loading(&mut self) {
        let previous = self.take_data();
        *self = FetchState::Loading { previous };
    }

    pub fn succeed(&mut self, value: T) {
        *self = FetchState::Ready(value);
    }

    /// Move into `Failed`, keeping whatever data was shown
    pub fn fail(&mut self, message: impl Into<String>) {
        let previous = self.take_data();
        *self = FetchState::Failed {
            message: message.into(),
            previous,
        };
    }

    fn take_data(&mut self) -> Option<T> {
        match std::mem::replace(self, FetchState::Idle) {
            FetchState::Idle => None,
            FetchState::Ready(value) => Some(value),
            FetchState::Loading { previous } | FetchState::Failed { previous, .. } => previous,
        }
    }
}
