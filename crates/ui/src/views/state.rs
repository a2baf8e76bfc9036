use dioxus::prelude::*;
use services::LoadError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    NotSignedIn,
    LoadFailed,
}

impl ViewError {
    #[must_use]
    pub fn retryable(self) -> bool {
        matches!(self, ViewError::LoadFailed)
    }
}

impl From<LoadError> for ViewError {
    fn from(err: LoadError) -> Self {
        if err.is_retryable() {
            tracing::warn!(error = %err, "view load failed");
            ViewError::LoadFailed
        } else {
            ViewError::NotSignedIn
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: &Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::LoadFailed),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}
