//! View State
//!
//! Each view instance moves `loading -> ready` or `loading -> error` exactly
//! once. A new fetch needs a new view.

use serde::Serialize;

use crate::fetch::{CancellationToken, FetchError, FetchResult, ResourceClient};
use crate::models::Record;
use crate::resource::Resource;

/// Coarse status of a view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewStatus {
    Loading,
    Error,
    Ready,
}

/// State of one view instance
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "lowercase")]
pub enum ViewState<T> {
    Loading,
    Error(String),
    Ready(Vec<T>),
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        ViewState::Loading
    }
}

impl<T> ViewState<T> {
    pub fn status(&self) -> ViewStatus {
        match self {
            ViewState::Loading => ViewStatus::Loading,
            ViewState::Error(_) => ViewStatus::Error,
            ViewState::Ready(_) => ViewStatus::Ready,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, ViewState::Loading)
    }

    /// Ready with no records
    pub fn is_empty(&self) -> bool {
        matches!(self, ViewState::Ready(items) if items.is_empty())
    }

    pub fn records(&self) -> Option<&[T]> {
        match self {
            ViewState::Ready(items) => Some(items),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Apply the outcome of the fetch.
    ///
    /// Returns `false` without changing anything when the state is already
    /// terminal or the fetch was cancelled.
    pub fn complete(&mut self, result: FetchResult<Vec<T>>) -> bool {
        if self.is_terminal() {
            return false;
        }

        *self = match result {
            Ok(items) => ViewState::Ready(items),
            Err(FetchError::Cancelled) => return false,
            Err(err) => ViewState::Error(error_message(&err)),
        };
        true
    }
}

/// Non-empty display message for a failed fetch
fn error_message(err: &FetchError) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        "Failed to load data".to_string()
    } else {
        message
    }
}

/// A view bound to one fetch of one resource.
///
/// Dropping the view cancels its token, aborting a fetch still in flight.
#[derive(Debug)]
pub struct ResourceView<R> {
    resource: Resource,
    state: ViewState<R>,
    token: CancellationToken,
}

impl<R: Record> ResourceView<R> {
    pub fn new(resource: Resource) -> Self {
        Self::with_token(resource, CancellationToken::new())
    }

    /// Share an externally owned token, e.g. one tied to an HTTP request
    pub fn with_token(resource: Resource, token: CancellationToken) -> Self {
        Self {
            resource,
            state: ViewState::Loading,
            token,
        }
    }

    pub fn resource(&self) -> Resource {
        self.resource
    }

    pub fn state(&self) -> &ViewState<R> {
        &self.state
    }

    pub fn into_state(mut self) -> ViewState<R> {
        std::mem::take(&mut self.state)
    }

    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    /// Run the view's single fetch and record the outcome
    pub async fn load(&mut self, client: &ResourceClient) -> &ViewState<R> {
        if self.state.is_terminal() {
            return &self.state;
        }

        let result = client.fetch_records(self.resource, &self.token).await;
        if let Err(err) = &result {
            if !err.is_cancelled() {
                tracing::error!(resource = %self.resource, error = %err, "Failed to load view");
            }
        }

        self.state.complete(result);
        &self.state
    }
}

impl<R> Drop for ResourceView<R> {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Team;
    use serde_json::json;

    #[test]
    fn test_loading_to_ready() {
        let mut state: ViewState<u32> = ViewState::default();
        assert_eq!(state.status(), ViewStatus::Loading);

        assert!(state.complete(Ok(vec![1, 2])));
        assert_eq!(state.status(), ViewStatus::Ready);
        assert_eq!(state.records(), Some(&[1, 2][..]));
        assert!(!state.is_empty());
    }

    #[test]
    fn test_loading_to_error() {
        let mut state: ViewState<u32> = ViewState::Loading;
        let err = FetchError::Status {
            status: 404,
            body: String::new(),
        };

        assert!(state.complete(Err(err)));
        assert_eq!(state.status(), ViewStatus::Error);
        assert_eq!(state.error(), Some("HTTP error! status: 404"));
        assert_eq!(state.records(), None);
    }

    #[test]
    fn test_terminal_states_do_not_change() {
        let mut state: ViewState<u32> = ViewState::Loading;
        state.complete(Ok(vec![]));
        assert!(state.is_empty());

        assert!(!state.complete(Err(FetchError::Transport("late".into()))));
        assert_eq!(state.status(), ViewStatus::Ready);

        let mut failed: ViewState<u32> = ViewState::Error("first".into());
        assert!(!failed.complete(Ok(vec![1])));
        assert_eq!(failed.error(), Some("first"));
    }

    #[test]
    fn test_cancelled_fetch_stays_loading() {
        let mut state: ViewState<u32> = ViewState::Loading;
        assert!(!state.complete(Err(FetchError::Cancelled)));
        assert_eq!(state.status(), ViewStatus::Loading);
    }

    #[test]
    fn test_serialized_shape() {
        let ready: ViewState<u32> = ViewState::Ready(vec![7]);
        assert_eq!(
            serde_json::to_value(&ready).unwrap(),
            json!({"status": "ready", "data": [7]})
        );

        let error: ViewState<u32> = ViewState::Error("HTTP error! status: 500".into());
        assert_eq!(
            serde_json::to_value(&error).unwrap(),
            json!({"status": "error", "data": "HTTP error! status: 500"})
        );
    }

    #[test]
    fn test_drop_cancels_token() {
        let view = ResourceView::<Team>::new(Resource::Teams);
        let token = view.token().clone();
        assert!(!token.is_cancelled());
        drop(view);
        assert!(token.is_cancelled());
    }
}
