//! Hook invoked when the server rejects the session
//!
//! The client clears the token store on every 401 and then notifies the
//! application shell through this hook, which typically navigates to the
//! login screen. Navigation stays out of the transport layer.

use std::sync::Arc;

/// Receiver of 401 notifications
pub trait UnauthorizedHandler: Send + Sync {
    /// Called after the session has been cleared; must not block
    fn on_unauthorized(&self);
}

impl<F> UnauthorizedHandler for F
where
    F: Fn() + Send + Sync,
{
    fn on_unauthorized(&self) {
        self();
    }
}

/// Shared handle stored by the client
pub type SharedUnauthorizedHandler = Arc<dyn UnauthorizedHandler>;
