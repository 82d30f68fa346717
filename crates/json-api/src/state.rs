//! State

use std::sync::Arc;

use omahub_app::context::AppContext;

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
    pub(crate) session_cookie_name: String,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext, session_cookie_name: impl Into<String>) -> Self {
        Self {
            app,
            session_cookie_name: session_cookie_name.into(),
        }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: AppContext, session_cookie_name: &str) -> Arc<Self> {
        Arc::new(Self::new(app, session_cookie_name))
    }
}
