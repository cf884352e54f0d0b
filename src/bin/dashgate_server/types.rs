use super::*;

#[derive(Clone, Debug, Default)]
pub(crate) struct Viewer {
    pub(crate) user: Option<User>,

    // Forwarded to upstream calls made on the viewer's behalf.
    pub(crate) token: Option<String>,
}

impl Viewer {
    pub(crate) fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }
}

pub(crate) struct AppState {
    pub(crate) gate: SessionGate<UpstreamClient>,
    pub(crate) cookie: CookieSettings,
    pub(crate) metrics: Metrics,
}

impl AppState {
    pub(crate) fn upstream(&self) -> &UpstreamClient {
        self.gate.verifier()
    }

    /// Counts a failed upstream call and passes the result through.
    pub(crate) fn observe<T>(&self, result: Result<T, UpstreamError>) -> Result<T, UpstreamError> {
        if result.is_err() {
            self.metrics.upstream_error();
        }
        result
    }
}
