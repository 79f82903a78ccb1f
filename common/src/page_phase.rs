//! Page-level readiness of the editor shell.
//!
//! `AuthPending -> LoadingData -> Ready` on the happy path; a negative auth
//! check lands in `Unauthenticated`, which schedules a redirect the shell
//! may still cancel if authentication arrives late or the page is torn
//! down. The display states are mutually exclusive; `Ready` is terminal
//! until the session ends.

/// Readiness of the editor page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PagePhase {
    #[default]
    AuthPending,
    LoadingData,
    Ready,
    Unauthenticated,
}

impl PagePhase {
    /// Outcome of the auth check. A positive result also recovers from
    /// `Unauthenticated` (late authentication cancels the pending
    /// redirect).
    pub fn on_auth_resolved(self, authenticated: bool) -> PagePhase {
        match (self, authenticated) {
            (PagePhase::AuthPending, true) | (PagePhase::Unauthenticated, true) => {
                PagePhase::LoadingData
            }
            (PagePhase::AuthPending, false) => PagePhase::Unauthenticated,
            (other, _) => other,
        }
    }

    /// Completion of the initial data fetch.
    pub fn on_data_loaded(self) -> PagePhase {
        match self {
            PagePhase::LoadingData => PagePhase::Ready,
            other => other,
        }
    }

    pub fn is_ready(self) -> bool {
        self == PagePhase::Ready
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path_reaches_ready() {
        let phase = PagePhase::AuthPending
            .on_auth_resolved(true)
            .on_data_loaded();
        assert_eq!(phase, PagePhase::Ready);
    }

    #[test]
    fn failed_auth_is_unauthenticated() {
        assert_eq!(
            PagePhase::AuthPending.on_auth_resolved(false),
            PagePhase::Unauthenticated
        );
    }

    #[test]
    fn late_authentication_recovers_from_unauthenticated() {
        let phase = PagePhase::AuthPending.on_auth_resolved(false);
        assert_eq!(phase.on_auth_resolved(true), PagePhase::LoadingData);
    }

    #[test]
    fn data_completion_is_ignored_outside_loading() {
        assert_eq!(PagePhase::AuthPending.on_data_loaded(), PagePhase::AuthPending);
        assert_eq!(
            PagePhase::Unauthenticated.on_data_loaded(),
            PagePhase::Unauthenticated
        );
    }

    #[test]
    fn ready_is_terminal() {
        let phase = PagePhase::Ready;
        assert_eq!(phase.on_auth_resolved(false), PagePhase::Ready);
        assert_eq!(phase.on_data_loaded(), PagePhase::Ready);
    }
}
