//! Template resolution state machine.
//!
//! Resolving a template key into a renderable page is asynchronous; the
//! machine tracks the outcome and guards against stale completions. There is
//! no true cancellation (an in-flight load cannot be aborted), so each
//! `request` bumps a generation counter and completions carry the token they
//! were issued with. Only the token matching the current generation commits:
//! the last request for the current key wins, and every earlier in-flight
//! load becomes a no-op.

use crate::model::template::TemplateKey;

/// Where resolution currently stands. `Ready` and `Failed` are stable until
/// the next request.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolveState<R> {
    Idle,
    Loading(TemplateKey),
    Ready(TemplateKey, R),
    Failed(TemplateKey),
}

/// Opaque proof that a completion belongs to a specific request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

#[derive(Debug)]
pub struct TemplateResolver<R> {
    state: ResolveState<R>,
    generation: u64,
}

impl<R> Default for TemplateResolver<R> {
    fn default() -> Self {
        TemplateResolver {
            state: ResolveState::Idle,
            generation: 0,
        }
    }
}

impl<R> TemplateResolver<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enters `Loading(key)` from any state and returns the token the
    /// eventual completion must present.
    pub fn request(&mut self, key: TemplateKey) -> RequestToken {
        self.generation += 1;
        self.state = ResolveState::Loading(key);
        RequestToken(self.generation)
    }

    /// Commits a successful load. Returns `false` (and changes nothing) when
    /// the token is stale, i.e. a newer request superseded this one.
    pub fn succeed(&mut self, token: RequestToken, renderer: R) -> bool {
        if token.0 != self.generation {
            return false;
        }
        if let ResolveState::Loading(key) = &self.state {
            self.state = ResolveState::Ready(key.clone(), renderer);
            true
        } else {
            false
        }
    }

    /// Commits a failed load, with the same staleness guard as [`succeed`].
    ///
    /// [`succeed`]: TemplateResolver::succeed
    pub fn fail(&mut self, token: RequestToken) -> bool {
        if token.0 != self.generation {
            return false;
        }
        if let ResolveState::Loading(key) = &self.state {
            self.state = ResolveState::Failed(key.clone());
            true
        } else {
            false
        }
    }

    pub fn state(&self) -> &ResolveState<R> {
        &self.state
    }

    /// The renderer, when resolution has succeeded for the current key.
    pub fn renderer(&self) -> Option<&R> {
        match &self.state {
            ResolveState::Ready(_, renderer) => Some(renderer),
            _ => None,
        }
    }

    /// The key the machine is currently tracking, in any non-idle state.
    pub fn current_key(&self) -> Option<&TemplateKey> {
        match &self.state {
            ResolveState::Idle => None,
            ResolveState::Loading(key)
            | ResolveState::Ready(key, _)
            | ResolveState::Failed(key) => Some(key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_enters_loading() {
        let mut resolver: TemplateResolver<&str> = TemplateResolver::new();
        resolver.request(TemplateKey::Model1);
        assert_eq!(
            resolver.state(),
            &ResolveState::Loading(TemplateKey::Model1)
        );
    }

    #[test]
    fn success_commits_for_the_current_request() {
        let mut resolver = TemplateResolver::new();
        let token = resolver.request(TemplateKey::Model1);
        assert!(resolver.succeed(token, "page-1"));
        assert_eq!(resolver.renderer(), Some(&"page-1"));
        assert_eq!(resolver.current_key(), Some(&TemplateKey::Model1));
    }

    #[test]
    fn stale_result_never_overwrites_a_newer_request() {
        // request(A) then request(B); A resolves after B.
        let mut resolver = TemplateResolver::new();
        let token_a = resolver.request(TemplateKey::Model1);
        let token_b = resolver.request(TemplateKey::Model2);

        assert!(resolver.succeed(token_b, "page-2"));
        assert!(!resolver.succeed(token_a, "page-1"));

        assert_eq!(resolver.renderer(), Some(&"page-2"));
        assert_eq!(resolver.current_key(), Some(&TemplateKey::Model2));
    }

    #[test]
    fn stale_failure_is_a_no_op_too() {
        let mut resolver = TemplateResolver::new();
        let token_a = resolver.request(TemplateKey::Model1);
        let token_b = resolver.request(TemplateKey::Model2);

        assert!(resolver.succeed(token_b, "page-2"));
        assert!(!resolver.fail(token_a));
        assert_eq!(resolver.renderer(), Some(&"page-2"));
    }

    #[test]
    fn unknown_key_fails_and_never_reaches_ready() {
        let mut resolver: TemplateResolver<&str> = TemplateResolver::new();
        let key = TemplateKey::parse("model_99");
        let token = resolver.request(key.clone());
        assert!(resolver.fail(token));
        assert_eq!(resolver.state(), &ResolveState::Failed(key));
        assert!(resolver.renderer().is_none());
    }

    #[test]
    fn failed_is_stable_until_the_next_request() {
        let mut resolver = TemplateResolver::new();
        let token = resolver.request(TemplateKey::Model3);
        assert!(resolver.fail(token));

        // a late duplicate completion changes nothing
        assert!(!resolver.succeed(token, "late"));
        assert_eq!(
            resolver.state(),
            &ResolveState::Failed(TemplateKey::Model3)
        );

        let token = resolver.request(TemplateKey::Model3);
        assert!(resolver.succeed(token, "retry"));
        assert_eq!(resolver.renderer(), Some(&"retry"));
    }
}
