//! Per-execution context threaded into every tool call.

use std::path::Path;
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;

/// State a tool's `execute`/`check_permission` may need: where it runs,
/// whether the caller has opted out of permission gating, and the
/// cooperative cancellation token for the in-flight call.
#[derive(Debug, Clone)]
pub struct ToolContext {
    working_dir: PathBuf,
    unrestricted: bool,
    cancel_token: CancellationToken,
}

impl ToolContext {
    pub fn new(working_dir: impl Into<PathBuf>, cancel_token: CancellationToken) -> Self {
        Self {
            working_dir: working_dir.into(),
            unrestricted: false,
            cancel_token,
        }
    }

    pub fn with_unrestricted(mut self, unrestricted: bool) -> Self {
        self.unrestricted = unrestricted;
        self
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Whether policy decisions should be skipped. The registry does not
    /// interpret this flag itself; it is plumbed through for tools that
    /// make their own permission decisions.
    pub fn unrestricted(&self) -> bool {
        self.unrestricted
    }

    pub fn cancel_token(&self) -> &CancellationToken {
        &self.cancel_token
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }

    /// Resolve a possibly-relative path against the working directory.
    pub fn resolve(&self, path: &str) -> PathBuf {
        let candidate = Path::new(path);
        if candidate.is_absolute() {
            candidate.to_path_buf()
        } else {
            self.working_dir.join(candidate)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_joins_relative_paths() {
        let ctx = ToolContext::new("/repo", CancellationToken::new());
        assert_eq!(ctx.resolve("src/lib.rs"), PathBuf::from("/repo/src/lib.rs"));
    }

    #[test]
    fn resolve_passes_through_absolute_paths() {
        let ctx = ToolContext::new("/repo", CancellationToken::new());
        assert_eq!(ctx.resolve("/etc/hosts"), PathBuf::from("/etc/hosts"));
    }

    #[test]
    fn cancellation_is_observable() {
        let token = CancellationToken::new();
        let ctx = ToolContext::new("/repo", token.clone());
        assert!(!ctx.is_cancelled());
        token.cancel();
        assert!(ctx.is_cancelled());
    }
}
