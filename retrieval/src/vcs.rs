//! Git working-tree diff shelling out, feeding the `diff` strategy.
//! Mirrors the teacher's `run_git_for_stdout` shape but async, since
//! every strategy runs on the slicer's single cooperative event loop.

use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Repo-relative paths reported by `git diff --name-only HEAD` (staged
/// and unstaged changes) plus `git ls-files --others --exclude-standard`
/// (untracked files). Returns an empty list -- not an error -- when
/// `root` is not a git repository, so callers can treat "no changes" and
/// "no git" the same way (§4.6: "skip if no changes").
pub async fn changed_files(root: &Path) -> Vec<String> {
    let mut files = Vec::new();
    files.extend(run_git(root, &["diff", "--name-only", "HEAD"]).await);
    files.extend(run_git(root, &["ls-files", "--others", "--exclude-standard"]).await);
    files.sort();
    files.dedup();
    files
}

async fn run_git(root: &Path, args: &[&str]) -> Vec<String> {
    let output = Command::new("git")
        .arg("-C")
        .arg(root)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .output()
        .await;

    let Ok(output) = output else {
        debug!(?args, "git not available or failed to spawn");
        return Vec::new();
    };
    if !output.status.success() {
        debug!(?args, status = ?output.status, "git command exited non-zero, treating as no changes");
        return Vec::new();
    }
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
#[path = "vcs.test.rs"]
mod tests;
