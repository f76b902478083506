//! Content-addressed persistence for assembled contexts (C8). Each saved
//! context is two files under `<root>/.ivo/contexts/`: `<id>.xml` (the
//! assembled body, opaque to this module) and `<id>.meta.json`
//! (the [`ivo_protocol::ContextMeta`]). `id` is the first 7 hex
//! characters of `SHA-256(content)` -- collision-indifferent, since the
//! body already lives in the file and matching by prefix is a git-style
//! convenience rather than a uniqueness guarantee.

use crate::error::context_error;
use crate::error::ContextError;
use crate::error::Result;
use ivo_protocol::ContextMeta;
use sha2::Digest;
use sha2::Sha256;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

/// Number of leading hex characters of the content hash used as the id.
const ID_PREFIX_LEN: usize = 7;

/// Compute the content-addressed id for `content` (§4.8, §8).
pub fn generate_context_id(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let digest = hasher.finalize();
    let hex: String = digest.iter().map(|byte| format!("{byte:02x}")).collect();
    hex[..ID_PREFIX_LEN].to_string()
}

/// Disk-backed store rooted at `<root>/.ivo/contexts/`.
pub struct ContextStore {
    dir: PathBuf,
}

impl ContextStore {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self { dir: root.as_ref().join(".ivo").join("contexts") }
    }

    fn body_path(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{id}.xml"))
    }

    fn meta_path(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{id}.meta.json"))
    }

    /// Save `content` under its content-derived id, writing the body
    /// then the metadata -- best-effort durability, no cross-process
    /// locking (§5).
    pub fn save(&self, content: &str, task: impl Into<String>, files: Vec<String>, tokens: u64, budget: u64, pinned: bool) -> Result<ContextMeta> {
        fs::create_dir_all(&self.dir)?;
        let id = generate_context_id(content);
        let meta = ContextMeta {
            id: id.clone(),
            task: task.into(),
            files,
            tokens,
            budget,
            created_at: chrono::Utc::now(),
            pinned: pinned.then_some(true),
        };

        fs::write(self.body_path(&id), content)?;
        fs::write(self.meta_path(&id), serde_json::to_vec_pretty(&meta).expect("ContextMeta always serializes"))?;
        Ok(meta)
    }

    pub fn exists(&self, id: &str) -> bool {
        self.body_path(id).is_file() && self.meta_path(id).is_file()
    }

    pub fn load(&self, id: &str) -> Result<String> {
        fs::read_to_string(self.body_path(id)).map_err(|source| self.not_found_or_io(id, source))
    }

    pub fn load_meta(&self, id: &str) -> Result<ContextMeta> {
        let raw = fs::read_to_string(self.meta_path(id)).map_err(|source| self.not_found_or_io(id, source))?;
        serde_json::from_str(&raw).map_err(|source| context_error::MetaParseSnafu { id: id.to_string(), source }.build())
    }

    fn not_found_or_io(&self, id: &str, source: std::io::Error) -> ContextError {
        if source.kind() == std::io::ErrorKind::NotFound {
            context_error::NotFoundSnafu { id: id.to_string() }.build()
        } else {
            ContextError::from(source)
        }
    }

    /// All saved contexts, sorted by `createdAt` descending. Entries
    /// whose metadata fails to parse are skipped rather than failing the
    /// whole listing.
    pub fn list(&self) -> Result<Vec<ContextMeta>> {
        let Ok(entries) = fs::read_dir(&self.dir) else {
            return Ok(Vec::new());
        };
        let mut metas = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else { continue };
            let Some(id) = name.strip_suffix(".meta.json") else { continue };
            if let Ok(meta) = self.load_meta(id) {
                metas.push(meta);
            }
        }
        metas.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(metas)
    }

    /// Resolve a (possibly partial) id prefix to its unique match, or
    /// `None` if nothing matches. Ambiguous prefixes are an error.
    pub fn find_by_prefix(&self, partial: &str) -> Result<Option<ContextMeta>> {
        let matches: Vec<ContextMeta> = self.list()?.into_iter().filter(|meta| meta.id.starts_with(partial)).collect();
        match matches.len() {
            0 => Ok(None),
            1 => Ok(matches.into_iter().next()),
            _ => Err(context_error::AmbiguousPrefixSnafu { prefix: partial.to_string() }.build()),
        }
    }

    pub fn pin(&self, id: &str) -> Result<ContextMeta> {
        self.set_pinned(id, true)
    }

    pub fn unpin(&self, id: &str) -> Result<ContextMeta> {
        self.set_pinned(id, false)
    }

    fn set_pinned(&self, id: &str, pinned: bool) -> Result<ContextMeta> {
        let mut meta = self.load_meta(id)?;
        meta.pinned = pinned.then_some(true);
        fs::write(self.meta_path(id), serde_json::to_vec_pretty(&meta).expect("ContextMeta always serializes"))?;
        Ok(meta)
    }

    /// Delete unpinned entries older than `max_age_ms` or beyond
    /// `max_count` among the newest-first unpinned entries. Pinned
    /// entries are never deleted.
    pub fn cleanup(&self, max_age_ms: i64, max_count: usize) -> Result<usize> {
        let all = self.list()?;
        let now = chrono::Utc::now();
        let mut unpinned: Vec<&ContextMeta> = all.iter().filter(|meta| meta.pinned != Some(true)).collect();
        unpinned.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let mut removed = 0;
        for (index, meta) in unpinned.iter().enumerate() {
            let age_ms = (now - meta.created_at).num_milliseconds();
            let too_old = age_ms > max_age_ms;
            let beyond_count = index >= max_count;
            if too_old || beyond_count {
                let _ = fs::remove_file(self.body_path(&meta.id));
                let _ = fs::remove_file(self.meta_path(&meta.id));
                removed += 1;
            }
        }
        Ok(removed)
    }
}

#[cfg(test)]
#[path = "store.test.rs"]
mod tests;
