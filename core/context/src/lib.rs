//! The context slicer (C7) and the content-addressed context store (C8).
//!
//! `ivo-context` owns the budget-aware planning/packing pipeline that
//! turns a task description into a serializable `ContextResult`, plus
//! the narrow collaborator traits (`CodemapExtractor`, `ImportResolver`,
//! `SearchBackend`) and shared helpers (`list_repo_files`,
//! `expand_keywords`, the import graph's `bfs`) that `ivo-retrieval`'s
//! strategies (C6) execute against. It does not implement any strategy
//! itself.

mod error;
mod import_graph;
mod keywords;
mod repo_files;
mod slicer;
mod store;
mod strategy;
mod traits;

pub use error::ContextError;
pub use error::Result;
pub use import_graph::build_import_graph;
pub use import_graph::bfs;
pub use import_graph::ImportGraph;
pub use keywords::expand_keywords;
pub use keywords::extract_raw_keywords;
pub use repo_files::list_repo_files;
pub use repo_files::resolve as resolve_repo_path;
pub use slicer::Slicer;
pub use store::generate_context_id;
pub use store::ContextStore;
pub use strategy::Strategy;
pub use strategy::StrategyContext;
pub use strategy::StrategyOutput;
pub use traits::ClassInfo;
pub use traits::Codemap;
pub use traits::CodemapExtractor;
pub use traits::FunctionInfo;
pub use traits::ImportResolver;
pub use traits::SearchBackend;
pub use traits::SearchMatch;
pub use traits::SearchOptions;
pub use traits::TypeInfo;
pub use traits::TypeKind;
