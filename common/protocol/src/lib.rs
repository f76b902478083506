//! Shared vocabulary depended on by every other crate in the workspace:
//! messages, tool calls, events, task state, provider/scheduler
//! configuration, and the context-slicer data model.

mod event;
mod loop_config;
mod message;
mod provider;
mod scheduler;
mod slice;
mod tool;
mod usage;

pub use event::AgentEvent;
pub use event::StreamChunk;
pub use loop_config::LoopConfig;
pub use message::Message;
pub use message::Role;
pub use message::ToolCall;
pub use provider::AuthType;
pub use provider::ProviderConfig;
pub use provider::ProviderKind;
pub use provider::ThinkingConfig;
pub use scheduler::RetryBackoff;
pub use scheduler::SchedulerConfig;
pub use scheduler::SchedulerEvent;
pub use scheduler::TaskResult;
pub use scheduler::TaskResultStatus;
pub use scheduler::TaskState;
pub use scheduler::TaskStatus;
pub use scheduler::ToolInvocation;
pub use scheduler::ToolInvocationStatus;
pub use slice::ContextFileEntry;
pub use slice::ContextFileMode;
pub use slice::ContextMeta;
pub use slice::ContextResult;
pub use slice::Intensity;
pub use slice::Representation;
pub use slice::Sidecar;
pub use slice::SliceAlternate;
pub use slice::SliceCandidate;
pub use slice::SlicePlan;
pub use slice::SliceRequest;
pub use slice::SliceResult;
pub use slice::StrategyCap;
pub use slice::StrategyName;
pub use slice::StrategyTotals;
pub use tool::ConcurrencySafety;
pub use tool::PermissionResult;
pub use tool::ToolDefinition;
pub use tool::ToolOutput;
pub use tool::ToolResultContent;
pub use tool::ValidationError;
pub use tool::ValidationResult;
pub use usage::estimate_tokens;
pub use usage::TokenUsage;
