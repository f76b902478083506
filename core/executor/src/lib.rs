//! Task state & event stream (C4) and the volley scheduler (C5): running
//! a batch of agent-loop tasks under a concurrency cap with retry and
//! timeout, and the pure reducer that turns their events into state a
//! caller can render.

mod error;
mod scheduler;
mod state;

pub use error::ExecutorError;
pub use error::Result;
pub use scheduler::BoxFuture;
pub use scheduler::EventSink;
pub use scheduler::ExecuteFn;
pub use scheduler::ExecuteOutput;
pub use scheduler::TaskFailure;
pub use scheduler::TaskOutcome;
pub use scheduler::Volley;
pub use state::apply_event;
pub use state::init_state;
pub use state::VolleyState;
