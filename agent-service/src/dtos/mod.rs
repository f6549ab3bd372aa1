//! Wire shapes for the agent HTTP API.

pub mod agent;
pub mod guest;

pub use agent::{AgentAction, AgentEvent, EventAck, ReplyResponse, ACKNOWLEDGED};
pub use guest::GuestMessageRequest;
