//! Services exposed by the messaging context.

mod conversation;

pub use conversation::{
    ConversationError, ConversationResult, ConversationService, PostMessageRequest, ThreadRequest,
};
