//! Route paths.

pub const GET_API_HEALTH: &str = "/api/health";
pub const GET_API_CHAT_INTRO: &str = "/api/chat/intro";
pub const POST_API_CHAT_MESSAGE: &str = "/api/chat/message";
pub const POST_API_CHAT_AI: &str = "/api/chat/ai";
