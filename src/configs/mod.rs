pub mod mongo;

pub const APP_NAME: &str = "backendchat-seed";
pub const DATABASE: &str = "backendchat_chat";
pub const MESSAGES_COLLECTION: &str = "messages";
