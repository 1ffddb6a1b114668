pub mod error;
pub mod handlers;
pub mod logger;
pub mod router;
pub mod state;
