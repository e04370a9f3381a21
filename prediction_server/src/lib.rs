pub mod client;
pub mod config;
pub mod error;
pub mod extract;
pub mod logger;
pub mod server;

pub use server::{AppState, Server, create_router};
