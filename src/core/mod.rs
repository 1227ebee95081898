pub mod config;
pub mod session;

pub use session::{MapSettings, Session};
