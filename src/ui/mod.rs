pub mod list;
pub mod messages;
