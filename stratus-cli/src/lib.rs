pub mod client;
pub mod manager;
pub mod protocol;
