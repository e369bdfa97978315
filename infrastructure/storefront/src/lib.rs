pub mod cart;
pub mod client;
