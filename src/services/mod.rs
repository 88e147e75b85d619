pub mod inference;
pub mod relay;
pub mod store;
