pub mod interface;
pub mod sessions;
