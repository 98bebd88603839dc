pub mod constants;
pub mod layout;
pub mod markdown;
pub mod render;
