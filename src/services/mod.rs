pub mod render;
pub mod teams;
