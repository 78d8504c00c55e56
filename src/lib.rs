pub mod app;
pub mod charge;
pub mod config;
pub mod field;
pub mod vec2;
