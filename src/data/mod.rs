pub mod background;
pub mod cache;
pub mod http;
pub mod text;
pub mod vision;
