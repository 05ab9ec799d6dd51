pub mod color;
pub mod contrast;
pub mod cost;
pub mod form;
pub mod language;
pub mod mood;
pub mod palette;
pub mod params;
pub mod style;
pub mod typography;
