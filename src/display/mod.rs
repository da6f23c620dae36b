pub mod brightness;
pub mod frame;
pub mod matrix;
