pub mod constants;
pub mod descriptor;
pub mod face;
pub mod frame;
pub mod rectangle;
