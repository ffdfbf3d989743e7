pub mod batch;
pub mod color;
pub mod rasterize;
pub mod template;
