mod canvas;

pub use canvas::{Canvas, Rect};
