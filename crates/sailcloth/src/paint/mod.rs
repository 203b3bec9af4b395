//! Fill and stroke styles handed to a [`Surface`](crate::surface::Surface).

mod color;

pub use color::Color;
