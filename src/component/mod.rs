//! 功能元件模組

pub mod image_renamer;

pub use image_renamer::ImageRenamer;
