//! User interface modules for the toggle demo

pub mod demo;
pub mod theme;

pub use demo::DemoPlugin;
