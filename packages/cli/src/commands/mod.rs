pub mod demo;
pub mod init;
pub mod render;

pub use demo::{demo, DemoArgs};
pub use init::{init, InitArgs};
pub use render::{preview, render, RenderArgs};
