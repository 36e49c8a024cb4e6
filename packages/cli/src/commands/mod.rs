pub mod export;
pub mod init;
pub mod styles;

pub use export::{export, ExportArgs};
pub use init::{init, InitArgs};
pub use styles::{styles, StylesArgs};
