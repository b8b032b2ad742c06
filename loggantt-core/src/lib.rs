pub mod cli;
pub mod conf;
pub mod layout;
pub mod logging;
pub mod render;
pub mod timeline;
