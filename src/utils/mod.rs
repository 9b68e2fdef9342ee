pub mod colors;
pub mod logging;
