pub mod gui;
pub mod help;
pub mod items;
pub mod pick;
pub mod resolve;
pub mod simulate;

pub use crate::cli::Commands;
