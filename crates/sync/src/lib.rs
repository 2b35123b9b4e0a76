#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod log;

mod config;
mod inbox;
mod message;
mod queue;
mod transport;

pub use config::*;
pub use inbox::*;
pub use message::*;
pub use queue::*;
pub use transport::*;
