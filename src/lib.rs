pub mod command;
pub mod config;
pub mod console;
pub mod error;
pub mod list;

pub use command::{Choice, Command};
pub use config::Config;
pub use console::{Console, Flow};
pub use error::{Error, Result};
pub use list::List;
