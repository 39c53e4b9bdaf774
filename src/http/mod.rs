pub mod controllers;
pub mod error;
pub mod server;
pub mod util;

pub use error::Error;
pub use server::run;
