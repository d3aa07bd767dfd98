//! Push Core Types
//!
//! Request, message, response and configuration types shared by the
//! FCM dispatch pipeline.

pub mod config;
mod error;
mod log;
mod message;
mod request;
mod response;
mod validate;

pub use config::PushConfig;
pub use error::*;
pub use log::*;
pub use message::*;
pub use request::*;
pub use response::*;
pub use validate::*;
