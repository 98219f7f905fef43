//! Types shared between the order screen and its hosts.

pub mod domain;
pub mod error;
pub mod protocol;
