//! wikiwalk - random walks across Wikipedia.
//!
//! Starting from a language edition's main page, a walk follows randomly
//! chosen article links for a bounded number of hops and reports the final
//! article together with the path taken.

pub mod cli;
pub mod config;
pub mod http_client;
pub mod languages;
pub mod server;
pub mod utils;
pub mod walk;
