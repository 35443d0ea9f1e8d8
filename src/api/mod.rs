//! Client for the dstserverlist.top REST API.

pub mod client;
pub mod model;

pub use client::ServerQueryClient;
