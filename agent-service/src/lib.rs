//! Host Genie agent backend.
//!
//! Receives context events and reply requests from the browser extension and
//! answers them through a pluggable [`services::ReplyGenerator`].

pub mod config;
pub mod dtos;
pub mod handlers;
pub mod services;
pub mod startup;
