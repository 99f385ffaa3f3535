mod client;
mod dto;

pub use client::*;
pub use dto::*;
