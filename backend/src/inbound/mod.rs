//! Inbound adapters that translate HTTP requests into storage port calls
//! while keeping framework details at the edge.

pub mod http;
