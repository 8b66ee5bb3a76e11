//! Network layer - search request execution
//!
//! The Network actor receives search commands and sends back responses.

pub mod actor;
pub mod client;
pub mod transport;

pub use actor::NetworkActor;
pub use client::SearchClient;
pub use transport::{HttpTransport, SearchTransport};
