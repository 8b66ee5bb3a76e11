//! Network messages - communication between App and Network layers

use crate::error::SearchError;
use crate::models::Query;

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkCommand {
    /// Run one search. `id` is the generation number assigned by the app.
    Search { id: u64, query: Query },

    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkResponse {
    /// Server answered with a usable result list
    Results {
        id: u64,
        results: Vec<String>,
        time_ms: u64,
    },
    /// Any failure: transport, status, decode or shape
    Failed {
        id: u64,
        error: SearchError,
        time_ms: u64,
    },
}

impl NetworkResponse {
    /// Get the search ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::Results { id, .. } => *id,
            NetworkResponse::Failed { id, .. } => *id,
        }
    }

    pub fn time_ms(&self) -> u64 {
        match self {
            NetworkResponse::Results { time_ms, .. } => *time_ms,
            NetworkResponse::Failed { time_ms, .. } => *time_ms,
        }
    }
}
