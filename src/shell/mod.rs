// Composition root for the receipts module.
//
// Responsibilities
// - Read config from the environment.
// - Wire the in-memory store and scanner into the use case handlers.
// - Spawn the tool call worker and expose HTTP and GraphQL over the same state.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
pub mod workers;
