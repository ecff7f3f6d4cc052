// Resume analysis: external analyzer boundary, per-user persistence, HTTP handlers.

pub mod analyzer;
pub mod handlers;
pub mod store;
