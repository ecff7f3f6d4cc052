// Skill-matching engine: normalization, job catalogs, scoring policies and ranking.
// Pure and synchronous; catalogs are immutable after load and shared across requests.

pub mod catalog;
pub mod normalizer;
pub mod policy;
pub mod scorer;
