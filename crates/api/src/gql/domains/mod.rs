// Each domain contains: mod.rs, resolvers.rs, types.rs (plus service.rs
// where an operation spans multiple tables in one transaction).

pub mod auth;
pub mod dashboard;
pub mod players;
pub mod practises;
pub mod seasons;
pub mod tournaments;
