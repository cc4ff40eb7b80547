pub mod adjacency;
pub mod config;
pub mod error;
pub mod explorer;
pub mod ids;
pub mod resolver;
pub mod snapshot;
pub mod solve;

#[cfg(test)]
mod tests;
