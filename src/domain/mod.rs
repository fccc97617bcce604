// Domain layer (pure data, no framework dependencies)
pub mod models;
