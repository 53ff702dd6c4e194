/// Generation constants and runtime configuration defaults
pub mod configuration;
/// Error taxonomy for catalog validation and generation
pub mod error;
