/// Log filter used when neither `RUST_LOG` nor the config sets one
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Implementation used when a provider entry names none
pub const DEFAULT_IMPLEMENTATION: &str = "dummy";
