pub mod settings;

pub use settings::{LegacySettings, LegacyTarget, Settings};
