pub mod manager;


pub use manager::{AssetSettings, LoggingSettings, ServerSettings, Settings, StorageSettings};
