mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    CorsSettings, DatabaseSettings, LoggingSettings, ServerSettings, Settings, SettingsError,
    UploadSettings,
};
