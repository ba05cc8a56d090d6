mod settings;

pub use settings::{
    AuthSettings, LimitSettings, LlmSettings, LoggingSettings, ServerSettings, Settings,
    StorageSettings,
};
