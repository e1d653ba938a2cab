//! Application layer shared by nookdex frontends: the settings file and the
//! repository that owns the loaded catalog.

pub mod error;
pub mod repository;
pub mod settings;

pub use error::RepositoryError;
pub use repository::{LoadState, Repository};
pub use settings::{
    DataSettings, DisplaySettings, SETTING_KEYS, Settings, load_settings, load_settings_from,
    save_settings, save_settings_to, settings_path, settings_to_string,
};
