use lexi_shared::const_config::client::{
    CLIENT_DEFAULT_API_BASE_URL, CLIENT_DEFAULT_STORAGE_FILE, CLIENT_ENV_PREFIX,
};
use std::path::{Path, PathBuf};

#[derive(serde::Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ClientSettings {
    /// Prefix of every endpoint, for example `http://localhost:5000/api`
    pub api_base_url: String,
    /// File the token and selected organization are kept in
    pub storage_path: PathBuf,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_base_url: CLIENT_DEFAULT_API_BASE_URL.to_string(),
            storage_path: CLIENT_DEFAULT_STORAGE_FILE.into(),
        }
    }
}

/// Layers from lowest to highest priority are the built in defaults, the
/// optional file at `config_file` and finally environment variables
pub fn get_configuration_from(config_file: &Path) -> Result<ClientSettings, config::ConfigError> {
    let defaults = ClientSettings::default();
    let settings = config::Config::builder()
        .set_default("api_base_url", defaults.api_base_url)?
        .set_default(
            "storage_path",
            defaults.storage_path.to_string_lossy().to_string(),
        )?
        .add_source(config::File::from(config_file).required(false))
        // Add in settings from environment variables (with a prefix of LEXI and '__' as separator)
        // E.g. `LEXI_API_BASE_URL=https://lexi.example.com/api` would set `ClientSettings.api_base_url`
        .add_source(
            config::Environment::with_prefix(CLIENT_ENV_PREFIX)
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<ClientSettings>()
}
