use serde::Deserialize;

use common::{config::load_config, log_debug};

pub const CONFIG_FILE_NAME: &str = "numconv.toml";
pub const ENV_PREFIX: &str = "NUMCONV";

const KEY_PAUSE: &str = "pause";

#[derive(Debug, Clone, Deserialize)]
pub struct DemoConfig {
    /// Whether to wait for a line on stdin before exiting.
    #[serde(default = "default_pause")]
    pub pause: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            pause: default_pause(),
        }
    }
}

fn default_pause() -> bool {
    true
}

impl TryFrom<::config::Config> for DemoConfig {
    type Error = ::config::ConfigError;

    fn try_from(value: ::config::Config) -> Result<Self, Self::Error> {
        let config: DemoConfig = value.try_deserialize()?;
        log_debug!("Loaded configurations: {:?}", config);
        Ok(config)
    }
}

impl DemoConfig {
    pub fn load() -> Result<Self, ::config::ConfigError> {
        Self::load_from(CONFIG_FILE_NAME, ENV_PREFIX)
    }

    pub fn load_from(file_name: &str, env_prefix: &str) -> Result<Self, ::config::ConfigError> {
        load_config(file_name, env_prefix, |builder| {
            builder.set_default(KEY_PAUSE, default_pause())
        })
        .and_then(TryInto::try_into)
    }
}
