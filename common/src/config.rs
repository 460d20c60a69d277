use std::env;

use config::{
    builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File, FileFormat,
    FileStoredFormat,
};

use crate::{log_debug, log_warn};

pub const CONFIG_STR: &str = "CONFIG_STR";
pub const CONFIG_STR_FORMAT: &str = "CONFIG_STR_FMT";

/// Loads the layered configuration, later sources overriding earlier ones:
/// 1. whatever `config_builder` adds (usually defaults),
/// 2. the optional `file_name`, looked up in the ancestors of the working directory,
/// 3. an inline string given by `<PREFIX>_CONFIG_STR` in `<PREFIX>_CONFIG_STR_FMT` format,
/// 4. environment variables `<PREFIX>_<KEY>` with `__` as the nesting separator.
pub fn load_config(
    file_name: &str,
    env_prefix: &str,
    config_builder: impl FnOnce(
        ConfigBuilder<DefaultState>,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError>,
) -> Result<Config, ConfigError> {
    let mut builder = config_builder(Config::builder())?;

    let file_path = crate::utils::search_current_ancestor_dirs_for(file_name)
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| file_name.to_string());
    builder = builder.add_source(File::with_name(&file_path).required(false));

    if let Some((str, format)) = Option::zip(
        env::var(format!("{env_prefix}_{CONFIG_STR}")).ok(),
        env::var(format!("{env_prefix}_{CONFIG_STR_FORMAT}")).ok(),
    ) {
        match try_parse_format(&format) {
            Ok(format) => builder = builder.add_source(File::from_str(str.as_str(), format)),
            Err(format) => log_warn!("Unknown format for config string: {}", format),
        }
    }

    builder = builder.add_source(
        Environment::with_prefix(env_prefix)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    builder
        .build()
        .inspect(|c| log_debug!("Loaded raw configurations: {:?}", c))
}

fn try_parse_format(format: &str) -> Result<FileFormat, &str> {
    use FileFormat::*;
    [Toml, Json, Json5, Yaml, Ron, Ini]
        .into_iter()
        .find(|f| f.file_extensions().contains(&format))
        .ok_or(format)
}
