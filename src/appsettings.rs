use config::{Config, ConfigError, Environment, File};
use remindly_models::settings::Settings;

/// Reads `appsettings`, then `appsettings.local`, then `APP_*` variables (nested with `__`).
pub fn load() -> Result<Settings, ConfigError> {
    let settings = Config::builder()
        .set_default("api.user_id", "default-user")?
        .set_default("timezone", "UTC")?
        .set_default("refresh_interval_secs", 30_i64)?
        .add_source(File::with_name("appsettings").required(true))
        .add_source(File::with_name("appsettings.local").required(false))
        .add_source(
            Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize()
}
