use std::path::PathBuf;

use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub user_id: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct PreferenceSettings {
    pub path: PathBuf,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    pub api: ApiSettings,
    pub timezone: chrono_tz::Tz,
    pub preferences: PreferenceSettings,
    pub refresh_interval_secs: u64,
}
