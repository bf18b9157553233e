use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &[u8] = include_bytes!("feedbackdb.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub db: Option<Db>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg_string = std::str::from_utf8(DEFAULT_CONFIG_FILE).expect("UTF-8 default configuration");
        toml::from_str(cfg_string).expect("Default configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Db {
    pub connection_sqlite: String,
    pub connection_pool_size: u8,
}

impl Default for Db {
    fn default() -> Self {
        Config::default().db.expect("DB configuration")
    }
}
