use crate::AppSettings;
use color_eyre::eyre::Result;
use std::path::Path;
use tracing::debug;

const SETTINGS_PATH: &str = "config/settings.yaml";

/// Resolves settings once at start: `.env`, then `config/settings.yaml` if present,
/// then `APP__SECTION__KEY` environment variables.
pub fn load_app_settings() -> Result<AppSettings> {
    dotenv::from_path(".env").ok();
    load_app_settings_from(Path::new(SETTINGS_PATH))
}

pub fn load_app_settings_from(config_path: &Path) -> Result<AppSettings> {
    load_layered(config_path, None)
}

// Environment values stay strings; numeric fields are converted on deserialize,
// so secrets such as `000777` keep their leading zeros.
fn load_layered(
    config_path: &Path,
    env: Option<config::Map<String, String>>,
) -> Result<AppSettings> {
    debug!("Loading settings from {}", config_path.display());
    let builder = config::Config::builder()
        .add_source(config::File::from(config_path).required(false))
        .add_source(
            config::Environment::with_prefix("APP")
                .separator("__")
                .source(env),
        );

    let settings = builder.build()?.try_deserialize::<AppSettings>()?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn env(vars: &[(&str, &str)]) -> Option<config::Map<String, String>> {
        Some(
            vars.iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        )
    }

    #[test]
    fn environment_overrides_file_and_keeps_secrets_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.yaml");
        fs::write(
            &path,
            "api:\n  port: 9000\nremote:\n  url: http://photos.local\n  api_key: from-file\nmail:\n  host: smtp.local\n",
        )
        .unwrap();

        let settings = load_layered(
            &path,
            env(&[
                ("APP__REMOTE__API_KEY", "000777"),
                ("APP__MAIL__PASSWORD", "0012345"),
                ("APP__MAIL__PORT", "465"),
            ]),
        )
        .unwrap();

        assert_eq!(settings.api.port, 9000);
        assert_eq!(settings.remote.url.as_deref(), Some("http://photos.local"));
        assert_eq!(settings.remote.api_key.as_deref(), Some("000777"));
        assert_eq!(settings.mail.password.as_deref(), Some("0012345"));
        assert_eq!(settings.mail.port, Some(465));
        assert_eq!(settings.mail.host.as_deref(), Some("smtp.local"));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let settings =
            load_layered(Path::new("/nonexistent/settings.yaml"), env(&[])).unwrap();
        assert_eq!(settings.logging.level, "info");
        assert!(settings.remote.api_key.is_none());
        assert_eq!(settings.mail.from, "contact@rboskind.com");
    }
}
