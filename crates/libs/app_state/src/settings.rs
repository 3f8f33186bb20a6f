use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppSettings {
    pub api: ApiSettings,
    /// Upstream photo service (Immich-compatible).
    pub remote: RemoteSettings,
    pub mail: MailSettings,
    pub galleries: GallerySettings,
    pub featured: FeaturedSettings,
    pub portrait: PortraitSettings,
    pub site: SiteSettings,
    pub logging: LoggingSettings,
}

/// Configuration for the API server.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ApiSettings {
    pub host: String,
    pub port: u32,
    pub allowed_origins: Vec<String>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            allowed_origins: vec![],
        }
    }
}

/// Both values are required for every upstream call. They stay optional here so
/// that a missing value fails the request that needs it instead of the whole process.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct RemoteSettings {
    pub url: Option<String>,
    pub api_key: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct MailSettings {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub from: String,
    pub to: String,
}

impl Default for MailSettings {
    fn default() -> Self {
        Self {
            host: None,
            port: None,
            user: None,
            password: None,
            from: "contact@rboskind.com".to_string(),
            to: "rob@boskind.tech".to_string(),
        }
    }
}

/// A marker in an album name that publishes the album under one listing.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct GalleryPolicy {
    pub marker: String,
    #[serde(default)]
    pub case_insensitive: bool,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct GallerySettings {
    pub public: GalleryPolicy,
    pub customer: GalleryPolicy,
    /// Album shown when a requested album is not publishable.
    pub default_album_id: Option<String>,
}

impl Default for GallerySettings {
    fn default() -> Self {
        Self {
            public: GalleryPolicy {
                marker: "**".to_string(),
                case_insensitive: false,
            },
            customer: GalleryPolicy {
                marker: "*customer*".to_string(),
                case_insensitive: true,
            },
            default_album_id: None,
        }
    }
}

/// Home page photo wall.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct FeaturedSettings {
    /// Albums whose name contains one of these (case-insensitive) are featured.
    pub keywords: Vec<String>,
}

impl Default for FeaturedSettings {
    fn default() -> Self {
        Self {
            keywords: vec!["people".to_string(), "landscape".to_string()],
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct PortraitSettings {
    pub directory: PathBuf,
    pub files: [String; 2],
}

impl Default for PortraitSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("static"),
            files: ["Rob 1.jpg".to_string(), "Rob 2.jpg".to_string()],
        }
    }
}

impl PortraitSettings {
    #[must_use]
    pub fn paths(&self) -> [PathBuf; 2] {
        self.files.clone().map(|f| self.directory.join(f))
    }
}

/// Public values handed to the rendering layer.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct SiteSettings {
    pub umami_website_id: Option<String>,
}

/// Logging configuration.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
