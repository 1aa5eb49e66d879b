use crate::api::routes::ApiRoute;
use crate::error::CoreResult;
use url::Url;

pub const API_URL_ENV: &str = "OUTREACH_API_URL";
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: Url,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> CoreResult<Self> {
        let mut base_url = Url::parse(base_url.trim())?;
        // Url::join replaces the last segment unless the base ends in '/'.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self { base_url })
    }

    /// Base URL from `OUTREACH_API_URL`, or the local development server.
    pub fn from_env() -> CoreResult<Self> {
        match std::env::var(API_URL_ENV) {
            Ok(v) if !v.trim().is_empty() => Self::new(&v),
            _ => Self::new(DEFAULT_API_URL),
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn url_for(&self, route: &ApiRoute) -> CoreResult<Url> {
        let path = route.path();
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_join_onto_base_with_prefix() {
        let cfg = ApiConfig::new("https://api.example.org/v1").unwrap();
        let url = cfg.url_for(&ApiRoute::UpdateImpact("42".to_string())).unwrap();
        assert_eq!(url.as_str(), "https://api.example.org/v1/impact/update/42");
    }

    #[test]
    fn default_base_is_local_server() {
        let cfg = ApiConfig::new(DEFAULT_API_URL).unwrap();
        let url = cfg.url_for(&ApiRoute::ListImpacts).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/impact/getAll");
    }

    #[test]
    fn invalid_base_is_an_error() {
        assert!(ApiConfig::new("not a url").is_err());
    }
}
