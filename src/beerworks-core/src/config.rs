use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Endpoints holds the base URL and path templates for the remote beer API.
/// Configured once, read-only for the lifetime of the process.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Endpoints {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_beer_path")]
    pub beer_path: String,
    /// Single-resource path with one `{beerId}` segment
    #[serde(default = "default_beer_by_id_path")]
    pub beer_by_id_path: String,
    /// UPC-keyed path with one `{upc}` segment
    #[serde(default = "default_beer_by_upc_path")]
    pub beer_by_upc_path: String,
}

fn default_base_url() -> String {
    "http://api.springframework.guru".to_string()
}

fn default_beer_path() -> String {
    "/api/v1/beer".to_string()
}

fn default_beer_by_id_path() -> String {
    "/api/v1/beer/{beerId}".to_string()
}

fn default_beer_by_upc_path() -> String {
    "/api/v1/beer/upc/{upc}".to_string()
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            beer_path: default_beer_path(),
            beer_by_id_path: default_beer_by_id_path(),
            beer_by_upc_path: default_beer_by_upc_path(),
        }
    }
}

/// Substitutes the single `{...}` segment of a path template.
fn expand(template: &str, value: &str) -> String {
    match (template.find('{'), template.rfind('}')) {
        (Some(open), Some(close)) if open < close => {
            format!("{}{}{}", &template[..open], value, &template[close + 1..])
        }
        _ => template.to_string(),
    }
}

impl Endpoints {
    /// Loads endpoint overrides from a JSON file; missing keys fall back
    /// to the defaults.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let endpoints: Endpoints = serde_json::from_str(&contents)?;
        Ok(endpoints)
    }

    /// Full URL of the collection endpoint.
    pub fn beer_url(&self) -> String {
        format!("{}{}", self.base_url, self.beer_path)
    }

    /// Full URL of the single-resource endpoint for the given id.
    pub fn beer_by_id_url(&self, id: &Uuid) -> String {
        format!(
            "{}{}",
            self.base_url,
            expand(&self.beer_by_id_path, &id.to_string())
        )
    }

    /// Full URL of the UPC-keyed endpoint for the given UPC.
    pub fn beer_by_upc_url(&self, upc: &str) -> String {
        format!("{}{}", self.base_url, expand(&self.beer_by_upc_path, upc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoints() {
        let endpoints = Endpoints::default();
        assert_eq!(endpoints.beer_url(), "http://api.springframework.guru/api/v1/beer");
    }

    #[test]
    fn test_beer_by_id_url_substitution() {
        let endpoints = Endpoints {
            base_url: "http://localhost:8080".to_string(),
            ..Endpoints::default()
        };
        let id = Uuid::parse_str("0a818933-087d-47f2-ad83-2f986ed087eb").unwrap();
        assert_eq!(
            endpoints.beer_by_id_url(&id),
            "http://localhost:8080/api/v1/beer/0a818933-087d-47f2-ad83-2f986ed087eb"
        );
    }

    #[test]
    fn test_beer_by_upc_url_substitution() {
        let endpoints = Endpoints::default();
        assert_eq!(
            endpoints.beer_by_upc_url("0631234200036"),
            "http://api.springframework.guru/api/v1/beer/upc/0631234200036"
        );
    }

    #[test]
    fn test_expand_without_placeholder() {
        assert_eq!(expand("/api/v1/beer", "x"), "/api/v1/beer");
    }

    #[test]
    fn test_overrides_keep_default_paths() {
        let endpoints: Endpoints =
            serde_json::from_str(r#"{"base_url": "http://localhost:9999"}"#).unwrap();
        assert_eq!(endpoints.base_url, "http://localhost:9999");
        assert_eq!(endpoints.beer_path, "/api/v1/beer");
    }
}
