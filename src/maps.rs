use serde::Deserialize;
use url::Url;

const SEARCH_BASE: &str = "https://www.google.com/maps/search/";

#[derive(Clone, Debug, Deserialize)]
pub struct MapLinkConfig {
    /// Appended to the place text to anchor the search to the
    /// destination city.
    #[serde(default = "default_query_suffix")]
    pub query_suffix: String,
    /// Places containing any of these substrings get no link; flights
    /// have nothing useful to point a map at.
    #[serde(default = "default_skip_markers")]
    pub skip_markers: Vec<String>,
}

fn default_query_suffix() -> String {
    "Budapest".to_string()
}

fn default_skip_markers() -> Vec<String> {
    vec!["Vuelo".to_string()]
}

impl Default for MapLinkConfig {
    fn default() -> Self {
        Self {
            query_suffix: default_query_suffix(),
            skip_markers: default_skip_markers(),
        }
    }
}

pub fn search_url(place: &str, config: &MapLinkConfig) -> String {
    let mut url = Url::parse(SEARCH_BASE).unwrap();
    url.query_pairs_mut()
        .append_pair("api", "1")
        .append_pair("query", &format!("{} {}", place, config.query_suffix));
    url.into()
}

/// Map link for a place field, or `None` when the value is empty, the
/// `-` placeholder, or matches a skip marker.
pub fn link_for(place: &str, config: &MapLinkConfig) -> Option<String> {
    if place.is_empty() || place == "-" {
        return None;
    }
    if config
        .skip_markers
        .iter()
        .any(|marker| place.contains(marker))
    {
        return None;
    }
    Some(search_url(place, config))
}
