use serde::{Deserialize, Serialize};

// ============ Domain types ============

/// One country as returned by the name-search endpoint.
///
/// Records are immutable once fetched; the renderer only reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryRecord {
    /// Common (display) name, e.g. `"France"`.
    pub common_name: String,
    /// Official name, e.g. `"French Republic"`.
    pub official_name: String,
    /// Capital cities. May be empty.
    pub capital: Vec<String>,
    /// Population as reported by the service.
    pub population: u64,
    /// URL of the flag image.
    pub flag_image_url: String,
    /// `(code, name)` pairs in the order the service sent them.
    pub languages: Vec<(String, String)>,
}

impl CountryRecord {
    /// First capital, if the service listed any.
    pub fn primary_capital(&self) -> Option<&str> {
        self.capital.first().map(String::as_str)
    }

    /// Language names in source order.
    pub fn language_names(&self) -> impl Iterator<Item = &str> {
        self.languages.iter().map(|(_, name)| name.as_str())
    }
}

/// Ordered search result. An empty vector means "no matches", which is not
/// an error.
pub type SearchResult = Vec<CountryRecord>;

// ============ Wire types ============

/// Raw country object of the `/v3/name/{name}` endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct RestCountry {
    pub name: RestCountryName,
    #[serde(default)]
    pub capital: Vec<String>,
    #[serde(default)]
    pub population: u64,
    #[serde(default)]
    pub flags: Option<RestFlags>,
    #[serde(default)]
    pub languages: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RestCountryName {
    pub common: String,
    #[serde(default)]
    pub official: String,
}

/// v3 sends an array of image URLs, v3.1 an object keyed by format.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum RestFlags {
    List(Vec<String>),
    Formats {
        png: Option<String>,
        svg: Option<String>,
    },
}

impl RestFlags {
    fn primary(self) -> Option<String> {
        match self {
            Self::List(urls) => urls.into_iter().next(),
            Self::Formats { png, svg } => png.or(svg),
        }
    }
}

impl From<RestCountry> for CountryRecord {
    fn from(raw: RestCountry) -> Self {
        let languages = raw
            .languages
            .into_iter()
            .map(|(code, value)| {
                let name = value
                    .as_str()
                    .map_or_else(|| value.to_string(), str::to_string);
                (code, name)
            })
            .collect();

        Self {
            common_name: raw.name.common,
            official_name: raw.name.official,
            capital: raw.capital,
            population: raw.population,
            flag_image_url: raw.flags.and_then(RestFlags::primary).unwrap_or_default(),
            languages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Vec<CountryRecord> {
        let raw: Vec<RestCountry> = serde_json::from_str(json).unwrap_or_default();
        raw.into_iter().map(CountryRecord::from).collect()
    }

    #[test]
    fn maps_v3_payload() {
        let records = parse(
            r#"[{
                "name": {"common": "Canada", "official": "Canada", "nativeName": {}},
                "capital": ["Ottawa"],
                "population": 38005238,
                "flags": ["https://flagcdn.com/ca.svg", "https://flagcdn.com/w320/ca.png"],
                "languages": {"eng": "English", "fra": "French"}
            }]"#,
        );

        assert_eq!(records.len(), 1);
        let canada = &records[0];
        assert_eq!(canada.common_name, "Canada");
        assert_eq!(canada.primary_capital(), Some("Ottawa"));
        assert_eq!(canada.population, 38_005_238);
        assert_eq!(canada.flag_image_url, "https://flagcdn.com/ca.svg");
        assert_eq!(
            canada.language_names().collect::<Vec<_>>(),
            vec!["English", "French"]
        );
    }

    #[test]
    fn keeps_language_order_from_source() {
        let records = parse(
            r#"[{
                "name": {"common": "Switzerland", "official": "Swiss Confederation"},
                "capital": ["Bern"],
                "population": 8654622,
                "flags": [],
                "languages": {"gsw": "Swiss German", "fra": "French", "ita": "Italian", "roh": "Romansh"}
            }]"#,
        );

        assert_eq!(
            records[0].language_names().collect::<Vec<_>>(),
            vec!["Swiss German", "French", "Italian", "Romansh"]
        );
    }

    #[test]
    fn missing_optional_fields_default_to_empty() {
        let records = parse(
            r#"[{
                "name": {"common": "Antarctica", "official": "Antarctica"},
                "population": 1000
            }]"#,
        );

        let antarctica = &records[0];
        assert!(antarctica.capital.is_empty());
        assert_eq!(antarctica.primary_capital(), None);
        assert!(antarctica.languages.is_empty());
        assert_eq!(antarctica.flag_image_url, "");
    }

    #[test]
    fn accepts_v31_flag_object() {
        let records = parse(
            r#"[{
                "name": {"common": "Peru", "official": "Republic of Peru"},
                "capital": ["Lima"],
                "population": 32971846,
                "flags": {"png": "https://flagcdn.com/w320/pe.png", "svg": "https://flagcdn.com/pe.svg"},
                "languages": {"aym": "Aymara", "que": "Quechua", "spa": "Spanish"}
            }]"#,
        );

        assert_eq!(records[0].flag_image_url, "https://flagcdn.com/w320/pe.png");
    }
}
