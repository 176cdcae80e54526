//! ID and URL extraction helpers shared by the scrubbing functions.
//!
//! - `urn_to_id`: numeric tail of a colon-delimited urn.
//! - `resolve_resource_path`: CDN URL from an image-variant mapping.
//! - `root_domain`: registrable domain of a company page URL.

use serde::{Serialize, Serializer};
use serde_json::Value;
use url::{Host, Url};

/// Fixed CDN prefix that relative media fragments are appended to.
pub const CDN_BASE_URL: &str = "https://media.licdn.com/media";

/// Second-level labels that sit under a two-letter country code
/// (`example.co.uk`, `example.com.br`).
const SECOND_LEVEL_LABELS: &[&str] = &["ac", "co", "com", "edu", "gov", "net", "org"];

/// Extracts the numeric ID from a urn such as `urn:li:company:12345`.
///
/// Reads the leading digit run of the last colon-delimited segment.
/// Returns `None` when the urn is absent, empty, or has no numeric tail.
pub fn urn_to_id(urn: Option<&str>) -> Option<u64> {
    let urn = urn?.trim();
    if urn.is_empty() {
        return None;
    }

    let tail = urn.rsplit(':').next()?.trim_start();
    let digits: String = tail.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

/// Serializes an extracted urn ID as a number, or `""` when absent.
pub fn serialize_urn_id<S>(id: &Option<u64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match id {
        Some(id) => serializer.serialize_u64(*id),
        None => serializer.serialize_str(""),
    }
}

/// Serializes an optional value as itself, or `""` when absent.
pub fn serialize_or_empty<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    match value {
        Some(value) => value.serialize(serializer),
        None => serializer.serialize_str(""),
    }
}

/// Builds a CDN URL from an image-variant mapping.
///
/// The mapping looks like `{ "<variant>": { "id": "/p/abc.jpg" } }`. The first
/// variant (in document order) wins. Anything else yields an empty string.
pub fn resolve_resource_path(variants: &Value) -> String {
    let Some(map) = variants.as_object() else {
        return String::new();
    };

    map.values()
        .next()
        .and_then(|variant| variant.get("id"))
        .and_then(Value::as_str)
        .map(|id| format!("{}{}", CDN_BASE_URL, id))
        .unwrap_or_default()
}

/// Same as `resolve_resource_path`, but `None` instead of an empty string.
pub fn optional_resource_path(variants: Option<&Value>) -> Option<String> {
    variants
        .map(resolve_resource_path)
        .filter(|url| !url.is_empty())
}

/// Extracts the root domain (`example.com`) from a page URL.
///
/// Accepts URLs without a scheme. Returns an empty string for IP hosts or
/// anything that does not parse.
pub fn root_domain(page_url: &str) -> String {
    let page_url = page_url.trim();
    if page_url.is_empty() {
        return String::new();
    }

    let candidate = if page_url.contains("://") {
        page_url.to_string()
    } else {
        format!("http://{}", page_url)
    };

    let host = match Url::parse(&candidate) {
        Ok(parsed) => match parsed.host() {
            Some(Host::Domain(domain)) => domain.to_string(),
            _ => return String::new(),
        },
        Err(e) => {
            tracing::debug!("Could not parse company page URL '{}': {}", page_url, e);
            return String::new();
        }
    };

    let labels: Vec<&str> = host
        .trim_end_matches('.')
        .split('.')
        .filter(|label| !label.is_empty())
        .collect();

    let count = labels.len();
    if count <= 2 {
        return labels.join(".");
    }

    let keep = if labels[count - 1].len() == 2 && SECOND_LEVEL_LABELS.contains(&labels[count - 2])
    {
        3
    } else {
        2
    };

    labels[count - keep..].join(".")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_urn_to_id_company() {
        assert_eq!(urn_to_id(Some("urn:li:company:12345")), Some(12345));
        assert_eq!(urn_to_id(Some("urn:li:fs_miniCompany:987")), Some(987));
    }

    #[test]
    fn test_urn_to_id_absent_or_empty() {
        assert_eq!(urn_to_id(None), None);
        assert_eq!(urn_to_id(Some("")), None);
        assert_eq!(urn_to_id(Some("   ")), None);
    }

    #[test]
    fn test_urn_to_id_non_numeric_tail() {
        assert_eq!(urn_to_id(Some("urn:li:fs_profile:ACoAAB")), None);
        assert_eq!(urn_to_id(Some("urn:li:company:")), None);
    }

    #[test]
    fn test_urn_to_id_reads_leading_digits() {
        assert_eq!(urn_to_id(Some("urn:li:company:42abc")), Some(42));
        assert_eq!(urn_to_id(Some("777")), Some(777));
    }

    #[test]
    fn test_serialize_urn_id() {
        #[derive(serde::Serialize)]
        struct Wrapper {
            #[serde(serialize_with = "serialize_urn_id")]
            id: Option<u64>,
        }

        let present = serde_json::to_value(Wrapper { id: Some(5) }).unwrap();
        let absent = serde_json::to_value(Wrapper { id: None }).unwrap();
        assert_eq!(present, json!({ "id": 5 }));
        assert_eq!(absent, json!({ "id": "" }));
    }

    #[test]
    fn test_serialize_or_empty() {
        #[derive(serde::Serialize)]
        struct Wrapper {
            #[serde(serialize_with = "serialize_or_empty")]
            year: Option<i32>,
        }

        let present = serde_json::to_value(Wrapper { year: Some(1999) }).unwrap();
        let absent = serde_json::to_value(Wrapper { year: None }).unwrap();
        assert_eq!(present, json!({ "year": 1999 }));
        assert_eq!(absent, json!({ "year": "" }));
    }

    #[test]
    fn test_resolve_resource_path_empty_mapping() {
        assert_eq!(resolve_resource_path(&json!({})), "");
    }

    #[test]
    fn test_resolve_resource_path_original_variant() {
        let variants = json!({ "original": { "id": "/abc" } });
        assert_eq!(
            resolve_resource_path(&variants),
            format!("{}/abc", CDN_BASE_URL)
        );
    }

    #[test]
    fn test_resolve_resource_path_takes_first_variant() {
        let variants = json!({
            "com.linkedin.voyager.common.MediaProcessorImage": { "id": "/first.jpg" },
            "original": { "id": "/second.jpg" }
        });
        assert_eq!(
            resolve_resource_path(&variants),
            format!("{}/first.jpg", CDN_BASE_URL)
        );
    }

    #[test]
    fn test_resolve_resource_path_malformed() {
        assert_eq!(resolve_resource_path(&json!(null)), "");
        assert_eq!(resolve_resource_path(&json!("original")), "");
        assert_eq!(resolve_resource_path(&json!([{ "id": "/x" }])), "");
        assert_eq!(resolve_resource_path(&json!({ "original": "x" })), "");
        assert_eq!(resolve_resource_path(&json!({ "original": { "id": 3 } })), "");
    }

    #[test]
    fn test_optional_resource_path() {
        assert_eq!(optional_resource_path(None), None);
        assert_eq!(optional_resource_path(Some(&json!({}))), None);
        assert_eq!(
            optional_resource_path(Some(&json!({ "v": { "id": "/l.png" } }))),
            Some(format!("{}/l.png", CDN_BASE_URL))
        );
    }

    #[test]
    fn test_root_domain() {
        assert_eq!(root_domain("https://www.example.com/about"), "example.com");
        assert_eq!(root_domain("http://careers.eu.example.io"), "example.io");
        assert_eq!(root_domain("example.com"), "example.com");
        assert_eq!(root_domain("WWW.Example.COM"), "example.com");
    }

    #[test]
    fn test_root_domain_country_second_level() {
        assert_eq!(root_domain("https://www.example.co.uk"), "example.co.uk");
        assert_eq!(root_domain("https://shop.example.com.br/"), "example.com.br");
    }

    #[test]
    fn test_root_domain_unusable_input() {
        assert_eq!(root_domain(""), "");
        assert_eq!(root_domain("http://192.168.0.1/"), "");
        assert_eq!(root_domain("http://"), "");
    }
}
