//! Raw voyager API payloads.
//!
//! Every field is optional and decoded leniently: a value of the wrong JSON
//! type reads as absent, and a malformed element of an array is dropped
//! instead of failing the whole payload. The scrubbing layer turns these into
//! the normalized records in `models`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decodes a field, treating `null` and type mismatches as absent.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Decodes an array field, keeping only elements that decode cleanly.
pub(crate) fn lenient_seq<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
        ),
        _ => None,
    })
}

/// Keeps any non-null JSON value as-is (used for image-variant mappings).
pub(crate) fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(if value.is_null() { None } else { Some(value) })
}

/// Decodes `value` into a raw record, falling back to the all-absent default.
pub(crate) fn decode_or_default<T>(value: &Value) -> T
where
    T: DeserializeOwned + Default,
{
    match T::deserialize(value) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::debug!("Raw payload is not an object, using defaults: {}", e);
            T::default()
        }
    }
}

// ============ Shared ============

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDate {
    #[serde(default, deserialize_with = "lenient")]
    pub year: Option<i32>,
    #[serde(default, deserialize_with = "lenient")]
    pub month: Option<u8>,
    #[serde(default, deserialize_with = "lenient")]
    pub day: Option<u8>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTimePeriod {
    #[serde(default, deserialize_with = "lenient")]
    pub start_date: Option<RawDate>,
    #[serde(default, deserialize_with = "lenient")]
    pub end_date: Option<RawDate>,
}

/// `{ "member": { ... } }` wrapper used by inventors, authors and project members.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMemberRef {
    #[serde(default, deserialize_with = "lenient")]
    pub member: Option<RawMember>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMember {
    #[serde(default, deserialize_with = "lenient")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub occupation: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub public_identifier: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub picture: Option<Value>,
}

// ============ Profile ============

/// Merged `profileView` + `profileContactInfo` + `highlights` payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProfile {
    #[serde(default, deserialize_with = "lenient")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub headline: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub occupation: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub location_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub industry_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub public_identifier: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub picture_info: Option<RawPictureInfo>,

    // profileContactInfo
    #[serde(default, deserialize_with = "lenient")]
    pub email_address: Option<String>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub phone_numbers: Option<Vec<RawPhoneNumber>>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub twitter_handles: Option<Vec<RawTwitterHandle>>,
    #[serde(default, deserialize_with = "lenient")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub websites: Option<Vec<RawWebsite>>,

    // highlights
    #[serde(default, deserialize_with = "lenient")]
    pub distance: Option<RawDistance>,

    #[serde(default, deserialize_with = "lenient_seq")]
    pub educations: Option<Vec<RawEducation>>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub positions: Option<Vec<RawPosition>>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub patents: Option<Vec<RawPatent>>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub publications: Option<Vec<RawPublication>>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub projects: Option<Vec<RawProject>>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub languages: Option<Vec<RawLanguage>>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub skills: Option<Vec<RawSkill>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPictureInfo {
    #[serde(default, deserialize_with = "lenient")]
    pub master_image: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPhoneNumber {
    #[serde(default, deserialize_with = "lenient")]
    pub number: Option<String>,
    #[serde(default, rename = "type", deserialize_with = "lenient")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTwitterHandle {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDistance {
    #[serde(default, deserialize_with = "lenient")]
    pub value: Option<String>,
}

/// A website entry; `type` is a one-entry tag mapping such as
/// `{ "com.linkedin.voyager.identity.profile.StandardWebsite": { "category": "COMPANY" } }`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawWebsite {
    #[serde(default, deserialize_with = "lenient")]
    pub url: Option<String>,
    #[serde(default, rename = "type", deserialize_with = "present")]
    pub type_tag: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEducation {
    #[serde(default, deserialize_with = "lenient")]
    pub activities: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub degree_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub field_of_study: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub time_period: Option<RawTimePeriod>,
    #[serde(default, deserialize_with = "lenient")]
    pub school_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub school: Option<RawSchool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSchool {
    #[serde(default, deserialize_with = "lenient")]
    pub active: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub school_name: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub logo: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPosition {
    #[serde(default, deserialize_with = "lenient")]
    pub location_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub company_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub company_urn: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub time_period: Option<RawTimePeriod>,
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub company: Option<RawPositionCompany>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPositionCompany {
    #[serde(default, deserialize_with = "lenient")]
    pub employee_count_range: Option<RawCountRange>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub industries: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub mini_company: Option<RawMiniCompany>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCountRange {
    #[serde(default, deserialize_with = "lenient")]
    pub start: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub end: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMiniCompany {
    #[serde(default, deserialize_with = "present")]
    pub logo: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPatent {
    #[serde(default, deserialize_with = "lenient")]
    pub application_number: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub issue_date: Option<RawDate>,
    #[serde(default, deserialize_with = "lenient")]
    pub filing_date: Option<RawDate>,
    #[serde(default, deserialize_with = "lenient")]
    pub number: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub pending: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub inventors: Option<Vec<RawMemberRef>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPublication {
    #[serde(default, deserialize_with = "lenient")]
    pub date: Option<RawDate>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub publisher: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub authors: Option<Vec<RawMemberRef>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProject {
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub time_period: Option<RawTimePeriod>,
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub members: Option<Vec<RawMemberRef>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawLanguage {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub proficiency: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSkill {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
}

// ============ Company ============

/// Response of the company lookup endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCompanyResponse {
    #[serde(default, deserialize_with = "lenient_seq")]
    pub elements: Option<Vec<Value>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCompany {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub universal_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub entity_urn: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub parent_company: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub tagline: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub company_page_url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub company_type: Option<RawCompanyType>,
    #[serde(default, deserialize_with = "lenient")]
    pub staff_count: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub founded_on: Option<RawDate>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub specialities: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub headquarter: Option<RawAddress>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub company_industries: Option<Vec<RawIndustry>>,
    #[serde(default, deserialize_with = "lenient")]
    pub logo: Option<RawImage>,
    #[serde(default, deserialize_with = "lenient")]
    pub background_cover_image: Option<RawImage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCompanyType {
    #[serde(default, deserialize_with = "lenient")]
    pub localized_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAddress {
    #[serde(default, deserialize_with = "lenient")]
    pub line1: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub line2: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub geographic_area: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub postal_code: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawIndustry {
    #[serde(default, deserialize_with = "lenient")]
    pub localized_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawImage {
    #[serde(default, deserialize_with = "present")]
    pub image: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wrong_types_read_as_absent() {
        let raw: RawProfile = decode_or_default(&json!({
            "firstName": 42,
            "headline": null,
            "pictureInfo": "not an object",
            "lastName": "Doe"
        }));
        assert_eq!(raw.first_name, None);
        assert_eq!(raw.headline, None);
        assert!(raw.picture_info.is_none());
        assert_eq!(raw.last_name.as_deref(), Some("Doe"));
    }

    #[test]
    fn test_malformed_array_elements_are_dropped() {
        let raw: RawProfile = decode_or_default(&json!({
            "skills": [{ "name": "Rust" }, "garbage", 7, { "name": "Go" }]
        }));
        let names: Vec<_> = raw
            .skills
            .unwrap()
            .into_iter()
            .map(|s| s.name.unwrap_or_default())
            .collect();
        assert_eq!(names, vec!["Rust", "Go"]);
    }

    #[test]
    fn test_non_array_sequence_is_absent() {
        let raw: RawProfile = decode_or_default(&json!({ "positions": { "title": "x" } }));
        assert!(raw.positions.is_none());
    }

    #[test]
    fn test_non_object_payload_uses_defaults() {
        let raw: RawProfile = decode_or_default(&json!([1, 2, 3]));
        assert!(raw.first_name.is_none());
        assert!(raw.educations.is_none());
    }
}
