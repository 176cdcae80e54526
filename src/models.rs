use crate::extract::{serialize_or_empty, serialize_urn_id};
use serde::Serialize;

// ============ Shared ============

/// Partial calendar date as reported upstream; any part may be missing.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct DateParts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<u8>,
}

/// Start and end of an education, position or project. Serializes as `{}` when both are absent.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimePeriod {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateParts>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateParts>,
}

impl TimePeriod {
    /// Started and not yet ended.
    pub fn is_current(&self) -> bool {
        self.start_date.is_some() && self.end_date.is_none()
    }
}

/// Minimal person reference embedded in patents, publications and projects.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MemberInfo {
    pub first_name: String,
    pub last_name: String,
    pub occupation: String,
    pub public_identifier: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
}

// ============ Profile ============

/// A profile flattened from the `profileView`, `profileContactInfo` and
/// `highlights` sub-resources.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedProfile {
    pub first_name: String,
    pub last_name: String,
    pub headline: String,
    pub occupation: String,
    pub location: String,
    pub industry: String,
    pub summary: String,
    pub public_identifier: String,
    pub picture_url: String,
    pub connection_distance: String,

    pub email: String,
    pub phone_numbers: Vec<PhoneNumber>,
    pub twitter_handles: Vec<String>,
    pub address: String,

    pub education: Vec<Education>,
    pub positions: Vec<Position>,
    pub patents: Vec<Patent>,
    pub publications: Vec<Publication>,
    pub projects: Vec<Project>,
    pub languages: Vec<Language>,
    pub skills: Vec<Skill>,
    pub websites: Vec<Website>,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct PhoneNumber {
    pub number: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub activities: String,
    pub degree_name: String,
    pub field_of_study: String,
    pub time_period: TimePeriod,
    pub school_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school: Option<School>,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct School {
    pub active: bool,
    pub school_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub location_name: String,
    pub company_name: String,
    #[serde(serialize_with = "serialize_urn_id")]
    pub company_id: Option<u64>,
    pub description: String,
    pub time_period: TimePeriod,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<PositionCompany>,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PositionCompany {
    pub employee_count_range: CountRange,
    pub industries: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct CountRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Patent {
    pub application_number: String,
    pub description: String,
    pub issue_date: DateParts,
    pub filing_date: DateParts,
    pub number: String,
    pub pending: bool,
    pub title: String,
    pub url: String,
    /// Only present when the upstream inventor list was non-empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventors: Option<Vec<MemberInfo>>,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct Publication {
    pub date: DateParts,
    pub description: String,
    pub name: String,
    pub publisher: String,
    pub url: String,
    /// Only present when the upstream author list was non-empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authors: Option<Vec<MemberInfo>>,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub description: String,
    pub time_period: TimePeriod,
    pub title: String,
    pub url: String,
    pub members: Vec<MemberInfo>,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct Language {
    pub name: String,
    pub proficiency: String,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct Skill {
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct Website {
    pub url: String,
    #[serde(rename = "type")]
    pub kind: String,
}

// ============ Company ============

/// A company as returned by the universal-name lookup.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedCompany {
    pub name: String,
    pub universal_name: String,
    #[serde(serialize_with = "serialize_urn_id")]
    pub company_id: Option<u64>,
    #[serde(serialize_with = "serialize_urn_id")]
    pub parent_company_id: Option<u64>,
    pub description: String,
    pub tagline: String,
    pub company_page_url: String,
    pub root_domain: String,
    pub company_type: String,
    pub staff_count: u64,
    #[serde(serialize_with = "serialize_or_empty")]
    pub founded_year: Option<i32>,
    pub specialities: Vec<String>,

    pub address_line1: String,
    pub address_line2: String,
    pub city: String,
    pub geographic_area: String,
    pub postal_code: String,
    pub country: String,

    pub industries: Vec<String>,
    pub logo_url: String,
    pub cover_image_url: String,
}
