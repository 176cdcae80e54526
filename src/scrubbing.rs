//! Scrubbing: raw voyager payloads to normalized records.
//!
//! Each entity has its own builder that reads the lenient raw struct and
//! returns a fully populated record. Absent fields become empty strings,
//! empty vectors or empty mappings; see `models` for the few fields that
//! are optional on purpose.

use crate::extract::{
    optional_resource_path, resolve_resource_path, root_domain, urn_to_id, CDN_BASE_URL,
};
use crate::models::*;
use crate::raw_models::*;
use serde_json::Value;

/// Category used when a website's type tag carries none.
pub const DEFAULT_WEBSITE_TYPE: &str = "Portfolio";

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

/// Normalizes a merged profile payload.
pub fn normalize_profile(raw: &Value) -> NormalizedProfile {
    let raw: RawProfile = decode_or_default(raw);

    let picture_url = raw
        .picture_info
        .as_ref()
        .and_then(|info| info.master_image.as_deref())
        .map(|path| format!("{}{}", CDN_BASE_URL, path))
        .unwrap_or_default();

    let positions: Vec<Position> = raw
        .positions
        .iter()
        .flatten()
        .map(scrub_position)
        .collect();

    let headline = text(&raw.headline);
    let mut occupation = text(&raw.occupation);

    // Upstream bug: occupation is sometimes a copy of the headline. When that
    // happens the title of the current position is the real occupation.
    if headline == occupation {
        occupation = positions
            .iter()
            .find(|position| position.time_period.is_current())
            .map(|position| position.title.clone())
            .unwrap_or_default();
    }

    NormalizedProfile {
        first_name: text(&raw.first_name),
        last_name: text(&raw.last_name),
        headline,
        occupation,
        location: text(&raw.location_name),
        industry: text(&raw.industry_name),
        summary: text(&raw.summary),
        public_identifier: text(&raw.public_identifier),
        picture_url,
        connection_distance: raw
            .distance
            .and_then(|distance| distance.value)
            .unwrap_or_default(),
        email: text(&raw.email_address),
        phone_numbers: raw
            .phone_numbers
            .iter()
            .flatten()
            .map(|phone| PhoneNumber {
                number: text(&phone.number),
                kind: text(&phone.kind),
            })
            .collect(),
        twitter_handles: raw
            .twitter_handles
            .iter()
            .flatten()
            .filter_map(|handle| handle.name.clone())
            .collect(),
        address: text(&raw.address),
        education: raw
            .educations
            .iter()
            .flatten()
            .map(scrub_education)
            .collect(),
        positions,
        patents: raw.patents.iter().flatten().map(scrub_patent).collect(),
        publications: raw
            .publications
            .iter()
            .flatten()
            .map(scrub_publication)
            .collect(),
        projects: raw.projects.iter().flatten().map(scrub_project).collect(),
        languages: raw
            .languages
            .iter()
            .flatten()
            .map(|language| Language {
                name: text(&language.name),
                proficiency: text(&language.proficiency),
            })
            .collect(),
        skills: raw
            .skills
            .iter()
            .flatten()
            .map(|skill| Skill {
                name: text(&skill.name),
            })
            .collect(),
        websites: raw.websites.iter().flatten().map(scrub_website).collect(),
    }
}

fn date_parts(date: &RawDate) -> DateParts {
    DateParts {
        year: date.year,
        month: date.month,
        day: date.day,
    }
}

fn scrub_date(raw: &Option<RawDate>) -> DateParts {
    raw.as_ref().map(date_parts).unwrap_or_default()
}

fn scrub_time_period(raw: &Option<RawTimePeriod>) -> TimePeriod {
    let Some(period) = raw else {
        return TimePeriod::default();
    };

    TimePeriod {
        start_date: period.start_date.as_ref().map(date_parts),
        end_date: period.end_date.as_ref().map(date_parts),
    }
}

/// Normalizes an `{ "member": { ... } }` reference.
pub fn scrub_member(raw: &RawMemberRef) -> MemberInfo {
    let Some(member) = &raw.member else {
        return MemberInfo::default();
    };

    MemberInfo {
        first_name: text(&member.first_name),
        last_name: text(&member.last_name),
        occupation: text(&member.occupation),
        public_identifier: text(&member.public_identifier),
        picture: optional_resource_path(member.picture.as_ref()),
    }
}

pub fn scrub_education(raw: &RawEducation) -> Education {
    Education {
        activities: text(&raw.activities),
        degree_name: text(&raw.degree_name),
        field_of_study: text(&raw.field_of_study),
        time_period: scrub_time_period(&raw.time_period),
        school_name: text(&raw.school_name),
        school: raw.school.as_ref().map(|school| School {
            active: school.active.unwrap_or_default(),
            school_name: text(&school.school_name),
            logo: optional_resource_path(school.logo.as_ref()),
        }),
    }
}

pub fn scrub_position(raw: &RawPosition) -> Position {
    Position {
        location_name: text(&raw.location_name),
        company_name: text(&raw.company_name),
        company_id: urn_to_id(raw.company_urn.as_deref()),
        description: text(&raw.description),
        time_period: scrub_time_period(&raw.time_period),
        title: text(&raw.title),
        company: raw.company.as_ref().map(|company| PositionCompany {
            employee_count_range: company
                .employee_count_range
                .as_ref()
                .map(|range| CountRange {
                    start: range.start,
                    end: range.end,
                })
                .unwrap_or_default(),
            industries: company.industries.clone().unwrap_or_default(),
            logo: company
                .mini_company
                .as_ref()
                .and_then(|mini| optional_resource_path(mini.logo.as_ref())),
        }),
    }
}

pub fn scrub_patent(raw: &RawPatent) -> Patent {
    let inventors = raw
        .inventors
        .as_ref()
        .filter(|inventors| !inventors.is_empty())
        .map(|inventors| {
            inventors
                .iter()
                .filter(|inventor| inventor.member.is_some())
                .map(scrub_member)
                .collect()
        });

    Patent {
        application_number: text(&raw.application_number),
        description: text(&raw.description),
        issue_date: scrub_date(&raw.issue_date),
        filing_date: scrub_date(&raw.filing_date),
        number: text(&raw.number),
        pending: raw.pending.unwrap_or_default(),
        title: text(&raw.title),
        url: text(&raw.url),
        inventors,
    }
}

pub fn scrub_publication(raw: &RawPublication) -> Publication {
    Publication {
        date: scrub_date(&raw.date),
        description: text(&raw.description),
        name: text(&raw.name),
        publisher: text(&raw.publisher),
        url: text(&raw.url),
        authors: raw
            .authors
            .as_ref()
            .filter(|authors| !authors.is_empty())
            .map(|authors| authors.iter().map(scrub_member).collect()),
    }
}

/// Project members keep their key and hold the normalized member entries.
pub fn scrub_project(raw: &RawProject) -> Project {
    Project {
        description: text(&raw.description),
        time_period: scrub_time_period(&raw.time_period),
        title: text(&raw.title),
        url: text(&raw.url),
        members: raw.members.iter().flatten().map(scrub_member).collect(),
    }
}

/// The website type is the `category` of the first type tag.
pub fn scrub_website(raw: &RawWebsite) -> Website {
    let kind = raw
        .type_tag
        .as_ref()
        .and_then(Value::as_object)
        .and_then(|tags| tags.values().next())
        .and_then(|tag| tag.get("category"))
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_WEBSITE_TYPE)
        .to_string();

    Website {
        url: text(&raw.url),
        kind,
    }
}

/// Normalizes one company element of the lookup response.
pub fn normalize_company(raw: &Value) -> NormalizedCompany {
    let raw: RawCompany = decode_or_default(raw);
    let company_page_url = text(&raw.company_page_url);
    let headquarter = raw.headquarter.unwrap_or_default();

    NormalizedCompany {
        name: text(&raw.name),
        universal_name: text(&raw.universal_name),
        company_id: urn_to_id(raw.entity_urn.as_deref()),
        parent_company_id: urn_to_id(raw.parent_company.as_deref()),
        description: text(&raw.description),
        tagline: text(&raw.tagline),
        root_domain: root_domain(&company_page_url),
        company_page_url,
        company_type: raw
            .company_type
            .and_then(|kind| kind.localized_name)
            .unwrap_or_default(),
        staff_count: raw.staff_count.unwrap_or_default(),
        founded_year: raw.founded_on.and_then(|date| date.year),
        specialities: raw.specialities.unwrap_or_default(),
        address_line1: text(&headquarter.line1),
        address_line2: text(&headquarter.line2),
        city: text(&headquarter.city),
        geographic_area: text(&headquarter.geographic_area),
        postal_code: text(&headquarter.postal_code),
        country: text(&headquarter.country),
        industries: raw
            .company_industries
            .iter()
            .flatten()
            .filter_map(|industry| industry.localized_name.clone())
            .collect(),
        logo_url: raw
            .logo
            .and_then(|logo| logo.image)
            .map(|image| resolve_resource_path(&image))
            .unwrap_or_default(),
        cover_image_url: raw
            .background_cover_image
            .and_then(|cover| cover.image)
            .map(|image| resolve_resource_path(&image))
            .unwrap_or_default(),
    }
}
