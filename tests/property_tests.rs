/// Property-based tests using proptest
/// Normalization must never panic and must honor its defaults for any input
use profile_scrubber::core::extract::{resolve_resource_path, root_domain, urn_to_id, CDN_BASE_URL};
use profile_scrubber::core::scrubbing::{normalize_company, normalize_profile};
use proptest::prelude::*;
use serde_json::{json, Value};

/// Arbitrary JSON trees, keys drawn from field names the scrubbers read
fn arb_json() -> impl Strategy<Value = Value> {
    let known = prop::sample::select(vec![
        "firstName",
        "headline",
        "occupation",
        "positions",
        "timePeriod",
        "startDate",
        "member",
        "picture",
        "id",
        "type",
        "elements",
    ]);
    let key = prop_oneof![known.prop_map(String::from), "[a-zA-Z]{1,8}"].boxed();
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        "\\PC{0,12}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 64, 6, move |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec((key.clone(), inner), 0..6)
                .prop_map(|entries| Value::Object(entries.into_iter().collect())),
        ]
    })
}

// Property: scrubbing should never panic
proptest! {
    #[test]
    fn normalize_profile_never_panics(raw in arb_json()) {
        let _ = normalize_profile(&raw);
    }

    #[test]
    fn normalize_company_never_panics(raw in arb_json()) {
        let _ = normalize_company(&raw);
    }

    #[test]
    fn normalize_profile_is_deterministic(raw in arb_json()) {
        prop_assert_eq!(normalize_profile(&raw), normalize_profile(&raw));
    }

    #[test]
    fn resolve_resource_path_is_empty_or_cdn(raw in arb_json()) {
        let url = resolve_resource_path(&raw);
        prop_assert!(url.is_empty() || url.starts_with(CDN_BASE_URL));
    }
}

// Property: urn extraction
proptest! {
    #[test]
    fn urn_to_id_never_panics(urn in "\\PC*") {
        let _ = urn_to_id(Some(urn.as_str()));
    }

    #[test]
    fn urn_numeric_tail_is_extracted(kind in "[a-z_]{1,20}", id in any::<u64>()) {
        let urn = format!("urn:li:{}:{}", kind, id);
        prop_assert_eq!(urn_to_id(Some(urn.as_str())), Some(id));
    }
}

// Property: domain extraction
proptest! {
    #[test]
    fn root_domain_never_panics(url in "\\PC*") {
        let _ = root_domain(&url);
    }

    #[test]
    fn root_domain_strips_subdomains(
        sub in "[a-z]{1,10}",
        name in "[a-z]{3,10}",
        tld in prop_oneof![Just("com"), Just("net"), Just("org")]
    ) {
        let url = format!("https://{}.{}.{}/path", sub, name, tld);
        prop_assert_eq!(root_domain(&url), format!("{}.{}", name, tld));
    }
}
