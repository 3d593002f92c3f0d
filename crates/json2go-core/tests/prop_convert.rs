/// Property-based tests for JSON-to-Go conversion.
///
/// Uses `proptest` to generate random JSON documents, numbers and keys and
/// checks invariants that hand-written cases can miss:
///
/// - conversion is deterministic (same input, same output)
/// - integers are classified by the exclusive 32-bit range
/// - any number written with a decimal point becomes `float64`
/// - identifiers are always non-empty ASCII alphanumerics
/// - single objects never produce `omitempty` tags
use json2go_core::{convert, format_identifier, NAMING_FAILED};
use proptest::prelude::*;
use serde_json::{Map, Number, Value};

// ============================================================================
// Strategies
// ============================================================================

fn arb_key() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z][a-zA-Z0-9_]{0,12}",
        "[0-9]{1,4}",
        "[a-z_\\-\\. $@]{0,8}",
        Just("id".to_string()),
        Just("userId".to_string()),
    ]
}

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| Value::Number(Number::from(n))),
        (-1_000_000i64..1_000_000i64, 1u32..1000u32)
            .prop_map(|(i, d)| Value::Number(Number::from_f64(i as f64 + d as f64 / 1000.0).unwrap())),
        "[a-zA-Z0-9 ]{0,20}".prop_map(Value::String),
        Just(Value::String("2024-01-15T10:30:00Z".to_string())),
    ]
}

fn arb_json() -> impl Strategy<Value = Value> {
    arb_scalar().prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec((arb_key(), inner), 0..6).prop_map(|pairs| {
                let mut map = Map::new();
                for (k, v) in pairs {
                    map.insert(k, v);
                }
                Value::Object(map)
            }),
        ]
    })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn conversion_is_deterministic(value in arb_json()) {
        let json = serde_json::to_string(&value).unwrap();
        let first = convert(&json, None);
        let second = convert(&json, None);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn valid_json_always_converts(value in arb_json(), name in "[a-zA-Z ]{0,10}") {
        let json = serde_json::to_string(&value).unwrap();
        let out = convert(&json, Some(&name));
        prop_assert!(out.error.is_none(), "unexpected error: {:?}", out.error);
        prop_assert!(out.go.starts_with("type "));
    }

    #[test]
    fn integers_use_exclusive_int_range(n in any::<i64>()) {
        let out = convert(&n.to_string(), None);
        let expected = if n > -2_147_483_648 && n < 2_147_483_647 {
            "type AutoGenerated int"
        } else {
            "type AutoGenerated int64"
        };
        prop_assert_eq!(out.go, expected);
    }

    #[test]
    fn decimal_point_means_float(int_part in -100_000i64..100_000i64, frac in "[0-9]{1,6}") {
        let out = convert(&format!("{int_part}.{frac}"), None);
        prop_assert_eq!(out.go, "type AutoGenerated float64");
    }

    #[test]
    fn identifiers_are_ascii_alphanumeric(raw in any::<String>()) {
        let ident = format_identifier(&raw);
        prop_assert!(!ident.is_empty());
        prop_assert!(
            ident == NAMING_FAILED || ident.chars().all(|c| c.is_ascii_alphanumeric()),
            "bad identifier {:?} for {:?}", ident, raw
        );
    }

    #[test]
    fn single_object_has_no_optional_fields(
        pairs in prop::collection::vec((arb_key(), arb_scalar()), 1..8)
    ) {
        let mut map = Map::new();
        for (k, v) in pairs {
            map.insert(k, v);
        }
        let json = serde_json::to_string(&Value::Object(map)).unwrap();
        let out = convert(&json, None);
        prop_assert!(!out.go.contains(",omitempty"));
    }
}
