use super::*;
use serde_json::json;

fn parse(body: Value) -> BanCheckResult {
    BanCheckResult::from_response(&body).expect("valid payload")
}

#[test]
fn test_safe_value_collapses_placeholders() {
    for raw in [json!(null), json!(""), json!("  "), json!("n/a"), json!("N/A"), json!("no data"), json!("NO DATA")] {
        assert_eq!(safe_value(Some(&raw)), NO_DATA, "{raw}");
    }
    assert_eq!(safe_value(None), NO_DATA);
}

#[test]
fn test_safe_value_passes_other_values_through() {
    assert_eq!(safe_value(Some(&json!("Player"))), "Player");
    assert_eq!(safe_value(Some(&json!(" padded "))), " padded ");
    assert_eq!(safe_value(Some(&json!(123456789))), "123456789");
}

#[test]
fn test_safe_value_is_idempotent() {
    for raw in [json!(null), json!("n/a"), json!("Player"), json!(42)] {
        let once = safe_value(Some(&raw));
        let twice = safe_value(Some(&Value::String(once.clone())));
        assert_eq!(once, twice);
    }
}

#[test]
fn test_is_banned_only_when_one() {
    let cases = [
        (json!(1), true),
        (json!("1"), true),
        (json!(1.0), true),
        (json!(true), true),
        (json!(0), false),
        (json!(2), false),
        (json!("yes"), false),
        (json!(null), false),
        (json!(1.5), true),
        (json!(1.99), true),
        (json!(0.9), false),
        (json!(-1.5), false),
        (json!("1.5"), false),
    ];
    for (raw, expected) in cases {
        let result = parse(json!({ "status": "ok", "data": { "is_banned": raw } }));
        assert_eq!(result.is_banned, expected, "{raw}");
    }

    let result = parse(json!({ "status": "ok", "data": {} }));
    assert!(!result.is_banned);
}

#[test]
fn test_missing_status_is_malformed() {
    let err = BanCheckResult::from_response(&json!({ "data": { "is_banned": 1 } })).unwrap_err();
    assert!(matches!(err, CheckError::Malformed));
}

#[test]
fn test_non_object_is_malformed() {
    for body in [json!([]), json!("status"), json!(null), json!(1)] {
        assert!(matches!(
            BanCheckResult::from_response(&body),
            Err(CheckError::Malformed)
        ));
    }
}

#[test]
fn test_top_level_used_when_data_absent() {
    let result = parse(json!({
        "status": 200,
        "is_banned": 0,
        "nickname": "TopLevel",
        "id": "42",
        "region": "NP"
    }));
    assert_eq!(result.nickname, "TopLevel");
    assert_eq!(result.player_uid, "42");
    assert_eq!(result.region, "NP");
    assert_eq!(result.suspension, None);
}

#[test]
fn test_fallback_keys() {
    let result = parse(json!({
        "status": "ok",
        "data": {
            "nickname": "",
            "name": "Alt",
            "uid": 77,
            "country": "IN",
            "last_seen": 1_700_000_000
        }
    }));
    assert_eq!(result.nickname, "Alt");
    assert_eq!(result.player_uid, "77");
    assert_eq!(result.region, "IN");
    assert_eq!(result.last_login, "2023-11-15 03:58 AM");
}

#[test]
fn test_missing_fields_are_no_data() {
    let result = parse(json!({ "status": "ok", "data": { "region": "n/a" } }));
    assert_eq!(result.nickname, NO_DATA);
    assert_eq!(result.player_uid, NO_DATA);
    assert_eq!(result.region, NO_DATA);
    assert_eq!(result.last_login, NO_DATA);
}

#[test]
fn test_last_login_requires_integer() {
    for raw in [json!("1700000000"), json!(1_700_000_000.5), json!(true)] {
        let result = parse(json!({ "status": "ok", "data": { "last_login": raw } }));
        assert_eq!(result.last_login, NO_DATA, "{raw}");
    }

    let result = parse(json!({ "status": "ok", "data": { "last_login": i64::MAX } }));
    assert_eq!(result.last_login, NO_DATA);
}

#[test]
fn test_suspension_phrase_pluralises() {
    assert_eq!(suspension_phrase(3, "day"), "more than 3 days");
    assert_eq!(suspension_phrase(1, "month"), "more than 1 month");
}

#[test]
fn test_suspension_from_period() {
    let result = parse(json!({
        "status": "ok",
        "data": { "is_banned": 1, "period": 3, "period_unit": "day" }
    }));
    assert_eq!(result.suspension.as_deref(), Some("more than 3 days"));

    let result = parse(json!({ "status": "ok", "data": { "is_banned": 1, "period": 1 } }));
    assert_eq!(result.suspension.as_deref(), Some("more than 1 month"));
}

#[test]
fn test_suspension_falls_back_to_raw_field() {
    let result = parse(json!({
        "status": "ok",
        "data": { "is_banned": 1, "period": "3", "suspension": "permanent" }
    }));
    assert_eq!(result.suspension.as_deref(), Some("permanent"));

    let result = parse(json!({ "status": "ok", "data": { "is_banned": 1, "period": 0 } }));
    assert_eq!(result.suspension.as_deref(), Some(NO_DATA));
}
