use serde_json::{Map, Value};

use crate::utils::time;

use super::CheckError;

pub const NO_DATA: &str = "No Data";
pub const BAN_REASON: &str = "This account was confirmed for using cheats.";
const DEFAULT_PERIOD_UNIT: &str = "month";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BanCheckResult {
    pub is_banned: bool,
    pub nickname: String,
    pub player_uid: String,
    pub region: String,
    pub last_login: String,
    /// Only present for banned accounts.
    pub suspension: Option<String>,
}

impl BanCheckResult {
    pub fn from_response(body: &Value) -> Result<Self, CheckError> {
        let Value::Object(root) = body else {
            return Err(CheckError::Malformed);
        };
        if !root.contains_key("status") {
            return Err(CheckError::Malformed);
        }

        let data = match root.get("data") {
            Some(Value::Object(data)) => data,
            _ => root,
        };

        let is_banned = data.get("is_banned").and_then(as_int) == Some(1);

        Ok(Self {
            is_banned,
            nickname: safe_value(first_truthy(data, &["nickname", "name"])),
            player_uid: safe_value(first_truthy(data, &["id", "uid"])),
            region: safe_value(first_truthy(data, &["region", "country"])),
            last_login: last_login(data),
            suspension: is_banned.then(|| suspension(data)),
        })
    }
}

/// Collapses null, blank, "n/a" and "no data" into [`NO_DATA`].
pub fn safe_value(value: Option<&Value>) -> String {
    let rendered = match value {
        None | Some(Value::Null) => return NO_DATA.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    };

    if rendered.trim().is_empty()
        || rendered.eq_ignore_ascii_case("n/a")
        || rendered.eq_ignore_ascii_case("no data")
    {
        NO_DATA.to_string()
    } else {
        rendered
    }
}

pub fn suspension_phrase(period: i64, unit: &str) -> String {
    let plural = if period == 1 { "" } else { "s" };
    format!("more than {period} {unit}{plural}")
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

fn first_truthy<'a>(data: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| data.get(*key))
        .find(|value| is_truthy(value))
}

fn as_int(value: &Value) -> Option<i64> {
    match value {
        Value::Bool(b) => Some(i64::from(*b)),
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.abs() < i64::MAX as f64)
                .map(|f| f.trunc() as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn last_login(data: &Map<String, Value>) -> String {
    first_truthy(data, &["last_login", "last_seen"])
        .and_then(Value::as_i64)
        .and_then(time::format_epoch)
        .unwrap_or_else(|| NO_DATA.to_string())
}

fn suspension(data: &Map<String, Value>) -> String {
    let period = data
        .get("period")
        .and_then(Value::as_i64)
        .filter(|period| *period != 0);

    if let Some(period) = period {
        let unit = match data.get("period_unit") {
            Some(Value::String(s)) if !s.is_empty() => s.clone(),
            Some(other) if is_truthy(other) => other.to_string(),
            _ => DEFAULT_PERIOD_UNIT.to_string(),
        };
        return suspension_phrase(period, &unit);
    }

    match data.get("suspension") {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(other) if is_truthy(other) => other.to_string(),
        _ => NO_DATA.to_string(),
    }
}

#[cfg(test)]
#[path = "tests/models.rs"]
mod tests;
