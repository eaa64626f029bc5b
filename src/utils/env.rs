use std::{env, str::FromStr};

pub fn parse_env<T>(key: &str, default: &str) -> T
where
    T: FromStr + Default,
    <T as FromStr>::Err: std::fmt::Debug,
{
    env::var(key)
        .unwrap_or_else(|_| String::from(default))
        .parse()
        .unwrap_or_default()
}

/// Comma-separated list; blank entries are dropped and an empty result falls back to `default`.
pub fn parse_env_list(key: &str, default: &str) -> Vec<String> {
    let split = |raw: &str| -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    };

    let values = env::var(key).map(|v| split(&v)).unwrap_or_default();
    if values.is_empty() { split(default) } else { values }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_parse_env_returns_value() {
        let key = "TEST_PARSE_ENV_VALUE";
        unsafe {
            env::set_var(key, "42");
        }
        assert_eq!(parse_env::<u32>(key, "0"), 42);
        unsafe {
            env::remove_var(key);
        }
    }

    #[test]
    fn test_parse_env_returns_default_when_missing() {
        let key = "TEST_PARSE_ENV_MISSING";
        unsafe {
            env::remove_var(key);
        }
        assert_eq!(parse_env::<u64>(key, "10"), 10);
        assert_eq!(parse_env::<String>(key, "config.json"), "config.json");
    }

    #[test]
    fn test_parse_env_returns_type_default_on_invalid() {
        let key = "TEST_PARSE_ENV_INVALID";
        unsafe {
            env::set_var(key, "invalid");
        }
        assert_eq!(parse_env::<u64>(key, "5"), 0);
        unsafe {
            env::remove_var(key);
        }
    }

    #[test]
    fn test_parse_env_list_splits_and_trims() {
        let key = "TEST_PARSE_ENV_LIST_VALUE";
        unsafe {
            env::set_var(key, " ?, $ ,,");
        }
        assert_eq!(parse_env_list(key, "!"), vec!["?".to_string(), "$".to_string()]);
        unsafe {
            env::remove_var(key);
        }
    }

    #[test]
    fn test_parse_env_list_default_when_unset_or_blank() {
        let key = "TEST_PARSE_ENV_LIST_BLANK";
        unsafe {
            env::remove_var(key);
        }
        assert_eq!(parse_env_list(key, "!,/"), vec!["!".to_string(), "/".to_string()]);
        unsafe {
            env::set_var(key, " , ");
        }
        assert_eq!(parse_env_list(key, "!"), vec!["!".to_string()]);
        unsafe {
            env::remove_var(key);
        }
    }
}
