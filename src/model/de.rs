//! Helpers for the loosely typed fields of oapi responses.

use std::{collections::BTreeMap, fmt::Display, str::FromStr};

use serde::{de, Deserialize, Deserializer};
use serde_json::Value;

use super::error::Error;

/// Accepts any JSON scalar and keeps its text form, `null` becomes "".
pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(de::Error::custom(format!("expected scalar, got {}", other))),
    }
}

/// Parses the `{deptId:value,...}` text the directory api returns for
/// per department attributes. Quoted keys and values are accepted too.
pub fn parse_dept_map<T>(input: &str) -> Result<BTreeMap<i64, T>, Error>
where
    T: FromStr,
    T::Err: Display,
{
    let trimmed = input.trim();
    let inner = trimmed
        .strip_prefix('{')
        .and_then(|s| s.strip_suffix('}'))
        .unwrap_or(trimmed);
    let mut res = BTreeMap::new();
    for item in inner.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let (key, value) = item
            .split_once(':')
            .ok_or_else(|| Error::Decode(format!("no ':' in '{}'", item)))?;
        let key = unquote(key)
            .parse::<i64>()
            .map_err(|e| Error::Decode(format!("wrong department id '{}': {}", key, e)))?;
        let value = unquote(value)
            .parse::<T>()
            .map_err(|e| Error::Decode(format!("wrong value '{}': {}", value, e)))?;
        res.insert(key, value);
    }
    Ok(res)
}

/// Splits a `|` separated id list, skipping empty items.
pub fn split_list(input: &str) -> Vec<String> {
    input
        .split('|')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn unquote(s: &str) -> &str {
    s.trim().trim_matches('"')
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "lenient_string")]
        v: String,
    }

    #[test_case(r#"{"v":"abc"}"#, "abc"; "string")]
    #[test_case(r#"{"v":true}"#, "true"; "bool")]
    #[test_case(r#"{"v":1520265600000}"#, "1520265600000"; "number")]
    #[test_case(r#"{"v":null}"#, ""; "null")]
    #[test_case(r#"{}"#, ""; "missing")]
    fn test_lenient_string(input: &str, wanted: &str) {
        let holder: Holder = serde_json::from_str(input).unwrap();
        assert_eq!(holder.v, wanted);
    }

    #[test]
    fn test_lenient_string_rejects_objects() {
        let res = serde_json::from_str::<Holder>(r#"{"v":{"a":1}}"#);
        assert!(res.is_err());
    }

    #[test_case("", vec![]; "empty")]
    #[test_case("{}", vec![]; "empty map")]
    #[test_case("{1:71738366882504}", vec![(1, 71738366882504)]; "one")]
    #[test_case("{1:10, 22:-3}", vec![(1, 10), (22, -3)]; "several")]
    #[test_case(r#"{"5":"7"}"#, vec![(5, 7)]; "quoted")]
    fn test_parse_dept_map(input: &str, wanted: Vec<(i64, i64)>) {
        let actual = parse_dept_map::<i64>(input).unwrap();
        assert_eq!(actual, wanted.into_iter().collect::<BTreeMap<_, _>>());
    }

    #[test_case("{1}"; "no colon")]
    #[test_case("{a:1}"; "bad key")]
    #[test_case("{1:yes}"; "bad value")]
    fn test_parse_dept_map_err(input: &str) {
        let res = parse_dept_map::<bool>(input);
        assert!(matches!(res, Err(Error::Decode(_))));
    }

    #[test_case("", vec![]; "empty")]
    #[test_case("u1", vec!["u1"]; "one")]
    #[test_case("u1|u2||u3|", vec!["u1", "u2", "u3"]; "several")]
    fn test_split_list(input: &str, wanted: Vec<&str>) {
        assert_eq!(split_list(input), wanted);
    }
}
