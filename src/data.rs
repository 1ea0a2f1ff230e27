use std::collections::BTreeMap;
use std::fs;

use anyhow::{anyhow, Context, Error};
use minijinja::Value;
use serde::Deserialize;

use crate::config::Config;

/// Builds the variable mapping that is passed as the root context to
/// template execution.
///
/// Sources merge in fixed precedence: data file first, then the inline
/// JSON string, then `--set` overrides in command line order.  Later
/// writes overwrite earlier ones per key.
pub fn build_context(config: &Config) -> Result<BTreeMap<String, Value>, Error> {
    let mut vars = BTreeMap::new();

    if let Some(path) = config.data_path() {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("unable to read data file '{}'", path.display()))?;
        let fields = parse_object(&contents)
            .with_context(|| format!("unable to parse data file '{}'", path.display()))?;
        vars.extend(fields);
    }

    if let Some(raw) = config.inline_json() {
        let fields = parse_object(raw).context("invalid inline JSON data")?;
        vars.extend(fields);
    }

    for entry in config.set_vars() {
        apply_set_var(&mut vars, entry)?;
    }

    Ok(vars)
}

fn parse_object(contents: &str) -> Result<BTreeMap<String, Value>, Error> {
    let data: Value = serde_json::from_str(contents)?;
    // Arbitrary values deserialize into the mapping without loss, so the
    // only way this can fail is a non-object top level.
    Deserialize::deserialize(data).map_err(|_| anyhow!("top-level value must be a JSON object"))
}

fn apply_set_var(vars: &mut BTreeMap<String, Value>, entry: &str) -> Result<(), Error> {
    let (key, raw_value) = entry
        .split_once('=')
        .ok_or_else(|| anyhow!("invalid variable '{}' (expected key=value)", entry))?;
    vars.insert(key.trim().to_string(), interpret_raw_value(raw_value.trim()));
    Ok(())
}

/// Best effort coercion: anything that parses as JSON is stored as the
/// parsed value, everything else stays a plain string.  This makes
/// `count=3` a number and `name=Bob` a string.
fn interpret_raw_value(s: &str) -> Value {
    serde_json::from_str(s).unwrap_or_else(|_| Value::from(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpret_raw_value() {
        assert_eq!(interpret_raw_value("42"), Value::from(42));
        assert_eq!(interpret_raw_value("true"), Value::from(true));
        assert_eq!(interpret_raw_value("null"), Value::from(()));
        assert_eq!(interpret_raw_value("\"quoted\""), Value::from("quoted"));
        assert_eq!(interpret_raw_value("hello world"), Value::from("hello world"));
        assert_eq!(interpret_raw_value("[1, 2]"), Value::from_serialize([1, 2]));
    }

    #[test]
    fn test_interpret_raw_value_object() {
        let value = interpret_raw_value(r#"{"a": 1}"#);
        assert_eq!(value.get_attr("a").unwrap(), Value::from(1));
    }

    #[test]
    fn test_apply_set_var() {
        let mut vars = BTreeMap::new();
        apply_set_var(&mut vars, "name=Bob").unwrap();
        assert_eq!(vars["name"], Value::from("Bob"));
        apply_set_var(&mut vars, " name = Alice ").unwrap();
        assert_eq!(vars["name"], Value::from("Alice"));
        apply_set_var(&mut vars, "count=3").unwrap();
        assert_eq!(vars["count"], Value::from(3));
        // only the first '=' splits
        apply_set_var(&mut vars, "expr=a=b").unwrap();
        assert_eq!(vars["expr"], Value::from("a=b"));
    }

    #[test]
    fn test_apply_set_var_missing_separator() {
        let mut vars = BTreeMap::new();
        let err = apply_set_var(&mut vars, "novalue").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid variable 'novalue' (expected key=value)"
        );
        assert!(vars.is_empty());
    }

    #[test]
    fn test_parse_object_requires_object() {
        assert!(parse_object(r#"{"a": 1}"#).is_ok());
        assert!(parse_object("[1, 2, 3]").is_err());
        assert!(parse_object("42").is_err());
        assert!(parse_object("not json").is_err());
    }

    #[test]
    fn test_merge_precedence() {
        let matches = crate::cli::make_command().get_matches_from([
            "tmpl",
            "-t",
            "unused.txt",
            "-i",
            r#"{"a": 1, "b": 2}"#,
            "-s",
            "b=3",
            "-s",
            "b=4",
        ]);
        let config = Config::from_matches(&matches);
        let vars = build_context(&config).unwrap();
        assert_eq!(vars["a"], Value::from(1));
        assert_eq!(vars["b"], Value::from(4));
    }
}
