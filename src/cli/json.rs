//! `json` command.

use anyhow::{Context, Result, bail};
use serde_json::Value as JsonValue;
use std::io::Read;
use std::path::Path;

use super::args::JsonArgs;
use crate::json::{decode_flat_data, htmlsafe_json_dump, merge, resolve_dotted_value};

fn read_json(path: Option<&Path>) -> Result<JsonValue> {
    let content = match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .with_context(|| format!("Failed to read {}", p.display()))?,
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };
    serde_json::from_str(&content).context("Invalid JSON input")
}

/// Rebuild nesting from a flat object of dotted keys.
fn unflatten(value: JsonValue) -> Result<JsonValue> {
    match value {
        JsonValue::Object(map) => Ok(decode_flat_data(map)),
        other => bail!("--flat expects an object, got {other}"),
    }
}

/// Apply the transformations in `args` to `input`.
pub fn transform(input: JsonValue, args: &JsonArgs, others: Vec<JsonValue>) -> Result<String> {
    let mut value = if args.flat { unflatten(input)? } else { input };
    for other in others {
        value = merge(value, other);
    }

    let value = match &args.get {
        Some(dotted) => resolve_dotted_value(&value, dotted)
            .cloned()
            .with_context(|| format!("no value at `{dotted}`"))?,
        None => value,
    };

    let output = if args.html_safe {
        htmlsafe_json_dump(&value)?
    } else if args.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    Ok(output)
}

pub fn run(args: &JsonArgs) -> Result<String> {
    let input = read_json(args.input.as_deref())?;
    let others = args
        .merge
        .iter()
        .map(|p| read_json(Some(p)))
        .collect::<Result<Vec<_>>>()?;
    transform(input, args, others)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn args() -> JsonArgs {
        JsonArgs {
            input: None,
            flat: false,
            merge: Vec::new(),
            get: None,
            html_safe: false,
            pretty: false,
        }
    }

    #[test]
    fn test_flat_then_get() {
        let args = JsonArgs {
            flat: true,
            get: Some("tags.1".to_string()),
            ..args()
        };
        let input = json!({"tags.0": "a", "tags.1": "b"});
        assert_eq!(transform(input, &args, Vec::new()).unwrap(), r#""b""#);
    }

    #[test]
    fn test_merge_fills_gaps() {
        let out = transform(
            json!({"title": "A", "nav": null}),
            &args(),
            vec![json!({"title": "B", "nav": ["home"]})],
        )
        .unwrap();
        assert_eq!(out, r#"{"title":"A","nav":["home"]}"#);
    }

    #[test]
    fn test_html_safe_output() {
        let args = JsonArgs {
            html_safe: true,
            ..args()
        };
        let out = transform(json!("<b>"), &args, Vec::new()).unwrap();
        assert_eq!(out, r#""\u003cb\u003e""#);
    }

    #[test]
    fn test_get_missing_errors() {
        let args = JsonArgs {
            get: Some("missing".to_string()),
            ..args()
        };
        assert!(transform(json!({}), &args, Vec::new()).is_err());
    }

    #[test]
    fn test_flat_requires_object() {
        let args = JsonArgs {
            flat: true,
            ..args()
        };
        assert!(transform(json!([1]), &args, Vec::new()).is_err());
    }

    #[test]
    fn test_run_reads_files() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("in.json");
        let other = tmp.path().join("other.json");
        std::fs::write(&input, r#"{"a": 1}"#).unwrap();
        std::fs::write(&other, r#"{"b": 2}"#).unwrap();

        let args = JsonArgs {
            input: Some(input),
            merge: vec![other],
            ..args()
        };
        assert_eq!(run(&args).unwrap(), r#"{"a":1,"b":2}"#);
    }
}
