//! Loading serialized ASTs.
//!
//! Inputs are JSON dumps of `ast::File`. Decode failures report the JSON path
//! of the offending node. A JSON pointer can narrow each input down to the
//! embedded file node first (e.g. `/result/ast`).
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::ast::File;
use crate::error::{ModelError, Result};

fn decode<'de, T, D>(origin: &str, de: D) -> Result<T>
where
    T: DeserializeOwned,
    D: serde::Deserializer<'de>,
    D::Error: std::fmt::Display,
{
    serde_path_to_error::deserialize::<_, T>(de).map_err(|err| ModelError::Decode {
        origin: origin.to_string(),
        path: err.path().to_string(),
        message: err.into_inner().to_string(),
    })
}

pub fn file_from_str(origin: &str, src: &str) -> Result<File> {
    let de = &mut serde_json::Deserializer::from_str(src);
    decode(origin, de)
}

pub fn file_from_value(origin: &str, value: Value) -> Result<File> {
    decode(origin, value)
}

/// Reads one input, optionally selecting the file node with `json_pointer`.
pub fn load_file(path: &Path, json_pointer: Option<&str>) -> Result<File> {
    let origin = path.to_string_lossy().to_string();
    let src = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    match json_pointer {
        None => file_from_str(&origin, &src),
        Some(pointer) => {
            let de = &mut serde_json::Deserializer::from_str(&src);
            let mut value: Value = decode(&origin, de)?;
            let selected = value.pointer_mut(pointer).map(Value::take).ok_or_else(|| {
                ModelError::PointerMiss { origin: origin.clone(), pointer: pointer.to_string() }
            })?;
            file_from_value(&origin, selected)
        }
    }
}

/// Expands literal paths and glob patterns, in argument order.
pub fn resolve_inputs<I>(patterns: I) -> Result<Vec<PathBuf>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'[' | b'{'))
    }

    let mut out = Vec::<PathBuf>::new();
    for raw in patterns {
        let pattern = raw.as_ref();
        if !has_glob_chars(pattern) {
            out.push(PathBuf::from(pattern));
            continue;
        }
        let before = out.len();
        for entry in glob::glob(pattern)? {
            out.push(entry?);
        }
        if out.len() == before {
            return Err(ModelError::EmptyGlob(pattern.to_string()));
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_error_names_the_json_path() {
        let src = r#"{
            "package_name": "p",
            "functions": [{ "name": "f", "body": { "statements": [
                { "kind": "reply", "expr": { "kind": "binary", "op": "modulo",
                  "lhs": { "kind": "variable-ref", "name": "a" },
                  "rhs": { "kind": "variable-ref", "name": "b" } } }
            ]}}]
        }"#;
        let err = file_from_str("inline", src).unwrap_err();
        match err {
            ModelError::Decode { origin, path, .. } => {
                assert_eq!(origin, "inline");
                assert!(path.starts_with("functions[0].body.statements[0]"), "{path}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_collections_are_empty() {
        let file = file_from_str("inline", r#"{ "package_name": "bare" }"#).unwrap();
        assert!(file.imports.is_empty());
        assert!(file.functions.is_empty());
        assert!(file.main_invoker.is_none());
    }

    fn reply_of_nested_negations(depth: usize) -> String {
        let mut expr = r#"{ "kind": "variable-ref", "name": "x" }"#.to_string();
        for _ in 0..depth {
            expr = format!(r#"{{ "kind": "unary", "op": "not", "operand": {expr} }}"#);
        }
        format!(
            r#"{{ "package_name": "deep", "functions": [{{ "name": "f", "body": {{ "statements": [
                {{ "kind": "reply", "expr": {expr} }}
            ]}}}}]}}"#
        )
    }

    #[test]
    fn nesting_depth_is_bounded_at_decode() {
        let file = file_from_str("moderate", &reply_of_nested_negations(40)).unwrap();
        let doc = crate::build_document(&file, &crate::ModelConfig::default(), crate::SourceRenderer);
        let reply = doc.to_value()["root"][1]["children"][1].clone();
        assert_eq!(reply["statement-type"], "reply-statement");
        assert_eq!(reply["expression"].as_str().unwrap().matches('!').count(), 40);

        let err = file_from_str("hostile", &reply_of_nested_negations(500)).unwrap_err();
        match err {
            ModelError::Decode { origin, message, .. } => {
                assert_eq!(origin, "hostile");
                assert!(message.contains("recursion limit exceeded"), "{message}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn pointer_selects_embedded_file() {
        let dir = std::env::temp_dir().join(format!("bal-doc-model-input-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("wrapped.json");
        std::fs::write(&path, r#"{ "result": { "ast": { "package_name": "wrapped" } } }"#).unwrap();

        let file = load_file(&path, Some("/result/ast")).unwrap();
        assert_eq!(file.package_name, "wrapped");

        let err = load_file(&path, Some("/result/missing")).unwrap_err();
        assert!(matches!(err, ModelError::PointerMiss { .. }));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn literal_paths_pass_through() {
        let paths = resolve_inputs(["a.json", "dir/b.json"]).unwrap();
        assert_eq!(paths, vec![PathBuf::from("a.json"), PathBuf::from("dir/b.json")]);
    }
}
