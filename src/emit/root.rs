use crate::ast::{File, NodeRef};
use crate::config::ModelConfig;
use crate::doc::{keys, DocKind, DocNode, Document};
use crate::render::ExprRenderer;

use super::Emitter;

impl<'c, R: ExprRenderer> Emitter<'c, R> {
    /// Builds the root sequence for `file`. Consumes the emitter: one
    /// emitter per file.
    ///
    /// Root order: package, imports, connectors, then constants, services
    /// and functions sorted by position. Connectors stay ahead of the
    /// sorted group whatever their own positions are.
    pub fn emit_file(mut self, file: &File) -> Document {
        let root = self.group(|e| {
            e.out.append(DocNode::new(DocKind::Package).with(keys::PACKAGE_NAME, &file.package_name));
            e.emit_all(&file.imports, NodeRef::Import);
            e.emit_all(&file.connectors, NodeRef::Connector);

            let mut top_level = file.top_level();
            // stable: equal positions keep collection order
            top_level.sort_by_key(|t| t.position());
            for item in &top_level {
                e.emit(item.node());
            }

            e.emit_all(&file.structs, NodeRef::Struct);
            e.emit_all(&file.type_converters, NodeRef::TypeConverter);
            if let Some(invoker) = &file.main_invoker {
                e.emit(NodeRef::MainInvoker(invoker));
            }
        });
        Document { root }
    }
}

/// Turns one file into its document with a fresh emitter.
///
/// Recursion follows AST depth; run very deep in-memory trees on a thread
/// with a large enough stack.
pub fn build_document<R: ExprRenderer>(file: &File, config: &ModelConfig, renderer: R) -> Document {
    Emitter::new(config, renderer).emit_file(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::*;
    use crate::render::SourceRenderer;
    use serde_json::{json, Value};

    fn constant(name: &str, position: Position) -> Const {
        Const {
            name: name.into(),
            ty: "int".into(),
            value: BasicLiteral { ty: "int".into(), value: Literal::Int(position as i64) },
            position,
        }
    }

    fn service(name: &str, position: Position) -> Service {
        Service { name: name.into(), position, ..Default::default() }
    }

    fn function(name: &str, position: Position) -> Function {
        Function { name: name.into(), position, ..Default::default() }
    }

    fn connector(name: &str, position: Position) -> Connector {
        Connector { name: name.into(), position, ..Default::default() }
    }

    /// (discriminator value, name attribute) for each root node.
    fn outline(doc: &Document) -> Vec<(String, String)> {
        let value = doc.to_value();
        value["root"]
            .as_array()
            .unwrap()
            .iter()
            .map(|node| {
                let obj = node.as_object().unwrap();
                let mut entries = obj.iter();
                let (_, tag) = entries.next().unwrap();
                let name = entries
                    .find(|(k, _)| k.ends_with("-name"))
                    .map(|(_, v)| v.as_str().unwrap_or_default().to_string())
                    .unwrap_or_default();
                (tag.as_str().unwrap().to_string(), name)
            })
            .collect()
    }

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items.iter().map(|(a, b)| (a.to_string(), b.to_string())).collect()
    }

    #[test]
    fn connectors_precede_position_sorted_group() {
        let file = File {
            package_name: "samples".into(),
            imports: vec![Import { name: "http".into(), path: "ballerina.net.http".into(), position: 9 }],
            constants: vec![constant("FIVE", 5), constant("ONE", 1)],
            services: vec![service("echo", 3)],
            connectors: vec![connector("Late", 8), connector("Early", 0)],
            ..Default::default()
        };
        let doc = build_document(&file, &ModelConfig::default(), SourceRenderer);
        assert_eq!(
            outline(&doc),
            pairs(&[
                ("package-definition", "samples"),
                ("import-definition", "http"),
                ("connector-definition", "Late"),
                ("connector-definition", "Early"),
                ("constant-definition", "ONE"),
                ("service-definition", "echo"),
                ("constant-definition", "FIVE"),
            ])
        );
    }

    #[test]
    fn equal_positions_keep_collection_order() {
        let file = File {
            package_name: "p".into(),
            constants: vec![constant("A", 2)],
            services: vec![service("B", 2), service("C", 1)],
            functions: vec![function("D", 2), function("E", 1)],
            ..Default::default()
        };
        let doc = build_document(&file, &ModelConfig::default(), SourceRenderer);
        assert_eq!(
            outline(&doc),
            pairs(&[
                ("package-definition", "p"),
                ("service-definition", "C"),
                ("function-definition", "E"),
                ("constant-definition", "A"),
                ("service-definition", "B"),
                ("function-definition", "D"),
            ])
        );
    }

    #[test]
    fn empty_file_has_only_package_node() {
        let file = File {
            package_name: "empty".into(),
            structs: vec![StructDecl { name: "Person".into(), ..Default::default() }],
            type_converters: vec![TypeConverter { name: "toJson".into(), ..Default::default() }],
            main_invoker: Some(MainInvoker { function: "main".into() }),
            ..Default::default()
        };
        let doc = build_document(&file, &ModelConfig::default(), SourceRenderer);
        assert_eq!(
            doc.to_value(),
            json!({ "root": [{ "definition-type": "package-definition", "package-name": "empty" }] })
        );
    }

    #[test]
    fn decodes_and_builds_from_json() {
        let src = json!({
            "package_name": "demo",
            "functions": [{
                "name": "main",
                "is_public": true,
                "position": 1,
                "parameters": [{ "name": "args", "type": "string[]" }],
                "body": { "statements": [
                    { "kind": "assign", "lhs": [{ "kind": "variable-ref", "name": "x" }],
                      "rhs": { "kind": "binary", "op": "add",
                               "lhs": { "kind": "basic-literal", "type": "int", "value": 2 },
                               "rhs": { "kind": "basic-literal", "type": "int", "value": 3 } } },
                    { "kind": "function-invocation", "name": "println", "package": "system",
                      "args": [{ "kind": "variable-ref", "name": "x" }] }
                ]}
            }]
        });
        let file: File = serde_json::from_value(src).unwrap();
        let doc = build_document(&file, &ModelConfig::default(), SourceRenderer).to_value();
        let main = &doc["root"][1];
        assert_eq!(main["function-name"], "main");
        let children = main["children"].as_array().unwrap();
        assert_eq!(children[0]["parameter-type"], "string[]");
        assert_eq!(children[1]["definition-type"], "return-type");
        assert_eq!(children[2]["statement-type"], "assignment-statement");
        assert_eq!(
            children[2]["children"][1]["children"][0]["expression-type"],
            Value::from("add-expression")
        );
        assert_eq!(children[3]["children"][0]["function-name"], "system:println");
    }
}
