use crate::ast::{Expr, NodeRef, Stmt};
use crate::doc::{keys, DocKind, DocNode};
use crate::render::ExprRenderer;

use super::Emitter;

impl<'c, R: ExprRenderer> Emitter<'c, R> {
    pub(super) fn stmt(&mut self, stmt: &Stmt) -> Option<DocNode> {
        match stmt {
            // flattened by `Emitter::emit`
            Stmt::Block(_) => None,
            Stmt::Assign { lhs, rhs } => Some(self.assign(lhs, rhs)),
            Stmt::Comment { text } => {
                Some(DocNode::new(DocKind::Comment).with(keys::COMMENT_STRING, text))
            }
            Stmt::IfElse { condition, then_body, else_body } => {
                Some(self.if_else(condition, then_body, else_body.as_deref()))
            }
            Stmt::While { condition, body } => {
                let children = self.group(|e| {
                    e.emit(NodeRef::Expr(condition));
                    if let Some(body) = body {
                        e.emit(NodeRef::Stmt(body));
                    }
                });
                Some(DocNode::new(DocKind::While).attach(keys::CHILDREN, children))
            }
            Stmt::FunctionInvocation(call) => {
                let children = self.group(|e| {
                    let invocation = e.function_invocation(call);
                    e.out.append(invocation);
                });
                Some(DocNode::new(DocKind::FunctionInvocationStmt).attach(keys::CHILDREN, children))
            }
            Stmt::ActionInvocation(_) => None,
            Stmt::Reply { expr } => {
                let mut node = DocNode::new(DocKind::Reply);
                if self.config.with_text() {
                    node = node.with(keys::EXPRESSION, self.renderer.render_expr(expr));
                }
                let children = self.group(|e| e.emit(NodeRef::Expr(expr)));
                Some(node.attach(keys::CHILDREN, children))
            }
            Stmt::Return { exprs } => {
                let children = self.group(|e| e.emit_all(exprs, NodeRef::Expr));
                Some(DocNode::new(DocKind::Return).attach(keys::CHILDREN, children))
            }
        }
    }

    fn assign(&mut self, lhs: &[Expr], rhs: &Expr) -> DocNode {
        let children = self.group(|e| {
            let left = e.group(|e| e.emit_all(lhs, NodeRef::Expr));
            e.out.append(DocNode::new(DocKind::LeftOperand).attach(keys::CHILDREN, left));
            let right = e.group(|e| e.emit(NodeRef::Expr(rhs)));
            e.out.append(DocNode::new(DocKind::RightOperand).attach(keys::CHILDREN, right));
        });
        DocNode::new(DocKind::Assignment).attach(keys::CHILDREN, children)
    }

    fn if_else(&mut self, condition: &Expr, then_body: &Stmt, else_body: Option<&Stmt>) -> DocNode {
        // body first, then condition
        let if_branch = self.group(|e| {
            let body = e.group(|e| e.emit(NodeRef::Stmt(then_body)));
            e.out.append(DocNode::new(DocKind::ThenBody).attach(keys::CHILDREN, body));
            let cond = e.group(|e| e.emit(NodeRef::Expr(condition)));
            e.out.append(DocNode::new(DocKind::IfCondition).attach(keys::CHILDREN, cond));
        });
        let node = DocNode::new(DocKind::IfElse).attach(keys::IF_BRANCH, if_branch);
        match else_body {
            Some(else_body) => {
                let else_branch = self.group(|e| e.emit(NodeRef::Stmt(else_body)));
                node.attach(keys::ELSE_BRANCH, else_branch)
            }
            None => node,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{emit_one, to_json};
    use crate::ast::*;
    use crate::config::ModelConfig;
    use serde_json::json;

    #[test]
    fn reply_carries_text_and_structure() {
        let reply = Stmt::Reply { expr: Expr::int(1) };
        let out = to_json(&emit_one(&ModelConfig::default(), NodeRef::Stmt(&reply)));
        assert_eq!(
            out[0],
            json!({
                "statement-type": "reply-statement",
                "expression": "1",
                "children": [{
                    "expression-type": "basic-literal-expression",
                    "basic-literal-type": "int",
                    "basic-literal-value": "1"
                }]
            })
        );
    }

    #[test]
    fn structured_reply_drops_text() {
        let reply = Stmt::Reply { expr: Expr::var("m") };
        let out = to_json(&emit_one(&ModelConfig::structured(), NodeRef::Stmt(&reply)));
        assert!(out[0].get("expression").is_none());
        assert_eq!(out[0]["children"][0]["variable-reference-name"], "m");
    }

    #[test]
    fn if_else_places_body_before_condition() {
        let stmt = Stmt::IfElse {
            condition: Expr::binary(BinaryOp::LessThan, Expr::var("a"), Expr::int(10)),
            then_body: Box::new(Stmt::block(vec![
                Stmt::Comment { text: "// small".into() },
                Stmt::Return { exprs: vec![Expr::var("a")] },
            ])),
            else_body: Some(Box::new(Stmt::block(vec![Stmt::Return { exprs: vec![] }]))),
        };
        let out = to_json(&emit_one(&ModelConfig::default(), NodeRef::Stmt(&stmt)));
        let node = &out[0];
        assert_eq!(node["statement-type"], "if-else-statement");
        assert!(node.get("children").is_none());

        let if_branch = node["if-branch"].as_array().unwrap();
        assert_eq!(if_branch.len(), 2);
        assert_eq!(if_branch[0]["expression-type"], "then-body");
        assert_eq!(if_branch[0]["children"].as_array().unwrap().len(), 2);
        assert_eq!(if_branch[1]["expression-type"], "if-condition");
        assert_eq!(if_branch[1]["children"][0]["expression-type"], "less-than-expression");

        assert_eq!(node["else-branch"], json!([{ "statement-type": "return-statement", "children": [] }]));
    }

    #[test]
    fn if_without_else_has_no_else_branch() {
        let stmt = Stmt::IfElse {
            condition: Expr::var("ok"),
            then_body: Box::new(Stmt::block(vec![])),
            else_body: None,
        };
        let out = to_json(&emit_one(&ModelConfig::default(), NodeRef::Stmt(&stmt)));
        assert!(out[0].get("else-branch").is_none());
        assert_eq!(out[0]["if-branch"][0]["children"], json!([]));
    }

    #[test]
    fn assign_wraps_left_and_right_operands() {
        let stmt = Stmt::Assign {
            lhs: vec![Expr::var("a"), Expr::var("b")],
            rhs: Expr::call("pair", vec![]),
        };
        let out = to_json(&emit_one(&ModelConfig::default(), NodeRef::Stmt(&stmt)));
        let children = out[0]["children"].as_array().unwrap();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0]["expression-type"], "left-operand");
        assert_eq!(children[0]["children"].as_array().unwrap().len(), 2);
        assert_eq!(children[1]["expression-type"], "right-operand");
        assert_eq!(children[1]["children"][0]["function-name"], "pair");
    }

    #[test]
    fn while_flattens_condition_and_body() {
        let stmt = Stmt::While {
            condition: Expr::var("running"),
            body: Some(Box::new(Stmt::block(vec![
                Stmt::FunctionInvocation(FunctionInvocation { name: "tick".into(), ..Default::default() }),
                Stmt::Comment { text: "// again".into() },
            ]))),
        };
        let out = to_json(&emit_one(&ModelConfig::default(), NodeRef::Stmt(&stmt)));
        let children = out[0]["children"].as_array().unwrap();
        assert_eq!(children.len(), 3);
        assert_eq!(children[0]["expression-type"], "variable-reference-expression");
        assert_eq!(children[1]["statement-type"], "function-invocation-statement");
        assert_eq!(children[1]["children"][0]["function-name"], "tick");
        assert_eq!(children[2]["statement-type"], "comment-statement");
    }

    #[test]
    fn block_contributes_its_statements_only() {
        let stmt = Stmt::block(vec![
            Stmt::Comment { text: "// one".into() },
            Stmt::block(vec![Stmt::Comment { text: "// two".into() }]),
        ]);
        let out = emit_one(&ModelConfig::default(), NodeRef::Stmt(&stmt));
        assert_eq!(out.len(), 2);
    }
}
