use crate::ast::*;
use crate::doc::{keys, DocKind, DocNode};
use crate::render::ExprRenderer;

use super::Emitter;

impl<'c, R: ExprRenderer> Emitter<'c, R> {
    pub(super) fn import(&mut self, import: &Import) -> DocNode {
        DocNode::new(DocKind::Import)
            .with(keys::IMPORT_PACKAGE_NAME, &import.name)
            .with(keys::IMPORT_PACKAGE_PATH, &import.path)
    }

    fn annotations(&mut self, annotations: &[Annotation]) -> Vec<DocNode> {
        self.group(|e| e.emit_all(annotations, NodeRef::Annotation))
    }

    pub(super) fn service(&mut self, service: &Service) -> DocNode {
        let annotations = self.annotations(&service.annotations);
        let children = self.group(|e| {
            e.emit_all(&service.variables, NodeRef::VariableDcl);
            e.emit_all(&service.connector_dcls, NodeRef::ConnectorDcl);
            e.emit_all(&service.resources, NodeRef::Resource);
        });
        DocNode::new(DocKind::Service)
            .with(keys::SERVICE_NAME, &service.name)
            .attach(keys::ANNOTATIONS, annotations)
            .attach(keys::CHILDREN, children)
    }

    pub(super) fn connector(&mut self, connector: &Connector) -> DocNode {
        let annotations = self.annotations(&connector.annotations);
        let children = self.group(|e| {
            e.emit_all(&connector.variables, NodeRef::VariableDcl);
            e.emit_all(&connector.parameters, NodeRef::Parameter);
            e.emit_all(&connector.connector_dcls, NodeRef::ConnectorDcl);
            e.emit_all(&connector.actions, NodeRef::Action);
        });
        DocNode::new(DocKind::Connector)
            .with(keys::CONNECTOR_NAME, &connector.name)
            .attach(keys::ANNOTATIONS, annotations)
            .attach(keys::CHILDREN, children)
    }

    pub(super) fn resource(&mut self, resource: &Resource) -> DocNode {
        let annotations = self.annotations(&resource.annotations);
        let children = self.group(|e| {
            e.emit_all(&resource.variables, NodeRef::VariableDcl);
            e.emit_all(&resource.parameters, NodeRef::Parameter);
            e.emit_all(&resource.connector_dcls, NodeRef::ConnectorDcl);
            e.emit_all(&resource.workers, NodeRef::Worker);
            if let Some(body) = &resource.body {
                e.emit_stmts(&body.statements);
            }
        });
        DocNode::new(DocKind::Resource)
            .with(keys::RESOURCE_NAME, &resource.name)
            .attach(keys::ANNOTATIONS, annotations)
            .attach(keys::CHILDREN, children)
    }

    pub(super) fn function(&mut self, function: &Function) -> DocNode {
        let annotations = self.annotations(&function.annotations);
        let children = self.group(|e| {
            e.emit_all(&function.variables, NodeRef::VariableDcl);
            e.emit_all(&function.parameters, NodeRef::Parameter);
            e.emit_all(&function.connector_dcls, NodeRef::ConnectorDcl);
            let return_type = return_type(&function.return_parameters);
            e.out.append(return_type);
            e.emit_stmts(&function.body.statements);
        });
        DocNode::new(DocKind::Function)
            .with(keys::FUNCTION_NAME, &function.name)
            .with(keys::IS_PUBLIC_FUNCTION, function.is_public)
            .attach(keys::ANNOTATIONS, annotations)
            .attach(keys::CHILDREN, children)
    }

    pub(super) fn action(&mut self, action: &Action) -> DocNode {
        let annotations = self.annotations(&action.annotations);
        let children = self.group(|e| {
            e.emit_all(&action.variables, NodeRef::VariableDcl);
            e.emit_all(&action.parameters, NodeRef::Parameter);
            e.emit_all(&action.connector_dcls, NodeRef::ConnectorDcl);
            let return_type = return_type(&action.return_parameters);
            e.out.append(return_type);
            e.emit_stmts(&action.body.statements);
        });
        DocNode::new(DocKind::Action)
            .with(keys::ACTION_NAME, &action.name)
            .attach(keys::ANNOTATIONS, annotations)
            .attach(keys::CHILDREN, children)
    }

    pub(super) fn worker(&mut self, worker: &Worker) -> DocNode {
        let children = self.group(|e| {
            e.emit_all(&worker.connector_dcls, NodeRef::ConnectorDcl);
            e.emit_all(&worker.variables, NodeRef::VariableDcl);
            for stmt in &worker.statements {
                if e.config.with_text() {
                    let text = e.renderer.render_stmt(stmt);
                    e.out.append(DocNode::new(DocKind::StatementText).with(keys::STATEMENT, text));
                } else {
                    e.emit(NodeRef::Stmt(stmt));
                }
            }
        });
        DocNode::new(DocKind::Worker)
            .with(keys::WORKER_NAME, &worker.name)
            .attach(keys::CHILDREN, children)
    }

    pub(super) fn annotation(&mut self, annotation: &Annotation) -> DocNode {
        let pairs = annotation
            .attributes
            .iter()
            .map(|(k, v)| {
                DocNode::new(DocKind::AnnotationAttribute)
                    .with(keys::ATTRIBUTE_KEY, k)
                    .with(keys::ATTRIBUTE_VALUE, v)
            })
            .collect();
        DocNode::new(DocKind::Annotation)
            .with(keys::ANNOTATION_NAME, &annotation.name)
            .with(keys::ANNOTATION_VALUE, &annotation.value)
            .attach(keys::CHILDREN, pairs)
    }

    pub(super) fn parameter(&mut self, parameter: &Parameter) -> DocNode {
        let annotations = self.annotations(&parameter.annotations);
        DocNode::new(DocKind::Parameter)
            .with(keys::PARAMETER_NAME, &parameter.name)
            .with(keys::PARAMETER_TYPE, &parameter.ty)
            .attach(keys::CHILDREN, annotations)
    }

    pub(super) fn connector_dcl(&mut self, dcl: &ConnectorDcl) -> DocNode {
        let args = self.group(|e| e.emit_all(&dcl.args, NodeRef::Expr));
        DocNode::new(DocKind::ConnectorDcl)
            .with(keys::CONNECTOR_DCL_NAME, &dcl.connector)
            .with(keys::CONNECTOR_DCL_PACKAGE_NAME, dcl.package.as_ref())
            .with(keys::CONNECTOR_DCL_VARIABLE, &dcl.variable)
            .attach(keys::CHILDREN, args)
    }

    pub(super) fn variable_dcl(&mut self, dcl: &VariableDcl) -> DocNode {
        DocNode::new(DocKind::VariableDcl)
            .with(keys::VARIABLE_NAME, &dcl.name)
            .with(keys::VARIABLE_TYPE, &dcl.ty)
    }

    pub(super) fn constant(&mut self, constant: &Const) -> DocNode {
        DocNode::new(DocKind::Constant)
            .with(keys::CONSTANT_TYPE, &constant.ty)
            .with(keys::CONSTANT_NAME, &constant.name)
            .with(keys::CONSTANT_VALUE, constant.value.value.value_text())
    }
}

/// The synthesized node listing a callable's declared return slots.
fn return_type(params: &[ReturnParameter]) -> DocNode {
    let args = params
        .iter()
        .map(|p| {
            let node = DocNode::new(DocKind::ReturnArgument).with(keys::PARAMETER_TYPE, &p.ty);
            match &p.name {
                Some(name) => node.with(keys::PARAMETER_NAME, name),
                None => node,
            }
        })
        .collect();
    DocNode::new(DocKind::ReturnType).attach(keys::CHILDREN, args)
}
