//! Java code generation using genco

use chrono::Utc;
use genco::prelude::*;

use crate::creator::CreatorImplementation;
use crate::decl::{ConstructorDecl, Expr, FieldDecl, MethodDecl, Statement, Supertype, TypeDecl};

use super::RenderConfig;

/// Render a creator artifact to a Java source string
pub(super) fn render(creator: &CreatorImplementation, config: &RenderConfig) -> String {
    let tokens = JavaRenderer { config }.render(creator);
    tokens.to_file_string().unwrap_or_default()
}

struct JavaRenderer<'a> {
    config: &'a RenderConfig,
}

impl JavaRenderer<'_> {
    fn render(&self, creator: &CreatorImplementation) -> java::Tokens {
        let decl = creator.type_decl();
        let package_line = self
            .config
            .package
            .as_ref()
            .map(|package| format!("package {};", package));
        let has_fields = !decl.fields.is_empty();
        let generated_by = "// GENERATED BY: wiregen";
        let do_not_edit = "// DO NOT EDIT - regenerate from the component graph";

        quote! {
            $(for line in &package_line => $line$['\n'])
            $(if self.config.provenance {
                $generated_by
                $(format!("// SOURCE HASH: {}", creator.source_hash()))
                $(format!("// GENERATED: {}", Utc::now().to_rfc3339()))
                $do_not_edit
                $['\n']
            })
            $(self.class_header(decl)) {
                $(for field in &decl.fields join ($['\r']) => $(self.render_field(field)))
                $(if has_fields { $['\n'] })
                $(for constructor in &decl.constructor => $(self.render_constructor(constructor, &decl.name))$['\n'])
                $(for method in &decl.methods join ($['\n']) => $(self.render_method(method)))
            }
        }
    }

    fn class_header(&self, decl: &TypeDecl) -> String {
        let mut header = format!("{} ", decl.visibility);
        if decl.is_static {
            header.push_str("static ");
        }
        if decl.is_abstract {
            header.push_str("abstract ");
        } else if decl.is_final {
            header.push_str("final ");
        }
        header.push_str("class ");
        header.push_str(&decl.name);
        match &decl.supertype {
            Some(Supertype::Extends(supertype)) => {
                header.push_str(" extends ");
                header.push_str(supertype);
            }
            Some(Supertype::Implements(supertype)) => {
                header.push_str(" implements ");
                header.push_str(supertype);
            }
            None => {}
        }
        header
    }

    fn render_field(&self, field: &FieldDecl) -> String {
        format!("{} {} {};", field.visibility, field.type_name, field.name)
    }

    fn render_constructor(&self, constructor: &ConstructorDecl, class_name: &str) -> java::Tokens {
        let params = params_list(&constructor.params);
        let header = format!("{} {}({})", constructor.visibility, class_name, params);
        quote! {
            $header {
                $(for statement in &constructor.body join ($['\r']) => $(self.render_statement(statement)))
            }
        }
    }

    fn render_method(&self, method: &MethodDecl) -> java::Tokens {
        let javadoc = method
            .deprecated
            .as_ref()
            .map(|note| format!("/** @deprecated {} */", note));
        let deprecated = method.deprecated.as_ref().map(|_| "@Deprecated");
        let override_annotation = method.is_override.then_some("@Override");

        quote! {
            $(for line in &javadoc => $line$['\r'])
            $(for annotation in &deprecated => $(*annotation)$['\r'])
            $(for annotation in &override_annotation => $(*annotation)$['\r'])
            $(self.method_header(method)) {
                $(for statement in &method.body join ($['\r']) => $(self.render_statement(statement)))
            }
        }
    }

    fn method_header(&self, method: &MethodDecl) -> String {
        format!(
            "{} {} {}({})",
            method.visibility,
            method.return_type.as_deref().unwrap_or("void"),
            method.name,
            params_list(&method.params)
        )
    }

    fn render_statement(&self, statement: &Statement) -> java::Tokens {
        match statement {
            Statement::Assign { field, value } => {
                quote!(this.$(field) = $(self.render_expr(value));)
            }
            Statement::Evaluate(expr) => quote!($(self.render_expr(expr));),
            Statement::IfNull { field, then } => quote! {
                if (this.$(field) == null) {
                    $(for statement in then join ($['\r']) => $(self.render_statement(statement)))
                }
            },
            Statement::CheckRequirementSet { field, type_name } => quote! {
                $(self.preconditions()).checkBuilderRequirement(this.$(field), $(type_name).class);
            },
            Statement::ThrowUnsupported { type_name, message } => quote! {
                throw new UnsupportedOperationException(String.format($(quoted(message)), $(type_name).class.getCanonicalName()));
            },
            Statement::ReturnSelf => quote!(return this;),
            Statement::Return(expr) => quote!(return $(self.render_expr(expr));),
        }
    }

    fn render_expr(&self, expr: &Expr) -> java::Tokens {
        match expr {
            Expr::Param(name) => quote!($(name)),
            Expr::Field(name) => quote!($(name)),
            Expr::CheckNotNull(inner) => {
                quote!($(self.preconditions()).checkNotNull($(self.render_expr(inner))))
            }
            Expr::NewInstance { type_name, args } => {
                quote!(new $(type_name)($(for arg in args join (, ) => $(self.render_expr(arg)))))
            }
        }
    }

    fn preconditions(&self) -> &str {
        &self.config.preconditions_class
    }
}

fn params_list(params: &[crate::decl::Param]) -> String {
    params
        .iter()
        .map(|param| format!("{} {}", param.type_name, param.name))
        .collect::<Vec<_>>()
        .join(", ")
}
