//! Factory method synthesis — validates every provided requirement per its
//! null policy, then constructs the component.

use crate::decl::{Expr, MethodDecl, Statement, Visibility};
use crate::error::{Error, Result};
use crate::model::{ComponentRequirement, NullPolicy};
use crate::util::raw_type;

use super::Assembler;

impl Assembler<'_> {
    /// The method that builds the component from the creator's fields.
    ///
    /// Checks run in requirement order, then a single constructor call
    /// passes the provided-requirement fields in that same order.
    pub(super) fn factory_method(&self) -> Result<MethodDecl> {
        let shape = self.strategy.factory_shape();
        let mut body = Vec::new();

        for requirement in self.provided_requirements() {
            let field = self.field(requirement)?;
            match requirement.null_policy {
                NullPolicy::New => {
                    if !requirement.kind.is_module() {
                        return Err(Error::Invariant(format!(
                            "null policy `new` on non-module requirement {}",
                            requirement.type_name
                        )));
                    }
                    // Deferring construction to factory time lets explicit
                    // setter calls win over the framework default.
                    body.push(Statement::IfNull {
                        field: field.name.clone(),
                        then: vec![Statement::Assign {
                            field: field.name.clone(),
                            value: default_module_instance(requirement),
                        }],
                    });
                }
                NullPolicy::Throw => {
                    body.push(Statement::CheckRequirementSet {
                        field: field.name.clone(),
                        type_name: raw_type(&field.type_name),
                    });
                }
                NullPolicy::Allow => {}
            }
        }

        let args = self
            .provided_requirements()
            .map(|requirement| Ok(Expr::Field(self.field(requirement)?.name.clone())))
            .collect::<Result<Vec<_>>>()?;
        body.push(Statement::Return(Expr::NewInstance {
            type_name: self.component_name().to_string(),
            args,
        }));

        Ok(MethodDecl {
            name: shape.name,
            visibility: Visibility::Public,
            is_override: shape.is_override,
            deprecated: None,
            params: vec![],
            return_type: Some(self.component_type().to_string()),
            body,
        })
    }
}

/// Default construction for a module whose instance was never set.
fn default_module_instance(requirement: &ComponentRequirement) -> Expr {
    Expr::NewInstance {
        type_name: raw_type(&requirement.type_name),
        args: vec![],
    }
}
