//! Setter synthesis — one of four shapes per settable requirement.

use crate::decl::{Expr, MethodDecl, Statement, Visibility};
use crate::error::Result;
use crate::model::{ComponentRequirement, NullPolicy};
use crate::util::raw_type;

use super::strategy::SetterShape;
use super::{Assembler, RequirementStatus};

/// Deprecation note attached to no-op setters.
const UNUSED_MODULE_NOTE: &str =
    "This module is declared, but an instance is not used in the component. \
     This method is a no-op.";

impl Assembler<'_> {
    /// Creates the setter method for a requirement, or nothing when the
    /// method already exists on a supertype.
    pub(super) fn setter_method(
        &self,
        requirement: &ComponentRequirement,
        status: RequirementStatus,
    ) -> Result<Option<MethodDecl>> {
        match status {
            RequirementStatus::Needed => self.normal_setter(requirement).map(Some),
            RequirementStatus::Unneeded => self.noop_setter(requirement).map(Some),
            RequirementStatus::UnsettableRepeatedModule => {
                self.repeated_module_setter(requirement).map(Some)
            }
            RequirementStatus::ImplementedInSupertype => Ok(None),
        }
    }

    /// Assigns the parameter to the backing field, null-checked unless the
    /// requirement tolerates null.
    fn normal_setter(&self, requirement: &ComponentRequirement) -> Result<MethodDecl> {
        let shape = self.strategy.setter_shape(requirement)?;
        let field = self.field(requirement)?;
        let param = Expr::Param(shape.param.name.clone());
        let value = match requirement.null_policy {
            NullPolicy::Allow => param,
            NullPolicy::Throw | NullPolicy::New => Expr::CheckNotNull(Box::new(param)),
        };
        let body = maybe_return_this(
            &shape,
            vec![Statement::Assign {
                field: field.name.clone(),
                value,
            }],
        );
        Ok(self.setter_decl(shape, None, body))
    }

    /// Null-checks the parameter for fail-fast consistency, then discards
    /// it. Marked deprecated as a warning to the caller.
    fn noop_setter(&self, requirement: &ComponentRequirement) -> Result<MethodDecl> {
        let shape = self.strategy.setter_shape(requirement)?;
        let body = maybe_return_this(
            &shape,
            vec![Statement::Evaluate(Expr::CheckNotNull(Box::new(
                Expr::Param(shape.param.name.clone()),
            )))],
        );
        Ok(self.setter_decl(shape, Some(UNUSED_MODULE_NOTE.to_string()), body))
    }

    /// Unconditionally fails: the module is inherited from an enclosing
    /// component and must not be re-set here.
    fn repeated_module_setter(&self, requirement: &ComponentRequirement) -> Result<MethodDecl> {
        let shape = self.strategy.setter_shape(requirement)?;
        let body = vec![Statement::ThrowUnsupported {
            type_name: raw_type(&requirement.type_name),
            message: "%s cannot be set because it is inherited from the enclosing component"
                .to_string(),
        }];
        Ok(self.setter_decl(shape, None, body))
    }

    fn setter_decl(
        &self,
        shape: SetterShape,
        deprecated: Option<String>,
        body: Vec<Statement>,
    ) -> MethodDecl {
        MethodDecl {
            name: shape.name,
            visibility: Visibility::Public,
            is_override: shape.is_override,
            deprecated,
            params: vec![shape.param],
            return_type: shape.fluent.then(|| self.creator_name().to_string()),
            body,
        }
    }
}

fn maybe_return_this(shape: &SetterShape, mut body: Vec<Statement>) -> Vec<Statement> {
    if shape.fluent {
        body.push(Statement::ReturnSelf);
    }
    body
}
