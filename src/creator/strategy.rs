//! Creator shape strategies
//!
//! The two creator flavors form a closed set: a creator either implements a
//! user-authored contract type, or is a builder invented from scratch for a
//! root component without one. Everything that differs between the two —
//! visibility, supertype wiring, constructor, setter signatures, factory
//! signature, and requirement classification — lives here.

use crate::decl::{ConstructorDecl, Param, Supertype, Visibility};
use crate::error::{Error, Result};
use crate::model::{ComponentImplementation, ComponentRequirement, CreatorDescriptor};
use crate::util::{raw_type, simple_variable_name};

use super::RequirementStatus;

/// The creator flavor driving synthesis for one component implementation.
pub(super) enum Strategy<'a> {
    /// The descriptor carries a user-authored creator contract.
    ContractBound { contract: &'a CreatorDescriptor },
    /// No contract: synthesize a builder for a root component.
    RootSynthesized,
}

/// Signature of one setter method, before its body is attached.
pub(super) struct SetterShape {
    pub name: String,
    pub param: Param,
    /// Non-void setters return the creator's own type for chaining. The
    /// contract's declared return type is never used directly, so type
    /// variables in contract signatures need no special handling.
    pub fluent: bool,
    pub is_override: bool,
}

/// Signature of the factory method.
pub(super) struct FactoryShape {
    pub name: String,
    pub is_override: bool,
}

impl<'a> Strategy<'a> {
    pub fn select(component: &'a ComponentImplementation) -> Self {
        match &component.descriptor.creator {
            Some(contract) => Strategy::ContractBound { contract },
            None => Strategy::RootSynthesized,
        }
    }

    pub fn visibility(&self, component: &ComponentImplementation) -> Visibility {
        match self {
            Strategy::ContractBound { .. } => {
                if component.is_abstract {
                    // The creator of a top-level abstract implementation must
                    // be public: its concrete subclass is generated as a
                    // sibling of the component subclass, not nested inside it.
                    if component.nested {
                        Visibility::Protected
                    } else {
                        Visibility::Public
                    }
                } else {
                    Visibility::Private
                }
            }
            Strategy::RootSynthesized => Visibility::Public,
        }
    }

    pub fn supertype(&self, component: &ComponentImplementation) -> Option<Supertype> {
        match self {
            Strategy::ContractBound { contract } => Some(match &component.base {
                // Extend the creator defined with the base implementation.
                Some(base) => Supertype::Extends(base.creator_name.clone()),
                None if contract.interface => Supertype::Implements(contract.type_name.clone()),
                None => Supertype::Extends(contract.type_name.clone()),
            }),
            // Never a supertype for a synthesized root builder.
            Strategy::RootSynthesized => None,
        }
    }

    pub fn constructor(&self) -> Option<ConstructorDecl> {
        match self {
            // The implicit no-arg constructor is enough.
            Strategy::ContractBound { .. } => None,
            // Instantiable only through the generated factory path.
            Strategy::RootSynthesized => Some(ConstructorDecl {
                visibility: Visibility::Private,
                params: vec![],
                body: vec![],
            }),
        }
    }

    /// The requirements this creator can set, each with its status.
    pub fn settable_requirements(
        &self,
        component: &ComponentImplementation,
    ) -> Vec<(ComponentRequirement, RequirementStatus)> {
        match self {
            Strategy::ContractBound { contract } => contract
                .setters
                .iter()
                .map(|s| {
                    (
                        s.requirement.clone(),
                        self.requirement_status(component, &s.requirement),
                    )
                })
                .collect(),
            Strategy::RootSynthesized => component
                .descriptor
                .dependencies_and_concrete_modules()
                .into_iter()
                .map(|requirement| {
                    let status = if component.requires(requirement) {
                        RequirementStatus::Needed
                    } else {
                        RequirementStatus::Unneeded
                    };
                    (requirement.clone(), status)
                })
                .collect(),
        }
    }

    fn requirement_status(
        &self,
        component: &ComponentImplementation,
        requirement: &ComponentRequirement,
    ) -> RequirementStatus {
        // Repeated modules are handled at every level of an ahead-of-time
        // chain: they are unknown when the base implementation is generated,
        // so the throwing override cannot live only in the supertype.
        if is_repeated_module(component, requirement) {
            return RequirementStatus::UnsettableRepeatedModule;
        }

        if component.has_base_creator() {
            return RequirementStatus::ImplementedInSupertype;
        }

        if component.requires(requirement) {
            RequirementStatus::Needed
        } else {
            RequirementStatus::Unneeded
        }
    }

    pub fn setter_shape(&self, requirement: &ComponentRequirement) -> Result<SetterShape> {
        match self {
            Strategy::ContractBound { contract } => {
                let signature = contract.signature_for(requirement).ok_or_else(|| {
                    Error::Invariant(format!(
                        "creator contract {} has no setter for requirement {}",
                        contract.type_name, requirement.type_name
                    ))
                })?;
                Ok(SetterShape {
                    name: signature.method_name.clone(),
                    param: Param {
                        type_name: signature
                            .parameter_type
                            .clone()
                            .unwrap_or_else(|| requirement.type_name.clone()),
                        name: signature
                            .parameter_name
                            .clone()
                            .unwrap_or_else(|| requirement.variable_name()),
                    },
                    fluent: !signature.returns_void,
                    is_override: true,
                })
            }
            Strategy::RootSynthesized => {
                let name = simple_variable_name(&requirement.type_name);
                Ok(SetterShape {
                    name: name.clone(),
                    param: Param {
                        type_name: requirement.type_name.clone(),
                        name,
                    },
                    fluent: true,
                    is_override: false,
                })
            }
        }
    }

    pub fn factory_shape(&self) -> FactoryShape {
        match self {
            Strategy::ContractBound { contract } => FactoryShape {
                name: contract.factory_method.clone(),
                is_override: true,
            },
            Strategy::RootSynthesized => FactoryShape {
                name: "build".to_string(),
                is_override: false,
            },
        }
    }
}

/// Whether `requirement` repeats a module already supplied by an ancestor
/// component. Such a module is neither in the resolved requirement set nor
/// in the component's own module-ownership set, and must not be re-set.
fn is_repeated_module(
    component: &ComponentImplementation,
    requirement: &ComponentRequirement,
) -> bool {
    !component.requires(requirement) && !is_owned_module(component, requirement)
}

fn is_owned_module(
    component: &ComponentImplementation,
    requirement: &ComponentRequirement,
) -> bool {
    let requirement_type = raw_type(&requirement.type_name);
    component
        .descriptor
        .owned_modules
        .iter()
        .any(|owned| raw_type(owned) == requirement_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ComponentDescriptor, NullPolicy, RequirementKind, SetterSignature};

    fn module(type_name: &str) -> ComponentRequirement {
        ComponentRequirement {
            kind: RequirementKind::Module,
            type_name: type_name.into(),
            name: None,
            null_policy: NullPolicy::New,
            concrete: true,
        }
    }

    fn setter(requirement: &ComponentRequirement, method_name: &str) -> SetterSignature {
        SetterSignature {
            requirement: requirement.clone(),
            method_name: method_name.into(),
            parameter_type: None,
            parameter_name: None,
            returns_void: false,
        }
    }

    fn contract_component(
        setters: Vec<SetterSignature>,
        requirements: Vec<ComponentRequirement>,
        owned_modules: Vec<String>,
    ) -> ComponentImplementation {
        ComponentImplementation {
            descriptor: ComponentDescriptor {
                type_name: "com.example.Shop".into(),
                root: false,
                creator: Some(CreatorDescriptor {
                    type_name: "com.example.Shop.Builder".into(),
                    interface: true,
                    factory_method: "build".into(),
                    setters,
                }),
                requirements: requirements.clone(),
                owned_modules,
            },
            name: "GeneratedShop".into(),
            creator_name: "Builder".into(),
            is_abstract: false,
            nested: true,
            requirements,
            base: None,
        }
    }

    #[test]
    fn contract_visibility_table() {
        let req = module("com.example.CartModule");
        let mut component = contract_component(vec![setter(&req, "cartModule")], vec![req], vec![]);
        let strategy = Strategy::select(&component);

        // Concrete owner: private.
        assert_eq!(strategy.visibility(&component), Visibility::Private);

        // Abstract nested owner: protected.
        component.is_abstract = true;
        component.nested = true;
        let strategy = Strategy::select(&component);
        assert_eq!(strategy.visibility(&component), Visibility::Protected);

        // Abstract top-level owner: public, for the sibling subclass.
        component.nested = false;
        let strategy = Strategy::select(&component);
        assert_eq!(strategy.visibility(&component), Visibility::Public);
    }

    #[test]
    fn repeated_module_is_unsettable() {
        let inherited = module("com.example.SessionModule");
        let owned = module("com.example.CartModule");
        let component = contract_component(
            vec![setter(&inherited, "sessionModule"), setter(&owned, "cartModule")],
            vec![owned.clone()],
            vec!["com.example.CartModule".into()],
        );
        let strategy = Strategy::select(&component);

        let statuses = strategy.settable_requirements(&component);
        assert_eq!(statuses[0].1, RequirementStatus::UnsettableRepeatedModule);
        assert_eq!(statuses[1].1, RequirementStatus::Needed);
    }

    #[test]
    fn owned_but_unused_module_is_unneeded() {
        let unused = module("com.example.LoggingModule");
        let component = contract_component(
            vec![setter(&unused, "loggingModule")],
            vec![],
            vec!["com.example.LoggingModule".into()],
        );
        let strategy = Strategy::select(&component);

        let statuses = strategy.settable_requirements(&component);
        assert_eq!(statuses[0].1, RequirementStatus::Unneeded);
    }

    #[test]
    fn base_creator_moves_setters_to_supertype() {
        let req = module("com.example.CartModule");
        let mut component = contract_component(
            vec![setter(&req, "cartModule")],
            vec![req.clone()],
            vec!["com.example.CartModule".into()],
        );
        component.base = Some(crate::model::BaseImplementation {
            creator_name: "BaseBuilder".into(),
            creator: None,
        });
        let strategy = Strategy::select(&component);

        let statuses = strategy.settable_requirements(&component);
        assert_eq!(statuses[0].1, RequirementStatus::ImplementedInSupertype);

        // Repeated modules still override, even with a base creator.
        let repeated = module("com.example.SessionModule");
        let mut component = contract_component(
            vec![setter(&repeated, "sessionModule")],
            vec![],
            vec![],
        );
        component.base = Some(crate::model::BaseImplementation {
            creator_name: "BaseBuilder".into(),
            creator: None,
        });
        let strategy = Strategy::select(&component);
        let statuses = strategy.settable_requirements(&component);
        assert_eq!(statuses[0].1, RequirementStatus::UnsettableRepeatedModule);
    }

    #[test]
    fn contract_supertype_wiring() {
        let req = module("com.example.CartModule");
        let mut component =
            contract_component(vec![setter(&req, "cartModule")], vec![req], vec![]);

        let strategy = Strategy::select(&component);
        assert_eq!(
            strategy.supertype(&component),
            Some(Supertype::Implements("com.example.Shop.Builder".into()))
        );

        // Abstract-class contracts are extended instead.
        component.descriptor.creator.as_mut().unwrap().interface = false;
        let strategy = Strategy::select(&component);
        assert_eq!(
            strategy.supertype(&component),
            Some(Supertype::Extends("com.example.Shop.Builder".into()))
        );

        // A base creator wins over the contract type.
        component.base = Some(crate::model::BaseImplementation {
            creator_name: "BaseBuilder".into(),
            creator: None,
        });
        let strategy = Strategy::select(&component);
        assert_eq!(
            strategy.supertype(&component),
            Some(Supertype::Extends("BaseBuilder".into()))
        );
    }

    #[test]
    fn root_synthesized_shapes() {
        let strategy = Strategy::RootSynthesized;
        let req = module("com.example.CartModule");

        let shape = strategy.setter_shape(&req).unwrap();
        assert_eq!(shape.name, "cartModule");
        assert_eq!(shape.param.name, "cartModule");
        assert_eq!(shape.param.type_name, "com.example.CartModule");
        assert!(shape.fluent);
        assert!(!shape.is_override);

        let factory = strategy.factory_shape();
        assert_eq!(factory.name, "build");
        assert!(!factory.is_override);

        let constructor = strategy.constructor().unwrap();
        assert_eq!(constructor.visibility, Visibility::Private);
        assert!(constructor.params.is_empty());
    }

    #[test]
    fn contract_setter_shape_uses_signature() {
        let req = module("com.example.CartModule");
        let mut signature = setter(&req, "withCart");
        signature.parameter_name = Some("cart".into());
        signature.returns_void = true;
        let component = contract_component(vec![signature], vec![req.clone()], vec![]);
        let strategy = Strategy::select(&component);

        let shape = strategy.setter_shape(&req).unwrap();
        assert_eq!(shape.name, "withCart");
        assert_eq!(shape.param.name, "cart");
        assert!(!shape.fluent);
        assert!(shape.is_override);
    }

    #[test]
    fn missing_contract_signature_is_invariant_violation() {
        let declared = module("com.example.CartModule");
        let undeclared = module("com.example.OtherModule");
        let component =
            contract_component(vec![setter(&declared, "cartModule")], vec![declared], vec![]);
        let strategy = Strategy::select(&component);

        assert!(matches!(
            strategy.setter_shape(&undeclared),
            Err(Error::Invariant(_))
        ));
    }
}
