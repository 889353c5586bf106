//! Creator synthesis — decides whether a generated component needs a
//! builder/factory ("creator") class, and synthesizes its structure
//!
//! The entry point is [`create`]: given one resolved component
//! implementation, it either produces a [`CreatorImplementation`] artifact
//! or decides that none is needed. [`create_all`] drives a whole input in
//! declaration order, wiring ahead-of-time base creators as it goes.
//!
//! ```text
//! ComponentImplementation
//!      │
//!      ├── no creator declared ──────────────► None
//!      ├── abstract node with a base ────────► None
//!      │
//!      └── pick strategy (contract-bound | root-synthesized)
//!              │
//!              ├── modifiers, supertype
//!              ├── field plan (fresh | inherited)
//!              ├── constructor
//!              ├── setter per settable requirement (4 shapes)
//!              └── factory method (concrete owners only)
//!                      │
//!                      ▼
//!              CreatorImplementation
//! ```

mod factory;
mod fields;
mod setters;
mod strategy;

pub use fields::RequirementFields;

use std::collections::HashMap;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::decl::TypeDecl;
use crate::error::{Error, Result};
use crate::model::{ComponentImplementation, ComponentRequirement, SynthesisInput};

use strategy::Strategy;

/// Statuses a component requirement may have in a creator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequirementStatus {
    /// An instance is needed to create the component.
    Needed,

    /// An instance is not needed, but the requirement is for a module owned
    /// by the component. The setter is a deprecated no-op.
    Unneeded,

    /// The module is already inherited from an ancestor component and may
    /// not be set here. The setter throws.
    UnsettableRepeatedModule,

    /// The requirement is settable, but the setter implementation already
    /// exists on a supertype. No method is generated.
    ImplementedInSupertype,
}

/// Immutable creator artifact produced for one component implementation
///
/// Bundles the synthesized type declaration, its name, the requirements the
/// creator actually provides to the factory call, and the requirement →
/// field map. The field map is shared by reference along an ahead-of-time
/// chain.
#[derive(Debug, Clone, Serialize)]
pub struct CreatorImplementation {
    type_decl: TypeDecl,
    name: String,
    provided_requirements: Vec<ComponentRequirement>,
    fields: Rc<RequirementFields>,
    source_hash: String,
}

impl CreatorImplementation {
    /// The synthesized type declaration.
    pub fn type_decl(&self) -> &TypeDecl {
        &self.type_decl
    }

    /// The creator class name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The requirements this creator provides when constructing the
    /// component: the intersection of its field set and the component's
    /// resolved requirement set, in field order.
    pub fn provided_requirements(&self) -> &[ComponentRequirement] {
        &self.provided_requirements
    }

    /// The requirement → backing-field map.
    pub fn fields(&self) -> &Rc<RequirementFields> {
        &self.fields
    }

    /// Content hash of the source component implementation.
    pub fn source_hash(&self) -> &str {
        &self.source_hash
    }
}

/// Returns a new creator implementation for the given component, if one is
/// needed.
///
/// Structural absence — no creator declared, or an intermediate abstract
/// node already covered by its base — is `Ok(None)`. Invariant violations in
/// the input graph are errors.
pub fn create(component: &ComponentImplementation) -> Result<Option<CreatorImplementation>> {
    if !component.descriptor.has_creator() {
        return Ok(None);
    }

    if component.is_abstract && component.base.is_some() {
        // Intermediate implementations of an ahead-of-time chain cannot
        // invoke the eventual concrete constructor and add nothing to the
        // creator generated with the base, so they get none of their own.
        return Ok(None);
    }

    Assembler::new(component).build().map(Some)
}

/// Drives creator synthesis over one component implementation.
pub(crate) struct Assembler<'a> {
    component: &'a ComponentImplementation,
    strategy: Strategy<'a>,
    class: TypeDecl,
    fields: Rc<RequirementFields>,
}

impl<'a> Assembler<'a> {
    fn new(component: &'a ComponentImplementation) -> Self {
        Self {
            component,
            strategy: Strategy::select(component),
            class: TypeDecl::new(component.creator_name.clone()),
            fields: Rc::new(RequirementFields::default()),
        }
    }

    fn build(mut self) -> Result<CreatorImplementation> {
        self.set_modifiers();
        self.class.supertype = self.strategy.supertype(self.component);
        self.plan_fields();
        self.class.constructor = self.strategy.constructor();
        self.add_setter_methods()?;
        self.add_factory_method()?;

        let provided_requirements = self.provided_requirements().cloned().collect();
        Ok(CreatorImplementation {
            name: self.component.creator_name.clone(),
            provided_requirements,
            source_hash: self.component.hash(),
            type_decl: self.class,
            fields: self.fields,
        })
    }

    fn set_modifiers(&mut self) {
        self.class.visibility = self.strategy.visibility(self.component);
        self.class.is_static = !self.component.nested;
        self.class.is_abstract = self.component.is_abstract;
        self.class.is_final = !self.component.is_abstract;
    }

    fn plan_fields(&mut self) {
        self.fields = fields::plan(self.component);
        // Inherited fields are already declared on the base creator class.
        if self.component.base_creator().is_none() {
            self.class.fields = self.fields.iter().map(|(_, f)| f.clone()).collect();
        }
    }

    fn add_setter_methods(&mut self) -> Result<()> {
        for (requirement, status) in self.strategy.settable_requirements(self.component) {
            if let Some(method) = self.setter_method(&requirement, status)? {
                self.class.methods.push(method);
            }
        }
        Ok(())
    }

    fn add_factory_method(&mut self) -> Result<()> {
        // Abstract creators never get a build step: they cannot invoke the
        // constructor of a subclass implementation that does not exist yet.
        if !self.component.is_abstract {
            let method = self.factory_method()?;
            self.class.methods.push(method);
        }
        Ok(())
    }

    /// The requirements this creator will actually provide when
    /// constructing the component.
    pub(crate) fn provided_requirements(&self) -> impl Iterator<Item = &ComponentRequirement> + '_ {
        self.fields
            .requirements()
            .filter(|requirement| self.component.requires(requirement))
    }

    pub(crate) fn field(
        &self,
        requirement: &ComponentRequirement,
    ) -> Result<&crate::decl::FieldDecl> {
        self.fields.get(requirement).ok_or_else(|| {
            Error::Invariant(format!(
                "no field allocated for requirement {}",
                requirement.type_name
            ))
        })
    }

    pub(crate) fn creator_name(&self) -> &str {
        &self.component.creator_name
    }

    pub(crate) fn component_name(&self) -> &str {
        &self.component.name
    }

    pub(crate) fn component_type(&self) -> &str {
        &self.component.descriptor.type_name
    }
}

/// Outcome of synthesizing one component of an input graph
#[derive(Debug, Clone, Serialize)]
pub struct SynthesisOutcome {
    /// Generated component class name
    pub component: String,

    /// The creator artifact, absent when none is needed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<Rc<CreatorImplementation>>,
}

/// Runs creator synthesis over every component of an input, in declaration
/// order, wiring each base link to the artifact produced earlier for the
/// named base creator.
pub fn create_all(input: &SynthesisInput) -> Result<Vec<SynthesisOutcome>> {
    let mut produced: HashMap<String, Rc<CreatorImplementation>> = HashMap::new();
    let mut outcomes = Vec::with_capacity(input.components.len());

    for component in &input.components {
        let mut component = component.clone();
        if let Some(base) = component.base.as_mut() {
            base.creator = produced.get(&base.creator_name).cloned();
        }

        let creator = create(&component)?.map(Rc::new);
        if let Some(creator) = &creator {
            produced.insert(creator.name().to_string(), Rc::clone(creator));
        }
        outcomes.push(SynthesisOutcome {
            component: component.name.clone(),
            creator,
        });
    }

    Ok(outcomes)
}
