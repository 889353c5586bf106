//! Component graph model — the input consumed by creator synthesis
//!
//! These types describe one or more *generated component implementations*
//! and the external requirements each must be supplied with. The graph is
//! already fully resolved by an upstream stage; this crate only decides, per
//! implementation, how to shape a creator type and its members.
//!
//! ## Example input
//!
//! ```yaml
//! components:
//!   - name: GeneratedShopComponent
//!     creator_name: Builder
//!     descriptor:
//!       type: com.example.ShopComponent
//!       root: true
//!       requirements:
//!         - kind: module
//!           type: com.example.CartModule
//!           null_policy: new
//!         - kind: dependency
//!           type: com.example.HttpClient
//!           null_policy: throw
//!     requirements:
//!       - kind: module
//!         type: com.example.CartModule
//!         null_policy: new
//!       - kind: dependency
//!         type: com.example.HttpClient
//!         null_policy: throw
//! ```

use std::hash::{Hash, Hasher};
use std::rc::Rc;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::creator::CreatorImplementation;
use crate::error::{Error, Result};
use crate::util::simple_variable_name;

/// What kind of external input a requirement is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RequirementKind {
    /// An instance of a user-declared module class.
    Module,
    /// An instance of another component this component depends on.
    Dependency,
    /// A value bound directly through the creator.
    BoundInstance,
}

impl RequirementKind {
    pub fn is_module(self) -> bool {
        matches!(self, RequirementKind::Module)
    }
}

/// Per-requirement rule for a value that is still unset at factory time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum NullPolicy {
    /// Null is permitted; no check is emitted.
    Allow,
    /// The factory method fails fast if the value was never set.
    #[default]
    Throw,
    /// The factory method default-constructs a module instance. Only valid
    /// for module requirements.
    New,
}

fn default_true() -> bool {
    true
}

/// A single external input a component must be supplied with
///
/// Identity is kind + type + explicit name; the null policy and module
/// concreteness are attributes, not identity.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ComponentRequirement {
    /// Requirement kind
    pub kind: RequirementKind,

    /// The requirement's (possibly parameterized) type
    #[serde(rename = "type")]
    pub type_name: String,

    /// Explicit variable name, overriding the one derived from the type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Null policy applied at factory time
    #[serde(default)]
    pub null_policy: NullPolicy,

    /// Whether the framework can instantiate this module type itself.
    /// Modules holding only static or abstract bindings are not concrete.
    #[serde(default = "default_true")]
    pub concrete: bool,
}

impl ComponentRequirement {
    /// The preferred field/parameter name for this requirement.
    pub fn variable_name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => simple_variable_name(&self.type_name),
        }
    }
}

impl PartialEq for ComponentRequirement {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.type_name == other.type_name && self.name == other.name
    }
}

impl Eq for ComponentRequirement {}

impl Hash for ComponentRequirement {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.type_name.hash(state);
        self.name.hash(state);
    }
}

/// One setter method declared by a user-authored creator contract
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SetterSignature {
    /// The requirement this setter supplies
    pub requirement: ComponentRequirement,

    /// Declared method name
    pub method_name: String,

    /// Declared parameter type, when wider than the requirement's own type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter_type: Option<String>,

    /// Declared parameter name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter_name: Option<String>,

    /// Whether the contract declares the setter as void (non-fluent)
    #[serde(default)]
    pub returns_void: bool,
}

fn default_factory_method() -> String {
    "build".to_string()
}

/// A user-authored creator contract type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CreatorDescriptor {
    /// The contract type the synthesized creator implements or extends
    #[serde(rename = "type")]
    pub type_name: String,

    /// Whether the contract is an interface (implemented) or an abstract
    /// class (extended)
    #[serde(default = "default_true")]
    pub interface: bool,

    /// Name of the contract's factory method
    #[serde(default = "default_factory_method")]
    pub factory_method: String,

    /// The contract's declared setter methods; these define the settable
    /// requirements, a superset of what the component actually uses
    #[serde(default)]
    pub setters: Vec<SetterSignature>,
}

impl CreatorDescriptor {
    /// The contract's setter signature for the given requirement, if any.
    pub fn signature_for(&self, requirement: &ComponentRequirement) -> Option<&SetterSignature> {
        self.setters.iter().find(|s| &s.requirement == requirement)
    }
}

/// Static description of one component type
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ComponentDescriptor {
    /// The user-facing component type
    #[serde(rename = "type")]
    pub type_name: String,

    /// Whether this is a root component. Root components get a synthesized
    /// builder even without a creator contract.
    #[serde(default)]
    pub root: bool,

    /// The user-authored creator contract, if one was declared
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<CreatorDescriptor>,

    /// All module/dependency requirements declared for this component
    #[serde(default)]
    pub requirements: Vec<ComponentRequirement>,

    /// Module types owned directly by this component (as opposed to modules
    /// inherited from an ancestor component)
    #[serde(default)]
    pub owned_modules: Vec<String>,
}

impl ComponentDescriptor {
    /// Whether any creator should exist for this component.
    pub fn has_creator(&self) -> bool {
        self.creator.is_some() || self.root
    }

    /// The requirements a synthesized root builder can expose setters for:
    /// component dependencies and concrete modules. Bound instances cannot
    /// be set without a user contract.
    pub fn dependencies_and_concrete_modules(&self) -> Vec<&ComponentRequirement> {
        self.requirements
            .iter()
            .filter(|r| match r.kind {
                RequirementKind::Dependency => true,
                RequirementKind::Module => r.concrete,
                RequirementKind::BoundInstance => false,
            })
            .collect()
    }
}

/// Resolved link from a component implementation to the base of its
/// ahead-of-time chain
///
/// The `creator` artifact is wired in by the pipeline (see
/// [`crate::creator::create_all`]) once the base has been processed; it is
/// never part of the serialized input.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct BaseImplementation {
    /// Name of the creator class generated with the base implementation
    pub creator_name: String,

    /// The base's creator artifact, once generated
    #[serde(skip)]
    #[schemars(skip)]
    pub creator: Option<Rc<CreatorImplementation>>,
}

/// One generated component class, possibly a node of an ahead-of-time
/// inheritance chain
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ComponentImplementation {
    /// Static description of the component
    pub descriptor: ComponentDescriptor,

    /// Name of the generated component class
    pub name: String,

    /// Reserved name for the to-be-generated creator class
    pub creator_name: String,

    /// Whether this implementation is abstract (a base or intermediate node
    /// of an ahead-of-time chain)
    #[serde(default)]
    pub is_abstract: bool,

    /// Whether the generated component class is nested in another class
    #[serde(default)]
    pub nested: bool,

    /// The requirements this implementation actually needs, as resolved by
    /// the upstream graph stage
    #[serde(default)]
    pub requirements: Vec<ComponentRequirement>,

    /// Link to the base of the ahead-of-time chain, absent for the base
    /// itself and for implementations outside any chain
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<BaseImplementation>,
}

impl ComponentImplementation {
    /// Whether the resolved requirement set contains `requirement`.
    pub fn requires(&self, requirement: &ComponentRequirement) -> bool {
        self.requirements.contains(requirement)
    }

    /// Whether a concrete implementation inherits a full creator from the
    /// base of its chain.
    pub fn has_base_creator(&self) -> bool {
        !self.is_abstract && self.base.is_some()
    }

    /// The base implementation's creator artifact, if generated.
    pub fn base_creator(&self) -> Option<&Rc<CreatorImplementation>> {
        self.base.as_ref()?.creator.as_ref()
    }

    /// Content hash of this implementation, for provenance headers.
    pub fn hash(&self) -> String {
        use sha2::{Digest, Sha256};
        let content = serde_norway::to_string(self).unwrap_or_default();
        let mut hasher = Sha256::new();
        hasher.update(content.as_bytes());
        format!("sha256:{}", hex::encode(&hasher.finalize()[..8]))
    }
}

/// A full synthesis input: component implementations in generation order
///
/// Implementations that extend a base must appear after it so the pipeline
/// can wire the base's creator artifact before processing them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[schemars(title = "wiregen input", description = "Resolved component graph")]
pub struct SynthesisInput {
    #[serde(default)]
    pub components: Vec<ComponentImplementation>,
}

impl SynthesisInput {
    /// Parse an input from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_norway::from_str(yaml).map_err(|e| Error::GraphParse(e.to_string()))
    }

    /// Serialize back to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_norway::to_string(self).map_err(|e| Error::GraphParse(e.to_string()))
    }
}
