// Production-quality lints
#![warn(
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
// Deny truly dangerous patterns
#![deny(clippy::mem_forget)]
// Allow common patterns in library code
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! # wiregen — creator synthesis for generated components
//!
//! The code-generation backend of a compile-time dependency-injection
//! framework. Given a resolved description of a generated component class —
//! which module instances, component dependencies, and bound values it must
//! be supplied with — wiregen decides whether a **creator** (builder/factory)
//! class must exist and, if so, synthesizes its structure: fields, a
//! constructor, setter methods, and the factory method that validates inputs
//! and instantiates the component.
//!
//! wiregen does **not** resolve what a component's dependencies are. It
//! consumes an already computed requirement set and shapes creators from it.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use wiregen::{create, render, RenderConfig, SynthesisInput};
//!
//! let input = SynthesisInput::from_yaml(r#"
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
//!     requirements:
//!       - kind: module
//!         type: com.example.CartModule
//!         null_policy: new
//! "#)?;
//!
//! for component in &input.components {
//!     if let Some(creator) = create(component)? {
//!         println!("{}", render(&creator, &RenderConfig::default()));
//!     }
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                                                            │
//! │  COMPONENT GRAPH (YAML)                                    │
//! │       │                                                    │
//! │       ├──► create(component) ──► Option<Creator…>          │
//! │       │         │                                          │
//! │       │         ├── strategy: contract-bound               │
//! │       │         │             | root-synthesized           │
//! │       │         ├── field plan (fresh | inherited)         │
//! │       │         ├── setters (4 shapes per status)          │
//! │       │         └── factory method (null policies)         │
//! │       │                                                    │
//! │       └──► render(creator) ──► Java source                 │
//! │                                                            │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Two creator flavors
//!
//! The set is closed; no third variant should be added without revisiting
//! the design:
//!
//! | | contract-bound | root-synthesized |
//! |---|---|---|
//! | trigger | user-authored creator contract | root component, no contract |
//! | visibility | private; public/protected when abstract | public |
//! | supertype | base creator, else the contract | none |
//! | constructor | implicit | private no-arg |
//! | setters | override contract signatures | fluent, named after the type |
//! | factory | contract's method, `@Override` | `build()` |
//!
//! Generated setters and factory methods embed their failure behavior into
//! the artifact: null checks, missing-requirement checks, and
//! repeated-module rejections all happen at the generated program's
//! runtime, not during generation.

// Core modules
pub mod decl;
pub mod error;
pub mod model;
pub mod util;

// Operations
pub mod creator;
pub mod render;

pub use creator::{
    create, create_all, CreatorImplementation, RequirementFields, RequirementStatus,
    SynthesisOutcome,
};
pub use decl::{
    ConstructorDecl, Expr, FieldDecl, MethodDecl, Param, Statement, Supertype, TypeDecl,
    Visibility,
};
pub use error::{Error, Result};
pub use model::{
    BaseImplementation, ComponentDescriptor, ComponentImplementation, ComponentRequirement,
    CreatorDescriptor, NullPolicy, RequirementKind, SetterSignature, SynthesisInput,
};
pub use render::{render, RenderConfig};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
