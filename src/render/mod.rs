//! Java source rendering for creator declarations
//!
//! Turns a [`CreatorImplementation`] artifact into Java source text. The
//! surrounding pipeline normally splices the declaration into the generated
//! component's compilation unit; standalone output (with an optional package
//! header) exists for the CLI.

mod java;

use crate::creator::CreatorImplementation;

/// Render configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Include provenance header
    pub provenance: bool,
    /// Package declaration to emit for standalone output
    pub package: Option<String>,
    /// Qualified name of the runtime support class providing
    /// `checkNotNull(T)` and `checkBuilderRequirement(T, Class<?>)`
    pub preconditions_class: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            provenance: true,
            package: None,
            preconditions_class: "wiregen.runtime.Preconditions".into(),
        }
    }
}

/// Render a creator implementation to Java source
pub fn render(creator: &CreatorImplementation, config: &RenderConfig) -> String {
    java::render(creator, config)
}
