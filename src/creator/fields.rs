//! Field plan — decides whether creator fields are freshly allocated or
//! inherited from a base creator implementation.

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::decl::{FieldDecl, Visibility};
use crate::model::{ComponentImplementation, ComponentRequirement};
use crate::util::UniqueNameSet;

/// Ordered requirement → backing field map for one creator.
///
/// Order follows the requirement order of whichever implementation allocated
/// the fields. Shared by reference along an ahead-of-time chain: a leaf
/// creator holds the same map the base creator allocated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequirementFields {
    entries: Vec<(ComponentRequirement, FieldDecl)>,
}

impl RequirementFields {
    /// The field backing `requirement`, if one exists.
    pub fn get(&self, requirement: &ComponentRequirement) -> Option<&FieldDecl> {
        self.entries
            .iter()
            .find(|(r, _)| r == requirement)
            .map(|(_, f)| f)
    }

    /// All entries in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = &(ComponentRequirement, FieldDecl)> + '_ {
        self.entries.iter()
    }

    /// The requirements with a backing field, in allocation order.
    pub fn requirements(&self) -> impl Iterator<Item = &ComponentRequirement> + '_ {
        self.entries.iter().map(|(r, _)| r)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Returns the creator's field map.
///
/// If the base creator already allocated fields, they are reused as-is (the
/// leaf class inherits them; nothing is re-declared). Otherwise one field is
/// allocated per resolved requirement, with a collision-free name and a
/// visibility that keeps abstract creators' fields reachable from their
/// subclasses.
pub(super) fn plan(component: &ComponentImplementation) -> Rc<RequirementFields> {
    if let Some(base) = component.base_creator() {
        return Rc::clone(base.fields());
    }

    let visibility = if component.is_abstract {
        Visibility::Protected
    } else {
        Visibility::Private
    };
    let mut names = UniqueNameSet::new();
    let entries = component
        .requirements
        .iter()
        .map(|requirement| {
            let field = FieldDecl {
                type_name: requirement.type_name.clone(),
                name: names.claim(&requirement.variable_name()),
                visibility,
            };
            (requirement.clone(), field)
        })
        .collect();
    Rc::new(RequirementFields { entries })
}
