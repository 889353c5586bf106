//! Declaration model — the class structure emitted by creator synthesis
//!
//! A language-neutral description of one synthesized type: modifiers,
//! supertype, fields, an optional constructor, and methods whose bodies are
//! ordered, typed statements. The set of statement and expression forms is
//! closed; it covers exactly what creator synthesis emits, and the renderer
//! maps each form to Java text.

use serde::{Deserialize, Serialize};

/// Member/type visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Protected,
    Private,
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Visibility::Public => write!(f, "public"),
            Visibility::Protected => write!(f, "protected"),
            Visibility::Private => write!(f, "private"),
        }
    }
}

/// The single supertype a declaration extends or implements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Supertype {
    Extends(String),
    Implements(String),
}

/// A field declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDecl {
    pub type_name: String,
    pub name: String,
    pub visibility: Visibility,
}

/// A method or constructor parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Param {
    pub type_name: String,
    pub name: String,
}

/// Expressions referenced from statements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// A method parameter, by name
    Param(String),

    /// A field of the enclosing type, by name
    Field(String),

    /// A runtime null check that evaluates to its argument
    CheckNotNull(Box<Expr>),

    /// Construction of a new instance
    NewInstance { type_name: String, args: Vec<Expr> },
}

/// Statements in emission order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    /// `this.<field> = <value>;`
    Assign { field: String, value: Expr },

    /// Evaluate an expression for effect, discarding the result
    Evaluate(Expr),

    /// Run `then` only if the field is still unset
    IfNull { field: String, then: Vec<Statement> },

    /// Fail fast with a descriptive error if the field is still unset
    CheckRequirementSet { field: String, type_name: String },

    /// Unconditionally fail with an unsupported-operation error. `message`
    /// is a format template receiving the raw type's canonical name.
    ThrowUnsupported { type_name: String, message: String },

    /// `return this;`
    ReturnSelf,

    /// `return <expr>;`
    Return(Expr),
}

/// A method declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodDecl {
    pub name: String,
    pub visibility: Visibility,
    pub is_override: bool,

    /// Deprecation note, rendered as javadoc plus the annotation
    pub deprecated: Option<String>,

    pub params: Vec<Param>,

    /// `None` means void
    pub return_type: Option<String>,

    pub body: Vec<Statement>,
}

/// A constructor declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstructorDecl {
    pub visibility: Visibility,
    pub params: Vec<Param>,
    pub body: Vec<Statement>,
}

/// One synthesized type declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDecl {
    pub name: String,
    pub visibility: Visibility,
    pub is_static: bool,
    pub is_abstract: bool,
    pub is_final: bool,
    pub supertype: Option<Supertype>,
    pub fields: Vec<FieldDecl>,
    pub constructor: Option<ConstructorDecl>,
    pub methods: Vec<MethodDecl>,
}

impl TypeDecl {
    /// An empty public final class with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Public,
            is_static: false,
            is_abstract: false,
            is_final: true,
            supertype: None,
            fields: Vec::new(),
            constructor: None,
            methods: Vec::new(),
        }
    }

    /// Find a method by name.
    pub fn method(&self, name: &str) -> Option<&MethodDecl> {
        self.methods.iter().find(|m| m.name == name)
    }

    /// Find a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldDecl> {
        self.fields.iter().find(|f| f.name == name)
    }
}
