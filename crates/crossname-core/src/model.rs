//! Read-only view of the upstream type model
//!
//! The naming engine never mutates these values. They carry exactly the
//! facts naming needs: qualified and simple names, enclosing links,
//! visibility, entity kind, parameter lists and any override names attached
//! by earlier annotation processing.

use serde::{Deserialize, Serialize};

use crate::qualified::{QualifiedName, QualifiedNameError};

/// Qualified name of the universal base object type
pub const ROOT_OBJECT: &str = "java.lang.Object";

/// Declared visibility of a type or member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Public,
    Protected,
    PackagePrivate,
    Private,
}

impl Visibility {
    /// Public and protected declarations are visible to foreign consumers
    pub fn is_externally_visible(self) -> bool {
        matches!(self, Visibility::Public | Visibility::Protected)
    }
}

/// A declared class, interface or enum
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDeclaration {
    pub qualified_name: QualifiedName,
    /// Unqualified name as written in source (e.g., "Flags" for `Body.Flags`)
    pub simple_source_name: String,
    /// Package path, `None` for the default package
    pub package_name: Option<String>,
    /// Directly enclosing type for nested declarations
    pub enclosing: Option<Box<TypeDeclaration>>,
    pub visibility: Visibility,
    /// Declared inside a method body
    #[serde(default)]
    pub is_local: bool,
    /// Explicit interop name attached by annotation processing
    #[serde(default)]
    pub interop_name: Option<String>,
    /// Explicit interop name prefix attached by annotation processing
    #[serde(default)]
    pub interop_name_prefix: Option<String>,
}

impl TypeDeclaration {
    /// A public top-level type; package and simple name come from the qualified name
    pub fn new(qualified_name: &str) -> Result<Self, QualifiedNameError> {
        let qualified_name = QualifiedName::parse(qualified_name)?;
        Ok(Self {
            simple_source_name: qualified_name.simple_name().to_string(),
            package_name: qualified_name.package().map(str::to_string),
            qualified_name,
            enclosing: None,
            visibility: Visibility::Public,
            is_local: false,
            interop_name: None,
            interop_name_prefix: None,
        })
    }

    /// A public type nested directly inside `enclosing`
    pub fn nested(enclosing: TypeDeclaration, simple_name: &str) -> Result<Self, QualifiedNameError> {
        Ok(Self {
            qualified_name: enclosing.qualified_name.child(simple_name)?,
            simple_source_name: simple_name.to_string(),
            package_name: enclosing.package_name.clone(),
            enclosing: Some(Box::new(enclosing)),
            visibility: Visibility::Public,
            is_local: false,
            interop_name: None,
            interop_name_prefix: None,
        })
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn local(mut self) -> Self {
        self.is_local = true;
        self
    }

    pub fn with_interop_name(mut self, name: impl Into<String>) -> Self {
        self.interop_name = Some(name.into());
        self
    }

    pub fn with_interop_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.interop_name_prefix = Some(prefix.into());
        self
    }

    pub fn is_root_object(&self) -> bool {
        self.qualified_name.as_str() == ROOT_OBJECT
    }
}

/// Primitive value kinds known to the upstream model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveKind {
    Void,
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Char,
    Float,
    Double,
    /// Type of the `null` literal; never names a declaration
    Null,
}

/// Type of a value, parameter or field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeDescriptor {
    Primitive {
        primitive: PrimitiveKind,
    },
    Array {
        leaf: Box<TypeDescriptor>,
        dimensions: usize,
    },
    Declared {
        declaration: Box<TypeDeclaration>,
    },
    TypeVariable {
        name: String,
        upper_bound: Box<TypeDescriptor>,
    },
    Intersection {
        types: Vec<TypeDescriptor>,
    },
}

impl TypeDescriptor {
    pub fn primitive(primitive: PrimitiveKind) -> Self {
        TypeDescriptor::Primitive { primitive }
    }

    pub fn declared(declaration: TypeDeclaration) -> Self {
        TypeDescriptor::Declared {
            declaration: Box::new(declaration),
        }
    }

    /// Array of `component`; nested arrays collapse into one leaf
    pub fn array_of(component: TypeDescriptor) -> Self {
        match component {
            TypeDescriptor::Array { leaf, dimensions } => TypeDescriptor::Array {
                leaf,
                dimensions: dimensions + 1,
            },
            other => TypeDescriptor::Array {
                leaf: Box::new(other),
                dimensions: 1,
            },
        }
    }

    pub fn type_variable(name: impl Into<String>, upper_bound: TypeDescriptor) -> Self {
        TypeDescriptor::TypeVariable {
            name: name.into(),
            upper_bound: Box::new(upper_bound),
        }
    }

    /// Short label used in diagnostics
    pub fn kind_name(&self) -> &'static str {
        match self {
            TypeDescriptor::Primitive { .. } => "primitive",
            TypeDescriptor::Array { .. } => "array",
            TypeDescriptor::Declared { .. } => "declared",
            TypeDescriptor::TypeVariable { .. } => "type variable",
            TypeDescriptor::Intersection { .. } => "intersection",
        }
    }
}

/// A method parameter or local variable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    pub name: String,
    pub type_descriptor: TypeDescriptor,
}

impl Variable {
    pub fn new(name: impl Into<String>, type_descriptor: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            type_descriptor,
        }
    }
}

/// A declared field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub enclosing: TypeDeclaration,
    pub visibility: Visibility,
    #[serde(default)]
    pub is_static: bool,
}

impl FieldDescriptor {
    /// A public static field
    pub fn new(enclosing: TypeDeclaration, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enclosing,
            visibility: Visibility::Public,
            is_static: true,
        }
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn instance(mut self) -> Self {
        self.is_static = false;
        self
    }
}

/// A declared method or constructor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    pub name: String,
    pub enclosing: TypeDeclaration,
    pub visibility: Visibility,
    #[serde(default)]
    pub is_constructor: bool,
    /// Overrides a signature that is already exposed to foreign consumers
    #[serde(default)]
    pub is_interop_override: bool,
    /// Explicit colon-delimited selector attached by annotation processing
    #[serde(default)]
    pub interop_selector: Option<String>,
    #[serde(default)]
    pub parameters: Vec<Variable>,
}

impl MethodDescriptor {
    /// A public, non-overriding method
    pub fn new(enclosing: TypeDeclaration, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enclosing,
            visibility: Visibility::Public,
            is_constructor: false,
            is_interop_override: false,
            interop_selector: None,
            parameters: Vec::new(),
        }
    }

    /// A public constructor of `enclosing`
    pub fn constructor(enclosing: TypeDeclaration) -> Self {
        Self {
            is_constructor: true,
            ..Self::new(enclosing, "<init>")
        }
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.interop_selector = Some(selector.into());
        self
    }

    pub fn with_parameter(mut self, parameter: Variable) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn overriding_interop(mut self) -> Self {
        self.is_interop_override = true;
        self
    }
}
