//! Interop names for native-language consumers
//!
//! The interop scheme names types, methods, fields and parameters the way
//! the native side sees them. It is independent of the names the resolver
//! picks for references, except that the annotations carrying interop names
//! render their own annotation class through the resolver.
//!
//! ## Types
//!
//! An explicit override wins, then the well-known table from the
//! configuration, then `prefix + TitleCase(simple name)`. The prefix is the
//! enclosing type's interop name plus `_`, an explicit prefix override, or
//! the title-cased package segments run together:
//!
//! | Declaration                         | Interop name               |
//! |-------------------------------------|----------------------------|
//! | `org.jbox2d.dynamics.Body`          | `OrgJbox2dDynamicsBody`    |
//! | `org.jbox2d.dynamics.Body.Flags`    | `OrgJbox2dDynamicsBody_Flags` |
//! | `java.util.ArrayList`               | `J2ktJavaUtilArrayList`    |
//! | `java.lang.String`                  | `NSString`                 |
//!
//! Reserved package roots (`java`, `javax`) get the extra namespace segment
//! only outside member context.
//!
//! ## Methods
//!
//! Selectors are split on `:` into a bare method name and one label per
//! parameter. See [`InteropNamer::method_names`].

use crossname_core::model::{
    FieldDescriptor, MethodDescriptor, PrimitiveKind, TypeDeclaration, TypeDescriptor, Variable,
    Visibility,
};
use crossname_core::naming::{camel_case_starts_with, title_case};
use crossname_core::InteropConfig;
use tracing::{debug, trace};

use crate::error::{DeclarationLocation, NamingError};
use crate::identifier::FORBIDDEN_KEYWORD_SUFFIX;
use crate::reserved::is_reserved;
use crate::resolver::Renderer;
use crate::source::Source;

/// Interop name of the root object type when `id` is acceptable
pub const ID_NAME: &str = "id";

/// Selector prefix of the native initializer convention
const INITIALIZER_PREFIX: &str = "initWith";

/// Connective word in front of synthesized parameter labels
const LABEL_CONNECTIVE: &str = "with";

/// Filler prepended to fields whose name starts like a native lifecycle method
const FIELD_FILLER: &str = "the";

/// Camel-case prefixes the native runtime treats as ownership-transferring
const RESERVED_FIELD_PREFIXES: &[&str] = &["new", "copy", "alloc", "init", "mutableCopy"];

/// Interop names of one method: the bare name and one label per parameter slot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MethodInteropNames {
    pub method_name: Option<String>,
    pub parameter_names: Vec<String>,
}

/// Derives interop names from the declaration model
#[derive(Debug, Clone, Copy)]
pub struct InteropNamer<'c> {
    config: &'c InteropConfig,
}

impl<'c> InteropNamer<'c> {
    pub fn new(config: &'c InteropConfig) -> Self {
        Self { config }
    }

    /// Interop name of a type outside member context
    pub fn type_name(&self, declaration: &TypeDeclaration) -> String {
        self.type_name_for(declaration, false)
    }

    /// Interop name of a type, in member context when `for_member` is set
    pub fn type_name_for(&self, declaration: &TypeDeclaration, for_member: bool) -> String {
        if let Some(name) = &declaration.interop_name {
            return name.clone();
        }
        if let Some(name) = self.config.well_known_name(declaration.qualified_name.as_str()) {
            return name.to_string();
        }
        let name = format!(
            "{}{}",
            self.type_name_prefix(declaration, for_member),
            dollar_free(&title_case(&declaration.simple_source_name))
        );
        trace!(
            "Derived interop name '{}' for '{}'",
            name,
            declaration.qualified_name
        );
        name
    }

    fn type_name_prefix(&self, declaration: &TypeDeclaration, for_member: bool) -> String {
        if let Some(enclosing) = &declaration.enclosing {
            return format!("{}_", self.type_name_for(enclosing, for_member));
        }
        if let Some(prefix) = &declaration.interop_name_prefix {
            return prefix.clone();
        }
        declaration
            .package_name
            .as_deref()
            .map(|package| self.package_prefix(package, for_member))
            .unwrap_or_default()
    }

    fn package_prefix(&self, package: &str, for_member: bool) -> String {
        let namespace = (!for_member && self.config.is_reserved_package(package))
            .then_some(self.config.reserved_root_namespace.as_str());
        namespace
            .into_iter()
            .chain(package.split('.'))
            .map(|segment| dollar_free(&title_case(segment)))
            .collect()
    }

    /// Interop name of a value type
    ///
    /// `use_id` renders the root object type as `id`. Fails only for the
    /// `null` primitive, which never names a value type.
    pub fn descriptor_name(
        &self,
        descriptor: &TypeDescriptor,
        use_id: bool,
        for_member: bool,
        location: &DeclarationLocation,
    ) -> Result<String, NamingError> {
        match descriptor {
            TypeDescriptor::Primitive { primitive } => primitive_name(*primitive)
                .map(str::to_string)
                .ok_or_else(|| NamingError::UnexpectedDescriptor {
                    location: location.clone(),
                    descriptor: format!("null {}", descriptor.kind_name()),
                }),
            TypeDescriptor::Array { leaf, dimensions } => {
                let leaf_name = self.descriptor_name(leaf, false, for_member, location)?;
                if *dimensions > 1 {
                    Ok(format!("{}Array{}", leaf_name, dimensions))
                } else {
                    Ok(format!("{}Array", leaf_name))
                }
            }
            TypeDescriptor::Declared { declaration } => {
                if use_id && declaration.is_root_object() {
                    Ok(ID_NAME.to_string())
                } else {
                    Ok(self.type_name_for(declaration, for_member))
                }
            }
            TypeDescriptor::TypeVariable { upper_bound, .. } => {
                self.descriptor_name(upper_bound, use_id, for_member, location)
            }
            TypeDescriptor::Intersection { .. } => Ok(ID_NAME.to_string()),
        }
    }

    /// Title-cased interop name of the parameter's type, in member context
    pub fn parameter_name(
        &self,
        parameter: &Variable,
        location: &DeclarationLocation,
    ) -> Result<String, NamingError> {
        let location = location.clone().in_parameter(&parameter.name);
        let name = self.descriptor_name(&parameter.type_descriptor, true, true, &location)?;
        Ok(title_case(&name))
    }

    /// Interop name of a field
    ///
    /// ```
    /// use crossname_codegen::interop::InteropNamer;
    /// use crossname_core::{FieldDescriptor, InteropConfig, TypeDeclaration};
    ///
    /// let config = InteropConfig::default();
    /// let namer = InteropNamer::new(&config);
    /// let owner = TypeDeclaration::new("org.jbox2d.common.Settings").unwrap();
    ///
    /// assert_eq!(namer.field_name(&FieldDescriptor::new(owner.clone(), "maxPolygonVertices")), "maxPolygonVertices");
    /// assert_eq!(namer.field_name(&FieldDescriptor::new(owner.clone(), "newContact")), "theNewContact");
    /// assert_eq!(namer.field_name(&FieldDescriptor::new(owner, "NULL")), "NULL__");
    /// ```
    pub fn field_name(&self, field: &FieldDescriptor) -> String {
        let name = dollar_free(&field.name);
        let name = if RESERVED_FIELD_PREFIXES
            .iter()
            .any(|prefix| camel_case_starts_with(&name, prefix))
        {
            format!("{}{}", FIELD_FILLER, title_case(&name))
        } else {
            name
        };
        if is_reserved(&name) {
            name + FORBIDDEN_KEYWORD_SUFFIX
        } else {
            name
        }
    }

    /// Interop names of a method, `None` when it gets no annotations
    ///
    /// Constructors:
    /// - `initWithName:` → no method name, labels `[Name]`
    /// - `create:size:` → method name `create`, labels `[<first parameter>, size]`
    /// - no selector → no method name, labels `[P1, withP2, ...]`
    ///
    /// Ordinary methods:
    /// - no selector or no parameters → the selector as-is, labels `[withP1, ...]`
    /// - `setWidth:height:` → method name `set`, labels `[Width, height]`
    /// - `scale:` → method name `sc`, labels `[ale]` (midpoint split)
    pub fn method_names(
        &self,
        method: &MethodDescriptor,
    ) -> Result<Option<MethodInteropNames>, NamingError> {
        if !method_needs_annotations(method) {
            trace!("No interop names for '{}'", method.name);
            return Ok(None);
        }

        let location = DeclarationLocation::new()
            .in_type(method.enclosing.qualified_name.as_str())
            .in_member(&method.name);
        let parameter_names = method
            .parameters
            .iter()
            .map(|parameter| self.parameter_name(parameter, &location))
            .collect::<Result<Vec<_>, _>>()?;

        let selector = method.interop_selector.as_deref();
        let names = if method.is_constructor {
            constructor_names(selector, parameter_names)
        } else {
            non_constructor_names(selector, parameter_names)
        };
        debug!("Interop names for {}: {:?}", location, names);
        Ok(Some(names))
    }
}

fn dollar_free(name: &str) -> String {
    name.replace('$', "_")
}

/// `None` for the `null` primitive, which never names a value type
fn primitive_name(primitive: PrimitiveKind) -> Option<&'static str> {
    match primitive {
        PrimitiveKind::Void => Some("void"),
        PrimitiveKind::Boolean => Some("boolean"),
        PrimitiveKind::Byte => Some("byte"),
        PrimitiveKind::Short => Some("short"),
        PrimitiveKind::Int => Some("int"),
        PrimitiveKind::Long => Some("long"),
        PrimitiveKind::Char => Some("char"),
        PrimitiveKind::Float => Some("float"),
        PrimitiveKind::Double => Some("double"),
        PrimitiveKind::Null => None,
    }
}

/// Selector tokens, one trailing `:` dropped
fn selector_tokens(selector: &str) -> Vec<String> {
    selector
        .strip_suffix(':')
        .unwrap_or(selector)
        .split(':')
        .map(str::to_string)
        .collect()
}

fn constructor_names(selector: Option<&str>, parameter_names: Vec<String>) -> MethodInteropNames {
    let Some(selector) = selector else {
        let parameter_names = parameter_names
            .into_iter()
            .enumerate()
            .map(|(index, name)| {
                if index == 0 {
                    name
                } else {
                    format!("{}{}", LABEL_CONNECTIVE, name)
                }
            })
            .collect();
        return MethodInteropNames {
            method_name: None,
            parameter_names,
        };
    };

    let mut tokens = selector_tokens(selector);
    if let Some(remainder) = tokens[0].strip_prefix(INITIALIZER_PREFIX) {
        let remainder = remainder.to_string();
        tokens[0] = remainder;
        return MethodInteropNames {
            method_name: None,
            parameter_names: tokens,
        };
    }

    let method_name = tokens.remove(0);
    let parameter_names = parameter_names
        .into_iter()
        .take(1)
        .chain(tokens)
        .collect();
    MethodInteropNames {
        method_name: Some(method_name),
        parameter_names,
    }
}

/// A selector without `:` is kept whole as the method name, even when the method has parameters
fn non_constructor_names(
    selector: Option<&str>,
    parameter_names: Vec<String>,
) -> MethodInteropNames {
    match selector {
        Some(selector) if !parameter_names.is_empty() && selector.contains(':') => {
            split_selector(selector)
        }
        selector => MethodInteropNames {
            method_name: selector.map(str::to_string),
            parameter_names: parameter_names
                .iter()
                .map(|name| format!("{}{}", LABEL_CONNECTIVE, name))
                .collect(),
        },
    }
}

/// Split the first selector token into the bare method name and the first label
///
/// The split happens before the last uppercase character after position 0,
/// otherwise at the character midpoint. Tokens of one character stay whole
/// and the method gets no bare name.
fn split_selector(selector: &str) -> MethodInteropNames {
    let mut tokens = selector_tokens(selector);
    let first = &tokens[0];
    let char_count = first.chars().count();
    if char_count <= 1 {
        return MethodInteropNames {
            method_name: None,
            parameter_names: tokens,
        };
    }

    let split_index = first
        .char_indices()
        .filter(|(index, c)| *index > 0 && c.is_uppercase())
        .map(|(index, _)| index)
        .last()
        .unwrap_or_else(|| {
            first
                .char_indices()
                .nth(char_count / 2)
                .map_or(first.len(), |(index, _)| index)
        });

    let (name, label) = first.split_at(split_index);
    let (method_name, label) = (name.to_string(), label.to_string());
    tokens[0] = label;
    MethodInteropNames {
        method_name: Some(method_name),
        parameter_names: tokens,
    }
}

fn visibility_needs_annotation(visibility: Visibility) -> bool {
    visibility.is_externally_visible()
}

/// Externally visible, non-local types get an interop name annotation
pub fn type_needs_annotation(declaration: &TypeDeclaration) -> bool {
    visibility_needs_annotation(declaration.visibility) && !declaration.is_local
}

/// Visible methods not overriding an interop-visible signature
pub fn method_needs_annotations(method: &MethodDescriptor) -> bool {
    visibility_needs_annotation(method.visibility) && !method.is_interop_override
}

/// Visible static fields of annotated types
pub fn field_needs_annotation(field: &FieldDescriptor) -> bool {
    type_needs_annotation(&field.enclosing)
        && visibility_needs_annotation(field.visibility)
        && field.is_static
}

/// Annotation fragments carrying interop names
impl<'a> Renderer<'a> {
    pub fn interop_namer(&self) -> InteropNamer<'a> {
        InteropNamer::new(self.config())
    }

    /// `@file:OptIn(ExperimentalObjCName::class)`
    pub fn opt_in_file_annotation_source(&mut self) -> Source {
        let annotations = &self.config().annotations;
        let opt_in = self.top_level_qualified_name_source(&annotations.opt_in);
        let marker = self.top_level_qualified_name_source(&annotations.experimental_marker);
        Source::join([
            Source::text("@file:"),
            opt_in,
            Source::join([marker, Source::text("::class")]).in_round_brackets(),
        ])
    }

    /// `@ObjCName("name")` or `@ObjCName("name", exact = ...)`
    pub fn interop_name_annotation_source(&mut self, name: &str, exact: Option<bool>) -> Source {
        let annotation_name = &self.config().annotations.interop_name;
        let annotation = self.top_level_qualified_name_source(annotation_name);
        let exact = exact.map_or_else(Source::empty, |exact| {
            Source::assignment(Source::text("exact"), Source::bool_literal(exact))
        });
        Source::join([
            Source::text("@"),
            annotation,
            Source::comma_separated([Source::string_literal(name), exact]).in_round_brackets(),
        ])
    }

    pub fn type_annotation_source(&mut self, declaration: &TypeDeclaration) -> Source {
        if !type_needs_annotation(declaration) {
            return Source::empty();
        }
        let name = self.interop_namer().type_name(declaration);
        self.interop_name_annotation_source(&name, Some(true))
    }

    /// Constructors never get a method annotation; their names live in the labels
    pub fn method_annotation_source(
        &mut self,
        method: &MethodDescriptor,
        names: Option<&MethodInteropNames>,
    ) -> Source {
        if method.is_constructor {
            return Source::empty();
        }
        match names.and_then(|names| names.method_name.as_deref()) {
            Some(name) => self.interop_name_annotation_source(name, Some(false)),
            None => Source::empty(),
        }
    }

    pub fn field_annotation_source(&mut self, field: &FieldDescriptor) -> Source {
        if !field_needs_annotation(field) {
            return Source::empty();
        }
        let name = self.interop_namer().field_name(field);
        self.interop_name_annotation_source(&name, Some(false))
    }

    pub fn parameter_annotation_source(&mut self, label: &str) -> Source {
        self.interop_name_annotation_source(label, None)
    }
}
