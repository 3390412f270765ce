//! Structural model of declared types
//!
//! Stores classes and interfaces with their attributes and methods, keyed
//! by type name in order of first appearance.

use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use crate::core::{Database, Modifier, TypeKind, Visibility};

/// Upper-case `name` when the member is `final`
fn apply_final_casing(modifier: Modifier, name: String) -> String {
    if modifier == Modifier::Final {
        name.to_uppercase()
    } else {
        name
    }
}

/// A field declared on a type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeRecord {
    pub visibility: Visibility,
    pub modifier: Modifier,
    #[serde(rename = "type")]
    pub attr_type: String,
    pub name: String,
}

impl AttributeRecord {
    /// Create an attribute; `final` names are stored upper-cased
    pub fn new(
        visibility: Visibility,
        modifier: Modifier,
        attr_type: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            visibility,
            modifier,
            attr_type: attr_type.into(),
            name: apply_final_casing(modifier, name.into()),
        }
    }
}

/// A method declared on a type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodRecord {
    pub visibility: Visibility,
    pub modifier: Modifier,
    pub return_type: String,
    pub name: String,
    /// Raw text between the parentheses, unparsed
    pub parameters: String,
}

impl MethodRecord {
    /// Create a method; `final` names are stored upper-cased
    pub fn new(
        visibility: Visibility,
        modifier: Modifier,
        return_type: impl Into<String>,
        name: impl Into<String>,
        parameters: impl Into<String>,
    ) -> Self {
        Self {
            visibility,
            modifier,
            return_type: return_type.into(),
            name: apply_final_casing(modifier, name.into()),
            parameters: parameters.into(),
        }
    }
}

/// A declared class or interface
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeRecord {
    pub kind: TypeKind,
    pub attributes: Vec<AttributeRecord>,
    pub methods: Vec<MethodRecord>,
}

impl TypeRecord {
    pub fn new(kind: TypeKind) -> Self {
        Self {
            kind,
            attributes: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn add_attribute(&mut self, attribute: AttributeRecord) {
        self.attributes.push(attribute);
    }

    pub fn add_method(&mut self, method: MethodRecord) {
        self.methods.push(method);
    }
}

/// Ordered mapping from type name to its record
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ClassModel {
    types: IndexMap<String, TypeRecord>,
}

impl ClassModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fresh, empty record for `name`
    ///
    /// A type declared again replaces its earlier record (last seen wins)
    /// but keeps its original position in iteration order.
    pub fn declare(&mut self, name: &str, kind: TypeKind) {
        if self.insert_record(name, TypeRecord::new(kind)).is_some() {
            debug!(name, "Type declared again; earlier members dropped");
        }
    }

    pub fn get(&self, name: &str) -> Option<&TypeRecord> {
        self.types.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut TypeRecord> {
        self.types.get_mut(name)
    }

    /// Iterate over `(name, record)` pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TypeRecord)> {
        self.types.iter().map(|(name, record)| (name.as_str(), record))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Total attributes across all types
    pub fn attribute_count(&self) -> usize {
        self.types.values().map(|t| t.attributes.len()).sum()
    }

    /// Total methods across all types
    pub fn method_count(&self) -> usize {
        self.types.values().map(|t| t.methods.len()).sum()
    }
}

impl Database for ClassModel {
    type Record = TypeRecord;

    fn insert_record(&mut self, name: &str, record: Self::Record) -> Option<Self::Record> {
        self.types.insert(name.to_string(), record)
    }

    fn records(&self) -> impl Iterator<Item = (&str, &Self::Record)> {
        self.iter()
    }

    fn record_count(&self) -> usize {
        self.types.len()
    }
}
