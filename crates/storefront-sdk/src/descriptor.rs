//! Static per-type field tables driving response deserialization.
//!
//! Instead of one deserializer class per schema type, a single engine
//! ([`crate::response`]) is parameterized by a [`TypeDescriptor`]: the
//! declared kind and nullability of every field the type can carry.
//! Tables are written once per schema type in [`crate::types`].

use std::fmt;

/// The scalar kinds the codec understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    Id,
    String,
    Int,
    Float,
    Boolean,
    DateTime,
    Money,
    Url,
    /// Raw enum identifier; variant mapping happens at accessor time.
    Enum,
}

/// Resolves a `__typename` discriminator to a concrete descriptor.
/// `None` means the reported type is not part of the local schema model.
pub type TypeResolver = fn(&str) -> Option<&'static TypeDescriptor>;

/// Declared shape of one schema field.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    Scalar(ScalarKind),
    ScalarList(ScalarKind),
    Object(&'static TypeDescriptor),
    ObjectList(&'static TypeDescriptor),
    Interface(TypeResolver),
    InterfaceList(TypeResolver),
}

#[derive(Debug, Clone, Copy)]
pub struct FieldShape {
    pub kind: FieldKind,
    pub nullable: bool,
}

impl FieldShape {
    pub const fn scalar(kind: ScalarKind) -> Self {
        Self {
            kind: FieldKind::Scalar(kind),
            nullable: false,
        }
    }

    pub const fn scalar_list(kind: ScalarKind) -> Self {
        Self {
            kind: FieldKind::ScalarList(kind),
            nullable: false,
        }
    }

    pub const fn object(descriptor: &'static TypeDescriptor) -> Self {
        Self {
            kind: FieldKind::Object(descriptor),
            nullable: false,
        }
    }

    pub const fn object_list(descriptor: &'static TypeDescriptor) -> Self {
        Self {
            kind: FieldKind::ObjectList(descriptor),
            nullable: false,
        }
    }

    pub const fn interface(resolver: TypeResolver) -> Self {
        Self {
            kind: FieldKind::Interface(resolver),
            nullable: false,
        }
    }

    pub const fn interface_list(resolver: TypeResolver) -> Self {
        Self {
            kind: FieldKind::InterfaceList(resolver),
            nullable: false,
        }
    }

    pub const fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }
}

/// One schema type's declared field set.
pub struct TypeDescriptor {
    pub name: &'static str,
    pub fields: &'static [(&'static str, FieldShape)],
}

impl TypeDescriptor {
    /// Look up the declared shape of a field by its schema name.
    pub fn field(&self, name: &str) -> Option<&FieldShape> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, shape)| shape)
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Placeholder descriptor for types the local schema model does not
/// recognize. Only the opaque `id` is declared; everything else a future
/// server might attach is invisible rather than fatal.
pub static UNKNOWN_TYPE: TypeDescriptor = TypeDescriptor {
    name: "Unknown",
    fields: &[("id", FieldShape::scalar(ScalarKind::Id).nullable())],
};
