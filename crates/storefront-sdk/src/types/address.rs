//! Mailing addresses attached to checkouts and orders.

use crate::descriptor::{FieldShape, ScalarKind, TypeDescriptor};
use crate::error::StorefrontError;
use crate::query::{QueryBuilder, SelectionSet};
use crate::response::ResponseObject;
use crate::scalars::Id;
use crate::types::ResponseView;

/// Field table for `MailingAddress`.
pub static MAILING_ADDRESS: TypeDescriptor = TypeDescriptor {
    name: "MailingAddress",
    fields: &[
        ("id", FieldShape::scalar(ScalarKind::Id)),
        ("address1", FieldShape::scalar(ScalarKind::String).nullable()),
        ("address2", FieldShape::scalar(ScalarKind::String).nullable()),
        ("city", FieldShape::scalar(ScalarKind::String).nullable()),
        ("country", FieldShape::scalar(ScalarKind::String).nullable()),
        ("firstName", FieldShape::scalar(ScalarKind::String).nullable()),
        ("lastName", FieldShape::scalar(ScalarKind::String).nullable()),
        ("zip", FieldShape::scalar(ScalarKind::String).nullable()),
        ("latitude", FieldShape::scalar(ScalarKind::Float).nullable()),
        ("longitude", FieldShape::scalar(ScalarKind::Float).nullable()),
    ],
};

/// Builder for `MailingAddress` field selections.
#[derive(Debug, Clone)]
pub struct MailingAddressQuery {
    selection: SelectionSet,
}

impl QueryBuilder for MailingAddressQuery {
    fn new() -> Self {
        Self {
            selection: SelectionSet::new(),
        }
    }

    fn into_selection(self) -> SelectionSet {
        self.selection
    }
}

impl MailingAddressQuery {
    pub fn id(mut self) -> Self {
        self.selection
            .add_field("id", None, Vec::new(), SelectionSet::new());
        self
    }

    pub fn address1(mut self) -> Self {
        self.selection
            .add_field("address1", None, Vec::new(), SelectionSet::new());
        self
    }

    pub fn address2(mut self) -> Self {
        self.selection
            .add_field("address2", None, Vec::new(), SelectionSet::new());
        self
    }

    pub fn city(mut self) -> Self {
        self.selection
            .add_field("city", None, Vec::new(), SelectionSet::new());
        self
    }

    pub fn country(mut self) -> Self {
        self.selection
            .add_field("country", None, Vec::new(), SelectionSet::new());
        self
    }

    pub fn first_name(mut self) -> Self {
        self.selection
            .add_field("firstName", None, Vec::new(), SelectionSet::new());
        self
    }

    pub fn last_name(mut self) -> Self {
        self.selection
            .add_field("lastName", None, Vec::new(), SelectionSet::new());
        self
    }

    pub fn zip(mut self) -> Self {
        self.selection
            .add_field("zip", None, Vec::new(), SelectionSet::new());
        self
    }

    pub fn latitude(mut self) -> Self {
        self.selection
            .add_field("latitude", None, Vec::new(), SelectionSet::new());
        self
    }

    pub fn longitude(mut self) -> Self {
        self.selection
            .add_field("longitude", None, Vec::new(), SelectionSet::new());
        self
    }
}

/// A deserialized `MailingAddress`.
#[derive(Debug, Clone, Copy)]
pub struct MailingAddress<'a> {
    object: &'a ResponseObject,
}

impl<'a> ResponseView<'a> for MailingAddress<'a> {
    fn from_object(object: &'a ResponseObject) -> Self {
        Self { object }
    }
}

impl<'a> MailingAddress<'a> {
    pub fn id(&self) -> Result<&'a Id, StorefrontError> {
        self.object.id("id", None)
    }

    pub fn address1(&self) -> Result<Option<&'a str>, StorefrontError> {
        self.object.string_opt("address1", None)
    }

    pub fn address2(&self) -> Result<Option<&'a str>, StorefrontError> {
        self.object.string_opt("address2", None)
    }

    pub fn city(&self) -> Result<Option<&'a str>, StorefrontError> {
        self.object.string_opt("city", None)
    }

    pub fn country(&self) -> Result<Option<&'a str>, StorefrontError> {
        self.object.string_opt("country", None)
    }

    pub fn first_name(&self) -> Result<Option<&'a str>, StorefrontError> {
        self.object.string_opt("firstName", None)
    }

    pub fn last_name(&self) -> Result<Option<&'a str>, StorefrontError> {
        self.object.string_opt("lastName", None)
    }

    pub fn zip(&self) -> Result<Option<&'a str>, StorefrontError> {
        self.object.string_opt("zip", None)
    }

    pub fn latitude(&self) -> Result<Option<f64>, StorefrontError> {
        self.object.float_opt("latitude", None)
    }

    pub fn longitude(&self) -> Result<Option<f64>, StorefrontError> {
        self.object.float_opt("longitude", None)
    }
}
