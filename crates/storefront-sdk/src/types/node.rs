//! Interface resolution for `Node`-typed fields.
//!
//! A `Node` response is resolved to a concrete view through the static
//! discriminator table in [`resolve_node_type`]; a discriminator the
//! local model cannot name becomes an [`UnknownNode`] placeholder that
//! exposes only the opaque id, so server-side schema additions never
//! break deserialization.

use crate::descriptor::TypeDescriptor;
use crate::error::StorefrontError;
use crate::query::{QueryBuilder, SelectionSet};
use crate::response::ResponseObject;
use crate::scalars::Id;
use crate::types::address::{MailingAddress, MailingAddressQuery, MAILING_ADDRESS};
use crate::types::checkout::{
    Checkout, CheckoutLineItem, CheckoutLineItemQuery, CheckoutQuery, CHECKOUT,
    CHECKOUT_LINE_ITEM,
};
use crate::types::product::{
    Product, ProductQuery, ProductVariant, ProductVariantQuery, PRODUCT, PRODUCT_VARIANT,
};
use crate::types::ResponseView;

/// Resolve a `__typename` discriminator to its concrete descriptor.
pub fn resolve_node_type(name: &str) -> Option<&'static TypeDescriptor> {
    match name {
        "Checkout" => Some(&CHECKOUT),
        "Product" => Some(&PRODUCT),
        "ProductVariant" => Some(&PRODUCT_VARIANT),
        "CheckoutLineItem" => Some(&CHECKOUT_LINE_ITEM),
        "MailingAddress" => Some(&MAILING_ADDRESS),
        _ => None,
    }
}

/// Builder for fields typed as the `Node` interface.
///
/// `__typename` and `id` are always selected so every response can be
/// resolved to a concrete type; per-type fields are added through the
/// `on_*` inline-fragment methods.
#[derive(Debug, Clone)]
pub struct NodeQuery {
    selection: SelectionSet,
}

impl QueryBuilder for NodeQuery {
    fn new() -> Self {
        let mut selection = SelectionSet::new();
        selection.add_field("__typename", None, Vec::new(), SelectionSet::new());
        selection.add_field("id", None, Vec::new(), SelectionSet::new());
        Self { selection }
    }

    fn into_selection(self) -> SelectionSet {
        self.selection
    }
}

impl NodeQuery {
    pub fn on_checkout(mut self, subfields: impl FnOnce(CheckoutQuery) -> CheckoutQuery) -> Self {
        let subquery = subfields(CheckoutQuery::new());
        self.selection
            .add_inline_fragment("Checkout", subquery.into_selection());
        self
    }

    pub fn on_product(mut self, subfields: impl FnOnce(ProductQuery) -> ProductQuery) -> Self {
        let subquery = subfields(ProductQuery::new());
        self.selection
            .add_inline_fragment("Product", subquery.into_selection());
        self
    }

    pub fn on_product_variant(
        mut self,
        subfields: impl FnOnce(ProductVariantQuery) -> ProductVariantQuery,
    ) -> Self {
        let subquery = subfields(ProductVariantQuery::new());
        self.selection
            .add_inline_fragment("ProductVariant", subquery.into_selection());
        self
    }

    pub fn on_checkout_line_item(
        mut self,
        subfields: impl FnOnce(CheckoutLineItemQuery) -> CheckoutLineItemQuery,
    ) -> Self {
        let subquery = subfields(CheckoutLineItemQuery::new());
        self.selection
            .add_inline_fragment("CheckoutLineItem", subquery.into_selection());
        self
    }

    pub fn on_mailing_address(
        mut self,
        subfields: impl FnOnce(MailingAddressQuery) -> MailingAddressQuery,
    ) -> Self {
        let subquery = subfields(MailingAddressQuery::new());
        self.selection
            .add_inline_fragment("MailingAddress", subquery.into_selection());
        self
    }
}

/// A node whose reported type is not part of the local schema model.
/// Exposes only the opaque id, if one arrived.
#[derive(Debug, Clone, Copy)]
pub struct UnknownNode<'a> {
    object: &'a ResponseObject,
}

impl<'a> ResponseView<'a> for UnknownNode<'a> {
    fn from_object(object: &'a ResponseObject) -> Self {
        Self { object }
    }
}

impl<'a> UnknownNode<'a> {
    /// The type name the server reported.
    pub fn type_name(&self) -> &'a str {
        self.object.type_name()
    }

    pub fn id(&self) -> Result<Option<&'a Id>, StorefrontError> {
        self.object.id_opt("id", None)
    }
}

/// Concrete resolution of a `Node`-typed response object.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Checkout(Checkout<'a>),
    Product(Product<'a>),
    ProductVariant(ProductVariant<'a>),
    CheckoutLineItem(CheckoutLineItem<'a>),
    MailingAddress(MailingAddress<'a>),
    /// Forward-compatible placeholder for unrecognized types.
    Unknown(UnknownNode<'a>),
}

impl<'a> ResponseView<'a> for Node<'a> {
    /// Wrap a deserialized object according to its reported type.
    fn from_object(object: &'a ResponseObject) -> Self {
        match object.type_name() {
            "Checkout" => Self::Checkout(Checkout::from_object(object)),
            "Product" => Self::Product(Product::from_object(object)),
            "ProductVariant" => Self::ProductVariant(ProductVariant::from_object(object)),
            "CheckoutLineItem" => Self::CheckoutLineItem(CheckoutLineItem::from_object(object)),
            "MailingAddress" => Self::MailingAddress(MailingAddress::from_object(object)),
            _ => Self::Unknown(UnknownNode::from_object(object)),
        }
    }
}

impl<'a> Node<'a> {
    /// The node's opaque identity.
    pub fn id(&self) -> Result<Option<&'a Id>, StorefrontError> {
        match self {
            Self::Checkout(v) => v.id().map(Some),
            Self::Product(v) => v.id().map(Some),
            Self::ProductVariant(v) => v.id().map(Some),
            Self::CheckoutLineItem(v) => v.id().map(Some),
            Self::MailingAddress(v) => v.id().map(Some),
            Self::Unknown(v) => v.id(),
        }
    }
}
