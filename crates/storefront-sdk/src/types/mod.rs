//! Schema types: one query-builder / typed-view / field-table triple per
//! type, written in the shape a schema generator would emit.
//!
//! Builders append to a [`SelectionSet`](crate::query::SelectionSet)
//! through by-value chaining; views are cheap `Copy` wrappers borrowing
//! from the deserialized [`ResponseObject`](crate::response::ResponseObject)
//! tree, which stays owned by the caller.

pub mod address;
pub mod checkout;
pub mod connection;
pub mod enums;
pub mod inputs;
pub mod mutation;
pub mod node;
pub mod payloads;
pub mod product;
pub mod query_root;
pub mod shop;

pub use address::{MailingAddress, MailingAddressQuery};
pub use checkout::{
    Attribute, AttributeQuery, Checkout, CheckoutLineItem, CheckoutLineItemQuery, CheckoutQuery,
    ShippingRate, ShippingRateQuery,
};
pub use connection::{Connection, ConnectionQuery, PageInfo, PageInfoQuery};
pub use enums::{CurrencyCode, ProductSortKeys};
pub use inputs::{CheckoutCreateInput, CheckoutLineItemInput};
pub use mutation::{Mutation, MutationQuery};
pub use node::{Node, NodeQuery, UnknownNode};
pub use payloads::{
    CheckoutCreatePayload, CheckoutCreatePayloadQuery, CheckoutLineItemsAddPayload,
    CheckoutLineItemsAddPayloadQuery, UserError, UserErrorQuery,
};
pub use product::{
    Product, ProductConnectionQuery, ProductQuery, ProductVariant, ProductVariantConnectionQuery,
    ProductVariantQuery,
};
pub use query_root::{QueryRoot, QueryRootQuery};
pub use shop::{Shop, ShopQuery};

use crate::response::ResponseObject;

/// Implemented by typed views over a deserialized response object.
pub trait ResponseView<'a>: Sized + Copy {
    fn from_object(object: &'a ResponseObject) -> Self;
}
