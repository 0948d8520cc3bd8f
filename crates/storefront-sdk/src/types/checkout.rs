//! Checkout types: the cart being assembled, its line items, shipping,
//! and custom attributes.

use crate::descriptor::{FieldShape, ScalarKind, TypeDescriptor};
use crate::error::StorefrontError;
use crate::query::{InputValue, QueryBuilder, SelectionSet};
use crate::response::ResponseObject;
use crate::scalars::Id;
use crate::types::address::{MailingAddress, MailingAddressQuery, MAILING_ADDRESS};
use crate::types::enums::CurrencyCode;
use crate::types::product::{ProductVariant, ProductVariantQuery, PRODUCT_VARIANT};
use crate::types::ResponseView;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use url::Url;

/// Field table for `Checkout`.
pub static CHECKOUT: TypeDescriptor = TypeDescriptor {
    name: "Checkout",
    fields: &[
        ("id", FieldShape::scalar(ScalarKind::Id)),
        ("webUrl", FieldShape::scalar(ScalarKind::Url)),
        ("createdAt", FieldShape::scalar(ScalarKind::DateTime)),
        ("updatedAt", FieldShape::scalar(ScalarKind::DateTime)),
        ("completedAt", FieldShape::scalar(ScalarKind::DateTime).nullable()),
        ("currencyCode", FieldShape::scalar(ScalarKind::Enum)),
        ("email", FieldShape::scalar(ScalarKind::String).nullable()),
        ("note", FieldShape::scalar(ScalarKind::String).nullable()),
        ("requiresShipping", FieldShape::scalar(ScalarKind::Boolean)),
        ("taxesIncluded", FieldShape::scalar(ScalarKind::Boolean)),
        ("subtotalPrice", FieldShape::scalar(ScalarKind::Money)),
        ("totalTax", FieldShape::scalar(ScalarKind::Money)),
        ("totalPrice", FieldShape::scalar(ScalarKind::Money)),
        ("paymentDue", FieldShape::scalar(ScalarKind::Money)),
        ("lineItems", FieldShape::object_list(&CHECKOUT_LINE_ITEM)),
        ("shippingAddress", FieldShape::object(&MAILING_ADDRESS).nullable()),
        ("shippingLine", FieldShape::object(&SHIPPING_RATE).nullable()),
        ("customAttributes", FieldShape::object_list(&ATTRIBUTE)),
    ],
};

/// Field table for `CheckoutLineItem`.
pub static CHECKOUT_LINE_ITEM: TypeDescriptor = TypeDescriptor {
    name: "CheckoutLineItem",
    fields: &[
        ("id", FieldShape::scalar(ScalarKind::Id)),
        ("title", FieldShape::scalar(ScalarKind::String)),
        ("quantity", FieldShape::scalar(ScalarKind::Int)),
        ("variant", FieldShape::object(&PRODUCT_VARIANT).nullable()),
    ],
};

/// Field table for `ShippingRate`.
pub static SHIPPING_RATE: TypeDescriptor = TypeDescriptor {
    name: "ShippingRate",
    fields: &[
        ("handle", FieldShape::scalar(ScalarKind::String)),
        ("title", FieldShape::scalar(ScalarKind::String)),
        ("price", FieldShape::scalar(ScalarKind::Money)),
    ],
};

/// Field table for `Attribute`.
pub static ATTRIBUTE: TypeDescriptor = TypeDescriptor {
    name: "Attribute",
    fields: &[
        ("key", FieldShape::scalar(ScalarKind::String)),
        ("value", FieldShape::scalar(ScalarKind::String).nullable()),
    ],
};

/// Builder for `Checkout` field selections.
#[derive(Debug, Clone)]
pub struct CheckoutQuery {
    selection: SelectionSet,
}

impl QueryBuilder for CheckoutQuery {
    fn new() -> Self {
        Self {
            selection: SelectionSet::new(),
        }
    }

    fn into_selection(self) -> SelectionSet {
        self.selection
    }
}

impl CheckoutQuery {
    pub fn id(mut self) -> Self {
        self.selection
            .add_field("id", None, Vec::new(), SelectionSet::new());
        self
    }

    pub fn web_url(mut self) -> Self {
        self.selection
            .add_field("webUrl", None, Vec::new(), SelectionSet::new());
        self
    }

    pub fn created_at(mut self) -> Self {
        self.selection
            .add_field("createdAt", None, Vec::new(), SelectionSet::new());
        self
    }

    pub fn updated_at(mut self) -> Self {
        self.selection
            .add_field("updatedAt", None, Vec::new(), SelectionSet::new());
        self
    }

    pub fn completed_at(mut self) -> Self {
        self.selection
            .add_field("completedAt", None, Vec::new(), SelectionSet::new());
        self
    }

    pub fn currency_code(mut self) -> Self {
        self.selection
            .add_field("currencyCode", None, Vec::new(), SelectionSet::new());
        self
    }

    pub fn email(mut self) -> Self {
        self.selection
            .add_field("email", None, Vec::new(), SelectionSet::new());
        self
    }

    pub fn note(mut self) -> Self {
        self.selection
            .add_field("note", None, Vec::new(), SelectionSet::new());
        self
    }

    pub fn requires_shipping(mut self) -> Self {
        self.selection
            .add_field("requiresShipping", None, Vec::new(), SelectionSet::new());
        self
    }

    pub fn taxes_included(mut self) -> Self {
        self.selection
            .add_field("taxesIncluded", None, Vec::new(), SelectionSet::new());
        self
    }

    pub fn subtotal_price(mut self) -> Self {
        self.selection
            .add_field("subtotalPrice", None, Vec::new(), SelectionSet::new());
        self
    }

    pub fn total_tax(mut self) -> Self {
        self.selection
            .add_field("totalTax", None, Vec::new(), SelectionSet::new());
        self
    }

    pub fn total_price(mut self) -> Self {
        self.selection
            .add_field("totalPrice", None, Vec::new(), SelectionSet::new());
        self
    }

    pub fn payment_due(mut self) -> Self {
        self.selection
            .add_field("paymentDue", None, Vec::new(), SelectionSet::new());
        self
    }

    /// Line items of the checkout. Selecting this field twice with
    /// different arguments requires distinct aliases.
    pub fn line_items(
        mut self,
        alias: Option<&str>,
        first: i64,
        after: Option<&str>,
        subfields: impl FnOnce(CheckoutLineItemQuery) -> CheckoutLineItemQuery,
    ) -> Self {
        let mut arguments = vec![("first", InputValue::Int(first))];
        if let Some(after) = after {
            arguments.push(("after", InputValue::String(after.to_string())));
        }
        let subquery = subfields(CheckoutLineItemQuery::new());
        self.selection
            .add_field("lineItems", alias, arguments, subquery.into_selection());
        self
    }

    pub fn shipping_address(
        mut self,
        subfields: impl FnOnce(MailingAddressQuery) -> MailingAddressQuery,
    ) -> Self {
        let subquery = subfields(MailingAddressQuery::new());
        self.selection
            .add_field("shippingAddress", None, Vec::new(), subquery.into_selection());
        self
    }

    pub fn shipping_line(
        mut self,
        subfields: impl FnOnce(ShippingRateQuery) -> ShippingRateQuery,
    ) -> Self {
        let subquery = subfields(ShippingRateQuery::new());
        self.selection
            .add_field("shippingLine", None, Vec::new(), subquery.into_selection());
        self
    }

    pub fn custom_attributes(
        mut self,
        subfields: impl FnOnce(AttributeQuery) -> AttributeQuery,
    ) -> Self {
        let subquery = subfields(AttributeQuery::new());
        self.selection.add_field(
            "customAttributes",
            None,
            Vec::new(),
            subquery.into_selection(),
        );
        self
    }
}

/// A deserialized `Checkout`.
#[derive(Debug, Clone, Copy)]
pub struct Checkout<'a> {
    object: &'a ResponseObject,
}

impl<'a> ResponseView<'a> for Checkout<'a> {
    fn from_object(object: &'a ResponseObject) -> Self {
        Self { object }
    }
}

impl<'a> Checkout<'a> {
    pub fn id(&self) -> Result<&'a Id, StorefrontError> {
        self.object.id("id", None)
    }

    pub fn web_url(&self) -> Result<&'a Url, StorefrontError> {
        self.object.url("webUrl", None)
    }

    pub fn created_at(&self) -> Result<DateTime<Utc>, StorefrontError> {
        self.object.date_time("createdAt", None)
    }

    pub fn updated_at(&self) -> Result<DateTime<Utc>, StorefrontError> {
        self.object.date_time("updatedAt", None)
    }

    pub fn completed_at(&self) -> Result<Option<DateTime<Utc>>, StorefrontError> {
        self.object.date_time_opt("completedAt", None)
    }

    pub fn currency_code(&self) -> Result<CurrencyCode, StorefrontError> {
        Ok(CurrencyCode::from_raw(
            self.object.enum_raw("currencyCode", None)?,
        ))
    }

    pub fn email(&self) -> Result<Option<&'a str>, StorefrontError> {
        self.object.string_opt("email", None)
    }

    pub fn note(&self) -> Result<Option<&'a str>, StorefrontError> {
        self.object.string_opt("note", None)
    }

    pub fn requires_shipping(&self) -> Result<bool, StorefrontError> {
        self.object.boolean("requiresShipping", None)
    }

    pub fn taxes_included(&self) -> Result<bool, StorefrontError> {
        self.object.boolean("taxesIncluded", None)
    }

    pub fn subtotal_price(&self) -> Result<Decimal, StorefrontError> {
        self.object.money("subtotalPrice", None)
    }

    pub fn total_tax(&self) -> Result<Decimal, StorefrontError> {
        self.object.money("totalTax", None)
    }

    pub fn total_price(&self) -> Result<Decimal, StorefrontError> {
        self.object.money("totalPrice", None)
    }

    /// Amount left to authorize, handed to the payment capability.
    pub fn payment_due(&self) -> Result<Decimal, StorefrontError> {
        self.object.money("paymentDue", None)
    }

    pub fn line_items(&self) -> Result<Vec<CheckoutLineItem<'a>>, StorefrontError> {
        Ok(self
            .object
            .object_list("lineItems", None)?
            .into_iter()
            .map(CheckoutLineItem::from_object)
            .collect())
    }

    pub fn line_items_aliased(
        &self,
        alias: &str,
    ) -> Result<Vec<CheckoutLineItem<'a>>, StorefrontError> {
        Ok(self
            .object
            .object_list("lineItems", Some(alias))?
            .into_iter()
            .map(CheckoutLineItem::from_object)
            .collect())
    }

    pub fn shipping_address(&self) -> Result<Option<MailingAddress<'a>>, StorefrontError> {
        Ok(self
            .object
            .object_opt("shippingAddress", None)?
            .map(MailingAddress::from_object))
    }

    pub fn shipping_line(&self) -> Result<Option<ShippingRate<'a>>, StorefrontError> {
        Ok(self
            .object
            .object_opt("shippingLine", None)?
            .map(ShippingRate::from_object))
    }

    pub fn custom_attributes(&self) -> Result<Vec<Attribute<'a>>, StorefrontError> {
        Ok(self
            .object
            .object_list("customAttributes", None)?
            .into_iter()
            .map(Attribute::from_object)
            .collect())
    }
}

/// Builder for `CheckoutLineItem` field selections.
#[derive(Debug, Clone)]
pub struct CheckoutLineItemQuery {
    selection: SelectionSet,
}

impl QueryBuilder for CheckoutLineItemQuery {
    fn new() -> Self {
        Self {
            selection: SelectionSet::new(),
        }
    }

    fn into_selection(self) -> SelectionSet {
        self.selection
    }
}

impl CheckoutLineItemQuery {
    pub fn id(mut self) -> Self {
        self.selection
            .add_field("id", None, Vec::new(), SelectionSet::new());
        self
    }

    pub fn title(mut self) -> Self {
        self.selection
            .add_field("title", None, Vec::new(), SelectionSet::new());
        self
    }

    pub fn quantity(mut self) -> Self {
        self.selection
            .add_field("quantity", None, Vec::new(), SelectionSet::new());
        self
    }

    pub fn variant(
        mut self,
        subfields: impl FnOnce(ProductVariantQuery) -> ProductVariantQuery,
    ) -> Self {
        let subquery = subfields(ProductVariantQuery::new());
        self.selection
            .add_field("variant", None, Vec::new(), subquery.into_selection());
        self
    }
}

/// A deserialized `CheckoutLineItem`.
#[derive(Debug, Clone, Copy)]
pub struct CheckoutLineItem<'a> {
    object: &'a ResponseObject,
}

impl<'a> ResponseView<'a> for CheckoutLineItem<'a> {
    fn from_object(object: &'a ResponseObject) -> Self {
        Self { object }
    }
}

impl<'a> CheckoutLineItem<'a> {
    pub fn id(&self) -> Result<&'a Id, StorefrontError> {
        self.object.id("id", None)
    }

    pub fn title(&self) -> Result<&'a str, StorefrontError> {
        self.object.string("title", None)
    }

    pub fn quantity(&self) -> Result<i64, StorefrontError> {
        self.object.int("quantity", None)
    }

    pub fn variant(&self) -> Result<Option<ProductVariant<'a>>, StorefrontError> {
        Ok(self
            .object
            .object_opt("variant", None)?
            .map(ProductVariant::from_object))
    }
}

/// Builder for `ShippingRate` field selections.
#[derive(Debug, Clone)]
pub struct ShippingRateQuery {
    selection: SelectionSet,
}

impl QueryBuilder for ShippingRateQuery {
    fn new() -> Self {
        Self {
            selection: SelectionSet::new(),
        }
    }

    fn into_selection(self) -> SelectionSet {
        self.selection
    }
}

impl ShippingRateQuery {
    pub fn handle(mut self) -> Self {
        self.selection
            .add_field("handle", None, Vec::new(), SelectionSet::new());
        self
    }

    pub fn title(mut self) -> Self {
        self.selection
            .add_field("title", None, Vec::new(), SelectionSet::new());
        self
    }

    pub fn price(mut self) -> Self {
        self.selection
            .add_field("price", None, Vec::new(), SelectionSet::new());
        self
    }
}

/// A deserialized `ShippingRate`.
#[derive(Debug, Clone, Copy)]
pub struct ShippingRate<'a> {
    object: &'a ResponseObject,
}

impl<'a> ResponseView<'a> for ShippingRate<'a> {
    fn from_object(object: &'a ResponseObject) -> Self {
        Self { object }
    }
}

impl<'a> ShippingRate<'a> {
    pub fn handle(&self) -> Result<&'a str, StorefrontError> {
        self.object.string("handle", None)
    }

    pub fn title(&self) -> Result<&'a str, StorefrontError> {
        self.object.string("title", None)
    }

    pub fn price(&self) -> Result<Decimal, StorefrontError> {
        self.object.money("price", None)
    }
}

/// Builder for `Attribute` field selections.
#[derive(Debug, Clone)]
pub struct AttributeQuery {
    selection: SelectionSet,
}

impl QueryBuilder for AttributeQuery {
    fn new() -> Self {
        Self {
            selection: SelectionSet::new(),
        }
    }

    fn into_selection(self) -> SelectionSet {
        self.selection
    }
}

impl AttributeQuery {
    pub fn key(mut self) -> Self {
        self.selection
            .add_field("key", None, Vec::new(), SelectionSet::new());
        self
    }

    pub fn value(mut self) -> Self {
        self.selection
            .add_field("value", None, Vec::new(), SelectionSet::new());
        self
    }
}

/// A deserialized `Attribute`.
#[derive(Debug, Clone, Copy)]
pub struct Attribute<'a> {
    object: &'a ResponseObject,
}

impl<'a> ResponseView<'a> for Attribute<'a> {
    fn from_object(object: &'a ResponseObject) -> Self {
        Self { object }
    }
}

impl<'a> Attribute<'a> {
    pub fn key(&self) -> Result<&'a str, StorefrontError> {
        self.object.string("key", None)
    }

    pub fn value(&self) -> Result<Option<&'a str>, StorefrontError> {
        self.object.string_opt("value", None)
    }
}
