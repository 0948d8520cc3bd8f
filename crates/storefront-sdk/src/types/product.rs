//! Product catalog types.

use crate::descriptor::{FieldShape, ScalarKind, TypeDescriptor};
use crate::error::StorefrontError;
use crate::query::{InputValue, QueryBuilder, SelectionSet};
use crate::response::ResponseObject;
use crate::scalars::Id;
use crate::types::connection::{Connection, ConnectionQuery, PAGE_INFO};
use crate::types::ResponseView;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use url::Url;

/// Field table for `Product`.
pub static PRODUCT: TypeDescriptor = TypeDescriptor {
    name: "Product",
    fields: &[
        ("id", FieldShape::scalar(ScalarKind::Id)),
        ("title", FieldShape::scalar(ScalarKind::String)),
        ("handle", FieldShape::scalar(ScalarKind::String)),
        ("createdAt", FieldShape::scalar(ScalarKind::DateTime)),
        ("onlineStoreUrl", FieldShape::scalar(ScalarKind::Url).nullable()),
        ("variants", FieldShape::object(&PRODUCT_VARIANT_CONNECTION)),
    ],
};

/// Field table for `ProductConnection`.
pub static PRODUCT_CONNECTION: TypeDescriptor = TypeDescriptor {
    name: "ProductConnection",
    fields: &[
        ("nodes", FieldShape::object_list(&PRODUCT)),
        ("pageInfo", FieldShape::object(&PAGE_INFO)),
    ],
};

/// Field table for `ProductVariant`.
pub static PRODUCT_VARIANT: TypeDescriptor = TypeDescriptor {
    name: "ProductVariant",
    fields: &[
        ("id", FieldShape::scalar(ScalarKind::Id)),
        ("title", FieldShape::scalar(ScalarKind::String)),
        ("price", FieldShape::scalar(ScalarKind::Money)),
        ("availableForSale", FieldShape::scalar(ScalarKind::Boolean)),
        ("weight", FieldShape::scalar(ScalarKind::Float).nullable()),
    ],
};

/// Field table for `ProductVariantConnection`.
pub static PRODUCT_VARIANT_CONNECTION: TypeDescriptor = TypeDescriptor {
    name: "ProductVariantConnection",
    fields: &[
        ("nodes", FieldShape::object_list(&PRODUCT_VARIANT)),
        ("pageInfo", FieldShape::object(&PAGE_INFO)),
    ],
};

pub type ProductConnectionQuery = ConnectionQuery<ProductQuery>;
pub type ProductVariantConnectionQuery = ConnectionQuery<ProductVariantQuery>;

/// Builder for `Product` field selections.
#[derive(Debug, Clone)]
pub struct ProductQuery {
    selection: SelectionSet,
}

impl QueryBuilder for ProductQuery {
    fn new() -> Self {
        Self {
            selection: SelectionSet::new(),
        }
    }

    fn into_selection(self) -> SelectionSet {
        self.selection
    }
}

impl ProductQuery {
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

    pub fn handle(mut self) -> Self {
        self.selection
            .add_field("handle", None, Vec::new(), SelectionSet::new());
        self
    }

    pub fn created_at(mut self) -> Self {
        self.selection
            .add_field("createdAt", None, Vec::new(), SelectionSet::new());
        self
    }

    pub fn online_store_url(mut self) -> Self {
        self.selection
            .add_field("onlineStoreUrl", None, Vec::new(), SelectionSet::new());
        self
    }

    /// Paginated variant listing.
    pub fn variants(
        mut self,
        alias: Option<&str>,
        first: i64,
        subfields: impl FnOnce(ProductVariantConnectionQuery) -> ProductVariantConnectionQuery,
    ) -> Self {
        let arguments = vec![("first", InputValue::Int(first))];
        let subquery = subfields(ConnectionQuery::new());
        self.selection
            .add_field("variants", alias, arguments, subquery.into_selection());
        self
    }
}

/// A deserialized `Product`.
#[derive(Debug, Clone, Copy)]
pub struct Product<'a> {
    object: &'a ResponseObject,
}

impl<'a> ResponseView<'a> for Product<'a> {
    fn from_object(object: &'a ResponseObject) -> Self {
        Self { object }
    }
}

impl<'a> Product<'a> {
    pub fn id(&self) -> Result<&'a Id, StorefrontError> {
        self.object.id("id", None)
    }

    pub fn title(&self) -> Result<&'a str, StorefrontError> {
        self.object.string("title", None)
    }

    pub fn handle(&self) -> Result<&'a str, StorefrontError> {
        self.object.string("handle", None)
    }

    pub fn created_at(&self) -> Result<DateTime<Utc>, StorefrontError> {
        self.object.date_time("createdAt", None)
    }

    pub fn online_store_url(&self) -> Result<Option<&'a Url>, StorefrontError> {
        self.object.url_opt("onlineStoreUrl", None)
    }

    pub fn variants(&self) -> Result<Connection<'a, ProductVariant<'a>>, StorefrontError> {
        Ok(Connection::from_object(self.object.object("variants", None)?))
    }

    pub fn variants_aliased(
        &self,
        alias: &str,
    ) -> Result<Connection<'a, ProductVariant<'a>>, StorefrontError> {
        Ok(Connection::from_object(
            self.object.object("variants", Some(alias))?,
        ))
    }
}

/// Builder for `ProductVariant` field selections.
#[derive(Debug, Clone)]
pub struct ProductVariantQuery {
    selection: SelectionSet,
}

impl QueryBuilder for ProductVariantQuery {
    fn new() -> Self {
        Self {
            selection: SelectionSet::new(),
        }
    }

    fn into_selection(self) -> SelectionSet {
        self.selection
    }
}

impl ProductVariantQuery {
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

    pub fn price(mut self) -> Self {
        self.selection
            .add_field("price", None, Vec::new(), SelectionSet::new());
        self
    }

    pub fn available_for_sale(mut self) -> Self {
        self.selection
            .add_field("availableForSale", None, Vec::new(), SelectionSet::new());
        self
    }

    pub fn weight(mut self) -> Self {
        self.selection
            .add_field("weight", None, Vec::new(), SelectionSet::new());
        self
    }
}

/// A deserialized `ProductVariant`.
#[derive(Debug, Clone, Copy)]
pub struct ProductVariant<'a> {
    object: &'a ResponseObject,
}

impl<'a> ResponseView<'a> for ProductVariant<'a> {
    fn from_object(object: &'a ResponseObject) -> Self {
        Self { object }
    }
}

impl<'a> ProductVariant<'a> {
    pub fn id(&self) -> Result<&'a Id, StorefrontError> {
        self.object.id("id", None)
    }

    pub fn title(&self) -> Result<&'a str, StorefrontError> {
        self.object.string("title", None)
    }

    /// Price of the variant, with exact decimal semantics.
    pub fn price(&self) -> Result<Decimal, StorefrontError> {
        self.object.money("price", None)
    }

    pub fn available_for_sale(&self) -> Result<bool, StorefrontError> {
        self.object.boolean("availableForSale", None)
    }

    pub fn weight(&self) -> Result<Option<f64>, StorefrontError> {
        self.object.float_opt("weight", None)
    }
}
