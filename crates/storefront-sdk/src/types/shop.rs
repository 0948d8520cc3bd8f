//! The shop type: entry point for catalog data.

use crate::descriptor::{FieldShape, ScalarKind, TypeDescriptor};
use crate::error::StorefrontError;
use crate::query::{InputValue, QueryBuilder, SelectionSet};
use crate::response::ResponseObject;
use crate::types::connection::{Connection, ConnectionQuery};
use crate::types::enums::{CurrencyCode, ProductSortKeys};
use crate::types::product::{Product, ProductConnectionQuery, PRODUCT_CONNECTION};
use crate::types::ResponseView;

/// Field table for `Shop`.
pub static SHOP: TypeDescriptor = TypeDescriptor {
    name: "Shop",
    fields: &[
        ("name", FieldShape::scalar(ScalarKind::String)),
        ("description", FieldShape::scalar(ScalarKind::String).nullable()),
        ("currencyCode", FieldShape::scalar(ScalarKind::Enum)),
        ("products", FieldShape::object(&PRODUCT_CONNECTION)),
    ],
};

/// Builder for `Shop` field selections.
#[derive(Debug, Clone)]
pub struct ShopQuery {
    selection: SelectionSet,
}

impl QueryBuilder for ShopQuery {
    fn new() -> Self {
        Self {
            selection: SelectionSet::new(),
        }
    }

    fn into_selection(self) -> SelectionSet {
        self.selection
    }
}

impl ShopQuery {
    pub fn name(mut self) -> Self {
        self.selection
            .add_field("name", None, Vec::new(), SelectionSet::new());
        self
    }

    pub fn description(mut self) -> Self {
        self.selection
            .add_field("description", None, Vec::new(), SelectionSet::new());
        self
    }

    pub fn currency_code(mut self) -> Self {
        self.selection
            .add_field("currencyCode", None, Vec::new(), SelectionSet::new());
        self
    }

    /// Paginated product listing.
    pub fn products(
        mut self,
        alias: Option<&str>,
        first: i64,
        sort_key: Option<ProductSortKeys>,
        query: Option<&str>,
        subfields: impl FnOnce(ProductConnectionQuery) -> ProductConnectionQuery,
    ) -> Self {
        let mut arguments = vec![("first", InputValue::Int(first))];
        if let Some(sort_key) = sort_key {
            arguments.push(("sortKey", InputValue::Enum(sort_key.as_raw())));
        }
        if let Some(query) = query {
            arguments.push(("query", InputValue::String(query.to_string())));
        }
        let subquery = subfields(ConnectionQuery::new());
        self.selection
            .add_field("products", alias, arguments, subquery.into_selection());
        self
    }
}

/// A deserialized `Shop`.
#[derive(Debug, Clone, Copy)]
pub struct Shop<'a> {
    object: &'a ResponseObject,
}

impl<'a> ResponseView<'a> for Shop<'a> {
    fn from_object(object: &'a ResponseObject) -> Self {
        Self { object }
    }
}

impl<'a> Shop<'a> {
    pub fn name(&self) -> Result<&'a str, StorefrontError> {
        self.object.string("name", None)
    }

    pub fn description(&self) -> Result<Option<&'a str>, StorefrontError> {
        self.object.string_opt("description", None)
    }

    pub fn currency_code(&self) -> Result<CurrencyCode, StorefrontError> {
        Ok(CurrencyCode::from_raw(
            self.object.enum_raw("currencyCode", None)?,
        ))
    }

    pub fn products(&self) -> Result<Connection<'a, Product<'a>>, StorefrontError> {
        Ok(Connection::from_object(self.object.object("products", None)?))
    }

    pub fn products_aliased(
        &self,
        alias: &str,
    ) -> Result<Connection<'a, Product<'a>>, StorefrontError> {
        Ok(Connection::from_object(
            self.object.object("products", Some(alias))?,
        ))
    }
}
