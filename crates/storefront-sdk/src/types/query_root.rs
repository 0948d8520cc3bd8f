//! The schema's entry point for queries. This is the public, top-level
//! API from which every query document starts.

use crate::descriptor::{FieldShape, TypeDescriptor};
use crate::error::StorefrontError;
use crate::query::{render_document, InputValue, QueryBuilder, SelectionSet};
use crate::response::ResponseObject;
use crate::scalars::Id;
use crate::types::node::{resolve_node_type, Node, NodeQuery};
use crate::types::shop::{Shop, ShopQuery, SHOP};
use crate::types::ResponseView;

/// Field table for `QueryRoot`.
pub static QUERY_ROOT: TypeDescriptor = TypeDescriptor {
    name: "QueryRoot",
    fields: &[
        ("shop", FieldShape::object(&SHOP)),
        ("node", FieldShape::interface(resolve_node_type).nullable()),
        ("nodes", FieldShape::interface_list(resolve_node_type)),
    ],
};

/// Builder for the query root.
#[derive(Debug, Clone)]
pub struct QueryRootQuery {
    selection: SelectionSet,
}

impl QueryBuilder for QueryRootQuery {
    fn new() -> Self {
        Self {
            selection: SelectionSet::new(),
        }
    }

    fn into_selection(self) -> SelectionSet {
        self.selection
    }
}

impl QueryRootQuery {
    pub fn shop(mut self, subfields: impl FnOnce(ShopQuery) -> ShopQuery) -> Self {
        let subquery = subfields(ShopQuery::new());
        self.selection
            .add_field("shop", None, Vec::new(), subquery.into_selection());
        self
    }

    /// Look up a node by its opaque id.
    pub fn node(
        mut self,
        alias: Option<&str>,
        id: &Id,
        subfields: impl FnOnce(NodeQuery) -> NodeQuery,
    ) -> Self {
        let arguments = vec![("id", InputValue::Id(id.as_str().to_string()))];
        let subquery = subfields(NodeQuery::new());
        self.selection
            .add_field("node", alias, arguments, subquery.into_selection());
        self
    }

    /// Look up several nodes by their opaque ids.
    pub fn nodes(
        mut self,
        alias: Option<&str>,
        ids: &[Id],
        subfields: impl FnOnce(NodeQuery) -> NodeQuery,
    ) -> Self {
        let arguments = vec![(
            "ids",
            InputValue::List(
                ids.iter()
                    .map(|id| InputValue::Id(id.as_str().to_string()))
                    .collect(),
            ),
        )];
        let subquery = subfields(NodeQuery::new());
        self.selection
            .add_field("nodes", alias, arguments, subquery.into_selection());
        self
    }

    /// Render the complete query document.
    pub fn build(&self) -> String {
        render_document("query", &self.selection)
    }
}

/// A deserialized query root.
#[derive(Debug, Clone, Copy)]
pub struct QueryRoot<'a> {
    object: &'a ResponseObject,
}

impl<'a> ResponseView<'a> for QueryRoot<'a> {
    fn from_object(object: &'a ResponseObject) -> Self {
        Self { object }
    }
}

impl<'a> QueryRoot<'a> {
    pub fn shop(&self) -> Result<Shop<'a>, StorefrontError> {
        Ok(Shop::from_object(self.object.object("shop", None)?))
    }

    pub fn node(&self) -> Result<Option<Node<'a>>, StorefrontError> {
        Ok(self.object.object_opt("node", None)?.map(Node::from_object))
    }

    pub fn node_aliased(&self, alias: &str) -> Result<Option<Node<'a>>, StorefrontError> {
        Ok(self
            .object
            .object_opt("node", Some(alias))?
            .map(Node::from_object))
    }

    pub fn nodes(&self) -> Result<Vec<Node<'a>>, StorefrontError> {
        Ok(self
            .object
            .object_list("nodes", None)?
            .into_iter()
            .map(Node::from_object)
            .collect())
    }
}
