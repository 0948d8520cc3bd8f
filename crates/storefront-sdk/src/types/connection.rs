//! Relay-style connection plumbing shared by paginated fields.
//!
//! One generic builder and one generic view replace the per-type
//! connection classes a generator would otherwise emit; the node type is
//! a type parameter and the per-connection field tables live next to
//! their node types.

use crate::descriptor::{FieldShape, ScalarKind, TypeDescriptor};
use crate::error::StorefrontError;
use crate::query::{QueryBuilder, SelectionSet};
use crate::response::ResponseObject;
use crate::types::ResponseView;
use std::marker::PhantomData;

/// Field table for `PageInfo`.
pub static PAGE_INFO: TypeDescriptor = TypeDescriptor {
    name: "PageInfo",
    fields: &[
        ("hasNextPage", FieldShape::scalar(ScalarKind::Boolean)),
        ("hasPreviousPage", FieldShape::scalar(ScalarKind::Boolean)),
    ],
};

/// Builder for `PageInfo` field selections.
#[derive(Debug, Clone)]
pub struct PageInfoQuery {
    selection: SelectionSet,
}

impl QueryBuilder for PageInfoQuery {
    fn new() -> Self {
        Self {
            selection: SelectionSet::new(),
        }
    }

    fn into_selection(self) -> SelectionSet {
        self.selection
    }
}

impl PageInfoQuery {
    pub fn has_next_page(mut self) -> Self {
        self.selection
            .add_field("hasNextPage", None, Vec::new(), SelectionSet::new());
        self
    }

    pub fn has_previous_page(mut self) -> Self {
        self.selection
            .add_field("hasPreviousPage", None, Vec::new(), SelectionSet::new());
        self
    }
}

/// A deserialized `PageInfo`.
#[derive(Debug, Clone, Copy)]
pub struct PageInfo<'a> {
    object: &'a ResponseObject,
}

impl<'a> ResponseView<'a> for PageInfo<'a> {
    fn from_object(object: &'a ResponseObject) -> Self {
        Self { object }
    }
}

impl<'a> PageInfo<'a> {
    pub fn has_next_page(&self) -> Result<bool, StorefrontError> {
        self.object.boolean("hasNextPage", None)
    }

    pub fn has_previous_page(&self) -> Result<bool, StorefrontError> {
        self.object.boolean("hasPreviousPage", None)
    }
}

/// Builder for a connection selection around a node builder `Q`.
#[derive(Debug, Clone)]
pub struct ConnectionQuery<Q> {
    selection: SelectionSet,
    node: PhantomData<Q>,
}

impl<Q: QueryBuilder> QueryBuilder for ConnectionQuery<Q> {
    fn new() -> Self {
        Self {
            selection: SelectionSet::new(),
            node: PhantomData,
        }
    }

    fn into_selection(self) -> SelectionSet {
        self.selection
    }
}

impl<Q: QueryBuilder> ConnectionQuery<Q> {
    pub fn nodes(mut self, subfields: impl FnOnce(Q) -> Q) -> Self {
        let subquery = subfields(Q::new());
        self.selection
            .add_field("nodes", None, Vec::new(), subquery.into_selection());
        self
    }

    pub fn page_info(mut self, subfields: impl FnOnce(PageInfoQuery) -> PageInfoQuery) -> Self {
        let subquery = subfields(PageInfoQuery::new());
        self.selection
            .add_field("pageInfo", None, Vec::new(), subquery.into_selection());
        self
    }
}

/// A deserialized paginated collection of nodes with page info.
#[derive(Debug)]
pub struct Connection<'a, T> {
    object: &'a ResponseObject,
    node: PhantomData<T>,
}

impl<'a, T> Clone for Connection<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for Connection<'a, T> {}

impl<'a, T: ResponseView<'a>> ResponseView<'a> for Connection<'a, T> {
    fn from_object(object: &'a ResponseObject) -> Self {
        Self {
            object,
            node: PhantomData,
        }
    }
}

impl<'a, T: ResponseView<'a>> Connection<'a, T> {
    pub fn nodes(&self) -> Result<Vec<T>, StorefrontError> {
        Ok(self
            .object
            .object_list("nodes", None)?
            .into_iter()
            .map(T::from_object)
            .collect())
    }

    pub fn page_info(&self) -> Result<PageInfo<'a>, StorefrontError> {
        Ok(PageInfo::from_object(self.object.object("pageInfo", None)?))
    }
}
