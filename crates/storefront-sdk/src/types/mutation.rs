//! The schema's entry point for mutations.

use crate::descriptor::{FieldShape, TypeDescriptor};
use crate::error::StorefrontError;
use crate::query::{render_document, InputValue, QueryBuilder, SelectionSet};
use crate::response::ResponseObject;
use crate::scalars::Id;
use crate::types::inputs::{CheckoutCreateInput, CheckoutLineItemInput};
use crate::types::payloads::{
    CheckoutCreatePayload, CheckoutCreatePayloadQuery, CheckoutLineItemsAddPayload,
    CheckoutLineItemsAddPayloadQuery, CHECKOUT_CREATE_PAYLOAD, CHECKOUT_LINE_ITEMS_ADD_PAYLOAD,
};
use crate::types::ResponseView;

/// Field table for `Mutation`.
pub static MUTATION: TypeDescriptor = TypeDescriptor {
    name: "Mutation",
    fields: &[
        (
            "checkoutCreate",
            FieldShape::object(&CHECKOUT_CREATE_PAYLOAD).nullable(),
        ),
        (
            "checkoutLineItemsAdd",
            FieldShape::object(&CHECKOUT_LINE_ITEMS_ADD_PAYLOAD).nullable(),
        ),
    ],
};

/// Builder for the mutation root.
#[derive(Debug, Clone)]
pub struct MutationQuery {
    selection: SelectionSet,
}

impl QueryBuilder for MutationQuery {
    fn new() -> Self {
        Self {
            selection: SelectionSet::new(),
        }
    }

    fn into_selection(self) -> SelectionSet {
        self.selection
    }
}

impl MutationQuery {
    /// Create a new checkout from a cart's worth of line items.
    pub fn checkout_create(
        mut self,
        alias: Option<&str>,
        input: &CheckoutCreateInput,
        subfields: impl FnOnce(CheckoutCreatePayloadQuery) -> CheckoutCreatePayloadQuery,
    ) -> Self {
        let arguments = vec![("input", input.to_value())];
        let subquery = subfields(CheckoutCreatePayloadQuery::new());
        self.selection
            .add_field("checkoutCreate", alias, arguments, subquery.into_selection());
        self
    }

    /// Add line items to an existing checkout.
    pub fn checkout_line_items_add(
        mut self,
        alias: Option<&str>,
        checkout_id: &Id,
        line_items: &[CheckoutLineItemInput],
        subfields: impl FnOnce(CheckoutLineItemsAddPayloadQuery) -> CheckoutLineItemsAddPayloadQuery,
    ) -> Self {
        let arguments = vec![
            (
                "checkoutId",
                InputValue::Id(checkout_id.as_str().to_string()),
            ),
            (
                "lineItems",
                InputValue::List(line_items.iter().map(|item| item.to_value()).collect()),
            ),
        ];
        let subquery = subfields(CheckoutLineItemsAddPayloadQuery::new());
        self.selection.add_field(
            "checkoutLineItemsAdd",
            alias,
            arguments,
            subquery.into_selection(),
        );
        self
    }

    /// Render the complete mutation document.
    pub fn build(&self) -> String {
        render_document("mutation", &self.selection)
    }
}

/// A deserialized mutation root.
#[derive(Debug, Clone, Copy)]
pub struct Mutation<'a> {
    object: &'a ResponseObject,
}

impl<'a> ResponseView<'a> for Mutation<'a> {
    fn from_object(object: &'a ResponseObject) -> Self {
        Self { object }
    }
}

impl<'a> Mutation<'a> {
    pub fn checkout_create(&self) -> Result<Option<CheckoutCreatePayload<'a>>, StorefrontError> {
        Ok(self
            .object
            .object_opt("checkoutCreate", None)?
            .map(CheckoutCreatePayload::from_object))
    }

    pub fn checkout_line_items_add(
        &self,
    ) -> Result<Option<CheckoutLineItemsAddPayload<'a>>, StorefrontError> {
        Ok(self
            .object
            .object_opt("checkoutLineItemsAdd", None)?
            .map(CheckoutLineItemsAddPayload::from_object))
    }
}
