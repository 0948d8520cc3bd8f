//! Mutation payloads: the checkout they touched plus any user errors.

use crate::descriptor::{FieldShape, ScalarKind, TypeDescriptor};
use crate::error::StorefrontError;
use crate::query::{QueryBuilder, SelectionSet};
use crate::response::ResponseObject;
use crate::types::checkout::{Checkout, CheckoutQuery, CHECKOUT};
use crate::types::ResponseView;

/// Field table for `UserError`.
pub static USER_ERROR: TypeDescriptor = TypeDescriptor {
    name: "UserError",
    fields: &[
        ("field", FieldShape::scalar_list(ScalarKind::String).nullable()),
        ("message", FieldShape::scalar(ScalarKind::String)),
    ],
};

/// Field table for `CheckoutCreatePayload`.
pub static CHECKOUT_CREATE_PAYLOAD: TypeDescriptor = TypeDescriptor {
    name: "CheckoutCreatePayload",
    fields: &[
        ("checkout", FieldShape::object(&CHECKOUT).nullable()),
        ("userErrors", FieldShape::object_list(&USER_ERROR)),
    ],
};

/// Field table for `CheckoutLineItemsAddPayload`.
pub static CHECKOUT_LINE_ITEMS_ADD_PAYLOAD: TypeDescriptor = TypeDescriptor {
    name: "CheckoutLineItemsAddPayload",
    fields: &[
        ("checkout", FieldShape::object(&CHECKOUT).nullable()),
        ("userErrors", FieldShape::object_list(&USER_ERROR)),
    ],
};

/// Builder for `UserError` field selections.
#[derive(Debug, Clone)]
pub struct UserErrorQuery {
    selection: SelectionSet,
}

impl QueryBuilder for UserErrorQuery {
    fn new() -> Self {
        Self {
            selection: SelectionSet::new(),
        }
    }

    fn into_selection(self) -> SelectionSet {
        self.selection
    }
}

impl UserErrorQuery {
    pub fn field(mut self) -> Self {
        self.selection
            .add_field("field", None, Vec::new(), SelectionSet::new());
        self
    }

    pub fn message(mut self) -> Self {
        self.selection
            .add_field("message", None, Vec::new(), SelectionSet::new());
        self
    }
}

/// A deserialized `UserError`: an input problem the buyer can fix.
#[derive(Debug, Clone, Copy)]
pub struct UserError<'a> {
    object: &'a ResponseObject,
}

impl<'a> ResponseView<'a> for UserError<'a> {
    fn from_object(object: &'a ResponseObject) -> Self {
        Self { object }
    }
}

impl<'a> UserError<'a> {
    /// Path to the offending input field, when the API attributes one.
    pub fn field(&self) -> Result<Option<Vec<&'a str>>, StorefrontError> {
        self.object.string_list_opt("field", None)
    }

    pub fn message(&self) -> Result<&'a str, StorefrontError> {
        self.object.string("message", None)
    }
}

macro_rules! checkout_payload {
    ($(#[$doc:meta])* $query:ident, $view:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone)]
        pub struct $query {
            selection: SelectionSet,
        }

        impl QueryBuilder for $query {
            fn new() -> Self {
                Self {
                    selection: SelectionSet::new(),
                }
            }

            fn into_selection(self) -> SelectionSet {
                self.selection
            }
        }

        impl $query {
            pub fn checkout(
                mut self,
                subfields: impl FnOnce(CheckoutQuery) -> CheckoutQuery,
            ) -> Self {
                let subquery = subfields(CheckoutQuery::new());
                self.selection
                    .add_field("checkout", None, Vec::new(), subquery.into_selection());
                self
            }

            pub fn user_errors(
                mut self,
                subfields: impl FnOnce(UserErrorQuery) -> UserErrorQuery,
            ) -> Self {
                let subquery = subfields(UserErrorQuery::new());
                self.selection
                    .add_field("userErrors", None, Vec::new(), subquery.into_selection());
                self
            }
        }

        #[derive(Debug, Clone, Copy)]
        pub struct $view<'a> {
            object: &'a ResponseObject,
        }

        impl<'a> ResponseView<'a> for $view<'a> {
            fn from_object(object: &'a ResponseObject) -> Self {
                Self { object }
            }
        }

        impl<'a> $view<'a> {
            /// The checkout after the mutation, absent when the mutation
            /// failed with user errors.
            pub fn checkout(&self) -> Result<Option<Checkout<'a>>, StorefrontError> {
                Ok(self
                    .object
                    .object_opt("checkout", None)?
                    .map(Checkout::from_object))
            }

            pub fn user_errors(&self) -> Result<Vec<UserError<'a>>, StorefrontError> {
                Ok(self
                    .object
                    .object_list("userErrors", None)?
                    .into_iter()
                    .map(UserError::from_object)
                    .collect())
            }
        }
    };
}

checkout_payload!(
    /// Builder and view pair for the `checkoutCreate` payload.
    CheckoutCreatePayloadQuery,
    CheckoutCreatePayload
);
checkout_payload!(
    /// Builder and view pair for the `checkoutLineItemsAdd` payload.
    CheckoutLineItemsAddPayloadQuery,
    CheckoutLineItemsAddPayload
);
