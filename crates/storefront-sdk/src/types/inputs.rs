//! Input objects for checkout mutations, serialized as argument literals.

use crate::query::InputValue;
use crate::scalars::Id;

/// One line item of a checkout being created or amended.
#[derive(Debug, Clone)]
pub struct CheckoutLineItemInput {
    pub variant_id: Id,
    pub quantity: i64,
}

impl CheckoutLineItemInput {
    pub fn new(variant_id: impl Into<Id>, quantity: i64) -> Self {
        Self {
            variant_id: variant_id.into(),
            quantity,
        }
    }

    pub(crate) fn to_value(&self) -> InputValue {
        InputValue::Object(vec![
            (
                "variantId".to_string(),
                InputValue::Id(self.variant_id.as_str().to_string()),
            ),
            ("quantity".to_string(), InputValue::Int(self.quantity)),
        ])
    }
}

/// Input for the `checkoutCreate` mutation. Unset optional fields are
/// omitted from the serialized literal entirely.
#[derive(Debug, Clone, Default)]
pub struct CheckoutCreateInput {
    pub email: Option<String>,
    pub note: Option<String>,
    pub line_items: Vec<CheckoutLineItemInput>,
}

impl CheckoutCreateInput {
    pub(crate) fn to_value(&self) -> InputValue {
        let mut fields = Vec::new();
        if let Some(email) = &self.email {
            fields.push(("email".to_string(), InputValue::String(email.clone())));
        }
        if let Some(note) = &self.note {
            fields.push(("note".to_string(), InputValue::String(note.clone())));
        }
        fields.push((
            "lineItems".to_string(),
            InputValue::List(self.line_items.iter().map(|item| item.to_value()).collect()),
        ));
        InputValue::Object(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(value: &InputValue) -> String {
        // Render through a throwaway field to reuse the query serializer.
        let mut selection = crate::query::SelectionSet::new();
        selection.add_field("f", None, vec![("input", value.clone())], Default::default());
        let mut out = String::new();
        selection.render(&mut out);
        out
    }

    #[test]
    fn line_item_input_serializes_variant_and_quantity() {
        let input = CheckoutLineItemInput::new("gid://shop/ProductVariant/1", 2);
        assert_eq!(
            render(&input.to_value()),
            "f(input:{variantId:\"gid://shop/ProductVariant/1\",quantity:2})"
        );
    }

    #[test]
    fn checkout_create_input_omits_unset_optionals() {
        let input = CheckoutCreateInput {
            line_items: vec![CheckoutLineItemInput::new("gid://v1", 1)],
            ..Default::default()
        };
        let rendered = render(&input.to_value());
        assert!(!rendered.contains("email"));
        assert!(!rendered.contains("note"));
        assert!(rendered.contains("lineItems:[{variantId:\"gid://v1\",quantity:1}]"));
    }

    #[test]
    fn checkout_create_input_serializes_in_declaration_order() {
        let input = CheckoutCreateInput {
            email: Some("buyer@example.com".to_string()),
            note: Some("gift".to_string()),
            line_items: vec![],
        };
        assert_eq!(
            render(&input.to_value()),
            "f(input:{email:\"buyer@example.com\",note:\"gift\",lineItems:[]})"
        );
    }
}
