//! Deserialized response objects.
//!
//! A [`ResponseObject`] is built once, eagerly, from a JSON object and the
//! [`TypeDescriptor`] of the type the originating query selected. Any
//! mismatch between the JSON and the declared field shapes fails the whole
//! construction; a partially-valid object is never produced. After
//! construction the tree is immutable and owned by the caller for its
//! entire useful lifetime.
//!
//! Accessors are keyed by field name plus optional alias suffix, exactly
//! mirroring the keys the query rendered, so the response surface can only
//! expose what was actually requested. Reading anything else fails loudly.

use crate::descriptor::{FieldKind, FieldShape, ScalarKind, TypeDescriptor, TypeResolver, UNKNOWN_TYPE};
use crate::error::StorefrontError;
use crate::query::response_key;
use crate::scalars::{self, Id};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde_json::Value;
use std::collections::BTreeMap;
use url::Url;

/// Reserved discriminator key identifying an object's concrete type.
pub const TYPENAME_KEY: &str = "__typename";

/// A decoded field value.
#[derive(Debug, Clone)]
pub enum FieldValue {
    /// A nullable field that arrived as JSON `null`.
    Null,
    String(String),
    Int(i64),
    Float(f64),
    Boolean(bool),
    Id(Id),
    DateTime(DateTime<Utc>),
    Money(Decimal),
    Url(Url),
    /// Raw enum identifier; variant mapping happens at accessor time.
    Enum(String),
    Object(ResponseObject),
    List(Vec<FieldValue>),
}

/// One deserialized response object: a concrete type name plus a mapping
/// from response key (field name, optionally alias-suffixed) to decoded
/// value.
#[derive(Debug, Clone)]
pub struct ResponseObject {
    type_name: String,
    fields: BTreeMap<String, FieldValue>,
}

/// Generates a `(non-null, nullable)` accessor pair for one scalar kind.
macro_rules! scalar_getter_pair {
    ($get:ident, $get_opt:ident, $variant:ident => $ty:ty, $expected:literal, |$v:ident| $conv:expr) => {
        pub fn $get(&self, field: &str, alias: Option<&str>) -> Result<$ty, StorefrontError> {
            match self.value(field, alias)? {
                FieldValue::$variant($v) => Ok($conv),
                _ => Err(self.kind_mismatch(field, alias, $expected)),
            }
        }

        pub fn $get_opt(
            &self,
            field: &str,
            alias: Option<&str>,
        ) -> Result<Option<$ty>, StorefrontError> {
            match self.value(field, alias)? {
                FieldValue::Null => Ok(None),
                FieldValue::$variant($v) => Ok(Some($conv)),
                _ => Err(self.kind_mismatch(field, alias, $expected)),
            }
        }
    };
}

impl ResponseObject {
    /// Deserialize a JSON object against a type's declared field set.
    ///
    /// Eager and atomic: every declared field present in the JSON is
    /// decoded now, and the first mismatch aborts the whole construction.
    pub fn from_json(
        descriptor: &'static TypeDescriptor,
        json: &serde_json::Map<String, Value>,
    ) -> Result<Self, StorefrontError> {
        let mut type_name = descriptor.name.to_string();
        if let Some(value) = json.get(TYPENAME_KEY) {
            match value.as_str() {
                Some(name) => type_name = name.to_string(),
                None => return Err(schema_violation(descriptor.name, TYPENAME_KEY, value)),
            }
        }

        let mut fields = BTreeMap::new();
        for (key, value) in json {
            if key == TYPENAME_KEY {
                continue;
            }
            let field_name = key.split("__").next().unwrap_or(key);
            let shape = match descriptor.field(field_name) {
                Some(shape) => shape,
                // Placeholder objects ignore fields the local model cannot
                // name; everywhere else an undeclared key is a violation.
                None if std::ptr::eq(descriptor, &UNKNOWN_TYPE) => continue,
                None => return Err(schema_violation(descriptor.name, field_name, value)),
            };
            let decoded = decode_field(descriptor.name, field_name, shape, value)?;
            fields.insert(key.clone(), decoded);
        }

        Ok(Self { type_name, fields })
    }

    /// The concrete type name reported by the server (or declared by the
    /// originating query when no discriminator arrived).
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// The object's opaque identity, if an `id` field arrived.
    ///
    /// Identity across a response is by this id, not by structural
    /// equality.
    pub fn node_id(&self) -> Option<&Id> {
        match self.fields.get("id") {
            Some(FieldValue::Id(id)) => Some(id),
            _ => None,
        }
    }

    /// Collect this object and every nested response object, depth-first,
    /// walking the field mapping in its stable key order. Used by cache
    /// layers to index everything that arrived in one payload.
    pub fn nested_objects(&self) -> Vec<&ResponseObject> {
        let mut out = Vec::new();
        self.collect(&mut out);
        out
    }

    fn collect<'a>(&'a self, out: &mut Vec<&'a ResponseObject>) {
        out.push(self);
        for value in self.fields.values() {
            match value {
                FieldValue::Object(child) => child.collect(out),
                FieldValue::List(items) => {
                    for item in items {
                        if let FieldValue::Object(child) = item {
                            child.collect(out);
                        }
                    }
                }
                _ => {}
            }
        }
    }

    /// Raw field lookup by response key. A key that was never part of the
    /// originating query is a loud usage error, never a null.
    pub fn value(&self, field: &str, alias: Option<&str>) -> Result<&FieldValue, StorefrontError> {
        let key = response_key(field, alias);
        self.fields
            .get(&key)
            .ok_or_else(|| StorefrontError::FieldNotQueried {
                type_name: self.type_name.clone(),
                key,
            })
    }

    fn kind_mismatch(
        &self,
        field: &str,
        alias: Option<&str>,
        expected: &'static str,
    ) -> StorefrontError {
        StorefrontError::FieldKindMismatch {
            type_name: self.type_name.clone(),
            key: response_key(field, alias),
            expected,
        }
    }

    scalar_getter_pair!(string, string_opt, String => &str, "String", |v| v.as_str());
    scalar_getter_pair!(id, id_opt, Id => &Id, "ID", |v| v);
    scalar_getter_pair!(int, int_opt, Int => i64, "Int", |v| *v);
    scalar_getter_pair!(float, float_opt, Float => f64, "Float", |v| *v);
    scalar_getter_pair!(boolean, boolean_opt, Boolean => bool, "Boolean", |v| *v);
    scalar_getter_pair!(date_time, date_time_opt, DateTime => DateTime<Utc>, "DateTime", |v| *v);
    scalar_getter_pair!(money, money_opt, Money => Decimal, "Money", |v| *v);
    scalar_getter_pair!(url, url_opt, Url => &Url, "URL", |v| v);
    scalar_getter_pair!(enum_raw, enum_raw_opt, Enum => &str, "Enum", |v| v.as_str());

    /// A non-null nested object field.
    pub fn object(&self, field: &str, alias: Option<&str>) -> Result<&ResponseObject, StorefrontError> {
        match self.value(field, alias)? {
            FieldValue::Object(child) => Ok(child),
            _ => Err(self.kind_mismatch(field, alias, "Object")),
        }
    }

    /// A nullable nested object field.
    pub fn object_opt(
        &self,
        field: &str,
        alias: Option<&str>,
    ) -> Result<Option<&ResponseObject>, StorefrontError> {
        match self.value(field, alias)? {
            FieldValue::Null => Ok(None),
            FieldValue::Object(child) => Ok(Some(child)),
            _ => Err(self.kind_mismatch(field, alias, "Object")),
        }
    }

    /// A non-null list of nested objects.
    pub fn object_list(
        &self,
        field: &str,
        alias: Option<&str>,
    ) -> Result<Vec<&ResponseObject>, StorefrontError> {
        match self.value(field, alias)? {
            FieldValue::List(items) => items
                .iter()
                .map(|item| match item {
                    FieldValue::Object(child) => Ok(child),
                    _ => Err(self.kind_mismatch(field, alias, "Object list")),
                })
                .collect(),
            _ => Err(self.kind_mismatch(field, alias, "Object list")),
        }
    }

    /// A non-null list of strings.
    pub fn string_list(
        &self,
        field: &str,
        alias: Option<&str>,
    ) -> Result<Vec<&str>, StorefrontError> {
        match self.value(field, alias)? {
            FieldValue::List(items) => items
                .iter()
                .map(|item| match item {
                    FieldValue::String(s) => Ok(s.as_str()),
                    _ => Err(self.kind_mismatch(field, alias, "String list")),
                })
                .collect(),
            _ => Err(self.kind_mismatch(field, alias, "String list")),
        }
    }

    /// A nullable list of strings.
    pub fn string_list_opt(
        &self,
        field: &str,
        alias: Option<&str>,
    ) -> Result<Option<Vec<&str>>, StorefrontError> {
        match self.value(field, alias)? {
            FieldValue::Null => Ok(None),
            _ => self.string_list(field, alias).map(Some),
        }
    }
}

fn schema_violation(type_name: &str, field: &str, value: &Value) -> StorefrontError {
    StorefrontError::SchemaViolation {
        type_name: type_name.to_string(),
        field: field.to_string(),
        value: value.clone(),
    }
}

fn decode_field(
    type_name: &str,
    field: &str,
    shape: &FieldShape,
    value: &Value,
) -> Result<FieldValue, StorefrontError> {
    if value.is_null() {
        return if shape.nullable {
            Ok(FieldValue::Null)
        } else {
            Err(schema_violation(type_name, field, value))
        };
    }

    match shape.kind {
        FieldKind::Scalar(kind) => decode_scalar(type_name, field, kind, value),
        FieldKind::ScalarList(kind) => {
            let items = value
                .as_array()
                .ok_or_else(|| schema_violation(type_name, field, value))?;
            let decoded = items
                .iter()
                .map(|item| decode_scalar(type_name, field, kind, item))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(FieldValue::List(decoded))
        }
        FieldKind::Object(child) => {
            let map = value
                .as_object()
                .ok_or_else(|| schema_violation(type_name, field, value))?;
            Ok(FieldValue::Object(ResponseObject::from_json(child, map)?))
        }
        FieldKind::ObjectList(child) => {
            let items = value
                .as_array()
                .ok_or_else(|| schema_violation(type_name, field, value))?;
            let decoded = items
                .iter()
                .map(|item| {
                    let map = item
                        .as_object()
                        .ok_or_else(|| schema_violation(type_name, field, item))?;
                    Ok(FieldValue::Object(ResponseObject::from_json(child, map)?))
                })
                .collect::<Result<Vec<_>, StorefrontError>>()?;
            Ok(FieldValue::List(decoded))
        }
        FieldKind::Interface(resolver) => {
            let (descriptor, map) = resolve_interface(type_name, field, resolver, value)?;
            Ok(FieldValue::Object(ResponseObject::from_json(descriptor, map)?))
        }
        FieldKind::InterfaceList(resolver) => {
            let items = value
                .as_array()
                .ok_or_else(|| schema_violation(type_name, field, value))?;
            let decoded = items
                .iter()
                .map(|item| {
                    let (descriptor, map) = resolve_interface(type_name, field, resolver, item)?;
                    Ok(FieldValue::Object(ResponseObject::from_json(descriptor, map)?))
                })
                .collect::<Result<Vec<_>, StorefrontError>>()?;
            Ok(FieldValue::List(decoded))
        }
    }
}

/// Read the `__typename` discriminator and map it to a concrete
/// descriptor. Unrecognized discriminators resolve to the placeholder
/// descriptor, not an error; a missing discriminator is a violation.
fn resolve_interface<'v>(
    type_name: &str,
    field: &str,
    resolver: TypeResolver,
    value: &'v Value,
) -> Result<(&'static TypeDescriptor, &'v serde_json::Map<String, Value>), StorefrontError> {
    let map = value
        .as_object()
        .ok_or_else(|| schema_violation(type_name, field, value))?;
    let discriminator = map
        .get(TYPENAME_KEY)
        .and_then(Value::as_str)
        .ok_or_else(|| schema_violation(type_name, field, value))?;
    match resolver(discriminator) {
        Some(descriptor) => Ok((descriptor, map)),
        None => {
            tracing::debug!(
                discriminator,
                field,
                "unrecognized type, resolving to forward-compatible placeholder"
            );
            Ok((&UNKNOWN_TYPE, map))
        }
    }
}

fn decode_scalar(
    type_name: &str,
    field: &str,
    kind: ScalarKind,
    value: &Value,
) -> Result<FieldValue, StorefrontError> {
    let decoded = match kind {
        ScalarKind::Id => value.as_str().map(|s| FieldValue::Id(Id::new(s))),
        ScalarKind::String => value.as_str().map(|s| FieldValue::String(s.to_string())),
        ScalarKind::Int => value.as_i64().map(FieldValue::Int),
        ScalarKind::Float => value.as_f64().map(FieldValue::Float),
        ScalarKind::Boolean => value.as_bool().map(FieldValue::Boolean),
        ScalarKind::DateTime => value
            .as_str()
            .and_then(scalars::parse_date_time)
            .map(FieldValue::DateTime),
        ScalarKind::Money => value
            .as_str()
            .and_then(scalars::parse_money)
            .map(FieldValue::Money),
        ScalarKind::Url => value
            .as_str()
            .and_then(scalars::parse_url)
            .map(FieldValue::Url),
        ScalarKind::Enum => value.as_str().map(|s| FieldValue::Enum(s.to_string())),
    };
    decoded.ok_or_else(|| schema_violation(type_name, field, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::FieldShape;
    use serde_json::json;

    static ADDRESS: TypeDescriptor = TypeDescriptor {
        name: "TestAddress",
        fields: &[
            ("id", FieldShape::scalar(ScalarKind::Id)),
            ("city", FieldShape::scalar(ScalarKind::String).nullable()),
        ],
    };

    static ITEM: TypeDescriptor = TypeDescriptor {
        name: "TestItem",
        fields: &[
            ("id", FieldShape::scalar(ScalarKind::Id)),
            ("title", FieldShape::scalar(ScalarKind::String)),
            ("quantity", FieldShape::scalar(ScalarKind::Int)),
        ],
    };

    fn resolve_test(name: &str) -> Option<&'static TypeDescriptor> {
        match name {
            "TestItem" => Some(&ITEM),
            "TestAddress" => Some(&ADDRESS),
            _ => None,
        }
    }

    static ORDER: TypeDescriptor = TypeDescriptor {
        name: "TestOrder",
        fields: &[
            ("id", FieldShape::scalar(ScalarKind::Id)),
            ("createdAt", FieldShape::scalar(ScalarKind::DateTime)),
            ("completedAt", FieldShape::scalar(ScalarKind::DateTime).nullable()),
            ("totalPrice", FieldShape::scalar(ScalarKind::Money)),
            ("webUrl", FieldShape::scalar(ScalarKind::Url)),
            ("ready", FieldShape::scalar(ScalarKind::Boolean)),
            ("note", FieldShape::scalar(ScalarKind::String).nullable()),
            ("currencyCode", FieldShape::scalar(ScalarKind::Enum)),
            ("weight", FieldShape::scalar(ScalarKind::Float).nullable()),
            ("tags", FieldShape::scalar_list(ScalarKind::String)),
            ("items", FieldShape::object_list(&ITEM)),
            ("address", FieldShape::object(&ADDRESS).nullable()),
            ("owner", FieldShape::interface(resolve_test).nullable()),
        ],
    };

    fn decode(descriptor: &'static TypeDescriptor, value: serde_json::Value) -> ResponseObject {
        ResponseObject::from_json(descriptor, value.as_object().unwrap()).unwrap()
    }

    fn decode_err(descriptor: &'static TypeDescriptor, value: serde_json::Value) -> StorefrontError {
        ResponseObject::from_json(descriptor, value.as_object().unwrap()).unwrap_err()
    }

    #[test]
    fn decodes_every_scalar_kind_to_source_values() {
        let order = decode(
            &ORDER,
            json!({
                "id": "gid://order/1",
                "createdAt": "2017-03-17T16:00:00Z",
                "totalPrice": "19.99",
                "webUrl": "https://shop.example.com/orders/1",
                "ready": true,
                "currencyCode": "USD",
                "weight": 1.5,
                "tags": ["sale", "summer"],
            }),
        );
        assert_eq!(order.id("id", None).unwrap().as_str(), "gid://order/1");
        assert_eq!(
            order.date_time("createdAt", None).unwrap().to_rfc3339(),
            "2017-03-17T16:00:00+00:00"
        );
        assert_eq!(
            order.money("totalPrice", None).unwrap(),
            rust_decimal::Decimal::new(1999, 2)
        );
        assert_eq!(
            order.url("webUrl", None).unwrap().as_str(),
            "https://shop.example.com/orders/1"
        );
        assert!(order.boolean("ready", None).unwrap());
        assert_eq!(order.enum_raw("currencyCode", None).unwrap(), "USD");
        assert_eq!(order.float_opt("weight", None).unwrap(), Some(1.5));
        assert_eq!(
            order.string_list("tags", None).unwrap(),
            vec!["sale", "summer"]
        );
    }

    #[test]
    fn nullable_null_decodes_to_none() {
        let order = decode(&ORDER, json!({"completedAt": null, "note": null}));
        assert_eq!(order.date_time_opt("completedAt", None).unwrap(), None);
        assert_eq!(order.string_opt("note", None).unwrap(), None);
    }

    #[test]
    fn non_null_null_fails_construction_atomically() {
        let err = decode_err(&ORDER, json!({"id": "gid://order/1", "totalPrice": null}));
        match err {
            StorefrontError::SchemaViolation { type_name, field, value } => {
                assert_eq!(type_name, "TestOrder");
                assert_eq!(field, "totalPrice");
                assert!(value.is_null());
            }
            other => panic!("Expected SchemaViolation, got {:?}", other),
        }
    }

    #[test]
    fn malformed_scalars_fail_construction() {
        assert!(matches!(
            decode_err(&ORDER, json!({"createdAt": "yesterday"})),
            StorefrontError::SchemaViolation { .. }
        ));
        assert!(matches!(
            decode_err(&ORDER, json!({"totalPrice": "19,99"})),
            StorefrontError::SchemaViolation { .. }
        ));
        assert!(matches!(
            decode_err(&ORDER, json!({"webUrl": "not a url"})),
            StorefrontError::SchemaViolation { .. }
        ));
    }

    #[test]
    fn wrong_json_type_fails_construction() {
        assert!(matches!(
            decode_err(&ORDER, json!({"ready": "yes"})),
            StorefrontError::SchemaViolation { .. }
        ));
        // Int fields reject fractional numbers.
        assert!(matches!(
            decode_err(&ITEM, json!({"quantity": 1.5})),
            StorefrontError::SchemaViolation { .. }
        ));
    }

    #[test]
    fn unrecognized_field_name_fails_construction() {
        let err = decode_err(&ORDER, json!({"unheardOf": 1}));
        match err {
            StorefrontError::SchemaViolation { field, .. } => assert_eq!(field, "unheardOf"),
            other => panic!("Expected SchemaViolation, got {:?}", other),
        }
    }

    #[test]
    fn absent_field_access_is_a_loud_usage_error() {
        let order = decode(&ORDER, json!({"id": "gid://order/1"}));
        let err = order.string_opt("note", None).unwrap_err();
        match err {
            StorefrontError::FieldNotQueried { type_name, key } => {
                assert_eq!(type_name, "TestOrder");
                assert_eq!(key, "note");
            }
            other => panic!("Expected FieldNotQueried, got {:?}", other),
        }
    }

    #[test]
    fn wrong_kind_access_is_a_loud_usage_error() {
        let order = decode(&ORDER, json!({"ready": true}));
        let err = order.string("ready", None).unwrap_err();
        assert!(matches!(err, StorefrontError::FieldKindMismatch { .. }));
    }

    #[test]
    fn aliased_fields_resolve_independently() {
        let order = decode(
            &ORDER,
            json!({
                "items__firstTwo": [
                    {"id": "gid://item/1", "title": "A", "quantity": 1},
                    {"id": "gid://item/2", "title": "B", "quantity": 2},
                ],
                "items__lastOne": [
                    {"id": "gid://item/3", "title": "C", "quantity": 3},
                ],
            }),
        );
        let first = order.object_list("items", Some("firstTwo")).unwrap();
        let last = order.object_list("items", Some("lastOne")).unwrap();
        assert_eq!(first.len(), 2);
        assert_eq!(last.len(), 1);
        assert_eq!(last[0].string("title", None).unwrap(), "C");
        // The bare field name was never queried.
        assert!(matches!(
            order.object_list("items", None),
            Err(StorefrontError::FieldNotQueried { .. })
        ));
    }

    #[test]
    fn typename_sets_reported_type() {
        let order = decode(&ORDER, json!({"__typename": "TestOrder", "id": "gid://order/1"}));
        assert_eq!(order.type_name(), "TestOrder");
    }

    #[test]
    fn interface_field_resolves_known_discriminator() {
        let order = decode(
            &ORDER,
            json!({"owner": {"__typename": "TestItem", "id": "gid://item/9", "title": "T", "quantity": 1}}),
        );
        let owner = order.object("owner", None).unwrap();
        assert_eq!(owner.type_name(), "TestItem");
        assert_eq!(owner.string("title", None).unwrap(), "T");
    }

    #[test]
    fn interface_field_unknown_discriminator_yields_placeholder() {
        let order = decode(
            &ORDER,
            json!({"owner": {"__typename": "SellingPlan", "id": "gid://sp/1"}}),
        );
        let owner = order.object("owner", None).unwrap();
        assert_eq!(owner.type_name(), "SellingPlan");
        assert_eq!(owner.node_id().unwrap().as_str(), "gid://sp/1");
        // Nothing else is exposed.
        assert!(matches!(
            owner.string("title", None),
            Err(StorefrontError::FieldNotQueried { .. })
        ));
    }

    #[test]
    fn interface_field_missing_discriminator_fails() {
        let err = decode_err(&ORDER, json!({"owner": {"id": "gid://item/9"}}));
        assert!(matches!(err, StorefrontError::SchemaViolation { .. }));
    }

    #[test]
    fn list_element_mismatch_fails_whole_construction() {
        let err = decode_err(
            &ORDER,
            json!({"items": [{"id": "gid://item/1", "title": "A", "quantity": 1}, 42]}),
        );
        assert!(matches!(err, StorefrontError::SchemaViolation { .. }));
    }

    #[test]
    fn flatten_returns_each_object_exactly_once() {
        let order = decode(
            &ORDER,
            json!({
                "id": "gid://order/1",
                "items": [
                    {"id": "gid://item/1", "title": "A", "quantity": 1},
                    {"id": "gid://item/2", "title": "B", "quantity": 2},
                ],
                "address": {"id": "gid://addr/1", "city": "Ottawa"},
            }),
        );
        let all = order.nested_objects();
        // The order itself, two items, one address.
        assert_eq!(all.len(), 4);
        let ids: Vec<&str> = all
            .iter()
            .filter_map(|o| o.node_id())
            .map(|id| id.as_str())
            .collect();
        assert_eq!(
            ids,
            vec!["gid://order/1", "gid://addr/1", "gid://item/1", "gid://item/2"]
        );
    }

    #[test]
    fn node_id_absent_without_id_field() {
        let order = decode(&ORDER, json!({"ready": true}));
        assert!(order.node_id().is_none());
    }
}
