//! GraphQL query documents as composable node trees.
//!
//! Per-type builders in [`types`](crate::types) append [`QueryNode`]s to a
//! [`SelectionSet`] through the single [`SelectionSet::add_field`]
//! primitive; the finished tree renders to query text once and is then
//! discarded. Aliased fields render as `name__suffix:name(...)` and the
//! same `name__suffix` string is the key the server echoes back, so one
//! rule serves serialization and response lookup.

use std::fmt::Write;

/// A literal argument value, rendered directly into query text.
#[derive(Debug, Clone, PartialEq)]
pub enum InputValue {
    /// Quoted and escaped.
    String(String),
    Int(i64),
    Float(f64),
    Boolean(bool),
    /// Raw enum identifier, rendered unquoted.
    Enum(&'static str),
    /// Opaque identifier, quoted like a string.
    Id(String),
    List(Vec<InputValue>),
    /// Input-object literal, `{key:value,...}`.
    Object(Vec<(String, InputValue)>),
    Null,
}

impl InputValue {
    fn render(&self, out: &mut String) {
        match self {
            Self::String(s) | Self::Id(s) => out.push_str(&quote_string(s)),
            Self::Int(i) => {
                let _ = write!(out, "{}", i);
            }
            Self::Float(v) => {
                let _ = write!(out, "{}", v);
            }
            Self::Boolean(b) => {
                let _ = write!(out, "{}", b);
            }
            Self::Enum(raw) => out.push_str(raw),
            Self::List(items) => {
                out.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    item.render(out);
                }
                out.push(']');
            }
            Self::Object(fields) => {
                out.push('{');
                for (i, (key, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    out.push_str(key);
                    out.push(':');
                    value.render(out);
                }
                out.push('}');
            }
            Self::Null => out.push_str("null"),
        }
    }
}

/// Quote and escape a string literal for embedding in query text.
pub fn quote_string(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 2);
    out.push('"');
    for c in input.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// The response key a field selection will occupy: `name` or `name__suffix`.
pub fn response_key(name: &str, alias: Option<&str>) -> String {
    match alias {
        Some(suffix) => format!("{}__{}", name, suffix),
        None => name.to_string(),
    }
}

/// One node of a query document tree.
#[derive(Debug, Clone)]
pub enum QueryNode {
    Field(FieldNode),
    /// `...on TypeName { ... }`, used for interface and union fields.
    InlineFragment {
        type_condition: &'static str,
        selection: SelectionSet,
    },
}

/// A single field selection: name, optional alias suffix, arguments, and
/// nested selection. A field with an empty selection is a leaf.
#[derive(Debug, Clone)]
pub struct FieldNode {
    pub name: &'static str,
    pub alias: Option<String>,
    pub arguments: Vec<(&'static str, InputValue)>,
    pub selection: SelectionSet,
}

impl FieldNode {
    fn render(&self, out: &mut String) {
        match &self.alias {
            Some(suffix) => {
                let _ = write!(out, "{}__{}:{}", self.name, suffix, self.name);
            }
            None => out.push_str(self.name),
        }
        if !self.arguments.is_empty() {
            out.push('(');
            for (i, (key, value)) in self.arguments.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(key);
                out.push(':');
                value.render(out);
            }
            out.push(')');
        }
        if !self.selection.is_empty() {
            out.push('{');
            self.selection.render(out);
            out.push('}');
        }
    }
}

/// An ordered list of query nodes; insertion order is preserved in the
/// rendered text.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    nodes: Vec<QueryNode>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[QueryNode] {
        &self.nodes
    }

    /// Append one field selection. Selecting the same field twice under
    /// different arguments is legal only with distinct aliases; no
    /// deduplication or merging happens here.
    pub fn add_field(
        &mut self,
        name: &'static str,
        alias: Option<&str>,
        arguments: Vec<(&'static str, InputValue)>,
        selection: SelectionSet,
    ) {
        self.nodes.push(QueryNode::Field(FieldNode {
            name,
            alias: alias.map(|s| s.to_string()),
            arguments,
            selection,
        }));
    }

    pub fn add_inline_fragment(&mut self, type_condition: &'static str, selection: SelectionSet) {
        self.nodes.push(QueryNode::InlineFragment {
            type_condition,
            selection,
        });
    }

    pub fn render(&self, out: &mut String) {
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            match node {
                QueryNode::Field(field) => field.render(out),
                QueryNode::InlineFragment {
                    type_condition,
                    selection,
                } => {
                    out.push_str("...on ");
                    out.push_str(type_condition);
                    out.push('{');
                    selection.render(out);
                    out.push('}');
                }
            }
        }
    }
}

/// Implemented by per-type selection builders.
pub trait QueryBuilder: Sized {
    fn new() -> Self;

    /// Consume the builder and yield the selection it accumulated.
    fn into_selection(self) -> SelectionSet;
}

/// Render a complete operation document (`query{...}` / `mutation{...}`).
pub(crate) fn render_document(operation: &str, selection: &SelectionSet) -> String {
    let mut out = String::new();
    out.push_str(operation);
    out.push('{');
    selection.render(&mut out);
    out.push('}');
    out
}
