//! Traversal protocol
//!
//! Every node implements [`Visitable::accept`], which drives a [`Visitor`]
//! through the node in a fixed order:
//!
//! 1. `pre_visit(node)`; returning `false` skips the whole subtree
//! 2. `visit_start(name, index, node)`
//! 3. `visit(name, index, node)`; returning `false` skips the children
//! 4. children, in the canonical field order of the node's schema
//! 5. `visit_end(name, index, node)`
//! 6. `post_visit(node)`
//!
//! Items of a repeated field are visited under the field's name with their
//! position as `index`; single-valued fields pass `None`. Scalar content
//! (primitive values and element/resource ids) arrives through
//! [`Visitor::visit_value`].
//!
//! Structural equality, hashing, JSON serialization and collection are all
//! implemented as visitors in the submodules.

mod collect;
mod equality;
mod hash;
mod json;
mod recorder;

pub use collect::{collect, find_first};
pub use equality::structurally_equal;
pub use hash::structural_hash;
pub use json::{to_json, to_json_string};
pub use recorder::{Event, EventRecorder};

use std::sync::Arc;

use chrono::{FixedOffset, SecondsFormat};
use rust_decimal::Decimal;
use serde_json::Value;

use crate::node::Node;
use crate::primitive::{DateTimeValue, DateValue};

/// Scalar content handed to [`Visitor::visit_value`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar<'a> {
    String(&'a str),
    Boolean(bool),
    Integer(i64),
    Decimal(Decimal),
    Date(DateValue),
    DateTime(DateTimeValue),
    Instant(chrono::DateTime<FixedOffset>),
}

impl Scalar<'_> {
    /// Lexical form of the value
    pub fn render(&self) -> String {
        match self {
            Scalar::String(s) => (*s).to_string(),
            Scalar::Boolean(b) => b.to_string(),
            Scalar::Integer(i) => i.to_string(),
            Scalar::Decimal(d) => d.to_string(),
            Scalar::Date(d) => d.to_string(),
            Scalar::DateTime(dt) => dt.to_string(),
            Scalar::Instant(i) => i.to_rfc3339_opts(SecondsFormat::AutoSi, true),
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            Scalar::Boolean(b) => Value::Bool(*b),
            Scalar::Integer(i) => Value::from(*i),
            Scalar::Decimal(d) => d
                .to_string()
                .parse::<serde_json::Number>()
                .map(Value::Number)
                .unwrap_or_else(|_| Value::String(d.to_string())),
            other => Value::String(other.render()),
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Scalar::String(_) => "string",
            Scalar::Boolean(_) => "boolean",
            Scalar::Integer(_) => "integer",
            Scalar::Decimal(_) => "decimal",
            Scalar::Date(_) => "date",
            Scalar::DateTime(_) => "dateTime",
            Scalar::Instant(_) => "instant",
        }
    }
}

/// Callbacks driven by [`Visitable::accept`]. All methods have no-op defaults.
#[allow(unused_variables)]
pub trait Visitor {
    fn pre_visit(&mut self, node: &dyn Node) -> bool {
        true
    }

    fn visit_start(&mut self, name: &str, index: Option<usize>, node: &dyn Node) {}

    fn visit(&mut self, name: &str, index: Option<usize>, node: &dyn Node) -> bool {
        true
    }

    /// Scalar content of the node currently being visited: `"value"` for a
    /// primitive's own value, `"id"` for element and resource ids.
    fn visit_value(&mut self, name: &str, value: Scalar<'_>) {}

    fn visit_end(&mut self, name: &str, index: Option<usize>, node: &dyn Node) {}

    fn post_visit(&mut self, node: &dyn Node) {}
}

pub trait Visitable {
    /// Drive `visitor` through this node, reporting it under `name` and `index`.
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor);
}

impl<T: Visitable + ?Sized> Visitable for Arc<T> {
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        (**self).accept(name, index, visitor)
    }
}

impl<T: Visitable + ?Sized> Visitable for Box<T> {
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        (**self).accept(name, index, visitor)
    }
}

/// Frame shared by every `accept` implementation: gates, start/end events and
/// the node-specific `children` descent in between.
pub fn walk<N: Node>(
    node: &N,
    name: &str,
    index: Option<usize>,
    visitor: &mut dyn Visitor,
    children: impl FnOnce(&mut dyn Visitor),
) {
    if !visitor.pre_visit(node) {
        return;
    }
    visitor.visit_start(name, index, node);
    if visitor.visit(name, index, node) {
        children(visitor);
    }
    visitor.visit_end(name, index, node);
    visitor.post_visit(node);
}

pub fn accept_one<T: Visitable + ?Sized>(visitor: &mut dyn Visitor, name: &str, child: Option<&T>) {
    if let Some(child) = child {
        child.accept(name, None, visitor);
    }
}

pub fn accept_list<T: Visitable>(visitor: &mut dyn Visitor, name: &str, children: &[T]) {
    for (index, child) in children.iter().enumerate() {
        child.accept(name, Some(index), visitor);
    }
}

pub fn accept_value(visitor: &mut dyn Visitor, name: &str, value: Option<&str>) {
    if let Some(value) = value {
        visitor.visit_value(name, Scalar::String(value));
    }
}

/// Walk a whole tree, reporting the root under its type name.
pub fn visit_root<N: Node + ?Sized>(node: &N, visitor: &mut dyn Visitor) {
    node.accept(node.type_name(), None, visitor);
}

/// Whether the root of a walk carries any child content. The root's own
/// `id` is an attribute and does not count.
pub(crate) fn has_child_content<N: Node + ?Sized>(node: &N) -> bool {
    let mut detector = ChildDetector::default();
    node.accept("", None, &mut detector);
    detector.found
}

#[derive(Default)]
struct ChildDetector {
    depth: usize,
    found: bool,
}

impl Visitor for ChildDetector {
    fn pre_visit(&mut self, _node: &dyn Node) -> bool {
        !self.found
    }

    fn visit_start(&mut self, _name: &str, _index: Option<usize>, _node: &dyn Node) {
        self.depth += 1;
        if self.depth > 1 {
            self.found = true;
        }
    }

    fn visit(&mut self, _name: &str, _index: Option<usize>, _node: &dyn Node) -> bool {
        self.depth == 1 && !self.found
    }

    fn visit_value(&mut self, name: &str, _value: Scalar<'_>) {
        if self.depth == 1 && name != "id" {
            self.found = true;
        }
    }

    fn visit_end(&mut self, _name: &str, _index: Option<usize>, _node: &dyn Node) {
        self.depth -= 1;
    }
}
