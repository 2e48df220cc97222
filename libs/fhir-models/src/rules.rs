//! Builder rules
//!
//! The invariant checks shared by every builder: required fields, non-empty
//! required lists, reference target types, choice types, choice exclusivity
//! and "value or children" (ele-1). Type-specific checks go through a
//! [`Checker`] in [`Validate::check`]; the generic ones run afterwards in
//! [`Validate::validate_with`].

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::config::BuildOptions;
use crate::datatypes::{DataValue, Reference};
use crate::error::{Error, Result};
use crate::node::Node;
use crate::schema::{is_resource_type, resource_type_from_uri, FieldDecl};
use crate::visitor::{Scalar, Visitor};

/// Rule context for one node: the owning type (for error reports) and the
/// options the node is being built with.
#[derive(Debug, Clone, Copy)]
pub struct Checker {
    type_name: &'static str,
    options: BuildOptions,
}

impl Checker {
    pub fn new(type_name: &'static str, options: BuildOptions) -> Self {
        Self { type_name, options }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    /// A required single-valued field must be present.
    pub fn require<T: ?Sized>(&self, field: &FieldDecl, value: Option<&T>) -> Result<()> {
        if value.is_none() {
            return Err(Error::MissingRequiredField {
                type_name: self.type_name,
                path: field.name.to_string(),
            });
        }
        Ok(())
    }

    /// A required repeated field must hold at least one item.
    pub fn require_non_empty<T>(&self, field: &FieldDecl, values: &[T]) -> Result<()> {
        if values.is_empty() {
            return Err(Error::InvalidCardinality {
                type_name: self.type_name,
                path: field.name.to_string(),
                reason: format!("at least {} element(s) required", field.cardinality.min.max(1)),
            });
        }
        Ok(())
    }

    pub fn reference(&self, field: &FieldDecl, value: Option<&Reference>) -> Result<()> {
        match value {
            Some(reference) => self.check_reference(field, || field.name.to_string(), reference),
            None => Ok(()),
        }
    }

    pub fn references(&self, field: &FieldDecl, values: &[Reference]) -> Result<()> {
        for (index, reference) in values.iter().enumerate() {
            self.check_reference(field, || format!("{}[{}]", field.name, index), reference)?;
        }
        Ok(())
    }

    /// The datatype held by a `[x]` field must be one of its declared types.
    pub fn choice(&self, field: &FieldDecl, value: Option<&DataValue>) -> Result<()> {
        let Some(value) = value else {
            return Ok(());
        };

        let found = value.type_name();
        if !field.choice_types.contains(&found) {
            return Err(Error::InvalidChoiceType {
                type_name: self.type_name,
                path: field.name.to_string(),
                found,
                allowed: field.choice_types.to_vec(),
            });
        }

        if let DataValue::Reference(reference) = value {
            self.check_reference(field, || value.element_name(field.name), reference)?;
        }
        Ok(())
    }

    /// Only the declared `Reference.type` tag is checked; the reference is
    /// never resolved and an untagged reference passes.
    fn check_reference(
        &self,
        field: &FieldDecl,
        path: impl FnOnce() -> String,
        reference: &Reference,
    ) -> Result<()> {
        if !self.options.check_reference_types {
            return Ok(());
        }
        let Some(tag) = reference.r#type().and_then(|t| t.as_str()) else {
            return Ok(());
        };

        let resource_type = resource_type_from_uri(tag);
        if !is_resource_type(resource_type) || !field.accepts_target(resource_type) {
            return Err(Error::InvalidReferenceTargetType {
                type_name: self.type_name,
                path: path(),
                found: tag.to_string(),
                allowed: field.reference_targets.to_vec(),
            });
        }
        Ok(())
    }

    /// Every declared choice group of the node must have exactly one
    /// populated member.
    pub fn choice_groups<N: Node + ?Sized>(&self, node: &N) -> Result<()> {
        let groups = node.type_decl().choice_groups;
        if groups.is_empty() {
            return Ok(());
        }

        let present = populated_fields(node);
        for group in groups {
            let reason = match (present.contains(group.first), present.contains(group.second)) {
                (true, true) => "both present",
                (false, false) => "neither present",
                _ => continue,
            };
            return Err(Error::ChoiceExclusivityViolation {
                type_name: self.type_name,
                first: group.first,
                second: group.second,
                reason,
            });
        }
        Ok(())
    }

    /// ele-1: a node must have a value or at least one populated child.
    pub fn value_or_children<N: Node + ?Sized>(&self, node: &N) -> Result<()> {
        if node.has_value() || node.has_children() {
            Ok(())
        } else {
            Err(Error::EmptyComposite {
                type_name: self.type_name,
            })
        }
    }
}

/// Names of the populated direct children of `node`.
pub fn populated_fields<N: Node + ?Sized>(node: &N) -> HashSet<String> {
    let mut collector = FieldNames::default();
    node.accept("", None, &mut collector);
    collector.names
}

#[derive(Default)]
struct FieldNames {
    depth: usize,
    names: HashSet<String>,
}

impl Visitor for FieldNames {
    fn visit_start(&mut self, name: &str, _index: Option<usize>, _node: &dyn Node) {
        self.depth += 1;
        if self.depth == 2 {
            self.names.insert(name.to_string());
        }
    }

    fn visit(&mut self, _name: &str, _index: Option<usize>, _node: &dyn Node) -> bool {
        self.depth == 1
    }

    fn visit_value(&mut self, name: &str, _value: Scalar<'_>) {
        if self.depth == 1 {
            self.names.insert(name.to_string());
        }
    }

    fn visit_end(&mut self, _name: &str, _index: Option<usize>, _node: &dyn Node) {
        self.depth -= 1;
    }
}

/// Node-specific rules, run by `build()` and callable again at any time.
pub trait Validate: Node + Sized {
    /// Type-specific checks, most-derived type first, then the base group.
    fn check(&self, checker: &Checker) -> Result<()>;

    fn validate(&self) -> Result<()> {
        self.validate_with(BuildOptions::strict())
    }

    /// Run every rule regardless of `options.validate`.
    fn validate_with(&self, options: BuildOptions) -> Result<()> {
        let checker = Checker::new(self.type_name(), options);
        self.check(&checker)?;
        checker.choice_groups(self)?;
        checker.value_or_children(self)
    }
}

/// Final step of every `build()`: validate unless the options disable it.
pub fn finish<N: Validate>(node: N, options: BuildOptions) -> Result<N> {
    if !options.validate {
        trace!(type_name = node.type_name(), "assembled without validation");
        return Ok(node);
    }

    match node.validate_with(options) {
        Ok(()) => {
            trace!(type_name = node.type_name(), "built");
            Ok(node)
        }
        Err(err) => {
            debug!(
                type_name = node.type_name(),
                path = err.path().unwrap_or_default(),
                error = %err,
                "builder rejected node"
            );
            Err(err)
        }
    }
}
