//! Node hierarchy
//!
//! Every value in a model tree is a [`Node`]. Instead of a linear class chain,
//! capabilities are composed: [`Element`] (id + extensions),
//! [`BackboneElement`] (adds modifier extensions), [`Resource`] (id, meta,
//! implicit rules, language) and [`DomainResource`] (adds narrative,
//! contained resources and both extension lists). Concrete types embed the
//! matching base struct and implement the capability traits through
//! [`impl_element!`](crate::impl_element), [`impl_backbone!`](crate::impl_backbone)
//! or [`impl_domain_resource!`](crate::impl_domain_resource).
//!
//! Nodes are frozen: fields are private, lists are exposed as slices, and
//! the only way to derive a modified node is `to_builder()`.

use std::any::Any;
use std::fmt::Debug;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::datatypes::{Extension, Meta, Narrative};
use crate::error::{Error, Result};
use crate::primitive::{check_id, Code, Uri};
use crate::rules::Checker;
use crate::schema::{BindingDecl, BindingStrength, Cardinality, FieldDecl, TypeDecl, TypeKind};
use crate::visitor::{accept_list, accept_one, accept_value, has_child_content, Visitable, Visitor};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Primitive,
    Complex,
    Backbone,
    Resource,
}

/// Lazily computed structural hash.
///
/// Written without synchronization: concurrent first reads may both compute,
/// but the value is deterministic so every store writes the same bits.
/// Zero marks an empty cell.
#[derive(Debug, Default)]
pub struct HashCache(AtomicU64);

impl HashCache {
    pub fn get(&self) -> Option<u64> {
        match self.0.load(Ordering::Relaxed) {
            0 => None,
            value => Some(value),
        }
    }

    pub fn get_or_compute(&self, compute: impl FnOnce() -> u64) -> u64 {
        if let Some(value) = self.get() {
            return value;
        }
        let value = compute().max(1);
        self.0.store(value, Ordering::Relaxed);
        value
    }
}

/// Copies start with an empty cache.
impl Clone for HashCache {
    fn clone(&self) -> Self {
        Self::default()
    }
}

/// The cache never takes part in equality.
impl PartialEq for HashCache {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

/// A frozen position in a model tree
pub trait Node: Visitable + Debug + Send + Sync + 'static {
    fn type_decl(&self) -> &'static TypeDecl;

    fn type_name(&self) -> &'static str {
        self.type_decl().name
    }

    fn kind(&self) -> NodeKind;

    fn id(&self) -> Option<&str>;

    /// Whether the node carries a scalar value (primitives only)
    fn has_value(&self) -> bool {
        false
    }

    /// Whether any child field (other than the id) is populated
    fn has_children(&self) -> bool {
        has_child_content(self)
    }

    fn as_any(&self) -> &dyn Any;

    fn hash_cache(&self) -> &HashCache;
}

pub trait Element: Node {
    fn element_base(&self) -> &ElementBase;

    fn extension(&self) -> &[Extension] {
        &self.element_base().extension
    }
}

/// Element nested inside a resource that may carry modifier extensions
pub trait BackboneElement: Element {
    fn backbone_base(&self) -> &BackboneBase;

    fn modifier_extension(&self) -> &[Extension] {
        &self.backbone_base().modifier_extension
    }
}

pub trait Resource: Node {
    fn resource_base(&self) -> &ResourceBase;

    fn meta(&self) -> Option<&Meta> {
        self.resource_base().meta.as_ref()
    }

    fn implicit_rules(&self) -> Option<&Uri> {
        self.resource_base().implicit_rules.as_ref()
    }

    fn language(&self) -> Option<&Code> {
        self.resource_base().language.as_ref()
    }
}

pub trait DomainResource: Resource {
    fn domain_base(&self) -> &DomainResourceBase;

    fn text(&self) -> Option<&Narrative> {
        self.domain_base().text.as_ref()
    }

    fn contained(&self) -> &[Arc<dyn Resource>] {
        &self.domain_base().contained
    }

    fn extension(&self) -> &[Extension] {
        &self.domain_base().extension
    }

    fn modifier_extension(&self) -> &[Extension] {
        &self.domain_base().modifier_extension
    }
}

/// Contained resources compare structurally.
impl PartialEq for dyn Resource {
    fn eq(&self, other: &Self) -> bool {
        crate::visitor::structurally_equal(self, other)
    }
}

/// Field group shared by every element: `id` and `extension`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementBase {
    pub(crate) id: Option<String>,
    pub(crate) extension: Vec<Extension>,
    pub(crate) hash: HashCache,
}

impl ElementBase {
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn extension(&self) -> &[Extension] {
        &self.extension
    }

    pub fn element(&self) -> &ElementBase {
        self
    }

    pub fn hash_cache(&self) -> &HashCache {
        &self.hash
    }

    pub fn accept_children(&self, visitor: &mut dyn Visitor) {
        accept_value(visitor, "id", self.id.as_deref());
        accept_list(visitor, "extension", &self.extension);
    }
}

/// Element field group plus `modifierExtension`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BackboneBase {
    pub(crate) element: ElementBase,
    pub(crate) modifier_extension: Vec<Extension>,
}

impl BackboneBase {
    pub fn id(&self) -> Option<&str> {
        self.element.id()
    }

    pub fn element(&self) -> &ElementBase {
        &self.element
    }

    pub fn backbone(&self) -> &BackboneBase {
        self
    }

    pub fn modifier_extension(&self) -> &[Extension] {
        &self.modifier_extension
    }

    pub fn hash_cache(&self) -> &HashCache {
        self.element.hash_cache()
    }

    pub fn accept_children(&self, visitor: &mut dyn Visitor) {
        self.element.accept_children(visitor);
        accept_list(visitor, "modifierExtension", &self.modifier_extension);
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceBase {
    pub(crate) id: Option<String>,
    pub(crate) meta: Option<Meta>,
    pub(crate) implicit_rules: Option<Uri>,
    pub(crate) language: Option<Code>,
    pub(crate) hash: HashCache,
}

impl ResourceBase {
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn hash_cache(&self) -> &HashCache {
        &self.hash
    }

    pub fn accept_children(&self, visitor: &mut dyn Visitor) {
        accept_value(visitor, "id", self.id.as_deref());
        accept_one(visitor, "meta", self.meta.as_ref());
        accept_one(visitor, "implicitRules", self.implicit_rules.as_ref());
        accept_one(visitor, "language", self.language.as_ref());
    }

    /// Logical ids follow the `id` lexical rules.
    pub fn check(&self, checker: &Checker) -> Result<()> {
        if let Some(id) = &self.id {
            check_id(id).map_err(|reason| Error::InvalidPrimitiveValue {
                type_name: checker.type_name(),
                reason,
            })?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DomainResourceBase {
    pub(crate) resource: ResourceBase,
    pub(crate) text: Option<Narrative>,
    pub(crate) contained: Vec<Arc<dyn Resource>>,
    pub(crate) extension: Vec<Extension>,
    pub(crate) modifier_extension: Vec<Extension>,
}

impl DomainResourceBase {
    pub fn id(&self) -> Option<&str> {
        self.resource.id()
    }

    pub fn resource(&self) -> &ResourceBase {
        &self.resource
    }

    pub fn hash_cache(&self) -> &HashCache {
        self.resource.hash_cache()
    }

    pub fn accept_children(&self, visitor: &mut dyn Visitor) {
        self.resource.accept_children(visitor);
        accept_one(visitor, "text", self.text.as_ref());
        accept_list(visitor, "contained", &self.contained);
        accept_list(visitor, "extension", &self.extension);
        accept_list(visitor, "modifierExtension", &self.modifier_extension);
    }

    pub fn check(&self, checker: &Checker) -> Result<()> {
        self.resource.check(checker)
    }
}

static ELEMENT_FIELDS: [FieldDecl; 2] = [
    FieldDecl::primitive("id", "string", Cardinality::OPTIONAL),
    FieldDecl::complex("extension", "Extension", Cardinality::REPEATED),
];
pub static ELEMENT: TypeDecl = TypeDecl::new("Element", TypeKind::ComplexType, None, &ELEMENT_FIELDS);

static BACKBONE_ELEMENT_FIELDS: [FieldDecl; 1] =
    [FieldDecl::complex("modifierExtension", "Extension", Cardinality::REPEATED)
        .modifier()
        .summary()];
pub static BACKBONE_ELEMENT: TypeDecl = TypeDecl::new(
    "BackboneElement",
    TypeKind::ComplexType,
    Some("Element"),
    &BACKBONE_ELEMENT_FIELDS,
);

static RESOURCE_FIELDS: [FieldDecl; 4] = [
    FieldDecl::primitive("id", "id", Cardinality::OPTIONAL).summary(),
    FieldDecl::complex("meta", "Meta", Cardinality::OPTIONAL).summary(),
    FieldDecl::primitive("implicitRules", "uri", Cardinality::OPTIONAL)
        .modifier()
        .summary(),
    FieldDecl::primitive("language", "code", Cardinality::OPTIONAL).bound(BindingDecl::new(
        "Language",
        BindingStrength::Preferred,
        "http://hl7.org/fhir/ValueSet/languages",
    )),
];
pub static RESOURCE: TypeDecl = TypeDecl::new("Resource", TypeKind::Resource, None, &RESOURCE_FIELDS);

static DOMAIN_RESOURCE_FIELDS: [FieldDecl; 4] = [
    FieldDecl::complex("text", "Narrative", Cardinality::OPTIONAL),
    FieldDecl::resource("contained", Cardinality::REPEATED),
    FieldDecl::complex("extension", "Extension", Cardinality::REPEATED),
    FieldDecl::complex("modifierExtension", "Extension", Cardinality::REPEATED).modifier(),
];
pub static DOMAIN_RESOURCE: TypeDecl = TypeDecl::new(
    "DomainResource",
    TypeKind::Resource,
    Some("Resource"),
    &DOMAIN_RESOURCE_FIELDS,
);

pub(crate) fn base_type_decls() -> [&'static TypeDecl; 4] {
    [&ELEMENT, &BACKBONE_ELEMENT, &RESOURCE, &DOMAIN_RESOURCE]
}

/// Implement [`Node`] and [`Element`] for a complex datatype whose
/// `base` field is an [`ElementBase`].
#[macro_export]
macro_rules! impl_element {
    ($ty:ty, $decl:expr) => {
        impl $crate::node::Node for $ty {
            fn type_decl(&self) -> &'static $crate::schema::TypeDecl {
                &$decl
            }

            fn kind(&self) -> $crate::node::NodeKind {
                $crate::node::NodeKind::Complex
            }

            fn id(&self) -> Option<&str> {
                self.base.id()
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn hash_cache(&self) -> &$crate::node::HashCache {
                self.base.hash_cache()
            }
        }

        impl $crate::node::Element for $ty {
            fn element_base(&self) -> &$crate::node::ElementBase {
                self.base.element()
            }
        }
    };
}

/// Implement [`Node`], [`Element`] and [`BackboneElement`] for a type whose
/// `base` field is a [`BackboneBase`].
#[macro_export]
macro_rules! impl_backbone {
    ($ty:ty, $decl:expr) => {
        impl $crate::node::Node for $ty {
            fn type_decl(&self) -> &'static $crate::schema::TypeDecl {
                &$decl
            }

            fn kind(&self) -> $crate::node::NodeKind {
                $crate::node::NodeKind::Backbone
            }

            fn id(&self) -> Option<&str> {
                self.base.id()
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn hash_cache(&self) -> &$crate::node::HashCache {
                self.base.hash_cache()
            }
        }

        impl $crate::node::Element for $ty {
            fn element_base(&self) -> &$crate::node::ElementBase {
                self.base.element()
            }
        }

        impl $crate::node::BackboneElement for $ty {
            fn backbone_base(&self) -> &$crate::node::BackboneBase {
                self.base.backbone()
            }
        }
    };
}

/// Implement [`Node`], [`Resource`] and [`DomainResource`] for a record
/// whose `base` field is a [`DomainResourceBase`].
#[macro_export]
macro_rules! impl_domain_resource {
    ($ty:ty, $decl:expr) => {
        impl $crate::node::Node for $ty {
            fn type_decl(&self) -> &'static $crate::schema::TypeDecl {
                &$decl
            }

            fn kind(&self) -> $crate::node::NodeKind {
                $crate::node::NodeKind::Resource
            }

            fn id(&self) -> Option<&str> {
                self.base.id()
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn hash_cache(&self) -> &$crate::node::HashCache {
                self.base.hash_cache()
            }
        }

        impl $crate::node::Resource for $ty {
            fn resource_base(&self) -> &$crate::node::ResourceBase {
                self.base.resource()
            }
        }

        impl $crate::node::DomainResource for $ty {
            fn domain_base(&self) -> &$crate::node::DomainResourceBase {
                &self.base
            }
        }
    };
}

/// Generate read accessors for a node's own fields.
///
/// `one name: Type;` yields `fn name(&self) -> Option<&Type>`,
/// `list name: Type;` yields `fn name(&self) -> &[Type]`.
#[macro_export]
macro_rules! node_getters {
    () => {};
    (one $name:ident: $ty:ty; $($rest:tt)*) => {
        pub fn $name(&self) -> Option<&$ty> {
            self.$name.as_ref()
        }
        $crate::node_getters!($($rest)*);
    };
    (list $name:ident: $ty:ty; $($rest:tt)*) => {
        pub fn $name(&self) -> &[$ty] {
            &self.$name
        }
        $crate::node_getters!($($rest)*);
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_hash_cache_compute_once() {
        let cache = HashCache::default();
        assert_eq!(cache.get(), None);

        assert_eq!(cache.get_or_compute(|| 42), 42);
        assert_eq!(cache.get_or_compute(|| unreachable!()), 42);
        assert_eq!(cache.get(), Some(42));
    }

    #[test]
    fn test_hash_cache_zero_is_remapped() {
        let cache = HashCache::default();
        assert_eq!(cache.get_or_compute(|| 0), 1);
        assert_eq!(cache.get(), Some(1));
    }

    #[test]
    fn test_hash_cache_clone_is_empty() {
        let cache = HashCache::default();
        cache.get_or_compute(|| 7);
        assert_eq!(cache.clone().get(), None);
        assert_eq!(cache, HashCache::default());
    }

    #[test]
    fn test_hash_cache_concurrent_first_reads_agree() {
        let cache = Arc::new(HashCache::default());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || cache.get_or_compute(|| 0xfeed))
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 0xfeed);
        }
        assert_eq!(cache.get(), Some(0xfeed));
    }

    #[test]
    fn test_base_declarations_chain() {
        assert_eq!(BACKBONE_ELEMENT.base, Some("Element"));
        assert_eq!(DOMAIN_RESOURCE.base, Some("Resource"));
        assert!(RESOURCE.is_resource());
        assert!(RESOURCE.field("implicitRules").is_some_and(|f| f.is_modifier));
    }
}
