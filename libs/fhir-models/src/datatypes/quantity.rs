use std::fmt;
use std::marker::PhantomData;

use crate::builder::ElementBuilder;
use crate::config::BuildOptions;
use crate::datatypes::QuantityComparator;
use crate::error::{Error, Result};
use crate::node::{Element, ElementBase, HashCache, Node, NodeKind};
use crate::primitive::{Code, Coded, FhirDecimal, FhirString, Uri};
use crate::rules::{finish, Checker, Validate};
use crate::schema::{Cardinality, FieldDecl, TypeDecl, TypeKind};
use crate::visitor::{accept_one, walk, Visitable, Visitor};

/// Flavour of a quantity: plain `Quantity` or one of its constrained forms
pub trait QuantityProfile: fmt::Debug + Clone + Copy + PartialEq + Default + Send + Sync + 'static {
    fn decl() -> &'static TypeDecl;

    /// `SimpleQuantity` forbids the comparator.
    const COMPARATOR_ALLOWED: bool = true;
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeneralQuantity;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DurationQuantity;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SimpleQuantityProfile;

pub type Quantity = QuantityOf<GeneralQuantity>;
pub type Duration = QuantityOf<DurationQuantity>;
pub type SimpleQuantity = QuantityOf<SimpleQuantityProfile>;

static QUANTITY_FIELDS: [FieldDecl; 5] = [
    FieldDecl::primitive("value", "decimal", Cardinality::OPTIONAL).summary(),
    FieldDecl::primitive("comparator", "code", Cardinality::OPTIONAL)
        .modifier()
        .summary(),
    FieldDecl::primitive("unit", "string", Cardinality::OPTIONAL).summary(),
    FieldDecl::primitive("system", "uri", Cardinality::OPTIONAL).summary(),
    FieldDecl::primitive("code", "code", Cardinality::OPTIONAL).summary(),
];

pub static QUANTITY: TypeDecl =
    TypeDecl::new("Quantity", TypeKind::ComplexType, Some("Element"), &QUANTITY_FIELDS);
pub static DURATION: TypeDecl = TypeDecl::new("Duration", TypeKind::ComplexType, Some("Quantity"), &[]);
pub static SIMPLE_QUANTITY: TypeDecl =
    TypeDecl::new("SimpleQuantity", TypeKind::ComplexType, Some("Quantity"), &[]);

impl QuantityProfile for GeneralQuantity {
    fn decl() -> &'static TypeDecl {
        &QUANTITY
    }
}

impl QuantityProfile for DurationQuantity {
    fn decl() -> &'static TypeDecl {
        &DURATION
    }
}

impl QuantityProfile for SimpleQuantityProfile {
    fn decl() -> &'static TypeDecl {
        &SIMPLE_QUANTITY
    }

    const COMPARATOR_ALLOWED: bool = false;
}

/// A measured amount
#[derive(Debug, Clone, PartialEq)]
pub struct QuantityOf<P: QuantityProfile> {
    base: ElementBase,
    value: Option<FhirDecimal>,
    comparator: Option<Coded<QuantityComparator>>,
    unit: Option<FhirString>,
    system: Option<Uri>,
    code: Option<Code>,
    profile: PhantomData<P>,
}

impl<P: QuantityProfile> QuantityOf<P> {
    pub fn builder() -> QuantityBuilder<P> {
        QuantityBuilder::default()
    }

    pub fn to_builder(&self) -> QuantityBuilder<P> {
        QuantityBuilder {
            base: ElementBuilder::from_base(&self.base),
            options: BuildOptions::default(),
            value: self.value.clone(),
            comparator: self.comparator.clone(),
            unit: self.unit.clone(),
            system: self.system.clone(),
            code: self.code.clone(),
            profile: PhantomData,
        }
    }

    crate::node_getters! {
        one value: FhirDecimal;
        one comparator: Coded<QuantityComparator>;
        one unit: FhirString;
        one system: Uri;
        one code: Code;
    }
}

impl<P: QuantityProfile> Node for QuantityOf<P> {
    fn type_decl(&self) -> &'static TypeDecl {
        P::decl()
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Complex
    }

    fn id(&self) -> Option<&str> {
        self.base.id()
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn hash_cache(&self) -> &HashCache {
        self.base.hash_cache()
    }
}

impl<P: QuantityProfile> Element for QuantityOf<P> {
    fn element_base(&self) -> &ElementBase {
        &self.base
    }
}

impl<P: QuantityProfile> Visitable for QuantityOf<P> {
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        walk(self, name, index, visitor, |v| {
            self.base.accept_children(v);
            accept_one(v, "value", self.value.as_ref());
            accept_one(v, "comparator", self.comparator.as_ref());
            accept_one(v, "unit", self.unit.as_ref());
            accept_one(v, "system", self.system.as_ref());
            accept_one(v, "code", self.code.as_ref());
        });
    }
}

impl<P: QuantityProfile> Validate for QuantityOf<P> {
    fn check(&self, c: &Checker) -> Result<()> {
        if !P::COMPARATOR_ALLOWED && self.comparator.is_some() {
            return Err(Error::InvalidCardinality {
                type_name: c.type_name(),
                path: "comparator".to_string(),
                reason: "element is prohibited".to_string(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct QuantityBuilder<P: QuantityProfile> {
    base: ElementBuilder,
    options: BuildOptions,
    value: Option<FhirDecimal>,
    comparator: Option<Coded<QuantityComparator>>,
    unit: Option<FhirString>,
    system: Option<Uri>,
    code: Option<Code>,
    profile: PhantomData<P>,
}

impl<P: QuantityProfile> QuantityBuilder<P> {
    crate::element_builder_methods!();

    crate::builder_setters! {
        one value: FhirDecimal;
        one comparator: Coded<QuantityComparator>;
        one unit: FhirString;
        one system: Uri;
        one code: Code;
    }

    pub fn build(self) -> Result<QuantityOf<P>> {
        let node = QuantityOf {
            base: self.base.freeze(),
            value: self.value,
            comparator: self.comparator,
            unit: self.unit,
            system: self.system,
            code: self.code,
            profile: PhantomData,
        };
        finish(node, self.options)
    }
}

static RANGE_FIELDS: [FieldDecl; 2] = [Range::LOW, Range::HIGH];

pub static RANGE: TypeDecl = TypeDecl::new("Range", TypeKind::ComplexType, Some("Element"), &RANGE_FIELDS);

/// Set of values bounded by low and high
#[derive(Debug, Clone, PartialEq)]
pub struct Range {
    base: ElementBase,
    low: Option<SimpleQuantity>,
    high: Option<SimpleQuantity>,
}

impl Range {
    pub const LOW: FieldDecl = FieldDecl::complex("low", "SimpleQuantity", Cardinality::OPTIONAL).summary();
    pub const HIGH: FieldDecl = FieldDecl::complex("high", "SimpleQuantity", Cardinality::OPTIONAL).summary();

    pub fn builder() -> RangeBuilder {
        RangeBuilder::default()
    }

    pub fn to_builder(&self) -> RangeBuilder {
        RangeBuilder {
            base: ElementBuilder::from_base(&self.base),
            options: BuildOptions::default(),
            low: self.low.clone(),
            high: self.high.clone(),
        }
    }

    crate::node_getters! {
        one low: SimpleQuantity;
        one high: SimpleQuantity;
    }
}

crate::impl_element!(Range, RANGE);

impl Visitable for Range {
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        walk(self, name, index, visitor, |v| {
            self.base.accept_children(v);
            accept_one(v, Self::LOW.name, self.low.as_ref());
            accept_one(v, Self::HIGH.name, self.high.as_ref());
        });
    }
}

impl Validate for Range {
    fn check(&self, _c: &Checker) -> Result<()> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct RangeBuilder {
    base: ElementBuilder,
    options: BuildOptions,
    low: Option<SimpleQuantity>,
    high: Option<SimpleQuantity>,
}

impl RangeBuilder {
    crate::element_builder_methods!();

    crate::builder_setters! {
        one low: SimpleQuantity;
        one high: SimpleQuantity;
    }

    pub fn build(self) -> Result<Range> {
        let node = Range {
            base: self.base.freeze(),
            low: self.low,
            high: self.high,
        };
        finish(node, self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_profiles_share_fields() {
        let duration = Duration::builder()
            .value(Decimal::new(15, 0))
            .unit(FhirString::new("min").unwrap())
            .build()
            .unwrap();
        assert_eq!(duration.type_name(), "Duration");
        assert_eq!(duration.value().and_then(|v| v.value()), Some(&Decimal::new(15, 0)));
    }

    #[test]
    fn test_simple_quantity_prohibits_comparator() {
        let result = SimpleQuantity::builder()
            .value(Decimal::ONE)
            .comparator(QuantityComparator::LessThan)
            .build();
        assert!(matches!(result, Err(Error::InvalidCardinality { type_name: "SimpleQuantity", .. })));

        let quantity = Quantity::builder()
            .value(Decimal::ONE)
            .comparator(QuantityComparator::LessThan)
            .build();
        assert!(quantity.is_ok());
    }
}
