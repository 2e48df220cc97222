use crate::builder::ElementBuilder;
use crate::config::BuildOptions;
use crate::error::Result;
use crate::node::ElementBase;
use crate::primitive::DateTime;
use crate::rules::{finish, Checker, Validate};
use crate::schema::{Cardinality, FieldDecl, TypeDecl, TypeKind};
use crate::visitor::{accept_one, walk, Visitable, Visitor};

static PERIOD_FIELDS: [FieldDecl; 2] = [Period::START, Period::END];

pub static PERIOD: TypeDecl = TypeDecl::new("Period", TypeKind::ComplexType, Some("Element"), &PERIOD_FIELDS);

/// Time range defined by start and end date/time
#[derive(Debug, Clone, PartialEq)]
pub struct Period {
    base: ElementBase,
    start: Option<DateTime>,
    end: Option<DateTime>,
}

impl Period {
    pub const START: FieldDecl = FieldDecl::primitive("start", "dateTime", Cardinality::OPTIONAL).summary();
    pub const END: FieldDecl = FieldDecl::primitive("end", "dateTime", Cardinality::OPTIONAL).summary();

    pub fn builder() -> PeriodBuilder {
        PeriodBuilder::default()
    }

    pub fn to_builder(&self) -> PeriodBuilder {
        PeriodBuilder {
            base: ElementBuilder::from_base(&self.base),
            options: BuildOptions::default(),
            start: self.start.clone(),
            end: self.end.clone(),
        }
    }

    crate::node_getters! {
        one start: DateTime;
        one end: DateTime;
    }
}

crate::impl_element!(Period, PERIOD);

impl Visitable for Period {
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        walk(self, name, index, visitor, |v| {
            self.base.accept_children(v);
            accept_one(v, Self::START.name, self.start.as_ref());
            accept_one(v, Self::END.name, self.end.as_ref());
        });
    }
}

impl Validate for Period {
    fn check(&self, _c: &Checker) -> Result<()> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct PeriodBuilder {
    base: ElementBuilder,
    options: BuildOptions,
    start: Option<DateTime>,
    end: Option<DateTime>,
}

impl PeriodBuilder {
    crate::element_builder_methods!();

    crate::builder_setters! {
        one start: DateTime;
        one end: DateTime;
    }

    pub fn build(self) -> Result<Period> {
        let node = Period {
            base: self.base.freeze(),
            start: self.start,
            end: self.end,
        };
        finish(node, self.options)
    }
}
