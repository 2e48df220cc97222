use crate::builder::ElementBuilder;
use crate::config::BuildOptions;
use crate::datatypes::DataValue;
use crate::error::Result;
use crate::node::ElementBase;
use crate::primitive::Uri;
use crate::rules::{finish, Checker, Validate};
use crate::schema::{Cardinality, FieldDecl, TypeDecl, TypeKind};
use crate::visitor::{accept_one, walk, Visitable, Visitor};

static EXTENSION_FIELDS: [FieldDecl; 2] = [Extension::URL, Extension::VALUE];

pub static EXTENSION: TypeDecl =
    TypeDecl::new("Extension", TypeKind::ComplexType, Some("Element"), &EXTENSION_FIELDS);

/// Optional additional information, identified by `url`
#[derive(Debug, Clone, PartialEq)]
pub struct Extension {
    base: ElementBase,
    url: Option<Uri>,
    value: Option<DataValue>,
}

impl Extension {
    pub const URL: FieldDecl = FieldDecl::primitive("url", "uri", Cardinality::REQUIRED);
    pub const VALUE: FieldDecl = FieldDecl::choice("value", Cardinality::OPTIONAL, DataValue::TYPE_NAMES)
        .targets(&["Resource"]);

    pub fn builder() -> ExtensionBuilder {
        ExtensionBuilder::default()
    }

    pub fn to_builder(&self) -> ExtensionBuilder {
        ExtensionBuilder {
            base: ElementBuilder::from_base(&self.base),
            options: BuildOptions::default(),
            url: self.url.clone(),
            value: self.value.clone(),
        }
    }

    crate::node_getters! {
        one url: Uri;
        one value: DataValue;
    }
}

crate::impl_element!(Extension, EXTENSION);

impl Visitable for Extension {
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        walk(self, name, index, visitor, |v| {
            self.base.accept_children(v);
            accept_one(v, Self::URL.name, self.url.as_ref());
            accept_one(v, Self::VALUE.name, self.value.as_ref());
        });
    }
}

impl Validate for Extension {
    fn check(&self, c: &Checker) -> Result<()> {
        c.require(&Self::URL, self.url.as_ref())?;
        c.choice(&Self::VALUE, self.value.as_ref())
    }
}

#[derive(Debug, Clone, Default)]
pub struct ExtensionBuilder {
    base: ElementBuilder,
    options: BuildOptions,
    url: Option<Uri>,
    value: Option<DataValue>,
}

impl ExtensionBuilder {
    crate::element_builder_methods!();

    crate::builder_setters! {
        one url: Uri;
        one value: DataValue;
    }

    pub fn build(self) -> Result<Extension> {
        let node = Extension {
            base: self.base.freeze(),
            url: self.url,
            value: self.value,
        };
        finish(node, self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::primitive::{Boolean, FhirString};

    #[test]
    fn test_url_is_required() {
        let result = Extension::builder().value(Boolean::from(true)).build();
        assert!(matches!(
            result,
            Err(Error::MissingRequiredField { type_name: "Extension", ref path }) if path == "url"
        ));
    }

    #[test]
    fn test_nested_extensions_without_value() {
        let inner = Extension::builder()
            .url(Uri::new("detail").unwrap())
            .value(FhirString::new("x").unwrap())
            .build()
            .unwrap();
        let outer = Extension::builder()
            .url(Uri::new("http://example.org/complex").unwrap())
            .extension([inner])
            .build()
            .unwrap();
        assert!(outer.value().is_none());
        assert_eq!(crate::node::Element::extension(&outer).len(), 1);
    }
}
