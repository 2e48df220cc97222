//! Builder field groups
//!
//! Mutable staging counterparts of the base field groups in [`crate::node`].
//! Concrete builders embed one of them as `base`, carry a [`BuildOptions`]
//! as `options`, and pull the shared setters in with
//! [`element_builder_methods!`](crate::element_builder_methods),
//! [`backbone_builder_methods!`](crate::backbone_builder_methods) or
//! [`domain_resource_builder_methods!`](crate::domain_resource_builder_methods).
//!
//! Seeding a builder from a frozen node copies every list into a freshly
//! owned `Vec`; nothing a builder does can reach the node it came from.
//!
//! [`BuildOptions`]: crate::config::BuildOptions

use std::sync::Arc;

use crate::datatypes::{Extension, Meta, Narrative};
use crate::node::{BackboneBase, DomainResourceBase, ElementBase, HashCache, Resource, ResourceBase};
use crate::primitive::{Code, Uri};

#[derive(Debug, Clone, Default)]
pub struct ElementBuilder {
    id: Option<String>,
    extension: Vec<Extension>,
}

impl ElementBuilder {
    pub fn from_base(base: &ElementBase) -> Self {
        Self {
            id: base.id.clone(),
            extension: base.extension.to_vec(),
        }
    }

    pub fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }

    pub fn add_extension(&mut self, extension: impl IntoIterator<Item = Extension>) {
        self.extension.extend(extension);
    }

    pub fn replace_extension(&mut self, extension: Vec<Extension>) {
        self.extension = extension;
    }

    pub fn freeze(self) -> ElementBase {
        ElementBase {
            id: self.id,
            extension: self.extension,
            hash: HashCache::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct BackboneBuilder {
    element: ElementBuilder,
    modifier_extension: Vec<Extension>,
}

impl BackboneBuilder {
    pub fn from_base(base: &BackboneBase) -> Self {
        Self {
            element: ElementBuilder::from_base(&base.element),
            modifier_extension: base.modifier_extension.to_vec(),
        }
    }

    pub fn set_id(&mut self, id: String) {
        self.element.set_id(id);
    }

    pub fn add_extension(&mut self, extension: impl IntoIterator<Item = Extension>) {
        self.element.add_extension(extension);
    }

    pub fn replace_extension(&mut self, extension: Vec<Extension>) {
        self.element.replace_extension(extension);
    }

    pub fn add_modifier_extension(&mut self, extension: impl IntoIterator<Item = Extension>) {
        self.modifier_extension.extend(extension);
    }

    pub fn replace_modifier_extension(&mut self, extension: Vec<Extension>) {
        self.modifier_extension = extension;
    }

    pub fn freeze(self) -> BackboneBase {
        BackboneBase {
            element: self.element.freeze(),
            modifier_extension: self.modifier_extension,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DomainResourceBuilder {
    id: Option<String>,
    meta: Option<Meta>,
    implicit_rules: Option<Uri>,
    language: Option<Code>,
    text: Option<Narrative>,
    contained: Vec<Arc<dyn Resource>>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
}

impl DomainResourceBuilder {
    pub fn from_base(base: &DomainResourceBase) -> Self {
        Self {
            id: base.resource.id.clone(),
            meta: base.resource.meta.clone(),
            implicit_rules: base.resource.implicit_rules.clone(),
            language: base.resource.language.clone(),
            text: base.text.clone(),
            contained: base.contained.to_vec(),
            extension: base.extension.to_vec(),
            modifier_extension: base.modifier_extension.to_vec(),
        }
    }

    pub fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }

    pub fn set_meta(&mut self, meta: Meta) {
        self.meta = Some(meta);
    }

    pub fn set_implicit_rules(&mut self, implicit_rules: Uri) {
        self.implicit_rules = Some(implicit_rules);
    }

    pub fn set_language(&mut self, language: Code) {
        self.language = Some(language);
    }

    pub fn set_text(&mut self, text: Narrative) {
        self.text = Some(text);
    }

    pub fn add_contained(&mut self, contained: impl IntoIterator<Item = Arc<dyn Resource>>) {
        self.contained.extend(contained);
    }

    pub fn replace_contained(&mut self, contained: Vec<Arc<dyn Resource>>) {
        self.contained = contained;
    }

    pub fn add_extension(&mut self, extension: impl IntoIterator<Item = Extension>) {
        self.extension.extend(extension);
    }

    pub fn replace_extension(&mut self, extension: Vec<Extension>) {
        self.extension = extension;
    }

    pub fn add_modifier_extension(&mut self, extension: impl IntoIterator<Item = Extension>) {
        self.modifier_extension.extend(extension);
    }

    pub fn replace_modifier_extension(&mut self, extension: Vec<Extension>) {
        self.modifier_extension = extension;
    }

    pub fn freeze(self) -> DomainResourceBase {
        DomainResourceBase {
            resource: ResourceBase {
                id: self.id,
                meta: self.meta,
                implicit_rules: self.implicit_rules,
                language: self.language,
                hash: HashCache::default(),
            },
            text: self.text,
            contained: self.contained,
            extension: self.extension,
            modifier_extension: self.modifier_extension,
        }
    }
}

/// Setters shared by every element builder (`base: ElementBuilder` or
/// `base: BackboneBuilder`, plus `options: BuildOptions`).
#[macro_export]
macro_rules! element_builder_methods {
    () => {
        pub fn id(mut self, id: impl Into<String>) -> Self {
            self.base.set_id(id.into());
            self
        }

        /// Append extensions
        pub fn extension(
            mut self,
            extension: impl IntoIterator<Item = $crate::datatypes::Extension>,
        ) -> Self {
            self.base.add_extension(extension);
            self
        }

        /// Replace all extensions
        pub fn replace_extension(mut self, extension: Vec<$crate::datatypes::Extension>) -> Self {
            self.base.replace_extension(extension);
            self
        }

        pub fn with_options(mut self, options: $crate::config::BuildOptions) -> Self {
            self.options = options;
            self
        }

        /// Assemble without running any rule on `build()`.
        pub fn unvalidated(self) -> Self {
            self.with_options($crate::config::BuildOptions::unvalidated())
        }
    };
}

#[macro_export]
macro_rules! backbone_builder_methods {
    () => {
        $crate::element_builder_methods!();

        pub fn modifier_extension(
            mut self,
            extension: impl IntoIterator<Item = $crate::datatypes::Extension>,
        ) -> Self {
            self.base.add_modifier_extension(extension);
            self
        }

        pub fn replace_modifier_extension(
            mut self,
            extension: Vec<$crate::datatypes::Extension>,
        ) -> Self {
            self.base.replace_modifier_extension(extension);
            self
        }
    };
}

#[macro_export]
macro_rules! domain_resource_builder_methods {
    () => {
        $crate::backbone_builder_methods!();

        pub fn meta(mut self, meta: $crate::datatypes::Meta) -> Self {
            self.base.set_meta(meta);
            self
        }

        pub fn implicit_rules(mut self, implicit_rules: $crate::primitive::Uri) -> Self {
            self.base.set_implicit_rules(implicit_rules);
            self
        }

        pub fn language(mut self, language: $crate::primitive::Code) -> Self {
            self.base.set_language(language);
            self
        }

        pub fn text(mut self, text: $crate::datatypes::Narrative) -> Self {
            self.base.set_text(text);
            self
        }

        pub fn contained(
            mut self,
            contained: impl IntoIterator<Item = ::std::sync::Arc<dyn $crate::node::Resource>>,
        ) -> Self {
            self.base.add_contained(contained);
            self
        }

        pub fn replace_contained(
            mut self,
            contained: Vec<::std::sync::Arc<dyn $crate::node::Resource>>,
        ) -> Self {
            self.base.replace_contained(contained);
            self
        }
    };
}

/// Generate setters for a builder's own fields.
///
/// `one name: Type;` stores `Some(value.into())`.
/// `list name / replace_name: Type;` yields an appending `name` and a
/// replacing `replace_name`.
#[macro_export]
macro_rules! builder_setters {
    () => {};
    (one $name:ident: $ty:ty; $($rest:tt)*) => {
        pub fn $name(mut self, value: impl Into<$ty>) -> Self {
            self.$name = Some(value.into());
            self
        }
        $crate::builder_setters!($($rest)*);
    };
    (list $name:ident / $replace:ident: $ty:ty; $($rest:tt)*) => {
        pub fn $name(mut self, values: impl IntoIterator<Item = $ty>) -> Self {
            self.$name.extend(values);
            self
        }

        pub fn $replace(mut self, values: Vec<$ty>) -> Self {
            self.$name = values;
            self
        }
        $crate::builder_setters!($($rest)*);
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::Uri;

    fn extension(url: &str) -> Extension {
        Extension::builder()
            .url(Uri::new(url).unwrap())
            .value(crate::primitive::Boolean::from(true))
            .build()
            .unwrap()
    }

    #[test]
    fn test_element_builder_append_then_replace() {
        let mut builder = ElementBuilder::default();
        builder.add_extension([extension("http://example.org/a")]);
        builder.add_extension([extension("http://example.org/b")]);
        assert_eq!(builder.clone().freeze().extension().len(), 2);

        builder.replace_extension(vec![extension("http://example.org/c")]);
        let base = builder.freeze();
        assert_eq!(base.extension().len(), 1);
        assert_eq!(
            base.extension()[0].url().and_then(|u| u.as_str()),
            Some("http://example.org/c")
        );
    }

    #[test]
    fn test_from_base_copies_lists() {
        let mut builder = ElementBuilder::default();
        builder.set_id("e1".to_string());
        builder.add_extension([extension("http://example.org/a")]);
        let base = builder.freeze();

        let mut seeded = ElementBuilder::from_base(&base);
        seeded.add_extension([extension("http://example.org/b")]);

        assert_eq!(base.extension().len(), 1);
        assert_eq!(seeded.freeze().extension().len(), 2);
    }

    #[test]
    fn test_backbone_builder_modifier_extension() {
        let mut builder = BackboneBuilder::default();
        builder.add_modifier_extension([extension("http://example.org/m")]);
        let base = builder.freeze();
        assert_eq!(base.modifier_extension().len(), 1);
        assert!(base.element().extension().is_empty());
    }
}
