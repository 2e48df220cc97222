use crate::datatypes::{
    CodeableConcept, Coding, ContactPoint, Duration, Identifier, Period, Quantity, Range, Reference,
};
use crate::node::Node;
use crate::primitive::{
    Boolean, Canonical, Code, Date, DateTime, FhirDecimal, FhirString, Id, Instant, Integer, Markdown,
    PositiveInt, Uri,
};
use crate::visitor::{Visitable, Visitor};

macro_rules! data_value {
    ($($variant:ident($ty:ty) => $type_name:literal),+ $(,)?) => {
        /// Value of a choice element (`value[x]` and friends)
        #[derive(Debug, Clone, PartialEq)]
        pub enum DataValue {
            $($variant($ty)),+
        }

        impl DataValue {
            /// Every datatype a `DataValue` can hold
            pub const TYPE_NAMES: &'static [&'static str] = &[$($type_name),+];

            pub fn as_node(&self) -> &dyn Node {
                match self {
                    $(DataValue::$variant(value) => value),+
                }
            }
        }

        $(
            impl From<$ty> for DataValue {
                fn from(value: $ty) -> Self {
                    DataValue::$variant(value)
                }
            }
        )+
    };
}

data_value! {
    Boolean(Boolean) => "boolean",
    Integer(Integer) => "integer",
    PositiveInt(PositiveInt) => "positiveInt",
    Decimal(FhirDecimal) => "decimal",
    String(FhirString) => "string",
    Code(Code) => "code",
    Id(Id) => "id",
    Uri(Uri) => "uri",
    Canonical(Canonical) => "canonical",
    Markdown(Markdown) => "markdown",
    Date(Date) => "date",
    DateTime(DateTime) => "dateTime",
    Instant(Instant) => "instant",
    Coding(Coding) => "Coding",
    CodeableConcept(CodeableConcept) => "CodeableConcept",
    Identifier(Identifier) => "Identifier",
    Period(Period) => "Period",
    Quantity(Quantity) => "Quantity",
    Duration(Duration) => "Duration",
    Range(Range) => "Range",
    Reference(Reference) => "Reference",
    ContactPoint(ContactPoint) => "ContactPoint",
}

impl DataValue {
    pub fn type_name(&self) -> &'static str {
        self.as_node().type_name()
    }

    /// Element name for a choice field holding this value, e.g. `value` +
    /// `CodeableConcept` gives `valueCodeableConcept`.
    pub fn element_name(&self, field: &str) -> String {
        let type_name = self.type_name();
        let mut chars = type_name.chars();
        match chars.next() {
            Some(first) => format!("{}{}{}", field, first.to_ascii_uppercase(), chars.as_str()),
            None => field.to_string(),
        }
    }
}

/// A choice value reports itself under its type-qualified element name.
impl Visitable for DataValue {
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        let name = self.element_name(name);
        self.as_node().accept(&name, index, visitor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visitor::{Event, EventRecorder};

    #[test]
    fn test_element_names() {
        let value = DataValue::from(Boolean::from(true));
        assert_eq!(value.type_name(), "boolean");
        assert_eq!(value.element_name("value"), "valueBoolean");

        let value = DataValue::from(DateTime::parse("2024-01-01").unwrap());
        assert_eq!(value.element_name("occurrence"), "occurrenceDateTime");
    }

    #[test]
    fn test_accept_uses_qualified_name() {
        let value = DataValue::from(FhirString::new("abc").unwrap());
        let mut recorder = EventRecorder::default();
        value.accept("value", None, &mut recorder);

        assert!(recorder.events().iter().any(|e| matches!(
            e,
            Event::Start { name, index: None, .. } if name == "valueString"
        )));
    }

    #[test]
    fn test_type_names_match_declarations() {
        for name in DataValue::TYPE_NAMES {
            assert!(crate::schema::TypeRegistry::core().contains(name), "{name}");
        }
    }
}
