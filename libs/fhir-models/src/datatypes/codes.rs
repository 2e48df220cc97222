//! Required value sets used by the general-purpose datatypes

use crate::code_enum;

code_enum! {
    /// Identifies the purpose for this identifier, if known
    pub enum IdentifierUse("http://hl7.org/fhir/ValueSet/identifier-use|4.0.1") {
        Usual => "usual",
        Official => "official",
        Temp => "temp",
        Secondary => "secondary",
        Old => "old",
    }
}

code_enum! {
    /// How the value should be understood and represented
    pub enum QuantityComparator("http://hl7.org/fhir/ValueSet/quantity-comparator|4.0.1") {
        LessThan => "<",
        LessOrEqual => "<=",
        GreaterOrEqual => ">=",
        GreaterThan => ">",
    }
}

code_enum! {
    pub enum ContactPointSystem("http://hl7.org/fhir/ValueSet/contact-point-system|4.0.1") {
        Phone => "phone",
        Fax => "fax",
        Email => "email",
        Pager => "pager",
        Url => "url",
        Sms => "sms",
        Other => "other",
    }
}

code_enum! {
    pub enum ContactPointUse("http://hl7.org/fhir/ValueSet/contact-point-use|4.0.1") {
        Home => "home",
        Work => "work",
        Temp => "temp",
        Old => "old",
        Mobile => "mobile",
    }
}

code_enum! {
    /// The status of a resource narrative
    pub enum NarrativeStatus("http://hl7.org/fhir/ValueSet/narrative-status|4.0.1") {
        Generated => "generated",
        Extensions => "extensions",
        Additional => "additional",
        Empty => "empty",
    }
}
