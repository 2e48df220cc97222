//! General-purpose complex datatypes
//!
//! The element types the record crates build on: extensions, codings,
//! identifiers and references, quantities, contact details, narrative and
//! resource metadata, plus [`DataValue`] for choice (`[x]`) elements.

mod codes;
mod coding;
mod contact;
mod extension;
mod narrative;
mod period;
mod quantity;
mod reference;
mod value;

pub use codes::*;
pub use coding::*;
pub use contact::*;
pub use extension::*;
pub use narrative::*;
pub use period::*;
pub use quantity::*;
pub use reference::*;
pub use value::DataValue;

use crate::schema::TypeDecl;

pub(crate) fn datatype_decls() -> Vec<&'static TypeDecl> {
    vec![
        &EXTENSION,
        &CODING,
        &CODEABLE_CONCEPT,
        &IDENTIFIER,
        &REFERENCE,
        &PERIOD,
        &QUANTITY,
        &DURATION,
        &SIMPLE_QUANTITY,
        &RANGE,
        &CONTACT_POINT,
        &CONTACT_DETAIL,
        &USAGE_CONTEXT,
        &NARRATIVE,
        &META,
    ]
}
