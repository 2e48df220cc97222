//! FHIR node model
//!
//! This crate provides the framework beneath every concrete FHIR record:
//! an immutable tree of typed nodes, the builders that construct and
//! validate them, and a visitor protocol that walks any tree uniformly.
//!
//! # Module Organization
//!
//! - `node`: node trait, capability traits and shared field groups
//! - `primitive`: leaf datatypes with their lexical rules
//! - `datatypes`: general-purpose complex datatypes and choice values
//! - `schema`: static field/type declarations and the type registry
//! - `builder`: shared builder state and builder-generation macros
//! - `rules`: per-field checks and the build-time validation pipeline
//! - `visitor`: traversal protocol plus equality, hashing, JSON and collection
//! - `config`: validation presets and build options
//!
//! # Example
//!
//! ```rust
//! use ferrum_models::datatypes::{Coding, CodeableConcept};
//! use ferrum_models::primitive::{Code, FhirString, Uri};
//! use ferrum_models::visitor::to_json;
//! use serde_json::json;
//!
//! let concept = CodeableConcept::builder()
//!     .coding([Coding::builder()
//!         .system(Uri::new("http://snomed.info/sct")?)
//!         .code(Code::new("38341003")?)
//!         .build()?])
//!     .build()?;
//!
//! assert_eq!(
//!     to_json(&concept),
//!     json!({"coding": [{"system": "http://snomed.info/sct", "code": "38341003"}]})
//! );
//!
//! // Copy-then-modify never touches the original
//! let relabeled = concept.to_builder().text(FhirString::new("Hypertension")?).build()?;
//! assert!(concept.text().is_none());
//! assert!(relabeled.text().is_some());
//! # Ok::<(), ferrum_models::Error>(())
//! ```

pub mod builder;
pub mod config;
pub mod datatypes;
pub mod error;
pub mod node;
pub mod primitive;
pub mod rules;
pub mod schema;
pub mod visitor;

pub use config::{BuildOptions, ModelConfig, Preset};
pub use error::{Error, Result};
pub use node::{BackboneElement, DomainResource, Element, Node, NodeKind, Resource};
pub use rules::Validate;
pub use schema::{TypeDecl, TypeRegistry};
pub use visitor::{Visitable, Visitor};
