//! Primitive datatypes
//!
//! One generic leaf, [`Primitive<K>`], parameterized by a marker kind that
//! supplies the value type, the schema declaration, the scalar view used by
//! visitors and the lexical rules. Value-set bound codes use
//! [`Coded<E>`] with an enum generated by [`code_enum!`](crate::code_enum).

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use chrono::{FixedOffset, NaiveDate, SecondsFormat};
use rust_decimal::Decimal as RustDecimal;

use crate::builder::ElementBuilder;
use crate::config::BuildOptions;
use crate::error::{Error, Result};
use crate::node::{Element, ElementBase, HashCache, Node, NodeKind};
use crate::rules::{finish, Checker, Validate};
use crate::schema::{TypeDecl, TypeKind};
use crate::visitor::{walk, Scalar, Visitable, Visitor};

const ID_MAX_LENGTH: usize = 64;

/// Marker describing one primitive type
pub trait PrimitiveKind: Send + Sync + 'static {
    type Value: Clone + fmt::Debug + PartialEq + Send + Sync + 'static;

    fn decl() -> &'static TypeDecl;

    fn scalar(value: &Self::Value) -> Scalar<'_>;

    /// Lexical rules; the error is a human-readable reason.
    fn check(_value: &Self::Value, _options: &BuildOptions) -> std::result::Result<(), String> {
        Ok(())
    }
}

macro_rules! primitive_decl {
    ($name:literal) => {{
        static DECL: TypeDecl = TypeDecl::new($name, TypeKind::PrimitiveType, Some("Element"), &[]);
        &DECL
    }};
}

macro_rules! string_kind {
    ($(#[$meta:meta])* $kind:ident, $name:literal, $check:path) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub struct $kind;

        impl PrimitiveKind for $kind {
            type Value = String;

            fn decl() -> &'static TypeDecl {
                primitive_decl!($name)
            }

            fn scalar(value: &String) -> Scalar<'_> {
                Scalar::String(value)
            }

            fn check(value: &String, options: &BuildOptions) -> std::result::Result<(), String> {
                $check(value, options)
            }
        }
    };
}

string_kind!(StringKind, "string", check_string);
string_kind!(CodeKind, "code", check_code);
string_kind!(IdKind, "id", check_id_with_options);
string_kind!(UriKind, "uri", check_uri);
string_kind!(CanonicalKind, "canonical", check_uri);
string_kind!(MarkdownKind, "markdown", check_string);
string_kind!(
    /// Narrative XHTML; only the enclosing `<div>` is checked here.
    XhtmlKind,
    "xhtml",
    check_xhtml
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BooleanKind;

impl PrimitiveKind for BooleanKind {
    type Value = bool;

    fn decl() -> &'static TypeDecl {
        primitive_decl!("boolean")
    }

    fn scalar(value: &bool) -> Scalar<'_> {
        Scalar::Boolean(*value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IntegerKind;

impl PrimitiveKind for IntegerKind {
    type Value = i32;

    fn decl() -> &'static TypeDecl {
        primitive_decl!("integer")
    }

    fn scalar(value: &i32) -> Scalar<'_> {
        Scalar::Integer(i64::from(*value))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PositiveIntKind;

impl PrimitiveKind for PositiveIntKind {
    type Value = i32;

    fn decl() -> &'static TypeDecl {
        primitive_decl!("positiveInt")
    }

    fn scalar(value: &i32) -> Scalar<'_> {
        Scalar::Integer(i64::from(*value))
    }

    fn check(value: &i32, _options: &BuildOptions) -> std::result::Result<(), String> {
        if *value < 1 {
            return Err(format!(
                "Integer value: {} is less than minimum required value: 1",
                value
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecimalKind;

impl PrimitiveKind for DecimalKind {
    type Value = RustDecimal;

    fn decl() -> &'static TypeDecl {
        primitive_decl!("decimal")
    }

    fn scalar(value: &RustDecimal) -> Scalar<'_> {
        Scalar::Decimal(*value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateKind;

impl PrimitiveKind for DateKind {
    type Value = DateValue;

    fn decl() -> &'static TypeDecl {
        primitive_decl!("date")
    }

    fn scalar(value: &DateValue) -> Scalar<'_> {
        Scalar::Date(*value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateTimeKind;

impl PrimitiveKind for DateTimeKind {
    type Value = DateTimeValue;

    fn decl() -> &'static TypeDecl {
        primitive_decl!("dateTime")
    }

    fn scalar(value: &DateTimeValue) -> Scalar<'_> {
        Scalar::DateTime(*value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InstantKind;

impl PrimitiveKind for InstantKind {
    type Value = chrono::DateTime<FixedOffset>;

    fn decl() -> &'static TypeDecl {
        primitive_decl!("instant")
    }

    fn scalar(value: &chrono::DateTime<FixedOffset>) -> Scalar<'_> {
        Scalar::Instant(*value)
    }
}

/// A `code` bound to a value set whose members are the variants of `E`
pub struct CodedKind<E>(PhantomData<fn() -> E>);

impl<E: CodeValue> PrimitiveKind for CodedKind<E> {
    type Value = E;

    fn decl() -> &'static TypeDecl {
        E::type_decl()
    }

    fn scalar(value: &E) -> Scalar<'_> {
        Scalar::String(value.code())
    }
}

/// Enumerated members of a required-strength value set
pub trait CodeValue: Copy + fmt::Debug + PartialEq + Eq + Send + Sync + 'static {
    fn code(&self) -> &'static str;

    fn from_code(code: &str) -> Option<Self>;

    fn type_decl() -> &'static TypeDecl;

    fn value_set() -> &'static str;
}

pub type FhirString = Primitive<StringKind>;
pub type Code = Primitive<CodeKind>;
pub type Id = Primitive<IdKind>;
pub type Uri = Primitive<UriKind>;
pub type Canonical = Primitive<CanonicalKind>;
pub type Markdown = Primitive<MarkdownKind>;
pub type Xhtml = Primitive<XhtmlKind>;
pub type Boolean = Primitive<BooleanKind>;
pub type Integer = Primitive<IntegerKind>;
pub type PositiveInt = Primitive<PositiveIntKind>;
pub type FhirDecimal = Primitive<DecimalKind>;
pub type Date = Primitive<DateKind>;
pub type DateTime = Primitive<DateTimeKind>;
pub type Instant = Primitive<InstantKind>;
pub type Coded<E> = Primitive<CodedKind<E>>;

/// Leaf node: an optional scalar plus the element id/extensions
pub struct Primitive<K: PrimitiveKind> {
    base: ElementBase,
    value: Option<K::Value>,
}

impl<K: PrimitiveKind> Primitive<K> {
    pub fn builder() -> PrimitiveBuilder<K> {
        PrimitiveBuilder::default()
    }

    /// Build a primitive holding `value`, applying the lexical rules.
    pub fn new(value: impl Into<K::Value>) -> Result<Self> {
        Self::builder().value(value).build()
    }

    pub fn value(&self) -> Option<&K::Value> {
        self.value.as_ref()
    }

    pub fn to_builder(&self) -> PrimitiveBuilder<K> {
        PrimitiveBuilder {
            base: ElementBuilder::from_base(&self.base),
            options: BuildOptions::default(),
            value: self.value.clone(),
        }
    }

    fn of(value: K::Value) -> Self {
        Self {
            base: ElementBase::default(),
            value: Some(value),
        }
    }
}

impl<K> Primitive<K>
where
    K: PrimitiveKind,
    K::Value: FromStr,
    <K::Value as FromStr>::Err: fmt::Display,
{
    /// Parse the lexical form of the value.
    pub fn parse(s: &str) -> Result<Self> {
        let value = s.parse::<K::Value>().map_err(|e| Error::InvalidPrimitiveValue {
            type_name: K::decl().name,
            reason: e.to_string(),
        })?;
        Self::new(value)
    }
}

impl<K: PrimitiveKind<Value = String>> Primitive<K> {
    pub fn as_str(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl<K: PrimitiveKind> fmt::Debug for Primitive<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(K::decl().name)
            .field("base", &self.base)
            .field("value", &self.value)
            .finish()
    }
}

impl<K: PrimitiveKind> Clone for Primitive<K> {
    fn clone(&self) -> Self {
        Self {
            base: self.base.clone(),
            value: self.value.clone(),
        }
    }
}

impl<K: PrimitiveKind> PartialEq for Primitive<K> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.base == other.base
    }
}

impl<K: PrimitiveKind> Node for Primitive<K> {
    fn type_decl(&self) -> &'static TypeDecl {
        K::decl()
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Primitive
    }

    fn id(&self) -> Option<&str> {
        self.base.id()
    }

    fn has_value(&self) -> bool {
        self.value.is_some()
    }

    fn has_children(&self) -> bool {
        !self.base.extension().is_empty()
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn hash_cache(&self) -> &HashCache {
        self.base.hash_cache()
    }
}

impl<K: PrimitiveKind> Element for Primitive<K> {
    fn element_base(&self) -> &ElementBase {
        &self.base
    }
}

impl<K: PrimitiveKind> Visitable for Primitive<K> {
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        walk(self, name, index, visitor, |v| {
            self.base.accept_children(v);
            if let Some(value) = &self.value {
                v.visit_value("value", K::scalar(value));
            }
        });
    }
}

impl<K: PrimitiveKind> Validate for Primitive<K> {
    fn check(&self, checker: &Checker) -> Result<()> {
        if let Some(value) = &self.value {
            K::check(value, checker.options()).map_err(|reason| Error::InvalidPrimitiveValue {
                type_name: checker.type_name(),
                reason,
            })?;
        }
        Ok(())
    }
}

pub struct PrimitiveBuilder<K: PrimitiveKind> {
    base: ElementBuilder,
    options: BuildOptions,
    value: Option<K::Value>,
}

impl<K: PrimitiveKind> Default for PrimitiveBuilder<K> {
    fn default() -> Self {
        Self {
            base: ElementBuilder::default(),
            options: BuildOptions::default(),
            value: None,
        }
    }
}

impl<K: PrimitiveKind> Clone for PrimitiveBuilder<K> {
    fn clone(&self) -> Self {
        Self {
            base: self.base.clone(),
            options: self.options,
            value: self.value.clone(),
        }
    }
}

impl<K: PrimitiveKind> fmt::Debug for PrimitiveBuilder<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrimitiveBuilder")
            .field("type", &K::decl().name)
            .field("base", &self.base)
            .field("value", &self.value)
            .finish()
    }
}

impl<K: PrimitiveKind> PrimitiveBuilder<K> {
    crate::element_builder_methods!();

    pub fn value(mut self, value: impl Into<K::Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn build(self) -> Result<Primitive<K>> {
        let node = Primitive {
            base: self.base.freeze(),
            value: self.value,
        };
        finish(node, self.options)
    }
}

impl From<bool> for Boolean {
    fn from(value: bool) -> Self {
        Self::of(value)
    }
}

impl From<i32> for Integer {
    fn from(value: i32) -> Self {
        Self::of(value)
    }
}

impl From<RustDecimal> for FhirDecimal {
    fn from(value: RustDecimal) -> Self {
        Self::of(value)
    }
}

impl From<DateValue> for Date {
    fn from(value: DateValue) -> Self {
        Self::of(value)
    }
}

impl From<NaiveDate> for Date {
    fn from(value: NaiveDate) -> Self {
        Self::of(DateValue::Date(value))
    }
}

impl From<DateTimeValue> for DateTime {
    fn from(value: DateTimeValue) -> Self {
        Self::of(value)
    }
}

impl From<chrono::DateTime<FixedOffset>> for DateTime {
    fn from(value: chrono::DateTime<FixedOffset>) -> Self {
        Self::of(DateTimeValue::DateTime(value))
    }
}

impl From<chrono::DateTime<FixedOffset>> for Instant {
    fn from(value: chrono::DateTime<FixedOffset>) -> Self {
        Self::of(value)
    }
}

impl<E: CodeValue> From<E> for Coded<E> {
    fn from(value: E) -> Self {
        Self::of(value)
    }
}

/// A `date` with year, year-month or full-date precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateValue {
    Year(i32),
    YearMonth(i32, u32),
    Date(NaiveDate),
}

impl FromStr for DateValue {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let invalid = || format!("Invalid date value: '{}'", s);
        fn digits(part: &str, len: usize) -> bool {
            part.len() == len && part.bytes().all(|b| b.is_ascii_digit())
        }

        let parts: Vec<&str> = s.split('-').collect();

        match parts.as_slice() {
            [year] if digits(year, 4) => year.parse().map(DateValue::Year).map_err(|_| invalid()),
            [year, month] if digits(year, 4) && digits(month, 2) => {
                let year = year.parse().map_err(|_| invalid())?;
                let month: u32 = month.parse().map_err(|_| invalid())?;
                if !(1..=12).contains(&month) {
                    return Err(invalid());
                }
                Ok(DateValue::YearMonth(year, month))
            }
            [year, month, day] if digits(year, 4) && digits(month, 2) && digits(day, 2) => {
                NaiveDate::parse_from_str(s, "%Y-%m-%d")
                    .map(DateValue::Date)
                    .map_err(|_| invalid())
            }
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateValue::Year(year) => write!(f, "{:04}", year),
            DateValue::YearMonth(year, month) => write!(f, "{:04}-{:02}", year, month),
            DateValue::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
        }
    }
}

/// A `dateTime`: partial date precision or a full timestamp with offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateTimeValue {
    Partial(DateValue),
    DateTime(chrono::DateTime<FixedOffset>),
}

impl FromStr for DateTimeValue {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.contains('T') {
            chrono::DateTime::parse_from_rfc3339(s)
                .map(DateTimeValue::DateTime)
                .map_err(|e| format!("Invalid dateTime value: '{}': {}", s, e))
        } else {
            s.parse().map(DateTimeValue::Partial)
        }
    }
}

impl fmt::Display for DateTimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateTimeValue::Partial(date) => write!(f, "{}", date),
            DateTimeValue::DateTime(dt) => f.write_str(&dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
        }
    }
}

/// Generate a value-set enum implementing [`CodeValue`].
///
/// ```
/// ferrum_models::code_enum! {
///     /// How a narrative was produced
///     pub enum NarrativeOrigin("http://example.org/ValueSet/origin") {
///         Generated => "generated",
///         Authored => "authored",
///     }
/// }
///
/// use ferrum_models::primitive::CodeValue;
/// assert_eq!(NarrativeOrigin::from_code("authored"), Some(NarrativeOrigin::Authored));
/// ```
#[macro_export]
macro_rules! code_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident($value_set:literal) {
            $($variant:ident => $code:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($variant),+
        }

        impl $crate::primitive::CodeValue for $name {
            fn code(&self) -> &'static str {
                match self {
                    $(Self::$variant => $code),+
                }
            }

            fn from_code(code: &str) -> Option<Self> {
                match code {
                    $($code => Some(Self::$variant),)+
                    _ => None,
                }
            }

            fn type_decl() -> &'static $crate::schema::TypeDecl {
                static DECL: $crate::schema::TypeDecl = $crate::schema::TypeDecl::new(
                    stringify!($name),
                    $crate::schema::TypeKind::PrimitiveType,
                    Some("code"),
                    &[],
                );
                &DECL
            }

            fn value_set() -> &'static str {
                $value_set
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::primitive::CodeValue::code(self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::Error;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                <Self as $crate::primitive::CodeValue>::from_code(s).ok_or_else(|| {
                    $crate::Error::InvalidPrimitiveValue {
                        type_name: stringify!($name),
                        reason: format!("'{}' is not a valid code for value set '{}'", s, $value_set),
                    }
                })
            }
        }
    };
}

pub(crate) fn primitive_type_decls() -> Vec<&'static TypeDecl> {
    vec![
        StringKind::decl(),
        CodeKind::decl(),
        IdKind::decl(),
        UriKind::decl(),
        CanonicalKind::decl(),
        MarkdownKind::decl(),
        XhtmlKind::decl(),
        BooleanKind::decl(),
        IntegerKind::decl(),
        PositiveIntKind::decl(),
        DecimalKind::decl(),
        DateKind::decl(),
        DateTimeKind::decl(),
        InstantKind::decl(),
    ]
}

fn is_allowed_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\r' | '\n')
}

/// Control characters below U+0020 other than tab, line feed and carriage return
fn is_unsupported_control_char(ch: char) -> bool {
    matches!(ch, '\u{0}'..='\u{8}' | '\u{b}' | '\u{c}' | '\u{e}'..='\u{1f}')
}

fn check_control_char(s: &str, ch: char, options: &BuildOptions) -> std::result::Result<(), String> {
    if options.check_control_chars && is_unsupported_control_char(ch) {
        return Err(format!("String value contains unsupported control characters: value=[{}]", s));
    }
    Ok(())
}

fn check_max_length(kind: &str, s: &str, options: &BuildOptions) -> std::result::Result<(), String> {
    if s.len() > options.max_string_length {
        return Err(format!(
            "{} value length: {} is greater than maximum allowed length: {}",
            kind,
            s.len(),
            options.max_string_length
        ));
    }
    Ok(())
}

/// `[ \r\n\t\S]+`
pub(crate) fn check_string(s: &str, options: &BuildOptions) -> std::result::Result<(), String> {
    check_max_length("String", s, options)?;
    let mut count = 0;
    for ch in s.chars() {
        if !ch.is_whitespace() {
            check_control_char(s, ch, options)?;
            count += 1;
        } else if !is_allowed_whitespace(ch) {
            return Err(format!(
                "String value: '{}' is not valid with respect to pattern: [ \\r\\n\\t\\S]+",
                s
            ));
        }
    }
    if count == 0 {
        return Err("Trimmed String value length: 0 is less than minimum required length: 1".to_string());
    }
    Ok(())
}

/// `[^\s]+(\s[^\s]+)*`
pub(crate) fn check_code(s: &str, options: &BuildOptions) -> std::result::Result<(), String> {
    match (s.chars().next(), s.chars().last()) {
        (Some(first), _) if first.is_whitespace() => {
            return Err(format!("Code value: '{}' must begin with a non-whitespace character", s))
        }
        (None, _) => return Err(format!("Code value: '{}' must begin with a non-whitespace character", s)),
        (_, Some(last)) if last.is_whitespace() => {
            return Err(format!("Code value: '{}' must end with a non-whitespace character", s))
        }
        _ => {}
    }

    let mut previous_is_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if ch != ' ' {
                return Err(format!(
                    "Code value: '{}' must not contain whitespace other than a single space",
                    s
                ));
            }
            if previous_is_space {
                return Err(format!("Code value: '{}' must not contain consecutive spaces", s));
            }
            previous_is_space = true;
        } else {
            check_control_char(s, ch, options)?;
            previous_is_space = false;
        }
    }
    Ok(())
}

/// `[A-Za-z0-9\-\.]{1,64}`
pub(crate) fn check_id(s: &str) -> std::result::Result<(), String> {
    if s.is_empty() {
        return Err("Id value must not be empty".to_string());
    }
    if s.len() > ID_MAX_LENGTH {
        return Err(format!(
            "Id value length: {} is greater than maximum allowed length: {}",
            s.len(),
            ID_MAX_LENGTH
        ));
    }
    if let Some(c) = s.chars().find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '.')) {
        return Err(format!("Id value: '{}' contain invalid character '{}'", s, c));
    }
    Ok(())
}

fn check_id_with_options(s: &str, _options: &BuildOptions) -> std::result::Result<(), String> {
    check_id(s)
}

/// `\S*`
pub(crate) fn check_uri(s: &str, options: &BuildOptions) -> std::result::Result<(), String> {
    check_max_length("Uri", s, options)?;
    for ch in s.chars() {
        check_control_char(s, ch, options)?;
        if ch.is_whitespace() {
            return Err(format!("Uri value: '{}' must not contain whitespace", s));
        }
    }
    Ok(())
}

fn check_xhtml(s: &str, _options: &BuildOptions) -> std::result::Result<(), String> {
    if !s.trim_start().starts_with("<div") {
        return Err("Invalid XHTML content: root element must be <div>".to_string());
    }
    Ok(())
}
