//! Settings validation contracts.
//!
//! Every [`ComponentDeclaration`](crate::ComponentDeclaration) owns a [`SettingsSchema`]
//! that turns the raw `settings` object of an instance into a typed
//! [`ComponentSettings`] value, or explains why it cannot.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::any::type_name;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt::{self, Debug, Display};
use std::marker::PhantomData;
use tessera_domain::components::ComponentSettings;

#[tessera_derive::tessera_error]
pub enum SchemaError {
    /// The object does not deserialize into the component's settings type.
    #[error("{source}{}", format_context(.context))]
    Deserialize { source: serde_json::Error, context: Option<Cow<'static, str>> },
    /// Deserialized, but a semantic constraint does not hold.
    #[error("{message}{}", format_context(.context))]
    Constraint { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    #[error("missing required field `{field}`")]
    MissingField { field: String },
    #[error("field `{field}` must be of type {expected}")]
    FieldType { field: String, expected: FieldType },
    #[error("unexpected field `{field}`")]
    UnexpectedField { field: String },
}

impl SchemaError {
    pub fn constraint(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Constraint { message: message.into(), context: None }
    }
}

/// Validates the raw settings object of a component instance.
pub trait SettingsSchema: Debug + Send + Sync {
    /// Validates `settings` and produces the typed value stored on the instance.
    ///
    /// # Errors
    /// Returns a [`SchemaError`] describing the first violation found.
    fn validate(&self, settings: &Map<String, Value>) -> Result<ComponentSettings, SchemaError>;

    /// Short label for listings (`typed`, `fields`, `open`).
    fn kind(&self) -> &'static str;
}

type Check<T> = fn(&T) -> Result<(), SchemaError>;

/// Serde-backed schema for the built-in settings types.
///
/// Unknown fields are rejected by the target type itself (`deny_unknown_fields`); the
/// optional `check` hook enforces constraints serde cannot express.
pub struct TypedSchema<T> {
    check: Option<Check<T>>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> TypedSchema<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self { check: None, _marker: PhantomData }
    }

    #[must_use]
    pub const fn with_check(check: Check<T>) -> Self {
        Self { check: Some(check), _marker: PhantomData }
    }
}

impl<T> Default for TypedSchema<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Debug for TypedSchema<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedSchema")
            .field("type", &type_name::<T>())
            .field("checked", &self.check.is_some())
            .finish()
    }
}

impl<T> SettingsSchema for TypedSchema<T>
where
    T: DeserializeOwned + Into<ComponentSettings> + 'static,
{
    fn validate(&self, settings: &Map<String, Value>) -> Result<ComponentSettings, SchemaError> {
        let typed: T = serde_json::from_value(Value::Object(settings.clone()))?;
        if let Some(check) = self.check {
            check(&typed)?;
        }
        Ok(typed.into())
    }

    fn kind(&self) -> &'static str {
        "typed"
    }
}

/// JSON type a [`FieldSpec`] accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Number,
    Integer,
    Boolean,
    Array,
    Object,
    Any,
}

impl FieldType {
    #[must_use]
    pub fn accepts(self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Number => value.is_number(),
            Self::Integer => value.is_i64() || value.is_u64(),
            Self::Boolean => value.is_boolean(),
            Self::Array => value.is_array(),
            Self::Object => value.is_object(),
            Self::Any => true,
        }
    }
}

impl Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Array => "array",
            Self::Object => "object",
            Self::Any => "any",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FieldSpec {
    #[serde(rename = "type")]
    pub kind: FieldType,
    #[serde(default)]
    pub required: bool,
}

/// Declarative schema for components declared in a manifest.
///
/// Produces [`ComponentSettings::Custom`] holding the validated object unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct FieldSchema {
    pub fields: BTreeMap<String, FieldSpec>,
    /// Accept keys not listed in `fields`.
    pub additional_fields: bool,
}

impl FieldSchema {
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, kind: FieldType, required: bool) -> Self {
        self.fields.insert(name.into(), FieldSpec { kind, required });
        self
    }

    #[must_use]
    pub const fn allow_additional(mut self, allow: bool) -> Self {
        self.additional_fields = allow;
        self
    }
}

impl SettingsSchema for FieldSchema {
    fn validate(&self, settings: &Map<String, Value>) -> Result<ComponentSettings, SchemaError> {
        for (name, spec) in &self.fields {
            match settings.get(name) {
                None if spec.required => {
                    return Err(SchemaError::MissingField { field: name.clone() });
                },
                Some(value) if !spec.kind.accepts(value) => {
                    return Err(SchemaError::FieldType { field: name.clone(), expected: spec.kind });
                },
                _ => {},
            }
        }

        if !self.additional_fields
            && let Some(extra) = settings.keys().find(|key| !self.fields.contains_key(*key))
        {
            return Err(SchemaError::UnexpectedField { field: extra.clone() });
        }

        Ok(ComponentSettings::Custom(settings.clone()))
    }

    fn kind(&self) -> &'static str {
        "fields"
    }
}

/// Accepts any settings object.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenSchema;

impl SettingsSchema for OpenSchema {
    fn validate(&self, settings: &Map<String, Value>) -> Result<ComponentSettings, SchemaError> {
        Ok(ComponentSettings::Custom(settings.clone()))
    }

    fn kind(&self) -> &'static str {
        "open"
    }
}
