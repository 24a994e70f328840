//! Field definitions for entities.

use chrono::{DateTime, NaiveDateTime, Utc};
use rkyv::{Archive, Deserialize, Serialize};
use rust_decimal::Decimal;

use super::types::{ColumnType, Rejection, ScalarType};
use crate::error::ConstraintError;
use crate::value::Value;

/// A field definition within an entity.
#[derive(Debug, Clone, PartialEq, Archive, Serialize, Deserialize)]
pub struct FieldDef {
    /// Column name.
    pub name: String,
    /// Declared column type.
    pub column_type: ColumnType,
    /// Whether NULL is accepted.
    pub nullable: bool,
    /// Part of the primary key.
    pub primary_key: bool,
    /// Carries a lookup index.
    pub indexed: bool,
    /// Carries a single-column unique index.
    pub unique: bool,
    /// Server default applied when the field is not supplied on insert.
    pub default: Option<DefaultValue>,
    /// Refreshed with the current time on every update.
    pub auto_update: bool,
    /// Foreign key, if the column references another entity.
    pub foreign_key: Option<ForeignKey>,
    /// Column comment from the database schema.
    pub comment: Option<String>,
}

/// Server-side default for a field.
#[derive(Debug, Clone, PartialEq, Archive, Serialize, Deserialize)]
pub enum DefaultValue {
    /// Integer literal.
    Int(i64),
    /// Floating point literal.
    Float(f64),
    /// String literal.
    String(String),
    /// Current time at insert.
    CurrentTimestamp,
    /// MySQL zero date (`0000-00-00 00:00:00`).
    ZeroTimestamp,
}

/// Referential action on delete or key update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Archive, Serialize, Deserialize)]
pub enum ReferentialAction {
    /// Reject the change while dependents exist.
    #[default]
    Restrict,
    /// Propagate the change to dependents.
    Cascade,
    /// Null out the referencing column.
    SetNull,
}

/// Foreign key from a field to a primary-key field of another (or the same) entity.
#[derive(Debug, Clone, PartialEq, Archive, Serialize, Deserialize)]
pub struct ForeignKey {
    /// Referenced entity.
    pub entity: String,
    /// Referenced field.
    pub field: String,
    /// Action when the referenced row is deleted.
    pub on_delete: ReferentialAction,
    /// Action when the referenced key changes.
    pub on_update: ReferentialAction,
}

impl ForeignKey {
    /// Reference `entity.field` with restricting actions.
    pub fn to(entity: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            field: field.into(),
            on_delete: ReferentialAction::Restrict,
            on_update: ReferentialAction::Restrict,
        }
    }

    /// Set the delete action.
    pub fn on_delete(mut self, action: ReferentialAction) -> Self {
        self.on_delete = action;
        self
    }

    /// Set the key-update action.
    pub fn on_update(mut self, action: ReferentialAction) -> Self {
        self.on_update = action;
        self
    }
}

impl FieldDef {
    /// Create a nullable field.
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            nullable: true,
            primary_key: false,
            indexed: false,
            unique: false,
            default: None,
            auto_update: false,
            foreign_key: None,
            comment: None,
        }
    }

    /// Reject NULL.
    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    /// Mark as (part of) the primary key. Key fields are never nullable.
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self.nullable = false;
        self
    }

    /// Mark as indexed.
    pub fn indexed(mut self) -> Self {
        self.indexed = true;
        self
    }

    /// Mark as unique.
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Set the default value.
    pub fn with_default(mut self, default: DefaultValue) -> Self {
        self.default = Some(default);
        self
    }

    /// Refresh with the current time on update.
    pub fn auto_update(mut self) -> Self {
        self.auto_update = true;
        self
    }

    /// Attach a column comment.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Reference another entity.
    pub fn references(mut self, foreign_key: ForeignKey) -> Self {
        self.foreign_key = Some(foreign_key);
        self
    }

    /// Semantic type of the column.
    pub fn scalar_type(&self) -> ScalarType {
        self.column_type.scalar_type()
    }

    /// Check if this field has a default value.
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /// Validate a value against nullability and the column's type rule.
    pub fn validate(&self, entity: &str, value: &Value) -> Result<(), ConstraintError> {
        if value.is_null() {
            if self.nullable {
                return Ok(());
            }
            return Err(ConstraintError::NotNull {
                entity: entity.to_string(),
                field: self.name.clone(),
            });
        }

        let scalar = self.scalar_type();
        scalar.check(value).map_err(|rejection| match rejection {
            Rejection::Mismatch => ConstraintError::TypeMismatch {
                entity: entity.to_string(),
                field: self.name.clone(),
                expected: scalar.describe(),
                found: value.kind().to_string(),
            },
            Rejection::OutOfRange { value, min, max } => ConstraintError::OutOfRange {
                entity: entity.to_string(),
                field: self.name.clone(),
                value,
                min,
                max,
            },
            Rejection::TooLong { max_length, length } => ConstraintError::TooLong {
                entity: entity.to_string(),
                field: self.name.clone(),
                max_length,
                length,
            },
            Rejection::NotInEnum => ConstraintError::InvalidEnumValue {
                entity: entity.to_string(),
                field: self.name.clone(),
                value: value.to_concat_string().unwrap_or_default(),
            },
        })
    }

    /// Materialize the default for this column at time `now`.
    pub fn default_value(&self, now: NaiveDateTime) -> Option<Value> {
        let default = self.default.as_ref()?;
        let scalar = self.scalar_type();
        Some(match default {
            DefaultValue::Int(v) => match scalar {
                ScalarType::Float => Value::Float(*v as f64),
                ScalarType::Decimal => Value::Decimal(Decimal::from(*v)),
                ScalarType::String { .. } | ScalarType::Enum { .. } => Value::String(v.to_string()),
                _ => Value::Int(*v),
            },
            DefaultValue::Float(v) => Value::Float(*v),
            DefaultValue::String(s) => match scalar {
                ScalarType::Integer { .. } => s.parse().map(Value::Int).unwrap_or(Value::Null),
                _ => Value::String(s.clone()),
            },
            DefaultValue::CurrentTimestamp => match scalar {
                ScalarType::Date => Value::Date(now.date()),
                _ => Value::DateTime(now),
            },
            DefaultValue::ZeroTimestamp => Value::DateTime(DateTime::<Utc>::UNIX_EPOCH.naive_utc()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_field_def_builder() {
        let field = FieldDef::new("proposalId", ColumnType::int(10))
            .not_null()
            .indexed()
            .with_default(DefaultValue::Int(0))
            .references(
                ForeignKey::to("Proposal", "proposalId").on_delete(ReferentialAction::Cascade),
            );

        assert_eq!(field.name, "proposalId");
        assert!(!field.nullable);
        assert!(field.indexed);
        assert!(field.has_default());
        let fk = field.foreign_key.as_ref().unwrap();
        assert_eq!(fk.entity, "Proposal");
        assert_eq!(fk.on_delete, ReferentialAction::Cascade);
        assert_eq!(fk.on_update, ReferentialAction::Restrict);
    }

    #[test]
    fn test_primary_key_is_not_nullable() {
        let field = FieldDef::new("proteinId", ColumnType::int(10)).primary_key();
        assert!(field.primary_key);
        assert!(!field.nullable);
    }

    #[test]
    fn test_validate_null() {
        let optional = FieldDef::new("title", ColumnType::varchar(200));
        assert!(optional.validate("Proposal", &Value::Null).is_ok());

        let required = FieldDef::new("name", ColumnType::varchar(31)).not_null();
        assert_eq!(
            required.validate("ConcentrationType", &Value::Null),
            Err(ConstraintError::NotNull {
                entity: "ConcentrationType".into(),
                field: "name".into()
            })
        );
    }

    #[test]
    fn test_validate_enum() {
        let field = FieldDef::new("state", ColumnType::enumeration(&["Open", "Closed", "Cancelled"]));
        assert!(field.validate("Proposal", &Value::from("Closed")).is_ok());
        assert!(matches!(
            field.validate("Proposal", &Value::from("Pending")),
            Err(ConstraintError::InvalidEnumValue { .. })
        ));
    }

    #[test]
    fn test_validate_type_mismatch() {
        let field = FieldDef::new("visit_number", ColumnType::int(10));
        let err = field.validate("BLSession", &Value::from("three")).unwrap_err();
        assert!(matches!(err, ConstraintError::TypeMismatch { ref found, .. } if found == "string"));
    }

    #[test]
    fn test_default_materialization() {
        let counter = FieldDef::new("hazardGroup", ColumnType::tinyint(3))
            .with_default(DefaultValue::Int(1));
        assert_eq!(counter.default_value(now()), Some(Value::Int(1)));

        let state = FieldDef::new("state", ColumnType::enumeration(&["Open", "Closed"]))
            .with_default(DefaultValue::String("Open".into()));
        assert_eq!(state.default_value(now()), Some(Value::from("Open")));

        let stamp = FieldDef::new("bltimeStamp", ColumnType::Timestamp)
            .with_default(DefaultValue::CurrentTimestamp);
        assert_eq!(stamp.default_value(now()), Some(Value::DateTime(now())));

        let zero = FieldDef::new("lastUpdate", ColumnType::Timestamp)
            .with_default(DefaultValue::ZeroTimestamp);
        assert_eq!(
            zero.default_value(now()),
            Some(Value::DateTime(DateTime::<Utc>::UNIX_EPOCH.naive_utc()))
        );

        assert_eq!(FieldDef::new("x", ColumnType::float()).default_value(now()), None);
    }
}
