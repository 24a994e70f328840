//! Column type descriptors and the semantic types they map to.

use rkyv::{Archive, Deserialize, Serialize};

use crate::value::Value;

/// Integer column kinds, by storage width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Archive, Serialize, Deserialize)]
pub enum IntegerKind {
    /// 8-bit.
    TinyInt,
    /// 16-bit.
    SmallInt,
    /// 24-bit.
    MediumInt,
    /// 32-bit.
    Int,
    /// 64-bit.
    BigInt,
}

impl IntegerKind {
    fn bits(self) -> u32 {
        match self {
            IntegerKind::TinyInt => 8,
            IntegerKind::SmallInt => 16,
            IntegerKind::MediumInt => 24,
            IntegerKind::Int => 32,
            IntegerKind::BigInt => 64,
        }
    }

    /// Display width MySQL reports for the unsigned variant.
    fn unsigned_width(self) -> u8 {
        match self {
            IntegerKind::TinyInt => 3,
            IntegerKind::SmallInt => 5,
            IntegerKind::MediumInt => 8,
            IntegerKind::Int => 10,
            IntegerKind::BigInt => 20,
        }
    }

    fn sql_name(self) -> &'static str {
        match self {
            IntegerKind::TinyInt => "tinyint",
            IntegerKind::SmallInt => "smallint",
            IntegerKind::MediumInt => "mediumint",
            IntegerKind::Int => "int",
            IntegerKind::BigInt => "bigint",
        }
    }
}

/// Text column kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Archive, Serialize, Deserialize)]
pub enum TextKind {
    /// TINYTEXT.
    TinyText,
    /// TEXT.
    Text,
    /// MEDIUMTEXT.
    MediumText,
}

/// Large binary column kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Archive, Serialize, Deserialize)]
pub enum BlobKind {
    /// BLOB.
    Blob,
    /// LONGBLOB.
    LongBlob,
}

/// Database column type as declared in the schema.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
pub enum ColumnType {
    /// Integer with MySQL display width; the width encodes signedness.
    Integer {
        /// Storage kind.
        kind: IntegerKind,
        /// Declared display width.
        display_width: u8,
    },
    /// Floating point column.
    Float {
        /// Read back as an exact decimal rather than binary float.
        exact: bool,
        /// Declared binary precision, if any.
        precision: Option<u8>,
    },
    /// Variable-length text with a character limit.
    Varchar {
        /// Maximum length in characters.
        max_length: u32,
    },
    /// Unbounded text.
    Text(TextKind),
    /// Fixed-length binary.
    Binary {
        /// Length in bytes.
        length: u32,
    },
    /// Large binary payload.
    Blob(BlobKind),
    /// Calendar date.
    Date,
    /// Date and time.
    DateTime,
    /// Timestamp, usually server-generated.
    Timestamp,
    /// Closed set of string literals.
    Enum {
        /// Permitted values in declaration order.
        values: Vec<String>,
    },
}

/// Semantic type of a column: in-memory representation plus validation rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScalarType {
    /// Bounded whole number.
    Integer {
        /// Smallest accepted value.
        min: i64,
        /// Largest accepted value.
        max: i64,
    },
    /// Binary floating point.
    Float,
    /// Exact decimal.
    Decimal,
    /// Text with optional maximum length in characters.
    String {
        /// Maximum length.
        max_length: Option<u32>,
    },
    /// Opaque bytes with optional maximum length.
    Bytes {
        /// Maximum length.
        max_length: Option<u32>,
    },
    /// Calendar date.
    Date,
    /// Date and time.
    DateTime,
    /// Closed set of strings.
    Enum {
        /// Permitted values.
        values: Vec<String>,
    },
}

/// Why a value was rejected by a [`ScalarType`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Wrong value kind.
    Mismatch,
    /// Integer outside `[min, max]`.
    OutOfRange {
        /// Offending value.
        value: i64,
        /// Lower bound.
        min: i64,
        /// Upper bound.
        max: i64,
    },
    /// Longer than the declared maximum.
    TooLong {
        /// Declared maximum.
        max_length: u32,
        /// Actual length.
        length: usize,
    },
    /// Not a member of the enumeration.
    NotInEnum,
}

impl ColumnType {
    /// Integer column of the given display width.
    pub fn int(display_width: u8) -> Self {
        ColumnType::Integer {
            kind: IntegerKind::Int,
            display_width,
        }
    }

    /// TINYINT column of the given display width.
    pub fn tinyint(display_width: u8) -> Self {
        ColumnType::Integer {
            kind: IntegerKind::TinyInt,
            display_width,
        }
    }

    /// SMALLINT column of the given display width.
    pub fn smallint(display_width: u8) -> Self {
        ColumnType::Integer {
            kind: IntegerKind::SmallInt,
            display_width,
        }
    }

    /// MEDIUMINT column of the given display width.
    pub fn mediumint(display_width: u8) -> Self {
        ColumnType::Integer {
            kind: IntegerKind::MediumInt,
            display_width,
        }
    }

    /// BIGINT column of the given display width.
    pub fn bigint(display_width: u8) -> Self {
        ColumnType::Integer {
            kind: IntegerKind::BigInt,
            display_width,
        }
    }

    /// Binary floating point.
    pub fn float() -> Self {
        ColumnType::Float {
            exact: false,
            precision: None,
        }
    }

    /// Binary floating point with declared precision.
    pub fn float_precision(precision: u8) -> Self {
        ColumnType::Float {
            exact: false,
            precision: Some(precision),
        }
    }

    /// Floating point column read back as an exact decimal.
    pub fn decimal() -> Self {
        ColumnType::Float {
            exact: true,
            precision: None,
        }
    }

    /// VARCHAR(n).
    pub fn varchar(max_length: u32) -> Self {
        ColumnType::Varchar { max_length }
    }

    /// TEXT.
    pub fn text() -> Self {
        ColumnType::Text(TextKind::Text)
    }

    /// TINYTEXT.
    pub fn tiny_text() -> Self {
        ColumnType::Text(TextKind::TinyText)
    }

    /// MEDIUMTEXT.
    pub fn medium_text() -> Self {
        ColumnType::Text(TextKind::MediumText)
    }

    /// BINARY(n).
    pub fn binary(length: u32) -> Self {
        ColumnType::Binary { length }
    }

    /// BLOB.
    pub fn large_binary() -> Self {
        ColumnType::Blob(BlobKind::Blob)
    }

    /// LONGBLOB.
    pub fn long_blob() -> Self {
        ColumnType::Blob(BlobKind::LongBlob)
    }

    /// ENUM over the given literals.
    pub fn enumeration(values: &[&str]) -> Self {
        ColumnType::Enum {
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }

    /// Whether an integer column is unsigned.
    ///
    /// MySQL reports the display width of the unsigned variant one narrower than
    /// the signed one (`int(10)` vs `int(11)`). BIGINT is always read as signed.
    pub fn is_unsigned(&self) -> bool {
        match self {
            ColumnType::Integer {
                kind,
                display_width,
            } => *kind != IntegerKind::BigInt && *display_width == kind.unsigned_width(),
            _ => false,
        }
    }

    /// The semantic type of this descriptor.
    pub fn scalar_type(&self) -> ScalarType {
        match self {
            ColumnType::Integer { kind, .. } => {
                let bits = kind.bits();
                if *kind == IntegerKind::BigInt {
                    ScalarType::Integer {
                        min: if self.is_unsigned() { 0 } else { i64::MIN },
                        max: i64::MAX,
                    }
                } else if self.is_unsigned() {
                    ScalarType::Integer {
                        min: 0,
                        max: (1i64 << bits) - 1,
                    }
                } else {
                    ScalarType::Integer {
                        min: -(1i64 << (bits - 1)),
                        max: (1i64 << (bits - 1)) - 1,
                    }
                }
            }
            ColumnType::Float { exact: true, .. } => ScalarType::Decimal,
            ColumnType::Float { exact: false, .. } => ScalarType::Float,
            ColumnType::Varchar { max_length } => ScalarType::String {
                max_length: Some(*max_length),
            },
            ColumnType::Text(kind) => ScalarType::String {
                max_length: match kind {
                    TextKind::TinyText => Some(255),
                    TextKind::Text => Some(65_535),
                    TextKind::MediumText => Some(16_777_215),
                },
            },
            ColumnType::Binary { length } => ScalarType::Bytes {
                max_length: Some(*length),
            },
            ColumnType::Blob(kind) => ScalarType::Bytes {
                max_length: match kind {
                    BlobKind::Blob => Some(65_535),
                    BlobKind::LongBlob => None,
                },
            },
            ColumnType::Date => ScalarType::Date,
            ColumnType::DateTime | ColumnType::Timestamp => ScalarType::DateTime,
            ColumnType::Enum { values } => ScalarType::Enum {
                values: values.clone(),
            },
        }
    }

    /// MySQL DDL spelling of the column type.
    pub fn sql_type(&self) -> String {
        match self {
            ColumnType::Integer {
                kind,
                display_width,
            } => {
                let mut sql = format!("{}({})", kind.sql_name(), display_width);
                if self.is_unsigned() {
                    sql.push_str(" unsigned");
                }
                sql
            }
            ColumnType::Float { exact: true, .. } => "double".to_string(),
            ColumnType::Float {
                precision: Some(p), ..
            } => format!("float({})", p),
            ColumnType::Float { .. } => "float".to_string(),
            ColumnType::Varchar { max_length } => format!("varchar({})", max_length),
            ColumnType::Text(TextKind::TinyText) => "tinytext".to_string(),
            ColumnType::Text(TextKind::Text) => "text".to_string(),
            ColumnType::Text(TextKind::MediumText) => "mediumtext".to_string(),
            ColumnType::Binary { length } => format!("binary({})", length),
            ColumnType::Blob(BlobKind::Blob) => "blob".to_string(),
            ColumnType::Blob(BlobKind::LongBlob) => "longblob".to_string(),
            ColumnType::Date => "date".to_string(),
            ColumnType::DateTime => "datetime".to_string(),
            ColumnType::Timestamp => "timestamp".to_string(),
            ColumnType::Enum { values } => {
                let quoted: Vec<String> = values
                    .iter()
                    .map(|v| format!("'{}'", v.replace('\'', "''")))
                    .collect();
                format!("enum({})", quoted.join(","))
            }
        }
    }

    /// Check if this is an integer column.
    pub fn is_integer(&self) -> bool {
        matches!(self, ColumnType::Integer { .. })
    }
}

impl ScalarType {
    /// Check a non-null value against the rule.
    pub fn check(&self, value: &Value) -> Result<(), Rejection> {
        match (self, value) {
            (ScalarType::Integer { min, max }, Value::Int(v)) => {
                if v < min || v > max {
                    Err(Rejection::OutOfRange {
                        value: *v,
                        min: *min,
                        max: *max,
                    })
                } else {
                    Ok(())
                }
            }
            (ScalarType::Float, Value::Float(_) | Value::Int(_)) => Ok(()),
            (ScalarType::Decimal, Value::Decimal(_) | Value::Int(_)) => Ok(()),
            (ScalarType::String { max_length }, Value::String(s)) => {
                check_length(*max_length, s.chars().count())
            }
            (ScalarType::Bytes { max_length }, Value::Bytes(b)) => check_length(*max_length, b.len()),
            (ScalarType::Date, Value::Date(_)) => Ok(()),
            (ScalarType::DateTime, Value::DateTime(_)) => Ok(()),
            (ScalarType::Enum { values }, Value::String(s)) => {
                if values.iter().any(|v| v == s) {
                    Ok(())
                } else {
                    Err(Rejection::NotInEnum)
                }
            }
            _ => Err(Rejection::Mismatch),
        }
    }

    /// Whether a non-null value satisfies the rule.
    pub fn accepts(&self, value: &Value) -> bool {
        self.check(value).is_ok()
    }

    /// Human-readable name used in error messages.
    pub fn describe(&self) -> String {
        match self {
            ScalarType::Integer { min, max } => format!("integer in [{}, {}]", min, max),
            ScalarType::Float => "float".to_string(),
            ScalarType::Decimal => "decimal".to_string(),
            ScalarType::String { .. } => "string".to_string(),
            ScalarType::Bytes { .. } => "bytes".to_string(),
            ScalarType::Date => "date".to_string(),
            ScalarType::DateTime => "datetime".to_string(),
            ScalarType::Enum { values } => format!("one of {}", values.join("|")),
        }
    }
}

fn check_length(max_length: Option<u32>, length: usize) -> Result<(), Rejection> {
    match max_length {
        Some(max) if length > max as usize => Err(Rejection::TooLong {
            max_length: max,
            length,
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_display_width_signedness() {
        assert!(ColumnType::int(10).is_unsigned());
        assert!(!ColumnType::int(11).is_unsigned());
        assert!(ColumnType::tinyint(3).is_unsigned());
        assert!(!ColumnType::tinyint(1).is_unsigned());
        assert!(!ColumnType::bigint(20).is_unsigned());
    }

    #[test]
    fn test_integer_bounds() {
        assert_eq!(
            ColumnType::int(10).scalar_type(),
            ScalarType::Integer {
                min: 0,
                max: 4_294_967_295
            }
        );
        assert_eq!(
            ColumnType::tinyint(1).scalar_type(),
            ScalarType::Integer { min: -128, max: 127 }
        );
        assert_eq!(
            ColumnType::mediumint(8).scalar_type(),
            ScalarType::Integer {
                min: 0,
                max: 16_777_215
            }
        );

        let unsigned = ColumnType::int(10).scalar_type();
        assert!(unsigned.accepts(&Value::Int(0)));
        assert_eq!(
            unsigned.check(&Value::Int(-1)),
            Err(Rejection::OutOfRange {
                value: -1,
                min: 0,
                max: 4_294_967_295
            })
        );
    }

    #[test]
    fn test_float_mapping() {
        assert_eq!(ColumnType::float().scalar_type(), ScalarType::Float);
        assert_eq!(ColumnType::decimal().scalar_type(), ScalarType::Decimal);
        assert!(ScalarType::Decimal.accepts(&Value::Decimal(Decimal::new(15, 1))));
        assert!(!ScalarType::Decimal.accepts(&Value::Float(1.5)));
        assert!(ScalarType::Float.accepts(&Value::Int(2)));
    }

    #[test]
    fn test_varchar_length_in_characters() {
        let scalar = ColumnType::varchar(2).scalar_type();
        assert!(scalar.accepts(&Value::from("MX")));
        assert!(scalar.accepts(&Value::from("éè")));
        assert_eq!(
            scalar.check(&Value::from("MXB")),
            Err(Rejection::TooLong {
                max_length: 2,
                length: 3
            })
        );
    }

    #[test]
    fn test_enum_membership() {
        let scalar = ColumnType::enumeration(&["Open", "Closed"]).scalar_type();
        assert!(scalar.accepts(&Value::from("Open")));
        assert_eq!(scalar.check(&Value::from("open")), Err(Rejection::NotInEnum));
        assert_eq!(scalar.check(&Value::Int(1)), Err(Rejection::Mismatch));
    }

    #[test]
    fn test_binary_length() {
        let scalar = ColumnType::binary(16).scalar_type();
        assert!(scalar.accepts(&Value::Bytes(vec![0; 16])));
        assert!(!scalar.accepts(&Value::Bytes(vec![0; 17])));
    }

    #[test]
    fn test_sql_type() {
        assert_eq!(ColumnType::int(10).sql_type(), "int(10) unsigned");
        assert_eq!(ColumnType::int(11).sql_type(), "int(11)");
        assert_eq!(ColumnType::varchar(45).sql_type(), "varchar(45)");
        assert_eq!(ColumnType::float_precision(7).sql_type(), "float(7)");
        assert_eq!(ColumnType::Timestamp.sql_type(), "timestamp");
        assert_eq!(
            ColumnType::enumeration(&["Open", "Closed"]).sql_type(),
            "enum('Open','Closed')"
        );
    }
}
