//! Value codec for encoding/decoding rows and primary keys to/from bytes.

use chrono::{DateTime, Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::error::Error;
use crate::value::Value;

/// Type tag for encoded values.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValueTag {
    Null = 0,
    Int = 1,
    Float = 2,
    Decimal = 3,
    String = 4,
    Bytes = 5,
    Date = 6,
    DateTime = 7,
}

impl TryFrom<u8> for ValueTag {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ValueTag::Null),
            1 => Ok(ValueTag::Int),
            2 => Ok(ValueTag::Float),
            3 => Ok(ValueTag::Decimal),
            4 => Ok(ValueTag::String),
            5 => Ok(ValueTag::Bytes),
            6 => Ok(ValueTag::Date),
            7 => Ok(ValueTag::DateTime),
            _ => Err(Error::InvalidData(format!("Unknown value tag: {}", value))),
        }
    }
}

/// Encode a list of field name/value pairs to bytes.
///
/// Format:
/// - Field count (4 bytes, little-endian)
/// - For each field:
///   - Field name length (2 bytes, little-endian)
///   - Field name (UTF-8 bytes)
///   - Value tag (1 byte)
///   - Value data (variable length, depends on type)
pub fn encode_row(fields: &[(String, Value)]) -> Result<Vec<u8>, Error> {
    let mut buf = Vec::new();
    buf.extend_from_slice(&(fields.len() as u32).to_le_bytes());

    for (name, value) in fields {
        let name_bytes = name.as_bytes();
        if name_bytes.len() > u16::MAX as usize {
            return Err(Error::InvalidData("Field name too long".into()));
        }
        buf.extend_from_slice(&(name_bytes.len() as u16).to_le_bytes());
        buf.extend_from_slice(name_bytes);
        encode_value(&mut buf, value)?;
    }

    Ok(buf)
}

/// Decode bytes back to field name/value pairs.
pub fn decode_row(data: &[u8]) -> Result<Vec<(String, Value)>, Error> {
    let mut cursor = 0;
    let count = u32::from_le_bytes(read_array(data, &mut cursor, "field count")?) as usize;

    let mut fields = Vec::with_capacity(count);
    for _ in 0..count {
        let name_len = u16::from_le_bytes(read_array(data, &mut cursor, "field name length")?) as usize;
        let name_bytes = read_slice(data, &mut cursor, name_len, "field name")?;
        let name = String::from_utf8(name_bytes.to_vec())
            .map_err(|_| Error::InvalidData("Invalid UTF-8 in field name".into()))?;

        let (value, bytes_read) = decode_value(&data[cursor..])?;
        cursor += bytes_read;
        fields.push((name, value));
    }

    Ok(fields)
}

/// Encode primary key values in key order.
///
/// Equal keys always produce equal bytes, so the encoding doubles as the
/// identity-map key and the storage key suffix.
pub fn encode_key(values: &[Value]) -> Result<Vec<u8>, Error> {
    let mut buf = Vec::with_capacity(1 + values.len() * 9);
    if values.len() > u8::MAX as usize {
        return Err(Error::InvalidData("Primary key has too many columns".into()));
    }
    buf.push(values.len() as u8);
    for value in values {
        encode_value(&mut buf, value)?;
    }
    Ok(buf)
}

/// Decode primary key values.
pub fn decode_key(data: &[u8]) -> Result<Vec<Value>, Error> {
    let mut cursor = 0;
    let [count] = read_array::<1>(data, &mut cursor, "key column count")?;
    let mut values = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let (value, bytes_read) = decode_value(&data[cursor..])?;
        cursor += bytes_read;
        values.push(value);
    }
    Ok(values)
}

fn encode_value(buf: &mut Vec<u8>, value: &Value) -> Result<(), Error> {
    match value {
        Value::Null => {
            buf.push(ValueTag::Null as u8);
        }
        Value::Int(n) => {
            buf.push(ValueTag::Int as u8);
            buf.extend_from_slice(&n.to_le_bytes());
        }
        Value::Float(f) => {
            buf.push(ValueTag::Float as u8);
            buf.extend_from_slice(&f.to_le_bytes());
        }
        Value::Decimal(d) => {
            buf.push(ValueTag::Decimal as u8);
            buf.extend_from_slice(&d.serialize());
        }
        Value::String(s) => {
            buf.push(ValueTag::String as u8);
            encode_len_prefixed(buf, s.as_bytes(), "String too long")?;
        }
        Value::Bytes(b) => {
            buf.push(ValueTag::Bytes as u8);
            encode_len_prefixed(buf, b, "Bytes too long")?;
        }
        Value::Date(d) => {
            buf.push(ValueTag::Date as u8);
            buf.extend_from_slice(&d.num_days_from_ce().to_le_bytes());
        }
        Value::DateTime(dt) => {
            buf.push(ValueTag::DateTime as u8);
            buf.extend_from_slice(&dt.and_utc().timestamp_micros().to_le_bytes());
        }
    }
    Ok(())
}

fn encode_len_prefixed(buf: &mut Vec<u8>, bytes: &[u8], too_long: &str) -> Result<(), Error> {
    if bytes.len() > u32::MAX as usize {
        return Err(Error::InvalidData(too_long.into()));
    }
    buf.extend_from_slice(&(bytes.len() as u32).to_le_bytes());
    buf.extend_from_slice(bytes);
    Ok(())
}

fn decode_value(data: &[u8]) -> Result<(Value, usize), Error> {
    let mut cursor = 0;
    let [tag] = read_array::<1>(data, &mut cursor, "value tag")?;

    let value = match ValueTag::try_from(tag)? {
        ValueTag::Null => Value::Null,
        ValueTag::Int => Value::Int(i64::from_le_bytes(read_array(data, &mut cursor, "i64")?)),
        ValueTag::Float => Value::Float(f64::from_le_bytes(read_array(data, &mut cursor, "f64")?)),
        ValueTag::Decimal => Value::Decimal(Decimal::deserialize(read_array(
            data,
            &mut cursor,
            "decimal",
        )?)),
        ValueTag::String => {
            let len = u32::from_le_bytes(read_array(data, &mut cursor, "string length")?) as usize;
            let bytes = read_slice(data, &mut cursor, len, "string")?;
            Value::String(
                String::from_utf8(bytes.to_vec())
                    .map_err(|_| Error::InvalidData("Invalid UTF-8 in string".into()))?,
            )
        }
        ValueTag::Bytes => {
            let len = u32::from_le_bytes(read_array(data, &mut cursor, "bytes length")?) as usize;
            Value::Bytes(read_slice(data, &mut cursor, len, "bytes")?.to_vec())
        }
        ValueTag::Date => {
            let days = i32::from_le_bytes(read_array(data, &mut cursor, "date")?);
            let date = NaiveDate::from_num_days_from_ce_opt(days)
                .ok_or_else(|| Error::InvalidData(format!("Date out of range: {}", days)))?;
            Value::Date(date)
        }
        ValueTag::DateTime => {
            let micros = i64::from_le_bytes(read_array(data, &mut cursor, "datetime")?);
            let datetime = DateTime::from_timestamp_micros(micros)
                .ok_or_else(|| Error::InvalidData(format!("Timestamp out of range: {}", micros)))?;
            Value::DateTime(datetime.naive_utc())
        }
    };

    Ok((value, cursor))
}

fn read_slice<'a>(
    data: &'a [u8],
    cursor: &mut usize,
    len: usize,
    what: &str,
) -> Result<&'a [u8], Error> {
    let end = cursor
        .checked_add(len)
        .filter(|end| *end <= data.len())
        .ok_or_else(|| Error::InvalidData(format!("Data too short for {}", what)))?;
    let slice = &data[*cursor..end];
    *cursor = end;
    Ok(slice)
}

fn read_array<const N: usize>(data: &[u8], cursor: &mut usize, what: &str) -> Result<[u8; N], Error> {
    let mut out = [0u8; N];
    out.copy_from_slice(read_slice(data, cursor, N, what)?);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn stamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 11, 7)
            .unwrap()
            .and_hms_micro_opt(9, 30, 15, 250)
            .unwrap()
    }

    #[test]
    fn test_row_roundtrip() {
        let fields = vec![
            ("proposalId".to_string(), Value::Int(42)),
            ("title".to_string(), Value::Null),
            ("proposalCode".to_string(), Value::from("MX")),
            ("molecularMass".to_string(), Value::Decimal(Decimal::new(123456, 2))),
            ("threshold".to_string(), Value::Float(0.25)),
            ("externalId".to_string(), Value::Bytes(vec![0xde, 0xad, 0xbe, 0xef])),
            ("startDate".to_string(), Value::Date(stamp().date())),
            ("bltimeStamp".to_string(), Value::DateTime(stamp())),
        ];

        let encoded = encode_row(&fields).unwrap();
        assert_eq!(decode_row(&encoded).unwrap(), fields);
    }

    #[test]
    fn test_key_encoding_is_stable() {
        let a = encode_key(&[Value::Int(7), Value::Int(9)]).unwrap();
        let b = encode_key(&[Value::Int(7), Value::Int(9)]).unwrap();
        let c = encode_key(&[Value::Int(9), Value::Int(7)]).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(decode_key(&a).unwrap(), vec![Value::Int(7), Value::Int(9)]);
    }

    #[test]
    fn test_truncated_data_is_rejected() {
        let encoded = encode_row(&[("name".to_string(), Value::from("Lysozyme"))]).unwrap();
        let err = decode_row(&encoded[..encoded.len() - 3]).unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)));

        assert!(decode_row(&[1, 0]).is_err());
    }

    #[test]
    fn test_unknown_tag() {
        let err = decode_key(&[1, 200]).unwrap_err();
        assert!(matches!(err, Error::InvalidData(ref msg) if msg.contains("200")));
    }
}
