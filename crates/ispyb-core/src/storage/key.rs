//! Row key encoding.

use std::fmt;

use super::value_codec::{decode_key, encode_key};
use crate::error::Error;
use crate::value::Value;

/// Separator between the entity name and the encoded primary key.
const SEPARATOR: u8 = 0x00;

/// Storage key of one row: entity name plus encoded primary key.
///
/// Key format: `[entity name (UTF-8)][0x00][encoded key]`
///
/// Entity names never contain NUL, so every row of an entity shares the prefix
/// `[entity name][0x00]` and a prefix scan returns exactly that entity's rows.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct RowKey {
    /// Entity name.
    pub entity: String,
    /// Encoded primary key values.
    pub key: Vec<u8>,
}

impl RowKey {
    /// Build a key from primary key values.
    pub fn new(entity: impl Into<String>, values: &[Value]) -> Result<Self, Error> {
        Ok(Self {
            entity: entity.into(),
            key: encode_key(values)?,
        })
    }

    /// Encode the key to bytes.
    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Self::prefix(&self.entity);
        buf.extend_from_slice(&self.key);
        buf
    }

    /// Decode a key from bytes.
    pub fn decode(bytes: &[u8]) -> Result<Self, Error> {
        let split = bytes
            .iter()
            .position(|b| *b == SEPARATOR)
            .ok_or_else(|| Error::InvalidData("Row key without separator".into()))?;
        let entity = std::str::from_utf8(&bytes[..split])
            .map_err(|_| Error::InvalidData("Invalid UTF-8 in row key".into()))?;
        Ok(Self {
            entity: entity.to_string(),
            key: bytes[split + 1..].to_vec(),
        })
    }

    /// Decoded primary key values.
    pub fn values(&self) -> Result<Vec<Value>, Error> {
        decode_key(&self.key)
    }

    /// Get the prefix shared by every row of an entity.
    pub fn prefix(entity: &str) -> Vec<u8> {
        let mut buf = Vec::with_capacity(entity.len() + 1);
        buf.extend_from_slice(entity.as_bytes());
        buf.push(SEPARATOR);
        buf
    }
}

impl fmt::Debug for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowKey")
            .field("entity", &self.entity)
            .field("key", &hex::encode(&self.key))
            .finish()
    }
}

/// Get current timestamp in microseconds since Unix epoch.
pub fn current_timestamp() -> u64 {
    chrono::Utc::now().timestamp_micros().max(0) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode_roundtrip() {
        let key = RowKey::new("Proposal", &[Value::Int(17)]).unwrap();
        let decoded = RowKey::decode(&key.encode()).unwrap();
        assert_eq!(key, decoded);
        assert_eq!(decoded.values().unwrap(), vec![Value::Int(17)]);
    }

    #[test]
    fn test_prefix_isolates_entities() {
        let session = RowKey::new("BLSession", &[Value::Int(1)]).unwrap().encode();
        let session_type = RowKey::new("BLSessionHasSCPosition", &[Value::Int(1)])
            .unwrap()
            .encode();

        let prefix = RowKey::prefix("BLSession");
        assert!(session.starts_with(&prefix));
        assert!(!session_type.starts_with(&prefix));
    }

    #[test]
    fn test_decode_without_separator() {
        assert!(RowKey::decode(b"Proposal").is_err());
    }
}
