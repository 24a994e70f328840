//! Stored-row lookups shared by relationship loading and cascades.

use crate::catalog::Catalog;
use crate::error::Error;
use crate::storage::{value_codec, Record, RowKey, Transaction};
use crate::value::Value;

/// A row as a transaction sees it.
pub(crate) struct StoredRow {
    pub key: RowKey,
    pub record: Record,
    pub values: Vec<(String, Value)>,
}

/// Value of a field in a decoded row; absent fields are NULL.
pub(crate) fn field_value(row: &[(String, Value)], field: &str) -> Value {
    row.iter()
        .find(|(name, _)| name == field)
        .map(|(_, v)| v.clone())
        .unwrap_or(Value::Null)
}

/// Rows of `entity` whose `field` equals `value`, in key order.
///
/// A lookup on the sole primary key field is a point read; anything else
/// scans the entity. NULL matches nothing.
pub(crate) fn matching_rows(
    catalog: &Catalog,
    txn: &Transaction<'_>,
    entity: &str,
    field: &str,
    value: &Value,
) -> Result<Vec<StoredRow>, Error> {
    if value.is_null() {
        return Ok(Vec::new());
    }

    let def = catalog.require_entity(entity)?;
    if def.primary_key_names() == [field] {
        let key = RowKey::new(entity, std::slice::from_ref(value))?;
        return Ok(match txn.read(&key)? {
            Some(record) => {
                let values = value_codec::decode_row(&record.data)?;
                vec![StoredRow {
                    key,
                    record,
                    values,
                }]
            }
            None => Vec::new(),
        });
    }

    let mut rows = Vec::new();
    for (key, record) in txn.scan_entity(entity)? {
        let values = value_codec::decode_row(&record.data)?;
        if field_value(&values, field).sql_eq(value) == Some(true) {
            rows.push(StoredRow {
                key,
                record,
                values,
            });
        }
    }
    Ok(rows)
}
