//! Transaction support for atomic multi-row writes.

use std::collections::BTreeMap;

use super::{Record, RowKey, StorageEngine};
use crate::error::Error;
use tracing::debug;

/// Snapshot of a transaction's uncommitted writes.
#[derive(Debug, Clone)]
pub struct Savepoint {
    write_cache: BTreeMap<Vec<u8>, Option<Record>>,
}

/// A transaction for atomic multi-row operations.
///
/// Writes are held in a local cache that reads see before the committed data,
/// and are applied in one sled transaction on commit.
pub struct Transaction<'a> {
    engine: &'a StorageEngine,
    /// Uncommitted writes (encoded row key -> record, `None` for deletes).
    write_cache: BTreeMap<Vec<u8>, Option<Record>>,
}

impl<'a> Transaction<'a> {
    /// Create a new transaction.
    pub(crate) fn new(engine: &'a StorageEngine) -> Self {
        Self {
            engine,
            write_cache: BTreeMap::new(),
        }
    }

    /// Queue a row write.
    pub fn put(&mut self, key: &RowKey, record: Record) -> &mut Self {
        self.write_cache.insert(key.encode(), Some(record));
        self
    }

    /// Queue a row delete.
    pub fn delete(&mut self, key: &RowKey) -> &mut Self {
        self.write_cache.insert(key.encode(), None);
        self
    }

    /// Read a row within the transaction.
    ///
    /// Returns uncommitted writes from this transaction if present, otherwise
    /// reads from the storage engine.
    pub fn read(&self, key: &RowKey) -> Result<Option<Record>, Error> {
        if let Some(cached) = self.write_cache.get(&key.encode()) {
            return Ok(cached.clone());
        }
        self.engine.get(key)
    }

    /// Check if a row exists (for foreign key validation).
    pub fn exists(&self, key: &RowKey) -> Result<bool, Error> {
        Ok(self.read(key)?.is_some())
    }

    /// Scan the rows of an entity as this transaction sees them, in key order.
    pub fn scan_entity(&self, entity: &str) -> Result<Vec<(RowKey, Record)>, Error> {
        let prefix = RowKey::prefix(entity);
        let mut rows: BTreeMap<Vec<u8>, (RowKey, Record)> = BTreeMap::new();

        for result in self.engine.scan_entity(entity) {
            let (key, record) = result?;
            rows.insert(key.encode(), (key, record));
        }

        for (key_bytes, cached) in self.write_cache.range(prefix.clone()..) {
            if !key_bytes.starts_with(&prefix) {
                break;
            }
            match cached {
                Some(record) => {
                    rows.insert(key_bytes.clone(), (RowKey::decode(key_bytes)?, record.clone()));
                }
                None => {
                    rows.remove(key_bytes);
                }
            }
        }

        Ok(rows.into_values().collect())
    }

    /// Capture the uncommitted writes so a failed unit of work can be undone.
    pub fn savepoint(&self) -> Savepoint {
        Savepoint {
            write_cache: self.write_cache.clone(),
        }
    }

    /// Return to a previously captured savepoint.
    pub fn restore(&mut self, savepoint: Savepoint) {
        self.write_cache = savepoint.write_cache;
    }

    /// Check if there are uncommitted writes.
    pub fn is_empty(&self) -> bool {
        self.write_cache.is_empty()
    }

    /// Get the number of pending row operations.
    pub fn operation_count(&self) -> usize {
        self.write_cache.len()
    }

    /// Discard all uncommitted writes.
    pub fn rollback(&mut self) {
        debug!(discarded = self.write_cache.len(), "transaction rolled back");
        self.write_cache.clear();
    }

    /// Commit the transaction atomically.
    ///
    /// All writes succeed or none do. The transaction is empty afterwards and
    /// can be reused.
    pub fn commit(&mut self) -> Result<(), Error> {
        if self.write_cache.is_empty() {
            return Ok(());
        }

        let mut ops = Vec::with_capacity(self.write_cache.len());
        for (key, cached) in &self.write_cache {
            let value = match cached {
                Some(record) => Some(record.to_bytes()?),
                None => None,
            };
            ops.push((key.as_slice(), value));
        }

        let result: Result<(), sled::transaction::TransactionError<Error>> =
            self.engine.data_tree().transaction(|tx| {
                for (key, value) in &ops {
                    match value {
                        Some(bytes) => {
                            tx.insert(*key, bytes.as_slice())?;
                        }
                        None => {
                            tx.remove(*key)?;
                        }
                    }
                }
                Ok(())
            });

        match result {
            Ok(()) => {
                debug!(operations = ops.len(), "transaction committed");
                drop(ops);
                self.write_cache.clear();
                Ok(())
            }
            Err(sled::transaction::TransactionError::Abort(e)) => Err(e),
            Err(sled::transaction::TransactionError::Storage(e)) => Err(Error::Storage(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::StorageConfig;
    use crate::value::Value;

    fn key(id: i64) -> RowKey {
        RowKey::new("Protein", &[Value::Int(id)]).unwrap()
    }

    #[test]
    fn test_reads_see_uncommitted_writes() {
        let engine = StorageEngine::open(StorageConfig::temporary()).unwrap();
        let mut txn = engine.transaction();
        txn.put(&key(1), Record::new(vec![1]));

        assert!(txn.exists(&key(1)).unwrap());
        assert!(engine.get(&key(1)).unwrap().is_none());

        txn.commit().unwrap();
        assert!(engine.get(&key(1)).unwrap().is_some());
        assert!(txn.is_empty());
    }

    #[test]
    fn test_scan_merges_cache_and_store() {
        let engine = StorageEngine::open(StorageConfig::temporary()).unwrap();
        let mut txn = engine.transaction();
        txn.put(&key(1), Record::new(vec![1]));
        txn.put(&key(2), Record::new(vec![2]));
        txn.commit().unwrap();

        txn.delete(&key(1));
        txn.put(&key(3), Record::new(vec![3]));
        txn.put(&RowKey::new("ProteinHasPDB", &[Value::Int(1)]).unwrap(), Record::new(vec![9]));

        let data: Vec<_> = txn
            .scan_entity("Protein")
            .unwrap()
            .into_iter()
            .map(|(_, r)| r.data)
            .collect();
        assert_eq!(data, vec![vec![2], vec![3]]);
    }

    #[test]
    fn test_rollback_and_savepoint() {
        let engine = StorageEngine::open(StorageConfig::temporary()).unwrap();
        let mut txn = engine.transaction();
        txn.put(&key(1), Record::new(vec![1]));

        let savepoint = txn.savepoint();
        txn.put(&key(2), Record::new(vec![2]));
        assert_eq!(txn.operation_count(), 2);
        txn.restore(savepoint);
        assert_eq!(txn.operation_count(), 1);

        txn.rollback();
        txn.commit().unwrap();
        assert!(engine.get(&key(1)).unwrap().is_none());
    }
}
