//! Storage engine implementation.

use super::{Record, RowKey, StorageConfig, Transaction};
use crate::error::Error;
use sled::{Db, Tree};
use tracing::{debug, info};

/// Tree name for row data.
const DATA_TREE: &str = "data";

/// Tree name for auto-increment counters.
const SEQUENCE_TREE: &str = "sequence";

/// Tree name for recorded schema bundles.
const SCHEMA_TREE: &str = "catalog:schemas";

/// The main storage engine wrapping sled.
pub struct StorageEngine {
    /// The underlying sled database.
    db: Db,

    /// Tree for rows keyed by [`RowKey`].
    data_tree: Tree,

    /// Tree for per-entity auto-increment counters.
    sequence_tree: Tree,

    /// Tree for schema bundles keyed by version.
    schema_tree: Tree,
}

impl StorageEngine {
    /// Open or create a storage engine with the given configuration.
    pub fn open(config: StorageConfig) -> Result<Self, Error> {
        let sled_config = config.to_sled_config();
        let db = sled_config.open()?;
        let data_tree = db.open_tree(DATA_TREE)?;
        let sequence_tree = db.open_tree(SEQUENCE_TREE)?;
        let schema_tree = db.open_tree(SCHEMA_TREE)?;

        info!(
            path = %config.path.display(),
            temporary = config.temporary,
            recovered = db.was_recovered(),
            "storage engine opened"
        );

        Ok(Self {
            db,
            data_tree,
            sequence_tree,
            schema_tree,
        })
    }

    /// Check if the database was recovered from a previous run.
    pub fn was_recovered(&self) -> bool {
        self.db.was_recovered()
    }

    /// Get a committed row.
    pub fn get(&self, key: &RowKey) -> Result<Option<Record>, Error> {
        match self.data_tree.get(key.encode())? {
            Some(bytes) => Ok(Some(Record::from_bytes(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Scan all committed rows of an entity in key order.
    pub fn scan_entity(
        &self,
        entity: &str,
    ) -> impl Iterator<Item = Result<(RowKey, Record), Error>> + '_ {
        self.data_tree
            .scan_prefix(RowKey::prefix(entity))
            .map(|result| {
                let (key_bytes, value_bytes) = result?;
                let key = RowKey::decode(&key_bytes)?;
                let record = Record::from_bytes(&value_bytes)?;
                Ok((key, record))
            })
    }

    /// Count committed rows of an entity.
    pub fn count_entity(&self, entity: &str) -> Result<usize, Error> {
        let mut count = 0;
        for result in self.data_tree.scan_prefix(RowKey::prefix(entity)) {
            result?;
            count += 1;
        }
        Ok(count)
    }

    /// Allocate the next auto-increment value for an entity.
    ///
    /// Counters are not transactional: a rolled-back insert leaves a gap, as a
    /// MySQL AUTO_INCREMENT column does.
    pub fn next_id(&self, entity: &str) -> Result<i64, Error> {
        let updated = self
            .sequence_tree
            .update_and_fetch(entity.as_bytes(), |old| {
                let next = old.map(decode_counter).unwrap_or(0).saturating_add(1);
                Some(next.to_be_bytes().to_vec())
            })?;
        let id = updated.as_deref().map(decode_counter).unwrap_or(1);
        debug!(entity, id, "allocated id");
        Ok(id)
    }

    /// Raise the counter so that later allocations stay above an explicit id.
    pub fn observe_id(&self, entity: &str, id: i64) -> Result<(), Error> {
        self.sequence_tree.update_and_fetch(entity.as_bytes(), |old| {
            let current = old.map(decode_counter).unwrap_or(0);
            Some(current.max(id).to_be_bytes().to_vec())
        })?;
        Ok(())
    }

    /// Record the schema bundle this store is used with.
    ///
    /// The first open under a version stores the bundle; later opens under the
    /// same version must present identical bytes.
    pub fn ensure_schema(&self, version: u64, bundle: &[u8]) -> Result<(), Error> {
        let key = version.to_be_bytes();
        let expected = hex::encode(blake3::hash(bundle).as_bytes());

        match self.schema_tree.get(key)? {
            Some(stored) => {
                let stored = hex::encode(blake3::hash(&stored).as_bytes());
                if stored != expected {
                    return Err(Error::SchemaMismatch {
                        version,
                        stored,
                        expected,
                    });
                }
            }
            None => {
                self.schema_tree.insert(key, bundle)?;
                info!(version, fingerprint = %expected, "recorded schema bundle");
            }
        }
        Ok(())
    }

    /// Versions of every schema bundle recorded in this store.
    pub fn schema_versions(&self) -> Result<Vec<u64>, Error> {
        let mut versions = Vec::new();
        for result in self.schema_tree.iter().keys() {
            let key = result?;
            let bytes: [u8; 8] = key
                .as_ref()
                .try_into()
                .map_err(|_| Error::InvalidData("Invalid schema version key".into()))?;
            versions.push(u64::from_be_bytes(bytes));
        }
        Ok(versions)
    }

    /// Begin a transaction over the row data.
    pub fn transaction(&self) -> Transaction<'_> {
        Transaction::new(self)
    }

    /// Flush all pending writes to disk.
    pub fn flush(&self) -> Result<(), Error> {
        self.db.flush()?;
        Ok(())
    }

    /// Get a reference to the data tree.
    pub(crate) fn data_tree(&self) -> &Tree {
        &self.data_tree
    }
}

fn decode_counter(bytes: &[u8]) -> i64 {
    bytes
        .try_into()
        .map(i64::from_be_bytes)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::value_codec::encode_row;
    use crate::value::Value;

    fn engine() -> StorageEngine {
        StorageEngine::open(StorageConfig::temporary()).unwrap()
    }

    #[test]
    fn test_next_id_is_per_entity() {
        let engine = engine();
        assert_eq!(engine.next_id("Proposal").unwrap(), 1);
        assert_eq!(engine.next_id("Proposal").unwrap(), 2);
        assert_eq!(engine.next_id("Person").unwrap(), 1);
    }

    #[test]
    fn test_observe_id_raises_counter() {
        let engine = engine();
        engine.observe_id("Proposal", 40).unwrap();
        assert_eq!(engine.next_id("Proposal").unwrap(), 41);
        engine.observe_id("Proposal", 10).unwrap();
        assert_eq!(engine.next_id("Proposal").unwrap(), 42);
    }

    #[test]
    fn test_committed_rows_are_scanned_by_entity() {
        let engine = engine();
        let mut txn = engine.transaction();
        for id in 1..=3 {
            let key = RowKey::new("Proposal", &[Value::Int(id)]).unwrap();
            let data = encode_row(&[("proposalId".to_string(), Value::Int(id))]).unwrap();
            txn.put(&key, Record::new(data));
        }
        let other = RowKey::new("ProposalHasPerson", &[Value::Int(1)]).unwrap();
        txn.put(&other, Record::new(Vec::new()));
        txn.commit().unwrap();

        assert_eq!(engine.count_entity("Proposal").unwrap(), 3);
        let keys: Vec<_> = engine
            .scan_entity("Proposal")
            .map(|r| r.unwrap().0.values().unwrap())
            .collect();
        assert_eq!(keys.len(), 3);
        assert!(engine
            .get(&RowKey::new("Proposal", &[Value::Int(2)]).unwrap())
            .unwrap()
            .is_some());
    }

    #[test]
    fn test_schema_fingerprint_is_enforced() {
        let engine = engine();
        engine.ensure_schema(1, b"bundle-a").unwrap();
        engine.ensure_schema(1, b"bundle-a").unwrap();
        engine.ensure_schema(2, b"bundle-b").unwrap();

        let err = engine.ensure_schema(1, b"bundle-c").unwrap_err();
        assert!(matches!(err, Error::SchemaMismatch { version: 1, .. }));
        assert_eq!(engine.schema_versions().unwrap(), vec![1, 2]);
    }
}
