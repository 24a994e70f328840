//! Database wrapper combining StorageEngine and Catalog.

use tracing::{info, warn};

use crate::catalog::Catalog;
use crate::config::{Backend, DatabaseConfig};
use crate::error::Error;
use crate::session::Session;
use crate::storage::{StorageConfig, StorageEngine};

/// An embedded ISPyB database: a linked catalog over a sled store.
pub struct Database {
    catalog: Catalog,
    storage: StorageEngine,
    config: DatabaseConfig,
}

impl Database {
    /// Open the database a configuration names.
    ///
    /// The store records the catalog's schema bundle under its version on
    /// first open; reopening it with a different bundle under the same version
    /// fails with [`Error::SchemaMismatch`].
    pub fn open(catalog: Catalog, config: DatabaseConfig) -> Result<Self, Error> {
        let storage_config = match (&config.backend, config.storage_config()) {
            (_, Some(storage_config)) => storage_config,
            (Backend::MySql(mysql), None) => {
                warn!(host = %mysql.host, "external MySQL backend requested");
                return Err(Error::ExternalBackend(format!("mysql://{}:{}", mysql.host, mysql.port)));
            }
            (backend, None) => {
                return Err(Error::ExternalBackend(format!("{:?}", backend)));
            }
        };

        let storage = StorageEngine::open(storage_config)?;
        storage.ensure_schema(catalog.version(), &catalog.bundle().to_bytes()?)?;

        info!(
            version = catalog.version(),
            entities = catalog.entity_count(),
            isolation = %config.isolation_level,
            "database opened"
        );
        Ok(Self {
            catalog,
            storage,
            config,
        })
    }

    /// Open the database named by `ISPYB_DATABASE_URI` / `SQLALCHEMY_DATABASE_URI`.
    pub fn open_from_env(catalog: Catalog) -> Result<Self, Error> {
        Self::open(catalog, DatabaseConfig::from_env()?)
    }

    /// Open a temporary in-memory database.
    pub fn open_temporary(catalog: Catalog) -> Result<Self, Error> {
        Self::open(
            catalog,
            DatabaseConfig::memory().with_storage(StorageConfig::temporary()),
        )
    }

    /// Start a unit of work.
    pub fn session(&self) -> Session<'_> {
        Session::new(&self.catalog, &self.storage)
    }

    /// Run `f` in a new session, committing on `Ok` and rolling back on `Err`.
    pub fn with_session<T, F>(&self, f: F) -> Result<T, Error>
    where
        F: FnOnce(&mut Session<'_>) -> Result<T, Error>,
    {
        let mut session = self.session();
        match f(&mut session) {
            Ok(value) => {
                session.commit()?;
                Ok(value)
            }
            Err(e) => {
                session.rollback();
                Err(e)
            }
        }
    }

    /// Get a reference to the catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Get a reference to the storage engine.
    pub fn storage(&self) -> &StorageEngine {
        &self.storage
    }

    /// Get a reference to the configuration the database was opened with.
    pub fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    /// Flush all committed writes to disk.
    pub fn flush(&self) -> Result<(), Error> {
        self.storage.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ColumnType, EntityDef, FieldDef, SchemaBundle};
    use crate::query::Query;
    use crate::value::Value;

    fn catalog(width: u32) -> Catalog {
        let bundle = SchemaBundle::new(1).with_entity(
            EntityDef::table("Laboratory", "Laboratory")
                .with_field(FieldDef::new("laboratoryId", ColumnType::int(10)).primary_key())
                .with_field(FieldDef::new("name", ColumnType::varchar(width))),
        );
        Catalog::new(bundle).unwrap()
    }

    #[test]
    fn test_with_session_commits_or_rolls_back() {
        let db = Database::open_temporary(catalog(45)).unwrap();

        let id = db
            .with_session(|session| {
                let lab = session.new_instance("Laboratory")?.with("name", "ESRF")?;
                session.add(&lab)?;
                session.flush()?;
                lab.get("laboratoryId")
            })
            .unwrap();
        assert_eq!(id, Value::Int(1));

        let result: Result<(), Error> = db.with_session(|session| {
            let lab = session.new_instance("Laboratory")?.with("name", "x".repeat(46))?;
            session.add(&lab)?;
            session.flush()
        });
        assert!(matches!(result, Err(Error::Constraint(_))));

        let result: Result<(), Error> = db.with_session(|session| {
            let lab = session.new_instance("Laboratory")?.with("name", "DLS")?;
            session.add(&lab)?;
            session.flush()?;
            Err(Error::InvalidOperation("abandon".into()))
        });
        assert!(result.is_err());

        let mut session = db.session();
        assert_eq!(session.count(&Query::new("Laboratory")).unwrap(), 1);
    }

    #[test]
    fn test_schema_recorded_and_checked() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store");

        {
            let db = Database::open(catalog(45), DatabaseConfig::embedded(&path)).unwrap();
            db.with_session(|session| {
                let lab = session.new_instance("Laboratory")?.with("name", "ESRF")?;
                session.add(&lab)
            })
            .unwrap();
            db.flush().unwrap();
        }

        let db = Database::open(catalog(45), DatabaseConfig::embedded(&path)).unwrap();
        let mut session = db.session();
        let lab = session.get("Laboratory", 1).unwrap().unwrap();
        assert_eq!(lab.get("name").unwrap(), Value::from("ESRF"));
        drop(session);
        drop(db);

        let err = Database::open(catalog(100), DatabaseConfig::embedded(&path)).err().unwrap();
        assert!(matches!(err, Error::SchemaMismatch { version: 1, .. }));
    }

    #[test]
    fn test_mysql_backend_is_external() {
        let config = DatabaseConfig::from_uri("mysql://ispyb:pw@localhost/ispyb").unwrap();
        assert!(matches!(
            Database::open(catalog(45), config),
            Err(Error::ExternalBackend(_))
        ));
    }
}
