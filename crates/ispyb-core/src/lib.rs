//! ISPyB Core - Entity catalog, embedded session and SQL rendering.
//!
//! This crate provides the machinery the ISPyB entity definitions are declared
//! with: column types, entities and relationships linked into a validated
//! [`Catalog`], derived accessors with in-memory and query evaluation, a
//! unit-of-work [`Session`] over an embedded sled store, and MySQL rendering
//! of queries.

pub mod catalog;
pub mod config;
pub mod constraint;
pub mod database;
pub mod derived;
pub mod error;
pub mod query;
pub mod session;
pub mod storage;
pub mod value;

pub use catalog::{
    Catalog, CatalogBuilder, ColumnType, ConstraintDef, DefaultValue, EntityDef, EntityKind,
    FieldDef, ForeignKey, ReferentialAction, RelationCascade, RelationDef, RelationKind,
    ResolvedRelation, ScalarType, SchemaBundle,
};
pub use config::{Backend, DatabaseConfig, IsolationLevel};
pub use constraint::ConstraintValidator;
pub use database::Database;
pub use derived::{present, DerivedAccessor};
pub use error::{CascadeError, CatalogError, ConfigError, ConstraintError, Error};
pub use query::{ColumnRef, Expr, FilterExpr, OrderDirection, Query, SelectStatement};
pub use session::{Instance, InstanceState, PrimaryKey, ProjectedRow, Session};
pub use storage::{StorageConfig, StorageEngine};
pub use value::Value;
