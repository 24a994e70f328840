//! Entity catalog: declarations of every table, view, relationship and
//! constraint, and the linked graph built from them.

mod catalog;
mod constraint;
mod entity;
mod field;
mod relation;
mod schema;
mod types;

pub use catalog::{Catalog, CatalogBuilder, Reference};
pub use constraint::ConstraintDef;
pub use entity::{EntityDef, EntityKind};
pub use field::{DefaultValue, FieldDef, ForeignKey, ReferentialAction};
pub use relation::{
    JoinCondition, JoinStep, RelationCascade, RelationDef, RelationKind, ResolvedRelation,
};
pub use schema::SchemaBundle;
pub use types::{BlobKind, ColumnType, IntegerKind, Rejection, ScalarType, TextKind};
