//! ISPyB Models - The ISPyB entity catalog.
//!
//! Every ISPyB table, reporting view and join table as an entity definition,
//! the relationships between them, and the derived proposal and session
//! labels. [`build_catalog`] links and validates all of it; [`catalog`]
//! returns the process-wide instance.
//!
//! ```no_run
//! use ispyb_core::{Database, Query, FilterExpr};
//!
//! let db = Database::open_from_env(ispyb_models::catalog()?.clone())?;
//! let mut session = db.session();
//! let _proposal = session.first(&Query::new("Proposal").filter(FilterExpr::eq("proposalCode", "MX")))?;
//! # Ok::<(), ispyb_core::Error>(())
//! ```

pub mod accessors;
mod associations;
mod constraints;
mod join_tables;
mod relations;
mod tables;
mod views;

use std::sync::OnceLock;

use ispyb_core::catalog::{Catalog, SchemaBundle};
use ispyb_core::error::CatalogError;
use tracing::debug;

/// Version of the entity definitions, recorded by embedded stores.
pub const SCHEMA_VERSION: u64 = 1;

/// The unlinked declarations: entities, relationships and constraints.
pub fn schema_bundle() -> SchemaBundle {
    SchemaBundle::new(SCHEMA_VERSION)
        .with_entities(tables::entities())
        .with_entities(views::entities())
        .with_entities(join_tables::entities())
        .with_relations(relations::relations())
        .with_relations(associations::associations())
        .with_constraints(constraints::constraints())
}

/// Link and validate the full catalog.
pub fn build_catalog() -> Result<Catalog, CatalogError> {
    let bundle = schema_bundle();
    debug!(
        entities = bundle.entities.len(),
        relations = bundle.relations.len(),
        "building ISPyB catalog"
    );
    Catalog::builder(bundle)
        .with_accessors(accessors::accessors())
        .build()
}

/// The process-wide catalog, built on first use.
pub fn catalog() -> Result<&'static Catalog, CatalogError> {
    static CATALOG: OnceLock<Result<Catalog, CatalogError>> = OnceLock::new();
    CATALOG.get_or_init(build_catalog).as_ref().map_err(Clone::clone)
}
