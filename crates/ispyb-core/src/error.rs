//! Core error types.

use thiserror::Error;

/// Top-level error for catalog, storage and session operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Storage layer error.
    #[error("storage error: {0}")]
    Storage(#[from] sled::Error),

    /// Catalog definition error.
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Type or constraint violation detected at write time.
    #[error("constraint violation: {0}")]
    Constraint(#[from] ConstraintError),

    /// Referential action could not be carried out.
    #[error("cascade error: {0}")]
    Cascade(#[from] CascadeError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Deserialization error.
    #[error("deserialization error: {0}")]
    Deserialization(String),

    /// Invalid data format.
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// Lookup of an entity the catalog does not declare.
    #[error("unknown entity '{0}'")]
    UnknownEntity(String),

    /// Access to a field the entity does not declare.
    #[error("entity '{entity}' has no field '{field}'")]
    UnknownField {
        /// Entity name.
        entity: String,
        /// Requested field.
        field: String,
    },

    /// Access to a relationship the entity does not declare.
    #[error("entity '{entity}' has no relationship '{relation}'")]
    UnknownRelation {
        /// Entity name.
        entity: String,
        /// Requested relationship.
        relation: String,
    },

    /// Access to a derived accessor the entity does not declare.
    #[error("entity '{entity}' has no derived accessor '{accessor}'")]
    UnknownAccessor {
        /// Entity name.
        entity: String,
        /// Requested accessor.
        accessor: String,
    },

    /// Write attempted against a reporting view.
    #[error("entity '{0}' is a read-only view")]
    ReadOnly(String),

    /// The configured backend is an external server this layer does not connect to.
    #[error("external backend '{0}' is not connectable from the embedded engine")]
    ExternalBackend(String),

    /// Query cannot be expressed against the catalog.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// Session operation not valid for the instance or relationship.
    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    /// The store was created with a different schema under the same version.
    #[error("schema version {version} mismatch: store has {stored}, catalog is {expected}")]
    SchemaMismatch {
        /// Schema version.
        version: u64,
        /// Fingerprint recorded in the store.
        stored: String,
        /// Fingerprint of the catalog being opened.
        expected: String,
    },
}

/// Errors raised while constructing the catalog.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    /// An entity name is declared twice.
    #[error("entity '{0}' declared more than once")]
    DuplicateEntity(String),

    /// Two entities bind the same table.
    #[error("table '{0}' bound by more than one entity")]
    DuplicateTable(String),

    /// A field name is declared twice on one entity.
    #[error("field '{field}' declared more than once on '{entity}'")]
    DuplicateField {
        /// Entity name.
        entity: String,
        /// Field name.
        field: String,
    },

    /// A relationship name is declared twice on one entity.
    #[error("relationship '{relation}' declared more than once on '{entity}'")]
    DuplicateRelation {
        /// Entity name.
        entity: String,
        /// Relationship name.
        relation: String,
    },

    /// A relationship or accessor name collides with a field.
    #[error("'{name}' on '{entity}' collides with a field of the same name")]
    ShadowsField {
        /// Entity name.
        entity: String,
        /// Colliding name.
        name: String,
    },

    /// A derived accessor name is declared twice on one entity.
    #[error("derived accessor '{accessor}' declared more than once on '{entity}'")]
    DuplicateAccessor {
        /// Entity name.
        entity: String,
        /// Accessor name.
        accessor: String,
    },

    /// Reference to an entity that is not declared.
    #[error("unknown entity '{entity}' referenced by {referenced_by}")]
    UnknownEntity {
        /// Missing entity.
        entity: String,
        /// Where the reference occurs.
        referenced_by: String,
    },

    /// Reference to a field that is not declared.
    #[error("unknown field '{entity}.{field}' referenced by {referenced_by}")]
    UnknownField {
        /// Entity name.
        entity: String,
        /// Missing field.
        field: String,
        /// Where the reference occurs.
        referenced_by: String,
    },

    /// A table entity declares no primary key.
    #[error("table entity '{0}' declares no primary key")]
    MissingPrimaryKey(String),

    /// A foreign key targets a field that is not part of the target's primary key.
    #[error("foreign key '{entity}.{field}' targets non-key field '{target}.{target_field}'")]
    ForeignKeyTarget {
        /// Entity holding the foreign key.
        entity: String,
        /// Foreign key field.
        field: String,
        /// Target entity.
        target: String,
        /// Target field.
        target_field: String,
    },

    /// A relationship or foreign key is declared on a reporting view.
    #[error("relationship '{relation}' touches view '{entity}'")]
    RelationOnView {
        /// View name.
        entity: String,
        /// Relationship name.
        relation: String,
    },

    /// `back_populates` names a relationship that does not point back.
    #[error(
        "relationship '{entity}.{relation}' back-populates '{target}.{back_populates}', \
         which is not declared as its counterpart"
    )]
    OneSidedBackPopulates {
        /// Entity holding the relationship.
        entity: String,
        /// Relationship name.
        relation: String,
        /// Target entity.
        target: String,
        /// Named counterpart.
        back_populates: String,
    },

    /// Both sides of a pair exist but disagree on shape or join path.
    #[error("relationship pair '{entity}.{relation}' is inconsistent: {reason}")]
    BackPopulatesMismatch {
        /// Entity holding the relationship.
        entity: String,
        /// Relationship name.
        relation: String,
        /// What disagrees.
        reason: String,
    },

    /// More than one foreign key could back the relationship.
    #[error(
        "relationship '{entity}.{relation}' is ambiguous: candidate keys {}; \
         declare an explicit join",
        .candidates.join(", ")
    )]
    AmbiguousForeignKey {
        /// Entity holding the relationship.
        entity: String,
        /// Relationship name.
        relation: String,
        /// Candidate key columns as `Entity.field`.
        candidates: Vec<String>,
    },

    /// No foreign key links the relationship endpoints.
    #[error("relationship '{entity}.{relation}' has no foreign key linking '{from}' and '{to}'")]
    NoForeignKey {
        /// Entity holding the relationship.
        entity: String,
        /// Relationship name.
        relation: String,
        /// Near side of the missing link.
        from: String,
        /// Far side of the missing link.
        to: String,
    },

    /// An explicit join is not valid for the relationship shape.
    #[error("relationship '{entity}.{relation}' has an invalid join: {reason}")]
    InvalidJoin {
        /// Entity holding the relationship.
        entity: String,
        /// Relationship name.
        relation: String,
        /// Why the join is rejected.
        reason: String,
    },

    /// A derived accessor references something it cannot reach.
    #[error("derived accessor '{entity}.{accessor}' is invalid: {reason}")]
    InvalidAccessor {
        /// Entity name.
        entity: String,
        /// Accessor name.
        accessor: String,
        /// Why the accessor is rejected.
        reason: String,
    },

    /// The schema bundle could not be serialized for fingerprinting.
    #[error("schema serialization failed: {0}")]
    Serialization(String),
}

/// Type and constraint violations detected at write time.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConstraintError {
    /// Value does not match the declared column type.
    #[error("{entity}.{field}: expected {expected}, found {found}")]
    TypeMismatch {
        /// Entity name.
        entity: String,
        /// Field name.
        field: String,
        /// Declared type.
        expected: String,
        /// Kind of the supplied value.
        found: String,
    },

    /// Integer outside the column's range.
    #[error("{entity}.{field}: {value} outside [{min}, {max}]")]
    OutOfRange {
        /// Entity name.
        entity: String,
        /// Field name.
        field: String,
        /// Supplied value.
        value: i64,
        /// Smallest accepted value.
        min: i64,
        /// Largest accepted value.
        max: i64,
    },

    /// Text or binary longer than the declared maximum.
    #[error("{entity}.{field}: length {length} exceeds maximum {max_length}")]
    TooLong {
        /// Entity name.
        entity: String,
        /// Field name.
        field: String,
        /// Declared maximum.
        max_length: u32,
        /// Supplied length.
        length: usize,
    },

    /// Enumerated field outside its value set.
    #[error("{entity}.{field}: '{value}' is not one of the declared values")]
    InvalidEnumValue {
        /// Entity name.
        entity: String,
        /// Field name.
        field: String,
        /// Supplied value.
        value: String,
    },

    /// Null supplied for a non-nullable field.
    #[error("{entity}.{field} may not be null")]
    NotNull {
        /// Entity name.
        entity: String,
        /// Field name.
        field: String,
    },

    /// A row with the same primary key already exists.
    #[error("duplicate primary key {key} for '{entity}'")]
    DuplicatePrimaryKey {
        /// Entity name.
        entity: String,
        /// Rendered key.
        key: String,
    },

    /// Unique constraint violated.
    #[error("unique constraint '{constraint}' violated on '{entity}' ({})", .fields.join(", "))]
    UniqueViolation {
        /// Constraint or field name.
        constraint: String,
        /// Entity name.
        entity: String,
        /// Constrained fields.
        fields: Vec<String>,
    },

    /// Primary key changed on a persistent row.
    #[error("primary key field '{entity}.{field}' cannot be modified")]
    PrimaryKeyModified {
        /// Entity name.
        entity: String,
        /// Key field.
        field: String,
    },

    /// Foreign key value does not reference an existing row.
    #[error("{entity}.{field} = {value} references missing '{target}' row")]
    ForeignKeyViolation {
        /// Entity name.
        entity: String,
        /// Foreign key field.
        field: String,
        /// Referenced entity.
        target: String,
        /// Rendered value.
        value: String,
    },
}

/// Errors raised while applying referential actions on delete.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CascadeError {
    /// Dependents exist and the foreign key restricts deletion.
    #[error("cannot delete '{entity}': {count} dependent '{referencing_entity}' row(s) via '{field}'")]
    RestrictViolation {
        /// Entity being deleted.
        entity: String,
        /// Entity holding the restricting key.
        referencing_entity: String,
        /// Restricting foreign key field.
        field: String,
        /// Number of dependent rows.
        count: usize,
    },

    /// Cascade chain exceeded the maximum depth.
    #[error("cascade exceeded maximum depth of {depth}")]
    MaxDepthExceeded {
        /// Depth reached.
        depth: usize,
    },
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Neither connection variable is set.
    #[error("no database URI: set {0}")]
    MissingUri(String),

    /// URI could not be parsed.
    #[error("invalid database URI '{uri}': {reason}")]
    InvalidUri {
        /// Offending URI, with any password redacted.
        uri: String,
        /// Parse failure.
        reason: String,
    },

    /// URI scheme is not recognised.
    #[error("unsupported URI scheme '{0}'")]
    UnsupportedScheme(String),

    /// Isolation level name is not recognised.
    #[error("unknown isolation level '{0}'")]
    InvalidIsolationLevel(String),
}
