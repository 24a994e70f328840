//! Schema bundle - versioned snapshot of every declaration in the catalog.

use super::{ConstraintDef, EntityDef, RelationDef};
use crate::error::Error;
use rkyv::{Archive, Deserialize, Serialize};

/// A versioned snapshot of the entity, relationship and constraint declarations.
///
/// Declarations keep their insertion order so that the serialized form, and with it
/// the fingerprint, is stable for a given set of declarations.
#[derive(Debug, Clone, PartialEq, Archive, Serialize, Deserialize)]
pub struct SchemaBundle {
    /// Schema version.
    pub version: u64,
    /// Entity definitions in declaration order.
    pub entities: Vec<EntityDef>,
    /// Relationship definitions in declaration order.
    pub relations: Vec<RelationDef>,
    /// Multi-column constraints and index hints.
    pub constraints: Vec<ConstraintDef>,
}

impl SchemaBundle {
    /// Create an empty schema bundle.
    pub fn new(version: u64) -> Self {
        Self {
            version,
            entities: Vec::new(),
            relations: Vec::new(),
            constraints: Vec::new(),
        }
    }

    /// Add an entity to the schema.
    pub fn with_entity(mut self, entity: EntityDef) -> Self {
        self.entities.push(entity);
        self
    }

    /// Add several entities.
    pub fn with_entities(mut self, entities: impl IntoIterator<Item = EntityDef>) -> Self {
        self.entities.extend(entities);
        self
    }

    /// Add a relation to the schema.
    pub fn with_relation(mut self, relation: RelationDef) -> Self {
        self.relations.push(relation);
        self
    }

    /// Add several relations.
    pub fn with_relations(mut self, relations: impl IntoIterator<Item = RelationDef>) -> Self {
        self.relations.extend(relations);
        self
    }

    /// Add a constraint to the schema.
    pub fn with_constraint(mut self, constraint: ConstraintDef) -> Self {
        self.constraints.push(constraint);
        self
    }

    /// Add several constraints.
    pub fn with_constraints(mut self, constraints: impl IntoIterator<Item = ConstraintDef>) -> Self {
        self.constraints.extend(constraints);
        self
    }

    /// Get an entity by name.
    pub fn entity(&self, name: &str) -> Option<&EntityDef> {
        self.entities.iter().find(|e| e.name == name)
    }

    /// Get all relations declared on an entity.
    pub fn relations_from(&self, entity: &str) -> Vec<&RelationDef> {
        self.relations
            .iter()
            .filter(|r| r.from_entity == entity)
            .collect()
    }

    /// Get all constraints for an entity.
    pub fn constraints_for(&self, entity: &str) -> Vec<&ConstraintDef> {
        self.constraints
            .iter()
            .filter(|c| c.entity() == entity)
            .collect()
    }

    /// Serialize the schema bundle to bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, Error> {
        rkyv::to_bytes::<rkyv::rancor::Error>(self)
            .map(|v| v.to_vec())
            .map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Deserialize a schema bundle from bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        rkyv::from_bytes::<Self, rkyv::rancor::Error>(bytes)
            .map_err(|e| Error::Deserialization(e.to_string()))
    }

    /// Hex-encoded blake3 digest of the serialized bundle.
    pub fn fingerprint(&self) -> Result<String, Error> {
        let bytes = self.to_bytes()?;
        Ok(hex::encode(blake3::hash(&bytes).as_bytes()))
    }
}

impl Default for SchemaBundle {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ColumnType, FieldDef, ForeignKey, ReferentialAction};

    fn sample_schema() -> SchemaBundle {
        let proposal = EntityDef::table("Proposal", "Proposal")
            .with_field(FieldDef::new("proposalId", ColumnType::int(10)).primary_key())
            .with_field(FieldDef::new("proposalCode", ColumnType::varchar(45)))
            .with_field(FieldDef::new("proposalNumber", ColumnType::varchar(45)));

        let session = EntityDef::table("BLSession", "BLSession")
            .with_field(FieldDef::new("sessionId", ColumnType::int(10)).primary_key())
            .with_field(
                FieldDef::new("proposalId", ColumnType::int(10)).not_null().references(
                    ForeignKey::to("Proposal", "proposalId").on_delete(ReferentialAction::Cascade),
                ),
            )
            .with_field(FieldDef::new("visit_number", ColumnType::int(10)));

        SchemaBundle::new(1)
            .with_entity(proposal)
            .with_entity(session)
            .with_relation(
                RelationDef::many_to_one("Proposal", "BLSession", "Proposal").back_populates("BLSession"),
            )
            .with_relation(
                RelationDef::one_to_many("BLSession", "Proposal", "BLSession").back_populates("Proposal"),
            )
            .with_constraint(ConstraintDef::index(
                "Proposal_FKIndexCodeNumber",
                "Proposal",
                ["proposalCode", "proposalNumber"],
            ))
    }

    #[test]
    fn test_schema_bundle_builder() {
        let schema = sample_schema();
        assert_eq!(schema.version, 1);
        assert_eq!(schema.entities.len(), 2);
        assert_eq!(schema.relations.len(), 2);
        assert_eq!(schema.constraints.len(), 1);
    }

    #[test]
    fn test_get_entity() {
        let schema = sample_schema();
        assert!(schema.entity("Proposal").is_some());
        assert!(schema.entity("Missing").is_none());
        assert_eq!(schema.relations_from("BLSession").len(), 1);
        assert_eq!(schema.constraints_for("Proposal").len(), 1);
        assert!(schema.constraints_for("BLSession").is_empty());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let schema = sample_schema();
        let bytes = schema.to_bytes().unwrap();
        let restored = SchemaBundle::from_bytes(&bytes).unwrap();
        assert_eq!(schema, restored);
    }

    #[test]
    fn test_fingerprint_tracks_declarations() {
        let schema = sample_schema();
        let first = schema.fingerprint().unwrap();
        assert_eq!(first.len(), 64);
        assert_eq!(first, sample_schema().fingerprint().unwrap());

        let changed = schema.with_constraint(ConstraintDef::unique("name", "Proposal", "proposalCode"));
        assert_ne!(first, changed.fingerprint().unwrap());
    }
}
