//! Multi-column constraint and index definitions.

use rkyv::{Archive, Deserialize, Serialize};

/// A constraint definition spanning one or more fields of an entity.
#[derive(Debug, Clone, PartialEq, Archive, Serialize, Deserialize)]
pub enum ConstraintDef {
    /// Uniqueness constraint (single or composite).
    Unique {
        /// Constraint name.
        name: String,
        /// Entity this constraint applies to.
        entity: String,
        /// Fields that must be unique together.
        fields: Vec<String>,
    },
    /// Lookup index hint; never enforced.
    Index {
        /// Index name.
        name: String,
        /// Entity this index applies to.
        entity: String,
        /// Indexed fields in key order.
        fields: Vec<String>,
    },
}

impl ConstraintDef {
    /// Create a unique constraint on a single field.
    pub fn unique(
        name: impl Into<String>,
        entity: impl Into<String>,
        field: impl Into<String>,
    ) -> Self {
        ConstraintDef::Unique {
            name: name.into(),
            entity: entity.into(),
            fields: vec![field.into()],
        }
    }

    /// Create a composite unique constraint.
    pub fn unique_composite(
        name: impl Into<String>,
        entity: impl Into<String>,
        fields: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        ConstraintDef::Unique {
            name: name.into(),
            entity: entity.into(),
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a lookup index.
    pub fn index(
        name: impl Into<String>,
        entity: impl Into<String>,
        fields: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        ConstraintDef::Index {
            name: name.into(),
            entity: entity.into(),
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Get the constraint name.
    pub fn name(&self) -> &str {
        match self {
            ConstraintDef::Unique { name, .. } => name,
            ConstraintDef::Index { name, .. } => name,
        }
    }

    /// Get the entity this constraint applies to.
    pub fn entity(&self) -> &str {
        match self {
            ConstraintDef::Unique { entity, .. } => entity,
            ConstraintDef::Index { entity, .. } => entity,
        }
    }

    /// Get the constrained fields.
    pub fn fields(&self) -> &[String] {
        match self {
            ConstraintDef::Unique { fields, .. } => fields,
            ConstraintDef::Index { fields, .. } => fields,
        }
    }

    /// Check if this is a unique constraint.
    pub fn is_unique(&self) -> bool {
        matches!(self, ConstraintDef::Unique { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_composite() {
        let c = ConstraintDef::unique_composite(
            "dewarRegistryId",
            "DewarRegistryHasProposal",
            ["dewarRegistryId", "proposalId"],
        );
        assert!(c.is_unique());
        assert_eq!(c.name(), "dewarRegistryId");
        assert_eq!(c.entity(), "DewarRegistryHasProposal");
        assert_eq!(c.fields(), ["dewarRegistryId", "proposalId"]);
    }

    #[test]
    fn test_index() {
        let c = ConstraintDef::index(
            "Proposal_FKIndexCodeNumber",
            "Proposal",
            ["proposalCode", "proposalNumber"],
        );
        assert!(!c.is_unique());
        assert_eq!(c.fields().len(), 2);
    }

    #[test]
    fn test_single_unique() {
        let c = ConstraintDef::unique("name", "EventType", "name");
        assert_eq!(c.fields(), ["name"]);
    }
}
