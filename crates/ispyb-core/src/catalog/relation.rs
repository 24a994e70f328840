//! Relationship definitions between entities.

use rkyv::{Archive, Deserialize, Serialize};

/// Shape of a relationship, seen from its declaring entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Archive, Serialize, Deserialize)]
pub enum RelationKind {
    /// Single-valued; the declaring entity holds the foreign key.
    ManyToOne,
    /// Collection; the target holds the foreign key.
    OneToMany,
    /// Single-valued; either side may hold the foreign key.
    OneToOne,
    /// Collection routed through a join entity.
    ManyToMany,
}

impl RelationKind {
    /// Whether navigating yields a collection.
    pub fn is_collection(self) -> bool {
        matches!(self, RelationKind::OneToMany | RelationKind::ManyToMany)
    }

    /// Shape of the counterpart in a bidirectional pair.
    pub fn inverse(self) -> RelationKind {
        match self {
            RelationKind::ManyToOne => RelationKind::OneToMany,
            RelationKind::OneToMany => RelationKind::ManyToOne,
            RelationKind::OneToOne => RelationKind::OneToOne,
            RelationKind::ManyToMany => RelationKind::ManyToMany,
        }
    }
}

/// Session-level cascade on a relationship, on top of the foreign key's own action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Archive, Serialize, Deserialize)]
pub enum RelationCascade {
    /// Only the foreign key's referential action applies.
    #[default]
    None,
    /// Deleting the owner deletes the related rows.
    Delete,
    /// As `Delete`, and rows detached from the collection are deleted too.
    DeleteOrphan,
}

/// Explicit join selector: `from.local_field = to.remote_field`.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
pub struct JoinCondition {
    /// Field on the declaring entity.
    pub local_field: String,
    /// Field on the target entity.
    pub remote_field: String,
}

/// A named, navigable association declared on one entity.
#[derive(Debug, Clone, PartialEq, Archive, Serialize, Deserialize)]
pub struct RelationDef {
    /// Relationship name (unique within the declaring entity).
    pub name: String,
    /// Declaring entity.
    pub from_entity: String,
    /// Target entity.
    pub to_entity: String,
    /// Shape.
    pub kind: RelationKind,
    /// Explicit join, required when several foreign keys could back the relationship.
    pub join: Option<JoinCondition>,
    /// Join entity for many-to-many relationships.
    pub secondary: Option<String>,
    /// Counterpart on the target entity.
    pub back_populates: Option<String>,
    /// Session-level cascade.
    pub cascade: RelationCascade,
}

impl RelationDef {
    fn new(
        name: impl Into<String>,
        from_entity: impl Into<String>,
        to_entity: impl Into<String>,
        kind: RelationKind,
    ) -> Self {
        Self {
            name: name.into(),
            from_entity: from_entity.into(),
            to_entity: to_entity.into(),
            kind,
            join: None,
            secondary: None,
            back_populates: None,
            cascade: RelationCascade::None,
        }
    }

    /// Single-valued side of a foreign key held by `from_entity`.
    pub fn many_to_one(
        name: impl Into<String>,
        from_entity: impl Into<String>,
        to_entity: impl Into<String>,
    ) -> Self {
        Self::new(name, from_entity, to_entity, RelationKind::ManyToOne)
    }

    /// Collection side of a foreign key held by `to_entity`.
    pub fn one_to_many(
        name: impl Into<String>,
        from_entity: impl Into<String>,
        to_entity: impl Into<String>,
    ) -> Self {
        Self::new(name, from_entity, to_entity, RelationKind::OneToMany)
    }

    /// Single-valued association with at most one row on either side.
    pub fn one_to_one(
        name: impl Into<String>,
        from_entity: impl Into<String>,
        to_entity: impl Into<String>,
    ) -> Self {
        Self::new(name, from_entity, to_entity, RelationKind::OneToOne)
    }

    /// Collection routed through the join entity `secondary`.
    pub fn many_to_many(
        name: impl Into<String>,
        from_entity: impl Into<String>,
        to_entity: impl Into<String>,
        secondary: impl Into<String>,
    ) -> Self {
        Self {
            secondary: Some(secondary.into()),
            ..Self::new(name, from_entity, to_entity, RelationKind::ManyToMany)
        }
    }

    /// Set an explicit join selector.
    pub fn join_on(mut self, local_field: impl Into<String>, remote_field: impl Into<String>) -> Self {
        self.join = Some(JoinCondition {
            local_field: local_field.into(),
            remote_field: remote_field.into(),
        });
        self
    }

    /// Pair with the named relationship on the target entity.
    pub fn back_populates(mut self, name: impl Into<String>) -> Self {
        self.back_populates = Some(name.into());
        self
    }

    /// Set the session-level cascade.
    pub fn cascade(mut self, cascade: RelationCascade) -> Self {
        self.cascade = cascade;
        self
    }

    /// Whether navigating yields a collection.
    pub fn is_collection(&self) -> bool {
        self.kind.is_collection()
    }

    /// Check if this is a many-to-many relation.
    pub fn is_many_to_many(&self) -> bool {
        self.kind == RelationKind::ManyToMany
    }

    /// Qualified `Entity.name` used in messages.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.from_entity, self.name)
    }
}

/// One equi-join hop: `from_entity.from_field = to_entity.to_field`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JoinStep {
    /// Near entity.
    pub from_entity: String,
    /// Near field.
    pub from_field: String,
    /// Far entity.
    pub to_entity: String,
    /// Far field.
    pub to_field: String,
}

impl JoinStep {
    /// The same hop walked in the other direction.
    pub fn reversed(&self) -> JoinStep {
        JoinStep {
            from_entity: self.to_entity.clone(),
            from_field: self.to_field.clone(),
            to_entity: self.from_entity.clone(),
            to_field: self.from_field.clone(),
        }
    }
}

/// A relationship together with its resolved join path.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRelation {
    /// The declaration.
    pub def: RelationDef,
    /// Hops from the declaring entity to the target: one for direct
    /// relationships, two through the join entity for many-to-many.
    pub path: Vec<JoinStep>,
    /// Whether the declaring entity holds the foreign key of a single-hop path.
    pub holds_key: bool,
}

impl ResolvedRelation {
    /// Relationship name.
    pub fn name(&self) -> &str {
        &self.def.name
    }

    /// Target entity.
    pub fn target(&self) -> &str {
        &self.def.to_entity
    }

    /// Shape.
    pub fn kind(&self) -> RelationKind {
        self.def.kind
    }

    /// Whether navigating yields a collection.
    pub fn is_collection(&self) -> bool {
        self.def.is_collection()
    }

    /// The path walked from the target back to the declaring entity.
    pub fn reversed_path(&self) -> Vec<JoinStep> {
        self.path.iter().rev().map(JoinStep::reversed).collect()
    }

    /// The foreign key column on the declaring entity, for single-hop relationships
    /// where the declaring entity holds the key.
    pub fn owning_field(&self) -> Option<&str> {
        match self.path.as_slice() {
            [step] if self.holds_key => Some(&step.from_field),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_many_to_one_builder() {
        let rel = RelationDef::many_to_one("Person1", "BFFault", "Person")
            .join_on("personId", "personId");

        assert_eq!(rel.kind, RelationKind::ManyToOne);
        assert!(!rel.is_collection());
        assert_eq!(rel.qualified_name(), "BFFault.Person1");
        let join = rel.join.as_ref().unwrap();
        assert_eq!(join.local_field, "personId");
        assert_eq!(join.remote_field, "personId");
    }

    #[test]
    fn test_one_to_many_with_cascade() {
        let rel = RelationDef::one_to_many("events", "EventChain", "Event")
            .back_populates("EventChain")
            .cascade(RelationCascade::DeleteOrphan);

        assert!(rel.is_collection());
        assert_eq!(rel.back_populates.as_deref(), Some("EventChain"));
        assert_eq!(rel.cascade, RelationCascade::DeleteOrphan);
    }

    #[test]
    fn test_many_to_many_builder() {
        let rel = RelationDef::many_to_many("Permission", "UserGroup", "Permission", "UserGroup_has_Permission");
        assert!(rel.is_many_to_many());
        assert_eq!(rel.secondary.as_deref(), Some("UserGroup_has_Permission"));
        assert_eq!(rel.cascade, RelationCascade::None);
    }

    #[test]
    fn test_inverse_kinds() {
        assert_eq!(RelationKind::ManyToOne.inverse(), RelationKind::OneToMany);
        assert_eq!(RelationKind::OneToMany.inverse(), RelationKind::ManyToOne);
        assert_eq!(RelationKind::OneToOne.inverse(), RelationKind::OneToOne);
        assert_eq!(RelationKind::ManyToMany.inverse(), RelationKind::ManyToMany);
    }

    #[test]
    fn test_reversed_path() {
        let resolved = ResolvedRelation {
            def: RelationDef::many_to_many("GridInfo", "DataCollection", "GridInfo", "DataCollectionGroup"),
            path: vec![
                JoinStep {
                    from_entity: "DataCollection".into(),
                    from_field: "dataCollectionGroupId".into(),
                    to_entity: "DataCollectionGroup".into(),
                    to_field: "dataCollectionGroupId".into(),
                },
                JoinStep {
                    from_entity: "DataCollectionGroup".into(),
                    from_field: "dataCollectionGroupId".into(),
                    to_entity: "GridInfo".into(),
                    to_field: "dataCollectionGroupId".into(),
                },
            ],
            holds_key: false,
        };

        let reversed = resolved.reversed_path();
        assert_eq!(reversed[0].from_entity, "GridInfo");
        assert_eq!(reversed[1].to_entity, "DataCollection");
        assert_eq!(resolved.owning_field(), None);
    }
}
