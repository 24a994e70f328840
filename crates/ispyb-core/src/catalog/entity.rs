//! Entity definitions.

use super::field::{FieldDef, ForeignKey};
use rkyv::{Archive, Deserialize, Serialize};

/// What an entity is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Archive, Serialize, Deserialize)]
pub enum EntityKind {
    /// A base table: keyed and writable.
    Table,
    /// A reporting view: no key, no relationships, read-only.
    View,
}

/// An entity definition bound to one table or view.
#[derive(Debug, Clone, PartialEq, Archive, Serialize, Deserialize)]
pub struct EntityDef {
    /// Entity name (unique within the catalog).
    pub name: String,
    /// Bound table or view name.
    pub table: String,
    /// Table or view.
    pub kind: EntityKind,
    /// Field definitions in declaration order.
    pub fields: Vec<FieldDef>,
    /// Table comment from the database schema.
    pub comment: Option<String>,
}

impl EntityDef {
    /// Create an entity bound to a base table.
    pub fn table(name: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table: table.into(),
            kind: EntityKind::Table,
            fields: Vec::new(),
            comment: None,
        }
    }

    /// Create an entity bound to a reporting view.
    pub fn view(name: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            kind: EntityKind::View,
            ..Self::table(name, table)
        }
    }

    /// Add a field to the entity.
    pub fn with_field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    /// Add multiple fields.
    pub fn with_fields(mut self, fields: impl IntoIterator<Item = FieldDef>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Attach a table comment.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Get a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Check if the entity declares a field.
    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Check if this entity is a read-only view.
    pub fn is_view(&self) -> bool {
        self.kind == EntityKind::View
    }

    /// Primary key fields in declaration order. Empty for views.
    pub fn primary_key(&self) -> Vec<&FieldDef> {
        self.fields.iter().filter(|f| f.primary_key).collect()
    }

    /// Names of the primary key fields.
    pub fn primary_key_names(&self) -> Vec<&str> {
        self.primary_key().into_iter().map(|f| f.name.as_str()).collect()
    }

    /// Fields carrying a lookup or unique index.
    pub fn indexed_fields(&self) -> Vec<&FieldDef> {
        self.fields
            .iter()
            .filter(|f| f.indexed || f.unique)
            .collect()
    }

    /// Foreign key fields with their targets.
    pub fn foreign_keys(&self) -> impl Iterator<Item = (&FieldDef, &ForeignKey)> + '_ {
        self.fields
            .iter()
            .filter_map(|f| f.foreign_key.as_ref().map(|fk| (f, fk)))
    }

    /// Foreign key fields targeting `entity`.
    pub fn foreign_keys_to<'a>(
        &'a self,
        entity: &'a str,
    ) -> impl Iterator<Item = (&'a FieldDef, &'a ForeignKey)> + 'a {
        self.foreign_keys().filter(move |(_, fk)| fk.entity == entity)
    }

    /// The field the engine assigns on insert, if any.
    ///
    /// Only a single-column integer primary key that is not itself a foreign key
    /// is auto-incremented; composite and inherited keys are caller-supplied.
    pub fn auto_increment_field(&self) -> Option<&FieldDef> {
        match self.primary_key().as_slice() {
            [field] if field.column_type.is_integer() && field.foreign_key.is_none() => Some(*field),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::field::{ForeignKey, ReferentialAction};
    use crate::catalog::types::ColumnType;

    fn protein() -> EntityDef {
        EntityDef::table("Protein", "Protein")
            .with_field(FieldDef::new("proteinId", ColumnType::int(10)).primary_key())
            .with_field(
                FieldDef::new("proposalId", ColumnType::int(10))
                    .not_null()
                    .indexed()
                    .references(
                        ForeignKey::to("Proposal", "proposalId")
                            .on_delete(ReferentialAction::Cascade),
                    ),
            )
            .with_field(FieldDef::new("name", ColumnType::varchar(255)))
            .with_field(FieldDef::new("acronym", ColumnType::varchar(45)).indexed())
    }

    #[test]
    fn test_entity_def_builder() {
        let entity = protein().with_comment("Macromolecules");

        assert_eq!(entity.name, "Protein");
        assert_eq!(entity.table, "Protein");
        assert_eq!(entity.fields.len(), 4);
        assert!(entity.has_field("acronym"));
        assert!(!entity.has_field("missing"));
        assert!(!entity.is_view());
        assert_eq!(entity.comment.as_deref(), Some("Macromolecules"));
    }

    #[test]
    fn test_primary_key_and_indexes() {
        let entity = protein();
        assert_eq!(entity.primary_key_names(), vec!["proteinId"]);
        let indexed: Vec<_> = entity.indexed_fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(indexed, vec!["proposalId", "acronym"]);
    }

    #[test]
    fn test_foreign_keys() {
        let entity = protein();
        let fks: Vec<_> = entity.foreign_keys_to("Proposal").map(|(f, _)| f.name.as_str()).collect();
        assert_eq!(fks, vec!["proposalId"]);
        assert_eq!(entity.foreign_keys_to("Person").count(), 0);
    }

    #[test]
    fn test_auto_increment_field() {
        assert_eq!(
            protein().auto_increment_field().map(|f| f.name.as_str()),
            Some("proteinId")
        );

        let composite = EntityDef::table("SessionHasPerson", "Session_has_Person")
            .with_field(FieldDef::new("sessionId", ColumnType::int(10)).primary_key())
            .with_field(FieldDef::new("personId", ColumnType::int(10)).primary_key());
        assert!(composite.auto_increment_field().is_none());

        let inherited = EntityDef::table("SSXDataCollection", "SSXDataCollection").with_field(
            FieldDef::new("dataCollectionId", ColumnType::int(10))
                .primary_key()
                .references(ForeignKey::to("DataCollection", "dataCollectionId")),
        );
        assert!(inherited.auto_increment_field().is_none());
    }

    #[test]
    fn test_view_has_no_key() {
        let view = EntityDef::view("v_session", "v_session")
            .with_field(FieldDef::new("sessionId", ColumnType::int(10)));
        assert!(view.is_view());
        assert!(view.primary_key().is_empty());
    }
}
