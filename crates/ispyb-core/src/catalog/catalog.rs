//! Linked catalog: the validated, read-only graph built from a schema bundle.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use super::{
    ConstraintDef, DefaultValue, EntityDef, JoinStep, ReferentialAction, RelationDef,
    RelationKind, ResolvedRelation, SchemaBundle,
};
use crate::derived::DerivedAccessor;
use crate::error::{CatalogError, Error};

/// A foreign key pointing at an entity, seen from the referenced side.
#[derive(Debug, Clone, PartialEq)]
pub struct Reference {
    /// Entity holding the foreign key.
    pub entity: String,
    /// Foreign key field.
    pub field: String,
    /// Referenced key field on the target.
    pub target_field: String,
    /// Action when the referenced row is deleted.
    pub on_delete: ReferentialAction,
    /// Action when the referenced key changes.
    pub on_update: ReferentialAction,
}

/// The entity catalog.
///
/// Built once from a [`SchemaBundle`] by [`CatalogBuilder::build`], which links
/// every relationship to its join path and validates the whole graph. Cloning is
/// cheap; all clones share the same immutable state.
#[derive(Clone)]
pub struct Catalog {
    inner: Arc<CatalogInner>,
}

struct CatalogInner {
    bundle: SchemaBundle,
    fingerprint: String,
    entities: Vec<Arc<EntityDef>>,
    by_name: HashMap<String, usize>,
    by_table: HashMap<String, usize>,
    relations: HashMap<String, Vec<ResolvedRelation>>,
    incoming: HashMap<String, Vec<Reference>>,
    accessors: HashMap<String, Vec<Arc<dyn DerivedAccessor>>>,
}

/// Collects the schema bundle and derived accessors for one catalog.
pub struct CatalogBuilder {
    bundle: SchemaBundle,
    accessors: Vec<Arc<dyn DerivedAccessor>>,
}

impl CatalogBuilder {
    /// Attach a derived accessor to its entity.
    pub fn with_accessor(mut self, accessor: impl DerivedAccessor + 'static) -> Self {
        self.accessors.push(Arc::new(accessor));
        self
    }

    /// Attach several derived accessors.
    pub fn with_accessors(
        mut self,
        accessors: impl IntoIterator<Item = Arc<dyn DerivedAccessor>>,
    ) -> Self {
        self.accessors.extend(accessors);
        self
    }

    /// Validate and link the catalog.
    pub fn build(self) -> Result<Catalog, CatalogError> {
        let CatalogBuilder { bundle, accessors } = self;

        let fingerprint = bundle
            .fingerprint()
            .map_err(|e| CatalogError::Serialization(e.to_string()))?;

        let (entities, by_name, by_table) = index_entities(&bundle)?;
        let lookup = |name: &str| by_name.get(name).map(|i| entities[*i].as_ref());

        let incoming = link_foreign_keys(&entities, &lookup)?;
        check_constraints(&bundle.constraints, &lookup)?;

        let mut relations: HashMap<String, Vec<ResolvedRelation>> = HashMap::new();
        let mut declared: HashSet<(String, String)> = HashSet::new();
        for def in &bundle.relations {
            let resolved = resolve_relation(def, &lookup)?;
            let from = def.from_entity.clone();
            if !declared.insert((from.clone(), def.name.clone())) {
                return Err(CatalogError::DuplicateRelation {
                    entity: from,
                    relation: def.name.clone(),
                });
            }
            if lookup(&from).is_some_and(|e| e.has_field(&def.name)) {
                return Err(CatalogError::ShadowsField {
                    entity: from,
                    name: def.name.clone(),
                });
            }
            relations.entry(from).or_default().push(resolved);
        }
        check_pairs(&relations)?;

        let accessors = link_accessors(accessors, &lookup, &relations)?;

        info!(
            version = bundle.version,
            entities = entities.len(),
            relations = bundle.relations.len(),
            constraints = bundle.constraints.len(),
            accessors = accessors.values().map(Vec::len).sum::<usize>(),
            fingerprint = %fingerprint,
            "catalog linked"
        );

        Ok(Catalog {
            inner: Arc::new(CatalogInner {
                bundle,
                fingerprint,
                entities,
                by_name,
                by_table,
                relations,
                incoming,
                accessors,
            }),
        })
    }
}

type Indexed = (Vec<Arc<EntityDef>>, HashMap<String, usize>, HashMap<String, usize>);

fn index_entities(bundle: &SchemaBundle) -> Result<Indexed, CatalogError> {
    let mut entities = Vec::with_capacity(bundle.entities.len());
    let mut by_name = HashMap::new();
    let mut by_table = HashMap::new();

    for (index, entity) in bundle.entities.iter().enumerate() {
        if by_name.insert(entity.name.clone(), index).is_some() {
            return Err(CatalogError::DuplicateEntity(entity.name.clone()));
        }
        if by_table.insert(entity.table.clone(), index).is_some() {
            return Err(CatalogError::DuplicateTable(entity.table.clone()));
        }

        let mut seen = HashSet::new();
        for field in &entity.fields {
            if !seen.insert(field.name.as_str()) {
                return Err(CatalogError::DuplicateField {
                    entity: entity.name.clone(),
                    field: field.name.clone(),
                });
            }
        }

        if entity.is_view() {
            if let Some((field, _)) = entity.foreign_keys().next() {
                return Err(CatalogError::RelationOnView {
                    entity: entity.name.clone(),
                    relation: field.name.clone(),
                });
            }
        } else if entity.primary_key().is_empty() {
            return Err(CatalogError::MissingPrimaryKey(entity.name.clone()));
        }

        entities.push(Arc::new(entity.clone()));
    }

    Ok((entities, by_name, by_table))
}

fn link_foreign_keys<'a>(
    entities: &'a [Arc<EntityDef>],
    lookup: &impl Fn(&str) -> Option<&'a EntityDef>,
) -> Result<HashMap<String, Vec<Reference>>, CatalogError> {
    let mut incoming: HashMap<String, Vec<Reference>> = HashMap::new();

    for entity in entities {
        for (field, fk) in entity.foreign_keys() {
            let referenced_by = format!("foreign key {}.{}", entity.name, field.name);
            let target = lookup(&fk.entity).ok_or_else(|| CatalogError::UnknownEntity {
                entity: fk.entity.clone(),
                referenced_by: referenced_by.clone(),
            })?;
            let target_field = target.field(&fk.field).ok_or_else(|| CatalogError::UnknownField {
                entity: target.name.clone(),
                field: fk.field.clone(),
                referenced_by,
            })?;
            if !target_field.primary_key {
                return Err(CatalogError::ForeignKeyTarget {
                    entity: entity.name.clone(),
                    field: field.name.clone(),
                    target: target.name.clone(),
                    target_field: fk.field.clone(),
                });
            }

            incoming.entry(target.name.clone()).or_default().push(Reference {
                entity: entity.name.clone(),
                field: field.name.clone(),
                target_field: fk.field.clone(),
                on_delete: fk.on_delete,
                on_update: fk.on_update,
            });
        }
    }

    Ok(incoming)
}

fn check_constraints<'a>(
    constraints: &[ConstraintDef],
    lookup: &impl Fn(&str) -> Option<&'a EntityDef>,
) -> Result<(), CatalogError> {
    for constraint in constraints {
        let referenced_by = format!("constraint {}", constraint.name());
        let entity = lookup(constraint.entity()).ok_or_else(|| CatalogError::UnknownEntity {
            entity: constraint.entity().to_string(),
            referenced_by: referenced_by.clone(),
        })?;
        if let Some(missing) = constraint.fields().iter().find(|f| !entity.has_field(f)) {
            return Err(CatalogError::UnknownField {
                entity: entity.name.clone(),
                field: missing.clone(),
                referenced_by,
            });
        }
    }
    Ok(())
}

fn endpoint<'a>(
    name: &str,
    def: &RelationDef,
    lookup: &impl Fn(&str) -> Option<&'a EntityDef>,
) -> Result<&'a EntityDef, CatalogError> {
    let entity = lookup(name).ok_or_else(|| CatalogError::UnknownEntity {
        entity: name.to_string(),
        referenced_by: format!("relationship {}", def.qualified_name()),
    })?;
    if entity.is_view() {
        return Err(CatalogError::RelationOnView {
            entity: entity.name.clone(),
            relation: def.qualified_name(),
        });
    }
    Ok(entity)
}

fn step(from: &EntityDef, from_field: &str, to: &EntityDef, to_field: &str) -> JoinStep {
    JoinStep {
        from_entity: from.name.clone(),
        from_field: from_field.to_string(),
        to_entity: to.name.clone(),
        to_field: to_field.to_string(),
    }
}

/// A candidate hop, labelled with the foreign key column that backs it.
struct Link {
    step: JoinStep,
    key: String,
    forward: bool,
}

/// Hops from `near` to `far` backed by a foreign key on `near`.
fn forward_links(near: &EntityDef, far: &EntityDef) -> Vec<Link> {
    near.foreign_keys_to(&far.name)
        .map(|(field, fk)| Link {
            step: step(near, &field.name, far, &fk.field),
            key: format!("{}.{}", near.name, field.name),
            forward: true,
        })
        .collect()
}

/// Hops from `near` to `far` backed by a foreign key on `far`.
fn reverse_links(near: &EntityDef, far: &EntityDef) -> Vec<Link> {
    far.foreign_keys_to(&near.name)
        .map(|(field, fk)| Link {
            step: step(near, &fk.field, far, &field.name),
            key: format!("{}.{}", far.name, field.name),
            forward: false,
        })
        .collect()
}

fn single_link(
    def: &RelationDef,
    near: &EntityDef,
    far: &EntityDef,
    mut candidates: Vec<Link>,
) -> Result<Link, CatalogError> {
    match candidates.len() {
        1 => Ok(candidates.remove(0)),
        0 => Err(CatalogError::NoForeignKey {
            entity: def.from_entity.clone(),
            relation: def.name.clone(),
            from: near.name.clone(),
            to: far.name.clone(),
        }),
        _ => Err(CatalogError::AmbiguousForeignKey {
            entity: def.from_entity.clone(),
            relation: def.name.clone(),
            candidates: candidates.into_iter().map(|c| c.key).collect(),
        }),
    }
}

fn resolve_relation<'a>(
    def: &RelationDef,
    lookup: &impl Fn(&str) -> Option<&'a EntityDef>,
) -> Result<ResolvedRelation, CatalogError> {
    let from = endpoint(&def.from_entity, def, lookup)?;
    let to = endpoint(&def.to_entity, def, lookup)?;

    let invalid_join = |reason: &str| CatalogError::InvalidJoin {
        entity: def.from_entity.clone(),
        relation: def.name.clone(),
        reason: reason.to_string(),
    };

    let (path, holds_key) = match (def.kind, &def.secondary, &def.join) {
        (RelationKind::ManyToMany, None, _) => {
            return Err(invalid_join("many-to-many relationship needs a join entity"));
        }
        (RelationKind::ManyToMany, Some(_), Some(_)) => {
            return Err(invalid_join(
                "explicit join is not supported on many-to-many relationships",
            ));
        }
        (RelationKind::ManyToMany, Some(secondary), None) => {
            let secondary = endpoint(secondary, def, lookup)?;
            let mut first = forward_links(from, secondary);
            first.extend(reverse_links(from, secondary));
            let mut second = forward_links(secondary, to);
            second.extend(reverse_links(secondary, to));
            let path = vec![
                single_link(def, from, secondary, first)?.step,
                single_link(def, secondary, to, second)?.step,
            ];
            (path, false)
        }
        (_, Some(_), _) => {
            return Err(invalid_join(
                "a join entity only applies to many-to-many relationships",
            ));
        }
        (kind, None, Some(join)) => {
            let referenced_by = format!("relationship {}", def.qualified_name());
            for (entity, field) in [(from, &join.local_field), (to, &join.remote_field)] {
                if !entity.has_field(field) {
                    return Err(CatalogError::UnknownField {
                        entity: entity.name.clone(),
                        field: field.clone(),
                        referenced_by,
                    });
                }
            }
            let local_is_key = from
                .field(&join.local_field)
                .is_some_and(|f| f.foreign_key.is_some());
            let holds_key = match kind {
                RelationKind::ManyToOne => true,
                RelationKind::OneToOne => local_is_key,
                _ => false,
            };
            (vec![step(from, &join.local_field, to, &join.remote_field)], holds_key)
        }
        (RelationKind::ManyToOne, None, None) => {
            (vec![single_link(def, from, to, forward_links(from, to))?.step], true)
        }
        (RelationKind::OneToMany, None, None) => {
            (vec![single_link(def, from, to, reverse_links(from, to))?.step], false)
        }
        (RelationKind::OneToOne, None, None) => {
            let forward = forward_links(from, to);
            let candidates = if forward.is_empty() {
                reverse_links(from, to)
            } else {
                forward
            };
            let link = single_link(def, from, to, candidates)?;
            (vec![link.step], link.forward)
        }
    };

    debug!(relation = %def.qualified_name(), hops = path.len(), "relationship resolved");

    Ok(ResolvedRelation {
        def: def.clone(),
        path,
        holds_key,
    })
}

fn check_pairs(relations: &HashMap<String, Vec<ResolvedRelation>>) -> Result<(), CatalogError> {
    for resolved in relations.values().flatten() {
        let def = &resolved.def;
        let Some(back) = &def.back_populates else {
            continue;
        };

        let one_sided = || CatalogError::OneSidedBackPopulates {
            entity: def.from_entity.clone(),
            relation: def.name.clone(),
            target: def.to_entity.clone(),
            back_populates: back.clone(),
        };
        let mismatch = |reason: String| CatalogError::BackPopulatesMismatch {
            entity: def.from_entity.clone(),
            relation: def.name.clone(),
            reason,
        };

        let counterpart = relations
            .get(&def.to_entity)
            .and_then(|rels| rels.iter().find(|r| r.name() == back))
            .ok_or_else(one_sided)?;

        if counterpart.def.to_entity != def.from_entity
            || counterpart.def.back_populates.as_deref() != Some(def.name.as_str())
        {
            return Err(one_sided());
        }
        if counterpart.kind() != def.kind.inverse() {
            return Err(mismatch(format!(
                "{:?} is paired with {:?} '{}.{}'",
                def.kind,
                counterpart.kind(),
                counterpart.def.from_entity,
                counterpart.name()
            )));
        }
        if counterpart.def.secondary != def.secondary {
            return Err(mismatch("the two sides route through different join entities".into()));
        }
        if counterpart.path != resolved.reversed_path() {
            return Err(mismatch("the two sides use different join conditions".into()));
        }
    }
    Ok(())
}

fn link_accessors<'a>(
    accessors: Vec<Arc<dyn DerivedAccessor>>,
    lookup: &impl Fn(&str) -> Option<&'a EntityDef>,
    relations: &HashMap<String, Vec<ResolvedRelation>>,
) -> Result<HashMap<String, Vec<Arc<dyn DerivedAccessor>>>, CatalogError> {
    let mut linked: HashMap<String, Vec<Arc<dyn DerivedAccessor>>> = HashMap::new();

    for accessor in accessors {
        let entity = lookup(accessor.entity()).ok_or_else(|| CatalogError::UnknownEntity {
            entity: accessor.entity().to_string(),
            referenced_by: format!("derived accessor {}", accessor.name()),
        })?;
        let name = accessor.name().to_string();
        let own_relations = relations.get(&entity.name).map(Vec::as_slice).unwrap_or(&[]);

        if linked
            .get(&entity.name)
            .is_some_and(|list| list.iter().any(|a| a.name() == name))
        {
            return Err(CatalogError::DuplicateAccessor {
                entity: entity.name.clone(),
                accessor: name,
            });
        }
        if entity.has_field(&name) || own_relations.iter().any(|r| r.name() == name) {
            return Err(CatalogError::ShadowsField {
                entity: entity.name.clone(),
                name,
            });
        }

        let invalid = |reason: String| CatalogError::InvalidAccessor {
            entity: entity.name.clone(),
            accessor: name.clone(),
            reason,
        };
        for column in accessor.expression().columns() {
            let mut current = entity;
            for step in &column.path {
                let relation = relations
                    .get(&current.name)
                    .and_then(|rels| rels.iter().find(|r| r.name() == step))
                    .ok_or_else(|| invalid(format!("unknown relationship '{}.{}'", current.name, step)))?;
                if relation.is_collection() {
                    return Err(invalid(format!(
                        "relationship '{}.{}' is a collection",
                        current.name, step
                    )));
                }
                current = lookup(relation.target())
                    .ok_or_else(|| invalid(format!("unknown entity '{}'", relation.target())))?;
            }
            if !current.has_field(&column.field) {
                return Err(invalid(format!("unknown field '{}.{}'", current.name, column.field)));
            }
        }

        linked.entry(entity.name.clone()).or_default().push(accessor);
    }

    Ok(linked)
}

impl Catalog {
    /// Start building a catalog from a schema bundle.
    pub fn builder(bundle: SchemaBundle) -> CatalogBuilder {
        CatalogBuilder {
            bundle,
            accessors: Vec::new(),
        }
    }

    /// Build a catalog without derived accessors.
    pub fn new(bundle: SchemaBundle) -> Result<Self, CatalogError> {
        Self::builder(bundle).build()
    }

    /// Schema version of the underlying bundle.
    pub fn version(&self) -> u64 {
        self.inner.bundle.version
    }

    /// Hex-encoded blake3 digest of the serialized schema bundle.
    pub fn fingerprint(&self) -> &str {
        &self.inner.fingerprint
    }

    /// The schema bundle the catalog was built from.
    pub fn bundle(&self) -> &SchemaBundle {
        &self.inner.bundle
    }

    /// Get an entity by name.
    pub fn entity(&self, name: &str) -> Option<&EntityDef> {
        self.inner
            .by_name
            .get(name)
            .map(|i| self.inner.entities[*i].as_ref())
    }

    /// Get an entity by name, or an [`Error::UnknownEntity`].
    pub fn require_entity(&self, name: &str) -> Result<&EntityDef, Error> {
        self.entity(name)
            .ok_or_else(|| Error::UnknownEntity(name.to_string()))
    }

    /// Shared handle to an entity definition, as held by instances.
    pub fn entity_handle(&self, name: &str) -> Result<Arc<EntityDef>, Error> {
        self.inner
            .by_name
            .get(name)
            .map(|i| self.inner.entities[*i].clone())
            .ok_or_else(|| Error::UnknownEntity(name.to_string()))
    }

    /// Get the entity bound to a table or view.
    pub fn entity_by_table(&self, table: &str) -> Option<&EntityDef> {
        self.inner
            .by_table
            .get(table)
            .map(|i| self.inner.entities[*i].as_ref())
    }

    /// All entities in declaration order.
    pub fn entities(&self) -> impl Iterator<Item = &EntityDef> {
        self.inner.entities.iter().map(|e| e.as_ref())
    }

    /// Number of entities (tables, join tables and views).
    pub fn entity_count(&self) -> usize {
        self.inner.entities.len()
    }

    /// Get a relationship declared on an entity.
    pub fn relation(&self, entity: &str, name: &str) -> Option<&ResolvedRelation> {
        self.relations_of(entity).iter().find(|r| r.name() == name)
    }

    /// Get a relationship, or an [`Error::UnknownRelation`].
    pub fn require_relation(&self, entity: &str, name: &str) -> Result<&ResolvedRelation, Error> {
        self.relation(entity, name).ok_or_else(|| Error::UnknownRelation {
            entity: entity.to_string(),
            relation: name.to_string(),
        })
    }

    /// Relationships declared on an entity, in declaration order.
    pub fn relations_of(&self, entity: &str) -> &[ResolvedRelation] {
        self.inner
            .relations
            .get(entity)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The counterpart of a bidirectional relationship.
    pub fn counterpart(&self, relation: &ResolvedRelation) -> Option<&ResolvedRelation> {
        let back = relation.def.back_populates.as_deref()?;
        self.relation(relation.target(), back)
    }

    /// Foreign keys of other entities that reference this one.
    pub fn referencing(&self, entity: &str) -> &[Reference] {
        self.inner
            .incoming
            .get(entity)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Get a derived accessor.
    pub fn accessor(&self, entity: &str, name: &str) -> Option<&Arc<dyn DerivedAccessor>> {
        self.accessors_of(entity).iter().find(|a| a.name() == name)
    }

    /// Get a derived accessor, or an [`Error::UnknownAccessor`].
    pub fn require_accessor(
        &self,
        entity: &str,
        name: &str,
    ) -> Result<&Arc<dyn DerivedAccessor>, Error> {
        self.accessor(entity, name).ok_or_else(|| Error::UnknownAccessor {
            entity: entity.to_string(),
            accessor: name.to_string(),
        })
    }

    /// Derived accessors attached to an entity.
    pub fn accessors_of(&self, entity: &str) -> &[Arc<dyn DerivedAccessor>] {
        self.inner
            .accessors
            .get(entity)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Multi-column constraints and index hints of an entity.
    pub fn constraints_of(&self, entity: &str) -> Vec<&ConstraintDef> {
        self.inner.bundle.constraints_for(entity)
    }

    /// Describe the catalog as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, Error> {
        let description = CatalogDescription {
            version: self.version(),
            fingerprint: self.fingerprint(),
            entities: self.entities().map(|e| self.describe(e)).collect(),
        };
        serde_json::to_string_pretty(&description).map_err(|e| Error::Serialization(e.to_string()))
    }

    fn describe<'a>(&'a self, entity: &'a EntityDef) -> EntityDescription<'a> {
        EntityDescription {
            name: &entity.name,
            table: &entity.table,
            kind: if entity.is_view() { "view" } else { "table" },
            comment: entity.comment.as_deref(),
            primary_key: entity.primary_key_names(),
            fields: entity
                .fields
                .iter()
                .map(|f| FieldDescription {
                    name: &f.name,
                    sql_type: f.column_type.sql_type(),
                    nullable: f.nullable,
                    primary_key: f.primary_key,
                    indexed: f.indexed,
                    unique: f.unique,
                    default: f.default.as_ref().map(describe_default),
                    references: f
                        .foreign_key
                        .as_ref()
                        .map(|fk| format!("{}.{}", fk.entity, fk.field)),
                })
                .collect(),
            relationships: self
                .relations_of(&entity.name)
                .iter()
                .map(|r| RelationDescription {
                    name: r.name(),
                    target: r.target(),
                    kind: match r.kind() {
                        RelationKind::ManyToOne => "many_to_one",
                        RelationKind::OneToMany => "one_to_many",
                        RelationKind::OneToOne => "one_to_one",
                        RelationKind::ManyToMany => "many_to_many",
                    },
                    secondary: r.def.secondary.as_deref(),
                    back_populates: r.def.back_populates.as_deref(),
                    join: r
                        .path
                        .iter()
                        .map(|s| {
                            format!(
                                "{}.{} = {}.{}",
                                s.from_entity, s.from_field, s.to_entity, s.to_field
                            )
                        })
                        .collect(),
                })
                .collect(),
            accessors: self.accessors_of(&entity.name).iter().map(|a| a.name()).collect(),
            constraints: self
                .constraints_of(&entity.name)
                .into_iter()
                .map(|c| ConstraintDescription {
                    name: c.name(),
                    unique: c.is_unique(),
                    fields: c.fields(),
                })
                .collect(),
        }
    }
}

fn describe_default(default: &DefaultValue) -> String {
    match default {
        DefaultValue::Int(v) => v.to_string(),
        DefaultValue::Float(v) => v.to_string(),
        DefaultValue::String(s) => format!("'{}'", s),
        DefaultValue::CurrentTimestamp => "CURRENT_TIMESTAMP".to_string(),
        DefaultValue::ZeroTimestamp => "'0000-00-00 00:00:00'".to_string(),
    }
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("version", &self.version())
            .field("entities", &self.entity_count())
            .field("fingerprint", &self.fingerprint())
            .finish()
    }
}

#[derive(Serialize)]
struct CatalogDescription<'a> {
    version: u64,
    fingerprint: &'a str,
    entities: Vec<EntityDescription<'a>>,
}

#[derive(Serialize)]
struct EntityDescription<'a> {
    name: &'a str,
    table: &'a str,
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<&'a str>,
    primary_key: Vec<&'a str>,
    fields: Vec<FieldDescription<'a>>,
    relationships: Vec<RelationDescription<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    accessors: Vec<&'a str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    constraints: Vec<ConstraintDescription<'a>>,
}

#[derive(Serialize)]
struct FieldDescription<'a> {
    name: &'a str,
    sql_type: String,
    nullable: bool,
    primary_key: bool,
    indexed: bool,
    unique: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    default: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    references: Option<String>,
}

#[derive(Serialize)]
struct RelationDescription<'a> {
    name: &'a str,
    target: &'a str,
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    secondary: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    back_populates: Option<&'a str>,
    join: Vec<String>,
}

#[derive(Serialize)]
struct ConstraintDescription<'a> {
    name: &'a str,
    unique: bool,
    fields: &'a [String],
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ColumnType, FieldDef, ForeignKey, RelationCascade};
    use crate::query::Expr;
    use crate::session::Instance;
    use crate::value::Value;

    fn id(name: &str) -> FieldDef {
        FieldDef::new(name, ColumnType::int(10)).primary_key()
    }

    fn fk(name: &str, entity: &str, field: &str) -> FieldDef {
        FieldDef::new(name, ColumnType::int(10))
            .references(ForeignKey::to(entity, field).on_delete(ReferentialAction::Cascade))
    }

    fn bundle() -> SchemaBundle {
        SchemaBundle::new(1)
            .with_entity(
                EntityDef::table("Proposal", "Proposal")
                    .with_field(id("proposalId"))
                    .with_field(FieldDef::new("proposalCode", ColumnType::varchar(45)))
                    .with_field(FieldDef::new("proposalNumber", ColumnType::varchar(45))),
            )
            .with_entity(
                EntityDef::table("BLSession", "BLSession")
                    .with_field(id("sessionId"))
                    .with_field(fk("proposalId", "Proposal", "proposalId"))
                    .with_field(FieldDef::new("visit_number", ColumnType::int(10))),
            )
            .with_entity(
                EntityDef::table("Person", "Person")
                    .with_field(id("personId"))
                    .with_field(FieldDef::new("login", ColumnType::varchar(45))),
            )
            .with_entity(
                EntityDef::table("SessionHasPerson", "Session_has_Person")
                    .with_field(id("sessionId").references(ForeignKey::to("BLSession", "sessionId")))
                    .with_field(id("personId").references(ForeignKey::to("Person", "personId"))),
            )
            .with_entity(
                EntityDef::table("BFFault", "BF_fault")
                    .with_field(id("faultId"))
                    .with_field(fk("personId", "Person", "personId"))
                    .with_field(fk("assigneeId", "Person", "personId")),
            )
            .with_entity(
                EntityDef::view("v_session", "v_session")
                    .with_field(FieldDef::new("sessionId", ColumnType::int(10))),
            )
            .with_relation(RelationDef::many_to_one("Proposal", "BLSession", "Proposal").back_populates("BLSession"))
            .with_relation(
                RelationDef::one_to_many("BLSession", "Proposal", "BLSession")
                    .back_populates("Proposal")
                    .cascade(RelationCascade::Delete),
            )
            .with_relation(
                RelationDef::many_to_many("Person", "BLSession", "Person", "SessionHasPerson")
                    .back_populates("BLSession"),
            )
            .with_relation(
                RelationDef::many_to_many("BLSession", "Person", "BLSession", "SessionHasPerson")
                    .back_populates("Person"),
            )
            .with_relation(RelationDef::many_to_one("Person", "BFFault", "Person").join_on("assigneeId", "personId"))
            .with_relation(RelationDef::many_to_one("Person1", "BFFault", "Person").join_on("personId", "personId"))
    }

    #[derive(Debug)]
    struct ProposalName;

    impl DerivedAccessor for ProposalName {
        fn entity(&self) -> &str {
            "Proposal"
        }
        fn name(&self) -> &str {
            "proposal"
        }
        fn evaluate(&self, instance: &Instance) -> Option<Value> {
            crate::derived::present(self.expression().evaluate(instance))
        }
        fn expression(&self) -> Expr {
            Expr::concat([Expr::column("proposalCode"), Expr::column("proposalNumber")])
        }
    }

    #[derive(Debug)]
    struct Broken(Expr);

    impl DerivedAccessor for Broken {
        fn entity(&self) -> &str {
            "Proposal"
        }
        fn name(&self) -> &str {
            "broken"
        }
        fn evaluate(&self, _instance: &Instance) -> Option<Value> {
            None
        }
        fn expression(&self) -> Expr {
            self.0.clone()
        }
    }

    #[test]
    fn test_build_and_lookup() {
        let catalog = Catalog::builder(bundle()).with_accessor(ProposalName).build().unwrap();

        assert_eq!(catalog.entity_count(), 6);
        assert_eq!(catalog.entity_by_table("BF_fault").unwrap().name, "BFFault");
        assert!(catalog.require_entity("Missing").is_err());
        assert_eq!(catalog.relations_of("BLSession").len(), 2);
        assert!(catalog.accessor("Proposal", "proposal").is_some());
        assert_eq!(catalog.fingerprint().len(), 64);

        let proposal = catalog.relation("BLSession", "Proposal").unwrap();
        assert_eq!(proposal.owning_field(), Some("proposalId"));
        let back = catalog.counterpart(proposal).unwrap();
        assert_eq!(back.name(), "BLSession");
        assert!(back.is_collection());

        let refs: Vec<_> = catalog.referencing("Person").iter().map(|r| r.field.as_str()).collect();
        assert_eq!(refs, vec!["personId", "personId", "assigneeId"]);
    }

    #[test]
    fn test_many_to_many_path() {
        let catalog = Catalog::new(bundle()).unwrap();
        let rel = catalog.relation("BLSession", "Person").unwrap();
        assert_eq!(rel.path.len(), 2);
        assert_eq!(rel.path[0].to_entity, "SessionHasPerson");
        assert_eq!(rel.path[0].to_field, "sessionId");
        assert_eq!(rel.path[1].from_field, "personId");
        assert_eq!(rel.path[1].to_entity, "Person");
    }

    #[test]
    fn test_ambiguous_foreign_key() {
        let broken = bundle().with_relation(RelationDef::many_to_one("Reporter", "BFFault", "Person"));
        let err = Catalog::new(broken).unwrap_err();
        match err {
            CatalogError::AmbiguousForeignKey { relation, candidates, .. } => {
                assert_eq!(relation, "Reporter");
                assert_eq!(candidates, vec!["BFFault.personId", "BFFault.assigneeId"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_one_sided_back_populates() {
        let mut broken = bundle();
        broken.relations.retain(|r| !(r.from_entity == "Proposal" && r.name == "BLSession"));
        let err = Catalog::new(broken).unwrap_err();
        assert!(matches!(err, CatalogError::OneSidedBackPopulates { ref relation, .. } if relation == "Proposal"));
    }

    #[test]
    fn test_duplicate_relation() {
        let broken = bundle().with_relation(RelationDef::many_to_one("Proposal", "BLSession", "Proposal"));
        assert!(matches!(
            Catalog::new(broken).unwrap_err(),
            CatalogError::DuplicateRelation { .. }
        ));
    }

    #[test]
    fn test_unknown_targets() {
        let broken = bundle().with_entity(
            EntityDef::table("Orphan", "Orphan")
                .with_field(id("orphanId"))
                .with_field(fk("missingId", "Missing", "missingId")),
        );
        assert!(matches!(
            Catalog::new(broken).unwrap_err(),
            CatalogError::UnknownEntity { ref entity, .. } if entity == "Missing"
        ));

        let broken = bundle().with_relation(RelationDef::many_to_one("Nowhere", "BLSession", "Nowhere"));
        assert!(matches!(Catalog::new(broken).unwrap_err(), CatalogError::UnknownEntity { .. }));
    }

    #[test]
    fn test_foreign_key_must_target_key() {
        let broken = bundle().with_entity(
            EntityDef::table("Badge", "Badge")
                .with_field(id("badgeId"))
                .with_field(fk("login", "Person", "login")),
        );
        assert!(matches!(Catalog::new(broken).unwrap_err(), CatalogError::ForeignKeyTarget { .. }));
    }

    #[test]
    fn test_relation_on_view() {
        let broken = bundle().with_relation(RelationDef::many_to_one("Session", "v_session", "BLSession"));
        assert!(matches!(Catalog::new(broken).unwrap_err(), CatalogError::RelationOnView { .. }));
    }

    #[test]
    fn test_table_without_primary_key() {
        let broken = bundle().with_entity(
            EntityDef::table("Loose", "Loose").with_field(FieldDef::new("x", ColumnType::int(10))),
        );
        assert_eq!(
            Catalog::new(broken).unwrap_err(),
            CatalogError::MissingPrimaryKey("Loose".into())
        );
    }

    #[test]
    fn test_duplicate_names() {
        let broken = bundle().with_entity(EntityDef::table("Person", "Person2").with_field(id("personId")));
        assert_eq!(
            Catalog::new(broken).unwrap_err(),
            CatalogError::DuplicateEntity("Person".into())
        );

        let broken = bundle().with_entity(EntityDef::table("Person2", "Person").with_field(id("personId")));
        assert_eq!(
            Catalog::new(broken).unwrap_err(),
            CatalogError::DuplicateTable("Person".into())
        );

        let broken = bundle().with_entity(
            EntityDef::table("Twice", "Twice")
                .with_field(id("twiceId"))
                .with_field(FieldDef::new("twiceId", ColumnType::int(10))),
        );
        assert!(matches!(Catalog::new(broken).unwrap_err(), CatalogError::DuplicateField { .. }));

        let broken = bundle().with_relation(RelationDef::many_to_one("visit_number", "BLSession", "Proposal"));
        assert!(matches!(Catalog::new(broken).unwrap_err(), CatalogError::ShadowsField { .. }));
    }

    #[test]
    fn test_pair_kind_mismatch() {
        let mut broken = bundle();
        for rel in &mut broken.relations {
            if rel.from_entity == "Proposal" && rel.name == "BLSession" {
                rel.kind = RelationKind::OneToOne;
            }
        }
        assert!(matches!(
            Catalog::new(broken).unwrap_err(),
            CatalogError::BackPopulatesMismatch { .. }
        ));
    }

    #[test]
    fn test_invalid_accessors() {
        let err = Catalog::builder(bundle())
            .with_accessor(Broken(Expr::related(&["BLSession"], "visit_number")))
            .build()
            .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidAccessor { ref reason, .. } if reason.contains("collection")));

        let err = Catalog::builder(bundle())
            .with_accessor(Broken(Expr::column("proposalTitle")))
            .build()
            .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidAccessor { .. }));

        let err = Catalog::builder(bundle())
            .with_accessor(ProposalName)
            .with_accessor(ProposalName)
            .build()
            .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateAccessor { .. }));
    }

    #[test]
    fn test_to_json() {
        let catalog = Catalog::builder(bundle()).with_accessor(ProposalName).build().unwrap();
        let json: serde_json::Value = serde_json::from_str(&catalog.to_json().unwrap()).unwrap();
        let entities = json["entities"].as_array().unwrap();
        let session = entities.iter().find(|e| e["name"] == "BLSession").unwrap();
        assert_eq!(session["relationships"][0]["join"][0], "BLSession.proposalId = Proposal.proposalId");
        assert_eq!(session["fields"][0]["sql_type"], "int(10) unsigned");
        let proposal = entities.iter().find(|e| e["name"] == "Proposal").unwrap();
        assert_eq!(proposal["accessors"][0], "proposal");
    }
}
