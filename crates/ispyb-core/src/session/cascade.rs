//! Cascade executor for handling referential integrity on deletes.
//!
//! Deleting a row first follows relationship-level cascades (`Delete` and
//! `DeleteOrphan` collections), then removes many-to-many link rows, then
//! applies each referencing foreign key's action:
//! - RESTRICT: refuse while dependents exist
//! - CASCADE: delete dependents recursively
//! - SET NULL: clear the foreign key on dependents

use std::collections::HashSet;

use tracing::{debug, instrument};

use super::rows::{field_value, matching_rows};
use crate::catalog::{Catalog, ReferentialAction, RelationCascade, RelationKind};
use crate::error::{CascadeError, ConstraintError, Error};
use crate::storage::{value_codec, RowKey, Transaction};
use crate::value::Value;

/// Maximum cascade depth to prevent runaway recursion.
const MAX_CASCADE_DEPTH: usize = 100;

/// Result of a cascade operation.
#[derive(Debug, Default)]
pub struct CascadeResult {
    /// Rows that were deleted, including the requested ones.
    pub deleted: Vec<RowKey>,
    /// Rows whose foreign key field was set to null.
    pub nullified: Vec<(RowKey, String)>,
}

impl CascadeResult {
    /// Get the total number of affected rows.
    pub fn affected_count(&self) -> usize {
        self.deleted.len() + self.nullified.len()
    }
}

/// Executes cascade operations for delete.
pub struct CascadeExecutor<'a> {
    catalog: &'a Catalog,
}

impl<'a> CascadeExecutor<'a> {
    /// Create a new cascade executor.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Delete one row and everything its cascade rules reach.
    pub fn process_delete(
        &self,
        txn: &mut Transaction<'_>,
        key: &RowKey,
    ) -> Result<CascadeResult, Error> {
        self.process_deletes(txn, std::slice::from_ref(key))
    }

    /// Delete several rows as one operation.
    ///
    /// Rows in the batch never restrict or get nulled on behalf of each other;
    /// they are going away anyway.
    #[instrument(skip_all, fields(rows = keys.len()))]
    pub fn process_deletes(
        &self,
        txn: &mut Transaction<'_>,
        keys: &[RowKey],
    ) -> Result<CascadeResult, Error> {
        let doomed: HashSet<RowKey> = keys.iter().cloned().collect();
        let mut result = CascadeResult::default();
        let mut visited = HashSet::new();

        for key in keys {
            self.delete_recursive(txn, key, &doomed, &mut result, &mut visited, 0)?;
        }

        debug!(
            requested = keys.len(),
            deleted = result.deleted.len(),
            nullified = result.nullified.len(),
            "delete cascade complete"
        );
        Ok(result)
    }

    fn delete_recursive(
        &self,
        txn: &mut Transaction<'_>,
        key: &RowKey,
        doomed: &HashSet<RowKey>,
        result: &mut CascadeResult,
        visited: &mut HashSet<RowKey>,
        depth: usize,
    ) -> Result<(), Error> {
        if depth > MAX_CASCADE_DEPTH {
            return Err(CascadeError::MaxDepthExceeded { depth }.into());
        }

        // Prevent cycles
        if !visited.insert(key.clone()) {
            return Ok(());
        }

        let Some(record) = txn.read(key)? else {
            return Ok(());
        };
        let row = value_codec::decode_row(&record.data)?;
        let entity = self.catalog.require_entity(&key.entity)?;

        for relation in self.catalog.relations_of(&entity.name) {
            match relation.kind() {
                RelationKind::OneToMany | RelationKind::OneToOne
                    if relation.def.cascade != RelationCascade::None && !relation.holds_key =>
                {
                    let [step] = relation.path.as_slice() else {
                        continue;
                    };
                    let value = field_value(&row, &step.from_field);
                    for child in matching_rows(self.catalog, txn, &step.to_entity, &step.to_field, &value)? {
                        self.delete_recursive(txn, &child.key, doomed, result, visited, depth + 1)?;
                    }
                }
                RelationKind::ManyToMany => {
                    let [first, _] = relation.path.as_slice() else {
                        continue;
                    };
                    let join = self.catalog.require_entity(&first.to_entity)?;
                    let is_link = join
                        .field(&first.to_field)
                        .is_some_and(|f| f.foreign_key.is_some());
                    if !is_link {
                        continue;
                    }
                    let value = field_value(&row, &first.from_field);
                    for link in matching_rows(self.catalog, txn, &join.name, &first.to_field, &value)? {
                        self.delete_recursive(txn, &link.key, doomed, result, visited, depth + 1)?;
                    }
                }
                _ => {}
            }
        }

        for reference in self.catalog.referencing(&entity.name) {
            let value = field_value(&row, &reference.target_field);
            let dependents: Vec<_> =
                matching_rows(self.catalog, txn, &reference.entity, &reference.field, &value)?
                    .into_iter()
                    .filter(|d| !visited.contains(&d.key))
                    .collect();
            if dependents.is_empty() {
                continue;
            }

            match reference.on_delete {
                ReferentialAction::Restrict => {
                    let count = dependents.iter().filter(|d| !doomed.contains(&d.key)).count();
                    if count > 0 {
                        return Err(CascadeError::RestrictViolation {
                            entity: entity.name.clone(),
                            referencing_entity: reference.entity.clone(),
                            field: reference.field.clone(),
                            count,
                        }
                        .into());
                    }
                }
                ReferentialAction::Cascade => {
                    for dependent in dependents {
                        self.delete_recursive(txn, &dependent.key, doomed, result, visited, depth + 1)?;
                    }
                }
                ReferentialAction::SetNull => {
                    let dependents: Vec<_> =
                        dependents.into_iter().filter(|d| !doomed.contains(&d.key)).collect();
                    let holder = self.catalog.require_entity(&reference.entity)?;
                    let nullable = holder.field(&reference.field).is_some_and(|f| f.nullable);
                    if !dependents.is_empty() && !nullable {
                        return Err(ConstraintError::NotNull {
                            entity: reference.entity.clone(),
                            field: reference.field.clone(),
                        }
                        .into());
                    }
                    for dependent in dependents {
                        let mut values = dependent.values;
                        for (name, value) in values.iter_mut() {
                            if *name == reference.field {
                                *value = Value::Null;
                            }
                        }
                        let data = value_codec::encode_row(&values)?;
                        txn.put(&dependent.key, dependent.record.updated(data));
                        result.nullified.push((dependent.key, reference.field.clone()));
                    }
                }
            }
        }

        txn.delete(key);
        result.deleted.push(key.clone());
        debug!(entity = %entity.name, depth, "row deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{
        ColumnType, EntityDef, FieldDef, ForeignKey, RelationDef, SchemaBundle,
    };
    use crate::storage::{Record, StorageConfig, StorageEngine};

    fn catalog() -> Catalog {
        let id = |name: &str| FieldDef::new(name, ColumnType::int(10)).primary_key();
        let fk = |name: &str, target: &str, action| {
            FieldDef::new(name, ColumnType::int(10))
                .references(ForeignKey::to(target, format!("{target}Id")).on_delete(action))
        };
        let bundle = SchemaBundle::new(1)
            .with_entity(EntityDef::table("Shipping", "Shipping").with_field(id("ShippingId")))
            .with_entity(
                EntityDef::table("Dewar", "Dewar")
                    .with_field(id("DewarId"))
                    .with_field(fk("ShippingId", "Shipping", ReferentialAction::Cascade)),
            )
            .with_entity(
                EntityDef::table("Container", "Container")
                    .with_field(id("ContainerId"))
                    .with_field(fk("DewarId", "Dewar", ReferentialAction::Restrict)),
            )
            .with_entity(
                EntityDef::table("Position", "Position")
                    .with_field(id("PositionId"))
                    .with_field(fk("parentPositionId", "Position", ReferentialAction::SetNull)),
            )
            .with_relation(
                RelationDef::one_to_many("Containers", "Dewar", "Container")
                    .cascade(RelationCascade::Delete),
            );
        Catalog::new(bundle).unwrap()
    }

    fn put(txn: &mut Transaction<'_>, entity: &str, row: &[(&str, Value)]) -> RowKey {
        let values: Vec<(String, Value)> =
            row.iter().map(|(k, v)| (k.to_string(), v.clone())).collect();
        let key = RowKey::new(entity, &[values[0].1.clone()]).unwrap();
        txn.put(&key, Record::new(value_codec::encode_row(&values).unwrap()));
        key
    }

    #[test]
    fn test_cascade_through_foreign_keys_and_relations() {
        let catalog = catalog();
        let engine = StorageEngine::open(StorageConfig::temporary()).unwrap();
        let mut txn = engine.transaction();

        let shipping = put(&mut txn, "Shipping", &[("ShippingId", Value::Int(1))]);
        let dewar = put(&mut txn, "Dewar", &[("DewarId", Value::Int(1)), ("ShippingId", Value::Int(1))]);
        let container = put(&mut txn, "Container", &[("ContainerId", Value::Int(1)), ("DewarId", Value::Int(1))]);

        let result = CascadeExecutor::new(&catalog).process_delete(&mut txn, &shipping).unwrap();
        assert_eq!(result.deleted, vec![container.clone(), dewar.clone(), shipping.clone()]);
        assert!(!txn.exists(&container).unwrap());
        assert_eq!(result.affected_count(), 3);
    }

    #[test]
    fn test_restrict_blocks_delete() {
        let catalog = catalog();
        let engine = StorageEngine::open(StorageConfig::temporary()).unwrap();
        let mut txn = engine.transaction();

        let dewar = put(&mut txn, "Dewar", &[("DewarId", Value::Int(2)), ("ShippingId", Value::Null)]);
        put(&mut txn, "Container", &[("ContainerId", Value::Int(2)), ("DewarId", Value::Int(2))]);

        // Same schema without the Containers collection cascade.
        let mut bundle = catalog.bundle().clone();
        bundle.relations.clear();
        let plain = Catalog::new(bundle).unwrap();

        let err = CascadeExecutor::new(&plain).process_delete(&mut txn, &dewar).unwrap_err();
        assert!(matches!(
            err,
            Error::Cascade(CascadeError::RestrictViolation { count: 1, .. })
        ));

        // The relationship-level cascade removes the container first.
        CascadeExecutor::new(&catalog).process_delete(&mut txn, &dewar).unwrap();
        assert!(!txn.exists(&dewar).unwrap());
    }

    #[test]
    fn test_set_null_on_self_reference() {
        let catalog = catalog();
        let engine = StorageEngine::open(StorageConfig::temporary()).unwrap();
        let mut txn = engine.transaction();

        let root = put(&mut txn, "Position", &[("PositionId", Value::Int(1)), ("parentPositionId", Value::Null)]);
        let child = put(&mut txn, "Position", &[("PositionId", Value::Int(2)), ("parentPositionId", Value::Int(1))]);

        let result = CascadeExecutor::new(&catalog).process_delete(&mut txn, &root).unwrap();
        assert_eq!(result.nullified, vec![(child.clone(), "parentPositionId".to_string())]);

        let record = txn.read(&child).unwrap().unwrap();
        let row = value_codec::decode_row(&record.data).unwrap();
        assert_eq!(field_value(&row, "parentPositionId"), Value::Null);
    }

    #[test]
    fn test_batch_members_do_not_restrict_each_other() {
        let catalog = catalog();
        let mut bundle = catalog.bundle().clone();
        bundle.relations.clear();
        let plain = Catalog::new(bundle).unwrap();

        let engine = StorageEngine::open(StorageConfig::temporary()).unwrap();
        let mut txn = engine.transaction();
        let dewar = put(&mut txn, "Dewar", &[("DewarId", Value::Int(3)), ("ShippingId", Value::Null)]);
        let container = put(&mut txn, "Container", &[("ContainerId", Value::Int(3)), ("DewarId", Value::Int(3))]);

        let result = CascadeExecutor::new(&plain)
            .process_deletes(&mut txn, &[dewar.clone(), container.clone()])
            .unwrap();
        assert_eq!(result.deleted.len(), 2);
    }
}
