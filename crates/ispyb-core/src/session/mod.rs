//! Unit of work over the embedded store.
//!
//! A [`Session`] owns one storage transaction and an identity map keyed by
//! (entity, primary key). Instances added to it are inserted on the next
//! flush, assignments to persistent instances are written back, deletes
//! cascade per the catalog, and nothing reaches the store until
//! [`Session::commit`]. Dropping a session without committing rolls it back.

mod cascade;
mod instance;
mod rows;

pub use cascade::{CascadeExecutor, CascadeResult};
pub use instance::{Instance, InstanceState, Related};

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use chrono::{NaiveDateTime, Utc};
use tracing::{debug, info, warn};

use crate::catalog::{
    Catalog, EntityDef, JoinStep, RelationCascade, RelationKind, ResolvedRelation, ScalarType,
};
use crate::constraint::ConstraintValidator;
use crate::error::{ConstraintError, Error};
use crate::query::{ColumnRef, OrderDirection, Query};
use crate::storage::{value_codec, Record, RowKey, StorageEngine, Transaction};
use crate::value::Value;
use rows::{field_value, matching_rows, StoredRow};

/// Primary key values in key-field order.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimaryKey(pub Vec<Value>);

impl From<i64> for PrimaryKey {
    fn from(v: i64) -> Self {
        PrimaryKey(vec![Value::Int(v)])
    }
}

impl From<i32> for PrimaryKey {
    fn from(v: i32) -> Self {
        PrimaryKey(vec![Value::Int(v as i64)])
    }
}

impl From<&str> for PrimaryKey {
    fn from(v: &str) -> Self {
        PrimaryKey(vec![Value::from(v)])
    }
}

impl From<Value> for PrimaryKey {
    fn from(v: Value) -> Self {
        PrimaryKey(vec![v])
    }
}

impl From<Vec<Value>> for PrimaryKey {
    fn from(v: Vec<Value>) -> Self {
        PrimaryKey(v)
    }
}

impl<A: Into<Value>, B: Into<Value>> From<(A, B)> for PrimaryKey {
    fn from((a, b): (A, B)) -> Self {
        PrimaryKey(vec![a.into(), b.into()])
    }
}

/// One output row of a projection query, in projection order.
pub type ProjectedRow = Vec<(String, Value)>;

/// Queued change to a many-to-many association.
#[derive(Clone)]
struct LinkOp {
    relation: ResolvedRelation,
    left: Instance,
    right: Instance,
    add: bool,
}

/// A row image written by the current flush, re-checked once all writes are queued.
struct Written {
    entity: String,
    key: RowKey,
    row: Vec<(String, Value)>,
}

#[derive(Default)]
struct FlushOutcome {
    inserted: Vec<(RowKey, Instance)>,
    updated: Vec<Instance>,
    cascade: CascadeResult,
    unlinked: Vec<RowKey>,
}

/// A unit of work.
pub struct Session<'db> {
    catalog: &'db Catalog,
    engine: &'db StorageEngine,
    txn: Transaction<'db>,
    /// Every persistent instance this session has loaded or written.
    identity: HashMap<RowKey, Instance>,
    /// Added instances awaiting insert, in add order.
    pending: Vec<Instance>,
    /// Persistent instances marked for deletion.
    deleted: Vec<Instance>,
    links: Vec<LinkOp>,
    /// Inserted since the last commit.
    inserted: Vec<Instance>,
    /// Deleted since the last commit.
    removed: Vec<Instance>,
    autoflush: bool,
}

impl<'db> Session<'db> {
    pub(crate) fn new(catalog: &'db Catalog, engine: &'db StorageEngine) -> Self {
        Self {
            catalog,
            engine,
            txn: engine.transaction(),
            identity: HashMap::new(),
            pending: Vec::new(),
            deleted: Vec::new(),
            links: Vec::new(),
            inserted: Vec::new(),
            removed: Vec::new(),
            autoflush: true,
        }
    }

    /// The catalog this session works against.
    pub fn catalog(&self) -> &'db Catalog {
        self.catalog
    }

    /// Flush automatically before queries and relationship loads (on by default).
    pub fn set_autoflush(&mut self, autoflush: bool) {
        self.autoflush = autoflush;
    }

    /// Whether anything is waiting for the next flush or commit.
    pub fn has_changes(&self) -> bool {
        !self.pending.is_empty()
            || !self.deleted.is_empty()
            || !self.links.is_empty()
            || !self.txn.is_empty()
            || self.identity.values().any(|i| i.is_dirty())
    }

    /// A new transient instance of an entity.
    pub fn new_instance(&self, entity: &str) -> Result<Instance, Error> {
        Ok(Instance::new(self.catalog.entity_handle(entity)?))
    }

    /// Whether this session tracks the instance.
    pub fn contains(&self, instance: &Instance) -> bool {
        self.pending.iter().any(|i| i.ptr_eq(instance))
            || self.identity.values().any(|i| i.ptr_eq(instance))
    }

    /// Add an instance for insertion on the next flush.
    ///
    /// Transient instances reachable through its loaded relationships are
    /// added with it.
    pub fn add(&mut self, instance: &Instance) -> Result<(), Error> {
        let entity = instance.entity();
        if entity.is_view() {
            return Err(Error::ReadOnly(entity.name.clone()));
        }

        match instance.state() {
            InstanceState::Transient => {
                instance.set_state(InstanceState::Pending);
                self.pending.push(instance.clone());
            }
            InstanceState::Pending | InstanceState::Persistent => {}
            InstanceState::Deleted => {
                return Err(Error::InvalidOperation(format!(
                    "'{}' instance has been deleted",
                    entity.name
                )));
            }
        }

        for (_, related) in instance.related_entries() {
            let members = match related {
                Related::One(target) => target.into_iter().collect(),
                Related::Many(members) => members,
            };
            for member in members {
                if member.state() == InstanceState::Transient {
                    self.add(&member)?;
                }
            }
        }
        Ok(())
    }

    /// Load an instance by primary key.
    ///
    /// Within one session the same key always yields the same instance.
    pub fn get(&mut self, entity: &str, key: impl Into<PrimaryKey>) -> Result<Option<Instance>, Error> {
        let catalog = self.catalog;
        let def = catalog.require_entity(entity)?;
        let PrimaryKey(values) = key.into();
        let key_fields = def.primary_key_names();
        if def.is_view() || values.len() != key_fields.len() {
            return Err(Error::InvalidQuery(format!(
                "'{}' is keyed by {} field(s), got {} value(s)",
                entity,
                key_fields.len(),
                values.len()
            )));
        }

        self.maybe_flush()?;
        let key = RowKey::new(entity, &values)?;
        if let Some(instance) = self.identity.get(&key) {
            return Ok(Some(instance.clone()));
        }
        match self.txn.read(&key)? {
            Some(record) => {
                let row = value_codec::decode_row(&record.data)?;
                Ok(Some(self.materialize(key, row)?))
            }
            None => Ok(None),
        }
    }

    /// Re-read a persistent instance from the store, dropping unflushed changes.
    pub fn refresh(&mut self, instance: &Instance) -> Result<(), Error> {
        let key = self.stored_key(instance)?;
        match self.txn.read(&key)? {
            Some(record) => {
                instance.refresh(value_codec::decode_row(&record.data)?);
                Ok(())
            }
            None => Err(Error::InvalidOperation(format!(
                "'{}' row no longer exists",
                key.entity
            ))),
        }
    }

    /// Instances matching a query, in query order.
    pub fn all(&mut self, query: &Query) -> Result<Vec<Instance>, Error> {
        let rows = self.select_rows(query)?;
        let mut instances = Vec::with_capacity(rows.len());
        for stored in rows {
            instances.push(self.materialize(stored.key, stored.values)?);
        }
        Ok(instances)
    }

    /// First instance matching a query.
    pub fn first(&mut self, query: &Query) -> Result<Option<Instance>, Error> {
        Ok(self.all(&query.clone().limit(1))?.into_iter().next())
    }

    /// Number of rows matching a query's filter and window.
    pub fn count(&mut self, query: &Query) -> Result<usize, Error> {
        Ok(self.select_rows(query)?.len())
    }

    /// Evaluate a query's projections in the embedded engine.
    ///
    /// Relationship paths behave like the LEFT OUTER JOINs of
    /// [`Query::to_sql`]: a missing related row makes its columns NULL.
    pub fn project(&mut self, query: &Query) -> Result<Vec<ProjectedRow>, Error> {
        if query.projections().is_empty() {
            return Err(Error::InvalidQuery(format!(
                "query on '{}' has no output columns",
                query.entity()
            )));
        }
        let rows = self.select_rows(query)?;
        let mut output = Vec::with_capacity(rows.len());
        for stored in &rows {
            let mut projected = Vec::with_capacity(query.projections().len());
            for projection in query.projections() {
                let mut resolve =
                    |column: &ColumnRef| self.resolve_column(query.entity(), &stored.values, column);
                let value = projection.expr.eval_with(&mut resolve)?;
                projected.push((projection.alias.clone(), value));
            }
            output.push(projected);
        }
        Ok(output)
    }

    /// Evaluate a derived accessor, loading the relationships it reads.
    pub fn evaluate(&mut self, instance: &Instance, accessor: &str) -> Result<Option<Value>, Error> {
        let catalog = self.catalog;
        let accessor = catalog.require_accessor(&instance.entity_name(), accessor)?;

        for path in accessor.expression().relation_paths() {
            let mut current = instance.clone();
            for relation in &path {
                match self.related_one(&current, relation)? {
                    Some(next) => current = next,
                    None => break,
                }
            }
        }
        Ok(accessor.evaluate(instance))
    }

    /// Target of a single-valued relationship, loaded on first access.
    pub fn related_one(&mut self, instance: &Instance, relation: &str) -> Result<Option<Instance>, Error> {
        let catalog = self.catalog;
        let resolved = catalog.require_relation(&instance.entity_name(), relation)?;
        if resolved.is_collection() {
            return Err(Error::InvalidOperation(format!(
                "'{}' is a collection",
                resolved.def.qualified_name()
            )));
        }
        if let Some(cached) = instance.loaded_one(relation) {
            return Ok(cached);
        }
        if instance.state() == InstanceState::Transient {
            return Ok(None);
        }

        self.maybe_flush()?;
        let target = match self.walk(instance.values(), &resolved.path)?.into_iter().next() {
            Some(stored) => Some(self.materialize(stored.key, stored.values)?),
            None => None,
        };
        instance.cache_one(relation, target.clone());
        Ok(target)
    }

    /// Members of a collection relationship, loaded on first access.
    pub fn related_many(&mut self, instance: &Instance, relation: &str) -> Result<Vec<Instance>, Error> {
        let catalog = self.catalog;
        let resolved = catalog.require_relation(&instance.entity_name(), relation)?;
        if !resolved.is_collection() {
            return Err(Error::InvalidOperation(format!(
                "'{}' is single-valued",
                resolved.def.qualified_name()
            )));
        }
        if let Some(cached) = instance.loaded_many(relation) {
            return Ok(cached);
        }
        if instance.state() == InstanceState::Transient {
            instance.cache_many(relation, Vec::new());
            return Ok(Vec::new());
        }

        self.maybe_flush()?;
        let mut members = Vec::new();
        for stored in self.walk(instance.values(), &resolved.path)? {
            members.push(self.materialize(stored.key, stored.values)?);
        }
        instance.cache_many(relation, members.clone());
        Ok(members)
    }

    /// Point a single-valued relationship at `target` (or clear it).
    ///
    /// The foreign key follows on the next flush and the paired relationship
    /// on the other side is updated in memory.
    pub fn set_related(
        &mut self,
        instance: &Instance,
        relation: &str,
        target: Option<&Instance>,
    ) -> Result<(), Error> {
        let catalog = self.catalog;
        let entity = instance.entity();
        if entity.is_view() {
            return Err(Error::ReadOnly(entity.name.clone()));
        }
        let resolved = catalog.require_relation(&entity.name, relation)?;
        if resolved.is_collection() {
            return Err(Error::InvalidOperation(format!(
                "'{}' is a collection; use append or remove",
                resolved.def.qualified_name()
            )));
        }
        if let Some(target) = target {
            check_target(resolved, target)?;
        }
        let [step] = resolved.path.as_slice() else {
            return Err(Error::InvalidOperation(format!(
                "'{}' has no direct join",
                resolved.def.qualified_name()
            )));
        };

        let previous = match instance.loaded_one(relation) {
            Some(previous) => previous,
            None if instance.state() == InstanceState::Persistent => {
                self.related_one(instance, relation)?
            }
            None => None,
        };
        if let (Some(previous), Some(target)) = (&previous, target) {
            if previous.ptr_eq(target) {
                return Ok(());
            }
        }

        instance.cache_one(relation, target.cloned());
        instance.mark_dirty();

        if resolved.holds_key {
            let value = match target {
                Some(target) => target.get(&step.to_field)?,
                None => Value::Null,
            };
            if target.is_none() || !value.is_null() {
                instance.set_raw(&step.from_field, value);
            }
        } else if let Some(previous) = &previous {
            previous.set_raw(&step.to_field, Value::Null);
            previous.mark_dirty();
        }

        if let Some(counterpart) = catalog.counterpart(resolved) {
            if let Some(previous) = &previous {
                detach_back(previous, counterpart, instance);
            }
            if let Some(target) = target {
                attach_back(target, counterpart, instance);
            }
        }

        if let Some(target) = target {
            if target.state() == InstanceState::Transient && instance.state() != InstanceState::Transient {
                self.add(target)?;
            }
        }
        Ok(())
    }

    /// Add a member to a collection relationship.
    pub fn append(&mut self, instance: &Instance, relation: &str, member: &Instance) -> Result<(), Error> {
        let catalog = self.catalog;
        let resolved = self.collection(instance, relation)?;
        check_target(resolved, member)?;
        if resolved.kind() == RelationKind::ManyToMany {
            link_fields(catalog, resolved)?;
        }

        let members = self.members(instance, relation)?;
        if members.iter().any(|m| m.ptr_eq(member)) {
            return Ok(());
        }
        instance.push_related(relation, member);
        let counterpart = catalog.counterpart(resolved);

        match (resolved.kind(), resolved.path.as_slice()) {
            (RelationKind::OneToMany, [step]) => {
                let value = instance.get(&step.from_field)?;
                if !value.is_null() {
                    member.set_raw(&step.to_field, value);
                }
                member.mark_dirty();
                if let Some(counterpart) = counterpart {
                    if let Some(Some(old)) = member.loaded_one(counterpart.name()) {
                        if !old.ptr_eq(instance) {
                            old.remove_related(relation, member);
                        }
                    }
                    member.cache_one(counterpart.name(), Some(instance.clone()));
                }
            }
            (RelationKind::ManyToMany, _) => {
                self.links.push(LinkOp {
                    relation: resolved.clone(),
                    left: instance.clone(),
                    right: member.clone(),
                    add: true,
                });
                if let Some(counterpart) = counterpart {
                    member.push_related(counterpart.name(), instance);
                }
            }
            _ => {}
        }

        if member.state() == InstanceState::Transient && instance.state() != InstanceState::Transient {
            self.add(member)?;
        }
        Ok(())
    }

    /// Remove a member from a collection relationship.
    ///
    /// One-to-many members get a NULL foreign key, or are deleted when the
    /// relationship cascades `DeleteOrphan`; many-to-many link rows are removed.
    pub fn remove(&mut self, instance: &Instance, relation: &str, member: &Instance) -> Result<(), Error> {
        let catalog = self.catalog;
        let resolved = self.collection(instance, relation)?;
        check_target(resolved, member)?;

        let members = self.members(instance, relation)?;
        if !members.iter().any(|m| m.ptr_eq(member)) {
            return Ok(());
        }
        instance.remove_related(relation, member);
        let counterpart = catalog.counterpart(resolved);

        match (resolved.kind(), resolved.path.as_slice()) {
            (RelationKind::OneToMany, [step]) => {
                if let Some(counterpart) = counterpart {
                    if let Some(Some(owner)) = member.loaded_one(counterpart.name()) {
                        if owner.ptr_eq(instance) {
                            member.cache_one(counterpart.name(), None);
                        }
                    }
                }
                if resolved.def.cascade == RelationCascade::DeleteOrphan {
                    self.delete(member)?;
                } else {
                    member.set_raw(&step.to_field, Value::Null);
                    member.mark_dirty();
                }
            }
            (RelationKind::ManyToMany, _) => {
                link_fields(catalog, resolved)?;
                self.links.push(LinkOp {
                    relation: resolved.clone(),
                    left: instance.clone(),
                    right: member.clone(),
                    add: false,
                });
                if let Some(counterpart) = counterpart {
                    member.remove_related(counterpart.name(), instance);
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Mark an instance for deletion on the next flush.
    pub fn delete(&mut self, instance: &Instance) -> Result<(), Error> {
        let entity = instance.entity();
        if entity.is_view() {
            return Err(Error::ReadOnly(entity.name.clone()));
        }
        match instance.state() {
            InstanceState::Transient => Err(Error::InvalidOperation(format!(
                "'{}' instance is not in the session",
                entity.name
            ))),
            InstanceState::Pending => {
                self.pending.retain(|i| !i.ptr_eq(instance));
                instance.set_state(InstanceState::Transient);
                Ok(())
            }
            InstanceState::Persistent => {
                if !self.deleted.iter().any(|i| i.ptr_eq(instance)) {
                    self.deleted.push(instance.clone());
                }
                Ok(())
            }
            InstanceState::Deleted => Ok(()),
        }
    }

    /// Write pending inserts, updates, link changes and deletes to the
    /// transaction.
    ///
    /// On failure the transaction returns to its state before the flush and
    /// keys assigned by this flush are cleared again.
    pub fn flush(&mut self) -> Result<(), Error> {
        let dirty = self
            .identity
            .values()
            .any(|i| i.is_dirty() && i.state() == InstanceState::Persistent);
        if self.pending.is_empty() && self.deleted.is_empty() && self.links.is_empty() && !dirty {
            return Ok(());
        }

        let savepoint = self.txn.savepoint();
        let mut assigned = Vec::new();
        match self.flush_inner(&mut assigned) {
            Ok(outcome) => {
                self.finish_flush(outcome);
                Ok(())
            }
            Err(e) => {
                self.txn.restore(savepoint);
                for (instance, field) in assigned {
                    instance.unset(&field);
                }
                warn!(error = %e, "flush failed");
                Err(e)
            }
        }
    }

    /// Flush, then commit the transaction.
    pub fn commit(&mut self) -> Result<(), Error> {
        self.flush()?;
        let operations = self.txn.operation_count();
        self.txn.commit()?;
        self.inserted.clear();
        self.removed.clear();
        info!(operations, "session committed");
        Ok(())
    }

    /// Discard everything since the last commit.
    ///
    /// Pending and newly inserted instances become transient again, instances
    /// deleted since the last commit become persistent again, and the identity
    /// map is emptied.
    pub fn rollback(&mut self) {
        self.txn.rollback();
        for instance in self.pending.drain(..) {
            instance.set_state(InstanceState::Transient);
        }
        for instance in self.inserted.drain(..) {
            instance.detach();
        }
        for instance in self.removed.drain(..) {
            instance.set_state(InstanceState::Persistent);
        }
        self.deleted.clear();
        self.links.clear();
        for instance in self.identity.values() {
            instance.expire_related();
        }
        self.identity.clear();
        info!("session rolled back");
    }

    fn maybe_flush(&mut self) -> Result<(), Error> {
        if self.autoflush {
            self.flush()?;
        }
        Ok(())
    }

    fn materialize(&mut self, key: RowKey, row: Vec<(String, Value)>) -> Result<Instance, Error> {
        if let Some(instance) = self.identity.get(&key) {
            return Ok(instance.clone());
        }
        let instance = Instance::from_row(self.catalog.entity_handle(&key.entity)?, row);
        self.identity.insert(key, instance.clone());
        Ok(instance)
    }

    fn stored_key(&self, instance: &Instance) -> Result<RowKey, Error> {
        let entity = instance.entity_name();
        let values = instance.persisted_key().ok_or_else(|| {
            Error::InvalidOperation(format!("'{}' instance has not been persisted", entity))
        })?;
        RowKey::new(entity, &values)
    }

    fn collection(&self, instance: &Instance, relation: &str) -> Result<&'db ResolvedRelation, Error> {
        let catalog = self.catalog;
        let entity = instance.entity();
        if entity.is_view() {
            return Err(Error::ReadOnly(entity.name.clone()));
        }
        let resolved = catalog.require_relation(&entity.name, relation)?;
        if !resolved.is_collection() {
            return Err(Error::InvalidOperation(format!(
                "'{}' is single-valued; use set_related",
                resolved.def.qualified_name()
            )));
        }
        Ok(resolved)
    }

    /// Loaded collection members, loading or starting an empty collection as needed.
    fn members(&mut self, instance: &Instance, relation: &str) -> Result<Vec<Instance>, Error> {
        if let Some(members) = instance.loaded_many(relation) {
            return Ok(members);
        }
        if instance.state() == InstanceState::Persistent {
            return self.related_many(instance, relation);
        }
        instance.cache_many(relation, Vec::new());
        Ok(Vec::new())
    }

    fn select_rows(&mut self, query: &Query) -> Result<Vec<StoredRow>, Error> {
        let catalog = self.catalog;
        let entity = catalog.require_entity(query.entity())?;
        // Same column and relationship checks as the SQL rendering.
        query.to_sql(catalog)?;

        self.maybe_flush()?;
        let mut rows = Vec::new();
        for (key, record) in self.txn.scan_entity(&entity.name)? {
            let values = value_codec::decode_row(&record.data)?;
            if let Some(filter) = query.filter_expr() {
                let mut resolve = |column: &ColumnRef| self.resolve_column(&entity.name, &values, column);
                if filter.eval_with(&mut resolve)? != Some(true) {
                    continue;
                }
            }
            let mut sort_keys = Vec::with_capacity(query.ordering().len());
            for (expr, _) in query.ordering() {
                let mut resolve = |column: &ColumnRef| self.resolve_column(&entity.name, &values, column);
                sort_keys.push(expr.eval_with(&mut resolve)?);
            }
            rows.push((
                sort_keys,
                StoredRow {
                    key,
                    record,
                    values,
                },
            ));
        }

        if !query.ordering().is_empty() {
            rows.sort_by(|(a, _), (b, _)| {
                for ((left, right), (_, direction)) in a.iter().zip(b).zip(query.ordering()) {
                    let ord = left.sort_cmp(right);
                    let ord = match direction {
                        OrderDirection::Asc => ord,
                        OrderDirection::Desc => ord.reverse(),
                    };
                    if ord != Ordering::Equal {
                        return ord;
                    }
                }
                Ordering::Equal
            });
        }

        Ok(rows
            .into_iter()
            .map(|(_, row)| row)
            .skip(query.offset_value().unwrap_or(0))
            .take(query.limit_value().unwrap_or(usize::MAX))
            .collect())
    }

    /// Follow a join path from one row image, returning distinct rows at the end.
    fn walk(&self, start: Vec<(String, Value)>, path: &[JoinStep]) -> Result<Vec<StoredRow>, Error> {
        let mut frontier = vec![start];
        let mut reached: Vec<StoredRow> = Vec::new();

        for step in path {
            let mut seen = HashSet::new();
            reached = Vec::new();
            for row in &frontier {
                let value = field_value(row, &step.from_field);
                for stored in matching_rows(self.catalog, &self.txn, &step.to_entity, &step.to_field, &value)? {
                    if seen.insert(stored.key.clone()) {
                        reached.push(stored);
                    }
                }
            }
            frontier = reached.iter().map(|s| s.values.clone()).collect();
        }

        reached.sort_by(|a, b| a.key.key.cmp(&b.key.key));
        Ok(reached)
    }

    fn resolve_column(&self, root: &str, row: &[(String, Value)], column: &ColumnRef) -> Result<Value, Error> {
        let mut entity = root.to_string();
        let mut current = row.to_vec();
        for name in &column.path {
            let relation = self.catalog.require_relation(&entity, name)?;
            match self.walk(current, &relation.path)?.into_iter().next() {
                Some(next) => current = next.values,
                None => return Ok(Value::Null),
            }
            entity = relation.target().to_string();
        }
        Ok(field_value(&current, &column.field))
    }

    fn flush_inner(&mut self, assigned: &mut Vec<(Instance, String)>) -> Result<FlushOutcome, Error> {
        let catalog = self.catalog;
        let validator = ConstraintValidator::new(catalog);
        let now = Utc::now().naive_utc();
        let mut outcome = FlushOutcome::default();
        let mut written = Vec::new();

        let pending = self.pending.clone();
        for instance in &pending {
            let entity = instance.entity();
            let Some(field) = entity.auto_increment_field() else {
                continue;
            };
            match instance.get(&field.name)? {
                Value::Null => {
                    let id = self.engine.next_id(&entity.name)?;
                    instance.set_raw(&field.name, Value::Int(id));
                    assigned.push((instance.clone(), field.name.clone()));
                }
                Value::Int(id) => self.engine.observe_id(&entity.name, id)?,
                _ => {}
            }
        }

        let tracked: Vec<Instance> = pending
            .iter()
            .cloned()
            .chain(self.identity.values().cloned())
            .collect();
        for instance in &tracked {
            sync_single(catalog, instance)?;
        }
        for instance in &tracked {
            sync_collections(catalog, instance)?;
        }

        for instance in &pending {
            let entity = instance.entity();
            for field in &entity.fields {
                if !instance.is_set(&field.name) {
                    if let Some(value) = field.default_value(now) {
                        instance.set_raw(&field.name, value);
                    }
                }
            }
            let row = instance.values();
            validator.validate_fields(&entity, &row)?;
            let key = row_key(&entity, instance)?;
            validator.check_primary_key(&self.txn, &key)?;
            self.txn.put(&key, Record::new(value_codec::encode_row(&row)?));
            outcome.inserted.push((key.clone(), instance.clone()));
            written.push(Written {
                entity: entity.name.clone(),
                key,
                row,
            });
        }

        let dirty: Vec<Instance> = self
            .identity
            .values()
            .filter(|i| i.state() == InstanceState::Persistent && i.is_dirty())
            .filter(|i| !self.deleted.iter().any(|d| d.ptr_eq(i)))
            .cloned()
            .collect();
        for instance in dirty {
            let entity = instance.entity();
            for field in entity.fields.iter().filter(|f| f.auto_update) {
                instance.set_raw(&field.name, timestamp_value(field.scalar_type(), now));
            }
            let row = instance.values();
            validator.validate_fields(&entity, &row)?;
            let key = row_key(&entity, &instance)?;
            if let Some(old) = instance.persisted_key() {
                if let Some(field) = changed_key_field(&entity, &old, &instance)? {
                    return Err(ConstraintError::PrimaryKeyModified {
                        entity: entity.name.clone(),
                        field,
                    }
                    .into());
                }
            }
            let data = value_codec::encode_row(&row)?;
            let record = match self.txn.read(&key)? {
                Some(existing) => existing.updated(data),
                None => Record::new(data),
            };
            self.txn.put(&key, record);
            outcome.updated.push(instance.clone());
            written.push(Written {
                entity: entity.name.clone(),
                key,
                row,
            });
        }

        let links = self.links.clone();
        for op in &links {
            self.apply_link(op, now, &validator, &mut written, &mut outcome.unlinked)?;
        }

        let doomed: Vec<RowKey> = self
            .deleted
            .iter()
            .map(|i| self.stored_key(i))
            .collect::<Result<_, _>>()?;
        if !doomed.is_empty() {
            outcome.cascade = CascadeExecutor::new(catalog).process_deletes(&mut self.txn, &doomed)?;
        }

        for write in &written {
            if outcome.cascade.deleted.contains(&write.key) || outcome.unlinked.contains(&write.key) {
                continue;
            }
            let entity = catalog.require_entity(&write.entity)?;
            validator.check_foreign_keys(&self.txn, entity, &write.row)?;
            validator.check_unique(&self.txn, entity, &write.key, &write.row)?;
        }

        Ok(outcome)
    }

    fn apply_link(
        &mut self,
        op: &LinkOp,
        now: NaiveDateTime,
        validator: &ConstraintValidator<'_>,
        written: &mut Vec<Written>,
        unlinked: &mut Vec<RowKey>,
    ) -> Result<(), Error> {
        let catalog = self.catalog;
        let (join, first, second) = link_fields(catalog, &op.relation)?;
        let left = op.left.get(&first.from_field)?;
        let right = op.right.get(&second.to_field)?;
        for (value, field) in [(&left, &first.to_field), (&right, &second.from_field)] {
            if value.is_null() {
                return Err(ConstraintError::NotNull {
                    entity: join.name.clone(),
                    field: field.clone(),
                }
                .into());
            }
        }

        let existing: Vec<StoredRow> =
            matching_rows(catalog, &self.txn, &join.name, &first.to_field, &left)?
                .into_iter()
                .filter(|r| field_value(&r.values, &second.from_field).sql_eq(&right) == Some(true))
                .collect();

        if !op.add {
            for stored in existing {
                self.txn.delete(&stored.key);
                unlinked.push(stored.key);
            }
            return Ok(());
        }
        if !existing.is_empty() {
            return Ok(());
        }

        let mut row: Vec<(String, Value)> = join
            .fields
            .iter()
            .map(|field| {
                let value = if field.name == first.to_field {
                    left.clone()
                } else if field.name == second.from_field {
                    right.clone()
                } else {
                    field.default_value(now).unwrap_or(Value::Null)
                };
                (field.name.clone(), value)
            })
            .collect();
        if let Some(auto) = join.auto_increment_field() {
            let id = self.engine.next_id(&join.name)?;
            for (name, value) in row.iter_mut() {
                if *name == auto.name && value.is_null() {
                    *value = Value::Int(id);
                }
            }
        }

        validator.validate_fields(join, &row)?;
        let key_values: Vec<Value> = join
            .primary_key()
            .iter()
            .map(|f| field_value(&row, &f.name))
            .collect();
        let key = RowKey::new(join.name.as_str(), &key_values)?;
        validator.check_primary_key(&self.txn, &key)?;
        self.txn.put(&key, Record::new(value_codec::encode_row(&row)?));
        written.push(Written {
            entity: join.name.clone(),
            key,
            row,
        });
        Ok(())
    }

    fn finish_flush(&mut self, outcome: FlushOutcome) {
        let inserted = outcome.inserted.len();
        let updated = outcome.updated.len();

        for (key, instance) in outcome.inserted {
            instance.mark_persisted();
            self.identity.insert(key, instance.clone());
            self.inserted.push(instance);
        }
        for instance in outcome.updated {
            instance.mark_persisted();
        }
        for (key, field) in &outcome.cascade.nullified {
            if let Some(instance) = self.identity.get(key) {
                instance.set_raw(field, Value::Null);
            }
        }

        let gone: HashSet<&RowKey> = outcome
            .cascade
            .deleted
            .iter()
            .chain(outcome.unlinked.iter())
            .collect();
        for key in &gone {
            if let Some(instance) = self.identity.remove(*key) {
                instance.set_state(InstanceState::Deleted);
                self.removed.push(instance);
            }
        }
        for instance in self.deleted.drain(..) {
            if instance.state() != InstanceState::Deleted {
                instance.set_state(InstanceState::Deleted);
                self.removed.push(instance);
            }
        }

        for instance in self.identity.values() {
            for (name, related) in instance.related_entries() {
                match related {
                    Related::One(Some(target)) if target.state() == InstanceState::Deleted => {
                        instance.cache_one(&name, None);
                    }
                    Related::Many(members)
                        if members.iter().any(|m| m.state() == InstanceState::Deleted) =>
                    {
                        let live = members
                            .into_iter()
                            .filter(|m| m.state() != InstanceState::Deleted)
                            .collect();
                        instance.cache_many(&name, live);
                    }
                    _ => {}
                }
            }
        }

        self.pending.clear();
        self.links.clear();
        debug!(inserted, updated, deleted = gone.len(), "flush complete");
    }
}

impl Drop for Session<'_> {
    fn drop(&mut self) {
        if !self.txn.is_empty() || !self.pending.is_empty() {
            debug!("session dropped without commit");
            self.rollback();
        }
    }
}

fn check_target(relation: &ResolvedRelation, target: &Instance) -> Result<(), Error> {
    let entity = target.entity_name();
    if entity != relation.target() {
        return Err(Error::InvalidOperation(format!(
            "'{}' expects '{}', got '{}'",
            relation.def.qualified_name(),
            relation.target(),
            entity
        )));
    }
    if target.state() == InstanceState::Deleted {
        return Err(Error::InvalidOperation(format!(
            "'{}' instance has been deleted",
            entity
        )));
    }
    Ok(())
}

/// The join entity and both hops of a writable many-to-many relationship.
fn link_fields<'c>(
    catalog: &'c Catalog,
    relation: &ResolvedRelation,
) -> Result<(&'c EntityDef, JoinStep, JoinStep), Error> {
    let read_only = |join: &str| {
        Error::InvalidOperation(format!(
            "many-to-many '{}' through '{}' is read-only",
            relation.def.qualified_name(),
            join
        ))
    };
    let [first, second] = relation.path.as_slice() else {
        return Err(read_only(relation.def.secondary.as_deref().unwrap_or_default()));
    };
    let join = catalog.require_entity(&first.to_entity)?;
    let is_key = |field: &str| join.field(field).is_some_and(|f| f.foreign_key.is_some());
    if !is_key(&first.to_field) || !is_key(&second.from_field) {
        return Err(read_only(&join.name));
    }
    Ok((join, first.clone(), second.clone()))
}

fn attach_back(target: &Instance, counterpart: &ResolvedRelation, instance: &Instance) {
    if counterpart.is_collection() {
        target.push_related(counterpart.name(), instance);
    } else {
        target.cache_one(counterpart.name(), Some(instance.clone()));
    }
}

fn detach_back(previous: &Instance, counterpart: &ResolvedRelation, instance: &Instance) {
    if counterpart.is_collection() {
        previous.remove_related(counterpart.name(), instance);
    } else if let Some(Some(current)) = previous.loaded_one(counterpart.name()) {
        if current.ptr_eq(instance) {
            previous.cache_one(counterpart.name(), None);
        }
    }
}

fn assign(instance: &Instance, field: &str, value: Value) -> Result<(), Error> {
    if instance.get(field)? != value {
        instance.set_raw(field, value);
        instance.mark_dirty();
    }
    Ok(())
}

/// Copy keys along loaded single-valued relationships.
fn sync_single(catalog: &Catalog, instance: &Instance) -> Result<(), Error> {
    let entity = instance.entity_name();
    for (name, related) in instance.related_entries() {
        let Related::One(target) = related else {
            continue;
        };
        let Some(relation) = catalog.relation(&entity, &name) else {
            continue;
        };
        let [step] = relation.path.as_slice() else {
            continue;
        };
        if relation.holds_key {
            let value = match &target {
                Some(target) => target.get(&step.to_field)?,
                None => Value::Null,
            };
            assign(instance, &step.from_field, value)?;
        } else if let Some(target) = target {
            assign(&target, &step.to_field, instance.get(&step.from_field)?)?;
        }
    }
    Ok(())
}

/// Copy the parent key onto every member of loaded one-to-many collections.
fn sync_collections(catalog: &Catalog, instance: &Instance) -> Result<(), Error> {
    let entity = instance.entity_name();
    for (name, related) in instance.related_entries() {
        let Related::Many(members) = related else {
            continue;
        };
        let Some(relation) = catalog.relation(&entity, &name) else {
            continue;
        };
        let (RelationKind::OneToMany, [step]) = (relation.kind(), relation.path.as_slice()) else {
            continue;
        };
        let value = instance.get(&step.from_field)?;
        for member in &members {
            assign(member, &step.to_field, value.clone())?;
        }
    }
    Ok(())
}

fn row_key(entity: &EntityDef, instance: &Instance) -> Result<RowKey, Error> {
    let values = instance.primary_key().ok_or_else(|| {
        Error::InvalidData(format!("'{}' instance has no complete primary key", entity.name))
    })?;
    RowKey::new(entity.name.as_str(), &values)
}

fn changed_key_field(entity: &EntityDef, old: &[Value], instance: &Instance) -> Result<Option<String>, Error> {
    for (field, old) in entity.primary_key().iter().zip(old) {
        if instance.get(&field.name)? != *old {
            return Ok(Some(field.name.clone()));
        }
    }
    Ok(None)
}

fn timestamp_value(scalar: ScalarType, now: NaiveDateTime) -> Value {
    match scalar {
        ScalarType::Date => Value::Date(now.date()),
        _ => Value::DateTime(now),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ColumnType, FieldDef, ForeignKey, RelationDef, SchemaBundle};
    use crate::error::CascadeError;
    use crate::query::FilterExpr;
    use crate::storage::StorageConfig;

    fn catalog() -> Catalog {
        let id = |name: &str| FieldDef::new(name, ColumnType::int(10)).primary_key();
        let fk = |name: &str, target: &str, field: &str| {
            FieldDef::new(name, ColumnType::int(10)).references(ForeignKey::to(target, field))
        };
        let bundle = SchemaBundle::new(1)
            .with_entity(
                EntityDef::table("Proposal", "Proposal")
                    .with_field(id("proposalId"))
                    .with_field(FieldDef::new("proposalCode", ColumnType::varchar(45))),
            )
            .with_entity(
                EntityDef::table("BLSession", "BLSession")
                    .with_field(id("sessionId"))
                    .with_field(fk("proposalId", "Proposal", "proposalId").not_null())
                    .with_field(FieldDef::new("visit_number", ColumnType::int(10))),
            )
            .with_entity(EntityDef::table("Person", "Person").with_field(id("personId")))
            .with_entity(EntityDef::table("Project", "Project").with_field(id("projectId")))
            .with_entity(
                EntityDef::table("Project_has_Person", "Project_has_Person")
                    .with_field(fk("projectId", "Project", "projectId").primary_key())
                    .with_field(fk("personId", "Person", "personId").primary_key()),
            )
            .with_relation(
                RelationDef::one_to_many("BLSession", "Proposal", "BLSession")
                    .back_populates("Proposal")
                    .cascade(RelationCascade::Delete),
            )
            .with_relation(
                RelationDef::many_to_one("Proposal", "BLSession", "Proposal").back_populates("BLSession"),
            )
            .with_relation(
                RelationDef::many_to_many("Person", "Project", "Person", "Project_has_Person")
                    .back_populates("Project"),
            )
            .with_relation(
                RelationDef::many_to_many("Project", "Person", "Project", "Project_has_Person")
                    .back_populates("Person"),
            );
        Catalog::new(bundle).unwrap()
    }

    fn engine() -> StorageEngine {
        StorageEngine::open(StorageConfig::temporary()).unwrap()
    }

    fn proposal(session: &Session<'_>, code: &str) -> Instance {
        session.new_instance("Proposal").unwrap().with("proposalCode", code).unwrap()
    }

    #[test]
    fn test_insert_assigns_ids_and_identity() {
        let catalog = catalog();
        let engine = engine();
        let mut session = Session::new(&catalog, &engine);

        let mx = proposal(&session, "MX");
        session.add(&mx).unwrap();
        assert_eq!(mx.state(), InstanceState::Pending);
        session.commit().unwrap();

        assert_eq!(mx.state(), InstanceState::Persistent);
        assert_eq!(mx.get("proposalId").unwrap(), Value::Int(1));
        let loaded = session.get("Proposal", 1).unwrap().unwrap();
        assert!(loaded.ptr_eq(&mx));

        let mut other = Session::new(&catalog, &engine);
        let fresh = other.get("Proposal", 1).unwrap().unwrap();
        assert!(!fresh.ptr_eq(&mx));
        assert_eq!(fresh.get("proposalCode").unwrap(), Value::from("MX"));
    }

    #[test]
    fn test_many_to_one_assignment_sets_foreign_key() {
        let catalog = catalog();
        let engine = engine();
        let mut session = Session::new(&catalog, &engine);

        let mx = proposal(&session, "MX");
        let visit = session.new_instance("BLSession").unwrap().with("visit_number", 3).unwrap();
        session.set_related(&visit, "Proposal", Some(&mx)).unwrap();
        session.add(&visit).unwrap();
        assert_eq!(mx.state(), InstanceState::Pending);
        session.commit().unwrap();

        assert_eq!(visit.get("proposalId").unwrap(), mx.get("proposalId").unwrap());
        let sessions = session.related_many(&mx, "BLSession").unwrap();
        assert_eq!(sessions.len(), 1);
        assert!(sessions[0].ptr_eq(&visit));
    }

    #[test]
    fn test_append_back_populates_and_lazy_loads() {
        let catalog = catalog();
        let engine = engine();
        {
            let mut session = Session::new(&catalog, &engine);
            let mx = proposal(&session, "MX");
            session.add(&mx).unwrap();
            for visit in 1..=2 {
                let bl = session.new_instance("BLSession").unwrap().with("visit_number", visit).unwrap();
                session.append(&mx, "BLSession", &bl).unwrap();
                assert!(bl.loaded_one("Proposal").unwrap().unwrap().ptr_eq(&mx));
            }
            session.commit().unwrap();
        }

        let mut session = Session::new(&catalog, &engine);
        let mx = session.get("Proposal", 1).unwrap().unwrap();
        assert!(mx.loaded_many("BLSession").is_none());
        let visits = session.related_many(&mx, "BLSession").unwrap();
        assert_eq!(visits.len(), 2);
        let owner = session.related_one(&visits[0], "Proposal").unwrap().unwrap();
        assert!(owner.ptr_eq(&mx));
    }

    #[test]
    fn test_rollback_discards_uncommitted_work() {
        let catalog = catalog();
        let engine = engine();
        let mut session = Session::new(&catalog, &engine);

        let mx = proposal(&session, "MX");
        session.add(&mx).unwrap();
        session.flush().unwrap();
        assert_eq!(mx.state(), InstanceState::Persistent);

        session.rollback();
        assert_eq!(mx.state(), InstanceState::Transient);
        assert!(session.get("Proposal", 1).unwrap().is_none());
        assert!(!session.has_changes());
    }

    #[test]
    fn test_failed_flush_leaves_nothing_behind() {
        let catalog = catalog();
        let engine = engine();
        let mut session = Session::new(&catalog, &engine);

        let orphan = session
            .new_instance("BLSession")
            .unwrap()
            .with("proposalId", 99)
            .unwrap();
        session.add(&orphan).unwrap();
        let err = session.flush().unwrap_err();
        assert!(matches!(
            err,
            Error::Constraint(ConstraintError::ForeignKeyViolation { .. })
        ));
        assert!(!orphan.is_set("sessionId"));
        assert_eq!(orphan.state(), InstanceState::Pending);
        assert_eq!(session.txn.operation_count(), 0);
    }

    #[test]
    fn test_delete_follows_relationship_cascade() {
        let catalog = catalog();
        let engine = engine();
        let mut session = Session::new(&catalog, &engine);

        let mx = proposal(&session, "MX");
        let bl = session.new_instance("BLSession").unwrap();
        session.add(&mx).unwrap();
        session.append(&mx, "BLSession", &bl).unwrap();
        session.commit().unwrap();

        session.delete(&mx).unwrap();
        session.commit().unwrap();
        assert_eq!(mx.state(), InstanceState::Deleted);
        assert_eq!(bl.state(), InstanceState::Deleted);
        assert_eq!(session.count(&Query::new("BLSession")).unwrap(), 0);
    }

    #[test]
    fn test_foreign_key_restrict_without_relationship_cascade() {
        let catalog = catalog();
        let mut bundle = catalog.bundle().clone();
        bundle.relations.clear();
        let plain = Catalog::new(bundle).unwrap();
        let engine = engine();
        let mut session = Session::new(&plain, &engine);

        let mx = proposal(&session, "MX");
        session.add(&mx).unwrap();
        session.flush().unwrap();
        let bl = session.new_instance("BLSession").unwrap().with("proposalId", 1).unwrap();
        session.add(&bl).unwrap();
        session.commit().unwrap();

        session.delete(&mx).unwrap();
        assert!(matches!(
            session.flush(),
            Err(Error::Cascade(CascadeError::RestrictViolation { .. }))
        ));
        assert_eq!(mx.state(), InstanceState::Persistent);
    }

    #[test]
    fn test_many_to_many_links() {
        let catalog = catalog();
        let engine = engine();
        let mut session = Session::new(&catalog, &engine);

        let project = session.new_instance("Project").unwrap();
        let person = session.new_instance("Person").unwrap();
        session.add(&project).unwrap();
        session.append(&project, "Person", &person).unwrap();
        session.commit().unwrap();
        assert_eq!(session.count(&Query::new("Project_has_Person")).unwrap(), 1);

        let mut other = Session::new(&catalog, &engine);
        let loaded = other.get("Person", 1).unwrap().unwrap();
        let projects = other.related_many(&loaded, "Project").unwrap();
        assert_eq!(projects.len(), 1);

        session.remove(&project, "Person", &person).unwrap();
        session.commit().unwrap();
        assert_eq!(session.count(&Query::new("Project_has_Person")).unwrap(), 0);
        assert!(session.related_many(&project, "Person").unwrap().is_empty());
    }

    #[test]
    fn test_query_order_and_window() {
        let catalog = catalog();
        let engine = engine();
        let mut session = Session::new(&catalog, &engine);
        for code in ["cm", "mx", "bi", "mx"] {
            let p = proposal(&session, code);
            session.add(&p).unwrap();
        }

        let query = Query::new("Proposal")
            .filter(FilterExpr::ne("proposalCode", "bi"))
            .order_by("proposalCode", OrderDirection::Desc)
            .order_by("proposalId", OrderDirection::Asc)
            .limit(2);
        let ids: Vec<Value> = session
            .all(&query)
            .unwrap()
            .iter()
            .map(|p| p.get("proposalId").unwrap())
            .collect();
        assert_eq!(ids, vec![Value::Int(2), Value::Int(4)]);

        let first = session.first(&query.clone().offset(2)).unwrap().unwrap();
        assert_eq!(first.get("proposalCode").unwrap(), Value::from("cm"));
    }

    #[test]
    fn test_projection_outer_join() {
        use crate::query::Expr;

        let catalog = catalog();
        let engine = engine();
        let mut session = Session::new(&catalog, &engine);
        let mx = proposal(&session, "MX");
        let bl = session.new_instance("BLSession").unwrap().with("visit_number", 4).unwrap();
        session.add(&mx).unwrap();
        session.append(&mx, "BLSession", &bl).unwrap();

        let query = Query::new("BLSession").select(
            "label",
            Expr::concat([
                Expr::related(&["Proposal"], "proposalCode"),
                Expr::literal("-"),
                Expr::column("visit_number"),
            ]),
        );
        let rows = session.project(&query).unwrap();
        assert_eq!(rows, vec![vec![("label".to_string(), Value::from("MX-4"))]]);
    }

    fn visit_label() -> crate::query::Expr {
        use crate::query::Expr;

        Expr::concat([
            Expr::related(&["Proposal"], "proposalCode"),
            Expr::literal("-"),
            Expr::column("visit_number"),
        ])
    }

    #[test]
    fn test_filter_and_order_by_expression() {
        let catalog = catalog();
        let engine = engine();
        let mut session = Session::new(&catalog, &engine);
        let mx = proposal(&session, "MX");
        let cm = proposal(&session, "CM");
        session.add(&mx).unwrap();
        session.add(&cm).unwrap();
        for (parent, visit) in [(&mx, 3), (&cm, 7), (&mx, 1)] {
            let bl = session.new_instance("BLSession").unwrap().with("visit_number", visit).unwrap();
            session.append(parent, "BLSession", &bl).unwrap();
        }

        let matched = session
            .all(&Query::new("BLSession").filter(FilterExpr::eq(visit_label(), "MX-3")))
            .unwrap();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].get("visit_number").unwrap(), Value::Int(3));

        let visits: Vec<Value> = session
            .all(&Query::new("BLSession").order_by(visit_label(), OrderDirection::Desc))
            .unwrap()
            .iter()
            .map(|s| s.get("visit_number").unwrap())
            .collect();
        assert_eq!(visits, vec![Value::Int(3), Value::Int(1), Value::Int(7)]);

        let prefixed = session
            .all(&Query::new("BLSession").filter(FilterExpr::like(visit_label(), "CM-%")))
            .unwrap();
        assert_eq!(prefixed.len(), 1);
        assert_eq!(prefixed[0].get("visit_number").unwrap(), Value::Int(7));
    }

    #[test]
    fn test_projection_null_without_parent() {
        let bundle = SchemaBundle::new(1)
            .with_entity(
                EntityDef::table("Proposal", "Proposal")
                    .with_field(FieldDef::new("proposalId", ColumnType::int(10)).primary_key())
                    .with_field(FieldDef::new("proposalCode", ColumnType::varchar(45))),
            )
            .with_entity(
                EntityDef::table("BLSession", "BLSession")
                    .with_field(FieldDef::new("sessionId", ColumnType::int(10)).primary_key())
                    .with_field(
                        FieldDef::new("proposalId", ColumnType::int(10))
                            .references(ForeignKey::to("Proposal", "proposalId")),
                    )
                    .with_field(FieldDef::new("visit_number", ColumnType::int(10))),
            )
            .with_relation(RelationDef::many_to_one("Proposal", "BLSession", "Proposal"))
            .with_relation(RelationDef::one_to_many("BLSession", "Proposal", "BLSession"));
        let catalog = Catalog::new(bundle).unwrap();
        let engine = engine();
        let mut session = Session::new(&catalog, &engine);
        let orphan = session.new_instance("BLSession").unwrap().with("visit_number", 2).unwrap();
        session.add(&orphan).unwrap();
        session.commit().unwrap();

        let query = Query::new("BLSession")
            .select("session", visit_label())
            .select("visit", crate::query::Expr::column("visit_number"));
        let rows = session.project(&query).unwrap();
        assert_eq!(
            rows,
            vec![vec![
                ("session".to_string(), Value::Null),
                ("visit".to_string(), Value::Int(2)),
            ]]
        );

        let unmatched = session
            .all(&Query::new("BLSession").filter(FilterExpr::eq(visit_label(), "MX-2")))
            .unwrap();
        assert!(unmatched.is_empty());
        let orphans = session
            .all(&Query::new("BLSession").filter(FilterExpr::is_null(visit_label())))
            .unwrap();
        assert_eq!(orphans.len(), 1);
    }

    #[test]
    fn test_get_checks_key_arity() {
        let catalog = catalog();
        let engine = engine();
        let mut session = Session::new(&catalog, &engine);

        assert!(matches!(
            session.get("Project_has_Person", 1),
            Err(Error::InvalidQuery(_))
        ));
        assert!(session.get("Project_has_Person", (1, 2)).unwrap().is_none());
        assert!(matches!(
            session.get("Beamline", 1),
            Err(Error::UnknownEntity(_))
        ));
    }
}
