//! Entity instances.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::catalog::EntityDef;
use crate::error::Error;
use crate::value::Value;

/// Lifecycle state of an instance relative to its session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstanceState {
    /// Constructed by calling code, not yet added to a session.
    Transient,
    /// Added to a session, inserted on the next flush.
    Pending,
    /// Backed by a stored row.
    Persistent,
    /// Deleted by a flush.
    Deleted,
}

/// Loaded value of a relationship.
#[derive(Clone)]
pub enum Related {
    /// Single-valued relationship; `None` when unset.
    One(Option<Instance>),
    /// Collection relationship.
    Many(Vec<Instance>),
}

struct InstanceData {
    entity: Arc<EntityDef>,
    /// Assigned or loaded values; fields never assigned are absent.
    values: HashMap<String, Value>,
    state: InstanceState,
    dirty: bool,
    /// Primary key of the stored row, if any.
    persisted_key: Option<Vec<Value>>,
    /// Relationship cache, filled on first access.
    related: HashMap<String, Related>,
}

/// A shared handle to one entity instance.
///
/// Clones refer to the same instance; within a session every row is represented
/// by exactly one instance, so identity can be checked with [`Instance::ptr_eq`].
#[derive(Clone)]
pub struct Instance {
    inner: Arc<RwLock<InstanceData>>,
}

impl Instance {
    /// Create a transient instance of an entity.
    pub fn new(entity: Arc<EntityDef>) -> Self {
        Self::with_state(entity, HashMap::new(), InstanceState::Transient)
    }

    /// Materialize a persistent instance from a stored row.
    pub(crate) fn from_row(entity: Arc<EntityDef>, row: Vec<(String, Value)>) -> Self {
        let values: HashMap<String, Value> = row
            .into_iter()
            .filter(|(name, _)| entity.has_field(name))
            .collect();
        let instance = Self::with_state(entity, values, InstanceState::Persistent);
        let key = instance.primary_key();
        instance.inner.write().persisted_key = key;
        instance
    }

    fn with_state(entity: Arc<EntityDef>, values: HashMap<String, Value>, state: InstanceState) -> Self {
        Self {
            inner: Arc::new(RwLock::new(InstanceData {
                entity,
                values,
                state,
                dirty: false,
                persisted_key: None,
                related: HashMap::new(),
            })),
        }
    }

    /// Name of the instance's entity.
    pub fn entity_name(&self) -> String {
        self.inner.read().entity.name.clone()
    }

    /// Definition of the instance's entity.
    pub fn entity(&self) -> Arc<EntityDef> {
        self.inner.read().entity.clone()
    }

    /// Read a field. Fields never assigned read as NULL.
    pub fn get(&self, field: &str) -> Result<Value, Error> {
        let data = self.inner.read();
        if !data.entity.has_field(field) {
            return Err(unknown_field(&data.entity, field));
        }
        Ok(data.values.get(field).cloned().unwrap_or(Value::Null))
    }

    /// Assign a field.
    ///
    /// The value is validated against the column type when the instance is
    /// flushed, not here.
    pub fn set(&self, field: &str, value: impl Into<Value>) -> Result<(), Error> {
        let mut data = self.inner.write();
        if !data.entity.has_field(field) {
            return Err(unknown_field(&data.entity, field));
        }
        data.values.insert(field.to_string(), value.into());
        data.dirty = true;
        Ok(())
    }

    /// Builder-style [`Instance::set`].
    pub fn with(self, field: &str, value: impl Into<Value>) -> Result<Self, Error> {
        self.set(field, value)?;
        Ok(self)
    }

    /// Whether the field has been assigned or loaded.
    pub fn is_set(&self, field: &str) -> bool {
        self.inner.read().values.contains_key(field)
    }

    /// All fields in declaration order, unassigned ones as NULL.
    pub fn values(&self) -> Vec<(String, Value)> {
        let data = self.inner.read();
        data.entity
            .fields
            .iter()
            .map(|f| {
                let value = data.values.get(&f.name).cloned().unwrap_or(Value::Null);
                (f.name.clone(), value)
            })
            .collect()
    }

    /// Current primary key values, or `None` while any key field is NULL.
    pub fn primary_key(&self) -> Option<Vec<Value>> {
        let data = self.inner.read();
        let key_fields = data.entity.primary_key();
        if key_fields.is_empty() {
            return None;
        }
        key_fields
            .iter()
            .map(|f| match data.values.get(&f.name) {
                Some(v) if !v.is_null() => Some(v.clone()),
                _ => None,
            })
            .collect()
    }

    /// Lifecycle state.
    pub fn state(&self) -> InstanceState {
        self.inner.read().state
    }

    /// Whether the instance has unflushed assignments.
    pub fn is_dirty(&self) -> bool {
        self.inner.read().dirty
    }

    /// Check whether two handles refer to the same instance.
    pub fn ptr_eq(&self, other: &Instance) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Cached target of a single-valued relationship.
    ///
    /// The outer `None` means the relationship has not been loaded; `Some(None)`
    /// means it was loaded (or assigned) and is unset.
    pub fn loaded_one(&self, relation: &str) -> Option<Option<Instance>> {
        match self.inner.read().related.get(relation) {
            Some(Related::One(target)) => Some(target.clone()),
            _ => None,
        }
    }

    /// Cached members of a collection relationship, if loaded.
    pub fn loaded_many(&self, relation: &str) -> Option<Vec<Instance>> {
        match self.inner.read().related.get(relation) {
            Some(Related::Many(members)) => Some(members.clone()),
            _ => None,
        }
    }

    pub(crate) fn cache_one(&self, relation: &str, target: Option<Instance>) {
        self.inner
            .write()
            .related
            .insert(relation.to_string(), Related::One(target));
    }

    pub(crate) fn cache_many(&self, relation: &str, members: Vec<Instance>) {
        self.inner
            .write()
            .related
            .insert(relation.to_string(), Related::Many(members));
    }

    /// Add a member to a loaded collection. Unloaded collections stay unloaded.
    pub(crate) fn push_related(&self, relation: &str, member: &Instance) {
        if let Some(Related::Many(members)) = self.inner.write().related.get_mut(relation) {
            if !members.iter().any(|m| m.ptr_eq(member)) {
                members.push(member.clone());
            }
        }
    }

    /// Remove a member from a loaded collection.
    pub(crate) fn remove_related(&self, relation: &str, member: &Instance) {
        if let Some(Related::Many(members)) = self.inner.write().related.get_mut(relation) {
            members.retain(|m| !m.ptr_eq(member));
        }
    }

    /// Loaded relationships.
    pub(crate) fn related_entries(&self) -> Vec<(String, Related)> {
        self.inner
            .read()
            .related
            .iter()
            .map(|(name, related)| (name.clone(), related.clone()))
            .collect()
    }

    /// Forget every loaded relationship.
    pub(crate) fn expire_related(&self) {
        self.inner.write().related.clear();
    }

    /// Assign without marking the instance dirty (key synchronisation, defaults).
    pub(crate) fn set_raw(&self, field: &str, value: Value) {
        self.inner.write().values.insert(field.to_string(), value);
    }

    /// Forget an assignment.
    pub(crate) fn unset(&self, field: &str) {
        self.inner.write().values.remove(field);
    }

    pub(crate) fn set_state(&self, state: InstanceState) {
        self.inner.write().state = state;
    }

    pub(crate) fn mark_dirty(&self) {
        self.inner.write().dirty = true;
    }

    /// Record a successful write of the current values.
    pub(crate) fn mark_persisted(&self) {
        let key = self.primary_key();
        let mut data = self.inner.write();
        data.state = InstanceState::Persistent;
        data.dirty = false;
        data.persisted_key = key;
    }

    /// Forget the stored row after the transaction that wrote it rolled back.
    pub(crate) fn detach(&self) {
        let mut data = self.inner.write();
        data.state = InstanceState::Transient;
        data.dirty = true;
        data.persisted_key = None;
        data.related.clear();
    }

    /// Primary key of the stored row this instance was loaded from or written to.
    pub(crate) fn persisted_key(&self) -> Option<Vec<Value>> {
        self.inner.read().persisted_key.clone()
    }

    /// Replace the values with a freshly read row, dropping unflushed changes.
    pub(crate) fn refresh(&self, row: Vec<(String, Value)>) {
        let mut data = self.inner.write();
        let values: HashMap<String, Value> = row
            .into_iter()
            .filter(|(name, _)| data.entity.has_field(name))
            .collect();
        data.values = values;
        data.dirty = false;
        data.related.clear();
    }
}

fn unknown_field(entity: &EntityDef, field: &str) -> Error {
    Error::UnknownField {
        entity: entity.name.clone(),
        field: field.to_string(),
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Relationship caches may be cyclic; only the row itself is printed.
        let data = self.inner.read();
        let mut values: Vec<_> = data.values.iter().collect();
        values.sort_by(|a, b| a.0.cmp(b.0));
        f.debug_struct("Instance")
            .field("entity", &data.entity.name)
            .field("state", &data.state)
            .field("values", &values)
            .finish()
    }
}

impl fmt::Debug for Related {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Related::One(target) => f.debug_tuple("One").field(target).finish(),
            Related::Many(members) => f.debug_tuple("Many").field(&members.len()).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ColumnType, FieldDef};

    fn proposal() -> Arc<EntityDef> {
        Arc::new(
            EntityDef::table("Proposal", "Proposal")
                .with_field(FieldDef::new("proposalId", ColumnType::int(10)).primary_key())
                .with_field(FieldDef::new("proposalCode", ColumnType::varchar(45)))
                .with_field(FieldDef::new("proposalNumber", ColumnType::varchar(45))),
        )
    }

    #[test]
    fn test_get_and_set() {
        let instance = Instance::new(proposal()).with("proposalCode", "MX").unwrap();
        assert_eq!(instance.get("proposalCode").unwrap(), Value::from("MX"));
        assert_eq!(instance.get("proposalNumber").unwrap(), Value::Null);
        assert!(instance.is_set("proposalCode"));
        assert!(!instance.is_set("proposalNumber"));
        assert!(instance.is_dirty());
        assert_eq!(instance.state(), InstanceState::Transient);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let instance = Instance::new(proposal());
        let err = instance.set("color", "blue").unwrap_err();
        assert!(matches!(err, Error::UnknownField { ref field, .. } if field == "color"));
        assert!(instance.get("color").is_err());
    }

    #[test]
    fn test_primary_key_requires_all_fields() {
        let instance = Instance::new(proposal());
        assert_eq!(instance.primary_key(), None);
        instance.set("proposalId", 5).unwrap();
        assert_eq!(instance.primary_key(), Some(vec![Value::Int(5)]));
    }

    #[test]
    fn test_from_row_is_persistent_and_clean() {
        let row = vec![
            ("proposalId".to_string(), Value::Int(3)),
            ("proposalCode".to_string(), Value::from("CM")),
            ("dropped".to_string(), Value::Int(1)),
        ];
        let instance = Instance::from_row(proposal(), row);
        assert_eq!(instance.state(), InstanceState::Persistent);
        assert!(!instance.is_dirty());
        assert_eq!(instance.persisted_key(), Some(vec![Value::Int(3)]));
        assert!(!instance.is_set("dropped"));
    }

    #[test]
    fn test_identity_and_relationship_cache() {
        let a = Instance::new(proposal());
        let b = a.clone();
        let c = Instance::new(proposal());
        assert!(a.ptr_eq(&b));
        assert!(!a.ptr_eq(&c));

        assert!(a.loaded_many("BLSession").is_none());
        a.cache_many("BLSession", vec![]);
        a.push_related("BLSession", &c);
        a.push_related("BLSession", &c);
        assert_eq!(a.loaded_many("BLSession").unwrap().len(), 1);
        a.remove_related("BLSession", &c);
        assert!(a.loaded_many("BLSession").unwrap().is_empty());

        a.cache_one("Person", None);
        assert!(matches!(a.loaded_one("Person"), Some(None)));
    }
}
