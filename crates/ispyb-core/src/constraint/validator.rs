//! Constraint validation logic.
//!
//! The ConstraintValidator checks a row image before it is written and again
//! after a flush has queued every write, so that rows inserted together may
//! reference each other in any order.

use crate::catalog::{Catalog, EntityDef};
use crate::error::{ConstraintError, Error};
use crate::storage::{value_codec, RowKey, Transaction};
use crate::value::Value;

fn lookup<'r>(row: &'r [(String, Value)], field: &str) -> Option<&'r Value> {
    row.iter().find(|(name, _)| name == field).map(|(_, v)| v)
}

fn render_key(values: &[Value]) -> String {
    let parts: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("({})", parts.join(", "))
}

/// Constraint validator for one catalog.
pub struct ConstraintValidator<'a> {
    catalog: &'a Catalog,
}

impl<'a> ConstraintValidator<'a> {
    /// Create a new constraint validator.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Check every declared field of a row image against its column type and
    /// nullability. Fields missing from the image are NULL.
    pub fn validate_fields(&self, entity: &EntityDef, row: &[(String, Value)]) -> Result<(), Error> {
        for field in &entity.fields {
            let value = lookup(row, &field.name).cloned().unwrap_or(Value::Null);
            field.validate(&entity.name, &value)?;
        }
        Ok(())
    }

    /// Reject an insert whose primary key is already taken.
    pub fn check_primary_key(&self, txn: &Transaction<'_>, key: &RowKey) -> Result<(), Error> {
        if txn.exists(key)? {
            return Err(ConstraintError::DuplicatePrimaryKey {
                entity: key.entity.clone(),
                key: render_key(&key.values()?),
            }
            .into());
        }
        Ok(())
    }

    /// Every non-null foreign key must name an existing row of its target.
    pub fn check_foreign_keys(
        &self,
        txn: &Transaction<'_>,
        entity: &EntityDef,
        row: &[(String, Value)],
    ) -> Result<(), Error> {
        for (field, fk) in entity.foreign_keys() {
            let value = match lookup(row, &field.name) {
                Some(value) if !value.is_null() => value,
                _ => continue,
            };
            let target = RowKey::new(fk.entity.as_str(), std::slice::from_ref(value))?;
            if !txn.exists(&target)? {
                return Err(ConstraintError::ForeignKeyViolation {
                    entity: entity.name.clone(),
                    field: field.name.clone(),
                    target: fk.entity.clone(),
                    value: value.to_string(),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Unique fields and composite unique constraints. NULL never collides.
    pub fn check_unique(
        &self,
        txn: &Transaction<'_>,
        entity: &EntityDef,
        key: &RowKey,
        row: &[(String, Value)],
    ) -> Result<(), Error> {
        let mut groups: Vec<(String, Vec<String>)> = entity
            .fields
            .iter()
            .filter(|f| f.unique && !f.primary_key)
            .map(|f| (f.name.clone(), vec![f.name.clone()]))
            .collect();
        groups.extend(
            self.catalog
                .constraints_of(&entity.name)
                .into_iter()
                .filter(|c| c.is_unique())
                .map(|c| (c.name().to_string(), c.fields().to_vec())),
        );

        let groups: Vec<(String, Vec<String>, Vec<Value>)> = groups
            .into_iter()
            .filter_map(|(name, fields)| {
                let values: Option<Vec<Value>> = fields
                    .iter()
                    .map(|f| lookup(row, f).filter(|v| !v.is_null()).cloned())
                    .collect();
                values.map(|values| (name, fields, values))
            })
            .collect();
        if groups.is_empty() {
            return Ok(());
        }

        for (other_key, record) in txn.scan_entity(&entity.name)? {
            if other_key == *key {
                continue;
            }
            let other = value_codec::decode_row(&record.data)?;
            for (name, fields, values) in &groups {
                let collides = fields.iter().zip(values).all(|(field, value)| {
                    lookup(&other, field).is_some_and(|v| v.sql_eq(value) == Some(true))
                });
                if collides {
                    return Err(ConstraintError::UniqueViolation {
                        constraint: name.clone(),
                        entity: entity.name.clone(),
                        fields: fields.clone(),
                    }
                    .into());
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ColumnType, ConstraintDef, FieldDef, ForeignKey, SchemaBundle};
    use crate::storage::{Record, StorageConfig, StorageEngine};

    fn catalog() -> Catalog {
        let bundle = SchemaBundle::new(1)
            .with_entity(
                EntityDef::table("Person", "Person")
                    .with_field(FieldDef::new("personId", ColumnType::int(10)).primary_key())
                    .with_field(FieldDef::new("login", ColumnType::varchar(45)).unique()),
            )
            .with_entity(
                EntityDef::table("LabContact", "LabContact")
                    .with_field(FieldDef::new("labContactId", ColumnType::int(10)).primary_key())
                    .with_field(
                        FieldDef::new("personId", ColumnType::int(10))
                            .not_null()
                            .references(ForeignKey::to("Person", "personId")),
                    )
                    .with_field(FieldDef::new("cardName", ColumnType::varchar(40)).not_null())
                    .with_field(FieldDef::new("proposalId", ColumnType::int(10)).not_null()),
            )
            .with_constraint(ConstraintDef::unique_composite(
                "cardNameAndProposal",
                "LabContact",
                ["cardName", "proposalId"],
            ));
        Catalog::new(bundle).unwrap()
    }

    fn row(values: &[(&str, Value)]) -> Vec<(String, Value)> {
        values.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
    }

    fn put(txn: &mut Transaction<'_>, entity: &str, id: i64, data: &[(String, Value)]) -> RowKey {
        let key = RowKey::new(entity, &[Value::Int(id)]).unwrap();
        txn.put(&key, Record::new(value_codec::encode_row(data).unwrap()));
        key
    }

    #[test]
    fn test_validate_fields() {
        let catalog = catalog();
        let validator = ConstraintValidator::new(&catalog);
        let contact = catalog.entity("LabContact").unwrap();

        let missing = row(&[("labContactId", Value::Int(1)), ("personId", Value::Int(1))]);
        let err = validator.validate_fields(contact, &missing).unwrap_err();
        assert!(matches!(err, Error::Constraint(ConstraintError::NotNull { ref field, .. }) if field == "cardName"));

        let too_long = row(&[
            ("labContactId", Value::Int(1)),
            ("personId", Value::Int(1)),
            ("cardName", Value::from("x".repeat(41))),
            ("proposalId", Value::Int(1)),
        ]);
        assert!(matches!(
            validator.validate_fields(contact, &too_long),
            Err(Error::Constraint(ConstraintError::TooLong { .. }))
        ));
    }

    #[test]
    fn test_foreign_keys_and_primary_key() {
        let catalog = catalog();
        let validator = ConstraintValidator::new(&catalog);
        let engine = StorageEngine::open(StorageConfig::temporary()).unwrap();
        let mut txn = engine.transaction();
        let contact = catalog.entity("LabContact").unwrap();

        let data = row(&[("personId", Value::Int(5))]);
        assert!(matches!(
            validator.check_foreign_keys(&txn, contact, &data),
            Err(Error::Constraint(ConstraintError::ForeignKeyViolation { .. }))
        ));

        let person = put(&mut txn, "Person", 5, &row(&[("personId", Value::Int(5))]));
        validator.check_foreign_keys(&txn, contact, &data).unwrap();
        assert!(matches!(
            validator.check_primary_key(&txn, &person),
            Err(Error::Constraint(ConstraintError::DuplicatePrimaryKey { .. }))
        ));
    }

    #[test]
    fn test_unique_fields_and_constraints() {
        let catalog = catalog();
        let validator = ConstraintValidator::new(&catalog);
        let engine = StorageEngine::open(StorageConfig::temporary()).unwrap();
        let mut txn = engine.transaction();

        let person = catalog.entity("Person").unwrap();
        let first = row(&[("personId", Value::Int(1)), ("login", Value::from("boaty"))]);
        let first_key = put(&mut txn, "Person", 1, &first);
        validator.check_unique(&txn, person, &first_key, &first).unwrap();

        let second = row(&[("personId", Value::Int(2)), ("login", Value::from("boaty"))]);
        let second_key = put(&mut txn, "Person", 2, &second);
        assert!(matches!(
            validator.check_unique(&txn, person, &second_key, &second),
            Err(Error::Constraint(ConstraintError::UniqueViolation { .. }))
        ));

        let nameless = row(&[("personId", Value::Int(3)), ("login", Value::Null)]);
        let nameless_key = put(&mut txn, "Person", 3, &nameless);
        let also_nameless = row(&[("personId", Value::Int(4)), ("login", Value::Null)]);
        put(&mut txn, "Person", 4, &also_nameless);
        validator.check_unique(&txn, person, &nameless_key, &nameless).unwrap();

        let contact = catalog.entity("LabContact").unwrap();
        let a = row(&[("cardName", Value::from("Ada")), ("proposalId", Value::Int(1))]);
        put(&mut txn, "LabContact", 1, &a);
        let b = row(&[("cardName", Value::from("Ada")), ("proposalId", Value::Int(2))]);
        let b_key = put(&mut txn, "LabContact", 2, &b);
        validator.check_unique(&txn, contact, &b_key, &b).unwrap();

        let c = row(&[("cardName", Value::from("Ada")), ("proposalId", Value::Int(1))]);
        let c_key = put(&mut txn, "LabContact", 3, &c);
        let err = validator.check_unique(&txn, contact, &c_key, &c).unwrap_err();
        assert!(matches!(
            err,
            Error::Constraint(ConstraintError::UniqueViolation { ref constraint, .. }) if constraint == "cardNameAndProposal"
        ));
    }
}
