//! Integration tests for the linked ISPyB catalog.

use ispyb_core::catalog::{ColumnType, EntityKind, RelationKind};
use ispyb_core::error::ConstraintError;
use ispyb_core::query::{CompareOp, FilterExpr, OrderDirection, Query};
use ispyb_core::value::Value;
use ispyb_models::{build_catalog, catalog, schema_bundle, SCHEMA_VERSION};

#[test]
fn test_catalog_builds() {
    let catalog = catalog().unwrap();

    assert_eq!(catalog.version(), SCHEMA_VERSION);
    assert_eq!(catalog.entity_count(), schema_bundle().entities.len());
    assert!(catalog.entity("Proposal").is_some());
    assert!(catalog.entity("BLSession").is_some());
    assert!(catalog.entity("UserGroup_has_Person").is_some());

    let view = catalog.entity("V_AnalysisInfo").unwrap();
    assert_eq!(view.kind, EntityKind::View);
    assert!(view.primary_key().is_empty());
    assert!(catalog.relations_of("V_AnalysisInfo").is_empty());
}

#[test]
fn test_catalog_is_shared_and_reproducible() {
    let first = catalog().unwrap();
    let second = catalog().unwrap();
    assert!(std::ptr::eq(first, second));

    let rebuilt = build_catalog().unwrap();
    assert_eq!(rebuilt.fingerprint(), first.fingerprint());
}

#[test]
fn test_every_pair_points_back() {
    let catalog = catalog().unwrap();
    let mut pairs = 0;

    for entity in catalog.entities() {
        for relation in catalog.relations_of(&entity.name) {
            if relation.def.back_populates.is_none() {
                continue;
            }
            let counterpart = catalog.counterpart(relation).unwrap();
            assert_eq!(counterpart.target(), entity.name);
            assert_eq!(counterpart.kind(), relation.kind().inverse());
            assert_eq!(counterpart.path, relation.reversed_path());
            assert_eq!(counterpart.def.back_populates.as_deref(), Some(relation.name()));
            pairs += 1;
        }
    }
    assert!(pairs >= 40, "only {} paired relationships", pairs);
}

#[test]
fn test_declared_associations() {
    let catalog = catalog().unwrap();

    let sessions = catalog.relation("Proposal", "BLSession").unwrap();
    assert_eq!(sessions.kind(), RelationKind::OneToMany);
    assert_eq!(sessions.target(), "BLSession");

    let proposal = catalog.relation("BLSession", "Proposal").unwrap();
    assert_eq!(proposal.owning_field(), Some("proposalId"));

    let grids = catalog.relation("DataCollection", "GridInfo").unwrap();
    assert_eq!(grids.kind(), RelationKind::ManyToMany);
    assert_eq!(grids.path.len(), 2);
    assert_eq!(grids.path[0].to_entity, "DataCollectionGroup");

    let position2 = catalog.relation("BLSubSample", "Position2").unwrap();
    assert_eq!(position2.path[0].from_field, "position2Id");

    let parent = catalog.relation("Position", "parent").unwrap();
    assert_eq!(parent.target(), "Position");
    assert_eq!(parent.path[0].from_field, "relativePositionId");
    let children = catalog.relation("Position", "children").unwrap();
    assert!(children.is_collection());
    assert_eq!(children.path, parent.reversed_path());

    let ssx = catalog.relation("DataCollection", "SSXDataCollection").unwrap();
    assert!(!ssx.is_collection());
    assert_eq!(ssx.owning_field(), None);
}

#[test]
fn test_column_types() {
    let catalog = catalog().unwrap();
    let proposal = catalog.entity("Proposal").unwrap();

    let id = proposal.field("proposalId").unwrap();
    assert!(id.primary_key);
    assert_eq!(id.column_type, ColumnType::int(10));
    assert_eq!(id.column_type.sql_type(), "int(10) unsigned");
    assert_eq!(proposal.primary_key_names(), vec!["proposalId"]);

    let person = proposal.field("personId").unwrap();
    assert!(!person.nullable);
    assert_eq!(person.foreign_key.as_ref().unwrap().entity, "Person");
}

#[test]
fn test_enumerated_fields_reject_unknown_values() {
    let catalog = catalog().unwrap();

    let mut checked = 0;
    for entity in catalog.entities() {
        for field in &entity.fields {
            let ColumnType::Enum { values } = &field.column_type else {
                continue;
            };
            for member in values {
                field.validate(&entity.name, &Value::from(member.as_str())).unwrap();
            }
            let err = field
                .validate(&entity.name, &Value::from("not-a-member"))
                .unwrap_err();
            assert!(matches!(err, ConstraintError::InvalidEnumValue { .. }));
            checked += 1;
        }
    }
    assert!(checked > 10);
}

#[test]
fn test_accessors_attached() {
    let catalog = catalog().unwrap();

    assert_eq!(catalog.accessors_of("Proposal").len(), 1);
    assert_eq!(catalog.accessors_of("BLSession").len(), 2);
    assert!(catalog.accessor("BLSession", "session").is_some());
    assert!(catalog.accessor("Proposal", "session").is_none());
}

#[test]
fn test_session_label_renders_as_sql() {
    let catalog = catalog().unwrap();

    let query = Query::new("BLSession")
        .select_accessor(catalog, "session")
        .unwrap()
        .filter(FilterExpr::eq("sessionId", 1));
    let statement = query.to_sql(catalog).unwrap();

    assert_eq!(
        statement.sql,
        "SELECT concat(`Proposal_1`.`proposalCode`, `Proposal_1`.`proposalNumber`, ?, \
         `BLSession`.`visit_number`) AS `session` FROM `BLSession` \
         LEFT OUTER JOIN `Proposal` AS `Proposal_1` \
         ON `BLSession`.`proposalId` = `Proposal_1`.`proposalId` \
         WHERE `BLSession`.`sessionId` = ?"
    );
    assert_eq!(statement.params, vec![Value::from("-"), Value::Int(1)]);

    let query = Query::new("Proposal").select_accessor(catalog, "proposal").unwrap();
    assert_eq!(
        query.to_sql(catalog).unwrap().sql,
        "SELECT concat(`Proposal`.`proposalCode`, `Proposal`.`proposalNumber`) AS `proposal` \
         FROM `Proposal`"
    );
}

#[test]
fn test_session_label_filter_and_order_render_as_sql() {
    let catalog = catalog().unwrap();

    let query = Query::new("BLSession")
        .filter_accessor(catalog, "session", CompareOp::Eq, "MX415-3")
        .unwrap()
        .order_by_accessor(catalog, "session", OrderDirection::Desc)
        .unwrap();
    let statement = query.to_sql(catalog).unwrap();

    let label = "concat(`Proposal_1`.`proposalCode`, `Proposal_1`.`proposalNumber`, ?, \
                 `BLSession`.`visit_number`)";
    assert!(statement.sql.starts_with("SELECT `BLSession`.`sessionId`"));
    assert!(statement.sql.ends_with(&format!(
        " FROM `BLSession` LEFT OUTER JOIN `Proposal` AS `Proposal_1` \
         ON `BLSession`.`proposalId` = `Proposal_1`.`proposalId` \
         WHERE {label} = ? ORDER BY {label} DESC"
    )));
    assert_eq!(
        statement.params,
        vec![Value::from("-"), Value::from("MX415-3"), Value::from("-")]
    );

    assert!(Query::new("BLSession")
        .filter_accessor(catalog, "shipping", CompareOp::Eq, "x")
        .is_err());
    assert!(Query::new("Proposal")
        .order_by_accessor(catalog, "session", OrderDirection::Asc)
        .is_err());
}

#[test]
fn test_catalog_json_description() {
    let json = catalog().unwrap().to_json().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["version"], SCHEMA_VERSION);
    assert!(parsed["entities"].as_array().unwrap().len() > 200);
}
