//! Unit-of-work tests over the full ISPyB catalog.

use ispyb_core::error::{CascadeError, ConstraintError, Error};
use ispyb_core::query::{CompareOp, FilterExpr, OrderDirection, Query};
use ispyb_core::session::{Instance, InstanceState, Session};
use ispyb_core::value::Value;
use ispyb_core::{Database, DatabaseConfig};
use tempfile::TempDir;
use tracing_subscriber::EnvFilter;

struct TestContext {
    db: Database,
}

impl TestContext {
    fn new() -> Self {
        init_tracing();
        let catalog = ispyb_models::catalog().unwrap().clone();
        Self {
            db: Database::open_temporary(catalog).unwrap(),
        }
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A principal investigator, proposal MX415 and its third visit.
fn seed_visit(session: &mut Session<'_>) -> (Instance, Instance) {
    let person = session
        .new_instance("Person")
        .unwrap()
        .with("login", "boaty")
        .unwrap();
    session.add(&person).unwrap();
    session.flush().unwrap();

    let proposal = session
        .new_instance("Proposal")
        .unwrap()
        .with("personId", person.get("personId").unwrap())
        .unwrap()
        .with("proposalCode", "MX")
        .unwrap()
        .with("proposalNumber", "415")
        .unwrap();
    session.add(&proposal).unwrap();

    let visit = session
        .new_instance("BLSession")
        .unwrap()
        .with("visit_number", 3)
        .unwrap();
    session.append(&proposal, "BLSession", &visit).unwrap();
    session.flush().unwrap();
    (proposal, visit)
}

#[test]
fn test_protein_round_trip() {
    let ctx = TestContext::new();
    let mut session = ctx.db.session();
    let (proposal, _) = seed_visit(&mut session);

    let protein = session
        .new_instance("Protein")
        .unwrap()
        .with("proposalId", proposal.get("proposalId").unwrap())
        .unwrap()
        .with("name", "test")
        .unwrap()
        .with("acronym", "test")
        .unwrap();
    session.add(&protein).unwrap();
    session.commit().unwrap();

    let id = protein.get("proteinId").unwrap();
    assert!(matches!(id, Value::Int(n) if n > 0));

    let mut other = ctx.db.session();
    let loaded = other.get("Protein", id).unwrap().unwrap();
    assert_eq!(loaded.get("acronym").unwrap(), Value::from("test"));
    let owner = other.related_one(&loaded, "Proposal").unwrap().unwrap();
    assert_eq!(owner.get("proposalCode").unwrap(), Value::from("MX"));
}

#[test]
fn test_defaults_applied_on_insert() {
    let ctx = TestContext::new();
    let mut session = ctx.db.session();
    let (proposal, visit) = seed_visit(&mut session);

    assert_eq!(proposal.get("state").unwrap(), Value::from("Open"));
    assert!(!proposal.get("bltimeStamp").unwrap().is_null());
    assert_eq!(visit.get("proposalId").unwrap(), proposal.get("proposalId").unwrap());
}

#[test]
fn test_identity_map() {
    let ctx = TestContext::new();
    let mut session = ctx.db.session();
    let (proposal, _) = seed_visit(&mut session);
    session.commit().unwrap();

    let id = proposal.get("proposalId").unwrap();
    let again = session.get("Proposal", id.clone()).unwrap().unwrap();
    assert!(again.ptr_eq(&proposal));

    let query = Query::new("Proposal").filter(FilterExpr::eq("proposalNumber", "415"));
    let found = session.first(&query).unwrap().unwrap();
    assert!(found.ptr_eq(&proposal));
}

#[test]
fn test_enum_values_validated() {
    let ctx = TestContext::new();
    let mut session = ctx.db.session();
    let (proposal, _) = seed_visit(&mut session);
    session.commit().unwrap();

    proposal.set("state", "Pending").unwrap();
    let err = session.flush().unwrap_err();
    assert!(matches!(
        err,
        Error::Constraint(ConstraintError::InvalidEnumValue { .. })
    ));

    proposal.set("state", "Closed").unwrap();
    session.commit().unwrap();
    let mut other = ctx.db.session();
    let loaded = other.get("Proposal", proposal.get("proposalId").unwrap()).unwrap().unwrap();
    assert_eq!(loaded.get("state").unwrap(), Value::from("Closed"));
}

#[test]
fn test_derived_labels_in_memory() {
    let ctx = TestContext::new();
    let mut session = ctx.db.session();
    let (proposal, visit) = seed_visit(&mut session);

    assert_eq!(session.evaluate(&proposal, "proposal").unwrap(), Some(Value::from("MX415")));
    assert_eq!(session.evaluate(&visit, "proposal").unwrap(), Some(Value::from("MX415")));
    assert_eq!(session.evaluate(&visit, "session").unwrap(), Some(Value::from("MX415-3")));

    let unattached = session
        .new_instance("BLSession")
        .unwrap()
        .with("visit_number", 1)
        .unwrap();
    assert_eq!(session.evaluate(&unattached, "session").unwrap(), None);
    assert_eq!(session.evaluate(&unattached, "proposal").unwrap(), None);

    proposal.set("proposalNumber", Value::Null).unwrap();
    assert_eq!(session.evaluate(&proposal, "proposal").unwrap(), None);
    assert_eq!(session.evaluate(&visit, "session").unwrap(), None);
}

#[test]
fn test_derived_labels_in_queries() {
    let ctx = TestContext::new();
    let catalog = ctx.db.catalog();
    let mut session = ctx.db.session();
    seed_visit(&mut session);

    let orphan = session
        .new_instance("Proposal")
        .unwrap()
        .with("personId", 1)
        .unwrap()
        .with("proposalCode", "CM")
        .unwrap();
    session.add(&orphan).unwrap();

    let query = Query::new("Proposal")
        .select_accessor(catalog, "proposal")
        .unwrap()
        .order_by("proposalId", Default::default());
    let rows = session.project(&query).unwrap();
    assert_eq!(
        rows,
        vec![
            vec![("proposal".to_string(), Value::from("MX415"))],
            vec![("proposal".to_string(), Value::Null)],
        ]
    );

    let query = Query::new("BLSession").select_accessor(catalog, "session").unwrap();
    let rows = session.project(&query).unwrap();
    assert_eq!(rows, vec![vec![("session".to_string(), Value::from("MX415-3"))]]);
}

#[test]
fn test_filter_and_sort_by_session_label() {
    let ctx = TestContext::new();
    let catalog = ctx.db.catalog();
    let mut session = ctx.db.session();
    let (proposal, _) = seed_visit(&mut session);

    let first_visit = session
        .new_instance("BLSession")
        .unwrap()
        .with("visit_number", 1)
        .unwrap();
    session.append(&proposal, "BLSession", &first_visit).unwrap();
    let other = session
        .new_instance("Proposal")
        .unwrap()
        .with("personId", proposal.get("personId").unwrap())
        .unwrap()
        .with("proposalCode", "CM")
        .unwrap()
        .with("proposalNumber", "7")
        .unwrap();
    session.add(&other).unwrap();
    let other_visit = session
        .new_instance("BLSession")
        .unwrap()
        .with("visit_number", 2)
        .unwrap();
    session.append(&other, "BLSession", &other_visit).unwrap();

    let query = Query::new("BLSession")
        .filter_accessor(catalog, "session", CompareOp::Eq, "MX415-3")
        .unwrap();
    let matched = session.all(&query).unwrap();
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].get("visit_number").unwrap(), Value::Int(3));

    let query = Query::new("BLSession")
        .select_accessor(catalog, "session")
        .unwrap()
        .order_by_accessor(catalog, "session", OrderDirection::Desc)
        .unwrap();
    let labels: Vec<Value> = session
        .project(&query)
        .unwrap()
        .into_iter()
        .map(|mut row| row.remove(0).1)
        .collect();
    assert_eq!(
        labels,
        vec![Value::from("MX415-3"), Value::from("MX415-1"), Value::from("CM7-2")]
    );

    let query = Query::new("BLSession")
        .filter_accessor(catalog, "session", CompareOp::Ne, "MX415-3")
        .unwrap()
        .order_by_accessor(catalog, "session", OrderDirection::Asc)
        .unwrap();
    let visits: Vec<Value> = session
        .all(&query)
        .unwrap()
        .iter()
        .map(|v| v.get("visit_number").unwrap())
        .collect();
    assert_eq!(visits, vec![Value::Int(2), Value::Int(1)]);
}

#[test]
fn test_delete_proposal_cascades_to_sessions() {
    let ctx = TestContext::new();
    let mut session = ctx.db.session();
    let (proposal, visit) = seed_visit(&mut session);
    let session_type = session
        .new_instance("SessionType")
        .unwrap()
        .with("typeName", "commissioning")
        .unwrap();
    session.append(&visit, "SessionType", &session_type).unwrap();
    session.commit().unwrap();

    session.delete(&proposal).unwrap();
    session.commit().unwrap();

    assert_eq!(visit.state(), InstanceState::Deleted);
    assert_eq!(session_type.state(), InstanceState::Deleted);
    assert_eq!(session.count(&Query::new("BLSession")).unwrap(), 0);
    assert_eq!(session.count(&Query::new("SessionType")).unwrap(), 0);
    assert_eq!(session.count(&Query::new("Person")).unwrap(), 1);
}

#[test]
fn test_restricting_foreign_key_blocks_delete() {
    let ctx = TestContext::new();
    let mut session = ctx.db.session();
    let (_, visit) = seed_visit(&mut session);

    let group = session
        .new_instance("DataCollectionGroup")
        .unwrap()
        .with("sessionId", visit.get("sessionId").unwrap())
        .unwrap();
    session.add(&group).unwrap();
    session.flush().unwrap();
    let collection = session
        .new_instance("DataCollection")
        .unwrap()
        .with("dataCollectionGroupId", group.get("dataCollectionGroupId").unwrap())
        .unwrap();
    session.add(&collection).unwrap();
    session.flush().unwrap();

    let chain = session
        .new_instance("EventChain")
        .unwrap()
        .with("dataCollectionId", collection.get("dataCollectionId").unwrap())
        .unwrap();
    let shutter = session.new_instance("EventType").unwrap().with("name", "shutter").unwrap();
    session.add(&chain).unwrap();
    session.add(&shutter).unwrap();
    session.flush().unwrap();

    let event = session
        .new_instance("Event")
        .unwrap()
        .with("eventTypeId", shutter.get("eventTypeId").unwrap())
        .unwrap()
        .with("offset", 0.5)
        .unwrap();
    session.append(&chain, "events", &event).unwrap();
    session.commit().unwrap();

    session.delete(&shutter).unwrap();
    assert!(matches!(
        session.flush(),
        Err(Error::Cascade(CascadeError::RestrictViolation { .. }))
    ));
    assert_eq!(shutter.state(), InstanceState::Persistent);
    session.rollback();

    let mut session = ctx.db.session();
    let chain = session.get("EventChain", chain.get("eventChainId").unwrap()).unwrap().unwrap();
    let events = session.related_many(&chain, "events").unwrap();
    assert_eq!(events.len(), 1);

    session.remove(&chain, "events", &events[0]).unwrap();
    session.commit().unwrap();
    assert_eq!(events[0].state(), InstanceState::Deleted);
    assert_eq!(session.count(&Query::new("Event")).unwrap(), 0);

    let shutter = session.get("EventType", shutter.get("eventTypeId").unwrap()).unwrap().unwrap();
    session.delete(&shutter).unwrap();
    session.commit().unwrap();
    assert_eq!(session.count(&Query::new("EventType")).unwrap(), 0);
}

#[test]
fn test_position_tree() {
    let ctx = TestContext::new();
    let mut session = ctx.db.session();

    let root = session.new_instance("Position").unwrap();
    let child = session.new_instance("Position").unwrap();
    session.add(&root).unwrap();
    session.append(&root, "children", &child).unwrap();
    session.commit().unwrap();
    assert_eq!(child.get("relativePositionId").unwrap(), root.get("positionId").unwrap());

    let mut other = ctx.db.session();
    let loaded = other.get("Position", child.get("positionId").unwrap()).unwrap().unwrap();
    let parent = other.related_one(&loaded, "parent").unwrap().unwrap();
    assert!(other.related_one(&parent, "parent").unwrap().is_none());
    let children = other.related_many(&parent, "children").unwrap();
    assert_eq!(children.len(), 1);
    assert!(children[0].ptr_eq(&loaded));

    other.delete(&parent).unwrap();
    other.commit().unwrap();
    assert_eq!(other.count(&Query::new("Position")).unwrap(), 0);
}

#[test]
fn test_user_group_membership() {
    let ctx = TestContext::new();
    let mut session = ctx.db.session();
    seed_visit(&mut session);

    let group = session.new_instance("UserGroup").unwrap().with("name", "mx_staff").unwrap();
    let permission = session
        .new_instance("Permission")
        .unwrap()
        .with("type", "all_proposals")
        .unwrap();
    session.add(&group).unwrap();
    session.append(&group, "Permission", &permission).unwrap();
    let person = session.get("Person", 1).unwrap().unwrap();
    session.append(&group, "Person", &person).unwrap();
    session.commit().unwrap();

    assert_eq!(session.count(&Query::new("UserGroup_has_Permission")).unwrap(), 1);
    assert_eq!(session.count(&Query::new("UserGroup_has_Person")).unwrap(), 1);

    let mut other = ctx.db.session();
    let person = other.get("Person", 1).unwrap().unwrap();
    let groups = other.related_many(&person, "UserGroup").unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].get("name").unwrap(), Value::from("mx_staff"));

    other.remove(&groups[0], "Person", &person).unwrap();
    other.commit().unwrap();
    assert_eq!(other.count(&Query::new("UserGroup_has_Person")).unwrap(), 0);
    assert_eq!(other.count(&Query::new("UserGroup")).unwrap(), 1);
}

#[test]
fn test_grid_info_association_is_read_only() {
    let ctx = TestContext::new();
    let mut session = ctx.db.session();

    let collection = session.new_instance("DataCollection").unwrap();
    let grid = session.new_instance("GridInfo").unwrap();
    assert!(matches!(
        session.append(&collection, "GridInfo", &grid),
        Err(Error::InvalidOperation(_))
    ));
    assert!(!session.has_changes());
}

#[test]
fn test_views_are_read_only() {
    let ctx = TestContext::new();
    let mut session = ctx.db.session();

    let row = session.new_instance("V_AnalysisInfo").unwrap();
    assert!(matches!(session.add(&row), Err(Error::ReadOnly(name)) if name == "V_AnalysisInfo"));
    assert_eq!(session.count(&Query::new("V_AnalysisInfo")).unwrap(), 0);
}

#[test]
fn test_persistent_store_survives_reopen() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ispyb");
    let catalog = ispyb_models::catalog().unwrap();

    {
        let db = Database::open(catalog.clone(), DatabaseConfig::embedded(&path)).unwrap();
        db.with_session(|session| {
            seed_visit(session);
            Ok(())
        })
        .unwrap();
        db.flush().unwrap();
    }

    let db = Database::open(catalog.clone(), DatabaseConfig::embedded(&path)).unwrap();
    let mut session = db.session();
    let visit = session.get("BLSession", 1).unwrap().unwrap();
    assert_eq!(session.evaluate(&visit, "session").unwrap(), Some(Value::from("MX415-3")));
}
