//! Bidirectional associations and hand-declared joins.
//!
//! Each pair is declared together; the catalog rejects a side whose
//! counterpart is missing or does not point back.

use ispyb_core::catalog::{RelationCascade, RelationDef};

/// `parent` holds the foreign key, `collection` is the navigable set of children.
fn parent_child(
    parent: &str,
    collection: &str,
    child: &str,
    back: &str,
) -> [RelationDef; 2] {
    [
        RelationDef::one_to_many(collection, parent, child).back_populates(back),
        RelationDef::many_to_one(back, child, parent).back_populates(collection),
    ]
}

fn many_to_many(left: &str, right: &str, secondary: &str) -> [RelationDef; 2] {
    [
        RelationDef::many_to_many(right, left, right, secondary).back_populates(left),
        RelationDef::many_to_many(left, right, left, secondary).back_populates(right),
    ]
}

/// Compositions owned by their parent: removing one from the collection deletes it.
fn owned(parent: &str, collection: &str, child: &str, back: &str) -> [RelationDef; 2] {
    let [children, owner] = parent_child(parent, collection, child, back);
    [children.cascade(RelationCascade::DeleteOrphan), owner]
}

pub(crate) fn associations() -> Vec<RelationDef> {
    let mut relations = Vec::new();

    // Proposals and sessions
    relations.extend(parent_child("Proposal", "BLSession", "BLSession", "Proposal"));
    relations.extend(parent_child(
        "Proposal",
        "ProposalHasPerson",
        "ProposalHasPerson",
        "Proposal",
    ));
    relations.extend(parent_child(
        "BLSession",
        "SessionHasPerson",
        "SessionHasPerson",
        "BLSession",
    ));
    relations.extend(parent_child("BLSession", "SessionType", "SessionType", "BLSession"));

    // Collection groups, workflows and grid scans
    relations.extend(parent_child(
        "Workflow",
        "DataCollectionGroup",
        "DataCollectionGroup",
        "Workflow",
    ));
    relations.extend(many_to_many("DataCollection", "GridInfo", "DataCollectionGroup"));
    relations.push(
        RelationDef::one_to_one("SSXDataCollection", "DataCollection", "SSXDataCollection")
            .back_populates("DataCollection"),
    );
    relations.push(
        RelationDef::one_to_one("DataCollection", "SSXDataCollection", "DataCollection")
            .back_populates("SSXDataCollection"),
    );

    // Automatic processing
    relations.extend(parent_child(
        "AutoProcProgram",
        "AutoProcIntegration",
        "AutoProcIntegration",
        "AutoProcProgram",
    ));
    relations.extend(parent_child(
        "AutoProcProgram",
        "AutoProcProgramAttachments",
        "AutoProcProgramAttachment",
        "AutoProcProgram",
    ));
    relations.extend(parent_child(
        "AutoProcIntegration",
        "AutoProcScalingHasInt",
        "AutoProcScalingHasInt",
        "AutoProcIntegration",
    ));
    relations.extend(parent_child(
        "AutoProcScaling",
        "AutoProcScalingStatistics",
        "AutoProcScalingStatistics",
        "AutoProcScaling",
    ));

    // Screening
    relations.extend(parent_child("Screening", "ScreeningOutput", "ScreeningOutput", "Screening"));
    relations.extend(parent_child(
        "ScreeningOutput",
        "ScreeningStrategy",
        "ScreeningStrategy",
        "ScreeningOutput",
    ));
    relations.extend(parent_child(
        "ScreeningOutput",
        "ScreeningOutputLattice",
        "ScreeningOutputLattice",
        "ScreeningOutput",
    ));
    relations.extend(parent_child(
        "ScreeningStrategy",
        "ScreeningStrategyWedge",
        "ScreeningStrategyWedge",
        "ScreeningStrategy",
    ));
    relations.extend(parent_child(
        "ScreeningStrategyWedge",
        "ScreeningStrategySubWedge",
        "ScreeningStrategySubWedge",
        "ScreeningStrategyWedge",
    ));

    // Access control
    relations.extend(many_to_many("UserGroup", "Permission", "UserGroup_has_Permission"));
    relations.extend(many_to_many("UserGroup", "Person", "UserGroup_has_Person"));

    // Compositions and event chains
    relations.extend(owned("Crystal", "crystal_compositions", "CrystalComposition", "Crystal"));
    relations.extend(owned("BLSample", "sample_compositions", "SampleComposition", "BLSample"));
    relations.extend(owned("EventChain", "events", "Event", "EventChain"));

    // Positions
    relations.extend(parent_child("Position", "children", "Position", "parent"));
    relations.push(
        RelationDef::many_to_one("Position2", "BLSubSample", "Position")
            .join_on("position2Id", "positionId"),
    );

    relations
}
