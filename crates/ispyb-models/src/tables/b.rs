//! Table entities, B.

use ispyb_core::catalog::{
    ColumnType, DefaultValue, EntityDef, FieldDef, ForeignKey, ReferentialAction,
};

pub(crate) fn beam_apertures() -> EntityDef {
    EntityDef::table("BeamApertures", "BeamApertures")
        .with_field(FieldDef::new("beamAperturesid", ColumnType::int(10)).primary_key())
        .with_field(
            FieldDef::new("beamlineStatsId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("BeamlineStats", "beamlineStatsId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("flux", ColumnType::decimal()))
        .with_field(FieldDef::new("x", ColumnType::float()))
        .with_field(FieldDef::new("y", ColumnType::float()))
        .with_field(FieldDef::new("apertureSize", ColumnType::smallint(5)))
}

pub(crate) fn beam_centres() -> EntityDef {
    EntityDef::table("BeamCentres", "BeamCentres")
        .with_field(FieldDef::new("beamCentresid", ColumnType::int(10)).primary_key())
        .with_field(
            FieldDef::new("beamlineStatsId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("BeamlineStats", "beamlineStatsId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("x", ColumnType::float()))
        .with_field(FieldDef::new("y", ColumnType::float()))
        .with_field(FieldDef::new("zoom", ColumnType::tinyint(3)))
}

pub(crate) fn beamline_action() -> EntityDef {
    EntityDef::table("BeamlineAction", "BeamlineAction")
        .with_field(FieldDef::new("beamlineActionId", ColumnType::int(10)).primary_key())
        .with_field(
            FieldDef::new("sessionId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("BLSession", "sessionId").on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("startTimestamp", ColumnType::Timestamp)
                .not_null()
                .with_default(DefaultValue::CurrentTimestamp)
                .auto_update(),
        )
        .with_field(
            FieldDef::new("endTimestamp", ColumnType::Timestamp)
                .not_null()
                .with_default(DefaultValue::ZeroTimestamp),
        )
        .with_field(FieldDef::new("message", ColumnType::varchar(255)))
        .with_field(FieldDef::new("parameter", ColumnType::varchar(50)))
        .with_field(FieldDef::new("value", ColumnType::varchar(30)))
        .with_field(
            FieldDef::new("loglevel", ColumnType::enumeration(&["DEBUG", "CRITICAL", "INFO"])),
        )
        .with_field(
            FieldDef::new(
                "status",
                ColumnType::enumeration(&[
                    "PAUSED",
                    "RUNNING",
                    "TERMINATED",
                    "COMPLETE",
                    "ERROR",
                    "EPICSFAIL",
                ]),
            ),
        )
}

pub(crate) fn beam_line_setup() -> EntityDef {
    EntityDef::table("BeamLineSetup", "BeamLineSetup")
        .with_field(FieldDef::new("beamLineSetupId", ColumnType::int(10)).primary_key())
        .with_field(FieldDef::new("synchrotronMode", ColumnType::varchar(255)))
        .with_field(FieldDef::new("undulatorType1", ColumnType::varchar(45)))
        .with_field(FieldDef::new("undulatorType2", ColumnType::varchar(45)))
        .with_field(FieldDef::new("undulatorType3", ColumnType::varchar(45)))
        .with_field(FieldDef::new("focalSpotSizeAtSample", ColumnType::float()))
        .with_field(FieldDef::new("focusingOptic", ColumnType::varchar(255)))
        .with_field(FieldDef::new("beamDivergenceHorizontal", ColumnType::float()))
        .with_field(FieldDef::new("beamDivergenceVertical", ColumnType::float()))
        .with_field(FieldDef::new("polarisation", ColumnType::float()))
        .with_field(FieldDef::new("monochromatorType", ColumnType::varchar(255)))
        .with_field(FieldDef::new("setupDate", ColumnType::DateTime))
        .with_field(FieldDef::new("synchrotronName", ColumnType::varchar(255)))
        .with_field(FieldDef::new("maxExpTimePerDataCollection", ColumnType::decimal()))
        .with_field(FieldDef::new("minExposureTimePerImage", ColumnType::decimal()))
        .with_field(FieldDef::new("goniostatMaxOscillationSpeed", ColumnType::decimal()))
        .with_field(FieldDef::new("goniostatMinOscillationWidth", ColumnType::decimal()))
        .with_field(FieldDef::new("minTransmission", ColumnType::decimal()))
        .with_field(FieldDef::new("CS", ColumnType::float()))
        .with_field(
            FieldDef::new("recordTimeStamp", ColumnType::Timestamp)
                .not_null()
                .with_default(DefaultValue::CurrentTimestamp)
                .with_comment("Creation or last update date/time"),
        )
}

pub(crate) fn beamline_stats() -> EntityDef {
    EntityDef::table("BeamlineStats", "BeamlineStats")
        .with_field(FieldDef::new("beamlineStatsId", ColumnType::int(10)).primary_key())
        .with_field(FieldDef::new("beamline", ColumnType::varchar(10)))
        .with_field(FieldDef::new("recordTimeStamp", ColumnType::DateTime))
        .with_field(FieldDef::new("ringCurrent", ColumnType::float()))
        .with_field(FieldDef::new("energy", ColumnType::float()))
        .with_field(FieldDef::new("gony", ColumnType::float()))
        .with_field(FieldDef::new("beamW", ColumnType::float()))
        .with_field(FieldDef::new("beamH", ColumnType::float()))
        .with_field(FieldDef::new("flux", ColumnType::decimal()))
        .with_field(FieldDef::new("scanFileW", ColumnType::varchar(255)))
        .with_field(FieldDef::new("scanFileH", ColumnType::varchar(255)))
}

pub(crate) fn bf_automation_error() -> EntityDef {
    EntityDef::table("BFAutomationError", "BF_automationError")
        .with_field(FieldDef::new("automationErrorId", ColumnType::int(10)).primary_key())
        .with_field(FieldDef::new("errorType", ColumnType::varchar(40)).not_null())
        .with_field(FieldDef::new("solution", ColumnType::text()))
}

pub(crate) fn bf_automation_fault() -> EntityDef {
    EntityDef::table("BFAutomationFault", "BF_automationFault")
        .with_field(FieldDef::new("automationFaultId", ColumnType::int(10)).primary_key())
        .with_field(
            FieldDef::new("automationErrorId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("BFAutomationError", "automationErrorId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("containerId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("Container", "containerId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("severity", ColumnType::enumeration(&["1", "2", "3"])))
        .with_field(FieldDef::new("stacktrace", ColumnType::text()))
        .with_field(FieldDef::new("resolved", ColumnType::tinyint(1)))
        .with_field(
            FieldDef::new("faultTimeStamp", ColumnType::Timestamp)
                .not_null()
                .with_default(DefaultValue::CurrentTimestamp),
        )
}

pub(crate) fn bf_component() -> EntityDef {
    EntityDef::table("BFComponent", "BF_component")
        .with_field(FieldDef::new("componentId", ColumnType::int(10)).primary_key())
        .with_field(
            FieldDef::new("systemId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("BFSystem", "systemId").on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("name", ColumnType::varchar(100)))
        .with_field(FieldDef::new("description", ColumnType::varchar(200)))
}

pub(crate) fn bf_component_beamline() -> EntityDef {
    EntityDef::table("BFComponentBeamline", "BF_component_beamline")
        .with_field(FieldDef::new("component_beamlineId", ColumnType::int(10)).primary_key())
        .with_field(
            FieldDef::new("componentId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("BFComponent", "componentId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("beamlinename", ColumnType::varchar(20)))
}

pub(crate) fn bf_fault() -> EntityDef {
    EntityDef::table("BFFault", "BF_fault")
        .with_field(FieldDef::new("faultId", ColumnType::int(10)).primary_key())
        .with_field(
            FieldDef::new("sessionId", ColumnType::int(10))
                .not_null()
                .indexed()
                .references(
                    ForeignKey::to("BLSession", "sessionId").on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("owner", ColumnType::varchar(50)))
        .with_field(
            FieldDef::new("subcomponentId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("BFSubcomponent", "subcomponentId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("starttime", ColumnType::DateTime))
        .with_field(FieldDef::new("endtime", ColumnType::DateTime))
        .with_field(FieldDef::new("beamtimelost", ColumnType::tinyint(1)))
        .with_field(FieldDef::new("beamtimelost_starttime", ColumnType::DateTime))
        .with_field(FieldDef::new("beamtimelost_endtime", ColumnType::DateTime))
        .with_field(FieldDef::new("title", ColumnType::varchar(200)))
        .with_field(FieldDef::new("description", ColumnType::text()))
        .with_field(FieldDef::new("resolved", ColumnType::tinyint(1)))
        .with_field(FieldDef::new("resolution", ColumnType::text()))
        .with_field(FieldDef::new("assignee", ColumnType::varchar(50)))
        .with_field(FieldDef::new("attachment", ColumnType::varchar(200)))
        .with_field(FieldDef::new("eLogId", ColumnType::int(11)))
        .with_field(
            FieldDef::new("personId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("Person", "personId").on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("assigneeId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("Person", "personId").on_delete(ReferentialAction::Cascade),
                ),
        )
}

pub(crate) fn bf_subcomponent() -> EntityDef {
    EntityDef::table("BFSubcomponent", "BF_subcomponent")
        .with_field(FieldDef::new("subcomponentId", ColumnType::int(10)).primary_key())
        .with_field(
            FieldDef::new("componentId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("BFComponent", "componentId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("name", ColumnType::varchar(100)))
        .with_field(FieldDef::new("description", ColumnType::varchar(200)))
}

pub(crate) fn bf_subcomponent_beamline() -> EntityDef {
    EntityDef::table("BFSubcomponentBeamline", "BF_subcomponent_beamline")
        .with_field(FieldDef::new("subcomponent_beamlineId", ColumnType::int(10)).primary_key())
        .with_field(
            FieldDef::new("subcomponentId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("BFSubcomponent", "subcomponentId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("beamlinename", ColumnType::varchar(20)))
}

pub(crate) fn bf_system() -> EntityDef {
    EntityDef::table("BFSystem", "BF_system")
        .with_field(FieldDef::new("systemId", ColumnType::int(10)).primary_key())
        .with_field(FieldDef::new("name", ColumnType::varchar(100)))
        .with_field(FieldDef::new("description", ColumnType::varchar(200)))
}

pub(crate) fn bf_system_beamline() -> EntityDef {
    EntityDef::table("BFSystemBeamline", "BF_system_beamline")
        .with_field(FieldDef::new("system_beamlineId", ColumnType::int(10)).primary_key())
        .with_field(
            FieldDef::new("systemId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("BFSystem", "systemId").on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("beamlineName", ColumnType::varchar(20)))
}

pub(crate) fn bl_sample() -> EntityDef {
    EntityDef::table("BLSample", "BLSample")
        .with_field(FieldDef::new("blSampleId", ColumnType::int(10)).primary_key())
        .with_field(
            FieldDef::new("diffractionPlanId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("DiffractionPlan", "diffractionPlanId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("crystalId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("Crystal", "crystalId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("containerId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("Container", "containerId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("name", ColumnType::varchar(100)).indexed())
        .with_field(FieldDef::new("code", ColumnType::varchar(45)))
        .with_field(FieldDef::new("location", ColumnType::varchar(45)))
        .with_field(FieldDef::new("holderLength", ColumnType::decimal()))
        .with_field(FieldDef::new("loopLength", ColumnType::decimal()))
        .with_field(FieldDef::new("loopType", ColumnType::varchar(45)))
        .with_field(FieldDef::new("wireWidth", ColumnType::decimal()))
        .with_field(FieldDef::new("comments", ColumnType::varchar(1024)))
        .with_field(FieldDef::new("completionStage", ColumnType::varchar(45)))
        .with_field(FieldDef::new("structureStage", ColumnType::varchar(45)))
        .with_field(FieldDef::new("publicationStage", ColumnType::varchar(45)))
        .with_field(FieldDef::new("publicationComments", ColumnType::varchar(255)))
        .with_field(FieldDef::new("blSampleStatus", ColumnType::varchar(20)).indexed())
        .with_field(FieldDef::new("isInSampleChanger", ColumnType::tinyint(1)))
        .with_field(FieldDef::new("lastKnownCenteringPosition", ColumnType::varchar(255)))
        .with_field(
            FieldDef::new("recordTimeStamp", ColumnType::Timestamp)
                .not_null()
                .with_default(DefaultValue::CurrentTimestamp)
                .with_comment("Creation or last update date/time"),
        )
        .with_field(
            FieldDef::new("SMILES", ColumnType::varchar(400))
                .with_comment("the symbolic description of the structure of a chemical compound"),
        )
        .with_field(FieldDef::new("lastImageURL", ColumnType::varchar(255)))
        .with_field(FieldDef::new("positionId", ColumnType::int(10)))
        .with_field(FieldDef::new("blSubSampleId", ColumnType::int(10)))
        .with_field(FieldDef::new("screenComponentGroupId", ColumnType::int(10)).indexed())
        .with_field(FieldDef::new("volume", ColumnType::float()))
        .with_field(FieldDef::new("dimension1", ColumnType::decimal()))
        .with_field(FieldDef::new("dimension2", ColumnType::decimal()))
        .with_field(FieldDef::new("dimension3", ColumnType::decimal()))
        .with_field(FieldDef::new("shape", ColumnType::varchar(15)))
        .with_field(
            FieldDef::new("subLocation", ColumnType::smallint(5))
                .with_comment(
                    "Indicates the sample's location on a multi-sample pin, where 1 is closest to the pin base",
                ),
        )
}

pub(crate) fn bl_sample_group() -> EntityDef {
    EntityDef::table("BLSampleGroup", "BLSampleGroup")
        .with_field(FieldDef::new("blSampleGroupId", ColumnType::int(10)).primary_key())
        .with_field(
            FieldDef::new("name", ColumnType::varchar(100)).with_comment("Human-readable name"),
        )
}

pub(crate) fn bl_sample_group_has_bl_sample() -> EntityDef {
    EntityDef::table("BLSampleGroupHasBLSample", "BLSampleGroup_has_BLSample")
        .with_field(
            FieldDef::new("blSampleGroupId", ColumnType::int(10))
                .primary_key()
                .references(
                    ForeignKey::to("BLSampleGroup", "blSampleGroupId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("blSampleId", ColumnType::int(10))
                .primary_key()
                .indexed()
                .references(
                    ForeignKey::to("BLSample", "blSampleId").on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("order", ColumnType::mediumint(9)))
        .with_field(
            FieldDef::new(
                "type",
                ColumnType::enumeration(&["background", "container", "sample", "calibrant"]),
            ),
        )
}

pub(crate) fn bl_sample_has_energy_scan() -> EntityDef {
    EntityDef::table("BLSampleHasEnergyScan", "BLSample_has_EnergyScan")
        .with_field(
            FieldDef::new("blSampleId", ColumnType::int(10))
                .not_null()
                .indexed()
                .with_default(DefaultValue::Int(0))
                .references(
                    ForeignKey::to("BLSample", "blSampleId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("energyScanId", ColumnType::int(10))
                .not_null()
                .indexed()
                .with_default(DefaultValue::Int(0))
                .references(
                    ForeignKey::to("EnergyScan", "energyScanId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("blSampleHasEnergyScanId", ColumnType::int(11)).primary_key())
}

pub(crate) fn bl_sample_image() -> EntityDef {
    EntityDef::table("BLSampleImage", "BLSampleImage")
        .with_field(FieldDef::new("blSampleImageId", ColumnType::int(10)).primary_key())
        .with_field(
            FieldDef::new("blSampleId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("BLSample", "blSampleId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("micronsPerPixelX", ColumnType::float()))
        .with_field(FieldDef::new("micronsPerPixelY", ColumnType::float()))
        .with_field(FieldDef::new("imageFullPath", ColumnType::varchar(255)))
        .with_field(FieldDef::new("blSampleImageScoreId", ColumnType::int(11)))
        .with_field(FieldDef::new("comments", ColumnType::varchar(255)))
        .with_field(FieldDef::new("blTimeStamp", ColumnType::DateTime))
        .with_field(
            FieldDef::new("containerInspectionId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("ContainerInspection", "containerInspectionId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("modifiedTimeStamp", ColumnType::DateTime))
}

pub(crate) fn bl_sample_image_analysis() -> EntityDef {
    EntityDef::table("BLSampleImageAnalysis", "BLSampleImageAnalysis")
        .with_field(FieldDef::new("blSampleImageAnalysisId", ColumnType::int(10)).primary_key())
        .with_field(
            FieldDef::new("blSampleImageId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("BLSampleImage", "blSampleImageId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("oavSnapshotBefore", ColumnType::varchar(255)))
        .with_field(FieldDef::new("oavSnapshotAfter", ColumnType::varchar(255)))
        .with_field(FieldDef::new("deltaX", ColumnType::int(11)))
        .with_field(FieldDef::new("deltaY", ColumnType::int(11)))
        .with_field(FieldDef::new("goodnessOfFit", ColumnType::float()))
        .with_field(FieldDef::new("scaleFactor", ColumnType::float()))
        .with_field(FieldDef::new("resultCode", ColumnType::varchar(15)))
        .with_field(
            FieldDef::new("matchStartTimeStamp", ColumnType::Timestamp)
                .with_default(DefaultValue::CurrentTimestamp),
        )
        .with_field(FieldDef::new("matchEndTimeStamp", ColumnType::Timestamp))
}

pub(crate) fn bl_sample_image_score() -> EntityDef {
    EntityDef::table("BLSampleImageScore", "BLSampleImageScore")
        .with_field(FieldDef::new("blSampleImageScoreId", ColumnType::int(10)).primary_key())
        .with_field(FieldDef::new("name", ColumnType::varchar(45)))
        .with_field(FieldDef::new("score", ColumnType::float()))
        .with_field(FieldDef::new("colour", ColumnType::varchar(15)))
}

pub(crate) fn bl_sample_type_has_component() -> EntityDef {
    EntityDef::table("BLSampleTypeHasComponent", "BLSampleType_has_Component")
        .with_field(
            FieldDef::new("blSampleTypeId", ColumnType::int(10))
                .primary_key()
                .references(
                    ForeignKey::to("Crystal", "crystalId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("componentId", ColumnType::int(10))
                .primary_key()
                .indexed()
                .references(
                    ForeignKey::to("Protein", "proteinId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("abundance", ColumnType::float()))
}

pub(crate) fn bl_session() -> EntityDef {
    EntityDef::table("BLSession", "BLSession")
        .with_field(FieldDef::new("sessionId", ColumnType::int(10)).primary_key())
        .with_field(
            FieldDef::new("expSessionPk", ColumnType::int(10)).with_comment("smis session Pk "),
        )
        .with_field(
            FieldDef::new("beamLineSetupId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("BeamLineSetup", "beamLineSetupId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("proposalId", ColumnType::int(10))
                .not_null()
                .indexed()
                .with_default(DefaultValue::Int(0))
                .references(
                    ForeignKey::to("Proposal", "proposalId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("projectCode", ColumnType::varchar(45)))
        .with_field(FieldDef::new("startDate", ColumnType::DateTime).indexed())
        .with_field(FieldDef::new("endDate", ColumnType::DateTime).indexed())
        .with_field(FieldDef::new("beamLineName", ColumnType::varchar(45)).indexed())
        .with_field(FieldDef::new("scheduled", ColumnType::tinyint(1)))
        .with_field(FieldDef::new("nbShifts", ColumnType::int(10)).indexed())
        .with_field(FieldDef::new("comments", ColumnType::varchar(2000)))
        .with_field(FieldDef::new("beamLineOperator", ColumnType::varchar(255)))
        .with_field(
            FieldDef::new("visit_number", ColumnType::int(10)).with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new("bltimeStamp", ColumnType::Timestamp)
                .not_null()
                .with_default(DefaultValue::CurrentTimestamp),
        )
        .with_field(
            FieldDef::new("usedFlag", ColumnType::tinyint(1))
                .with_comment(
                    "indicates if session has Datacollections or XFE or EnergyScans attached",
                ),
        )
        .with_field(
            FieldDef::new("sessionTitle", ColumnType::varchar(255))
                .with_comment("fx accounts only"),
        )
        .with_field(FieldDef::new("structureDeterminations", ColumnType::float()))
        .with_field(FieldDef::new("dewarTransport", ColumnType::float()))
        .with_field(
            FieldDef::new("databackupFrance", ColumnType::float())
                .with_comment("data backup and express delivery France"),
        )
        .with_field(
            FieldDef::new("databackupEurope", ColumnType::float())
                .with_comment("data backup and express delivery Europe"),
        )
        .with_field(
            FieldDef::new("operatorSiteNumber", ColumnType::varchar(10))
                .indexed()
                .with_comment("matricule site"),
        )
        .with_field(
            FieldDef::new("lastUpdate", ColumnType::Timestamp)
                .not_null()
                .with_default(DefaultValue::ZeroTimestamp)
                .with_comment(
                    "last update timestamp: by default the end of the session, the last collect...",
                ),
        )
        .with_field(
            FieldDef::new("protectedData", ColumnType::varchar(1024))
                .with_comment("indicates if the data are protected or not"),
        )
        .with_field(FieldDef::new("externalId", ColumnType::binary(16)))
        .with_field(FieldDef::new("nbReimbDewars", ColumnType::int(11)))
}

pub(crate) fn bl_session_has_sc_position() -> EntityDef {
    EntityDef::table("BLSessionHasSCPosition", "BLSession_has_SCPosition")
        .with_field(FieldDef::new("blsessionhasscpositionid", ColumnType::int(10)).primary_key())
        .with_field(
            FieldDef::new("blsessionid", ColumnType::int(10))
                .not_null()
                .indexed()
                .references(
                    ForeignKey::to("BLSession", "sessionId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("scContainer", ColumnType::smallint(5))
                .with_comment("Position of container within sample changer"),
        )
        .with_field(
            FieldDef::new("containerPosition", ColumnType::smallint(5))
                .with_comment("Position of sample within container"),
        )
}

pub(crate) fn bl_sub_sample() -> EntityDef {
    EntityDef::table("BLSubSample", "BLSubSample")
        .with_field(
            FieldDef::new("blSubSampleId", ColumnType::int(10))
                .primary_key()
                .with_comment("Primary key (auto-incremented)"),
        )
        .with_field(
            FieldDef::new("blSampleId", ColumnType::int(10))
                .indexed()
                .with_comment("sample")
                .references(
                    ForeignKey::to("BLSample", "blSampleId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("diffractionPlanId", ColumnType::int(10))
                .indexed()
                .with_comment("eventually diffractionPlan")
                .references(
                    ForeignKey::to("DiffractionPlan", "diffractionPlanId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("positionId", ColumnType::int(10))
                .indexed()
                .with_comment("position of the subsample")
                .references(
                    ForeignKey::to("Position", "positionId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("position2Id", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("Position", "positionId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("blSubSampleUUID", ColumnType::varchar(45))
                .with_comment("uuid of the blsubsample"),
        )
        .with_field(
            FieldDef::new("imgFileName", ColumnType::varchar(255)).with_comment("image filename"),
        )
        .with_field(
            FieldDef::new("imgFilePath", ColumnType::varchar(1024)).with_comment("url image"),
        )
        .with_field(FieldDef::new("comments", ColumnType::varchar(1024)).with_comment("comments"))
        .with_field(
            FieldDef::new("recordTimeStamp", ColumnType::Timestamp)
                .not_null()
                .with_default(DefaultValue::CurrentTimestamp)
                .with_comment("Creation or last update date/time"),
        )
        .with_field(
            FieldDef::new("motorPositionId", ColumnType::int(10))
                .indexed()
                .with_comment("motor position")
                .references(
                    ForeignKey::to("MotorPosition", "motorPositionId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
}

pub(crate) fn buffer() -> EntityDef {
    EntityDef::table("Buffer", "Buffer")
        .with_field(FieldDef::new("bufferId", ColumnType::int(11)).primary_key())
        .with_field(
            FieldDef::new("proposalId", ColumnType::int(11))
                .not_null()
                .with_default(DefaultValue::Int(-1)),
        )
        .with_field(
            FieldDef::new("safetyLevelId", ColumnType::int(11))
                .indexed()
                .references(
                    ForeignKey::to("SafetyLevel", "safetyLevelId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("name", ColumnType::varchar(45)))
        .with_field(FieldDef::new("acronym", ColumnType::varchar(45)))
        .with_field(FieldDef::new("pH", ColumnType::varchar(45)))
        .with_field(FieldDef::new("composition", ColumnType::varchar(45)))
        .with_field(FieldDef::new("comments", ColumnType::varchar(512)))
        .with_field(FieldDef::new("BLSessionId", ColumnType::int(10)))
        .with_field(FieldDef::new("electronDensity", ColumnType::float_precision(7)))
}

pub(crate) fn buffer_has_additive() -> EntityDef {
    EntityDef::table("BufferHasAdditive", "BufferHasAdditive")
        .with_field(FieldDef::new("bufferHasAdditiveId", ColumnType::int(11)).primary_key())
        .with_field(
            FieldDef::new("bufferId", ColumnType::int(11))
                .not_null()
                .indexed()
                .references(
                    ForeignKey::to("Buffer", "bufferId").on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("additiveId", ColumnType::int(11))
                .not_null()
                .indexed()
                .references(
                    ForeignKey::to("Additive", "additiveId").on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("measurementUnitId", ColumnType::int(11))
                .indexed()
                .references(
                    ForeignKey::to("MeasurementUnit", "measurementUnitId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("quantity", ColumnType::varchar(45)))
}
