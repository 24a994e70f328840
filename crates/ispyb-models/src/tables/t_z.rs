//! Table entities, T to Z.

use ispyb_core::catalog::{
    ColumnType, DefaultValue, EntityDef, FieldDef, ForeignKey, ReferentialAction,
};

pub(crate) fn untrusted_region() -> EntityDef {
    EntityDef::table("UntrustedRegion", "UntrustedRegion")
        .with_comment("Untrsuted region linked to a detector")
        .with_field(
            FieldDef::new("untrustedRegionId", ColumnType::int(11))
                .primary_key()
                .with_comment("Primary key (auto-incremented)"),
        )
        .with_field(
            FieldDef::new("detectorId", ColumnType::int(11))
                .not_null()
                .indexed()
                .references(
                    ForeignKey::to("Detector", "detectorId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("x1", ColumnType::int(11)).not_null())
        .with_field(FieldDef::new("x2", ColumnType::int(11)).not_null())
        .with_field(FieldDef::new("y1", ColumnType::int(11)).not_null())
        .with_field(FieldDef::new("y2", ColumnType::int(11)).not_null())
}

pub(crate) fn user_group() -> EntityDef {
    EntityDef::table("UserGroup", "UserGroup")
        .with_field(FieldDef::new("userGroupId", ColumnType::int(10)).primary_key())
        .with_field(FieldDef::new("name", ColumnType::varchar(31)).not_null().unique())
}

pub(crate) fn workflow() -> EntityDef {
    EntityDef::table("Workflow", "Workflow")
        .with_field(
            FieldDef::new("workflowId", ColumnType::int(10))
                .primary_key()
                .with_comment("Primary key (auto-incremented)"),
        )
        .with_field(FieldDef::new("workflowTitle", ColumnType::varchar(255)))
        .with_field(
            FieldDef::new(
                "workflowType",
                ColumnType::enumeration(&[
                    "Characterisation",
                    "Undefined",
                    "BioSAXS Post Processing",
                    "EnhancedCharacterisation",
                    "LineScan",
                    "MeshScan",
                    "Dehydration",
                    "KappaReorientation",
                    "BurnStrategy",
                    "XrayCentering",
                    "DiffractionTomography",
                    "TroubleShooting",
                    "VisualReorientation",
                    "HelicalCharacterisation",
                    "GroupedProcessing",
                    "MXPressE",
                    "MXPressO",
                    "MXPressL",
                    "MXScore",
                    "MXPressI",
                    "MXPressM",
                    "MXPressA",
                    "CollectAndSpectra",
                    "LowDoseDC",
                    "EnergyInterleavedMAD",
                    "MXPressF",
                    "MXPressH",
                    "MXPressP",
                    "MXPressP_SAD",
                    "MXPressR",
                    "MXPressR_180",
                    "MXPressR_dehydration",
                    "MeshAndCollect",
                    "MeshAndCollectFromFile",
                ]),
            ),
        )
        .with_field(FieldDef::new("workflowTypeId", ColumnType::int(11)))
        .with_field(FieldDef::new("comments", ColumnType::varchar(1024)))
        .with_field(FieldDef::new("status", ColumnType::varchar(255)))
        .with_field(FieldDef::new("resultFilePath", ColumnType::varchar(255)))
        .with_field(FieldDef::new("logFilePath", ColumnType::varchar(255)))
        .with_field(
            FieldDef::new("recordTimeStamp", ColumnType::DateTime)
                .with_comment("Creation or last update date/time"),
        )
}

pub(crate) fn workflow_dehydration() -> EntityDef {
    EntityDef::table("WorkflowDehydration", "WorkflowDehydration")
        .with_field(
            FieldDef::new("workflowDehydrationId", ColumnType::int(10))
                .primary_key()
                .with_comment("Primary key (auto-incremented)"),
        )
        .with_field(
            FieldDef::new("workflowId", ColumnType::int(10))
                .not_null()
                .indexed()
                .with_comment("Related workflow")
                .references(
                    ForeignKey::to("Workflow", "workflowId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("dataFilePath", ColumnType::varchar(255)))
        .with_field(
            FieldDef::new("recordTimeStamp", ColumnType::Timestamp)
                .not_null()
                .with_default(DefaultValue::CurrentTimestamp)
                .with_comment("Creation or last update date/time"),
        )
}

pub(crate) fn workflow_mesh() -> EntityDef {
    EntityDef::table("WorkflowMesh", "WorkflowMesh")
        .with_field(
            FieldDef::new("workflowMeshId", ColumnType::int(10))
                .primary_key()
                .with_comment("Primary key (auto-incremented)"),
        )
        .with_field(
            FieldDef::new("workflowId", ColumnType::int(10))
                .not_null()
                .indexed()
                .with_comment("Related workflow")
                .references(
                    ForeignKey::to("Workflow", "workflowId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("bestPositionId", ColumnType::int(10)).indexed())
        .with_field(
            FieldDef::new("bestImageId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("Image", "imageId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("value1", ColumnType::decimal()))
        .with_field(FieldDef::new("value2", ColumnType::decimal()))
        .with_field(FieldDef::new("value3", ColumnType::decimal()).with_comment("N value"))
        .with_field(FieldDef::new("value4", ColumnType::decimal()))
        .with_field(FieldDef::new("cartographyPath", ColumnType::varchar(255)))
        .with_field(
            FieldDef::new("recordTimeStamp", ColumnType::Timestamp)
                .not_null()
                .with_default(DefaultValue::CurrentTimestamp)
                .with_comment("Creation or last update date/time"),
        )
}

pub(crate) fn workflow_step() -> EntityDef {
    EntityDef::table("WorkflowStep", "WorkflowStep")
        .with_field(FieldDef::new("workflowStepId", ColumnType::int(11)).primary_key())
        .with_field(
            FieldDef::new("workflowId", ColumnType::int(10))
                .not_null()
                .indexed()
                .references(
                    ForeignKey::to("Workflow", "workflowId").on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("workflowStepType", ColumnType::varchar(45)))
        .with_field(FieldDef::new("status", ColumnType::varchar(45)))
        .with_field(FieldDef::new("folderPath", ColumnType::varchar(1024)))
        .with_field(FieldDef::new("imageResultFilePath", ColumnType::varchar(1024)))
        .with_field(FieldDef::new("htmlResultFilePath", ColumnType::varchar(1024)))
        .with_field(FieldDef::new("resultFilePath", ColumnType::varchar(1024)))
        .with_field(FieldDef::new("comments", ColumnType::varchar(2048)))
        .with_field(FieldDef::new("crystalSizeX", ColumnType::varchar(45)))
        .with_field(FieldDef::new("crystalSizeY", ColumnType::varchar(45)))
        .with_field(FieldDef::new("crystalSizeZ", ColumnType::varchar(45)))
        .with_field(FieldDef::new("maxDozorScore", ColumnType::varchar(45)))
        .with_field(FieldDef::new("recordTimeStamp", ColumnType::Timestamp))
}

pub(crate) fn workflow_type() -> EntityDef {
    EntityDef::table("WorkflowType", "WorkflowType")
        .with_field(FieldDef::new("workflowTypeId", ColumnType::int(11)).primary_key())
        .with_field(FieldDef::new("workflowTypeName", ColumnType::varchar(45)))
        .with_field(FieldDef::new("comments", ColumnType::varchar(2048)))
        .with_field(FieldDef::new("recordTimeStamp", ColumnType::Timestamp))
}

pub(crate) fn xfe_fluorescence_spectrum() -> EntityDef {
    EntityDef::table("XFEFluorescenceSpectrum", "XFEFluorescenceSpectrum")
        .with_field(FieldDef::new("xfeFluorescenceSpectrumId", ColumnType::int(10)).primary_key())
        .with_field(
            FieldDef::new("sessionId", ColumnType::int(10))
                .not_null()
                .indexed()
                .references(
                    ForeignKey::to("BLSession", "sessionId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("blSampleId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("BLSample", "blSampleId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("fittedDataFileFullPath", ColumnType::varchar(255)))
        .with_field(FieldDef::new("scanFileFullPath", ColumnType::varchar(255)))
        .with_field(FieldDef::new("jpegScanFileFullPath", ColumnType::varchar(255)))
        .with_field(FieldDef::new("startTime", ColumnType::DateTime))
        .with_field(FieldDef::new("endTime", ColumnType::DateTime))
        .with_field(FieldDef::new("filename", ColumnType::varchar(255)))
        .with_field(FieldDef::new("energy", ColumnType::float()))
        .with_field(FieldDef::new("exposureTime", ColumnType::float()))
        .with_field(FieldDef::new("axisPosition", ColumnType::float()))
        .with_field(FieldDef::new("beamTransmission", ColumnType::float()))
        .with_field(FieldDef::new("annotatedPymcaXfeSpectrum", ColumnType::varchar(255)))
        .with_field(FieldDef::new("beamSizeVertical", ColumnType::float()))
        .with_field(FieldDef::new("beamSizeHorizontal", ColumnType::float()))
        .with_field(FieldDef::new("crystalClass", ColumnType::varchar(20)))
        .with_field(FieldDef::new("comments", ColumnType::varchar(1024)))
        .with_field(
            FieldDef::new("flux", ColumnType::decimal())
                .with_comment("flux measured before the xrfSpectra"),
        )
        .with_field(
            FieldDef::new("flux_end", ColumnType::decimal())
                .with_comment("flux measured after the xrfSpectra"),
        )
        .with_field(FieldDef::new("workingDirectory", ColumnType::varchar(512)))
        .with_field(
            FieldDef::new("blSubSampleId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("BLSubSample", "blSubSampleId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
}

pub(crate) fn xrf_fluorescence_mapping() -> EntityDef {
    EntityDef::table("XRFFluorescenceMapping", "XRFFluorescenceMapping")
        .with_field(FieldDef::new("xrfFluorescenceMappingId", ColumnType::int(10)).primary_key())
        .with_field(
            FieldDef::new("xrfFluorescenceMappingROIId", ColumnType::int(10))
                .not_null()
                .indexed()
                .references(
                    ForeignKey::to("XRFFluorescenceMappingROI", "xrfFluorescenceMappingROIId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("dataCollectionId", ColumnType::int(10))
                .not_null()
                .indexed()
                .references(
                    ForeignKey::to("DataCollection", "dataCollectionId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("imageNumber", ColumnType::int(10)).not_null())
        .with_field(FieldDef::new("counts", ColumnType::int(10)).not_null())
}

pub(crate) fn xrf_fluorescence_mapping_roi() -> EntityDef {
    EntityDef::table("XRFFluorescenceMappingROI", "XRFFluorescenceMappingROI")
        .with_field(FieldDef::new("xrfFluorescenceMappingROIId", ColumnType::int(10)).primary_key())
        .with_field(FieldDef::new("startEnergy", ColumnType::float()).not_null())
        .with_field(FieldDef::new("endEnergy", ColumnType::float()).not_null())
        .with_field(FieldDef::new("element", ColumnType::varchar(2)))
        .with_field(
            FieldDef::new("edge", ColumnType::varchar(2))
                .with_comment("In future may be changed to enum(K, L)"),
        )
        .with_field(FieldDef::new("r", ColumnType::tinyint(3)).with_comment("R colour component"))
        .with_field(FieldDef::new("g", ColumnType::tinyint(3)).with_comment("G colour component"))
        .with_field(FieldDef::new("b", ColumnType::tinyint(3)).with_comment("B colour component"))
}
