//! Table entities, E to H.

use ispyb_core::catalog::{
    ColumnType, DefaultValue, EntityDef, FieldDef, ForeignKey, ReferentialAction,
};

pub(crate) fn em_microscope() -> EntityDef {
    EntityDef::table("EMMicroscope", "EMMicroscope")
        .with_field(FieldDef::new("emMicroscopeId", ColumnType::int(10)).primary_key())
        .with_field(FieldDef::new("instrumentName", ColumnType::varchar(100)).not_null())
        .with_field(FieldDef::new("voltage", ColumnType::float()))
        .with_field(FieldDef::new("CS", ColumnType::float()).with_comment("Unit: mm"))
        .with_field(FieldDef::new("detectorPixelSize", ColumnType::float()))
        .with_field(FieldDef::new("C2aperture", ColumnType::float()))
        .with_field(FieldDef::new("ObjAperture", ColumnType::float()))
        .with_field(FieldDef::new("C2lens", ColumnType::float()))
}

pub(crate) fn energy_scan() -> EntityDef {
    EntityDef::table("EnergyScan", "EnergyScan")
        .with_field(FieldDef::new("energyScanId", ColumnType::int(10)).primary_key())
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
                    ForeignKey::to("BLSample", "blSampleId").on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("fluorescenceDetector", ColumnType::varchar(255)))
        .with_field(FieldDef::new("scanFileFullPath", ColumnType::varchar(255)))
        .with_field(FieldDef::new("choochFileFullPath", ColumnType::varchar(255)))
        .with_field(FieldDef::new("jpegChoochFileFullPath", ColumnType::varchar(255)))
        .with_field(FieldDef::new("element", ColumnType::varchar(45)))
        .with_field(FieldDef::new("startEnergy", ColumnType::float()))
        .with_field(FieldDef::new("endEnergy", ColumnType::float()))
        .with_field(FieldDef::new("transmissionFactor", ColumnType::float()))
        .with_field(FieldDef::new("exposureTime", ColumnType::float()))
        .with_field(FieldDef::new("axisPosition", ColumnType::float()))
        .with_field(FieldDef::new("synchrotronCurrent", ColumnType::float()))
        .with_field(FieldDef::new("temperature", ColumnType::float()))
        .with_field(FieldDef::new("peakEnergy", ColumnType::float()))
        .with_field(FieldDef::new("peakFPrime", ColumnType::float()))
        .with_field(FieldDef::new("peakFDoublePrime", ColumnType::float()))
        .with_field(FieldDef::new("inflectionEnergy", ColumnType::float()))
        .with_field(FieldDef::new("inflectionFPrime", ColumnType::float()))
        .with_field(FieldDef::new("inflectionFDoublePrime", ColumnType::float()))
        .with_field(FieldDef::new("xrayDose", ColumnType::float()))
        .with_field(FieldDef::new("startTime", ColumnType::DateTime))
        .with_field(FieldDef::new("endTime", ColumnType::DateTime))
        .with_field(FieldDef::new("edgeEnergy", ColumnType::varchar(255)))
        .with_field(FieldDef::new("filename", ColumnType::varchar(255)))
        .with_field(FieldDef::new("beamSizeVertical", ColumnType::float()))
        .with_field(FieldDef::new("beamSizeHorizontal", ColumnType::float()))
        .with_field(FieldDef::new("crystalClass", ColumnType::varchar(20)))
        .with_field(FieldDef::new("comments", ColumnType::varchar(1024)))
        .with_field(
            FieldDef::new("flux", ColumnType::decimal())
                .with_comment("flux measured before the energyScan"),
        )
        .with_field(
            FieldDef::new("flux_end", ColumnType::decimal())
                .with_comment("flux measured after the energyScan"),
        )
        .with_field(FieldDef::new("workingDirectory", ColumnType::varchar(45)))
        .with_field(
            FieldDef::new("blSubSampleId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("BLSubSample", "blSubSampleId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("remoteEnergy", ColumnType::float()))
        .with_field(FieldDef::new("remoteFPrime", ColumnType::float()))
        .with_field(FieldDef::new("remoteFDoublePrime", ColumnType::float()))
}

pub(crate) fn event() -> EntityDef {
    EntityDef::table("Event", "Event")
        .with_comment(
            "Describes an event that occurred during a data collection and should be taken into account for data analysis. Can optionally be repeated at a specified frequency.",
        )
        .with_field(FieldDef::new("eventId", ColumnType::int(10)).primary_key())
        .with_field(
            FieldDef::new("eventChainId", ColumnType::int(10))
                .not_null()
                .indexed()
                .references(
                    ForeignKey::to("EventChain", "eventChainId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("eventTypeId", ColumnType::int(10))
                .not_null()
                .indexed()
                .references(ForeignKey::to("EventType", "eventTypeId")),
        )
        .with_field(FieldDef::new("name", ColumnType::varchar(255)))
        .with_field(
            FieldDef::new("offset", ColumnType::float())
                .not_null()
                .with_comment(
                    "Start of the event relative to data collection start time in seconds.",
                ),
        )
        .with_field(
            FieldDef::new("duration", ColumnType::float())
                .with_comment("Duration of the event if applicable."),
        )
        .with_field(
            FieldDef::new("period", ColumnType::float())
                .with_comment("Repetition period if applicable in seconds."),
        )
        .with_field(
            FieldDef::new("repetition", ColumnType::float())
                .with_comment("Number of repetitions if applicable."),
        )
}

pub(crate) fn event_chain() -> EntityDef {
    EntityDef::table("EventChain", "EventChain")
        .with_comment("Groups events together in a data collection.")
        .with_field(FieldDef::new("eventChainId", ColumnType::int(10)).primary_key())
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
        .with_field(FieldDef::new("name", ColumnType::varchar(255)))
}

pub(crate) fn event_type() -> EntityDef {
    EntityDef::table("EventType", "EventType")
        .with_comment("Defines the list of event types which can occur during a data collection.")
        .with_field(FieldDef::new("eventTypeId", ColumnType::int(10)).primary_key())
        .with_field(FieldDef::new("name", ColumnType::varchar(30)).not_null().unique())
}

pub(crate) fn experiment() -> EntityDef {
    EntityDef::table("Experiment", "Experiment")
        .with_field(FieldDef::new("experimentId", ColumnType::int(11)).primary_key())
        .with_field(
            FieldDef::new("sessionId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("BLSession", "sessionId").on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("proposalId", ColumnType::int(11)).not_null())
        .with_field(FieldDef::new("name", ColumnType::varchar(255)))
        .with_field(FieldDef::new("creationDate", ColumnType::DateTime))
        .with_field(FieldDef::new("experimentType", ColumnType::varchar(128)))
        .with_field(FieldDef::new("sourceFilePath", ColumnType::varchar(256)))
        .with_field(
            FieldDef::new("dataAcquisitionFilePath", ColumnType::varchar(256))
                .with_comment(
                    "The file path pointing to the data acquisition. Eventually it may be a compressed file with all the files or just the folder",
                ),
        )
        .with_field(FieldDef::new("status", ColumnType::varchar(45)))
        .with_field(FieldDef::new("comments", ColumnType::varchar(512)))
}

pub(crate) fn experiment_kind_details() -> EntityDef {
    EntityDef::table("ExperimentKindDetails", "ExperimentKindDetails")
        .with_field(FieldDef::new("experimentKindId", ColumnType::int(10)).primary_key())
        .with_field(
            FieldDef::new("diffractionPlanId", ColumnType::int(10))
                .not_null()
                .indexed()
                .references(
                    ForeignKey::to("DiffractionPlan", "diffractionPlanId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("exposureIndex", ColumnType::int(10)))
        .with_field(FieldDef::new("dataCollectionType", ColumnType::varchar(45)))
        .with_field(FieldDef::new("dataCollectionKind", ColumnType::varchar(45)))
        .with_field(FieldDef::new("wedgeValue", ColumnType::float()))
}

pub(crate) fn fit_structure_to_experimental_data() -> EntityDef {
    EntityDef::table("FitStructureToExperimentalData", "FitStructureToExperimentalData")
        .with_field(
            FieldDef::new("fitStructureToExperimentalDataId", ColumnType::int(11)).primary_key(),
        )
        .with_field(
            FieldDef::new("structureId", ColumnType::int(11))
                .indexed()
                .references(
                    ForeignKey::to("Structure", "structureId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("subtractionId", ColumnType::int(11))
                .indexed()
                .references(
                    ForeignKey::to("Subtraction", "subtractionId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("workflowId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("Workflow", "workflowId").on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("fitFilePath", ColumnType::varchar(255)))
        .with_field(FieldDef::new("logFilePath", ColumnType::varchar(255)))
        .with_field(FieldDef::new("outputFilePath", ColumnType::varchar(255)))
        .with_field(FieldDef::new("creationDate", ColumnType::DateTime))
        .with_field(FieldDef::new("comments", ColumnType::varchar(2048)))
}

pub(crate) fn frame() -> EntityDef {
    EntityDef::table("Frame", "Frame")
        .with_field(FieldDef::new("frameId", ColumnType::int(11)).primary_key())
        .with_field(FieldDef::new("filePath", ColumnType::varchar(255)).indexed())
        .with_field(FieldDef::new("comments", ColumnType::varchar(45)))
        .with_field(
            FieldDef::new("creationDate", ColumnType::Timestamp)
                .not_null()
                .with_default(DefaultValue::CurrentTimestamp),
        )
        .with_field(FieldDef::new("frameSetId", ColumnType::int(10)))
}

pub(crate) fn frame_list() -> EntityDef {
    EntityDef::table("FrameList", "FrameList")
        .with_field(FieldDef::new("frameListId", ColumnType::int(11)).primary_key())
        .with_field(FieldDef::new("comments", ColumnType::int(11)))
}

pub(crate) fn frame_set() -> EntityDef {
    EntityDef::table("FrameSet", "FrameSet")
        .with_field(FieldDef::new("frameSetId", ColumnType::int(11)).primary_key())
        .with_field(
            FieldDef::new("runId", ColumnType::int(11))
                .not_null()
                .indexed()
                .references(ForeignKey::to("Run", "runId").on_delete(ReferentialAction::Cascade)),
        )
        .with_field(
            FieldDef::new("frameListId", ColumnType::int(11))
                .indexed()
                .references(
                    ForeignKey::to("FrameList", "frameListId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("detectorId", ColumnType::int(11)))
        .with_field(FieldDef::new("detectorDistance", ColumnType::varchar(45)))
        .with_field(FieldDef::new("filePath", ColumnType::varchar(255)))
        .with_field(FieldDef::new("internalPath", ColumnType::varchar(255)))
}

pub(crate) fn frame_to_list() -> EntityDef {
    EntityDef::table("FrameToList", "FrameToList")
        .with_field(FieldDef::new("frameToListId", ColumnType::int(11)).primary_key())
        .with_field(
            FieldDef::new("frameListId", ColumnType::int(11))
                .not_null()
                .indexed()
                .references(
                    ForeignKey::to("FrameList", "frameListId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("frameId", ColumnType::int(11))
                .not_null()
                .indexed()
                .references(
                    ForeignKey::to("Frame", "frameId").on_delete(ReferentialAction::Cascade),
                ),
        )
}

pub(crate) fn geometry_classname() -> EntityDef {
    EntityDef::table("GeometryClassname", "GeometryClassname")
        .with_field(FieldDef::new("geometryClassnameId", ColumnType::int(10)).primary_key())
        .with_field(FieldDef::new("geometryClassname", ColumnType::varchar(45)))
        .with_field(FieldDef::new("geometryOrder", ColumnType::int(11)).not_null())
}

pub(crate) fn grid_info() -> EntityDef {
    EntityDef::table("GridInfo", "GridInfo")
        .with_field(
            FieldDef::new("gridInfoId", ColumnType::int(10))
                .primary_key()
                .with_comment("Primary key (auto-incremented)"),
        )
        .with_field(
            FieldDef::new("workflowMeshId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("WorkflowMesh", "workflowMeshId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("xOffset", ColumnType::decimal()))
        .with_field(FieldDef::new("yOffset", ColumnType::decimal()))
        .with_field(FieldDef::new("dx_mm", ColumnType::decimal()))
        .with_field(FieldDef::new("dy_mm", ColumnType::decimal()))
        .with_field(FieldDef::new("steps_x", ColumnType::decimal()))
        .with_field(FieldDef::new("steps_y", ColumnType::decimal()))
        .with_field(FieldDef::new("meshAngle", ColumnType::decimal()))
        .with_field(
            FieldDef::new("recordTimeStamp", ColumnType::Timestamp)
                .not_null()
                .with_default(DefaultValue::CurrentTimestamp)
                .with_comment("Creation or last update date/time"),
        )
        .with_field(
            FieldDef::new("orientation", ColumnType::enumeration(&["vertical", "horizontal"]))
                .with_default(DefaultValue::String("horizontal".into())),
        )
        .with_field(
            FieldDef::new("dataCollectionGroupId", ColumnType::int(11))
                .indexed()
                .references(
                    ForeignKey::to("DataCollectionGroup", "dataCollectionGroupId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("pixelspermicronX", ColumnType::float()))
        .with_field(FieldDef::new("pixelspermicronY", ColumnType::float()))
        .with_field(FieldDef::new("snapshot_offsetxpixel", ColumnType::float()))
        .with_field(FieldDef::new("snapshot_offsetypixel", ColumnType::float()))
}
