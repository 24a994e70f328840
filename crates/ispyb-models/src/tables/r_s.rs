//! Table entities, R to S.

use ispyb_core::catalog::{
    ColumnType, DefaultValue, EntityDef, FieldDef, ForeignKey, ReferentialAction,
};

pub(crate) fn rigid_body_modeling() -> EntityDef {
    EntityDef::table("RigidBodyModeling", "RigidBodyModeling")
        .with_field(FieldDef::new("rigidBodyModelingId", ColumnType::int(11)).primary_key())
        .with_field(FieldDef::new("subtractionId", ColumnType::int(11)).not_null().indexed())
        .with_field(FieldDef::new("fitFilePath", ColumnType::varchar(255)))
        .with_field(FieldDef::new("rigidBodyModelFilePath", ColumnType::varchar(255)))
        .with_field(FieldDef::new("logFilePath", ColumnType::varchar(255)))
        .with_field(FieldDef::new("curveConfigFilePath", ColumnType::varchar(255)))
        .with_field(FieldDef::new("subUnitConfigFilePath", ColumnType::varchar(255)))
        .with_field(FieldDef::new("crossCorrConfigFilePath", ColumnType::varchar(255)))
        .with_field(FieldDef::new("contactDescriptionFilePath", ColumnType::varchar(255)))
        .with_field(FieldDef::new("symmetry", ColumnType::varchar(255)))
        .with_field(FieldDef::new("creationDate", ColumnType::varchar(45)))
}

pub(crate) fn robot_action() -> EntityDef {
    EntityDef::table("RobotAction", "RobotAction")
        .with_comment("Robot actions as reported by MXCube")
        .with_field(FieldDef::new("robotActionId", ColumnType::int(10)).primary_key())
        .with_field(
            FieldDef::new("blsessionId", ColumnType::int(10))
                .not_null()
                .indexed()
                .references(
                    ForeignKey::to("BLSession", "sessionId").on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("blsampleId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("BLSample", "blSampleId").on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new(
                "actionType",
                ColumnType::enumeration(&["LOAD", "UNLOAD", "DISPOSE", "STORE", "WASH", "ANNEAL"]),
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
        .with_field(
            FieldDef::new(
                "status",
                ColumnType::enumeration(&[
                    "SUCCESS",
                    "ERROR",
                    "CRITICAL",
                    "WARNING",
                    "COMMANDNOTSENT",
                ]),
            ),
        )
        .with_field(FieldDef::new("message", ColumnType::varchar(255)))
        .with_field(FieldDef::new("containerLocation", ColumnType::smallint(6)))
        .with_field(FieldDef::new("dewarLocation", ColumnType::smallint(6)))
        .with_field(FieldDef::new("sampleBarcode", ColumnType::varchar(45)))
        .with_field(FieldDef::new("xtalSnapshotBefore", ColumnType::varchar(255)))
        .with_field(FieldDef::new("xtalSnapshotAfter", ColumnType::varchar(255)))
}

pub(crate) fn run() -> EntityDef {
    EntityDef::table("Run", "Run")
        .with_field(FieldDef::new("runId", ColumnType::int(11)).primary_key())
        .with_field(FieldDef::new("timePerFrame", ColumnType::varchar(45)))
        .with_field(FieldDef::new("timeStart", ColumnType::varchar(45)))
        .with_field(FieldDef::new("timeEnd", ColumnType::varchar(45)))
        .with_field(FieldDef::new("storageTemperature", ColumnType::varchar(45)))
        .with_field(FieldDef::new("exposureTemperature", ColumnType::varchar(45)))
        .with_field(FieldDef::new("spectrophotometer", ColumnType::varchar(45)))
        .with_field(FieldDef::new("energy", ColumnType::varchar(45)))
        .with_field(FieldDef::new("creationDate", ColumnType::DateTime))
        .with_field(FieldDef::new("frameAverage", ColumnType::varchar(45)))
        .with_field(FieldDef::new("frameCount", ColumnType::varchar(45)))
        .with_field(FieldDef::new("transmission", ColumnType::varchar(45)))
        .with_field(FieldDef::new("beamCenterX", ColumnType::varchar(45)))
        .with_field(FieldDef::new("beamCenterY", ColumnType::varchar(45)))
        .with_field(FieldDef::new("pixelSizeX", ColumnType::varchar(45)))
        .with_field(FieldDef::new("pixelSizeY", ColumnType::varchar(45)))
        .with_field(FieldDef::new("radiationRelative", ColumnType::varchar(45)))
        .with_field(FieldDef::new("radiationAbsolute", ColumnType::varchar(45)))
        .with_field(FieldDef::new("normalization", ColumnType::varchar(45)))
}

pub(crate) fn safety_level() -> EntityDef {
    EntityDef::table("SafetyLevel", "SafetyLevel")
        .with_field(FieldDef::new("safetyLevelId", ColumnType::int(11)).primary_key())
        .with_field(FieldDef::new("code", ColumnType::varchar(45)))
        .with_field(FieldDef::new("description", ColumnType::varchar(45)))
}

pub(crate) fn sample_composition() -> EntityDef {
    EntityDef::table("SampleComposition", "SampleComposition")
        .with_comment("Links a sample to its components with a specified abundance or ratio.")
        .with_field(FieldDef::new("sampleCompositionId", ColumnType::int(10)).primary_key())
        .with_field(
            FieldDef::new("componentId", ColumnType::int(10))
                .not_null()
                .indexed()
                .references(
                    ForeignKey::to("Protein", "proteinId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("blSampleId", ColumnType::int(10))
                .not_null()
                .indexed()
                .references(
                    ForeignKey::to("BLSample", "blSampleId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("concentrationTypeId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("ConcentrationType", "concentrationTypeId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("abundance", ColumnType::float())
                .with_comment(
                    "Abundance or concentration in the unit defined by concentrationTypeId.",
                ),
        )
        .with_field(FieldDef::new("ratio", ColumnType::float()))
        .with_field(FieldDef::new("pH", ColumnType::float()))
}

pub(crate) fn sample_plate() -> EntityDef {
    EntityDef::table("SamplePlate", "SamplePlate")
        .with_field(FieldDef::new("samplePlateId", ColumnType::int(11)).primary_key())
        .with_field(
            FieldDef::new("experimentId", ColumnType::int(11))
                .not_null()
                .indexed()
                .references(
                    ForeignKey::to("Experiment", "experimentId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("plateGroupId", ColumnType::int(11))
                .indexed()
                .references(
                    ForeignKey::to("PlateGroup", "plateGroupId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("plateTypeId", ColumnType::int(11))
                .indexed()
                .references(
                    ForeignKey::to("PlateType", "PlateTypeId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("instructionSetId", ColumnType::int(11))
                .indexed()
                .references(
                    ForeignKey::to("InstructionSet", "instructionSetId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("boxId", ColumnType::int(10)))
        .with_field(FieldDef::new("name", ColumnType::varchar(45)))
        .with_field(FieldDef::new("slotPositionRow", ColumnType::varchar(45)))
        .with_field(FieldDef::new("slotPositionColumn", ColumnType::varchar(45)))
        .with_field(FieldDef::new("storageTemperature", ColumnType::varchar(45)))
}

pub(crate) fn sample_plate_position() -> EntityDef {
    EntityDef::table("SamplePlatePosition", "SamplePlatePosition")
        .with_field(FieldDef::new("samplePlatePositionId", ColumnType::int(11)).primary_key())
        .with_field(
            FieldDef::new("samplePlateId", ColumnType::int(11))
                .not_null()
                .indexed()
                .references(
                    ForeignKey::to("SamplePlate", "samplePlateId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("rowNumber", ColumnType::int(11)))
        .with_field(FieldDef::new("columnNumber", ColumnType::int(11)))
        .with_field(FieldDef::new("volume", ColumnType::varchar(45)))
}

pub(crate) fn saxs_data_collection() -> EntityDef {
    EntityDef::table("SaxsDataCollection", "SaxsDataCollection")
        .with_field(FieldDef::new("dataCollectionId", ColumnType::int(11)).primary_key())
        .with_field(
            FieldDef::new("experimentId", ColumnType::int(11))
                .not_null()
                .indexed()
                .references(
                    ForeignKey::to("Experiment", "experimentId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("comments", ColumnType::varchar(5120)))
}

pub(crate) fn scan_parameters_model() -> EntityDef {
    EntityDef::table("ScanParametersModel", "ScanParametersModel")
        .with_field(FieldDef::new("scanParametersModelId", ColumnType::int(10)).primary_key())
        .with_field(
            FieldDef::new("scanParametersServiceId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("ScanParametersService", "scanParametersServiceId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("dataCollectionPlanId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("DiffractionPlan", "diffractionPlanId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("modelNumber", ColumnType::tinyint(3)))
        .with_field(FieldDef::new("start", ColumnType::decimal()))
        .with_field(FieldDef::new("stop", ColumnType::decimal()))
        .with_field(FieldDef::new("step", ColumnType::decimal()))
        .with_field(FieldDef::new("array", ColumnType::text()))
}

pub(crate) fn scan_parameters_service() -> EntityDef {
    EntityDef::table("ScanParametersService", "ScanParametersService")
        .with_field(FieldDef::new("scanParametersServiceId", ColumnType::int(10)).primary_key())
        .with_field(FieldDef::new("name", ColumnType::varchar(45)))
        .with_field(FieldDef::new("description", ColumnType::varchar(45)))
}

pub(crate) fn schedule() -> EntityDef {
    EntityDef::table("Schedule", "Schedule")
        .with_field(FieldDef::new("scheduleId", ColumnType::int(10)).primary_key())
        .with_field(FieldDef::new("name", ColumnType::varchar(45)))
}

pub(crate) fn schedule_component() -> EntityDef {
    EntityDef::table("ScheduleComponent", "ScheduleComponent")
        .with_field(FieldDef::new("scheduleComponentId", ColumnType::int(10)).primary_key())
        .with_field(
            FieldDef::new("scheduleId", ColumnType::int(10))
                .not_null()
                .indexed()
                .references(
                    ForeignKey::to("Schedule", "scheduleId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("inspectionTypeId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("InspectionType", "inspectionTypeId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("offset_hours", ColumnType::int(11)))
}

pub(crate) fn schema_status() -> EntityDef {
    EntityDef::table("SchemaStatus", "SchemaStatus")
        .with_field(FieldDef::new("schemaStatusId", ColumnType::int(11)).primary_key())
        .with_field(FieldDef::new("scriptName", ColumnType::varchar(100)).not_null().unique())
        .with_field(FieldDef::new("schemaStatus", ColumnType::varchar(10)))
        .with_field(
            FieldDef::new("recordTimeStamp", ColumnType::Timestamp)
                .not_null()
                .with_default(DefaultValue::CurrentTimestamp),
        )
}

pub(crate) fn screen() -> EntityDef {
    EntityDef::table("Screen", "Screen")
        .with_field(FieldDef::new("screenId", ColumnType::int(10)).primary_key())
        .with_field(FieldDef::new("name", ColumnType::varchar(45)))
        .with_field(
            FieldDef::new("proposalId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("Proposal", "proposalId").on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("global", ColumnType::tinyint(1)))
}

pub(crate) fn screen_component() -> EntityDef {
    EntityDef::table("ScreenComponent", "ScreenComponent")
        .with_field(FieldDef::new("screenComponentId", ColumnType::int(10)).primary_key())
        .with_field(
            FieldDef::new("screenComponentGroupId", ColumnType::int(10))
                .not_null()
                .indexed()
                .references(
                    ForeignKey::to("ScreenComponentGroup", "screenComponentGroupId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("componentId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("Protein", "proteinId").on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("concentration", ColumnType::float()))
        .with_field(FieldDef::new("pH", ColumnType::float()))
}

pub(crate) fn screen_component_group() -> EntityDef {
    EntityDef::table("ScreenComponentGroup", "ScreenComponentGroup")
        .with_field(FieldDef::new("screenComponentGroupId", ColumnType::int(10)).primary_key())
        .with_field(
            FieldDef::new("screenId", ColumnType::int(10))
                .not_null()
                .indexed()
                .references(
                    ForeignKey::to("Screen", "screenId").on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("position", ColumnType::smallint(6)))
}

pub(crate) fn screening() -> EntityDef {
    EntityDef::table("Screening", "Screening")
        .with_field(FieldDef::new("screeningId", ColumnType::int(10)).primary_key())
        .with_field(
            FieldDef::new("diffractionPlanId", ColumnType::int(10))
                .indexed()
                .with_comment("references DiffractionPlan"),
        )
        .with_field(
            FieldDef::new("dataCollectionGroupId", ColumnType::int(11))
                .indexed()
                .references(
                    ForeignKey::to("DataCollectionGroup", "dataCollectionGroupId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("dataCollectionId", ColumnType::int(10)))
        .with_field(
            FieldDef::new("bltimeStamp", ColumnType::Timestamp)
                .not_null()
                .with_default(DefaultValue::CurrentTimestamp),
        )
        .with_field(FieldDef::new("programVersion", ColumnType::varchar(45)))
        .with_field(FieldDef::new("comments", ColumnType::varchar(255)))
        .with_field(FieldDef::new("shortComments", ColumnType::varchar(20)))
        .with_field(FieldDef::new("xmlSampleInformation", ColumnType::long_blob()))
}

pub(crate) fn screening_input() -> EntityDef {
    EntityDef::table("ScreeningInput", "ScreeningInput")
        .with_field(FieldDef::new("screeningInputId", ColumnType::int(10)).primary_key())
        .with_field(
            FieldDef::new("screeningId", ColumnType::int(10))
                .not_null()
                .indexed()
                .with_default(DefaultValue::Int(0))
                .references(
                    ForeignKey::to("Screening", "screeningId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("diffractionPlanId", ColumnType::int(11))
                .with_comment("references DiffractionPlan table"),
        )
        .with_field(FieldDef::new("beamX", ColumnType::float()))
        .with_field(FieldDef::new("beamY", ColumnType::float()))
        .with_field(FieldDef::new("rmsErrorLimits", ColumnType::float()))
        .with_field(FieldDef::new("minimumFractionIndexed", ColumnType::float()))
        .with_field(FieldDef::new("maximumFractionRejected", ColumnType::float()))
        .with_field(FieldDef::new("minimumSignalToNoise", ColumnType::float()))
        .with_field(FieldDef::new("xmlSampleInformation", ColumnType::long_blob()))
}

pub(crate) fn screening_output() -> EntityDef {
    EntityDef::table("ScreeningOutput", "ScreeningOutput")
        .with_field(FieldDef::new("screeningOutputId", ColumnType::int(10)).primary_key())
        .with_field(
            FieldDef::new("screeningId", ColumnType::int(10))
                .not_null()
                .indexed()
                .with_default(DefaultValue::Int(0))
                .references(
                    ForeignKey::to("Screening", "screeningId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("statusDescription", ColumnType::varchar(1024)))
        .with_field(FieldDef::new("rejectedReflections", ColumnType::int(10)))
        .with_field(FieldDef::new("resolutionObtained", ColumnType::float()))
        .with_field(FieldDef::new("spotDeviationR", ColumnType::float()))
        .with_field(FieldDef::new("spotDeviationTheta", ColumnType::float()))
        .with_field(FieldDef::new("beamShiftX", ColumnType::float()))
        .with_field(FieldDef::new("beamShiftY", ColumnType::float()))
        .with_field(FieldDef::new("numSpotsFound", ColumnType::int(10)))
        .with_field(FieldDef::new("numSpotsUsed", ColumnType::int(10)))
        .with_field(FieldDef::new("numSpotsRejected", ColumnType::int(10)))
        .with_field(FieldDef::new("mosaicity", ColumnType::float()))
        .with_field(FieldDef::new("iOverSigma", ColumnType::float()))
        .with_field(FieldDef::new("diffractionRings", ColumnType::tinyint(1)))
        .with_field(
            FieldDef::new("strategySuccess", ColumnType::tinyint(1))
                .not_null()
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new("mosaicityEstimated", ColumnType::tinyint(1))
                .not_null()
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("rankingResolution", ColumnType::decimal()))
        .with_field(FieldDef::new("program", ColumnType::varchar(45)))
        .with_field(FieldDef::new("doseTotal", ColumnType::decimal()))
        .with_field(FieldDef::new("totalExposureTime", ColumnType::decimal()))
        .with_field(FieldDef::new("totalRotationRange", ColumnType::decimal()))
        .with_field(FieldDef::new("totalNumberOfImages", ColumnType::int(11)))
        .with_field(FieldDef::new("rFriedel", ColumnType::decimal()))
        .with_field(
            FieldDef::new("indexingSuccess", ColumnType::tinyint(1))
                .not_null()
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new("screeningSuccess", ColumnType::tinyint(1))
                .with_default(DefaultValue::Int(0)),
        )
}

pub(crate) fn screening_output_lattice() -> EntityDef {
    EntityDef::table("ScreeningOutputLattice", "ScreeningOutputLattice")
        .with_field(FieldDef::new("screeningOutputLatticeId", ColumnType::int(10)).primary_key())
        .with_field(
            FieldDef::new("screeningOutputId", ColumnType::int(10))
                .not_null()
                .indexed()
                .with_default(DefaultValue::Int(0))
                .references(
                    ForeignKey::to("ScreeningOutput", "screeningOutputId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("spaceGroup", ColumnType::varchar(45)))
        .with_field(FieldDef::new("pointGroup", ColumnType::varchar(45)))
        .with_field(FieldDef::new("bravaisLattice", ColumnType::varchar(45)))
        .with_field(FieldDef::new("rawOrientationMatrix_a_x", ColumnType::float()))
        .with_field(FieldDef::new("rawOrientationMatrix_a_y", ColumnType::float()))
        .with_field(FieldDef::new("rawOrientationMatrix_a_z", ColumnType::float()))
        .with_field(FieldDef::new("rawOrientationMatrix_b_x", ColumnType::float()))
        .with_field(FieldDef::new("rawOrientationMatrix_b_y", ColumnType::float()))
        .with_field(FieldDef::new("rawOrientationMatrix_b_z", ColumnType::float()))
        .with_field(FieldDef::new("rawOrientationMatrix_c_x", ColumnType::float()))
        .with_field(FieldDef::new("rawOrientationMatrix_c_y", ColumnType::float()))
        .with_field(FieldDef::new("rawOrientationMatrix_c_z", ColumnType::float()))
        .with_field(FieldDef::new("unitCell_a", ColumnType::float()))
        .with_field(FieldDef::new("unitCell_b", ColumnType::float()))
        .with_field(FieldDef::new("unitCell_c", ColumnType::float()))
        .with_field(FieldDef::new("unitCell_alpha", ColumnType::float()))
        .with_field(FieldDef::new("unitCell_beta", ColumnType::float()))
        .with_field(FieldDef::new("unitCell_gamma", ColumnType::float()))
        .with_field(
            FieldDef::new("bltimeStamp", ColumnType::Timestamp)
                .with_default(DefaultValue::CurrentTimestamp),
        )
        .with_field(
            FieldDef::new("labelitIndexing", ColumnType::tinyint(1))
                .with_default(DefaultValue::Int(0)),
        )
}

pub(crate) fn screening_rank() -> EntityDef {
    EntityDef::table("ScreeningRank", "ScreeningRank")
        .with_field(FieldDef::new("screeningRankId", ColumnType::int(10)).primary_key())
        .with_field(
            FieldDef::new("screeningRankSetId", ColumnType::int(10))
                .not_null()
                .indexed()
                .with_default(DefaultValue::Int(0))
                .references(
                    ForeignKey::to("ScreeningRankSet", "screeningRankSetId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("screeningId", ColumnType::int(10))
                .not_null()
                .indexed()
                .with_default(DefaultValue::Int(0))
                .references(
                    ForeignKey::to("Screening", "screeningId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("rankValue", ColumnType::float()))
        .with_field(FieldDef::new("rankInformation", ColumnType::varchar(1024)))
}

pub(crate) fn screening_rank_set() -> EntityDef {
    EntityDef::table("ScreeningRankSet", "ScreeningRankSet")
        .with_field(FieldDef::new("screeningRankSetId", ColumnType::int(10)).primary_key())
        .with_field(FieldDef::new("rankEngine", ColumnType::varchar(255)))
        .with_field(FieldDef::new("rankingProjectFileName", ColumnType::varchar(255)))
        .with_field(FieldDef::new("rankingSummaryFileName", ColumnType::varchar(255)))
}

pub(crate) fn screening_strategy() -> EntityDef {
    EntityDef::table("ScreeningStrategy", "ScreeningStrategy")
        .with_field(FieldDef::new("screeningStrategyId", ColumnType::int(10)).primary_key())
        .with_field(
            FieldDef::new("screeningOutputId", ColumnType::int(10))
                .not_null()
                .indexed()
                .with_default(DefaultValue::Int(0))
                .references(
                    ForeignKey::to("ScreeningOutput", "screeningOutputId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("phiStart", ColumnType::float()))
        .with_field(FieldDef::new("phiEnd", ColumnType::float()))
        .with_field(FieldDef::new("rotation", ColumnType::float()))
        .with_field(FieldDef::new("exposureTime", ColumnType::float()))
        .with_field(FieldDef::new("resolution", ColumnType::float()))
        .with_field(FieldDef::new("completeness", ColumnType::float()))
        .with_field(FieldDef::new("multiplicity", ColumnType::float()))
        .with_field(
            FieldDef::new("anomalous", ColumnType::tinyint(1))
                .not_null()
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("program", ColumnType::varchar(45)))
        .with_field(FieldDef::new("rankingResolution", ColumnType::float()))
        .with_field(
            FieldDef::new("transmission", ColumnType::float())
                .with_comment("Transmission for the strategy as given by the strategy program."),
        )
}

pub(crate) fn screening_strategy_sub_wedge() -> EntityDef {
    EntityDef::table("ScreeningStrategySubWedge", "ScreeningStrategySubWedge")
        .with_field(
            FieldDef::new("screeningStrategySubWedgeId", ColumnType::int(10))
                .primary_key()
                .with_comment("Primary key"),
        )
        .with_field(
            FieldDef::new("screeningStrategyWedgeId", ColumnType::int(10))
                .indexed()
                .with_comment("Foreign key to parent table")
                .references(
                    ForeignKey::to("ScreeningStrategyWedge", "screeningStrategyWedgeId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("subWedgeNumber", ColumnType::int(10))
                .with_comment("The number of this subwedge within the wedge"),
        )
        .with_field(
            FieldDef::new("rotationAxis", ColumnType::varchar(45))
                .with_comment("Angle where subwedge starts"),
        )
        .with_field(
            FieldDef::new("axisStart", ColumnType::float())
                .with_comment("Angle where subwedge ends"),
        )
        .with_field(
            FieldDef::new("axisEnd", ColumnType::float())
                .with_comment("Exposure time for subwedge"),
        )
        .with_field(
            FieldDef::new("exposureTime", ColumnType::float())
                .with_comment("Transmission for subwedge"),
        )
        .with_field(FieldDef::new("transmission", ColumnType::float()))
        .with_field(FieldDef::new("oscillationRange", ColumnType::float()))
        .with_field(FieldDef::new("completeness", ColumnType::float()))
        .with_field(FieldDef::new("multiplicity", ColumnType::float()))
        .with_field(
            FieldDef::new("doseTotal", ColumnType::float())
                .with_comment("Total dose for this subwedge"),
        )
        .with_field(
            FieldDef::new("numberOfImages", ColumnType::int(10))
                .with_comment("Number of images for this subwedge"),
        )
        .with_field(FieldDef::new("comments", ColumnType::varchar(255)))
        .with_field(FieldDef::new("resolution", ColumnType::float()))
}

pub(crate) fn screening_strategy_wedge() -> EntityDef {
    EntityDef::table("ScreeningStrategyWedge", "ScreeningStrategyWedge")
        .with_field(
            FieldDef::new("screeningStrategyWedgeId", ColumnType::int(10))
                .primary_key()
                .with_comment("Primary key"),
        )
        .with_field(
            FieldDef::new("screeningStrategyId", ColumnType::int(10))
                .indexed()
                .with_comment("Foreign key to parent table")
                .references(
                    ForeignKey::to("ScreeningStrategy", "screeningStrategyId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("wedgeNumber", ColumnType::int(10))
                .with_comment("The number of this wedge within the strategy"),
        )
        .with_field(FieldDef::new("resolution", ColumnType::float()))
        .with_field(FieldDef::new("completeness", ColumnType::float()))
        .with_field(FieldDef::new("multiplicity", ColumnType::float()))
        .with_field(
            FieldDef::new("doseTotal", ColumnType::float())
                .with_comment("Total dose for this wedge"),
        )
        .with_field(
            FieldDef::new("numberOfImages", ColumnType::int(10))
                .with_comment("Number of images for this wedge"),
        )
        .with_field(FieldDef::new("phi", ColumnType::float()))
        .with_field(FieldDef::new("kappa", ColumnType::float()))
        .with_field(FieldDef::new("chi", ColumnType::float()))
        .with_field(FieldDef::new("comments", ColumnType::varchar(255)))
        .with_field(FieldDef::new("wavelength", ColumnType::decimal()))
}

pub(crate) fn session_has_person() -> EntityDef {
    EntityDef::table("SessionHasPerson", "Session_has_Person")
        .with_field(
            FieldDef::new("sessionId", ColumnType::int(10))
                .primary_key()
                .indexed()
                .with_default(DefaultValue::Int(0))
                .references(
                    ForeignKey::to("BLSession", "sessionId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("personId", ColumnType::int(10))
                .primary_key()
                .indexed()
                .with_default(DefaultValue::Int(0))
                .references(
                    ForeignKey::to("Person", "personId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new(
                "role",
                ColumnType::enumeration(&[
                    "Local Contact",
                    "Local Contact 2",
                    "Staff",
                    "Team Leader",
                    "Co-Investigator",
                    "Principal Investigator",
                    "Alternate Contact",
                ]),
            ),
        )
        .with_field(
            FieldDef::new("remote", ColumnType::tinyint(1)).with_default(DefaultValue::Int(0)),
        )
}

pub(crate) fn session_type() -> EntityDef {
    EntityDef::table("SessionType", "SessionType")
        .with_field(FieldDef::new("sessionTypeId", ColumnType::int(10)).primary_key())
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
        .with_field(FieldDef::new("typeName", ColumnType::varchar(31)).not_null())
}

pub(crate) fn shipping() -> EntityDef {
    EntityDef::table("Shipping", "Shipping")
        .with_field(FieldDef::new("shippingId", ColumnType::int(10)).primary_key())
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
        .with_field(FieldDef::new("shippingName", ColumnType::varchar(45)).indexed())
        .with_field(FieldDef::new("deliveryAgent_agentName", ColumnType::varchar(45)))
        .with_field(FieldDef::new("deliveryAgent_shippingDate", ColumnType::Date))
        .with_field(FieldDef::new("deliveryAgent_deliveryDate", ColumnType::Date))
        .with_field(FieldDef::new("deliveryAgent_agentCode", ColumnType::varchar(45)))
        .with_field(FieldDef::new("deliveryAgent_flightCode", ColumnType::varchar(45)))
        .with_field(FieldDef::new("shippingStatus", ColumnType::varchar(45)).indexed())
        .with_field(FieldDef::new("bltimeStamp", ColumnType::DateTime))
        .with_field(FieldDef::new("laboratoryId", ColumnType::int(10)).indexed())
        .with_field(
            FieldDef::new("isStorageShipping", ColumnType::tinyint(1))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("creationDate", ColumnType::DateTime).indexed())
        .with_field(FieldDef::new("comments", ColumnType::varchar(255)))
        .with_field(
            FieldDef::new("sendingLabContactId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("LabContact", "labContactId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("returnLabContactId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("LabContact", "labContactId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("returnCourier", ColumnType::varchar(45)))
        .with_field(FieldDef::new("dateOfShippingToUser", ColumnType::DateTime))
        .with_field(FieldDef::new("shippingType", ColumnType::varchar(45)))
        .with_field(FieldDef::new("safetyLevel", ColumnType::varchar(8)))
}

pub(crate) fn space_group() -> EntityDef {
    EntityDef::table("SpaceGroup", "SpaceGroup")
        .with_field(
            FieldDef::new("spaceGroupId", ColumnType::int(10))
                .primary_key()
                .with_comment("Primary key"),
        )
        .with_field(
            FieldDef::new("geometryClassnameId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("GeometryClassname", "geometryClassnameId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("spaceGroupNumber", ColumnType::int(10))
                .with_comment("ccp4 number pr IUCR"),
        )
        .with_field(
            FieldDef::new("spaceGroupShortName", ColumnType::varchar(45))
                .indexed()
                .with_comment("short name without blank"),
        )
        .with_field(
            FieldDef::new("spaceGroupName", ColumnType::varchar(45)).with_comment("verbose name"),
        )
        .with_field(
            FieldDef::new("bravaisLattice", ColumnType::varchar(45)).with_comment("short name"),
        )
        .with_field(
            FieldDef::new("bravaisLatticeName", ColumnType::varchar(45))
                .with_comment("verbose name"),
        )
        .with_field(
            FieldDef::new("pointGroup", ColumnType::varchar(45)).with_comment("point group"),
        )
        .with_field(
            FieldDef::new("MX_used", ColumnType::tinyint(1))
                .not_null()
                .with_default(DefaultValue::Int(0))
                .with_comment("1 if used in the crystal form"),
        )
}

pub(crate) fn specimen() -> EntityDef {
    EntityDef::table("Specimen", "Specimen")
        .with_field(FieldDef::new("specimenId", ColumnType::int(11)).primary_key())
        .with_field(
            FieldDef::new("experimentId", ColumnType::int(11))
                .not_null()
                .indexed()
                .references(
                    ForeignKey::to("Experiment", "experimentId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("bufferId", ColumnType::int(11))
                .indexed()
                .references(
                    ForeignKey::to("Buffer", "bufferId").on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("macromoleculeId", ColumnType::int(11))
                .indexed()
                .references(
                    ForeignKey::to("Macromolecule", "macromoleculeId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("samplePlatePositionId", ColumnType::int(11))
                .indexed()
                .references(
                    ForeignKey::to("SamplePlatePosition", "samplePlatePositionId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("safetyLevelId", ColumnType::int(11))
                .indexed()
                .references(
                    ForeignKey::to("SafetyLevel", "safetyLevelId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("stockSolutionId", ColumnType::int(11))
                .indexed()
                .references(
                    ForeignKey::to("StockSolution", "stockSolutionId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("code", ColumnType::varchar(255)))
        .with_field(FieldDef::new("concentration", ColumnType::varchar(45)))
        .with_field(FieldDef::new("volume", ColumnType::varchar(45)))
        .with_field(FieldDef::new("comments", ColumnType::varchar(5120)))
}

pub(crate) fn ssx_data_collection() -> EntityDef {
    EntityDef::table("SSXDataCollection", "SSXDataCollection")
        .with_comment("Extends DataCollection with SSX-specific fields.")
        .with_field(
            FieldDef::new("dataCollectionId", ColumnType::int(10))
                .primary_key()
                .with_comment("Primary key is same as dataCollection (1 to 1)")
                .references(
                    ForeignKey::to("DataCollection", "dataCollectionId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("repetitionRate", ColumnType::float()))
        .with_field(FieldDef::new("energyBandwidth", ColumnType::float()))
        .with_field(FieldDef::new("monoStripe", ColumnType::varchar(255)))
        .with_field(
            FieldDef::new("jetSpeed", ColumnType::float()).with_comment("For jet experiments."),
        )
        .with_field(
            FieldDef::new("jetSize", ColumnType::float()).with_comment("For jet experiments."),
        )
        .with_field(
            FieldDef::new("chipPattern", ColumnType::varchar(255))
                .with_comment("For chip experiments."),
        )
        .with_field(
            FieldDef::new("chipModel", ColumnType::varchar(255))
                .with_comment("For chip experiments."),
        )
        .with_field(FieldDef::new("laserEnergy", ColumnType::float()))
        .with_field(FieldDef::new("experimentName", ColumnType::varchar(255)))
}

pub(crate) fn stock_solution() -> EntityDef {
    EntityDef::table("StockSolution", "StockSolution")
        .with_field(FieldDef::new("stockSolutionId", ColumnType::int(11)).primary_key())
        .with_field(
            FieldDef::new("proposalId", ColumnType::int(11))
                .not_null()
                .with_default(DefaultValue::Int(-1)),
        )
        .with_field(
            FieldDef::new("bufferId", ColumnType::int(11))
                .not_null()
                .indexed()
                .references(
                    ForeignKey::to("Buffer", "bufferId").on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("macromoleculeId", ColumnType::int(11))
                .indexed()
                .references(
                    ForeignKey::to("Macromolecule", "macromoleculeId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("instructionSetId", ColumnType::int(11))
                .indexed()
                .references(
                    ForeignKey::to("InstructionSet", "instructionSetId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("boxId", ColumnType::int(10)))
        .with_field(FieldDef::new("name", ColumnType::varchar(45)))
        .with_field(FieldDef::new("storageTemperature", ColumnType::varchar(55)))
        .with_field(FieldDef::new("volume", ColumnType::varchar(55)))
        .with_field(FieldDef::new("concentration", ColumnType::varchar(55)))
        .with_field(FieldDef::new("comments", ColumnType::varchar(255)))
}

pub(crate) fn stoichiometry() -> EntityDef {
    EntityDef::table("Stoichiometry", "Stoichiometry")
        .with_field(FieldDef::new("stoichiometryId", ColumnType::int(11)).primary_key())
        .with_field(
            FieldDef::new("hostMacromoleculeId", ColumnType::int(11))
                .not_null()
                .indexed()
                .references(
                    ForeignKey::to("Macromolecule", "macromoleculeId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("macromoleculeId", ColumnType::int(11))
                .not_null()
                .indexed()
                .references(
                    ForeignKey::to("Macromolecule", "macromoleculeId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("ratio", ColumnType::varchar(45)))
}

pub(crate) fn structure() -> EntityDef {
    EntityDef::table("Structure", "Structure")
        .with_field(FieldDef::new("structureId", ColumnType::int(11)).primary_key())
        .with_field(
            FieldDef::new("macromoleculeId", ColumnType::int(11))
                .indexed()
                .references(
                    ForeignKey::to("Macromolecule", "macromoleculeId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("crystalId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("Crystal", "crystalId").on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("blSampleId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("BLSample", "blSampleId").on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("filePath", ColumnType::varchar(2048)))
        .with_field(FieldDef::new("structureType", ColumnType::varchar(45)))
        .with_field(FieldDef::new("fromResiduesBases", ColumnType::varchar(45)))
        .with_field(FieldDef::new("toResiduesBases", ColumnType::varchar(45)))
        .with_field(FieldDef::new("sequence", ColumnType::varchar(45)))
        .with_field(FieldDef::new("creationDate", ColumnType::DateTime))
        .with_field(FieldDef::new("name", ColumnType::varchar(255)))
        .with_field(FieldDef::new("symmetry", ColumnType::varchar(45)))
        .with_field(FieldDef::new("multiplicity", ColumnType::varchar(45)))
        .with_field(FieldDef::new("groupName", ColumnType::varchar(45)))
        .with_field(
            FieldDef::new("proposalId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("Proposal", "proposalId").on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("uniprotId", ColumnType::varchar(45)))
}

pub(crate) fn substructure_determination() -> EntityDef {
    EntityDef::table("SubstructureDetermination", "SubstructureDetermination")
        .with_field(
            FieldDef::new("substructureDeterminationId", ColumnType::int(10))
                .primary_key()
                .with_comment("Primary key (auto-incremented)"),
        )
        .with_field(
            FieldDef::new("phasingAnalysisId", ColumnType::int(10))
                .not_null()
                .indexed()
                .with_comment("Related phasing analysis item")
                .references(
                    ForeignKey::to("PhasingAnalysis", "phasingAnalysisId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("phasingProgramRunId", ColumnType::int(10))
                .not_null()
                .indexed()
                .with_comment("Related program item")
                .references(
                    ForeignKey::to("PhasingProgramRun", "phasingProgramRunId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("spaceGroupId", ColumnType::int(10))
                .indexed()
                .with_comment("Related spaceGroup")
                .references(
                    ForeignKey::to("SpaceGroup", "spaceGroupId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new(
                "method",
                ColumnType::enumeration(&[
                    "SAD",
                    "MAD",
                    "SIR",
                    "SIRAS",
                    "MR",
                    "MIR",
                    "MIRAS",
                    "RIP",
                    "RIPAS",
                ]),
            )
                .with_comment("phasing method"),
        )
        .with_field(FieldDef::new("lowRes", ColumnType::decimal()))
        .with_field(FieldDef::new("highRes", ColumnType::decimal()))
        .with_field(
            FieldDef::new("recordTimeStamp", ColumnType::DateTime)
                .with_comment("Creation or last update date/time"),
        )
}

pub(crate) fn subtraction() -> EntityDef {
    EntityDef::table("Subtraction", "Subtraction")
        .with_field(FieldDef::new("subtractionId", ColumnType::int(11)).primary_key())
        .with_field(
            FieldDef::new("dataCollectionId", ColumnType::int(11))
                .not_null()
                .indexed()
                .references(
                    ForeignKey::to("SaxsDataCollection", "dataCollectionId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("rg", ColumnType::varchar(45)))
        .with_field(FieldDef::new("rgStdev", ColumnType::varchar(45)))
        .with_field(FieldDef::new("I0", ColumnType::varchar(45)))
        .with_field(FieldDef::new("I0Stdev", ColumnType::varchar(45)))
        .with_field(FieldDef::new("firstPointUsed", ColumnType::varchar(45)))
        .with_field(FieldDef::new("lastPointUsed", ColumnType::varchar(45)))
        .with_field(FieldDef::new("quality", ColumnType::varchar(45)))
        .with_field(FieldDef::new("isagregated", ColumnType::varchar(45)))
        .with_field(FieldDef::new("concentration", ColumnType::varchar(45)))
        .with_field(FieldDef::new("gnomFilePath", ColumnType::varchar(255)))
        .with_field(FieldDef::new("rgGuinier", ColumnType::varchar(45)))
        .with_field(FieldDef::new("rgGnom", ColumnType::varchar(45)))
        .with_field(FieldDef::new("dmax", ColumnType::varchar(45)))
        .with_field(FieldDef::new("total", ColumnType::varchar(45)))
        .with_field(FieldDef::new("volume", ColumnType::varchar(45)))
        .with_field(FieldDef::new("creationTime", ColumnType::DateTime))
        .with_field(FieldDef::new("kratkyFilePath", ColumnType::varchar(255)))
        .with_field(FieldDef::new("scatteringFilePath", ColumnType::varchar(255)))
        .with_field(FieldDef::new("guinierFilePath", ColumnType::varchar(255)))
        .with_field(FieldDef::new("substractedFilePath", ColumnType::varchar(255)))
        .with_field(FieldDef::new("gnomFilePathOutput", ColumnType::varchar(255)))
        .with_field(
            FieldDef::new("sampleOneDimensionalFiles", ColumnType::int(11))
                .indexed()
                .references(
                    ForeignKey::to("FrameList", "frameListId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("bufferOnedimensionalFiles", ColumnType::int(11))
                .indexed()
                .references(
                    ForeignKey::to("FrameList", "frameListId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("sampleAverageFilePath", ColumnType::varchar(255)))
        .with_field(FieldDef::new("bufferAverageFilePath", ColumnType::varchar(255)))
}

pub(crate) fn subtraction_to_ab_initio_model() -> EntityDef {
    EntityDef::table("SubtractionToAbInitioModel", "SubtractionToAbInitioModel")
        .with_field(
            FieldDef::new("subtractionToAbInitioModelId", ColumnType::int(11)).primary_key(),
        )
        .with_field(
            FieldDef::new("abInitioId", ColumnType::int(11))
                .indexed()
                .references(
                    ForeignKey::to("AbInitioModel", "abInitioModelId")
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
}

pub(crate) fn superposition() -> EntityDef {
    EntityDef::table("Superposition", "Superposition")
        .with_field(FieldDef::new("superpositionId", ColumnType::int(11)).primary_key())
        .with_field(FieldDef::new("subtractionId", ColumnType::int(11)).not_null().indexed())
        .with_field(FieldDef::new("abinitioModelPdbFilePath", ColumnType::varchar(255)))
        .with_field(FieldDef::new("aprioriPdbFilePath", ColumnType::varchar(255)))
        .with_field(FieldDef::new("alignedPdbFilePath", ColumnType::varchar(255)))
        .with_field(FieldDef::new("creationDate", ColumnType::DateTime))
}

pub(crate) fn sw_once_token() -> EntityDef {
    EntityDef::table("SWOnceToken", "SW_onceToken")
        .with_comment(
            "One-time use tokens needed for token auth in order to grant access to file downloads and webcams (and some images)",
        )
        .with_field(FieldDef::new("onceTokenId", ColumnType::int(10)).primary_key())
        .with_field(FieldDef::new("token", ColumnType::varchar(128)))
        .with_field(
            FieldDef::new("personId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("Person", "personId").on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("proposalId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("Proposal", "proposalId").on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("validity", ColumnType::varchar(200)))
        .with_field(
            FieldDef::new("recordTimeStamp", ColumnType::Timestamp)
                .not_null()
                .with_default(DefaultValue::CurrentTimestamp),
        )
}
