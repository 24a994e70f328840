//! Table entities, I to M.

use ispyb_core::catalog::{
    ColumnType, DefaultValue, EntityDef, FieldDef, ForeignKey, ReferentialAction,
};

pub(crate) fn image() -> EntityDef {
    EntityDef::table("Image", "Image")
        .with_field(FieldDef::new("imageId", ColumnType::int(10)).primary_key())
        .with_field(
            FieldDef::new("dataCollectionId", ColumnType::int(10))
                .not_null()
                .indexed()
                .with_default(DefaultValue::Int(0))
                .references(
                    ForeignKey::to("DataCollection", "dataCollectionId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("motorPositionId", ColumnType::int(10)).indexed())
        .with_field(FieldDef::new("imageNumber", ColumnType::int(10)).indexed())
        .with_field(FieldDef::new("fileName", ColumnType::varchar(255)))
        .with_field(FieldDef::new("fileLocation", ColumnType::varchar(255)))
        .with_field(FieldDef::new("measuredIntensity", ColumnType::float()))
        .with_field(FieldDef::new("jpegFileFullPath", ColumnType::varchar(255)))
        .with_field(FieldDef::new("jpegThumbnailFileFullPath", ColumnType::varchar(255)))
        .with_field(FieldDef::new("temperature", ColumnType::float()))
        .with_field(FieldDef::new("cumulativeIntensity", ColumnType::float()))
        .with_field(FieldDef::new("synchrotronCurrent", ColumnType::float()))
        .with_field(FieldDef::new("comments", ColumnType::varchar(1024)))
        .with_field(FieldDef::new("machineMessage", ColumnType::varchar(1024)))
        .with_field(
            FieldDef::new("recordTimeStamp", ColumnType::Timestamp)
                .not_null()
                .with_default(DefaultValue::CurrentTimestamp)
                .with_comment("Creation or last update date/time"),
        )
}

pub(crate) fn image_quality_indicators() -> EntityDef {
    EntityDef::table("ImageQualityIndicators", "ImageQualityIndicators")
        .with_field(
            FieldDef::new("imageQualityIndicatorsId", ColumnType::int(10))
                .primary_key()
                .with_comment("Primary key (auto-incremented)"),
        )
        .with_field(FieldDef::new("imageId", ColumnType::int(11)).indexed())
        .with_field(
            FieldDef::new("autoProcProgramId", ColumnType::int(10))
                .not_null()
                .indexed()
                .with_comment("Foreign key to the AutoProcProgram table")
                .references(
                    ForeignKey::to("AutoProcProgram", "autoProcProgramId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("spotTotal", ColumnType::int(11)).with_comment("Total number of spots"),
        )
        .with_field(
            FieldDef::new("inResTotal", ColumnType::int(11))
                .with_comment("Total number of spots in resolution range"),
        )
        .with_field(
            FieldDef::new("goodBraggCandidates", ColumnType::int(11))
                .with_comment("Total number of Bragg diffraction spots"),
        )
        .with_field(
            FieldDef::new("iceRings", ColumnType::int(11))
                .with_comment("Number of ice rings identified"),
        )
        .with_field(
            FieldDef::new("method1Res", ColumnType::float())
                .with_comment("Resolution estimate 1 (see publication)"),
        )
        .with_field(
            FieldDef::new("method2Res", ColumnType::float())
                .with_comment("Resolution estimate 2 (see publication)"),
        )
        .with_field(
            FieldDef::new("maxUnitCell", ColumnType::float())
                .with_comment("Estimation of the largest possible unit cell edge"),
        )
        .with_field(
            FieldDef::new("pctSaturationTop50Peaks", ColumnType::float())
                .with_comment("The fraction of the dynamic range being used"),
        )
        .with_field(
            FieldDef::new("inResolutionOvrlSpots", ColumnType::int(11))
                .with_comment("Number of spots overloaded"),
        )
        .with_field(
            FieldDef::new("binPopCutOffMethod2Res", ColumnType::float())
                .with_comment("Cut off used in resolution limit calculation"),
        )
        .with_field(
            FieldDef::new("recordTimeStamp", ColumnType::DateTime)
                .with_comment("Creation or last update date/time"),
        )
        .with_field(FieldDef::new("totalIntegratedSignal", ColumnType::decimal()))
        .with_field(FieldDef::new("dozor_score", ColumnType::decimal()).with_comment("dozor_score"))
        .with_field(FieldDef::new("dataCollectionId", ColumnType::int(10)))
        .with_field(FieldDef::new("imageNumber", ColumnType::mediumint(8)))
}

pub(crate) fn imager() -> EntityDef {
    EntityDef::table("Imager", "Imager")
        .with_field(FieldDef::new("imagerId", ColumnType::int(10)).primary_key())
        .with_field(FieldDef::new("name", ColumnType::varchar(45)).not_null())
        .with_field(FieldDef::new("temperature", ColumnType::float()))
        .with_field(FieldDef::new("serial", ColumnType::varchar(45)))
        .with_field(FieldDef::new("capacity", ColumnType::smallint(6)))
}

pub(crate) fn initial_model() -> EntityDef {
    EntityDef::table("InitialModel", "InitialModel")
        .with_comment("Initial model generation results")
        .with_field(FieldDef::new("initialModelId", ColumnType::int(10)).primary_key())
        .with_field(
            FieldDef::new("resolution", ColumnType::float()).with_comment("Unit: Angstroms"),
        )
        .with_field(FieldDef::new("numberOfParticles", ColumnType::int(10)))
}

pub(crate) fn input_parameter_workflow() -> EntityDef {
    EntityDef::table("InputParameterWorkflow", "InputParameterWorkflow")
        .with_field(FieldDef::new("inputParameterId", ColumnType::int(11)).primary_key())
        .with_field(FieldDef::new("workflowId", ColumnType::int(11)).not_null())
        .with_field(FieldDef::new("parameterType", ColumnType::varchar(255)))
        .with_field(FieldDef::new("name", ColumnType::varchar(255)))
        .with_field(FieldDef::new("value", ColumnType::varchar(255)))
        .with_field(FieldDef::new("comments", ColumnType::varchar(2048)))
}

pub(crate) fn inspection_type() -> EntityDef {
    EntityDef::table("InspectionType", "InspectionType")
        .with_field(FieldDef::new("inspectionTypeId", ColumnType::int(10)).primary_key())
        .with_field(FieldDef::new("name", ColumnType::varchar(45)))
}

pub(crate) fn instruction() -> EntityDef {
    EntityDef::table("Instruction", "Instruction")
        .with_field(FieldDef::new("instructionId", ColumnType::int(11)).primary_key())
        .with_field(
            FieldDef::new("instructionSetId", ColumnType::int(11))
                .not_null()
                .indexed()
                .references(
                    ForeignKey::to("InstructionSet", "instructionSetId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("order", ColumnType::int(11)).not_null())
        .with_field(FieldDef::new("comments", ColumnType::varchar(255)))
}

pub(crate) fn instruction_set() -> EntityDef {
    EntityDef::table("InstructionSet", "InstructionSet")
        .with_field(FieldDef::new("instructionSetId", ColumnType::int(11)).primary_key())
        .with_field(FieldDef::new("type", ColumnType::varchar(50)))
}

pub(crate) fn ispyb_auto_proc_attachment() -> EntityDef {
    EntityDef::table("IspybAutoProcAttachment", "IspybAutoProcAttachment")
        .with_comment("ISPyB autoProcAttachment files values")
        .with_field(FieldDef::new("autoProcAttachmentId", ColumnType::int(11)).primary_key())
        .with_field(FieldDef::new("fileName", ColumnType::varchar(255)).not_null())
        .with_field(FieldDef::new("description", ColumnType::varchar(255)).not_null())
        .with_field(
            FieldDef::new(
                "step",
                ColumnType::enumeration(&[
                    "XDS",
                    "XSCALE",
                    "SCALA",
                    "SCALEPACK",
                    "TRUNCATE",
                    "DIMPLE",
                ]),
            )
                .with_default(DefaultValue::String("XDS".into()))
                .with_comment("step where the file is generated"),
        )
        .with_field(
            FieldDef::new(
                "fileCategory",
                ColumnType::enumeration(&["input", "output", "log", "correction"]),
            )
                .with_default(DefaultValue::String("output".into())),
        )
        .with_field(
            FieldDef::new("hasGraph", ColumnType::tinyint(1))
                .not_null()
                .with_default(DefaultValue::Int(0)),
        )
}

pub(crate) fn ispyb_crystal_class() -> EntityDef {
    EntityDef::table("IspybCrystalClass", "IspybCrystalClass")
        .with_comment("ISPyB crystal class values")
        .with_field(FieldDef::new("crystalClassId", ColumnType::int(11)).primary_key())
        .with_field(FieldDef::new("crystalClass_code", ColumnType::varchar(20)).not_null())
        .with_field(FieldDef::new("crystalClass_name", ColumnType::varchar(255)).not_null())
}

pub(crate) fn ispyb_reference() -> EntityDef {
    EntityDef::table("IspybReference", "IspybReference")
        .with_field(
            FieldDef::new("referenceId", ColumnType::int(10))
                .primary_key()
                .with_comment("Primary key (auto-incremented)"),
        )
        .with_field(
            FieldDef::new("referenceName", ColumnType::varchar(255)).with_comment("reference name"),
        )
        .with_field(
            FieldDef::new("referenceUrl", ColumnType::varchar(1024))
                .with_comment("url of the reference"),
        )
        .with_field(
            FieldDef::new("referenceBibtext", ColumnType::large_binary())
                .with_comment("bibtext value of the reference"),
        )
        .with_field(
            FieldDef::new(
                "beamline",
                ColumnType::enumeration(&[
                    "All",
                    "ID14-4",
                    "ID23-1",
                    "ID23-2",
                    "ID29",
                    "ID30A-1",
                    "ID30A-2",
                    "XRF",
                    "AllXRF",
                    "Mesh",
                ]),
            )
                .with_comment("beamline involved"),
        )
}

pub(crate) fn lab_contact() -> EntityDef {
    EntityDef::table("LabContact", "LabContact")
        .with_field(FieldDef::new("labContactId", ColumnType::int(10)).primary_key())
        .with_field(
            FieldDef::new("personId", ColumnType::int(10))
                .not_null()
                .references(
                    ForeignKey::to("Person", "personId").on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("cardName", ColumnType::varchar(40)).not_null())
        .with_field(
            FieldDef::new("proposalId", ColumnType::int(10))
                .not_null()
                .indexed()
                .references(
                    ForeignKey::to("Proposal", "proposalId").on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("defaultCourrierCompany", ColumnType::varchar(45)))
        .with_field(FieldDef::new("courierAccount", ColumnType::varchar(45)))
        .with_field(FieldDef::new("billingReference", ColumnType::varchar(45)))
        .with_field(
            FieldDef::new("dewarAvgCustomsValue", ColumnType::int(10))
                .not_null()
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new("dewarAvgTransportValue", ColumnType::int(10))
                .not_null()
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new("recordTimeStamp", ColumnType::Timestamp)
                .not_null()
                .with_default(DefaultValue::CurrentTimestamp)
                .with_comment("Creation or last update date/time"),
        )
}

pub(crate) fn laboratory() -> EntityDef {
    EntityDef::table("Laboratory", "Laboratory")
        .with_field(FieldDef::new("laboratoryId", ColumnType::int(10)).primary_key())
        .with_field(FieldDef::new("laboratoryUUID", ColumnType::varchar(45)))
        .with_field(FieldDef::new("name", ColumnType::varchar(45)))
        .with_field(FieldDef::new("address", ColumnType::varchar(255)))
        .with_field(FieldDef::new("city", ColumnType::varchar(45)))
        .with_field(FieldDef::new("country", ColumnType::varchar(45)))
        .with_field(FieldDef::new("url", ColumnType::varchar(255)))
        .with_field(FieldDef::new("organization", ColumnType::varchar(45)))
        .with_field(
            FieldDef::new("recordTimeStamp", ColumnType::Timestamp)
                .not_null()
                .with_default(DefaultValue::CurrentTimestamp)
                .with_comment("Creation or last update date/time"),
        )
        .with_field(FieldDef::new("laboratoryExtPk", ColumnType::int(11)))
}

pub(crate) fn log4_stat() -> EntityDef {
    EntityDef::table("Log4Stat", "Log4Stat")
        .with_field(FieldDef::new("id", ColumnType::int(11)).primary_key())
        .with_field(FieldDef::new("priority", ColumnType::varchar(15)))
        .with_field(FieldDef::new("timestamp", ColumnType::DateTime))
        .with_field(FieldDef::new("msg", ColumnType::varchar(255)))
        .with_field(FieldDef::new("detail", ColumnType::varchar(255)))
        .with_field(FieldDef::new("value", ColumnType::varchar(255)))
}

pub(crate) fn login() -> EntityDef {
    EntityDef::table("Login", "Login")
        .with_field(FieldDef::new("loginId", ColumnType::int(11)).primary_key())
        .with_field(FieldDef::new("token", ColumnType::varchar(45)).not_null().indexed())
        .with_field(FieldDef::new("username", ColumnType::varchar(45)).not_null())
        .with_field(FieldDef::new("roles", ColumnType::varchar(1024)).not_null())
        .with_field(FieldDef::new("siteId", ColumnType::varchar(45)))
        .with_field(FieldDef::new("authorized", ColumnType::varchar(1024)))
        .with_field(FieldDef::new("expirationTime", ColumnType::DateTime).not_null())
}

pub(crate) fn macromolecule() -> EntityDef {
    EntityDef::table("Macromolecule", "Macromolecule")
        .with_field(FieldDef::new("macromoleculeId", ColumnType::int(11)).primary_key())
        .with_field(FieldDef::new("proposalId", ColumnType::int(10)))
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
        .with_field(FieldDef::new("extintionCoefficient", ColumnType::varchar(45)))
        .with_field(FieldDef::new("molecularMass", ColumnType::varchar(45)))
        .with_field(FieldDef::new("sequence", ColumnType::varchar(1000)))
        .with_field(FieldDef::new("contactsDescriptionFilePath", ColumnType::varchar(255)))
        .with_field(FieldDef::new("symmetry", ColumnType::varchar(45)))
        .with_field(FieldDef::new("comments", ColumnType::varchar(1024)))
        .with_field(FieldDef::new("refractiveIndex", ColumnType::varchar(45)))
        .with_field(FieldDef::new("solventViscosity", ColumnType::varchar(45)))
        .with_field(FieldDef::new("creationDate", ColumnType::DateTime))
        .with_field(FieldDef::new("electronDensity", ColumnType::float_precision(7)))
}

pub(crate) fn macromolecule_region() -> EntityDef {
    EntityDef::table("MacromoleculeRegion", "MacromoleculeRegion")
        .with_field(FieldDef::new("macromoleculeRegionId", ColumnType::int(11)).primary_key())
        .with_field(
            FieldDef::new("macromoleculeId", ColumnType::int(11))
                .not_null()
                .indexed()
                .references(
                    ForeignKey::to("Macromolecule", "macromoleculeId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("regionType", ColumnType::varchar(45)))
        .with_field(FieldDef::new("id", ColumnType::varchar(45)))
        .with_field(FieldDef::new("count", ColumnType::varchar(45)))
        .with_field(FieldDef::new("sequence", ColumnType::varchar(45)))
}

pub(crate) fn measurement() -> EntityDef {
    EntityDef::table("Measurement", "Measurement")
        .with_field(FieldDef::new("measurementId", ColumnType::int(11)).primary_key())
        .with_field(
            FieldDef::new("specimenId", ColumnType::int(11))
                .not_null()
                .indexed()
                .references(
                    ForeignKey::to("Specimen", "specimenId").on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("runId", ColumnType::int(11))
                .indexed()
                .references(ForeignKey::to("Run", "runId").on_delete(ReferentialAction::Cascade)),
        )
        .with_field(FieldDef::new("code", ColumnType::varchar(100)))
        .with_field(FieldDef::new("imageDirectory", ColumnType::varchar(512)))
        .with_field(FieldDef::new("priorityLevelId", ColumnType::int(11)))
        .with_field(FieldDef::new("exposureTemperature", ColumnType::varchar(45)))
        .with_field(FieldDef::new("viscosity", ColumnType::varchar(45)))
        .with_field(FieldDef::new("flow", ColumnType::tinyint(1)))
        .with_field(FieldDef::new("extraFlowTime", ColumnType::varchar(45)))
        .with_field(FieldDef::new("volumeToLoad", ColumnType::varchar(45)))
        .with_field(FieldDef::new("waitTime", ColumnType::varchar(45)))
        .with_field(FieldDef::new("transmission", ColumnType::varchar(45)))
        .with_field(FieldDef::new("comments", ColumnType::varchar(512)))
        .with_field(FieldDef::new("pathToH5", ColumnType::varchar(512)))
}

pub(crate) fn measurement_to_data_collection() -> EntityDef {
    EntityDef::table("MeasurementToDataCollection", "MeasurementToDataCollection")
        .with_field(
            FieldDef::new("measurementToDataCollectionId", ColumnType::int(11)).primary_key(),
        )
        .with_field(
            FieldDef::new("dataCollectionId", ColumnType::int(11))
                .indexed()
                .references(
                    ForeignKey::to("SaxsDataCollection", "dataCollectionId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("measurementId", ColumnType::int(11))
                .indexed()
                .references(
                    ForeignKey::to("Measurement", "measurementId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("dataCollectionOrder", ColumnType::int(11)))
}

pub(crate) fn measurement_unit() -> EntityDef {
    EntityDef::table("MeasurementUnit", "MeasurementUnit")
        .with_field(FieldDef::new("measurementUnitId", ColumnType::int(11)).primary_key())
        .with_field(FieldDef::new("name", ColumnType::varchar(45)))
        .with_field(FieldDef::new("unitType", ColumnType::varchar(45)))
}

pub(crate) fn merge() -> EntityDef {
    EntityDef::table("Merge", "Merge")
        .with_field(FieldDef::new("mergeId", ColumnType::int(11)).primary_key())
        .with_field(
            FieldDef::new("measurementId", ColumnType::int(11))
                .indexed()
                .references(
                    ForeignKey::to("Measurement", "measurementId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("frameListId", ColumnType::int(11))
                .indexed()
                .references(
                    ForeignKey::to("FrameList", "frameListId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("discardedFrameNameList", ColumnType::varchar(1024)))
        .with_field(FieldDef::new("averageFilePath", ColumnType::varchar(255)))
        .with_field(FieldDef::new("framesCount", ColumnType::varchar(45)))
        .with_field(FieldDef::new("framesMerge", ColumnType::varchar(45)))
        .with_field(FieldDef::new("creationDate", ColumnType::DateTime))
}

pub(crate) fn mixture_to_structure() -> EntityDef {
    EntityDef::table("MixtureToStructure", "MixtureToStructure")
        .with_field(FieldDef::new("fitToStructureId", ColumnType::int(11)).primary_key())
        .with_field(
            FieldDef::new("structureId", ColumnType::int(11))
                .not_null()
                .indexed()
                .references(
                    ForeignKey::to("Structure", "structureId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("mixtureId", ColumnType::int(11))
                .not_null()
                .indexed()
                .references(
                    ForeignKey::to("FitStructureToExperimentalData", "fitStructureToExperimentalDataId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("volumeFraction", ColumnType::varchar(45)))
        .with_field(FieldDef::new("creationDate", ColumnType::DateTime))
}

pub(crate) fn model() -> EntityDef {
    EntityDef::table("Model", "Model")
        .with_field(FieldDef::new("modelId", ColumnType::int(11)).primary_key())
        .with_field(FieldDef::new("name", ColumnType::varchar(45)))
        .with_field(FieldDef::new("pdbFile", ColumnType::varchar(255)))
        .with_field(FieldDef::new("fitFile", ColumnType::varchar(255)))
        .with_field(FieldDef::new("firFile", ColumnType::varchar(255)))
        .with_field(FieldDef::new("logFile", ColumnType::varchar(255)))
        .with_field(FieldDef::new("rFactor", ColumnType::varchar(45)))
        .with_field(FieldDef::new("chiSqrt", ColumnType::varchar(45)))
        .with_field(FieldDef::new("volume", ColumnType::varchar(45)))
        .with_field(FieldDef::new("rg", ColumnType::varchar(45)))
        .with_field(FieldDef::new("dMax", ColumnType::varchar(45)))
}

pub(crate) fn model_building() -> EntityDef {
    EntityDef::table("ModelBuilding", "ModelBuilding")
        .with_field(
            FieldDef::new("modelBuildingId", ColumnType::int(10))
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
        .with_field(FieldDef::new("lowRes", ColumnType::decimal()))
        .with_field(FieldDef::new("highRes", ColumnType::decimal()))
        .with_field(
            FieldDef::new("recordTimeStamp", ColumnType::DateTime)
                .with_comment("Creation or last update date/time"),
        )
}

pub(crate) fn model_list() -> EntityDef {
    EntityDef::table("ModelList", "ModelList")
        .with_field(FieldDef::new("modelListId", ColumnType::int(11)).primary_key())
        .with_field(FieldDef::new("nsdFilePath", ColumnType::varchar(255)))
        .with_field(FieldDef::new("chi2RgFilePath", ColumnType::varchar(255)))
}

pub(crate) fn model_to_list() -> EntityDef {
    EntityDef::table("ModelToList", "ModelToList")
        .with_field(FieldDef::new("modelToListId", ColumnType::int(11)).primary_key())
        .with_field(
            FieldDef::new("modelId", ColumnType::int(11))
                .not_null()
                .indexed()
                .references(
                    ForeignKey::to("Model", "modelId").on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("modelListId", ColumnType::int(11))
                .not_null()
                .indexed()
                .references(
                    ForeignKey::to("ModelList", "modelListId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
}

pub(crate) fn motion_correction() -> EntityDef {
    EntityDef::table("MotionCorrection", "MotionCorrection")
        .with_field(FieldDef::new("motionCorrectionId", ColumnType::int(11)).primary_key())
        .with_field(
            FieldDef::new("movieId", ColumnType::int(11))
                .indexed()
                .references(
                    ForeignKey::to("Movie", "movieId").on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("firstFrame", ColumnType::varchar(45)))
        .with_field(FieldDef::new("lastFrame", ColumnType::varchar(45)))
        .with_field(FieldDef::new("dosePerFrame", ColumnType::varchar(45)))
        .with_field(FieldDef::new("doseWeight", ColumnType::varchar(45)))
        .with_field(FieldDef::new("totalMotion", ColumnType::varchar(45)))
        .with_field(FieldDef::new("averageMotionPerFrame", ColumnType::varchar(45)))
        .with_field(FieldDef::new("driftPlotFullPath", ColumnType::varchar(512)))
        .with_field(FieldDef::new("micrographFullPath", ColumnType::varchar(512)))
        .with_field(FieldDef::new("micrographSnapshotFullPath", ColumnType::varchar(512)))
        .with_field(FieldDef::new("correctedDoseMicrographFullPath", ColumnType::varchar(512)))
        .with_field(FieldDef::new("patchesUsed", ColumnType::varchar(45)))
        .with_field(FieldDef::new("logFileFullPath", ColumnType::varchar(512)))
        .with_field(
            FieldDef::new("createdTimeStamp", ColumnType::Timestamp)
                .not_null()
                .with_default(DefaultValue::CurrentTimestamp),
        )
}

pub(crate) fn motor_position() -> EntityDef {
    EntityDef::table("MotorPosition", "MotorPosition")
        .with_field(
            FieldDef::new("motorPositionId", ColumnType::int(10))
                .primary_key()
                .with_comment("Primary key (auto-incremented)"),
        )
        .with_field(FieldDef::new("phiX", ColumnType::decimal()))
        .with_field(FieldDef::new("phiY", ColumnType::decimal()))
        .with_field(FieldDef::new("phiZ", ColumnType::decimal()))
        .with_field(FieldDef::new("sampX", ColumnType::decimal()))
        .with_field(FieldDef::new("sampY", ColumnType::decimal()))
        .with_field(FieldDef::new("omega", ColumnType::decimal()))
        .with_field(FieldDef::new("kappa", ColumnType::decimal()))
        .with_field(FieldDef::new("phi", ColumnType::decimal()))
        .with_field(FieldDef::new("chi", ColumnType::decimal()))
        .with_field(FieldDef::new("gridIndexY", ColumnType::int(11)))
        .with_field(FieldDef::new("gridIndexZ", ColumnType::int(11)))
        .with_field(
            FieldDef::new("recordTimeStamp", ColumnType::Timestamp)
                .not_null()
                .with_default(DefaultValue::CurrentTimestamp)
                .with_comment("Creation or last update date/time"),
        )
}

pub(crate) fn movie() -> EntityDef {
    EntityDef::table("Movie", "Movie")
        .with_field(FieldDef::new("movieId", ColumnType::int(11)).primary_key())
        .with_field(
            FieldDef::new("dataCollectionId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("DataCollection", "dataCollectionId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("movieNumber", ColumnType::int(11)))
        .with_field(FieldDef::new("movieFullPath", ColumnType::varchar(255)).indexed())
        .with_field(FieldDef::new("positionX", ColumnType::varchar(45)))
        .with_field(FieldDef::new("positionY", ColumnType::varchar(45)))
        .with_field(FieldDef::new("micrographFullPath", ColumnType::varchar(255)))
        .with_field(FieldDef::new("micrographSnapshotFullPath", ColumnType::varchar(255)))
        .with_field(FieldDef::new("xmlMetaDataFullPath", ColumnType::varchar(255)))
        .with_field(FieldDef::new("dosePerImage", ColumnType::varchar(45)))
        .with_field(
            FieldDef::new("createdTimeStamp", ColumnType::Timestamp)
                .not_null()
                .with_default(DefaultValue::CurrentTimestamp),
        )
}

pub(crate) fn mxmr_run() -> EntityDef {
    EntityDef::table("MXMRRun", "MXMRRun")
        .with_field(FieldDef::new("mxMRRunId", ColumnType::int(10)).primary_key())
        .with_field(
            FieldDef::new("autoProcScalingId", ColumnType::int(10))
                .not_null()
                .indexed()
                .references(
                    ForeignKey::to("AutoProcScaling", "autoProcScalingId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("success", ColumnType::tinyint(1))
                .with_default(DefaultValue::Int(0))
                .with_comment(
                    "Indicates whether the program completed. 1 for success, 0 for failure.",
                ),
        )
        .with_field(
            FieldDef::new("message", ColumnType::varchar(255))
                .with_comment("A short summary of the findings, success or failure."),
        )
        .with_field(FieldDef::new("pipeline", ColumnType::varchar(50)))
        .with_field(FieldDef::new("inputCoordFile", ColumnType::varchar(255)))
        .with_field(FieldDef::new("outputCoordFile", ColumnType::varchar(255)))
        .with_field(FieldDef::new("inputMTZFile", ColumnType::varchar(255)))
        .with_field(FieldDef::new("outputMTZFile", ColumnType::varchar(255)))
        .with_field(FieldDef::new("runDirectory", ColumnType::varchar(255)))
        .with_field(FieldDef::new("logFile", ColumnType::varchar(255)))
        .with_field(FieldDef::new("commandLine", ColumnType::varchar(255)))
        .with_field(FieldDef::new("rValueStart", ColumnType::float()))
        .with_field(FieldDef::new("rValueEnd", ColumnType::float()))
        .with_field(FieldDef::new("rFreeValueStart", ColumnType::float()))
        .with_field(FieldDef::new("rFreeValueEnd", ColumnType::float()))
        .with_field(FieldDef::new("starttime", ColumnType::DateTime))
        .with_field(FieldDef::new("endtime", ColumnType::DateTime))
}

pub(crate) fn mxmr_run_blob() -> EntityDef {
    EntityDef::table("MXMRRunBlob", "MXMRRunBlob")
        .with_field(FieldDef::new("mxMRRunBlobId", ColumnType::int(10)).primary_key())
        .with_field(
            FieldDef::new("mxMRRunId", ColumnType::int(10))
                .not_null()
                .indexed()
                .references(
                    ForeignKey::to("MXMRRun", "mxMRRunId").on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("view1", ColumnType::varchar(255)))
        .with_field(FieldDef::new("view2", ColumnType::varchar(255)))
        .with_field(FieldDef::new("view3", ColumnType::varchar(255)))
}
