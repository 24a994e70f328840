//! Table entities, A.

use ispyb_core::catalog::{
    ColumnType, DefaultValue, EntityDef, FieldDef, ForeignKey, ReferentialAction,
};

pub(crate) fn ab_initio_model() -> EntityDef {
    EntityDef::table("AbInitioModel", "AbInitioModel")
        .with_field(FieldDef::new("abInitioModelId", ColumnType::int(11)).primary_key())
        .with_field(
            FieldDef::new("modelListId", ColumnType::int(11))
                .indexed()
                .references(
                    ForeignKey::to("ModelList", "modelListId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("averagedModelId", ColumnType::int(11))
                .indexed()
                .references(
                    ForeignKey::to("Model", "modelId").on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("rapidShapeDeterminationModelId", ColumnType::int(11))
                .indexed()
                .references(
                    ForeignKey::to("Model", "modelId").on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("shapeDeterminationModelId", ColumnType::int(11))
                .indexed()
                .references(
                    ForeignKey::to("Model", "modelId").on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("comments", ColumnType::varchar(512)))
        .with_field(FieldDef::new("creationTime", ColumnType::DateTime))
}

pub(crate) fn additive() -> EntityDef {
    EntityDef::table("Additive", "Additive")
        .with_field(FieldDef::new("additiveId", ColumnType::int(11)).primary_key())
        .with_field(FieldDef::new("name", ColumnType::varchar(45)))
        .with_field(FieldDef::new("additiveType", ColumnType::varchar(45)))
        .with_field(FieldDef::new("comments", ColumnType::varchar(512)))
        .with_field(
            FieldDef::new("chemFormulaHead", ColumnType::varchar(25))
                .with_default(DefaultValue::String("".into())),
        )
        .with_field(
            FieldDef::new("chemFormulaTail", ColumnType::varchar(25))
                .with_default(DefaultValue::String("".into())),
        )
}

pub(crate) fn admin_activity() -> EntityDef {
    EntityDef::table("AdminActivity", "AdminActivity")
        .with_field(FieldDef::new("adminActivityId", ColumnType::int(11)).primary_key())
        .with_field(
            FieldDef::new("username", ColumnType::varchar(45))
                .not_null()
                .unique()
                .with_default(DefaultValue::String("".into())),
        )
        .with_field(FieldDef::new("action", ColumnType::varchar(45)).indexed())
        .with_field(FieldDef::new("comments", ColumnType::varchar(100)))
        .with_field(FieldDef::new("dateTime", ColumnType::DateTime))
}

pub(crate) fn admin_var() -> EntityDef {
    EntityDef::table("AdminVar", "AdminVar")
        .with_comment("ISPyB administration values")
        .with_field(FieldDef::new("varId", ColumnType::int(11)).primary_key())
        .with_field(FieldDef::new("name", ColumnType::varchar(32)).indexed())
        .with_field(FieldDef::new("value", ColumnType::varchar(1024)).indexed())
}

pub(crate) fn aperture() -> EntityDef {
    EntityDef::table("Aperture", "Aperture")
        .with_field(FieldDef::new("apertureId", ColumnType::int(10)).primary_key())
        .with_field(FieldDef::new("sizeX", ColumnType::float()))
}

pub(crate) fn assembly() -> EntityDef {
    EntityDef::table("Assembly", "Assembly")
        .with_field(FieldDef::new("assemblyId", ColumnType::int(11)).primary_key())
        .with_field(
            FieldDef::new("macromoleculeId", ColumnType::int(11))
                .not_null()
                .indexed()
                .references(
                    ForeignKey::to("Macromolecule", "macromoleculeId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("creationDate", ColumnType::DateTime))
        .with_field(FieldDef::new("comments", ColumnType::varchar(255)))
}

pub(crate) fn assembly_has_macromolecule() -> EntityDef {
    EntityDef::table("AssemblyHasMacromolecule", "AssemblyHasMacromolecule")
        .with_field(FieldDef::new("AssemblyHasMacromoleculeId", ColumnType::int(11)).primary_key())
        .with_field(
            FieldDef::new("assemblyId", ColumnType::int(11))
                .not_null()
                .indexed()
                .references(
                    ForeignKey::to("Assembly", "assemblyId").on_delete(ReferentialAction::Cascade),
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
}

pub(crate) fn assembly_region() -> EntityDef {
    EntityDef::table("AssemblyRegion", "AssemblyRegion")
        .with_field(FieldDef::new("assemblyRegionId", ColumnType::int(11)).primary_key())
        .with_field(
            FieldDef::new("assemblyHasMacromoleculeId", ColumnType::int(11))
                .not_null()
                .indexed()
                .references(
                    ForeignKey::to("AssemblyHasMacromolecule", "AssemblyHasMacromoleculeId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("assemblyRegionType", ColumnType::varchar(45)))
        .with_field(FieldDef::new("name", ColumnType::varchar(45)))
        .with_field(FieldDef::new("fromResiduesBases", ColumnType::varchar(45)))
        .with_field(FieldDef::new("toResiduesBases", ColumnType::varchar(45)))
}

pub(crate) fn auto_proc() -> EntityDef {
    EntityDef::table("AutoProc", "AutoProc")
        .with_field(
            FieldDef::new("autoProcId", ColumnType::int(10))
                .primary_key()
                .with_comment("Primary key (auto-incremented)"),
        )
        .with_field(
            FieldDef::new("autoProcProgramId", ColumnType::int(10))
                .indexed()
                .with_comment("Related program item"),
        )
        .with_field(
            FieldDef::new("spaceGroup", ColumnType::varchar(45)).with_comment("Space group"),
        )
        .with_field(
            FieldDef::new("refinedCell_a", ColumnType::float()).with_comment("Refined cell"),
        )
        .with_field(
            FieldDef::new("refinedCell_b", ColumnType::float()).with_comment("Refined cell"),
        )
        .with_field(
            FieldDef::new("refinedCell_c", ColumnType::float()).with_comment("Refined cell"),
        )
        .with_field(
            FieldDef::new("refinedCell_alpha", ColumnType::float()).with_comment("Refined cell"),
        )
        .with_field(
            FieldDef::new("refinedCell_beta", ColumnType::float()).with_comment("Refined cell"),
        )
        .with_field(
            FieldDef::new("refinedCell_gamma", ColumnType::float()).with_comment("Refined cell"),
        )
        .with_field(
            FieldDef::new("recordTimeStamp", ColumnType::DateTime)
                .with_comment("Creation or last update date/time"),
        )
}

pub(crate) fn auto_proc_integration() -> EntityDef {
    EntityDef::table("AutoProcIntegration", "AutoProcIntegration")
        .with_field(
            FieldDef::new("autoProcIntegrationId", ColumnType::int(10))
                .primary_key()
                .with_comment("Primary key (auto-incremented)"),
        )
        .with_field(
            FieldDef::new("dataCollectionId", ColumnType::int(10))
                .not_null()
                .indexed()
                .with_comment("DataCollection item")
                .references(
                    ForeignKey::to("DataCollection", "dataCollectionId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("autoProcProgramId", ColumnType::int(10))
                .indexed()
                .with_comment("Related program item")
                .references(
                    ForeignKey::to("AutoProcProgram", "autoProcProgramId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("startImageNumber", ColumnType::int(10))
                .with_comment("start image number"),
        )
        .with_field(
            FieldDef::new("endImageNumber", ColumnType::int(10)).with_comment("end image number"),
        )
        .with_field(
            FieldDef::new("refinedDetectorDistance", ColumnType::float())
                .with_comment("Refined DataCollection.detectorDistance"),
        )
        .with_field(
            FieldDef::new("refinedXBeam", ColumnType::float())
                .with_comment("Refined DataCollection.xBeam"),
        )
        .with_field(
            FieldDef::new("refinedYBeam", ColumnType::float())
                .with_comment("Refined DataCollection.yBeam"),
        )
        .with_field(
            FieldDef::new("rotationAxisX", ColumnType::float()).with_comment("Rotation axis"),
        )
        .with_field(
            FieldDef::new("rotationAxisY", ColumnType::float()).with_comment("Rotation axis"),
        )
        .with_field(
            FieldDef::new("rotationAxisZ", ColumnType::float()).with_comment("Rotation axis"),
        )
        .with_field(FieldDef::new("beamVectorX", ColumnType::float()).with_comment("Beam vector"))
        .with_field(FieldDef::new("beamVectorY", ColumnType::float()).with_comment("Beam vector"))
        .with_field(FieldDef::new("beamVectorZ", ColumnType::float()).with_comment("Beam vector"))
        .with_field(FieldDef::new("cell_a", ColumnType::float()).with_comment("Unit cell"))
        .with_field(FieldDef::new("cell_b", ColumnType::float()).with_comment("Unit cell"))
        .with_field(FieldDef::new("cell_c", ColumnType::float()).with_comment("Unit cell"))
        .with_field(FieldDef::new("cell_alpha", ColumnType::float()).with_comment("Unit cell"))
        .with_field(FieldDef::new("cell_beta", ColumnType::float()).with_comment("Unit cell"))
        .with_field(FieldDef::new("cell_gamma", ColumnType::float()).with_comment("Unit cell"))
        .with_field(
            FieldDef::new("recordTimeStamp", ColumnType::DateTime)
                .with_comment("Creation or last update date/time"),
        )
        .with_field(
            FieldDef::new("anomalous", ColumnType::tinyint(1))
                .with_default(DefaultValue::Int(0))
                .with_comment("boolean type:0 noanoum - 1 anoum"),
        )
}

pub(crate) fn auto_proc_program() -> EntityDef {
    EntityDef::table("AutoProcProgram", "AutoProcProgram")
        .with_field(
            FieldDef::new("autoProcProgramId", ColumnType::int(10))
                .primary_key()
                .with_comment("Primary key (auto-incremented)"),
        )
        .with_field(
            FieldDef::new("dataCollectionId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("DataCollection", "dataCollectionId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("processingCommandLine", ColumnType::varchar(255))
                .with_comment("Command line for running the automatic processing"),
        )
        .with_field(
            FieldDef::new("processingPrograms", ColumnType::varchar(255))
                .with_comment("Processing programs (comma separated)"),
        )
        .with_field(
            FieldDef::new(
                "processingStatus",
                ColumnType::enumeration(&["RUNNING", "FAILED", "SUCCESS", "0", "1"]),
            )
                .with_comment("success (1) / fail (0)"),
        )
        .with_field(
            FieldDef::new("processingMessage", ColumnType::varchar(255))
                .with_comment("warning, error,..."),
        )
        .with_field(
            FieldDef::new("processingStartTime", ColumnType::DateTime)
                .with_comment("Processing start time"),
        )
        .with_field(
            FieldDef::new("processingEndTime", ColumnType::DateTime)
                .with_comment("Processing end time"),
        )
        .with_field(
            FieldDef::new("processingEnvironment", ColumnType::varchar(255))
                .with_comment("Cpus, Nodes,..."),
        )
        .with_field(
            FieldDef::new("recordTimeStamp", ColumnType::DateTime)
                .with_comment("Creation or last update date/time"),
        )
}

pub(crate) fn auto_proc_program_attachment() -> EntityDef {
    EntityDef::table("AutoProcProgramAttachment", "AutoProcProgramAttachment")
        .with_field(
            FieldDef::new("autoProcProgramAttachmentId", ColumnType::int(10))
                .primary_key()
                .with_comment("Primary key (auto-incremented)"),
        )
        .with_field(
            FieldDef::new("autoProcProgramId", ColumnType::int(10))
                .not_null()
                .indexed()
                .with_comment("Related autoProcProgram item")
                .references(
                    ForeignKey::to("AutoProcProgram", "autoProcProgramId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("fileType", ColumnType::enumeration(&["Log", "Result", "Graph"]))
                .with_comment("Type of file Attachment"),
        )
        .with_field(
            FieldDef::new("fileName", ColumnType::varchar(255)).with_comment("Attachment filename"),
        )
        .with_field(
            FieldDef::new("filePath", ColumnType::varchar(255))
                .with_comment("Attachment filepath to disk storage"),
        )
        .with_field(
            FieldDef::new("recordTimeStamp", ColumnType::DateTime)
                .with_comment("Creation or last update date/time"),
        )
}

pub(crate) fn auto_proc_scaling() -> EntityDef {
    EntityDef::table("AutoProcScaling", "AutoProcScaling")
        .with_field(
            FieldDef::new("autoProcScalingId", ColumnType::int(10))
                .primary_key()
                .with_comment("Primary key (auto-incremented)"),
        )
        .with_field(
            FieldDef::new("autoProcId", ColumnType::int(10))
                .indexed()
                .with_comment("Related autoProc item (used by foreign key)")
                .references(
                    ForeignKey::to("AutoProc", "autoProcId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("recordTimeStamp", ColumnType::DateTime)
                .with_comment("Creation or last update date/time"),
        )
        .with_field(
            FieldDef::new("resolutionEllipsoidAxis11", ColumnType::float())
                .with_comment("Eigenvector for first diffraction limit, coord 1"),
        )
        .with_field(
            FieldDef::new("resolutionEllipsoidAxis12", ColumnType::float())
                .with_comment("Eigenvector for first diffraction limit, coord 2"),
        )
        .with_field(
            FieldDef::new("resolutionEllipsoidAxis13", ColumnType::float())
                .with_comment("Eigenvector for first diffraction limit, coord 3"),
        )
        .with_field(
            FieldDef::new("resolutionEllipsoidAxis21", ColumnType::float())
                .with_comment("Eigenvector for second diffraction limit, coord 1"),
        )
        .with_field(
            FieldDef::new("resolutionEllipsoidAxis22", ColumnType::float())
                .with_comment("Eigenvector for second diffraction limit, coord 2"),
        )
        .with_field(
            FieldDef::new("resolutionEllipsoidAxis23", ColumnType::float())
                .with_comment("Eigenvector for second diffraction limit, coord 3"),
        )
        .with_field(
            FieldDef::new("resolutionEllipsoidAxis31", ColumnType::float())
                .with_comment("Eigenvector for third diffraction limit, coord 1"),
        )
        .with_field(
            FieldDef::new("resolutionEllipsoidAxis32", ColumnType::float())
                .with_comment("Eigenvector for third diffraction limit, coord 2"),
        )
        .with_field(
            FieldDef::new("resolutionEllipsoidAxis33", ColumnType::float())
                .with_comment("Eigenvector for third diffraction limit, coord 3"),
        )
        .with_field(
            FieldDef::new("resolutionEllipsoidValue1", ColumnType::float())
                .with_comment("First (anisotropic) diffraction limit"),
        )
        .with_field(
            FieldDef::new("resolutionEllipsoidValue2", ColumnType::float())
                .with_comment("Second (anisotropic) diffraction limit"),
        )
        .with_field(
            FieldDef::new("resolutionEllipsoidValue3", ColumnType::float())
                .with_comment("Third (anisotropic) diffraction limit"),
        )
}

pub(crate) fn auto_proc_scaling_has_int() -> EntityDef {
    EntityDef::table("AutoProcScalingHasInt", "AutoProcScaling_has_Int")
        .with_field(
            FieldDef::new("autoProcScaling_has_IntId", ColumnType::int(10))
                .primary_key()
                .with_comment("Primary key (auto-incremented)"),
        )
        .with_field(
            FieldDef::new("autoProcScalingId", ColumnType::int(10))
                .indexed()
                .with_comment("AutoProcScaling item")
                .references(
                    ForeignKey::to("AutoProcScaling", "autoProcScalingId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("autoProcIntegrationId", ColumnType::int(10))
                .not_null()
                .indexed()
                .with_comment("AutoProcIntegration item")
                .references(
                    ForeignKey::to("AutoProcIntegration", "autoProcIntegrationId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("recordTimeStamp", ColumnType::DateTime)
                .with_comment("Creation or last update date/time"),
        )
}

pub(crate) fn auto_proc_scaling_statistics() -> EntityDef {
    EntityDef::table("AutoProcScalingStatistics", "AutoProcScalingStatistics")
        .with_field(
            FieldDef::new("autoProcScalingStatisticsId", ColumnType::int(10))
                .primary_key()
                .with_comment("Primary key (auto-incremented)"),
        )
        .with_field(
            FieldDef::new("autoProcScalingId", ColumnType::int(10))
                .indexed()
                .with_comment("Related autoProcScaling item (used by foreign key)")
                .references(
                    ForeignKey::to("AutoProcScaling", "autoProcScalingId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new(
                "scalingStatisticsType",
                ColumnType::enumeration(&["overall", "innerShell", "outerShell"]),
            )
                .not_null()
                .indexed()
                .with_default(DefaultValue::String("overall".into()))
                .with_comment("Scaling statistics type"),
        )
        .with_field(FieldDef::new("comments", ColumnType::varchar(255)).with_comment("Comments..."))
        .with_field(
            FieldDef::new("resolutionLimitLow", ColumnType::float())
                .with_comment("Low resolution limit"),
        )
        .with_field(
            FieldDef::new("resolutionLimitHigh", ColumnType::float())
                .with_comment("High resolution limit"),
        )
        .with_field(FieldDef::new("rMerge", ColumnType::float()).with_comment("Rmerge"))
        .with_field(
            FieldDef::new("rMeasWithinIPlusIMinus", ColumnType::float())
                .with_comment("Rmeas (within I+/I-)"),
        )
        .with_field(
            FieldDef::new("rMeasAllIPlusIMinus", ColumnType::float())
                .with_comment("Rmeas (all I+ & I-)"),
        )
        .with_field(
            FieldDef::new("rPimWithinIPlusIMinus", ColumnType::float())
                .with_comment("Rpim (within I+/I-) "),
        )
        .with_field(
            FieldDef::new("rPimAllIPlusIMinus", ColumnType::float())
                .with_comment("Rpim (all I+ & I-)"),
        )
        .with_field(
            FieldDef::new("fractionalPartialBias", ColumnType::float())
                .with_comment("Fractional partial bias"),
        )
        .with_field(
            FieldDef::new("nTotalObservations", ColumnType::int(11))
                .with_comment("Total number of observations"),
        )
        .with_field(
            FieldDef::new("nTotalUniqueObservations", ColumnType::int(11))
                .with_comment("Total number unique"),
        )
        .with_field(
            FieldDef::new("meanIOverSigI", ColumnType::float()).with_comment("Mean((I)/sd(I))"),
        )
        .with_field(FieldDef::new("completeness", ColumnType::float()).with_comment("Completeness"))
        .with_field(FieldDef::new("multiplicity", ColumnType::float()).with_comment("Multiplicity"))
        .with_field(
            FieldDef::new("anomalousCompleteness", ColumnType::float())
                .with_comment("Anomalous completeness"),
        )
        .with_field(
            FieldDef::new("anomalousMultiplicity", ColumnType::float())
                .with_comment("Anomalous multiplicity"),
        )
        .with_field(
            FieldDef::new("recordTimeStamp", ColumnType::DateTime)
                .with_comment("Creation or last update date/time"),
        )
        .with_field(
            FieldDef::new("anomalous", ColumnType::tinyint(1))
                .with_default(DefaultValue::Int(0))
                .with_comment("boolean type:0 noanoum - 1 anoum"),
        )
        .with_field(
            FieldDef::new("ccHalf", ColumnType::float()).with_comment("information from XDS"),
        )
        .with_field(FieldDef::new("ccAno", ColumnType::float()))
        .with_field(FieldDef::new("sigAno", ColumnType::varchar(45)))
        .with_field(FieldDef::new("isa", ColumnType::varchar(45)))
        .with_field(
            FieldDef::new("completenessSpherical", ColumnType::float())
                .with_comment("Completeness calculated assuming isotropic diffraction"),
        )
        .with_field(
            FieldDef::new("completenessEllipsoidal", ColumnType::float())
                .with_comment("Completeness calculated allowing for anisotropic diffraction"),
        )
        .with_field(
            FieldDef::new("anomalousCompletenessSpherical", ColumnType::float())
                .with_comment("Anomalous completeness calculated assuming isotropic diffraction"),
        )
        .with_field(
            FieldDef::new("anomalousCompletenessEllipsoidal", ColumnType::float())
                .with_comment(
                    "Anisotropic completeness calculated allowing for anisotropic diffraction",
                ),
        )
}

pub(crate) fn auto_proc_status() -> EntityDef {
    EntityDef::table("AutoProcStatus", "AutoProcStatus")
        .with_comment("AutoProcStatus table is linked to AutoProcIntegration")
        .with_field(
            FieldDef::new("autoProcStatusId", ColumnType::int(11))
                .primary_key()
                .with_comment("Primary key (auto-incremented)"),
        )
        .with_field(
            FieldDef::new("autoProcIntegrationId", ColumnType::int(10))
                .not_null()
                .indexed()
                .references(
                    ForeignKey::to("AutoProcIntegration", "autoProcIntegrationId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new(
                "step",
                ColumnType::enumeration(&[
                    "Indexing",
                    "Integration",
                    "Correction",
                    "Scaling",
                    "Importing",
                ]),
            )
                .not_null()
                .with_comment("autoprocessing step"),
        )
        .with_field(
            FieldDef::new("status", ColumnType::enumeration(&["Launched", "Successful", "Failed"]))
                .not_null()
                .with_comment("autoprocessing status"),
        )
        .with_field(FieldDef::new("comments", ColumnType::varchar(1024)).with_comment("comments"))
        .with_field(
            FieldDef::new("bltimeStamp", ColumnType::Timestamp)
                .not_null()
                .with_default(DefaultValue::CurrentTimestamp),
        )
}
