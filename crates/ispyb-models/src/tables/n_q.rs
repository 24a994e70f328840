//! Table entities, N to Q.

use ispyb_core::catalog::{
    ColumnType, DefaultValue, EntityDef, FieldDef, ForeignKey, ReferentialAction,
};

pub(crate) fn particle() -> EntityDef {
    EntityDef::table("Particle", "Particle")
        .with_field(FieldDef::new("particleId", ColumnType::int(10)).primary_key())
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
        .with_field(FieldDef::new("x", ColumnType::float()))
        .with_field(FieldDef::new("y", ColumnType::float()))
}

pub(crate) fn particle_classification() -> EntityDef {
    EntityDef::table("ParticleClassification", "ParticleClassification")
        .with_comment("Results of 2D or 3D classification")
        .with_field(FieldDef::new("particleClassificationId", ColumnType::int(10)).primary_key())
        .with_field(
            FieldDef::new("particleClassificationGroupId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("ParticleClassificationGroup", "particleClassificationGroupId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("classNumber", ColumnType::int(10))
                .with_comment("Identified of the class. A unique ID given by Relion"),
        )
        .with_field(
            FieldDef::new("classImageFullPath", ColumnType::varchar(255))
                .with_comment("The PNG of the class"),
        )
        .with_field(
            FieldDef::new("particlesPerClass", ColumnType::int(10))
                .with_comment(
                    "Number of particles within the selected class, can then be used together with the total number above to calculate the percentage",
                ),
        )
        .with_field(FieldDef::new("classDistribution", ColumnType::float()))
        .with_field(FieldDef::new("rotationAccuracy", ColumnType::float()))
        .with_field(
            FieldDef::new("translationAccuracy", ColumnType::float())
                .with_comment("Unit: Angstroms"),
        )
        .with_field(
            FieldDef::new("estimatedResolution", ColumnType::float())
                .with_comment("Unit: Angstroms"),
        )
        .with_field(FieldDef::new("overallFourierCompleteness", ColumnType::float()))
}

pub(crate) fn particle_classification_group() -> EntityDef {
    EntityDef::table("ParticleClassificationGroup", "ParticleClassificationGroup")
        .with_field(
            FieldDef::new("particleClassificationGroupId", ColumnType::int(10)).primary_key(),
        )
        .with_field(
            FieldDef::new("particlePickerId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("ParticlePicker", "particlePickerId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("programId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("AutoProcProgram", "autoProcProgramId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("type", ColumnType::enumeration(&["2D", "3D"]))
                .with_comment("Indicates the type of particle classification"),
        )
        .with_field(
            FieldDef::new("batchNumber", ColumnType::int(10))
                .with_comment("Corresponding to batch number"),
        )
        .with_field(
            FieldDef::new("numberOfParticlesPerBatch", ColumnType::int(10))
                .with_comment("total number of particles per batch (a large integer)"),
        )
        .with_field(FieldDef::new("numberOfClassesPerBatch", ColumnType::int(10)))
        .with_field(FieldDef::new("symmetry", ColumnType::varchar(20)))
}

pub(crate) fn particle_picker() -> EntityDef {
    EntityDef::table("ParticlePicker", "ParticlePicker")
        .with_comment("An instance of a particle picker program that was run")
        .with_field(FieldDef::new("particlePickerId", ColumnType::int(10)).primary_key())
        .with_field(
            FieldDef::new("programId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("AutoProcProgram", "autoProcProgramId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("firstMotionCorrectionId", ColumnType::int(11))
                .indexed()
                .references(
                    ForeignKey::to("MotionCorrection", "motionCorrectionId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("particlePickingTemplate", ColumnType::varchar(255))
                .with_comment("Cryolo model"),
        )
        .with_field(FieldDef::new("particleDiameter", ColumnType::float()).with_comment("Unit: nm"))
        .with_field(FieldDef::new("numberOfParticles", ColumnType::int(10)))
        .with_field(
            FieldDef::new("summaryImageFullPath", ColumnType::varchar(255))
                .with_comment("Generated summary micrograph image with highlighted particles"),
        )
}

pub(crate) fn pdb() -> EntityDef {
    EntityDef::table("PDB", "PDB")
        .with_field(FieldDef::new("pdbId", ColumnType::int(10)).primary_key())
        .with_field(FieldDef::new("name", ColumnType::varchar(255)))
        .with_field(FieldDef::new("contents", ColumnType::medium_text()))
        .with_field(FieldDef::new("code", ColumnType::varchar(4)))
}

pub(crate) fn pdb_entry() -> EntityDef {
    EntityDef::table("PDBEntry", "PDBEntry")
        .with_field(FieldDef::new("pdbEntryId", ColumnType::int(10)).primary_key())
        .with_field(
            FieldDef::new("autoProcProgramId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("AutoProcProgram", "autoProcProgramId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("code", ColumnType::varchar(4)))
        .with_field(FieldDef::new("cell_a", ColumnType::float()))
        .with_field(FieldDef::new("cell_b", ColumnType::float()))
        .with_field(FieldDef::new("cell_c", ColumnType::float()))
        .with_field(FieldDef::new("cell_alpha", ColumnType::float()))
        .with_field(FieldDef::new("cell_beta", ColumnType::float()))
        .with_field(FieldDef::new("cell_gamma", ColumnType::float()))
        .with_field(FieldDef::new("resolution", ColumnType::float()))
        .with_field(FieldDef::new("pdbTitle", ColumnType::varchar(255)))
        .with_field(FieldDef::new("pdbAuthors", ColumnType::varchar(600)))
        .with_field(FieldDef::new("pdbDate", ColumnType::DateTime))
        .with_field(FieldDef::new("pdbBeamlineName", ColumnType::varchar(50)))
        .with_field(FieldDef::new("beamlines", ColumnType::varchar(100)))
        .with_field(FieldDef::new("distance", ColumnType::float()))
        .with_field(FieldDef::new("autoProcCount", ColumnType::smallint(6)))
        .with_field(FieldDef::new("dataCollectionCount", ColumnType::smallint(6)))
        .with_field(FieldDef::new("beamlineMatch", ColumnType::tinyint(1)))
        .with_field(FieldDef::new("authorMatch", ColumnType::tinyint(1)))
}

pub(crate) fn pdb_entry_has_auto_proc_program() -> EntityDef {
    EntityDef::table("PDBEntryHasAutoProcProgram", "PDBEntry_has_AutoProcProgram")
        .with_field(FieldDef::new("pdbEntryHasAutoProcId", ColumnType::int(10)).primary_key())
        .with_field(
            FieldDef::new("pdbEntryId", ColumnType::int(10))
                .not_null()
                .indexed()
                .references(
                    ForeignKey::to("PDBEntry", "pdbEntryId").on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("autoProcProgramId", ColumnType::int(10))
                .not_null()
                .indexed()
                .references(
                    ForeignKey::to("AutoProcProgram", "autoProcProgramId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("distance", ColumnType::float()))
}

pub(crate) fn permission() -> EntityDef {
    EntityDef::table("Permission", "Permission")
        .with_field(FieldDef::new("permissionId", ColumnType::int(10)).primary_key())
        .with_field(FieldDef::new("type", ColumnType::varchar(15)).not_null())
        .with_field(FieldDef::new("description", ColumnType::varchar(100)))
}

pub(crate) fn person() -> EntityDef {
    EntityDef::table("Person", "Person")
        .with_field(FieldDef::new("personId", ColumnType::int(10)).primary_key())
        .with_field(
            FieldDef::new("laboratoryId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("Laboratory", "laboratoryId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("siteId", ColumnType::int(11)).indexed())
        .with_field(FieldDef::new("personUUID", ColumnType::varchar(45)))
        .with_field(FieldDef::new("familyName", ColumnType::varchar(100)).indexed())
        .with_field(FieldDef::new("givenName", ColumnType::varchar(45)))
        .with_field(FieldDef::new("title", ColumnType::varchar(45)))
        .with_field(FieldDef::new("emailAddress", ColumnType::varchar(60)))
        .with_field(FieldDef::new("phoneNumber", ColumnType::varchar(45)))
        .with_field(FieldDef::new("login", ColumnType::varchar(45)).indexed())
        .with_field(FieldDef::new("passwd", ColumnType::varchar(45)))
        .with_field(FieldDef::new("faxNumber", ColumnType::varchar(45)))
        .with_field(
            FieldDef::new("recordTimeStamp", ColumnType::Timestamp)
                .not_null()
                .with_default(DefaultValue::CurrentTimestamp)
                .with_comment("Creation or last update date/time"),
        )
        .with_field(FieldDef::new("externalId", ColumnType::binary(16)))
        .with_field(FieldDef::new("cache", ColumnType::text()))
}

pub(crate) fn phasing() -> EntityDef {
    EntityDef::table("Phasing", "Phasing")
        .with_field(
            FieldDef::new("phasingId", ColumnType::int(10))
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
                ColumnType::enumeration(&["solvent flattening", "solvent flipping"]),
            )
                .with_comment("phasing method"),
        )
        .with_field(FieldDef::new("solventContent", ColumnType::decimal()))
        .with_field(FieldDef::new("enantiomorph", ColumnType::tinyint(1)).with_comment("0 or 1"))
        .with_field(FieldDef::new("lowRes", ColumnType::decimal()))
        .with_field(FieldDef::new("highRes", ColumnType::decimal()))
        .with_field(
            FieldDef::new("recordTimeStamp", ColumnType::Timestamp)
                .not_null()
                .with_default(DefaultValue::CurrentTimestamp),
        )
}

pub(crate) fn phasing_analysis() -> EntityDef {
    EntityDef::table("PhasingAnalysis", "PhasingAnalysis")
        .with_field(
            FieldDef::new("phasingAnalysisId", ColumnType::int(10))
                .primary_key()
                .with_comment("Primary key (auto-incremented)"),
        )
        .with_field(
            FieldDef::new("recordTimeStamp", ColumnType::DateTime)
                .with_comment("Creation or last update date/time"),
        )
}

pub(crate) fn phasing_has_scaling() -> EntityDef {
    EntityDef::table("PhasingHasScaling", "Phasing_has_Scaling")
        .with_field(
            FieldDef::new("phasingHasScalingId", ColumnType::int(10))
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
            FieldDef::new("autoProcScalingId", ColumnType::int(10))
                .not_null()
                .indexed()
                .with_comment("Related autoProcScaling item")
                .references(
                    ForeignKey::to("AutoProcScaling", "autoProcScalingId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("datasetNumber", ColumnType::int(11))
                .with_comment("serial number of the dataset and always reserve 0 for the reference"),
        )
        .with_field(
            FieldDef::new("recordTimeStamp", ColumnType::Timestamp)
                .not_null()
                .with_default(DefaultValue::CurrentTimestamp),
        )
}

pub(crate) fn phasing_program_attachment() -> EntityDef {
    EntityDef::table("PhasingProgramAttachment", "PhasingProgramAttachment")
        .with_field(
            FieldDef::new("phasingProgramAttachmentId", ColumnType::int(10))
                .primary_key()
                .with_comment("Primary key (auto-incremented)"),
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
            FieldDef::new(
                "fileType",
                ColumnType::enumeration(&[
                    "DSIGMA_RESOLUTION",
                    "OCCUPANCY_SITENUMBER",
                    "CONTRAST_CYCLE",
                    "CCALL_CCWEAK",
                    "IMAGE",
                    "Map",
                    "Logfile",
                    "PDB",
                    "CSV",
                    "INS",
                    "RES",
                    "TXT",
                ]),
            )
                .with_comment("file type"),
        )
        .with_field(FieldDef::new("fileName", ColumnType::varchar(45)).with_comment("file name"))
        .with_field(FieldDef::new("filePath", ColumnType::varchar(255)).with_comment("file path"))
        .with_field(FieldDef::new("input", ColumnType::tinyint(1)))
        .with_field(
            FieldDef::new("recordTimeStamp", ColumnType::Timestamp)
                .with_default(DefaultValue::CurrentTimestamp)
                .with_comment("Creation or last update date/time"),
        )
}

pub(crate) fn phasing_program_run() -> EntityDef {
    EntityDef::table("PhasingProgramRun", "PhasingProgramRun")
        .with_field(
            FieldDef::new("phasingProgramRunId", ColumnType::int(10))
                .primary_key()
                .with_comment("Primary key (auto-incremented)"),
        )
        .with_field(
            FieldDef::new("phasingCommandLine", ColumnType::varchar(255))
                .with_comment("Command line for phasing"),
        )
        .with_field(
            FieldDef::new("phasingPrograms", ColumnType::varchar(255))
                .with_comment("Phasing programs (comma separated)"),
        )
        .with_field(
            FieldDef::new("phasingStatus", ColumnType::tinyint(1))
                .with_comment("success (1) / fail (0)"),
        )
        .with_field(
            FieldDef::new("phasingMessage", ColumnType::varchar(255))
                .with_comment("warning, error,..."),
        )
        .with_field(
            FieldDef::new("phasingStartTime", ColumnType::DateTime)
                .with_comment("Processing start time"),
        )
        .with_field(
            FieldDef::new("phasingEndTime", ColumnType::DateTime)
                .with_comment("Processing end time"),
        )
        .with_field(
            FieldDef::new("phasingEnvironment", ColumnType::varchar(255))
                .with_comment("Cpus, Nodes,..."),
        )
        .with_field(
            FieldDef::new("phasingDirectory", ColumnType::varchar(255))
                .with_comment("Directory of execution"),
        )
        .with_field(
            FieldDef::new("recordTimeStamp", ColumnType::Timestamp)
                .with_default(DefaultValue::CurrentTimestamp)
                .with_comment("Creation or last update date/time"),
        )
}

pub(crate) fn phasing_statistics() -> EntityDef {
    EntityDef::table("PhasingStatistics", "PhasingStatistics")
        .with_field(
            FieldDef::new("phasingStatisticsId", ColumnType::int(10))
                .primary_key()
                .with_comment("Primary key (auto-incremented)"),
        )
        .with_field(
            FieldDef::new("phasingHasScalingId1", ColumnType::int(10))
                .indexed()
                .with_comment("the dataset in question")
                .references(
                    ForeignKey::to("PhasingHasScaling", "phasingHasScalingId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("phasingHasScalingId2", ColumnType::int(10))
                .indexed()
                .with_comment(
                    "if this is MIT or MAD, which scaling are being compared, null otherwise",
                )
                .references(
                    ForeignKey::to("PhasingHasScaling", "phasingHasScalingId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("phasingStepId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("PhasingStep", "phasingStepId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("numberOfBins", ColumnType::int(11))
                .with_comment("the total number of bins"),
        )
        .with_field(
            FieldDef::new("binNumber", ColumnType::int(11))
                .with_comment("binNumber, 999 for overall"),
        )
        .with_field(
            FieldDef::new("lowRes", ColumnType::decimal())
                .with_comment("low resolution cutoff of this binfloat"),
        )
        .with_field(
            FieldDef::new("highRes", ColumnType::decimal())
                .with_comment("high resolution cutoff of this binfloat"),
        )
        .with_field(
            FieldDef::new(
                "metric",
                ColumnType::enumeration(&[
                    "Rcullis",
                    "Average Fragment Length",
                    "Chain Count",
                    "Residues Count",
                    "CC",
                    "PhasingPower",
                    "FOM",
                    "<d\"/sig>",
                    "Best CC",
                    "CC(1/2)",
                    "Weak CC",
                    "CFOM",
                    "Pseudo_free_CC",
                    "CC of partial model",
                    "Start R-work",
                    "Start R-free",
                    "Final R-work",
                    "Final R-free",
                ]),
            )
                .with_comment("metric"),
        )
        .with_field(
            FieldDef::new("statisticsValue", ColumnType::decimal())
                .with_comment("the statistics value"),
        )
        .with_field(FieldDef::new("nReflections", ColumnType::int(11)))
        .with_field(
            FieldDef::new("recordTimeStamp", ColumnType::Timestamp)
                .with_default(DefaultValue::CurrentTimestamp)
                .with_comment("Creation or last update date/time"),
        )
}

pub(crate) fn phasing_step() -> EntityDef {
    EntityDef::table("PhasingStep", "PhasingStep")
        .with_field(FieldDef::new("phasingStepId", ColumnType::int(10)).primary_key())
        .with_field(FieldDef::new("previousPhasingStepId", ColumnType::int(10)))
        .with_field(
            FieldDef::new("programRunId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("PhasingProgramRun", "phasingProgramRunId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("spaceGroupId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("SpaceGroup", "spaceGroupId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("autoProcScalingId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("AutoProcScaling", "autoProcScalingId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("phasingAnalysisId", ColumnType::int(10)).indexed())
        .with_field(
            FieldDef::new(
                "phasingStepType",
                ColumnType::enumeration(&[
                    "PREPARE",
                    "SUBSTRUCTUREDETERMINATION",
                    "PHASING",
                    "MODELBUILDING",
                    "REFINEMENT",
                    "LIGAND_FIT",
                ]),
            ),
        )
        .with_field(FieldDef::new("method", ColumnType::varchar(45)))
        .with_field(FieldDef::new("solventContent", ColumnType::varchar(45)))
        .with_field(FieldDef::new("enantiomorph", ColumnType::varchar(45)))
        .with_field(FieldDef::new("lowRes", ColumnType::varchar(45)))
        .with_field(FieldDef::new("highRes", ColumnType::varchar(45)))
        .with_field(FieldDef::new("groupName", ColumnType::varchar(45)))
        .with_field(
            FieldDef::new("recordTimeStamp", ColumnType::Timestamp)
                .not_null()
                .with_default(DefaultValue::CurrentTimestamp),
        )
}

pub(crate) fn php_session() -> EntityDef {
    EntityDef::table("PHPSession", "PHPSession")
        .with_field(FieldDef::new("id", ColumnType::varchar(50)).primary_key())
        .with_field(FieldDef::new("accessDate", ColumnType::DateTime))
        .with_field(FieldDef::new("data", ColumnType::varchar(4000)))
}

pub(crate) fn plate_group() -> EntityDef {
    EntityDef::table("PlateGroup", "PlateGroup")
        .with_field(FieldDef::new("plateGroupId", ColumnType::int(11)).primary_key())
        .with_field(FieldDef::new("name", ColumnType::varchar(255)))
        .with_field(FieldDef::new("storageTemperature", ColumnType::varchar(45)))
}

pub(crate) fn plate_type() -> EntityDef {
    EntityDef::table("PlateType", "PlateType")
        .with_field(FieldDef::new("PlateTypeId", ColumnType::int(11)).primary_key())
        .with_field(FieldDef::new("experimentId", ColumnType::int(11)).indexed())
        .with_field(FieldDef::new("name", ColumnType::varchar(45)))
        .with_field(FieldDef::new("description", ColumnType::varchar(45)))
        .with_field(FieldDef::new("shape", ColumnType::varchar(45)))
        .with_field(FieldDef::new("rowCount", ColumnType::int(11)))
        .with_field(FieldDef::new("columnCount", ColumnType::int(11)))
}

pub(crate) fn position() -> EntityDef {
    EntityDef::table("Position", "Position")
        .with_field(
            FieldDef::new("positionId", ColumnType::int(10))
                .primary_key()
                .with_comment("Primary key (auto-incremented)"),
        )
        .with_field(
            FieldDef::new("relativePositionId", ColumnType::int(10))
                .indexed()
                .with_comment("relative position, null otherwise")
                .references(
                    ForeignKey::to("Position", "positionId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("posX", ColumnType::decimal()))
        .with_field(FieldDef::new("posY", ColumnType::decimal()))
        .with_field(FieldDef::new("posZ", ColumnType::decimal()))
        .with_field(FieldDef::new("scale", ColumnType::decimal()))
        .with_field(
            FieldDef::new("recordTimeStamp", ColumnType::DateTime)
                .with_comment("Creation or last update date/time"),
        )
}

pub(crate) fn prepare_phasing_data() -> EntityDef {
    EntityDef::table("PreparePhasingData", "PreparePhasingData")
        .with_field(
            FieldDef::new("preparePhasingDataId", ColumnType::int(10))
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

pub(crate) fn project() -> EntityDef {
    EntityDef::table("Project", "Project")
        .with_field(FieldDef::new("projectId", ColumnType::int(10)).primary_key())
        .with_field(
            FieldDef::new("personId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("Person", "personId").on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("title", ColumnType::varchar(200)))
        .with_field(FieldDef::new("acronym", ColumnType::varchar(100)))
        .with_field(FieldDef::new("owner", ColumnType::varchar(50)))
}

pub(crate) fn project_has_user() -> EntityDef {
    EntityDef::table("ProjectHasUser", "Project_has_User")
        .with_field(FieldDef::new("projecthasuserid", ColumnType::int(10)).primary_key())
        .with_field(
            FieldDef::new("projectid", ColumnType::int(10))
                .not_null()
                .indexed()
                .references(
                    ForeignKey::to("Project", "projectId").on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("username", ColumnType::varchar(15)))
}

pub(crate) fn proposal() -> EntityDef {
    EntityDef::table("Proposal", "Proposal")
        .with_field(FieldDef::new("proposalId", ColumnType::int(10)).primary_key())
        .with_field(
            FieldDef::new("personId", ColumnType::int(10))
                .not_null()
                .indexed()
                .with_default(DefaultValue::Int(0))
                .references(
                    ForeignKey::to("Person", "personId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("title", ColumnType::varchar(200)))
        .with_field(FieldDef::new("proposalCode", ColumnType::varchar(45)))
        .with_field(FieldDef::new("proposalNumber", ColumnType::varchar(45)))
        .with_field(
            FieldDef::new("proposalType", ColumnType::varchar(2))
                .with_comment("Proposal type: MX, BX"),
        )
        .with_field(
            FieldDef::new("bltimeStamp", ColumnType::Timestamp)
                .not_null()
                .with_default(DefaultValue::CurrentTimestamp),
        )
        .with_field(FieldDef::new("externalId", ColumnType::binary(16)))
        .with_field(
            FieldDef::new("state", ColumnType::enumeration(&["Open", "Closed", "Cancelled"]))
                .with_default(DefaultValue::String("Open".into())),
        )
}

pub(crate) fn proposal_has_person() -> EntityDef {
    EntityDef::table("ProposalHasPerson", "ProposalHasPerson")
        .with_field(FieldDef::new("proposalHasPersonId", ColumnType::int(10)).primary_key())
        .with_field(
            FieldDef::new("proposalId", ColumnType::int(10))
                .not_null()
                .indexed()
                .references(
                    ForeignKey::to("Proposal", "proposalId").on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("personId", ColumnType::int(10))
                .not_null()
                .indexed()
                .references(
                    ForeignKey::to("Person", "personId").on_delete(ReferentialAction::Cascade),
                ),
        )
}

pub(crate) fn protein() -> EntityDef {
    EntityDef::table("Protein", "Protein")
        .with_field(FieldDef::new("proteinId", ColumnType::int(10)).primary_key())
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
        .with_field(FieldDef::new("name", ColumnType::varchar(255)))
        .with_field(FieldDef::new("acronym", ColumnType::varchar(45)).indexed())
        .with_field(
            FieldDef::new("description", ColumnType::text())
                .with_comment("A description/summary using words and sentences"),
        )
        .with_field(
            FieldDef::new("hazardGroup", ColumnType::tinyint(3))
                .not_null()
                .with_default(DefaultValue::Int(1))
                .with_comment("A.k.a. risk group"),
        )
        .with_field(
            FieldDef::new("containmentLevel", ColumnType::tinyint(3))
                .not_null()
                .with_default(DefaultValue::Int(1))
                .with_comment(
                    "A.k.a. biosafety level, which indicates the level of containment required",
                ),
        )
        .with_field(
            FieldDef::new("safetyLevel", ColumnType::enumeration(&["GREEN", "YELLOW", "RED"])),
        )
        .with_field(FieldDef::new("molecularMass", ColumnType::decimal()))
        .with_field(FieldDef::new("proteinType", ColumnType::varchar(45)))
        .with_field(FieldDef::new("sequence", ColumnType::text()))
        .with_field(FieldDef::new("personId", ColumnType::int(10)).indexed())
        .with_field(
            FieldDef::new("bltimeStamp", ColumnType::Timestamp)
                .not_null()
                .with_default(DefaultValue::CurrentTimestamp),
        )
        .with_field(
            FieldDef::new("isCreatedBySampleSheet", ColumnType::tinyint(1))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("externalId", ColumnType::binary(16)))
        .with_field(
            FieldDef::new("componentTypeId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("ComponentType", "componentTypeId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("modId", ColumnType::varchar(20)))
        .with_field(FieldDef::new("concentrationTypeId", ColumnType::int(10)))
        .with_field(
            FieldDef::new("global", ColumnType::tinyint(1)).with_default(DefaultValue::Int(0)),
        )
}

pub(crate) fn protein_has_lattice() -> EntityDef {
    EntityDef::table("ProteinHasLattice", "Protein_has_Lattice")
        .with_field(
            FieldDef::new("proteinId", ColumnType::int(10))
                .primary_key()
                .references(
                    ForeignKey::to("Protein", "proteinId").on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("cell_a", ColumnType::decimal()))
        .with_field(FieldDef::new("cell_b", ColumnType::decimal()))
        .with_field(FieldDef::new("cell_c", ColumnType::decimal()))
        .with_field(FieldDef::new("cell_alpha", ColumnType::decimal()))
        .with_field(FieldDef::new("cell_beta", ColumnType::decimal()))
        .with_field(FieldDef::new("cell_gamma", ColumnType::decimal()))
}

pub(crate) fn protein_has_pdb() -> EntityDef {
    EntityDef::table("ProteinHasPDB", "Protein_has_PDB")
        .with_field(FieldDef::new("proteinhaspdbid", ColumnType::int(10)).primary_key())
        .with_field(
            FieldDef::new("proteinid", ColumnType::int(10))
                .not_null()
                .indexed()
                .references(
                    ForeignKey::to("Protein", "proteinId").on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("pdbid", ColumnType::int(10))
                .not_null()
                .indexed()
                .references(ForeignKey::to("PDB", "pdbId").on_delete(ReferentialAction::Cascade)),
        )
}
