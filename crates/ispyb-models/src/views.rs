//! Read-only reporting views.
//!
//! Views carry typed columns but no primary key and no relationships.

use ispyb_core::catalog::{ColumnType, DefaultValue, EntityDef, FieldDef};

/// Every reporting view, ordered by name.
pub(crate) fn entities() -> Vec<EntityDef> {
    vec![
        v_analysis_info(),
        v_datacollection(),
        v_datacollection_autoprocintegration(),
        v_datacollection_phasing(),
        v_datacollection_phasing_program_run(),
        v_datacollection_summary(),
        v_datacollection_summary_autoprocintegration(),
        v_datacollection_summary_datacollectiongroup(),
        v_datacollection_summary_phasing(),
        v_datacollection_summary_screening(),
        v_dewar(),
        v_dewar_summary(),
        v_dewar_beamline(),
        v_dewar_beamline_by_week(),
        v_dewar_by_week(),
        v_dewar_by_week_total(),
        v_dewar_list(),
        v_dewar_proposal_code(),
        v_dewar_proposal_code_by_week(),
        v_em_2dclassification(),
        v_em_classification(),
        v_em_movie(),
        v_em_stats(),
        v_energy_scan(),
        v_hour(),
        v_log4_stat(),
        v_logon_by_hour(),
        v_logon_by_month_day(),
        v_logon_by_week(),
        v_logon_by_week_day(),
        v_month_day(),
        v_mx_autoprocessing_stats(),
        v_mx_experiment_stats(),
        v_mx_sample(),
        v_phasing(),
        v_sample(),
        v_sample_by_week(),
        v_saxs_datacollection(),
        v_session(),
        v_tracking_shipment_history(),
        v_week(),
        v_week_day(),
        v_xfe_fluorescence_spectrum(),
    ]
}

pub(crate) fn v_analysis_info() -> EntityDef {
    EntityDef::view("V_AnalysisInfo", "V_AnalysisInfo")
        .with_field(FieldDef::new("experimentCreationDate", ColumnType::DateTime))
        .with_field(FieldDef::new("timeStart", ColumnType::varchar(45)))
        .with_field(
            FieldDef::new("dataCollectionId", ColumnType::int(11))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new("measurementId", ColumnType::int(11)).with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new("proposalId", ColumnType::int(10)).with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("proposalCode", ColumnType::varchar(45)))
        .with_field(FieldDef::new("proposalNumber", ColumnType::varchar(45)))
        .with_field(FieldDef::new("priorityLevelId", ColumnType::int(11)))
        .with_field(FieldDef::new("code", ColumnType::varchar(100)))
        .with_field(FieldDef::new("exposureTemperature", ColumnType::varchar(45)))
        .with_field(FieldDef::new("transmission", ColumnType::varchar(45)))
        .with_field(FieldDef::new("measurementComments", ColumnType::varchar(512)))
        .with_field(FieldDef::new("experimentComments", ColumnType::varchar(512)))
        .with_field(
            FieldDef::new("experimentId", ColumnType::int(11)).with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("experimentType", ColumnType::varchar(128)))
        .with_field(FieldDef::new("conc", ColumnType::varchar(45)))
        .with_field(FieldDef::new("bufferAcronym", ColumnType::varchar(45)))
        .with_field(FieldDef::new("macromoleculeAcronym", ColumnType::varchar(45)))
        .with_field(
            FieldDef::new("bufferId", ColumnType::int(11)).with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new("macromoleculeId", ColumnType::int(11))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("subtractedFilePath", ColumnType::varchar(255)))
        .with_field(FieldDef::new("rgGuinier", ColumnType::varchar(45)))
        .with_field(FieldDef::new("firstPointUsed", ColumnType::varchar(45)))
        .with_field(FieldDef::new("lastPointUsed", ColumnType::varchar(45)))
        .with_field(FieldDef::new("I0", ColumnType::varchar(45)))
        .with_field(FieldDef::new("isagregated", ColumnType::varchar(45)))
        .with_field(FieldDef::new("subtractionId", ColumnType::int(11)))
        .with_field(FieldDef::new("rgGnom", ColumnType::varchar(45)))
        .with_field(FieldDef::new("total", ColumnType::varchar(45)))
        .with_field(FieldDef::new("dmax", ColumnType::varchar(45)))
        .with_field(FieldDef::new("volume", ColumnType::varchar(45)))
        .with_field(FieldDef::new("i0stdev", ColumnType::varchar(45)))
        .with_field(FieldDef::new("quality", ColumnType::varchar(45)))
        .with_field(FieldDef::new("substractionCreationTime", ColumnType::DateTime))
        .with_field(FieldDef::new("bufferBeforeMeasurementId", ColumnType::int(11)))
        .with_field(FieldDef::new("bufferAfterMeasurementId", ColumnType::int(11)))
        .with_field(FieldDef::new("bufferBeforeFramesMerged", ColumnType::varchar(45)))
        .with_field(FieldDef::new("bufferBeforeMergeId", ColumnType::int(11)))
        .with_field(FieldDef::new("bufferBeforeAverageFilePath", ColumnType::varchar(255)))
        .with_field(FieldDef::new("sampleMeasurementId", ColumnType::int(11)))
        .with_field(FieldDef::new("sampleMergeId", ColumnType::int(11)))
        .with_field(FieldDef::new("averageFilePath", ColumnType::varchar(255)))
        .with_field(FieldDef::new("framesMerge", ColumnType::varchar(45)))
        .with_field(FieldDef::new("framesCount", ColumnType::varchar(45)))
        .with_field(FieldDef::new("bufferAfterFramesMerged", ColumnType::varchar(45)))
        .with_field(FieldDef::new("bufferAfterMergeId", ColumnType::int(11)))
        .with_field(FieldDef::new("bufferAfterAverageFilePath", ColumnType::varchar(255)))
        .with_field(FieldDef::new("modelListId1", ColumnType::int(11)))
        .with_field(FieldDef::new("nsdFilePath", ColumnType::varchar(255)))
        .with_field(FieldDef::new("modelListId2", ColumnType::int(11)))
        .with_field(FieldDef::new("chi2RgFilePath", ColumnType::varchar(255)))
        .with_field(FieldDef::new("averagedModel", ColumnType::varchar(255)))
        .with_field(FieldDef::new("averagedModelId", ColumnType::int(11)))
        .with_field(FieldDef::new("rapidShapeDeterminationModel", ColumnType::varchar(255)))
        .with_field(FieldDef::new("rapidShapeDeterminationModelId", ColumnType::int(11)))
        .with_field(FieldDef::new("shapeDeterminationModel", ColumnType::varchar(255)))
        .with_field(FieldDef::new("shapeDeterminationModelId", ColumnType::int(11)))
        .with_field(FieldDef::new("abInitioModelId", ColumnType::int(11)))
        .with_field(FieldDef::new("comments", ColumnType::varchar(512)))
}

pub(crate) fn v_datacollection() -> EntityDef {
    EntityDef::view("v_datacollection", "v_datacollection")
        .with_field(
            FieldDef::new("dataCollectionId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("dataCollectionGroupId", ColumnType::int(11)))
        .with_field(FieldDef::new("strategySubWedgeOrigId", ColumnType::int(10)))
        .with_field(FieldDef::new("detectorId", ColumnType::int(11)))
        .with_field(FieldDef::new("blSubSampleId", ColumnType::int(10)))
        .with_field(FieldDef::new("dataCollectionNumber", ColumnType::int(10)))
        .with_field(FieldDef::new("startTime", ColumnType::DateTime))
        .with_field(FieldDef::new("endTime", ColumnType::DateTime))
        .with_field(FieldDef::new("runStatus", ColumnType::varchar(45)))
        .with_field(FieldDef::new("axisStart", ColumnType::float()))
        .with_field(FieldDef::new("axisEnd", ColumnType::float()))
        .with_field(FieldDef::new("axisRange", ColumnType::float()))
        .with_field(FieldDef::new("overlap", ColumnType::float()))
        .with_field(FieldDef::new("numberOfImages", ColumnType::int(10)))
        .with_field(FieldDef::new("startImageNumber", ColumnType::int(10)))
        .with_field(FieldDef::new("numberOfPasses", ColumnType::int(10)))
        .with_field(FieldDef::new("exposureTime", ColumnType::float()))
        .with_field(FieldDef::new("imageDirectory", ColumnType::varchar(255)))
        .with_field(FieldDef::new("imagePrefix", ColumnType::varchar(100)))
        .with_field(FieldDef::new("imageSuffix", ColumnType::varchar(45)))
        .with_field(FieldDef::new("fileTemplate", ColumnType::varchar(255)))
        .with_field(FieldDef::new("wavelength", ColumnType::float()))
        .with_field(FieldDef::new("resolution", ColumnType::float()))
        .with_field(FieldDef::new("detectorDistance", ColumnType::float()))
        .with_field(FieldDef::new("xBeam", ColumnType::float()))
        .with_field(FieldDef::new("yBeam", ColumnType::float()))
        .with_field(FieldDef::new("xBeamPix", ColumnType::float()))
        .with_field(FieldDef::new("yBeamPix", ColumnType::float()))
        .with_field(FieldDef::new("comments", ColumnType::varchar(1024)))
        .with_field(
            FieldDef::new("printableForReport", ColumnType::tinyint(3))
                .with_default(DefaultValue::Int(1)),
        )
        .with_field(FieldDef::new("slitGapVertical", ColumnType::float()))
        .with_field(FieldDef::new("slitGapHorizontal", ColumnType::float()))
        .with_field(FieldDef::new("transmission", ColumnType::float()))
        .with_field(FieldDef::new("synchrotronMode", ColumnType::varchar(20)))
        .with_field(FieldDef::new("xtalSnapshotFullPath1", ColumnType::varchar(255)))
        .with_field(FieldDef::new("xtalSnapshotFullPath2", ColumnType::varchar(255)))
        .with_field(FieldDef::new("xtalSnapshotFullPath3", ColumnType::varchar(255)))
        .with_field(FieldDef::new("xtalSnapshotFullPath4", ColumnType::varchar(255)))
        .with_field(
            FieldDef::new("rotationAxis", ColumnType::enumeration(&["Omega", "Kappa", "Phi"])),
        )
        .with_field(FieldDef::new("phiStart", ColumnType::float()))
        .with_field(FieldDef::new("kappaStart", ColumnType::float()))
        .with_field(FieldDef::new("omegaStart", ColumnType::float()))
        .with_field(FieldDef::new("resolutionAtCorner", ColumnType::float()))
        .with_field(FieldDef::new("detector2Theta", ColumnType::float()))
        .with_field(FieldDef::new("undulatorGap1", ColumnType::float()))
        .with_field(FieldDef::new("undulatorGap2", ColumnType::float()))
        .with_field(FieldDef::new("undulatorGap3", ColumnType::float()))
        .with_field(FieldDef::new("beamSizeAtSampleX", ColumnType::float()))
        .with_field(FieldDef::new("beamSizeAtSampleY", ColumnType::float()))
        .with_field(FieldDef::new("centeringMethod", ColumnType::varchar(255)))
        .with_field(FieldDef::new("averageTemperature", ColumnType::float()))
        .with_field(FieldDef::new("actualCenteringPosition", ColumnType::varchar(255)))
        .with_field(FieldDef::new("beamShape", ColumnType::varchar(45)))
        .with_field(FieldDef::new("flux", ColumnType::decimal()))
        .with_field(FieldDef::new("flux_end", ColumnType::decimal()))
        .with_field(FieldDef::new("totalAbsorbedDose", ColumnType::decimal()))
        .with_field(FieldDef::new("bestWilsonPlotPath", ColumnType::varchar(255)))
        .with_field(FieldDef::new("imageQualityIndicatorsPlotPath", ColumnType::varchar(512)))
        .with_field(FieldDef::new("imageQualityIndicatorsCSVPath", ColumnType::varchar(512)))
        .with_field(
            FieldDef::new("sessionId", ColumnType::int(10)).with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new("proposalId", ColumnType::int(10)).with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("workflowId", ColumnType::int(10)))
        .with_field(FieldDef::new("AutoProcIntegration_dataCollectionId", ColumnType::int(10)))
        .with_field(
            FieldDef::new("autoProcScalingId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("cell_a", ColumnType::float()))
        .with_field(FieldDef::new("cell_b", ColumnType::float()))
        .with_field(FieldDef::new("cell_c", ColumnType::float()))
        .with_field(FieldDef::new("cell_alpha", ColumnType::float()))
        .with_field(FieldDef::new("cell_beta", ColumnType::float()))
        .with_field(FieldDef::new("cell_gamma", ColumnType::float()))
        .with_field(
            FieldDef::new("anomalous", ColumnType::tinyint(1)).with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new(
                "scalingStatisticsType",
                ColumnType::enumeration(&["overall", "innerShell", "outerShell"]),
            )
                .with_default(DefaultValue::String("overall".into())),
        )
        .with_field(FieldDef::new("resolutionLimitHigh", ColumnType::float()))
        .with_field(FieldDef::new("resolutionLimitLow", ColumnType::float()))
        .with_field(FieldDef::new("completeness", ColumnType::float()))
        .with_field(FieldDef::new("AutoProc_spaceGroup", ColumnType::varchar(45)))
        .with_field(
            FieldDef::new("autoProcId", ColumnType::int(10)).with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("rMerge", ColumnType::float()))
        .with_field(FieldDef::new("ccHalf", ColumnType::float()))
        .with_field(FieldDef::new("meanIOverSigI", ColumnType::float()))
        .with_field(
            FieldDef::new("AutoProcIntegration_autoProcIntegrationId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("AutoProcProgram_processingPrograms", ColumnType::varchar(255)))
        .with_field(
            FieldDef::new(
                "AutoProcProgram_processingStatus",
                ColumnType::enumeration(&["RUNNING", "FAILED", "SUCCESS", "0", "1"]),
            ),
        )
        .with_field(
            FieldDef::new("AutoProcProgram_autoProcProgramId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("ScreeningOutput_rankingResolution", ColumnType::decimal()))
}

pub(crate) fn v_datacollection_autoprocintegration() -> EntityDef {
    EntityDef::view("v_datacollection_autoprocintegration", "v_datacollection_autoprocintegration")
        .with_field(
            FieldDef::new(
                "v_datacollection_summary_phasing_autoProcIntegrationId",
                ColumnType::int(10),
            )
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new("v_datacollection_summary_phasing_dataCollectionId", ColumnType::int(10)),
        )
        .with_field(FieldDef::new("v_datacollection_summary_phasing_cell_a", ColumnType::float()))
        .with_field(FieldDef::new("v_datacollection_summary_phasing_cell_b", ColumnType::float()))
        .with_field(FieldDef::new("v_datacollection_summary_phasing_cell_c", ColumnType::float()))
        .with_field(
            FieldDef::new("v_datacollection_summary_phasing_cell_alpha", ColumnType::float()),
        )
        .with_field(
            FieldDef::new("v_datacollection_summary_phasing_cell_beta", ColumnType::float()),
        )
        .with_field(
            FieldDef::new("v_datacollection_summary_phasing_cell_gamma", ColumnType::float()),
        )
        .with_field(
            FieldDef::new("v_datacollection_summary_phasing_anomalous", ColumnType::tinyint(1))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new(
                "v_datacollection_summary_phasing_autoproc_space_group",
                ColumnType::varchar(45),
            ),
        )
        .with_field(
            FieldDef::new(
                "v_datacollection_summary_phasing_autoproc_autoprocId",
                ColumnType::int(10),
            )
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new("v_datacollection_summary_phasing_autoProcScalingId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("v_datacollection_processingPrograms", ColumnType::varchar(255)))
        .with_field(
            FieldDef::new("v_datacollection_summary_phasing_autoProcProgramId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new(
                "v_datacollection_processingStatus",
                ColumnType::enumeration(&["RUNNING", "FAILED", "SUCCESS", "0", "1"]),
            ),
        )
        .with_field(FieldDef::new("v_datacollection_processingStartTime", ColumnType::DateTime))
        .with_field(FieldDef::new("v_datacollection_processingEndTime", ColumnType::DateTime))
        .with_field(
            FieldDef::new("v_datacollection_summary_session_sessionId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new("v_datacollection_summary_session_proposalId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("AutoProcIntegration_dataCollectionId", ColumnType::int(10)))
        .with_field(
            FieldDef::new("AutoProcIntegration_autoProcIntegrationId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new(
                "PhasingStep_phasing_phasingStepType",
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
        .with_field(FieldDef::new("SpaceGroup_spaceGroupShortName", ColumnType::varchar(45)))
        .with_field(
            FieldDef::new("Protein_proteinId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("Protein_acronym", ColumnType::varchar(45)))
        .with_field(FieldDef::new("BLSample_name", ColumnType::varchar(100)))
        .with_field(FieldDef::new("DataCollection_dataCollectionNumber", ColumnType::int(10)))
        .with_field(FieldDef::new("DataCollection_imagePrefix", ColumnType::varchar(100)))
}

pub(crate) fn v_datacollection_phasing() -> EntityDef {
    EntityDef::view("v_datacollection_phasing", "v_datacollection_phasing")
        .with_field(
            FieldDef::new("phasingStepId", ColumnType::int(10)).with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("previousPhasingStepId", ColumnType::int(10)))
        .with_field(FieldDef::new("phasingAnalysisId", ColumnType::int(10)))
        .with_field(
            FieldDef::new("autoProcIntegrationId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("dataCollectionId", ColumnType::int(10)))
        .with_field(
            FieldDef::new("anomalous", ColumnType::tinyint(1)).with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("spaceGroup", ColumnType::varchar(45)))
        .with_field(
            FieldDef::new("autoProcId", ColumnType::int(10)).with_default(DefaultValue::Int(0)),
        )
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
        .with_field(
            FieldDef::new("autoProcScalingId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("spaceGroupShortName", ColumnType::varchar(45)))
        .with_field(FieldDef::new("processingPrograms", ColumnType::varchar(255)))
        .with_field(
            FieldDef::new(
                "processingStatus",
                ColumnType::enumeration(&["RUNNING", "FAILED", "SUCCESS", "0", "1"]),
            ),
        )
        .with_field(FieldDef::new("phasingPrograms", ColumnType::varchar(255)))
        .with_field(FieldDef::new("phasingStatus", ColumnType::tinyint(1)))
        .with_field(FieldDef::new("phasingStartTime", ColumnType::DateTime))
        .with_field(FieldDef::new("phasingEndTime", ColumnType::DateTime))
        .with_field(FieldDef::new("sessionId", ColumnType::int(10)))
        .with_field(
            FieldDef::new("proposalId", ColumnType::int(10)).with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new("blSampleId", ColumnType::int(10)).with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("name", ColumnType::varchar(100)))
        .with_field(FieldDef::new("code", ColumnType::varchar(45)))
        .with_field(FieldDef::new("acronym", ColumnType::varchar(45)))
        .with_field(
            FieldDef::new("proteinId", ColumnType::int(10)).with_default(DefaultValue::Int(0)),
        )
}

pub(crate) fn v_datacollection_phasing_program_run() -> EntityDef {
    EntityDef::view("v_datacollection_phasing_program_run", "v_datacollection_phasing_program_run")
        .with_field(
            FieldDef::new("phasingStepId", ColumnType::int(10)).with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("previousPhasingStepId", ColumnType::int(10)))
        .with_field(FieldDef::new("phasingAnalysisId", ColumnType::int(10)))
        .with_field(
            FieldDef::new("autoProcIntegrationId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("dataCollectionId", ColumnType::int(10)))
        .with_field(
            FieldDef::new("autoProcId", ColumnType::int(10)).with_default(DefaultValue::Int(0)),
        )
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
        .with_field(
            FieldDef::new("autoProcScalingId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("spaceGroupShortName", ColumnType::varchar(45)))
        .with_field(FieldDef::new("phasingPrograms", ColumnType::varchar(255)))
        .with_field(FieldDef::new("phasingStatus", ColumnType::tinyint(1)))
        .with_field(FieldDef::new("sessionId", ColumnType::int(10)))
        .with_field(
            FieldDef::new("proposalId", ColumnType::int(10)).with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new("blSampleId", ColumnType::int(10)).with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("name", ColumnType::varchar(100)))
        .with_field(FieldDef::new("code", ColumnType::varchar(45)))
        .with_field(FieldDef::new("acronym", ColumnType::varchar(45)))
        .with_field(
            FieldDef::new("proteinId", ColumnType::int(10)).with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new("phasingProgramAttachmentId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
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
            ),
        )
        .with_field(FieldDef::new("fileName", ColumnType::varchar(45)))
        .with_field(FieldDef::new("filePath", ColumnType::varchar(255)))
}

pub(crate) fn v_datacollection_summary() -> EntityDef {
    EntityDef::view("v_datacollection_summary", "v_datacollection_summary")
        .with_field(
            FieldDef::new("DataCollectionGroup_dataCollectionGroupId", ColumnType::int(11))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("DataCollectionGroup_blSampleId", ColumnType::int(10)))
        .with_field(FieldDef::new("DataCollectionGroup_sessionId", ColumnType::int(10)))
        .with_field(FieldDef::new("DataCollectionGroup_workflowId", ColumnType::int(10)))
        .with_field(
            FieldDef::new(
                "DataCollectionGroup_experimentType",
                ColumnType::enumeration(&[
                    "EM",
                    "SAD",
                    "SAD - Inverse Beam",
                    "OSC",
                    "Collect - Multiwedge",
                    "MAD",
                    "Helical",
                    "Multi-positional",
                    "Mesh",
                    "Burn",
                    "MAD - Inverse Beam",
                    "Characterization",
                    "Dehydration",
                    "Still",
                ]),
            ),
        )
        .with_field(FieldDef::new("DataCollectionGroup_startTime", ColumnType::DateTime))
        .with_field(FieldDef::new("DataCollectionGroup_endTime", ColumnType::DateTime))
        .with_field(FieldDef::new("DataCollectionGroup_comments", ColumnType::varchar(1024)))
        .with_field(
            FieldDef::new("DataCollectionGroup_actualSampleBarcode", ColumnType::varchar(45)),
        )
        .with_field(
            FieldDef::new("DataCollectionGroup_xtalSnapshotFullPath", ColumnType::varchar(255)),
        )
        .with_field(FieldDef::new("DataCollectionGroup_crystalClass", ColumnType::varchar(20)))
        .with_field(
            FieldDef::new("BLSample_blSampleId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("BLSample_crystalId", ColumnType::int(10)))
        .with_field(FieldDef::new("BLSample_name", ColumnType::varchar(100)))
        .with_field(FieldDef::new("BLSample_code", ColumnType::varchar(45)))
        .with_field(FieldDef::new("BLSample_location", ColumnType::varchar(45)))
        .with_field(FieldDef::new("BLSample_blSampleStatus", ColumnType::varchar(20)))
        .with_field(FieldDef::new("BLSample_comments", ColumnType::varchar(1024)))
        .with_field(
            FieldDef::new("Container_containerId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new("BLSession_sessionId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new("BLSession_proposalId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("BLSession_protectedData", ColumnType::varchar(1024)))
        .with_field(
            FieldDef::new("Dewar_dewarId", ColumnType::int(10)).with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("Dewar_code", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Dewar_storageLocation", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Container_containerType", ColumnType::varchar(20)))
        .with_field(FieldDef::new("Container_code", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Container_capacity", ColumnType::int(10)))
        .with_field(FieldDef::new("Container_beamlineLocation", ColumnType::varchar(20)))
        .with_field(FieldDef::new("Container_sampleChangerLocation", ColumnType::varchar(20)))
        .with_field(
            FieldDef::new("Protein_proteinId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("Protein_name", ColumnType::varchar(255)))
        .with_field(FieldDef::new("Protein_acronym", ColumnType::varchar(45)))
        .with_field(
            FieldDef::new("DataCollection_dataCollectionId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("DataCollection_dataCollectionGroupId", ColumnType::int(11)))
        .with_field(FieldDef::new("DataCollection_startTime", ColumnType::DateTime))
        .with_field(FieldDef::new("DataCollection_endTime", ColumnType::DateTime))
        .with_field(FieldDef::new("DataCollection_runStatus", ColumnType::varchar(45)))
        .with_field(FieldDef::new("DataCollection_numberOfImages", ColumnType::int(10)))
        .with_field(FieldDef::new("DataCollection_startImageNumber", ColumnType::int(10)))
        .with_field(FieldDef::new("DataCollection_numberOfPasses", ColumnType::int(10)))
        .with_field(FieldDef::new("DataCollection_exposureTime", ColumnType::float()))
        .with_field(FieldDef::new("DataCollection_imageDirectory", ColumnType::varchar(255)))
        .with_field(FieldDef::new("DataCollection_wavelength", ColumnType::float()))
        .with_field(FieldDef::new("DataCollection_resolution", ColumnType::float()))
        .with_field(FieldDef::new("DataCollection_detectorDistance", ColumnType::float()))
        .with_field(FieldDef::new("DataCollection_xBeam", ColumnType::float()))
        .with_field(FieldDef::new("transmission", ColumnType::float()))
        .with_field(FieldDef::new("DataCollection_yBeam", ColumnType::float()))
        .with_field(FieldDef::new("DataCollection_imagePrefix", ColumnType::varchar(100)))
        .with_field(FieldDef::new("DataCollection_comments", ColumnType::varchar(1024)))
        .with_field(FieldDef::new("DataCollection_xtalSnapshotFullPath1", ColumnType::varchar(255)))
        .with_field(FieldDef::new("DataCollection_xtalSnapshotFullPath2", ColumnType::varchar(255)))
        .with_field(FieldDef::new("DataCollection_xtalSnapshotFullPath3", ColumnType::varchar(255)))
        .with_field(FieldDef::new("DataCollection_xtalSnapshotFullPath4", ColumnType::varchar(255)))
        .with_field(FieldDef::new("DataCollection_phiStart", ColumnType::float()))
        .with_field(FieldDef::new("DataCollection_kappaStart", ColumnType::float()))
        .with_field(FieldDef::new("DataCollection_omegaStart", ColumnType::float()))
        .with_field(FieldDef::new("DataCollection_flux", ColumnType::decimal()))
        .with_field(FieldDef::new("DataCollection_flux_end", ColumnType::decimal()))
        .with_field(FieldDef::new("DataCollection_resolutionAtCorner", ColumnType::float()))
        .with_field(FieldDef::new("DataCollection_bestWilsonPlotPath", ColumnType::varchar(255)))
        .with_field(FieldDef::new("DataCollection_dataCollectionNumber", ColumnType::int(10)))
        .with_field(FieldDef::new("DataCollection_axisRange", ColumnType::float()))
        .with_field(FieldDef::new("DataCollection_axisStart", ColumnType::float()))
        .with_field(FieldDef::new("DataCollection_axisEnd", ColumnType::float()))
        .with_field(
            FieldDef::new(
                "DataCollection_rotationAxis",
                ColumnType::enumeration(&["Omega", "Kappa", "Phi"]),
            ),
        )
        .with_field(FieldDef::new("DataCollection_undulatorGap1", ColumnType::float()))
        .with_field(FieldDef::new("DataCollection_undulatorGap2", ColumnType::float()))
        .with_field(FieldDef::new("DataCollection_undulatorGap3", ColumnType::float()))
        .with_field(FieldDef::new("beamSizeAtSampleX", ColumnType::float()))
        .with_field(FieldDef::new("beamSizeAtSampleY", ColumnType::float()))
        .with_field(FieldDef::new("DataCollection_slitGapVertical", ColumnType::float()))
        .with_field(FieldDef::new("DataCollection_slitGapHorizontal", ColumnType::float()))
        .with_field(FieldDef::new("DataCollection_beamShape", ColumnType::varchar(45)))
        .with_field(FieldDef::new("DataCollection_voltage", ColumnType::float()))
        .with_field(FieldDef::new("DataCollection_xBeamPix", ColumnType::float()))
        .with_field(FieldDef::new("Workflow_workflowTitle", ColumnType::varchar(255)))
        .with_field(
            FieldDef::new(
                "Workflow_workflowType",
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
        .with_field(FieldDef::new("Workflow_status", ColumnType::varchar(255)))
        .with_field(
            FieldDef::new("Workflow_workflowId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("AutoProcIntegration_dataCollectionId", ColumnType::int(10)))
        .with_field(
            FieldDef::new("autoProcScalingId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("cell_a", ColumnType::float()))
        .with_field(FieldDef::new("cell_b", ColumnType::float()))
        .with_field(FieldDef::new("cell_c", ColumnType::float()))
        .with_field(FieldDef::new("cell_alpha", ColumnType::float()))
        .with_field(FieldDef::new("cell_beta", ColumnType::float()))
        .with_field(FieldDef::new("cell_gamma", ColumnType::float()))
        .with_field(
            FieldDef::new("anomalous", ColumnType::tinyint(1)).with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new(
                "scalingStatisticsType",
                ColumnType::enumeration(&["overall", "innerShell", "outerShell"]),
            )
                .with_default(DefaultValue::String("overall".into())),
        )
        .with_field(FieldDef::new("resolutionLimitHigh", ColumnType::float()))
        .with_field(FieldDef::new("resolutionLimitLow", ColumnType::float()))
        .with_field(FieldDef::new("completeness", ColumnType::float()))
        .with_field(FieldDef::new("AutoProc_spaceGroup", ColumnType::varchar(45)))
        .with_field(
            FieldDef::new("autoProcId", ColumnType::int(10)).with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("rMerge", ColumnType::float()))
        .with_field(
            FieldDef::new("AutoProcIntegration_autoProcIntegrationId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("AutoProcProgram_processingPrograms", ColumnType::varchar(255)))
        .with_field(
            FieldDef::new(
                "AutoProcProgram_processingStatus",
                ColumnType::enumeration(&["RUNNING", "FAILED", "SUCCESS", "0", "1"]),
            ),
        )
        .with_field(
            FieldDef::new("AutoProcProgram_autoProcProgramId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new("Screening_screeningId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("Screening_dataCollectionId", ColumnType::int(10)))
        .with_field(FieldDef::new("Screening_dataCollectionGroupId", ColumnType::int(11)))
        .with_field(
            FieldDef::new("ScreeningOutput_strategySuccess", ColumnType::tinyint(1))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new("ScreeningOutput_indexingSuccess", ColumnType::tinyint(1))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("ScreeningOutput_rankingResolution", ColumnType::decimal()))
        .with_field(FieldDef::new("ScreeningOutput_mosaicity", ColumnType::float()))
        .with_field(FieldDef::new("ScreeningOutputLattice_spaceGroup", ColumnType::varchar(45)))
        .with_field(FieldDef::new("ScreeningOutputLattice_unitCell_a", ColumnType::float()))
        .with_field(FieldDef::new("ScreeningOutputLattice_unitCell_b", ColumnType::float()))
        .with_field(FieldDef::new("ScreeningOutputLattice_unitCell_c", ColumnType::float()))
        .with_field(FieldDef::new("ScreeningOutputLattice_unitCell_alpha", ColumnType::float()))
        .with_field(FieldDef::new("ScreeningOutputLattice_unitCell_beta", ColumnType::float()))
        .with_field(FieldDef::new("ScreeningOutputLattice_unitCell_gamma", ColumnType::float()))
        .with_field(FieldDef::new("ScreeningOutput_totalExposureTime", ColumnType::decimal()))
        .with_field(FieldDef::new("ScreeningOutput_totalRotationRange", ColumnType::decimal()))
        .with_field(FieldDef::new("ScreeningOutput_totalNumberOfImages", ColumnType::int(11)))
        .with_field(FieldDef::new("ScreeningStrategySubWedge_exposureTime", ColumnType::float()))
        .with_field(FieldDef::new("ScreeningStrategySubWedge_transmission", ColumnType::float()))
        .with_field(
            FieldDef::new("ScreeningStrategySubWedge_oscillationRange", ColumnType::float()),
        )
        .with_field(FieldDef::new("ScreeningStrategySubWedge_numberOfImages", ColumnType::int(10)))
        .with_field(FieldDef::new("ScreeningStrategySubWedge_multiplicity", ColumnType::float()))
        .with_field(FieldDef::new("ScreeningStrategySubWedge_completeness", ColumnType::float()))
        .with_field(FieldDef::new("ScreeningStrategySubWedge_axisStart", ColumnType::float()))
        .with_field(
            FieldDef::new("Shipping_shippingId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("Shipping_shippingName", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Shipping_shippingStatus", ColumnType::varchar(45)))
        .with_field(
            FieldDef::new("diffractionPlanId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new(
                "experimentKind",
                ColumnType::enumeration(&[
                    "Default",
                    "MXPressE",
                    "MXPressF",
                    "MXPressO",
                    "MXPressP",
                    "MXPressP_SAD",
                    "MXPressI",
                    "MXPressE_SAD",
                    "MXScore",
                    "MXPressM",
                    "MAD",
                    "SAD",
                    "Fixed",
                    "Ligand binding",
                    "Refinement",
                    "OSC",
                    "MAD - Inverse Beam",
                    "SAD - Inverse Beam",
                ]),
            ),
        )
        .with_field(FieldDef::new("observedResolution", ColumnType::float()))
        .with_field(FieldDef::new("minimalResolution", ColumnType::float()))
        .with_field(FieldDef::new("exposureTime", ColumnType::float()))
        .with_field(FieldDef::new("oscillationRange", ColumnType::float()))
        .with_field(FieldDef::new("maximalResolution", ColumnType::float()))
        .with_field(FieldDef::new("screeningResolution", ColumnType::float()))
        .with_field(FieldDef::new("radiationSensitivity", ColumnType::float()))
        .with_field(FieldDef::new("anomalousScatterer", ColumnType::varchar(255)))
        .with_field(FieldDef::new("preferredBeamSizeX", ColumnType::float()))
        .with_field(FieldDef::new("preferredBeamSizeY", ColumnType::float()))
        .with_field(FieldDef::new("preferredBeamDiameter", ColumnType::float()))
        .with_field(FieldDef::new("DiffractipnPlan_comments", ColumnType::varchar(1024)))
        .with_field(FieldDef::new("aimedCompleteness", ColumnType::decimal()))
        .with_field(FieldDef::new("aimedIOverSigmaAtHighestRes", ColumnType::decimal()))
        .with_field(FieldDef::new("aimedMultiplicity", ColumnType::decimal()))
        .with_field(FieldDef::new("aimedResolution", ColumnType::decimal()))
        .with_field(
            FieldDef::new("anomalousData", ColumnType::tinyint(1))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("complexity", ColumnType::varchar(45)))
        .with_field(
            FieldDef::new("estimateRadiationDamage", ColumnType::tinyint(1))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("forcedSpaceGroup", ColumnType::varchar(45)))
        .with_field(FieldDef::new("requiredCompleteness", ColumnType::decimal()))
        .with_field(FieldDef::new("requiredMultiplicity", ColumnType::decimal()))
        .with_field(FieldDef::new("requiredResolution", ColumnType::decimal()))
        .with_field(FieldDef::new("strategyOption", ColumnType::varchar(45)))
        .with_field(FieldDef::new("kappaStrategyOption", ColumnType::varchar(45)))
        .with_field(FieldDef::new("numberOfPositions", ColumnType::int(11)))
        .with_field(FieldDef::new("minDimAccrossSpindleAxis", ColumnType::decimal()))
        .with_field(FieldDef::new("maxDimAccrossSpindleAxis", ColumnType::decimal()))
        .with_field(FieldDef::new("radiationSensitivityBeta", ColumnType::decimal()))
        .with_field(FieldDef::new("radiationSensitivityGamma", ColumnType::decimal()))
        .with_field(FieldDef::new("minOscWidth", ColumnType::float()))
        .with_field(FieldDef::new("Detector_detectorType", ColumnType::varchar(255)))
        .with_field(FieldDef::new("Detector_detectorManufacturer", ColumnType::varchar(255)))
        .with_field(FieldDef::new("Detector_detectorModel", ColumnType::varchar(255)))
        .with_field(FieldDef::new("Detector_detectorPixelSizeHorizontal", ColumnType::float()))
        .with_field(FieldDef::new("Detector_detectorPixelSizeVertical", ColumnType::float()))
        .with_field(FieldDef::new("Detector_detectorSerialNumber", ColumnType::varchar(30)))
        .with_field(FieldDef::new("Detector_detectorDistanceMin", ColumnType::decimal()))
        .with_field(FieldDef::new("Detector_detectorDistanceMax", ColumnType::decimal()))
        .with_field(FieldDef::new("Detector_trustedPixelValueRangeLower", ColumnType::decimal()))
        .with_field(FieldDef::new("Detector_trustedPixelValueRangeUpper", ColumnType::decimal()))
        .with_field(FieldDef::new("Detector_sensorThickness", ColumnType::float()))
        .with_field(FieldDef::new("Detector_overload", ColumnType::float()))
        .with_field(FieldDef::new("Detector_XGeoCorr", ColumnType::varchar(255)))
        .with_field(FieldDef::new("Detector_YGeoCorr", ColumnType::varchar(255)))
        .with_field(FieldDef::new("Detector_detectorMode", ColumnType::varchar(255)))
        .with_field(FieldDef::new("BeamLineSetup_undulatorType1", ColumnType::varchar(45)))
        .with_field(FieldDef::new("BeamLineSetup_undulatorType2", ColumnType::varchar(45)))
        .with_field(FieldDef::new("BeamLineSetup_undulatorType3", ColumnType::varchar(45)))
        .with_field(FieldDef::new("BeamLineSetup_synchrotronName", ColumnType::varchar(255)))
        .with_field(FieldDef::new("BeamLineSetup_synchrotronMode", ColumnType::varchar(255)))
        .with_field(FieldDef::new("BeamLineSetup_polarisation", ColumnType::float()))
        .with_field(FieldDef::new("BeamLineSetup_focusingOptic", ColumnType::varchar(255)))
        .with_field(FieldDef::new("BeamLineSetup_beamDivergenceHorizontal", ColumnType::float()))
        .with_field(FieldDef::new("BeamLineSetup_beamDivergenceVertical", ColumnType::float()))
        .with_field(FieldDef::new("BeamLineSetup_monochromatorType", ColumnType::varchar(255)))
}

pub(crate) fn v_datacollection_summary_autoprocintegration() -> EntityDef {
    EntityDef::view(
        "v_datacollection_summary_autoprocintegration",
        "v_datacollection_summary_autoprocintegration",
    )
        .with_field(FieldDef::new("AutoProcIntegration_dataCollectionId", ColumnType::int(10)))
        .with_field(FieldDef::new("cell_a", ColumnType::float()))
        .with_field(FieldDef::new("cell_b", ColumnType::float()))
        .with_field(FieldDef::new("cell_c", ColumnType::float()))
        .with_field(FieldDef::new("cell_alpha", ColumnType::float()))
        .with_field(FieldDef::new("cell_beta", ColumnType::float()))
        .with_field(FieldDef::new("cell_gamma", ColumnType::float()))
        .with_field(
            FieldDef::new("anomalous", ColumnType::tinyint(1)).with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new("AutoProcIntegration_autoProcIntegrationId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new(
                "v_datacollection_summary_autoprocintegration_processingPrograms",
                ColumnType::varchar(255),
            ),
        )
        .with_field(
            FieldDef::new("AutoProcProgram_autoProcProgramId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new(
                "v_datacollection_summary_autoprocintegration_processingStatus",
                ColumnType::enumeration(&["RUNNING", "FAILED", "SUCCESS", "0", "1"]),
            ),
        )
        .with_field(
            FieldDef::new("AutoProcIntegration_phasing_dataCollectionId", ColumnType::int(10)),
        )
        .with_field(
            FieldDef::new(
                "PhasingStep_phasing_phasingStepType",
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
        .with_field(FieldDef::new("SpaceGroup_spaceGroupShortName", ColumnType::varchar(45)))
        .with_field(
            FieldDef::new("autoProcId", ColumnType::int(10)).with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("AutoProc_spaceGroup", ColumnType::varchar(45)))
        .with_field(
            FieldDef::new(
                "scalingStatisticsType",
                ColumnType::enumeration(&["overall", "innerShell", "outerShell"]),
            )
                .with_default(DefaultValue::String("overall".into())),
        )
        .with_field(FieldDef::new("resolutionLimitHigh", ColumnType::float()))
        .with_field(FieldDef::new("resolutionLimitLow", ColumnType::float()))
        .with_field(FieldDef::new("rMerge", ColumnType::float()))
        .with_field(FieldDef::new("meanIOverSigI", ColumnType::float()))
        .with_field(FieldDef::new("ccHalf", ColumnType::float()))
        .with_field(FieldDef::new("completeness", ColumnType::float()))
        .with_field(
            FieldDef::new("autoProcScalingId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
}

pub(crate) fn v_datacollection_summary_datacollectiongroup() -> EntityDef {
    EntityDef::view(
        "v_datacollection_summary_datacollectiongroup",
        "v_datacollection_summary_datacollectiongroup",
    )
        .with_field(
            FieldDef::new("DataCollectionGroup_dataCollectionGroupId", ColumnType::int(11))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("DataCollectionGroup_blSampleId", ColumnType::int(10)))
        .with_field(FieldDef::new("DataCollectionGroup_sessionId", ColumnType::int(10)))
        .with_field(FieldDef::new("DataCollectionGroup_workflowId", ColumnType::int(10)))
        .with_field(
            FieldDef::new(
                "DataCollectionGroup_experimentType",
                ColumnType::enumeration(&[
                    "EM",
                    "SAD",
                    "SAD - Inverse Beam",
                    "OSC",
                    "Collect - Multiwedge",
                    "MAD",
                    "Helical",
                    "Multi-positional",
                    "Mesh",
                    "Burn",
                    "MAD - Inverse Beam",
                    "Characterization",
                    "Dehydration",
                    "Still",
                ]),
            ),
        )
        .with_field(FieldDef::new("DataCollectionGroup_startTime", ColumnType::DateTime))
        .with_field(FieldDef::new("DataCollectionGroup_endTime", ColumnType::DateTime))
        .with_field(FieldDef::new("DataCollectionGroup_comments", ColumnType::varchar(1024)))
        .with_field(
            FieldDef::new("DataCollectionGroup_actualSampleBarcode", ColumnType::varchar(45)),
        )
        .with_field(
            FieldDef::new("DataCollectionGroup_xtalSnapshotFullPath", ColumnType::varchar(255)),
        )
        .with_field(
            FieldDef::new("BLSample_blSampleId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("BLSample_crystalId", ColumnType::int(10)))
        .with_field(FieldDef::new("BLSample_name", ColumnType::varchar(100)))
        .with_field(FieldDef::new("BLSample_code", ColumnType::varchar(45)))
        .with_field(
            FieldDef::new("BLSession_sessionId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new("BLSession_proposalId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("BLSession_protectedData", ColumnType::varchar(1024)))
        .with_field(
            FieldDef::new("Protein_proteinId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("Protein_name", ColumnType::varchar(255)))
        .with_field(FieldDef::new("Protein_acronym", ColumnType::varchar(45)))
        .with_field(
            FieldDef::new("DataCollection_dataCollectionId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("DataCollection_dataCollectionGroupId", ColumnType::int(11)))
        .with_field(FieldDef::new("DataCollection_startTime", ColumnType::DateTime))
        .with_field(FieldDef::new("DataCollection_endTime", ColumnType::DateTime))
        .with_field(FieldDef::new("DataCollection_runStatus", ColumnType::varchar(45)))
        .with_field(FieldDef::new("DataCollection_numberOfImages", ColumnType::int(10)))
        .with_field(FieldDef::new("DataCollection_startImageNumber", ColumnType::int(10)))
        .with_field(FieldDef::new("DataCollection_numberOfPasses", ColumnType::int(10)))
        .with_field(FieldDef::new("DataCollection_exposureTime", ColumnType::float()))
        .with_field(FieldDef::new("DataCollection_imageDirectory", ColumnType::varchar(255)))
        .with_field(FieldDef::new("DataCollection_wavelength", ColumnType::float()))
        .with_field(FieldDef::new("DataCollection_resolution", ColumnType::float()))
        .with_field(FieldDef::new("DataCollection_detectorDistance", ColumnType::float()))
        .with_field(FieldDef::new("DataCollection_xBeam", ColumnType::float()))
        .with_field(FieldDef::new("DataCollection_yBeam", ColumnType::float()))
        .with_field(FieldDef::new("DataCollection_comments", ColumnType::varchar(1024)))
        .with_field(FieldDef::new("DataCollection_xtalSnapshotFullPath1", ColumnType::varchar(255)))
        .with_field(FieldDef::new("DataCollection_xtalSnapshotFullPath2", ColumnType::varchar(255)))
        .with_field(FieldDef::new("DataCollection_xtalSnapshotFullPath3", ColumnType::varchar(255)))
        .with_field(FieldDef::new("DataCollection_xtalSnapshotFullPath4", ColumnType::varchar(255)))
        .with_field(FieldDef::new("DataCollection_phiStart", ColumnType::float()))
        .with_field(FieldDef::new("DataCollection_kappaStart", ColumnType::float()))
        .with_field(FieldDef::new("DataCollection_omegaStart", ColumnType::float()))
        .with_field(FieldDef::new("DataCollection_resolutionAtCorner", ColumnType::float()))
        .with_field(FieldDef::new("DataCollection_bestWilsonPlotPath", ColumnType::varchar(255)))
        .with_field(FieldDef::new("DataCollection_dataCollectionNumber", ColumnType::int(10)))
        .with_field(FieldDef::new("DataCollection_axisRange", ColumnType::float()))
        .with_field(FieldDef::new("DataCollection_axisStart", ColumnType::float()))
        .with_field(FieldDef::new("DataCollection_axisEnd", ColumnType::float()))
        .with_field(FieldDef::new("Workflow_workflowTitle", ColumnType::varchar(255)))
        .with_field(
            FieldDef::new(
                "Workflow_workflowType",
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
        .with_field(FieldDef::new("Workflow_status", ColumnType::varchar(255)))
}

pub(crate) fn v_datacollection_summary_phasing() -> EntityDef {
    EntityDef::view("v_datacollection_summary_phasing", "v_datacollection_summary_phasing")
        .with_field(
            FieldDef::new(
                "v_datacollection_summary_phasing_autoProcIntegrationId",
                ColumnType::int(10),
            )
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new("v_datacollection_summary_phasing_dataCollectionId", ColumnType::int(10)),
        )
        .with_field(FieldDef::new("v_datacollection_summary_phasing_cell_a", ColumnType::float()))
        .with_field(FieldDef::new("v_datacollection_summary_phasing_cell_b", ColumnType::float()))
        .with_field(FieldDef::new("v_datacollection_summary_phasing_cell_c", ColumnType::float()))
        .with_field(
            FieldDef::new("v_datacollection_summary_phasing_cell_alpha", ColumnType::float()),
        )
        .with_field(
            FieldDef::new("v_datacollection_summary_phasing_cell_beta", ColumnType::float()),
        )
        .with_field(
            FieldDef::new("v_datacollection_summary_phasing_cell_gamma", ColumnType::float()),
        )
        .with_field(
            FieldDef::new("v_datacollection_summary_phasing_anomalous", ColumnType::tinyint(1))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new(
                "v_datacollection_summary_phasing_autoproc_space_group",
                ColumnType::varchar(45),
            ),
        )
        .with_field(
            FieldDef::new(
                "v_datacollection_summary_phasing_autoproc_autoprocId",
                ColumnType::int(10),
            )
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new("v_datacollection_summary_phasing_autoProcScalingId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new(
                "v_datacollection_summary_phasing_processingPrograms",
                ColumnType::varchar(255),
            ),
        )
        .with_field(
            FieldDef::new("v_datacollection_summary_phasing_autoProcProgramId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new(
                "v_datacollection_summary_phasing_processingStatus",
                ColumnType::enumeration(&["RUNNING", "FAILED", "SUCCESS", "0", "1"]),
            ),
        )
        .with_field(
            FieldDef::new("v_datacollection_summary_session_sessionId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new("v_datacollection_summary_session_proposalId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
}

pub(crate) fn v_datacollection_summary_screening() -> EntityDef {
    EntityDef::view("v_datacollection_summary_screening", "v_datacollection_summary_screening")
        .with_field(
            FieldDef::new("Screening_screeningId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("Screening_dataCollectionId", ColumnType::int(10)))
        .with_field(FieldDef::new("Screening_dataCollectionGroupId", ColumnType::int(11)))
        .with_field(
            FieldDef::new("ScreeningOutput_strategySuccess", ColumnType::tinyint(1))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new("ScreeningOutput_indexingSuccess", ColumnType::tinyint(1))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("ScreeningOutput_rankingResolution", ColumnType::decimal()))
        .with_field(
            FieldDef::new("ScreeningOutput_mosaicityEstimated", ColumnType::tinyint(1))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("ScreeningOutput_mosaicity", ColumnType::float()))
        .with_field(FieldDef::new("ScreeningOutput_totalExposureTime", ColumnType::decimal()))
        .with_field(FieldDef::new("ScreeningOutput_totalRotationRange", ColumnType::decimal()))
        .with_field(FieldDef::new("ScreeningOutput_totalNumberOfImages", ColumnType::int(11)))
        .with_field(FieldDef::new("ScreeningOutputLattice_spaceGroup", ColumnType::varchar(45)))
        .with_field(FieldDef::new("ScreeningOutputLattice_unitCell_a", ColumnType::float()))
        .with_field(FieldDef::new("ScreeningOutputLattice_unitCell_b", ColumnType::float()))
        .with_field(FieldDef::new("ScreeningOutputLattice_unitCell_c", ColumnType::float()))
        .with_field(FieldDef::new("ScreeningOutputLattice_unitCell_alpha", ColumnType::float()))
        .with_field(FieldDef::new("ScreeningOutputLattice_unitCell_beta", ColumnType::float()))
        .with_field(FieldDef::new("ScreeningOutputLattice_unitCell_gamma", ColumnType::float()))
        .with_field(FieldDef::new("ScreeningStrategySubWedge_exposureTime", ColumnType::float()))
        .with_field(FieldDef::new("ScreeningStrategySubWedge_transmission", ColumnType::float()))
        .with_field(
            FieldDef::new("ScreeningStrategySubWedge_oscillationRange", ColumnType::float()),
        )
        .with_field(FieldDef::new("ScreeningStrategySubWedge_numberOfImages", ColumnType::int(10)))
        .with_field(FieldDef::new("ScreeningStrategySubWedge_multiplicity", ColumnType::float()))
        .with_field(FieldDef::new("ScreeningStrategySubWedge_completeness", ColumnType::float()))
        .with_field(FieldDef::new("ScreeningStrategySubWedge_axisStart", ColumnType::float()))
        .with_field(FieldDef::new("ScreeningStrategySubWedge_axisEnd", ColumnType::float()))
        .with_field(
            FieldDef::new("ScreeningStrategySubWedge_rotationAxis", ColumnType::varchar(45)),
        )
}

pub(crate) fn v_dewar() -> EntityDef {
    EntityDef::view("v_dewar", "v_dewar")
        .with_field(
            FieldDef::new("proposalId", ColumnType::int(10)).with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new("shippingId", ColumnType::int(10)).with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("shippingName", ColumnType::varchar(45)))
        .with_field(
            FieldDef::new("dewarId", ColumnType::int(10)).with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("dewarName", ColumnType::varchar(45)))
        .with_field(FieldDef::new("dewarStatus", ColumnType::varchar(45)))
        .with_field(FieldDef::new("proposalCode", ColumnType::varchar(45)))
        .with_field(FieldDef::new("proposalNumber", ColumnType::varchar(45)))
        .with_field(FieldDef::new("creationDate", ColumnType::DateTime))
        .with_field(FieldDef::new("shippingType", ColumnType::varchar(45)))
        .with_field(FieldDef::new("barCode", ColumnType::varchar(45)))
        .with_field(FieldDef::new("shippingStatus", ColumnType::varchar(45)))
        .with_field(FieldDef::new("beamLineName", ColumnType::varchar(45)))
        .with_field(
            FieldDef::new("nbEvents", ColumnType::bigint(21)).with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new("storesin", ColumnType::bigint(21)).with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new("nbSamples", ColumnType::bigint(21)).with_default(DefaultValue::Int(0)),
        )
}

pub(crate) fn v_dewar_summary() -> EntityDef {
    EntityDef::view("v_dewar_summary", "v_dewar_summary")
        .with_field(FieldDef::new("shippingName", ColumnType::varchar(45)))
        .with_field(FieldDef::new("deliveryAgent_agentName", ColumnType::varchar(45)))
        .with_field(FieldDef::new("deliveryAgent_shippingDate", ColumnType::Date))
        .with_field(FieldDef::new("deliveryAgent_deliveryDate", ColumnType::Date))
        .with_field(FieldDef::new("deliveryAgent_agentCode", ColumnType::varchar(45)))
        .with_field(FieldDef::new("deliveryAgent_flightCode", ColumnType::varchar(45)))
        .with_field(FieldDef::new("shippingStatus", ColumnType::varchar(45)))
        .with_field(FieldDef::new("bltimeStamp", ColumnType::DateTime))
        .with_field(FieldDef::new("laboratoryId", ColumnType::int(10)))
        .with_field(
            FieldDef::new("isStorageShipping", ColumnType::tinyint(1))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("creationDate", ColumnType::DateTime))
        .with_field(FieldDef::new("Shipping_comments", ColumnType::varchar(255)))
        .with_field(FieldDef::new("sendingLabContactId", ColumnType::int(10)))
        .with_field(FieldDef::new("returnLabContactId", ColumnType::int(10)))
        .with_field(FieldDef::new("returnCourier", ColumnType::varchar(45)))
        .with_field(FieldDef::new("dateOfShippingToUser", ColumnType::DateTime))
        .with_field(FieldDef::new("shippingType", ColumnType::varchar(45)))
        .with_field(
            FieldDef::new("dewarId", ColumnType::int(10)).with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("shippingId", ColumnType::int(10)))
        .with_field(FieldDef::new("dewarCode", ColumnType::varchar(45)))
        .with_field(FieldDef::new("comments", ColumnType::tiny_text()))
        .with_field(FieldDef::new("storageLocation", ColumnType::varchar(45)))
        .with_field(FieldDef::new("dewarStatus", ColumnType::varchar(45)))
        .with_field(
            FieldDef::new("isStorageDewar", ColumnType::tinyint(1))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("barCode", ColumnType::varchar(45)))
        .with_field(FieldDef::new("firstExperimentId", ColumnType::int(10)))
        .with_field(FieldDef::new("customsValue", ColumnType::int(10)))
        .with_field(FieldDef::new("transportValue", ColumnType::int(10)))
        .with_field(FieldDef::new("trackingNumberToSynchrotron", ColumnType::varchar(30)))
        .with_field(FieldDef::new("trackingNumberFromSynchrotron", ColumnType::varchar(30)))
        .with_field(
            FieldDef::new("type", ColumnType::enumeration(&["Dewar", "Toolbox"]))
                .with_default(DefaultValue::String("Dewar".into())),
        )
        .with_field(
            FieldDef::new("isReimbursed", ColumnType::tinyint(1))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new("sessionId", ColumnType::int(10)).with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("beamlineName", ColumnType::varchar(45)))
        .with_field(FieldDef::new("sessionStartDate", ColumnType::DateTime))
        .with_field(FieldDef::new("sessionEndDate", ColumnType::DateTime))
        .with_field(FieldDef::new("beamLineOperator", ColumnType::varchar(255)))
        .with_field(FieldDef::new("nbReimbDewars", ColumnType::int(11)))
        .with_field(
            FieldDef::new("proposalId", ColumnType::int(10)).with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new("containerId", ColumnType::int(10)).with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("containerType", ColumnType::varchar(20)))
        .with_field(FieldDef::new("capacity", ColumnType::int(10)))
        .with_field(FieldDef::new("beamlineLocation", ColumnType::varchar(20)))
        .with_field(FieldDef::new("sampleChangerLocation", ColumnType::varchar(20)))
        .with_field(FieldDef::new("containerStatus", ColumnType::varchar(45)))
        .with_field(FieldDef::new("containerCode", ColumnType::varchar(45)))
}

pub(crate) fn v_dewar_beamline() -> EntityDef {
    EntityDef::view("v_dewarBeamline", "v_dewarBeamline")
        .with_field(FieldDef::new("beamLineName", ColumnType::varchar(45)))
        .with_field(
            FieldDef::new("COUNT(*)", ColumnType::bigint(21)).with_default(DefaultValue::Int(0)),
        )
}

pub(crate) fn v_dewar_beamline_by_week() -> EntityDef {
    EntityDef::view("v_dewarBeamlineByWeek", "v_dewarBeamlineByWeek")
        .with_field(FieldDef::new("Week", ColumnType::varchar(23)))
        .with_field(
            FieldDef::new("ID14", ColumnType::bigint(21)).with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new("ID23", ColumnType::bigint(21)).with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new("ID29", ColumnType::bigint(21)).with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new("BM14", ColumnType::bigint(21)).with_default(DefaultValue::Int(0)),
        )
}

pub(crate) fn v_dewar_by_week() -> EntityDef {
    EntityDef::view("v_dewarByWeek", "v_dewarByWeek")
        .with_field(FieldDef::new("Week", ColumnType::varchar(23)))
        .with_field(
            FieldDef::new("Dewars Tracked", ColumnType::bigint(21))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new("Dewars Non-Tracked", ColumnType::bigint(21))
                .with_default(DefaultValue::Int(0)),
        )
}

pub(crate) fn v_dewar_by_week_total() -> EntityDef {
    EntityDef::view("v_dewarByWeekTotal", "v_dewarByWeekTotal")
        .with_field(FieldDef::new("Week", ColumnType::varchar(23)))
        .with_field(
            FieldDef::new("Dewars Tracked", ColumnType::bigint(21))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new("Dewars Non-Tracked", ColumnType::bigint(21))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new("Total", ColumnType::bigint(21)).with_default(DefaultValue::Int(0)),
        )
}

pub(crate) fn v_dewar_list() -> EntityDef {
    EntityDef::view("v_dewarList", "v_dewarList")
        .with_field(FieldDef::new("proposal", ColumnType::varchar(90)))
        .with_field(FieldDef::new("shippingName", ColumnType::varchar(45)))
        .with_field(FieldDef::new("dewarName", ColumnType::varchar(45)))
        .with_field(FieldDef::new("barCode", ColumnType::varchar(45)))
        .with_field(FieldDef::new("creationDate", ColumnType::varchar(10)))
        .with_field(FieldDef::new("shippingType", ColumnType::varchar(45)))
        .with_field(
            FieldDef::new("nbEvents", ColumnType::bigint(21)).with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("dewarStatus", ColumnType::varchar(45)))
        .with_field(FieldDef::new("shippingStatus", ColumnType::varchar(45)))
        .with_field(
            FieldDef::new("nbSamples", ColumnType::bigint(21)).with_default(DefaultValue::Int(0)),
        )
}

pub(crate) fn v_dewar_proposal_code() -> EntityDef {
    EntityDef::view("v_dewarProposalCode", "v_dewarProposalCode")
        .with_field(FieldDef::new("proposalCode", ColumnType::varchar(45)))
        .with_field(
            FieldDef::new("COUNT(*)", ColumnType::bigint(21)).with_default(DefaultValue::Int(0)),
        )
}

pub(crate) fn v_dewar_proposal_code_by_week() -> EntityDef {
    EntityDef::view("v_dewarProposalCodeByWeek", "v_dewarProposalCodeByWeek")
        .with_field(FieldDef::new("Week", ColumnType::varchar(23)))
        .with_field(FieldDef::new("MX", ColumnType::bigint(21)).with_default(DefaultValue::Int(0)))
        .with_field(FieldDef::new("FX", ColumnType::bigint(21)).with_default(DefaultValue::Int(0)))
        .with_field(
            FieldDef::new("BM14U", ColumnType::bigint(21)).with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new("BM161", ColumnType::bigint(21)).with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new("BM162", ColumnType::bigint(21)).with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new("Others", ColumnType::bigint(21)).with_default(DefaultValue::Int(0)),
        )
}

pub(crate) fn v_em_2dclassification() -> EntityDef {
    EntityDef::view("v_em_2dclassification", "v_em_2dclassification")
        .with_field(
            FieldDef::new("proposalId", ColumnType::int(10)).with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new("sessionId", ColumnType::int(10)).with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("imageDirectory", ColumnType::varchar(255)))
        .with_field(
            FieldDef::new("particlePickerId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new("particleClassificationGroupId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new("particleClassificationId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("classNumber", ColumnType::int(10)))
        .with_field(FieldDef::new("classImageFullPath", ColumnType::varchar(255)))
}

pub(crate) fn v_em_classification() -> EntityDef {
    EntityDef::view("v_em_classification", "v_em_classification")
        .with_field(
            FieldDef::new("proposalId", ColumnType::int(10)).with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new("sessionId", ColumnType::int(10)).with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("imageDirectory", ColumnType::varchar(255)))
        .with_field(
            FieldDef::new("particlePickerId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("numberOfParticles", ColumnType::int(10)))
        .with_field(
            FieldDef::new("particleClassificationGroupId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new("particleClassificationId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("classNumber", ColumnType::int(10)))
        .with_field(FieldDef::new("classImageFullPath", ColumnType::varchar(255)))
        .with_field(FieldDef::new("particlesPerClass", ColumnType::int(10)))
        .with_field(FieldDef::new("classDistribution", ColumnType::float()))
        .with_field(FieldDef::new("rotationAccuracy", ColumnType::float()))
        .with_field(FieldDef::new("translationAccuracy", ColumnType::float()))
        .with_field(FieldDef::new("estimatedResolution", ColumnType::float()))
        .with_field(FieldDef::new("overallFourierCompleteness", ColumnType::float()))
}

pub(crate) fn v_em_movie() -> EntityDef {
    EntityDef::view("v_em_movie", "v_em_movie")
        .with_field(
            FieldDef::new("Movie_movieId", ColumnType::int(11)).with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("Movie_dataCollectionId", ColumnType::int(10)))
        .with_field(FieldDef::new("Movie_movieNumber", ColumnType::int(11)))
        .with_field(FieldDef::new("Movie_movieFullPath", ColumnType::varchar(255)))
        .with_field(FieldDef::new("Movie_positionX", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Movie_positionY", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Movie_micrographFullPath", ColumnType::varchar(255)))
        .with_field(FieldDef::new("Movie_micrographSnapshotFullPath", ColumnType::varchar(255)))
        .with_field(FieldDef::new("Movie_xmlMetaDataFullPath", ColumnType::varchar(255)))
        .with_field(FieldDef::new("Movie_dosePerImage", ColumnType::varchar(45)))
        .with_field(
            FieldDef::new("Movie_createdTimeStamp", ColumnType::Timestamp)
                .with_default(DefaultValue::CurrentTimestamp),
        )
        .with_field(
            FieldDef::new("MotionCorrection_motionCorrectionId", ColumnType::int(11))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("MotionCorrection_movieId", ColumnType::int(11)))
        .with_field(FieldDef::new("MotionCorrection_firstFrame", ColumnType::varchar(45)))
        .with_field(FieldDef::new("MotionCorrection_lastFrame", ColumnType::varchar(45)))
        .with_field(FieldDef::new("MotionCorrection_dosePerFrame", ColumnType::varchar(45)))
        .with_field(FieldDef::new("MotionCorrection_doseWeight", ColumnType::varchar(45)))
        .with_field(FieldDef::new("MotionCorrection_totalMotion", ColumnType::varchar(45)))
        .with_field(
            FieldDef::new("MotionCorrection_averageMotionPerFrame", ColumnType::varchar(45)),
        )
        .with_field(FieldDef::new("MotionCorrection_driftPlotFullPath", ColumnType::varchar(512)))
        .with_field(FieldDef::new("MotionCorrection_micrographFullPath", ColumnType::varchar(512)))
        .with_field(
            FieldDef::new("MotionCorrection_micrographSnapshotFullPath", ColumnType::varchar(512)),
        )
        .with_field(
            FieldDef::new(
                "MotionCorrection_correctedDoseMicrographFullPath",
                ColumnType::varchar(512),
            ),
        )
        .with_field(FieldDef::new("MotionCorrection_patchesUsed", ColumnType::varchar(45)))
        .with_field(FieldDef::new("MotionCorrection_logFileFullPath", ColumnType::varchar(512)))
        .with_field(
            FieldDef::new("CTF_CTFid", ColumnType::int(11)).with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("CTF_motionCorrectionId", ColumnType::int(11)))
        .with_field(FieldDef::new("CTF_spectraImageThumbnailFullPath", ColumnType::varchar(512)))
        .with_field(FieldDef::new("CTF_spectraImageFullPath", ColumnType::varchar(512)))
        .with_field(FieldDef::new("CTF_defocusU", ColumnType::varchar(45)))
        .with_field(FieldDef::new("CTF_defocusV", ColumnType::varchar(45)))
        .with_field(FieldDef::new("CTF_angle", ColumnType::varchar(45)))
        .with_field(FieldDef::new("CTF_crossCorrelationCoefficient", ColumnType::varchar(45)))
        .with_field(FieldDef::new("CTF_resolutionLimit", ColumnType::varchar(45)))
        .with_field(FieldDef::new("CTF_estimatedBfactor", ColumnType::varchar(45)))
        .with_field(FieldDef::new("CTF_logFilePath", ColumnType::varchar(512)))
        .with_field(
            FieldDef::new("CTF_createdTimeStamp", ColumnType::Timestamp)
                .with_default(DefaultValue::CurrentTimestamp),
        )
        .with_field(
            FieldDef::new("Proposal_proposalId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new("BLSession_sessionId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
}

pub(crate) fn v_em_stats() -> EntityDef {
    EntityDef::view("v_em_stats", "v_em_stats")
        .with_field(
            FieldDef::new("proposalId", ColumnType::int(10)).with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new("sessionId", ColumnType::int(10)).with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("imageDirectory", ColumnType::varchar(255)))
        .with_field(
            FieldDef::new("movieId", ColumnType::int(11)).with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("movieNumber", ColumnType::int(11)))
        .with_field(
            FieldDef::new("createdTimeStamp", ColumnType::Timestamp)
                .with_default(DefaultValue::CurrentTimestamp),
        )
        .with_field(
            FieldDef::new("motionCorrectionId", ColumnType::int(11))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new("dataCollectionId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("totalMotion", ColumnType::varchar(45)))
        .with_field(FieldDef::new("averageMotionPerFrame", ColumnType::varchar(45)))
        .with_field(FieldDef::new("lastFrame", ColumnType::varchar(45)))
        .with_field(FieldDef::new("dosePerFrame", ColumnType::varchar(45)))
        .with_field(FieldDef::new("defocusU", ColumnType::varchar(45)))
        .with_field(FieldDef::new("defocusV", ColumnType::varchar(45)))
        .with_field(FieldDef::new("resolutionLimit", ColumnType::varchar(45)))
        .with_field(FieldDef::new("estimatedBfactor", ColumnType::varchar(45)))
        .with_field(FieldDef::new("angle", ColumnType::varchar(45)))
}

pub(crate) fn v_energy_scan() -> EntityDef {
    EntityDef::view("v_energyScan", "v_energyScan")
        .with_field(
            FieldDef::new("energyScanId", ColumnType::int(10)).with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("sessionId", ColumnType::int(10)))
        .with_field(FieldDef::new("blSampleId", ColumnType::int(10)))
        .with_field(FieldDef::new("fluorescenceDetector", ColumnType::varchar(255)))
        .with_field(FieldDef::new("scanFileFullPath", ColumnType::varchar(255)))
        .with_field(FieldDef::new("choochFileFullPath", ColumnType::varchar(255)))
        .with_field(FieldDef::new("jpegChoochFileFullPath", ColumnType::varchar(255)))
        .with_field(FieldDef::new("element", ColumnType::varchar(45)))
        .with_field(FieldDef::new("startEnergy", ColumnType::float()))
        .with_field(FieldDef::new("endEnergy", ColumnType::float()))
        .with_field(FieldDef::new("transmissionFactor", ColumnType::float()))
        .with_field(FieldDef::new("exposureTime", ColumnType::float()))
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
        .with_field(FieldDef::new("flux", ColumnType::decimal()))
        .with_field(FieldDef::new("flux_end", ColumnType::decimal()))
        .with_field(FieldDef::new("remoteEnergy", ColumnType::float()))
        .with_field(FieldDef::new("remoteFPrime", ColumnType::float()))
        .with_field(FieldDef::new("remoteFDoublePrime", ColumnType::float()))
        .with_field(
            FieldDef::new("BLSample_sampleId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("name", ColumnType::varchar(100)))
        .with_field(FieldDef::new("code", ColumnType::varchar(45)))
        .with_field(FieldDef::new("acronym", ColumnType::varchar(45)))
        .with_field(
            FieldDef::new("BLSession_proposalId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
}

pub(crate) fn v_hour() -> EntityDef {
    EntityDef::view("v_hour", "v_hour")
        .with_field(FieldDef::new("num", ColumnType::varchar(18)))
}

pub(crate) fn v_log4_stat() -> EntityDef {
    EntityDef::view("v_Log4Stat", "v_Log4Stat")
        .with_field(FieldDef::new("id", ColumnType::int(11)).with_default(DefaultValue::Int(0)))
        .with_field(FieldDef::new("priority", ColumnType::varchar(15)))
        .with_field(FieldDef::new("timestamp", ColumnType::DateTime))
        .with_field(FieldDef::new("msg", ColumnType::varchar(255)))
        .with_field(FieldDef::new("detail", ColumnType::varchar(255)))
        .with_field(FieldDef::new("value", ColumnType::varchar(255)))
}

pub(crate) fn v_logon_by_hour() -> EntityDef {
    EntityDef::view("v_logonByHour", "v_logonByHour")
        .with_field(FieldDef::new("Hour", ColumnType::varchar(7)))
        .with_field(
            FieldDef::new("Distinct logins", ColumnType::bigint(21))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new("Total logins", ColumnType::bigint(22))
                .with_default(DefaultValue::Int(0)),
        )
}

pub(crate) fn v_logon_by_month_day() -> EntityDef {
    EntityDef::view("v_logonByMonthDay", "v_logonByMonthDay")
        .with_field(FieldDef::new("Day", ColumnType::varchar(5)))
        .with_field(
            FieldDef::new("Distinct logins", ColumnType::bigint(21))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new("Total logins", ColumnType::bigint(22))
                .with_default(DefaultValue::Int(0)),
        )
}

pub(crate) fn v_logon_by_week() -> EntityDef {
    EntityDef::view("v_logonByWeek", "v_logonByWeek")
        .with_field(FieldDef::new("Week", ColumnType::varchar(23)))
        .with_field(
            FieldDef::new("Distinct logins", ColumnType::bigint(21))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new("Total logins", ColumnType::bigint(22))
                .with_default(DefaultValue::Int(0)),
        )
}

pub(crate) fn v_logon_by_week_day() -> EntityDef {
    EntityDef::view("v_logonByWeekDay", "v_logonByWeekDay")
        .with_field(FieldDef::new("Day", ColumnType::varchar(64)))
        .with_field(
            FieldDef::new("Distinct logins", ColumnType::bigint(21))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new("Total logins", ColumnType::bigint(22))
                .with_default(DefaultValue::Int(0)),
        )
}

pub(crate) fn v_month_day() -> EntityDef {
    EntityDef::view("v_monthDay", "v_monthDay")
        .with_field(FieldDef::new("num", ColumnType::varchar(10)))
}

pub(crate) fn v_mx_autoprocessing_stats() -> EntityDef {
    EntityDef::view("v_mx_autoprocessing_stats", "v_mx_autoprocessing_stats")
        .with_field(
            FieldDef::new("autoProcScalingStatisticsId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("autoProcScalingId", ColumnType::int(10)))
        .with_field(
            FieldDef::new(
                "scalingStatisticsType",
                ColumnType::enumeration(&["overall", "innerShell", "outerShell"]),
            )
                .with_default(DefaultValue::String("overall".into())),
        )
        .with_field(FieldDef::new("resolutionLimitLow", ColumnType::float()))
        .with_field(FieldDef::new("resolutionLimitHigh", ColumnType::float()))
        .with_field(FieldDef::new("rMerge", ColumnType::float()))
        .with_field(FieldDef::new("rMeasWithinIPlusIMinus", ColumnType::float()))
        .with_field(FieldDef::new("rMeasAllIPlusIMinus", ColumnType::float()))
        .with_field(FieldDef::new("rPimWithinIPlusIMinus", ColumnType::float()))
        .with_field(FieldDef::new("rPimAllIPlusIMinus", ColumnType::float()))
        .with_field(FieldDef::new("fractionalPartialBias", ColumnType::float()))
        .with_field(FieldDef::new("nTotalObservations", ColumnType::int(11)))
        .with_field(FieldDef::new("nTotalUniqueObservations", ColumnType::int(11)))
        .with_field(FieldDef::new("meanIOverSigI", ColumnType::float()))
        .with_field(FieldDef::new("completeness", ColumnType::float()))
        .with_field(FieldDef::new("multiplicity", ColumnType::float()))
        .with_field(FieldDef::new("anomalousCompleteness", ColumnType::float()))
        .with_field(FieldDef::new("anomalousMultiplicity", ColumnType::float()))
        .with_field(FieldDef::new("recordTimeStamp", ColumnType::DateTime))
        .with_field(
            FieldDef::new("anomalous", ColumnType::tinyint(1)).with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("ccHalf", ColumnType::float()))
        .with_field(FieldDef::new("ccAno", ColumnType::float()))
        .with_field(FieldDef::new("sigAno", ColumnType::varchar(45)))
        .with_field(FieldDef::new("ISA", ColumnType::varchar(45)))
        .with_field(
            FieldDef::new("dataCollectionId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("strategySubWedgeOrigId", ColumnType::int(10)))
        .with_field(FieldDef::new("detectorId", ColumnType::int(11)))
        .with_field(FieldDef::new("blSubSampleId", ColumnType::int(10)))
        .with_field(FieldDef::new("dataCollectionNumber", ColumnType::int(10)))
        .with_field(FieldDef::new("startTime", ColumnType::DateTime))
        .with_field(FieldDef::new("endTime", ColumnType::DateTime))
        .with_field(
            FieldDef::new("sessionId", ColumnType::int(10)).with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new("proposalId", ColumnType::int(10)).with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("beamLineName", ColumnType::varchar(45)))
}

pub(crate) fn v_mx_experiment_stats() -> EntityDef {
    EntityDef::view("v_mx_experiment_stats", "v_mx_experiment_stats")
        .with_field(FieldDef::new("startTime", ColumnType::DateTime))
        .with_field(FieldDef::new("Images", ColumnType::int(10)))
        .with_field(FieldDef::new("Transmission", ColumnType::float()))
        .with_field(FieldDef::new("Res. (corner)", ColumnType::float()))
        .with_field(FieldDef::new("En. (Wave.)", ColumnType::float()))
        .with_field(FieldDef::new("Omega start (total)", ColumnType::float()))
        .with_field(FieldDef::new("Exposure Time", ColumnType::float()))
        .with_field(FieldDef::new("Flux", ColumnType::decimal()))
        .with_field(FieldDef::new("Flux End", ColumnType::decimal()))
        .with_field(FieldDef::new("Detector Distance", ColumnType::float()))
        .with_field(FieldDef::new("X Beam", ColumnType::float()))
        .with_field(FieldDef::new("Y Beam", ColumnType::float()))
        .with_field(FieldDef::new("Kappa", ColumnType::float()))
        .with_field(FieldDef::new("Phi", ColumnType::float()))
        .with_field(FieldDef::new("Axis Start", ColumnType::float()))
        .with_field(FieldDef::new("Axis End", ColumnType::float()))
        .with_field(FieldDef::new("Axis Range", ColumnType::float()))
        .with_field(FieldDef::new("Beam Size X", ColumnType::float()))
        .with_field(FieldDef::new("Beam Size Y", ColumnType::float()))
        .with_field(FieldDef::new("beamLineName", ColumnType::varchar(45)))
        .with_field(FieldDef::new("comments", ColumnType::varchar(1024)))
        .with_field(FieldDef::new("proposalNumber", ColumnType::varchar(45)))
}

pub(crate) fn v_mx_sample() -> EntityDef {
    EntityDef::view("v_mx_sample", "v_mx_sample")
        .with_field(
            FieldDef::new("BLSample_blSampleId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("BLSample_diffractionPlanId", ColumnType::int(10)))
        .with_field(FieldDef::new("BLSample_crystalId", ColumnType::int(10)))
        .with_field(FieldDef::new("BLSample_containerId", ColumnType::int(10)))
        .with_field(FieldDef::new("BLSample_name", ColumnType::varchar(100)))
        .with_field(FieldDef::new("BLSample_code", ColumnType::varchar(45)))
        .with_field(FieldDef::new("BLSample_location", ColumnType::varchar(45)))
        .with_field(FieldDef::new("BLSample_holderLength", ColumnType::decimal()))
        .with_field(FieldDef::new("BLSample_loopLength", ColumnType::decimal()))
        .with_field(FieldDef::new("BLSample_loopType", ColumnType::varchar(45)))
        .with_field(FieldDef::new("BLSample_wireWidth", ColumnType::decimal()))
        .with_field(FieldDef::new("BLSample_comments", ColumnType::varchar(1024)))
        .with_field(FieldDef::new("BLSample_completionStage", ColumnType::varchar(45)))
        .with_field(FieldDef::new("BLSample_structureStage", ColumnType::varchar(45)))
        .with_field(FieldDef::new("BLSample_publicationStage", ColumnType::varchar(45)))
        .with_field(FieldDef::new("BLSample_publicationComments", ColumnType::varchar(255)))
        .with_field(FieldDef::new("BLSample_blSampleStatus", ColumnType::varchar(20)))
        .with_field(FieldDef::new("BLSample_isInSampleChanger", ColumnType::tinyint(1)))
        .with_field(FieldDef::new("BLSample_lastKnownCenteringPosition", ColumnType::varchar(255)))
        .with_field(
            FieldDef::new("BLSample_recordTimeStamp", ColumnType::Timestamp)
                .with_default(DefaultValue::CurrentTimestamp),
        )
        .with_field(FieldDef::new("BLSample_SMILES", ColumnType::varchar(400)))
        .with_field(
            FieldDef::new("Protein_proteinId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("Protein_name", ColumnType::varchar(255)))
        .with_field(FieldDef::new("Protein_acronym", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Protein_proteinType", ColumnType::varchar(45)))
        .with_field(
            FieldDef::new("Protein_proposalId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new("Person_personId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("Person_familyName", ColumnType::varchar(100)))
        .with_field(FieldDef::new("Person_givenName", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Person_emailAddress", ColumnType::varchar(60)))
        .with_field(
            FieldDef::new("Container_containerId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("Container_code", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Container_containerType", ColumnType::varchar(20)))
        .with_field(FieldDef::new("Container_containerStatus", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Container_beamlineLocation", ColumnType::varchar(20)))
        .with_field(FieldDef::new("Container_sampleChangerLocation", ColumnType::varchar(20)))
        .with_field(FieldDef::new("Dewar_code", ColumnType::varchar(45)))
        .with_field(
            FieldDef::new("Dewar_dewarId", ColumnType::int(10)).with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("Dewar_storageLocation", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Dewar_dewarStatus", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Dewar_barCode", ColumnType::varchar(45)))
        .with_field(
            FieldDef::new("Shipping_shippingId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new("sessionId", ColumnType::int(10)).with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("BLSession_startDate", ColumnType::DateTime))
        .with_field(FieldDef::new("BLSession_beamLineName", ColumnType::varchar(45)))
}

pub(crate) fn v_phasing() -> EntityDef {
    EntityDef::view("v_phasing", "v_phasing")
        .with_field(
            FieldDef::new("BLSample_blSampleId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new("AutoProcIntegration_autoProcIntegrationId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("AutoProcIntegration_dataCollectionId", ColumnType::int(10)))
        .with_field(FieldDef::new("AutoProcIntegration_autoProcProgramId", ColumnType::int(10)))
        .with_field(FieldDef::new("AutoProcIntegration_startImageNumber", ColumnType::int(10)))
        .with_field(FieldDef::new("AutoProcIntegration_endImageNumber", ColumnType::int(10)))
        .with_field(
            FieldDef::new("AutoProcIntegration_refinedDetectorDistance", ColumnType::float()),
        )
        .with_field(FieldDef::new("AutoProcIntegration_refinedXBeam", ColumnType::float()))
        .with_field(FieldDef::new("AutoProcIntegration_refinedYBeam", ColumnType::float()))
        .with_field(FieldDef::new("AutoProcIntegration_rotationAxisX", ColumnType::float()))
        .with_field(FieldDef::new("AutoProcIntegration_rotationAxisY", ColumnType::float()))
        .with_field(FieldDef::new("AutoProcIntegration_rotationAxisZ", ColumnType::float()))
        .with_field(FieldDef::new("AutoProcIntegration_beamVectorX", ColumnType::float()))
        .with_field(FieldDef::new("AutoProcIntegration_beamVectorY", ColumnType::float()))
        .with_field(FieldDef::new("AutoProcIntegration_beamVectorZ", ColumnType::float()))
        .with_field(FieldDef::new("AutoProcIntegration_cell_a", ColumnType::float()))
        .with_field(FieldDef::new("AutoProcIntegration_cell_b", ColumnType::float()))
        .with_field(FieldDef::new("AutoProcIntegration_cell_c", ColumnType::float()))
        .with_field(FieldDef::new("AutoProcIntegration_cell_alpha", ColumnType::float()))
        .with_field(FieldDef::new("AutoProcIntegration_cell_beta", ColumnType::float()))
        .with_field(FieldDef::new("AutoProcIntegration_cell_gamma", ColumnType::float()))
        .with_field(FieldDef::new("AutoProcIntegration_recordTimeStamp", ColumnType::DateTime))
        .with_field(
            FieldDef::new("AutoProcIntegration_anomalous", ColumnType::tinyint(1))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new("SpaceGroup_spaceGroupId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("SpaceGroup_geometryClassnameId", ColumnType::int(10)))
        .with_field(FieldDef::new("SpaceGroup_spaceGroupNumber", ColumnType::int(10)))
        .with_field(FieldDef::new("SpaceGroup_spaceGroupShortName", ColumnType::varchar(45)))
        .with_field(FieldDef::new("SpaceGroup_spaceGroupName", ColumnType::varchar(45)))
        .with_field(FieldDef::new("SpaceGroup_bravaisLattice", ColumnType::varchar(45)))
        .with_field(FieldDef::new("SpaceGroup_bravaisLatticeName", ColumnType::varchar(45)))
        .with_field(FieldDef::new("SpaceGroup_pointGroup", ColumnType::varchar(45)))
        .with_field(
            FieldDef::new("SpaceGroup_MX_used", ColumnType::tinyint(1))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new("PhasingStep_phasingStepId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("PhasingStep_previousPhasingStepId", ColumnType::int(10)))
        .with_field(FieldDef::new("PhasingStep_programRunId", ColumnType::int(10)))
        .with_field(FieldDef::new("PhasingStep_spaceGroupId", ColumnType::int(10)))
        .with_field(FieldDef::new("PhasingStep_autoProcScalingId", ColumnType::int(10)))
        .with_field(FieldDef::new("PhasingStep_phasingAnalysisId", ColumnType::int(10)))
        .with_field(
            FieldDef::new(
                "PhasingStep_phasingStepType",
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
        .with_field(FieldDef::new("PhasingStep_method", ColumnType::varchar(45)))
        .with_field(FieldDef::new("PhasingStep_solventContent", ColumnType::varchar(45)))
        .with_field(FieldDef::new("PhasingStep_enantiomorph", ColumnType::varchar(45)))
        .with_field(FieldDef::new("PhasingStep_lowRes", ColumnType::varchar(45)))
        .with_field(FieldDef::new("PhasingStep_highRes", ColumnType::varchar(45)))
        .with_field(
            FieldDef::new("PhasingStep_recordTimeStamp", ColumnType::Timestamp)
                .with_default(DefaultValue::CurrentTimestamp),
        )
        .with_field(
            FieldDef::new("DataCollection_dataCollectionId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("DataCollection_dataCollectionGroupId", ColumnType::int(11)))
        .with_field(FieldDef::new("DataCollection_strategySubWedgeOrigId", ColumnType::int(10)))
        .with_field(FieldDef::new("DataCollection_detectorId", ColumnType::int(11)))
        .with_field(FieldDef::new("DataCollection_blSubSampleId", ColumnType::int(10)))
        .with_field(FieldDef::new("DataCollection_dataCollectionNumber", ColumnType::int(10)))
        .with_field(FieldDef::new("DataCollection_startTime", ColumnType::DateTime))
        .with_field(FieldDef::new("DataCollection_endTime", ColumnType::DateTime))
        .with_field(FieldDef::new("DataCollection_runStatus", ColumnType::varchar(45)))
        .with_field(FieldDef::new("DataCollection_axisStart", ColumnType::float()))
        .with_field(FieldDef::new("DataCollection_axisEnd", ColumnType::float()))
        .with_field(FieldDef::new("DataCollection_axisRange", ColumnType::float()))
        .with_field(FieldDef::new("DataCollection_overlap", ColumnType::float()))
        .with_field(FieldDef::new("DataCollection_numberOfImages", ColumnType::int(10)))
        .with_field(FieldDef::new("DataCollection_startImageNumber", ColumnType::int(10)))
        .with_field(FieldDef::new("DataCollection_numberOfPasses", ColumnType::int(10)))
        .with_field(FieldDef::new("DataCollection_exposureTime", ColumnType::float()))
        .with_field(FieldDef::new("DataCollection_imageDirectory", ColumnType::varchar(255)))
        .with_field(FieldDef::new("DataCollection_imagePrefix", ColumnType::varchar(100)))
        .with_field(FieldDef::new("DataCollection_imageSuffix", ColumnType::varchar(45)))
        .with_field(FieldDef::new("DataCollection_fileTemplate", ColumnType::varchar(255)))
        .with_field(FieldDef::new("DataCollection_wavelength", ColumnType::float()))
        .with_field(FieldDef::new("DataCollection_resolution", ColumnType::float()))
        .with_field(FieldDef::new("DataCollection_detectorDistance", ColumnType::float()))
        .with_field(FieldDef::new("DataCollection_xBeam", ColumnType::float()))
        .with_field(FieldDef::new("DataCollection_yBeam", ColumnType::float()))
        .with_field(FieldDef::new("DataCollection_xBeamPix", ColumnType::float()))
        .with_field(FieldDef::new("DataCollection_yBeamPix", ColumnType::float()))
        .with_field(FieldDef::new("DataCollection_comments", ColumnType::varchar(1024)))
        .with_field(
            FieldDef::new("DataCollection_printableForReport", ColumnType::tinyint(3))
                .with_default(DefaultValue::Int(1)),
        )
        .with_field(FieldDef::new("DataCollection_slitGapVertical", ColumnType::float()))
        .with_field(FieldDef::new("DataCollection_slitGapHorizontal", ColumnType::float()))
        .with_field(FieldDef::new("DataCollection_transmission", ColumnType::float()))
        .with_field(FieldDef::new("DataCollection_synchrotronMode", ColumnType::varchar(20)))
        .with_field(FieldDef::new("DataCollection_xtalSnapshotFullPath1", ColumnType::varchar(255)))
        .with_field(FieldDef::new("DataCollection_xtalSnapshotFullPath2", ColumnType::varchar(255)))
        .with_field(FieldDef::new("DataCollection_xtalSnapshotFullPath3", ColumnType::varchar(255)))
        .with_field(FieldDef::new("DataCollection_xtalSnapshotFullPath4", ColumnType::varchar(255)))
        .with_field(
            FieldDef::new(
                "DataCollection_rotationAxis",
                ColumnType::enumeration(&["Omega", "Kappa", "Phi"]),
            ),
        )
        .with_field(FieldDef::new("DataCollection_phiStart", ColumnType::float()))
        .with_field(FieldDef::new("DataCollection_kappaStart", ColumnType::float()))
        .with_field(FieldDef::new("DataCollection_omegaStart", ColumnType::float()))
        .with_field(FieldDef::new("DataCollection_resolutionAtCorner", ColumnType::float()))
        .with_field(FieldDef::new("DataCollection_detector2Theta", ColumnType::float()))
        .with_field(FieldDef::new("DataCollection_undulatorGap1", ColumnType::float()))
        .with_field(FieldDef::new("DataCollection_undulatorGap2", ColumnType::float()))
        .with_field(FieldDef::new("DataCollection_undulatorGap3", ColumnType::float()))
        .with_field(FieldDef::new("DataCollection_beamSizeAtSampleX", ColumnType::float()))
        .with_field(FieldDef::new("DataCollection_beamSizeAtSampleY", ColumnType::float()))
        .with_field(FieldDef::new("DataCollection_centeringMethod", ColumnType::varchar(255)))
        .with_field(FieldDef::new("DataCollection_averageTemperature", ColumnType::float()))
        .with_field(
            FieldDef::new("DataCollection_actualCenteringPosition", ColumnType::varchar(255)),
        )
        .with_field(FieldDef::new("DataCollection_beamShape", ColumnType::varchar(45)))
        .with_field(FieldDef::new("DataCollection_flux", ColumnType::decimal()))
        .with_field(FieldDef::new("DataCollection_flux_end", ColumnType::decimal()))
        .with_field(FieldDef::new("DataCollection_totalAbsorbedDose", ColumnType::decimal()))
        .with_field(FieldDef::new("DataCollection_bestWilsonPlotPath", ColumnType::varchar(255)))
        .with_field(
            FieldDef::new("DataCollection_imageQualityIndicatorsPlotPath", ColumnType::varchar(512)),
        )
        .with_field(
            FieldDef::new("DataCollection_imageQualityIndicatorsCSVPath", ColumnType::varchar(512)),
        )
        .with_field(
            FieldDef::new("PhasingProgramRun_phasingProgramRunId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("PhasingProgramRun_phasingCommandLine", ColumnType::varchar(255)))
        .with_field(FieldDef::new("PhasingProgramRun_phasingPrograms", ColumnType::varchar(255)))
        .with_field(FieldDef::new("PhasingProgramRun_phasingStatus", ColumnType::tinyint(1)))
        .with_field(FieldDef::new("PhasingProgramRun_phasingMessage", ColumnType::varchar(255)))
        .with_field(FieldDef::new("PhasingProgramRun_phasingStartTime", ColumnType::DateTime))
        .with_field(FieldDef::new("PhasingProgramRun_phasingEndTime", ColumnType::DateTime))
        .with_field(FieldDef::new("PhasingProgramRun_phasingEnvironment", ColumnType::varchar(255)))
        .with_field(FieldDef::new("PhasingProgramRun_phasingDirectory", ColumnType::varchar(255)))
        .with_field(
            FieldDef::new("PhasingProgramRun_recordTimeStamp", ColumnType::Timestamp)
                .with_default(DefaultValue::CurrentTimestamp),
        )
        .with_field(
            FieldDef::new("Protein_proteinId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new("BLSession_sessionId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new("BLSession_proposalId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new("PhasingStatistics_phasingStatisticsId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new(
                "PhasingStatistics_metric",
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
            ),
        )
        .with_field(FieldDef::new("PhasingStatistics_statisticsValue", ColumnType::decimal()))
}

pub(crate) fn v_sample() -> EntityDef {
    EntityDef::view("v_sample", "v_sample")
        .with_field(
            FieldDef::new("proposalId", ColumnType::int(10)).with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new("shippingId", ColumnType::int(10)).with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new("dewarId", ColumnType::int(10)).with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new("containerId", ColumnType::int(10)).with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new("blSampleId", ColumnType::int(10)).with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("proposalCode", ColumnType::varchar(45)))
        .with_field(FieldDef::new("proposalNumber", ColumnType::varchar(45)))
        .with_field(FieldDef::new("creationDate", ColumnType::DateTime))
        .with_field(FieldDef::new("shippingType", ColumnType::varchar(45)))
        .with_field(FieldDef::new("barCode", ColumnType::varchar(45)))
        .with_field(FieldDef::new("shippingStatus", ColumnType::varchar(45)))
}

pub(crate) fn v_sample_by_week() -> EntityDef {
    EntityDef::view("v_sampleByWeek", "v_sampleByWeek")
        .with_field(FieldDef::new("Week", ColumnType::varchar(23)))
        .with_field(FieldDef::new("Samples", ColumnType::bigint(21)))
}

pub(crate) fn v_saxs_datacollection() -> EntityDef {
    EntityDef::view("v_saxs_datacollection", "v_saxs_datacollection")
        .with_field(
            FieldDef::new("Subtraction_subtractionId", ColumnType::int(11))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new("MeasurementToDataCollection_dataCollectionId", ColumnType::int(11)),
        )
        .with_field(
            FieldDef::new("MeasurementToDataCollection_dataCollectionOrder", ColumnType::int(11)),
        )
        .with_field(
            FieldDef::new(
                "MeasurementToDataCollection_measurementToDataCollectionId",
                ColumnType::int(11),
            )
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new("Specimen_specimenId", ColumnType::int(11))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("Measurement_code", ColumnType::varchar(100)))
        .with_field(
            FieldDef::new("Measurement_measurementId", ColumnType::int(11))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new("Buffer_bufferId", ColumnType::int(11))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new("Buffer_proposalId", ColumnType::int(11))
                .with_default(DefaultValue::Int(-1)),
        )
        .with_field(FieldDef::new("Buffer_safetyLevelId", ColumnType::int(11)))
        .with_field(FieldDef::new("Buffer_name", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Buffer_acronym", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Buffer_pH", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Buffer_composition", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Buffer_comments", ColumnType::varchar(512)))
        .with_field(
            FieldDef::new("Macromolecule_macromoleculeId", ColumnType::int(11))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("Macromolecule_proposalId", ColumnType::int(10)))
        .with_field(FieldDef::new("Macromolecule_safetyLevelId", ColumnType::int(11)))
        .with_field(FieldDef::new("Macromolecule_name", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Macromolecule_acronym", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Macromolecule_extintionCoefficient", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Macromolecule_molecularMass", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Macromolecule_sequence", ColumnType::varchar(1000)))
        .with_field(
            FieldDef::new("Macromolecule_contactsDescriptionFilePath", ColumnType::varchar(255)),
        )
        .with_field(FieldDef::new("Macromolecule_symmetry", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Macromolecule_comments", ColumnType::varchar(1024)))
        .with_field(FieldDef::new("Macromolecule_refractiveIndex", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Macromolecule_solventViscosity", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Macromolecule_creationDate", ColumnType::DateTime))
        .with_field(FieldDef::new("Specimen_experimentId", ColumnType::int(11)))
        .with_field(FieldDef::new("Specimen_bufferId", ColumnType::int(11)))
        .with_field(FieldDef::new("Specimen_samplePlatePositionId", ColumnType::int(11)))
        .with_field(FieldDef::new("Specimen_safetyLevelId", ColumnType::int(11)))
        .with_field(FieldDef::new("Specimen_stockSolutionId", ColumnType::int(11)))
        .with_field(FieldDef::new("Specimen_code", ColumnType::varchar(255)))
        .with_field(FieldDef::new("Specimen_concentration", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Specimen_volume", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Specimen_comments", ColumnType::varchar(5120)))
        .with_field(
            FieldDef::new("SamplePlatePosition_samplePlatePositionId", ColumnType::int(11))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("SamplePlatePosition_samplePlateId", ColumnType::int(11)))
        .with_field(FieldDef::new("SamplePlatePosition_rowNumber", ColumnType::int(11)))
        .with_field(FieldDef::new("SamplePlatePosition_columnNumber", ColumnType::int(11)))
        .with_field(FieldDef::new("SamplePlatePosition_volume", ColumnType::varchar(45)))
        .with_field(
            FieldDef::new("samplePlateId", ColumnType::int(11)).with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("experimentId", ColumnType::int(11)))
        .with_field(FieldDef::new("plateGroupId", ColumnType::int(11)))
        .with_field(FieldDef::new("plateTypeId", ColumnType::int(11)))
        .with_field(FieldDef::new("instructionSetId", ColumnType::int(11)))
        .with_field(FieldDef::new("SamplePlate_boxId", ColumnType::int(10)))
        .with_field(FieldDef::new("SamplePlate_name", ColumnType::varchar(45)))
        .with_field(FieldDef::new("SamplePlate_slotPositionRow", ColumnType::varchar(45)))
        .with_field(FieldDef::new("SamplePlate_slotPositionColumn", ColumnType::varchar(45)))
        .with_field(FieldDef::new("SamplePlate_storageTemperature", ColumnType::varchar(45)))
        .with_field(
            FieldDef::new("Experiment_experimentId", ColumnType::int(11))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("Experiment_sessionId", ColumnType::int(10)))
        .with_field(FieldDef::new("Experiment_proposalId", ColumnType::int(11)))
        .with_field(FieldDef::new("Experiment_name", ColumnType::varchar(255)))
        .with_field(FieldDef::new("Experiment_creationDate", ColumnType::DateTime))
        .with_field(FieldDef::new("Experiment_experimentType", ColumnType::varchar(128)))
        .with_field(FieldDef::new("Experiment_sourceFilePath", ColumnType::varchar(256)))
        .with_field(FieldDef::new("Experiment_dataAcquisitionFilePath", ColumnType::varchar(256)))
        .with_field(FieldDef::new("Experiment_status", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Experiment_comments", ColumnType::varchar(512)))
        .with_field(FieldDef::new("Measurement_priorityLevelId", ColumnType::int(11)))
        .with_field(FieldDef::new("Measurement_exposureTemperature", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Measurement_viscosity", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Measurement_flow", ColumnType::tinyint(1)))
        .with_field(FieldDef::new("Measurement_extraFlowTime", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Measurement_volumeToLoad", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Measurement_waitTime", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Measurement_transmission", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Measurement_comments", ColumnType::varchar(512)))
        .with_field(FieldDef::new("Measurement_imageDirectory", ColumnType::varchar(512)))
        .with_field(
            FieldDef::new("Run_runId", ColumnType::int(11)).with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("Run_timePerFrame", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Run_timeStart", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Run_timeEnd", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Run_storageTemperature", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Run_exposureTemperature", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Run_spectrophotometer", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Run_energy", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Run_creationDate", ColumnType::DateTime))
        .with_field(FieldDef::new("Run_frameAverage", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Run_frameCount", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Run_transmission", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Run_beamCenterX", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Run_beamCenterY", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Run_pixelSizeX", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Run_pixelSizeY", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Run_radiationRelative", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Run_radiationAbsolute", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Run_normalization", ColumnType::varchar(45)))
        .with_field(
            FieldDef::new("Merge_mergeId", ColumnType::int(11)).with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("Merge_measurementId", ColumnType::int(11)))
        .with_field(FieldDef::new("Merge_frameListId", ColumnType::int(11)))
        .with_field(FieldDef::new("Merge_discardedFrameNameList", ColumnType::varchar(1024)))
        .with_field(FieldDef::new("Merge_averageFilePath", ColumnType::varchar(255)))
        .with_field(FieldDef::new("Merge_framesCount", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Merge_framesMerge", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Merge_creationDate", ColumnType::DateTime))
        .with_field(FieldDef::new("Subtraction_dataCollectionId", ColumnType::int(11)))
        .with_field(FieldDef::new("Subtraction_rg", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Subtraction_rgStdev", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Subtraction_I0", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Subtraction_I0Stdev", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Subtraction_firstPointUsed", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Subtraction_lastPointUsed", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Subtraction_quality", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Subtraction_isagregated", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Subtraction_concentration", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Subtraction_gnomFilePath", ColumnType::varchar(255)))
        .with_field(FieldDef::new("Subtraction_rgGuinier", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Subtraction_rgGnom", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Subtraction_dmax", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Subtraction_total", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Subtraction_volume", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Subtraction_creationTime", ColumnType::DateTime))
        .with_field(FieldDef::new("Subtraction_kratkyFilePath", ColumnType::varchar(255)))
        .with_field(FieldDef::new("Subtraction_scatteringFilePath", ColumnType::varchar(255)))
        .with_field(FieldDef::new("Subtraction_guinierFilePath", ColumnType::varchar(255)))
        .with_field(FieldDef::new("Subtraction_substractedFilePath", ColumnType::varchar(255)))
        .with_field(FieldDef::new("Subtraction_gnomFilePathOutput", ColumnType::varchar(255)))
        .with_field(FieldDef::new("Subtraction_sampleOneDimensionalFiles", ColumnType::int(11)))
        .with_field(FieldDef::new("Subtraction_bufferOnedimensionalFiles", ColumnType::int(11)))
        .with_field(FieldDef::new("Subtraction_sampleAverageFilePath", ColumnType::varchar(255)))
        .with_field(FieldDef::new("Subtraction_bufferAverageFilePath", ColumnType::varchar(255)))
}

pub(crate) fn v_session() -> EntityDef {
    EntityDef::view("v_session", "v_session")
        .with_field(
            FieldDef::new("sessionId", ColumnType::int(10)).with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("expSessionPk", ColumnType::int(10)))
        .with_field(FieldDef::new("beamLineSetupId", ColumnType::int(10)))
        .with_field(
            FieldDef::new("proposalId", ColumnType::int(10)).with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("projectCode", ColumnType::varchar(45)))
        .with_field(FieldDef::new("BLSession_startDate", ColumnType::DateTime))
        .with_field(FieldDef::new("BLSession_endDate", ColumnType::DateTime))
        .with_field(FieldDef::new("beamLineName", ColumnType::varchar(45)))
        .with_field(FieldDef::new("scheduled", ColumnType::tinyint(1)))
        .with_field(FieldDef::new("nbShifts", ColumnType::int(10)))
        .with_field(FieldDef::new("comments", ColumnType::varchar(2000)))
        .with_field(FieldDef::new("beamLineOperator", ColumnType::varchar(255)))
        .with_field(
            FieldDef::new("visit_number", ColumnType::int(10)).with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new("bltimeStamp", ColumnType::Timestamp)
                .with_default(DefaultValue::CurrentTimestamp),
        )
        .with_field(FieldDef::new("usedFlag", ColumnType::tinyint(1)))
        .with_field(FieldDef::new("sessionTitle", ColumnType::varchar(255)))
        .with_field(FieldDef::new("structureDeterminations", ColumnType::float()))
        .with_field(FieldDef::new("dewarTransport", ColumnType::float()))
        .with_field(FieldDef::new("databackupFrance", ColumnType::float()))
        .with_field(FieldDef::new("databackupEurope", ColumnType::float()))
        .with_field(FieldDef::new("operatorSiteNumber", ColumnType::varchar(10)))
        .with_field(
            FieldDef::new("BLSession_lastUpdate", ColumnType::Timestamp)
                .with_default(DefaultValue::ZeroTimestamp),
        )
        .with_field(FieldDef::new("BLSession_protectedData", ColumnType::varchar(1024)))
        .with_field(FieldDef::new("Proposal_title", ColumnType::varchar(200)))
        .with_field(FieldDef::new("Proposal_proposalCode", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Proposal_ProposalNumber", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Proposal_ProposalType", ColumnType::varchar(2)))
        .with_field(
            FieldDef::new("Person_personId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("Person_familyName", ColumnType::varchar(100)))
        .with_field(FieldDef::new("Person_givenName", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Person_emailAddress", ColumnType::varchar(60)))
}

pub(crate) fn v_tracking_shipment_history() -> EntityDef {
    EntityDef::view("v_tracking_shipment_history", "v_tracking_shipment_history")
        .with_field(
            FieldDef::new("Dewar_dewarId", ColumnType::int(10)).with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("Dewar_code", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Dewar_comments", ColumnType::tiny_text()))
        .with_field(FieldDef::new("Dewar_dewarStatus", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Dewar_barCode", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Dewar_firstExperimentId", ColumnType::int(10)))
        .with_field(FieldDef::new("Dewar_trackingNumberToSynchrotron", ColumnType::varchar(30)))
        .with_field(FieldDef::new("Dewar_trackingNumberFromSynchrotron", ColumnType::varchar(30)))
        .with_field(
            FieldDef::new("Dewar_type", ColumnType::enumeration(&["Dewar", "Toolbox"]))
                .with_default(DefaultValue::String("Dewar".into())),
        )
        .with_field(
            FieldDef::new("Shipping_shippingId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new("Shipping_proposalId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("Shipping_shippingName", ColumnType::varchar(45)))
        .with_field(FieldDef::new("deliveryAgent_agentName", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Shipping_deliveryAgent_shippingDate", ColumnType::Date))
        .with_field(FieldDef::new("Shipping_deliveryAgent_deliveryDate", ColumnType::Date))
        .with_field(FieldDef::new("Shipping_shippingStatus", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Shipping_returnCourier", ColumnType::varchar(45)))
        .with_field(FieldDef::new("Shipping_dateOfShippingToUser", ColumnType::DateTime))
        .with_field(
            FieldDef::new("DewarTransportHistory_DewarTransportHistoryId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("DewarTransportHistory_dewarStatus", ColumnType::varchar(45)))
        .with_field(FieldDef::new("DewarTransportHistory_storageLocation", ColumnType::varchar(45)))
        .with_field(FieldDef::new("DewarTransportHistory_arrivalDate", ColumnType::DateTime))
}

pub(crate) fn v_week() -> EntityDef {
    EntityDef::view("v_week", "v_week")
        .with_field(FieldDef::new("num", ColumnType::varchar(7)))
}

pub(crate) fn v_week_day() -> EntityDef {
    EntityDef::view("v_weekDay", "v_weekDay")
        .with_field(FieldDef::new("day", ColumnType::varchar(10)))
}

pub(crate) fn v_xfe_fluorescence_spectrum() -> EntityDef {
    EntityDef::view("v_xfeFluorescenceSpectrum", "v_xfeFluorescenceSpectrum")
        .with_field(
            FieldDef::new("xfeFluorescenceSpectrumId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("sessionId", ColumnType::int(10)))
        .with_field(FieldDef::new("blSampleId", ColumnType::int(10)))
        .with_field(FieldDef::new("fittedDataFileFullPath", ColumnType::varchar(255)))
        .with_field(FieldDef::new("scanFileFullPath", ColumnType::varchar(255)))
        .with_field(FieldDef::new("jpegScanFileFullPath", ColumnType::varchar(255)))
        .with_field(FieldDef::new("startTime", ColumnType::DateTime))
        .with_field(FieldDef::new("endTime", ColumnType::DateTime))
        .with_field(FieldDef::new("filename", ColumnType::varchar(255)))
        .with_field(FieldDef::new("energy", ColumnType::float()))
        .with_field(FieldDef::new("exposureTime", ColumnType::float()))
        .with_field(FieldDef::new("beamTransmission", ColumnType::float()))
        .with_field(FieldDef::new("annotatedPymcaXfeSpectrum", ColumnType::varchar(255)))
        .with_field(FieldDef::new("beamSizeVertical", ColumnType::float()))
        .with_field(FieldDef::new("beamSizeHorizontal", ColumnType::float()))
        .with_field(FieldDef::new("crystalClass", ColumnType::varchar(20)))
        .with_field(FieldDef::new("comments", ColumnType::varchar(1024)))
        .with_field(FieldDef::new("flux", ColumnType::decimal()))
        .with_field(FieldDef::new("flux_end", ColumnType::decimal()))
        .with_field(FieldDef::new("workingDirectory", ColumnType::varchar(512)))
        .with_field(
            FieldDef::new("BLSample_sampleId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(
            FieldDef::new("BLSession_proposalId", ColumnType::int(10))
                .with_default(DefaultValue::Int(0)),
        )
}
