//! Foreign-key-derived associations.
//!
//! Single-valued sides are declared here without a join selector unless the source
//! entity holds several foreign keys into the same target; the catalog infers the
//! key column otherwise. Bidirectional pairs live in `associations`.

use ispyb_core::catalog::RelationDef;

pub(crate) fn relations() -> Vec<RelationDef> {
    vec![
        // AbInitioModel
        RelationDef::many_to_one("AveragedModel", "AbInitioModel", "Model")
            .join_on("averagedModelId", "modelId"),
        RelationDef::many_to_one("ModelList", "AbInitioModel", "ModelList"),
        RelationDef::many_to_one("RapidShapeDeterminationModel", "AbInitioModel", "Model")
            .join_on("rapidShapeDeterminationModelId", "modelId"),
        RelationDef::many_to_one("ShapeDeterminationModel", "AbInitioModel", "Model")
            .join_on("shapeDeterminationModelId", "modelId"),
        // Assembly
        RelationDef::many_to_one("Macromolecule", "Assembly", "Macromolecule"),
        // AssemblyHasMacromolecule
        RelationDef::many_to_one("Assembly", "AssemblyHasMacromolecule", "Assembly"),
        RelationDef::many_to_one("Macromolecule", "AssemblyHasMacromolecule", "Macromolecule"),
        // AssemblyRegion
        RelationDef::many_to_one(
            "AssemblyHasMacromolecule",
            "AssemblyRegion",
            "AssemblyHasMacromolecule",
        ),
        // AutoProcIntegration
        RelationDef::many_to_one("DataCollection", "AutoProcIntegration", "DataCollection"),
        // AutoProcProgram
        RelationDef::many_to_one("DataCollection", "AutoProcProgram", "DataCollection"),
        // AutoProcScaling
        RelationDef::many_to_one("AutoProc", "AutoProcScaling", "AutoProc"),
        // AutoProcScalingHasInt
        RelationDef::many_to_one("AutoProcScaling", "AutoProcScalingHasInt", "AutoProcScaling"),
        // AutoProcStatus
        RelationDef::many_to_one("AutoProcIntegration", "AutoProcStatus", "AutoProcIntegration"),
        // BeamApertures
        RelationDef::many_to_one("BeamlineStats", "BeamApertures", "BeamlineStats"),
        // BeamCentres
        RelationDef::many_to_one("BeamlineStats", "BeamCentres", "BeamlineStats"),
        // BeamlineAction
        RelationDef::many_to_one("BLSession", "BeamlineAction", "BLSession"),
        // BFAutomationFault
        RelationDef::many_to_one("BF_automationError", "BFAutomationFault", "BFAutomationError"),
        RelationDef::many_to_one("Container", "BFAutomationFault", "Container"),
        // BFComponent
        RelationDef::many_to_one("BF_system", "BFComponent", "BFSystem"),
        // BFComponentBeamline
        RelationDef::many_to_one("BF_component", "BFComponentBeamline", "BFComponent"),
        // BFFault
        RelationDef::many_to_one("BF_subcomponent", "BFFault", "BFSubcomponent"),
        RelationDef::many_to_one("BLSession", "BFFault", "BLSession"),
        RelationDef::many_to_one("Person", "BFFault", "Person").join_on("assigneeId", "personId"),
        RelationDef::many_to_one("Person1", "BFFault", "Person").join_on("personId", "personId"),
        // BFSubcomponent
        RelationDef::many_to_one("BF_component", "BFSubcomponent", "BFComponent"),
        // BFSubcomponentBeamline
        RelationDef::many_to_one("BF_subcomponent", "BFSubcomponentBeamline", "BFSubcomponent"),
        // BFSystemBeamline
        RelationDef::many_to_one("BF_system", "BFSystemBeamline", "BFSystem"),
        // BLSample
        RelationDef::many_to_one("Container", "BLSample", "Container"),
        RelationDef::many_to_one("Crystal", "BLSample", "Crystal"),
        RelationDef::many_to_one("DiffractionPlan", "BLSample", "DiffractionPlan"),
        RelationDef::many_to_many(
            "DiffractionPlan1",
            "BLSample",
            "DiffractionPlan",
            "BLSample_has_DiffractionPlan",
        ),
        RelationDef::many_to_many("Project", "BLSample", "Project", "Project_has_BLSample"),
        // BLSampleGroupHasBLSample
        RelationDef::many_to_one("BLSample", "BLSampleGroupHasBLSample", "BLSample"),
        RelationDef::many_to_one("BLSampleGroup", "BLSampleGroupHasBLSample", "BLSampleGroup"),
        // BLSampleHasEnergyScan
        RelationDef::many_to_one("BLSample", "BLSampleHasEnergyScan", "BLSample"),
        RelationDef::many_to_one("EnergyScan", "BLSampleHasEnergyScan", "EnergyScan"),
        // BLSampleImage
        RelationDef::many_to_one("BLSample", "BLSampleImage", "BLSample"),
        RelationDef::many_to_one("ContainerInspection", "BLSampleImage", "ContainerInspection"),
        // BLSampleImageAnalysis
        RelationDef::many_to_one("BLSampleImage", "BLSampleImageAnalysis", "BLSampleImage"),
        // BLSampleTypeHasComponent
        RelationDef::many_to_one("Crystal", "BLSampleTypeHasComponent", "Crystal"),
        RelationDef::many_to_one("Protein", "BLSampleTypeHasComponent", "Protein"),
        // BLSession
        RelationDef::many_to_one("BeamLineSetup", "BLSession", "BeamLineSetup"),
        RelationDef::many_to_many("Shipping", "BLSession", "Shipping", "ShippingHasSession"),
        // BLSessionHasSCPosition
        RelationDef::many_to_one("BLSession", "BLSessionHasSCPosition", "BLSession"),
        // BLSubSample
        RelationDef::many_to_one("BLSample", "BLSubSample", "BLSample"),
        RelationDef::many_to_one("DiffractionPlan", "BLSubSample", "DiffractionPlan"),
        RelationDef::many_to_one("MotorPosition", "BLSubSample", "MotorPosition"),
        RelationDef::many_to_one("Position", "BLSubSample", "Position")
            .join_on("position2Id", "positionId"),
        RelationDef::many_to_one("Position1", "BLSubSample", "Position")
            .join_on("positionId", "positionId"),
        // Buffer
        RelationDef::many_to_one("SafetyLevel", "Buffer", "SafetyLevel"),
        // BufferHasAdditive
        RelationDef::many_to_one("Additive", "BufferHasAdditive", "Additive"),
        RelationDef::many_to_one("Buffer", "BufferHasAdditive", "Buffer"),
        RelationDef::many_to_one("MeasurementUnit", "BufferHasAdditive", "MeasurementUnit"),
        // Container
        RelationDef::many_to_one("BLSession", "Container", "BLSession"),
        RelationDef::many_to_one("Dewar", "Container", "Dewar"),
        RelationDef::many_to_one("Person", "Container", "Person"),
        // ContainerHistory
        RelationDef::many_to_one("Container", "ContainerHistory", "Container"),
        // ContainerInspection
        RelationDef::many_to_one("Container", "ContainerInspection", "Container"),
        RelationDef::many_to_one("Imager", "ContainerInspection", "Imager"),
        RelationDef::many_to_one("InspectionType", "ContainerInspection", "InspectionType"),
        RelationDef::many_to_one("ScheduleComponent", "ContainerInspection", "ScheduleComponent"),
        // ContainerQueue
        RelationDef::many_to_one("Container", "ContainerQueue", "Container"),
        RelationDef::many_to_one("Person", "ContainerQueue", "Person"),
        // ContainerQueueSample
        RelationDef::many_to_one("BLSubSample", "ContainerQueueSample", "BLSubSample"),
        RelationDef::many_to_one("ContainerQueue", "ContainerQueueSample", "ContainerQueue"),
        // CryoemInitialModel
        RelationDef::many_to_many(
            "ParticleClassification",
            "CryoemInitialModel",
            "ParticleClassification",
            "ParticleClassification_has_CryoemInitialModel",
        ),
        // Crystal
        RelationDef::many_to_one("DiffractionPlan", "Crystal", "DiffractionPlan"),
        RelationDef::many_to_one("Protein", "Crystal", "Protein"),
        // CrystalComposition
        RelationDef::many_to_one("ConcentrationType", "CrystalComposition", "ConcentrationType"),
        RelationDef::many_to_one("Protein", "CrystalComposition", "Protein"),
        // CrystalHasUUID
        RelationDef::many_to_one("Crystal", "CrystalHasUUID", "Crystal"),
        // DataCollection
        RelationDef::many_to_one("BLSubSample", "DataCollection", "BLSubSample"),
        RelationDef::many_to_one("DataCollectionGroup", "DataCollection", "DataCollectionGroup"),
        RelationDef::many_to_one("Detector", "DataCollection", "Detector"),
        RelationDef::many_to_one(
            "ScreeningStrategySubWedge",
            "DataCollection",
            "ScreeningStrategySubWedge",
        ),
        // DataCollectionFileAttachment
        RelationDef::many_to_one("DataCollection", "DataCollectionFileAttachment", "DataCollection"),
        // DataCollectionGroup
        RelationDef::many_to_one("BLSample", "DataCollectionGroup", "BLSample"),
        RelationDef::many_to_one("BLSession", "DataCollectionGroup", "BLSession"),
        RelationDef::many_to_many(
            "Project",
            "DataCollectionGroup",
            "Project",
            "Project_has_DCGroup",
        ),
        // DataCollectionPlanGroup
        RelationDef::many_to_one("BLSample", "DataCollectionPlanGroup", "BLSample"),
        RelationDef::many_to_one("BLSession", "DataCollectionPlanGroup", "BLSession"),
        // Dewar
        RelationDef::many_to_one("BLSession", "Dewar", "BLSession"),
        RelationDef::many_to_one("Shipping", "Dewar", "Shipping"),
        // DewarRegistry
        RelationDef::many_to_one("LabContact", "DewarRegistry", "LabContact"),
        RelationDef::many_to_one("Proposal", "DewarRegistry", "Proposal"),
        // DewarRegistryHasProposal
        RelationDef::many_to_one("DewarRegistry", "DewarRegistryHasProposal", "DewarRegistry"),
        RelationDef::many_to_one("LabContact", "DewarRegistryHasProposal", "LabContact"),
        RelationDef::many_to_one("Person", "DewarRegistryHasProposal", "Person"),
        RelationDef::many_to_one("Proposal", "DewarRegistryHasProposal", "Proposal"),
        // DewarTransportHistory
        RelationDef::many_to_one("Dewar", "DewarTransportHistory", "Dewar"),
        // DiffractionPlanHasDetector
        RelationDef::many_to_one("Detector", "DiffractionPlanHasDetector", "Detector"),
        RelationDef::many_to_one("DiffractionPlan", "DiffractionPlanHasDetector", "DiffractionPlan"),
        // EnergyScan
        RelationDef::many_to_one("BLSample", "EnergyScan", "BLSample"),
        RelationDef::many_to_one("BLSession", "EnergyScan", "BLSession"),
        RelationDef::many_to_one("BLSubSample", "EnergyScan", "BLSubSample"),
        RelationDef::many_to_many("Project", "EnergyScan", "Project", "Project_has_EnergyScan"),
        // Event
        RelationDef::many_to_one("EventType", "Event", "EventType"),
        // EventChain
        RelationDef::many_to_one("DataCollection", "EventChain", "DataCollection"),
        // Experiment
        RelationDef::many_to_one("BLSession", "Experiment", "BLSession"),
        // ExperimentKindDetails
        RelationDef::many_to_one("DiffractionPlan", "ExperimentKindDetails", "DiffractionPlan"),
        // FitStructureToExperimentalData
        RelationDef::many_to_one("Structure", "FitStructureToExperimentalData", "Structure"),
        RelationDef::many_to_one("Subtraction", "FitStructureToExperimentalData", "Subtraction"),
        RelationDef::many_to_one("Workflow", "FitStructureToExperimentalData", "Workflow"),
        // FrameSet
        RelationDef::many_to_one("FrameList", "FrameSet", "FrameList"),
        RelationDef::many_to_one("Run", "FrameSet", "Run"),
        // FrameToList
        RelationDef::many_to_one("Frame", "FrameToList", "Frame"),
        RelationDef::many_to_one("FrameList", "FrameToList", "FrameList"),
        // GridInfo
        RelationDef::many_to_one("DataCollectionGroup", "GridInfo", "DataCollectionGroup"),
        RelationDef::many_to_one("WorkflowMesh", "GridInfo", "WorkflowMesh"),
        // Image
        RelationDef::many_to_one("DataCollection", "Image", "DataCollection")
            .join_on("dataCollectionId", "dataCollectionId"),
        // ImageQualityIndicators
        RelationDef::many_to_one("AutoProcProgram", "ImageQualityIndicators", "AutoProcProgram"),
        // Instruction
        RelationDef::many_to_one("InstructionSet", "Instruction", "InstructionSet"),
        // LabContact
        RelationDef::many_to_one("Person", "LabContact", "Person"),
        RelationDef::many_to_one("Proposal", "LabContact", "Proposal"),
        // Macromolecule
        RelationDef::many_to_one("SafetyLevel", "Macromolecule", "SafetyLevel"),
        // MacromoleculeRegion
        RelationDef::many_to_one("Macromolecule", "MacromoleculeRegion", "Macromolecule"),
        // Measurement
        RelationDef::many_to_one("Run", "Measurement", "Run"),
        RelationDef::many_to_one("Specimen", "Measurement", "Specimen"),
        // MeasurementToDataCollection
        RelationDef::many_to_one("Measurement", "MeasurementToDataCollection", "Measurement"),
        RelationDef::many_to_one(
            "SaxsDataCollection",
            "MeasurementToDataCollection",
            "SaxsDataCollection",
        ),
        // Merge
        RelationDef::many_to_one("FrameList", "Merge", "FrameList"),
        RelationDef::many_to_one("Measurement", "Merge", "Measurement"),
        // MixtureToStructure
        RelationDef::many_to_one(
            "FitStructureToExperimentalData",
            "MixtureToStructure",
            "FitStructureToExperimentalData",
        ),
        RelationDef::many_to_one("Structure", "MixtureToStructure", "Structure"),
        // ModelBuilding
        RelationDef::many_to_one("PhasingAnalysis", "ModelBuilding", "PhasingAnalysis"),
        RelationDef::many_to_one("PhasingProgramRun", "ModelBuilding", "PhasingProgramRun"),
        RelationDef::many_to_one("SpaceGroup", "ModelBuilding", "SpaceGroup"),
        // ModelToList
        RelationDef::many_to_one("Model", "ModelToList", "Model"),
        RelationDef::many_to_one("ModelList", "ModelToList", "ModelList"),
        // MotionCorrection
        RelationDef::many_to_one("Movie", "MotionCorrection", "Movie"),
        // Movie
        RelationDef::many_to_one("DataCollection", "Movie", "DataCollection"),
        // MXMRRun
        RelationDef::many_to_one("AutoProcScaling", "MXMRRun", "AutoProcScaling"),
        // MXMRRunBlob
        RelationDef::many_to_one("MXMRRun", "MXMRRunBlob", "MXMRRun"),
        // Particle
        RelationDef::many_to_one("DataCollection", "Particle", "DataCollection"),
        // ParticleClassification
        RelationDef::many_to_one(
            "ParticleClassificationGroup",
            "ParticleClassification",
            "ParticleClassificationGroup",
        ),
        // ParticleClassificationGroup
        RelationDef::many_to_one(
            "AutoProcProgram",
            "ParticleClassificationGroup",
            "AutoProcProgram",
        ),
        RelationDef::many_to_one("ParticlePicker", "ParticleClassificationGroup", "ParticlePicker"),
        // ParticlePicker
        RelationDef::many_to_one("AutoProcProgram", "ParticlePicker", "AutoProcProgram"),
        RelationDef::many_to_one("MotionCorrection", "ParticlePicker", "MotionCorrection"),
        // PDBEntry
        RelationDef::many_to_one("AutoProcProgram", "PDBEntry", "AutoProcProgram"),
        // PDBEntryHasAutoProcProgram
        RelationDef::many_to_one("AutoProcProgram", "PDBEntryHasAutoProcProgram", "AutoProcProgram"),
        RelationDef::many_to_one("PDBEntry", "PDBEntryHasAutoProcProgram", "PDBEntry"),
        // Person
        RelationDef::many_to_one("Laboratory", "Person", "Laboratory"),
        RelationDef::many_to_many("Project", "Person", "Project", "Project_has_Person"),
        // Phasing
        RelationDef::many_to_one("PhasingAnalysis", "Phasing", "PhasingAnalysis"),
        RelationDef::many_to_one("PhasingProgramRun", "Phasing", "PhasingProgramRun"),
        RelationDef::many_to_one("SpaceGroup", "Phasing", "SpaceGroup"),
        // PhasingHasScaling
        RelationDef::many_to_one("AutoProcScaling", "PhasingHasScaling", "AutoProcScaling"),
        RelationDef::many_to_one("PhasingAnalysis", "PhasingHasScaling", "PhasingAnalysis"),
        // PhasingProgramAttachment
        RelationDef::many_to_one(
            "PhasingProgramRun",
            "PhasingProgramAttachment",
            "PhasingProgramRun",
        ),
        // PhasingStatistics
        RelationDef::many_to_one("PhasingStep", "PhasingStatistics", "PhasingStep"),
        RelationDef::many_to_one("Phasing_has_Scaling", "PhasingStatistics", "PhasingHasScaling")
            .join_on("phasingHasScalingId1", "phasingHasScalingId"),
        RelationDef::many_to_one("Phasing_has_Scaling1", "PhasingStatistics", "PhasingHasScaling")
            .join_on("phasingHasScalingId2", "phasingHasScalingId"),
        // PhasingStep
        RelationDef::many_to_one("AutoProcScaling", "PhasingStep", "AutoProcScaling"),
        RelationDef::many_to_one("PhasingProgramRun", "PhasingStep", "PhasingProgramRun"),
        RelationDef::many_to_one("SpaceGroup", "PhasingStep", "SpaceGroup"),
        // PreparePhasingData
        RelationDef::many_to_one("PhasingAnalysis", "PreparePhasingData", "PhasingAnalysis"),
        RelationDef::many_to_one("PhasingProgramRun", "PreparePhasingData", "PhasingProgramRun"),
        RelationDef::many_to_one("SpaceGroup", "PreparePhasingData", "SpaceGroup"),
        // Project
        RelationDef::many_to_many("BLSession", "Project", "BLSession", "Project_has_Session"),
        RelationDef::many_to_one("Person", "Project", "Person"),
        RelationDef::many_to_many("Protein", "Project", "Protein", "Project_has_Protein"),
        RelationDef::many_to_many("Shipping", "Project", "Shipping", "Project_has_Shipping"),
        RelationDef::many_to_many(
            "XFEFluorescenceSpectrum",
            "Project",
            "XFEFluorescenceSpectrum",
            "Project_has_XFEFSpectrum",
        ),
        // ProjectHasUser
        RelationDef::many_to_one("Project", "ProjectHasUser", "Project"),
        // Proposal
        RelationDef::many_to_one("Person", "Proposal", "Person"),
        // ProposalHasPerson
        RelationDef::many_to_one("Person", "ProposalHasPerson", "Person"),
        // Protein
        RelationDef::many_to_many(
            "ComponentSubType",
            "Protein",
            "ComponentSubType",
            "Component_has_SubType",
        ),
        RelationDef::many_to_one("ComponentType", "Protein", "ComponentType"),
        RelationDef::many_to_one("Proposal", "Protein", "Proposal"),
        // ProteinHasPDB
        RelationDef::many_to_one("PDB", "ProteinHasPDB", "PDB"),
        RelationDef::many_to_one("Protein", "ProteinHasPDB", "Protein"),
        // RobotAction
        RelationDef::many_to_one("BLSample", "RobotAction", "BLSample"),
        RelationDef::many_to_one("BLSession", "RobotAction", "BLSession"),
        // SampleComposition
        RelationDef::many_to_one("ConcentrationType", "SampleComposition", "ConcentrationType"),
        RelationDef::many_to_one("Protein", "SampleComposition", "Protein"),
        // SamplePlate
        RelationDef::many_to_one("Experiment", "SamplePlate", "Experiment"),
        RelationDef::many_to_one("InstructionSet", "SamplePlate", "InstructionSet"),
        RelationDef::many_to_one("PlateGroup", "SamplePlate", "PlateGroup"),
        RelationDef::many_to_one("PlateType", "SamplePlate", "PlateType"),
        // SamplePlatePosition
        RelationDef::many_to_one("SamplePlate", "SamplePlatePosition", "SamplePlate"),
        // SaxsDataCollection
        RelationDef::many_to_one("Experiment", "SaxsDataCollection", "Experiment"),
        // ScanParametersModel
        RelationDef::many_to_one("DiffractionPlan", "ScanParametersModel", "DiffractionPlan"),
        RelationDef::many_to_one(
            "ScanParametersService",
            "ScanParametersModel",
            "ScanParametersService",
        ),
        // ScheduleComponent
        RelationDef::many_to_one("InspectionType", "ScheduleComponent", "InspectionType"),
        RelationDef::many_to_one("Schedule", "ScheduleComponent", "Schedule"),
        // Screen
        RelationDef::many_to_one("Proposal", "Screen", "Proposal"),
        // ScreenComponent
        RelationDef::many_to_one("Protein", "ScreenComponent", "Protein"),
        RelationDef::many_to_one("ScreenComponentGroup", "ScreenComponent", "ScreenComponentGroup"),
        // ScreenComponentGroup
        RelationDef::many_to_one("Screen", "ScreenComponentGroup", "Screen"),
        // Screening
        RelationDef::many_to_one("DataCollectionGroup", "Screening", "DataCollectionGroup"),
        // ScreeningInput
        RelationDef::many_to_one("Screening", "ScreeningInput", "Screening"),
        // ScreeningRank
        RelationDef::many_to_one("Screening", "ScreeningRank", "Screening"),
        RelationDef::many_to_one("ScreeningRankSet", "ScreeningRank", "ScreeningRankSet"),
        // SessionHasPerson
        RelationDef::many_to_one("Person", "SessionHasPerson", "Person"),
        // Shipping
        RelationDef::many_to_one("LabContact", "Shipping", "LabContact")
            .join_on("returnLabContactId", "labContactId"),
        RelationDef::many_to_one("LabContact1", "Shipping", "LabContact")
            .join_on("sendingLabContactId", "labContactId"),
        RelationDef::many_to_one("Proposal", "Shipping", "Proposal"),
        // SpaceGroup
        RelationDef::many_to_one("GeometryClassname", "SpaceGroup", "GeometryClassname"),
        // Specimen
        RelationDef::many_to_one("Buffer", "Specimen", "Buffer"),
        RelationDef::many_to_one("Experiment", "Specimen", "Experiment"),
        RelationDef::many_to_one("Macromolecule", "Specimen", "Macromolecule"),
        RelationDef::many_to_one("SafetyLevel", "Specimen", "SafetyLevel"),
        RelationDef::many_to_one("SamplePlatePosition", "Specimen", "SamplePlatePosition"),
        RelationDef::many_to_one("StockSolution", "Specimen", "StockSolution"),
        // StockSolution
        RelationDef::many_to_one("Buffer", "StockSolution", "Buffer"),
        RelationDef::many_to_one("InstructionSet", "StockSolution", "InstructionSet"),
        RelationDef::many_to_one("Macromolecule", "StockSolution", "Macromolecule"),
        // Stoichiometry
        RelationDef::many_to_one("Macromolecule", "Stoichiometry", "Macromolecule")
            .join_on("hostMacromoleculeId", "macromoleculeId"),
        RelationDef::many_to_one("Macromolecule1", "Stoichiometry", "Macromolecule")
            .join_on("macromoleculeId", "macromoleculeId"),
        // Structure
        RelationDef::many_to_one("BLSample", "Structure", "BLSample"),
        RelationDef::many_to_one("Crystal", "Structure", "Crystal"),
        RelationDef::many_to_one("Macromolecule", "Structure", "Macromolecule"),
        RelationDef::many_to_one("Proposal", "Structure", "Proposal"),
        // SubstructureDetermination
        RelationDef::many_to_one("PhasingAnalysis", "SubstructureDetermination", "PhasingAnalysis"),
        RelationDef::many_to_one(
            "PhasingProgramRun",
            "SubstructureDetermination",
            "PhasingProgramRun",
        ),
        RelationDef::many_to_one("SpaceGroup", "SubstructureDetermination", "SpaceGroup"),
        // Subtraction
        RelationDef::many_to_one("FrameList", "Subtraction", "FrameList")
            .join_on("bufferOnedimensionalFiles", "frameListId"),
        RelationDef::many_to_one("FrameList1", "Subtraction", "FrameList")
            .join_on("sampleOneDimensionalFiles", "frameListId"),
        RelationDef::many_to_one("SaxsDataCollection", "Subtraction", "SaxsDataCollection"),
        // SubtractionToAbInitioModel
        RelationDef::many_to_one("AbInitioModel", "SubtractionToAbInitioModel", "AbInitioModel"),
        RelationDef::many_to_one("Subtraction", "SubtractionToAbInitioModel", "Subtraction"),
        // SWOnceToken
        RelationDef::many_to_one("Person", "SWOnceToken", "Person"),
        RelationDef::many_to_one("Proposal", "SWOnceToken", "Proposal"),
        // UntrustedRegion
        RelationDef::many_to_one("Detector", "UntrustedRegion", "Detector"),
        // WorkflowDehydration
        RelationDef::many_to_one("Workflow", "WorkflowDehydration", "Workflow"),
        // WorkflowMesh
        RelationDef::many_to_one("Image", "WorkflowMesh", "Image"),
        RelationDef::many_to_one("Workflow", "WorkflowMesh", "Workflow"),
        // WorkflowStep
        RelationDef::many_to_one("Workflow", "WorkflowStep", "Workflow"),
        // XFEFluorescenceSpectrum
        RelationDef::many_to_one("BLSample", "XFEFluorescenceSpectrum", "BLSample"),
        RelationDef::many_to_one("BLSession", "XFEFluorescenceSpectrum", "BLSession"),
        RelationDef::many_to_one("BLSubSample", "XFEFluorescenceSpectrum", "BLSubSample"),
        // XRFFluorescenceMapping
        RelationDef::many_to_one("DataCollection", "XRFFluorescenceMapping", "DataCollection"),
        RelationDef::many_to_one(
            "XRFFluorescenceMappingROI",
            "XRFFluorescenceMapping",
            "XRFFluorescenceMappingROI",
        ),
    ]
}
