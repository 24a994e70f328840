//! Multi-column uniqueness constraints and lookup indexes.

use ispyb_core::catalog::ConstraintDef;

pub(crate) fn constraints() -> Vec<ConstraintDef> {
    vec![
        ConstraintDef::index(
            "AutoProcScalingIdx1",
            "AutoProcScaling",
            ["autoProcScalingId", "autoProcId"],
        ),
        ConstraintDef::index(
            "AutoProcScalingHasInt_FKIndex3",
            "AutoProcScalingHasInt",
            ["autoProcScalingId", "autoProcIntegrationId"],
        ),
        ConstraintDef::index("crystalId", "BLSample", ["crystalId", "containerId"]),
        ConstraintDef::index(
            "Detector_FKIndex1",
            "Detector",
            [
                "detectorType",
                "detectorManufacturer",
                "detectorModel",
                "detectorPixelSizeHorizontal",
                "detectorPixelSizeVertical",
            ],
        ),
        ConstraintDef::unique_composite(
            "dewarRegistryId",
            "DewarRegistryHasProposal",
            ["dewarRegistryId", "proposalId"],
        ),
        ConstraintDef::index("Image_Index3", "Image", ["fileLocation", "fileName"]),
        ConstraintDef::unique_composite(
            "personAndProposal",
            "LabContact",
            ["personId", "proposalId"],
        ),
        ConstraintDef::unique_composite(
            "cardNameAndProposal",
            "LabContact",
            ["cardName", "proposalId"],
        ),
        ConstraintDef::index(
            "Proposal_FKIndexCodeNumber",
            "Proposal",
            ["proposalCode", "proposalNumber"],
        ),
        ConstraintDef::index("ProteinAcronym_Index", "Protein", ["proposalId", "acronym"]),
    ]
}
