//! Table entities, D.

use ispyb_core::catalog::{
    ColumnType, DefaultValue, EntityDef, FieldDef, ForeignKey, ReferentialAction,
};

pub(crate) fn data_acquisition() -> EntityDef {
    EntityDef::table("DataAcquisition", "DataAcquisition")
        .with_field(FieldDef::new("dataAcquisitionId", ColumnType::int(11)).primary_key())
        .with_field(FieldDef::new("sampleCellId", ColumnType::int(11)).not_null())
        .with_field(FieldDef::new("framesCount", ColumnType::varchar(45)))
        .with_field(FieldDef::new("energy", ColumnType::varchar(45)))
        .with_field(FieldDef::new("waitTime", ColumnType::varchar(45)))
        .with_field(FieldDef::new("detectorDistance", ColumnType::varchar(45)))
}

pub(crate) fn data_collection() -> EntityDef {
    EntityDef::table("DataCollection", "DataCollection")
        .with_field(
            FieldDef::new("dataCollectionId", ColumnType::int(10))
                .primary_key()
                .with_comment("Primary key (auto-incremented)"),
        )
        .with_field(
            FieldDef::new("dataCollectionGroupId", ColumnType::int(11))
                .not_null()
                .indexed()
                .with_comment("references DataCollectionGroup table")
                .references(
                    ForeignKey::to("DataCollectionGroup", "dataCollectionGroupId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("strategySubWedgeOrigId", ColumnType::int(10))
                .indexed()
                .with_comment("references ScreeningStrategySubWedge table")
                .references(
                    ForeignKey::to("ScreeningStrategySubWedge", "screeningStrategySubWedgeId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("detectorId", ColumnType::int(11))
                .indexed()
                .with_comment("references Detector table")
                .references(
                    ForeignKey::to("Detector", "detectorId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("blSubSampleId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("BLSubSample", "blSubSampleId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("startPositionId", ColumnType::int(10)).indexed())
        .with_field(FieldDef::new("endPositionId", ColumnType::int(10)).indexed())
        .with_field(FieldDef::new("dataCollectionNumber", ColumnType::int(10)).indexed())
        .with_field(
            FieldDef::new("startTime", ColumnType::DateTime)
                .indexed()
                .with_comment("Start time of the dataCollection"),
        )
        .with_field(
            FieldDef::new("endTime", ColumnType::DateTime)
                .with_comment("end time of the dataCollection"),
        )
        .with_field(FieldDef::new("runStatus", ColumnType::varchar(45)))
        .with_field(FieldDef::new("axisStart", ColumnType::float()))
        .with_field(FieldDef::new("axisEnd", ColumnType::float()))
        .with_field(FieldDef::new("axisRange", ColumnType::float()))
        .with_field(FieldDef::new("overlap", ColumnType::float()))
        .with_field(FieldDef::new("numberOfImages", ColumnType::int(10)))
        .with_field(FieldDef::new("startImageNumber", ColumnType::int(10)))
        .with_field(FieldDef::new("numberOfPasses", ColumnType::int(10)))
        .with_field(FieldDef::new("exposureTime", ColumnType::float()))
        .with_field(FieldDef::new("imageDirectory", ColumnType::varchar(255)).indexed())
        .with_field(FieldDef::new("imagePrefix", ColumnType::varchar(100)).indexed())
        .with_field(FieldDef::new("imageSuffix", ColumnType::varchar(45)))
        .with_field(
            FieldDef::new("imageContainerSubPath", ColumnType::varchar(255))
                .with_comment(
                    "Internal path of a HDF5 file pointing to the data for this data collection",
                ),
        )
        .with_field(FieldDef::new("fileTemplate", ColumnType::varchar(255)))
        .with_field(FieldDef::new("wavelength", ColumnType::float()))
        .with_field(FieldDef::new("resolution", ColumnType::float()))
        .with_field(FieldDef::new("detectorDistance", ColumnType::float()))
        .with_field(FieldDef::new("xBeam", ColumnType::float()))
        .with_field(FieldDef::new("yBeam", ColumnType::float()))
        .with_field(
            FieldDef::new("xBeamPix", ColumnType::float()).with_comment("Beam size in pixels"),
        )
        .with_field(
            FieldDef::new("yBeamPix", ColumnType::float()).with_comment("Beam size in pixels"),
        )
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
        .with_field(
            FieldDef::new("flux_end", ColumnType::decimal())
                .with_comment("flux measured after the collect"),
        )
        .with_field(
            FieldDef::new("totalAbsorbedDose", ColumnType::decimal())
                .with_comment("expected dose delivered to the crystal, EDNA"),
        )
        .with_field(FieldDef::new("bestWilsonPlotPath", ColumnType::varchar(255)))
        .with_field(FieldDef::new("imageQualityIndicatorsPlotPath", ColumnType::varchar(512)))
        .with_field(FieldDef::new("imageQualityIndicatorsCSVPath", ColumnType::varchar(512)))
        .with_field(FieldDef::new("blSampleId", ColumnType::int(10)))
        .with_field(
            FieldDef::new("sessionId", ColumnType::int(10)).with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("experimentType", ColumnType::varchar(24)))
        .with_field(FieldDef::new("crystalClass", ColumnType::varchar(20)))
        .with_field(FieldDef::new("chiStart", ColumnType::float()))
        .with_field(FieldDef::new("detectorMode", ColumnType::varchar(255)))
        .with_field(FieldDef::new("actualSampleBarcode", ColumnType::varchar(45)))
        .with_field(FieldDef::new("actualSampleSlotInContainer", ColumnType::int(10)))
        .with_field(FieldDef::new("actualContainerBarcode", ColumnType::varchar(45)))
        .with_field(FieldDef::new("actualContainerSlotInSC", ColumnType::int(10)))
        .with_field(FieldDef::new("positionId", ColumnType::int(10)))
        .with_field(FieldDef::new("focalSpotSizeAtSampleX", ColumnType::float()))
        .with_field(FieldDef::new("polarisation", ColumnType::float()))
        .with_field(FieldDef::new("focalSpotSizeAtSampleY", ColumnType::float()))
        .with_field(FieldDef::new("apertureId", ColumnType::int(10)))
        .with_field(FieldDef::new("screeningOrigId", ColumnType::int(10)))
        .with_field(FieldDef::new("processedDataFile", ColumnType::varchar(255)))
        .with_field(FieldDef::new("datFullPath", ColumnType::varchar(255)))
        .with_field(FieldDef::new("magnification", ColumnType::int(11)).with_comment("Unit: X"))
        .with_field(
            FieldDef::new("binning", ColumnType::tinyint(1))
                .with_default(DefaultValue::Int(1))
                .with_comment("1 or 2. Number of pixels to process as 1. (Use mean value.)"),
        )
        .with_field(FieldDef::new("particleDiameter", ColumnType::float()).with_comment("Unit: nm"))
        .with_field(FieldDef::new("boxSize_CTF", ColumnType::float()).with_comment("Unit: pixels"))
        .with_field(FieldDef::new("minResolution", ColumnType::float()).with_comment("Unit: A"))
        .with_field(FieldDef::new("minDefocus", ColumnType::float()).with_comment("Unit: A"))
        .with_field(FieldDef::new("maxDefocus", ColumnType::float()).with_comment("Unit: A"))
        .with_field(FieldDef::new("defocusStepSize", ColumnType::float()).with_comment("Unit: A"))
        .with_field(FieldDef::new("amountAstigmatism", ColumnType::float()).with_comment("Unit: A"))
        .with_field(FieldDef::new("extractSize", ColumnType::float()).with_comment("Unit: pixels"))
        .with_field(FieldDef::new("bgRadius", ColumnType::float()).with_comment("Unit: nm"))
        .with_field(FieldDef::new("voltage", ColumnType::float()).with_comment("Unit: kV"))
        .with_field(FieldDef::new("objAperture", ColumnType::float()).with_comment("Unit: um"))
        .with_field(FieldDef::new("c1aperture", ColumnType::float()).with_comment("Unit: um"))
        .with_field(FieldDef::new("c2aperture", ColumnType::float()).with_comment("Unit: um"))
        .with_field(FieldDef::new("c3aperture", ColumnType::float()).with_comment("Unit: um"))
        .with_field(FieldDef::new("c1lens", ColumnType::float()).with_comment("Unit: %"))
        .with_field(FieldDef::new("c2lens", ColumnType::float()).with_comment("Unit: %"))
        .with_field(FieldDef::new("c3lens", ColumnType::float()).with_comment("Unit: %"))
}

pub(crate) fn data_collection_file_attachment() -> EntityDef {
    EntityDef::table("DataCollectionFileAttachment", "DataCollectionFileAttachment")
        .with_field(
            FieldDef::new("dataCollectionFileAttachmentId", ColumnType::int(10)).primary_key(),
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
        .with_field(FieldDef::new("fileFullPath", ColumnType::varchar(255)).not_null())
        .with_field(
            FieldDef::new("fileType", ColumnType::enumeration(&["snapshot", "log", "xy", "recip"]))
                .with_comment(
                    "snapshot: image file, usually of the sample. \\r\\nlog: a text file with logging info. \\r\\nxy: x and y data in text format. \\r\\nrecip: a compressed csv file with reciprocal space coordinates.",
                ),
        )
        .with_field(
            FieldDef::new("createTime", ColumnType::Timestamp)
                .not_null()
                .with_default(DefaultValue::CurrentTimestamp),
        )
}

pub(crate) fn data_collection_group() -> EntityDef {
    EntityDef::table("DataCollectionGroup", "DataCollectionGroup")
        .with_comment("a dataCollectionGroup is a group of dataCollection for a spe")
        .with_field(
            FieldDef::new("dataCollectionGroupId", ColumnType::int(11))
                .primary_key()
                .with_comment("Primary key (auto-incremented)"),
        )
        .with_field(
            FieldDef::new("blSampleId", ColumnType::int(10))
                .indexed()
                .with_comment("references BLSample table")
                .references(
                    ForeignKey::to("BLSample", "blSampleId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("sessionId", ColumnType::int(10))
                .not_null()
                .indexed()
                .with_comment("references Session table")
                .references(
                    ForeignKey::to("BLSession", "sessionId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("workflowId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("Workflow", "workflowId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new(
                "experimentType",
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
            )
                .with_comment("Experiment type flag"),
        )
        .with_field(
            FieldDef::new("startTime", ColumnType::DateTime)
                .with_comment("Start time of the dataCollectionGroup"),
        )
        .with_field(
            FieldDef::new("endTime", ColumnType::DateTime)
                .with_comment("end time of the dataCollectionGroup"),
        )
        .with_field(
            FieldDef::new("crystalClass", ColumnType::varchar(20))
                .with_comment("Crystal Class for industrials users"),
        )
        .with_field(FieldDef::new("comments", ColumnType::varchar(1024)).with_comment("comments"))
        .with_field(
            FieldDef::new("detectorMode", ColumnType::varchar(255)).with_comment("Detector mode"),
        )
        .with_field(
            FieldDef::new("actualSampleBarcode", ColumnType::varchar(45))
                .with_comment("Actual sample barcode"),
        )
        .with_field(
            FieldDef::new("actualSampleSlotInContainer", ColumnType::int(10))
                .with_comment("Actual sample slot number in container"),
        )
        .with_field(
            FieldDef::new("actualContainerBarcode", ColumnType::varchar(45))
                .with_comment("Actual container barcode"),
        )
        .with_field(
            FieldDef::new("actualContainerSlotInSC", ColumnType::int(10))
                .with_comment("Actual container slot number in sample changer"),
        )
        .with_field(FieldDef::new("xtalSnapshotFullPath", ColumnType::varchar(255)))
}

pub(crate) fn data_collection_plan_group() -> EntityDef {
    EntityDef::table("DataCollectionPlanGroup", "DataCollectionPlanGroup")
        .with_field(FieldDef::new("dataCollectionPlanGroupId", ColumnType::int(10)).primary_key())
        .with_field(
            FieldDef::new("sessionId", ColumnType::int(10))
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
}

pub(crate) fn datamatrix_in_sample_changer() -> EntityDef {
    EntityDef::table("DatamatrixInSampleChanger", "DatamatrixInSampleChanger")
        .with_field(FieldDef::new("datamatrixInSampleChangerId", ColumnType::int(10)).primary_key())
        .with_field(
            FieldDef::new("proposalId", ColumnType::int(10))
                .not_null()
                .indexed()
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("beamLineName", ColumnType::varchar(45)))
        .with_field(FieldDef::new("datamatrixCode", ColumnType::varchar(45)))
        .with_field(FieldDef::new("locationInContainer", ColumnType::int(11)))
        .with_field(FieldDef::new("containerLocationInSC", ColumnType::int(11)))
        .with_field(FieldDef::new("containerDatamatrixCode", ColumnType::varchar(45)))
        .with_field(FieldDef::new("bltimeStamp", ColumnType::Timestamp))
}

pub(crate) fn data_reduction_status() -> EntityDef {
    EntityDef::table("DataReductionStatus", "DataReductionStatus")
        .with_field(FieldDef::new("dataReductionStatusId", ColumnType::int(10)).primary_key())
        .with_field(FieldDef::new("dataCollectionId", ColumnType::int(10)).not_null())
        .with_field(FieldDef::new("status", ColumnType::varchar(15)))
        .with_field(FieldDef::new("filename", ColumnType::varchar(255)))
        .with_field(FieldDef::new("message", ColumnType::varchar(255)))
}

pub(crate) fn detector() -> EntityDef {
    EntityDef::table("Detector", "Detector")
        .with_comment("Detector table is linked to a dataCollection")
        .with_field(
            FieldDef::new("detectorId", ColumnType::int(11))
                .primary_key()
                .with_comment("Primary key (auto-incremented)"),
        )
        .with_field(FieldDef::new("detectorType", ColumnType::varchar(255)))
        .with_field(FieldDef::new("detectorManufacturer", ColumnType::varchar(255)))
        .with_field(FieldDef::new("detectorModel", ColumnType::varchar(255)))
        .with_field(FieldDef::new("detectorPixelSizeHorizontal", ColumnType::float()))
        .with_field(FieldDef::new("detectorPixelSizeVertical", ColumnType::float()))
        .with_field(FieldDef::new("detectorSerialNumber", ColumnType::varchar(30)).unique())
        .with_field(FieldDef::new("detectorDistanceMin", ColumnType::decimal()))
        .with_field(FieldDef::new("detectorDistanceMax", ColumnType::decimal()))
        .with_field(FieldDef::new("trustedPixelValueRangeLower", ColumnType::decimal()))
        .with_field(FieldDef::new("trustedPixelValueRangeUpper", ColumnType::decimal()))
        .with_field(FieldDef::new("sensorThickness", ColumnType::float()))
        .with_field(FieldDef::new("overload", ColumnType::float()))
        .with_field(FieldDef::new("XGeoCorr", ColumnType::varchar(255)))
        .with_field(FieldDef::new("YGeoCorr", ColumnType::varchar(255)))
        .with_field(FieldDef::new("detectorMode", ColumnType::varchar(255)))
        .with_field(FieldDef::new("detectorMaxResolution", ColumnType::float()))
        .with_field(FieldDef::new("detectorMinResolution", ColumnType::float()))
        .with_field(FieldDef::new("CS", ColumnType::float()).with_comment("Unit: mm"))
        .with_field(FieldDef::new("density", ColumnType::float()))
        .with_field(FieldDef::new("composition", ColumnType::varchar(16)))
        .with_field(
            FieldDef::new("localName", ColumnType::varchar(40))
                .with_comment("Colloquial name for the detector"),
        )
}

pub(crate) fn dewar() -> EntityDef {
    EntityDef::table("Dewar", "Dewar")
        .with_field(FieldDef::new("dewarId", ColumnType::int(10)).primary_key())
        .with_field(
            FieldDef::new("shippingId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("Shipping", "shippingId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("code", ColumnType::varchar(45)).indexed())
        .with_field(FieldDef::new("comments", ColumnType::tiny_text()))
        .with_field(FieldDef::new("storageLocation", ColumnType::varchar(45)))
        .with_field(FieldDef::new("dewarStatus", ColumnType::varchar(45)).indexed())
        .with_field(
            FieldDef::new("bltimeStamp", ColumnType::Timestamp)
                .with_default(DefaultValue::CurrentTimestamp),
        )
        .with_field(
            FieldDef::new("isStorageDewar", ColumnType::tinyint(1))
                .with_default(DefaultValue::Int(0)),
        )
        .with_field(FieldDef::new("barCode", ColumnType::varchar(45)).unique())
        .with_field(
            FieldDef::new("firstExperimentId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("BLSession", "sessionId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("customsValue", ColumnType::int(10)))
        .with_field(FieldDef::new("transportValue", ColumnType::int(10)))
        .with_field(FieldDef::new("trackingNumberToSynchrotron", ColumnType::varchar(30)))
        .with_field(FieldDef::new("trackingNumberFromSynchrotron", ColumnType::varchar(30)))
        .with_field(
            FieldDef::new("facilityCode", ColumnType::varchar(20))
                .with_comment("Unique barcode assigned to each dewar"),
        )
        .with_field(
            FieldDef::new("type", ColumnType::enumeration(&["Dewar", "Toolbox"]))
                .not_null()
                .with_default(DefaultValue::String("Dewar".into())),
        )
        .with_field(
            FieldDef::new("isReimbursed", ColumnType::tinyint(1))
                .with_default(DefaultValue::Int(0))
                .with_comment("set this dewar as reimbursed by the user office"),
        )
}

pub(crate) fn dewar_location() -> EntityDef {
    EntityDef::table("DewarLocation", "DewarLocation")
        .with_comment("ISPyB Dewar location table")
        .with_field(FieldDef::new("eventId", ColumnType::int(10)).primary_key())
        .with_field(
            FieldDef::new("dewarNumber", ColumnType::varchar(128))
                .not_null()
                .with_comment("Dewar number"),
        )
        .with_field(
            FieldDef::new("userId", ColumnType::varchar(128))
                .with_comment("User who locates the dewar"),
        )
        .with_field(
            FieldDef::new("dateTime", ColumnType::DateTime)
                .with_comment("Date and time of locatization"),
        )
        .with_field(
            FieldDef::new("locationName", ColumnType::varchar(128))
                .with_comment("Location of the dewar"),
        )
        .with_field(
            FieldDef::new("courierName", ColumnType::varchar(128))
                .with_comment("Carrier name who's shipping back the dewar"),
        )
        .with_field(
            FieldDef::new("courierTrackingNumber", ColumnType::varchar(128))
                .with_comment("Tracking number of the shippment"),
        )
}

pub(crate) fn dewar_location_list() -> EntityDef {
    EntityDef::table("DewarLocationList", "DewarLocationList")
        .with_comment("List of locations for dewars")
        .with_field(FieldDef::new("locationId", ColumnType::int(10)).primary_key())
        .with_field(
            FieldDef::new("locationName", ColumnType::varchar(128))
                .not_null()
                .with_default(DefaultValue::String("".into()))
                .with_comment("Location"),
        )
}

pub(crate) fn dewar_registry() -> EntityDef {
    EntityDef::table("DewarRegistry", "DewarRegistry")
        .with_field(FieldDef::new("dewarRegistryId", ColumnType::int(11)).primary_key())
        .with_field(FieldDef::new("facilityCode", ColumnType::varchar(20)).not_null().unique())
        .with_field(
            FieldDef::new("proposalId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("Proposal", "proposalId").on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("labContactId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("LabContact", "labContactId")
                        .on_delete(ReferentialAction::SetNull)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("purchaseDate", ColumnType::DateTime))
        .with_field(
            FieldDef::new("bltimestamp", ColumnType::DateTime)
                .not_null()
                .with_default(DefaultValue::CurrentTimestamp),
        )
}

pub(crate) fn dewar_registry_has_proposal() -> EntityDef {
    EntityDef::table("DewarRegistryHasProposal", "DewarRegistry_has_Proposal")
        .with_field(FieldDef::new("dewarRegistryHasProposalId", ColumnType::int(10)).primary_key())
        .with_field(
            FieldDef::new("dewarRegistryId", ColumnType::int(11))
                .references(
                    ForeignKey::to("DewarRegistry", "dewarRegistryId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("proposalId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("Proposal", "proposalId").on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("personId", ColumnType::int(10))
                .indexed()
                .with_comment("Person registering the dewar")
                .references(
                    ForeignKey::to("Person", "personId").on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("recordTimestamp", ColumnType::DateTime)
                .with_default(DefaultValue::CurrentTimestamp),
        )
        .with_field(
            FieldDef::new("labContactId", ColumnType::int(10))
                .indexed()
                .with_comment("Owner of the dewar")
                .references(
                    ForeignKey::to("LabContact", "labContactId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
}

pub(crate) fn dewar_transport_history() -> EntityDef {
    EntityDef::table("DewarTransportHistory", "DewarTransportHistory")
        .with_field(FieldDef::new("DewarTransportHistoryId", ColumnType::int(10)).primary_key())
        .with_field(
            FieldDef::new("dewarId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("Dewar", "dewarId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("dewarStatus", ColumnType::varchar(45)).not_null())
        .with_field(FieldDef::new("storageLocation", ColumnType::varchar(45)))
        .with_field(FieldDef::new("arrivalDate", ColumnType::DateTime))
}

pub(crate) fn diffraction_plan() -> EntityDef {
    EntityDef::table("DiffractionPlan", "DiffractionPlan")
        .with_field(FieldDef::new("diffractionPlanId", ColumnType::int(10)).primary_key())
        .with_field(FieldDef::new("xmlDocumentId", ColumnType::int(10)))
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
        .with_field(FieldDef::new("comments", ColumnType::varchar(1024)))
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
        .with_field(
            FieldDef::new("minDimAccrossSpindleAxis", ColumnType::decimal())
                .with_comment("minimum dimension accross the spindle axis"),
        )
        .with_field(
            FieldDef::new("maxDimAccrossSpindleAxis", ColumnType::decimal())
                .with_comment("maximum dimension accross the spindle axis"),
        )
        .with_field(FieldDef::new("radiationSensitivityBeta", ColumnType::decimal()))
        .with_field(FieldDef::new("radiationSensitivityGamma", ColumnType::decimal()))
        .with_field(FieldDef::new("minOscWidth", ColumnType::float()))
        .with_field(
            FieldDef::new("recordTimeStamp", ColumnType::Timestamp)
                .not_null()
                .with_default(DefaultValue::CurrentTimestamp)
                .with_comment("Creation or last update date/time"),
        )
        .with_field(FieldDef::new("diffractionPlanUUID", ColumnType::varchar(1000)))
        .with_field(FieldDef::new("dataCollectionPlanGroupId", ColumnType::int(10)))
        .with_field(FieldDef::new("detectorId", ColumnType::int(11)))
        .with_field(FieldDef::new("distance", ColumnType::decimal()))
        .with_field(FieldDef::new("orientation", ColumnType::decimal()))
        .with_field(FieldDef::new("monoBandwidth", ColumnType::decimal()))
        .with_field(
            FieldDef::new("monochromator", ColumnType::varchar(8)).with_comment("DMM or DCM"),
        )
        .with_field(FieldDef::new("energy", ColumnType::float()).with_comment("eV"))
        .with_field(
            FieldDef::new("transmission", ColumnType::float())
                .with_comment("Decimal fraction in range [0,1]"),
        )
        .with_field(FieldDef::new("boxSizeX", ColumnType::float()).with_comment("microns"))
        .with_field(FieldDef::new("boxSizeY", ColumnType::float()).with_comment("microns"))
        .with_field(FieldDef::new("kappaStart", ColumnType::float()).with_comment("degrees"))
        .with_field(FieldDef::new("axisStart", ColumnType::float()).with_comment("degrees"))
        .with_field(FieldDef::new("axisRange", ColumnType::float()).with_comment("degrees"))
        .with_field(
            FieldDef::new("numberOfImages", ColumnType::mediumint(9))
                .with_comment("The number of images requested"),
        )
        .with_field(
            FieldDef::new("presetForProposalId", ColumnType::int(10))
                .with_comment("Indicates this plan is available to all sessions on given proposal"),
        )
        .with_field(
            FieldDef::new("beamLineName", ColumnType::varchar(45))
                .with_comment("Indicates this plan is available to all sessions on given beamline"),
        )
        .with_field(
            FieldDef::new("userPath", ColumnType::varchar(100))
                .with_comment(
                    "User-specified relative \"root\" path inside the session directory to be used for holding collected data",
                ),
        )
}

pub(crate) fn diffraction_plan_has_detector() -> EntityDef {
    EntityDef::table("DiffractionPlanHasDetector", "DiffractionPlan_has_Detector")
        .with_field(
            FieldDef::new("diffractionPlanId", ColumnType::int(10))
                .primary_key()
                .references(
                    ForeignKey::to("DiffractionPlan", "diffractionPlanId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("detectorId", ColumnType::int(11))
                .primary_key()
                .indexed()
                .references(
                    ForeignKey::to("Detector", "detectorId").on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("exposureTime", ColumnType::decimal()))
        .with_field(FieldDef::new("distance", ColumnType::decimal()))
        .with_field(FieldDef::new("orientation", ColumnType::decimal()))
}
