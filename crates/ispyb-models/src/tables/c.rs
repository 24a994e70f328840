//! Table entities, C.

use ispyb_core::catalog::{
    ColumnType, DefaultValue, EntityDef, FieldDef, ForeignKey, ReferentialAction,
};

pub(crate) fn calendar_hash() -> EntityDef {
    EntityDef::table("CalendarHash", "CalendarHash")
        .with_comment(
            "Lets people get to their calendars without logging in using a private (hash) url",
        )
        .with_field(FieldDef::new("calendarHashId", ColumnType::int(10)).primary_key())
        .with_field(FieldDef::new("ckey", ColumnType::varchar(50)))
        .with_field(FieldDef::new("hash", ColumnType::varchar(128)))
        .with_field(FieldDef::new("beamline", ColumnType::tinyint(1)))
}

pub(crate) fn component_sub_type() -> EntityDef {
    EntityDef::table("ComponentSubType", "ComponentSubType")
        .with_field(FieldDef::new("componentSubTypeId", ColumnType::int(10)).primary_key())
        .with_field(FieldDef::new("name", ColumnType::varchar(31)).not_null())
        .with_field(
            FieldDef::new("hasPh", ColumnType::tinyint(1)).with_default(DefaultValue::Int(0)),
        )
}

pub(crate) fn component_type() -> EntityDef {
    EntityDef::table("ComponentType", "ComponentType")
        .with_field(FieldDef::new("componentTypeId", ColumnType::int(10)).primary_key())
        .with_field(FieldDef::new("name", ColumnType::varchar(31)).not_null())
}

pub(crate) fn concentration_type() -> EntityDef {
    EntityDef::table("ConcentrationType", "ConcentrationType")
        .with_field(FieldDef::new("concentrationTypeId", ColumnType::int(10)).primary_key())
        .with_field(FieldDef::new("name", ColumnType::varchar(31)).not_null())
        .with_field(FieldDef::new("symbol", ColumnType::varchar(8)).not_null())
}

pub(crate) fn container() -> EntityDef {
    EntityDef::table("Container", "Container")
        .with_field(FieldDef::new("containerId", ColumnType::int(10)).primary_key())
        .with_field(
            FieldDef::new("dewarId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("Dewar", "dewarId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("code", ColumnType::varchar(45)))
        .with_field(FieldDef::new("containerType", ColumnType::varchar(20)))
        .with_field(FieldDef::new("capacity", ColumnType::int(10)))
        .with_field(FieldDef::new("beamlineLocation", ColumnType::varchar(20)).indexed())
        .with_field(FieldDef::new("sampleChangerLocation", ColumnType::varchar(20)))
        .with_field(FieldDef::new("containerStatus", ColumnType::varchar(45)).indexed())
        .with_field(FieldDef::new("bltimeStamp", ColumnType::DateTime))
        .with_field(FieldDef::new("barcode", ColumnType::varchar(45)).unique())
        .with_field(
            FieldDef::new("sessionId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("BLSession", "sessionId").on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("ownerId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("Person", "personId").on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("screenId", ColumnType::int(10)))
        .with_field(FieldDef::new("scheduleId", ColumnType::int(10)))
        .with_field(FieldDef::new("imagerId", ColumnType::int(10)))
        .with_field(FieldDef::new("scLocationUpdated", ColumnType::DateTime))
        .with_field(FieldDef::new("requestedImagerId", ColumnType::int(10)))
        .with_field(
            FieldDef::new("requestedReturn", ColumnType::tinyint(1))
                .with_default(DefaultValue::Int(0))
                .with_comment("True for requesting return, False means container will be disposed"),
        )
        .with_field(FieldDef::new("comments", ColumnType::varchar(255)))
        .with_field(FieldDef::new("experimentType", ColumnType::varchar(20)))
        .with_field(FieldDef::new("storageTemperature", ColumnType::float()))
}

pub(crate) fn container_history() -> EntityDef {
    EntityDef::table("ContainerHistory", "ContainerHistory")
        .with_field(FieldDef::new("containerHistoryId", ColumnType::int(10)).primary_key())
        .with_field(
            FieldDef::new("containerId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("Container", "containerId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("location", ColumnType::varchar(45)))
        .with_field(
            FieldDef::new("blTimeStamp", ColumnType::Timestamp)
                .not_null()
                .with_default(DefaultValue::CurrentTimestamp),
        )
        .with_field(FieldDef::new("status", ColumnType::varchar(45)))
}

pub(crate) fn container_inspection() -> EntityDef {
    EntityDef::table("ContainerInspection", "ContainerInspection")
        .with_field(FieldDef::new("containerInspectionId", ColumnType::int(10)).primary_key())
        .with_field(
            FieldDef::new("containerId", ColumnType::int(10))
                .not_null()
                .indexed()
                .references(
                    ForeignKey::to("Container", "containerId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("inspectionTypeId", ColumnType::int(10))
                .not_null()
                .indexed()
                .references(
                    ForeignKey::to("InspectionType", "inspectionTypeId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("imagerId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("Imager", "imagerId").on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("temperature", ColumnType::float()))
        .with_field(FieldDef::new("blTimeStamp", ColumnType::DateTime))
        .with_field(
            FieldDef::new("scheduleComponentid", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("ScheduleComponent", "scheduleComponentId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("state", ColumnType::varchar(20)))
        .with_field(FieldDef::new("priority", ColumnType::smallint(6)))
        .with_field(FieldDef::new("manual", ColumnType::tinyint(1)))
        .with_field(FieldDef::new("scheduledTimeStamp", ColumnType::DateTime))
        .with_field(FieldDef::new("completedTimeStamp", ColumnType::DateTime))
}

pub(crate) fn container_queue() -> EntityDef {
    EntityDef::table("ContainerQueue", "ContainerQueue")
        .with_field(FieldDef::new("containerQueueId", ColumnType::int(10)).primary_key())
        .with_field(
            FieldDef::new("containerId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("Container", "containerId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("personId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("Person", "personId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("createdTimeStamp", ColumnType::Timestamp)
                .not_null()
                .with_default(DefaultValue::CurrentTimestamp),
        )
        .with_field(FieldDef::new("completedTimeStamp", ColumnType::Timestamp))
}

pub(crate) fn container_queue_sample() -> EntityDef {
    EntityDef::table("ContainerQueueSample", "ContainerQueueSample")
        .with_field(FieldDef::new("containerQueueSampleId", ColumnType::int(10)).primary_key())
        .with_field(
            FieldDef::new("containerQueueId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("ContainerQueue", "containerQueueId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("blSubSampleId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("BLSubSample", "blSubSampleId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
}

pub(crate) fn cryoem_initial_model() -> EntityDef {
    EntityDef::table("CryoemInitialModel", "CryoemInitialModel")
        .with_comment("Initial cryo-EM model generation results")
        .with_field(FieldDef::new("cryoemInitialModelId", ColumnType::int(10)).primary_key())
        .with_field(
            FieldDef::new("resolution", ColumnType::float()).with_comment("Unit: Angstroms"),
        )
        .with_field(FieldDef::new("numberOfParticles", ColumnType::int(10)))
}

pub(crate) fn crystal() -> EntityDef {
    EntityDef::table("Crystal", "Crystal")
        .with_field(FieldDef::new("crystalId", ColumnType::int(10)).primary_key())
        .with_field(
            FieldDef::new("diffractionPlanId", ColumnType::int(10))
                .indexed()
                .references(
                    ForeignKey::to("DiffractionPlan", "diffractionPlanId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("proteinId", ColumnType::int(10))
                .not_null()
                .indexed()
                .with_default(DefaultValue::Int(0))
                .references(
                    ForeignKey::to("Protein", "proteinId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("crystalUUID", ColumnType::varchar(45)))
        .with_field(FieldDef::new("name", ColumnType::varchar(255)))
        .with_field(FieldDef::new("spaceGroup", ColumnType::varchar(20)))
        .with_field(FieldDef::new("morphology", ColumnType::varchar(255)))
        .with_field(FieldDef::new("color", ColumnType::varchar(45)))
        .with_field(FieldDef::new("size_X", ColumnType::decimal()))
        .with_field(FieldDef::new("size_Y", ColumnType::decimal()))
        .with_field(FieldDef::new("size_Z", ColumnType::decimal()))
        .with_field(FieldDef::new("cell_a", ColumnType::decimal()))
        .with_field(FieldDef::new("cell_b", ColumnType::decimal()))
        .with_field(FieldDef::new("cell_c", ColumnType::decimal()))
        .with_field(FieldDef::new("cell_alpha", ColumnType::decimal()))
        .with_field(FieldDef::new("cell_beta", ColumnType::decimal()))
        .with_field(FieldDef::new("cell_gamma", ColumnType::decimal()))
        .with_field(FieldDef::new("comments", ColumnType::varchar(255)))
        .with_field(
            FieldDef::new("pdbFileName", ColumnType::varchar(255)).with_comment("pdb file name"),
        )
        .with_field(
            FieldDef::new("pdbFilePath", ColumnType::varchar(1024)).with_comment("pdb file path"),
        )
        .with_field(
            FieldDef::new("recordTimeStamp", ColumnType::Timestamp)
                .not_null()
                .with_default(DefaultValue::CurrentTimestamp)
                .with_comment("Creation or last update date/time"),
        )
        .with_field(FieldDef::new("abundance", ColumnType::float()))
        .with_field(FieldDef::new("packingFraction", ColumnType::float()))
}

pub(crate) fn crystal_composition() -> EntityDef {
    EntityDef::table("CrystalComposition", "CrystalComposition")
        .with_comment("Links a crystal to its components with a specified abundance or ratio.")
        .with_field(FieldDef::new("crystalCompositionId", ColumnType::int(10)).primary_key())
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
            FieldDef::new("crystalId", ColumnType::int(10))
                .not_null()
                .indexed()
                .references(
                    ForeignKey::to("Crystal", "crystalId")
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

pub(crate) fn crystal_has_uuid() -> EntityDef {
    EntityDef::table("CrystalHasUUID", "Crystal_has_UUID")
        .with_field(FieldDef::new("crystal_has_UUID_Id", ColumnType::int(10)).primary_key())
        .with_field(
            FieldDef::new("crystalId", ColumnType::int(10))
                .not_null()
                .indexed()
                .references(
                    ForeignKey::to("Crystal", "crystalId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(FieldDef::new("UUID", ColumnType::varchar(45)).indexed())
        .with_field(FieldDef::new("imageURL", ColumnType::varchar(255)))
}

pub(crate) fn ctf() -> EntityDef {
    EntityDef::table("CTF", "CTF")
        .with_field(FieldDef::new("CTFid", ColumnType::int(11)).primary_key())
        .with_field(FieldDef::new("motionCorrectionId", ColumnType::int(11)).not_null().indexed())
        .with_field(FieldDef::new("spectraImageThumbnailFullPath", ColumnType::varchar(512)))
        .with_field(FieldDef::new("spectraImageFullPath", ColumnType::varchar(512)))
        .with_field(FieldDef::new("defocusU", ColumnType::varchar(45)))
        .with_field(FieldDef::new("defocusV", ColumnType::varchar(45)))
        .with_field(FieldDef::new("angle", ColumnType::varchar(45)))
        .with_field(FieldDef::new("crossCorrelationCoefficient", ColumnType::varchar(45)))
        .with_field(FieldDef::new("resolutionLimit", ColumnType::varchar(45)))
        .with_field(FieldDef::new("estimatedBfactor", ColumnType::varchar(45)))
        .with_field(FieldDef::new("logFilePath", ColumnType::varchar(512)))
        .with_field(
            FieldDef::new("createdTimeStamp", ColumnType::Timestamp)
                .not_null()
                .with_default(DefaultValue::CurrentTimestamp),
        )
}
