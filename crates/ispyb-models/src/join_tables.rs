//! Pure join tables backing many-to-many associations.

use ispyb_core::catalog::{ColumnType, EntityDef, FieldDef, ForeignKey, ReferentialAction};

/// Every join table, ordered by name.
pub(crate) fn entities() -> Vec<EntityDef> {
    vec![
        bl_sample_has_diffraction_plan(),
        component_has_sub_type(),
        particle_classification_has_cryoem_initial_model(),
        project_has_bl_sample(),
        project_has_dc_group(),
        project_has_energy_scan(),
        project_has_person(),
        project_has_protein(),
        project_has_session(),
        project_has_shipping(),
        project_has_xfef_spectrum(),
        shipping_has_session(),
        user_group_has_permission(),
        user_group_has_person(),
    ]
}

pub(crate) fn bl_sample_has_diffraction_plan() -> EntityDef {
    EntityDef::table("BLSample_has_DiffractionPlan", "BLSample_has_DiffractionPlan")
        .with_field(
            FieldDef::new("blSampleId", ColumnType::int(10))
                .primary_key()
                .references(
                    ForeignKey::to("BLSample", "blSampleId").on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("diffractionPlanId", ColumnType::int(10))
                .primary_key()
                .indexed()
                .references(
                    ForeignKey::to("DiffractionPlan", "diffractionPlanId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
}

pub(crate) fn component_has_sub_type() -> EntityDef {
    EntityDef::table("Component_has_SubType", "Component_has_SubType")
        .with_field(
            FieldDef::new("componentId", ColumnType::int(10))
                .primary_key()
                .references(
                    ForeignKey::to("Protein", "proteinId").on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("componentSubTypeId", ColumnType::int(10))
                .primary_key()
                .indexed()
                .references(
                    ForeignKey::to("ComponentSubType", "componentSubTypeId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
}

pub(crate) fn particle_classification_has_cryoem_initial_model() -> EntityDef {
    EntityDef::table(
        "ParticleClassification_has_CryoemInitialModel",
        "ParticleClassification_has_CryoemInitialModel",
    )
        .with_field(
            FieldDef::new("particleClassificationId", ColumnType::int(10))
                .primary_key()
                .references(
                    ForeignKey::to("ParticleClassification", "particleClassificationId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("cryoemInitialModelId", ColumnType::int(10))
                .primary_key()
                .indexed()
                .references(
                    ForeignKey::to("CryoemInitialModel", "cryoemInitialModelId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
}

pub(crate) fn project_has_bl_sample() -> EntityDef {
    EntityDef::table("Project_has_BLSample", "Project_has_BLSample")
        .with_field(
            FieldDef::new("projectId", ColumnType::int(10))
                .primary_key()
                .references(
                    ForeignKey::to("Project", "projectId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("blSampleId", ColumnType::int(10))
                .primary_key()
                .indexed()
                .references(
                    ForeignKey::to("BLSample", "blSampleId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
}

pub(crate) fn project_has_dc_group() -> EntityDef {
    EntityDef::table("Project_has_DCGroup", "Project_has_DCGroup")
        .with_field(
            FieldDef::new("projectId", ColumnType::int(10))
                .primary_key()
                .references(
                    ForeignKey::to("Project", "projectId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("dataCollectionGroupId", ColumnType::int(11))
                .primary_key()
                .indexed()
                .references(
                    ForeignKey::to("DataCollectionGroup", "dataCollectionGroupId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
}

pub(crate) fn project_has_energy_scan() -> EntityDef {
    EntityDef::table("Project_has_EnergyScan", "Project_has_EnergyScan")
        .with_field(
            FieldDef::new("projectId", ColumnType::int(10))
                .primary_key()
                .references(
                    ForeignKey::to("Project", "projectId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("energyScanId", ColumnType::int(10))
                .primary_key()
                .indexed()
                .references(
                    ForeignKey::to("EnergyScan", "energyScanId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
}

pub(crate) fn project_has_person() -> EntityDef {
    EntityDef::table("Project_has_Person", "Project_has_Person")
        .with_field(
            FieldDef::new("projectId", ColumnType::int(10))
                .primary_key()
                .references(
                    ForeignKey::to("Project", "projectId").on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("personId", ColumnType::int(10))
                .primary_key()
                .indexed()
                .references(
                    ForeignKey::to("Person", "personId").on_delete(ReferentialAction::Cascade),
                ),
        )
}

pub(crate) fn project_has_protein() -> EntityDef {
    EntityDef::table("Project_has_Protein", "Project_has_Protein")
        .with_field(
            FieldDef::new("projectId", ColumnType::int(10))
                .primary_key()
                .references(
                    ForeignKey::to("Project", "projectId").on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("proteinId", ColumnType::int(10))
                .primary_key()
                .indexed()
                .references(
                    ForeignKey::to("Protein", "proteinId").on_delete(ReferentialAction::Cascade),
                ),
        )
}

pub(crate) fn project_has_session() -> EntityDef {
    EntityDef::table("Project_has_Session", "Project_has_Session")
        .with_field(
            FieldDef::new("projectId", ColumnType::int(10))
                .primary_key()
                .references(
                    ForeignKey::to("Project", "projectId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("sessionId", ColumnType::int(10))
                .primary_key()
                .indexed()
                .references(
                    ForeignKey::to("BLSession", "sessionId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
}

pub(crate) fn project_has_shipping() -> EntityDef {
    EntityDef::table("Project_has_Shipping", "Project_has_Shipping")
        .with_field(
            FieldDef::new("projectId", ColumnType::int(10))
                .primary_key()
                .references(
                    ForeignKey::to("Project", "projectId").on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("shippingId", ColumnType::int(10))
                .primary_key()
                .indexed()
                .references(
                    ForeignKey::to("Shipping", "shippingId").on_delete(ReferentialAction::Cascade),
                ),
        )
}

pub(crate) fn project_has_xfef_spectrum() -> EntityDef {
    EntityDef::table("Project_has_XFEFSpectrum", "Project_has_XFEFSpectrum")
        .with_field(
            FieldDef::new("projectId", ColumnType::int(10))
                .primary_key()
                .references(
                    ForeignKey::to("Project", "projectId").on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("xfeFluorescenceSpectrumId", ColumnType::int(10))
                .primary_key()
                .indexed()
                .references(
                    ForeignKey::to("XFEFluorescenceSpectrum", "xfeFluorescenceSpectrumId")
                        .on_delete(ReferentialAction::Cascade),
                ),
        )
}

pub(crate) fn shipping_has_session() -> EntityDef {
    EntityDef::table("ShippingHasSession", "ShippingHasSession")
        .with_field(
            FieldDef::new("shippingId", ColumnType::int(10))
                .primary_key()
                .indexed()
                .references(
                    ForeignKey::to("Shipping", "shippingId").on_delete(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("sessionId", ColumnType::int(10))
                .primary_key()
                .indexed()
                .references(
                    ForeignKey::to("BLSession", "sessionId").on_delete(ReferentialAction::Cascade),
                ),
        )
}

pub(crate) fn user_group_has_permission() -> EntityDef {
    EntityDef::table("UserGroup_has_Permission", "UserGroup_has_Permission")
        .with_field(
            FieldDef::new("userGroupId", ColumnType::int(10))
                .primary_key()
                .references(
                    ForeignKey::to("UserGroup", "userGroupId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("permissionId", ColumnType::int(10))
                .primary_key()
                .indexed()
                .references(
                    ForeignKey::to("Permission", "permissionId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
}

pub(crate) fn user_group_has_person() -> EntityDef {
    EntityDef::table("UserGroup_has_Person", "UserGroup_has_Person")
        .with_field(
            FieldDef::new("userGroupId", ColumnType::int(10))
                .primary_key()
                .references(
                    ForeignKey::to("UserGroup", "userGroupId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
        .with_field(
            FieldDef::new("personId", ColumnType::int(10))
                .primary_key()
                .indexed()
                .references(
                    ForeignKey::to("Person", "personId")
                        .on_delete(ReferentialAction::Cascade)
                        .on_update(ReferentialAction::Cascade),
                ),
        )
}
