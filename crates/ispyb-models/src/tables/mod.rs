//! Table-backed entities, one declaration per ISPyB table.

mod a;
mod b;
mod c;
mod d;
mod e_h;
mod i_m;
mod n_q;
mod r_s;
mod t_z;

use ispyb_core::catalog::EntityDef;

/// Every table entity, ordered by name.
pub(crate) fn entities() -> Vec<EntityDef> {
    vec![
        a::ab_initio_model(),
        a::additive(),
        a::admin_activity(),
        a::admin_var(),
        a::aperture(),
        a::assembly(),
        a::assembly_has_macromolecule(),
        a::assembly_region(),
        a::auto_proc(),
        a::auto_proc_integration(),
        a::auto_proc_program(),
        a::auto_proc_program_attachment(),
        a::auto_proc_scaling(),
        a::auto_proc_scaling_has_int(),
        a::auto_proc_scaling_statistics(),
        a::auto_proc_status(),
        b::beam_apertures(),
        b::beam_centres(),
        b::beamline_action(),
        b::beam_line_setup(),
        b::beamline_stats(),
        b::bf_automation_error(),
        b::bf_automation_fault(),
        b::bf_component(),
        b::bf_component_beamline(),
        b::bf_fault(),
        b::bf_subcomponent(),
        b::bf_subcomponent_beamline(),
        b::bf_system(),
        b::bf_system_beamline(),
        b::bl_sample(),
        b::bl_sample_group(),
        b::bl_sample_group_has_bl_sample(),
        b::bl_sample_has_energy_scan(),
        b::bl_sample_image(),
        b::bl_sample_image_analysis(),
        b::bl_sample_image_score(),
        b::bl_sample_type_has_component(),
        b::bl_session(),
        b::bl_session_has_sc_position(),
        b::bl_sub_sample(),
        b::buffer(),
        b::buffer_has_additive(),
        c::calendar_hash(),
        c::component_sub_type(),
        c::component_type(),
        c::concentration_type(),
        c::container(),
        c::container_history(),
        c::container_inspection(),
        c::container_queue(),
        c::container_queue_sample(),
        c::cryoem_initial_model(),
        c::crystal(),
        c::crystal_composition(),
        c::crystal_has_uuid(),
        c::ctf(),
        d::data_acquisition(),
        d::data_collection(),
        d::data_collection_file_attachment(),
        d::data_collection_group(),
        d::data_collection_plan_group(),
        d::datamatrix_in_sample_changer(),
        d::data_reduction_status(),
        d::detector(),
        d::dewar(),
        d::dewar_location(),
        d::dewar_location_list(),
        d::dewar_registry(),
        d::dewar_registry_has_proposal(),
        d::dewar_transport_history(),
        d::diffraction_plan(),
        d::diffraction_plan_has_detector(),
        e_h::em_microscope(),
        e_h::energy_scan(),
        e_h::event(),
        e_h::event_chain(),
        e_h::event_type(),
        e_h::experiment(),
        e_h::experiment_kind_details(),
        e_h::fit_structure_to_experimental_data(),
        e_h::frame(),
        e_h::frame_list(),
        e_h::frame_set(),
        e_h::frame_to_list(),
        e_h::geometry_classname(),
        e_h::grid_info(),
        i_m::image(),
        i_m::image_quality_indicators(),
        i_m::imager(),
        i_m::initial_model(),
        i_m::input_parameter_workflow(),
        i_m::inspection_type(),
        i_m::instruction(),
        i_m::instruction_set(),
        i_m::ispyb_auto_proc_attachment(),
        i_m::ispyb_crystal_class(),
        i_m::ispyb_reference(),
        i_m::lab_contact(),
        i_m::laboratory(),
        i_m::log4_stat(),
        i_m::login(),
        i_m::macromolecule(),
        i_m::macromolecule_region(),
        i_m::measurement(),
        i_m::measurement_to_data_collection(),
        i_m::measurement_unit(),
        i_m::merge(),
        i_m::mixture_to_structure(),
        i_m::model(),
        i_m::model_building(),
        i_m::model_list(),
        i_m::model_to_list(),
        i_m::motion_correction(),
        i_m::motor_position(),
        i_m::movie(),
        i_m::mxmr_run(),
        i_m::mxmr_run_blob(),
        n_q::particle(),
        n_q::particle_classification(),
        n_q::particle_classification_group(),
        n_q::particle_picker(),
        n_q::pdb(),
        n_q::pdb_entry(),
        n_q::pdb_entry_has_auto_proc_program(),
        n_q::permission(),
        n_q::person(),
        n_q::phasing(),
        n_q::phasing_analysis(),
        n_q::phasing_has_scaling(),
        n_q::phasing_program_attachment(),
        n_q::phasing_program_run(),
        n_q::phasing_statistics(),
        n_q::phasing_step(),
        n_q::php_session(),
        n_q::plate_group(),
        n_q::plate_type(),
        n_q::position(),
        n_q::prepare_phasing_data(),
        n_q::project(),
        n_q::project_has_user(),
        n_q::proposal(),
        n_q::proposal_has_person(),
        n_q::protein(),
        n_q::protein_has_lattice(),
        n_q::protein_has_pdb(),
        r_s::rigid_body_modeling(),
        r_s::robot_action(),
        r_s::run(),
        r_s::safety_level(),
        r_s::sample_composition(),
        r_s::sample_plate(),
        r_s::sample_plate_position(),
        r_s::saxs_data_collection(),
        r_s::scan_parameters_model(),
        r_s::scan_parameters_service(),
        r_s::schedule(),
        r_s::schedule_component(),
        r_s::schema_status(),
        r_s::screen(),
        r_s::screen_component(),
        r_s::screen_component_group(),
        r_s::screening(),
        r_s::screening_input(),
        r_s::screening_output(),
        r_s::screening_output_lattice(),
        r_s::screening_rank(),
        r_s::screening_rank_set(),
        r_s::screening_strategy(),
        r_s::screening_strategy_sub_wedge(),
        r_s::screening_strategy_wedge(),
        r_s::session_has_person(),
        r_s::session_type(),
        r_s::shipping(),
        r_s::space_group(),
        r_s::specimen(),
        r_s::ssx_data_collection(),
        r_s::stock_solution(),
        r_s::stoichiometry(),
        r_s::structure(),
        r_s::substructure_determination(),
        r_s::subtraction(),
        r_s::subtraction_to_ab_initio_model(),
        r_s::superposition(),
        r_s::sw_once_token(),
        t_z::untrusted_region(),
        t_z::user_group(),
        t_z::workflow(),
        t_z::workflow_dehydration(),
        t_z::workflow_mesh(),
        t_z::workflow_step(),
        t_z::workflow_type(),
        t_z::xfe_fluorescence_spectrum(),
        t_z::xrf_fluorescence_mapping(),
        t_z::xrf_fluorescence_mapping_roi(),
    ]
}
