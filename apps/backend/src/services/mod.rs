pub mod encounter_flow;
pub mod sessions;
