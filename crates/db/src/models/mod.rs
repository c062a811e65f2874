pub mod challenge;
pub mod skill;
