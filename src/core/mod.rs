pub mod calibrate;
pub mod edo;
pub mod evaluate;
pub mod perm;
pub mod pitchset;
pub mod placement;
pub mod ratios;
pub mod roughness;
pub mod tension;
