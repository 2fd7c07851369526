//! tensura — interval-placement and tension-scoring engine.
//!
//! Given a multiset of interval lengths (in EDO steps) and a register
//! window, the engine enumerates all distinct orderings, places integer
//! pitch anchors for each ordering under a selectable placement engine,
//! and scores every induced dyad with a psychoacoustic tension model
//! (just-intonation proximity, partial-beating roughness, register
//! damping, octave-compounding relief). Orderings are ranked by
//! per-pair tension.

pub mod config;
pub mod core;
