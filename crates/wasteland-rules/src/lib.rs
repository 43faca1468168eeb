//! Gameplay rules scoped to the wasteland biome.
//!
//! Each rule is a pure function of (world, event payload, config): the host
//! calls in once per occurrence, the rule answers with a cancel decision or an
//! effect to apply, and nothing else happens. Both rules treat the biome gate
//! as a strict precondition: outside the wasteland they have no observable
//! effect regardless of any other input.
//!
//! Lookups that fail to resolve (biome key, entity type) degrade to the
//! permissive answer rather than erroring; nothing in here can fail in a way
//! the host needs to know about.

pub mod biome;
pub mod spawn_filter;
pub mod structure_condition;
pub mod water_hazard;

pub use biome::{is_wasteland_biome, wasteland_biome_id};
pub use spawn_filter::evaluate_spawn;
pub use structure_condition::AllowExternalStructures;
pub use water_hazard::evaluate_water_hazard;
