//! Layout calculation for booklet imposition
//!
//! Everything in here is pure: page sizes in, sheet descriptors out.
//! - Saddle-stitch slot ordering (which source page goes where)
//! - Sheet and face descriptors consumed by the renderers

mod saddle;
mod types;

pub use saddle::*;
pub use types::*;
