//! Render queue types.
//!
//! Responsibilities:
//! - the [`Renderable`] capability contract and its per-object [`RenderState`]
//! - [`ViewportObject`], the positioned building block for domain objects
//! - deterministic paint order (z-index + insertion order) in [`RenderQueue`]

mod object;
mod queue;
mod renderable;
mod z_index;

pub use object::ViewportObject;
pub use queue::{RenderQueue, SortKey};
pub use renderable::{PositionType, RenderState, Renderable, SharedRenderable};
pub use z_index::ZIndex;
