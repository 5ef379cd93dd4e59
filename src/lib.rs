//! # Vitrine
//!
//! An interactive 3D showcase: a small shelf of display items that a pointer
//! can hover and select, under a camera that drifts with the pointer and
//! items that lift, turn and bob.
//!
//! The crate is organised around a single mounted [`Showcase`]:
//!
//! - [`catalog`]: the items to display, usually loaded from JSON
//! - [`scene`]: scene graph, camera, lights, display entities and the
//!   [`SceneManager`] that owns the render surface
//! - [`pick`] and [`input`]: pointer rays and nearest-hit resolution
//! - [`interaction`]: hover and selection state
//! - [`animation`]: the per-frame easing loop and frame scheduler
//! - [`renderer`]: the [`RenderSurface`] seam and its wgpu implementation
//! - [`app`]: a winit host that wires it all to a window
//!
//! ```rust,ignore
//! use vitrine::{App, Catalog};
//!
//! fn main() -> vitrine::Result<()> {
//!     env_logger::init();
//!     let catalog = Catalog::from_path("catalog.json")?;
//!     App::new().with_title("Bookshop").run(catalog)
//! }
//! ```

pub mod animation;
pub mod app;
pub mod catalog;
pub mod errors;
pub mod input;
pub mod interaction;
pub mod pick;
pub mod renderer;
pub mod scene;
pub mod settings;
pub mod showcase;
pub mod utils;

pub use animation::{AnimationLoop, FrameScheduler};
pub use app::App;
pub use catalog::{Catalog, Color, Item, ItemId};
pub use errors::{Result, VitrineError};
pub use input::InputTracker;
pub use interaction::{InteractionContext, InteractionState, SelectionChange};
pub use pick::{PickHit, Ray};
pub use renderer::{DrawItem, FrameSnapshot, RenderSettings, RenderSurface, WgpuSurface};
pub use scene::{Camera, CameraState, DistanceTier, SceneManager, Viewport};
pub use settings::{AnimationSettings, ShowcaseSettings};
pub use showcase::{Listeners, Showcase, TeardownReport};
