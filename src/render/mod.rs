//! Host-facing rendering support: redraw requests and overlay transforms

pub mod overlay;
pub mod redraw;

pub use overlay::{collect_overlays, half_transform, DoorOverlay, OverlayHalf, Z_FIGHT_OFFSET};
pub use redraw::{NoRedraw, RedrawQueue, RedrawReason, RedrawRequest, RedrawSink};
