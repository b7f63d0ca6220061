mod block_pos;
mod door;
mod tracker;

pub use block_pos::{BlockPos, SectionPos};
pub use door::{DoorHalf, DoorState, Facing, Hinge};
pub use tracker::DoorStateTracker;
