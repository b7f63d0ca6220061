use std::fmt;

/// Integer block coordinates in the voxel world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

/// Coordinates of a 16x16x16 chunk section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SectionPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub const ORIGIN: BlockPos = BlockPos { x: 0, y: 0, z: 0 };

    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    pub const fn up(&self) -> Self {
        Self::new(self.x, self.y + 1, self.z)
    }

    pub const fn down(&self) -> Self {
        Self::new(self.x, self.y - 1, self.z)
    }

    /// Section containing this block (arithmetic shift, so negatives round down)
    pub const fn section(&self) -> SectionPos {
        SectionPos {
            x: self.x >> 4,
            y: self.y >> 4,
            z: self.z >> 4,
        }
    }
}

impl fmt::Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.x, self.y, self.z)
    }
}
