//! The per-tile [`CollisionFlags`] bitset.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

/// Bitset of movement and sight obstructions for a single tile.
///
/// Each tile of the collision grid carries one of these. The directional
/// movement bits encode a wall segment on the named edge or corner of the
/// tile; crossing that edge is blocked in both directions, so a wall
/// placed between two tiles is mirrored onto both. [`BLOCK_FULL`]
/// matches any of the whole-tile obstructions (a solid object, a blocked
/// floor, or blocking floor decoration).
///
/// The sight bits are the same idea for line-of-sight rays: a
/// `SIGHT_*` wall stops rays crossing that edge without necessarily
/// stopping movement.
///
/// [`BLOCK_FULL`]: CollisionFlags::BLOCK_FULL
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CollisionFlags(u32);

impl CollisionFlags {
    /// No obstruction.
    pub const EMPTY: Self = Self(0);

    /// Wall segment on the north-west corner of the tile.
    pub const BLOCK_NORTH_WEST: Self = Self(0x1);
    /// Wall segment on the north edge of the tile.
    pub const BLOCK_NORTH: Self = Self(0x2);
    /// Wall segment on the north-east corner of the tile.
    pub const BLOCK_NORTH_EAST: Self = Self(0x4);
    /// Wall segment on the east edge of the tile.
    pub const BLOCK_EAST: Self = Self(0x8);
    /// Wall segment on the south-east corner of the tile.
    pub const BLOCK_SOUTH_EAST: Self = Self(0x10);
    /// Wall segment on the south edge of the tile.
    pub const BLOCK_SOUTH: Self = Self(0x20);
    /// Wall segment on the south-west corner of the tile.
    pub const BLOCK_SOUTH_WEST: Self = Self(0x40);
    /// Wall segment on the west edge of the tile.
    pub const BLOCK_WEST: Self = Self(0x80);

    /// A solid object occupies the tile.
    pub const BLOCK_OBJECT: Self = Self(0x100);
    /// Floor decoration blocks the tile.
    pub const BLOCK_FLOOR_DECORATION: Self = Self(0x4_0000);
    /// The floor itself is unwalkable.
    pub const BLOCK_FLOOR: Self = Self(0x20_0000);
    /// Any whole-tile obstruction: object, floor decoration, or floor.
    pub const BLOCK_FULL: Self =
        Self(Self::BLOCK_OBJECT.0 | Self::BLOCK_FLOOR_DECORATION.0 | Self::BLOCK_FLOOR.0);

    /// Sight-blocking wall on the north edge of the tile.
    pub const SIGHT_NORTH: Self = Self(0x400);
    /// Sight-blocking wall on the east edge of the tile.
    pub const SIGHT_EAST: Self = Self(0x1000);
    /// Sight-blocking wall on the south edge of the tile.
    pub const SIGHT_SOUTH: Self = Self(0x4000);
    /// Sight-blocking wall on the west edge of the tile.
    pub const SIGHT_WEST: Self = Self(0x1_0000);
    /// The whole tile blocks sight.
    pub const SIGHT_FULL: Self = Self(0x2_0000);

    /// Reinterpret a raw bit pattern as flags.
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// The raw bit pattern.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns `true` if no bits are set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if any bit of `mask` is set in `self`.
    pub const fn intersects(self, mask: Self) -> bool {
        self.0 & mask.0 != 0
    }

    /// Returns `true` if every bit of `mask` is set in `self`.
    pub const fn contains(self, mask: Self) -> bool {
        self.0 & mask.0 == mask.0
    }

    /// Set every bit of `other` in `self`.
    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    /// Clear every bit of `other` in `self`.
    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }
}

impl BitOr for CollisionFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for CollisionFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for CollisionFlags {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl fmt::Debug for CollisionFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CollisionFlags({:#x})", self.0)
    }
}
