use bitflags::bitflags;

bitflags! {
    /// Per-tile collision bits of the local region's movement map.
    ///
    /// The numeric values are the packed flags observed in the live client;
    /// the wall bits name the edge of the tile the wall sits on, the
    /// diagonal bits the corner post.
    #[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
    pub struct CollisionFlags: u32 {
        // Walls and corner posts, one bit per edge/corner.
        const WALL_NORTHWEST = 0x0000_0001;
        const WALL_NORTH     = 0x0000_0002;
        const WALL_NORTHEAST = 0x0000_0004;
        const WALL_EAST      = 0x0000_0008;
        const WALL_SOUTHEAST = 0x0000_0010;
        const WALL_SOUTH     = 0x0000_0020;
        const WALL_SOUTHWEST = 0x0000_0040;
        const WALL_WEST      = 0x0000_0080;

        // A solid object (tree, fence, scenery) occupies the tile.
        const OBJECT         = 0x0000_0100;

        // A blocking ground decoration sits on the tile.
        const DECORATION     = 0x0008_0000;

        // The terrain itself is unwalkable (water, cliff).
        const FLOOR          = 0x0020_0000;

        // Tile is closed off entirely (roof span, unloaded edge).
        const SEALED         = 0x0100_0000;
    }
}

impl CollisionFlags {
    /// Everything that makes the tile itself unenterable, regardless of the
    /// direction of approach.
    pub const SOLID: CollisionFlags = CollisionFlags::OBJECT
        .union(CollisionFlags::DECORATION)
        .union(CollisionFlags::FLOOR)
        .union(CollisionFlags::SEALED);
}

bitflags! {
    /// Per-tile ground flags (the client's settings byte array).
    #[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
    pub struct TileFlags: u8 {
        /// Walkable bridge deck: treat the tile as one plane higher for
        /// height sampling. The client marks these on plane 1.
        const BRIDGE = 0x02;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid_mask_matches_client_packing() {
        // The client tests directions against 0x128010x-style composites;
        // SOLID plus one wall bit must reproduce them.
        assert_eq!(CollisionFlags::SOLID.bits(), 0x0128_0100);
        assert_eq!(
            (CollisionFlags::SOLID | CollisionFlags::WALL_NORTH).bits(),
            0x0128_0102
        );
        assert_eq!(
            (CollisionFlags::SOLID | CollisionFlags::WALL_WEST).bits(),
            0x0128_0180
        );
    }
}
