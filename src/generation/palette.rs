//! Fixed color sets per category.

use rand::Rng;

use super::shape::Rgb;

pub const BARK: u32 = 0x8B4513;
pub const DARK_BARK: u32 = 0x4B3621;
pub const OLIVE_DRAB: u32 = 0x6B8E23;

pub const TREE_CANOPY: [u32; 4] = [0x228B22, 0x006400, 0x2E8B57, 0x3CB371];
pub const BUSH_LEAVES: [u32; 4] = [0x228B22, 0x32CD32, 0x006400, 0x556B2F];
pub const BUSH_FLOWERS: [u32; 4] = [0xFF0000, 0xFFFF00, 0xFFFFFF, 0xFF69B4];

pub const WILDFLOWER_STEM: u32 = 0x228B22;
pub const WILDFLOWER_HEADS: [u32; 7] = [0xFF0000, 0xFFFF00, 0xFFFFFF, 0xFF69B4, 0x800080, 0xFFA500, 0x0000FF];
pub const GRASS: [u32; 8] = [0x7CFC00, 0x32CD32, 0x228B22, 0x008000, 0x556B2F, 0x6B8E23, 0x8FBC8F, 0x9ACD32];

pub const MUSHROOM_STEMS: [u32; 4] = [0xFFFFE0, 0xFAF0E6, 0xF5F5DC, 0xFFF0F5];
pub const MUSHROOM_CAPS: [u32; 12] = [
    0xFF0000, 0xA52A2A, 0x8B4513, 0xFFFFFF, 0xFFFF00, 0xFF6347,
    0x800000, 0xCD853F, 0xDEB887, 0xD2691E, 0xADFF2F, 0x708090,
];
pub const FLAT_CAPS: [u32; 5] = [0x8B4513, 0xD2691E, 0xCD853F, 0xDEB887, 0xBC8F8F];
pub const PUFFBALLS: [u32; 5] = [0xFFFFFF, 0xFFFAF0, 0xFFFAFA, 0xF5F5F5, 0xF0F8FF];
pub const GILLS: u32 = 0xE8E8E8;
pub const PUFFBALL_DOTS: u32 = 0xE6E6E6;

pub const SMALL_IVY: [u32; 5] = [0x228B22, 0x32CD32, 0x00FF00, 0x7CFC00, 0x00FA9A];
pub const ROCKS: [u32; 4] = [0x808080, 0x696969, 0xA9A9A9, 0x778899];

// -- Wilted ----------------------------------------------------------------

pub const WILTED_CLUSTER: u32 = 0x808080;
pub const WILTED_LEAF: u32 = 0x696969;
pub const WILTED_IVY_STEMS: [u32; 4] = [0x696969, 0x808080, 0x778899, 0x5F9EA0];

// -- Revived ---------------------------------------------------------------

pub const REVIVED_STEMS: [u32; 4] = [0x228B22, 0x32CD32, 0x006400, 0x008000];
pub const REVIVED_LEAVES: [u32; 4] = [0x32CD32, 0x00FF00, 0x7CFC00, 0x90EE90];
pub const REVIVED_FLOWERS: [u32; 10] = [
    0xFF0000, 0xFFFF00, 0xFF00FF, 0xFF4500, 0x9932CC,
    0xFF69B4, 0x00FFFF, 0xFFA500, 0xFFB6C1, 0x4B0082,
];
pub const REVIVED_BUSH_LEAVES: [u32; 4] = [0x006400, 0x228B22, 0x32CD32, 0x556B2F];
pub const REVIVED_BUSH_FLOWERS: [u32; 6] = [0xFF0000, 0xFFFF00, 0xFFFFFF, 0xFFA500, 0xFF69B4, 0x800080];
pub const REVIVED_TALL_LEAVES: [u32; 3] = [0x006400, 0x228B22, 0x32CD32];
pub const REVIVED_IVY: [u32; 6] = [0x00FF00, 0x32CD32, 0x7CFC00, 0x00FA9A, 0x7FFF00, 0x90EE90];
pub const REVIVED_IVY_FLOWERS: [u32; 4] = [0x9370DB, 0x6A5ACD, 0x483D8B, 0x4B0082];

// -- Effects ---------------------------------------------------------------

pub const CLOUD: u32 = 0xFFFFFF;
pub const RAIN: u32 = 0x4169E1;
pub const RAINBOW: [u32; 7] = [0xFF0000, 0xFF7F00, 0xFFFF00, 0x00FF00, 0x0000FF, 0x4B0082, 0x9400D3];
pub const LIGHTNING: u32 = 0x80F0FF;

/// Pick a color uniformly from a non-empty palette.
#[inline]
pub fn pick<R: Rng + ?Sized>(rng: &mut R, palette: &[u32]) -> Rgb {
    match palette.len() {
        0 => Rgb::WHITE,
        n => Rgb::from_hex(palette[rng.gen_range(0..n)]),
    }
}

/// Random color with each channel drawn from `base + U(0, spread)`.
#[inline]
pub fn tint<R: Rng + ?Sized>(rng: &mut R, base: [f32; 3], spread: [f32; 3]) -> Rgb {
    Rgb::new(
        base[0] + rng.r#gen::<f32>() * spread[0],
        base[1] + rng.r#gen::<f32>() * spread[1],
        base[2] + rng.r#gen::<f32>() * spread[2],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_pick_stays_in_palette() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..200 {
            let c = pick(&mut rng, &GRASS).to_hex();
            assert!(GRASS.contains(&c), "{:06X} not in grass palette", c);
        }
        assert_eq!(pick(&mut rng, &[]), Rgb::WHITE);
    }

    #[test]
    fn test_tint_range() {
        let mut rng = StdRng::seed_from_u64(6);
        for _ in 0..200 {
            let c = tint(&mut rng, [0.3, 0.2, 0.1], [0.25, 0.2, 0.05]);
            assert!(c.0[0] >= 0.3 && c.0[0] <= 0.55, "red {}", c.0[0]);
            assert!(c.0[2] >= 0.1 && c.0[2] <= 0.15, "blue {}", c.0[2]);
        }
    }
}
