//! Greedy coloring of triangles that share vertices.
//!
//! Two triangles conflict when they have at least one vertex in common.
//! Triangles are visited once, in the order given, and each takes the
//! smallest color not yet used by an earlier triangle at any of its three
//! vertices. There is no backtracking, so the result is valid but not
//! necessarily optimal.

use crate::errors::ColoringError;
use crate::mesh::Triangle;
use std::collections::HashMap;
use tracing::debug;

/// Default number of colors available to the greedy assignment
pub const DEFAULT_PALETTE: u8 = 49;

/// Largest palette that fits in a [`ColorSet`]
pub const MAX_PALETTE: u8 = 63;

/// A set of colors `1..=63`, one bit per color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ColorSet(u64);

impl ColorSet {
    pub const EMPTY: ColorSet = ColorSet(0);

    #[inline]
    pub fn insert(&mut self, color: u8) {
        debug_assert!((1..=MAX_PALETTE).contains(&color));
        self.0 |= 1 << color;
    }

    #[inline]
    pub const fn union(self, other: ColorSet) -> ColorSet {
        ColorSet(self.0 | other.0)
    }

    /// Smallest color in `1..=palette` not in the set
    #[inline]
    pub const fn first_free(self, palette: u8) -> Option<u8> {
        // bit 0 is never a color; treat it as taken
        let free = !(self.0 | 1);
        let color = free.trailing_zeros();
        if color <= palette as u32 && color <= MAX_PALETTE as u32 {
            Some(color as u8)
        } else {
            None
        }
    }
}

impl FromIterator<u8> for ColorSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = ColorSet::EMPTY;
        for color in iter {
            set.insert(color);
        }
        set
    }
}

/// Colors assigned to a sequence of triangles, in visitation order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coloring {
    colors: Vec<u8>,
    palette: u8,
}

impl Coloring {
    /// Color of the `i`-th visited triangle
    pub fn color(&self, i: usize) -> u8 {
        self.colors[i]
    }

    pub fn colors(&self) -> &[u8] {
        &self.colors
    }

    pub const fn palette(&self) -> u8 {
        self.palette
    }

    /// Highest color actually used, 0 for an empty coloring
    pub fn colors_used(&self) -> u8 {
        self.colors.iter().copied().max().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Assign each triangle, in order, the smallest color in `1..=palette` not
/// used by an already processed triangle sharing one of its vertices.
///
/// Vertex indices are only used as keys, so they need not be dense or
/// bounded by the number of triangles.
///
/// Fails with [`ColoringError::PaletteExhausted`] when a triangle's
/// neighbourhood already uses every color of the palette.
pub fn greedy_color(triangles: &[Triangle], palette: u8) -> Result<Coloring, ColoringError> {
    if palette == 0 || palette > MAX_PALETTE {
        return Err(ColoringError::InvalidPalette {
            palette,
            max: MAX_PALETTE,
        });
    }

    // vertex index -> colors of the processed triangles touching it
    let mut used_at: HashMap<usize, ColorSet> = HashMap::with_capacity(triangles.len() * 3);
    let mut colors = Vec::with_capacity(triangles.len());

    for (triangle, indices) in triangles.iter().enumerate() {
        let banned = indices
            .iter()
            .filter_map(|v| used_at.get(v))
            .fold(ColorSet::EMPTY, |acc, &set| acc.union(set));

        let color = banned
            .first_free(palette)
            .ok_or(ColoringError::PaletteExhausted {
                triangle,
                indices: *indices,
                palette,
            })?;

        for &v in indices {
            used_at.entry(v).or_default().insert(color);
        }
        colors.push(color);
    }

    let coloring = Coloring { colors, palette };
    debug!(
        triangles = coloring.len(),
        colors_used = coloring.colors_used(),
        "greedy coloring complete"
    );
    Ok(coloring)
}
