use rgb::RGB8;
use crate::RESOLUTION;

/// The colors of a palette, ordered from the low end of the domain
/// to the high end.
///
/// Tables of the catalog are only handed out as `&'static ColorTable`
/// (see [`crate::resolve`]) and are never modified.
#[derive(Debug, PartialEq, Eq)]
pub struct ColorTable {
    name: &'static str,
    rgb: [RGB8; RESOLUTION], // Invariant: entries never change
}

impl ColorTable {
    /// Build the table from the raw channel triplets of the catalog.
    /// Runs once per palette, from its `lazy_static` initializer.
    pub(crate) fn materialize(name: &'static str,
                              raw: &[[u8; 3]; RESOLUTION]) -> Self {
        log::debug!("materializing palette {name:?} ({RESOLUTION} colors)");
        let mut rgb = [RGB8 { r: 0, g: 0, b: 0 }; RESOLUTION];
        for (c, &[r, g, b]) in rgb.iter_mut().zip(raw) {
            *c = RGB8 { r, g, b };
        }
        ColorTable { name, rgb }
    }

    /// Catalog name of the palette.
    pub fn name(&self) -> &'static str { self.name }

    /// Number of colors, always [`RESOLUTION`].
    pub fn len(&self) -> usize { self.rgb.len() }

    /// The colors as a slice.
    pub fn colors(&self) -> &[RGB8] { &self.rgb }

    /// Color at position `i`, if `i < RESOLUTION`.
    pub fn get(&self, i: usize) -> Option<RGB8> { self.rgb.get(i).copied() }

    /// Color of the low end of the palette.
    pub fn first(&self) -> RGB8 { self.rgb[0] }

    /// Color of the high end of the palette.
    pub fn last(&self) -> RGB8 { self.rgb[RESOLUTION - 1] }

    pub fn iter(&self) -> std::slice::Iter<'_, RGB8> { self.rgb.iter() }
}

impl AsRef<[RGB8]> for ColorTable {
    fn as_ref(&self) -> &[RGB8] { &self.rgb }
}

impl<'a> IntoIterator for &'a ColorTable {
    type Item = &'a RGB8;
    type IntoIter = std::slice::Iter<'a, RGB8>;

    fn into_iter(self) -> Self::IntoIter { self.rgb.iter() }
}
