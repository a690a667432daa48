//! Scientific colormaps and value-to-color mapping.
//!
//! - [`Colormap`], [`resolve`] and [`names`] give access to the
//!   catalog of palettes (matplotlib afmhot, gist_earth, inferno,
//!   terrain and viridis), each a [`ColorTable`] of [`RESOLUTION`]
//!   colors.
//! - [`map`] and [`Mapper`] turn a scalar of a caller [`Domain`] into
//!   a color by linear interpolation in a table.
//!
//! ```
//! use color_maps::{resolve, map, Domain};
//! let inferno = resolve("inferno")?;
//! let c = map(0.25, inferno, Domain::new(0., 1.))?;
//! assert_ne!(c, inferno.first());
//! # Ok::<(), color_maps::Error>(())
//! ```
//!
//! Tables are built the first time their palette is requested and
//! then shared, as `&'static ColorTable`, by every caller.

use std::{fmt, ops::{Deref, RangeInclusive}, str::FromStr};
use rgb::{RGB8, RGB16, RGBA, RGBA8, RGBA16};

mod error;
mod palettes;
pub use error::{Error, Result};
pub use palettes::ty::ColorTable;

/// Number of colors of every palette of the catalog.
pub const RESOLUTION: usize = 256;

/// The palettes of the catalog, in catalog order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Colormap {
    /// Matplotlib "afmhot": black, red, orange, yellow to white.
    Afmhot,
    /// Matplotlib "gist_earth": dark blue through green and brown
    /// to white.
    GistEarth,
    /// Matplotlib inferno color scheme.
    Inferno,
    /// Matplotlib "terrain": blue, green, brown to white.
    Terrain,
    /// Matplotlib viridis color scheme.
    Viridis,
}

impl Colormap {
    /// All palettes, in the order [`names`] lists them.
    pub const ALL: [Colormap; 5] = [Colormap::Afmhot, Colormap::GistEarth,
                                    Colormap::Inferno, Colormap::Terrain,
                                    Colormap::Viridis];

    /// Name of the palette in the catalog.
    pub fn name(self) -> &'static str {
        match self {
            Colormap::Afmhot => "afmhot",
            Colormap::GistEarth => "gist_earth",
            Colormap::Inferno => "inferno",
            Colormap::Terrain => "terrain",
            Colormap::Viridis => "viridis",
        }
    }

    /// The colors of the palette.  The first call builds the table,
    /// later ones (from any thread) return the same one.
    pub fn table(self) -> &'static ColorTable {
        match self {
            Colormap::Afmhot => palettes::AFMHOT.deref(),
            Colormap::GistEarth => palettes::GIST_EARTH.deref(),
            Colormap::Inferno => palettes::INFERNO.deref(),
            Colormap::Terrain => palettes::TERRAIN.deref(),
            Colormap::Viridis => palettes::VIRIDIS.deref(),
        }
    }

    /// Return a [`Mapper`] from `domain` to this palette.
    ///
    /// # Example
    ///
    /// ```
    /// use color_maps::{Colormap, Domain};
    /// let m = Colormap::Viridis.mapper(Domain::new(-1., 1.))?;
    /// assert_eq!(m.map(-1.)?, Colormap::Viridis.table().first());
    /// # Ok::<(), color_maps::Error>(())
    /// ```
    pub fn mapper(self, domain: Domain) -> Result<Mapper<'static>> {
        Mapper::new(self.table(), domain)
    }
}

impl fmt::Display for Colormap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Colormap {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Colormap::ALL.into_iter().find(|c| c.name() == s)
            .ok_or_else(|| Error::UnknownPalette(s.to_string()))
    }
}

/// Return the table of the palette called `name`.
///
/// # Example
///
/// ```
/// let t = color_maps::resolve("terrain")?;
/// assert_eq!(t.len(), color_maps::RESOLUTION);
/// assert!(color_maps::resolve("jet").is_err());
/// # Ok::<(), color_maps::Error>(())
/// ```
pub fn resolve(name: &str) -> Result<&'static ColorTable> {
    Ok(name.parse::<Colormap>()?.table())
}

/// Names of all palettes of the catalog, in a fixed order.  Listing
/// them does not build any table.
pub fn names() -> impl ExactSizeIterator<Item = &'static str>
    + DoubleEndedIterator {
    Colormap::ALL.into_iter().map(Colormap::name)
}


/// The range of values `min ..= max` spread over a palette.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Domain {
    /// Create a domain.  It is checked when a mapping uses it, see
    /// [`Domain::validate`].
    pub const fn new(min: f64, max: f64) -> Self { Domain { min, max } }

    /// Check that both bounds are finite and `min <= max`.  An empty
    /// domain (`min == max`) is valid.
    pub fn validate(&self) -> Result<()> {
        if self.min.is_finite() && self.max.is_finite()
            && self.min <= self.max {
            Ok(())
        } else {
            Err(Error::InvalidDomain { min: self.min, max: self.max })
        }
    }

    /// Whether `min == max`.
    pub fn is_degenerate(&self) -> bool { self.min == self.max }

    /// Position of `value` in the domain, `0.` at `min` and `1.` at
    /// `max` (not clamped).  `min` and `max` must be finite and
    /// distinct.
    fn normalize(&self, value: f64) -> f64 {
        let Domain { min, max } = *self;
        let width = max - min;
        if width.is_finite() {
            (value - min) / width
        } else {
            // `max - min` overflows for bounds of opposite signs.
            (0.5 * value - 0.5 * min) / (0.5 * max - 0.5 * min)
        }
    }
}

impl From<(f64, f64)> for Domain {
    fn from((min, max): (f64, f64)) -> Self { Domain { min, max } }
}

impl From<RangeInclusive<f64>> for Domain {
    fn from(r: RangeInclusive<f64>) -> Self {
        let (min, max) = r.into_inner();
        Domain { min, max }
    }
}


/// Specifies the pixel types a mapped color can be delivered as.
pub trait RGBColor: Sized {
    /// Convert a color with 8-bit channels.
    fn from_rgb8(c: RGB8) -> Self;
}

impl RGBColor for RGB8 {
    #[inline]
    fn from_rgb8(c: RGB8) -> Self { c }
}

impl RGBColor for RGBA8 {
    #[inline]
    fn from_rgb8(c: RGB8) -> Self { RGBA8 { r: c.r, g: c.g, b: c.b, a: 255 } }
}

impl RGBColor for RGB16 {
    #[inline]
    fn from_rgb8(c: RGB8) -> Self {
        RGB16 { r: 257 * c.r as u16, g: 257 * c.g as u16,
                b: 257 * c.b as u16 }
    }
}

impl RGBColor for RGBA16 {
    #[inline]
    fn from_rgb8(c: RGB8) -> Self {
        RGBA16 { r: 257 * c.r as u16, g: 257 * c.g as u16,
                 b: 257 * c.b as u16, a: u16::MAX }
    }
}

/// Components in \[0, 255\], like the 8-bit color.
impl RGBColor for RGBA<f64> {
    #[inline]
    fn from_rgb8(c: RGB8) -> Self {
        RGBA { r: c.r as f64, g: c.g as f64, b: c.b as f64, a: 255. }
    }
}


/// Return the color of `value` when `domain` is spread over `table`.
///
/// `value` is clamped to the domain, so values below `domain.min`
/// get the first color and values above `domain.max` the last one.
/// In between, the channels are interpolated linearly between the
/// two nearest colors of the table and rounded.  If `domain.min ==
/// domain.max`, the first color of the table is returned.
///
/// Fails if the domain is reversed or not finite, if `table` is
/// empty or if `value` is not finite.
///
/// # Example
///
/// ```
/// use rgb::RGB8;
/// use color_maps::{map, Domain};
/// let table = [RGB8::new(0, 0, 0), RGB8::new(100, 100, 100),
///              RGB8::new(200, 200, 200)];
/// let c = map(2.5, &table, Domain::new(0., 10.))?;
/// assert_eq!(c, RGB8::new(50, 50, 50));
/// # Ok::<(), color_maps::Error>(())
/// ```
pub fn map<T>(value: f64, table: &T, domain: Domain) -> Result<RGB8>
where T: AsRef<[RGB8]> + ?Sized {
    Mapper::new(table, domain)?.map(value)
}

/// Maps values of a [`Domain`] to the colors of a table.
///
/// The domain and table are checked once by [`Mapper::new`], which
/// makes it the right tool to color a whole field of values.
#[derive(Clone, Copy, Debug)]
pub struct Mapper<'a> {
    table: &'a [RGB8], // Invariant: not empty
    domain: Domain,    // Invariant: valid
}

impl<'a> Mapper<'a> {
    /// Create a mapper from `domain` to the colors of `table`.
    pub fn new<T>(table: &'a T, domain: Domain) -> Result<Self>
    where T: AsRef<[RGB8]> + ?Sized {
        domain.validate()?;
        let table = table.as_ref();
        if table.is_empty() { return Err(Error::EmptyTable) }
        Ok(Mapper { table, domain })
    }

    pub fn table(&self) -> &'a [RGB8] { self.table }

    pub fn domain(&self) -> Domain { self.domain }

    /// Return the real index in the table at which `value` is read:
    /// `0.` at (or below) `domain.min`, `table.len() - 1` at (or
    /// above) `domain.max`.
    pub fn position(&self, value: f64) -> Result<f64> {
        if !value.is_finite() { return Err(Error::InvalidValue(value)) }
        Ok(self.locate(value))
    }

    /// Same as [`Mapper::position`] but assumes `value` is finite.
    #[inline]
    fn locate(&self, value: f64) -> f64 {
        if self.domain.is_degenerate() { return 0. }
        let t = self.domain.normalize(value).clamp(0., 1.);
        t * (self.table.len() - 1) as f64
    }

    /// Return the color of `value`.  See [`map`].
    pub fn map(&self, value: f64) -> Result<RGB8> {
        let p = self.position(value)?;
        Ok(interpolate(self.table, p))
    }

    /// Return the color of `value` as another pixel type.
    ///
    /// ```
    /// use rgb::RGBA8;
    /// use color_maps::{Colormap, Domain};
    /// let m = Colormap::Afmhot.mapper(Domain::new(0., 1.))?;
    /// let c: RGBA8 = m.map_as(1.)?;
    /// assert_eq!(c, RGBA8::new(255, 255, 255, 255));
    /// # Ok::<(), color_maps::Error>(())
    /// ```
    pub fn map_as<Color: RGBColor>(&self, value: f64) -> Result<Color> {
        self.map(value).map(Color::from_rgb8)
    }

    /// Return the colors of all `values`, or the first error.
    pub fn map_slice(&self, values: &[f64]) -> Result<Vec<RGB8>> {
        values.iter().map(|&v| self.map(v)).collect()
    }

    /// Write the colors of `values` into `pixels` and return the
    /// number of pixels written, the smaller of both lengths.  On
    /// error, `pixels` is left untouched.
    pub fn fill<Color>(&self, values: &[f64], pixels: &mut [Color])
                       -> Result<usize>
    where Color: RGBColor {
        if let Some(&v) = values.iter().find(|v| !v.is_finite()) {
            return Err(Error::InvalidValue(v))
        }
        let mut n = 0;
        for (px, &v) in pixels.iter_mut().zip(values) {
            *px = Color::from_rgb8(interpolate(self.table, self.locate(v)));
            n += 1;
        }
        Ok(n)
    }

    /// Append the colors of `values` to `bytes` as packed `r, g, b`
    /// triplets (the layout of an RGB8 image buffer).  On error,
    /// `bytes` is left untouched.
    pub fn extend_bytes(&self, values: &[f64], bytes: &mut Vec<u8>)
                        -> Result<()> {
        let colors = self.map_slice(values)?;
        bytes.reserve(3 * colors.len());
        for c in colors {
            bytes.extend_from_slice(&[c.r, c.g, c.b]);
        }
        Ok(())
    }

    /// Return an iterator yielding `n` evenly spaced values from
    /// `domain.min` to `domain.max` (both included when `n >= 2`)
    /// together with their colors, e.g. to draw a colorbar.
    ///
    /// ```
    /// use color_maps::{Colormap, Domain};
    /// let m = Colormap::Inferno.mapper(Domain::new(0., 100.))?;
    /// let bar: Vec<_> = m.range(5).collect();
    /// assert_eq!(bar[2].0, 50.);
    /// assert_eq!(bar[4].1, Colormap::Inferno.table().last());
    /// # Ok::<(), color_maps::Error>(())
    /// ```
    pub fn range(self, n: usize) -> Samples<'a> {
        if n == 0 {
            Samples { mapper: self, last: 0, i: 1, j: 0 } // Empty
        } else {
            Samples { mapper: self, last: n - 1, i: 0, j: n - 1 }
        }
    }
}

/// Read the color at real position `p` ∈ \[0, len - 1\] of `table`.
fn interpolate(table: &[RGB8], p: f64) -> RGB8 {
    let last = table.len() - 1;
    let i0 = (p.floor() as usize).min(last);
    let i1 = (i0 + 1).min(last);
    let frac = p - i0 as f64;
    let (c0, c1) = (table[i0], table[i1]);
    RGB8 { r: lerp(c0.r, c1.r, frac),
           g: lerp(c0.g, c1.g, frac),
           b: lerp(c0.b, c1.b, frac) }
}

#[inline]
fn lerp(a: u8, b: u8, t: f64) -> u8 {
    let x = a as f64 + t * (b as f64 - a as f64);
    x.round().clamp(0., 255.) as u8
}


/// An iterator yielding values of a domain together with their
/// colors.
///
/// Created by [`Mapper::range`].
#[derive(Clone, Debug)]
pub struct Samples<'a> {
    mapper: Mapper<'a>,
    last: usize,
    i: usize, // first position to be consumed
    j: usize, // last position to be consumed (empty if i > j)
}

impl<'a> Samples<'a> {
    /// Return the value and color of the position `k ∈ 0 ..= last`.
    fn sample(&self, k: usize) -> (f64, RGB8) {
        let Domain { min, max } = self.mapper.domain;
        let x = if k == 0 {
            min
        } else if k == self.last {
            max
        } else {
            let t = k as f64 / self.last as f64;
            let x = min + t * (max - min);
            if x.is_finite() { x } else { (1. - t) * min + t * max }
        };
        (x, interpolate(self.mapper.table, self.mapper.locate(x)))
    }
}

impl<'a> Iterator for Samples<'a> {
    type Item = (f64, RGB8);

    fn next(&mut self) -> Option<Self::Item> {
        if self.i > self.j { return None }
        let item = self.sample(self.i);
        self.i += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = (self.j + 1).saturating_sub(self.i);
        (len, Some(len))
    }
}

impl<'a> ExactSizeIterator for Samples<'a> {}

impl<'a> DoubleEndedIterator for Samples<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.i > self.j { return None }
        let item = self.sample(self.j);
        if self.j == 0 { self.i = 1 } else { self.j -= 1 }
        Some(item)
    }
}



#[cfg(test)]
mod tests {
    use super::*;

    const GRAYS: [RGB8; 3] = [RGB8 { r: 0, g: 0, b: 0 },
                              RGB8 { r: 100, g: 100, b: 100 },
                              RGB8 { r: 200, g: 200, b: 200 }];

    #[test]
    fn catalog_tables() {
        for name in names() {
            let t = resolve(name).unwrap();
            assert_eq!(t.len(), RESOLUTION);
            assert_eq!(t.colors().len(), RESOLUTION);
            assert_eq!(t.name(), name);
        }
        assert_eq!(names().len(), Colormap::ALL.len());
    }

    #[test]
    fn names_order() {
        let n: Vec<_> = names().collect();
        assert_eq!(n, ["afmhot", "gist_earth", "inferno", "terrain",
                       "viridis"]);
        for c in Colormap::ALL {
            assert_eq!(c.to_string().parse::<Colormap>(), Ok(c));
        }
    }

    #[test]
    fn known_colors() {
        let inferno = Colormap::Inferno.table();
        assert_eq!(inferno.first(), RGB8::new(0, 0, 3));
        assert_eq!(inferno.last(), RGB8::new(252, 254, 164));
        let viridis = resolve("viridis").unwrap();
        assert_eq!(viridis.first(), RGB8::new(68, 1, 84));
        assert_eq!(viridis.last(), RGB8::new(253, 231, 36));
        assert_eq!(Colormap::Terrain.table().get(0),
                   Some(RGB8::new(51, 51, 153)));
        assert_eq!(Colormap::Terrain.table().get(RESOLUTION), None);
    }

    #[test]
    fn resolve_is_shared() {
        let t0 = resolve("gist_earth").unwrap();
        for _ in 0 .. 10 {
            let t = resolve("gist_earth").unwrap();
            assert!(std::ptr::eq(t0, t));
        }
        assert!(std::ptr::eq(t0, Colormap::GistEarth.table()));
    }

    #[test]
    fn resolve_concurrently() {
        let addrs: Vec<usize> = std::thread::scope(|s| {
            let handles: Vec<_> = (0 .. 8).map(|_| s.spawn(|| {
                resolve("afmhot").unwrap() as *const ColorTable as usize
            })).collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert!(addrs.iter().all(|&a| a == addrs[0]));
        assert_eq!(addrs[0],
                   Colormap::Afmhot.table() as *const ColorTable as usize);
    }

    #[test]
    fn unknown_palette() {
        assert_eq!(resolve("not_a_real_palette"),
                   Err(Error::UnknownPalette("not_a_real_palette".into())));
        assert!("Inferno".parse::<Colormap>().is_err());
    }

    #[test]
    fn midpoint_on_entry() {
        let c = map(5., &GRAYS, Domain::new(0., 10.)).unwrap();
        assert_eq!(c, RGB8::new(100, 100, 100));
    }

    #[test]
    fn interpolation_rounds() {
        let d = Domain::new(0., 10.);
        assert_eq!(map(2.5, &GRAYS, d), Ok(RGB8::new(50, 50, 50)));
        // p = 0.003, 100 * 0.003 = 0.3
        assert_eq!(map(0.015, &GRAYS, d), Ok(RGB8::new(0, 0, 0)));
        // p = 0.007, 100 * 0.007 = 0.7
        assert_eq!(map(0.035, &GRAYS, d), Ok(RGB8::new(1, 1, 1)));
        let two = [RGB8::new(255, 0, 10), RGB8::new(0, 255, 20)];
        assert_eq!(map(0.5, &two, Domain::new(0., 1.)),
                   Ok(RGB8::new(128, 128, 15)));
    }

    #[test]
    fn bounds_are_exact() {
        for c in Colormap::ALL {
            let t = c.table();
            for d in [Domain::new(0., 1.), Domain::new(-3.7, 12.1),
                      Domain::new(-1e300, 1e300), Domain::new(1e-9, 2e-9)] {
                assert_eq!(map(d.min, t, d), Ok(t.first()), "{c} {d:?}");
                assert_eq!(map(d.max, t, d), Ok(t.last()), "{c} {d:?}");
            }
        }
    }

    #[test]
    fn clamp_out_of_range() {
        let t = Colormap::Viridis.table();
        let d = Domain::new(-2., 5.);
        assert_eq!(map(d.min - 1000., t, d), map(d.min, t, d));
        assert_eq!(map(d.max + 1000., t, d), map(d.max, t, d));
        assert_eq!(map(f64::MAX, t, d), Ok(t.last()));
        assert_eq!(map(f64::MIN, t, d), Ok(t.first()));
    }

    #[test]
    fn degenerate_domain() {
        let t = Colormap::Terrain.table();
        let d = Domain::new(3., 3.);
        assert!(d.is_degenerate());
        for v in [-1e10, 0., 3., 3.5, 1e10] {
            assert_eq!(map(v, t, d), Ok(t.first()));
            assert_eq!(map(v, &GRAYS, d), Ok(GRAYS[0]));
        }
    }

    #[test]
    fn monotonic_position() {
        let m = Mapper::new(Colormap::Inferno.table(),
                            Domain::new(-1., 1.)).unwrap();
        let mut prev = f64::NEG_INFINITY;
        for i in 0 ..= 1000 {
            let v = -1.5 + 3. * i as f64 / 1000.;
            let p = m.position(v).unwrap();
            assert!(p >= prev, "{p} < {prev} at {v}");
            assert!((0. ..= (RESOLUTION - 1) as f64).contains(&p));
            prev = p;
        }
        assert_eq!(prev, (RESOLUTION - 1) as f64);
    }

    #[test]
    fn invalid_inputs() {
        let t = Colormap::Inferno.table();
        assert_eq!(map(5., t, Domain::new(10., 0.)),
                   Err(Error::InvalidDomain { min: 10., max: 0. }));
        assert!(matches!(map(0., t, Domain::new(f64::NAN, 1.)),
                         Err(Error::InvalidDomain { .. })));
        assert!(matches!(map(0., t, Domain::new(0., f64::INFINITY)),
                         Err(Error::InvalidDomain { .. })));
        assert!(matches!(map(f64::NAN, t, Domain::new(0., 1.)),
                         Err(Error::InvalidValue(_))));
        assert_eq!(map(f64::INFINITY, t, Domain::new(0., 1.)),
                   Err(Error::InvalidValue(f64::INFINITY)));
        let empty: [RGB8; 0] = [];
        assert_eq!(map(0., &empty, Domain::new(0., 1.)),
                   Err(Error::EmptyTable));
    }

    #[test]
    fn single_color_table() {
        let one = [RGB8::new(1, 2, 3)];
        for v in [0., 0.5, 1.] {
            assert_eq!(map(v, &one, Domain::new(0., 1.)), Ok(one[0]));
        }
    }

    #[test]
    fn domain_conversions() {
        assert_eq!(Domain::from((1., 2.)), Domain::new(1., 2.));
        assert_eq!(Domain::from(1. ..= 2.), Domain::new(1., 2.));
        assert!(Domain::new(2., 2.).validate().is_ok());
        assert!(Domain::new(2., 1.).validate().is_err());
    }

    #[test]
    fn batch_mapping() {
        let m = Mapper::new(&GRAYS, Domain::new(0., 1.)).unwrap();
        let values = [0., 0.25, 0.5, 2.];
        assert_eq!(m.map_slice(&values).unwrap(),
                   [RGB8::new(0, 0, 0), RGB8::new(50, 50, 50),
                    RGB8::new(100, 100, 100), RGB8::new(200, 200, 200)]);

        let mut px = [RGBA8::default(); 3];
        assert_eq!(m.fill(&values, &mut px), Ok(3));
        assert_eq!(px[1], RGBA8::new(50, 50, 50, 255));

        let mut bytes = vec![7];
        m.extend_bytes(&values[.. 2], &mut bytes).unwrap();
        assert_eq!(bytes, [7, 0, 0, 0, 50, 50, 50]);
    }

    #[test]
    fn batch_errors_leave_output() {
        let m = Mapper::new(&GRAYS, Domain::new(0., 1.)).unwrap();
        let values = [0.5, f64::NAN];
        let mut px = [RGB8::default(); 2];
        assert!(m.fill(&values, &mut px).is_err());
        assert_eq!(px, [RGB8::default(); 2]);
        let mut bytes = vec![];
        assert!(m.extend_bytes(&values, &mut bytes).is_err());
        assert!(bytes.is_empty());
        assert!(m.map_slice(&values).is_err());
    }

    #[test]
    fn pixel_types() {
        let c = RGB8::new(255, 128, 0);
        assert_eq!(RGB16::from_rgb8(c), RGB16::new(65535, 32896, 0));
        assert_eq!(RGBA16::from_rgb8(c).a, u16::MAX);
        assert_eq!(RGBA::<f64>::from_rgb8(c).g, 128.);
    }

    #[test]
    fn range_samples() {
        let m = Colormap::Afmhot.mapper(Domain::new(0., 1.)).unwrap();
        for (i, (x, c)) in m.range(11).enumerate() {
            assert!((x - 0.1 * i as f64).abs() <= 1e-15,
                    "{} ≉ {}", x, 0.1 * i as f64);
            assert_eq!(m.map(x), Ok(c));
        }
        assert_eq!(m.range(11).len(), 11);
        assert_eq!(m.range(0).next(), None);
        assert_eq!(m.range(1).collect::<Vec<_>>(),
                   [(0., Colormap::Afmhot.table().first())]);
        let fwd: Vec<_> = m.range(7).collect();
        let mut bwd: Vec<_> = m.range(7).rev().collect();
        bwd.reverse();
        assert_eq!(fwd, bwd);
    }

    #[test]
    fn range_huge_domain() {
        let m = Mapper::new(&GRAYS, Domain::new(-f64::MAX, f64::MAX))
            .unwrap();
        let s: Vec<_> = m.range(3).collect();
        assert_eq!(s[1], (0., GRAYS[1]));
        assert_eq!(s[2], (f64::MAX, GRAYS[2]));
    }
}
