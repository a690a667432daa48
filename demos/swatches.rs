//! Write `swatches.html` showing every palette of the catalog, both
//! its raw table and resampled through a `Mapper` at a few sizes.

use std::{io::{BufWriter, Write},
          fs::File,
          error::Error};
use rgb::RGB8;
use color_maps::{names, resolve, Domain, Mapper};

type Err = Box<dyn Error>;

fn css_string(c: RGB8) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

fn table_of_colors(fh: &mut impl Write, colors: &[RGB8],
                   width: u32, comment: &str) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\"><tr>")?;
    for &c in colors {
        writeln!(fh, "  <td style=\"width: {width}px; height: 30px; \
                      background-color: {}\"></td>",
                 css_string(c))?;
    }
    writeln!(fh, "<td style=\"padding-left: 7px\">{comment}</td>\
                  </tr></table><br/>")?;
    Ok(())
}

/// Sample `n` values of `domain` and draw their colors.
fn samples(fh: &mut impl Write, m: Mapper, n: usize,
           width: u32) -> Result<(), Err> {
    let colors: Vec<_> = m.range(n).map(|(_, c)| c).collect();
    let Domain { min, max } = m.domain();
    table_of_colors(fh, &colors, width,
                    &format!("{n} samples of [{min}, {max}]"))
}

fn main() -> Result<(), Err> {
    let mut fh = BufWriter::new(File::create("swatches.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>color-maps: swatches</title>\n\
                  </head>\n\
                  <body>")?;
    let domain = Domain::new(-1., 1.);
    for name in names() {
        let table = resolve(name)?;
        writeln!(fh, "<h3>{name}</h3>")?;
        table_of_colors(&mut fh, table.colors(), 1,
                        &format!("table ({} colors)", table.len()))?;
        let m = Mapper::new(table, domain)?;
        samples(&mut fh, m, 10, 43)?;
        samples(&mut fh, m, 30, 13)?;
        samples(&mut fh, m, 600, 1)?;
    }
    writeln!(fh, "</body>\n\
                  </html>")?;
    Ok(())
}
