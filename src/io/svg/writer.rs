//! Standalone SVG preview of a converted district set.

use std::{fs::File, io::{BufWriter, Write}, path::Path};

use anyhow::{Context, Result};

use crate::district::{DistrictRecord, Districts};
use crate::geom::{Bounds, Canvas};

pub(crate) struct SvgWriter<W: Write> {
    writer: W,
}

/// Implement std::io::Write so `write!` / `writeln!` work.
impl<W: Write> Write for SvgWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> { self.writer.write(buf) }

    fn flush(&mut self) -> std::io::Result<()> { self.writer.flush() }

    fn write_all(&mut self, buf: &[u8]) -> std::io::Result<()> { self.writer.write_all(buf) }
}

impl SvgWriter<BufWriter<File>> {
    /// Create a new SVG writer to a file path
    pub(crate) fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("[svg] Failed to create {}", path.display()))?;

        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> SvgWriter<W> {
    pub(crate) fn new(writer: W) -> Self { Self { writer } }

    /// Write the SVG header, including the XML declaration and opening <svg> tag.
    pub(crate) fn write_header(&mut self, canvas: &Canvas, bounds: &Bounds) -> Result<()> {
        let (width, height) = (canvas.width, canvas.height);
        writeln!(self, r##"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"##)?;
        writeln!(self, r##"<svg xmlns="http://www.w3.org/2000/svg"
        width="{width}" height="{height}"
        viewBox="0 0 {width} {height}"
        data-lon-min="{lon_min}" data-lon-max="{lon_max}"
        data-lat-min="{lat_min}" data-lat-max="{lat_max}"
        data-padding="{padding}">"##,
            lon_min = bounds.min_lon,
            lon_max = bounds.max_lon,
            lat_min = bounds.min_lat,
            lat_max = bounds.max_lat,
            padding = canvas.padding,
        )?;
        writeln!(self, r##"<rect width="100%" height="100%" fill="#ffffff"/>"##)?;
        Ok(())
    }

    /// Write SVG styles for district shapes and labels.
    pub(crate) fn write_styles(&mut self) -> Result<()> {
        writeln!(self, r##"<defs>
<style>
    .dist {{ fill: #e5e7eb; stroke: #111827; stroke-width: 0.5; fill-opacity: 0.85; vector-effect: non-scaling-stroke; }}
    .dist.featured {{ fill: #bfdbfe; stroke: #1d4ed8; }}
    .label {{ font: 9px sans-serif; fill: #111827; text-anchor: middle; dominant-baseline: middle; }}
</style>
</defs>"##)?;
        Ok(())
    }

    /// Write one district as a `<path>` element.
    pub(crate) fn write_district(&mut self, district: &DistrictRecord) -> Result<()> {
        let class = if district.is_featured { "dist featured" } else { "dist" };
        writeln!(self, r#"<path id="{}" class="{class}" d="{}"><title>{}</title></path>"#,
            escape(&district.id), district.path_data, escape(&district.name))?;
        Ok(())
    }

    /// Write a district name at its label center.
    pub(crate) fn write_label(&mut self, district: &DistrictRecord) -> Result<()> {
        writeln!(self, r#"<text class="label" x="{}" y="{}">{}</text>"#,
            district.center.x, district.center.y, escape(&district.name))?;
        Ok(())
    }

    /// Write the closing </svg> tag.
    pub(crate) fn write_footer(&mut self) -> Result<()> {
        writeln!(self, "</svg>")?;
        self.flush()?;
        Ok(())
    }
}

/// Render every district (shapes first, labels on top) into one SVG document.
pub fn write_preview<W: Write>(writer: W, districts: &Districts, canvas: &Canvas, bounds: &Bounds) -> Result<()> {
    let mut svg = SvgWriter::new(writer);
    svg.write_header(canvas, bounds)?;
    svg.write_styles()?;
    for district in districts.iter() { svg.write_district(district)? }
    for district in districts.iter() { svg.write_label(district)? }
    svg.write_footer()
}

/// Render the preview SVG to a file.
pub fn write_preview_to_svg_file(path: &Path, districts: &Districts, canvas: &Canvas, bounds: &Bounds) -> Result<()> {
    let writer = SvgWriter::create(path)?;
    write_preview(writer, districts, canvas, bounds)
        .with_context(|| format!("[svg] Failed to write {}", path.display()))
}

/// Escape text for use in XML attributes and character data.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Center;

    fn record(id: &str, name: &str, featured: bool) -> DistrictRecord {
        DistrictRecord {
            id: id.into(),
            name: name.into(),
            path_data: "M10,10 L20,10 L20,20Z".into(),
            center: Center { x: 17, y: 13 },
            is_featured: featured,
            ..DistrictRecord::default()
        }
    }

    #[test]
    fn preview_contains_paths_and_labels() {
        let districts = Districts::new(vec![record("colombo", "Colombo", true), record("galle", "Galle & Co", false)]);
        let mut out = Vec::new();
        let canvas = Canvas::default();
        write_preview(&mut out, &districts, &canvas, &Bounds::new(79.5, 82.0, 5.9, 9.9)).unwrap();
        let svg = String::from_utf8(out).unwrap();

        assert!(svg.starts_with("<?xml"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains(r#"<path id="colombo" class="dist featured" d="M10,10 L20,10 L20,20Z">"#));
        assert!(svg.contains(r#"class="dist" d="#));
        assert!(svg.contains(r#"<text class="label" x="17" y="13">Galle &amp; Co</text>"#));
    }
}
