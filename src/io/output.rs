//! Serialized district artifacts: JSON array or TypeScript module.

use std::{fs::File, io::{BufWriter, Write}, path::Path, str::FromStr};

use anyhow::{Context, Result, bail};

use crate::district::Districts;

/// Artifact format written by the converter.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Format {
    /// Pretty-printed JSON array of district records.
    #[default]
    Json,
    /// TypeScript module: typed array literal plus lookup helpers.
    TypeScript,
}

impl Format {
    /// Guess the format from a file extension, defaulting to JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("ts") => Format::TypeScript,
            _ => Format::Json,
        }
    }
}

impl FromStr for Format {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "ts" | "typescript" => Ok(Format::TypeScript),
            other => bail!("[output] unknown format {other:?} (expected json or ts)"),
        }
    }
}

const TS_PRELUDE: &str = "\
// Generated by lankamap from district boundary GeoJSON. Do not edit by hand.

export interface District {
  id: string;
  name: string;
  nameSi: string;
  nameTa: string;
  province: string;
  population: number;
  area: number;
  pathData: string;
  center: { x: number; y: number };
  isFeatured: boolean;
  tags: string[];
}
";

const TS_HELPERS: &str = "
export function getDistrictById(id: string): District | undefined {
  return districts.find((district) => district.id === id);
}

export function getDistrictsByProvince(province: string): District[] {
  return districts.filter((district) => district.province === province);
}

export function getFeaturedDistricts(): District[] {
  return districts.filter((district) => district.isFeatured);
}
";

/// Write `districts` in `format` to any writer.
pub fn write_districts<W: Write>(writer: &mut W, districts: &Districts, format: Format) -> Result<()> {
    match format {
        Format::Json => {
            serde_json::to_writer_pretty(&mut *writer, districts)
                .context("[output] Failed to serialize districts")?;
            writeln!(writer)?;
        }
        Format::TypeScript => {
            let array = serde_json::to_string_pretty(districts)
                .context("[output] Failed to serialize districts")?;
            writeln!(writer, "{TS_PRELUDE}")?;
            writeln!(writer, "export const districts: District[] = {array};")?;
            write!(writer, "{TS_HELPERS}")?;
        }
    }
    Ok(())
}

/// Write `districts` in `format` to `path`, replacing any existing file.
pub fn write_districts_to_file(path: &Path, districts: &Districts, format: Format) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("[output] Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_districts(&mut writer, districts, format)
        .with_context(|| format!("[output] Failed to write {}", path.display()))?;
    writer.flush()
        .with_context(|| format!("[output] Failed to flush {}", path.display()))
}

/// Read back a JSON artifact.
pub fn read_districts_from_json_file(path: &Path) -> Result<Districts> {
    let file = File::open(path)
        .with_context(|| format!("[output] Failed to read {}", path.display()))?;
    serde_json::from_reader(std::io::BufReader::new(file))
        .with_context(|| format!("[output] Failed to parse {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::district::DistrictRecord;
    use crate::geom::Center;

    fn districts() -> Districts {
        Districts::new(vec![DistrictRecord {
            id: "colombo".into(),
            name: "Colombo".into(),
            name_si: "කොළඹ".into(),
            name_ta: "கொழும்பு".into(),
            province: "Western".into(),
            population: 2_324_349,
            area: 699.0,
            path_data: "M1,1 L2,1 L2,2Z".into(),
            center: Center { x: 2, y: 1 },
            is_featured: true,
            tags: vec!["cleaning".into()],
        }])
    }

    #[test]
    fn format_from_path_and_name() {
        assert_eq!(Format::from_path(Path::new("lib/districts.ts")), Format::TypeScript);
        assert_eq!(Format::from_path(Path::new("districts.json")), Format::Json);
        assert_eq!(Format::from_path(Path::new("districts")), Format::Json);
        assert_eq!("TS".parse::<Format>().unwrap(), Format::TypeScript);
        assert!("yaml".parse::<Format>().is_err());
    }

    #[test]
    fn json_is_a_plain_array() {
        let mut out = Vec::new();
        write_districts(&mut out, &districts(), Format::Json).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["nameSi"], "කොළඹ");
        assert_eq!(value[0]["center"]["y"], 1);
    }

    #[test]
    fn typescript_module_has_array_and_helpers() {
        let mut out = Vec::new();
        write_districts(&mut out, &districts(), Format::TypeScript).unwrap();
        let module = String::from_utf8(out).unwrap();
        assert!(module.contains("export interface District {"));
        assert!(module.contains("export const districts: District[] = ["));
        assert!(module.contains(r#""pathData": "M1,1 L2,1 L2,2Z""#));
        assert!(module.contains("export function getDistrictById(id: string)"));
        assert!(module.contains("export function getDistrictsByProvince(province: string)"));
        assert!(module.contains("export function getFeaturedDistricts()"));
    }

    #[test]
    fn output_is_deterministic() {
        let (mut a, mut b) = (Vec::new(), Vec::new());
        write_districts(&mut a, &districts(), Format::TypeScript).unwrap();
        write_districts(&mut b, &districts(), Format::TypeScript).unwrap();
        assert_eq!(a, b);
    }
}
