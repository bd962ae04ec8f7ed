//! Producing the PDF file for a filled checklist.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::info;

use crate::checklist::Checklist;
use crate::config::Config;
use crate::dates::format_iso;
use crate::error::{Error, Result};
use crate::layout::{lay_out, LayoutOptions};
use crate::render::{render, RenderOptions};
use crate::signature::Signatures;

/// File name for a unit's checklist on a given day.
#[must_use]
pub fn file_name(unit: &str, date: NaiveDate) -> String {
    format!("checklist_unidad_{unit}_{}.pdf", format_iso(date))
}

/// Lay out and render a checklist to PDF bytes.
///
/// # Errors
///
/// Returns an error if rendering fails.
pub fn generate(checklist: &Checklist, signatures: &Signatures, config: &Config) -> Result<Vec<u8>> {
    let document = lay_out(checklist, signatures, &LayoutOptions::from_config(config));
    let options = RenderOptions {
        title: config.document.title.clone(),
        created: checklist.date,
        compress: config.document.compress,
    };
    render(&document, signatures, &options)
}

/// Write PDF bytes into `dir` under `name`, creating the directory if needed.
///
/// Returns the path of the written file.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file cannot
/// be written.
pub fn write(bytes: &[u8], dir: &Path, name: &str) -> Result<PathBuf> {
    if !dir.exists() {
        std::fs::create_dir_all(dir).map_err(|source| Error::DirectoryCreate {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let path = dir.join(name);
    std::fs::write(&path, bytes)?;
    info!("Wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(path)
}

/// Generate a checklist PDF and write it to the configured output directory.
///
/// # Errors
///
/// Returns an error if rendering or writing fails.
pub fn export(
    checklist: &Checklist,
    signatures: &Signatures,
    config: &Config,
    dir: Option<&Path>,
) -> Result<PathBuf> {
    let bytes = generate(checklist, signatures, config)?;
    let dir = dir.map_or_else(|| config.output_dir(), Path::to_path_buf);
    write(&bytes, &dir, &file_name(&checklist.unit, checklist.date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signature::{png_fixture, Signature};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    #[test]
    fn test_file_name() {
        assert_eq!(
            file_name("03", date()),
            "checklist_unidad_03_2026-10-18.pdf"
        );
    }

    #[test]
    fn test_generate_produces_pdf() {
        let checklist = Checklist::new("01", date());
        let bytes = generate(&checklist, &Signatures::default(), &Config::default()).unwrap();

        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn test_generate_with_signatures() {
        let mut checklist = Checklist::new("07", date());
        checklist.item_mut("A.1.1.1").unwrap().set_yes(true);
        let signatures = Signatures {
            responsible: Some(Signature::from_png(&png_fixture(40, 20, [0, 0, 0, 255])).unwrap()),
            coordinator: Some(Signature::from_png(&png_fixture(40, 20, [0, 0, 255, 90])).unwrap()),
        };

        let bytes = generate(&checklist, &signatures, &Config::default()).unwrap();
        assert!(bytes.windows(4).any(|w| w == b"/Im2"));
    }

    #[test]
    fn test_write_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("salida").join("pdf");

        let path = write(b"%PDF-1.7", &nested, "a.pdf").unwrap();
        assert_eq!(path, nested.join("a.pdf"));
        assert_eq!(std::fs::read(&path).unwrap(), b"%PDF-1.7");
    }

    #[test]
    fn test_write_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        write(b"old", dir.path(), "a.pdf").unwrap();
        let path = write(b"new", dir.path(), "a.pdf").unwrap();

        assert_eq!(std::fs::read(path).unwrap(), b"new");
    }

    #[test]
    fn test_write_directory_blocked_by_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, b"x").unwrap();

        let result = write(b"%PDF", &blocker.join("sub"), "a.pdf");
        assert!(matches!(result, Err(Error::DirectoryCreate { .. })));
    }

    #[test]
    fn test_export_uses_override_dir() {
        let dir = tempfile::tempdir().unwrap();
        let checklist = Checklist::new("11", date());

        let path = export(
            &checklist,
            &Signatures::default(),
            &Config::default(),
            Some(dir.path()),
        )
        .unwrap();

        assert_eq!(path, dir.path().join("checklist_unidad_11_2026-10-18.pdf"));
        assert!(path.exists());
    }
}
