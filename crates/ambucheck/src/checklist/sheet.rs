//! Answer sheets: a filled checklist stored as TOML or JSON.
//!
//! A sheet only lists the rows the operator touched. Applying it to a blank
//! [`Checklist`] reproduces the form state at submit time.
//!
//! ```toml
//! unit = "03"
//! date = "2026-10-18"
//!
//! [[items]]
//! code = "A.2.1"
//! answer = "yes"
//! quantity = "2 piezas"
//! expiry = "2029-07-03"
//! ```

use std::path::Path;

use chrono::NaiveDate;
use figment::{
    providers::{Format, Json, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Answer, Checklist, CATALOG};
use crate::config::Config;
use crate::dates;
use crate::error::{Error, Result};

/// A filled checklist as written by the operator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnswerSheet {
    /// Ambulance unit; the configured default when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Day the checklist was filled (`YYYY-MM-DD`); today when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Answered rows.
    pub items: Vec<SheetEntry>,
}

/// One answered row in a sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetEntry {
    /// Catalog code.
    pub code: String,
    /// Informational copy of the label; ignored when loading.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Yes / no answer.
    pub answer: Answer,
    /// Free-text quantity.
    pub quantity: String,
    /// Expiry date (`YYYY-MM-DD`); empty means none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry: Option<String>,
}

/// On-disk format of an answer sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SheetFormat {
    /// TOML document.
    #[default]
    Toml,
    /// JSON document.
    Json,
}

impl SheetFormat {
    /// Pick the format from a file extension; anything but `.json` is TOML.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

impl AnswerSheet {
    /// Load a sheet from a file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SheetLoad`] if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::sheet_load(path, e.to_string()))?;

        debug!("Parsing answer sheet {}", path.display());
        Self::parse(&contents, SheetFormat::from_path(path))
            .map_err(|e| Error::sheet_load(path, e.to_string()))
    }

    /// Parse a sheet from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed.
    pub fn parse(contents: &str, format: SheetFormat) -> Result<Self> {
        let figment = match format {
            SheetFormat::Toml => Figment::from(Toml::string(contents)),
            SheetFormat::Json => Figment::from(Json::string(contents)),
        };
        Ok(figment.extract()?)
    }

    /// A blank sheet listing every catalog row.
    #[must_use]
    pub fn template(unit: &str) -> Self {
        Self {
            unit: Some(unit.to_string()),
            date: None,
            items: CATALOG
                .iter()
                .map(|(code, label)| SheetEntry {
                    code: (*code).to_string(),
                    label: Some((*label).to_string()),
                    ..SheetEntry::default()
                })
                .collect(),
        }
    }

    /// Serialize the sheet.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_text(&self, format: SheetFormat) -> Result<String> {
        match format {
            SheetFormat::Toml => Ok(toml::to_string_pretty(self)?),
            SheetFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }

    /// Apply the sheet's rows onto a checklist.
    ///
    /// Later entries for the same code override earlier ones. Every entry is
    /// checked before any row changes, so on error the checklist is left
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownItem`] for codes outside the checklist and
    /// [`Error::InvalidDate`] for malformed expiry dates.
    pub fn apply(&self, checklist: &mut Checklist) -> Result<()> {
        let resolved = self
            .items
            .iter()
            .map(|entry| {
                let index = checklist
                    .items
                    .iter()
                    .position(|item| item.code == entry.code)
                    .ok_or_else(|| Error::unknown_item(&entry.code))?;
                let expiry = parse_optional_date(entry.expiry.as_deref())?;
                Ok((index, entry, expiry))
            })
            .collect::<Result<Vec<_>>>()?;

        for (index, entry, expiry) in resolved {
            let item = &mut checklist.items[index];
            item.answer = entry.answer;
            item.set_quantity(entry.quantity.as_str());
            item.set_expiry(expiry);
        }
        Ok(())
    }

    /// Build the checklist this sheet describes.
    ///
    /// `unit` and `date` override the values stored in the sheet.
    ///
    /// # Errors
    ///
    /// Returns an error if the unit is not selectable, a date is malformed,
    /// or an entry names an unknown code.
    pub fn to_checklist(
        &self,
        config: &Config,
        unit: Option<&str>,
        date: Option<NaiveDate>,
    ) -> Result<Checklist> {
        let unit = config.resolve_unit(unit.or(self.unit.as_deref()))?;
        let date = match date {
            Some(date) => date,
            None => parse_optional_date(self.date.as_deref())?.unwrap_or_else(dates::today),
        };

        let mut checklist = Checklist::new(unit, date);
        self.apply(&mut checklist)?;
        debug!(
            unit = %checklist.unit,
            answered = checklist.answered_count(),
            filled = checklist.items.iter().filter(|item| item.is_filled()).count(),
            "Answer sheet applied"
        );
        Ok(checklist)
    }
}

fn parse_optional_date(value: Option<&str>) -> Result<Option<NaiveDate>> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => dates::parse_iso(raw).map(Some),
    }
}
