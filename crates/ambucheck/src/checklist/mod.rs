//! Checklist data model.
//!
//! A [`Checklist`] is the in-memory form: the ambulance unit, the day it was
//! filled, and one [`ChecklistItem`] per catalog row.

pub mod catalog;
pub mod sheet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use catalog::{CatalogEntry, CATALOG};
pub use sheet::{AnswerSheet, SheetEntry};

/// Unit selected when a checklist is reset.
pub const DEFAULT_UNIT: &str = "01";

/// The operator's answer for a row.
///
/// "Yes" and "no" are mutually exclusive, so they share one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Answer {
    /// Neither box is checked.
    #[default]
    Unanswered,
    /// The equipment is present.
    Yes,
    /// The equipment is missing.
    No,
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unanswered => write!(f, "unanswered"),
            Self::Yes => write!(f, "yes"),
            Self::No => write!(f, "no"),
        }
    }
}

/// One row of the checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    /// Catalog code, e.g. `A.2.1`.
    pub code: String,
    /// Printed description.
    pub label: String,
    /// Yes / no answer.
    #[serde(default)]
    pub answer: Answer,
    /// Free-text quantity, e.g. `9 piezas`.
    #[serde(default)]
    pub quantity: String,
    /// Expiry date, if the item has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry: Option<NaiveDate>,
}

impl ChecklistItem {
    /// Create an unanswered row.
    #[must_use]
    pub fn new(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
            answer: Answer::Unanswered,
            quantity: String::new(),
            expiry: None,
        }
    }

    /// Whether the "yes" box is checked.
    #[must_use]
    pub fn is_yes(&self) -> bool {
        self.answer == Answer::Yes
    }

    /// Whether the "no" box is checked.
    #[must_use]
    pub fn is_no(&self) -> bool {
        self.answer == Answer::No
    }

    /// Toggle the "yes" box. Checking it clears "no".
    pub fn set_yes(&mut self, checked: bool) {
        if checked {
            self.answer = Answer::Yes;
        } else if self.answer == Answer::Yes {
            self.answer = Answer::Unanswered;
        }
    }

    /// Toggle the "no" box. Checking it clears "yes".
    pub fn set_no(&mut self, checked: bool) {
        if checked {
            self.answer = Answer::No;
        } else if self.answer == Answer::No {
            self.answer = Answer::Unanswered;
        }
    }

    /// Set the free-text quantity.
    pub fn set_quantity(&mut self, quantity: impl Into<String>) {
        self.quantity = quantity.into();
    }

    /// Set or clear the expiry date.
    pub fn set_expiry(&mut self, expiry: Option<NaiveDate>) {
        self.expiry = expiry;
    }

    /// Whether the operator touched this row at all.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.answer != Answer::Unanswered || !self.quantity.is_empty() || self.expiry.is_some()
    }
}

/// A filled (or blank) checklist for one ambulance on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checklist {
    /// Two-digit ambulance unit.
    pub unit: String,
    /// Day the checklist was filled.
    pub date: NaiveDate,
    /// One row per catalog entry, in catalog order.
    pub items: Vec<ChecklistItem>,
}

/// Answer tallies for a checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Summary {
    /// Total rows.
    pub total: usize,
    /// Rows answered "yes".
    pub yes: usize,
    /// Rows answered "no".
    pub no: usize,
    /// Rows with neither box checked.
    pub unanswered: usize,
}

impl Checklist {
    /// Build a blank checklist from the catalog.
    #[must_use]
    pub fn new(unit: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            unit: unit.into(),
            date,
            items: default_items(),
        }
    }

    /// Restore the default unit and blank rows. The date is kept.
    pub fn reset(&mut self) {
        self.unit = DEFAULT_UNIT.to_string();
        self.items = default_items();
    }

    /// Find a row by code.
    #[must_use]
    pub fn item(&self, code: &str) -> Option<&ChecklistItem> {
        self.items.iter().find(|item| item.code == code)
    }

    /// Find a row by code for editing.
    pub fn item_mut(&mut self, code: &str) -> Option<&mut ChecklistItem> {
        self.items.iter_mut().find(|item| item.code == code)
    }

    /// Tally the answers.
    #[must_use]
    pub fn summary(&self) -> Summary {
        self.items.iter().fold(
            Summary {
                total: self.items.len(),
                ..Summary::default()
            },
            |mut acc, item| {
                match item.answer {
                    Answer::Yes => acc.yes += 1,
                    Answer::No => acc.no += 1,
                    Answer::Unanswered => acc.unanswered += 1,
                }
                acc
            },
        )
    }

    /// Number of rows with a yes or no answer.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        let summary = self.summary();
        summary.yes + summary.no
    }
}

fn default_items() -> Vec<ChecklistItem> {
    CATALOG
        .iter()
        .map(|(code, label)| ChecklistItem::new(*code, *label))
        .collect()
}
