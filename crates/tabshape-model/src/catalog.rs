//! Field catalog: the mutable record of which columns survive projection.
//!
//! The catalog keeps one ordered selection entry per distinct field name
//! (originals first in file column order, customs after in insertion order)
//! plus the custom-field definitions themselves. Selection order is the
//! export column order. All mutations are all-or-nothing: a rejected
//! mutation leaves the catalog exactly as it was.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::fields::{CustomField, FieldKind, FieldSelection};

/// Ordered configuration of original and custom fields for one loaded file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldCatalog {
    file_path: Option<PathBuf>,
    original_headers: Vec<String>,
    selections: Vec<FieldSelection>,
    custom_fields: Vec<CustomField>,
}

impl FieldCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all ORIGINAL selections with fresh, selected entries in
    /// header order. CUSTOM selections and their state survive untouched.
    ///
    /// Called once per successful load; calling it again with the same
    /// headers is a no-op for custom fields (idempotent).
    pub fn rebuild_from_headers(&mut self, headers: &[String]) {
        self.original_headers = headers.to_vec();
        let customs: Vec<FieldSelection> = self
            .selections
            .drain(..)
            .filter(FieldSelection::is_custom)
            .collect();
        self.selections = headers
            .iter()
            .map(|header| FieldSelection::original(header.clone(), true))
            .collect();
        self.selections.extend(customs);
    }

    /// Toggle inclusion for an existing entry. Returns false and changes
    /// nothing if the name is unknown. Name match is case-sensitive.
    pub fn set_selected(&mut self, name: &str, selected: bool) -> bool {
        match self.selections.iter_mut().find(|s| s.name() == name) {
            Some(selection) => {
                selection.selected = selected;
                true
            }
            None => false,
        }
    }

    /// Append a custom field and its selection entry.
    ///
    /// Fails without mutating anything if the name is empty or collides
    /// with an original header or another custom field.
    pub fn add_custom_field(
        &mut self,
        field: CustomField,
        selected: bool,
    ) -> Result<(), CatalogError> {
        if field.name.trim().is_empty() {
            return Err(CatalogError::EmptyName);
        }
        if self.contains_name(&field.name) {
            return Err(CatalogError::NameCollision { name: field.name });
        }
        self.selections
            .push(FieldSelection::custom(field.name.clone(), selected));
        self.custom_fields.push(field);
        Ok(())
    }

    /// Remove a custom field and its selection entry atomically.
    /// Removing an unknown name is a no-op returning false.
    pub fn remove_custom_field(&mut self, name: &str) -> bool {
        if !self.custom_fields.iter().any(|f| f.name == name) {
            return false;
        }
        self.custom_fields.retain(|f| f.name != name);
        self.selections
            .retain(|s| !(s.is_custom() && s.name() == name));
        true
    }

    /// True when `name` is taken by an original header or a custom field.
    pub fn contains_name(&self, name: &str) -> bool {
        self.original_headers.iter().any(|h| h == name)
            || self.custom_fields.iter().any(|f| f.name == name)
    }

    /// Selected original column names, in file column order.
    pub fn selected_original_names(&self) -> Vec<&str> {
        self.selections
            .iter()
            .filter(|s| s.selected && s.is_original())
            .map(FieldSelection::name)
            .collect()
    }

    /// Selected custom fields, in insertion order.
    pub fn selected_custom_fields(&self) -> Vec<&CustomField> {
        self.selections
            .iter()
            .filter(|s| s.selected)
            .filter_map(|s| match &s.kind {
                FieldKind::Custom(key) => self.custom_fields.iter().find(|f| &f.name == key),
                FieldKind::Original(_) => None,
            })
            .collect()
    }

    /// All selected field names: originals first, then customs.
    pub fn selected_names(&self) -> Vec<&str> {
        self.selections
            .iter()
            .filter(|s| s.selected)
            .map(FieldSelection::name)
            .collect()
    }

    /// Reset to the empty, no-file state.
    pub fn clear(&mut self) {
        self.file_path = None;
        self.original_headers.clear();
        self.selections.clear();
        self.custom_fields.clear();
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn set_file_path(&mut self, path: Option<PathBuf>) {
        self.file_path = path;
    }

    pub fn original_headers(&self) -> &[String] {
        &self.original_headers
    }

    pub fn selections(&self) -> &[FieldSelection] {
        &self.selections
    }

    pub fn custom_fields(&self) -> &[CustomField] {
        &self.custom_fields
    }
}
