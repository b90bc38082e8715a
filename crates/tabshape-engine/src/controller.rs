//! Orchestration: one loader, one catalog, and the notification fan-out
//! that keeps any front end in sync with them.
//!
//! Every catalog-mutating call that changes state recomputes the preview,
//! so the published preview can never go stale relative to the catalog.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use tabshape_ingest::{DEFAULT_PREVIEW_ROWS, LoadError, TableInfo, TabularLoader};
use tabshape_model::{
    CatalogError, CustomField, FieldCatalog, FieldSelection, ProcessingResult, ProjectedTable,
};
use tabshape_output::write_projection;

use crate::projection::{Projection, project};

/// Change notifications published to registered observers.
#[derive(Debug, Clone)]
pub enum EngineEvent {
    FileLoaded(PathBuf),
    HeadersUpdated(Vec<String>),
    ConfigurationChanged,
    PreviewUpdated(Option<ProjectedTable>),
    ProcessingCompleted(ProcessingResult),
    Error(String),
}

type Observer = Box<dyn FnMut(&EngineEvent)>;

/// Owns one [`TabularLoader`] and one [`FieldCatalog`] and sequences
/// load → catalog rebuild → projection → preview/export.
///
/// Failures never escape as panics: every error becomes an [`EngineEvent`]
/// and, for exports, a `ProcessingResult { success: false }`.
#[derive(Default)]
pub struct DataController {
    loader: TabularLoader,
    catalog: FieldCatalog,
    observers: Vec<Observer>,
}

impl DataController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer for engine events.
    pub fn on_event(&mut self, observer: impl FnMut(&EngineEvent) + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn emit(&mut self, event: EngineEvent) {
        for observer in &mut self.observers {
            observer(&event);
        }
    }

    /// Load a file and rebuild the catalog from its headers.
    ///
    /// Custom fields survive the reload; original selections are reset to
    /// all-selected in the new header order.
    pub fn load_file(&mut self, path: &Path) -> Result<(), LoadError> {
        match self.loader.load(path) {
            Ok(headers) => {
                self.catalog.set_file_path(Some(path.to_path_buf()));
                self.catalog.rebuild_from_headers(&headers);
                self.emit(EngineEvent::FileLoaded(path.to_path_buf()));
                self.emit(EngineEvent::HeadersUpdated(headers));
                self.emit(EngineEvent::ConfigurationChanged);
                self.refresh_preview();
                Ok(())
            }
            Err(error) => {
                warn!(path = %path.display(), error = %error, "load failed");
                self.emit(EngineEvent::Error(error.to_string()));
                Err(error)
            }
        }
    }

    /// Toggle a field's inclusion. Unknown names are a no-op returning
    /// false, with no notifications.
    pub fn set_selected(&mut self, name: &str, selected: bool) -> bool {
        let changed = self.catalog.set_selected(name, selected);
        if changed {
            self.emit(EngineEvent::ConfigurationChanged);
            self.refresh_preview();
        }
        changed
    }

    /// Add a custom field, selected. A name collision leaves catalog and
    /// preview untouched and surfaces as an `Error` event.
    pub fn add_custom_field(&mut self, field: CustomField) -> Result<(), CatalogError> {
        match self.catalog.add_custom_field(field, true) {
            Ok(()) => {
                self.emit(EngineEvent::ConfigurationChanged);
                self.refresh_preview();
                Ok(())
            }
            Err(error) => {
                self.emit(EngineEvent::Error(error.to_string()));
                Err(error)
            }
        }
    }

    /// Remove a custom field and its selection entry.
    pub fn remove_custom_field(&mut self, name: &str) -> bool {
        let removed = self.catalog.remove_custom_field(name);
        if removed {
            self.emit(EngineEvent::ConfigurationChanged);
            self.refresh_preview();
        }
        removed
    }

    /// Row-bounded projection for display; `None` when nothing is loaded.
    pub fn preview(&self, rows: usize) -> Option<Projection> {
        let source = self.loader.preview(rows)?;
        Some(project(&source, &self.catalog))
    }

    fn refresh_preview(&mut self) {
        let preview = self
            .preview(DEFAULT_PREVIEW_ROWS)
            .map(|projection| projection.table);
        self.emit(EngineEvent::PreviewUpdated(preview));
    }

    /// Project the full table and write it to `destination`.
    ///
    /// Always returns a result and publishes it; write failures are folded
    /// into `ProcessingResult { success: false }` here rather than raised.
    pub fn export(&mut self, destination: &Path) -> ProcessingResult {
        let result = match self.loader.full_table() {
            None => ProcessingResult::failed("no data to process"),
            Some(table) => {
                let projection = project(&table, &self.catalog);
                write_projection(&projection.table, projection.warnings, destination)
            }
        };
        if result.success {
            info!(
                destination = %destination.display(),
                rows = result.processed_rows,
                warnings = result.warnings.len(),
                "export finished"
            );
        } else {
            warn!(
                destination = %destination.display(),
                error = result.error_message.as_deref().unwrap_or(""),
                "export failed"
            );
        }
        self.emit(EngineEvent::ProcessingCompleted(result.clone()));
        result
    }

    /// Reset loader and catalog to the no-file state.
    pub fn clear(&mut self) {
        self.loader.clear();
        self.catalog.clear();
        self.emit(EngineEvent::ConfigurationChanged);
        self.emit(EngineEvent::PreviewUpdated(None));
    }

    pub fn headers(&self) -> Vec<String> {
        self.loader.headers()
    }

    pub fn table_info(&self) -> TableInfo {
        self.loader.info()
    }

    pub fn has_data(&self) -> bool {
        self.loader.has_data()
    }

    pub fn selections(&self) -> &[FieldSelection] {
        self.catalog.selections()
    }

    pub fn selected_names(&self) -> Vec<String> {
        self.catalog
            .selected_names()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub fn catalog(&self) -> &FieldCatalog {
        &self.catalog
    }

    /// Swap in a previously captured catalog, with the usual notifications.
    pub fn set_catalog(&mut self, catalog: FieldCatalog) {
        self.catalog = catalog;
        self.emit(EngineEvent::ConfigurationChanged);
        self.refresh_preview();
    }
}
