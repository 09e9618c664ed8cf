//! Progress reporting for the diff engine and report renderers
//!
//! The engine never prints. Callers that want progress pass a [`ProgressObserver`];
//! [`LogObserver`] forwards events to the `log` facade, [`RecordingObserver`] keeps them
//! in memory.

/// Something that happened while diffing or rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    /// A sheet exists only in the new snapshot
    SheetAdded { sheet: String },
    /// A sheet exists only in the old snapshot
    SheetRemoved { sheet: String },
    /// A sheet present on both sides finished cell comparison
    SheetCompared {
        sheet: String,
        /// Distinct coordinates visited (union of both grids)
        cells_examined: usize,
        changes: usize,
        overflow: usize,
    },
    /// The diff engine finished
    DiffFinished {
        added: usize,
        removed: usize,
        compared: usize,
        changes: usize,
    },
    /// A renderer emitted one sheet section
    SheetRendered {
        sheet: String,
        rows: usize,
        overflow_blocks: usize,
    },
    /// A renderer finished the document
    RenderFinished { bytes: usize },
}

/// Receives [`ProgressEvent`]s
pub trait ProgressObserver {
    fn on_event(&mut self, event: &ProgressEvent);
}

impl<F: FnMut(&ProgressEvent)> ProgressObserver for F {
    fn on_event(&mut self, event: &ProgressEvent) {
        self(event)
    }
}

/// Discards every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ProgressObserver for NoopObserver {
    fn on_event(&mut self, _event: &ProgressEvent) {}
}

/// Forwards events to the `log` facade
///
/// Sheet-level outcomes go to `info`, per-sheet statistics to `debug`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl ProgressObserver for LogObserver {
    fn on_event(&mut self, event: &ProgressEvent) {
        match event {
            ProgressEvent::SheetAdded { sheet } => log::info!("sheet added: {sheet}"),
            ProgressEvent::SheetRemoved { sheet } => log::info!("sheet removed: {sheet}"),
            ProgressEvent::SheetCompared {
                sheet,
                cells_examined,
                changes,
                overflow,
            } => {
                log::info!("sheet {sheet}: {changes} changed cells");
                log::debug!(
                    "sheet {sheet}: examined {cells_examined} coordinates, {overflow} overflow"
                );
            }
            ProgressEvent::DiffFinished {
                added,
                removed,
                compared,
                changes,
            } => log::info!(
                "diff finished: {added} added, {removed} removed, {compared} compared, {changes} changed cells"
            ),
            ProgressEvent::SheetRendered {
                sheet,
                rows,
                overflow_blocks,
            } => log::debug!("rendered sheet {sheet}: {rows} rows, {overflow_blocks} overflow blocks"),
            ProgressEvent::RenderFinished { bytes } => {
                log::debug!("report rendered ({bytes} bytes)")
            }
        }
    }
}

/// Keeps every event, in order
#[derive(Debug, Default, Clone)]
pub struct RecordingObserver {
    pub events: Vec<ProgressEvent>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressObserver for RecordingObserver {
    fn on_event(&mut self, event: &ProgressEvent) {
        self.events.push(event.clone());
    }
}
