use crate::data::aggregate::{derive_view, DerivedView};
use crate::data::model::CaseDataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// Owns the immutable dataset, the current country selection, and the
/// [`DerivedView`] computed from them. The UI reads `view` every frame and
/// reports selection changes through [`select_country`](Self::select_country);
/// it never mutates displayed values itself.
pub struct AppState {
    /// Dataset loaded at startup; never modified afterwards.
    pub dataset: CaseDataset,

    /// Currently selected country (None = placeholder option).
    pub selected_country: Option<String>,

    /// Everything currently shown on screen, recomputed on each selection
    /// change, never partially updated.
    pub view: DerivedView,
}

impl AppState {
    /// Build the controller around an already-loaded dataset.
    pub fn new(dataset: CaseDataset) -> Self {
        let view = derive_view(&dataset, None);
        Self {
            dataset,
            selected_country: None,
            view,
        }
    }

    /// Apply a selection change and recompute the whole view.
    /// `None` corresponds to the leading placeholder option.
    pub fn select_country(&mut self, country: Option<String>) {
        self.selected_country = country;
        self.view = derive_view(&self.dataset, self.selected_country.as_deref());
    }
}
