use liftline_protocol::{Lift, ResortMap, SharedStr};

/// View state for a resort map: the immutable lift collection plus the one
/// piece of mutable state — which lift id is selected.
///
/// Selection starts empty, is only written by [`MapState::select`], and is
/// never cleared automatically. Hover is renderer-local and never stored
/// here, so it cannot affect selection. Every render re-derives the three
/// presentations (path overlay, markers, lift list) from this state.
#[derive(Debug, Clone)]
pub struct MapState {
    map: ResortMap,
    selected: Option<SharedStr>,
}

impl MapState {
    pub fn new(map: ResortMap) -> Self {
        Self {
            map,
            selected: None,
        }
    }

    pub fn map(&self) -> &ResortMap {
        &self.map
    }

    /// Currently selected lift id, if any.
    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// The selected lift record, if any.
    pub fn selected_lift(&self) -> Option<&Lift> {
        self.selected.as_deref().and_then(|id| self.map.lift(id))
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_id() == Some(id)
    }

    /// Select a lift by id, unconditionally replacing any prior selection.
    ///
    /// The state domain is closed over the loaded collection: an id that
    /// does not name a lift is ignored and the previous selection stands.
    /// Re-selecting the current id is a no-op. There is no
    /// toggle-to-deselect. Returns whether the id named a lift.
    pub fn select(&mut self, id: &str) -> bool {
        match self.map.lift(id) {
            Some(lift) => {
                self.selected = Some(lift.id.clone());
                true
            }
            None => false,
        }
    }
}
