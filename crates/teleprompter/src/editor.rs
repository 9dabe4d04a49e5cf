//! Editor screen state: the script store plus the transient UI around it
//! (saved-scripts drawer, save-name prompt).

use crate::script::{ScriptId, ScriptStore};

#[derive(Debug, Default)]
pub struct Editor {
    store: ScriptStore,
    drawer_open: bool,
    /// `Some` while the save-name prompt is open; holds the typed name.
    pending_name: Option<String>,
}

impl Editor {
    pub fn new(store: ScriptStore) -> Self {
        Self {
            store,
            drawer_open: false,
            pending_name: None,
        }
    }

    pub fn store(&self) -> &ScriptStore {
        &self.store
    }

    pub fn text(&self) -> &str {
        self.store.text()
    }

    pub fn text_mut(&mut self) -> &mut String {
        self.store.text_mut()
    }

    pub fn is_drawer_open(&self) -> bool {
        self.drawer_open
    }

    pub fn open_drawer(&mut self) {
        self.drawer_open = true;
    }

    pub fn close_drawer(&mut self) {
        self.drawer_open = false;
    }

    pub fn is_naming(&self) -> bool {
        self.pending_name.is_some()
    }

    pub fn pending_name_mut(&mut self) -> Option<&mut String> {
        self.pending_name.as_mut()
    }

    /// Open the save-name prompt.
    pub fn begin_save(&mut self) {
        self.pending_name = Some(String::new());
    }

    /// Close the prompt and save the active buffer under the typed name.
    /// A blank name behaves like cancel.
    pub fn confirm_save(&mut self) -> Option<ScriptId> {
        let name = self.pending_name.take()?;
        self.store.save_current(name.trim())
    }

    pub fn cancel_save(&mut self) {
        self.pending_name = None;
    }

    pub fn delete(&mut self, id: ScriptId) {
        self.store.delete(id);
    }

    /// Load a saved script into the buffer and close the drawer.
    pub fn load(&mut self, id: ScriptId) {
        if self.store.load(id) {
            self.drawer_open = false;
        }
    }

    /// Snapshot of the buffer for a new presentation. Later edits to the
    /// buffer do not reach the running presentation.
    pub fn start(&self) -> String {
        log::debug!("starting presentation ({} chars)", self.text().chars().count());
        self.store.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor(text: &str) -> Editor {
        Editor::new(ScriptStore::new(text))
    }

    #[test]
    fn test_confirm_save_uses_typed_name() {
        let mut ed = editor("Hi");
        ed.begin_save();
        ed.pending_name_mut().unwrap().push_str("Intro");
        let id = ed.confirm_save().unwrap();
        assert!(!ed.is_naming());
        let script = ed.store().get(id).unwrap();
        assert_eq!(script.name(), "Intro");
        assert_eq!(script.content(), "Hi");
    }

    #[test]
    fn test_cancelled_or_blank_save_is_noop() {
        let mut ed = editor("Hi");
        ed.begin_save();
        ed.cancel_save();
        assert_eq!(ed.confirm_save(), None);

        ed.begin_save();
        ed.pending_name_mut().unwrap().push_str("   ");
        assert_eq!(ed.confirm_save(), None);
        assert!(ed.store().scripts().is_empty());
    }

    #[test]
    fn test_load_closes_drawer() {
        let mut ed = editor("Hi");
        ed.begin_save();
        ed.pending_name_mut().unwrap().push_str("Intro");
        let id = ed.confirm_save().unwrap();
        *ed.text_mut() = "Bye".to_string();
        ed.open_drawer();
        ed.load(id);
        assert_eq!(ed.text(), "Hi");
        assert!(!ed.is_drawer_open());
    }

    #[test]
    fn test_load_missing_keeps_drawer_and_text() {
        let mut ed = editor("Hi");
        ed.begin_save();
        ed.pending_name_mut().unwrap().push_str("x");
        let id = ed.confirm_save().unwrap();
        ed.delete(id);
        ed.open_drawer();
        ed.load(id);
        assert!(ed.is_drawer_open());
        assert_eq!(ed.text(), "Hi");
    }

    #[test]
    fn test_start_returns_snapshot() {
        let mut ed = editor("first draft");
        let snapshot = ed.start();
        *ed.text_mut() = "edited later".to_string();
        assert_eq!(snapshot, "first draft");
    }
}
