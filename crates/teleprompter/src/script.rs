//! In-memory script storage: the active buffer plus named saved scripts.
//!
//! Nothing here touches disk. Scripts vanish when the process exits.

use std::fmt;

pub const WELCOME_TEXT: &str =
    "Welcome to the teleprompter. Enter your text in the control panel below to get started.";

/// Opaque identifier for a saved script. Allocated from a per-store counter,
/// so two saves never share an id even when their names collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScriptId(u64);

impl fmt::Display for ScriptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A saved snapshot of the active buffer. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    id: ScriptId,
    name: String,
    content: String,
}

impl Script {
    pub fn id(&self) -> ScriptId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

#[derive(Debug, Clone)]
pub struct ScriptStore {
    buffer: String,
    saved: Vec<Script>,
    next_id: u64,
}

impl Default for ScriptStore {
    fn default() -> Self {
        Self::new(WELCOME_TEXT)
    }
}

impl ScriptStore {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            buffer: initial.into(),
            saved: Vec::new(),
            next_id: 1,
        }
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Mutable access for the text editor widget.
    pub fn text_mut(&mut self) -> &mut String {
        &mut self.buffer
    }

    #[allow(dead_code)]
    pub fn set_text(&mut self, content: impl Into<String>) {
        self.buffer = content.into();
    }

    pub fn scripts(&self) -> &[Script] {
        &self.saved
    }

    #[allow(dead_code)]
    pub fn get(&self, id: ScriptId) -> Option<&Script> {
        self.saved.iter().find(|s| s.id == id)
    }

    /// Save `content` under `name`. An empty name is a silent no-op.
    pub fn save(&mut self, name: &str, content: &str) -> Option<ScriptId> {
        if name.is_empty() {
            return None;
        }
        let id = ScriptId(self.next_id);
        self.next_id += 1;
        self.saved.push(Script {
            id,
            name: name.to_string(),
            content: content.to_string(),
        });
        log::debug!("saved script {id} ({name:?}, {} bytes)", content.len());
        Some(id)
    }

    /// Save the current active buffer under `name`.
    pub fn save_current(&mut self, name: &str) -> Option<ScriptId> {
        let content = self.buffer.clone();
        self.save(name, &content)
    }

    /// Remove the script with `id`. Absent ids are ignored.
    pub fn delete(&mut self, id: ScriptId) -> bool {
        let before = self.saved.len();
        self.saved.retain(|s| s.id != id);
        let removed = self.saved.len() != before;
        if removed {
            log::debug!("deleted script {id}");
        }
        removed
    }

    /// Copy the script's content into the active buffer. Absent ids are ignored.
    pub fn load(&mut self, id: ScriptId) -> bool {
        let Some(script) = self.saved.iter().find(|s| s.id == id) else {
            return false;
        };
        self.buffer = script.content.clone();
        log::debug!("loaded script {id} ({:?})", script.name);
        true
    }

    /// Owned copy of the active buffer, handed to the presentation view.
    pub fn snapshot(&self) -> String {
        self.buffer.clone()
    }
}
