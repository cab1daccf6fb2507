//! Common test utilities: scripted collaborator doubles for the engine.
use nagare::prelude::*;
use std::collections::VecDeque;

/// A `PromptReader` that replays pre-scripted answers.
///
/// Each queue is popped once per prompt; an exhausted queue or an explicit
/// `None` entry is a failed read. Recovery decisions are answered from the
/// `choices` queue ("r" retries, anything else skips).
#[derive(Debug, Default)]
pub struct ScriptedReader {
    numbers: VecDeque<Option<f64>>,
    texts: VecDeque<Option<String>>,
    choices: VecDeque<Option<String>>,
}

#[allow(dead_code)]
impl ScriptedReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn numbers(mut self, values: impl IntoIterator<Item = Option<f64>>) -> Self {
        self.numbers.extend(values);
        self
    }

    pub fn texts(mut self, values: impl IntoIterator<Item = Option<&'static str>>) -> Self {
        self.texts
            .extend(values.into_iter().map(|v| v.map(str::to_string)));
        self
    }

    pub fn choices(mut self, keys: impl IntoIterator<Item = Option<&'static str>>) -> Self {
        self.choices
            .extend(keys.into_iter().map(|k| k.map(str::to_string)));
        self
    }
}

impl PromptReader for ScriptedReader {
    fn read_number(&mut self, _prompt: &str) -> Option<f64> {
        self.numbers.pop_front().flatten()
    }

    fn read_text(&mut self, _prompt: &str) -> Option<String> {
        self.texts.pop_front().flatten()
    }

    fn choose(&mut self, _prompt: &str, choices: &[Choice]) -> Option<String> {
        let picked = self.choices.pop_front().flatten()?;
        choices
            .iter()
            .find(|choice| choice.key == picked)
            .map(|choice| choice.key.clone())
    }
}

/// An in-memory file in a [`MemoryStore`].
#[derive(Debug, Clone, PartialEq)]
pub struct MemFile {
    pub name: String,
    pub ext: FileExt,
    pub buffer: String,
    pub persisted: bool,
}

/// A purely in-memory `FileStore` that records writes and persists.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub files: Vec<MemFile>,
    pub refuse_writes: bool,
}

#[allow(dead_code)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates a file, as if it already existed on disk.
    pub fn seed(mut self, name: &str, ext: FileExt, content: &str) -> Self {
        self.files.push(MemFile {
            name: name.to_string(),
            ext,
            buffer: content.to_string(),
            persisted: false,
        });
        self
    }

    pub fn find(&self, name: &str, ext: FileExt) -> Option<&MemFile> {
        self.files
            .iter()
            .find(|file| file.name == name && file.ext == ext)
    }
}

impl FileStore for MemoryStore {
    fn handle(&mut self, name: &str, ext: FileExt) -> Option<usize> {
        if let Some(pos) = self
            .files
            .iter()
            .position(|file| file.name == name && file.ext == ext)
        {
            return Some(pos);
        }
        self.files.push(MemFile {
            name: name.to_string(),
            ext,
            buffer: String::new(),
            persisted: false,
        });
        Some(self.files.len() - 1)
    }

    fn read_all(&self, handle: usize) -> String {
        self.files
            .get(handle)
            .map(|file| file.buffer.clone())
            .unwrap_or_default()
    }

    fn write(&mut self, handle: usize, text: &str) -> bool {
        if self.refuse_writes {
            return false;
        }
        match self.files.get_mut(handle) {
            Some(file) => {
                file.buffer.clear();
                file.buffer.push_str(text);
                true
            }
            None => false,
        }
    }

    fn persist(&mut self, handle: usize) -> bool {
        match self.files.get_mut(handle) {
            Some(file) => {
                file.persisted = true;
                true
            }
            None => false,
        }
    }
}

/// Engine wired to scripted doubles, with console output captured in a
/// byte buffer.
pub type TestEngine = Engine<ScriptedReader, MemoryStore, Vec<u8>>;

#[allow(dead_code)]
pub fn test_engine(reader: ScriptedReader) -> TestEngine {
    Engine::new(reader, MemoryStore::new(), Vec::new())
}

#[allow(dead_code)]
pub fn test_engine_with_store(reader: ScriptedReader, store: MemoryStore) -> TestEngine {
    Engine::new(reader, store, Vec::new())
}

/// The captured console output of a test engine.
#[allow(dead_code)]
pub fn console_output(engine: &TestEngine) -> String {
    String::from_utf8(engine.out.clone()).expect("console output was not valid UTF-8")
}
