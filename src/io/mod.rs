//! Contracts for the engine's external collaborators.
//!
//! The engine never talks to stdin or the filesystem directly; it goes
//! through the [`PromptReader`] and [`FileStore`] traits so tests can
//! substitute scripted doubles. Console and directory-backed
//! implementations live in the submodules.

pub mod console;
pub mod store;

pub use console::ConsoleReader;
pub use store::DirStore;

/// One labeled choice offered to the operator, selected by its key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub label: String,
    pub key: String,
}

impl Choice {
    pub fn new(label: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            key: key.into(),
        }
    }
}

/// Blocking, line-oriented operator input.
///
/// `None` signals a failed read (closed stream, unparseable value or an
/// unknown option key), never a crash. A failed read makes the node
/// evaluation fail with `InvalidInput` instead of hanging.
pub trait PromptReader {
    fn read_number(&mut self, prompt: &str) -> Option<f64>;

    fn read_text(&mut self, prompt: &str) -> Option<String>;

    /// Presents the choices and returns the key of the picked one.
    fn choose(&mut self, prompt: &str, choices: &[Choice]) -> Option<String>;
}

/// The two file formats the engine can address. Translation from the
/// free-form extension strings carried by nodes is owned by the engine;
/// anything but `.txt`/`.csv` is an `InvalidHandle` error there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileExt {
    Txt,
    Csv,
}

impl FileExt {
    pub fn suffix(self) -> &'static str {
        match self {
            FileExt::Txt => ".txt",
            FileExt::Csv => ".csv",
        }
    }

    /// How values on one output line are joined for this format.
    pub fn delimiter(self) -> &'static str {
        match self {
            FileExt::Txt => " ",
            FileExt::Csv => ",",
        }
    }

    /// Recognizes `.txt`/`.csv`, with or without the leading dot.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.trim().trim_start_matches('.') {
            "txt" => Some(FileExt::Txt),
            "csv" => Some(FileExt::Csv),
            _ => None,
        }
    }
}

/// Opaque handle to a file owned by a [`FileStore`].
pub type HandleId = usize;

/// Keyed file storage: handles are resolved by (name, extension), content
/// is buffered on write and flushed on persist. The engine assumes
/// exclusive access for the duration of one output evaluation.
pub trait FileStore {
    /// Returns the handle for the named file, creating it on first use.
    /// `None` means the store could not produce a handle.
    fn handle(&mut self, name: &str, ext: FileExt) -> Option<HandleId>;

    /// The file's full content as text. An unknown handle reads as empty.
    fn read_all(&self, handle: HandleId) -> String;

    /// Replaces the file's buffered content. Returns `false` when the
    /// write was refused.
    fn write(&mut self, handle: HandleId, text: &str) -> bool;

    /// Flushes the buffered content to the backing medium.
    fn persist(&mut self, handle: HandleId) -> bool;
}
