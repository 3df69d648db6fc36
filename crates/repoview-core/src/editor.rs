//! Editor language binding.
//!
//! Maps the active file's extension to one of the editor's registered
//! languages and swaps the editor model to the freshly loaded text.

use tracing::debug;

use crate::config::{PLAINTEXT_LANGUAGE, RENDERABLE_EXTENSIONS};
use crate::ports::{EditorWidget, LanguageDescriptor};
use crate::store::RepoStore;

/// Text after the last `.`; a name without a dot is returned whole.
pub fn file_extension(name: &str) -> &str {
    name.rsplit_once('.').map_or(name, |(_, ext)| ext)
}

/// First language whose extension list contains `.{ext}`.
pub fn find_language<'a>(
    ext: &str,
    languages: &'a [LanguageDescriptor],
) -> Option<&'a LanguageDescriptor> {
    let dotted = format!(".{}", ext);
    languages
        .iter()
        .find(|lang| lang.extensions.iter().any(|e| *e == dotted))
}

/// Language id for a file name, falling back to plain text.
pub fn language_id_for_file(name: &str, languages: &[LanguageDescriptor]) -> String {
    find_language(file_extension(name), languages)
        .map(|lang| lang.id.clone())
        .unwrap_or_else(|| PLAINTEXT_LANGUAGE.to_string())
}

/// Whether files with this extension are shown rendered.
pub fn is_renderable(extension: &str) -> bool {
    RENDERABLE_EXTENSIONS.contains(&extension)
}

// =============================================================================
// LanguageBinding
// =============================================================================

/// Rebinds the injected editor widget to the active file.
pub struct LanguageBinding<E> {
    editor: E,
}

impl<E: EditorWidget> LanguageBinding<E> {
    pub fn new(editor: E) -> Self {
        Self { editor }
    }

    pub fn editor(&self) -> &E {
        &self.editor
    }

    /// Replace the editor model with the store's raw text, highlighted for
    /// the active file. Returns the language id used, or `None` when no file
    /// is active.
    pub fn bind_language(&self, store: &RepoStore) -> Option<String> {
        let name = store.active_file()?.name.clone();

        self.editor.set_model(None);
        let language_id = language_id_for_file(&name, &self.editor.languages());
        let model = self.editor.create_model(store.blob_raw(), &language_id);
        self.editor.set_model(Some(model));

        debug!(file = %name, language = %language_id, "editor model rebound");
        Some(language_id)
    }
}
