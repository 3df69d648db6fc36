//! Presentation mode of the active file.

/// Whether the active file is shown as editable text or rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// Raw text in the code editor (default)
    #[default]
    Edit,
    /// Read-only rendered view (markdown, images, binaries)
    Preview,
}

impl ViewMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Edit => Self::Preview,
            Self::Preview => Self::Edit,
        }
    }
}
