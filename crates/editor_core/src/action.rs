use catalog::{Category, Field};

/// Every state transition the UI can request. Field updates carry a typed
/// [`Field`] instead of a field-name string, so there is no dynamic
/// record indexing anywhere in the editor.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Open the create modal.
    OpenCreate,
    /// Open the edit modal pre-populated from the catalog entry at `index`.
    OpenEdit { index: usize },
    /// Open the delete confirmation for the catalog entry at `index`.
    OpenDelete { index: usize },
    /// A form field of the open workflow changed.
    FieldChanged { field: Field, value: String },
    /// A swatch in the color row was clicked.
    ToggleColor(String),
    /// The category dropdown changed.
    SelectCategory(Category),
    /// Submit the open workflow (form submit or delete confirmation).
    Submit,
    /// Close the open workflow without committing.
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Added,
    Updated,
    Deleted,
}

/// Payload for a success toast. Validation failures never produce a
/// notice; they surface through the per-field error messages instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub(crate) fn added() -> Self {
        Self {
            kind: NoticeKind::Added,
            message: "Product has been added successfully!".to_string(),
        }
    }

    pub(crate) fn updated() -> Self {
        Self {
            kind: NoticeKind::Updated,
            message: "Product has been updated successfully!".to_string(),
        }
    }

    pub(crate) fn deleted() -> Self {
        Self {
            kind: NoticeKind::Deleted,
            message: "Product has been deleted successfully!".to_string(),
        }
    }
}
