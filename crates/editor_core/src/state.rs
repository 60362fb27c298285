use catalog::{seed, Category, FieldErrors, Product, ProductDraft, ProductId};

/// Which modal workflow is currently open. At most one is open at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Workflow {
    Idle,
    Create,
    Edit { index: usize },
    ConfirmDelete { id: ProductId },
}

/// The entire editor state. The catalog is the single source of truth for
/// committed products; everything else is form bookkeeping.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    /// Committed products, in insertion order.
    pub catalog: Vec<Product>,
    /// Draft behind the create form.
    pub draft: ProductDraft,
    /// Draft behind the edit form, pre-populated from the entry being edited.
    pub edit_draft: ProductDraft,
    /// Per-field validation messages from the last submit attempt.
    pub errors: FieldErrors,
    /// Colors toggled in the swatch row but not yet committed.
    pub temp_colors: Vec<String>,
    /// Category selection backing the create form's dropdown.
    pub selected_category: Category,
    pub workflow: Workflow,
}

impl AppState {
    pub fn new(catalog: Vec<Product>) -> Self {
        Self {
            catalog,
            draft: ProductDraft::default(),
            edit_draft: ProductDraft::default(),
            errors: FieldErrors::default(),
            temp_colors: Vec::new(),
            selected_category: seed::categories()
                .into_iter()
                .next()
                .unwrap_or_default(),
            workflow: Workflow::Idle,
        }
    }

    /// Colors shown as chips in the edit modal: the transient selection
    /// followed by the colors already on the record. Duplicates are kept.
    pub fn displayed_edit_colors(&self) -> Vec<String> {
        let mut colors = self.temp_colors.clone();
        colors.extend(self.edit_draft.colors.iter().cloned());
        colors
    }

    /// The draft the open workflow writes into, if a form is open.
    pub fn active_draft(&self) -> Option<&ProductDraft> {
        match self.workflow {
            Workflow::Create => Some(&self.draft),
            Workflow::Edit { .. } => Some(&self.edit_draft),
            Workflow::Idle | Workflow::ConfirmDelete { .. } => None,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
