use catalog::{validate_draft, Product, ProductDraft, ProductId};
use tracing::{debug, info, warn};

use crate::action::{Action, Notice};
use crate::state::{AppState, Workflow};

/// Result of applying one action: the next state, and a toast payload
/// when a commit succeeded.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: AppState,
    pub notice: Option<Notice>,
}

impl Transition {
    fn silent(state: AppState) -> Self {
        Self {
            state,
            notice: None,
        }
    }

    fn notify(state: AppState, notice: Notice) -> Self {
        Self {
            state,
            notice: Some(notice),
        }
    }
}

impl AppState {
    /// Applies one action. Consumes the current state and returns the next
    /// one; out-of-range indices degrade to no-ops rather than panicking.
    pub fn apply(mut self, action: Action) -> Transition {
        match action {
            Action::OpenCreate => {
                debug!("open create workflow");
                self.workflow = Workflow::Create;
                Transition::silent(self)
            }
            Action::OpenEdit { index } => {
                let Some(product) = self.catalog.get(index) else {
                    warn!(index, "edit requested for out-of-range catalog index");
                    return Transition::silent(self);
                };
                debug!(index, product_id = %product.id, "open edit workflow");
                self.edit_draft = ProductDraft::from_product(product);
                self.workflow = Workflow::Edit { index };
                Transition::silent(self)
            }
            Action::OpenDelete { index } => {
                let Some(product) = self.catalog.get(index) else {
                    warn!(index, "delete requested for out-of-range catalog index");
                    return Transition::silent(self);
                };
                debug!(product_id = %product.id, "open delete confirmation");
                self.workflow = Workflow::ConfirmDelete { id: product.id };
                Transition::silent(self)
            }
            Action::FieldChanged { field, value } => {
                let draft = match self.workflow {
                    Workflow::Create => &mut self.draft,
                    Workflow::Edit { .. } => &mut self.edit_draft,
                    Workflow::Idle | Workflow::ConfirmDelete { .. } => {
                        return Transition::silent(self)
                    }
                };
                draft.set_field(field, value);
                self.errors.clear(field);
                Transition::silent(self)
            }
            Action::ToggleColor(color) => {
                if let Some(pos) = self.temp_colors.iter().position(|c| *c == color) {
                    self.temp_colors.remove(pos);
                } else if self.edit_draft.colors.contains(&color) {
                    // A color already attached to the record being edited is
                    // only ever removed from the transient set, which does not
                    // contain it here; the click changes nothing.
                    self.temp_colors.retain(|c| *c != color);
                } else {
                    self.temp_colors.push(color);
                }
                Transition::silent(self)
            }
            Action::SelectCategory(category) => {
                match self.workflow {
                    Workflow::Edit { .. } => self.edit_draft.category = category,
                    _ => self.selected_category = category,
                }
                Transition::silent(self)
            }
            Action::Submit => match self.workflow {
                Workflow::Create => self.submit_create(),
                Workflow::Edit { index } => self.submit_edit(index),
                Workflow::ConfirmDelete { id } => self.confirm_delete(id),
                Workflow::Idle => Transition::silent(self),
            },
            Action::Cancel => {
                debug!("cancel open workflow");
                self.draft = ProductDraft::default();
                self.edit_draft = ProductDraft::default();
                self.workflow = Workflow::Idle;
                Transition::silent(self)
            }
        }
    }

    fn submit_create(mut self) -> Transition {
        let errors = validate_draft(&self.draft);
        if errors.has_any() {
            debug!(?errors, "create submit rejected by validation");
            self.errors = errors;
            return Transition::silent(self);
        }

        let product = Product {
            id: ProductId::generate(),
            title: self.draft.title.clone(),
            description: self.draft.description.clone(),
            image_url: self.draft.image_url.clone(),
            price: self.draft.price.clone(),
            colors: self.temp_colors.clone(),
            category: self.selected_category.clone(),
        };
        info!(product_id = %product.id, title = %product.title, "product added");
        self.catalog.push(product);
        self.draft = ProductDraft::default();
        self.temp_colors.clear();
        self.workflow = Workflow::Idle;
        Transition::notify(self, Notice::added())
    }

    fn submit_edit(mut self, index: usize) -> Transition {
        let errors = validate_draft(&self.edit_draft);
        if errors.has_any() {
            debug!(?errors, "edit submit rejected by validation");
            self.errors = errors;
            return Transition::silent(self);
        }

        let Some(original) = self.catalog.get(index) else {
            warn!(index, "edited entry vanished before commit");
            self.workflow = Workflow::Idle;
            return Transition::silent(self);
        };

        // The identifier is carried over; only the fields are replaced.
        // Committed colors are the transient selection followed by the
        // colors the record already had, duplicates and all.
        let mut colors = self.temp_colors.clone();
        colors.extend(self.edit_draft.colors.iter().cloned());
        let updated = Product {
            id: original.id,
            title: self.edit_draft.title.clone(),
            description: self.edit_draft.description.clone(),
            image_url: self.edit_draft.image_url.clone(),
            price: self.edit_draft.price.clone(),
            colors,
            category: self.edit_draft.category.clone(),
        };
        info!(product_id = %updated.id, index, "product updated");
        self.catalog[index] = updated;
        self.edit_draft = ProductDraft::default();
        self.temp_colors.clear();
        self.workflow = Workflow::Idle;
        Transition::notify(self, Notice::updated())
    }

    fn confirm_delete(mut self, id: ProductId) -> Transition {
        let before = self.catalog.len();
        self.catalog.retain(|product| product.id != id);
        info!(product_id = %id, removed = before - self.catalog.len(), "product deleted");
        self.workflow = Workflow::Idle;
        Transition::notify(self, Notice::deleted())
    }
}
