//! Create/edit dialog state.

#[cfg(test)]
#[path = "dialog_test.rs"]
mod dialog_test;

/// Dialog lifecycle with the create/edit mode carried by the variant.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DialogState<D> {
    #[default]
    Closed,
    /// New record; the draft starts from its defaults.
    Creating(D),
    /// Existing record `id`; the draft starts from its editable fields.
    Editing { id: String, draft: D },
}

impl<D: Default> DialogState<D> {
    /// Open in create mode with a default draft.
    pub fn open_create(&mut self) {
        *self = Self::Creating(D::default());
    }

    /// Open in edit mode for `id`, pre-filled with `draft`.
    pub fn open_edit(&mut self, id: impl Into<String>, draft: D) {
        *self = Self::Editing {
            id: id.into(),
            draft,
        };
    }

    /// Close and drop the draft and target.
    pub fn close(&mut self) {
        *self = Self::Closed;
    }
}

impl<D> DialogState<D> {
    #[must_use]
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing { .. })
    }

    /// Identifier of the record being edited, if any.
    #[must_use]
    pub fn editing_id(&self) -> Option<&str> {
        match self {
            Self::Editing { id, .. } => Some(id),
            _ => None,
        }
    }

    #[must_use]
    pub fn draft(&self) -> Option<&D> {
        match self {
            Self::Closed => None,
            Self::Creating(draft) | Self::Editing { draft, .. } => Some(draft),
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut D> {
        match self {
            Self::Closed => None,
            Self::Creating(draft) | Self::Editing { draft, .. } => Some(draft),
        }
    }

    /// Apply `edit` to the open draft. No-op when closed.
    pub fn update_draft(&mut self, edit: impl FnOnce(&mut D)) {
        if let Some(draft) = self.draft_mut() {
            edit(draft);
        }
    }
}
