//! Modal and load status types.
//!
//! The dashboard shows at most one modal at a time. The edit modal carries
//! the identifier of the food it targets.

use super::form::FoodForm;
use crate::foods::FoodId;

/// Specifying the modal currently shown over the dashboard.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Modal {
    #[default]
    Closed,
    Add(FoodForm),
    Edit { target: FoodId, form: FoodForm },
}

impl Modal {
    pub fn is_open(&self) -> bool {
        !matches!(self, Modal::Closed)
    }

    pub fn is_add(&self) -> bool {
        matches!(self, Modal::Add(_))
    }

    /// Return the food id targeted by an open edit modal.
    ///
    pub fn edit_target(&self) -> Option<FoodId> {
        match self {
            Modal::Edit { target, .. } => Some(*target),
            _ => None,
        }
    }

    pub fn form(&self) -> Option<&FoodForm> {
        match self {
            Modal::Closed => None,
            Modal::Add(form) | Modal::Edit { form, .. } => Some(form),
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut FoodForm> {
        match self {
            Modal::Closed => None,
            Modal::Add(form) | Modal::Edit { form, .. } => Some(form),
        }
    }
}

/// Specifying progress of the food list load.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    NotLoaded,
    Loading,
    Loaded,
    Failed(String),
}

/// Specifying the message shown in the footer status line.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Info(String),
    Error(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_modal_has_no_form() {
        let mut modal = Modal::Closed;
        assert!(!modal.is_open());
        assert!(modal.form().is_none());
        assert!(modal.form_mut().is_none());
        assert_eq!(modal.edit_target(), None);
    }

    #[test]
    fn test_add_modal() {
        let modal = Modal::Add(FoodForm::new());
        assert!(modal.is_open());
        assert!(modal.is_add());
        assert_eq!(modal.edit_target(), None);
        assert!(modal.form().is_some());
    }

    #[test]
    fn test_edit_modal_carries_target() {
        let modal = Modal::Edit {
            target: 9,
            form: FoodForm::new(),
        };
        assert!(modal.is_open());
        assert!(!modal.is_add());
        assert_eq!(modal.edit_target(), Some(9));
    }

    #[test]
    fn test_load_status_default() {
        assert_eq!(LoadStatus::default(), LoadStatus::NotLoaded);
    }
}
