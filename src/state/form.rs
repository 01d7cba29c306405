//! Form editing state types.
//!
//! This module contains the input buffers behind the add and edit modals and
//! their validation into API payloads.

use super::StateError;
use crate::foods::{FoodItem, FoodPatch, NewFood};
use crate::utils::price::normalize_price;

/// Specifying form field focus.
///
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum FormField {
    Image,
    #[default]
    Name,
    Price,
    Description,
}

impl FormField {
    /// Fields in display order.
    ///
    pub const ALL: [FormField; 4] = [
        FormField::Image,
        FormField::Name,
        FormField::Price,
        FormField::Description,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Image => "Image URL",
            FormField::Name => "Name",
            FormField::Price => "Price",
            FormField::Description => "Description",
        }
    }

    pub fn next(self) -> FormField {
        match self {
            FormField::Image => FormField::Name,
            FormField::Name => FormField::Price,
            FormField::Price => FormField::Description,
            FormField::Description => FormField::Image,
        }
    }

    pub fn previous(self) -> FormField {
        match self {
            FormField::Image => FormField::Description,
            FormField::Name => FormField::Image,
            FormField::Price => FormField::Name,
            FormField::Description => FormField::Price,
        }
    }
}

/// Input buffers for a food item being created or edited.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FoodForm {
    image: String,
    name: String,
    price: String,
    description: String,
    focus: FormField,
    error: Option<String>,
}

impl FoodForm {
    /// Return an empty form focused on the name field.
    ///
    pub fn new() -> Self {
        FoodForm::default()
    }

    /// Return a form prefilled with the editable fields of the food.
    ///
    pub fn from_food(food: &FoodItem) -> Self {
        FoodForm {
            image: food.image.clone(),
            name: food.name.clone(),
            price: food.price.clone(),
            description: food.description.clone(),
            ..FoodForm::default()
        }
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    pub fn next_field(&mut self) -> &mut Self {
        self.focus = self.focus.next();
        self
    }

    pub fn previous_field(&mut self) -> &mut Self {
        self.focus = self.focus.previous();
        self
    }

    /// Return the current text of a field.
    ///
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Image => &self.image,
            FormField::Name => &self.name,
            FormField::Price => &self.price,
            FormField::Description => &self.description,
        }
    }

    fn focused_value_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Image => &mut self.image,
            FormField::Name => &mut self.name,
            FormField::Price => &mut self.price,
            FormField::Description => &mut self.description,
        }
    }

    /// Type a character into the focused field.
    ///
    pub fn push_char(&mut self, c: char) -> &mut Self {
        self.error = None;
        self.focused_value_mut().push(c);
        self
    }

    /// Delete the last character of the focused field.
    ///
    pub fn pop_char(&mut self) -> &mut Self {
        self.error = None;
        self.focused_value_mut().pop();
        self
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_error(&mut self, error: Option<String>) -> &mut Self {
        self.error = error;
        self
    }

    /// Validate the form into a create payload.
    ///
    pub fn to_new_food(&self) -> Result<NewFood, StateError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(StateError::InvalidForm("name is required".to_string()));
        }
        Ok(NewFood {
            name: name.to_string(),
            description: self.description.trim().to_string(),
            price: self.validated_price()?,
            image: self.image.trim().to_string(),
        })
    }

    /// Validate the form into a patch holding only the fields that differ
    /// from the original record. Untouched fields are not re-validated.
    ///
    pub fn to_patch(&self, original: &FoodItem) -> Result<FoodPatch, StateError> {
        let changed = |buffer: &str, old: &str| {
            let new = buffer.trim();
            (new != old.trim()).then(|| new.to_string())
        };
        let name = changed(&self.name, &original.name);
        if name.as_deref() == Some("") {
            return Err(StateError::InvalidForm("name is required".to_string()));
        }
        let price = match changed(&self.price, &original.price) {
            Some(_) => Some(self.validated_price()?).filter(|price| *price != original.price),
            None => None,
        };
        let patch = FoodPatch {
            name,
            description: changed(&self.description, &original.description),
            price,
            image: changed(&self.image, &original.image),
        };
        if patch.is_empty() {
            return Err(StateError::NothingToUpdate);
        }
        Ok(patch)
    }

    fn validated_price(&self) -> Result<String, StateError> {
        normalize_price(&self.price).ok_or_else(|| {
            StateError::InvalidForm(format!("'{}' is not a valid price", self.price.trim()))
        })
    }
}
