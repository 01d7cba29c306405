use fake::Dummy;
use serde::{Deserialize, Serialize};

/// Server-assigned identifier of a food item.
///
pub type FoodId = u64;

/// Defines food item data structure as served by the `/foods` resource.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: FoodId,
    pub name: String,
    pub description: String,
    pub price: String,
    pub available: bool,
    pub image: String,
}

/// Defines the fields a user supplies when creating a food item. The
/// identifier is assigned by the server and availability starts out true.
///
#[derive(Clone, Debug, Default, Dummy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFood {
    pub name: String,
    pub description: String,
    pub price: String,
    pub image: String,
}

/// Defines a partial update to the user-editable fields of a food item.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FoodPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub image: Option<String>,
}

impl FoodPatch {
    /// Returns true if the patch would not change any field.
    ///
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.image.is_none()
    }
}

impl FoodItem {
    /// Returns a copy of this record with every field present in the patch
    /// replaced. Identifier and availability are kept.
    ///
    pub fn apply(&self, patch: &FoodPatch) -> FoodItem {
        FoodItem {
            id: self.id,
            name: patch.name.clone().unwrap_or_else(|| self.name.clone()),
            description: patch
                .description
                .clone()
                .unwrap_or_else(|| self.description.clone()),
            price: patch.price.clone().unwrap_or_else(|| self.price.clone()),
            available: self.available,
            image: patch.image.clone().unwrap_or_else(|| self.image.clone()),
        }
    }

    /// Returns a copy of this record with availability flipped.
    ///
    pub fn with_availability_toggled(&self) -> FoodItem {
        FoodItem {
            available: !self.available,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::{Fake, Faker};

    #[test]
    fn apply_replaces_only_present_fields() {
        let food = FoodItem {
            id: 1,
            name: "Ao molho".to_string(),
            description: "Macarrão ao molho branco".to_string(),
            price: "5.00".to_string(),
            available: false,
            image: "https://example.com/ao-molho.png".to_string(),
        };
        let patch = FoodPatch {
            price: Some("6.00".to_string()),
            ..FoodPatch::default()
        };
        let updated = food.apply(&patch);
        assert_eq!(updated.price, "6.00");
        assert_eq!(updated.id, food.id);
        assert_eq!(updated.name, food.name);
        assert_eq!(updated.description, food.description);
        assert_eq!(updated.image, food.image);
        assert!(!updated.available);
    }

    #[test]
    fn apply_empty_patch_is_identity() {
        let food: FoodItem = Faker.fake();
        assert!(FoodPatch::default().is_empty());
        assert_eq!(food.apply(&FoodPatch::default()), food);
    }

    #[test]
    fn with_availability_toggled_flips_flag_only() {
        let food: FoodItem = Faker.fake();
        let toggled = food.with_availability_toggled();
        assert_eq!(toggled.available, !food.available);
        assert_eq!(toggled.with_availability_toggled(), food);
    }

    #[test]
    fn food_item_json_shape() {
        let json = r#"{"id":2,"name":"Cake","description":"Sweet","price":"10.00","available":true,"image":"cake.png"}"#;
        let food: FoodItem = serde_json::from_str(json).unwrap();
        assert_eq!(food.id, 2);
        assert_eq!(food.price, "10.00");
        assert!(food.available);
    }
}
