//! Food REST API access.
//!
//! `Foods` wraps the low-level `Client` with one method per CRUD operation
//! on the `/foods` resource.

mod client;
mod error;
mod resource;

pub use error::FoodsError;
pub use resource::*;

use client::Client;
use log::*;
use reqwest::Method;
use serde_json::json;
use std::time::Duration;

const RESOURCE: &str = "foods";

/// Responsible for asynchronous interaction with the food backend.
///
pub struct Foods {
    client: Client,
}

impl Foods {
    /// Returns a new instance for the given API base URL.
    ///
    pub fn new(api_url: &str, timeout: Duration) -> Result<Foods, FoodsError> {
        debug!("Initializing food API client for {}...", api_url);
        Ok(Foods {
            client: Client::new(api_url, timeout)?,
        })
    }

    /// Returns every food item known to the server, in server order.
    ///
    pub async fn list(&mut self) -> Result<Vec<FoodItem>, FoodsError> {
        debug!("Requesting food list...");
        let foods: Vec<FoodItem> = self.client.get(RESOURCE).await?;
        debug!("Retrieved {} foods", foods.len());
        Ok(foods)
    }

    /// Creates a food item and returns it with its server-assigned id. New
    /// items always start out available.
    ///
    pub async fn create(&mut self, food: &NewFood) -> Result<FoodItem, FoodsError> {
        debug!("Creating food '{}'...", food.name);
        let body = json!({
            "name": food.name,
            "description": food.description,
            "price": food.price,
            "available": true,
            "image": food.image,
        });
        self.client.send(Method::POST, RESOURCE, None, &body).await
    }

    /// Replaces the stored record with the given full record and returns the
    /// server's version of it.
    ///
    pub async fn update(&mut self, food: &FoodItem) -> Result<FoodItem, FoodsError> {
        debug!("Updating food id {}...", food.id);
        let path = format!("{}/{}", RESOURCE, food.id);
        self.client
            .send(Method::PUT, &path, Some(food.id), food)
            .await
    }

    /// Deletes the food item with the given id.
    ///
    pub async fn delete(&mut self, id: FoodId) -> Result<(), FoodsError> {
        debug!("Deleting food id {}...", id);
        let path = format!("{}/{}", RESOURCE, id);
        self.client.delete(&path, id).await
    }
}
