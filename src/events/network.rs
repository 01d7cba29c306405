use crate::foods::{FoodId, FoodItem, Foods, FoodsError, NewFood};
use crate::state::{LoadStatus, State};
use anyhow::{anyhow, Result};
use log::*;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Specify different network event types.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    LoadFoods,
    CreateFood { food: NewFood },
    UpdateFood { food: FoodItem },
    DeleteFood { id: FoodId },
}

/// Specify struct for managing state with network events.
///
pub struct Handler<'a> {
    state: &'a Arc<Mutex<State>>,
    foods: &'a mut Foods,
}

impl<'a> Handler<'a> {
    /// Return new instance with reference to state.
    ///
    pub fn new(state: &'a Arc<Mutex<State>>, foods: &'a mut Foods) -> Self {
        Handler { state, foods }
    }

    /// Handle network events by type. The state is only touched after the
    /// request settles, and never while a request is in flight.
    ///
    pub async fn handle(&mut self, event: Event) -> Result<()> {
        debug!("Processing network event '{:?}'...", event);
        match event {
            Event::LoadFoods => self.load_foods().await,
            Event::CreateFood { food } => self.create_food(food).await,
            Event::UpdateFood { food } => self.update_food(food).await,
            Event::DeleteFood { id } => self.delete_food(id).await,
        }
    }

    /// Replace the food list with the server's list.
    ///
    async fn load_foods(&mut self) -> Result<()> {
        info!("Fetching food list...");
        match self.foods.list().await {
            Ok(foods) => {
                info!("Received {} foods.", foods.len());
                let mut state = self.state.lock().await;
                state.set_foods(foods);
                Ok(())
            }
            Err(e) => {
                {
                    let mut state = self.state.lock().await;
                    state.set_load_status(LoadStatus::Failed(e.to_string()));
                }
                Err(self.report("load foods", e).await)
            }
        }
    }

    /// Create a food and append the server's record to the list.
    ///
    async fn create_food(&mut self, food: NewFood) -> Result<()> {
        info!("Creating food '{}'...", food.name);
        match self.foods.create(&food).await {
            Ok(created) => {
                info!("Food '{}' created with id {}.", created.name, created.id);
                let mut state = self.state.lock().await;
                state.set_info(format!("Added '{}'", created.name));
                state.append_food(created);
                Ok(())
            }
            Err(e) => Err(self.report(&format!("create food '{}'", food.name), e).await),
        }
    }

    /// Send the full record and swap the matching list entry for the
    /// server's version.
    ///
    async fn update_food(&mut self, food: FoodItem) -> Result<()> {
        info!("Updating food {}...", food.id);
        match self.foods.update(&food).await {
            Ok(updated) => {
                info!("Food {} updated.", updated.id);
                let mut state = self.state.lock().await;
                let name = updated.name.clone();
                if state.replace_food(updated) {
                    state.set_info(format!("Saved '{}'", name));
                } else {
                    warn!("Updated food {} is no longer listed, ignoring.", food.id);
                }
                Ok(())
            }
            Err(e) => Err(self.report(&format!("update food {}", food.id), e).await),
        }
    }

    /// Delete a food and drop it from the list once the server confirms.
    ///
    async fn delete_food(&mut self, id: FoodId) -> Result<()> {
        info!("Deleting food {}...", id);
        match self.foods.delete(id).await {
            Ok(()) => {
                info!("Food {} deleted.", id);
                let mut state = self.state.lock().await;
                state.remove_food(id);
                state.set_info(format!("Deleted food {}", id));
                Ok(())
            }
            Err(e) => Err(self.report(&format!("delete food {}", id), e).await),
        }
    }

    /// Surface a failed request in the status line and return it as an
    /// error for the caller to log.
    ///
    async fn report(&self, action: &str, e: FoodsError) -> anyhow::Error {
        let message = format!("Failed to {}: {}", action, e);
        let mut state = self.state.lock().await;
        state.set_error(message.clone());
        anyhow!(message)
    }
}
