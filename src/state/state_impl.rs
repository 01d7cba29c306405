use super::form::FoodForm;
use super::modal::{LoadStatus, Modal, Status};
use super::StateError;
use crate::app::NetworkEventSender;
use crate::events::network::Event as NetworkEvent;
use crate::foods::{FoodId, FoodItem, FoodPatch};
use crate::ui::{Theme, SPINNER_FRAME_COUNT};
use log::*;
use ratatui::layout::Rect;
use ratatui::widgets::ListState;
use std::collections::VecDeque;

const MAX_LOG_ENTRIES: usize = 1000;

/// Houses data representative of application state.
///
/// The food list is only ever changed by reconciling confirmed server
/// responses; user actions dispatch network events instead.
pub struct State {
    net_sender: Option<NetworkEventSender>,
    api_url: String,
    terminal_size: Rect,
    spinner_index: usize,
    foods: Vec<FoodItem>,
    foods_list_state: ListState,
    load_status: LoadStatus,
    modal: Modal,
    delete_confirmation: Option<FoodId>,
    status: Option<Status>,
    log_entries: VecDeque<String>,
    show_log: bool,
    theme: Theme,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        State {
            net_sender: None,
            api_url: String::new(),
            terminal_size: Rect::default(),
            spinner_index: 0,
            foods: vec![],
            foods_list_state: ListState::default(),
            load_status: LoadStatus::NotLoaded,
            modal: Modal::Closed,
            delete_confirmation: None,
            status: None,
            log_entries: VecDeque::new(),
            show_log: false,
            theme: Theme::default(),
        }
    }
}

impl State {
    pub fn new(net_sender: NetworkEventSender, api_url: String, theme: Theme) -> Self {
        State {
            net_sender: Some(net_sender),
            api_url,
            theme,
            ..State::default()
        }
    }

    /// Get the current theme.
    ///
    pub fn get_theme(&self) -> &Theme {
        &self.theme
    }

    /// Get the API base URL the dashboard talks to.
    ///
    pub fn get_api_url(&self) -> &str {
        &self.api_url
    }

    /// Sets the terminal size.
    ///
    pub fn set_terminal_size(&mut self, size: Rect) -> &mut Self {
        self.terminal_size = size;
        self
    }

    /// Advance the spinner index.
    ///
    pub fn advance_spinner_index(&mut self) -> &mut Self {
        self.spinner_index += 1;
        if self.spinner_index >= SPINNER_FRAME_COUNT {
            self.spinner_index = 0;
        }
        self
    }

    /// Return the current spinner index.
    ///
    pub fn get_spinner_index(&self) -> &usize {
        &self.spinner_index
    }

    /// Send an event to the network thread.
    ///
    fn dispatch(&self, event: NetworkEvent) {
        match &self.net_sender {
            Some(sender) => {
                if let Err(e) = sender.send(event) {
                    error!("Failed to dispatch network event: {}", e);
                }
            }
            None => warn!("No network channel, dropping event {:?}", event),
        }
    }

    // Food list

    /// Return the food list in display order.
    ///
    pub fn get_foods(&self) -> &[FoodItem] {
        &self.foods
    }

    pub fn get_load_status(&self) -> &LoadStatus {
        &self.load_status
    }

    pub fn set_load_status(&mut self, status: LoadStatus) -> &mut Self {
        self.load_status = status;
        self
    }

    /// Request the full food list from the server.
    ///
    pub fn load_foods(&mut self) -> &mut Self {
        self.load_status = LoadStatus::Loading;
        self.dispatch(NetworkEvent::LoadFoods);
        self
    }

    /// Replace the whole food list with the server's list.
    ///
    pub fn set_foods(&mut self, foods: Vec<FoodItem>) -> &mut Self {
        self.foods = foods;
        self.load_status = LoadStatus::Loaded;
        self.drop_stale_delete_confirmation();
        self.clamp_selection();
        self
    }

    /// Append a newly created food to the end of the list.
    ///
    pub fn append_food(&mut self, food: FoodItem) -> &mut Self {
        self.foods.push(food);
        self.clamp_selection();
        self
    }

    /// Replace the entry with the same id, leaving every other entry and the
    /// order untouched. Returns false if no entry matched.
    ///
    pub fn replace_food(&mut self, food: FoodItem) -> bool {
        match self.foods.iter_mut().find(|f| f.id == food.id) {
            Some(existing) => {
                *existing = food;
                true
            }
            None => false,
        }
    }

    /// Remove the entry with the given id. Returns false if no entry matched.
    ///
    pub fn remove_food(&mut self, id: FoodId) -> bool {
        let before = self.foods.len();
        self.foods.retain(|f| f.id != id);
        self.drop_stale_delete_confirmation();
        self.clamp_selection();
        self.foods.len() != before
    }

    /// Return the food with the given id.
    ///
    pub fn find_food(&self, id: FoodId) -> Option<&FoodItem> {
        self.foods.iter().find(|f| f.id == id)
    }

    fn drop_stale_delete_confirmation(&mut self) {
        if let Some(id) = self.delete_confirmation {
            if self.find_food(id).is_none() {
                self.delete_confirmation = None;
            }
        }
    }

    fn clamp_selection(&mut self) {
        if self.foods.is_empty() {
            self.foods_list_state.select(None);
            return;
        }
        let index = self
            .foods_list_state
            .selected()
            .unwrap_or(0)
            .min(self.foods.len() - 1);
        self.foods_list_state.select(Some(index));
    }

    // Selection

    /// Return the foods list state.
    ///
    pub fn get_foods_list_state(&mut self) -> &mut ListState {
        &mut self.foods_list_state
    }

    /// Return the currently selected food.
    ///
    pub fn get_selected_food(&self) -> Option<&FoodItem> {
        self.foods_list_state
            .selected()
            .and_then(|index| self.foods.get(index))
    }

    /// Activate the next food, wrapping to the first.
    ///
    pub fn next_food(&mut self) -> &mut Self {
        if self.foods.is_empty() {
            self.foods_list_state.select(None);
            return self;
        }
        let next = match self.foods_list_state.selected() {
            Some(i) if i + 1 < self.foods.len() => i + 1,
            _ => 0,
        };
        self.foods_list_state.select(Some(next));
        self
    }

    /// Activate the previous food, wrapping to the last.
    ///
    pub fn previous_food(&mut self) -> &mut Self {
        if self.foods.is_empty() {
            self.foods_list_state.select(None);
            return self;
        }
        let prev = match self.foods_list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => self.foods.len() - 1,
        };
        self.foods_list_state.select(Some(prev));
        self
    }

    // Modals

    pub fn get_modal(&self) -> &Modal {
        &self.modal
    }

    /// Open the add modal with an empty form, or close it if it is open.
    /// An open edit modal is left alone.
    ///
    pub fn toggle_add_modal(&mut self) -> &mut Self {
        self.modal = match std::mem::take(&mut self.modal) {
            Modal::Closed => Modal::Add(FoodForm::new()),
            Modal::Add(_) => Modal::Closed,
            edit @ Modal::Edit { .. } => edit,
        };
        self
    }

    /// Close the edit modal. An edit modal cannot be opened without a
    /// target, so in any other state this does nothing.
    ///
    pub fn toggle_edit_modal(&mut self) -> &mut Self {
        if matches!(self.modal, Modal::Edit { .. }) {
            self.modal = Modal::Closed;
        }
        self
    }

    /// Open the edit modal for the given food.
    ///
    pub fn begin_edit(&mut self, food: &FoodItem) -> &mut Self {
        self.modal = Modal::Edit {
            target: food.id,
            form: FoodForm::from_food(food),
        };
        self
    }

    /// Open the edit modal for the selected food.
    ///
    pub fn begin_edit_selected(&mut self) -> &mut Self {
        match self.get_selected_food().cloned() {
            Some(food) => {
                self.begin_edit(&food);
            }
            None => {
                self.set_error(StateError::NoSelection.to_string());
            }
        }
        self
    }

    pub fn next_form_field(&mut self) -> &mut Self {
        if let Some(form) = self.modal.form_mut() {
            form.next_field();
        }
        self
    }

    pub fn previous_form_field(&mut self) -> &mut Self {
        if let Some(form) = self.modal.form_mut() {
            form.previous_field();
        }
        self
    }

    pub fn add_form_char(&mut self, c: char) -> &mut Self {
        if let Some(form) = self.modal.form_mut() {
            form.push_char(c);
        }
        self
    }

    pub fn remove_form_char(&mut self) -> &mut Self {
        if let Some(form) = self.modal.form_mut() {
            form.pop_char();
        }
        self
    }

    /// Submit the open modal. A valid form dispatches the matching network
    /// event and closes the modal; an invalid one stays open showing the
    /// validation error.
    ///
    pub fn submit_modal(&mut self) -> &mut Self {
        if !self.modal.is_open() {
            return self;
        }
        let result = match &self.modal {
            Modal::Closed => Ok(()),
            Modal::Add(form) => form.to_new_food().map(|food| {
                info!("Submitting new food '{}'...", food.name);
                self.dispatch(NetworkEvent::CreateFood { food });
            }),
            Modal::Edit { target, form } => {
                let target = *target;
                self.find_food(target)
                    .ok_or(StateError::FoodNotFound { id: target })
                    .and_then(|original| form.to_patch(original))
                    .and_then(|patch| self.request_update(target, &patch))
            }
        };
        match result {
            Ok(()) => {
                self.modal = Modal::Closed;
            }
            Err(e) => {
                if let Some(form) = self.modal.form_mut() {
                    form.set_error(Some(e.to_string()));
                }
            }
        }
        self
    }

    /// Merge the patch into the current record of the target and dispatch the
    /// merged record as an update.
    ///
    pub fn request_update(&self, id: FoodId, patch: &FoodPatch) -> Result<(), StateError> {
        let current = self.find_food(id).ok_or(StateError::FoodNotFound { id })?;
        let food = current.apply(patch);
        info!("Submitting update for food {}...", id);
        self.dispatch(NetworkEvent::UpdateFood { food });
        Ok(())
    }

    /// Flip availability of the selected food on the server.
    ///
    pub fn toggle_selected_availability(&mut self) -> &mut Self {
        match self.get_selected_food() {
            Some(food) => {
                let food = food.with_availability_toggled();
                self.dispatch(NetworkEvent::UpdateFood { food });
            }
            None => {
                self.set_error(StateError::NoSelection.to_string());
            }
        }
        self
    }

    // Deletion

    /// Ask for confirmation before deleting the selected food. Pressing
    /// delete again on the same food confirms.
    ///
    pub fn delete_selected_food(&mut self) -> &mut Self {
        let id = match self.get_selected_food() {
            Some(food) => food.id,
            None => return self,
        };
        if self.delete_confirmation == Some(id) {
            return self.confirm_delete();
        }
        self.delete_confirmation = Some(id);
        self
    }

    /// Dispatch deletion of the food awaiting confirmation.
    ///
    pub fn confirm_delete(&mut self) -> &mut Self {
        if let Some(id) = self.delete_confirmation.take() {
            self.dispatch(NetworkEvent::DeleteFood { id });
        }
        self
    }

    pub fn cancel_delete_confirmation(&mut self) -> &mut Self {
        self.delete_confirmation = None;
        self
    }

    pub fn has_delete_confirmation(&self) -> bool {
        self.delete_confirmation.is_some()
    }

    /// Return the food awaiting delete confirmation.
    ///
    pub fn get_delete_confirmation_food(&self) -> Option<&FoodItem> {
        self.delete_confirmation.and_then(|id| self.find_food(id))
    }

    // Status line

    pub fn get_status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    pub fn set_info(&mut self, message: String) -> &mut Self {
        self.status = Some(Status::Info(message));
        self
    }

    pub fn set_error(&mut self, message: String) -> &mut Self {
        self.status = Some(Status::Error(message));
        self
    }

    pub fn clear_status(&mut self) -> &mut Self {
        self.status = None;
        self
    }

    // Log pane

    /// Add a log entry to the bounded log buffer.
    ///
    pub fn add_log_entry(&mut self, entry: String) {
        if self.log_entries.len() == MAX_LOG_ENTRIES {
            self.log_entries.pop_front();
        }
        self.log_entries.push_back(entry);
    }

    /// Get log entries for rendering.
    ///
    pub fn get_log_entries(&self) -> &VecDeque<String> {
        &self.log_entries
    }

    pub fn toggle_log_pane(&mut self) -> &mut Self {
        self.show_log = !self.show_log;
        self
    }

    pub fn is_log_pane_visible(&self) -> bool {
        self.show_log
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FormField;
    use fake::{Fake, Faker};
    use std::sync::mpsc::{channel, Receiver};

    fn food(id: FoodId, price: &str) -> FoodItem {
        FoodItem {
            id,
            name: format!("Food {}", id),
            description: "Tasty".to_string(),
            price: price.to_string(),
            available: true,
            image: format!("https://example.com/{}.png", id),
        }
    }

    fn state_with_channel() -> (State, Receiver<NetworkEvent>) {
        let (tx, rx) = channel();
        let state = State::new(tx, "http://localhost:3333".to_string(), Theme::default());
        (state, rx)
    }

    fn type_text(state: &mut State, text: &str) {
        for c in text.chars() {
            state.add_form_char(c);
        }
    }

    #[test]
    fn set_foods_keeps_server_order() {
        let mut state = State::default();
        let foods: Vec<FoodItem> = vec![Faker.fake(), Faker.fake(), Faker.fake()];
        state.set_foods(foods.to_owned());
        assert_eq!(state.get_foods(), foods.as_slice());
        assert_eq!(*state.get_load_status(), LoadStatus::Loaded);
        assert_eq!(state.get_foods_list_state().selected(), Some(0));
    }

    #[test]
    fn set_foods_empty_clears_selection() {
        let mut state = State::default();
        state.set_foods(vec![]);
        assert_eq!(state.get_selected_food(), None);
    }

    #[test]
    fn load_foods_dispatches_and_marks_loading() {
        let (mut state, rx) = state_with_channel();
        state.load_foods();
        assert_eq!(*state.get_load_status(), LoadStatus::Loading);
        assert!(matches!(rx.try_recv(), Ok(NetworkEvent::LoadFoods)));
    }

    #[test]
    fn append_food_goes_last() {
        let mut state = State::default();
        state.set_foods(vec![food(1, "5.00")]);
        state.append_food(food(2, "10.00"));
        let ids: Vec<FoodId> = state.get_foods().iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn replace_food_touches_only_matching_entry() {
        let mut state = State::default();
        let original = vec![food(1, "5.00"), food(2, "7.00"), food(3, "9.00")];
        state.set_foods(original.clone());
        assert!(state.replace_food(food(2, "8.00")));
        assert_eq!(state.get_foods()[0], original[0]);
        assert_eq!(state.get_foods()[1].price, "8.00");
        assert_eq!(state.get_foods()[2], original[2]);
    }

    #[test]
    fn replace_food_unknown_id() {
        let mut state = State::default();
        state.set_foods(vec![food(1, "5.00")]);
        assert!(!state.replace_food(food(9, "1.00")));
        assert_eq!(state.get_foods(), &[food(1, "5.00")]);
    }

    #[test]
    fn remove_food_clamps_selection() {
        let mut state = State::default();
        state.set_foods(vec![food(1, "5.00"), food(2, "6.00")]);
        state.next_food();
        assert_eq!(state.get_selected_food().map(|f| f.id), Some(2));
        assert!(state.remove_food(2));
        assert_eq!(state.get_selected_food().map(|f| f.id), Some(1));
        assert!(!state.remove_food(2));
    }

    #[test]
    fn next_and_previous_food_wrap() {
        let mut state = State::default();
        state.set_foods(vec![food(1, "1.00"), food(2, "2.00"), food(3, "3.00")]);
        state.previous_food();
        assert_eq!(state.get_selected_food().map(|f| f.id), Some(3));
        state.next_food();
        assert_eq!(state.get_selected_food().map(|f| f.id), Some(1));
        state.next_food().next_food();
        assert_eq!(state.get_selected_food().map(|f| f.id), Some(3));
    }

    #[test]
    fn next_food_when_empty() {
        let mut state = State::default();
        state.next_food();
        assert_eq!(state.get_foods_list_state().selected(), None);
    }

    #[test]
    fn toggle_add_modal_twice_restores_state() {
        let mut state = State::default();
        state.toggle_add_modal();
        assert!(state.get_modal().is_add());
        state.toggle_add_modal();
        assert_eq!(*state.get_modal(), Modal::Closed);
    }

    #[test]
    fn toggle_add_modal_leaves_edit_modal_alone() {
        let mut state = State::default();
        let target = food(1, "5.00");
        state.set_foods(vec![target.clone()]);
        state.begin_edit(&target);
        let before = state.get_modal().clone();
        state.toggle_add_modal();
        assert_eq!(*state.get_modal(), before);
        state.toggle_add_modal();
        assert_eq!(*state.get_modal(), before);
    }

    #[test]
    fn toggle_edit_modal_closes_only_edit() {
        let mut state = State::default();
        state.toggle_edit_modal();
        assert_eq!(*state.get_modal(), Modal::Closed);

        state.toggle_add_modal().toggle_edit_modal();
        assert!(state.get_modal().is_add());

        let target = food(4, "5.00");
        state.begin_edit(&target).toggle_edit_modal();
        assert_eq!(*state.get_modal(), Modal::Closed);
    }

    #[test]
    fn begin_edit_sets_target_and_form_together() {
        let mut state = State::default();
        let target = food(3, "5.00");
        state.begin_edit(&target);
        assert_eq!(state.get_modal().edit_target(), Some(3));
        let form = state.get_modal().form().unwrap();
        assert_eq!(form.value(FormField::Price), "5.00");
        assert_eq!(form.value(FormField::Name), "Food 3");
    }

    #[test]
    fn begin_edit_selected_without_selection() {
        let mut state = State::default();
        state.begin_edit_selected();
        assert_eq!(*state.get_modal(), Modal::Closed);
        assert!(matches!(state.get_status(), Some(Status::Error(_))));
    }

    #[test]
    fn submit_add_modal_dispatches_create() {
        let (mut state, rx) = state_with_channel();
        state.toggle_add_modal();
        type_text(&mut state, "Cake");
        state.next_form_field();
        type_text(&mut state, "10.00");
        state.next_form_field();
        type_text(&mut state, "Sweet");
        state.submit_modal();

        assert_eq!(*state.get_modal(), Modal::Closed);
        match rx.try_recv() {
            Ok(NetworkEvent::CreateFood { food }) => {
                assert_eq!(food.name, "Cake");
                assert_eq!(food.price, "10.00");
                assert_eq!(food.description, "Sweet");
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn submit_invalid_add_modal_stays_open() {
        let (mut state, rx) = state_with_channel();
        state.toggle_add_modal().submit_modal();
        assert!(state.get_modal().is_add());
        assert!(state.get_modal().form().unwrap().error().is_some());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn submit_edit_modal_merges_into_current_record() {
        let (mut state, rx) = state_with_channel();
        state.set_foods(vec![food(1, "5.00"), food(2, "7.00")]);
        state.begin_edit_selected();
        while state.get_modal().form().unwrap().focus() != FormField::Price {
            state.next_form_field();
        }
        for _ in 0..4 {
            state.remove_form_char();
        }
        type_text(&mut state, "6.00");
        state.submit_modal();

        assert_eq!(*state.get_modal(), Modal::Closed);
        match rx.try_recv() {
            Ok(NetworkEvent::UpdateFood { food: sent }) => {
                assert_eq!(sent, FoodItem { price: "6.00".to_string(), ..food(1, "5.00") });
            }
            other => panic!("unexpected event {:?}", other),
        }
        // Nothing changes locally until the server confirms.
        assert_eq!(state.get_foods()[0].price, "5.00");
    }

    #[test]
    fn submit_edit_modal_for_vanished_food() {
        let (mut state, rx) = state_with_channel();
        let target = food(1, "5.00");
        state.set_foods(vec![target.clone()]);
        state.begin_edit(&target);
        state.add_form_char('!');
        state.remove_food(1);
        state.submit_modal();

        assert_eq!(state.get_modal().edit_target(), Some(1));
        let error = state.get_modal().form().unwrap().error().unwrap();
        assert!(error.contains("Food not found"));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn request_update_unknown_food() {
        let state = State::default();
        let result = state.request_update(5, &FoodPatch::default());
        assert_eq!(result, Err(StateError::FoodNotFound { id: 5 }));
    }

    #[test]
    fn toggle_selected_availability_dispatches_flipped_record() {
        let (mut state, rx) = state_with_channel();
        state.set_foods(vec![food(1, "5.00")]);
        state.toggle_selected_availability();
        match rx.try_recv() {
            Ok(NetworkEvent::UpdateFood { food: sent }) => assert!(!sent.available),
            other => panic!("unexpected event {:?}", other),
        }
        assert!(state.get_foods()[0].available);
    }

    #[test]
    fn delete_requires_confirmation() {
        let (mut state, rx) = state_with_channel();
        state.set_foods(vec![food(1, "5.00"), food(2, "6.00")]);
        state.delete_selected_food();
        assert!(state.has_delete_confirmation());
        assert_eq!(state.get_delete_confirmation_food().map(|f| f.id), Some(1));
        assert!(rx.try_recv().is_err());

        state.confirm_delete();
        assert!(!state.has_delete_confirmation());
        assert!(matches!(rx.try_recv(), Ok(NetworkEvent::DeleteFood { id: 1 })));
        // The entry stays until the server confirms.
        assert_eq!(state.get_foods().len(), 2);
    }

    #[test]
    fn delete_pressed_twice_confirms() {
        let (mut state, rx) = state_with_channel();
        state.set_foods(vec![food(1, "5.00")]);
        state.delete_selected_food().delete_selected_food();
        assert!(matches!(rx.try_recv(), Ok(NetworkEvent::DeleteFood { id: 1 })));
    }

    #[test]
    fn reload_without_armed_food_disarms_delete() {
        let (mut state, rx) = state_with_channel();
        state.set_foods(vec![food(1, "5.00"), food(2, "6.00")]);
        state.delete_selected_food();
        state.set_foods(vec![food(2, "6.00")]);
        assert!(!state.has_delete_confirmation());
        state.confirm_delete();
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn reload_keeping_armed_food_keeps_confirmation() {
        let mut state = State::default();
        state.set_foods(vec![food(1, "5.00")]);
        state.delete_selected_food();
        state.set_foods(vec![food(1, "5.00"), food(2, "6.00")]);
        assert_eq!(state.get_delete_confirmation_food().map(|f| f.id), Some(1));
    }

    #[test]
    fn edit_with_untouched_odd_price_sends_it_unchanged() {
        let (mut state, rx) = state_with_channel();
        state.set_foods(vec![food(1, "19.9")]);
        state.begin_edit_selected();
        type_text(&mut state, "!");
        state.submit_modal();

        assert_eq!(*state.get_modal(), Modal::Closed);
        match rx.try_recv() {
            Ok(NetworkEvent::UpdateFood { food: sent }) => {
                assert_eq!(sent.name, "Food 1!");
                assert_eq!(sent.price, "19.9");
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn cancel_delete_confirmation() {
        let (mut state, rx) = state_with_channel();
        state.set_foods(vec![food(1, "5.00")]);
        state.delete_selected_food().cancel_delete_confirmation();
        assert!(!state.has_delete_confirmation());
        state.confirm_delete();
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn status_line() {
        let mut state = State::default();
        state.set_error("boom".to_string());
        assert_eq!(state.get_status(), Some(&Status::Error("boom".to_string())));
        state.set_info("ok".to_string());
        assert_eq!(state.get_status(), Some(&Status::Info("ok".to_string())));
        state.clear_status();
        assert_eq!(state.get_status(), None);
    }

    #[test]
    fn log_entries_are_bounded() {
        let mut state = State::default();
        for i in 0..(MAX_LOG_ENTRIES + 5) {
            state.add_log_entry(format!("entry {}", i));
        }
        assert_eq!(state.get_log_entries().len(), MAX_LOG_ENTRIES);
        assert_eq!(state.get_log_entries()[0], "entry 5");
        assert_eq!(
            state.get_log_entries().back().map(String::as_str),
            Some("entry 1004")
        );
    }

    #[test]
    fn toggle_log_pane() {
        let mut state = State::default();
        assert!(!state.is_log_pane_visible());
        state.toggle_log_pane();
        assert!(state.is_log_pane_visible());
    }

    #[test]
    fn advance_spinner_index_wraps() {
        let mut state = State::default();
        for _ in 0..SPINNER_FRAME_COUNT {
            state.advance_spinner_index();
        }
        assert_eq!(*state.get_spinner_index(), 0);
    }
}
