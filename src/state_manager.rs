use crate::itinerary::ItinerarySet;

use chrono::DateTime;
use chrono_tz::Tz;

use std::sync::{RwLock, RwLockReadGuard};

/// The three terminal states of one view lifetime. A load failure does
/// not distinguish causes; whatever went wrong collapses to `Error`.
#[derive(Clone, Debug)]
pub enum ViewState {
    Loading,
    Error,
    Ready {
        itinerary: ItinerarySet,
        selected_day: Option<String>,
        loaded_at: DateTime<Tz>,
    },
}

/// Holds the single view state. The state is only ever swapped out
/// wholesale; nothing mutates an `ItinerarySet` in place. The lock
/// exists because web handlers run on a thread pool, not because any
/// partial update is possible.
pub struct ViewStateManager {
    state: RwLock<ViewState>,
}

impl ViewStateManager {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(ViewState::Loading),
        }
    }

    pub fn read(&self) -> RwLockReadGuard<ViewState> {
        self.state.read().unwrap()
    }

    pub fn replace(&self, new_state: ViewState) {
        let mut state = self.state.write().unwrap();
        *state = new_state;
    }

    /// Replaces the selected day label. Outside `Ready` there is nothing
    /// to select and the call is a no-op.
    pub fn select_day(&self, label: &str) {
        let mut state = self.state.write().unwrap();
        if let ViewState::Ready { selected_day, .. } = &mut *state {
            *selected_day = Some(label.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::itinerary::FieldNames;

    use chrono::offset::Utc;
    use chrono::TimeZone;
    use chrono_tz::Europe::Budapest;

    fn ready(selected_day: Option<&str>) -> ViewState {
        ViewState::Ready {
            itinerary: ItinerarySet::new(FieldNames::default()),
            selected_day: selected_day.map(str::to_string),
            loaded_at: Budapest.from_utc_datetime(&Utc::now().naive_utc()),
        }
    }

    #[test]
    fn starts_in_loading() {
        let manager = ViewStateManager::new();
        assert!(matches!(&*manager.read(), ViewState::Loading));
    }

    #[test]
    fn replace_swaps_the_whole_state() {
        let manager = ViewStateManager::new();
        manager.replace(ViewState::Error);
        assert!(matches!(&*manager.read(), ViewState::Error));

        manager.replace(ready(Some("Domingo")));
        match &*manager.read() {
            ViewState::Ready { selected_day, .. } => {
                assert_eq!(selected_day.as_deref(), Some("Domingo"));
            }
            other => panic!("unexpected state {:?}", other),
        };
    }

    #[test]
    fn select_day_replaces_the_label() {
        let manager = ViewStateManager::new();
        manager.replace(ready(Some("Domingo")));
        manager.select_day("Lunes");
        match &*manager.read() {
            ViewState::Ready { selected_day, .. } => {
                assert_eq!(selected_day.as_deref(), Some("Lunes"));
            }
            other => panic!("unexpected state {:?}", other),
        };
    }

    #[test]
    fn select_day_outside_ready_is_a_no_op() {
        let manager = ViewStateManager::new();
        manager.select_day("Lunes");
        assert!(matches!(&*manager.read(), ViewState::Loading));

        manager.replace(ViewState::Error);
        manager.select_day("Lunes");
        assert!(matches!(&*manager.read(), ViewState::Error));
    }
}
