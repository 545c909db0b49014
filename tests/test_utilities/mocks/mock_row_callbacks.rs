use alertrow::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock RowCallbacks recording every call
#[derive(Default, Clone)]
pub struct MockRowCallbacks {
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl MockRowCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl RowCallbacks for MockRowCallbacks {
    fn after_update(&self) {
        self.calls.lock().unwrap().push("after_update".to_string());
    }

    fn set_menu_open(&self, open: bool) {
        self.calls
            .lock()
            .unwrap()
            .push(format!("set_menu_open({})", open));
    }
}
