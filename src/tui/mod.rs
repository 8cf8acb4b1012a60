pub mod form;
pub mod theme;
pub mod widgets;

pub use form::run_wizard;

use crate::codec::encode_state;
use crate::schema::AnswerSet;
use crate::store::{StoreListener, WizardSnapshot};
use std::cell::RefCell;
use std::rc::Rc;

/// Keeps a shareable query string in step with the store
pub struct QuerySync {
    query: Rc<RefCell<String>>,
}

impl QuerySync {
    /// The listener and a handle to the query it maintains
    pub fn new(initial: &AnswerSet) -> (Self, Rc<RefCell<String>>) {
        let query = Rc::new(RefCell::new(encode_state(initial)));
        (
            Self {
                query: Rc::clone(&query),
            },
            query,
        )
    }
}

impl StoreListener for QuerySync {
    fn on_change(&self, snapshot: &WizardSnapshot) {
        *self.query.borrow_mut() = encode_state(&snapshot.data);
    }
}
