//! Reactive alert store and the presenter bound to it
mod alert_list_presenter;
mod alert_store;

pub use alert_list_presenter::AlertListPresenter;
pub use alert_store::{AlertStore, SubscriptionId};
