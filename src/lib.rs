//! Personal finance tracker core.
//!
//! A single-snapshot state container updated through a pure reducer,
//! with synchronous subscriber notification, auto-persistence, derived
//! reports, and an SVG donut chart renderer.
//!
//! # Example
//!
//! ```rust
//! use tallybook::action::Action;
//! use tallybook::models::Theme;
//! use tallybook::storage::InMemoryStorage;
//! use tallybook::store::Store;
//!
//! let store = Store::open(InMemoryStorage::new()).unwrap();
//! store.dispatch(Action::SetTheme(Theme::Light));
//! assert_eq!(store.state().theme, Theme::Light);
//! ```

pub mod action;
pub mod chart;
pub mod error;
pub mod interchange;
pub mod models;
pub mod reducer;
pub mod storage;
pub mod store;
pub mod views;
