//! Browsing pages
//!
//! Each page owns a [`ViewScope`](crate::ViewScope) created with it; dropping
//! the page cancels whatever it is still fetching.

pub mod genre;
pub mod home;
pub mod radio;
pub mod search;

pub use genre::GenrePage;
pub use home::{HomePage, Section};
pub use radio::RadioPage;
pub use search::{SearchPage, Suggestions};
