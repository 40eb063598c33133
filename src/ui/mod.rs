//! Interactive terminal demo: a simulated fetch shown through a
//! [`crate::LazyLayout`].

pub mod app;
pub mod events;
pub mod feed;
pub mod fetch;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
