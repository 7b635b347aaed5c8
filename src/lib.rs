#![allow(clippy::implicit_hasher)]
#![allow(unknown_lints)]

pub mod components;
pub mod constants;
pub mod logging;
pub mod map_view;
pub mod models;
pub mod registry;

pub use components::app::App;
pub use map_view::RailwayMap;
