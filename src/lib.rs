pub mod app;
pub mod attempt;
pub mod auth;
pub mod clock;
pub mod daily;
pub mod data;
pub mod events;
pub mod model;
pub mod ui;
pub mod view_models;

pub use app::GreenPathApp;
