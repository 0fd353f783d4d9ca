pub mod controller;
pub mod error;
pub mod events;
pub mod field;
pub mod mutations;
pub mod state;
pub mod store;
