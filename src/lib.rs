pub mod app;
pub mod infra;

pub use app::controller::ApplicationController;
pub use app::error::StoreError;
pub use app::events::AppEvent;
pub use app::field::{Field, FieldKind, FieldValue};
pub use app::mutations::Mutation;
pub use app::state::{AppState, NO_EFFECT, NO_FILE_ID};
pub use app::store::Store;
pub use infra::config::{AppConfig, ConfigError};
