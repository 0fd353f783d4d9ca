use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::debug;

use crate::app::field::{Field, FieldValue};
use crate::app::mutations::Mutation;
use crate::app::state::AppState;

/// Shared handle to the session's `AppState`.
///
/// Clones point at the same record, so a component holding a clone observes
/// every write made through any other clone as soon as the write returns.
/// Reads go through the getters, writes through the `change_*` actions, which
/// forward their argument unchanged to `commit`.
#[derive(Debug, Clone, Default)]
pub struct Store {
    state: Arc<RwLock<AppState>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: AppState) -> Self {
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    // Every mutation is a single field assignment, so a poisoned record is still whole.
    fn read(&self) -> RwLockReadGuard<'_, AppState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, AppState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> AppState {
        self.read().clone()
    }

    pub fn get(&self, field: Field) -> FieldValue {
        field.read(&self.read())
    }

    pub fn commit(&self, mutation: Mutation) {
        debug!("commit {} ({})", mutation.name(), mutation.field());
        mutation.apply(&mut self.write());
    }

    pub fn reset(&self) {
        *self.write() = AppState::default();
    }

    pub fn cur_effect(&self) -> String {
        self.read().cur_effect().to_string()
    }

    pub fn cur_file(&self) -> String {
        self.read().cur_file().to_string()
    }

    pub fn init_file(&self) -> String {
        self.read().init_file().to_string()
    }

    pub fn cur_status(&self) -> bool {
        self.read().cur_status()
    }

    pub fn modal_status(&self) -> bool {
        self.read().modal_status()
    }

    pub fn url_init_file(&self) -> String {
        self.read().url_init_file().to_string()
    }

    pub fn url_cur_file(&self) -> String {
        self.read().url_cur_file().to_string()
    }

    pub fn cur_resolution_width(&self) -> i64 {
        self.read().cur_resolution_width()
    }

    pub fn cur_resolution_height(&self) -> i64 {
        self.read().cur_resolution_height()
    }

    pub fn act_filter(&self) -> String {
        self.read().act_filter().to_string()
    }

    pub fn cur_file_id(&self) -> i64 {
        self.read().cur_file_id()
    }

    pub fn change_effect(&self, effect: impl Into<String>) {
        self.commit(Mutation::ChangeEffect(effect.into()));
    }

    pub fn change_cur_file(&self, file: impl Into<String>) {
        self.commit(Mutation::ChangeCurFile(file.into()));
    }

    pub fn change_init_file(&self, file: impl Into<String>) {
        self.commit(Mutation::ChangeInitFile(file.into()));
    }

    pub fn change_status(&self, status: bool) {
        self.commit(Mutation::ChangeStatus(status));
    }

    pub fn change_modal_status(&self, modal_status: bool) {
        self.commit(Mutation::ChangeModalStatus(modal_status));
    }

    pub fn change_url_init_file(&self, url: impl Into<String>) {
        self.commit(Mutation::ChangeUrlInitFile(url.into()));
    }

    pub fn change_url_cur_file(&self, url: impl Into<String>) {
        self.commit(Mutation::ChangeUrlCurFile(url.into()));
    }

    pub fn change_resolution_width(&self, width: i64) {
        self.commit(Mutation::ChangeResWidth(width));
    }

    pub fn change_resolution_height(&self, height: i64) {
        self.commit(Mutation::ChangeResHeight(height));
    }

    pub fn change_active_filter(&self, filter: impl Into<String>) {
        self.commit(Mutation::ChangeActFilter(filter.into()));
    }

    pub fn change_cur_file_id(&self, id: i64) {
        self.commit(Mutation::ChangeCurFileId(id));
    }
}
