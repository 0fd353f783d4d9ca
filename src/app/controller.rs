use log::info;

use crate::app::error::StoreError;
use crate::app::events::AppEvent;
use crate::app::field::Field;
use crate::app::mutations::Mutation;
use crate::app::store::Store;
use crate::infra::config::AppConfig;

pub struct ApplicationController {
    config: AppConfig,
    store: Store,
    running: bool,
}

impl ApplicationController {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            store: Store::new(),
            running: false,
        }
    }

    pub fn bootstrap(&mut self) {
        self.store.reset();
        self.running = true;
        info!(
            "style-lab session started (log filter: {}, pretty json: {})",
            self.config.log_filter, self.config.pretty_json
        );
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Handle for UI components; clones share the controller's record.
    pub fn store(&self) -> Store {
        self.store.clone()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn dispatch(&mut self, event: AppEvent) {
        let store = &self.store;
        match event {
            AppEvent::ChangeEffect(effect) => store.change_effect(effect),
            AppEvent::ChangeCurFile(file) => store.change_cur_file(file),
            AppEvent::ChangeInitFile(file) => store.change_init_file(file),
            AppEvent::ChangeStatus(status) => store.change_status(status),
            AppEvent::ChangeModalStatus(status) => store.change_modal_status(status),
            AppEvent::ChangeUrlInitFile(url) => store.change_url_init_file(url),
            AppEvent::ChangeUrlCurFile(url) => store.change_url_cur_file(url),
            AppEvent::ChangeResolutionWidth(width) => store.change_resolution_width(width),
            AppEvent::ChangeResolutionHeight(height) => store.change_resolution_height(height),
            AppEvent::ChangeActiveFilter(filter) => store.change_active_filter(filter),
            AppEvent::ChangeCurFileId(id) => store.change_cur_file_id(id),
            AppEvent::Reset => {
                info!("resetting session state");
                store.reset();
            }
            AppEvent::Quit => {
                info!("style-lab session ended");
                self.running = false;
            }
        }
    }

    /// Parses `FIELD=VALUE` (field named by its getter, e.g. `CUR_FILE_ID=3`)
    /// into the event that writes it. Text values are kept verbatim.
    pub fn parse_assignment(assignment: &str) -> Result<AppEvent, StoreError> {
        let (name, raw) = assignment
            .split_once('=')
            .ok_or_else(|| StoreError::MalformedAssignment(assignment.to_string()))?;
        let field: Field = name.parse()?;
        let value = field.parse_value(raw)?;
        Ok(Mutation::assign(field, value)?.into())
    }

    pub fn apply_assignment(&mut self, assignment: &str) -> Result<(), StoreError> {
        let event = Self::parse_assignment(assignment)?;
        self.dispatch(event);
        Ok(())
    }
}
