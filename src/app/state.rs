use serde::{Deserialize, Serialize};

/// Placeholder stored in `current_effect` until an effect is chosen ("none").
pub const NO_EFFECT: &str = "отсутствует";

/// Sentinel stored in `cur_file_id` while no file record is selected.
pub const NO_FILE_ID: i64 = -1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub current_effect: String,
    pub current_file: String,
    pub init_file: String,
    pub img_upload_status: bool,
    pub modal_box_status: bool,
    pub url_init_file: String,
    pub url_cur_file: String,
    pub res_width: i64,
    pub res_height: i64,
    pub active_filter: String,
    pub cur_file_id: i64,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            current_effect: NO_EFFECT.to_string(),
            current_file: String::new(),
            init_file: String::new(),
            img_upload_status: false,
            modal_box_status: false,
            url_init_file: String::new(),
            url_cur_file: String::new(),
            res_width: 0,
            res_height: 0,
            active_filter: String::new(),
            cur_file_id: NO_FILE_ID,
        }
    }
}

impl AppState {
    pub fn cur_effect(&self) -> &str {
        &self.current_effect
    }

    pub fn cur_file(&self) -> &str {
        &self.current_file
    }

    pub fn init_file(&self) -> &str {
        &self.init_file
    }

    pub fn cur_status(&self) -> bool {
        self.img_upload_status
    }

    pub fn modal_status(&self) -> bool {
        self.modal_box_status
    }

    pub fn url_init_file(&self) -> &str {
        &self.url_init_file
    }

    pub fn url_cur_file(&self) -> &str {
        &self.url_cur_file
    }

    pub fn cur_resolution_width(&self) -> i64 {
        self.res_width
    }

    pub fn cur_resolution_height(&self) -> i64 {
        self.res_height
    }

    pub fn act_filter(&self) -> &str {
        &self.active_filter
    }

    pub fn cur_file_id(&self) -> i64 {
        self.cur_file_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_matches_startup_values() {
        let state = AppState::default();
        assert_eq!(state.cur_effect(), "отсутствует");
        assert_eq!(state.cur_file(), "");
        assert_eq!(state.init_file(), "");
        assert!(!state.cur_status());
        assert!(!state.modal_status());
        assert_eq!(state.url_init_file(), "");
        assert_eq!(state.url_cur_file(), "");
        assert_eq!(state.cur_resolution_width(), 0);
        assert_eq!(state.cur_resolution_height(), 0);
        assert_eq!(state.act_filter(), "");
        assert_eq!(state.cur_file_id(), -1);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let value = serde_json::to_value(AppState::default()).expect("serialize state");
        assert_eq!(value["currentEffect"], "отсутствует");
        assert_eq!(value["curFileId"], -1);
        assert_eq!(value["modalBoxStatus"], false);
    }
}
