use crate::app::error::StoreError;
use crate::app::field::{Field, FieldValue};
use crate::app::state::AppState;

/// A single unconditional field overwrite. Applying one never touches any
/// other field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    ChangeEffect(String),
    ChangeCurFile(String),
    ChangeInitFile(String),
    ChangeStatus(bool),
    ChangeModalStatus(bool),
    ChangeUrlInitFile(String),
    ChangeUrlCurFile(String),
    ChangeResWidth(i64),
    ChangeResHeight(i64),
    ChangeActFilter(String),
    ChangeCurFileId(i64),
}

impl Mutation {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ChangeEffect(_) => "CHANGE_EFF",
            Self::ChangeCurFile(_) => "CHANGE_CUR_FILE",
            Self::ChangeInitFile(_) => "CHANGE_INIT_FILE",
            Self::ChangeStatus(_) => "CHANGE_STATUS",
            Self::ChangeModalStatus(_) => "CHANGE_MODAL_STATUS",
            Self::ChangeUrlInitFile(_) => "CHANGE_URL_INIT_FILE",
            Self::ChangeUrlCurFile(_) => "CHANGE_URL_CUR_FILE",
            Self::ChangeResWidth(_) => "CHANGE_RES_WIDTH",
            Self::ChangeResHeight(_) => "CHANGE_RES_HEIGHT",
            Self::ChangeActFilter(_) => "CHANGE_ACT_FILTER",
            Self::ChangeCurFileId(_) => "CHANGE_CUR_FILE_ID",
        }
    }

    pub fn field(&self) -> Field {
        match self {
            Self::ChangeEffect(_) => Field::CurrentEffect,
            Self::ChangeCurFile(_) => Field::CurrentFile,
            Self::ChangeInitFile(_) => Field::InitFile,
            Self::ChangeStatus(_) => Field::ImgUploadStatus,
            Self::ChangeModalStatus(_) => Field::ModalBoxStatus,
            Self::ChangeUrlInitFile(_) => Field::UrlInitFile,
            Self::ChangeUrlCurFile(_) => Field::UrlCurFile,
            Self::ChangeResWidth(_) => Field::ResWidth,
            Self::ChangeResHeight(_) => Field::ResHeight,
            Self::ChangeActFilter(_) => Field::ActiveFilter,
            Self::ChangeCurFileId(_) => Field::CurFileId,
        }
    }

    /// Builds the mutation for a dynamically named field. Fails only when the
    /// value's kind differs from the field's declared type.
    pub fn assign(field: Field, value: FieldValue) -> Result<Self, StoreError> {
        let mutation = match (field, value) {
            (Field::CurrentEffect, FieldValue::Text(v)) => Self::ChangeEffect(v),
            (Field::CurrentFile, FieldValue::Text(v)) => Self::ChangeCurFile(v),
            (Field::InitFile, FieldValue::Text(v)) => Self::ChangeInitFile(v),
            (Field::ImgUploadStatus, FieldValue::Flag(v)) => Self::ChangeStatus(v),
            (Field::ModalBoxStatus, FieldValue::Flag(v)) => Self::ChangeModalStatus(v),
            (Field::UrlInitFile, FieldValue::Text(v)) => Self::ChangeUrlInitFile(v),
            (Field::UrlCurFile, FieldValue::Text(v)) => Self::ChangeUrlCurFile(v),
            (Field::ResWidth, FieldValue::Number(v)) => Self::ChangeResWidth(v),
            (Field::ResHeight, FieldValue::Number(v)) => Self::ChangeResHeight(v),
            (Field::ActiveFilter, FieldValue::Text(v)) => Self::ChangeActFilter(v),
            (Field::CurFileId, FieldValue::Number(v)) => Self::ChangeCurFileId(v),
            (field, _) => {
                return Err(StoreError::TypeMismatch {
                    field: field.name(),
                    expected: field.kind().describe(),
                })
            }
        };
        Ok(mutation)
    }

    pub fn apply(self, state: &mut AppState) {
        match self {
            Self::ChangeEffect(effect) => state.current_effect = effect,
            Self::ChangeCurFile(file) => state.current_file = file,
            Self::ChangeInitFile(file) => state.init_file = file,
            Self::ChangeStatus(status) => state.img_upload_status = status,
            Self::ChangeModalStatus(status) => state.modal_box_status = status,
            Self::ChangeUrlInitFile(url) => state.url_init_file = url,
            Self::ChangeUrlCurFile(url) => state.url_cur_file = url,
            Self::ChangeResWidth(width) => state.res_width = width,
            Self::ChangeResHeight(height) => state.res_height = height,
            Self::ChangeActFilter(filter) => state.active_filter = filter,
            Self::ChangeCurFileId(id) => state.cur_file_id = id,
        }
    }
}
