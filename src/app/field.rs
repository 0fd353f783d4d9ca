use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

use crate::app::error::StoreError;
use crate::app::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    CurrentEffect,
    CurrentFile,
    InitFile,
    ImgUploadStatus,
    ModalBoxStatus,
    UrlInitFile,
    UrlCurFile,
    ResWidth,
    ResHeight,
    ActiveFilter,
    CurFileId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Flag,
    Number,
}

impl FieldKind {
    pub fn describe(self) -> &'static str {
        match self {
            Self::Text => "string",
            Self::Flag => "boolean",
            Self::Number => "integer",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    Number(i64),
}

impl FieldValue {
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Text(_) => FieldKind::Text,
            Self::Flag(_) => FieldKind::Flag,
            Self::Number(_) => FieldKind::Number,
        }
    }
}

impl Display for FieldValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(value) => write!(f, "{value:?}"),
            Self::Flag(value) => write!(f, "{value}"),
            Self::Number(value) => write!(f, "{value}"),
        }
    }
}

impl Field {
    pub const ALL: [Field; 11] = [
        Field::CurrentEffect,
        Field::CurrentFile,
        Field::InitFile,
        Field::ImgUploadStatus,
        Field::ModalBoxStatus,
        Field::UrlInitFile,
        Field::UrlCurFile,
        Field::ResWidth,
        Field::ResHeight,
        Field::ActiveFilter,
        Field::CurFileId,
    ];

    /// Getter name the UI components read the field by.
    pub fn name(self) -> &'static str {
        match self {
            Self::CurrentEffect => "CUR_EFFECT",
            Self::CurrentFile => "CUR_FILE",
            Self::InitFile => "INIT_FILE",
            Self::ImgUploadStatus => "CUR_STATUS",
            Self::ModalBoxStatus => "MODAL_STATUS",
            Self::UrlInitFile => "URL_INIT_FILE",
            Self::UrlCurFile => "URL_CUR_FILE",
            Self::ResWidth => "CUR_RESOLUTION_WIDTH",
            Self::ResHeight => "CUR_RESOLUTION_HEIGHT",
            Self::ActiveFilter => "ACT_FILTER",
            Self::CurFileId => "CUR_FILE_ID",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Self::ImgUploadStatus | Self::ModalBoxStatus => FieldKind::Flag,
            Self::ResWidth | Self::ResHeight | Self::CurFileId => FieldKind::Number,
            _ => FieldKind::Text,
        }
    }

    pub fn read(self, state: &AppState) -> FieldValue {
        match self {
            Self::CurrentEffect => FieldValue::Text(state.cur_effect().to_string()),
            Self::CurrentFile => FieldValue::Text(state.cur_file().to_string()),
            Self::InitFile => FieldValue::Text(state.init_file().to_string()),
            Self::ImgUploadStatus => FieldValue::Flag(state.cur_status()),
            Self::ModalBoxStatus => FieldValue::Flag(state.modal_status()),
            Self::UrlInitFile => FieldValue::Text(state.url_init_file().to_string()),
            Self::UrlCurFile => FieldValue::Text(state.url_cur_file().to_string()),
            Self::ResWidth => FieldValue::Number(state.cur_resolution_width()),
            Self::ResHeight => FieldValue::Number(state.cur_resolution_height()),
            Self::ActiveFilter => FieldValue::Text(state.act_filter().to_string()),
            Self::CurFileId => FieldValue::Number(state.cur_file_id()),
        }
    }

    /// Converts raw text into the field's declared type. Only the type is
    /// checked; any value of that type is accepted, negative numbers included.
    pub fn parse_value(self, raw: &str) -> Result<FieldValue, StoreError> {
        let invalid = || StoreError::InvalidValue {
            field: self.name(),
            value: raw.to_string(),
            expected: self.kind().describe(),
        };

        match self.kind() {
            FieldKind::Text => Ok(FieldValue::Text(raw.to_string())),
            FieldKind::Flag => raw
                .trim()
                .parse::<bool>()
                .map(FieldValue::Flag)
                .map_err(|_| invalid()),
            FieldKind::Number => raw
                .trim()
                .parse::<i64>()
                .map(FieldValue::Number)
                .map_err(|_| invalid()),
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = StoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = value.trim();
        Field::ALL
            .into_iter()
            .find(|field| field.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| StoreError::UnknownField(wanted.to_string()))
    }
}
