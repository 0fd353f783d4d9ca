use crate::app::mutations::Mutation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    ChangeEffect(String),
    ChangeCurFile(String),
    ChangeInitFile(String),
    ChangeStatus(bool),
    ChangeModalStatus(bool),
    ChangeUrlInitFile(String),
    ChangeUrlCurFile(String),
    ChangeResolutionWidth(i64),
    ChangeResolutionHeight(i64),
    ChangeActiveFilter(String),
    ChangeCurFileId(i64),
    Reset,
    Quit,
}

impl From<Mutation> for AppEvent {
    fn from(mutation: Mutation) -> Self {
        match mutation {
            Mutation::ChangeEffect(effect) => Self::ChangeEffect(effect),
            Mutation::ChangeCurFile(file) => Self::ChangeCurFile(file),
            Mutation::ChangeInitFile(file) => Self::ChangeInitFile(file),
            Mutation::ChangeStatus(status) => Self::ChangeStatus(status),
            Mutation::ChangeModalStatus(status) => Self::ChangeModalStatus(status),
            Mutation::ChangeUrlInitFile(url) => Self::ChangeUrlInitFile(url),
            Mutation::ChangeUrlCurFile(url) => Self::ChangeUrlCurFile(url),
            Mutation::ChangeResWidth(width) => Self::ChangeResolutionWidth(width),
            Mutation::ChangeResHeight(height) => Self::ChangeResolutionHeight(height),
            Mutation::ChangeActFilter(filter) => Self::ChangeActiveFilter(filter),
            Mutation::ChangeCurFileId(id) => Self::ChangeCurFileId(id),
        }
    }
}
