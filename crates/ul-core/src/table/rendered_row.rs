use crate::{Intent, RowShade, UserRecord};

/// One body row of the rendered table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    pub id: String,
    pub thumbnail: String,
    pub first: String,
    pub last: String,
    pub country: String,
    pub shade: RowShade,
}

impl RenderedRow {
    pub fn from_record(record: &UserRecord, shade: RowShade) -> Self {
        Self {
            id: record.id().to_string(),
            thumbnail: record.thumbnail().to_string(),
            first: record.first_name().to_string(),
            last: record.last_name().to_string(),
            country: record.country().to_string(),
            shade,
        }
    }

    /// Intent emitted by the row's delete action
    pub fn delete_intent(&self) -> Intent {
        Intent::Delete(self.id.clone())
    }
}
