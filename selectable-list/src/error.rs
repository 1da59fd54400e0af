#[derive(Debug, thiserror::Error)]
pub enum ListError {
    #[error("Item '{id}' already exists in the list")]
    DuplicateId { id: String },

    #[error("Item '{id}' is a leaf element and cannot hold a checkbox or action panel")]
    NotAContainer { id: String },

    #[error("Invalid list options: {source}")]
    InvalidOptions {
        #[from]
        source: serde_json::Error,
    },
}
