#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("DEV API error [{status}]: {body}")]
    Api { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to parse articles payload: {0}")]
    Payload(String),
}
