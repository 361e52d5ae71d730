pub mod openai;
pub mod prompts;

use thiserror::Error;

/// Failure modes of a single oracle call. All of these are recoverable at
/// the scoring level: the affected dimension is left unscored and the
/// session continues. Missing credentials are caught earlier, at startup.
#[derive(Error, Debug)]
pub enum OracleError {
    #[error("oracle quota or rate limit exhausted; switch to manual scoring or retry later")]
    RateLimited,

    #[error("oracle request failed with HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("oracle unreachable: {0}")]
    Network(String),

    #[error("oracle response could not be decoded: {0}")]
    Decode(String),

    #[error("oracle returned an empty response")]
    EmptyResponse,
}

/// The external scoring oracle: a text-completion capability taking a
/// system-level instruction and user content, returning free-form text.
pub trait ScoringOracle {
    fn complete(&self, system_prompt: &str, user_content: &str) -> Result<String, OracleError>;
}
