use thiserror::Error;

/// Startup/server errors. Request handling never produces these: `/ask`
/// reports failures inside its 200 response body.
#[derive(Debug, Error)]
pub enum AppError {
    // --- Boot / config ---
    #[error(transparent)]
    Config(#[from] ai_llm_service::AiLlmError),

    // --- IO / network / server ---
    #[error("failed to bind listener on {addr}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error")]
    Server(#[source] std::io::Error),
}

/// Handy result alias used by startup code.
pub type AppResult<T> = Result<T, AppError>;
