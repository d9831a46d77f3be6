use wasm_bindgen::JsValue;

/// Result alias that carries [`ThreadsError`].
pub type Result<T> = std::result::Result<T, ThreadsError>;

/// Reasons the background could not be set up.
#[derive(Debug, thiserror::Error)]
pub enum ThreadsError {
    /// No `window`/`document`, e.g. running in a worker.
    #[error("no {0} available")]
    MissingGlobal(&'static str),
    #[error("WebGL2 is not supported")]
    ContextUnavailable,
    /// GL refused to allocate an object.
    #[error("failed to create {0}")]
    Resource(&'static str),
    #[error("shader compilation failed: {0}")]
    ShaderCompile(String),
    #[error("program link failed: {0}")]
    ProgramLink(String),
    #[error("attribute `{0}` not found in program")]
    MissingAttribute(&'static str),
    /// Exception raised by a DOM call.
    #[error("{0}")]
    Js(String),
}

impl From<JsValue> for ThreadsError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<ThreadsError> for JsValue {
    fn from(value: ThreadsError) -> Self {
        JsValue::from_str(&value.to_string())
    }
}
