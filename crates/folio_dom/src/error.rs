/// Errors that can occur when touching the browser DOM.
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    /// No global `window` object (not running in a browser context)
    #[error("no global window object")]
    NoWindow,

    /// `window.document` is missing
    #[error("no document in window")]
    NoDocument,

    /// The document has no `<body>` to mount into
    #[error("document has no body")]
    NoBody,

    /// A JS-side DOM call failed
    #[error("DOM operation failed: {0}")]
    Js(String),
}
