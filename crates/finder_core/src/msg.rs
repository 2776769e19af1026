#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the URL input field.
    InputChanged(String),
    /// User submitted the form.
    SubmitRequested,
    /// An extraction request settled, successfully or not.
    ExtractionSettled {
        request_id: crate::RequestId,
        result: Result<crate::Keywords, String>,
    },
}
