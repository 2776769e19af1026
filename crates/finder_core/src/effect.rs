#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue one extraction request to the collaborator.
    ExtractKeywords {
        request_id: crate::RequestId,
        url: String,
    },
}
