/// An attachment extracted from an inbound email, not yet persisted.
///
/// `filename` is the original name as sent, or an empty string when the
/// upstream provider supplied none; the empty string is preserved through to
/// the SMS filename list.
#[derive(Debug, Clone)]
pub struct NewAttachment {
    pub file: Vec<u8>,
    pub filename: String,
    /// MIME content type of the part.
    pub filetype: String,
}
