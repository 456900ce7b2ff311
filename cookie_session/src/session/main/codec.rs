use crate::session::errors::SessionError;
use crate::session::types::SessionRecord;

/// Decode a raw cookie value into a session record.
///
/// An absent cookie is not an error; an unauthenticated visitor is a
/// normal condition. A present but unparseable value is
/// `MalformedSession`: callers treat it like an absent cookie but may log
/// it distinctly. Payloads missing required fields or carrying wrong
/// field types are rejected rather than parsed loosely.
pub fn decode_session(raw: Option<&str>) -> Result<Option<SessionRecord>, SessionError> {
    let Some(raw) = raw else {
        return Ok(None);
    };

    let record: SessionRecord =
        serde_json::from_str(raw).map_err(|e| SessionError::MalformedSession(e.to_string()))?;

    Ok(Some(record))
}

/// Encode a session record into the cookie value. Exact structural inverse
/// of [`decode_session`].
pub fn encode_session(record: &SessionRecord) -> Result<String, SessionError> {
    serde_json::to_string(record).map_err(|e| SessionError::MalformedSession(e.to_string()))
}
