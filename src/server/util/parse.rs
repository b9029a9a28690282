use mongodb::bson::oid::ObjectId;

/// Parses a flight identifier from its public string form.
///
/// Anything that is not a 24-character hex string cannot name a stored flight, so
/// malformed input yields `None` and callers report it exactly like a missing flight.
///
/// # Arguments
/// - `value` - The identifier taken from the request path
///
/// # Returns
/// - `Some(ObjectId)` - Successfully parsed identifier
/// - `None` - The value is not a valid ObjectId
pub fn parse_object_id(value: &str) -> Option<ObjectId> {
    match ObjectId::parse_str(value) {
        Ok(id) => Some(id),
        Err(e) => {
            tracing::debug!("Rejected malformed flight id '{}': {}", value, e);
            None
        }
    }
}
