use crate::data_objects::StripeErrorEnvelope;

/// Extracts a human-readable message from the body of a failed Stripe request.
///
/// Stripe wraps failures in `{"error": {"type": .., "code": .., "message": ..}}`. If the body is not in that shape,
/// it is returned as is.
pub fn stripe_error_message(body: &str) -> String {
    match serde_json::from_str::<StripeErrorEnvelope>(body) {
        Ok(envelope) => {
            let err = envelope.error;
            let kind = match (err.error_type, err.code) {
                (Some(t), Some(c)) => format!("{t}/{c}"),
                (Some(t), None) => t,
                (None, Some(c)) => c,
                (None, None) => "unknown_error".to_string(),
            };
            match err.message {
                Some(msg) => format!("{msg} ({kind})"),
                None => kind,
            }
        },
        Err(_) => body.to_string(),
    }
}
