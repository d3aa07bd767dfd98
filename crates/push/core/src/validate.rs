//! Request validation.

use crate::config::AndroidSettings;
use crate::{PushRequest, ValidationError};

/// Longest time to live the provider accepts (4 weeks).
pub const MAX_TIME_TO_LIVE: u32 = 2_419_200;

/// Check a request before anything is sent.
pub fn check_message(
    req: &PushRequest,
    settings: &AndroidSettings,
) -> Result<(), ValidationError> {
    if req.tokens.is_empty() && !req.is_topic() {
        return Err(ValidationError::MissingRecipients);
    }

    if req.tokens.len() == 1 && req.tokens[0].is_empty() {
        return Err(ValidationError::EmptyToken);
    }

    if req.tokens.len() > settings.max_tokens {
        return Err(ValidationError::TooManyTokens(settings.max_tokens));
    }

    if req.time_to_live.is_some_and(|ttl| ttl > MAX_TIME_TO_LIVE) {
        return Err(ValidationError::InvalidTimeToLive {
            max: MAX_TIME_TO_LIVE,
        });
    }

    Ok(())
}
