//! Display policy for sensitive fields.
//!
//! Monitor URLs, webhook URLs and API key values render literally only when
//! the user has turned sensitive info on. Otherwise they are replaced by a
//! fixed-length mask that does not leak the value's length.

use std::borrow::Cow;

use sentinel_config::constants::SENSITIVE_MASK_LEN;

/// The mask shown in place of a hidden value.
pub const SENSITIVE_MASK: &str = "••••••••••••••••••••••••••••";

/// Returns `value` when `show` is set, the mask otherwise.
pub fn redact(value: &str, show: bool) -> Cow<'_, str> {
    if show {
        Cow::Borrowed(value)
    } else {
        Cow::Borrowed(SENSITIVE_MASK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_length() {
        assert_eq!(SENSITIVE_MASK.chars().count(), SENSITIVE_MASK_LEN);
    }

    #[test]
    fn test_redact_hides_value_and_length() {
        assert_eq!(redact("https://a.io", false), SENSITIVE_MASK);
        assert_eq!(
            redact("https://hooks.slack.com/services/T000/B000/XXXXXXXXXXXX", false),
            SENSITIVE_MASK
        );
    }

    #[test]
    fn test_toggle_round_trip() {
        let value = "sk_live_abcdef";
        let mut show = false;
        assert_eq!(redact(value, show), SENSITIVE_MASK);
        show = !show;
        assert_eq!(redact(value, show), value);
        show = !show;
        assert_eq!(redact(value, show), SENSITIVE_MASK);
    }
}
