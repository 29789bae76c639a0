use crate::client::outcome::ClientOutcome;

/// Render the text served at `GET /`.
pub fn render_greeting(outcome: &ClientOutcome) -> String {
    let text = match outcome {
        ClientOutcome::NumericValue(n) => format!("The random number is {}", n),
        other => other.fallback_text().unwrap_or_default().to_string(),
    };
    format!("Greetings!\n {}", text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::outcome::TransportFailure;

    #[test]
    fn test_number_is_embedded() {
        assert_eq!(
            render_greeting(&ClientOutcome::NumericValue(17)),
            "Greetings!\n The random number is 17"
        );
    }

    #[test]
    fn test_fallbacks_rendered_verbatim() {
        let status = render_greeting(&ClientOutcome::StatusError(500));
        assert!(status.ends_with("Status error!"));
        assert!(!status.contains("500"));

        let down = render_greeting(&ClientOutcome::Unavailable(TransportFailure::ConnectionRefused));
        assert!(down.ends_with("Service unavailable!"));
        assert!(!down.chars().any(|c| c.is_ascii_digit()));
    }
}
