//! Outcome Formatters
//!
//! Turn search outcomes into plain-text chat messages.
//!
//! The user and the operator channel get different wording: users are
//! told to try again later whenever no definite answer exists, while the
//! operator sees who asked and the raw provider error.

use serprank::{MatchRecord, Outcome, PageBudget};

/// Acknowledgement sent to the user when a search starts
pub fn format_pending() -> String {
    "Searching, please wait...".to_string()
}

/// Acknowledgement mirrored to the operator channel when a search starts
pub fn format_operator_pending(user_label: &str, query_text: &str) -> String {
    format!("Searching for {}, please wait...\nQuery: {}", user_label, query_text)
}

/// Message for the user who asked
pub fn format_user_message(outcome: &Outcome, budget: PageBudget) -> String {
    match outcome {
        Outcome::Found(record) => format_match(record),
        Outcome::NotFound => "The site does not appear in the search results for this query."
            .to_string(),
        Outcome::LimitExhausted => format!(
            "The site was not found in the first {} results. Try again later.",
            budget
        ),
        Outcome::Failed(_) => {
            "The search could not be completed. Try again later, the daily request limit may be used up."
                .to_string()
        }
    }
}

/// Message for the operator channel
pub fn format_operator_message(outcome: &Outcome, user_label: &str, budget: PageBudget) -> String {
    match outcome {
        Outcome::Found(record) => format!("Request from {}\n{}", user_label, format_match(record)),
        Outcome::NotFound => format!("Request from {}: not in the search results", user_label),
        Outcome::LimitExhausted => format!(
            "Request from {}: not in the first {} results",
            user_label, budget
        ),
        Outcome::Failed(err) => format!("Request from {}: search failed: {}", user_label, err),
    }
}

fn format_match(record: &MatchRecord) -> String {
    format!(
        "Position: {}\nURL: {}\nTitle: {}\nDescription: {}",
        record.rank, record.item.url, record.item.title, record.item.snippet
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serprank::{ProviderError, ResultItem};

    fn found() -> Outcome {
        Outcome::Found(MatchRecord::new(
            12,
            ResultItem::new(
                "https://shop.example/ovens",
                "Pizza ovens",
                "Wood-fired and gas ovens",
            ),
        ))
    }

    #[test]
    fn test_found_lists_match_details() {
        let text = format_user_message(&found(), PageBudget::default());
        assert_eq!(
            text,
            "Position: 12\nURL: https://shop.example/ovens\nTitle: Pizza ovens\nDescription: Wood-fired and gas ovens"
        );
    }

    #[test]
    fn test_operator_message_names_user() {
        let text = format_operator_message(&found(), "ana_k", PageBudget::default());
        assert!(text.starts_with("Request from ana_k\nPosition: 12"));
    }

    #[test]
    fn test_not_found_and_limit_are_distinct() {
        let budget = PageBudget::default();
        let not_found = format_user_message(&Outcome::NotFound, budget);
        let exhausted = format_user_message(&Outcome::LimitExhausted, budget);
        assert_ne!(not_found, exhausted);
        assert!(exhausted.contains("first 100 results"));
        assert!(exhausted.contains("Try again later"));
    }

    #[test]
    fn test_failure_hides_reason_from_user_only() {
        let failed = Outcome::Failed(ProviderError::QuotaExceeded("Daily Limit Exceeded".into()));
        let user = format_user_message(&failed, PageBudget::default());
        let operator = format_operator_message(&failed, "ana_k", PageBudget::default());

        assert!(user.contains("Try again later"));
        assert!(!user.contains("Daily Limit Exceeded"));
        assert!(operator.contains("Daily Limit Exceeded"));
        assert!(operator.contains("ana_k"));
    }

    #[test]
    fn test_pending_messages() {
        assert_eq!(format_pending(), "Searching, please wait...");
        assert_eq!(
            format_operator_pending("ana_k", "pizza oven"),
            "Searching for ana_k, please wait...\nQuery: pizza oven"
        );
    }
}
