//! Terminal output for one-shot rank checks

use colored::Colorize;
use serprank::{Outcome, PageBudget, Query};

/// Render an outcome for the terminal
pub fn render(query: &Query, outcome: &Outcome, budget: PageBudget) -> String {
    let header = format!("Search result for \"{}\"", query.text);
    let rule = "-".repeat(header.chars().count());

    let body = match outcome {
        Outcome::Found(record) => format!(
            "{} {}\n{} {}\n{} {}\n{} {}",
            "Position:".bold(),
            record.rank.to_string().green(),
            "URL:".bold(),
            record.item.url,
            "Title:".bold(),
            record.item.title,
            "Description:".bold(),
            record.item.snippet,
        ),
        Outcome::NotFound => format!("{}", "Not found in the search results".yellow()),
        Outcome::LimitExhausted => format!(
            "{}",
            format!("Not found in the first {} results", budget).yellow()
        ),
        Outcome::Failed(err) => format!("{} {}", "Search failed:".red(), err),
    };

    format!("{}\n{}\n{}", header, rule, body)
}
