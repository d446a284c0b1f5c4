//! Home page message.

/// The line embedded into the rendered home page.
pub fn visit_message(count: u64) -> String {
    format!("You have visited this page {count} times")
}
