pub mod filter_panel;
pub mod pagination;
pub mod property_card;

pub use filter_panel::filter_panel;
pub use pagination::pagination_controls;
pub use property_card::property_card;

/// Uppercases the first character, as the backend stores statuses and
/// category names lowercase.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Text color class for a property status badge.
pub fn status_color(status: &str) -> &'static str {
    match status.to_ascii_lowercase().as_str() {
        "available" => "text-green-600",
        "sold" => "text-red-600",
        "pending" => "text-yellow-500",
        _ => "text-slate-600",
    }
}
