use maud::{html, Markup};

use crate::api::models::Pagination;
use crate::listing::{QueryEvent, QueryState};

fn browse_url(query: &QueryState) -> String {
    format!("/properties?{}#listings", query.to_query_string())
}

/// Previous/Next controls plus the "Page X of Y" line. Forward navigation is
/// bounded here, not in the state layer: a flag being false renders the
/// control inert.
pub fn pagination_controls(query: &QueryState, pagination: &Pagination) -> Markup {
    let prev = query.reduce(&QueryEvent::SetPage(pagination.page.saturating_sub(1)));
    let next = query.reduce(&QueryEvent::SetPage(pagination.page + 1));

    let disabled =
        "px-4 py-2 rounded-md border border-slate-500 text-white opacity-50 cursor-not-allowed";
    let enabled = "px-4 py-2 rounded-md border border-slate-500 text-white";

    html! {
        div class="max-w-7xl mx-auto mt-10 flex items-center justify-center gap-4" {
            @if pagination.has_prev {
                a href=(browse_url(&prev)) class=(enabled) { "Previous" }
            } @else {
                span class=(disabled) { "Previous" }
            }
            p class="text-slate-300" {
                "Page " (pagination.page) " of " (pagination.total_pages)
            }
            @if pagination.has_next {
                a href=(browse_url(&next)) class=(enabled) { "Next" }
            } @else {
                span class=(disabled) { "Next" }
            }
        }
    }
}
