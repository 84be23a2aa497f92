pub mod categories;
pub mod properties;

use maud::{html, Markup};

use crate::templates::desktop_layout;

pub fn admin_home_page() -> Markup {
    desktop_layout(
        "Admin Console",
        html! {
            main class="container" {
                h1 { "Admin Console" }

                section class="card" {
                    h3 { "Categories" }
                    ul {
                        li { a href="/admin/categories" { "Manage categories" } }
                        li { a href="/admin/categories/new" { "Add a category" } }
                    }
                }

                section class="card" {
                    h3 { "Properties" }
                    ul {
                        li { a href="/admin/properties" { "Manage properties" } }
                        li { a href="/admin/properties/new" { "Add a property" } }
                    }
                }
            }
        },
    )
}

/// Alert-style banner for failed admin mutations. The user stays on the
/// current view with a retry affordance.
pub fn alert_banner(message: &str) -> Markup {
    html! {
        div class="alert" style="background: #fee2e2; color: #991b1b; border: 1px solid #fca5a5; border-radius: 8px; padding: 12px; margin-bottom: 1rem;" {
            (message)
        }
    }
}
