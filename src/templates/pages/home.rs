// templates/pages/home.rs

use maud::{html, Markup};

use crate::api::models::Category;
use crate::templates::components::capitalize;
use crate::templates::desktop_layout;

pub fn home_page(categories: &[Category]) -> Markup {
    desktop_layout(
        "Home",
        html! {
            section class="bg-slate-800 py-16 px-4" {
                div class="text-center mb-10 max-w-4xl mx-auto" {
                    h2 class="text-5xl font-extrabold text-white mb-4 leading-tight" {
                        "Discover Profitable "
                        span class="text-transparent bg-clip-text bg-gradient-to-r from-blue-400 to-blue-600" {
                            "Investment Properties"
                        }
                        " in Nepal"
                    }
                    p class="text-slate-400 text-lg" {
                        "Use real filters for location, price, ROI, area, and highway distance."
                    }
                    a
                        href="/properties"
                        class="inline-block mt-6 bg-blue-600 text-white px-6 py-2 rounded-lg hover:bg-blue-700 transition"
                    { "View Properties" }
                }

                @if !categories.is_empty() {
                    div class="max-w-4xl mx-auto flex flex-wrap justify-center gap-3" {
                        @for category in categories {
                            a
                                href=(format!("/properties?categoryId={}", category.id))
                                class="border border-slate-500 text-white px-4 py-2 rounded-md hover:bg-slate-700 transition"
                            {
                                (capitalize(&category.name))
                                " (" (category.properties.len()) ")"
                            }
                        }
                    }
                }
            }
        },
    )
}
