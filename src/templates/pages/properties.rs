// templates/pages/properties.rs

use maud::{html, Markup};

use crate::api::models::Category;
use crate::listing::{DisplayState, FilterCriteria, QueryState, LOAD_ERROR_MESSAGE};
use crate::templates::components::{filter_panel, pagination_controls, property_card};
use crate::templates::desktop_layout;

pub struct PropertiesVm<'a> {
    pub categories: &'a [Category],
    pub draft: &'a FilterCriteria,
    pub query: &'a QueryState,
    pub display: &'a DisplayState,
    pub active_filters: usize,
    pub asset_base: &'a str,
}

pub fn properties_page(vm: &PropertiesVm) -> Markup {
    desktop_layout(
        "Properties",
        html! {
            section class="bg-slate-800 py-16 px-4" {
                div class="max-w-7xl mx-auto mb-8" {
                    (filter_panel(vm.categories, vm.draft, vm.query))

                    div class="mt-3 text-sm text-slate-300" {
                        "Active filters: " (vm.active_filters)
                        " | Total results: " (total_results(vm.display))
                    }
                }

                div id="listings" class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-8 max-w-7xl mx-auto" {
                    @match vm.display {
                        DisplayState::Idle | DisplayState::Loading => {
                            div class="text-white col-span-full text-center py-10" {
                                "Loading properties..."
                            }
                        }
                        DisplayState::Errored => {
                            div class="text-red-400 col-span-full text-center py-10" {
                                (LOAD_ERROR_MESSAGE)
                                " "
                                a href=(format!("/properties?{}#listings", vm.query.to_query_string())) class="underline" { "Retry" }
                            }
                        }
                        DisplayState::Ready(page) if page.properties.is_empty() => {
                            div class="text-slate-300 col-span-full text-center py-10" {
                                "No properties found for selected filters."
                            }
                        }
                        DisplayState::Ready(page) => {
                            @for property in &page.properties {
                                (property_card(property, vm.asset_base))
                            }
                        }
                    }
                }

                @if let DisplayState::Ready(page) = vm.display {
                    (pagination_controls(vm.query, &page.pagination))
                }
            }
        },
    )
}

fn total_results(display: &DisplayState) -> u64 {
    match display {
        DisplayState::Ready(page) => page.pagination.total,
        _ => 0,
    }
}
