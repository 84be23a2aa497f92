use maud::{html, Markup};

use crate::api::models::Category;
use crate::listing::query::ALLOWED_PAGE_SIZES;
use crate::listing::{FilterCriteria, QueryState, SortOrder};
use crate::templates::components::capitalize;

/// The browse filter form. Submitting it is the "apply" action: the form is
/// a GET back onto /properties carrying every field, with no page input, so
/// an apply always lands on page 1. The #listings anchor scrolls the result
/// region into view.
pub fn filter_panel(categories: &[Category], draft: &FilterCriteria, query: &QueryState) -> Markup {
    html! {
        form action="/properties#listings" method="get" {
            div class="bg-slate-900/80 border border-slate-700 rounded-xl p-4 md:p-6" {
                div class="grid grid-cols-1 md:grid-cols-3 lg:grid-cols-4 gap-4" {
                    input
                        name="location"
                        placeholder="Location"
                        value=(draft.location)
                        class="px-3 py-2 rounded-md bg-slate-800 text-white border border-slate-600";

                    select name="categoryId" class="px-3 py-2 rounded-md bg-slate-800 text-white border border-slate-600" {
                        option value="" { "All Categories" }
                        @for category in categories {
                            option
                                value=(category.id)
                                selected[draft.category_id == category.id.to_string()]
                            { (capitalize(&category.name)) }
                        }
                    }

                    input
                        type="number"
                        name="minPrice"
                        placeholder="Min Price (NPR)"
                        value=(draft.min_price)
                        class="px-3 py-2 rounded-md bg-slate-800 text-white border border-slate-600";

                    input
                        type="number"
                        name="maxPrice"
                        placeholder="Max Price (NPR)"
                        value=(draft.max_price)
                        class="px-3 py-2 rounded-md bg-slate-800 text-white border border-slate-600";

                    input
                        type="number"
                        step="0.01"
                        name="minRoi"
                        placeholder="Min ROI (%)"
                        value=(draft.min_roi)
                        class="px-3 py-2 rounded-md bg-slate-800 text-white border border-slate-600";

                    input
                        type="number"
                        name="minArea"
                        placeholder="Min Area (sq ft)"
                        value=(draft.min_area)
                        class="px-3 py-2 rounded-md bg-slate-800 text-white border border-slate-600";

                    input
                        type="number"
                        name="maxDistanceFromHighway"
                        placeholder="Max Distance (m)"
                        value=(draft.max_distance_from_highway)
                        class="px-3 py-2 rounded-md bg-slate-800 text-white border border-slate-600";

                    select name="status" class="px-3 py-2 rounded-md bg-slate-800 text-white border border-slate-600" {
                        option value="" { "All Status" }
                        @for status in ["available", "pending", "sold"] {
                            option value=(status) selected[draft.status == status] { (capitalize(status)) }
                        }
                    }
                }

                div class="flex flex-col md:flex-row gap-3 md:items-center md:justify-between mt-4" {
                    div class="flex flex-col sm:flex-row gap-3" {
                        select name="sort" onchange="this.form.submit()" class="px-3 py-2 rounded-md bg-slate-800 text-white border border-slate-600" {
                            @for sort in SortOrder::ALL {
                                option value=(sort.as_param()) selected[query.sort == sort] { (sort.label()) }
                            }
                        }

                        select name="limit" onchange="this.form.submit()" class="px-3 py-2 rounded-md bg-slate-800 text-white border border-slate-600" {
                            @for size in ALLOWED_PAGE_SIZES {
                                option value=(size) selected[query.page.limit == size] { (size) " / page" }
                            }
                        }
                    }

                    div class="flex gap-3" {
                        button type="submit" class="bg-blue-600 text-white px-4 py-2 rounded-md hover:bg-blue-700 transition" { "Apply" }
                        a href="/properties#listings" class="border border-slate-500 text-white px-4 py-2 rounded-md hover:bg-slate-700 transition" { "Clear" }
                    }
                }
            }
        }
    }
}
