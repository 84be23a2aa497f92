use maud::{html, Markup};

use crate::api::models::Property;
use crate::templates::components::{capitalize, status_color};

/// One listing card in the browse grid. The whole card links to the detail
/// page; the first image is the thumbnail.
pub fn property_card(property: &Property, asset_base: &str) -> Markup {
    html! {
        a
            href=(format!("/properties/{}", property.id))
            class="cursor-pointer bg-white rounded-2xl shadow-md hover:shadow-xl transition-all p-6 flex flex-col"
        {
            @if let Some(image) = property.images.first() {
                img
                    src=(format!("{asset_base}/{image}"))
                    alt=(property.title)
                    class="w-full h-52 object-cover rounded-xl mb-4";
            }
            h3 class="text-lg font-semibold text-slate-800 mb-1" { (property.title) }
            p class="text-sm text-slate-500 mb-2" { (property.location) }
            p class="text-slate-600 text-sm mb-4 truncate" { (property.description) }
            div class="grid grid-cols-2 gap-4 text-sm text-slate-700 mt-auto" {
                div {
                    p class="font-medium" { "NRs. " (property.price) }
                    p class="text-xs text-slate-500" { "Price (per aana)" }
                }
                div {
                    p class="font-medium" { (property.roi) "%" }
                    p class="text-xs text-slate-500" { "Expected ROI" }
                }
                div {
                    p class="font-medium" { (property.area) }
                    p class="text-xs text-slate-500" { "Area (sq ft)" }
                }
                @if let Some(area_nepali) = &property.area_nepali {
                    div {
                        p class="font-medium" { (area_nepali) }
                        p class="text-xs text-slate-500" { "Area (R-A-P-D)" }
                    }
                }
                @if let Some(distance) = property.distance_from_highway {
                    div {
                        p class="font-medium" { (distance) "m" }
                        p class="text-xs text-slate-500" { "From Highway" }
                    }
                }
                div {
                    p class=(format!("font-medium {}", status_color(&property.status))) {
                        (capitalize(&property.status))
                    }
                    p class="text-xs text-slate-500" { "Status" }
                }
            }
        }
    }
}
