// templates/pages/property_detail.rs

use maud::{html, Markup};

use crate::api::models::Property;
use crate::templates::components::{capitalize, status_color};
use crate::templates::desktop_layout;

pub struct PropertyDetailVm<'a> {
    pub property: &'a Property,
    /// Index of the image shown large; switching is a reload with ?img=N.
    pub selected_image: usize,
    pub asset_base: &'a str,
}

pub fn property_detail_page(vm: &PropertyDetailVm) -> Markup {
    let property = vm.property;
    let selected = vm.selected_image.min(property.images.len().saturating_sub(1));

    desktop_layout(
        &property.title,
        html! {
            main class="max-w-5xl mx-auto py-10 px-4" {
                @if let Some(image) = property.images.get(selected) {
                    img
                        src=(format!("{}/{}", vm.asset_base, image))
                        alt=(property.title)
                        class="w-full h-96 object-cover rounded-xl mb-4";
                }
                @if property.images.len() > 1 {
                    div class="flex gap-2 mb-6" {
                        @for (i, image) in property.images.iter().enumerate() {
                            a href=(format!("/properties/{}?img={i}", property.id)) {
                                img
                                    src=(format!("{}/{}", vm.asset_base, image))
                                    alt=(format!("{} image {}", property.title, i + 1))
                                    class=(if i == selected {
                                        "w-20 h-20 object-cover rounded-lg border-2 border-blue-600"
                                    } else {
                                        "w-20 h-20 object-cover rounded-lg"
                                    });
                            }
                        }
                    }
                }

                h1 class="text-3xl font-bold text-slate-800 mb-1" { (property.title) }
                p class="text-slate-500 mb-6" { (property.location) }

                div class="grid grid-cols-2 md:grid-cols-3 gap-6 text-sm text-slate-700 mb-8" {
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
                    @if let Some(category) = &property.category {
                        div {
                            p class="font-medium" { (capitalize(&category.name)) }
                            p class="text-xs text-slate-500" { "Category" }
                        }
                    }
                }

                h2 class="text-xl font-semibold text-slate-800 mb-2" { "Description" }
                p class="text-slate-600 leading-relaxed mb-10" { (property.description) }

                div class="flex gap-4" {
                    a
                        href="tel:+977-1-5555555"
                        class="bg-blue-600 text-white px-6 py-2 rounded-lg hover:bg-blue-700 transition"
                    { "Make a Call" }
                    a
                        href="/properties#listings"
                        class="border border-slate-300 text-slate-700 px-6 py-2 rounded-lg hover:bg-slate-100 transition"
                    { "Back to Listings" }
                }
            }
        },
    )
}

pub fn property_not_found_page() -> Markup {
    desktop_layout(
        "Property Not Found",
        html! {
            main class="min-h-screen bg-gray-50 flex items-center justify-center px-4" {
                div class="text-center max-w-sm bg-white p-10 rounded-xl shadow-lg border border-gray-200" {
                    h2 class="text-3xl font-extrabold text-gray-900 mb-2" { "Property Not Found" }
                    p class="text-gray-600 mb-8 leading-relaxed" {
                        "Sorry, the property you're looking for doesn't exist or may have been removed."
                    }
                    a
                        href="/properties"
                        class="inline-flex items-center px-6 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors font-semibold shadow-md mx-auto"
                    { "Back to Properties" }
                }
            }
        },
    )
}
