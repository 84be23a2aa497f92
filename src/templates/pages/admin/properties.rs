// templates/pages/admin/properties.rs

use std::collections::BTreeMap;

use maud::{html, Markup};

use crate::api::models::{Category, LocationSuggestion, Property};
use crate::forms::PropertyForm;
use crate::templates::components::capitalize;
use crate::templates::desktop_layout;

use super::alert_banner;

// Declared column schema; display columns do not chase the response shape.
const PROPERTY_COLUMNS: [&str; 9] =
    ["ID", "Title", "Category", "Location", "Price", "ROI", "Status", "Area", "Images"];

pub struct AdminPropertiesVm<'a> {
    pub properties: &'a [Property],
    /// Current value of the filter-by-id box.
    pub search_id: &'a str,
    pub banner: Option<&'a str>,
}

pub fn admin_properties_page(vm: &AdminPropertiesVm) -> Markup {
    desktop_layout(
        "Properties Admin",
        html! {
            main class="container" {
                div class="flex justify-between items-center mb-4" {
                    h1 { "Property List" }
                    a
                        href="/admin/properties/new"
                        class="text-l font-bold text-white bg-green-500 px-4 py-2 rounded"
                    { "+ Add Property" }
                }

                @if let Some(message) = vm.banner {
                    (alert_banner(message))
                }

                form action="/admin/properties" method="get" class="mb-4 flex gap-2" {
                    input
                        type="number"
                        name="id"
                        value=(vm.search_id)
                        placeholder="Search by ID"
                        class="border rounded-lg p-2";
                    button type="submit" class="bg-blue-600 text-white px-4 py-2 rounded-lg" { "Search" }
                    a href="/admin/properties" class="px-4 py-2" { "Reset" }
                }

                @if vm.properties.is_empty() {
                    div class="p-6 text-center text-gray-500 italic" { "No data available." }
                } @else {
                    div style="overflow-x: auto;" {
                        table style="width: 100%; border-collapse: collapse;" {
                            thead {
                                tr {
                                    @for column in PROPERTY_COLUMNS {
                                        th style="padding: 12px 8px; border-bottom: 2px solid #e5e7eb; text-align: left;" { (column) }
                                    }
                                    th style="padding: 12px 8px; border-bottom: 2px solid #e5e7eb; text-align: left;" { "Action" }
                                }
                            }
                            tbody {
                                @for property in vm.properties {
                                    tr {
                                        td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { (property.id) }
                                        td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" {
                                            a href=(format!("/properties/{}", property.id)) { (property.title) }
                                        }
                                        td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { (capitalize(property.category_name())) }
                                        td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { (property.location) }
                                        td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { "Nrs. " (property.price) " per aana" }
                                        td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { (property.roi) "%" }
                                        td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { (capitalize(&property.status)) }
                                        td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { (property.area) " sq ft" }
                                        td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { (property.images.len()) " image(s)" }
                                        td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" {
                                            form
                                                action=(format!("/admin/properties/{}/delete", property.id))
                                                method="post"
                                                onsubmit="return confirm('Are you sure you want to delete this property?')"
                                                style="margin: 0;"
                                            {
                                                button
                                                    type="submit"
                                                    style="padding: 4px 8px; background: #ef4444; color: white; border: none; border-radius: 4px; cursor: pointer;"
                                                { "Delete" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub struct AddPropertyVm<'a> {
    pub categories: &'a [Category],
    pub form: &'a PropertyForm,
    pub errors: &'a BTreeMap<&'static str, String>,
    pub banner: Option<&'a str>,
}

fn field_error(errors: &BTreeMap<&'static str, String>, key: &str) -> Markup {
    html! {
        @if let Some(message) = errors.get(key) {
            p class="text-red-500 text-sm mt-1" { (message) }
        }
    }
}

pub fn add_property_page(vm: &AddPropertyVm) -> Markup {
    desktop_layout(
        "Add Property",
        html! {
            main class="max-w-2xl mx-auto mt-10 mb-10 bg-white shadow-lg rounded-2xl p-6" {
                h2 class="text-2xl font-bold mb-4 text-center" { "Add New Property" }

                @if let Some(message) = vm.banner {
                    (alert_banner(message))
                }

                form action="/admin/properties" method="post" enctype="multipart/form-data" class="space-y-4" {
                    div {
                        label for="title" class="block font-medium mb-1" { "Title" }
                        input type="text" id="title" name="title" value=(vm.form.title) class="w-full border rounded-lg p-2";
                        (field_error(vm.errors, "title"))
                    }

                    div {
                        label for="categoryId" class="block font-medium mb-1" { "Category" }
                        select id="categoryId" name="categoryId" class="w-full border rounded-lg p-2" {
                            option value="" { "Select a category..." }
                            @for category in vm.categories {
                                option
                                    value=(category.id)
                                    selected[vm.form.category_id == category.id.to_string()]
                                { (capitalize(&category.name)) }
                            }
                        }
                        (field_error(vm.errors, "categoryId"))
                    }

                    div {
                        label for="location" class="block font-medium mb-1" { "Location" }
                        input
                            type="text"
                            id="location"
                            name="location"
                            value=(vm.form.location)
                            autocomplete="off"
                            placeholder="Start typing a place..."
                            class="w-full border rounded-lg p-2"
                            hx-get="/admin/locations"
                            hx-trigger="keyup changed delay:300ms"
                            hx-target="#location-suggestions"
                            hx-swap="innerHTML";
                        ul id="location-suggestions" class="border rounded-lg divide-y" {}
                        (field_error(vm.errors, "location"))
                    }

                    div class="grid grid-cols-2 gap-4" {
                        div {
                            label for="price" class="block font-medium mb-1" { "Price (NPR per aana)" }
                            input type="number" id="price" name="price" value=(vm.form.price) class="w-full border rounded-lg p-2";
                            (field_error(vm.errors, "price"))
                        }
                        div {
                            label for="roi" class="block font-medium mb-1" { "Expected ROI (%)" }
                            input type="number" step="0.01" id="roi" name="roi" value=(vm.form.roi) class="w-full border rounded-lg p-2";
                            (field_error(vm.errors, "roi"))
                        }
                    }

                    div {
                        label for="status" class="block font-medium mb-1" { "Status" }
                        select id="status" name="status" class="w-full border rounded-lg p-2" {
                            option value="" { "Select status..." }
                            @for status in ["available", "pending", "sold"] {
                                option value=(status) selected[vm.form.status == status] { (capitalize(status)) }
                            }
                        }
                        (field_error(vm.errors, "status"))
                    }

                    div class="grid grid-cols-2 gap-4" {
                        div {
                            label for="area" class="block font-medium mb-1" { "Area (sq ft)" }
                            input type="number" id="area" name="area" value=(vm.form.area) class="w-full border rounded-lg p-2";
                            (field_error(vm.errors, "area"))
                        }
                        div {
                            label for="areaNepali" class="block font-medium mb-1" { "Area (R-A-P-D, optional)" }
                            input
                                type="text"
                                id="areaNepali"
                                name="areaNepali"
                                value=(vm.form.area_nepali)
                                placeholder="0-11-2-0"
                                class="w-full border rounded-lg p-2";
                            (field_error(vm.errors, "areaNepali"))
                        }
                    }

                    div {
                        label for="distanceFromHighway" class="block font-medium mb-1" { "Distance from highway (m, optional)" }
                        input
                            type="number"
                            id="distanceFromHighway"
                            name="distanceFromHighway"
                            value=(vm.form.distance_from_highway)
                            class="w-full border rounded-lg p-2";
                        (field_error(vm.errors, "distanceFromHighway"))
                    }

                    div {
                        label for="images" class="block font-medium mb-1" { "Images (up to 10)" }
                        input type="file" id="images" name="images" accept="image/*" multiple class="w-full border rounded-lg p-2";
                        (field_error(vm.errors, "images"))
                    }

                    div {
                        label for="description" class="block font-medium mb-1" { "Description" }
                        textarea id="description" name="description" rows="4" class="w-full border rounded-lg p-2" {
                            (vm.form.description)
                        }
                        (field_error(vm.errors, "description"))
                    }

                    button
                        type="submit"
                        class="w-full bg-blue-600 text-white rounded-lg py-2 hover:bg-blue-700 transition"
                    { "Add Property" }
                }

                p class="text-center mt-4" {
                    a href="/admin/properties" class="text-blue-600" { "Back to properties" }
                }
            }
        },
    )
}

/// The htmx fragment swapped under the location input.
pub fn location_suggestions_fragment(suggestions: &[LocationSuggestion]) -> Markup {
    html! {
        @for suggestion in suggestions {
            li
                class="p-2 cursor-pointer hover:bg-gray-100"
                onclick="document.getElementById('location').value = this.textContent.trim(); this.parentElement.innerHTML = '';"
                data-place-id=(suggestion.place_id)
            { (suggestion.description) }
        }
    }
}
