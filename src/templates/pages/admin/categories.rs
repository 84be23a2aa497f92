// templates/pages/admin/categories.rs

use maud::{html, Markup};

use crate::api::models::Category;
use crate::templates::desktop_layout;

use super::alert_banner;

// Columns are declared per entity, not derived from response keys.
const CATEGORY_COLUMNS: [&str; 3] = ["ID", "Name", "Properties"];

pub struct CategoriesVm<'a> {
    /// Sorted by id ascending before rendering.
    pub categories: &'a [Category],
    pub banner: Option<&'a str>,
}

pub fn categories_page(vm: &CategoriesVm) -> Markup {
    desktop_layout(
        "Categories",
        html! {
            main class="container" {
                div class="flex justify-between items-center mb-4" {
                    h1 { "Category List" }
                    a
                        href="/admin/categories/new"
                        class="text-l font-bold text-white bg-green-500 px-4 py-2 rounded"
                    { "+ Add Category" }
                }

                @if let Some(message) = vm.banner {
                    (alert_banner(message))
                }

                @if vm.categories.is_empty() {
                    div class="p-6 text-center text-gray-500 italic" { "No data available." }
                } @else {
                    div style="overflow-x: auto;" {
                        table style="width: 100%; border-collapse: collapse; margin-top: 1rem;" {
                            thead {
                                tr {
                                    @for column in CATEGORY_COLUMNS {
                                        th style="padding: 12px 8px; border-bottom: 2px solid #e5e7eb; text-align: left;" { (column) }
                                    }
                                    th style="padding: 12px 8px; border-bottom: 2px solid #e5e7eb; text-align: left;" { "Action" }
                                }
                            }
                            tbody {
                                @for category in vm.categories {
                                    tr {
                                        td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { (category.id) }
                                        td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { (category.name) }
                                        td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { (category.properties.len()) }
                                        td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" {
                                            div style="display: flex; gap: 8px;" {
                                                a
                                                    href=(format!("/admin/categories/{}/edit", category.id))
                                                    style="padding: 4px 8px; background: #3b82f6; color: white; border-radius: 4px;"
                                                { "Edit" }
                                                form
                                                    action=(format!("/admin/categories/{}/delete", category.id))
                                                    method="post"
                                                    onsubmit="return confirm('Are you sure you want to delete this category?')"
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
            }
        },
    )
}

pub struct CategoryFormVm<'a> {
    /// None for create, Some(id) for edit.
    pub id: Option<i64>,
    pub name: &'a str,
    pub error: Option<&'a str>,
}

pub fn category_form_page(vm: &CategoryFormVm) -> Markup {
    let (title, action) = match vm.id {
        Some(id) => ("Edit Category", format!("/admin/categories/{id}")),
        None => ("Add New Category", "/admin/categories".to_string()),
    };

    desktop_layout(
        title,
        html! {
            main class="max-w-md mx-auto mt-10 mb-10 bg-white shadow-lg rounded-2xl p-6" {
                h2 class="text-2xl font-bold mb-4 text-center" { (title) }

                @if let Some(error) = vm.error {
                    p class="text-red-500 text-sm mb-2" { (error) }
                }

                form action=(action) method="post" class="space-y-4" {
                    div {
                        label for="name" class="block font-medium mb-1" { "Category Name" }
                        input
                            type="text"
                            id="name"
                            name="name"
                            value=(vm.name)
                            placeholder="Enter category name"
                            required
                            class="w-full border rounded-lg p-2";
                    }

                    button
                        type="submit"
                        class="w-full bg-blue-600 text-white rounded-lg py-2 hover:bg-blue-700 transition"
                    {
                        @if vm.id.is_some() { "Save Changes" } @else { "Add Category" }
                    }
                }

                p class="text-center mt-4" {
                    a href="/admin/categories" class="text-blue-600" { "Back to categories" }
                }
            }
        },
    )
}
