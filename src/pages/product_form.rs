//! Product entry form.

use leptos::ev::{Event, SubmitEvent};
use leptos::prelude::*;

use crate::state::forms::{PRODUCT_CATEGORY_OPTIONS, ProductForm, STATUS_OPTIONS};
use crate::state::ui::UiState;

#[component]
pub fn ProductFormPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let form = RwSignal::new(ProductForm::default());

    let bind = move |name: &'static str| {
        move |ev: Event| {
            form.update(|f| {
                f.set_field(name, event_target_value(&ev));
            });
        }
    };
    let value = move |read: fn(&ProductForm) -> &String| move || form.with(|f| read(f).clone());
    let input_class = move || ui.get().input_class();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        log::info!("product form submitted: {:?}", form.get_untracked());
    };

    let options = |items: &'static [&'static str]| {
        items.iter().map(|o| view! { <option value=*o>{*o}</option> }).collect_view()
    };

    view! {
        <form class="entry-form p-6 flex flex-col gap-6 w-full min-h-screen" on:submit=on_submit>
            <div>
                <h1 class="text-3xl font-bold">"CREATE PRODUCT"</h1>
                <p class="text-green-400">"Add a new product to the inventory"</p>
            </div>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <input type="text" name="productId" placeholder="Product ID" required class=input_class
                    prop:value=value(|f| &f.product_id) on:input=bind("productId")/>
                <input type="text" name="name" placeholder="Product Name" required class=input_class
                    prop:value=value(|f| &f.name) on:input=bind("name")/>
            </div>
            <input type="number" name="price" placeholder="Price" required class=input_class
                prop:value=value(|f| &f.price) on:input=bind("price")/>
            <label class="entry-form__upload cursor-pointer bg-green-700 hover:bg-green-800 p-3 rounded text-white font-semibold w-fit">
                <i class="bx bx-image text-xl"></i>
                " UPLOAD PRODUCT IMAGE"
                <input type="file" accept="image/*" name="image" class="hidden" on:change=bind("image")/>
            </label>
            <textarea name="description" placeholder="Product description..." required
                class=move || format!("{} h-64 resize-none shadow", input_class())
                prop:value=value(|f| &f.description) on:input=bind("description")></textarea>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <select name="category" class=input_class prop:value=value(|f| &f.category) on:change=bind("category")>
                    <option value="">"Select Category"</option>
                    {options(PRODUCT_CATEGORY_OPTIONS)}
                </select>
                <select name="status" class=input_class prop:value=value(|f| &f.status) on:change=bind("status")>
                    {options(STATUS_OPTIONS)}
                </select>
            </div>
            <button type="submit" class="bg-teal-500 hover:bg-teal-600 text-white font-semibold px-6 py-3 rounded">
                <i class="bx bx-plus text-xl"></i>
                " SUBMIT PRODUCT"
            </button>
        </form>
    }
}
