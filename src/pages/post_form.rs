//! Blog post entry form.

use leptos::ev::{Event, SubmitEvent};
use leptos::prelude::*;

use crate::state::forms::{POST_CATEGORY_OPTIONS, POST_TAG_OPTIONS, PostForm, STATUS_OPTIONS};
use crate::state::ui::UiState;

#[component]
pub fn PostFormPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let form = RwSignal::new(PostForm::default());

    let bind = move |name: &'static str| {
        move |ev: Event| {
            form.update(|f| {
                f.set_field(name, event_target_value(&ev));
            });
        }
    };
    let value = move |read: fn(&PostForm) -> &String| move || form.with(|f| read(f).clone());
    let input_class = move || ui.get().input_class();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        log::info!("post form submitted: {:?}", form.get_untracked());
    };

    let options = |items: &'static [&'static str]| {
        items.iter().map(|o| view! { <option value=*o>{*o}</option> }).collect_view()
    };

    view! {
        <form class="entry-form p-6 flex flex-col gap-6 w-full min-h-screen" on:submit=on_submit>
            <div>
                <h1 class="text-3xl font-bold">"CREATE POST"</h1>
                <p class="text-green-400">"Create a New Post for Blog"</p>
            </div>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <input type="text" name="userId" placeholder="User ID" required class=input_class
                    prop:value=value(|f| &f.user_id) on:input=bind("userId")/>
                <input type="text" name="fullName" placeholder="Full Name" required class=input_class
                    prop:value=value(|f| &f.full_name) on:input=bind("fullName")/>
            </div>
            <input type="text" name="title" placeholder="Title" required class=input_class
                prop:value=value(|f| &f.title) on:input=bind("title")/>
            <label class="entry-form__upload cursor-pointer bg-green-700 hover:bg-green-800 p-3 rounded text-white font-semibold w-fit">
                <i class="bx bx-image text-xl"></i>
                " UPLOAD PROJECT IMAGE"
                <input type="file" accept="image/*" name="image" class="hidden" on:change=bind("image")/>
            </label>
            <textarea name="content" placeholder="Write your content here..." required
                class=move || format!("{} h-64 resize-none shadow", input_class())
                prop:value=value(|f| &f.content) on:input=bind("content")></textarea>
            <select name="tag" class=input_class prop:value=value(|f| &f.tag) on:change=bind("tag")>
                <option value="">"Select Tag"</option>
                {options(POST_TAG_OPTIONS)}
            </select>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <select name="category" class=input_class prop:value=value(|f| &f.category) on:change=bind("category")>
                    <option value="">"Select Category"</option>
                    {options(POST_CATEGORY_OPTIONS)}
                </select>
                <select name="status" class=input_class prop:value=value(|f| &f.status) on:change=bind("status")>
                    {options(STATUS_OPTIONS)}
                </select>
            </div>
            <input type="text" name="slug" placeholder="Slug" class=input_class
                prop:value=value(|f| &f.slug) on:input=bind("slug")/>
            <button type="submit" class="bg-teal-500 hover:bg-teal-600 text-white font-semibold px-6 py-3 rounded">
                <i class="bx bx-edit-alt text-xl"></i>
                " SUBMIT BLOG POST"
            </button>
        </form>
    }
}
