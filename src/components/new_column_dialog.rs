//! New Column Dialog Component
//!
//! Modal form asking for the title of a new column.

use leptos::prelude::*;

/// Dialog for creating a column; "Create" stays disabled until a title is typed
#[component]
pub fn NewColumnDialog(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_create: Callback<String>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let (title, set_title) = signal(String::new());
    let is_blank = move || title.with(|t| t.trim().is_empty());

    let create = move || {
        if is_blank() {
            return;
        }
        on_create.run(title.get());
        set_title.set(String::new());
    };
    let close = move || {
        set_title.set(String::new());
        on_close.run(());
    };

    view! {
        <Show when=move || open.get()>
            <div class="dialog-backdrop" on:click=move |_| close()>
                <div class="dialog" on:click=|ev| ev.stop_propagation()>
                    <h3 class="dialog-title">"Create New Column"</h3>
                    <form
                        class="dialog-body"
                        on:submit=move |ev: web_sys::SubmitEvent| {
                            ev.prevent_default();
                            create();
                        }
                    >
                        <input
                            type="text"
                            placeholder="Enter column title"
                            autofocus=true
                            prop:value=move || title.get()
                            on:input=move |ev| set_title.set(event_target_value(&ev))
                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                if ev.key() == "Escape" { close() }
                            }
                        />
                        <div class="dialog-footer">
                            <button type="button" class="ghost-btn" on:click=move |_| close()>"Cancel"</button>
                            <button type="submit" class="primary-btn" disabled=is_blank>"Create"</button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
