//! Delete Column Button
//!
//! Deleting a column also deletes its tasks, so the first click only arms the
//! button and names what will go; the second click deletes.

use leptos::prelude::*;

/// Confirmation text for deleting `title` with `task_count` tasks
pub fn confirm_prompt(title: &str, task_count: usize) -> String {
    match task_count {
        0 => format!("Delete \"{}\"?", title),
        1 => format!("Delete \"{}\" and its task?", title),
        n => format!("Delete \"{}\" and its {} tasks?", title, n),
    }
}

#[component]
pub fn DeleteColumnButton(
    #[prop(into)] title: String,
    #[prop(into)] task_count: Signal<usize>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let title = StoredValue::new(title);
    let (armed, set_armed) = signal(false);

    // Pressing a button in the column header must not start a column drag
    let disarm = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        set_armed.set(false);
    };

    move || {
        if !armed.get() {
            return view! {
                <button
                    class="ghost-btn"
                    title="Delete column"
                    on:mousedown=|ev| ev.stop_propagation()
                    on:click=move |_| set_armed.set(true)
                >
                    "Delete"
                </button>
            }
            .into_any();
        }

        view! {
            <span class="delete-confirm" on:mousedown=|ev| ev.stop_propagation()>
                <span class="delete-confirm-text">
                    {move || title.with_value(|title| confirm_prompt(title, task_count.get()))}
                </span>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        disarm(ev);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button class="cancel-btn" on:click=disarm>"✗"</button>
            </span>
        }
        .into_any()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_counts_tasks() {
        assert_eq!(confirm_prompt("Todo", 0), "Delete \"Todo\"?");
        assert_eq!(confirm_prompt("Todo", 1), "Delete \"Todo\" and its task?");
        assert_eq!(confirm_prompt("Todo", 7), "Delete \"Todo\" and its 7 tasks?");
    }
}
