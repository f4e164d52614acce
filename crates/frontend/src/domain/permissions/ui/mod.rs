pub mod roles;
pub mod users;

use leptos::prelude::*;

/// On/off switch bound to a derived state; the owner decides what a flip means
#[component]
pub(crate) fn PermissionSwitch(
    #[prop(into)] checked: Signal<bool>,
    on_toggle: Callback<()>,
    #[prop(optional, into)] label: String,
) -> impl IntoView {
    view! {
        <label class="perm-switch" class:perm-switch--on=move || checked.get()>
            <input
                type="checkbox"
                role="switch"
                class="perm-switch__input"
                aria-label=label
                prop:checked=move || checked.get()
                on:change=move |_| on_toggle.run(())
            />
            <span class="perm-switch__track">
                <span class="perm-switch__thumb"></span>
            </span>
        </label>
    }
}
