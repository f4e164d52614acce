use leptos::prelude::*;

/// Rounded status label; `variant` is a `status-pill--*` modifier class
/// such as `status-pill--success`
#[component]
pub fn StatusPill(
    #[prop(into)] variant: Signal<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <span class=move || format!("status-pill {}", variant.get())>
            {children()}
        </span>
    }
}

fn count_text(count: usize, label: Option<&str>) -> String {
    match label {
        Some(l) => format!("{} {}", count, l),
        None => count.to_string(),
    }
}

/// Small counter next to a title, e.g. "4 Categories"
#[component]
pub fn CountBadge(
    #[prop(into)] count: Signal<usize>,
    #[prop(optional, into)] label: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <span class="count-badge">
            {move || count_text(count.get(), label.get().as_deref())}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_text_with_and_without_label() {
        assert_eq!(count_text(4, Some("Categories")), "4 Categories");
        assert_eq!(count_text(0, Some("Lessons")), "0 Lessons");
        assert_eq!(count_text(7, None), "7");
    }
}
