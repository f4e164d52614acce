//! Search input and match highlighting for the filterable lists
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Splits `text` into `(segment, is_match)` pieces for a case-insensitive
/// search. A blank query yields the whole text as one unmatched piece.
pub fn split_matches<'a>(text: &'a str, query: &str) -> Vec<(&'a str, bool)> {
    let query = query.trim().to_lowercase();
    let lower = text.to_lowercase();
    // Lowercasing must not shift byte offsets, otherwise fall back to no highlight
    if query.is_empty() || lower.len() != text.len() {
        return vec![(text, false)];
    }

    let mut parts = Vec::new();
    let mut last = 0;
    while let Some(pos) = lower[last..].find(&query) {
        let start = last + pos;
        let end = start + query.len();
        if start > last {
            parts.push((&text[last..start], false));
        }
        parts.push((&text[start..end], true));
        last = end;
    }
    if last < text.len() {
        parts.push((&text[last..], false));
    }
    parts
}

/// Renders `text` with every occurrence of `query` wrapped in a `<mark>`
pub fn highlight_matches(text: &str, query: &str) -> AnyView {
    split_matches(text, query)
        .into_iter()
        .map(|(segment, is_match)| {
            let segment = segment.to_string();
            if is_match {
                view! { <mark class="search-highlight">{segment}</mark> }.into_any()
            } else {
                view! { <span>{segment}</span> }.into_any()
            }
        })
        .collect_view()
        .into_any()
}

/// Search box with a clear button
#[component]
pub fn SearchInput(
    #[prop(into)] value: RwSignal<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    view! {
        <div class="search-input" class:search-input--active=move || !value.get().trim().is_empty()>
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <Show when=move || !value.get().is_empty()>
                <button class="search-input__clear" title="Clear" on:click=move |_| value.set(String::new())>
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_every_occurrence() {
        let parts = split_matches("Fire Safety fire drill", "fire");
        assert_eq!(
            parts,
            vec![
                ("Fire", true),
                (" Safety ", false),
                ("fire", true),
                (" drill", false)
            ]
        );
    }

    #[test]
    fn blank_query_keeps_text_whole() {
        assert_eq!(split_matches("Lesson", "  "), vec![("Lesson", false)]);
        assert_eq!(split_matches("Lesson", "quiz"), vec![("Lesson", false)]);
    }
}
