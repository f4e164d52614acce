//! Catch boundaries for render errors raised by pages.
//!
//! `GlobalErrorBoundary` wraps the router; `RouteErrorBoundary` wraps the
//! outlet of each layout so a failing page keeps the chrome around it.
//! Error messages are only shown when `AppConfig::dev_mode` is on.

use crate::config::AppConfig;
use crate::shared::icons::icon;
use leptos::error::Errors;
use leptos::prelude::*;
use thaw::*;

fn error_messages(errors: &ArcRwSignal<Errors>) -> Vec<String> {
    errors
        .get()
        .into_iter()
        .map(|(_, err)| err.to_string())
        .collect()
}

fn dev_mode() -> bool {
    use_context::<AppConfig>()
        .map(|c| c.dev_mode)
        .unwrap_or(false)
}

#[component]
fn ErrorDetails(messages: Vec<String>) -> impl IntoView {
    view! {
        <div class="error-fallback__details">
            <div class="error-fallback__details-title">
                {icon("bug")}
                <span>"Error Message"</span>
            </div>
            {messages
                .into_iter()
                .map(|m| view! { <code class="error-fallback__message">{m}</code> })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn GlobalErrorBoundary(children: Children) -> impl IntoView {
    let dev = dev_mode();

    view! {
        <ErrorBoundary fallback=move |errors| {
            let messages = error_messages(&errors);
            for m in &messages {
                log::error!("unhandled render error: {}", m);
            }
            let reset = errors.clone();
            view! {
                <div class="error-fallback error-fallback--global">
                    <div class="error-fallback__card">
                        <div class="error-fallback__icon">{icon("alert-triangle")}</div>
                        <h1 class="error-fallback__title">
                            {if dev { "Application Error" } else { "Something went wrong" }}
                        </h1>
                        <p class="error-fallback__description">
                            {if dev {
                                "An unexpected error occurred in the application."
                            } else {
                                "We're sorry, but something unexpected happened. Please try again."
                            }}
                        </p>
                        {dev.then(|| view! { <ErrorDetails messages=messages.clone() /> })}
                        <div class="error-fallback__actions">
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| reset.set(Errors::default())
                            >
                                "Try Again"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| {
                                    if let Some(window) = web_sys::window() {
                                        let _ = window.location().set_href("/");
                                    }
                                }
                            >
                                "Go Home"
                            </Button>
                        </div>
                        {(!dev).then(|| view! {
                            <p class="error-fallback__hint">
                                "If this problem persists, please contact support."
                            </p>
                        })}
                    </div>
                </div>
            }
        }>
            {children()}
        </ErrorBoundary>
    }
}

#[component]
pub fn RouteErrorBoundary(children: Children) -> impl IntoView {
    let dev = dev_mode();

    view! {
        <ErrorBoundary fallback=move |errors| {
            let messages = error_messages(&errors);
            for m in &messages {
                log::error!("page render error: {}", m);
            }
            let retry = errors.clone();
            let back = errors.clone();
            view! {
                <div class="error-fallback error-fallback--route">
                    <div class="error-fallback__card">
                        <div class="error-fallback__icon">{icon("alert-circle")}</div>
                        <h2 class="error-fallback__title">
                            {if dev { "Route Error" } else { "Page Error" }}
                        </h2>
                        <p class="error-fallback__description">
                            "This page could not be displayed."
                        </p>
                        {dev.then(|| view! { <ErrorDetails messages=messages.clone() /> })}
                        <div class="error-fallback__actions">
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| retry.set(Errors::default())
                            >
                                "Retry"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| {
                                    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
                                        let _ = history.back();
                                    }
                                    back.set(Errors::default());
                                }
                            >
                                "Go Back"
                            </Button>
                        </div>
                    </div>
                </div>
            }
        }>
            {children()}
        </ErrorBoundary>
    }
}
