use crate::config::AppConfig;
use crate::layout::error_boundary::GlobalErrorBoundary;
use crate::routes::AppRoutes;
use crate::shared::toast::{ToastService, Toaster};
use crate::system::auth::context::RoleContext;
use leptos::prelude::*;
use leptos_router::components::Router;
use thaw::ConfigProvider;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_context(config);
    provide_context(RoleContext::new());
    provide_context(ToastService::new());

    view! {
        <ConfigProvider>
            <Router>
                <GlobalErrorBoundary>
                    <AppRoutes />
                </GlobalErrorBoundary>
            </Router>
            <Toaster />
        </ConfigProvider>
    }
}
