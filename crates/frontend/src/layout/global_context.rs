use leptos::prelude::*;

/// Chrome state shared by the sidebar and the top header of a layout
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub sidebar_collapsed: RwSignal<bool>,
    pub profile_menu_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            sidebar_collapsed: RwSignal::new(false),
            profile_menu_open: RwSignal::new(false),
        }
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_collapsed.update(|c| *c = !*c);
    }

    pub fn toggle_profile_menu(&self) {
        self.profile_menu_open.update(|o| *o = !*o);
    }

    pub fn close_profile_menu(&self) {
        self.profile_menu_open.set(false);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}
