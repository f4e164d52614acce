use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::shared::toast::use_toast;
use crate::system::auth::context::use_role;
use contracts::shared::validation::{require, validate_password_change};
use leptos::prelude::*;
use thaw::*;

const LANGUAGES: &[(&str, &str)] = &[("en", "English"), ("hi", "हिंदी"), ("es", "Español")];
const TIMEZONES: &[(&str, &str)] = &[
    ("UTC", "UTC"),
    ("EST", "Eastern Time (EST)"),
    ("PST", "Pacific Time (PST)"),
    ("IST", "India Standard Time (IST)"),
];
const DATE_FORMATS: &[(&str, &str)] = &[
    ("MM/DD/YYYY", "MM/DD/YYYY"),
    ("DD/MM/YYYY", "DD/MM/YYYY"),
    ("YYYY-MM-DD", "YYYY-MM-DD"),
];

fn options(items: &'static [(&'static str, &'static str)]) -> impl IntoView {
    items
        .iter()
        .map(|(value, label)| view! { <option value=*value>{*label}</option> })
        .collect_view()
}

#[component]
fn ProfileTab() -> impl IntoView {
    let toast = use_toast();
    let role = use_role();
    let name = RwSignal::new(role.user_name());
    let email = RwSignal::new("trainer@company.com".to_string());
    let phone = RwSignal::new("+1 234 567 8900".to_string());

    let save = move |_: leptos::ev::MouseEvent| {
        let value = name.get_untracked();
        if let Err(e) = require(&value, "Full name is required") {
            toast.error(e.message());
            return;
        }
        role.set_user_name(value.trim());
        toast.success("Profile updated successfully");
    };

    view! {
        <Card class="settings-card">
            <h3>"Profile Information"</h3>
            <Flex vertical=true>
                <Label>"Full Name"</Label>
                <Input value=name />
                <Label>"Email Address"</Label>
                <Input value=email input_type=InputType::Email />
                <Label>"Phone Number"</Label>
                <Input value=phone input_type=InputType::Tel />
            </Flex>
            <Button appearance=ButtonAppearance::Primary on_click=save>
                {icon("save")}
                " Save Changes"
            </Button>
        </Card>
    }
}

#[component]
fn SecurityTab() -> impl IntoView {
    let toast = use_toast();
    let current = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());

    let save = move |_: leptos::ev::MouseEvent| {
        if let Err(e) = require(&current.get_untracked(), "Enter your current password") {
            toast.error(e.message());
            return;
        }
        match validate_password_change(&new_password.get_untracked(), &confirm.get_untracked()) {
            Ok(()) => {
                for field in [current, new_password, confirm] {
                    field.set(String::new());
                }
                toast.success("Password changed successfully");
            }
            Err(e) => toast.error(e.message()),
        }
    };

    view! {
        <Card class="settings-card">
            <h3>"Change Password"</h3>
            <Flex vertical=true>
                <Label>"Current Password"</Label>
                <Input value=current input_type=InputType::Password />
                <Label>"New Password"</Label>
                <Input value=new_password input_type=InputType::Password />
                <Label>"Confirm New Password"</Label>
                <Input value=confirm input_type=InputType::Password />
            </Flex>
            <Button appearance=ButtonAppearance::Primary on_click=save>
                {icon("lock")}
                " Update Password"
            </Button>
        </Card>
    }
}

#[component]
fn NotificationsTab() -> impl IntoView {
    let toast = use_toast();
    let rows = [
        ("Email Notifications", "Receive updates via email", RwSignal::new(true)),
        ("Push Notifications", "Receive browser push notifications", RwSignal::new(true)),
        ("Assessment Alerts", "Get notified when learners complete assessments", RwSignal::new(true)),
        ("Feedback Alerts", "Get notified when you receive new feedback", RwSignal::new(true)),
    ];

    view! {
        <Card class="settings-card">
            <h3>"Notification Preferences"</h3>
            {rows
                .into_iter()
                .map(|(title, hint, checked)| view! {
                    <div class="settings-toggle">
                        <div>
                            <p class="settings-toggle__title">{title}</p>
                            <p class="text-muted">{hint}</p>
                        </div>
                        <Switch checked=checked />
                    </div>
                })
                .collect_view()}
            <Button
                appearance=ButtonAppearance::Primary
                on_click=move |_| toast.success("Notification preferences saved")
            >
                {icon("save")}
                " Save Preferences"
            </Button>
        </Card>
    }
}

#[component]
fn PreferencesTab() -> impl IntoView {
    let toast = use_toast();
    let language = RwSignal::new("en".to_string());
    let timezone = RwSignal::new("UTC".to_string());
    let date_format = RwSignal::new("MM/DD/YYYY".to_string());

    let save = move |_: leptos::ev::MouseEvent| {
        log::info!(
            "preferences: language={} timezone={} date_format={}",
            language.get_untracked(),
            timezone.get_untracked(),
            date_format.get_untracked()
        );
        toast.success("Preferences saved");
    };

    view! {
        <Card class="settings-card">
            <h3>"General Preferences"</h3>
            <Flex vertical=true>
                <Label>"Language"</Label>
                <Select value=language>{options(LANGUAGES)}</Select>
                <Label>"Timezone"</Label>
                <Select value=timezone>{options(TIMEZONES)}</Select>
                <Label>"Date Format"</Label>
                <Select value=date_format>{options(DATE_FORMATS)}</Select>
            </Flex>
            <Button appearance=ButtonAppearance::Primary on_click=save>
                {icon("save")}
                " Save Preferences"
            </Button>
        </Card>
    }
}

#[component]
pub fn TrainerSettingsPage() -> impl IntoView {
    let tab = RwSignal::new("profile".to_string());

    view! {
        <PageFrame page_id="trainer--settings" category=PAGE_CAT_DETAIL>
            <PageHeader title="Settings" subtitle="Manage your account settings and preferences" />

            <TabList selected_value=tab>
                <Tab value="profile">{icon("user")}" Profile"</Tab>
                <Tab value="security">{icon("lock")}" Security"</Tab>
                <Tab value="notifications">{icon("bell")}" Notifications"</Tab>
                <Tab value="preferences">{icon("settings")}" Preferences"</Tab>
            </TabList>

            <div class="settings-tab">
                {move || match tab.get().as_str() {
                    "security" => view! { <SecurityTab /> }.into_any(),
                    "notifications" => view! { <NotificationsTab /> }.into_any(),
                    "preferences" => view! { <PreferencesTab /> }.into_any(),
                    _ => view! { <ProfileTab /> }.into_any(),
                }}
            </div>
        </PageFrame>
    }
}
