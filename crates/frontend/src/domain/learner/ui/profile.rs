use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::StatusPill;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::shared::toast::use_toast;
use crate::system::auth::context::use_role;
use contracts::domain::learner::fixtures;
use contracts::domain::learner::LearnerProfile;
use contracts::shared::validation::{require, validate_password_change};
use leptos::prelude::*;
use thaw::*;

const PASSWORD_RULES: &[&str] = &[
    "At least 8 characters long",
    "Include uppercase and lowercase letters",
    "Include at least one number",
    "Include at least one special character",
];

/// Password field with a show/hide toggle
#[component]
fn PasswordField(value: RwSignal<String>, placeholder: &'static str) -> impl IntoView {
    let shown = RwSignal::new(false);

    view! {
        <div class="password-field">
            {move || if shown.get() {
                view! { <Input value=value placeholder=placeholder /> }.into_any()
            } else {
                view! { <Input value=value placeholder=placeholder input_type=InputType::Password /> }.into_any()
            }}
            <Button
                size=ButtonSize::Small
                appearance=ButtonAppearance::Subtle
                attr:title=move || { if shown.get() { "Hide password" } else { "Show password" } }
                on_click=move |_| shown.update(|s| *s = !*s)
            >
                {icon("eye")}
            </Button>
        </div>
    }
}

#[component]
fn ProfileSummary(profile: LearnerProfile) -> impl IntoView {
    let role = use_role();

    view! {
        <Card class="profile-summary">
            <div class="profile-summary__avatar">{move || role.initials()}</div>
            <h2>{move || role.user_name()}</h2>
            <p class="text-muted">{profile.email.clone()}</p>
            <StatusPill variant="status-pill--success">"Active Account"</StatusPill>
            <dl class="profile-summary__facts">
                <dt class="text-muted">"User ID"</dt>
                <dd><code>{profile.user_id.clone()}</code></dd>
                <dt class="text-muted">"Member Since"</dt>
                <dd>{profile.join_date.clone()}</dd>
                <dt class="text-muted">"Last Login"</dt>
                <dd>{profile.last_login.clone()}</dd>
            </dl>
        </Card>
    }
}

#[component]
fn ProfileDetailsTab(profile: LearnerProfile) -> impl IntoView {
    let toast = use_toast();
    let role = use_role();
    let name = RwSignal::new(profile.name.clone());
    let phone = RwSignal::new(profile.phone.clone());
    let email = RwSignal::new(profile.email.clone());
    let user_id = RwSignal::new(profile.user_id.clone());

    let save = move |_: leptos::ev::MouseEvent| {
        let value = name.get_untracked();
        if let Err(e) = require(&value, "Full name is required") {
            toast.error(e.message());
            return;
        }
        role.set_user_name(value.trim());
        log::info!("learner profile saved, phone={}", phone.get_untracked());
        toast.success("Profile updated successfully!");
    };

    view! {
        <div class="profile-tab">
            <h3 class="section-caption">"Editable Information"</h3>
            <div class="form-grid">
                <Flex vertical=true>
                    <Label>{icon("user")}" Full Name"</Label>
                    <Input value=name />
                </Flex>
                <Flex vertical=true>
                    <Label>{icon("phone")}" Contact Number"</Label>
                    <Input value=phone input_type=InputType::Tel />
                </Flex>
            </div>

            <h3 class="section-caption">"Account Information (Read-only)"</h3>
            <div class="form-grid">
                <Flex vertical=true>
                    <Label>{icon("mail")}" Email Address"</Label>
                    <Input value=email disabled=true />
                </Flex>
                <Flex vertical=true>
                    <Label>{icon("key")}" User ID"</Label>
                    <Input value=user_id disabled=true />
                </Flex>
            </div>
            <div class="account-status">
                <Label>{icon("shield")}" Account Status"</Label>
                <p>
                    <strong class="text-success">{icon("check-circle")}" "{profile.account_status.clone()}</strong>
                    <span class="text-muted">" - Your account is in good standing"</span>
                </p>
            </div>

            <Button appearance=ButtonAppearance::Primary on_click=save>
                {icon("save")}
                " Save Changes"
            </Button>
        </div>
    }
}

#[component]
fn PasswordTab() -> impl IntoView {
    let toast = use_toast();
    let current = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());

    let change = move |_: leptos::ev::MouseEvent| {
        match validate_password_change(&new_password.get_untracked(), &confirm.get_untracked()) {
            Ok(()) => {
                for field in [current, new_password, confirm] {
                    field.set(String::new());
                }
                toast.success("Password changed successfully!");
            }
            Err(e) => toast.error(e.message()),
        }
    };

    view! {
        <div class="profile-tab">
            <h3>"Change Password"</h3>
            <p class="text-muted">"Ensure your account stays secure by using a strong password."</p>
            <Flex vertical=true class="password-form">
                <Label>"Current Password"</Label>
                <PasswordField value=current placeholder="Enter current password" />
                <Label>"New Password"</Label>
                <PasswordField value=new_password placeholder="Enter new password" />
                <Label>"Confirm New Password"</Label>
                <PasswordField value=confirm placeholder="Confirm new password" />
            </Flex>
            <div class="notice">
                <h4>"Password Requirements:"</h4>
                <ul class="notice-list">
                    {PASSWORD_RULES.iter().map(|r| view! { <li>{*r}</li> }).collect_view()}
                </ul>
            </div>
            <div class="form-actions">
                <Button appearance=ButtonAppearance::Primary on_click=change>
                    {icon("key")}
                    " Change Password"
                </Button>
            </div>
        </div>
    }
}

#[component]
pub fn LearnerProfilePage() -> impl IntoView {
    let role = use_role();
    let profile = fixtures::profile(&role.user_name());
    let tab = RwSignal::new("profile".to_string());
    let details = profile.clone();

    view! {
        <PageFrame page_id="learner--profile" category=PAGE_CAT_DETAIL>
            <PageHeader title="My Profile" subtitle="Manage your account settings and preferences" />

            <div class="dashboard-grid dashboard-grid--wide-right">
                <ProfileSummary profile=profile />
                <Card>
                    <TabList selected_value=tab>
                        <Tab value="profile">{icon("user")}" Profile"</Tab>
                        <Tab value="security">{icon("shield")}" Security"</Tab>
                    </TabList>
                    {move || match tab.get().as_str() {
                        "security" => view! { <PasswordTab /> }.into_any(),
                        _ => view! { <ProfileDetailsTab profile=details.clone() /> }.into_any(),
                    }}
                </Card>
            </div>
        </PageFrame>
    }
}
