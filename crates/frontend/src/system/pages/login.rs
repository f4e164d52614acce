use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::shared::toast::use_toast;
use crate::system::auth::context::use_role;
use contracts::enums::UserRole;
use contracts::shared::validation::validate_login;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use thaw::*;

/// Demo sign-in. Credentials are only checked for presence.
#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let role = use_role();
    let toast = use_toast();
    let navigate = use_navigate();

    let enter = StoredValue::new(move |as_role: UserRole, message: String| {
        role.login(as_role);
        toast.success(message);
        navigate(as_role.home_path(), Default::default());
    });

    let sign_in = move |as_role: UserRole| {
        if let Err(e) = validate_login(&email.get_untracked(), &password.get_untracked()) {
            toast.error(e.message());
            return;
        }
        enter.with_value(|f| f(as_role, format!("Logged in as {}", as_role.display_name())));
    };

    let quick = move |as_role: UserRole| {
        enter.with_value(|f| f(as_role, format!("Quick login as {}", as_role.display_name())));
    };

    view! {
        <PageFrame page_id="system--login" category=PAGE_CAT_SYSTEM class="login-page">
            <div class="login-page__inner">
                <div class="login-page__brand">
                    <div class="login-page__logo">{icon("graduation-cap")}</div>
                    <h1>"LMS Training Portal"</h1>
                    <p>"Sign in to continue"</p>
                </div>

                <Card>
                    <div class="login-card">
                        <h2 class="login-card__title">"Sign In"</h2>
                        <p class="login-card__subtitle">"Enter your credentials to access your account"</p>
                        <Flex vertical=true>
                            <Label>"Email"</Label>
                            <Input value=email placeholder="you@example.com" />
                            <Label>"Password"</Label>
                            <Input value=password input_type=InputType::Password placeholder="Enter your password" />
                        </Flex>
                        <div class="login-card__actions">
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| sign_in(UserRole::Trainer)
                            >
                                "Login as Trainer"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| sign_in(UserRole::User)
                            >
                                "Login as User"
                            </Button>
                        </div>
                    </div>
                </Card>

                <Card>
                    <div class="login-card login-card--demo">
                        <h2 class="login-card__title">"Quick Access (Demo)"</h2>
                        <p class="login-card__subtitle">"Skip login for demonstration"</p>
                        <div class="login-card__actions">
                            <Button on_click=move |_| quick(UserRole::Trainer)>
                                {icon("user-cog")}
                                "Trainer Demo"
                            </Button>
                            <Button on_click=move |_| quick(UserRole::User)>
                                {icon("user")}
                                "User Demo"
                            </Button>
                        </div>
                    </div>
                </Card>
            </div>
        </PageFrame>
    }
}
