//! Post-login landing page.

use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::session;
use crate::Route;

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let user = session::current_user();

    let logout = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        session::clear();
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/");
        }
    });

    let Some(user) = user else {
        return html! {
            <div class="dashboard-page">
                <div class="signed-out-notice">
                    <h1>{"You're not signed in"}</h1>
                    <p>{"Log in from the guide page to see your dashboard."}</p>
                    <Link<Route> to={Route::Home} classes="back-home-link">
                        {"Back to the guide"}
                    </Link<Route>>
                </div>
                <style>{DASHBOARD_CSS}</style>
            </div>
        };
    };

    let initial = user
        .username
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default();
    let role = user
        .role
        .as_ref()
        .map(|role| role.name.clone())
        .unwrap_or_else(|| "Standard".to_string());

    html! {
        <div class="dashboard-page">
            <header class="dashboard-header">
                <div class="brand">
                    <div class="brand-mark">{"@"}</div>
                    <span class="brand-name">{"Rexby"}</span>
                </div>
                <div class="user-chip">
                    <div class="user-initial">{initial}</div>
                    <span class="user-name">{&user.username}</span>
                    <button class="logout-button" onclick={logout.clone()}>{"Log out"}</button>
                </div>
            </header>
            <main class="dashboard-main">
                <div class="welcome-card">
                    <h1>{format!("Welcome, {}!", user.username)}</h1>
                    <p>
                        {"You have successfully logged in to your account. This is your \
                          personal dashboard where you can manage your profile and settings."}
                    </p>
                </div>
                <div class="dashboard-grid">
                    <div class="dashboard-card">
                        <h2>{"Profile Information"}</h2>
                        <div class="profile-row">
                            <span class="profile-label">{"Username"}</span>
                            <span class="profile-value">{&user.username}</span>
                        </div>
                        <div class="profile-row">
                            <span class="profile-label">{"Email"}</span>
                            <span class="profile-value">{&user.email}</span>
                        </div>
                        <div class="profile-row">
                            <span class="profile-label">{"Account Type"}</span>
                            <span class="profile-value">{role}</span>
                        </div>
                    </div>
                    <div class="dashboard-card">
                        <h2>{"Quick Actions"}</h2>
                        <div class="action-grid">
                            <button class="action-tile">{"👤"}<span>{"Update Profile"}</span></button>
                            <button class="action-tile">{"⚙️"}<span>{"Account Settings"}</span></button>
                            <button class="action-tile">{"🔔"}<span>{"Notifications"}</span></button>
                            <button class="action-tile" onclick={logout}>
                                {"🚪"}<span>{"Logout"}</span>
                            </button>
                        </div>
                    </div>
                </div>
            </main>
            <style>{DASHBOARD_CSS}</style>
        </div>
    }
}

const DASHBOARD_CSS: &str = r#"
.dashboard-page {
    min-height: 100vh;
    background: #f9fafb;
    color: #14142b;
    font-family: 'Poppins', -apple-system, BlinkMacSystemFont, sans-serif;
}
.dashboard-header {
    background: #fff;
    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.08);
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 0.75rem 1.5rem;
}
.brand { display: flex; align-items: center; gap: 0.5rem; }
.brand-mark {
    width: 2rem;
    height: 2rem;
    border-radius: 50%;
    background: linear-gradient(to right, #1496BF, #0f6e8c);
    color: #fff;
    font-weight: 700;
    display: flex;
    align-items: center;
    justify-content: center;
}
.brand-name {
    font-size: 1.4rem;
    font-weight: 700;
    background: linear-gradient(to right, #1496BF, #0f6e8c);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
}
.user-chip { display: flex; align-items: center; gap: 0.6rem; }
.user-initial {
    width: 2rem;
    height: 2rem;
    border-radius: 50%;
    background: #dbeafe;
    color: #1d4ed8;
    font-weight: 600;
    display: flex;
    align-items: center;
    justify-content: center;
}
.user-name { font-weight: 500; }
.logout-button {
    border: 1px solid #d1d5db;
    border-radius: 8px;
    background: #fff;
    padding: 0.35rem 0.9rem;
    font-size: 0.85rem;
    cursor: pointer;
}
.logout-button:hover { background: #f3f4f6; }
.dashboard-main {
    max-width: 72rem;
    margin: 0 auto;
    padding: 2rem 1.5rem;
}
.welcome-card, .dashboard-card {
    background: #fff;
    border-radius: 12px;
    box-shadow: 0 1px 4px rgba(0, 0, 0, 0.08);
    padding: 1.5rem;
}
.welcome-card { margin-bottom: 1.5rem; }
.welcome-card h1 { margin: 0 0 0.75rem; font-size: 1.5rem; }
.welcome-card p { margin: 0; color: #4b5563; }
.dashboard-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 1.5rem;
}
.dashboard-card h2 { margin: 0 0 1rem; font-size: 1.1rem; }
.profile-row { margin-bottom: 0.75rem; display: flex; flex-direction: column; }
.profile-label { color: #6b7280; font-size: 0.8rem; }
.profile-value { font-weight: 500; }
.action-grid {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 1rem;
}
.action-tile {
    border: 1px solid #e5e7eb;
    border-radius: 10px;
    background: #fff;
    padding: 1rem;
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 0.5rem;
    font-size: 1.25rem;
    cursor: pointer;
}
.action-tile span { font-size: 0.85rem; font-weight: 500; color: #374151; }
.action-tile:hover { background: #f9fafb; }
.signed-out-notice {
    max-width: 28rem;
    margin: 6rem auto;
    background: #fff;
    border-radius: 12px;
    box-shadow: 0 1px 4px rgba(0, 0, 0, 0.08);
    padding: 2rem;
    text-align: center;
}
.signed-out-notice h1 { margin: 0 0 0.5rem; font-size: 1.4rem; }
.signed-out-notice p { color: #6b7280; }
.back-home-link { color: #1496BF; font-weight: 500; text-decoration: none; }
.back-home-link:hover { text-decoration: underline; }
@media (min-width: 768px) {
    .dashboard-grid { grid-template-columns: 1fr 1fr; }
    .profile-row { flex-direction: row; justify-content: space-between; }
}
"#;
