//! Modal login/signup dialog over the guide page.
//!
//! Validation runs client-side first; a passing form runs the remote
//! mutation, stores the session and redirects to the dashboard after a
//! short success beat. Closing the modal drops all of its state.

use gloo_console::log;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, MouseEvent};
use yew::prelude::*;

use crate::auth::api::{self, LoginInput, RegisterInput};
use crate::auth::session;
use crate::auth::validate::{validate_login, validate_signup, FieldErrors};

#[derive(Clone, Copy, PartialEq)]
enum AuthView {
    Login,
    Signup,
}

#[derive(Properties, PartialEq)]
pub struct LoginModalProps {
    pub on_close: Callback<()>,
}

#[function_component(LoginModal)]
pub fn login_modal(props: &LoginModalProps) -> Html {
    let view = use_state(|| AuthView::Login);
    let username = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let errors = use_state(FieldErrors::default);
    let server_error = use_state(|| None::<String>);
    let success = use_state(|| None::<String>);
    let is_loading = use_state(|| false);

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_close.emit(());
        })
    };

    let switch_view = {
        let view = view.clone();
        let errors = errors.clone();
        let server_error = server_error.clone();
        move |target: AuthView| {
            let view = view.clone();
            let errors = errors.clone();
            let server_error = server_error.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                errors.set(FieldErrors::default());
                server_error.set(None);
                view.set(target);
            })
        }
    };

    let on_login_submit = {
        let email = email.clone();
        let password = password.clone();
        let errors = errors.clone();
        let server_error = server_error.clone();
        let success = success.clone();
        let is_loading = is_loading.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let field_errors = validate_login(&email, &password);
            if !field_errors.is_empty() {
                errors.set(field_errors);
                return;
            }
            errors.set(FieldErrors::default());
            is_loading.set(true);

            let input = LoginInput {
                identifier: (*email).clone(),
                password: (*password).clone(),
            };
            let server_error = server_error.clone();
            let success = success.clone();
            let is_loading = is_loading.clone();
            spawn_local(async move {
                match api::login(input).await {
                    Ok(auth) => {
                        session::store(&auth);
                        log!("Login successful, token stored");
                        server_error.set(None);
                        success.set(Some("Login successful! Redirecting...".to_string()));
                        is_loading.set(false);
                        spawn_local(async move {
                            gloo_timers::future::TimeoutFuture::new(1_000).await;
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().set_href("/dashboard");
                            }
                        });
                    }
                    Err(message) => {
                        log!("Login failed:", message.clone());
                        server_error.set(Some(message));
                        is_loading.set(false);
                    }
                }
            });
        })
    };

    let on_signup_submit = {
        let username = username.clone();
        let email = email.clone();
        let password = password.clone();
        let errors = errors.clone();
        let server_error = server_error.clone();
        let success = success.clone();
        let is_loading = is_loading.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let field_errors = validate_signup(&username, &email, &password);
            if !field_errors.is_empty() {
                errors.set(field_errors);
                return;
            }
            errors.set(FieldErrors::default());
            is_loading.set(true);

            let input = RegisterInput {
                username: (*username).clone(),
                email: (*email).clone(),
                password: (*password).clone(),
            };
            let server_error = server_error.clone();
            let success = success.clone();
            let is_loading = is_loading.clone();
            spawn_local(async move {
                match api::register(input).await {
                    Ok(auth) => {
                        session::store(&auth);
                        log!("Account created, token stored");
                        server_error.set(None);
                        success.set(Some("Account created successfully!".to_string()));
                        is_loading.set(false);
                        spawn_local(async move {
                            gloo_timers::future::TimeoutFuture::new(1_000).await;
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().set_href("/dashboard");
                            }
                        });
                    }
                    Err(message) => {
                        log!("Signup failed:", message.clone());
                        server_error.set(Some(message));
                        is_loading.set(false);
                    }
                }
            });
        })
    };

    let email_input = {
        let email = email.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let password_input = {
        let password = password.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };
    let username_input = {
        let username = username.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            username.set(input.value());
        })
    };

    let status = {
        if *is_loading {
            html! { <div class="modal-status"><span class="spinner"></span>{" Working..."}</div> }
        } else if let Some(message) = (*server_error).as_ref() {
            html! { <div class="modal-status modal-error">{message}</div> }
        } else if let Some(message) = (*success).as_ref() {
            html! { <div class="modal-status modal-success">{message}</div> }
        } else {
            html! {}
        }
    };

    let social_buttons = html! {
        <>
            <div class="modal-divider">
                <span>{"or continue with"}</span>
            </div>
            <div class="social-row">
                <button class="social-button" disabled={*is_loading} onclick={
                    Callback::from(|e: MouseEvent| {
                        e.prevent_default();
                        log!("Google login is not configured");
                    })
                }>
                    {"Google"}
                </button>
                <button class="social-button" disabled={*is_loading} onclick={
                    Callback::from(|e: MouseEvent| {
                        e.prevent_default();
                        log!("Facebook login is not configured");
                    })
                }>
                    {"Facebook"}
                </button>
            </div>
        </>
    };

    let body = match *view {
        AuthView::Login => html! {
            <>
                <div class="modal-badge modal-badge-login">{"🔒"}</div>
                <h1>{"Welcome back!"}</h1>
                <p class="modal-subtitle">{"Sign in to your account"}</p>
                { status.clone() }
                <form onsubmit={on_login_submit}>
                    <div class="field">
                        <input
                            type="email"
                            placeholder="Email address"
                            class={classes!("modal-input", errors.email.is_some().then(|| "invalid"))}
                            value={(*email).clone()}
                            onchange={email_input.clone()}
                        />
                        if let Some(message) = errors.email.as_ref() {
                            <p class="field-error">{message}</p>
                        }
                    </div>
                    <div class="field">
                        <input
                            type="password"
                            placeholder="Password"
                            class={classes!("modal-input", errors.password.is_some().then(|| "invalid"))}
                            value={(*password).clone()}
                            onchange={password_input.clone()}
                        />
                        if let Some(message) = errors.password.as_ref() {
                            <p class="field-error">{message}</p>
                        }
                    </div>
                    <button type="submit" class="modal-submit" disabled={*is_loading}>
                        {"Sign in"}
                    </button>
                </form>
                { social_buttons.clone() }
                <button class="modal-switch" onclick={switch_view(AuthView::Signup)}>
                    {"Don't have an account? Sign up"}
                </button>
                <p class="modal-terms">
                    {"By continuing, you agree to Rexby's Terms of Service and Privacy Policy"}
                </p>
            </>
        },
        AuthView::Signup => html! {
            <>
                <div class="modal-badge modal-badge-signup">{"👤"}</div>
                <h1>{"Create your account"}</h1>
                <p class="modal-subtitle">{"Fill in your details to get started"}</p>
                { status.clone() }
                <form onsubmit={on_signup_submit}>
                    <div class="field">
                        <input
                            type="text"
                            placeholder="Username"
                            class={classes!("modal-input", errors.username.is_some().then(|| "invalid"))}
                            value={(*username).clone()}
                            onchange={username_input.clone()}
                        />
                        if let Some(message) = errors.username.as_ref() {
                            <p class="field-error">{message}</p>
                        }
                    </div>
                    <div class="field">
                        <input
                            type="email"
                            placeholder="Email"
                            class={classes!("modal-input", errors.email.is_some().then(|| "invalid"))}
                            value={(*email).clone()}
                            onchange={email_input}
                        />
                        if let Some(message) = errors.email.as_ref() {
                            <p class="field-error">{message}</p>
                        }
                    </div>
                    <div class="field">
                        <input
                            type="password"
                            placeholder="Password"
                            class={classes!("modal-input", errors.password.is_some().then(|| "invalid"))}
                            value={(*password).clone()}
                            onchange={password_input}
                        />
                        if let Some(message) = errors.password.as_ref() {
                            <p class="field-error">{message}</p>
                        }
                    </div>
                    <button type="submit" class="modal-submit" disabled={*is_loading}>
                        {"Create account"}
                    </button>
                </form>
                <button class="modal-switch" onclick={switch_view(AuthView::Login)}>
                    {"Already have an account? Sign in"}
                </button>
                <p class="modal-terms">
                    {"By creating an account, you agree to Rexby's Terms of Service and Privacy Policy"}
                </p>
            </>
        },
    };

    html! {
        <div class="modal-overlay">
            <div class="modal-dialog">
                <button class="modal-close" onclick={close}>{"✕"}</button>
                { body }
            </div>
            <style>
                {r#"
                .modal-overlay {
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.5);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    z-index: 1100;
                    padding: 1rem;
                }
                .modal-dialog {
                    position: relative;
                    background: #fff;
                    border-radius: 16px;
                    box-shadow: 0 16px 48px rgba(0, 0, 0, 0.25);
                    width: 100%;
                    max-width: 420px;
                    padding: 2rem;
                    display: flex;
                    flex-direction: column;
                    max-height: 90vh;
                    overflow-y: auto;
                }
                .modal-close {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    background: none;
                    border: none;
                    color: #6b7280;
                    font-size: 1rem;
                    cursor: pointer;
                }
                .modal-close:hover { color: #374151; }
                .modal-badge {
                    align-self: center;
                    width: 64px;
                    height: 64px;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.75rem;
                    margin-bottom: 1.25rem;
                }
                .modal-badge-login { background: #dbeafe; }
                .modal-badge-signup { background: #dcfce7; }
                .modal-dialog h1 {
                    font-size: 1.5rem;
                    text-align: center;
                    margin: 0 0 0.25rem;
                    color: #14142b;
                }
                .modal-subtitle {
                    text-align: center;
                    color: #6b7280;
                    margin: 0 0 1.5rem;
                }
                .field { margin-bottom: 1rem; }
                .modal-input {
                    width: 100%;
                    box-sizing: border-box;
                    background: #f9fafb;
                    border: 1px solid #d1d5db;
                    border-radius: 8px;
                    padding: 0.75rem;
                    font-size: 0.95rem;
                }
                .modal-input:focus {
                    outline: none;
                    border-color: #1496BF;
                }
                .modal-input.invalid { border-color: #ef4444; }
                .field-error {
                    color: #ef4444;
                    font-size: 0.75rem;
                    margin: 0.25rem 0 0;
                }
                .modal-submit {
                    width: 100%;
                    height: 3rem;
                    border: none;
                    border-radius: 8px;
                    font-weight: 600;
                    letter-spacing: 0.05em;
                    color: #fff;
                    background: linear-gradient(to right, #1496BF, #0f6e8c);
                    cursor: pointer;
                    margin-top: 0.5rem;
                }
                .modal-submit:disabled { opacity: 0.6; cursor: default; }
                .modal-divider {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    color: #6b7280;
                    font-size: 0.85rem;
                    margin: 1.5rem 0 1rem;
                }
                .modal-divider::before,
                .modal-divider::after {
                    content: '';
                    flex: 1;
                    height: 1px;
                    background: #d1d5db;
                }
                .social-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }
                .social-button {
                    padding: 0.75rem;
                    border: 1px solid #d1d5db;
                    border-radius: 8px;
                    background: #fff;
                    cursor: pointer;
                }
                .social-button:hover { background: #f9fafb; }
                .modal-switch {
                    background: none;
                    border: none;
                    color: #1496BF;
                    font-size: 0.9rem;
                    font-weight: 500;
                    cursor: pointer;
                    margin-top: 1rem;
                }
                .modal-switch:hover { color: #0f6e8c; }
                .modal-terms {
                    color: #9ca3af;
                    font-size: 0.75rem;
                    text-align: center;
                    margin: 1.5rem 0 0;
                }
                .modal-status {
                    text-align: center;
                    margin-bottom: 1rem;
                    font-size: 0.9rem;
                }
                .modal-error { color: #ef4444; }
                .modal-success { color: #16a34a; }
                .spinner {
                    display: inline-block;
                    width: 16px;
                    height: 16px;
                    border: 2px solid rgba(20, 150, 191, 0.3);
                    border-radius: 50%;
                    border-top-color: #1496BF;
                    animation: spin 1s ease-in-out infinite;
                    vertical-align: middle;
                }
                @keyframes spin { to { transform: rotate(360deg); } }
                "#}
            </style>
        </div>
    }
}
