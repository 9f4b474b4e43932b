//! The guide itself: one continuous scrollable page.
//!
//! The page owns the derived scroll state, the shared favorite set and the
//! viewport width; sections and card strips hang off those. The scroll
//! listener is registered on mount and dropped on teardown, and only ever
//! feeds the pure reducer in `state::section`.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_hooks::use_window_size;

use crate::components::carousel::ActivityCarousel;
use crate::components::faq::Faq;
use crate::components::login_modal::LoginModal;
use crate::components::map_view::MapView;
use crate::data::{BOOKING_OPTIONS, ITINERARY_PREVIEW, THINGS_TO_DO};
use crate::state::favorites::FavoriteSet;
use crate::state::section::{
    self, ScrollState, Section, SectionAnchors, SECTION_SCROLL_MARGIN,
};
use crate::state::viewport::is_mobile;

const HERO_IMAGE: &str = "https://cdn.prod.rexby.com/image/d80440c7-36f3-49f7-b69b-b390f0cf7b8f";
const AUTHOR_AVATAR: &str = "https://cdn.prod.rexby.com/image/90ca806e-c988-4993-8bcb-302fff6b27db";

fn anchor_offset(document: &web_sys::Document, id: &str) -> Option<f64> {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        .map(|element| element.offset_top() as f64)
}

/// Live anchor measurements; a section that has not mounted reads as `None`.
fn measure_anchors(document: &web_sys::Document) -> SectionAnchors {
    SectionAnchors {
        things_to_do: anchor_offset(document, Section::ThingsToDo.anchor_id()),
        map: anchor_offset(document, Section::Map.anchor_id()),
        itinerary: anchor_offset(document, Section::Itinerary.anchor_id()),
        chat: anchor_offset(document, Section::Chat.anchor_id()),
    }
}

/// Animated jump leaving the anchor just under the viewport top. A section
/// that is not mounted is a no-op.
fn scroll_to_section(section: Section) {
    let Some(window) = window() else { return };
    let Some(document) = window.document() else { return };
    let Some(offset) = anchor_offset(&document, section.anchor_id()) else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(offset - SECTION_SCROLL_MARGIN);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

fn scroll_to_top() {
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[function_component(Guide)]
pub fn guide() -> Html {
    let scroll = use_state_eq(ScrollState::default);
    let favorites = use_state(FavoriteSet::new);
    let menu_open = use_state(|| false);
    let show_login = use_state(|| false);
    let (viewport_width, _viewport_height) = use_window_size();

    // Scroll listener: subscribe on mount, unsubscribe on teardown. Every
    // event re-measures the anchors and runs the reducer.
    {
        let scroll = scroll.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let scroll = scroll.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                let scroll_y = win.scroll_y().unwrap_or(0.0);
                                let anchors = win
                                    .document()
                                    .map(|document| measure_anchors(&document))
                                    .unwrap_or_default();
                                scroll.set(section::on_scroll(scroll_y, &anchors));
                            }
                        }
                    });
                    window
                        .add_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            let _ = win.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            );
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    let on_toggle_favorite = {
        let favorites = favorites.clone();
        Callback::from(move |id: u32| {
            let mut next = (*favorites).clone();
            next.toggle(id);
            favorites.set(next);
        })
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let open_login = {
        let show_login = show_login.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            show_login.set(true);
        })
    };

    let close_login = {
        let show_login = show_login.clone();
        Callback::from(move |_| show_login.set(false))
    };

    let jump_to = {
        let menu_open = menu_open.clone();
        move |section: Section| {
            let menu_open = menu_open.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                menu_open.set(false);
                scroll_to_section(section);
            })
        }
    };

    let on_scroll_top = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_top();
    });

    let active = scroll.active_section;
    let compact = is_mobile(viewport_width);

    let section_nav = html! {
        <nav class="section-nav">
            {
                for Section::ALL.iter().map(|section| html! {
                    <button
                        key={section.anchor_id()}
                        class={classes!(
                            "section-nav-link",
                            (*section == active).then(|| "active")
                        )}
                        onclick={jump_to(*section)}
                    >
                        {section.nav_label()}
                    </button>
                })
            }
        </nav>
    };

    let header = if scroll.header_visible() {
        html! {
            <div class="header-row">
                <div class="brand">
                    <div class="brand-mark">{"@"}</div>
                    <span class="brand-name">{"Rexby"}</span>
                </div>
                { if !compact { section_nav.clone() } else { html! {} } }
                <div class="header-actions">
                    <button class="outline-button" onclick={open_login.clone()}>
                        {"Log in"}
                    </button>
                    <button class="icon-button">{"🌐"}</button>
                    <button class="icon-button" onclick={toggle_menu}>
                        { if *menu_open { "✕" } else { "☰" } }
                    </button>
                </div>
            </div>
        }
    } else {
        html! {
            <div class="header-row">
                <span class="brand-name condensed-title">
                    {"Unclear? Ask me a question"}
                </span>
                <div class="header-actions">
                    <button class="outline-button">{"Preview"}</button>
                    <button class="gradient-button">{"Get access"}</button>
                </div>
            </div>
        }
    };

    html! {
        <div class="guide-page">
            <header class="page-header">
                { header }
                {
                    if *menu_open {
                        html! {
                            <div class="menu-dropdown">
                                <div class="menu-caption">{"REXBY"}</div>
                                <a href="#" class="menu-link">{"About us"}</a>
                                <a href="#" class="menu-link">{"Start exploring"}</a>
                                <a href="#" class="menu-link">{"Become a travel creator"}</a>
                                { if compact { section_nav } else { html! {} } }
                                <div class="menu-footer">
                                    <button class="menu-link" onclick={open_login.clone()}>
                                        {"Log in"}
                                    </button>
                                </div>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </header>

            <button class="floating-back">{"←"}</button>

            <main class="page-main">
                <section id={Section::Home.anchor_id()} class="hero-section">
                    <div class="hero-image">
                        <img src={HERO_IMAGE} alt="Person in hammock with mountain view" />
                    </div>
                    <div class="hero-body">
                        <h1>{"Norway Guide"}</h1>
                        <div class="author-chip">
                            <img src={AUTHOR_AVATAR} alt="Åsa Steinars" />
                            <div>
                                <span class="author-name">{"Guide by Åsa Steinars"}</span>
                                <div class="author-meta">
                                    <span>{"Norway"}</span>
                                    <span class="sep">{"•"}</span>
                                    <span class="rating">{"★ New"}</span>
                                </div>
                            </div>
                        </div>
                        <p>
                            {"Norway is my second home. I was born in Norway and I lived there \
                              until I was 7 years old. I often come back and I love this country \
                              almost as much as Iceland. Last summer I spent 3 months on the road \
                              with my van exploring everything from the south tip up to Lofoten."}
                        </p>
                        <p>
                            {"This guide is my best tips for Norway to make sure you get the most \
                              out of your trip. It's focused around the fjords in the west and \
                              Lofoten in the north. In my opinion, it's the best areas to explore \
                              in Norway."}
                        </p>
                        <div class="hero-divider"></div>
                        <div class="hero-buttons">
                            <button class="outline-button wide">{"Preview"}</button>
                            <button class="gradient-button wide">{"GET ACCESS"}</button>
                        </div>
                        <div class="social-proof">
                            <span>{"Used for 100+ trips"}</span>
                        </div>
                    </div>
                </section>

                <div class="divider"></div>

                <div class="feature-grid">
                    <div class="feature"><span class="feature-icon">{"👤"}</span>{"161 things to do"}</div>
                    <div class="feature"><span class="feature-icon">{"💬"}</span>{"Priority in chat"}</div>
                    <div class="feature"><span class="feature-icon">{"🗺️"}</span>{"Interactive Map"}</div>
                    <div class="feature"><span class="feature-icon">{"⬇️"}</span>{"Offline usage in app"}</div>
                    <div class="feature"><span class="feature-icon">{"🧭"}</span>{"1 itinerary"}</div>
                    <div class="feature"><span class="feature-icon">{"🧭"}</span>{"Itinerary Builder access"}</div>
                </div>

                <div class="divider"></div>

                <section id={Section::ThingsToDo.anchor_id()} class="card-section">
                    <div class="card-section-intro">
                        <h2>{"161 things to do"}</h2>
                        <p>
                            {"Get a curated list of all the best things to do with exact \
                              location, detailed info and inspiring content"}
                        </p>
                        <a href="#" class="preview-link">{"Preview for FREE"}</a>
                    </div>
                    <div class="card-section-strip">
                        <ActivityCarousel
                            items={THINGS_TO_DO.to_vec()}
                            viewport_width={viewport_width}
                            favorites={(*favorites).clone()}
                            on_toggle_favorite={on_toggle_favorite.clone()}
                        />
                    </div>
                </section>

                <section id={Section::Map.anchor_id()} class="map-section">
                    <h2>{"Interactive Map"}</h2>
                    <p class="section-subtitle">
                        {"Get an Interactive, playful and visually appealing map that helps \
                          you navigate the noise"}
                    </p>
                    <div class="map-card">
                        <MapView />
                    </div>
                </section>

                <section id={Section::Itinerary.anchor_id()} class="card-section">
                    <div class="card-section-intro">
                        <h2>{"1 itinerary"}</h2>
                        <p>
                            {"Get expertly curated itineraries that help you organise all the \
                              'things to do' in an ideal time order"}
                        </p>
                        <a href="#" class="preview-link">{"Preview for FREE"}</a>
                    </div>
                    <div class="card-section-strip itinerary-strip">
                        <div class="builder-card">
                            <div class="builder-icon">{"🧭"}</div>
                            <h3>{"Itinerary Builder"}</h3>
                            <p>{"Create your own itinerary"}</p>
                        </div>
                        <div class="activity-card">
                            <div class="activity-image-wrap">
                                <img src={ITINERARY_PREVIEW.image} alt={ITINERARY_PREVIEW.title} />
                                <button
                                    class={classes!(
                                        "favorite-button",
                                        favorites.is_favorite(ITINERARY_PREVIEW.id).then(|| "favorited")
                                    )}
                                    onclick={
                                        let on_toggle_favorite = on_toggle_favorite.clone();
                                        Callback::from(move |_: MouseEvent| {
                                            on_toggle_favorite.emit(ITINERARY_PREVIEW.id)
                                        })
                                    }
                                >
                                    { if favorites.is_favorite(ITINERARY_PREVIEW.id) { "♥" } else { "♡" } }
                                </button>
                            </div>
                        </div>
                        <div class="placeholder-card">
                            {"Preview for FREE"}
                        </div>
                    </div>
                </section>

                <section class="card-section">
                    <div class="card-section-intro">
                        <h2>{"Booking Page"}</h2>
                        <p>
                            {"Get a curated list of reliable options when booking tours, \
                              hotels, and car rentals"}
                        </p>
                        <a href="#" class="preview-link">{"Preview for FREE"}</a>
                    </div>
                    <div class="card-section-strip">
                        <ActivityCarousel
                            items={BOOKING_OPTIONS.to_vec()}
                            viewport_width={viewport_width}
                            favorites={(*favorites).clone()}
                            on_toggle_favorite={on_toggle_favorite}
                        />
                    </div>
                </section>

                <div class="divider"></div>

                <div class="author-section">
                    <div class="author-card">
                        <img src={HERO_IMAGE} alt="Person relaxing in hammock with mountain view" />
                        <div class="author-card-body">
                            <div class="author-card-stats">
                                {"161 things to do | 1 itinerary | 0 travel tips"}
                            </div>
                            <h2>{"Norway Guide"}</h2>
                            <div class="author-card-region">{"Norway"}</div>
                        </div>
                    </div>
                    <div class="author-bio">
                        <h1>{"Guide by Åsa Steinars"}</h1>
                        <p class="joined">{"Joined in April 2022"}</p>
                        <div class="author-socials">
                            <a href="#" class="icon-button">{"🌐"}</a>
                            <a href="#" class="icon-button">{"📸"}</a>
                            <a href="#" class="icon-button">{"🐦"}</a>
                        </div>
                        <p>
                            {"Åsa Steinars is an adventure photographer and videographer from \
                              Iceland. Growing up in the north, surrounded by extreme landscapes \
                              and forever changing weather has given her a tight bond to nature \
                              and its forces. This you can clearly see in her photography. She \
                              works as a full-time content creator, helping people to travel \
                              Iceland like she does. She has a total following of almost 2 \
                              million across her social media platforms."}
                        </p>
                        <div class="author-actions">
                            <button class="outline-button">{"Message"}</button>
                            <button class="outline-button">{"Storefront"}</button>
                            <button class="outline-button">{"Guide Affiliate Program"}</button>
                        </div>
                    </div>
                </div>

                <section id={Section::Chat.anchor_id()} class="chat-section">
                    <Faq />
                </section>
            </main>

            {
                if scroll.scroll_to_top_visible {
                    html! {
                        <button class="scroll-top-button" onclick={on_scroll_top}>
                            {"↑"}
                        </button>
                    }
                } else {
                    html! {}
                }
            }

            {
                if *show_login {
                    html! { <LoginModal on_close={close_login} /> }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                .guide-page {
                    min-height: 100vh;
                    background: #fff;
                    color: #14142b;
                    font-family: 'Poppins', -apple-system, BlinkMacSystemFont, sans-serif;
                }
                .page-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    background: #fff;
                    border-bottom: 1px solid #e5e7eb;
                    padding: 0.5rem 1rem;
                    z-index: 1000;
                }
                .header-row {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    height: 3.5rem;
                    max-width: 80rem;
                    margin: 0 auto;
                    gap: 1rem;
                }
                .brand {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }
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
                .condensed-title { white-space: nowrap; overflow: hidden; text-overflow: ellipsis; }
                .section-nav { display: flex; gap: 0.25rem; }
                .section-nav-link {
                    background: none;
                    border: none;
                    border-radius: 9999px;
                    padding: 0.4rem 0.9rem;
                    font-size: 0.85rem;
                    color: #4e4b66;
                    cursor: pointer;
                }
                .section-nav-link:hover { background: #f3f4f6; }
                .section-nav-link.active {
                    background: #e0f2fe;
                    color: #0f6e8c;
                    font-weight: 600;
                }
                .header-actions { display: flex; align-items: center; gap: 0.5rem; }
                .outline-button {
                    border: 1px solid #D6D8E7;
                    border-radius: 8px;
                    background: #fff;
                    padding: 0.4rem 1.2rem;
                    font-weight: 600;
                    font-size: 0.85rem;
                    letter-spacing: 0.05em;
                    color: #14142b;
                    cursor: pointer;
                    white-space: nowrap;
                }
                .outline-button:hover { background: #f9fafb; }
                .gradient-button {
                    border: none;
                    border-radius: 8px;
                    background: linear-gradient(to right, #1496BF, #0f6e8c);
                    color: #fff;
                    padding: 0.4rem 1.2rem;
                    font-weight: 600;
                    font-size: 0.85rem;
                    letter-spacing: 0.05em;
                    cursor: pointer;
                    white-space: nowrap;
                }
                .wide { width: 50%; height: 3rem; }
                .icon-button {
                    background: none;
                    border: none;
                    border-radius: 50%;
                    padding: 0.4rem;
                    font-size: 1rem;
                    color: #6b7280;
                    cursor: pointer;
                    text-decoration: none;
                }
                .icon-button:hover { background: #f3f4f6; }
                .menu-dropdown {
                    position: absolute;
                    right: 1rem;
                    top: 4.25rem;
                    width: 16rem;
                    background: #fff;
                    border: 1px solid #e5e7eb;
                    border-radius: 12px;
                    box-shadow: 0 12px 32px rgba(0, 0, 0, 0.12);
                    padding: 1rem;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }
                .menu-caption {
                    color: #9ca3af;
                    text-transform: uppercase;
                    font-size: 0.75rem;
                    font-weight: 500;
                }
                .menu-link {
                    color: #374151;
                    font-weight: 500;
                    font-size: 0.95rem;
                    text-decoration: none;
                    background: none;
                    border: none;
                    text-align: left;
                    cursor: pointer;
                    padding: 0;
                }
                .menu-link:hover { color: #1496BF; }
                .menu-footer { border-top: 1px solid #f3f4f6; padding-top: 0.75rem; }
                .menu-dropdown .section-nav { flex-direction: column; align-items: flex-start; }
                .floating-back {
                    position: fixed;
                    top: 6rem;
                    left: 1rem;
                    z-index: 20;
                    background: #fff;
                    border: none;
                    border-radius: 50%;
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15);
                    width: 2.5rem;
                    height: 2.5rem;
                    cursor: pointer;
                }
                .page-main {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 6rem 1.5rem 5rem;
                }
                .divider { border-bottom: 1px solid #e5e7eb; margin: 2rem 0; }
                .hero-section {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                    padding: 1.5rem 0;
                }
                .hero-image img {
                    width: 100%;
                    max-width: 320px;
                    border-radius: 12px;
                    object-fit: cover;
                }
                .hero-body h1 { font-size: 2.25rem; margin: 0 0 1rem; }
                .hero-body p {
                    color: #4b5563;
                    font-size: 0.9rem;
                    line-height: 1.7;
                    margin: 0 0 1rem;
                }
                .author-chip {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin-bottom: 1.5rem;
                }
                .author-chip img {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 50%;
                    border: 2px solid #fff;
                    box-shadow: 0 1px 4px rgba(0, 0, 0, 0.15);
                }
                .author-name { font-weight: 500; display: block; }
                .author-meta {
                    display: flex;
                    gap: 0.5rem;
                    color: #6b7280;
                    font-size: 0.8rem;
                }
                .rating { color: #b45309; }
                .hero-divider { border-bottom: 1px solid #e5e7eb; margin: 1.5rem 0; }
                .hero-buttons { display: flex; gap: 1rem; margin-bottom: 1.5rem; }
                .social-proof { text-align: center; }
                .social-proof span {
                    background: #eff6ff;
                    color: #1d4ed8;
                    border-radius: 9999px;
                    padding: 0.25rem 0.9rem;
                    font-size: 0.85rem;
                }
                .feature-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 1.5rem;
                    padding: 1.5rem 1rem;
                }
                .feature {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    color: #374151;
                    font-size: 0.95rem;
                }
                .feature-icon { font-size: 1.1rem; }
                .card-section {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 1.5rem;
                    padding: 3rem 0;
                }
                .card-section-intro h2 { font-size: 1.5rem; margin: 0; }
                .card-section-intro p {
                    color: #a0a3bd;
                    font-size: 0.85rem;
                    line-height: 1.7;
                    margin-top: 0.5rem;
                }
                .preview-link {
                    color: #1496BF;
                    font-weight: 500;
                    text-decoration: none;
                    display: inline-block;
                    margin-top: 1rem;
                }
                .preview-link:hover { text-decoration: underline; }
                .card-section-strip { position: relative; min-width: 0; }
                .carousel { position: relative; }
                .carousel-track {
                    display: flex;
                    gap: 1.5rem;
                    overflow: hidden;
                    padding: 0 0.5rem;
                }
                .carousel-arrow {
                    position: absolute;
                    top: 50%;
                    transform: translateY(-50%);
                    z-index: 10;
                    background: #fff;
                    border: none;
                    border-radius: 50%;
                    width: 2.25rem;
                    height: 2.25rem;
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15);
                    cursor: pointer;
                }
                .carousel-arrow:disabled { opacity: 0.3; cursor: default; }
                .carousel-arrow-left { left: 0.5rem; }
                .carousel-arrow-right { right: 0.5rem; }
                .activity-card { flex: 1; min-width: 0; }
                .activity-image-wrap { position: relative; }
                .activity-image-wrap img {
                    width: 100%;
                    height: 18rem;
                    object-fit: cover;
                    border-radius: 16px;
                }
                .favorite-button {
                    position: absolute;
                    top: 0.75rem;
                    right: 0.75rem;
                    background: #fff;
                    border: none;
                    border-radius: 50%;
                    width: 2.25rem;
                    height: 2.25rem;
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15);
                    color: #6b7280;
                    font-size: 1.1rem;
                    cursor: pointer;
                }
                .favorite-button.favorited { color: #ef4444; }
                .activity-meta { padding: 0.75rem 0.25rem; }
                .activity-category {
                    color: #6b7280;
                    font-size: 0.8rem;
                }
                .activity-title { font-size: 1.05rem; font-weight: 500; margin: 0.25rem 0 0; }
                .itinerary-strip {
                    display: flex;
                    gap: 1.5rem;
                    overflow-x: auto;
                    padding: 0 0.5rem;
                }
                .itinerary-strip .activity-card { min-width: 250px; flex-shrink: 0; }
                .builder-card, .placeholder-card {
                    min-width: 250px;
                    flex-shrink: 0;
                    height: 20rem;
                    border-radius: 16px;
                    border: 1px dashed #d1d5db;
                    background: #f9fafb;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    gap: 0.25rem;
                }
                .builder-card:hover, .placeholder-card:hover {
                    border-color: #9ca3af;
                    background: #f3f4f6;
                }
                .builder-card .builder-icon { font-size: 2.5rem; }
                .builder-card h3 { margin: 0; color: #4b5563; font-weight: 500; }
                .builder-card p { margin: 0; color: #6b7280; font-size: 0.85rem; }
                .placeholder-card {
                    border-style: solid;
                    font-weight: 600;
                    letter-spacing: 0.05em;
                    font-size: 0.9rem;
                    color: #14142b;
                }
                .map-section { padding: 1.5rem 0; }
                .map-section h2 { font-size: 1.5rem; margin: 0; }
                .section-subtitle {
                    color: #a0a3bd;
                    font-size: 0.85rem;
                    padding: 0.5rem 0 1rem;
                    margin: 0;
                }
                .map-card {
                    border: 1px solid #e5e7eb;
                    border-radius: 12px;
                    overflow: hidden;
                    box-shadow: 0 6px 18px rgba(0, 0, 0, 0.08);
                }
                .map-view { position: relative; }
                .map-frame {
                    width: 100%;
                    height: 65vh;
                    border: none;
                    display: block;
                }
                .map-expand {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    background: #fff;
                    border-radius: 50%;
                    width: 2.25rem;
                    height: 2.25rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15);
                    color: #374151;
                    text-decoration: none;
                }
                .map-legend {
                    position: absolute;
                    bottom: 3.5rem;
                    left: 1rem;
                    background: rgba(255, 255, 255, 0.92);
                    border-radius: 10px;
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15);
                    padding: 0.75rem 1rem;
                    font-size: 0.8rem;
                }
                .map-legend h3 { margin: 0 0 0.4rem; font-size: 0.85rem; }
                .legend-row {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: #374151;
                    margin-bottom: 0.2rem;
                }
                .dot { width: 0.6rem; height: 0.6rem; border-radius: 50%; display: inline-block; }
                .dot-blue { background: #3b82f6; }
                .dot-green { background: #22c55e; }
                .dot-red { background: #ef4444; }
                .map-spots {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                    padding: 0.75rem 1rem;
                    background: #fff;
                    border-top: 1px solid #f3f4f6;
                }
                .map-spot {
                    background: #f3f4f6;
                    border-radius: 9999px;
                    padding: 0.25rem 0.75rem;
                    font-size: 0.8rem;
                    color: #374151;
                    white-space: nowrap;
                }
                .author-section {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 2rem;
                    padding: 2rem 0;
                }
                .author-card {
                    width: 100%;
                    max-width: 24rem;
                    background: #fff;
                    border-radius: 16px;
                    box-shadow: 0 0 10px 2px rgba(0, 0, 0, 0.25);
                    padding: 0.5rem 0.5rem 1rem;
                }
                .author-card img {
                    width: 100%;
                    height: 20rem;
                    object-fit: cover;
                    border-radius: 10px;
                }
                .author-card-body { padding: 1rem; }
                .author-card-stats { color: #6b7280; font-size: 0.85rem; }
                .author-card-body h2 { margin: 0.5rem 0 0.25rem; font-size: 1.25rem; }
                .author-card-region { color: #4b5563; }
                .author-bio { width: 100%; }
                .author-bio h1 { font-size: 1.9rem; margin: 0; text-align: center; }
                .joined { color: #6b7280; text-align: center; margin-top: 0.25rem; }
                .author-socials {
                    display: flex;
                    justify-content: center;
                    gap: 1rem;
                    margin: 1rem 0;
                }
                .author-socials .icon-button { border: 1px solid #d1d5db; }
                .author-bio p {
                    color: #4e4b66;
                    line-height: 1.7;
                    font-size: 0.95rem;
                    text-align: center;
                }
                .author-actions {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 0.75rem;
                    margin-top: 1.5rem;
                }
                .chat-section { border-top: 1px solid #e5e7eb; padding: 1.5rem 0; }
                .scroll-top-button {
                    position: fixed;
                    bottom: 5rem;
                    right: 1.5rem;
                    z-index: 10;
                    background: #fff;
                    border: 1px solid #e5e7eb;
                    border-radius: 50%;
                    width: 3rem;
                    height: 3rem;
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15);
                    font-size: 1.1rem;
                    cursor: pointer;
                }
                .scroll-top-button:hover { background: #f9fafb; }
                @media (min-width: 1024px) {
                    .hero-section { flex-direction: row; }
                    .hero-image { width: 33%; }
                    .hero-body { width: 67%; padding-right: 4rem; }
                    .feature-grid { grid-template-columns: repeat(3, 1fr); }
                    .card-section { grid-template-columns: 1fr 3fr; }
                    .author-section { flex-direction: row; align-items: flex-start; }
                    .author-bio h1, .author-bio p, .joined { text-align: left; }
                    .author-socials, .author-actions { justify-content: flex-start; }
                }
                "#}
            </style>
        </div>
    }
}
