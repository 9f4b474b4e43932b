//! Horizontally paged activity card strip.
//!
//! Each mounted strip owns its own window state; the page passes the shared
//! viewport width and favorite set down as props.

use web_sys::MouseEvent;
use yew::prelude::*;

use crate::data::Activity;
use crate::state::carousel::Carousel;
use crate::state::favorites::FavoriteSet;

#[derive(Properties, PartialEq)]
pub struct ActivityCarouselProps {
    pub items: Vec<Activity>,
    pub viewport_width: f64,
    pub favorites: FavoriteSet,
    pub on_toggle_favorite: Callback<u32>,
}

#[function_component(ActivityCarousel)]
pub fn activity_carousel(props: &ActivityCarouselProps) -> Html {
    let carousel = use_state({
        let items = props.items.clone();
        let width = props.viewport_width;
        move || Carousel::new(items, width)
    });

    // Re-derive the page size whenever the viewport width changes.
    {
        let carousel = carousel.clone();
        use_effect_with_deps(
            move |width: &f64| {
                let mut next = (*carousel).clone();
                next.on_resize(*width);
                carousel.set(next);
                || ()
            },
            props.viewport_width,
        );
    }

    let show_prev = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*carousel).clone();
            next.prev();
            carousel.set(next);
        })
    };

    let show_next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*carousel).clone();
            next.next();
            carousel.set(next);
        })
    };

    html! {
        <div class="carousel">
            <button
                class="carousel-arrow carousel-arrow-left"
                onclick={show_prev}
                disabled={!carousel.has_prev()}
            >
                {"←"}
            </button>
            <button
                class="carousel-arrow carousel-arrow-right"
                onclick={show_next}
                disabled={!carousel.has_next()}
            >
                {"→"}
            </button>
            <div class="carousel-track">
                {
                    for carousel.visible_items().iter().map(|activity| {
                        let favorited = props.favorites.is_favorite(activity.id);
                        let toggle = {
                            let on_toggle_favorite = props.on_toggle_favorite.clone();
                            let id = activity.id;
                            Callback::from(move |_: MouseEvent| on_toggle_favorite.emit(id))
                        };
                        html! {
                            <div class="activity-card" key={activity.id}>
                                <div class="activity-image-wrap">
                                    <img src={activity.image} alt={activity.title} />
                                    <button
                                        class={classes!(
                                            "favorite-button",
                                            favorited.then_some("favorited")
                                        )}
                                        onclick={toggle}
                                    >
                                        { if favorited { "♥" } else { "♡" } }
                                    </button>
                                </div>
                                <div class="activity-meta">
                                    <span class="activity-category">
                                        {activity.icon}{" "}{activity.category}
                                    </span>
                                    <h3 class="activity-title">{activity.title}</h3>
                                </div>
                            </div>
                        }
                    })
                }
            </div>
        </div>
    }
}
