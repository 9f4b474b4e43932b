//! Embedded map of the guide region with the spot catalog.
//!
//! The mapping engine itself is an external service; this component only
//! frames it and lists the marked spots. Nothing on the page reads state
//! back out of the map.

use yew::prelude::*;

const EMBED_URL: &str =
    "https://www.openstreetmap.org/export/embed.html?bbox=2.0%2C57.5%2C31.0%2C71.5&layer=mapnik";
const FULL_MAP_URL: &str = "https://www.openstreetmap.org/#map=5/65.0/15.0";

#[derive(Clone, Copy, PartialEq)]
struct MapSpot {
    glyph: &'static str,
    title: &'static str,
}

const SPOTS: &[MapSpot] = &[
    MapSpot { glyph: "📷", title: "Bergen Viewpoint" },
    MapSpot { glyph: "🍽️", title: "Oslo Street Food" },
    MapSpot { glyph: "🥾", title: "Tromsø Hike Trail" },
    MapSpot { glyph: "🏨", title: "Fjordside Lodge" },
    MapSpot { glyph: "⛺", title: "Camping Spot in Geiranger" },
    MapSpot { glyph: "🏔️", title: "Northern Lights Viewpoint" },
];

#[function_component(MapView)]
pub fn map_view() -> Html {
    html! {
        <div class="map-view">
            <iframe
                class="map-frame"
                src={EMBED_URL}
                title="Interactive map of Norway"
            />
            <a
                class="map-expand"
                href={FULL_MAP_URL}
                target="_blank"
                rel="noopener"
            >
                {"⤢"}
            </a>
            <div class="map-legend">
                <h3>{"Map Legend"}</h3>
                <div class="legend-row"><span class="dot dot-blue"></span>{"Hiking Trails"}</div>
                <div class="legend-row"><span class="dot dot-green"></span>{"Camping Spots"}</div>
                <div class="legend-row"><span class="dot dot-red"></span>{"Must-see Locations"}</div>
            </div>
            <div class="map-spots">
                {
                    for SPOTS.iter().map(|spot| html! {
                        <span class="map-spot" key={spot.title}>
                            {spot.glyph}{" "}{spot.title}
                        </span>
                    })
                }
            </div>
        </div>
    }
}
