//! Fixed card catalogs for the guide page. Each carousel receives its list
//! once at construction; nothing here is fetched or mutated.

#[derive(Clone, Debug, PartialEq)]
pub struct Activity {
    pub id: u32,
    pub image: &'static str,
    pub icon: &'static str,
    pub category: &'static str,
    pub title: &'static str,
}

pub const THINGS_TO_DO: &[Activity] = &[
    Activity {
        id: 1,
        image: "https://cdn.prod.rexby.com/image/7d1ae366-da86-4bff-95dd-a0c12b5c160e",
        icon: "🚗",
        category: "Sightseeing",
        title: "One of my favourite spots",
    },
    Activity {
        id: 2,
        image: "https://cdn.prod.rexby.com/image/79f7722f-946c-4676-a746-7071caff82d9",
        icon: "🚗",
        category: "Sightseeing",
        title: "Swing with amazing views",
    },
    Activity {
        id: 3,
        image: "https://cdn.prod.rexby.com/image/e5d98dda-0943-4ad9-b33c-ac41d1721742",
        icon: "🏔️",
        category: "Hike",
        title: "Beautiful view point",
    },
    Activity {
        id: 4,
        image: "https://cdn.prod.rexby.com/image/c2c3b8f2-2542-42bb-bd67-355cf1726aa9",
        icon: "🚗",
        category: "Sightseeing",
        title: "Hidden waterfall",
    },
    Activity {
        id: 5,
        image: "https://cdn.prod.rexby.com/image/fd88e63f-f474-4619-a0a1-2144303657a6",
        icon: "🍽️",
        category: "Food",
        title: "Local cuisine experience",
    },
    Activity {
        id: 6,
        image: "https://cdn.prod.rexby.com/image/d80440c7-36f3-49f7-b69b-b390f0cf7b8f",
        icon: "🏔️",
        category: "Hike",
        title: "Mountain top experience",
    },
];

// Ids continue past the things-to-do list so a heart always maps to one card.
pub const BOOKING_OPTIONS: &[Activity] = &[
    Activity {
        id: 7,
        image: "https://cdn.prod.rexby.com/image/bf78c0b2-474b-42bb-813c-3d554812e474",
        icon: "🚗",
        category: "Sightseeing",
        title: "One of my favourite spots",
    },
    Activity {
        id: 8,
        image: "https://cdn.prod.rexby.com/image/0eb73fc4-23fe-400f-82e9-876972b90d3a",
        icon: "🚗",
        category: "Sightseeing",
        title: "Swing with amazing views",
    },
    Activity {
        id: 9,
        image: "https://cdn.prod.rexby.com/image/13e041ce-a581-4fb7-acbc-eafd6360ae90",
        icon: "🏔️",
        category: "Hike",
        title: "Beautiful view point",
    },
    Activity {
        id: 10,
        image: "https://cdn.prod.rexby.com/image/fd0d5c6f-6937-44a4-bb52-3fb9bae306ea",
        icon: "🚗",
        category: "Sightseeing",
        title: "Hidden waterfall",
    },
    Activity {
        id: 11,
        image: "https://cdn.prod.rexby.com/image/74bed1d6-0da0-4fec-a95d-723160bc3e76",
        icon: "🍽️",
        category: "Food",
        title: "Local cuisine experience",
    },
    Activity {
        id: 12,
        image: "https://cdn.prod.rexby.com/image/d80440c7-36f3-49f7-b69b-b390f0cf7b8f",
        icon: "🏔️",
        category: "Hike",
        title: "Mountain top experience",
    },
];

/// The one finished itinerary shown next to the builder card.
pub const ITINERARY_PREVIEW: Activity = Activity {
    id: 13,
    image: "https://cdn.prod.rexby.com/image/a19df367-fd98-4195-851c-8e4f2bfa065f",
    icon: "🚗",
    category: "Sightseeing",
    title: "Fjords and Lofoten in 10 days",
};
