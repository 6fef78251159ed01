//! Static page content. Everything here is fixed at build time and read-only.

use crate::config;
use crate::reveal::Side;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimelineEntry {
    pub id: u8,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

impl TimelineEntry {
    /// 0-based position in the rendered timeline.
    pub fn index(&self) -> usize {
        usize::from(self.id - 1)
    }

    pub fn side(&self) -> Side {
        Side::for_index(self.index())
    }
}

pub const TIMELINE: [TimelineEntry; 14] = [
    TimelineEntry { id: 1, title: "Coffee Plantation", description: "Our lush coffee farms in Gihundwe hills", image: "/1.jpg" },
    TimelineEntry { id: 2, title: "Fresh Coffee Beans", description: "Hand-picked premium beans at peak ripeness", image: "/2.jpg" },
    TimelineEntry { id: 3, title: "Traditional Processing", description: "Time-honored processing methods", image: "/3.jpg" },
    TimelineEntry { id: 4, title: "Quality Control", description: "Ensuring every bean meets our standards", image: "/4.jpg" },
    TimelineEntry { id: 5, title: "Expert Roasting", description: "Roasting to bring out perfect flavors", image: "/5.jpg" },
    TimelineEntry { id: 6, title: "Precision Grinding", description: "Grinding for optimal extraction", image: "/6.jpg" },
    TimelineEntry { id: 7, title: "Brewing Mastery", description: "The art of brewing the perfect cup", image: "/7.jpg" },
    TimelineEntry { id: 8, title: "Final Product", description: "Rich, aromatic Muhari coffee", image: "/8.jpg" },
    TimelineEntry { id: 9, title: "Careful Packaging", description: "Preserving freshness and quality", image: "/9.jpg" },
    TimelineEntry { id: 10, title: "Local Community", description: "Supporting our farming community", image: "/10.jpg" },
    TimelineEntry { id: 11, title: "Sustainable Farming", description: "Environmentally conscious cultivation", image: "/11.jpg" },
    TimelineEntry { id: 12, title: "Coffee Culture", description: "Celebrating Rwanda's coffee heritage", image: "/12.jpg" },
    TimelineEntry { id: 13, title: "Export Quality", description: "Premium coffee for global markets", image: "/13.jpg" },
    TimelineEntry { id: 14, title: "United Fast Services", description: "Your trusted coffee partner", image: "/14.jpg" },
];

pub const MAX_RATING: u8 = 5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TestimonialEntry {
    pub name: &'static str,
    pub location: &'static str,
    pub quote: &'static str,
    pub avatar: &'static str,
    pub rating: u8,
}

pub const TESTIMONIALS: [TestimonialEntry; 6] = [
    TestimonialEntry {
        name: "Marie Uwimana",
        location: "Kigali, Rwanda",
        quote: "Muhari coffee is absolutely exceptional! The rich flavor and aroma remind me of home. United Fast Services delivers quality that exceeds expectations every single time.",
        avatar: "👩🏾‍💼",
        rating: 5,
    },
    TestimonialEntry {
        name: "Jean Baptiste Nzeyimana",
        location: "Rusizi, Rwanda",
        quote: "As a local resident, I'm incredibly proud of what United Fast Services has achieved. Their Muhari coffee represents the best of our region - pure excellence in every cup!",
        avatar: "👨🏾‍🌾",
        rating: 5,
    },
    TestimonialEntry {
        name: "Sarah Mbabazi",
        location: "Nyamagabe, Rwanda",
        quote: "I discovered Muhari coffee through a friend and now I can't start my day without it. The delivery is always prompt and the quality consistently outstanding. Simply the best!",
        avatar: "👩🏼‍💻",
        rating: 5,
    },
    TestimonialEntry {
        name: "David Mukamana",
        location: "Butare, Rwanda",
        quote: "United Fast Services doesn't just sell coffee - they share our culture and heritage. Muhari coffee is world-class quality that makes every Rwandan proud. Highly recommended!",
        avatar: "👨🏾‍🎓",
        rating: 5,
    },
    TestimonialEntry {
        name: "Thompson Nsabiyera",
        location: "Kigali, Rwanda",
        quote: "The moment I tasted Muhari coffee, I knew I had found something special. The complex flavors and smooth finish make it my absolute favorite. Worth every penny!",
        avatar: "👩🏻‍🍳",
        rating: 5,
    },
    TestimonialEntry {
        name: "Paul Habimana",
        location: "Kigali, Rwanda",
        quote: "Muhari coffee from United Fast Services showcases the very best of Rwandan agriculture. It's not just coffee - it's a testament to our nation's excellence and quality.",
        avatar: "👨🏾‍💼",
        rating: 5,
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ChannelKind {
    Email,
    Phone,
    International,
    Location,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContactChannel {
    pub kind: ChannelKind,
    pub title: &'static str,
    pub value: &'static str,
}

impl ContactChannel {
    /// URI opened when the card is clicked. Location has nothing to open.
    pub fn link(&self) -> Option<String> {
        match self.kind {
            ChannelKind::Email => Some(format!("mailto:{}", self.value)),
            ChannelKind::Phone => Some(format!("tel:{}", config::PHONE_LOCAL)),
            ChannelKind::International => Some(format!("tel:{}", config::PHONE_INTERNATIONAL)),
            ChannelKind::Location => None,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self.kind {
            ChannelKind::Email => "✉️",
            ChannelKind::Phone => "📱",
            ChannelKind::International => "📞",
            ChannelKind::Location => "📍",
        }
    }
}

pub const CONTACT_CHANNELS: [ContactChannel; 4] = [
    ContactChannel { kind: ChannelKind::Email, title: "Email", value: config::CONTACT_EMAIL },
    ContactChannel { kind: ChannelKind::Phone, title: "Phone", value: config::PHONE_LOCAL },
    ContactChannel { kind: ChannelKind::International, title: "International", value: config::PHONE_INTERNATIONAL_DISPLAY },
    ContactChannel { kind: ChannelKind::Location, title: "Location", value: config::LOCATION },
];

pub const OPENING_HOURS: [(&str, &str); 3] = [
    ("Monday - Friday", "8:00 AM - 6:00 PM"),
    ("Saturday", "9:00 AM - 4:00 PM"),
    ("Sunday", "Closed"),
];

pub const STORY_BADGES: [&str; 3] = ["🏔️ High Altitude Grown", "🌋 Volcanic Soil", "👐 Hand-Picked"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeline_ids_are_dense_and_ordered() {
        for (index, entry) in TIMELINE.iter().enumerate() {
            assert_eq!(usize::from(entry.id), index + 1);
            assert_eq!(entry.index(), index);
            assert_eq!(entry.image, format!("/{}.jpg", entry.id));
        }
    }

    #[test]
    fn timeline_sides_alternate_starting_left() {
        assert_eq!(TIMELINE[0].side(), Side::Left);
        assert_eq!(TIMELINE[1].side(), Side::Right);
        assert_eq!(TIMELINE[12].side(), Side::Left);
        assert_eq!(TIMELINE[13].side(), Side::Right);
    }

    #[test]
    fn ratings_stay_in_range() {
        assert!(TESTIMONIALS
            .iter()
            .all(|t| (1..=MAX_RATING).contains(&t.rating)));
    }

    #[test]
    fn channel_links() {
        assert_eq!(
            CONTACT_CHANNELS[0].link().as_deref(),
            Some("mailto:seandiallo@gmail.com")
        );
        assert_eq!(CONTACT_CHANNELS[1].link().as_deref(), Some("tel:0788777068"));
        assert_eq!(CONTACT_CHANNELS[2].link().as_deref(), Some("tel:+250788503455"));
        assert_eq!(CONTACT_CHANNELS[3].link(), None);
    }
}
