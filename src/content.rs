// src/content.rs
//
// Copy and tables for the landing page. Components only lay these out.
use crate::waitlist::{ClassTag, MembershipPlan};

pub const STUDIO_NAME: &str = "The Station";

/// In-page anchors, in nav order.
pub const SECTIONS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("about", "About"),
    ("classes", "Classes"),
    ("membership", "Membership"),
    ("amenities", "Amenities"),
    ("contact", "Contact"),
];

pub const BANNER_TEXT: &str =
    "Join our waitlist to express your interest and be considered for exclusive early member benefits!";

pub const HERO_TITLE: &str = "Move Your Body.";
pub const HERO_ACCENT: &str = "Build your community.";
pub const HERO_BLURB: &str = "A community of adults who love to move, express themselves, and connect with others. Join us at The Station.";
pub const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1686172164593-626f19be951c?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1600";

pub const ABOUT: &[&str] = &[
    "Founded by a professional dancer and instructor, The Station is more than just a studio, it's a community dedicated to movement, expression, and wellness.",
    "We believe that movement is for everyone. Whether you're a seasoned dancer, a yoga enthusiast, or just beginning your movement journey, you'll find a home here.",
    "Our state-of-the-art studio spaces are designed to inspire creativity and foster connection, while our welcoming lounge and coffee bar create the perfect environment to relax and build community.",
];
pub const ABOUT_IMAGE: &str = "https://images.unsplash.com/photo-1760542939833-9c5acf4c5203?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Offering {
    pub tag: ClassTag,
    pub blurb: &'static str,
    pub image: Option<&'static str>,
}

pub const OFFERINGS: &[Offering] = &[
    Offering {
        tag: ClassTag::Dance,
        blurb: "Contemporary, ballet, hip-hop, and more. Express yourself through movement with our expert instructors.",
        image: Some("https://images.unsplash.com/photo-1686172164593-626f19be951c?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080"),
    },
    Offering {
        tag: ClassTag::Yoga,
        blurb: "Find balance and strength through vinyasa, hatha, and restorative yoga practices for all levels.",
        image: Some("https://images.unsplash.com/photo-1651077837628-52b3247550ae?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080"),
    },
    Offering {
        tag: ClassTag::Calisthenics,
        blurb: "Build functional strength and mobility using bodyweight exercises in our guided sessions.",
        image: Some("https://images.unsplash.com/photo-1650091902075-9447b0b5d893?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080"),
    },
    Offering {
        tag: ClassTag::PrivateEvents,
        blurb: "Book a dance party or private event for your team, family, or friends. We offer a variety of options to suit your needs.",
        image: None,
    },
    Offering {
        tag: ClassTag::Workshops,
        blurb: "Join special events and workshops with guest instructors and explore new movement styles.",
        image: None,
    },
    Offering {
        tag: ClassTag::PrivateSessions,
        blurb: "Book one-on-one or small group sessions for personalized instruction and focused training.",
        image: None,
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tier {
    pub plan: MembershipPlan,
    pub perks: &'static [&'static str],
    pub popular: bool,
}

pub const TIERS: &[Tier] = &[
    Tier {
        plan: MembershipPlan::Starter,
        perks: &["4 classes per month", "Access to coffee lounge", "1 workshop per month"],
        popular: false,
    },
    Tier {
        plan: MembershipPlan::Unlimited,
        perks: &["Unlimited classes", "Unlimited workshops", "1 guest pass per month"],
        popular: true,
    },
    Tier {
        plan: MembershipPlan::Elite,
        perks: &[
            "Unlimited classes",
            "Unlimited workshops",
            "3 guest passes per month",
            "10% off merchandise",
            "2 private sessions/month",
        ],
        popular: false,
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Amenity {
    pub title: &'static str,
    pub blurb: &'static str,
    pub image: &'static str,
}

pub const AMENITIES: &[Amenity] = &[
    Amenity {
        title: "Lounge & Coffee Bar",
        blurb: "Relax in our welcoming lounge with premium coffee and espresso drinks. The perfect spot to unwind and connect with fellow members.",
        image: "https://images.unsplash.com/photo-1671363728782-7446c1772bc4?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080",
    },
    Amenity {
        title: "Curated Merchandise",
        blurb: "Shop our carefully selected collection of workout and dance apparel, designed for movement and style. Members enjoy exclusive discounts.",
        image: "https://images.unsplash.com/photo-1650091902075-9447b0b5d893?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080",
    },
    Amenity {
        title: "An Inclusive Community",
        blurb: "Join a welcoming space where everyone belongs. We celebrate diversity and create connections through the joy of movement.",
        image: "https://images.unsplash.com/photo-1529156069898-49953e39b3ac?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080",
    },
];

pub const ADDRESS: &[&str] = &["123 Movement Street", "Downtown District", "Your City, ST 12345"];
pub const PHONE: &str = "(555) 123-4567";
pub const EMAIL: &str = "hello@thestation.studio";

pub const HOURS: &[&str] = &[
    "Monday - Friday: 6:00 AM - 9:00 PM",
    "Saturday: 8:00 AM - 7:00 PM",
    "Sunday: 9:00 AM - 6:00 PM",
];

/// (label, href)
pub const SOCIALS: &[(&str, &str)] = &[("Instagram", "#"), ("Facebook", "#")];

pub const FOOTER_TAGLINE: &str =
    "A movement studio where creativity, wellness, and community come together.";
pub const COPYRIGHT: &str = "© 2024 The Station. All rights reserved.";

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn one_tier_per_plan_and_one_popular() {
        let plans: Vec<_> = TIERS.iter().map(|t| t.plan).collect();
        assert_eq!(plans, MembershipPlan::ALL.to_vec());
        assert_eq!(TIERS.iter().filter(|t| t.popular).count(), 1);
    }

    #[test]
    fn every_class_tag_has_a_card() {
        let tags: HashSet<_> = OFFERINGS.iter().map(|o| o.tag).collect();
        assert_eq!(tags.len(), OFFERINGS.len());
        for tag in ClassTag::ALL {
            assert!(tags.contains(&tag), "{tag:?}");
        }
    }

    #[test]
    fn section_ids_unique() {
        let ids: HashSet<_> = SECTIONS.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids.len(), SECTIONS.len());
    }
}
