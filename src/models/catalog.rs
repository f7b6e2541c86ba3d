use serde::Serialize;

/// A service offered by the shop. Display/reference data only — bookings
/// record the service by display name, not by id.
#[derive(Debug, Clone, Serialize)]
pub struct Service {
    pub id: &'static str,
    pub name: &'static str,
    pub price: u32,
    pub duration: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct GalleryItem {
    pub id: u32,
    pub url: &'static str,
    pub title: &'static str,
}

pub static SERVICES: [Service; 5] = [
    Service {
        id: "s1",
        name: "Classic Haircut",
        price: 25,
        duration: "45 mins",
        description: "Precision cut tailored to your head shape and style preferences.",
    },
    Service {
        id: "s2",
        name: "Beard Styling",
        price: 15,
        duration: "30 mins",
        description: "Detailed shaping and grooming of your facial hair with hot towel finish.",
    },
    Service {
        id: "s3",
        name: "Hair Coloring",
        price: 45,
        duration: "90 mins",
        description: "Professional coloring to cover greys or change your look completely.",
    },
    Service {
        id: "s4",
        name: "Luxury Facial",
        price: 35,
        duration: "40 mins",
        description: "Deep cleansing and rejuvenation for a fresh, healthy glow.",
    },
    Service {
        id: "s5",
        name: "Head Massage",
        price: 20,
        duration: "20 mins",
        description: "Relaxing pressure point massage to relieve stress and tension.",
    },
];

pub static GALLERY_ITEMS: [GalleryItem; 6] = [
    GalleryItem {
        id: 1,
        url: "https://images.unsplash.com/photo-1585747860715-2ba37e788b70?auto=format&fit=crop&q=80&w=800",
        title: "Modern Fade",
    },
    GalleryItem {
        id: 2,
        url: "https://images.unsplash.com/photo-1621605815841-aa33c6ceb02c?auto=format&fit=crop&q=80&w=800",
        title: "Textured Crop",
    },
    GalleryItem {
        id: 3,
        url: "https://images.unsplash.com/photo-1599351431247-f10b218163e3?auto=format&fit=crop&q=80&w=800",
        title: "Executive Contour",
    },
    GalleryItem {
        id: 4,
        url: "https://images.unsplash.com/photo-1503951914875-452162b0f3f1?auto=format&fit=crop&q=80&w=800",
        title: "Beard Perfection",
    },
    GalleryItem {
        id: 5,
        url: "https://images.unsplash.com/photo-1605497788044-5a32c7078486?auto=format&fit=crop&q=80&w=800",
        title: "Classic Side Part",
    },
    GalleryItem {
        id: 6,
        url: "https://images.unsplash.com/photo-1592647425447-181099a8975c?auto=format&fit=crop&q=80&w=800",
        title: "Viking Style",
    },
];

/// Bookable slots, in display order. The afternoon gap (no 01:00 PM) is the
/// shop's lunch break.
pub static TIME_SLOTS: [&str; 11] = [
    "09:00 AM", "10:00 AM", "11:00 AM", "12:00 PM", "02:00 PM", "03:00 PM", "04:00 PM",
    "05:00 PM", "06:00 PM", "07:00 PM", "08:00 PM",
];
