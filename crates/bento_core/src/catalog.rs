//! Canonical Feed Forward dashboard tiles.
//!
//! The order here is the default layout. Ids are stable across releases;
//! stored layouts refer to them.

use crate::model::grid_item::{GridItem, GridItemValidationError, TileSize};

const ACCENT: &str = "ff-blue";
const DANGER: &str = "red-500";

struct TileSpec {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    icon: &'static str,
    destination: &'static str,
    size: TileSize,
    color: &'static str,
}

const TILES: &[TileSpec] = &[
    TileSpec {
        id: "food-map",
        title: "FOOD MAP",
        description: "Find and claim available food donations nearby on our interactive map",
        icon: "map-pin",
        destination: "/map",
        size: TileSize::Large,
        color: ACCENT,
    },
    TileSpec {
        id: "donate-food",
        title: "DONATE FOOD",
        description: "Create a FoodFlag to share your surplus food",
        icon: "gift",
        destination: "/donate",
        size: TileSize::Medium,
        color: ACCENT,
    },
    TileSpec {
        id: "community-impact",
        title: "COMMUNITY IMPACT",
        description: "See how Feed Forward is making a difference in your community",
        icon: "users",
        destination: "/impact",
        size: TileSize::Medium,
        color: ACCENT,
    },
    TileSpec {
        id: "ai-inventory",
        title: "AI INVENTORY",
        description: "AI-powered inventory management for your surplus food",
        icon: "database",
        destination: "/ai-inventory",
        size: TileSize::Medium,
        color: ACCENT,
    },
    TileSpec {
        id: "annapoorna-chatbot",
        title: "ANNAPOORNA CHATBOT",
        description: "Get assistance and answers to your questions",
        icon: "bot",
        destination: "/annapoorna-chatbot",
        size: TileSize::Small,
        color: ACCENT,
    },
    TileSpec {
        id: "ai-order-verification",
        title: "AI ORDER VERIFICATION",
        description: "Verify food quality and quantity with AI assistance",
        icon: "file-check",
        destination: "/ai-order-verification",
        size: TileSize::Medium,
        color: ACCENT,
    },
    TileSpec {
        id: "volunteer",
        title: "VOLUNTEER",
        description: "Join our volunteer network to help deliver food",
        icon: "award",
        destination: "/volunteer",
        size: TileSize::Small,
        color: ACCENT,
    },
    TileSpec {
        id: "explore",
        title: "EXPLORE",
        description: "Discover food rescue stories and community impact",
        icon: "compass",
        destination: "/explore",
        size: TileSize::Small,
        color: ACCENT,
    },
    TileSpec {
        id: "sanjeevani",
        title: "SANJEEVANI",
        description: "Emergency food distribution during disasters",
        icon: "alert-triangle",
        destination: "/sanjeevani",
        size: TileSize::Medium,
        color: DANGER,
    },
    TileSpec {
        id: "eco-marketplace",
        title: "ECO-MARKETPLACE",
        description: "Redeem your FeedCoins for rewards and perks",
        icon: "shopping-cart",
        destination: "/eco-marketplace",
        size: TileSize::Medium,
        color: ACCENT,
    },
    TileSpec {
        id: "csr-dashboard",
        title: "CSR DASHBOARD",
        description: "Corporate Social Responsibility tracking and reports",
        icon: "bar-chart-4",
        destination: "/csr-dashboard",
        size: TileSize::Medium,
        color: ACCENT,
    },
    TileSpec {
        id: "profile",
        title: "PROFILE",
        description: "View and manage your personal profile and preferences",
        icon: "user",
        destination: "/profile",
        size: TileSize::Small,
        color: ACCENT,
    },
];

/// Returns the dashboard tiles in default order.
pub fn feed_forward_items() -> Result<Vec<GridItem>, GridItemValidationError> {
    TILES
        .iter()
        .map(|tile| {
            Ok(GridItem::new(tile.id, tile.title, tile.destination)?
                .with_description(tile.description)
                .with_icon(tile.icon)
                .with_size(tile.size)
                .with_display_color(tile.color))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::feed_forward_items;
    use crate::model::layout::Layout;

    #[test]
    fn catalog_forms_a_valid_layout() {
        let items = feed_forward_items().unwrap();
        assert_eq!(items.len(), 12);

        let layout = Layout::from_canonical(items).unwrap();
        assert_eq!(layout.ids().first(), Some(&"food-map"));
        assert_eq!(layout.ids().last(), Some(&"profile"));
    }
}
