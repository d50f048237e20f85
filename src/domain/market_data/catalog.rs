use once_cell::sync::Lazy;

use super::entities::MetalRate;
use super::value_objects::Metal;

/// Seeded reference table of current rates. Per-kg and per-100g values
/// are independent constants; nothing here recomputes one from the
/// other.
static RATES: Lazy<Vec<MetalRate>> = Lazy::new(|| {
    vec![
        MetalRate {
            id: "gold-24k",
            metal: Metal::Gold,
            purity: "24K",
            rate_per_kg: 6_283_500,
            rate_per_100g: 628_350,
            change_24h: 1_250,
            change_percentage: 0.2,
        },
        MetalRate {
            id: "gold-22k",
            metal: Metal::Gold,
            purity: "22K",
            rate_per_kg: 5_785_000,
            rate_per_100g: 578_500,
            change_24h: 1_150,
            change_percentage: 0.2,
        },
        MetalRate {
            id: "gold-18k",
            metal: Metal::Gold,
            purity: "18K",
            rate_per_kg: 4_712_600,
            rate_per_100g: 471_260,
            change_24h: 950,
            change_percentage: 0.2,
        },
        MetalRate {
            id: "silver-999",
            metal: Metal::Silver,
            purity: "999",
            rate_per_kg: 75_600,
            rate_per_100g: 7_560,
            change_24h: -350,
            change_percentage: -0.46,
        },
        MetalRate {
            id: "silver-925",
            metal: Metal::Silver,
            purity: "925",
            rate_per_kg: 70_000,
            rate_per_100g: 7_000,
            change_24h: -320,
            change_percentage: -0.46,
        },
    ]
});

/// Static lookup over the seeded rate table. No computation, no
/// lifecycle beyond process start.
pub struct RateCatalog;

impl RateCatalog {
    pub fn by_id(id: &str) -> Option<&'static MetalRate> {
        RATES.iter().find(|rate| rate.id == id)
    }

    /// All rates, optionally narrowed to one metal.
    pub fn all(metal: Option<Metal>) -> Vec<&'static MetalRate> {
        RATES
            .iter()
            .filter(|rate| metal.is_none_or(|m| rate.metal == m))
            .collect()
    }
}
