//! The fixed product templates the static catalog cycles through.

use rust_decimal::Decimal;

/// A family of synthetic products sharing brand, category and price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Archetype {
  pub base_name:          &'static str,
  pub category_id:        &'static str,
  pub category_name:      &'static str,
  pub brand:              &'static str,
  pub description_suffix: &'static str,
  pub unit_price:         Decimal,
  pub supplier_name:      &'static str,
  pub tags:               &'static [&'static str],
}

/// The nine archetypes every hourly catalog is derived from.
///
/// Order matters: product `i` takes `archetypes()[i % 9]`.
pub fn archetypes() -> Vec<Archetype> {
  vec![
    Archetype {
      base_name:          "UltraSmart",
      category_id:        "CAT-01",
      category_name:      "Electronics",
      brand:              "TechNova",
      description_suffix: "Cutting-edge features for modern life.",
      unit_price:         Decimal::new(1043, 2),
      supplier_name:      "Global Gadget Co.",
      tags:               &["smart", "connected", "high-tech", "innovation"],
    },
    Archetype {
      base_name:          "Eco-Comfort",
      category_id:        "CAT-02",
      category_name:      "Home Goods",
      brand:              "GreenLiving",
      description_suffix: "Sustainable and cozy additions to your home.",
      unit_price:         Decimal::new(20987, 3),
      supplier_name:      "EcoHome Supplies",
      tags:               &["eco-friendly", "sustainable", "comfort", "organic"],
    },
    Archetype {
      base_name:          "AdventurePro",
      category_id:        "CAT-03",
      category_name:      "Sports & Outdoors",
      brand:              "SummitGear",
      description_suffix: "Durable gear for all your outdoor excursions.",
      unit_price:         Decimal::new(2523, 2),
      supplier_name:      "Outdoor Ventures Inc.",
      tags:               &["durable", "outdoor", "adventure", "performance"],
    },
    Archetype {
      base_name:          "GourmetBlend",
      category_id:        "CAT-04",
      category_name:      "Food & Beverages",
      brand:              "ArtisanEats",
      description_suffix: "Finest ingredients for exquisite culinary creations.",
      unit_price:         Decimal::new(1223, 2),
      supplier_name:      "Culinary Delights Ltd.",
      tags:               &["gourmet", "organic", "fresh", "artisanal"],
    },
    Archetype {
      base_name:          "SoftWear",
      category_id:        "CAT-05",
      category_name:      "Apparel",
      brand:              "ComfortFit",
      description_suffix: "Designed for maximum comfort and style.",
      unit_price:         Decimal::new(4043, 2),
      supplier_name:      "Textile Innovations",
      tags:               &["comfortable", "stylish", "breathable", "quality"],
    },
    Archetype {
      base_name:          "ProCraft",
      category_id:        "CAT-06",
      category_name:      "Tools & Hardware",
      brand:              "BuildStrong",
      description_suffix: "Precision tools for every project, big or small.",
      unit_price:         Decimal::new(3487, 2),
      supplier_name:      "Industrial Solutions Co.",
      tags:               &["durable", "heavy-duty", "professional", "precision"],
    },
    Archetype {
      base_name:          "PetLove",
      category_id:        "CAT-07",
      category_name:      "Pet Supplies",
      brand:              "FurryFriends",
      description_suffix:
        "Premium products to keep your beloved pets happy and healthy.",
      unit_price:         Decimal::new(2365, 2),
      supplier_name:      "Animal Care Distributors",
      tags:               &["natural", "pet-safe", "nutritious", "durable"],
    },
    Archetype {
      base_name:          "BrightFuture",
      category_id:        "CAT-08",
      category_name:      "Education",
      brand:              "LearnSmart",
      description_suffix: "Innovative learning resources for all ages.",
      unit_price:         Decimal::new(6734, 2),
      supplier_name:      "EdTech Global",
      tags:               &["interactive", "educational", "engaging", "digital"],
    },
    Archetype {
      base_name:          "VitalityBoost",
      category_id:        "CAT-09",
      category_name:      "Health & Wellness",
      brand:              "PureLife",
      description_suffix:
        "Supplements and aids for a balanced and healthy lifestyle.",
      unit_price:         Decimal::new(784, 1),
      supplier_name:      "Natural Health Co.",
      tags:               &["organic", "natural", "supplement", "energy"],
    },
  ]
}
