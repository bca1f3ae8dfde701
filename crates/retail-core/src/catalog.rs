//! Catalog generation.
//!
//! Two modes:
//!
//! - **Static**: products cycle through the fixed [`Archetype`] list, so price,
//!   brand, supplier and tags are reproducible within a partition and joins
//!   against sales and inventory need no persisted price map.
//! - **Random**: every product gets a fabricated category, name, brand,
//!   supplier and price. Nothing is stable across invocations.

use fake::{
  Fake,
  faker::{
    company::raw::{CompanyName, CompanySuffix},
    lorem::raw::{Sentence, Word},
    name::raw::LastName,
  },
  locales::EN,
};
use rand::{Rng, seq::IndexedRandom};
use rust_decimal::Decimal;

use crate::{Error, Result, archetype::Archetype, partition::Partition, record::Product};

const ADJECTIVES: &[&str] = &[
  "Premium",
  "Value",
  "Eco-Friendly",
  "Smart",
  "Heavy-Duty",
  "Compact",
  "Designer",
];

const NOUNS: &[&str] =
  &["Widget", "Gadget", "Device", "Appliance", "Tool", "Kit", "System"];

const RANDOM_TAGS: &[&str] = &[
  "new_arrival",
  "best_seller",
  "clearance",
  "eco_friendly",
  "premium_quality",
  "limited_edition",
];

/// `PROD_0001` for index 0.
pub fn product_id(index: usize) -> String { format!("PROD_{:04}", index + 1) }

// ─── Static mode ─────────────────────────────────────────────────────────────

/// Build `count` products for `partition`, product `i` taking archetype
/// `i % archetypes.len()`.
pub fn static_catalog(
  count: usize,
  archetypes: &[Archetype],
  partition: &Partition,
) -> Result<Vec<Product>> {
  if archetypes.is_empty() {
    return Err(Error::NoArchetypes);
  }
  let per_cycle = archetypes.len();

  Ok(
    (0..count)
      .map(|i| {
        let archetype = &archetypes[i % per_cycle];
        let sequence = (i + 1).div_ceil(per_cycle);
        Product {
          ingestion_date: partition.date,
          ingestion_hour: partition.hour_label(),
          product_id:     product_id(i),
          product_name:   format!("{} {:02} - {sequence}", archetype.base_name, i + 1),
          category_id:    archetype.category_id.to_owned(),
          category_name:  archetype.category_name.to_owned(),
          brand:          archetype.brand.to_owned(),
          description:    format!(
            "A high-quality product. {}",
            archetype.description_suffix
          ),
          unit_price:     archetype.unit_price,
          supplier_name:  archetype.supplier_name.to_owned(),
          tags:           archetype.tags.join(", "),
        }
      })
      .collect(),
  )
}

// ─── Random mode ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
struct Category {
  id:   String,
  name: String,
}

fn capitalize(word: &str) -> String {
  let mut chars = word.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().chain(chars).collect(),
    None => String::new(),
  }
}

fn fake_categories<R: Rng + ?Sized>(rng: &mut R) -> Vec<Category> {
  let count = rng.random_range(5..=10);
  (1..=count)
    .map(|i| {
      let word: String = Word(EN).fake_with_rng(rng);
      Category {
        id:   format!("CAT_{i:03}"),
        name: format!("{} Goods", capitalize(&word)),
      }
    })
    .collect()
}

/// Build `count` products with fabricated attributes drawn from `rng`.
///
/// A fresh set of five to ten categories is drawn per call.
pub fn random_catalog<R: Rng + ?Sized>(
  count: usize,
  partition: &Partition,
  rng: &mut R,
) -> Vec<Product> {
  let categories = fake_categories(rng);
  let mut products = Vec::with_capacity(count);

  for i in 0..count {
    let category = categories[rng.random_range(0..categories.len())].clone();
    let adjective = ADJECTIVES[rng.random_range(0..ADJECTIVES.len())];
    let noun = NOUNS[rng.random_range(0..NOUNS.len())];
    let word: String = Word(EN).fake_with_rng(rng);
    let brand: String = CompanyName(EN).fake_with_rng(rng);
    let description: String = Sentence(EN, 10..11).fake_with_rng(rng);
    let suffix: String = CompanySuffix(EN).fake_with_rng(rng);
    let last_name: String = LastName(EN).fake_with_rng(rng);
    let cents: i64 = rng.random_range(599..=79_999);
    let tag_count = rng.random_range(1..=3);
    let tags = RANDOM_TAGS
      .choose_multiple(rng, tag_count)
      .copied()
      .collect::<Vec<_>>()
      .join(",");

    products.push(Product {
      ingestion_date: partition.date,
      ingestion_hour: partition.hour_label(),
      product_id: product_id(i),
      product_name: format!("{adjective} {} {noun}", capitalize(&word)),
      category_id: category.id,
      category_name: category.name,
      brand,
      description,
      unit_price: Decimal::new(cents, 2),
      supplier_name: format!("{suffix} {last_name} Supplies"),
      tags,
    });
  }

  products
}
