//! Sales generation.
//!
//! Every transaction references a product of the partition's catalog and
//! copies its price. Quantities above the profile's threshold earn a whole
//! percentage discount between 5% and 20%.

use std::ops::RangeInclusive;

use rand::Rng;
use rust_decimal::Decimal;
use uuid::Builder;

use crate::{
  Error, Result,
  partition::Partition,
  record::{Product, Transaction},
};

pub const COUNTRIES: &[&str] = &[
  "United States",
  "Canada",
  "Mexico",
  "Brazil",
  "Argentina",
  "UK",
  "France",
  "Germany",
  "China",
  "Spain",
];

const CUSTOMER_IDS: RangeInclusive<u32> = 1001..=5000;
const DISCOUNT_PERCENT: RangeInclusive<i64> = 5..=20;

/// Volume knobs for one generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesProfile {
  /// How many transactions a partition receives.
  pub transactions:       RangeInclusive<u32>,
  /// Units per transaction.
  pub quantity:           RangeInclusive<u32>,
  /// Quantities strictly above this earn a discount.
  pub discount_threshold: u32,
}

impl SalesProfile {
  /// High-volume hourly feed.
  pub const HOURLY: Self = Self {
    transactions:       150..=1000,
    quantity:           1..=2000,
    discount_threshold: 500,
  };

  /// Small-basket daily feed.
  pub const DAILY: Self = Self {
    transactions:       150..=1000,
    quantity:           1..=10,
    discount_threshold: 5,
  };

  /// The discount owed for `units`, drawing the percentage from `rng`.
  pub fn discount_for<R: Rng + ?Sized>(&self, units: u32, rng: &mut R) -> Decimal {
    if units > self.discount_threshold {
      Decimal::new(rng.random_range(DISCOUNT_PERCENT), 2)
    } else {
      Decimal::ZERO
    }
  }
}

/// Generate a batch of sales for `partition` against `catalog`.
///
/// Products are drawn uniformly from `catalog[0..len)`.
pub fn generate_sales<R: Rng + ?Sized>(
  catalog: &[Product],
  partition: &Partition,
  profile: &SalesProfile,
  rng: &mut R,
) -> Result<Vec<Transaction>> {
  if catalog.is_empty() {
    return Err(Error::EmptyCatalog(partition.to_string()));
  }

  let count = rng.random_range(profile.transactions.clone());
  let mut sales = Vec::with_capacity(count as usize);

  for _ in 0..count {
    let transaction_id = Builder::from_random_bytes(rng.random()).into_uuid();
    let customer = rng.random_range(CUSTOMER_IDS);
    let country = COUNTRIES[rng.random_range(0..COUNTRIES.len())];
    let product = &catalog[rng.random_range(0..catalog.len())];
    let units_sold = rng.random_range(profile.quantity.clone());
    let discount_applied = profile.discount_for(units_sold, rng);

    sales.push(Transaction {
      transaction_date: partition.date,
      transaction_hour: partition.hour_label(),
      transaction_id: transaction_id.to_string(),
      customer_id: format!("CUST_{customer:04}"),
      order_country: country.to_owned(),
      product_id: product.product_id.clone(),
      unit_price: product.unit_price,
      units_sold,
      discount_applied,
      total_amount_paid: Transaction::amount_due(
        product.unit_price,
        discount_applied,
        units_sold,
      ),
    });
  }

  Ok(sales)
}
