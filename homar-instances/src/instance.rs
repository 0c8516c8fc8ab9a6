use anyhow::{anyhow, Result};
use rand::{
    distributions::{Distribution, Uniform},
    rngs::{SmallRng, StdRng},
    Rng, SeedableRng,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Largest lobster size the generator will emit, in cm.
pub const MAX_ITEM_SIZE: u64 = 10;

/// Generation parameters for a single test case.
#[derive(Serialize, Deserialize, Debug, Copy, Clone)]
pub struct Params {
    pub num_items: usize,
    pub max_value: u64,
    pub capacity: u64,
}

/// A subset of item indices proposed as a catch.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Selection {
    pub items: Vec<usize>,
}

/// One complete problem instance: a net capacity and the lobsters on offer,
/// kept as parallel size/value vectors. Item order is preserved end-to-end so
/// suite files round-trip byte-for-byte.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TestCase {
    pub capacity: u64,
    pub max_value: u64,
    pub sizes: Vec<u64>,
    pub values: Vec<u64>,
}

impl TestCase {
    pub fn generate(seed: &[u8; 32], params: &Params) -> Result<TestCase> {
        if params.max_value == 0 {
            return Err(anyhow!("max_value must be at least 1"));
        }
        let mut rng = SmallRng::from_seed(StdRng::from_seed(seed.clone()).gen());

        // Sizes in [1, MAX_ITEM_SIZE], values in [1, max_value]
        let size_distr = Uniform::new_inclusive(1, MAX_ITEM_SIZE);
        let value_distr = Uniform::new_inclusive(1, params.max_value);

        let sizes: Vec<u64> = (0..params.num_items)
            .map(|_| size_distr.sample(&mut rng))
            .collect();
        let values: Vec<u64> = (0..params.num_items)
            .map(|_| value_distr.sample(&mut rng))
            .collect();

        Ok(TestCase {
            capacity: params.capacity,
            max_value: params.max_value,
            sizes,
            values,
        })
    }

    pub fn num_items(&self) -> usize {
        self.sizes.len()
    }

    /// Checks a proposed catch against this case and returns its total value.
    pub fn verify_selection(&self, selection: &Selection) -> Result<u64> {
        let selected: HashSet<usize> = selection.items.iter().cloned().collect();
        if selected.len() != selection.items.len() {
            return Err(anyhow!("Duplicate items selected"));
        }

        let mut total_size = 0u64;
        let mut total_value = 0u64;
        for &item in &selection.items {
            if item >= self.sizes.len() {
                return Err(anyhow!("Item ({}) is out of bounds", item));
            }
            total_size = total_size
                .checked_add(self.sizes[item])
                .ok_or_else(|| anyhow!("Total size overflows u64"))?;
            total_value = total_value
                .checked_add(self.values[item])
                .ok_or_else(|| anyhow!("Total value overflows u64"))?;
        }

        if total_size > self.capacity {
            return Err(anyhow!(
                "Total size ({}) exceeded capacity ({})",
                total_size,
                self.capacity
            ));
        }
        Ok(total_value)
    }
}
