use std::sync::Mutex;

use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectError {
    #[error("there is nothing to choose from")]
    Empty,
}

/// Picks one element of `items` with uniform probability.
pub fn choose<'a, T, R: rand::Rng + ?Sized>(
    items: &'a [T],
    rng: &mut R,
) -> Result<&'a T, SelectError> {
    items.choose(rng).ok_or(SelectError::Empty)
}

pub trait Selector: Send + Sync {
    fn pick(&self, items: &[String]) -> Result<String, SelectError>;
}

pub struct RandomSelector {
    rng: Mutex<StdRng>,
}
impl RandomSelector {
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// A selector whose picks are fully determined by `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}
impl Selector for RandomSelector {
    fn pick(&self, items: &[String]) -> Result<String, SelectError> {
        // A poisoned lock still holds a usable rng.
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        choose(items, &mut *rng).cloned()
    }
}
