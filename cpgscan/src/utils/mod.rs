//! Helpers shared across the crate: builder macros, the default worker count
//! and random sequence generation.

mod generate;

use once_cell::sync::Lazy;

pub use generate::generate_random_sequence;

/// Environment variable overriding the default number of workers.
pub const NUM_THREADS_ENV: &str = "CPGSCAN_NUM_THREADS";
const FALLBACK_WORKERS: usize = 2;

static DEFAULT_WORKERS: Lazy<usize> = Lazy::new(|| {
    std::env::var(NUM_THREADS_ENV)
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(FALLBACK_WORKERS)
});

/// Worker count used when none is configured explicitly. Read once from
/// `CPGSCAN_NUM_THREADS`.
pub fn default_workers() -> usize {
    *DEFAULT_WORKERS
}

#[macro_export]
macro_rules! with_field_fn {
    ($field_name: ident, $field_type: ty) => {
        paste::paste! {
            pub fn [<with_$field_name>](mut self, value: $field_type) -> Self {
                self.$field_name = value;
                self
            }
        }
    };
}
