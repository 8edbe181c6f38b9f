//! Domain layer: pure score rules, no IO.

pub mod upsert;

#[cfg(test)]
mod test_prelude;
