// Batch parsing using Rayon
//
// Documents are independent: each gets its own tokenizer, cursor and
// builder, so the work splits across the pool with no synchronization.
// Results come back in input order; one bad document does not affect the
// others.

use rayon::prelude::*;

use super::direct::parse_with;
use crate::core::Dialect;
use crate::error::ParseError;
use crate::table::Table;

/// Parse many documents concurrently on the global rayon pool.
pub fn parse_many<S>(inputs: &[S], dialect: &Dialect) -> Vec<Result<Table, ParseError>>
where
    S: AsRef<str> + Sync,
{
    tracing::debug!(documents = inputs.len(), "parsing batch");
    inputs
        .par_iter()
        .map(|input| parse_with(input.as_ref(), dialect))
        .collect()
}
