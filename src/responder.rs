//! Response selection: a uniform random pick from an intent's responses.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::IntentCatalog;
use crate::error::ChatError;

/// Pick one response for `intent`, uniformly at random.
///
/// The randomness source is passed in so tests can substitute a seeded RNG.
/// An intent absent from the catalog is an internal invariant violation
/// (the matcher only returns catalog keys) and surfaces as
/// [`ChatError::UnknownIntent`].
pub fn pick_response<'a, R: Rng>(
    catalog: &'a IntentCatalog,
    intent: &str,
    rng: &mut R,
) -> Result<&'a str, ChatError> {
    let def = catalog
        .get(intent)
        .ok_or_else(|| ChatError::UnknownIntent(intent.to_string()))?;

    // Catalog validation guarantees responses is non-empty.
    let response = def
        .responses
        .choose(rng)
        .ok_or_else(|| ChatError::UnknownIntent(intent.to_string()))?;

    Ok(response.as_str())
}
