use rand::distributions::{Distribution, Uniform};
use rand::{CryptoRng, Rng};

use crate::generators::pool::CharacterPool;
use crate::generators::GenerationError;
use crate::models::PasswordRequest;

/// Draw `request.length` characters from the pool the request describes.
///
/// Expects a request that already passed validation; an empty pool is
/// reported rather than silently producing an empty string.
pub fn generate_password<R>(rng: &mut R, request: &PasswordRequest) -> Result<String, GenerationError>
where
    R: Rng + CryptoRng,
{
    let pool = CharacterPool::for_request(request);
    sample_from_pool(rng, &pool, request.length)
}

/// `Uniform` rejects out-of-zone draws instead of reducing modulo the pool
/// size, so every character is equally likely whatever the pool length.
pub fn sample_from_pool<R>(rng: &mut R, pool: &CharacterPool, length: usize) -> Result<String, GenerationError>
where
    R: Rng + CryptoRng,
{
    if pool.is_empty() {
        return Err(GenerationError::EmptyPool);
    }

    let chars = pool.as_slice();
    let dist = Uniform::from(0..pool.len());

    Ok((0..length).map(|_| chars[dist.sample(rng)]).collect())
}
