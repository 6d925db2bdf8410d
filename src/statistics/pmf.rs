//! Closed-form probabilities for checking empirical roll frequencies against
//! theory.

pub fn factorial(n: u64) -> u64 {
    (1..=n).product()
}

/// Probability of observing exactly `counts[i]` occurrences of face `i` over
/// `n` independent draws, where face `i` comes up with probability
/// `probabilities[i]` on each draw. This is the expected frequency of a
/// combination whose multiset has those face counts.
pub fn multinomial_probability(
    n: u64,
    counts: &[u64],
    probabilities: &[f64],
) -> anyhow::Result<f64> {
    if counts.len() != probabilities.len() {
        anyhow::bail!("counts and probabilities must have the same length");
    }
    if counts.iter().sum::<u64>() != n {
        anyhow::bail!("counts must sum to n");
    }

    let numerator = factorial(n) as f64;
    let denominator: f64 = counts.iter().map(|&k| factorial(k) as f64).product();
    let prob_product: f64 = counts
        .iter()
        .zip(probabilities.iter())
        .map(|(&k, &p)| p.powi(k as i32))
        .product();
    Ok(numerator / denominator * prob_product)
}

pub fn binomial_coefficient(n: u64, k: u64) -> f64 {
    if k > n {
        return 0.0;
    }
    factorial(n) as f64 / (factorial(k) as f64 * factorial(n - k) as f64)
}
