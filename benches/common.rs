//! common routines to be included by benches

use sqrt_digits::BigUnsigned;


/// Random values with the given number of limbs
pub fn random_bigunsigneds(count: usize, limb_count: usize, seed: u64) -> Vec<BigUnsigned> {
    let mut rng = oorandom::Rand32::new(seed);

    (0..count)
        .map(|_| {
            let mut limbs: Vec<u32> = (0..limb_count).map(|_| rng.rand_u32()).collect();
            // keep the most significant limb non-zero so every value has limb_count limbs
            if let Some(top) = limbs.last_mut() {
                *top |= 1;
            }
            BigUnsigned::from_limbs(limbs)
        })
        .collect()
}

/// Shuffle all distinct pairs of values
pub fn make_random_pairs(values: &[BigUnsigned], seed: u64) -> Vec<(&BigUnsigned, &BigUnsigned)> {
    let mut cartesian_pairs = values
                            .iter()
                            .enumerate()
                            .flat_map(|(i, x)| {
                                values.iter().skip(i+1).map(move |y| (x, y))
                            }).collect::<Vec<(&BigUnsigned, &BigUnsigned)>>();

    // random number generator from random seed
    let mut rng = oorandom::Rand32::new(seed);

    for i in (1..cartesian_pairs.len()).rev() {
        let j = rng.rand_u32() as usize % i;
        cartesian_pairs.swap(i, j);
    }

    cartesian_pairs
}
