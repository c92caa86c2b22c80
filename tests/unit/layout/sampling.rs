//! Tests for photo sampling with repetition

#[cfg(test)]
mod tests {
    use photocollage::layout::sampling::sample_with_repetition;
    use photocollage::model::ImageRef;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    // Tests the requested number of references is always produced
    // Verified by stopping after the first pass
    #[test]
    fn test_sample_count_is_exact() {
        let mut rng = StdRng::seed_from_u64(1);
        for (pool_size, count) in [(1, 80), (3, 10), (7, 7), (10, 4)] {
            let sample = sample_with_repetition(pool_size, count, &mut rng);
            assert_eq!(sample.len(), count);
            assert!(sample.iter().all(|image| image.index() < pool_size));
        }
    }

    // Tests photos are spread evenly across passes
    // Verified by drawing each reference independently at random
    #[test]
    fn test_sample_is_balanced() {
        let mut rng = StdRng::seed_from_u64(2);
        let sample = sample_with_repetition(4, 10, &mut rng);

        for index in 0..4 {
            let occurrences = sample.iter().filter(|image| **image == ImageRef(index)).count();
            assert!(
                (2..=3).contains(&occurrences),
                "photo {index} used {occurrences} times"
            );
        }
    }

    // Tests samples smaller than the pool never repeat a photo
    // Verified by sampling with replacement
    #[test]
    fn test_partial_pass_has_no_duplicates() {
        let mut rng = StdRng::seed_from_u64(3);
        let sample = sample_with_repetition(20, 8, &mut rng);
        let unique: HashSet<ImageRef> = sample.iter().copied().collect();

        assert_eq!(unique.len(), 8);
    }

    // Tests the order is shuffled rather than left in pool order
    // Verified by removing both shuffles
    #[test]
    fn test_sample_is_shuffled() {
        let mut rng = StdRng::seed_from_u64(4);
        let sample = sample_with_repetition(50, 50, &mut rng);
        let in_pool_order: Vec<ImageRef> = (0..50).map(ImageRef).collect();

        assert_ne!(sample, in_pool_order);
    }

    // Tests an empty pool yields nothing
    // Verified by looping forever on empty pools
    #[test]
    fn test_empty_pool() {
        let mut rng = StdRng::seed_from_u64(5);
        assert!(sample_with_repetition(0, 10, &mut rng).is_empty());
    }
}
