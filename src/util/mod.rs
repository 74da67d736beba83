//! Utility functions for field construction

/// Trial-division primality test, sufficient for field characteristics
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut d = 3u64;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

/// Computes `p^n` if it fits in a `u32`
pub fn field_size(characteristic: u64, order: usize) -> Option<u32> {
    let exp = u32::try_from(order).ok()?;
    let size = characteristic.checked_pow(exp)?;
    u32::try_from(size).ok()
}

/// Packs base-p digits (lowest first) into a single integer
pub fn pack_digits<I>(digits: I, base: u64) -> u64
where
    I: DoubleEndedIterator<Item = u64>,
{
    digits.rev().fold(0u64, |acc, digit| acc * base + digit)
}

/// Increments the lowest base-p digit of `packed` modulo `base`, without carry
pub fn increment_low_digit(packed: u64, base: u64) -> u64 {
    if packed % base == base - 1 {
        packed + 1 - base
    } else {
        packed + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_prime() {
        let primes: Vec<u64> = (0..30).filter(|&n| is_prime(n)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn test_field_size() {
        assert_eq!(field_size(2, 8), Some(256));
        assert_eq!(field_size(3, 4), Some(81));
        assert_eq!(field_size(2, 32), None);
    }

    #[test]
    fn test_digit_helpers() {
        // 2 + 1*3 + 2*9 = 23
        assert_eq!(pack_digits([2u64, 1, 2].into_iter(), 3), 23);
        // constant digit 2 wraps to 0 without touching the others
        assert_eq!(increment_low_digit(23, 3), 21);
        assert_eq!(increment_low_digit(21, 3), 22);
        assert_eq!(increment_low_digit(1, 2), 0);
        assert_eq!(increment_low_digit(6, 2), 7);
    }
}
