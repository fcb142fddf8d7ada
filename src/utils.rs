/// Check if `n` is a prime number.
///
/// Uses trial division up to sqrt(n). Suitable for validating
/// moduli at startup, not for high-performance primality testing.
pub const fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let mut i = 3;
    while i * i <= n {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// Greatest common divisor, always non-negative.
///
/// `gcd(0, 0) == 0`.
///
/// # Panics
///
/// Panics when the result is `2^63`, i.e. for `gcd(i64::MIN, 0)` and
/// `gcd(i64::MIN, i64::MIN)`, which does not fit in `i64`.
pub const fn gcd(a: i64, b: i64) -> i64 {
    let mut a = a.unsigned_abs();
    let mut b = b.unsigned_abs();
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    if a > i64::MAX as u64 {
        panic!("gcd overflows i64");
    }
    a as i64
}

/// Extended Euclidean algorithm.
///
/// Returns `(g, x, y)` with `g = gcd(a, b) >= 0` and `g == x * a + y * b`.
///
/// # Example
///
/// ```
/// use ringfold::extended_gcd;
///
/// let (g, x, y) = extended_gcd(240, 46);
/// assert_eq!(g, 2);
/// assert_eq!(x * 240 + y * 46, 2);
/// ```
pub fn extended_gcd(a: i64, b: i64) -> (i64, i64, i64) {
    let (mut old_r, mut r) = (a, b);
    let (mut old_x, mut x) = (1i64, 0i64);
    let (mut old_y, mut y) = (0i64, 1i64);

    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_x, x) = (x, old_x - q * x);
        (old_y, y) = (y, old_y - q * y);
    }

    if old_r < 0 {
        (-old_r, -old_x, -old_y)
    } else {
        (old_r, old_x, old_y)
    }
}

/// Reduce `a` into `[0, n)`. `n` must be positive.
#[inline]
pub const fn modulo(a: i64, n: i64) -> i64 {
    a.rem_euclid(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_primes() {
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(!is_prime(4));
        assert!(is_prime(5));
        assert!(!is_prime(6));
        assert!(is_prime(7));
        assert!(!is_prime(9));
        assert!(is_prime(11));
        assert!(is_prime(13));
    }

    #[test]
    fn composites() {
        assert!(!is_prime(15));
        assert!(!is_prime(21));
        assert!(!is_prime(25));
        assert!(!is_prime(1000));
    }

    #[test]
    fn gcd_basics() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(-12, 18), 6);
        assert_eq!(gcd(12, -18), 6);
        assert_eq!(gcd(0, 7), 7);
        assert_eq!(gcd(7, 0), 7);
        assert_eq!(gcd(0, 0), 0);
        assert_eq!(gcd(17, 5), 1);
        assert_eq!(gcd(i64::MIN, 6), 2);
        assert_eq!(gcd(i64::MIN, i64::MAX), 1);
    }

    #[test]
    #[should_panic(expected = "gcd overflows i64")]
    fn gcd_of_min_and_zero_overflows() {
        let _ = gcd(i64::MIN, 0);
    }

    #[test]
    fn extended_gcd_bezout_identity() {
        for &(a, b) in &[(3, 20), (20, 3), (4, 15), (5, 12), (240, 46), (0, 9), (9, 0), (-6, 4), (6, -4)] {
            let (g, x, y) = extended_gcd(a, b);
            assert_eq!(g, gcd(a, b), "gcd of {} and {}", a, b);
            assert_eq!(x * a + y * b, g, "bezout for {} and {}", a, b);
        }
    }

    #[test]
    fn extended_gcd_gives_inverse_mod_11() {
        let (g, x, _) = extended_gcd(2, 11);
        assert_eq!(g, 1);
        assert_eq!(modulo(x, 11), 6);
    }

    #[test]
    fn modulo_is_non_negative() {
        assert_eq!(modulo(-1, 5), 4);
        assert_eq!(modulo(-10, 5), 0);
        assert_eq!(modulo(13, 5), 3);
        assert_eq!(modulo(0, 1), 0);
    }
}
