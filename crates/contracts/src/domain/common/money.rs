/// Допуск при сравнении денежных сумм (полкопейки)
pub const MONEY_EPSILON: f64 = 0.005;

/// Равенство сумм с учётом погрешности f64
pub fn money_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < MONEY_EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_eq_tolerates_float_noise() {
        assert!(money_eq(0.1 + 0.2, 0.3));
        assert!(!money_eq(10.0, 10.01));
    }
}
