use bigdecimal::BigDecimal;
use std::str::FromStr;

/// 将 f64 转为 BigDecimal，按其十进制字符串表示解析，避免二进制误差。
/// 非有限值返回 0。
pub fn f64_to_bigdecimal(v: f64) -> BigDecimal {
    if !v.is_finite() {
        return BigDecimal::from(0);
    }
    BigDecimal::from_str(&v.to_string()).unwrap_or_else(|_| BigDecimal::from(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_using_decimal_representation() {
        assert_eq!(f64_to_bigdecimal(5.0), BigDecimal::from(5));
        assert_eq!(f64_to_bigdecimal(0.1), BigDecimal::from_str("0.1").unwrap());
        assert_eq!(f64_to_bigdecimal(f64::NAN), BigDecimal::from(0));
    }
}
