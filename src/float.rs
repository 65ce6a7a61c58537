use crate::error::AppError;
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{Float, One, ToPrimitive, Zero};

/// 任意精度の2進浮動小数点数。
/// 値は `(-1)^negative * mantissa * 2^exponent` で表す。
///
/// 仮数部の末尾ゼロビットは常に指数部へ寄せて正規化するため、
/// 導出した `PartialEq` はそのまま数値としての等価判定になる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BigFloat {
    negative: bool,
    mantissa: BigUint,
    exponent: i64,
}

impl BigFloat {
    pub fn zero() -> Self {
        Self {
            negative: false,
            mantissa: BigUint::zero(),
            exponent: 0,
        }
    }

    /// 符号・仮数・指数から値を組み立てる。
    pub fn from_parts(negative: bool, mut mantissa: BigUint, mut exponent: i64) -> Self {
        if mantissa.is_zero() {
            return Self::zero();
        }
        if let Some(tz) = mantissa.trailing_zeros() {
            if tz > 0 {
                mantissa >>= tz;
                exponent += tz as i64;
            }
        }
        Self {
            negative,
            mantissa,
            exponent,
        }
    }

    /// 2^h を誤差なしで表現する
    pub fn pow2(h: u32) -> Self {
        Self {
            negative: false,
            mantissa: BigUint::one(),
            exponent: i64::from(h),
        }
    }

    /// f64をそのままの値で取り込む。NaN/無限大は受け付けない。
    pub fn from_f64(f: f64) -> Result<Self, AppError> {
        if !f.is_finite() {
            return Err(AppError::InvalidArgument(format!(
                "{f} is not a finite value"
            )));
        }
        let (mantissa, exponent, sign) = Float::integer_decode(f);
        Ok(Self::from_parts(
            sign < 0,
            BigUint::from(mantissa),
            i64::from(exponent),
        ))
    }

    pub fn is_zero(&self) -> bool {
        self.mantissa.is_zero()
    }

    pub fn is_sign_negative(&self) -> bool {
        self.negative
    }

    /// 小数部を持たないかどうか
    pub fn is_integer(&self) -> bool {
        self.exponent >= 0
    }

    /// f64への変換（精度は落ちる、範囲外は無限大/0になる）
    pub fn to_f64(&self) -> f64 {
        let m = self.mantissa.to_f64().unwrap_or(f64::INFINITY);
        let e = self.exponent.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
        let v = m * 2f64.powi(e);
        if self.negative { -v } else { v }
    }

    /// 0方向への切り捨てで整数化する。
    /// 任意精度整数なので64ビットを超えても折り返さない。
    pub fn to_big_int(&self) -> BigInt {
        let magnitude = if self.exponent >= 0 {
            &self.mantissa << self.exponent.unsigned_abs()
        } else {
            &self.mantissa >> self.exponent.unsigned_abs()
        };
        let sign = if self.negative { Sign::Minus } else { Sign::Plus };
        BigInt::from_biguint(sign, magnitude)
    }
}

impl TryFrom<f64> for BigFloat {
    type Error = AppError;

    fn try_from(f: f64) -> Result<Self, Self::Error> {
        Self::from_f64(f)
    }
}

impl From<u64> for BigFloat {
    fn from(n: u64) -> Self {
        Self::from_parts(false, BigUint::from(n), 0)
    }
}

impl From<BigInt> for BigFloat {
    fn from(n: BigInt) -> Self {
        let (sign, magnitude) = n.into_parts();
        Self::from_parts(sign == Sign::Minus, magnitude, 0)
    }
}

/// 2^h を任意精度浮動小数点数として返す。
/// hが64以上でも固定長整数を経由しないので桁あふれしない。
pub fn exact_power2(h: u32) -> BigFloat {
    BigFloat::pow2(h)
}

/// BigFloatをBigIntへ変換する（切り捨て）。
///
/// 固定長整数のコンストラクタは64ビットで頭打ちになるため、
/// 2^64以上のアドレス数はこの関数を経由して取り出す。
/// 未定義(None)の入力は `InvalidArgument` を返す。
pub fn big_float_to_big_int(bf: Option<&BigFloat>) -> Result<BigInt, AppError> {
    let bf = bf.ok_or_else(|| AppError::InvalidArgument("undefined BigFloat".into()))?;
    Ok(bf.to_big_int())
}

/// 小数第1位で表せる、入力以上の最小の値を返す。
/// roundup(4.02) は 4.1、roundup(4.00) は 4.0。
///
/// 入力の分解能は小数第5位まで。それより細かい桁は 10^5 倍した時点の
/// 四捨五入で吸収される (1.200003 → 1.2)。
pub fn roundup(f: f64) -> f64 {
    // 整数値 (10^5 倍で桁あふれする値を含む) はそのまま
    if f.fract() == 0.0 {
        return f;
    }
    let n = (f * 100_000.0).round();
    if !n.is_finite() {
        return f;
    }
    if n % 10_000.0 == 0.0 {
        return n / 100_000.0;
    }
    ((n / 10_000.0).floor() + 1.0) / 10.0
}
