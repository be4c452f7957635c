//! Presence and truthiness over the value kinds the guards accept.

use serde_json::Value;

/// Values that can be absent.
pub trait Nullish {
    /// Returns `true` for `None` and JSON `null`.
    fn is_nullish(&self) -> bool;
}

impl<T> Nullish for Option<T> {
    fn is_nullish(&self) -> bool {
        self.is_none()
    }
}

impl Nullish for Value {
    fn is_nullish(&self) -> bool {
        self.is_null()
    }
}

impl<T: Nullish + ?Sized> Nullish for &T {
    fn is_nullish(&self) -> bool {
        (**self).is_nullish()
    }
}

/// Values with a notion of truthiness.
pub trait Truthy {
    /// Returns `true` unless the value is considered falsy.
    fn is_truthy(&self) -> bool;
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl Truthy for Value {
    fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(flag) => *flag,
            Self::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
            Self::String(text) => !text.is_empty(),
            Self::Array(_) | Self::Object(_) => true,
        }
    }
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

macro_rules! impl_truthy_for_integer {
    ($($ty:ty),*) => {
        $(
            impl Truthy for $ty {
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_truthy_for_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_truthy_for_float {
    ($($ty:ty),*) => {
        $(
            impl Truthy for $ty {
                fn is_truthy(&self) -> bool {
                    *self != 0.0 && !self.is_nan()
                }
            }
        )*
    };
}

impl_truthy_for_float!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!(null), false)]
    #[case(json!(false), false)]
    #[case(json!(0), false)]
    #[case(json!(0.0), false)]
    #[case(json!(""), false)]
    #[case(json!(true), true)]
    #[case(json!(-1), true)]
    #[case(json!("0"), true)]
    #[case(json!([]), true)]
    #[case(json!({}), true)]
    fn json_truthiness(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(value.is_truthy(), expected);
    }

    #[rstest]
    fn option_truthiness_looks_inside() {
        assert!(!None::<i32>.is_truthy());
        assert!(!Some(0).is_truthy());
        assert!(Some(7_u8).is_truthy());
        assert!(!Some(String::new()).is_truthy());
        assert!(Some("text").is_truthy());
    }

    #[rstest]
    fn float_truthiness() {
        assert!(!f64::NAN.is_truthy());
        assert!(!0.0_f32.is_truthy());
        assert!(0.5_f64.is_truthy());
    }

    #[rstest]
    fn references_forward() {
        let value = json!(null);
        assert!((&value).is_nullish());
        assert!(!(&&false).is_truthy());
    }
}
