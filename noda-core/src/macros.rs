//! Scalar operator impls shared by [`Quantity`](crate::Quantity) and [`Unit`](crate::Unit).

/// Implements `q * s`, `s * q`, `q / s`, `s / q`, `q *= s`, `q /= s` and `From<s>` for each
/// primitive scalar type, on both wrappers. A bare scalar is dimensionless, so none of these
/// change the dimension except `s / q`, which inverts it.
macro_rules! impl_scalar_ops {
    ($($scalar:ty),+ $(,)?) => {
        $(
            impl<D: $crate::Dimension> ::core::ops::Mul<$scalar> for $crate::Quantity<D, $scalar> {
                type Output = Self;
                #[inline]
                fn mul(self, rhs: $scalar) -> Self {
                    Self::new(self.into_value() * rhs)
                }
            }

            impl<D: $crate::Dimension> ::core::ops::Mul<$crate::Quantity<D, $scalar>> for $scalar {
                type Output = $crate::Quantity<D, $scalar>;
                #[inline]
                fn mul(self, rhs: $crate::Quantity<D, $scalar>) -> Self::Output {
                    rhs * self
                }
            }

            impl<D: $crate::Dimension> ::core::ops::Div<$scalar> for $crate::Quantity<D, $scalar> {
                type Output = Self;
                #[inline]
                fn div(self, rhs: $scalar) -> Self {
                    Self::new(self.into_value() / rhs)
                }
            }

            impl<D: $crate::Dimension> ::core::ops::Div<$crate::Quantity<D, $scalar>> for $scalar {
                type Output = $crate::Quantity<$crate::Inverse<D>, $scalar>;
                #[inline]
                fn div(self, rhs: $crate::Quantity<D, $scalar>) -> Self::Output {
                    $crate::Quantity::new(self / rhs.into_value())
                }
            }

            impl<D: $crate::Dimension> ::core::ops::MulAssign<$scalar> for $crate::Quantity<D, $scalar> {
                #[inline]
                fn mul_assign(&mut self, rhs: $scalar) {
                    *self = *self * rhs;
                }
            }

            impl<D: $crate::Dimension> ::core::ops::DivAssign<$scalar> for $crate::Quantity<D, $scalar> {
                #[inline]
                fn div_assign(&mut self, rhs: $scalar) {
                    *self = *self / rhs;
                }
            }

            impl<D: $crate::Dimension> From<$scalar> for $crate::Quantity<D, $scalar> {
                #[inline]
                fn from(value: $scalar) -> Self {
                    Self::new(value)
                }
            }

            impl<D: $crate::Dimension, S: $crate::UnitSystem> ::core::ops::Mul<$scalar>
                for $crate::Unit<D, S, $scalar>
            {
                type Output = Self;
                #[inline]
                fn mul(self, rhs: $scalar) -> Self {
                    Self::new(self.into_value() * rhs)
                }
            }

            impl<D: $crate::Dimension, S: $crate::UnitSystem> ::core::ops::Mul<$crate::Unit<D, S, $scalar>>
                for $scalar
            {
                type Output = $crate::Unit<D, S, $scalar>;
                #[inline]
                fn mul(self, rhs: $crate::Unit<D, S, $scalar>) -> Self::Output {
                    rhs * self
                }
            }

            impl<D: $crate::Dimension, S: $crate::UnitSystem> ::core::ops::Div<$scalar>
                for $crate::Unit<D, S, $scalar>
            {
                type Output = Self;
                #[inline]
                fn div(self, rhs: $scalar) -> Self {
                    Self::new(self.into_value() / rhs)
                }
            }

            impl<D: $crate::Dimension, S: $crate::UnitSystem> ::core::ops::MulAssign<$scalar>
                for $crate::Unit<D, S, $scalar>
            {
                #[inline]
                fn mul_assign(&mut self, rhs: $scalar) {
                    *self = *self * rhs;
                }
            }

            impl<D: $crate::Dimension, S: $crate::UnitSystem> ::core::ops::DivAssign<$scalar>
                for $crate::Unit<D, S, $scalar>
            {
                #[inline]
                fn div_assign(&mut self, rhs: $scalar) {
                    *self = *self / rhs;
                }
            }

            impl<D: $crate::Dimension, S: $crate::UnitSystem> From<$scalar> for $crate::Unit<D, S, $scalar> {
                #[inline]
                fn from(value: $scalar) -> Self {
                    Self::new(value)
                }
            }
        )+
    };
}

impl_scalar_ops!(f64, f32);
