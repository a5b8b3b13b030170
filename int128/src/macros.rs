//! Operator-trait boilerplate shared by [`U128`](crate::U128) and
//! [`I128`](crate::I128). Every operator forwards to a named inherent method
//! so the trait impls carry no logic of their own.

/// `impl Op<T> for T` plus `impl OpAssign<T> for T`, forwarding to `$func`.
macro_rules! impl_binop {
    ($ty:ty, $trait:ident :: $method:ident, $assign:ident :: $assign_method:ident => $func:ident) => {
        impl core::ops::$trait for $ty {
            type Output = $ty;

            #[inline]
            fn $method(self, rhs: $ty) -> $ty {
                self.$func(rhs)
            }
        }

        impl core::ops::$trait<&$ty> for $ty {
            type Output = $ty;

            #[inline]
            fn $method(self, rhs: &$ty) -> $ty {
                self.$func(*rhs)
            }
        }

        impl core::ops::$assign for $ty {
            #[inline]
            fn $assign_method(&mut self, rhs: $ty) {
                *self = self.$func(rhs);
            }
        }
    };
}

/// Shift operators for every listed amount type, forwarding to `$func(u32)`.
/// Amounts that do not fit in `u32` saturate, which shifts every bit out.
macro_rules! impl_shift {
    ($ty:ty, $trait:ident :: $method:ident, $assign:ident :: $assign_method:ident => $func:ident; $($amount:ty),+) => {
        $(
            impl core::ops::$trait<$amount> for $ty {
                type Output = $ty;

                #[inline]
                fn $method(self, rhs: $amount) -> $ty {
                    self.$func(u32::try_from(rhs).unwrap_or(u32::MAX))
                }
            }

            impl core::ops::$assign<$amount> for $ty {
                #[inline]
                fn $assign_method(&mut self, rhs: $amount) {
                    *self = self.$func(u32::try_from(rhs).unwrap_or(u32::MAX));
                }
            }
        )+
    };
}

pub(crate) use impl_binop;
pub(crate) use impl_shift;
