//! Field-wise summation of report totals.

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use super::types::{FundTotals, TravelTotals};

/// Sums records field by field, starting from `T::default()`.
///
/// Works for any record whose default is the additive identity and which can
/// absorb another record with `+=`.
pub fn sum_totals<'a, T, I>(items: I) -> T
where
    T: Default + AddAssign<&'a T> + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items.into_iter().fold(T::default(), |mut acc, item| {
        acc += item;
        acc
    })
}

macro_rules! impl_field_sum {
    ($ty:ty { $($field:ident),+ $(,)? }) => {
        impl AddAssign<&$ty> for $ty {
            fn add_assign(&mut self, rhs: &$ty) {
                $(self.$field += rhs.$field;)+
            }
        }

        impl AddAssign for $ty {
            fn add_assign(&mut self, rhs: Self) {
                *self += &rhs;
            }
        }

        impl Add for $ty {
            type Output = Self;

            fn add(mut self, rhs: Self) -> Self {
                self += &rhs;
                self
            }
        }

        impl<'a> Sum<&'a $ty> for $ty {
            fn sum<I: Iterator<Item = &'a $ty>>(iter: I) -> Self {
                sum_totals(iter)
            }
        }
    };
}

impl_field_sum!(TravelTotals {
    profdev_requested,
    admin_requested,
    total_requested,
    profdev_spent,
    admin_spent,
    total_spent,
    days_vacation,
    profdev_days_away,
    admin_days_away,
    total_days_ooo,
});

impl_field_sum!(FundTotals {
    profdev_requested,
    admin_requested,
    total_requested,
    profdev_spent,
    admin_spent,
    total_spent,
});
