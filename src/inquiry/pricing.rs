//! Amounts shown and charged by the booking flows.
//!
//! Each flow keeps its own formula; they are deliberately not unified.

use serde::Serialize;

/// Flat fee for a paid visit booking, whatever the rent
pub const VISIT_FEE: i64 = 99;

/// Split of the first month's rent between now and move-in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RentBreakdown {
    pub total_rent: i64,
    pub pay_now: i64,
    pub pay_later: i64,
    /// Share paid now, in percent
    pub percent_now: u8,
}

impl RentBreakdown {
    fn split(total_rent: i64, percent_now: u8) -> Self {
        let rent = total_rent.max(0);
        // ceil so the two halves always add back up to the rent; widened so
        // no listed price can overflow
        let scaled = (i128::from(rent) * i128::from(percent_now) + 99) / 100;
        let pay_now = i64::try_from(scaled).unwrap_or(rent).min(rent);
        Self {
            total_rent: rent,
            pay_now,
            pay_later: rent - pay_now,
            percent_now,
        }
    }
}

/// Deposit booking: half now, half to the landlord on move-in
pub fn deposit_breakdown(total_rent: i64) -> RentBreakdown {
    RentBreakdown::split(total_rent, 50)
}

/// Breakdown advertised on the room detail page: a quarter now
pub fn detail_breakdown(total_rent: i64) -> RentBreakdown {
    RentBreakdown::split(total_rent, 25)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deposit_is_half() {
        let b = deposit_breakdown(8000);
        assert_eq!((b.total_rent, b.pay_now, b.pay_later), (8000, 4000, 4000));
        assert_eq!(b.percent_now, 50);
    }

    #[test]
    fn odd_rent_still_sums() {
        let b = deposit_breakdown(4501);
        assert_eq!(b.pay_now, 2251);
        assert_eq!(b.pay_now + b.pay_later, 4501);
    }

    #[test]
    fn detail_is_quarter() {
        let b = detail_breakdown(8000);
        assert_eq!((b.pay_now, b.pay_later), (2000, 6000));
    }

    #[test]
    fn huge_rent_does_not_overflow() {
        let rent = i64::MAX / 10;
        let b = deposit_breakdown(rent);
        assert_eq!(b.pay_now + b.pay_later, rent);
        assert!(b.pay_now >= b.pay_later);

        let max = deposit_breakdown(i64::MAX);
        assert_eq!(max.pay_now, i64::MAX / 2 + 1);
        assert_eq!(max.pay_now + max.pay_later, i64::MAX);

        let quarter = detail_breakdown(i64::MAX);
        assert_eq!(quarter.pay_now + quarter.pay_later, i64::MAX);
    }

    #[test]
    fn negative_rent_clamps() {
        assert_eq!(deposit_breakdown(-10).pay_now, 0);
    }
}
