//! Per-traveler aggregate buckets.
//!
//! Each bucket is a named filter-then-sum over the store. Requested money and
//! day counts window on the trip itself (departure and return inside the
//! period). Spent money windows on each expense's `date_paid` and ignores the
//! trip dates.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use terra_shared::types::{EmployeeId, FundId, TravelRequestId};

use super::types::{DayBuckets, FundTotals, MoneyBuckets, TravelTotals};
use crate::domain::{TravelCategory, TravelRequest, Vacation};
use crate::fiscal::DateRange;
use crate::store::TravelStore;

/// Bucket computations over one period, optionally restricted to one fund.
pub struct BucketQuery<'a, S: ?Sized> {
    store: &'a S,
    period: DateRange,
    fund: Option<FundId>,
}

impl<'a, S> BucketQuery<'a, S>
where
    S: TravelStore + ?Sized,
{
    /// Creates a query over every fund.
    pub fn new(store: &'a S, period: DateRange) -> Self {
        Self {
            store,
            period,
            fund: None,
        }
    }

    /// Restricts funding and expenses to a single fund.
    #[must_use]
    pub fn for_fund(mut self, fund: FundId) -> Self {
        self.fund = Some(fund);
        self
    }

    /// The period this query covers.
    pub fn period(&self) -> DateRange {
        self.period
    }

    fn counts_fund(&self, fund: FundId) -> bool {
        self.fund.is_none_or(|f| f == fund)
    }

    fn trip_in_period(&self, treq: &TravelRequest) -> bool {
        self.period.encloses(treq.departure_date, treq.return_date)
    }

    fn trips(
        &self,
        traveler: EmployeeId,
        category: TravelCategory,
    ) -> impl Iterator<Item = &'a TravelRequest> {
        self.store
            .travel_requests_by(traveler)
            .into_iter()
            .filter(move |treq| treq.category() == category)
    }

    /// Funding on the request, if the trip lies within the period.
    pub fn request_funding(&self, treq: &TravelRequest) -> Decimal {
        if !self.trip_in_period(treq) {
            return Decimal::ZERO;
        }
        self.store
            .fundings_for(treq.id)
            .into_iter()
            .filter(|funding| self.counts_fund(funding.fund))
            .map(|funding| funding.amount)
            .sum()
    }

    /// Expenses on the request paid within the period.
    pub fn request_spent(&self, treq: TravelRequestId) -> Decimal {
        self.store
            .expenses_for(treq)
            .into_iter()
            .filter(|expense| self.counts_fund(expense.fund))
            .filter(|expense| self.period.contains(expense.date_paid))
            .map(|expense| expense.total)
            .sum()
    }

    /// Days out of office on the request, if not canceled and within the period.
    pub fn request_days_away(&self, treq: &TravelRequest) -> i64 {
        if treq.canceled || !self.trip_in_period(treq) {
            0
        } else {
            treq.days_ooo
        }
    }

    /// Funding on the traveler's trips of `category` within the period.
    pub fn requested(&self, traveler: EmployeeId, category: TravelCategory) -> Decimal {
        self.trips(traveler, category)
            .map(|treq| self.request_funding(treq))
            .sum()
    }

    /// Expenses on the traveler's trips of `category` paid within the period.
    pub fn spent(&self, traveler: EmployeeId, category: TravelCategory) -> Decimal {
        self.trips(traveler, category)
            .map(|treq| self.request_spent(treq.id))
            .sum()
    }

    /// Days out of office on the traveler's non-canceled trips of `category`.
    pub fn days_away(&self, traveler: EmployeeId, category: TravelCategory) -> i64 {
        self.trips(traveler, category)
            .map(|treq| self.request_days_away(treq))
            .sum()
    }

    /// Vacation days attached to the traveler's trips within the period.
    pub fn days_vacation(&self, traveler: EmployeeId) -> i64 {
        self.store
            .travel_requests_by(traveler)
            .into_iter()
            .filter(|treq| self.trip_in_period(treq))
            .flat_map(|treq| self.store.vacations_for(treq.id))
            .map(Vacation::duration)
            .sum()
    }

    /// The four money buckets of a traveler.
    pub fn money(&self, traveler: EmployeeId) -> MoneyBuckets {
        MoneyBuckets {
            profdev_requested: self.requested(traveler, TravelCategory::ProfessionalDevelopment),
            admin_requested: self.requested(traveler, TravelCategory::Administrative),
            profdev_spent: self.spent(traveler, TravelCategory::ProfessionalDevelopment),
            admin_spent: self.spent(traveler, TravelCategory::Administrative),
        }
    }

    /// Day buckets of a traveler.
    pub fn days(&self, traveler: EmployeeId) -> DayBuckets {
        DayBuckets {
            days_vacation: self.days_vacation(traveler),
            profdev_days_away: self.days_away(traveler, TravelCategory::ProfessionalDevelopment),
            admin_days_away: self.days_away(traveler, TravelCategory::Administrative),
        }
    }

    /// Full travel totals of a traveler.
    pub fn travel_totals(&self, traveler: EmployeeId) -> TravelTotals {
        TravelTotals::new(self.money(traveler), self.days(traveler))
    }

    /// Money totals of a traveler.
    pub fn fund_totals(&self, traveler: EmployeeId) -> FundTotals {
        FundTotals::new(self.money(traveler))
    }

    /// Fund totals of a single travel request.
    pub fn request_totals(&self, treq: &TravelRequest) -> FundTotals {
        let requested = self.request_funding(treq);
        let spent = self.request_spent(treq.id);
        let money = match treq.category() {
            TravelCategory::ProfessionalDevelopment => MoneyBuckets {
                profdev_requested: requested,
                profdev_spent: spent,
                ..MoneyBuckets::default()
            },
            TravelCategory::Administrative => MoneyBuckets {
                admin_requested: requested,
                admin_spent: spent,
                ..MoneyBuckets::default()
            },
        };
        FundTotals::new(money)
    }

    /// Travel totals for the given employees that have any travel on record.
    ///
    /// Employees without travel requests are absent from the result. Callers
    /// zero-fill them.
    pub fn individual_data(
        &self,
        employees: &[EmployeeId],
    ) -> BTreeMap<EmployeeId, TravelTotals> {
        employees
            .iter()
            .filter(|id| !self.store.travel_requests_by(**id).is_empty())
            .map(|id| (*id, self.travel_totals(*id)))
            .collect()
    }
}
