//! Travel requests and the money and time recorded against them.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use terra_shared::types::{
    ActivityId, ActualExpenseId, EmployeeId, FundId, FundingId, TravelRequestId, VacationId,
};

use super::UnknownCode;
use crate::fiscal::FiscalCalendar;

/// Country assumed for domestic travel.
pub const DOMESTIC_COUNTRY: &str = "USA";

/// The event a trip is taken for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Activity ID.
    pub id: ActivityId,
    /// Activity name.
    pub name: String,
    /// First day of the activity.
    pub start: NaiveDate,
    /// Last day of the activity.
    pub end: NaiveDate,
    /// City.
    pub city: String,
    /// State or province.
    pub state: String,
    /// Country.
    pub country: String,
}

impl Activity {
    /// Returns true if the activity is held outside the home country.
    #[must_use]
    pub fn is_international(&self) -> bool {
        self.country != DOMESTIC_COUNTRY
    }
}

/// Spending category of a travel request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelCategory {
    /// Professional development travel.
    ProfessionalDevelopment,
    /// Administrative travel.
    Administrative,
}

impl TravelCategory {
    /// Maps the stored `administrative` flag to a category.
    #[must_use]
    pub const fn from_administrative(administrative: bool) -> Self {
        if administrative {
            Self::Administrative
        } else {
            Self::ProfessionalDevelopment
        }
    }
}

/// A travel request submitted by an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelRequest {
    /// Travel request ID.
    pub id: TravelRequestId,
    /// Employee travelling.
    pub traveler: EmployeeId,
    /// Activity the trip is for.
    pub activity: ActivityId,
    /// First day of travel.
    pub departure_date: NaiveDate,
    /// Last day of travel.
    pub return_date: NaiveDate,
    /// Working days out of office.
    pub days_ooo: i64,
    /// Administrative rather than professional development travel.
    pub administrative: bool,
    /// Whether the request is closed.
    pub closed: bool,
    /// Whether the request was canceled.
    pub canceled: bool,
    /// Approving employee.
    pub approved_by: Option<EmployeeId>,
    /// Time of approval.
    pub approved_on: Option<DateTime<Utc>>,
    /// Time of international travel approval.
    pub international_approved_on: Option<DateTime<Utc>>,
}

impl TravelRequest {
    /// Returns the spending category.
    #[must_use]
    pub const fn category(&self) -> TravelCategory {
        TravelCategory::from_administrative(self.administrative)
    }

    /// Returns true if the request has every approval its activity requires.
    #[must_use]
    pub fn is_approved(&self, activity: &Activity) -> bool {
        self.approved_on.is_some()
            && (!activity.is_international() || self.international_approved_on.is_some())
    }

    /// Returns true if the trip departs within the given fiscal year.
    #[must_use]
    pub fn in_fiscal_year(&self, calendar: &FiscalCalendar, fiscal_year: i32) -> bool {
        calendar.in_fiscal_year(self.departure_date, fiscal_year)
    }
}

/// Money allocated from a fund to a travel request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Funding {
    /// Funding ID.
    pub id: FundingId,
    /// Funded travel request.
    pub travel_request: TravelRequestId,
    /// Fund the money comes from.
    pub fund: FundId,
    /// Allocated amount.
    pub amount: Decimal,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Kind of actual expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseType {
    /// Lodging.
    Lodging,
    /// Airfare.
    Airfare,
    /// Transit.
    Transit,
    /// Car rental.
    CarRental,
    /// Driving.
    Driving,
    /// Conference registration.
    ConferenceRegistration,
    /// Preconference fees.
    PreconferenceFees,
    /// Membership fees.
    MembershipFees,
    /// Parking.
    Parking,
    /// Meals.
    Meals,
    /// Other.
    Other,
}

impl ExpenseType {
    /// Every expense type.
    pub const ALL: [Self; 11] = [
        Self::Lodging,
        Self::Airfare,
        Self::Transit,
        Self::CarRental,
        Self::Driving,
        Self::ConferenceRegistration,
        Self::PreconferenceFees,
        Self::MembershipFees,
        Self::Parking,
        Self::Meals,
        Self::Other,
    ];

    /// Returns the stored code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Lodging => "LDG",
            Self::Airfare => "AIR",
            Self::Transit => "TRN",
            Self::CarRental => "RNT",
            Self::Driving => "DRV",
            Self::ConferenceRegistration => "CON",
            Self::PreconferenceFees => "PRE",
            Self::MembershipFees => "MEM",
            Self::Parking => "PRK",
            Self::Meals => "EAT",
            Self::Other => "OTH",
        }
    }

    /// Returns the display label.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Lodging => "Lodging",
            Self::Airfare => "Airfare",
            Self::Transit => "Transit",
            Self::CarRental => "Car Rental",
            Self::Driving => "Driving",
            Self::ConferenceRegistration => "Conference Registration",
            Self::PreconferenceFees => "Preconference Fees",
            Self::MembershipFees => "Membership Fees",
            Self::Parking => "Parking",
            Self::Meals => "Meals",
            Self::Other => "Other",
        }
    }
}

impl FromStr for ExpenseType {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.code() == s)
            .ok_or_else(|| UnknownCode::new("expense type", s))
    }
}

/// Money actually paid for a trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActualExpense {
    /// Expense ID.
    pub id: ActualExpenseId,
    /// Travel request the expense belongs to.
    pub travel_request: TravelRequestId,
    /// Fund charged.
    pub fund: FundId,
    /// Kind of expense.
    pub expense_type: ExpenseType,
    /// Amount paid.
    pub total: Decimal,
    /// Day the expense was paid.
    pub date_paid: NaiveDate,
}

/// Personal days taken around a trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vacation {
    /// Vacation ID.
    pub id: VacationId,
    /// Travel request the vacation is attached to.
    pub travel_request: TravelRequestId,
    /// First vacation day.
    pub start: NaiveDate,
    /// Last vacation day.
    pub end: NaiveDate,
}

impl Vacation {
    /// Inclusive number of vacation days.
    #[must_use]
    pub fn duration(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}
