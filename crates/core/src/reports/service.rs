//! Report generation service.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use terra_shared::types::{EmployeeId, FundId, TravelRequestId, UnitId};

use super::buckets::BucketQuery;
use super::error::ReportError;
use super::totals::sum_totals;
use super::types::{
    AllowanceCaps, EmployeeAllowance, EmployeeTravelReport, EmployeeTypeGroup,
    EmployeeTypeReport, FundEmployeeReport, FundReport, FundTravelRequestEntry,
    FundTravelRequestReport, SubunitReport, TravelRequestFiscalData, TravelTotals,
    TypedEmployeeReport, UnitReport,
};
use crate::domain::{Employee, EmployeeType, Fund};
use crate::fiscal::{DateRange, FiscalCalendar};
use crate::org;
use crate::store::TravelStore;

/// Builds travel reports over a [`TravelStore`].
///
/// Every builder takes an optional start and end date. Both must be given, or
/// neither, in which case the fiscal year containing `today` is reported. The
/// period is validated before the store is consulted.
pub struct ReportService<'a, S: ?Sized> {
    store: &'a S,
    calendar: FiscalCalendar,
    today: NaiveDate,
}

impl<'a, S> ReportService<'a, S>
where
    S: TravelStore + ?Sized,
{
    /// Creates a service reporting relative to `today`.
    pub fn new(store: &'a S, calendar: FiscalCalendar, today: NaiveDate) -> Self {
        Self {
            store,
            calendar,
            today,
        }
    }

    /// Resolves the reported period.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidDateRange`] for a half-open or reversed range.
    pub fn period(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<DateRange, ReportError> {
        Ok(self.calendar.resolve(start, end, self.today)?)
    }

    /// Travel totals for a unit and all units below it.
    ///
    /// Every unit of the closure gets an entry listing only its directly
    /// assigned employees. Employees without travel carry zero totals.
    ///
    /// # Errors
    ///
    /// Returns an error for an invalid period or an unknown unit.
    pub fn unit_report(
        &self,
        unit: UnitId,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<UnitReport, ReportError> {
        let period = self.period(start, end)?;
        let root = self
            .store
            .unit(unit)
            .ok_or(ReportError::UnitNotFound(unit))?;

        let closure = org::subunit_closure(self.store, unit);
        let employee_ids: Vec<EmployeeId> = closure
            .iter()
            .flat_map(|u| self.store.unit_employees(u.id))
            .map(|e| e.id)
            .collect();
        let rows = BucketQuery::new(self.store, period).individual_data(&employee_ids);

        let subunits: BTreeMap<UnitId, SubunitReport> = closure
            .into_iter()
            .map(|subunit| {
                let employees: BTreeMap<EmployeeId, EmployeeTravelReport> = self
                    .store
                    .unit_employees(subunit.id)
                    .into_iter()
                    .map(|employee| {
                        let data = rows.get(&employee.id).copied().unwrap_or_default();
                        (
                            employee.id,
                            EmployeeTravelReport {
                                employee: employee.clone(),
                                data,
                            },
                        )
                    })
                    .collect();
                let subunit_totals = sum_totals(employees.values().map(|e| &e.data));
                (
                    subunit.id,
                    SubunitReport {
                        subunit: subunit.clone(),
                        employees,
                        subunit_totals,
                    },
                )
            })
            .collect();
        let unit_totals = sum_totals(subunits.values().map(|s| &s.subunit_totals));

        Ok(UnitReport {
            unit: root.clone(),
            period,
            subunits,
            unit_totals,
        })
    }

    /// Employees with funding against the fund on a trip returning within the
    /// period, or with an expense against the fund paid within the period.
    ///
    /// # Errors
    ///
    /// Returns an error for an invalid period or an unknown fund.
    pub fn fund_employee_list(
        &self,
        fund: FundId,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<BTreeSet<EmployeeId>, ReportError> {
        let period = self.period(start, end)?;
        self.require_fund(fund)?;
        Ok(self.fund_travelers(fund, period))
    }

    /// Travel requests with funding against the fund on a trip returning within
    /// the period, or with an expense against the fund paid within the period.
    ///
    /// # Errors
    ///
    /// Returns an error for an invalid period or an unknown fund.
    pub fn fund_travel_requests(
        &self,
        fund: FundId,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<BTreeSet<TravelRequestId>, ReportError> {
        let period = self.period(start, end)?;
        self.require_fund(fund)?;
        Ok(self.fund_request_ids(fund, period))
    }

    /// Money totals charged to a fund, per employee.
    ///
    /// # Errors
    ///
    /// Returns an error for an invalid period or an unknown fund.
    pub fn fund_report(
        &self,
        fund: FundId,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<FundReport, ReportError> {
        let period = self.period(start, end)?;
        let fund_record = self.require_fund(fund)?;
        let query = BucketQuery::new(self.store, period).for_fund(fund);

        let employees: Vec<FundEmployeeReport> = self
            .fund_travelers(fund, period)
            .into_iter()
            .filter_map(|id| self.store.employee(id))
            .map(|employee| FundEmployeeReport {
                employee: employee.clone(),
                data: query.fund_totals(employee.id),
            })
            .collect();
        let totals = sum_totals(employees.iter().map(|e| &e.data));

        Ok(FundReport {
            fund: fund_record.clone(),
            period,
            employees,
            totals,
        })
    }

    /// Money totals charged to a fund, per travel request.
    ///
    /// # Errors
    ///
    /// Returns an error for an invalid period or an unknown fund.
    pub fn fund_travel_request_report(
        &self,
        fund: FundId,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<FundTravelRequestReport, ReportError> {
        let period = self.period(start, end)?;
        let fund_record = self.require_fund(fund)?;
        let query = BucketQuery::new(self.store, period).for_fund(fund);

        let travel_requests: Vec<FundTravelRequestEntry> = self
            .fund_request_ids(fund, period)
            .into_iter()
            .filter_map(|id| self.store.travel_request(id))
            .map(|treq| FundTravelRequestEntry {
                travel_request_id: treq.id,
                traveler_id: treq.traveler,
                traveler: self
                    .store
                    .employee(treq.traveler)
                    .map(|e| e.name.clone())
                    .unwrap_or_default(),
                data: query.request_totals(treq),
            })
            .collect();
        let totals = sum_totals(travel_requests.iter().map(|t| &t.data));

        Ok(FundTravelRequestReport {
            fund: fund_record.clone(),
            period,
            travel_requests,
            totals,
        })
    }

    /// Travel totals grouped by employee type.
    ///
    /// Every employee is listed under their type. Totals are computed for
    /// `employees` (all employees when `None`); anyone else carries zero
    /// totals.
    ///
    /// # Errors
    ///
    /// Returns an error for an invalid period.
    pub fn employee_type_report(
        &self,
        employees: Option<&[EmployeeId]>,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<EmployeeTypeReport, ReportError> {
        let period = self.period(start, end)?;
        let everyone = self.store.employees();
        let subset: Vec<EmployeeId> = match employees {
            Some(ids) => ids.to_vec(),
            None => everyone.iter().map(|e| e.id).collect(),
        };
        let rows = BucketQuery::new(self.store, period).individual_data(&subset);

        let types: Vec<EmployeeTypeGroup> = EmployeeType::ALL
            .into_iter()
            .map(|employee_type| {
                let mut members: Vec<&Employee> = everyone
                    .iter()
                    .copied()
                    .filter(|e| e.employee_type == employee_type)
                    .collect();
                members.sort_by_key(|e| (e.unit, e.id));

                let employees: Vec<TypedEmployeeReport> = members
                    .into_iter()
                    .map(|e| {
                        let data = rows.get(&e.id).copied().unwrap_or_default();
                        self.typed_employee(e, data)
                    })
                    .collect();
                let totals = sum_totals(employees.iter().map(|e| &e.data));
                EmployeeTypeGroup {
                    employee_type,
                    label: employee_type.display_name().to_string(),
                    employees,
                    totals,
                }
            })
            .collect();
        let all_type_total = sum_totals(types.iter().map(|g| &g.totals));

        Ok(EmployeeTypeReport {
            period,
            types,
            all_type_total,
        })
    }

    /// Usage and remaining professional development allowance per employee.
    ///
    /// One entry per requested id, in request order. Unknown ids report zero
    /// usage against the base caps.
    ///
    /// # Errors
    ///
    /// Returns an error for an invalid period.
    pub fn employee_allowance_report(
        &self,
        employees: &[EmployeeId],
        caps: AllowanceCaps,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Vec<EmployeeAllowance>, ReportError> {
        let period = self.period(start, end)?;
        let query = BucketQuery::new(self.store, period);

        Ok(employees
            .iter()
            .map(|&id| match self.store.employee(id) {
                Some(employee) => EmployeeAllowance::new(
                    id,
                    &query.travel_totals(id),
                    caps.spending + employee.usable_extra_allocation(period.end),
                    caps.days,
                ),
                None => {
                    EmployeeAllowance::new(id, &TravelTotals::default(), caps.spending, caps.days)
                }
            })
            .collect())
    }

    /// Period figures for individual travel requests.
    ///
    /// Unknown ids are omitted.
    ///
    /// # Errors
    ///
    /// Returns an error for an invalid period.
    pub fn travel_request_report(
        &self,
        travel_requests: &[TravelRequestId],
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Vec<TravelRequestFiscalData>, ReportError> {
        let period = self.period(start, end)?;
        let query = BucketQuery::new(self.store, period);

        Ok(travel_requests
            .iter()
            .filter_map(|&id| self.store.travel_request(id))
            .map(|treq| TravelRequestFiscalData {
                travel_request_id: treq.id,
                actual_expenses: query.request_spent(treq.id),
                funding: query.request_funding(treq),
                days_ooo: query.request_days_away(treq),
            })
            .collect())
    }

    fn require_fund(&self, fund: FundId) -> Result<&'a Fund, ReportError> {
        self.store.fund(fund).ok_or(ReportError::FundNotFound(fund))
    }

    fn fund_request_ids(&self, fund: FundId, period: DateRange) -> BTreeSet<TravelRequestId> {
        let funded = self
            .store
            .fundings_against(fund)
            .into_iter()
            .filter(|funding| {
                self.store
                    .travel_request(funding.travel_request)
                    .is_some_and(|treq| period.contains(treq.return_date))
            })
            .map(|funding| funding.travel_request);
        let paid = self
            .store
            .expenses_against(fund)
            .into_iter()
            .filter(|expense| period.contains(expense.date_paid))
            .map(|expense| expense.travel_request);
        funded.chain(paid).collect()
    }

    fn fund_travelers(&self, fund: FundId, period: DateRange) -> BTreeSet<EmployeeId> {
        self.fund_request_ids(fund, period)
            .into_iter()
            .filter_map(|id| self.store.travel_request(id))
            .map(|treq| treq.traveler)
            .collect()
    }

    fn typed_employee(&self, employee: &Employee, data: TravelTotals) -> TypedEmployeeReport {
        let unit = self.store.unit(employee.unit);
        TypedEmployeeReport {
            employee_id: employee.id,
            name: employee.name.clone(),
            unit: unit.map(|u| u.name.clone()).unwrap_or_default(),
            unit_manager: unit
                .and_then(|u| u.manager)
                .and_then(|id| self.store.employee(id))
                .map(|m| m.name.clone()),
            data,
        }
    }
}
