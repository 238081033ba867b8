//! Tests for report generation.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use rstest::rstest;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use terra_shared::types::{EmployeeId, FundId, TravelRequestId, UnitId};

use super::service::ReportService;
use super::totals::sum_totals;
use super::types::{AllowanceCaps, TravelTotals};
use super::ReportError;
use crate::domain::EmployeeType;
use crate::fiscal::{FiscalCalendar, FiscalError};
use crate::fixtures::{Fixture, date};
use crate::store::Snapshot;

fn fy_start() -> Option<NaiveDate> {
    Some(date(2019, 7, 1))
}

fn fy_end() -> Option<NaiveDate> {
    Some(date(2020, 6, 30))
}

fn service(store: &Snapshot) -> ReportService<'_, Snapshot> {
    ReportService::new(store, FiscalCalendar::default(), date(2020, 2, 14))
}

struct Org {
    library: UnitId,
    public: UnitId,
    reference: UnitId,
    technical: UnitId,
    ul: EmployeeId,
    ada: EmployeeId,
    bob: EmployeeId,
    cy: EmployeeId,
    di: EmployeeId,
    fund: FundId,
    other_fund: FundId,
}

/// Library with two divisions, one of which has a child unit.
fn org() -> (Fixture, Org) {
    let mut fx = Fixture::new();
    let library = fx.unit("Library", None);
    let public = fx.unit("Public Services", Some(library));
    let technical = fx.unit("Technical Services", Some(library));
    let reference = fx.unit("Reference", Some(public));

    let ul = fx.employee("Ursula Librarian", library, EmployeeType::UniversityLibrarian);
    let ada = fx.librarian("Ada", public);
    let bob = fx.employee("Bob", public, EmployeeType::SeniorExempt);
    let cy = fx.librarian("Cy", reference);
    let di = fx.employee("Di", technical, EmployeeType::UnitHead);
    fx.set_manager(library, ul);
    fx.set_manager(public, ada);

    let fund = fx.fund(ul);
    let other_fund = fx.fund(ul);

    (
        fx,
        Org {
            library,
            public,
            reference,
            technical,
            ul,
            ada,
            bob,
            cy,
            di,
            fund,
            other_fund,
        },
    )
}

/// Ada: professional development trip funded $2,000, $1,855 spent.
/// Bob: administrative trip funded $1,300, nothing spent.
fn example() -> (Snapshot, Org) {
    let (mut fx, org) = org();
    let ada_trip = fx.trip(org.ada, date(2019, 10, 1), date(2019, 10, 5), 4, false);
    fx.funding(ada_trip, org.fund, dec!(2000));
    fx.expense(ada_trip, org.fund, dec!(1500), date(2019, 10, 20));
    fx.expense(ada_trip, org.fund, dec!(355), date(2019, 11, 2));
    fx.vacation(ada_trip, date(2019, 10, 6), date(2019, 10, 7));

    let bob_trip = fx.trip(org.bob, date(2020, 3, 10), date(2020, 3, 12), 3, true);
    fx.funding(bob_trip, org.fund, dec!(1300));

    (fx.build(), org)
}

#[test]
fn test_unit_report_example_totals() {
    let (store, org) = example();
    let report = service(&store)
        .unit_report(org.public, fy_start(), fy_end())
        .unwrap();

    let totals = report.unit_totals;
    assert_eq!(totals.profdev_requested, dec!(2000));
    assert_eq!(totals.profdev_spent, dec!(1855));
    assert_eq!(totals.admin_requested, dec!(1300));
    assert_eq!(totals.admin_spent, dec!(0));
    assert_eq!(totals.total_requested, dec!(3300));
    assert_eq!(totals.total_spent, dec!(1855));
    assert_eq!(totals.profdev_days_away, 4);
    assert_eq!(totals.admin_days_away, 3);
    assert_eq!(totals.total_days_ooo, 7);
    assert_eq!(totals.days_vacation, 2);
}

#[test]
fn test_unit_report_groups_by_immediate_unit() {
    let (store, org) = example();
    let report = service(&store)
        .unit_report(org.library, fy_start(), fy_end())
        .unwrap();

    let unit_ids: Vec<UnitId> = report.subunits.keys().copied().collect();
    assert_eq!(
        unit_ids,
        vec![org.library, org.public, org.technical, org.reference]
    );

    let members = |unit: UnitId| -> Vec<EmployeeId> {
        report.subunits[&unit].employees.keys().copied().collect()
    };
    assert_eq!(members(org.library), vec![org.ul]);
    assert_eq!(members(org.public), vec![org.ada, org.bob]);
    assert_eq!(members(org.reference), vec![org.cy]);
    assert_eq!(members(org.technical), vec![org.di]);

    assert_eq!(
        report.subunits[&org.public].subunit_totals.total_requested,
        dec!(3300)
    );
    assert_eq!(report.unit_totals.total_requested, dec!(3300));
    assert_eq!(report.unit.id, org.library);
    assert_eq!(report.period.start, date(2019, 7, 1));
}

#[test]
fn test_unit_report_zero_fills_employees_without_travel() {
    let (store, org) = example();
    let report = service(&store)
        .unit_report(org.library, fy_start(), fy_end())
        .unwrap();

    let idle = [
        (org.library, org.ul),
        (org.reference, org.cy),
        (org.technical, org.di),
    ];
    for (unit, employee) in idle {
        assert_eq!(
            report.subunits[&unit].employees[&employee].data,
            TravelTotals::default()
        );
        assert_eq!(report.subunits[&unit].subunit_totals, TravelTotals::default());
    }
}

#[test]
fn test_unit_report_rollup_law() {
    let (store, org) = example();
    let report = service(&store)
        .unit_report(org.library, fy_start(), fy_end())
        .unwrap();

    for subunit in report.subunits.values() {
        let employee_sum: TravelTotals =
            sum_totals(subunit.employees.values().map(|e| &e.data));
        assert_eq!(subunit.subunit_totals, employee_sum);
    }
    let subunit_sum: TravelTotals = report.subunits.values().map(|s| &s.subunit_totals).sum();
    assert_eq!(report.unit_totals, subunit_sum);
}

#[test]
fn test_unit_report_defaults_to_current_fiscal_year() {
    let (store, org) = example();
    let report = service(&store).unit_report(org.public, None, None).unwrap();
    assert_eq!(report.period.start, date(2019, 7, 1));
    assert_eq!(report.period.end, date(2020, 6, 30));
    assert_eq!(report.unit_totals.total_requested, dec!(3300));
}

#[test]
fn test_unit_report_unknown_unit() {
    let (store, _) = example();
    let result = service(&store).unit_report(UnitId::new(99), None, None);
    assert_eq!(result.unwrap_err(), ReportError::UnitNotFound(UnitId::new(99)));
}

#[test]
fn test_unit_report_terminates_on_cycle() {
    let (mut fx, org) = org();
    fx.set_parent(org.library, org.reference);
    let store = fx.build();

    let report = service(&store).unit_report(org.public, None, None).unwrap();
    assert_eq!(report.subunits.len(), 4);
}

#[test]
fn test_spent_windows_on_date_paid() {
    let (mut fx, org) = org();
    // Trip inside the period, expense paid after it ends.
    let late = fx.trip(org.ada, date(2020, 6, 1), date(2020, 6, 5), 5, false);
    fx.funding(late, org.fund, dec!(800));
    fx.expense(late, org.fund, dec!(640), date(2020, 7, 15));
    // Trip before the period, expense paid inside it.
    let early = fx.trip(org.ada, date(2019, 6, 20), date(2019, 6, 25), 4, false);
    fx.funding(early, org.fund, dec!(300));
    fx.expense(early, org.fund, dec!(275), date(2019, 7, 10));
    let store = fx.build();

    let data = service(&store)
        .unit_report(org.public, fy_start(), fy_end())
        .unwrap()
        .subunits[&org.public]
        .employees[&org.ada]
        .data;
    assert_eq!(data.profdev_requested, dec!(800));
    assert_eq!(data.profdev_spent, dec!(275));
    assert_eq!(data.profdev_days_away, 5);
}

#[test]
fn test_requested_needs_whole_trip_in_period() {
    let (mut fx, org) = org();
    let straddling = fx.trip(org.ada, date(2020, 6, 28), date(2020, 7, 2), 3, false);
    fx.funding(straddling, org.fund, dec!(900));
    fx.vacation(straddling, date(2020, 7, 3), date(2020, 7, 4));
    let store = fx.build();

    let data = service(&store)
        .unit_report(org.public, fy_start(), fy_end())
        .unwrap()
        .subunits[&org.public]
        .employees[&org.ada]
        .data;
    assert_eq!(data, TravelTotals::default());
}

#[test]
fn test_canceled_trips_do_not_count_days_away() {
    let (mut fx, org) = org();
    let canceled = fx.trip(org.ada, date(2019, 9, 1), date(2019, 9, 3), 3, true);
    fx.cancel(canceled);
    fx.funding(canceled, org.fund, dec!(100));
    fx.trip(org.ada, date(2019, 9, 10), date(2019, 9, 11), 2, true);
    let store = fx.build();

    let data = service(&store)
        .unit_report(org.public, fy_start(), fy_end())
        .unwrap()
        .subunits[&org.public]
        .employees[&org.ada]
        .data;
    assert_eq!(data.admin_days_away, 2);
    assert_eq!(data.total_days_ooo, 2);
    assert_eq!(data.admin_requested, dec!(100));
}

#[test]
fn test_fund_report_restricts_to_fund() {
    let (mut fx, org) = org();
    let trip = fx.trip(org.ada, date(2019, 10, 1), date(2019, 10, 5), 4, false);
    fx.funding(trip, org.fund, dec!(1000));
    fx.funding(trip, org.other_fund, dec!(250));
    fx.expense(trip, org.fund, dec!(900), date(2019, 10, 20));
    fx.expense(trip, org.other_fund, dec!(240), date(2019, 10, 20));
    let store = fx.build();

    let report = service(&store)
        .fund_report(org.fund, fy_start(), fy_end())
        .unwrap();
    assert_eq!(report.employees.len(), 1);
    assert_eq!(report.employees[0].employee.id, org.ada);
    assert_eq!(report.totals.profdev_requested, dec!(1000));
    assert_eq!(report.totals.profdev_spent, dec!(900));
    assert_eq!(report.totals.total_requested, dec!(1000));
    assert_eq!(report.totals.total_spent, dec!(900));
    assert_eq!(report.fund.to_string(), "604000-LD-19901");
}

#[test]
fn test_fund_employee_list_is_a_union() {
    let (mut fx, org) = org();
    // Ada only has funding against the fund.
    let funded = fx.trip(org.ada, date(2019, 10, 1), date(2019, 10, 5), 4, false);
    fx.funding(funded, org.fund, dec!(1000));
    // Bob only has an expense against the fund.
    let expensed = fx.trip(org.bob, date(2019, 11, 1), date(2019, 11, 2), 2, true);
    fx.funding(expensed, org.other_fund, dec!(400));
    fx.expense(expensed, org.fund, dec!(85), date(2019, 11, 15));
    // Cy has funding against the fund, but outside the period.
    let outside = fx.trip(org.cy, date(2018, 11, 1), date(2018, 11, 2), 2, false);
    fx.funding(outside, org.fund, dec!(700));
    let store = fx.build();

    let service = service(&store);
    let employees = service
        .fund_employee_list(org.fund, fy_start(), fy_end())
        .unwrap();
    assert_eq!(employees.into_iter().collect::<Vec<_>>(), vec![org.ada, org.bob]);

    let report = service
        .fund_report(org.fund, fy_start(), fy_end())
        .unwrap();
    let bob = report
        .employees
        .iter()
        .find(|e| e.employee.id == org.bob)
        .unwrap();
    assert_eq!(bob.data.admin_requested, dec!(0));
    assert_eq!(bob.data.admin_spent, dec!(85));
    assert_eq!(report.totals.total_requested, dec!(1000));
    assert_eq!(report.totals.total_spent, dec!(85));

    let requests = service
        .fund_travel_requests(org.fund, fy_start(), fy_end())
        .unwrap();
    assert_eq!(requests.into_iter().collect::<Vec<_>>(), vec![funded, expensed]);
}

#[test]
fn test_fund_membership_follows_return_date() {
    let (mut fx, org) = org();
    // Departs before the fiscal year, returns inside it.
    let straddling = fx.trip(org.ada, date(2019, 6, 25), date(2019, 7, 5), 8, false);
    fx.funding(straddling, org.fund, dec!(500));
    // Departs inside the fiscal year, returns after it.
    let late = fx.trip(org.bob, date(2020, 6, 28), date(2020, 7, 3), 4, false);
    fx.funding(late, org.fund, dec!(300));
    let store = fx.build();

    let service = service(&store);
    let employees = service
        .fund_employee_list(org.fund, fy_start(), fy_end())
        .unwrap();
    assert_eq!(employees.into_iter().collect::<Vec<_>>(), vec![org.ada]);

    let requests = service
        .fund_travel_requests(org.fund, fy_start(), fy_end())
        .unwrap();
    assert_eq!(requests.into_iter().collect::<Vec<_>>(), vec![straddling]);

    // Listed, but the requested amount still needs the whole trip in range.
    let report = service
        .fund_report(org.fund, fy_start(), fy_end())
        .unwrap();
    assert_eq!(report.employees.len(), 1);
    assert_eq!(report.employees[0].employee.id, org.ada);
    assert_eq!(report.totals.total_requested, dec!(0));
}

#[test]
fn test_fund_travel_request_report() {
    let (mut fx, org) = org();
    let profdev = fx.trip(org.ada, date(2019, 10, 1), date(2019, 10, 5), 4, false);
    fx.funding(profdev, org.fund, dec!(1000));
    fx.expense(profdev, org.fund, dec!(910.25), date(2019, 10, 20));
    let admin = fx.trip(org.bob, date(2019, 11, 1), date(2019, 11, 2), 2, true);
    fx.funding(admin, org.fund, dec!(400));
    fx.funding(admin, org.other_fund, dec!(50));
    let store = fx.build();

    let report = service(&store)
        .fund_travel_request_report(org.fund, fy_start(), fy_end())
        .unwrap();
    assert_eq!(report.travel_requests.len(), 2);

    let first = &report.travel_requests[0];
    assert_eq!(first.travel_request_id, profdev);
    assert_eq!(first.traveler, "Ada");
    assert_eq!(first.data.profdev_requested, dec!(1000));
    assert_eq!(first.data.profdev_spent, dec!(910.25));

    let second = &report.travel_requests[1];
    assert_eq!(second.traveler_id, org.bob);
    assert_eq!(second.data.admin_requested, dec!(400));
    assert_eq!(second.data.total_spent, dec!(0));

    assert_eq!(report.totals.total_requested, dec!(1400));
    assert_eq!(report.totals.total_spent, dec!(910.25));
}

#[test]
fn test_fund_reports_unknown_fund() {
    let (store, _) = example();
    let service = service(&store);
    let missing = FundId::new(99);
    assert_eq!(
        service.fund_report(missing, None, None).unwrap_err(),
        ReportError::FundNotFound(missing)
    );
    assert_eq!(
        service.fund_employee_list(missing, None, None).unwrap_err(),
        ReportError::FundNotFound(missing)
    );
}

#[test]
fn test_employee_type_report_groups() {
    let (store, org) = example();
    let report = service(&store)
        .employee_type_report(None, fy_start(), fy_end())
        .unwrap();

    let labels: Vec<&str> = report.types.iter().map(|g| g.label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "University Librarian",
            "Executive",
            "Unit Head",
            "Librarian",
            "Sr. Exempt Staff",
            "Other"
        ]
    );
    assert!(report.types[1].employees.is_empty());
    assert_eq!(report.types[1].totals, TravelTotals::default());

    let librarians = &report.types[3];
    let ids: Vec<EmployeeId> = librarians.employees.iter().map(|e| e.employee_id).collect();
    assert_eq!(ids, vec![org.ada, org.cy]);
    assert_eq!(librarians.employees[0].unit, "Public Services");
    assert_eq!(librarians.employees[0].unit_manager.as_deref(), Some("Ada"));
    assert_eq!(librarians.employees[1].unit_manager, None);
    assert_eq!(librarians.totals.profdev_spent, dec!(1855));

    assert_eq!(report.types[4].totals.admin_requested, dec!(1300));
    assert_eq!(report.all_type_total.total_requested, dec!(3300));
    assert_eq!(report.all_type_total.total_spent, dec!(1855));

    let type_sum: TravelTotals = report.types.iter().map(|g| &g.totals).sum();
    assert_eq!(report.all_type_total, type_sum);
}

#[test]
fn test_employee_type_report_zero_fills_outside_subset() {
    let (store, org) = example();
    let report = service(&store)
        .employee_type_report(Some(&[org.bob][..]), fy_start(), fy_end())
        .unwrap();

    let ada = &report.types[3].employees[0];
    assert_eq!(ada.employee_id, org.ada);
    assert_eq!(ada.data, TravelTotals::default());
    assert_eq!(report.all_type_total.total_requested, dec!(1300));
    assert_eq!(report.all_type_total.total_spent, dec!(0));
}

#[test]
fn test_employee_allowance_report() {
    let (mut fx, org) = org();
    fx.employee_mut(org.ada).extra_allocation = Some(dec!(500));
    fx.employee_mut(org.bob).extra_allocation = Some(dec!(500));
    fx.employee_mut(org.bob).allocation_expire_date = Some(date(2019, 12, 31));
    let trip = fx.trip(org.ada, date(2019, 10, 1), date(2019, 10, 5), 4, false);
    fx.funding(trip, org.fund, dec!(2000));
    fx.expense(trip, org.fund, dec!(1855), date(2019, 10, 20));
    let store = fx.build();

    let caps = AllowanceCaps {
        spending: dec!(3000),
        days: 10,
    };
    let missing = EmployeeId::new(99);
    let report = service(&store)
        .employee_allowance_report(
            &[org.ada, org.bob, missing],
            caps,
            fy_start(),
            fy_end(),
        )
        .unwrap();
    assert_eq!(report.len(), 3);

    let ada = &report[0];
    assert_eq!(ada.employee_id, org.ada);
    assert_eq!(ada.profdev_cap, dec!(3500));
    assert_eq!(ada.profdev_spent, dec!(1855));
    assert_eq!(ada.profdev_remaining, dec!(1645));
    assert_eq!(ada.profdev_days_away, 4);
    assert_eq!(ada.total_days_away, 4);
    assert_eq!(ada.profdev_days_remaining, 6);
    assert_eq!(ada.total_requested, dec!(2000));

    // Bob's extra allocation expired before the period ends.
    assert_eq!(report[1].profdev_cap, dec!(3000));
    assert_eq!(report[1].profdev_remaining, dec!(3000));

    let unknown = &report[2];
    assert_eq!(unknown.employee_id, missing);
    assert_eq!(unknown.total_spent, dec!(0));
    assert_eq!(unknown.profdev_remaining, dec!(3000));
    assert_eq!(unknown.profdev_days_remaining, 10);
}

#[test]
fn test_travel_request_report() {
    let (mut fx, org) = org();
    let inside = fx.trip(org.ada, date(2019, 10, 1), date(2019, 10, 5), 4, false);
    fx.funding(inside, org.fund, dec!(600));
    fx.funding(inside, org.other_fund, dec!(150));
    fx.expense(inside, org.fund, dec!(500), date(2019, 10, 20));
    fx.expense(inside, org.fund, dec!(90), date(2020, 8, 1));
    let canceled = fx.trip(org.ada, date(2019, 11, 1), date(2019, 11, 3), 3, false);
    fx.cancel(canceled);
    let outside = fx.trip(org.ada, date(2019, 6, 1), date(2019, 6, 3), 3, false);
    fx.funding(outside, org.fund, dec!(200));
    fx.expense(outside, org.fund, dec!(180), date(2019, 7, 2));
    let store = fx.build();

    let report = service(&store)
        .travel_request_report(
            &[inside, canceled, outside, TravelRequestId::new(99)],
            fy_start(),
            fy_end(),
        )
        .unwrap();
    assert_eq!(report.len(), 3);

    assert_eq!(report[0].travel_request_id, inside);
    assert_eq!(report[0].funding, dec!(750));
    assert_eq!(report[0].actual_expenses, dec!(500));
    assert_eq!(report[0].days_ooo, 4);

    assert_eq!(report[1].days_ooo, 0);

    assert_eq!(report[2].funding, dec!(0));
    assert_eq!(report[2].actual_expenses, dec!(180));
    assert_eq!(report[2].days_ooo, 0);
}

/// Calls every builder with the given bounds and collects the errors.
fn all_builder_errors(
    store: &Snapshot,
    org: &Org,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Vec<ReportError> {
    let service = service(store);
    let caps = AllowanceCaps {
        spending: dec!(3000),
        days: 10,
    };
    vec![
        service.unit_report(org.library, start, end).unwrap_err(),
        service.fund_report(org.fund, start, end).unwrap_err(),
        service.fund_employee_list(org.fund, start, end).unwrap_err(),
        service.fund_travel_requests(org.fund, start, end).unwrap_err(),
        service
            .fund_travel_request_report(org.fund, start, end)
            .unwrap_err(),
        service.employee_type_report(None, start, end).unwrap_err(),
        service
            .employee_allowance_report(&[org.ada], caps, start, end)
            .unwrap_err(),
        service
            .travel_request_report(&[TravelRequestId::new(1)], start, end)
            .unwrap_err(),
    ]
}

#[rstest]
#[case(Some(date(2020, 1, 1)), Some(date(2019, 1, 1)))]
#[case(None, Some(date(2019, 1, 1)))]
#[case(Some(date(2019, 1, 1)), None)]
fn test_every_builder_rejects_invalid_range(
    #[case] start: Option<NaiveDate>,
    #[case] end: Option<NaiveDate>,
) {
    let (store, org) = example();
    for error in all_builder_errors(&store, &org, start, end) {
        assert!(matches!(error, ReportError::InvalidDateRange(_)), "{error:?}");
    }
}

#[test]
fn test_range_is_checked_before_lookups() {
    let (store, _) = example();
    let result = service(&store).unit_report(UnitId::new(99), None, Some(date(2019, 1, 1)));
    assert_eq!(
        result.unwrap_err(),
        ReportError::InvalidDateRange(FiscalError::IncompleteRange)
    );
}

#[test]
fn test_unit_report_serializes_with_string_keys() {
    let (store, org) = example();
    let report = service(&store)
        .unit_report(org.public, fy_start(), fy_end())
        .unwrap();
    let json = serde_json::to_value(&report).unwrap();

    let key = org.ada.to_string();
    let ada = &json["subunits"][org.public.to_string()]["employees"][key];
    assert_eq!(ada["employee"]["name"], "Ada");
    assert_eq!(ada["data"]["profdev_days_away"], 4);
    assert!(json["unit_totals"]["total_spent"].is_string());
}

/// A randomly generated trip: traveler index, departure offset in days from
/// 2019-05-01, length, funding cents, expense cents, expense delay, flags.
type TripSpec = (usize, i64, i64, i64, i64, i64, bool, bool);

fn trip_strategy() -> impl Strategy<Value = TripSpec> {
    (
        0usize..5,
        0i64..500,
        0i64..10,
        0i64..500_000,
        0i64..500_000,
        0i64..90,
        any::<bool>(),
        any::<bool>(),
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Subunit totals sum their employees, unit totals sum their subunits, and
    /// every derived total equals its two parts.
    #[test]
    fn prop_unit_report_rollup(trips in prop::collection::vec(trip_strategy(), 0..25)) {
        let (mut fx, org) = org();
        let travelers = [org.ul, org.ada, org.bob, org.cy, org.di];
        let base = date(2019, 5, 1);
        let mut expected_requested = Decimal::ZERO;
        let mut expected_spent = Decimal::ZERO;

        for (who, offset, length, funding, spent, delay, administrative, canceled) in trips {
            let departure = base + Duration::days(offset);
            let return_date = departure + Duration::days(length);
            let paid = return_date + Duration::days(delay);
            let treq = fx.trip(
                travelers[who],
                departure,
                return_date,
                length + 1,
                administrative,
            );
            if canceled {
                fx.cancel(treq);
            }
            fx.funding(treq, org.fund, Decimal::new(funding, 2));
            fx.expense(treq, org.other_fund, Decimal::new(spent, 2), paid);

            if departure >= date(2019, 7, 1) && return_date <= date(2020, 6, 30) {
                expected_requested += Decimal::new(funding, 2);
            }
            if paid >= date(2019, 7, 1) && paid <= date(2020, 6, 30) {
                expected_spent += Decimal::new(spent, 2);
            }
        }
        let store = fx.build();
        let report = service(&store)
            .unit_report(org.library, fy_start(), fy_end())
            .unwrap();

        let mut subunit_sum = TravelTotals::default();
        for subunit in report.subunits.values() {
            let mut employee_sum = TravelTotals::default();
            for entry in subunit.employees.values() {
                let d = entry.data;
                prop_assert_eq!(d.total_requested, d.profdev_requested + d.admin_requested);
                prop_assert_eq!(d.total_spent, d.profdev_spent + d.admin_spent);
                prop_assert_eq!(d.total_days_ooo, d.profdev_days_away + d.admin_days_away);
                employee_sum += &d;
            }
            prop_assert_eq!(subunit.subunit_totals, employee_sum);
            subunit_sum += &subunit.subunit_totals;
        }
        prop_assert_eq!(report.unit_totals, subunit_sum);

        let t = report.unit_totals;
        prop_assert_eq!(t.total_requested, t.profdev_requested + t.admin_requested);
        prop_assert_eq!(t.total_spent, t.profdev_spent + t.admin_spent);
        prop_assert_eq!(t.total_requested, expected_requested);
        prop_assert_eq!(t.total_spent, expected_spent);
    }

    /// Type report totals cover the same money as the root unit report.
    #[test]
    fn prop_type_report_matches_unit_report(
        trips in prop::collection::vec(trip_strategy(), 0..15),
    ) {
        let (mut fx, org) = org();
        let travelers = [org.ul, org.ada, org.bob, org.cy, org.di];
        let base = date(2019, 5, 1);
        for (who, offset, length, funding, spent, delay, administrative, _) in trips {
            let departure = base + Duration::days(offset);
            let return_date = departure + Duration::days(length);
            let paid = return_date + Duration::days(delay);
            let treq = fx.trip(travelers[who], departure, return_date, length, administrative);
            fx.funding(treq, org.fund, Decimal::new(funding, 2));
            fx.expense(treq, org.fund, Decimal::new(spent, 2), paid);
        }
        let store = fx.build();
        let service = service(&store);

        let unit = service.unit_report(org.library, fy_start(), fy_end()).unwrap();
        let by_type = service
            .employee_type_report(None, fy_start(), fy_end())
            .unwrap();
        prop_assert_eq!(unit.unit_totals, by_type.all_type_total);
    }
}
