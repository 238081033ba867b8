//! Initial schema for travel reporting.
//!
//! Enum-like columns store the short codes the domain types parse.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(ORGANIZATION_SQL).await?;
        db.execute_unprepared(TRAVEL_SQL).await?;
        db.execute_unprepared(INDEXES_SQL).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_SQL).await?;
        Ok(())
    }
}

const ORGANIZATION_SQL: &str = r"
CREATE TABLE units (
    id BIGSERIAL PRIMARY KEY,
    name VARCHAR(128) NOT NULL,
    unit_type CHAR(1) NOT NULL CHECK (unit_type IN ('1', '2', '3')),
    manager_id BIGINT,
    parent_unit_id BIGINT REFERENCES units(id) ON DELETE SET NULL
);

CREATE TABLE employees (
    id BIGSERIAL PRIMARY KEY,
    name VARCHAR(128) NOT NULL,
    uid VARCHAR(9) NOT NULL UNIQUE,
    unit_id BIGINT NOT NULL REFERENCES units(id),
    active BOOLEAN NOT NULL DEFAULT TRUE,
    supervisor_id BIGINT REFERENCES employees(id) ON DELETE SET NULL,
    employee_type CHAR(4) NOT NULL
        CHECK (employee_type IN ('ULIB', 'EXEC', 'HEAD', 'LIBR', 'SENR', 'OTHR')),
    extra_allocation NUMERIC(10, 2),
    allocation_expire_date DATE
);

-- Units and employees reference each other
ALTER TABLE units
    ADD CONSTRAINT fk_units_manager
    FOREIGN KEY (manager_id) REFERENCES employees(id) ON DELETE SET NULL;

CREATE TABLE funds (
    id BIGSERIAL PRIMARY KEY,
    account VARCHAR(6) NOT NULL,
    cost_center VARCHAR(2) NOT NULL,
    fund VARCHAR(5) NOT NULL,
    manager_id BIGINT NOT NULL REFERENCES employees(id),
    unit_id BIGINT REFERENCES units(id) ON DELETE SET NULL,
    UNIQUE (account, cost_center, fund)
);
";

const TRAVEL_SQL: &str = r"
CREATE TABLE activities (
    id BIGSERIAL PRIMARY KEY,
    name VARCHAR(128) NOT NULL,
    start_date DATE NOT NULL,
    end_date DATE NOT NULL,
    city VARCHAR(64) NOT NULL,
    state VARCHAR(64) NOT NULL DEFAULT '',
    country VARCHAR(3) NOT NULL DEFAULT 'USA',
    CONSTRAINT chk_activity_dates CHECK (end_date >= start_date)
);

CREATE TABLE travel_requests (
    id BIGSERIAL PRIMARY KEY,
    traveler_id BIGINT NOT NULL REFERENCES employees(id),
    activity_id BIGINT NOT NULL REFERENCES activities(id),
    departure_date DATE NOT NULL,
    return_date DATE NOT NULL,
    days_ooo INTEGER NOT NULL DEFAULT 0 CHECK (days_ooo >= 0),
    administrative BOOLEAN NOT NULL DEFAULT FALSE,
    closed BOOLEAN NOT NULL DEFAULT FALSE,
    canceled BOOLEAN NOT NULL DEFAULT FALSE,
    approved_by_id BIGINT REFERENCES employees(id) ON DELETE SET NULL,
    approved_on TIMESTAMPTZ,
    international_approved_on TIMESTAMPTZ,
    CONSTRAINT chk_travel_dates CHECK (return_date >= departure_date)
);

CREATE TABLE fundings (
    id BIGSERIAL PRIMARY KEY,
    travel_request_id BIGINT NOT NULL REFERENCES travel_requests(id) ON DELETE CASCADE,
    fund_id BIGINT NOT NULL REFERENCES funds(id),
    amount NUMERIC(10, 2) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE TABLE actual_expenses (
    id BIGSERIAL PRIMARY KEY,
    travel_request_id BIGINT NOT NULL REFERENCES travel_requests(id) ON DELETE CASCADE,
    fund_id BIGINT NOT NULL REFERENCES funds(id),
    expense_type CHAR(3) NOT NULL
        CHECK (expense_type IN (
            'LDG', 'AIR', 'TRN', 'RNT', 'DRV', 'CON', 'PRE', 'MEM', 'PRK', 'EAT', 'OTH'
        )),
    total NUMERIC(10, 2) NOT NULL,
    date_paid DATE NOT NULL
);

CREATE TABLE vacations (
    id BIGSERIAL PRIMARY KEY,
    travel_request_id BIGINT NOT NULL REFERENCES travel_requests(id) ON DELETE CASCADE,
    start_date DATE NOT NULL,
    end_date DATE NOT NULL,
    CONSTRAINT chk_vacation_dates CHECK (end_date >= start_date)
);
";

const INDEXES_SQL: &str = r"
CREATE INDEX idx_units_parent ON units(parent_unit_id);
CREATE INDEX idx_employees_unit ON employees(unit_id);
CREATE INDEX idx_employees_supervisor ON employees(supervisor_id);
CREATE INDEX idx_travel_requests_traveler ON travel_requests(traveler_id, departure_date);
CREATE INDEX idx_fundings_request ON fundings(travel_request_id);
CREATE INDEX idx_fundings_fund ON fundings(fund_id);
CREATE INDEX idx_actual_expenses_request ON actual_expenses(travel_request_id);
CREATE INDEX idx_actual_expenses_fund_paid ON actual_expenses(fund_id, date_paid);
CREATE INDEX idx_vacations_request ON vacations(travel_request_id);
";

const DROP_SQL: &str = r"
DROP TABLE IF EXISTS vacations CASCADE;
DROP TABLE IF EXISTS actual_expenses CASCADE;
DROP TABLE IF EXISTS fundings CASCADE;
DROP TABLE IF EXISTS travel_requests CASCADE;
DROP TABLE IF EXISTS activities CASCADE;
DROP TABLE IF EXISTS funds CASCADE;
DROP TABLE IF EXISTS employees CASCADE;
DROP TABLE IF EXISTS units CASCADE;
";
