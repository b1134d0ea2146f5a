use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::types::Money;

const DAYS_PER_YEAR: Decimal = dec!(365);

/// Operating cash flow over total debt service (principal plus interest due).
pub fn cash_flow_coverage_ratio(operating_cash_flow: Money, total_debt_service: Money) -> Option<Decimal> {
    if total_debt_service.is_zero() {
        return None;
    }
    Some(operating_cash_flow / total_debt_service)
}

/// Operating cash flow over current liabilities.
pub fn operating_cash_flow_ratio(operating_cash_flow: Money, current_liabilities: Money) -> Option<Decimal> {
    if current_liabilities.is_zero() {
        return None;
    }
    Some(operating_cash_flow / current_liabilities)
}

/// Days the business can run on `cash` at the current annual spend.
pub fn days_of_cash_on_hand(cash: Money, annual_operating_expenses: Money) -> Option<Decimal> {
    if annual_operating_expenses.is_zero() {
        return None;
    }
    Some(cash * DAYS_PER_YEAR / annual_operating_expenses)
}
