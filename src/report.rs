use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{StatementParseError, StatementResult};
use crate::types::{Direction, ParsedTransaction};

/// Response body handed back to an upload endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementReport {
    pub count: usize,
    pub expenses: Vec<ParsedTransaction>,
}

impl StatementReport {
    pub fn new(expenses: Vec<ParsedTransaction>) -> Self {
        Self {
            count: expenses.len(),
            expenses,
        }
    }

    pub fn summary(&self) -> StatementResult<StatementSummary> {
        StatementSummary::from_transactions(&self.expenses)
    }
}

/// Totals shown before an import is confirmed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementSummary {
    pub count: usize,
    pub total_debit: Decimal,
    pub total_credit: Decimal,
    /// `total_credit - total_debit`
    pub net: Decimal,
}

impl StatementSummary {
    /// Records missing a direction or an amount are counted but not summed.
    pub fn from_transactions(transactions: &[ParsedTransaction]) -> StatementResult<Self> {
        let mut summary = StatementSummary::default();

        for txn in transactions {
            summary.count += 1;
            match (txn.direction, txn.amount) {
                (Some(Direction::Debit), Some(amount)) => {
                    summary.total_debit = checked_total(summary.total_debit, amount)?;
                }
                (Some(Direction::Credit), Some(amount)) => {
                    summary.total_credit = checked_total(summary.total_credit, amount)?;
                }
                _ => {}
            }
        }

        summary.net = summary
            .total_credit
            .checked_sub(summary.total_debit)
            .ok_or(StatementParseError::AmountOverflow)?;
        Ok(summary)
    }
}

fn checked_total(total: Decimal, amount: Decimal) -> StatementResult<Decimal> {
    total
        .checked_add(amount)
        .ok_or(StatementParseError::AmountOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn txn(direction: Option<Direction>, amount: Option<&str>) -> ParsedTransaction {
        ParsedTransaction {
            date: None,
            direction,
            amount: amount.map(|a| Decimal::from_str(a).unwrap()),
            counterparty: None,
            reference: None,
            raw_text: None,
        }
    }

    #[test]
    fn test_summary_totals() {
        let txns = vec![
            txn(Some(Direction::Debit), Some("500.00")),
            txn(Some(Direction::Credit), Some("1250.50")),
            txn(Some(Direction::Debit), Some("49.50")),
            txn(None, Some("20")),
        ];

        let summary = StatementSummary::from_transactions(&txns).unwrap();

        assert_eq!(summary.count, 4);
        assert_eq!(summary.total_debit, Decimal::from_str("549.50").unwrap());
        assert_eq!(summary.total_credit, Decimal::from_str("1250.50").unwrap());
        assert_eq!(summary.net, Decimal::from_str("701.00").unwrap());
    }

    #[test]
    fn test_summary_negative_net() {
        let summary = StatementSummary::from_transactions(&[txn(Some(Direction::Debit), Some("10"))]).unwrap();
        assert_eq!(summary.net, Decimal::from(-10));
    }

    #[test]
    fn test_summary_empty() {
        assert_eq!(StatementSummary::from_transactions(&[]).unwrap(), StatementSummary::default());
    }

    #[test]
    fn test_summary_overflow() {
        let txns = vec![
            txn(Some(Direction::Debit), Some("79228162514264337593543950335")),
            txn(Some(Direction::Debit), Some("1")),
        ];

        let result = StatementSummary::from_transactions(&txns);
        assert!(matches!(result, Err(StatementParseError::AmountOverflow)));
    }

    #[test]
    fn test_summary_large_totals_per_direction() {
        let txns = vec![
            txn(Some(Direction::Debit), Some("79228162514264337593543950335")),
            txn(Some(Direction::Credit), Some("79228162514264337593543950335")),
        ];

        let summary = StatementSummary::from_transactions(&txns).unwrap();
        assert_eq!(summary.net, Decimal::ZERO);
    }

    #[test]
    fn test_report_shape() {
        let report = StatementReport::new(vec![txn(Some(Direction::Debit), Some("500.00"))]);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["count"], 1);
        assert_eq!(json["expenses"][0]["direction"], "debit");
        assert_eq!(json["expenses"][0]["amount"], "500.00");
        assert_eq!(report.summary().unwrap().total_debit, Decimal::from_str("500.00").unwrap());
    }

    #[test]
    fn test_empty_report() {
        let json = serde_json::to_string(&StatementReport::new(Vec::new())).unwrap();
        assert_eq!(json, r#"{"count":0,"expenses":[]}"#);
    }
}
