//! Heuristic recurring-transaction detection

use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;
use tracing::debug;

use ledgerlens_domain::Transaction;

/// Minimum group size before recurrence is even considered
const MIN_GROUP_SIZE: usize = 3;

/// Maximum relative deviation of any amount from the group mean
const MAX_AMOUNT_DEVIATION: f64 = 0.1;

/// Maximum day-of-month spread (max day - min day) within a group
const MAX_DAY_SPREAD: u32 = 5;

/// Date format the detector accepts
///
/// Strict ISO calendar dates only. Dates in any other stored format never
/// parse, so such groups are never flagged. Deliberate; see DESIGN.md
/// before changing this.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Flag transactions that recur monthly for the same merchant
///
/// Groups by exact merchant string, then requires at least
/// [`MIN_GROUP_SIZE`] members, every amount within
/// [`MAX_AMOUNT_DEVIATION`] of the group mean, every date parseable as
/// [`DATE_FORMAT`], and a day-of-month spread of at most [`MAX_DAY_SPREAD`].
/// Qualifying groups have every member's `is_recurring` set in place.
///
/// Month-boundary wraparound is not handled: day 30 and day 1 count as far
/// apart. A rejected or malformed group never affects other groups, and
/// re-running over an unchanged set is idempotent (flags are only ever set,
/// to the same value).
pub fn detect_recurring(transactions: &mut [Transaction]) {
    let mut merchant_groups: HashMap<String, Vec<usize>> = HashMap::new();

    for (idx, tx) in transactions.iter().enumerate() {
        if !tx.merchant.is_empty() {
            merchant_groups
                .entry(tx.merchant.clone())
                .or_default()
                .push(idx);
        }
    }

    for (merchant, mut indices) in merchant_groups {
        if indices.len() < MIN_GROUP_SIZE {
            continue;
        }

        indices.sort_by(|a, b| transactions[*a].date.cmp(&transactions[*b].date));

        let amounts: Vec<f64> = indices.iter().map(|i| transactions[*i].amount).collect();
        let mean = amounts.iter().sum::<f64>() / amounts.len() as f64;

        // A zero mean makes the deviation NaN, which fails the comparison
        // and rejects the group
        let amounts_consistent = amounts
            .iter()
            .all(|a| ((a - mean).abs() / mean) < MAX_AMOUNT_DEVIATION);

        if !amounts_consistent {
            debug!("merchant '{}' rejected: amounts inconsistent", merchant);
            continue;
        }

        let mut days = Vec::with_capacity(indices.len());
        let mut dates_valid = true;

        for idx in &indices {
            match NaiveDate::parse_from_str(&transactions[*idx].date, DATE_FORMAT) {
                Ok(date) => days.push(date.day()),
                Err(_) => {
                    dates_valid = false;
                    break;
                }
            }
        }

        if !dates_valid {
            debug!("merchant '{}' rejected: unparseable date", merchant);
            continue;
        }

        days.sort_unstable();
        let spread = days[days.len() - 1] - days[0];

        if spread <= MAX_DAY_SPREAD {
            debug!("merchant '{}' flagged recurring (spread {})", merchant, spread);
            for idx in indices {
                transactions[idx].is_recurring = true;
            }
        }
    }
}
