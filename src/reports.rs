// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Donation summary report.
//!
//! Derives a month-by-month total of donated amounts over a rolling window
//! of the current calendar month plus the two preceding ones. Pure
//! functions of `(records, now)`: no ambient clock or locale is consulted,
//! so the report is fully deterministic in tests.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, TimeZone, Utc};

use crate::storage::StoredDonation;

/// First instant of the month two months before `now`'s month.
///
/// Everything from this instant through `now` is inside the reporting
/// window.
fn window_start(now: DateTime<Utc>) -> DateTime<Utc> {
    let months = now.year() * 12 + now.month0() as i32 - 2;
    let (year, month0) = (months.div_euclid(12), months.rem_euclid(12));

    Utc.with_ymd_and_hms(year, month0 as u32 + 1, 1, 0, 0, 0)
        .single()
        .expect("first day of a month is always a valid timestamp")
}

/// Extract the donated amount from a donation payload.
///
/// The report reads `donationInfo.donatedField.amount`, which clients send
/// as either a JSON number or a numeric string. Returns `None` when the
/// field is absent or does not parse.
fn donated_amount(donation_info: &serde_json::Value) -> Option<f64> {
    let amount = donation_info.get("donatedField")?.get("amount")?;
    match amount {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Sum donated amounts per `"<MonthName> <Year>"` group over the rolling
/// three-calendar-month window ending at `now`.
///
/// Only months with at least one qualifying record appear. A qualifying
/// record whose amount is missing or non-numeric contributes 0 to its
/// month and is logged, so a malformed payload can never corrupt the
/// running totals.
pub fn summarize_recent(
    donations: &[StoredDonation],
    now: DateTime<Utc>,
) -> BTreeMap<String, f64> {
    let start = window_start(now);

    let mut monthly_totals = BTreeMap::new();
    for donation in donations {
        if donation.donation_date < start || donation.donation_date > now {
            continue;
        }

        let month_label = donation.donation_date.format("%B %Y").to_string();
        let total = monthly_totals.entry(month_label).or_insert(0.0);

        match donated_amount(&donation.donation_info) {
            Some(amount) => *total += amount,
            None => {
                tracing::warn!(
                    donation_id = %donation.id,
                    "donation amount missing or non-numeric, counted as 0"
                );
            }
        }
    }

    monthly_totals
}
