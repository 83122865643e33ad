//! Risk scoring heuristic
//!
//! Sums three independent bands (transaction frequency, daily volume and the
//! verification/fraud combination). Within each band the highest matching
//! threshold wins. The score is illustrative, not a fraud model.

use rust_decimal::Decimal;

const FREQUENCY_BANDS: [(u32, i32); 3] = [(100, 30), (50, 15), (20, 5)];

const VOLUME_BANDS: [(Decimal, i32); 3] = [
    (Decimal::from_parts(1_000_000, 0, 0, false, 0), 40),
    (Decimal::from_parts(500_000, 0, 0, false, 0), 20),
    (Decimal::from_parts(100_000, 0, 0, false, 0), 10),
];

/// Points for the transaction frequency band
pub fn frequency_points(transaction_count: u32) -> i32 {
    FREQUENCY_BANDS
        .iter()
        .find(|(threshold, _)| transaction_count > *threshold)
        .map_or(0, |(_, points)| *points)
}

/// Points for the daily volume band
pub fn volume_points(volume: Decimal) -> i32 {
    VOLUME_BANDS
        .iter()
        .find(|(threshold, _)| volume > *threshold)
        .map_or(0, |(_, points)| *points)
}

/// Points for the verification and fraud alert combination
pub fn verification_points(is_verified: bool, has_fraud_alert: bool) -> i32 {
    match (is_verified, has_fraud_alert) {
        (false, true) => 35,
        (false, false) => 20,
        (true, true) => 25,
        (true, false) => 0,
    }
}

/// Compute the full risk score for an account's recent activity
pub fn compute_risk_score(
    transaction_count: u32,
    volume: Decimal,
    is_verified: bool,
    has_fraud_alert: bool,
) -> i32 {
    frequency_points(transaction_count)
        + volume_points(volume)
        + verification_points(is_verified, has_fraud_alert)
}
