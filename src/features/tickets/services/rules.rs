//! Pure ticket rules: priority escalation and pricing.
//!
//! Each escalation rule raises a priority by at most one step from a single
//! signal. `resolve_priority` applies the creation-time rule first and the
//! title rule second.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;

use crate::features::tickets::models::Priority;
use crate::shared::constants::{
    ESCALATION_AGE_SECS, PAYING_HIGH_PRICE, PAYING_STANDARD_PRICE, TITLE_ESCALATION_KEYWORDS,
};

/// Escalate one step when the ticket was created more than an hour before `now`
pub fn escalate_by_age(priority: Priority, created: DateTime<Utc>, now: DateTime<Utc>) -> Priority {
    if now - created > Duration::seconds(ESCALATION_AGE_SECS) {
        priority.escalate()
    } else {
        priority
    }
}

/// Whether the title contains an escalation keyword (case-sensitive)
pub fn title_has_escalation_keyword(title: &str) -> bool {
    TITLE_ESCALATION_KEYWORDS
        .iter()
        .any(|keyword| title.contains(keyword))
}

/// Escalate one step when the title contains an escalation keyword
pub fn escalate_by_title(priority: Priority, title: &str) -> Priority {
    if priority != Priority::High && title_has_escalation_keyword(title) {
        priority.escalate()
    } else {
        priority
    }
}

/// Final priority for a new ticket: age rule, then title rule
pub fn resolve_priority(
    requested: Priority,
    title: &str,
    created: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Priority {
    let by_age = escalate_by_age(requested, created, now);
    if by_age != requested {
        tracing::debug!("Priority escalated by age: {} -> {}", requested, by_age);
    }

    let by_title = escalate_by_title(by_age, title);
    if by_title != by_age {
        tracing::debug!("Priority escalated by title: {} -> {}", by_age, by_title);
    }

    by_title
}

/// Ticket price in dollars; only paying customers are charged
pub fn calculate_price(is_paying_customer: bool, priority: Priority) -> Decimal {
    match (is_paying_customer, priority) {
        (false, _) => Decimal::ZERO,
        (true, Priority::High) => PAYING_HIGH_PRICE,
        (true, Priority::Medium | Priority::Low) => PAYING_STANDARD_PRICE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_age_rule_threshold_is_strict() {
        let exactly_one_hour = now() - Duration::hours(1);
        let just_over = exactly_one_hour - Duration::seconds(1);

        assert_eq!(
            escalate_by_age(Priority::Low, exactly_one_hour, now()),
            Priority::Low
        );
        assert_eq!(
            escalate_by_age(Priority::Low, just_over, now()),
            Priority::Medium
        );
    }

    #[test]
    fn test_age_rule_single_step() {
        let old = now() - Duration::days(30);

        assert_eq!(escalate_by_age(Priority::Low, old, now()), Priority::Medium);
        assert_eq!(escalate_by_age(Priority::Medium, old, now()), Priority::High);
        assert_eq!(escalate_by_age(Priority::High, old, now()), Priority::High);
    }

    #[test]
    fn test_age_rule_future_created_time_is_not_escalated() {
        let future = now() + Duration::hours(5);

        assert_eq!(escalate_by_age(Priority::Medium, future, now()), Priority::Medium);
    }

    #[test]
    fn test_title_keywords_are_case_sensitive_substrings() {
        assert!(title_has_escalation_keyword("Server Crash"));
        assert!(title_has_escalation_keyword("VeryImportantThing"));
        assert!(title_has_escalation_keyword("Disk Failure on node 4"));
        assert!(!title_has_escalation_keyword("server crash"));
        assert!(!title_has_escalation_keyword("IMPORTANT"));
        assert!(!title_has_escalation_keyword("Routine check"));
    }

    #[test]
    fn test_title_rule_single_step() {
        assert_eq!(escalate_by_title(Priority::Low, "Crash"), Priority::Medium);
        assert_eq!(escalate_by_title(Priority::Medium, "Crash"), Priority::High);
        assert_eq!(escalate_by_title(Priority::High, "Crash"), Priority::High);
        assert_eq!(
            escalate_by_title(Priority::Low, "Crash and Failure, Important!"),
            Priority::Medium
        );
        assert_eq!(escalate_by_title(Priority::Low, "Routine"), Priority::Low);
    }

    #[test]
    fn test_resolve_priority_staircase() {
        let old = now() - Duration::hours(2);
        let fresh = now();

        // Low -> Medium by age, Medium -> High by title
        assert_eq!(
            resolve_priority(Priority::Low, "Server Crash", old, now()),
            Priority::High
        );
        assert_eq!(
            resolve_priority(Priority::Low, "Server Crash", fresh, now()),
            Priority::Medium
        );
        assert_eq!(
            resolve_priority(Priority::Low, "Routine check", old, now()),
            Priority::Medium
        );
        assert_eq!(
            resolve_priority(Priority::Medium, "Routine check", fresh, now()),
            Priority::Medium
        );
        // Already High after age; title rule is a no-op
        assert_eq!(
            resolve_priority(Priority::Medium, "Important", old, now()),
            Priority::High
        );
    }

    #[test]
    fn test_resolve_priority_high_is_fixed_point() {
        for (title, created) in [
            ("Routine check", now()),
            ("Server Crash", now()),
            ("Failure", now() - Duration::hours(3)),
        ] {
            assert_eq!(
                resolve_priority(Priority::High, title, created, now()),
                Priority::High
            );
        }
    }

    #[test]
    fn test_resolve_priority_never_downgrades() {
        let old = now() - Duration::hours(2);
        for requested in [Priority::Low, Priority::Medium, Priority::High] {
            for title in ["Crash", "plain"] {
                for created in [old, now()] {
                    assert!(resolve_priority(requested, title, created, now()) >= requested);
                }
            }
        }
    }

    #[test]
    fn test_calculate_price() {
        assert_eq!(calculate_price(false, Priority::High), Decimal::ZERO);
        assert_eq!(calculate_price(false, Priority::Low), Decimal::ZERO);
        assert_eq!(calculate_price(true, Priority::High), Decimal::new(100, 0));
        assert_eq!(calculate_price(true, Priority::Medium), Decimal::new(50, 0));
        assert_eq!(calculate_price(true, Priority::Low), Decimal::new(50, 0));
    }
}
