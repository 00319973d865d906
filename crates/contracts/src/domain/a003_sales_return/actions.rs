//! Status transitions a viewer may request for a return.
//!
//! Role checks here only decide which buttons are shown; the consumer of
//! [`ReturnStatusUpdate`] persists the change and enforces permissions.

use super::aggregate::{Return, ReturnStatus};
use crate::system::users::{User, UserRole};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnAction {
    Approve,
    Reject,
    MarkProcessed,
}

impl ReturnAction {
    /// Статус, в который переводит действие
    pub fn target_status(&self) -> ReturnStatus {
        match self {
            ReturnAction::Approve => ReturnStatus::Approved,
            ReturnAction::Reject => ReturnStatus::Rejected,
            ReturnAction::MarkProcessed => ReturnStatus::Processed,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReturnAction::Approve => "Approve",
            ReturnAction::Reject => "Reject",
            ReturnAction::MarkProcessed => "Mark as Processed",
        }
    }
}

/// Действия, доступные пользователю для возврата в текущем статусе
pub fn available_actions(status: ReturnStatus, role: UserRole) -> Vec<ReturnAction> {
    match (status, role) {
        (ReturnStatus::Pending, UserRole::Superuser) => {
            vec![ReturnAction::Approve, ReturnAction::Reject]
        }
        (ReturnStatus::Approved, _) => vec![ReturnAction::MarkProcessed],
        _ => Vec::new(),
    }
}

/// Частичное обновление возврата, передаётся в `on_update(id, update)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnStatusUpdate {
    pub status: ReturnStatus,
    pub processed_at: DateTime<Utc>,
    pub processed_by: String,
}

impl ReturnStatusUpdate {
    pub fn for_action(action: ReturnAction, user: &User, now: DateTime<Utc>) -> Self {
        Self {
            status: action.target_status(),
            processed_at: now,
            processed_by: user.id.clone(),
        }
    }

    /// Применить обновление к локальной копии (для оптимистичного UI)
    pub fn apply_to(&self, sales_return: &mut Return) {
        sales_return.status = self.status;
        sales_return.processed_at = Some(self.processed_at);
        sales_return.processed_by = Some(self.processed_by.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_sales_return::aggregate::tests::sample_return;
    use chrono::TimeZone;

    fn user(role: UserRole) -> User {
        User {
            id: "u-42".into(),
            username: "maria".into(),
            full_name: None,
            role,
        }
    }

    #[test]
    fn test_superuser_sees_approve_and_reject_on_pending() {
        assert_eq!(
            available_actions(ReturnStatus::Pending, UserRole::Superuser),
            vec![ReturnAction::Approve, ReturnAction::Reject]
        );
    }

    #[test]
    fn test_other_roles_see_nothing_on_pending() {
        for role in [UserRole::Admin, UserRole::Supervisor, UserRole::Seller, UserRole::Other] {
            assert!(available_actions(ReturnStatus::Pending, role).is_empty(), "{:?}", role);
        }
    }

    #[test]
    fn test_approved_offers_only_mark_processed() {
        for role in [UserRole::Superuser, UserRole::Seller] {
            let actions = available_actions(ReturnStatus::Approved, role);
            assert_eq!(actions, vec![ReturnAction::MarkProcessed]);
            assert_eq!(actions[0].target_status(), ReturnStatus::Processed);
            assert_eq!(actions[0].label(), "Mark as Processed");
        }
    }

    #[test]
    fn test_terminal_statuses_have_no_actions() {
        for status in [ReturnStatus::Processed, ReturnStatus::Rejected] {
            assert!(available_actions(status, UserRole::Superuser).is_empty());
        }
    }

    #[test]
    fn test_update_carries_status_time_and_user() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let u = user(UserRole::Superuser);

        let approve = ReturnStatusUpdate::for_action(ReturnAction::Approve, &u, now);
        assert_eq!(approve.status, ReturnStatus::Approved);
        assert_eq!(approve.processed_at, now);
        assert_eq!(approve.processed_by, "u-42");

        let reject = ReturnStatusUpdate::for_action(ReturnAction::Reject, &u, now);
        assert_eq!(reject.status, ReturnStatus::Rejected);
    }

    #[test]
    fn test_apply_to_sets_status_and_processing_stamp() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let mut r = sample_return(ReturnStatus::Approved);
        ReturnStatusUpdate::for_action(ReturnAction::MarkProcessed, &user(UserRole::Seller), now)
            .apply_to(&mut r);
        assert_eq!(r.status, ReturnStatus::Processed);
        assert_eq!(r.processed_at, Some(now));
        assert_eq!(r.processed_by.as_deref(), Some("u-42"));
        assert!(available_actions(r.status, UserRole::Superuser).is_empty());
    }

    #[test]
    fn test_update_serializes_exactly_three_fields() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let update =
            ReturnStatusUpdate::for_action(ReturnAction::Approve, &user(UserRole::Superuser), now);
        let value = serde_json::to_value(&update).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 3);
        assert_eq!(obj["status"], "approved");
        assert_eq!(obj["processedBy"], "u-42");
        assert_eq!(obj["processedAt"], "2024-06-01T12:00:00Z");
    }
}
