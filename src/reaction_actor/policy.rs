//! What happens when a customer reacts to a comment they already reacted to.

use crate::model::{ReactOutcome, Reaction, ReactionStatus};
use actor_framework::{Reconcile, Reconciled};
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Repeat-reaction strategy for the ledger.
///
/// | existing | `ToggleOrFlip`            | `ToggleOnly`         |
/// |----------|---------------------------|----------------------|
/// | none     | create, `created`         | create, `liked`/`disliked` |
/// | same     | delete, `removed`         | delete, `removed`    |
/// | opposite | flip in place, `updated`  | delete, `removed`    |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReactionPolicy {
    #[default]
    ToggleOrFlip,
    ToggleOnly,
}

impl ReactionPolicy {
    /// Decides the fate of `existing` given a new reaction of polarity `is_like`.
    pub fn resolve(self, existing: &mut Reaction, is_like: bool) -> Reconcile {
        match self {
            ReactionPolicy::ToggleOrFlip if existing.is_like != is_like => {
                existing.is_like = is_like;
                existing.updated_at = Utc::now();
                Reconcile::Retain
            }
            ReactionPolicy::ToggleOrFlip | ReactionPolicy::ToggleOnly => Reconcile::Remove,
        }
    }

    /// Reports a ledger change the way callers of `react` see it.
    pub fn outcome(self, reconciled: &Reconciled<Reaction>) -> ReactOutcome {
        match reconciled {
            Reconciled::Created(r) => ReactOutcome {
                status: match (self, r.is_like) {
                    (ReactionPolicy::ToggleOrFlip, _) => ReactionStatus::Created,
                    (ReactionPolicy::ToggleOnly, true) => ReactionStatus::Liked,
                    (ReactionPolicy::ToggleOnly, false) => ReactionStatus::Disliked,
                },
                is_like: Some(r.is_like),
            },
            Reconciled::Updated(r) => ReactOutcome {
                status: ReactionStatus::Updated,
                is_like: Some(r.is_like),
            },
            Reconciled::Removed(_) => ReactOutcome {
                status: ReactionStatus::Removed,
                is_like: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CommentId, CustomerId, ReactionId};

    fn reaction(is_like: bool) -> Reaction {
        let now = Utc::now();
        Reaction {
            id: ReactionId(1),
            customer: CustomerId(7),
            comment: CommentId(3),
            is_like,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn toggle_or_flip_removes_same_and_flips_opposite() {
        let policy = ReactionPolicy::ToggleOrFlip;
        let mut r = reaction(true);
        assert_eq!(policy.resolve(&mut r, true), Reconcile::Remove);
        assert!(r.is_like);

        assert_eq!(policy.resolve(&mut r, false), Reconcile::Retain);
        assert!(!r.is_like);
    }

    #[test]
    fn toggle_only_always_removes() {
        let policy = ReactionPolicy::ToggleOnly;
        for (existing, incoming) in [(true, true), (true, false), (false, true)] {
            let mut r = reaction(existing);
            assert_eq!(policy.resolve(&mut r, incoming), Reconcile::Remove);
            assert_eq!(r.is_like, existing);
        }
    }

    #[test]
    fn creation_status_depends_on_policy() {
        let created = Reconciled::Created(reaction(false));
        assert_eq!(
            ReactionPolicy::ToggleOrFlip.outcome(&created).status,
            ReactionStatus::Created
        );
        assert_eq!(
            ReactionPolicy::ToggleOnly.outcome(&created),
            ReactOutcome {
                status: ReactionStatus::Disliked,
                is_like: Some(false)
            }
        );
    }

    #[test]
    fn removal_hides_polarity() {
        let removed = Reconciled::Removed(reaction(true));
        let outcome = ReactionPolicy::ToggleOrFlip.outcome(&removed);
        assert_eq!(outcome.status, ReactionStatus::Removed);
        assert_eq!(outcome.is_like, None);
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            serde_json::json!({ "status": "removed" })
        );
    }

    #[test]
    fn policy_names_match_config_values() {
        let p: ReactionPolicy = serde_json::from_str("\"toggle_only\"").unwrap();
        assert_eq!(p, ReactionPolicy::ToggleOnly);
        assert_eq!(ReactionPolicy::default(), ReactionPolicy::ToggleOrFlip);
    }
}
