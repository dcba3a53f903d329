//! Field-level change detection between a stored record and an incoming one.
//!
//! Each catalog record declares its compared fields through
//! [`change_tracked!`], so the comparison follows the record's schema rather
//! than walking arbitrary keys. Field values are compared with `PartialEq`,
//! which for nested `serde_json::Value` is a deep, order-sensitive
//! structural comparison.

/// A record whose fields can be compared one by one.
pub trait ChangeTracked {
    /// Names of the compared fields whose values differ between `self` and
    /// `incoming`, in declaration order.
    fn changed_fields(&self, incoming: &Self) -> Vec<&'static str>;
}

/// Implement [`ChangeTracked`] for a record by listing its compared fields.
///
/// Identifiers and bookkeeping timestamps are left out of the list.
macro_rules! change_tracked {
    ($ty:ty { $($field:ident),+ $(,)? }) => {
        impl $crate::changes::ChangeTracked for $ty {
            fn changed_fields(&self, incoming: &Self) -> Vec<&'static str> {
                let mut changed = Vec::new();
                $(
                    if self.$field != incoming.$field {
                        changed.push(stringify!($field));
                    }
                )+
                changed
            }
        }
    };
}

pub(crate) use change_tracked;

/// Report which fields differ between `existing` and `incoming`.
///
/// Returns an empty list iff every compared field is equal.
pub fn detect_changes<R: ChangeTracked>(existing: &R, incoming: &R) -> Vec<&'static str> {
    existing.changed_fields(incoming)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::catalog::{BoostRecord, DriverRecord};

    fn driver() -> DriverRecord {
        DriverRecord {
            id: "d1".to_string(),
            name: "Driver One".to_string(),
            rarity: 3,
            series: 4,
            season: Some(6),
            collection_sub_name: None,
            min_gp_tier: Some(1),
            icon: Some("icon_d1".to_string()),
            price: 1200,
            duplicate_unlock_count: 10,
            stats: json!([{ "level": 1, "overtaking": 12 }, { "level": 2, "overtaking": 14 }]),
        }
    }

    #[test]
    fn identical_records_have_no_changes() {
        assert!(detect_changes(&driver(), &driver()).is_empty());
    }

    #[test]
    fn id_is_not_compared() {
        let mut incoming = driver();
        incoming.id = "other".to_string();
        assert!(detect_changes(&driver(), &incoming).is_empty());
    }

    #[test]
    fn single_field_difference_is_named() {
        let mut incoming = driver();
        incoming.price = 1500;
        assert_eq!(detect_changes(&driver(), &incoming), vec!["price"]);
    }

    #[test]
    fn multiple_changes_follow_declaration_order() {
        let mut incoming = driver();
        incoming.stats = json!([]);
        incoming.name = "Renamed".to_string();
        incoming.min_gp_tier = None;
        assert_eq!(
            detect_changes(&driver(), &incoming),
            vec!["name", "min_gp_tier", "stats"]
        );
    }

    #[test]
    fn nested_stat_change_is_detected() {
        let mut incoming = driver();
        incoming.stats = json!([{ "level": 1, "overtaking": 12 }, { "level": 2, "overtaking": 15 }]);
        assert_eq!(detect_changes(&driver(), &incoming), vec!["stats"]);
    }

    #[test]
    fn array_order_matters() {
        let mut incoming = driver();
        incoming.stats = json!([{ "level": 2, "overtaking": 14 }, { "level": 1, "overtaking": 12 }]);
        assert_eq!(detect_changes(&driver(), &incoming), vec!["stats"]);
    }

    #[test]
    fn object_key_order_does_not_matter() {
        let mut incoming = driver();
        incoming.stats = json!([{ "overtaking": 12, "level": 1 }, { "overtaking": 14, "level": 2 }]);
        assert!(detect_changes(&driver(), &incoming).is_empty());
    }

    #[test]
    fn boost_tiers_are_compared() {
        let existing = BoostRecord {
            id: "b1".to_string(),
            name: "Boost TURBO".to_string(),
            icon: None,
            season: None,
            rarity: 1,
            speed_tier: 3,
            cornering_tier: 0,
            power_unit_tier: 0,
            qualifying_tier: 0,
            pit_stop_tier: 0,
            block_tier: 2,
            overtake_tier: 0,
            drs_tier: 0,
        };
        let mut incoming = existing.clone();
        incoming.block_tier = 4;
        assert_eq!(detect_changes(&existing, &incoming), vec!["block_tier"]);
    }
}
