//! Declarative admin listing metadata.
//!
//! Each entity describes the columns its admin listing shows and the fields
//! its admin search box matches on. The presentation layer consumes these
//! as data; there is no runtime registry.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ListingConfig {
    pub entity: &'static str,
    pub columns: &'static [&'static str],
    pub searchable_fields: &'static [&'static str],
}

pub const LISTINGS: &[ListingConfig] = &[
    ListingConfig {
        entity: "category",
        columns: &["category_id", "name"],
        searchable_fields: &["name"],
    },
    ListingConfig {
        entity: "user",
        columns: &["user_id", "email", "full_name", "phone", "created_at", "is_staff"],
        searchable_fields: &["email", "first_name", "last_name", "phone"],
    },
    ListingConfig {
        entity: "branch",
        columns: &["branch_id", "name", "address", "phone", "work_hours", "photo", "created_at"],
        searchable_fields: &["name", "address", "phone"],
    },
    ListingConfig {
        entity: "status",
        columns: &["status_id", "name"],
        searchable_fields: &["name"],
    },
    ListingConfig {
        entity: "service",
        columns: &["service_id", "name", "category", "state_duty", "created_at"],
        searchable_fields: &["name", "description"],
    },
    ListingConfig {
        entity: "appointment",
        columns: &[
            "appointment_id",
            "user_email",
            "service_name",
            "branch_name",
            "desired_date",
            "desired_time",
            "status",
            "created_at",
        ],
        searchable_fields: &["user_email", "service_name", "branch_name"],
    },
    ListingConfig {
        entity: "favorite_service",
        columns: &["favorite_service_id", "user_email", "service_name", "created_at"],
        searchable_fields: &["user_email", "service_name"],
    },
];

#[cfg(test)]
mod tests {
    use super::LISTINGS;
    use std::collections::HashSet;

    #[test]
    fn entities_are_unique_and_fully_described() {
        let mut seen = HashSet::new();
        for cfg in LISTINGS {
            assert!(seen.insert(cfg.entity), "duplicate listing for {}", cfg.entity);
            assert!(!cfg.columns.is_empty());
            assert!(!cfg.searchable_fields.is_empty());
        }
    }

    #[test]
    fn service_search_fields_match_the_catalog_search() {
        let svc = LISTINGS.iter().find(|c| c.entity == "service").unwrap();
        assert_eq!(svc.searchable_fields, &["name", "description"][..]);
    }
}
