//! Read-side helpers over a user collection.

use models::user::User;

/// Case-insensitive substring filter over name, email, and company name.
/// A blank (all-whitespace) query returns the whole collection in order.
pub fn search<'a>(users: &'a [User], query: &str) -> Vec<&'a User> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return users.iter().collect();
    }
    users
        .iter()
        .filter(|u| {
            u.name.to_lowercase().contains(&needle)
                || u.email.to_lowercase().contains(&needle)
                || u.company.name.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::seed::seed_users;

    #[test]
    fn blank_query_returns_everything_in_order() {
        let users = seed_users();
        let all = search(&users, "   ");
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].id, "1");
    }

    #[test]
    fn matches_by_name_case_insensitively() {
        let users = seed_users();
        let hits = search(&users, "JANE");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Jane Smith");
    }

    #[test]
    fn matches_by_company() {
        let users = seed_users();
        let hits = search(&users, "design");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].company.name, "Design Studios LLC");
    }

    #[test]
    fn matches_by_email_domain() {
        let users = seed_users();
        assert_eq!(search(&users, "@example.com").len(), 3);
    }

    #[test]
    fn no_match_yields_empty() {
        let users = seed_users();
        assert!(search(&users, "zebra").is_empty());
    }
}
