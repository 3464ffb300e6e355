// 🌳 Hierarchy Flattener - flat views over the nested ownership graph
//
// Holding → Company → User → Account, walked lazily in ownership order:
// holding order, then company order within a holding, then user order
// within a company, then account order within a user.
//
// Every query goes through these; none walks the tree on its own.

use crate::entities::{Account, Company, Holding, User};

/// All companies across all holdings
pub fn companies<'a>(holdings: &'a [Holding]) -> impl Iterator<Item = &'a Company> + Clone + 'a {
    holdings.iter().flat_map(|holding| holding.companies.iter())
}

/// All users across all companies
pub fn users<'a>(holdings: &'a [Holding]) -> impl Iterator<Item = &'a User> + Clone + 'a {
    companies(holdings).flat_map(|company| company.users.iter())
}

/// All accounts across all users
pub fn accounts<'a>(holdings: &'a [Holding]) -> impl Iterator<Item = &'a Account> + Clone + 'a {
    users(holdings).flat_map(|user| user.accounts.iter())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{AccountType, Currency, Sex};
    use rust_decimal::Decimal;

    fn user(first_name: &str, numbers: &[&str]) -> User {
        let accounts = numbers
            .iter()
            .map(|n| Account::new(*n, Decimal::ONE, Currency::Pln, AccountType::Checking))
            .collect();
        User::new(first_name, "Test", 30, Sex::Other, accounts)
    }

    fn sample() -> Vec<Holding> {
        vec![
            Holding::new(
                "H1",
                vec![
                    Company::new("C1", vec![user("U1", &["A1", "A2"]), user("U2", &[])]),
                    Company::new("C2", vec![user("U3", &["A3"])]),
                ],
            ),
            Holding::new("H2", vec![]),
            Holding::new("H3", vec![Company::new("C3", vec![user("U4", &["A4"])])]),
        ]
    }

    #[test]
    fn test_companies_in_ownership_order() {
        let holdings = sample();
        let names: Vec<&str> = companies(&holdings).map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["C1", "C2", "C3"]);
    }

    #[test]
    fn test_users_in_ownership_order() {
        let holdings = sample();
        let names: Vec<&str> = users(&holdings).map(|u| u.first_name.as_str()).collect();
        assert_eq!(names, vec!["U1", "U2", "U3", "U4"]);
    }

    #[test]
    fn test_accounts_in_ownership_order() {
        let holdings = sample();
        let numbers: Vec<&str> = accounts(&holdings).map(|a| a.number.as_str()).collect();
        assert_eq!(numbers, vec!["A1", "A2", "A3", "A4"]);
    }

    #[test]
    fn test_empty_hierarchy() {
        let holdings: Vec<Holding> = vec![];
        assert_eq!(companies(&holdings).count(), 0);
        assert_eq!(users(&holdings).count(), 0);
        assert_eq!(accounts(&holdings).count(), 0);
    }
}
