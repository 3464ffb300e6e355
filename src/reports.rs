// 📊 Report Engine - read-only queries over the holding hierarchy
//
// The engine owns an immutable snapshot of the hierarchy. Every query is a
// pure read; a new dataset means a new engine.
//
// Two ways of "not finding" something:
//   - Option::None         → nothing matched, and that's a legitimate answer
//   - Err(ReportError::..) → the caller asked something the data can't answer

use crate::entities::{Account, AccountType, Company, Currency, Holding, Sex, User};
use crate::error::{ReportError, Result};
use crate::{export, hierarchy, money, sampling};
use rand::Rng;
use rust_decimal::Decimal;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::io::Write;
use std::path::Path;

/// Upper bound for `capped_users`
pub const CAPPED_USERS_LIMIT: usize = 10;

/// Returned by `describe_age` when there is no user
pub const NO_SUCH_USER: &str = "Brak użytkownika";

pub fn is_woman(user: &User) -> bool {
    user.sex == Sex::Woman
}

pub fn is_man(user: &User) -> bool {
    user.sex == Sex::Man
}

/// "FIRST LAST ma lat AGE", or the no-user message
pub fn describe_age(user: Option<&User>) -> String {
    match user {
        Some(user) => format!("{} {} ma lat {}", user.first_name, user.last_name, user.age),
        None => NO_SUCH_USER.to_string(),
    }
}

// ============================================================================
// REPORT ENGINE
// ============================================================================

#[derive(Debug, Clone)]
pub struct ReportEngine {
    holdings: Vec<Holding>,
}

impl ReportEngine {
    pub fn new(holdings: Vec<Holding>) -> Self {
        tracing::debug!(holdings = holdings.len(), "report engine loaded");
        ReportEngine { holdings }
    }

    pub fn holdings(&self) -> &[Holding] {
        &self.holdings
    }

    fn companies(&self) -> impl Iterator<Item = &Company> + Clone + '_ {
        hierarchy::companies(&self.holdings)
    }

    fn users(&self) -> impl Iterator<Item = &User> + Clone + '_ {
        hierarchy::users(&self.holdings)
    }

    fn accounts(&self) -> impl Iterator<Item = &Account> + Clone + '_ {
        hierarchy::accounts(&self.holdings)
    }

    // ========================================================================
    // HOLDINGS
    // ========================================================================

    /// Number of holdings owning at least one company
    pub fn holdings_with_companies(&self) -> usize {
        self.holdings.iter().filter(|h| h.has_companies()).count()
    }

    /// Lower-cased holding names, original order
    pub fn holding_names(&self) -> Vec<String> {
        self.holdings.iter().map(|h| h.name.to_lowercase()).collect()
    }

    /// Sorted holding names as "(A, B, C)"
    pub fn holding_names_joined(&self) -> String {
        let mut names: Vec<&str> = self.holdings.iter().map(|h| h.name.as_str()).collect();
        names.sort_unstable();
        format!("({})", names.join(", "))
    }

    // ========================================================================
    // COMPANIES
    // ========================================================================

    pub fn company_count(&self) -> usize {
        self.companies().count()
    }

    pub fn company_names(&self) -> Vec<String> {
        self.companies().map(|c| c.name.clone()).collect()
    }

    /// Company names joined with "+"
    pub fn company_names_joined(&self) -> String {
        self.companies()
            .map(|c| c.name.as_str())
            .collect::<Vec<_>>()
            .join("+")
    }

    /// Run `action` once per company, in hierarchy order
    pub fn for_each_company<F>(&self, action: F)
    where
        F: FnMut(&Company),
    {
        self.companies().for_each(action);
    }

    /// Up to `n` distinct company names. Asking for more than exist returns all of them.
    pub fn first_n_company_names(&self, n: usize) -> HashSet<String> {
        let mut names = HashSet::new();
        for company in self.companies() {
            if names.len() >= n {
                break;
            }
            names.insert(company.name.clone());
        }
        names
    }

    /// Company name → users converted by `converter`.
    ///
    /// Company names are not unique: when two companies share a name the one
    /// appearing later in the hierarchy wins.
    pub fn users_per_company_with<'a, T, F>(&'a self, converter: F) -> HashMap<String, Vec<T>>
    where
        F: Fn(&'a User) -> T,
    {
        let mut per_company = HashMap::new();

        for company in self.companies() {
            let users: Vec<T> = company.users.iter().map(&converter).collect();
            if per_company.insert(company.name.clone(), users).is_some() {
                tracing::warn!(company = %company.name, "duplicate company name, keeping the later one");
            }
        }

        per_company
    }

    pub fn users_per_company(&self) -> HashMap<String, Vec<&User>> {
        self.users_per_company_with(|user| user)
    }

    /// Company name → "First Last" of each employee
    pub fn users_per_company_as_strings(&self) -> HashMap<String, Vec<String>> {
        self.users_per_company_with(User::full_name)
    }

    // ========================================================================
    // USERS
    // ========================================================================

    pub fn user_count(&self) -> usize {
        self.users().count()
    }

    pub fn woman_count(&self) -> usize {
        self.users().filter(|&user| is_woman(user)).count()
    }

    /// First names of users matching `predicate`
    pub fn first_names_matching<P>(&self, predicate: P) -> HashSet<String>
    where
        P: Fn(&User) -> bool,
    {
        self.users()
            .filter(|&user| predicate(user))
            .map(|user| user.first_name.clone())
            .collect()
    }

    /// First names of users older than `age` who are not men.
    ///
    /// `observer` sees every user older than `age`, men included, before the
    /// sex filter is applied.
    pub fn older_non_men<F>(&self, age: u32, mut observer: F) -> Vec<String>
    where
        F: FnMut(&User),
    {
        self.users()
            .filter(|user| user.age > age)
            .inspect(|&user| observer(user))
            .filter(|&user| !is_man(user))
            .map(|user| user.first_name.clone())
            .collect()
    }

    /// The woman with the highest total balance in the base currency.
    /// Ties go to the last one visited.
    pub fn richest_woman(&self) -> Result<Option<&User>> {
        let mut richest: Option<(&User, Decimal)> = None;

        for user in self.users().filter(|&user| is_woman(user)) {
            let total = money::sum_in_base_currency(&user.accounts)?;
            if richest.map_or(true, |(_, best)| total >= best) {
                richest = Some((user, total));
            }
        }

        Ok(richest.map(|(user, _)| user))
    }

    /// First user matching `predicate`, if any
    pub fn find_user<P>(&self, predicate: P) -> Option<&User>
    where
        P: Fn(&User) -> bool,
    {
        self.users().find(|&user| predicate(user))
    }

    /// First user matching `predicate`. A missing match is the caller's mistake.
    pub fn required_user<P>(&self, predicate: P) -> Result<&User>
    where
        P: Fn(&User) -> bool,
    {
        self.find_user(predicate).ok_or_else(|| {
            ReportError::InvalidArgument("no user matches the given predicate".to_string())
        })
    }

    /// `true` → last names of women, `false` → last names of men.
    /// Users of other sex are left out; a key is present only if it has members.
    pub fn last_names_by_sex(&self) -> HashMap<bool, HashSet<String>> {
        let mut by_sex: HashMap<bool, HashSet<String>> = HashMap::new();

        for user in self.users().filter(|user| user.sex != Sex::Other) {
            by_sex
                .entry(is_woman(user))
                .or_default()
                .insert(user.last_name.clone());
        }

        by_sex
    }

    /// Distinct first names in first-seen order, space separated
    pub fn first_names_joined(&self) -> String {
        let mut seen = HashSet::new();
        self.users()
            .map(|user| user.first_name.as_str())
            .filter(|name| seen.insert(*name))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// At most `CAPPED_USERS_LIMIT` distinct users
    pub fn capped_users(&self) -> HashSet<&User> {
        let mut users = HashSet::new();
        for user in self.users() {
            if users.len() >= CAPPED_USERS_LIMIT {
                break;
            }
            users.insert(user);
        }
        users
    }

    /// Users ordered by last name, then first name, Z to A. Ties keep hierarchy order.
    pub fn users_sorted_descending(&self) -> Vec<&User> {
        let mut users: Vec<&User> = self.users().collect();
        users.sort_by(|a, b| {
            b.last_name
                .cmp(&a.last_name)
                .then_with(|| b.first_name.cmp(&a.first_name))
        });
        users
    }

    /// Write "First Last" per user, ordered as `users_sorted_descending`
    pub fn print_users_descending<W: Write>(&self, out: &mut W) -> Result<()> {
        for user in self.users_sorted_descending() {
            writeln!(out, "{}", user.full_name())?;
        }
        Ok(())
    }

    pub fn age_squares_sum(&self) -> u64 {
        self.users().map(|user| u64::from(user.age).pow(2)).sum()
    }

    /// `n` distinct users drawn at random
    pub fn random_users(&self, n: usize) -> Result<Vec<&User>> {
        self.random_users_with(n, &mut rand::thread_rng())
    }

    /// `n` distinct users drawn with the given random source
    pub fn random_users_with<R>(&self, n: usize, rng: &mut R) -> Result<Vec<&User>>
    where
        R: Rng + ?Sized,
    {
        let population: Vec<&User> = self.users().collect();
        sampling::sample_without_replacement(&population, n, rng)
    }

    /// Account holders split into adults (`true`, age >= 18) and minors (`false`).
    /// Users without accounts are not counted. Both keys are always present.
    pub fn adults_partition(&self) -> HashMap<bool, usize> {
        let mut partition = HashMap::from([(true, 0), (false, 0)]);

        for user in self.users().filter(|user| user.has_accounts()) {
            *partition.entry(user.is_adult()).or_insert(0) += 1;
        }

        partition
    }

    // ========================================================================
    // ACCOUNTS
    // ========================================================================

    pub fn account_count(&self) -> usize {
        self.accounts().count()
    }

    /// Distinct currencies in use, sorted by code
    pub fn currencies(&self) -> Vec<Currency> {
        self.accounts()
            .map(|account| account.currency)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct currency codes, sorted, ", " separated
    pub fn currencies_joined(&self) -> String {
        self.currencies()
            .iter()
            .map(Currency::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn account_in_base_currency(&self, account: &Account) -> Result<Decimal> {
        money::account_in_base_currency(account)
    }

    pub fn total_in_base_currency(&self, accounts: &[Account]) -> Result<Decimal> {
        money::sum_in_base_currency(accounts)
    }

    /// The most common account type. Ties go to the type declared first.
    pub fn most_popular_account_type(&self) -> Result<AccountType> {
        let mut counts: BTreeMap<AccountType, usize> = BTreeMap::new();
        for account in self.accounts() {
            *counts.entry(account.account_type).or_insert(0) += 1;
        }

        counts
            .into_iter()
            .max_by(|(type_a, count_a), (type_b, count_b)| {
                count_a.cmp(count_b).then_with(|| type_b.cmp(type_a))
            })
            .map(|(account_type, _)| account_type)
            .ok_or_else(|| {
                ReportError::InvalidState("no accounts to rank by type".to_string())
            })
    }

    /// Account number → account. Duplicate numbers are an invalid dataset.
    pub fn accounts_by_number(&self) -> Result<HashMap<String, &Account>> {
        let mut by_number = HashMap::new();

        for account in self.accounts() {
            if by_number.insert(account.number.clone(), account).is_some() {
                return Err(ReportError::InvalidState(format!(
                    "duplicate account number {}",
                    account.number
                )));
            }
        }

        Ok(by_number)
    }

    /// Account type → total balance in the base currency
    pub fn money_by_account_type(&self) -> Result<HashMap<AccountType, Decimal>> {
        let mut totals: HashMap<AccountType, Decimal> = HashMap::new();

        for account in self.accounts() {
            let value = money::account_in_base_currency(account)?;
            let total = totals.entry(account.account_type).or_insert(Decimal::ZERO);
            *total = money::add(*total, value)?;
        }

        Ok(totals)
    }

    /// Account type → (man → his total on accounts of that type, base currency)
    pub fn male_money_by_account_type(
        &self,
    ) -> Result<HashMap<AccountType, HashMap<&User, Decimal>>> {
        let mut totals: HashMap<AccountType, HashMap<&User, Decimal>> = HashMap::new();

        for user in self.users().filter(|&user| is_man(user)) {
            for account in &user.accounts {
                let value = money::account_in_base_currency(account)?;
                let total = totals
                    .entry(account.account_type)
                    .or_default()
                    .entry(user)
                    .or_insert(Decimal::ZERO);
                *total = money::add(*total, value)?;
            }
        }

        Ok(totals)
    }

    /// Total balance of users who are neither woman nor man, base currency
    pub fn other_sex_money(&self) -> Result<Decimal> {
        money::sum_in_base_currency(
            self.users()
                .filter(|user| user.sex == Sex::Other)
                .flat_map(|user| user.accounts.iter()),
        )
    }

    /// Write every account to `path` as NUMBER|AMOUNT|CURRENCY
    pub fn export_accounts(&self, path: &Path) -> Result<usize> {
        export::export_accounts(path, self.accounts())
    }
}

// ============================================================================
// TESTS
// ============================================================================
