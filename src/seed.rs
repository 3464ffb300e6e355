// 🌱 Dataset Seeding - builds the hierarchy the engine reports on
//
// Two sources:
//   - MockGenerator: deterministic pseudo-random data from a seed
//   - load_dataset:  a JSON array of holdings
//
// Either way the result is handed to ReportEngine::new and never touched again.

use crate::entities::{Account, AccountType, Company, Currency, Holding, Sex, User};
use crate::error::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

const HOLDINGS: [(&str, &[&str]); 4] = [
    ("Nestle", &["Nespresso", "Gerber", "Purina", "Nestle Waters"]),
    ("Coca-Cola", &["Fanta", "Sprite", "Costa Coffee"]),
    ("Pepsico", &["Lay's", "Tropicana", "Quaker"]),
    ("Unilever", &[]),
];

const WOMEN: [&str; 8] = ["Anna", "Zosia", "Maria", "Ola", "Kasia", "Ewa", "Magda", "Ida"];
const MEN: [&str; 8] = ["Adam", "Jan", "Zenon", "Zenek", "Alfred", "Piotr", "Tomek", "Marek"];
const OTHERS: [&str; 4] = ["Alex", "Sasha", "Robin", "Kim"];
const LAST_NAMES: [&str; 10] = [
    "Nowak", "Kowalski", "Psikuta", "Kucowski", "Jawowy", "Pasibrzuch", "Wojcik", "Lis",
    "Mazur", "Krawczyk",
];

// ============================================================================
// MOCK GENERATOR
// ============================================================================

/// Deterministic generator of a demo hierarchy
pub struct MockGenerator {
    rng: StdRng,
    pub max_users_per_company: usize,
    pub max_accounts_per_user: usize,
}

impl MockGenerator {
    pub fn new(seed: u64) -> Self {
        MockGenerator {
            rng: StdRng::seed_from_u64(seed),
            max_users_per_company: 6,
            max_accounts_per_user: 4,
        }
    }

    pub fn generate(&mut self) -> Vec<Holding> {
        let holdings: Vec<Holding> = HOLDINGS
            .iter()
            .map(|(name, companies)| {
                let companies = companies
                    .iter()
                    .map(|company| Company::new(*company, self.users()))
                    .collect();
                Holding::new(*name, companies)
            })
            .collect();

        tracing::debug!(holdings = holdings.len(), "generated mock dataset");
        holdings
    }

    fn users(&mut self) -> Vec<User> {
        let count = self.rng.gen_range(0..=self.max_users_per_company);
        (0..count).map(|_| self.user()).collect()
    }

    fn user(&mut self) -> User {
        let sex = match self.rng.gen_range(0..10) {
            0..=4 => Sex::Woman,
            5..=8 => Sex::Man,
            _ => Sex::Other,
        };
        let first_name = match sex {
            Sex::Woman => pick(&mut self.rng, &WOMEN),
            Sex::Man => pick(&mut self.rng, &MEN),
            Sex::Other => pick(&mut self.rng, &OTHERS),
        };
        let last_name = pick(&mut self.rng, &LAST_NAMES);
        let age = self.rng.gen_range(12..=80);

        let account_count = self.rng.gen_range(0..=self.max_accounts_per_user);
        let accounts = (0..account_count).map(|_| self.account()).collect();

        User::new(first_name, last_name, age, sex, accounts)
    }

    fn account(&mut self) -> Account {
        let number = uuid::Builder::from_random_bytes(self.rng.gen()).into_uuid();
        let amount = Decimal::new(self.rng.gen_range(-50_000..5_000_000), 2);
        let currency = Currency::ALL[self.rng.gen_range(0..Currency::ALL.len())];
        let account_type = AccountType::ALL[self.rng.gen_range(0..AccountType::ALL.len())];

        Account::new(
            format!("PL{}", number.simple()).to_uppercase(),
            amount,
            currency,
            account_type,
        )
    }
}

fn pick<'a>(rng: &mut StdRng, values: &[&'a str]) -> &'a str {
    values[rng.gen_range(0..values.len())]
}

// ============================================================================
// JSON DATASETS
// ============================================================================

/// Load a JSON array of holdings
pub fn load_dataset(path: &Path) -> Result<Vec<Holding>> {
    let reader = BufReader::new(File::open(path)?);
    let holdings: Vec<Holding> = serde_json::from_reader(reader)?;
    tracing::info!(path = %path.display(), holdings = holdings.len(), "loaded dataset");
    Ok(holdings)
}

/// Write holdings as a pretty-printed JSON array
pub fn save_dataset(path: &Path, holdings: &[Holding]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, holdings)?;
    writer.flush()?;
    Ok(())
}
