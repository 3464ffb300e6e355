mod config;

use anyhow::{Context, Result};
use clap::Parser;
use config::{Cli, Command};
use holding_reports::{describe_age, is_woman, load_dataset, save_dataset, MockGenerator, ReportEngine};

fn main() -> Result<()> {
    let cli = Cli::parse();
    config::init_logger(cli.verbose);

    let holdings = match &cli.dataset {
        Some(path) => load_dataset(path)
            .with_context(|| format!("Failed to load dataset {}", path.display()))?,
        None => MockGenerator::new(cli.seed).generate(),
    };

    match cli.command.unwrap_or(Command::Summary) {
        Command::Summary => run_summary(&ReportEngine::new(holdings))?,
        Command::Export { file } => {
            let engine = ReportEngine::new(holdings);
            let written = engine
                .export_accounts(&file)
                .context("Failed to export accounts")?;
            println!("✓ Exported {} accounts to {}", written, file.display());
        }
        Command::Sample { n } => {
            let engine = ReportEngine::new(holdings);
            for user in engine.random_users(n).context("Failed to sample users")? {
                println!("{}", describe_age(Some(user)));
            }
        }
        Command::Users => {
            let engine = ReportEngine::new(holdings);
            engine.print_users_descending(&mut std::io::stdout().lock())?;
        }
        Command::Seed { file } => {
            save_dataset(&file, &holdings).context("Failed to write dataset")?;
            println!("✓ Wrote {} holdings to {}", holdings.len(), file.display());
        }
    }

    Ok(())
}

fn run_summary(engine: &ReportEngine) -> Result<()> {
    println!("📊 Holding Reports v{}", holding_reports::VERSION);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    println!("\n🏛️  Holdings");
    println!("  with companies: {}", engine.holdings_with_companies());
    println!("  names:          {}", engine.holding_names_joined());

    println!("\n🏢 Companies");
    println!("  count: {}", engine.company_count());
    println!("  names: {}", engine.company_names_joined());

    println!("\n👤 Users");
    println!("  total:       {}", engine.user_count());
    println!("  women:       {}", engine.woman_count());
    println!("  first names: {}", engine.first_names_joined());
    println!("  age squares: {}", engine.age_squares_sum());
    let partition = engine.adults_partition();
    println!(
        "  holders:     {} adult, {} minor",
        partition.get(&true).copied().unwrap_or(0),
        partition.get(&false).copied().unwrap_or(0)
    );
    println!(
        "  richest woman: {}",
        describe_age(engine.richest_woman()?)
    );
    println!(
        "  first woman:   {}",
        describe_age(engine.find_user(is_woman))
    );

    println!("\n💳 Accounts");
    println!("  count:      {}", engine.account_count());
    println!("  currencies: {}", engine.currencies_joined());
    match engine.most_popular_account_type() {
        Ok(account_type) => println!("  most popular type: {}", account_type.as_str()),
        Err(e) => println!("  most popular type: n/a ({})", e),
    }

    let mut by_type: Vec<_> = engine.money_by_account_type()?.into_iter().collect();
    by_type.sort_by_key(|(account_type, _)| *account_type);
    for (account_type, total) in by_type {
        println!("  {:<10} {} PLN", account_type.as_str(), total);
    }
    println!("  other sex:  {} PLN", engine.other_sex_money()?);

    Ok(())
}
