//! Pension Compare CLI
//!
//! Command-line interface for running a salary projection and the NPS/UPS
//! benefit comparison. This binary is the input boundary: it validates every
//! range before anything reaches the core.

use std::collections::BTreeMap;
use std::fs::File;
use std::path::PathBuf;

use anyhow::Context;
use chrono::Datelike;
use clap::Parser;

use pension_compare::{
    BenefitInputs, FitmentFactor, ProjectionParameters, ScenarioRunner, Scheme,
};

#[derive(Parser, Debug)]
#[command(name = "pension_compare", version, about = "CPC salary projection and NPS/UPS retirement benefit comparison")]
struct Cli {
    /// Current monthly basic pay, rupees
    #[arg(long)]
    basic_pay: f64,

    /// Current DA percentage
    #[arg(long, default_value_t = 0.0)]
    da: f64,

    /// Retirement year (inclusive)
    #[arg(long)]
    retirement_year: i32,

    /// HRA percentage of basic pay
    #[arg(long, default_value_t = 0.0)]
    hra: f64,

    /// Annual DA growth, percentage points
    #[arg(long, default_value_t = 0.0)]
    da_growth: f64,

    /// Annual increment on basic pay, percent
    #[arg(long, default_value_t = 0.0)]
    increment: f64,

    /// Fitment factor for a pay commission, as ID=FACTOR (e.g. 8=2.10).
    /// May be repeated; unspecified reachable commissions assume 2.10.
    #[arg(long = "fitment", value_parser = parse_fitment)]
    fitment: Vec<(u8, f64)>,

    /// NPS corpus already accumulated, rupees
    #[arg(long, default_value_t = 0.0)]
    existing_corpus: f64,

    /// Expected annual NPS return for the moderate scenario, percent
    #[arg(long, default_value_t = 10.0)]
    expected_return: f64,

    /// Annuity rate for the moderate scenario, percent
    #[arg(long, default_value_t = 6.0)]
    annuity_rate: f64,

    /// Total years of qualifying service at retirement
    #[arg(long)]
    service_years: f64,

    /// Override the simulation's first year (defaults to the current year)
    #[arg(long)]
    base_year: Option<i32>,

    /// Write the full outcome bundle as JSON to this path
    #[arg(long)]
    json: Option<PathBuf>,
}

fn parse_fitment(s: &str) -> Result<(u8, f64), String> {
    let (id, factor) = s
        .split_once('=')
        .ok_or_else(|| format!("expected ID=FACTOR, got '{s}'"))?;
    let id: u8 = id.trim().parse().map_err(|_| format!("invalid commission id '{id}'"))?;
    let factor: f64 = factor.trim().parse().map_err(|_| format!("invalid factor '{factor}'"))?;
    Ok((id, factor))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let base_year = cli.base_year.unwrap_or_else(|| chrono::Utc::now().year());

    let runner = ScenarioRunner::new();

    // Reachable revisions need a factor: caller-supplied where given, the
    // 2.10 default otherwise, with provenance recorded either way
    let mut fitment_factors = BTreeMap::new();
    for commission in runner.schedule().reachable_revisions(cli.retirement_year) {
        let factor = cli
            .fitment
            .iter()
            .find(|(id, _)| *id == commission.id)
            .map(|&(_, value)| FitmentFactor::provided(value))
            .unwrap_or_else(FitmentFactor::defaulted);
        fitment_factors.insert(commission.id, factor);
    }

    let params = ProjectionParameters {
        base_year,
        start_basic_pay: cli.basic_pay,
        start_da_percent: cli.da,
        retirement_year: cli.retirement_year,
        hra_percent: cli.hra,
        annual_da_growth_percent: cli.da_growth,
        annual_increment_percent: cli.increment,
        fitment_factors,
    };
    let inputs = BenefitInputs {
        existing_corpus: cli.existing_corpus,
        expected_return_percent: cli.expected_return,
        annuity_rate_percent: cli.annuity_rate,
        total_service_years: cli.service_years,
    };

    params.validate(runner.schedule()).context("invalid projection parameters")?;
    inputs.validate().context("invalid benefit inputs")?;

    let outcome = runner.run(&params, &inputs).context("simulation failed")?;

    println!("Pension Compare v{}", env!("CARGO_PKG_VERSION"));
    println!("====================\n");

    println!("Salary projection ({}..={}):", params.base_year, params.retirement_year);
    println!("{:>6} {:<20} {:>12} {:>8} {:>12} {:>12} {:>14}",
        "Year", "Commission", "Basic", "DA%", "DA", "HRA", "Gross");
    println!("{}", "-".repeat(90));
    for record in &outcome.projection.records {
        println!("{:>6} {:<20} {:>12} {:>7.1} {:>12} {:>12} {:>14}",
            record.year,
            record.commission_label,
            record.basic_pay,
            record.da_percent,
            record.da_amount,
            record.hra_amount,
            record.gross_salary,
        );
        if let (Some(factor), Some(old)) = (record.fitment_factor, record.old_basic_pay) {
            println!("       fitment applied: {} x {} = {}", old, factor, record.basic_pay);
        }
    }

    let summary = outcome.projection.summary();
    println!("\nFinal year: basic {} | DA {} | gross {}",
        summary.final_basic_pay, summary.final_da_amount, summary.final_gross_salary);

    println!("\nNPS scenarios:");
    println!("{:<14} {:>8} {:>16} {:>16} {:>14} {:>12}",
        "Scenario", "Return", "Invested", "Corpus", "Lump sum", "Pension/mo");
    println!("{}", "-".repeat(84));
    for (name, scenario) in [
        ("conservative", &outcome.nps.conservative),
        ("moderate", &outcome.nps.moderate),
        ("aggressive", &outcome.nps.aggressive),
    ] {
        println!("{:<14} {:>7.1}% {:>16} {:>16} {:>14} {:>12}",
            name,
            scenario.return_rate_percent,
            scenario.total_invested,
            scenario.final_corpus,
            scenario.lump_sum,
            scenario.monthly_pension,
        );
    }

    let ups = &outcome.ups;
    println!("\nUPS ({} years of service):", ups.years_of_service);
    println!("  Monthly pension:  {}", ups.monthly_pension);
    println!("  Family pension:   {}", ups.family_pension);
    println!("  Gratuity:         {}", ups.lump_sum);
    println!("  Contributions:    {} (employee {} + govt {})",
        ups.total_contribution, ups.total_employee_contribution, ups.total_govt_contribution);

    let comparison = &outcome.comparison;
    println!("\nComparison (moderate NPS vs UPS):");
    println!("  Pension winner:   {} ({:.1}x)", scheme_name(comparison.pension_winner), comparison.pension_ratio);
    println!("  Lump sum winner:  {} ({:.1}x)", scheme_name(comparison.lump_sum_winner), comparison.lump_sum_ratio);
    println!("  Lifetime (20y):   NPS {} vs UPS {} -> {} by {}",
        comparison.nps_lifetime_value,
        comparison.ups_lifetime_value,
        scheme_name(comparison.lifetime_winner),
        comparison.lifetime_margin,
    );
    match comparison.breakeven_years {
        Some(years) => println!("  Breakeven:        {:.1} years", years),
        None => println!("  Breakeven:        n/a (equal pensions)"),
    }

    if let Some(path) = cli.json {
        let file = File::create(&path)
            .with_context(|| format!("unable to create {}", path.display()))?;
        serde_json::to_writer_pretty(file, &outcome).context("failed to write JSON outcome")?;
        println!("\nFull results written to: {}", path.display());
    }

    Ok(())
}

fn scheme_name(scheme: Scheme) -> &'static str {
    match scheme {
        Scheme::Nps => "NPS",
        Scheme::Ups => "UPS",
    }
}
