//! Command-line front end for the RiskLedger risk register.
//!
//! Thin presentation layer: parses intents, hands them to the register, and
//! prints tables. All scoring and persistence live in the library crates.
//!
//! ## Environment Variables
//!
//! - `RUST_LOG` — log level filter for register and store events

use std::error::Error;
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use owo_colors::OwoColorize;

use riskledger::prelude::*;
use riskledger::{console, CsvExporter, MarkdownReport, RiskCalculation};

#[derive(Parser)]
#[command(name = "riskledger", version, about = "Client-local cybersecurity risk register")]
struct Cli {
    /// Directory the register blobs live in
    #[arg(long, default_value = ".riskledger", global = true)]
    data_dir: PathBuf,

    /// Optional scoring config (TOML) overriding weights and thresholds
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Manage recorded threats
    #[command(subcommand)]
    Threat(ThreatCommand),

    /// Record impact and likelihood assessments
    #[command(subcommand)]
    Assess(AssessCommand),

    /// Manage countermeasures
    #[command(subcommand)]
    Countermeasure(CountermeasureCommand),

    /// List calculated risks with their severity tiers
    Risks,

    /// Show tier counts and the top risks
    Summary,

    /// Show the 5x5 likelihood/impact matrix
    Matrix,

    /// Export the CSV workbook and Markdown report
    Export {
        /// Directory the sheets are written into
        dir: PathBuf,
    },

    /// Drop every record and clear the store
    Clear,
}

#[derive(Subcommand)]
enum ThreatCommand {
    /// Record a new threat
    Add(ThreatArgs),
    /// List recorded threats
    List,
    /// Replace the fields of a threat
    Update {
        id: String,
        #[command(flatten)]
        args: ThreatArgs,
    },
    /// Delete a threat and everything recorded against it
    Rm { id: String },
}

#[derive(Args)]
struct ThreatArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    description: String,
    /// One of: cloud-infrastructure, access-control, insider-threat,
    /// third-party, malware, phishing, data-exposure,
    /// regulatory-compliance, other
    #[arg(long, value_parser = parse_category)]
    category: ThreatCategory,
    #[arg(long)]
    owner: String,
    /// Date identified (YYYY-MM-DD); defaults to today
    #[arg(long)]
    date: Option<NaiveDate>,
    /// One of: open, in-progress, closed, mitigated
    #[arg(long, default_value = "open", value_parser = parse_status)]
    status: ThreatStatus,
}

impl ThreatArgs {
    fn into_draft(self) -> ThreatDraft {
        ThreatDraft {
            name: self.name,
            description: self.description,
            category: self.category,
            owner: self.owner,
            date_identified: self.date.unwrap_or_else(|| Local::now().date_naive()),
            status: self.status,
        }
    }
}

#[derive(Subcommand)]
enum AssessCommand {
    /// Rate the four impact dimensions (1-5 each)
    Impact {
        id: String,
        #[arg(long)]
        financial: u8,
        #[arg(long)]
        reputational: u8,
        #[arg(long)]
        operational: u8,
        #[arg(long)]
        regulatory: u8,
    },
    /// Rate the three likelihood dimensions (1-5 each)
    Likelihood {
        id: String,
        #[arg(long)]
        capability: u8,
        #[arg(long)]
        opportunity: u8,
        #[arg(long)]
        precedent: u8,
    },
}

#[derive(Subcommand)]
enum CountermeasureCommand {
    /// Record or replace the countermeasure for a threat
    Add {
        id: String,
        #[arg(long)]
        description: String,
        /// One of: identify, protect, detect, respond, recover
        #[arg(long, value_parser = parse_function)]
        function: ControlFunction,
        #[arg(long, default_value = "")]
        timeline: String,
        #[arg(long, default_value = "")]
        cost: String,
        /// Estimated risk reduction, 20-95
        #[arg(long)]
        effectiveness: u8,
    },
    /// Remove the countermeasure for a threat
    Rm { id: String },
}

fn parse_category(s: &str) -> Result<ThreatCategory, String> {
    ThreatCategory::ALL
        .into_iter()
        .find(|c| slug(&c.to_string()) == slug(s))
        .ok_or_else(|| format!("unknown category '{s}'"))
}

fn parse_status(s: &str) -> Result<ThreatStatus, String> {
    ThreatStatus::ALL
        .into_iter()
        .find(|c| slug(&c.to_string()) == slug(s))
        .ok_or_else(|| format!("unknown status '{s}'"))
}

fn parse_function(s: &str) -> Result<ControlFunction, String> {
    ControlFunction::ALL
        .into_iter()
        .find(|c| slug(&c.to_string()) == slug(s))
        .ok_or_else(|| format!("unknown control function '{s}'"))
}

/// Lowercases and strips separators so `In Progress`, `in-progress`, and
/// `in_progress` all match.
fn slug(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

fn tier_cell(level: RiskLevel) -> String {
    match level {
        RiskLevel::Critical => level.to_string().bright_red().bold().to_string(),
        RiskLevel::High => level.to_string().red().to_string(),
        RiskLevel::Medium => level.to_string().yellow().to_string(),
        RiskLevel::Low => level.to_string().green().to_string(),
    }
}

fn print_risk_rows(risks: &[&RiskCalculation]) {
    println!(
        "{:<6} {:<44} {:>7} {:>11} {:>7}  {}",
        "ID", "THREAT", "IMPACT", "LIKELIHOOD", "TOTAL", "TIER"
    );
    for risk in risks {
        println!(
            "{:<6} {:<44} {:>7.1} {:>11.1} {:>7.1}  {}",
            risk.threat_id,
            risk.threat_name,
            risk.weighted_impact_score,
            risk.likelihood_score,
            risk.total_risk_score,
            tier_cell(risk.risk_level),
        );
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    console::init();
    let cli = Cli::parse();

    let store = FileStore::open(&cli.data_dir)?;
    let config = match &cli.config {
        Some(path) => {
            let config = ScoringConfig::load(path)?;
            config.validate()?;
            config
        }
        None => ScoringConfig::default(),
    };
    let mut register = RiskRegister::open_with_config(store, config)?;

    match cli.command {
        Command::Threat(command) => match command {
            ThreatCommand::Add(args) => {
                let id = register.add_threat(args.into_draft())?;
                println!("added threat {id}");
            }
            ThreatCommand::List => {
                println!(
                    "{:<6} {:<44} {:<22} {:<12} {}",
                    "ID", "NAME", "CATEGORY", "STATUS", "OWNER"
                );
                for threat in register.threats() {
                    println!(
                        "{:<6} {:<44} {:<22} {:<12} {}",
                        threat.id, threat.name, threat.category, threat.status, threat.owner
                    );
                }
            }
            ThreatCommand::Update { id, args } => {
                register.update_threat(&id, args.into_draft())?;
                println!("updated threat {id}");
            }
            ThreatCommand::Rm { id } => {
                register.delete_threat(&id)?;
                println!("deleted threat {id}");
            }
        },

        Command::Assess(command) => match command {
            AssessCommand::Impact {
                id,
                financial,
                reputational,
                operational,
                regulatory,
            } => {
                register.assess_impact(&id, financial, reputational, operational, regulatory)?;
                let assessment = register
                    .dataset()
                    .impact_assessment(&id)
                    .expect("assessment was just recorded");
                println!(
                    "impact for {id}: {:.1} ({})",
                    assessment.weighted_impact_score,
                    ScoreBand::of(assessment.weighted_impact_score)
                );
            }
            AssessCommand::Likelihood {
                id,
                capability,
                opportunity,
                precedent,
            } => {
                register.assess_likelihood(&id, capability, opportunity, precedent)?;
                let assessment = register
                    .dataset()
                    .likelihood_assessment(&id)
                    .expect("assessment was just recorded");
                println!(
                    "likelihood for {id}: {:.1} ({})",
                    assessment.likelihood_score,
                    ScoreBand::of(assessment.likelihood_score)
                );
            }
        },

        Command::Countermeasure(command) => match command {
            CountermeasureCommand::Add {
                id,
                description,
                function,
                timeline,
                cost,
                effectiveness,
            } => {
                register.record_countermeasure(
                    &id,
                    CountermeasureDraft {
                        description,
                        control_function: function,
                        implementation_timeline: timeline,
                        estimated_cost: cost,
                        effectiveness_percent: effectiveness,
                    },
                )?;
                let cm = register
                    .dataset()
                    .countermeasure(&id)
                    .expect("countermeasure was just recorded");
                println!(
                    "countermeasure for {id}: residual risk {:.1} (was {:.1})",
                    cm.residual_risk_score, cm.total_risk_score
                );
            }
            CountermeasureCommand::Rm { id } => {
                register.delete_countermeasure(&id)?;
                println!("removed countermeasure for {id}");
            }
        },

        Command::Risks => {
            let risks: Vec<_> = register.risk_calculations().iter().collect();
            print_risk_rows(&risks);
        }

        Command::Summary => {
            let summary = register.summary();
            println!("Total risks: {}", summary.total);
            println!("  {:<10} {}", tier_cell(RiskLevel::Critical), summary.critical);
            println!("  {:<10} {}", tier_cell(RiskLevel::High), summary.high);
            println!("  {:<10} {}", tier_cell(RiskLevel::Medium), summary.medium);
            println!("  {:<10} {}", tier_cell(RiskLevel::Low), summary.low);

            let top = register.top_risks(5);
            if !top.is_empty() {
                println!();
                println!("Top risks:");
                print_risk_rows(&top);
            }
        }

        Command::Matrix => {
            let matrix = register.matrix();
            println!("{:>12} | impact 1..5", "likelihood");
            for likelihood in (1..=5).rev() {
                let row = matrix.row(likelihood);
                println!(
                    "{:>12} | {}  {}  {}  {}  {}",
                    likelihood, row[0], row[1], row[2], row[3], row[4]
                );
            }
        }

        Command::Export { dir } => {
            CsvExporter::write_workbook(register.dataset(), &dir)?;
            MarkdownReport::to_file(register.dataset(), dir.join("report.md"))?;
            println!("exported workbook and report to {}", dir.display());
        }

        Command::Clear => {
            register.clear();
            println!("register cleared");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsers_accept_every_separator_style() {
        assert_eq!(
            parse_category("cloud-infrastructure").unwrap(),
            ThreatCategory::CloudInfrastructure
        );
        assert_eq!(
            parse_category("Cloud Infrastructure").unwrap(),
            ThreatCategory::CloudInfrastructure
        );
        assert_eq!(
            parse_status("in_progress").unwrap(),
            ThreatStatus::InProgress
        );
        assert_eq!(parse_function("Protect").unwrap(), ControlFunction::Protect);
        assert!(parse_category("ransomwhere").is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
