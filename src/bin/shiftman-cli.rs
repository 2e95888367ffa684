#![forbid(unsafe_code)]
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use shiftman::{
    io,
    script::{self, Response},
    RosterOptions, ShiftManService,
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI du roster hebdomadaire (rejeu de scripts de requêtes)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Refuse les affectations de personnes inconnues et les shifts sans horaires
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Args, Debug)]
struct SessionArgs {
    /// Script JSON (tableau de requêtes)
    #[arg(long)]
    script: String,

    /// Crée le roster avant le script
    #[arg(long)]
    shop: Option<String>,

    /// CSV `given_name,family_name` enregistré après création du roster
    #[arg(long, requires = "shop")]
    staff_csv: Option<String>,

    /// Export CSV des shifts en fin de session
    #[arg(long)]
    out_csv: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rejouer un script et afficher chaque réponse (une ligne JSON par requête)
    Run(SessionArgs),

    /// Rejouer un script puis afficher le bilan des problèmes
    Check(SessionArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let options = if cli.strict {
        RosterOptions::strict()
    } else {
        RosterOptions::default()
    };
    let mut service = ShiftManService::with_options(options);

    let code = match cli.cmd {
        Commands::Run(args) => {
            let responses = run_session(&mut service, &args)?;
            for response in &responses {
                println!("{}", serde_json::to_string(response)?);
            }
            let failures = responses.iter().filter(|r| r.is_error()).count();
            if failures > 0 {
                eprintln!("{failures} request(s) failed");
                // Code 2 = WARNING/INCOMPLETE
                2
            } else {
                0
            }
        }
        Commands::Check(args) => {
            run_session(&mut service, &args)?;
            let roster = service.roster().context("script did not create a roster")?;
            if roster.report().is_clean() {
                println!("OK: no roster issues");
                0
            } else {
                println!("{}", service.report_roster_issues());
                2
            }
        }
    };

    std::process::exit(code);
}

fn run_session(service: &mut ShiftManService, args: &SessionArgs) -> Result<Vec<Response>> {
    let requests = script::load_script(&args.script)?;

    if let Some(shop) = &args.shop {
        let status = service.new_roster(shop);
        if !status.is_empty() {
            anyhow::bail!("{status}");
        }
    }
    if let Some(path) = &args.staff_csv {
        let records = io::import_staff_csv(path)?;
        let roster = service.roster_mut().context("no roster to register staff into")?;
        io::register_staff_records(roster, &records)?;
    }

    let responses = script::replay(service, &requests);

    if let Some(path) = &args.out_csv {
        let roster = service.roster().context("script did not create a roster")?;
        io::export_shifts_csv(path, roster)?;
    }
    Ok(responses)
}
