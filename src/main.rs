use clap::Parser;

use jobcmd::api::ApiClient;
use jobcmd::cli::{self, Cli, Commands};
use jobcmd::{Config, Session};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let mut session = Session::load(&config.data_dir);
    let mut api = ApiClient::new(&config.api_url, session.token().map(String::from))?;

    match cli.command {
        None => {
            // No subcommand provided - show interactive menu
            cli::run_menu(&mut api, &mut session)?;
        }
        Some(Commands::Login) => cli::run_login(&mut api, &mut session)?,
        Some(Commands::Register) => cli::run_register(&mut api, &mut session)?,
        Some(Commands::Logout) => cli::run_logout(&mut api, &mut session)?,
        Some(Commands::Jobs(args)) => cli::run_jobs(&mut api, &mut session, args.search)?,
        Some(Commands::Favorites) => cli::run_favorites(&mut api, &mut session)?,
        Some(Commands::Applications) => cli::run_applications(&mut api, &mut session)?,
        Some(Commands::Cv) => cli::run_cv(&mut api, &mut session)?,
        Some(Commands::Suggest) => cli::run_suggestions(&mut api, &mut session)?,
        Some(Commands::Profile) => cli::run_profile(&mut api, &mut session)?,
        Some(Commands::MyJobs) => cli::employer::run_employer_jobs(&mut api, &mut session)?,
        Some(Commands::Applicants) => {
            cli::employer::run_employer_applications(&mut api, &mut session)?
        }
        Some(Commands::Dashboard) => cli::admin::run_dashboard(&mut api, &mut session)?,
        Some(Commands::Users(args)) => {
            cli::admin::run_users(&mut api, &mut session, args.search, args.role)?
        }
        Some(Commands::Companies) => cli::admin::run_companies(&mut api, &mut session)?,
    }

    Ok(())
}
