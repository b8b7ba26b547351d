use crate::console::{run_diagnose, run_questionnaire, DiagnoseArgs, QuestionnaireArgs};
use crate::server;
use cf_diagnosis::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Certainty Factor Diagnosis",
    about = "Serve or run the certainty-factor symptom diagnosis engine from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Evaluate a set of symptom certainties and print the ranked diagnosis
    Diagnose(DiagnoseArgs),
    /// List the symptom questions and the certainty scale
    Questionnaire(QuestionnaireArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    #[command(flatten)]
    pub(crate) knowledge: KnowledgeArgs,
}

/// Knowledge document locations shared by every command.
#[derive(Args, Debug, Default, Clone)]
pub(crate) struct KnowledgeArgs {
    /// Label document (symptoms, diseases, certainty options)
    #[arg(long)]
    pub(crate) labels: Option<std::path::PathBuf>,
    /// Rule document
    #[arg(long)]
    pub(crate) rules: Option<std::path::PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Diagnose(args) => run_diagnose(args),
        Command::Questionnaire(args) => run_questionnaire(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnose_accepts_repeated_symptoms() {
        let cli = Cli::try_parse_from([
            "cf-diagnosis-api",
            "diagnose",
            "--symptom",
            "G01=0.8",
            "--symptom",
            "G04=1",
            "--rules",
            "kb/rules.json",
        ])
        .expect("arguments parse");

        match cli.command {
            Some(Command::Diagnose(args)) => {
                assert_eq!(
                    args.symptoms,
                    vec![("G01".to_string(), 0.8), ("G04".to_string(), 1.0)]
                );
                assert_eq!(
                    args.knowledge.rules,
                    Some(std::path::PathBuf::from("kb/rules.json"))
                );
                assert!(args.knowledge.labels.is_none());
            }
            other => panic!("expected diagnose command, got {other:?}"),
        }
    }

    #[test]
    fn malformed_symptom_is_rejected_by_the_parser() {
        let result = Cli::try_parse_from(["cf-diagnosis-api", "diagnose", "--symptom", "G01"]);
        assert!(result.is_err());
    }

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["cf-diagnosis-api"]).expect("no arguments parse");
        assert!(cli.command.is_none());
    }
}
