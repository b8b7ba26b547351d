use crate::cli::KnowledgeArgs;
use crate::infra::{knowledge_paths, load_engine, parse_symptom_belief};
use cf_diagnosis::config::AppConfig;
use cf_diagnosis::error::AppError;
use cf_diagnosis::inference::{format_results, Evaluation, Evidence, InferenceEngine};
use cf_diagnosis::knowledge::LabelDocument;
use cf_diagnosis::report::DiagnosisReport;
use cf_diagnosis::telemetry;
use chrono::Utc;
use clap::Args;

#[derive(Args, Debug)]
pub(crate) struct DiagnoseArgs {
    /// Observed symptom and its certainty as CODE=CF (repeatable), e.g. G01=0.8
    #[arg(long = "symptom", value_parser = parse_symptom_belief)]
    pub(crate) symptoms: Vec<(String, f64)>,
    #[command(flatten)]
    pub(crate) knowledge: KnowledgeArgs,
    /// Print the diagnosis as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
    /// Include the score of every rule in the text output
    #[arg(long)]
    pub(crate) explain: bool,
}

#[derive(Args, Debug)]
pub(crate) struct QuestionnaireArgs {
    #[command(flatten)]
    pub(crate) knowledge: KnowledgeArgs,
}

pub(crate) fn run_diagnose(args: DiagnoseArgs) -> Result<(), AppError> {
    let DiagnoseArgs {
        symptoms,
        knowledge,
        json,
        explain,
    } = args;

    let config = AppConfig::load()?;
    telemetry::init_stderr(&config.telemetry)?;
    let engine = load_engine(&knowledge_paths(&config.knowledge, &knowledge))?;
    let evidence = Evidence::from_pairs(symptoms)?;

    if json {
        let report = DiagnosisReport::new(engine.diagnose(&evidence), Utc::now());
        match serde_json::to_string_pretty(&report) {
            Ok(payload) => println!("{payload}"),
            Err(err) => println!("Diagnosis payload unavailable: {err}"),
        }
        return Ok(());
    }

    render_diagnosis(&engine, &evidence, explain);
    Ok(())
}

pub(crate) fn run_questionnaire(args: QuestionnaireArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init_stderr(&config.telemetry)?;
    let engine = load_engine(&knowledge_paths(&config.knowledge, &args.knowledge))?;
    render_questionnaire(engine.knowledge().labels());
    Ok(())
}

pub(crate) fn render_diagnosis(engine: &InferenceEngine, evidence: &Evidence, explain: bool) {
    let labels = engine.knowledge().labels();

    println!("Certainty factor diagnosis");
    if evidence.observed().count() == 0 {
        println!("Observed symptoms: none");
    } else {
        println!("Observed symptoms");
        for (symptom, cf) in evidence.observed() {
            let text = labels.symptom_text(symptom.as_str()).unwrap_or("unlabelled");
            println!("- {symptom}. {text}: {:.0}%", cf * 100.0);
        }
    }

    let evaluation = engine.evaluate(evidence);
    if explain {
        render_rule_trail(&evaluation, labels);
    }

    let results = format_results(&evaluation.combined, &labels.diseases);
    let report = DiagnosisReport::new(results, Utc::now());
    if let Some(message) = report.message {
        println!("\n{message}");
        return;
    }

    println!("\nDiagnosis");
    for result in &report.results {
        println!(
            "- Disease: {} | CF value: {:.3} | Percentage: {}% | Interpretation: {}",
            result.name, result.cf, result.percentage, result.interpretation
        );
    }
}

fn render_rule_trail(evaluation: &Evaluation, labels: &LabelDocument) {
    println!("\nRule scores");
    for (index, score) in evaluation.rule_scores.iter().enumerate() {
        let name = labels
            .disease_text(score.conclusion.as_str())
            .unwrap_or(score.conclusion.as_str());
        println!(
            "- rule #{index} -> {name}: {}/{} premises matched, cf {:.3} ({})",
            score.matched,
            score.premises,
            score.cf,
            score.interpretation.label()
        );
    }
}

pub(crate) fn render_questionnaire(labels: &LabelDocument) {
    println!("Symptom questionnaire");
    for (code, text) in &labels.symptoms {
        println!("- {code}. {text}");
    }

    println!("\nCertainty scale");
    for option in &labels.certainty_options {
        println!("- {:.1}: {}", option.value, option.text);
    }
}
