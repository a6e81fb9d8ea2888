use clap::CommandFactory;
use tracing::{info, warn};

use gradecalc::api::evaluate_to_path;
use gradecalc::core::params::EvaluationParams;

use super::args::CliArgs;
use super::errors::AppError;

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    if args.nsubs == 0 {
        eprintln!("{}", CliArgs::command().render_usage());
        return Err(AppError::ZeroSubjects.into());
    }

    let params = EvaluationParams {
        student_name: args.sname,
        tutor_name: args.tname,
        subjects: args.nsubs,
    };

    info!(
        "Evaluating {} subjects for student: {}",
        params.subjects, params.student_name
    );

    match evaluate_to_path(&args.marks, &params, &args.output) {
        Ok(report) => {
            print!("{}", report.text);
            info!("Report written to: {:?}", args.output);
            Ok(())
        }
        Err(e) => {
            warn!("Evaluation failed: {}", e);
            eprintln!("{}", CliArgs::command().render_usage());
            Err(e.into())
        }
    }
}
