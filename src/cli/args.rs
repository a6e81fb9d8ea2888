use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gradecalc", version, about = "GRADECALC CLI")]
pub struct CliArgs {
    /// Name of the student
    #[arg(short = 's', long, default_value = "abc")]
    pub sname: String,

    /// Name of the tutor
    #[arg(short = 't', long, default_value = "xyz")]
    pub tname: String,

    /// No of subjects for the given semester
    #[arg(short = 'n', long, default_value_t = 3)]
    pub nsubs: usize,

    /// Total marks in the semester, one space-separated obtained/actual
    /// token per subject (both numbers 1-100), e.g. "90/100 75/100"
    #[arg(short = 'm', long, default_value = "100/100 100/100 100/100")]
    pub marks: String,

    /// Output report filename, overwritten on every run
    #[arg(short = 'o', long, default_value = "output.txt")]
    pub output: PathBuf,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_explicit_arguments() {
        let args = CliArgs::parse_from([
            "gradecalc",
            "--sname",
            "Someone",
            "--tname",
            "Some Tutor",
            "--nsubs",
            "2",
            "--marks",
            "90/100 75/100",
        ]);

        assert_eq!(args.sname, "Someone");
        assert_eq!(args.tname, "Some Tutor");
        assert_eq!(args.nsubs, 2);
        assert_eq!(args.marks, "90/100 75/100");
        assert_eq!(args.output, PathBuf::from("output.txt"));
    }

    #[test]
    fn applies_defaults_when_absent() {
        let args = CliArgs::parse_from(["gradecalc"]);

        assert_eq!(args.sname, "abc");
        assert_eq!(args.tname, "xyz");
        assert_eq!(args.nsubs, 3);
        assert_eq!(args.marks, "100/100 100/100 100/100");
        assert!(!args.log);
    }
}
