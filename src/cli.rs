use std::path::PathBuf;

use clap::{Parser, Subcommand};
use codegen_lib::{Artifact, ArtifactKind, ERRORS_LOG_FILE, GenerationReport};

#[derive(Parser, Debug)]
#[command(name = "sheet-codegen")]
#[command(about = "Generate C# declarations from design spreadsheets")]
#[command(version)]
pub struct Args {
    /// Asset root holding Designs/ (workbooks) and Scripts/Contents/ (generated code)
    #[arg(long, default_value = "Assets", global = true)]
    pub root: PathBuf,

    /// Optional sheet name to read (if not specified, reads the first sheet)
    #[arg(long, global = true)]
    pub sheet_name: Option<String>,

    /// File that malformed row reports are appended to
    #[arg(long, default_value = ERRORS_LOG_FILE, global = true)]
    pub error_log: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Generate Consts.cs from Constants.xlsx
    Consts(PathOverrides),
    /// Generate Enums.cs from Enums.xlsx
    Enums(PathOverrides),
    /// Generate StringConst.cs from StringConst.xlsx
    Strings(PathOverrides),
    /// Generate all three files
    All,
}

#[derive(clap::Args, Debug, Default, PartialEq)]
pub struct PathOverrides {
    /// Workbook to read instead of the conventional one under --root
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// File to write instead of the conventional one under --root
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Args {
    /// Resolve the artifacts selected by the subcommand, in generation order
    pub fn artifacts(&self) -> Vec<Artifact> {
        let single = |kind: ArtifactKind, overrides: &PathOverrides| {
            let mut artifact = Artifact::conventional(kind, &self.root);
            if let Some(input) = &overrides.input {
                artifact.input = input.clone();
            }
            if let Some(output) = &overrides.output {
                artifact.output = output.clone();
            }
            vec![artifact]
        };

        let artifacts = match &self.command {
            Command::Consts(overrides) => single(ArtifactKind::ConstantList, overrides),
            Command::Enums(overrides) => single(ArtifactKind::GroupedEnum, overrides),
            Command::Strings(overrides) => single(ArtifactKind::StringConstantList, overrides),
            Command::All => ArtifactKind::ALL
                .iter()
                .map(|kind| Artifact::conventional(*kind, &self.root))
                .collect(),
        };

        artifacts
            .into_iter()
            .map(|artifact| artifact.with_error_log(&self.error_log))
            .collect()
    }
}

/// Generate every selected artifact, stopping at the first I/O failure
pub fn run(args: &Args) -> anyhow::Result<Vec<GenerationReport>> {
    let mut reports = Vec::new();
    let artifacts = args.artifacts();
    tracing::debug!(
        root = %args.root.display(),
        count = artifacts.len(),
        "selected artifacts"
    );

    for artifact in artifacts {
        let report = artifact.generate(args.sheet_name.as_deref())?;

        for diagnostic in &report.diagnostics {
            eprintln!(
                "Error: Unable to process row {} on line {}",
                diagnostic.row.describe(),
                diagnostic.line()
            );
        }
        if !report.diagnostics.is_empty() {
            eprintln!(
                "❌ Skipped {} malformed row(s). Check {} for details.",
                report.diagnostics.len(),
                artifact.error_log().display()
            );
        }
        println!(
            "✅ Generated {} ({} declarations)",
            report.output.display(),
            report.emitted
        );

        reports.push(report);
    }

    return Ok(reports);
}
